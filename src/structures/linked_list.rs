//! Singly linked list.
//!
//! This module provides [`LinkedList`], a position-addressable sequence of
//! `Box`-owned nodes. Each node owns its successor, the list owns the head,
//! and there are no back-references, so the chain is always acyclic.
//!
//! # Overview
//!
//! - O(1) `insert_at_head`
//! - O(n) `insert_at_tail` (there is no tail pointer)
//! - O(p) `insert_at_position` and `delete_at_position`
//! - O(n) `delete`, `search` and `find_middle`
//!
//! # Examples
//!
//! ```rust
//! use dsviz_engine::structures::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.insert_at_tail(2);
//! list.insert_at_head(1);
//! list.insert_at_position(3, 2).unwrap();
//! assert_eq!(list.to_sequence(), vec![1, 2, 3]);
//!
//! assert!(list.delete(&2));
//! assert_eq!(list.search(&3), Some(1));
//! ```
//!
//! # Middle Detection
//!
//! [`LinkedList::find_middle`] walks two cursors from the head: the fast one
//! moves two nodes per step, the slow one a single node, and the walk stops
//! as soon as the fast cursor or its successor is missing. On even-length
//! lists the slow cursor ends on the second of the two middle nodes.
//!
//! ```text
//! [1, 2, 3, 4, 5]  slow: 1 -> 2 -> 3    fast: 1 -> 3 -> 5   middle = 3
//! [1, 2, 3, 4]     slow: 1 -> 2 -> 3    fast: 1 -> 3 -> nil middle = 3
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::state::{StateTransfer, StructureState};

// =============================================================================
// Error Definition
// =============================================================================

/// Errors returned by positional list operations.
///
/// The list is left unchanged whenever one of these is returned.
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::structures::{LinkedList, ListError};
///
/// let mut list: LinkedList<i32> = (1..=2).collect();
/// assert_eq!(
///     list.insert_at_position(9, 5),
///     Err(ListError::InvalidPosition { position: 5, size: 2 })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// The position lies outside the range accepted by the operation.
    InvalidPosition {
        /// The requested position.
        position: usize,
        /// The list size at the time of the request.
        size: usize,
    },
}

impl fmt::Display for ListError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPosition { position, size } => write!(
                formatter,
                "position {position} is out of range for a list of size {size}"
            ),
        }
    }
}

impl std::error::Error for ListError {}

// =============================================================================
// Node Definition
// =============================================================================

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    element: T,
    next: Link<T>,
}

// =============================================================================
// LinkedList Definition
// =============================================================================

/// A singly linked list.
///
/// # Time Complexity
///
/// | Operation            | Complexity |
/// |----------------------|------------|
/// | `insert_at_head`     | O(1)       |
/// | `insert_at_tail`     | O(n)       |
/// | `insert_at_position` | O(p)       |
/// | `delete`             | O(n)       |
/// | `delete_at_position` | O(p)       |
/// | `search`             | O(n)       |
/// | `find_middle`        | O(n)       |
/// | `size`               | O(1)       |
pub struct LinkedList<T> {
    head: Link<T>,
    /// Number of nodes reachable from `head`.
    length: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Inserts an element before the current head.
    pub fn insert_at_head(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { element, next }));
        self.length += 1;
    }

    /// Appends an element after the last node.
    ///
    /// Walks the whole chain to find the tail.
    pub fn insert_at_tail(&mut self, element: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node {
            element,
            next: None,
        }));
        self.length += 1;
    }

    /// Inserts an element so that it ends up at `position`.
    ///
    /// Valid positions are `0..=size`; `0` inserts at the head and `size`
    /// appends at the tail.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidPosition`] if `position > size`.
    pub fn insert_at_position(&mut self, element: T, position: usize) -> Result<(), ListError> {
        if position > self.length {
            tracing::debug!(position, size = self.length, "rejected list insert");
            return Err(ListError::InvalidPosition {
                position,
                size: self.length,
            });
        }

        let link = self.link_at_mut(position);
        let next = link.take();
        *link = Some(Box::new(Node { element, next }));
        self.length += 1;
        Ok(())
    }

    /// Removes the node at `position` and returns its element.
    ///
    /// Valid positions are `0..size`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidPosition`] if `position >= size`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsviz_engine::structures::LinkedList;
    ///
    /// let mut list: LinkedList<char> = "abc".chars().collect();
    /// assert_eq!(list.delete_at_position(1), Ok('b'));
    /// assert!(list.delete_at_position(2).is_err());
    /// ```
    pub fn delete_at_position(&mut self, position: usize) -> Result<T, ListError> {
        let size = self.length;
        let invalid = ListError::InvalidPosition { position, size };
        if position >= size {
            tracing::debug!(position, size, "rejected list delete");
            return Err(invalid);
        }

        let link = self.link_at_mut(position);
        let Some(node) = link.take() else {
            return Err(invalid);
        };
        let Node { element, next } = *node;
        *link = next;
        self.length -= 1;
        Ok(element)
    }

    /// Returns the link that holds the node at `position`.
    ///
    /// `position == size` yields the empty link after the tail.
    fn link_at_mut(&mut self, position: usize) -> &mut Link<T> {
        let mut cursor = &mut self.head;
        for _ in 0..position {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => break,
            }
        }
        cursor
    }

    /// Returns a reference to the element at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&T> {
        self.iter().nth(position)
    }

    /// Returns the element of the middle node, using the slow/fast cursor
    /// walk described in the module documentation.
    ///
    /// Returns `None` for an empty list.
    #[must_use]
    pub fn find_middle(&self) -> Option<&T> {
        let mut slow = self.head.as_deref()?;
        let mut fast = self.head.as_deref();

        while let Some(successor) = fast.and_then(|node| node.next.as_deref()) {
            slow = slow.next.as_deref()?;
            fast = successor.next.as_deref();
        }

        Some(&slow.element)
    }

    /// Returns `true` if the list contains no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the number of nodes.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.length
    }

    /// Removes all nodes.
    ///
    /// Nodes are unlinked one at a time so that long chains do not recurse
    /// on drop.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.length = 0;
    }

    /// Returns an iterator over the elements from head to tail.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// Returns a head-to-tail copy of the elements.
    #[must_use]
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the zero-based position of the first element equal to
    /// `element`, scanning from the head.
    #[must_use]
    pub fn search(&self, element: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == element)
    }

    /// Removes the first node whose element equals `element`.
    ///
    /// Returns `true` if a node was removed.
    pub fn delete(&mut self, element: &T) -> bool {
        self.search(element)
            .is_some_and(|position| self.delete_at_position(position).is_ok())
    }
}

// =============================================================================
// State Transfer
// =============================================================================

impl<T: Clone> StateTransfer for LinkedList<T> {
    type Element = T;

    fn get_state(&self) -> StructureState<T> {
        StructureState::new(self.to_sequence())
    }

    fn set_state(&mut self, state: StructureState<T>) {
        self.clear();
        for element in state.into_items() {
            self.insert_at_tail(element);
        }
    }
}

#[cfg(feature = "serde")]
crate::state::impl_serde_via_state!(LinkedList);

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of a [`LinkedList`].
pub struct LinkedListIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedListIterator<'_, T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    /// Builds the list head to tail in iteration order.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = iter.into_iter().collect();
        let mut list = Self::new();
        while let Some(element) = elements.pop() {
            list.insert_at_head(element);
        }
        list
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

/// Formats the chain as `[1 -> 2 -> 3]`.
impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                write!(formatter, " -> ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================
