//! FIFO queues.
//!
//! This module provides two first-in-first-out queues with the same surface:
//!
//! - [`Queue`]: backed by a growable ring buffer, O(1) at both ends
//! - [`TwoStackQueue`]: built from two [`Stack`]s, amortized O(1) dequeue
//!
//! # Two-Stack Queue
//!
//! Enqueued elements are pushed onto the `inbox` stack. A dequeue pops from
//! the `outbox` stack; when the outbox is empty, the whole inbox is first
//! poured into it, which reverses the arrival order so the oldest element
//! ends on top. Each element crosses from inbox to outbox exactly once, so a
//! sequence of `n` operations costs O(n) in total.
//!
//! ```text
//! enqueue 1, 2, 3      inbox: [1, 2, 3]  outbox: []
//! dequeue -> 1         inbox: []         outbox: [3, 2]
//! enqueue 4            inbox: [4]        outbox: [3, 2]
//! queue order (front to rear): reverse(outbox) ++ inbox = [2, 3, 4]
//! ```

use std::collections::VecDeque;
use std::fmt;

use super::Stack;
use crate::state::{StateTransfer, StructureState};

// =============================================================================
// Queue Definition
// =============================================================================

/// A first-in-first-out queue backed by a ring buffer.
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::structures::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.size(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Queue<T> {
    /// Elements from front to rear.
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    /// Creates a new empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Adds an element at the rear.
    #[inline]
    pub fn enqueue(&mut self, element: T) {
        self.items.push_back(element);
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns the front element without removing it.
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Returns `true` if the queue contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements in the queue.
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the elements from front to rear.
    #[inline]
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a front-to-rear copy of the elements.
    #[must_use]
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }
}

impl<T: Clone> StateTransfer for Queue<T> {
    type Element = T;

    fn get_state(&self) -> StructureState<T> {
        StructureState::new(self.to_sequence())
    }

    fn set_state(&mut self, state: StructureState<T>) {
        self.clear();
        for element in state.into_items() {
            self.enqueue(element);
        }
    }
}

impl<T> Default for Queue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(formatter, self.iter())
    }
}

// =============================================================================
// TwoStackQueue Definition
// =============================================================================

/// A first-in-first-out queue built from two LIFO stacks.
///
/// The logical order, read front to rear, is `reverse(outbox) ++ inbox`.
///
/// # Time Complexity
///
/// | Operation | Complexity       |
/// |-----------|------------------|
/// | `enqueue` | O(1) amortized   |
/// | `dequeue` | O(1) amortized   |
/// | `front`   | O(1)             |
/// | `size`    | O(1)             |
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::structures::TwoStackQueue;
///
/// let mut queue: TwoStackQueue<i32> = (1..=3).collect();
/// assert_eq!(queue.dequeue(), Some(1));
/// queue.enqueue(4);
/// assert_eq!(queue.to_sequence(), vec![2, 3, 4]);
/// ```
#[derive(Clone)]
pub struct TwoStackQueue<T> {
    /// Receives every enqueued element.
    inbox: Stack<T>,
    /// Serves dequeues; its top is the front of the queue.
    outbox: Stack<T>,
}

impl<T> TwoStackQueue<T> {
    /// Creates a new empty queue.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inbox: Stack::new(),
            outbox: Stack::new(),
        }
    }

    /// Adds an element at the rear.
    #[inline]
    pub fn enqueue(&mut self, element: T) {
        self.inbox.push(element);
    }

    /// Removes and returns the front element, or `None` if the queue is empty.
    ///
    /// When the outbox is empty, every inbox element is moved to the outbox
    /// first.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.outbox.is_empty() {
            while let Some(element) = self.inbox.pop() {
                self.outbox.push(element);
            }
        }
        self.outbox.pop()
    }

    /// Returns the front element without moving anything between stacks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsviz_engine::structures::TwoStackQueue;
    ///
    /// let mut queue = TwoStackQueue::new();
    /// assert_eq!(queue.front(), None);
    /// queue.enqueue('a');
    /// queue.enqueue('b');
    /// assert_eq!(queue.front(), Some(&'a'));
    /// ```
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.outbox.peek().or_else(|| self.inbox.iter().next())
    }

    /// Returns `true` if both stacks are empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    /// Returns the number of elements across both stacks.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.inbox.size() + self.outbox.size()
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        self.inbox.clear();
        self.outbox.clear();
    }

    /// Returns an iterator over the elements from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.outbox.iter().rev().chain(self.inbox.iter())
    }

    /// Returns a front-to-rear copy of the elements.
    #[must_use]
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns the inbox stack, bottom to top.
    #[inline]
    #[must_use]
    pub const fn inbox(&self) -> &Stack<T> {
        &self.inbox
    }

    /// Returns the outbox stack, bottom to top.
    #[inline]
    #[must_use]
    pub const fn outbox(&self) -> &Stack<T> {
        &self.outbox
    }
}

impl<T: Clone> StateTransfer for TwoStackQueue<T> {
    type Element = T;

    fn get_state(&self) -> StructureState<T> {
        StructureState::new(self.to_sequence())
    }

    fn set_state(&mut self, state: StructureState<T>) {
        self.clear();
        for element in state.into_items() {
            self.enqueue(element);
        }
    }
}

impl<T> Default for TwoStackQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for TwoStackQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inbox: iter.into_iter().collect(),
            outbox: Stack::new(),
        }
    }
}

impl<T> Extend<T> for TwoStackQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inbox.extend(iter);
    }
}

/// Two queues are equal when they hold the same elements in the same logical
/// order, however those elements are split between the stacks.
impl<T: PartialEq> PartialEq for TwoStackQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for TwoStackQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for TwoStackQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for TwoStackQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_sequence(formatter, self.iter())
    }
}

#[cfg(feature = "serde")]
crate::state::impl_serde_via_state!(Queue);

#[cfg(feature = "serde")]
crate::state::impl_serde_via_state!(TwoStackQueue);

fn write_sequence<'a, T, I>(formatter: &mut fmt::Formatter<'_>, elements: I) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: Iterator<Item = &'a T>,
{
    write!(formatter, "[")?;
    for (index, element) in elements.enumerate() {
        if index > 0 {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{element}")?;
    }
    write!(formatter, "]")
}

// =============================================================================
// Tests
// =============================================================================
