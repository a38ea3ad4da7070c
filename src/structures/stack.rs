//! LIFO stack.
//!
//! This module provides [`Stack`], a last-in-first-out sequence whose top
//! sits at the high-index end of a `Vec`.
//!
//! # Overview
//!
//! - O(1) amortized `push`
//! - O(1) `pop` and `peek`
//! - O(n²) recursive `reverse`
//!
//! `reverse` works only through `push` and `pop`: it pops the top, reverses
//! the rest recursively, then sinks the popped element to the bottom with a
//! second recursion. Elements in flight live on the call stack, so the
//! recursion depth is proportional to the stack size.
//!
//! # Examples
//!
//! ```rust
//! use dsviz_engine::structures::Stack;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.peek(), Some(&2));
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.size(), 1);
//! ```

use std::fmt;

use crate::state::{StateTransfer, StructureState};

/// A last-in-first-out stack.
///
/// # Time Complexity
///
/// | Operation     | Complexity     |
/// |---------------|----------------|
/// | `push`        | O(1) amortized |
/// | `pop`         | O(1)           |
/// | `peek`        | O(1)           |
/// | `size`        | O(1)           |
/// | `to_sequence` | O(n)           |
/// | `reverse`     | O(n²)          |
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    /// Elements from bottom (index 0) to top.
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new empty stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsviz_engine::structures::Stack;
    ///
    /// let stack: Stack<i32> = Stack::new();
    /// assert!(stack.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Pushes an element onto the top of the stack.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.items.push(element);
    }

    /// Removes and returns the top element.
    ///
    /// Returns `None` if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsviz_engine::structures::Stack;
    ///
    /// let mut stack: Stack<i32> = (1..=2).collect();
    /// assert_eq!(stack.pop(), Some(2));
    /// assert_eq!(stack.pop(), Some(1));
    /// assert_eq!(stack.pop(), None);
    /// ```
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// Returns `None` if the stack is empty.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Returns `true` if the stack contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements in the stack.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.items.len()
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the elements from bottom to top.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a bottom-to-top copy of the elements.
    ///
    /// The copy is independent of the stack: mutating it never affects the
    /// stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsviz_engine::structures::Stack;
    ///
    /// let stack: Stack<i32> = (1..=3).collect();
    /// let mut sequence = stack.to_sequence();
    /// sequence.clear();
    /// assert_eq!(stack.size(), 3);
    /// ```
    #[must_use]
    pub fn to_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Reverses the stack in place using only `push` and `pop`.
    ///
    /// Reversing twice restores the original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsviz_engine::structures::Stack;
    ///
    /// let mut stack: Stack<i32> = (1..=5).collect();
    /// stack.reverse();
    /// assert_eq!(stack.to_sequence(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        if let Some(top) = self.pop() {
            self.reverse();
            self.insert_at_bottom(top);
        }
    }

    /// Places `element` beneath every element currently on the stack.
    fn insert_at_bottom(&mut self, element: T) {
        match self.pop() {
            None => self.push(element),
            Some(top) => {
                self.insert_at_bottom(element);
                self.push(top);
            }
        }
    }
}

// =============================================================================
// State Transfer
// =============================================================================

impl<T: Clone> StateTransfer for Stack<T> {
    type Element = T;

    fn get_state(&self) -> StructureState<T> {
        StructureState::new(self.to_sequence())
    }

    fn set_state(&mut self, state: StructureState<T>) {
        self.clear();
        for element in state.into_items() {
            self.push(element);
        }
    }
}

#[cfg(feature = "serde")]
crate::state::impl_serde_via_state!(Stack);

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Stack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the elements in iteration order, so the last one ends on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_empty_stack() {
        let stack: Stack<i32> = Stack::new();
        assert_eq!(format!("{stack}"), "[]");
    }

    #[rstest]
    fn test_display_bottom_to_top() {
        let stack: Stack<i32> = (1..=3).collect();
        assert_eq!(format!("{stack}"), "[1, 2, 3]");
    }

    // =========================================================================
    // Basic Operations
    // =========================================================================

    #[rstest]
    fn test_push_then_peek_sees_latest() {
        let mut stack = Stack::new();
        stack.push("a");
        stack.push("b");
        assert_eq!(stack.peek(), Some(&"b"));
        assert_eq!(stack.size(), 2);
    }

    #[rstest]
    fn test_pop_and_peek_on_empty_return_none() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert!(stack.is_empty());
    }

    #[rstest]
    fn test_clear_empties_stack() {
        let mut stack: Stack<i32> = (1..=10).collect();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.size(), 0);
    }

    // =========================================================================
    // Reverse Tests
    // =========================================================================

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![7], vec![7])]
    #[case(vec![1, 2], vec![2, 1])]
    #[case(vec![1, 2, 3, 4, 5], vec![5, 4, 3, 2, 1])]
    fn test_reverse(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        let mut stack: Stack<i32> = input.into_iter().collect();
        stack.reverse();
        assert_eq!(stack.to_sequence(), expected);
    }

    #[rstest]
    fn test_insert_at_bottom_keeps_order_above() {
        let mut stack: Stack<i32> = (1..=3).collect();
        stack.insert_at_bottom(0);
        assert_eq!(stack.to_sequence(), vec![0, 1, 2, 3]);
    }

    // =========================================================================
    // State Tests
    // =========================================================================

    #[rstest]
    fn test_state_is_bottom_to_top() {
        let stack: Stack<i32> = (1..=3).collect();
        let state = stack.get_state();
        assert_eq!(state.items(), &[1, 2, 3]);
        assert_eq!(state.size(), 3);
    }

    #[rstest]
    fn test_set_state_replaces_content() {
        let mut stack: Stack<i32> = (10..=12).collect();
        stack.set_state(StructureState::new(vec![4, 5]));
        assert_eq!(stack.to_sequence(), vec![4, 5]);
        assert_eq!(stack.peek(), Some(&5));
    }
}
