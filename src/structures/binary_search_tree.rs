//! Unbalanced binary search tree.
//!
//! This module provides [`BinarySearchTree`], an ordered, duplicate-free tree
//! in which every node exclusively owns its two optional children.
//!
//! # Overview
//!
//! For every node, all keys in its left subtree are strictly smaller and all
//! keys in its right subtree are strictly greater. Inserting a key that is
//! already present does nothing. The tree never rebalances itself; the only
//! way to get a balanced tree is [`BinarySearchTree::build_balanced_from_sorted`].
//!
//! - O(h) `insert`, `search` and `delete`, where h is the height
//! - O(n) inorder, preorder and postorder traversals
//! - O(n) balanced construction from sorted input
//!
//! # Deletion
//!
//! A node with at most one child is replaced by that child. A node with two
//! children takes over the key of its inorder successor (the leftmost node
//! of its right subtree), and the successor's original node, which has no
//! left child, is spliced out.
//!
//! ```text
//!        5                    6
//!       / \     delete 5     / \
//!      3   8    ------->    3   8
//!         / \                  / \
//!        6   9                7   9
//!         \
//!          7
//! ```
//!
//! # Examples
//!
//! ```rust
//! use dsviz_engine::structures::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! for key in [5, 3, 8, 1, 4] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.inorder_traversal(), vec![1, 3, 4, 5, 8]);
//! assert_eq!(tree.preorder_traversal(), vec![5, 3, 1, 4, 8]);
//!
//! assert!(tree.delete(&3));
//! assert!(!tree.search(&3));
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::state::{StateTransfer, StructureState};

// =============================================================================
// Error Definition
// =============================================================================

/// Errors returned when building a tree from a prepared sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The element at `index` is not strictly greater than its predecessor.
    UnsortedInput {
        /// Position of the first out-of-order element.
        index: usize,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsortedInput { index } => write!(
                formatter,
                "input is not strictly increasing at index {index}"
            ),
        }
    }
}

impl std::error::Error for TreeError {}

// =============================================================================
// Node Definition
// =============================================================================

type Subtree<T> = Option<Box<Node<T>>>;

struct Node<T> {
    key: T,
    left: Subtree<T>,
    right: Subtree<T>,
}

impl<T> Node<T> {
    const fn leaf(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

#[derive(Clone, Copy)]
enum Traversal {
    Inorder,
    Preorder,
    Postorder,
}

// =============================================================================
// BinarySearchTree Definition
// =============================================================================

/// An unbalanced binary search tree without duplicate keys.
///
/// # Time Complexity
///
/// | Operation                    | Complexity |
/// |------------------------------|------------|
/// | `insert`                     | O(h)       |
/// | `search`                     | O(h)       |
/// | `delete`                     | O(h)       |
/// | traversals                   | O(n)       |
/// | `build_balanced_from_sorted` | O(n)       |
/// | `size`                       | O(1)       |
pub struct BinarySearchTree<T> {
    root: Subtree<T>,
    /// Number of nodes in the tree.
    length: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new empty tree.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the key stored at the root.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.key)
    }

    /// Returns the smallest key.
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// Returns the largest key.
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Returns `true` if the tree has no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of nodes.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.length
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// An empty tree has height 0 and a single node has height 1. The tree
    /// is walked level by level, so list-shaped trees do not recurse.
    #[must_use]
    pub fn height(&self) -> usize {
        let mut level: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| [node.left.as_deref(), node.right.as_deref()])
                .flatten()
                .collect();
        }
        height
    }

    /// Returns `true` if, at every node, the heights of the two subtrees
    /// differ by at most one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsviz_engine::structures::BinarySearchTree;
    ///
    /// let chain: BinarySearchTree<i32> = (1..=3).collect();
    /// assert!(!chain.is_balanced());
    ///
    /// let balanced = BinarySearchTree::build_balanced_from_sorted(&[1, 2, 3]).unwrap();
    /// assert!(balanced.is_balanced());
    /// ```
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        // Postorder over child slots: each finished node pops the heights of
        // its two children and pushes its own.
        let mut pending: Vec<(Option<&Node<T>>, bool)> = vec![(self.root.as_deref(), false)];
        let mut heights: Vec<usize> = Vec::new();
        while let Some((slot, expanded)) = pending.pop() {
            let Some(node) = slot else {
                heights.push(0);
                continue;
            };
            if expanded {
                let right = heights.pop().unwrap_or(0);
                let left = heights.pop().unwrap_or(0);
                if left.abs_diff(right) > 1 {
                    return false;
                }
                heights.push(1 + left.max(right));
            } else {
                pending.push((slot, true));
                pending.push((node.right.as_deref(), false));
                pending.push((node.left.as_deref(), false));
            }
        }
        true
    }

    /// Removes all nodes.
    ///
    /// Nodes are detached through an explicit work list so that degenerate
    /// (list-shaped) trees do not recurse on drop.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.length = 0;
    }

    /// Collects key references in `order` using an explicit work stack, so
    /// the walk depth is bounded by heap memory rather than the call stack.
    fn traverse(&self, order: Traversal) -> Vec<&T> {
        let mut keys = Vec::with_capacity(self.length);
        let mut pending: Vec<&Node<T>> = Vec::new();
        match order {
            Traversal::Inorder => {
                let mut current = self.root.as_deref();
                loop {
                    while let Some(node) = current {
                        pending.push(node);
                        current = node.left.as_deref();
                    }
                    let Some(node) = pending.pop() else {
                        break;
                    };
                    keys.push(&node.key);
                    current = node.right.as_deref();
                }
            }
            Traversal::Preorder => {
                pending.extend(self.root.as_deref());
                while let Some(node) = pending.pop() {
                    keys.push(&node.key);
                    pending.extend(node.right.as_deref());
                    pending.extend(node.left.as_deref());
                }
            }
            Traversal::Postorder => {
                // node, right, left reversed is left, right, node
                pending.extend(self.root.as_deref());
                while let Some(node) = pending.pop() {
                    keys.push(&node.key);
                    pending.extend(node.left.as_deref());
                    pending.extend(node.right.as_deref());
                }
                keys.reverse();
            }
        }
        keys
    }

    /// Returns the keys in left, node, right order, which is ascending.
    #[must_use]
    pub fn inorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.traverse(Traversal::Inorder).into_iter().cloned().collect()
    }

    /// Returns the keys in node, left, right order.
    #[must_use]
    pub fn preorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.traverse(Traversal::Preorder).into_iter().cloned().collect()
    }

    /// Returns the keys in left, right, node order.
    #[must_use]
    pub fn postorder_traversal(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.traverse(Traversal::Postorder).into_iter().cloned().collect()
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `key` as a new leaf.
    ///
    /// Returns `false` and leaves the tree unchanged if `key` is already
    /// present.
    pub fn insert(&mut self, key: T) -> bool {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            match key.cmp(&node.key) {
                Ordering::Less => cursor = &mut node.left,
                Ordering::Greater => cursor = &mut node.right,
                Ordering::Equal => return false,
            }
        }
        *cursor = Some(Box::new(Node::leaf(key)));
        self.length += 1;
        true
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn search(&self, key: &T) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Removes `key` from the tree.
    ///
    /// Returns `false` and leaves the tree unchanged if `key` is absent.
    pub fn delete(&mut self, key: &T) -> bool {
        let mut cursor = &mut self.root;
        loop {
            let ordering = match cursor.as_deref() {
                None => return false,
                Some(node) => key.cmp(&node.key),
            };
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = cursor else {
                return false;
            };
            cursor = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        let Some(mut node) = cursor.take() else {
            return false;
        };
        *cursor = match (node.left.take(), node.right.take()) {
            (None, remaining) | (remaining, None) => remaining,
            (Some(left), right) => {
                let mut right = right;
                if let Some(successor) = Self::detach_min(&mut right) {
                    node.key = successor;
                }
                node.left = Some(left);
                node.right = right;
                Some(node)
            }
        };
        self.length -= 1;
        true
    }

    /// Splices out the leftmost node of `subtree`, which has no left child,
    /// and returns its key.
    fn detach_min(subtree: &mut Subtree<T>) -> Option<T> {
        let mut cursor = subtree;
        while cursor.as_ref().is_some_and(|node| node.left.is_some()) {
            let Some(node) = cursor else {
                return None;
            };
            cursor = &mut node.left;
        }
        let node = cursor.take()?;
        let Node { key, right, .. } = *node;
        *cursor = right;
        Some(key)
    }
}

impl<T: Ord + Clone> BinarySearchTree<T> {
    /// Builds a minimal-height tree from strictly increasing keys.
    ///
    /// The root of every subtree spanning `[start, end]` is the element at
    /// `(start + end) / 2`, so even spans take their lower middle. The
    /// inorder traversal of the result equals `sorted`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::UnsortedInput`] if `sorted` is not strictly
    /// increasing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsviz_engine::structures::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::build_balanced_from_sorted(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
    /// assert_eq!(tree.root(), Some(&4));
    /// assert_eq!(tree.height(), 3);
    /// assert_eq!(tree.preorder_traversal(), vec![4, 2, 1, 3, 6, 5, 7]);
    /// ```
    pub fn build_balanced_from_sorted(sorted: &[T]) -> Result<Self, TreeError> {
        fn build<T: Clone>(span: &[T]) -> Subtree<T> {
            if span.is_empty() {
                return None;
            }
            let middle = (span.len() - 1) / 2;
            Some(Box::new(Node {
                key: span[middle].clone(),
                left: build(&span[..middle]),
                right: build(&span[middle + 1..]),
            }))
        }

        if let Some(index) = sorted.windows(2).position(|pair| pair[0] >= pair[1]) {
            tracing::debug!(index = index + 1, "rejected unsorted balanced-tree input");
            return Err(TreeError::UnsortedInput { index: index + 1 });
        }

        Ok(Self {
            root: build(sorted),
            length: sorted.len(),
        })
    }
}

// =============================================================================
// State Transfer
// =============================================================================

/// The canonical order is preorder: re-inserting a preorder sequence with
/// [`BinarySearchTree::insert`] reproduces the same shape.
impl<T: Ord + Clone> StateTransfer for BinarySearchTree<T> {
    type Element = T;

    fn get_state(&self) -> StructureState<T> {
        StructureState::new(self.preorder_traversal())
    }

    fn set_state(&mut self, state: StructureState<T>) {
        self.clear();
        for key in state.into_items() {
            self.insert(key);
        }
    }
}

#[cfg(feature = "serde")]
crate::state::impl_serde_via_state!(BinarySearchTree, Ord);

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for BinarySearchTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    /// Inserts the keys in iteration order; duplicates are skipped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T: Ord + Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        Self::from_state(self.get_state())
    }
}

/// Trees are equal when they have the same shape and keys, which is the
/// case exactly when their preorder traversals agree.
impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length
            && self.traverse(Traversal::Preorder) == other.traverse(Traversal::Preorder)
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BinarySearchTree")
            .field("size", &self.length)
            .field("preorder", &self.traverse(Traversal::Preorder))
            .finish()
    }
}

/// Formats the keys in ascending order, e.g. `[1, 2, 3]`.
impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        for (index, key) in self.traverse(Traversal::Inorder).into_iter().enumerate() {
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
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
    use rstest::{fixture, rstest};

    ///        50
    ///      /    \
    ///    30      70
    ///   /  \    /  \
    ///  20  40  60  80
    #[fixture]
    fn full_tree() -> BinarySearchTree<i32> {
        [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
    }

    // =========================================================================
    // Display Tests
    // =========================================================================

    #[rstest]
    fn test_display_is_ascending(full_tree: BinarySearchTree<i32>) {
        assert_eq!(format!("{full_tree}"), "[20, 30, 40, 50, 60, 70, 80]");
    }

    #[rstest]
    fn test_display_empty_tree() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::new();
        assert_eq!(format!("{tree}"), "[]");
    }

    // =========================================================================
    // Insert and Search Tests
    // =========================================================================

    #[rstest]
    fn test_insert_duplicate_is_noop(mut full_tree: BinarySearchTree<i32>) {
        let before = full_tree.preorder_traversal();
        assert!(!full_tree.insert(40));
        assert_eq!(full_tree.size(), 7);
        assert_eq!(full_tree.preorder_traversal(), before);
    }

    #[rstest]
    #[case(50, true)]
    #[case(20, true)]
    #[case(80, true)]
    #[case(55, false)]
    #[case(0, false)]
    fn test_search(full_tree: BinarySearchTree<i32>, #[case] key: i32, #[case] found: bool) {
        assert_eq!(full_tree.search(&key), found);
    }

    // =========================================================================
    // Traversal Tests
    // =========================================================================

    #[rstest]
    fn test_traversals(full_tree: BinarySearchTree<i32>) {
        assert_eq!(full_tree.inorder_traversal(), vec![20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(full_tree.preorder_traversal(), vec![50, 30, 20, 40, 70, 60, 80]);
        assert_eq!(full_tree.postorder_traversal(), vec![20, 40, 30, 60, 80, 70, 50]);
    }

    // =========================================================================
    // Delete Tests
    // =========================================================================

    #[rstest]
    fn test_delete_leaf(mut full_tree: BinarySearchTree<i32>) {
        assert!(full_tree.delete(&20));
        assert_eq!(full_tree.preorder_traversal(), vec![50, 30, 40, 70, 60, 80]);
    }

    #[rstest]
    fn test_delete_node_with_one_child(mut full_tree: BinarySearchTree<i32>) {
        assert!(full_tree.delete(&20));
        assert!(full_tree.delete(&30));
        assert_eq!(full_tree.preorder_traversal(), vec![50, 40, 70, 60, 80]);
    }

    #[rstest]
    fn test_delete_node_with_two_children_uses_successor(mut full_tree: BinarySearchTree<i32>) {
        assert!(full_tree.delete(&50));
        assert_eq!(full_tree.root(), Some(&60));
        assert_eq!(full_tree.preorder_traversal(), vec![60, 30, 20, 40, 70, 80]);
        assert_eq!(full_tree.size(), 6);
    }

    #[rstest]
    fn test_delete_successor_with_right_child() {
        let mut tree: BinarySearchTree<i32> = [5, 3, 8, 6, 9, 7].into_iter().collect();
        assert!(tree.delete(&5));
        assert_eq!(tree.preorder_traversal(), vec![6, 3, 8, 7, 9]);
    }

    #[rstest]
    fn test_delete_absent_key(mut full_tree: BinarySearchTree<i32>) {
        let before = full_tree.preorder_traversal();
        assert!(!full_tree.delete(&45));
        assert_eq!(full_tree.size(), 7);
        assert_eq!(full_tree.preorder_traversal(), before);
    }

    #[rstest]
    fn test_delete_last_node_empties_tree() {
        let mut tree: BinarySearchTree<i32> = std::iter::once(1).collect();
        assert!(tree.delete(&1));
        assert!(tree.is_empty());
        assert_eq!(tree.root(), None);
    }

    // =========================================================================
    // Shape Tests
    // =========================================================================

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![1], 1)]
    #[case(vec![2, 1, 3], 2)]
    #[case(vec![1, 2, 3, 4], 4)]
    fn test_height(#[case] keys: Vec<i32>, #[case] height: usize) {
        let tree: BinarySearchTree<i32> = keys.into_iter().collect();
        assert_eq!(tree.height(), height);
    }

    #[rstest]
    fn test_min_and_max(full_tree: BinarySearchTree<i32>) {
        assert_eq!(full_tree.min(), Some(&20));
        assert_eq!(full_tree.max(), Some(&80));
    }

    // =========================================================================
    // Degenerate Tree Tests
    // =========================================================================

    const DEGENERATE_SIZE: u32 = 100_000;

    /// Builds the right-leaning chain that ascending inserts produce, in
    /// linear time.
    fn right_chain(size: u32) -> BinarySearchTree<u32> {
        let mut root: Subtree<u32> = None;
        for key in (0..size).rev() {
            root = Some(Box::new(Node {
                key,
                left: None,
                right: root,
            }));
        }
        BinarySearchTree {
            root,
            length: size as usize,
        }
    }

    #[rstest]
    fn test_right_chain_matches_ascending_inserts() {
        let inserted: BinarySearchTree<u32> = (0..50).collect();
        assert_eq!(right_chain(50), inserted);
    }

    #[rstest]
    fn test_degenerate_tree_walks_without_recursion() {
        let tree = right_chain(DEGENERATE_SIZE);
        let expected: Vec<u32> = (0..DEGENERATE_SIZE).collect();

        let state = tree.get_state();
        assert_eq!(state.items(), expected.as_slice());
        assert_eq!(tree.inorder_traversal(), expected);
        assert_eq!(tree.postorder_traversal().first(), Some(&(DEGENERATE_SIZE - 1)));
        assert_eq!(tree.height(), DEGENERATE_SIZE as usize);
        assert!(!tree.is_balanced());
        assert_eq!(tree, right_chain(DEGENERATE_SIZE));
    }

    #[rstest]
    fn test_degenerate_tree_deletes_deepest_key() {
        let mut tree = right_chain(DEGENERATE_SIZE);
        assert!(tree.delete(&(DEGENERATE_SIZE - 1)));
        assert!(tree.delete(&(DEGENERATE_SIZE / 2)));
        assert!(!tree.delete(&DEGENERATE_SIZE));
        assert_eq!(tree.size(), DEGENERATE_SIZE as usize - 2);
        assert_eq!(tree.max(), Some(&(DEGENERATE_SIZE - 2)));
        assert!(!tree.search(&(DEGENERATE_SIZE / 2)));
    }

    #[rstest]
    fn test_degenerate_tree_snapshots_inside_command() {
        use crate::command::{Command, DataStructureCommand};

        let mut tree = right_chain(DEGENERATE_SIZE);
        let mut command = DataStructureCommand::new("Delete 0", |tree: &mut BinarySearchTree<u32>| {
            tree.delete(&0)
        });
        assert!(command.execute(&mut tree));
        assert_eq!(
            command.previous_state().map(StructureState::size),
            Some(DEGENERATE_SIZE as usize)
        );
        assert_eq!(tree.root(), Some(&1));
    }

    #[rstest]
    fn test_degenerate_tree_drops_without_recursion() {
        let tree = right_chain(DEGENERATE_SIZE);
        assert_eq!(tree.size(), DEGENERATE_SIZE as usize);
        drop(tree);
    }

    #[rstest]
    fn test_is_balanced_detects_deep_imbalance() {
        let mut tree = BinarySearchTree::build_balanced_from_sorted(&[2, 4, 6]).unwrap_or_default();
        assert!(tree.is_balanced());
        tree.insert(1);
        assert!(tree.is_balanced());
        tree.insert(0);
        assert!(!tree.is_balanced());
    }

    // =========================================================================
    // Balanced Construction Tests
    // =========================================================================

    #[rstest]
    fn test_build_balanced_seven() {
        let tree = BinarySearchTree::build_balanced_from_sorted(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(tree.root(), Some(&4));
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.inorder_traversal(), vec![1, 2, 3, 4, 5, 6, 7]);
        assert!(tree.is_balanced());
    }

    #[rstest]
    fn test_build_balanced_even_span_takes_lower_middle() {
        let tree = BinarySearchTree::build_balanced_from_sorted(&[1, 2, 3, 4]).unwrap();
        assert_eq!(tree.preorder_traversal(), vec![2, 1, 3, 4]);
    }

    #[rstest]
    fn test_build_balanced_empty() {
        let tree: BinarySearchTree<i32> = BinarySearchTree::build_balanced_from_sorted(&[]).unwrap();
        assert!(tree.is_empty());
    }

    #[rstest]
    #[case(vec![2, 1], 1)]
    #[case(vec![1, 2, 2], 2)]
    #[case(vec![1, 3, 5, 4], 3)]
    fn test_build_balanced_rejects_unsorted(#[case] keys: Vec<i32>, #[case] index: usize) {
        assert_eq!(
            BinarySearchTree::build_balanced_from_sorted(&keys).err(),
            Some(TreeError::UnsortedInput { index })
        );
    }

    // =========================================================================
    // State Tests
    // =========================================================================

    #[rstest]
    fn test_state_round_trip_preserves_shape(full_tree: BinarySearchTree<i32>) {
        let state = full_tree.get_state();
        assert_eq!(state.items(), &[50, 30, 20, 40, 70, 60, 80]);
        let restored = BinarySearchTree::from_state(state);
        assert_eq!(restored, full_tree);
    }

    #[rstest]
    fn test_clone_is_independent(full_tree: BinarySearchTree<i32>) {
        let mut copy = full_tree.clone();
        copy.delete(&50);
        assert!(full_tree.search(&50));
        assert_eq!(full_tree.size(), 7);
    }
}
