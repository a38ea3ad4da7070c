//! The built-in challenges, one per structure kind.

use super::Challenge;
use crate::structures::{BinarySearchTree, LinkedList, Stack, TwoStackQueue};

/// Values every built-in challenge starts from or aims for.
const FIVE: [i32; 5] = [1, 2, 3, 4, 5];

// =============================================================================
// Stack
// =============================================================================

/// Reverse a stack of `1..=5` so that 1 ends up on top.
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::challenge::{Challenge, ReverseStackChallenge};
///
/// let mut challenge = ReverseStackChallenge;
/// let mut stack = challenge.setup();
/// assert!(!challenge.validate(&stack));
///
/// stack.reverse();
/// assert!(challenge.validate(&stack));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseStackChallenge;

impl Challenge for ReverseStackChallenge {
    type Structure = Stack<i32>;

    fn name(&self) -> &str {
        "Reverse a Stack"
    }

    fn goal(&self) -> &str {
        "Stack should be [5, 4, 3, 2, 1] from bottom to top"
    }

    fn setup(&mut self) -> Stack<i32> {
        FIVE.into_iter().collect()
    }

    fn validate(&self, stack: &Stack<i32>) -> bool {
        stack.iter().copied().eq(FIVE.into_iter().rev())
    }
}

// =============================================================================
// Linked List
// =============================================================================

/// Locate the middle of `[1, 2, 3, 4, 5]` in a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindMiddleChallenge;

impl Challenge for FindMiddleChallenge {
    type Structure = LinkedList<i32>;

    fn name(&self) -> &str {
        "Find the Middle Node"
    }

    fn goal(&self) -> &str {
        "Find the middle element (3) of [1, 2, 3, 4, 5]"
    }

    fn setup(&mut self) -> LinkedList<i32> {
        FIVE.into_iter().collect()
    }

    fn validate(&self, list: &LinkedList<i32>) -> bool {
        list.find_middle() == Some(&3)
    }
}

// =============================================================================
// Queue
// =============================================================================

/// Enqueue 1, 2 and 3 into a two-stack queue and dequeue them all in FIFO
/// order.
///
/// Dequeued values are reported through
/// [`record_dequeue`](Self::record_dequeue).
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::challenge::{Challenge, QueueFromStacksChallenge};
///
/// let mut challenge = QueueFromStacksChallenge::new();
/// let mut queue = challenge.setup();
/// queue.extend([1, 2, 3]);
/// while let Some(value) = queue.dequeue() {
///     challenge.record_dequeue(value);
/// }
///
/// assert!(challenge.check_sequence());
/// assert!(challenge.validate(&queue));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueFromStacksChallenge {
    dequeued: Vec<i32>,
}

impl QueueFromStacksChallenge {
    const EXPECTED: [i32; 3] = [1, 2, 3];

    /// Creates the challenge with nothing recorded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dequeued: Vec::new(),
        }
    }

    /// Records a dequeued value.
    pub fn record_dequeue(&mut self, value: i32) {
        self.dequeued.push(value);
    }

    /// Returns the values recorded since the last setup.
    #[must_use]
    pub fn dequeued(&self) -> &[i32] {
        &self.dequeued
    }

    /// Returns `true` if exactly 1, 2 and 3 were dequeued, in that order.
    #[must_use]
    pub fn check_sequence(&self) -> bool {
        self.dequeued == Self::EXPECTED
    }
}

impl Challenge for QueueFromStacksChallenge {
    type Structure = TwoStackQueue<i32>;

    fn name(&self) -> &str {
        "Queue Using Two Stacks"
    }

    fn goal(&self) -> &str {
        "Enqueue 1, 2, 3 then dequeue all elements in order 1, 2, 3"
    }

    fn setup(&mut self) -> TwoStackQueue<i32> {
        self.dequeued.clear();
        TwoStackQueue::new()
    }

    fn validate(&self, queue: &TwoStackQueue<i32>) -> bool {
        queue.is_empty() && self.check_sequence()
    }

    fn record_output(&mut self, value: i32) {
        self.record_dequeue(value);
    }
}

// =============================================================================
// Binary Search Tree
// =============================================================================

/// Fill an empty tree with `1..=7` so that it ends up perfectly balanced.
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::challenge::{BalancedTreeChallenge, Challenge};
///
/// let mut challenge = BalancedTreeChallenge;
/// let mut tree = challenge.setup();
/// tree.extend([4, 2, 6, 1, 3, 5, 7]);
/// assert!(challenge.validate(&tree));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalancedTreeChallenge;

impl BalancedTreeChallenge {
    const KEYS: [i32; 7] = [1, 2, 3, 4, 5, 6, 7];
    const ROOT: i32 = 4;
}

impl Challenge for BalancedTreeChallenge {
    type Structure = BinarySearchTree<i32>;

    fn name(&self) -> &str {
        "Build a Balanced BST"
    }

    fn goal(&self) -> &str {
        "Create a balanced BST of height 3 holding 1 through 7, rooted at 4"
    }

    fn setup(&mut self) -> BinarySearchTree<i32> {
        BinarySearchTree::new()
    }

    fn validate(&self, tree: &BinarySearchTree<i32>) -> bool {
        tree.inorder_traversal() == Self::KEYS
            && tree.root() == Some(&Self::ROOT)
            && tree.is_balanced()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_reverse_stack_accepts_reversed() {
        let mut challenge = ReverseStackChallenge;
        let mut stack = challenge.setup();
        assert_eq!(stack.to_sequence(), vec![1, 2, 3, 4, 5]);
        assert!(!challenge.validate(&stack));

        stack.reverse();
        assert!(challenge.validate(&stack));
    }

    #[rstest]
    #[case(vec![5, 4, 3, 2])]
    #[case(vec![5, 4, 3, 2, 1, 0])]
    #[case(vec![])]
    fn test_reverse_stack_rejects_other_content(#[case] items: Vec<i32>) {
        let stack: Stack<i32> = items.into_iter().collect();
        assert!(!ReverseStackChallenge.validate(&stack));
    }

    #[rstest]
    fn test_find_middle_accepts_prepared_list() {
        let mut challenge = FindMiddleChallenge;
        let list = challenge.setup();
        assert_eq!(list.to_sequence(), vec![1, 2, 3, 4, 5]);
        assert!(challenge.validate(&list));
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4])]
    #[case(vec![])]
    fn test_find_middle_rejects_list_with_other_middle(#[case] items: Vec<i32>) {
        let list: LinkedList<i32> = items.into_iter().collect();
        assert!(!FindMiddleChallenge.validate(&list));
    }

    #[rstest]
    fn test_queue_accepts_fifo_dequeues() {
        let mut challenge = QueueFromStacksChallenge::new();
        let mut queue = challenge.setup();
        assert!(queue.is_empty());

        queue.extend([1, 2, 3]);
        while let Some(value) = queue.dequeue() {
            challenge.record_output(value);
        }

        assert_eq!(challenge.dequeued(), &[1, 2, 3]);
        assert!(challenge.validate(&queue));
    }

    #[rstest]
    fn test_queue_rejects_leftover_elements() {
        let mut challenge = QueueFromStacksChallenge::new();
        let mut queue = challenge.setup();
        queue.extend([1, 2, 3, 4]);
        for _ in 0..3 {
            if let Some(value) = queue.dequeue() {
                challenge.record_dequeue(value);
            }
        }

        assert!(challenge.check_sequence());
        assert!(!challenge.validate(&queue));
    }

    #[rstest]
    #[case(vec![1, 2])]
    #[case(vec![3, 2, 1])]
    #[case(vec![1, 2, 3, 3])]
    fn test_queue_rejects_wrong_sequence(#[case] recorded: Vec<i32>) {
        let mut challenge = QueueFromStacksChallenge::new();
        let queue = challenge.setup();
        for value in recorded {
            challenge.record_dequeue(value);
        }
        assert!(!challenge.check_sequence());
        assert!(!challenge.validate(&queue));
    }

    #[rstest]
    fn test_queue_setup_forgets_recorded_values() {
        let mut challenge = QueueFromStacksChallenge::new();
        let _ = challenge.setup();
        for value in [1, 2, 3] {
            challenge.record_dequeue(value);
        }
        assert!(challenge.check_sequence());

        let queue = challenge.setup();
        assert!(challenge.dequeued().is_empty());
        assert!(!challenge.validate(&queue));
    }

    #[rstest]
    fn test_balanced_tree_accepts_balanced_build() {
        let mut challenge = BalancedTreeChallenge;
        assert!(challenge.setup().is_empty());

        let tree = BinarySearchTree::build_balanced_from_sorted(&[1, 2, 3, 4, 5, 6, 7]);
        assert!(tree.is_ok_and(|tree| challenge.validate(&tree)));
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4, 5, 6, 7])]
    #[case(vec![4, 2, 6, 1, 3, 5])]
    #[case(vec![5, 3, 6, 2, 4, 7, 1])]
    #[case(vec![4, 1, 6, 2, 5, 7, 3])]
    fn test_balanced_tree_rejects(#[case] insertions: Vec<i32>) {
        let tree: BinarySearchTree<i32> = insertions.into_iter().collect();
        assert!(!BalancedTreeChallenge.validate(&tree));
    }
}
