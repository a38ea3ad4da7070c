//! Classical mutable data structures.
//!
//! This module provides the structures manipulated by the teaching
//! tool:
//!
//! - [`Stack`]: LIFO sequence with recursive reversal
//! - [`Queue`]: FIFO sequence backed by a ring buffer
//! - [`TwoStackQueue`]: FIFO sequence built from two [`Stack`]s
//! - [`LinkedList`]: Singly linked, position-addressable sequence
//! - [`BinarySearchTree`]: Unbalanced, duplicate-free ordered tree
//!
//! # Ownership
//!
//! Nodes of the linked list and the tree are owned through `Box`, so every
//! node has exactly one owner and no node is reachable from two parents.
//! None of the structures share storage with the snapshots taken from them.
//!
//! # Empty and Missing Values
//!
//! Operations on an empty structure and lookups of absent values report
//! through `Option` and `bool`, never through panics. Only out-of-range
//! positions and unsorted balanced-construction input carry an error type.
//!
//! # Examples
//!
//! ## `Stack`
//!
//! ```rust
//! use dsviz_engine::structures::Stack;
//!
//! let mut stack: Stack<i32> = (1..=3).collect();
//! assert_eq!(stack.pop(), Some(3));
//!
//! stack.reverse();
//! assert_eq!(stack.to_sequence(), vec![2, 1]);
//! ```
//!
//! ## `TwoStackQueue`
//!
//! ```rust
//! use dsviz_engine::structures::TwoStackQueue;
//!
//! let mut queue = TwoStackQueue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//! assert_eq!(queue.dequeue(), Some(1));
//! queue.enqueue(3);
//! assert_eq!(queue.dequeue(), Some(2));
//! assert_eq!(queue.dequeue(), Some(3));
//! ```
//!
//! ## `LinkedList`
//!
//! ```rust
//! use dsviz_engine::structures::LinkedList;
//!
//! let list: LinkedList<i32> = (1..=5).collect();
//! assert_eq!(list.find_middle(), Some(&3));
//! assert_eq!(list.search(&4), Some(3));
//! ```
//!
//! ## `BinarySearchTree`
//!
//! ```rust
//! use dsviz_engine::structures::BinarySearchTree;
//!
//! let tree = BinarySearchTree::build_balanced_from_sorted(&[1, 2, 3, 4, 5, 6, 7]).unwrap();
//! assert_eq!(tree.root(), Some(&4));
//! assert_eq!(tree.height(), 3);
//! ```

mod binary_search_tree;
mod linked_list;
mod queue;
mod stack;

pub use binary_search_tree::BinarySearchTree;
pub use binary_search_tree::TreeError;
pub use linked_list::LinkedList;
pub use linked_list::LinkedListIterator;
pub use linked_list::ListError;
pub use queue::Queue;
pub use queue::TwoStackQueue;
pub use stack::Stack;
