//! # dsviz-engine
//!
//! The data-structure engine behind an interactive data-structure teaching
//! tool, together with a generic undo/redo command layer.
//!
//! ## Overview
//!
//! The crate provides four classical structures and a structure-agnostic
//! history mechanism:
//!
//! - **Stack**: LIFO sequence with a recursive (call-stack based) reversal
//! - **Queue**: FIFO sequence, plus a queue built from two stacks
//! - **Linked List**: singly linked, position-addressable sequence
//! - **Binary Search Tree**: unbalanced, duplicate-free ordered tree with a
//!   balanced construction from sorted input
//! - **Command / History**: snapshot-based undoable commands with a bounded,
//!   redo-truncating history
//! - **Challenges**: goal-checked exercises over each structure, managed by
//!   structure kind
//!
//! Every structure implements [`state::StateTransfer`], which is the only
//! channel through which commands snapshot and restore state.
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization of structure states, structures and history
//!   configuration
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use dsviz_engine::prelude::*;
//!
//! let mut stack: Stack<i32> = Stack::new();
//! let mut history = History::new();
//!
//! history.execute(&mut stack, DataStructureCommand::new("Push 1", |stack: &mut Stack<i32>| stack.push(1)));
//! history.execute(&mut stack, DataStructureCommand::new("Push 2", |stack: &mut Stack<i32>| stack.push(2)));
//! assert_eq!(stack.to_sequence(), vec![1, 2]);
//!
//! assert!(history.undo(&mut stack));
//! assert_eq!(stack.to_sequence(), vec![1]);
//!
//! assert!(history.redo(&mut stack));
//! assert_eq!(stack.to_sequence(), vec![1, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use dsviz_engine::prelude::*;
/// ```
pub mod prelude {
    pub use crate::challenge::*;
    pub use crate::command::*;
    pub use crate::state::*;
    pub use crate::structures::*;
}

pub mod challenge;
pub mod command;
pub mod state;
pub mod structures;
