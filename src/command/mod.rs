//! Undoable commands over data structures.
//!
//! This module provides the command layer that wraps structure mutations in
//! undoable units:
//!
//! - [`Command`]: the execute / undo / description interface
//! - [`DataStructureCommand`]: the concrete command, closing over an
//!   operation, an optional inverse and a description
//! - [`History`]: a bounded, linear undo/redo history of executed commands
//!
//! # Snapshots
//!
//! A [`DataStructureCommand`] captures the target's
//! [`StructureState`](crate::state::StructureState) right before its
//! operation runs. Undo replays the explicit inverse if one was supplied and
//! otherwise restores that snapshot through
//! [`StateTransfer::set_state`]. Redo runs the operation again, so its side
//! effects (and its result) are produced anew.
//!
//! # Ownership
//!
//! Commands do not hold on to the structure they act upon. The caller owns
//! the structure and hands it to [`History::execute`], [`History::undo`] and
//! [`History::redo`] as `&mut S`, which keeps a single owner for the live
//! structure while the history owns the commands and their snapshots.
//!
//! # Examples
//!
//! ```rust
//! use dsviz_engine::command::{DataStructureCommand, History};
//! use dsviz_engine::structures::LinkedList;
//!
//! let mut list: LinkedList<i32> = (1..=3).collect();
//! let mut history = History::new();
//!
//! let removed = history.execute(
//!     &mut list,
//!     DataStructureCommand::new("Delete at 0", |list: &mut LinkedList<i32>| {
//!         list.delete_at_position(0)
//!     }),
//! );
//! assert_eq!(removed, Ok(1));
//! assert_eq!(history.current_description(), "Delete at 0");
//!
//! history.undo(&mut list);
//! assert_eq!(list.to_sequence(), vec![1, 2, 3]);
//! ```

use std::fmt;

use crate::state::{StateTransfer, StructureState};

mod history;

pub use history::DEFAULT_MAX_HISTORY;
pub use history::History;
pub use history::HistoryConfig;

// =============================================================================
// Command Trait
// =============================================================================

/// An undoable unit of work on a structure of type `S`.
pub trait Command<S> {
    /// The value produced by running the command.
    type Output;

    /// Runs the command against `target` and returns its result.
    fn execute(&mut self, target: &mut S) -> Self::Output;

    /// Reverts the effect of the most recent `execute` on `target`.
    fn undo(&mut self, target: &mut S);

    /// A human-readable description of the command.
    fn description(&self) -> &str;
}

// =============================================================================
// DataStructureCommand Definition
// =============================================================================

type Operation<S, R> = Box<dyn FnMut(&mut S) -> R>;
type Inverse<S> = Box<dyn FnMut(&mut S)>;
type Retain<R> = fn(&R) -> R;

/// A command built from a closure over the target structure.
///
/// On `execute` the command snapshots the target, runs the operation and
/// returns its result. Commands built with [`DataStructureCommand::new`]
/// also keep a copy of that result; [`DataStructureCommand::uncached`]
/// accepts operations whose result is not `Clone` and keeps none. On `undo`
/// it runs the inverse supplied through [`DataStructureCommand::with_inverse`],
/// or restores the snapshot when no inverse was given.
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::command::{Command, DataStructureCommand};
/// use dsviz_engine::structures::Stack;
///
/// let mut stack: Stack<i32> = (1..=3).collect();
/// let mut command = DataStructureCommand::new("Pop", |stack: &mut Stack<i32>| stack.pop());
///
/// assert_eq!(command.execute(&mut stack), Some(3));
/// assert_eq!(command.result(), Some(&Some(3)));
///
/// command.undo(&mut stack);
/// assert_eq!(stack.to_sequence(), vec![1, 2, 3]);
/// ```
pub struct DataStructureCommand<S: StateTransfer, R> {
    operation: Operation<S, R>,
    inverse: Option<Inverse<S>>,
    description: String,
    previous_state: Option<StructureState<S::Element>>,
    result: Option<R>,
    retain: Option<Retain<R>>,
}

impl<S: StateTransfer, R> DataStructureCommand<S, R> {
    /// Creates a command that runs `operation`, keeps a copy of its result
    /// and undoes by snapshot.
    pub fn new<F>(description: impl Into<String>, operation: F) -> Self
    where
        F: FnMut(&mut S) -> R + 'static,
        R: Clone,
    {
        Self::build(
            description.into(),
            Box::new(operation),
            Some(<R as Clone>::clone as Retain<R>),
        )
    }

    /// Creates a command whose result is handed back by `execute` but not
    /// kept, so `result` stays `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsviz_engine::command::{DataStructureCommand, History};
    /// use dsviz_engine::structures::Queue;
    ///
    /// struct Ticket(i32);
    ///
    /// let mut queue: Queue<i32> = (1..=2).collect();
    /// let mut history = History::new();
    /// let ticket = history.execute(
    ///     &mut queue,
    ///     DataStructureCommand::uncached("Take", |queue: &mut Queue<i32>| {
    ///         queue.dequeue().map(Ticket)
    ///     }),
    /// );
    /// assert_eq!(ticket.map(|Ticket(value)| value), Some(1));
    /// ```
    pub fn uncached<F>(description: impl Into<String>, operation: F) -> Self
    where
        F: FnMut(&mut S) -> R + 'static,
    {
        Self::build(description.into(), Box::new(operation), None)
    }

    fn build(description: String, operation: Operation<S, R>, retain: Option<Retain<R>>) -> Self {
        Self {
            operation,
            inverse: None,
            description,
            previous_state: None,
            result: None,
            retain,
        }
    }

    /// Supplies an explicit inverse, used by `undo` instead of the snapshot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsviz_engine::command::{Command, DataStructureCommand};
    /// use dsviz_engine::structures::Stack;
    ///
    /// let mut stack: Stack<i32> = Stack::new();
    /// let mut command = DataStructureCommand::new("Push 7", |stack: &mut Stack<i32>| stack.push(7))
    ///     .with_inverse(|stack: &mut Stack<i32>| {
    ///         stack.pop();
    ///     });
    ///
    /// command.execute(&mut stack);
    /// command.undo(&mut stack);
    /// assert!(stack.is_empty());
    /// ```
    #[must_use]
    pub fn with_inverse<G>(mut self, inverse: G) -> Self
    where
        G: FnMut(&mut S) + 'static,
    {
        self.inverse = Some(Box::new(inverse));
        self
    }

    /// Returns the result of the most recent execution, if this command
    /// keeps results.
    #[inline]
    #[must_use]
    pub const fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    /// Returns the snapshot captured before the most recent execution.
    #[inline]
    #[must_use]
    pub const fn previous_state(&self) -> Option<&StructureState<S::Element>> {
        self.previous_state.as_ref()
    }

    /// Returns `true` if an explicit inverse was supplied.
    #[inline]
    #[must_use]
    pub const fn has_inverse(&self) -> bool {
        self.inverse.is_some()
    }
}

impl<S, R> Command<S> for DataStructureCommand<S, R>
where
    S: StateTransfer,
    S::Element: Clone,
{
    type Output = R;

    fn execute(&mut self, target: &mut S) -> R {
        let snapshot = target.get_state();
        tracing::trace!(
            description = %self.description,
            size = snapshot.size(),
            "captured snapshot"
        );
        self.previous_state = Some(snapshot);

        let result = (self.operation)(target);
        self.result = self.retain.map(|retain| retain(&result));
        result
    }

    fn undo(&mut self, target: &mut S) {
        if let Some(inverse) = self.inverse.as_mut() {
            tracing::trace!(description = %self.description, "running inverse");
            inverse(target);
        } else if let Some(snapshot) = &self.previous_state {
            tracing::trace!(
                description = %self.description,
                size = snapshot.size(),
                "restoring snapshot"
            );
            target.set_state(snapshot.clone());
        }
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl<S, R> fmt::Debug for DataStructureCommand<S, R>
where
    S: StateTransfer,
    S::Element: fmt::Debug,
    R: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DataStructureCommand")
            .field("description", &self.description)
            .field("has_inverse", &self.inverse.is_some())
            .field("previous_state", &self.previous_state)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
