//! Linear undo/redo history.
//!
//! [`History`] keeps executed commands in order together with a cursor that
//! marks the last applied one. Commands after the cursor can be redone.
//! Executing a new command after one or more undos discards them, so the
//! redo branch is always linear.
//!
//! ```text
//! execute A, B, C     [A, B, C]        cursor -> C
//! undo                [A, B, C]        cursor -> B   (C redoable)
//! execute D           [A, B, D]        cursor -> D   (C discarded)
//! ```
//!
//! The history is bounded by [`HistoryConfig::max_history`]. When an execute
//! pushes it past the bound, the oldest command is evicted and the cursor
//! shifts down by one.

use std::collections::VecDeque;
use std::fmt;

use super::Command;

/// Number of commands kept by [`HistoryConfig::default`].
pub const DEFAULT_MAX_HISTORY: usize = 50;

// =============================================================================
// HistoryConfig Definition
// =============================================================================

/// Configuration of a [`History`].
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::command::{History, HistoryConfig};
/// use dsviz_engine::structures::Stack;
///
/// let config = HistoryConfig::default().with_max_history(10);
/// let history: History<Stack<i32>> = History::with_config(config);
/// assert_eq!(history.max_history(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HistoryConfig {
    /// Maximum number of commands retained; older ones are evicted first.
    pub max_history: usize,
}

impl HistoryConfig {
    /// Returns a copy with a different capacity.
    #[inline]
    #[must_use]
    pub const fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }
}

impl Default for HistoryConfig {
    #[inline]
    fn default() -> Self {
        Self {
            max_history: DEFAULT_MAX_HISTORY,
        }
    }
}

// =============================================================================
// Type-Erased Entries
// =============================================================================

/// Object-safe view of a [`Command`] whose output is no longer needed.
trait HistoryEntry<S> {
    fn replay(&mut self, target: &mut S);
    fn revert(&mut self, target: &mut S);
    fn label(&self) -> &str;
}

impl<S, C: Command<S>> HistoryEntry<S> for C {
    fn replay(&mut self, target: &mut S) {
        let _ = self.execute(target);
    }

    fn revert(&mut self, target: &mut S) {
        self.undo(target);
    }

    fn label(&self) -> &str {
        self.description()
    }
}

// =============================================================================
// History Definition
// =============================================================================

/// A bounded, linear history of executed commands over structures of type
/// `S`.
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::command::{DataStructureCommand, History};
/// use dsviz_engine::structures::Stack;
///
/// fn push(value: i32) -> DataStructureCommand<Stack<i32>, ()> {
///     DataStructureCommand::new(format!("Push {value}"), move |stack: &mut Stack<i32>| {
///         stack.push(value);
///     })
/// }
///
/// let mut stack = Stack::new();
/// let mut history = History::new();
///
/// history.execute(&mut stack, push(1));
/// history.execute(&mut stack, push(2));
/// assert!(history.undo(&mut stack));
/// history.execute(&mut stack, push(3));
///
/// // The undone "Push 2" was discarded by "Push 3".
/// assert!(!history.redo(&mut stack));
/// assert_eq!(stack.to_sequence(), vec![1, 3]);
/// ```
pub struct History<S> {
    entries: VecDeque<Box<dyn HistoryEntry<S>>>,
    /// Number of entries currently applied; the cursor sits at `applied - 1`.
    applied: usize,
    config: HistoryConfig,
}

impl<S> History<S> {
    /// Creates an empty history with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    /// Creates an empty history with the given configuration.
    #[must_use]
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            entries: VecDeque::new(),
            applied: 0,
            config,
        }
    }

    /// Executes `command` against `target` and records it.
    ///
    /// Any redoable commands are discarded first. If the history then holds
    /// more than `max_history` commands, the oldest one is evicted.
    pub fn execute<C>(&mut self, target: &mut S, mut command: C) -> C::Output
    where
        C: Command<S> + 'static,
    {
        let discarded = self.entries.len() - self.applied;
        if discarded > 0 {
            tracing::debug!(discarded, "discarding redo branch");
            self.entries.truncate(self.applied);
        }

        let output = command.execute(target);
        tracing::debug!(
            description = command.description(),
            position = self.applied,
            "executed command"
        );
        self.entries.push_back(Box::new(command));
        self.applied += 1;

        if self.entries.len() > self.config.max_history {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::debug!(
                    description = evicted.label(),
                    max_history = self.config.max_history,
                    "evicted oldest command"
                );
            }
            self.applied -= 1;
        }

        output
    }

    /// Undoes the command at the cursor and moves the cursor back.
    ///
    /// Returns `false` without touching `target` if nothing is applied.
    pub fn undo(&mut self, target: &mut S) -> bool {
        if !self.can_undo() {
            tracing::debug!("nothing to undo");
            return false;
        }

        let position = self.applied - 1;
        let entry = &mut self.entries[position];
        entry.revert(target);
        tracing::debug!(description = entry.label(), position, "undid command");
        self.applied = position;
        true
    }

    /// Moves the cursor forward and executes that command again.
    ///
    /// Returns `false` without touching `target` if nothing is redoable.
    pub fn redo(&mut self, target: &mut S) -> bool {
        if !self.can_redo() {
            tracing::debug!("nothing to redo");
            return false;
        }

        let position = self.applied;
        let entry = &mut self.entries[position];
        entry.replay(target);
        tracing::debug!(description = entry.label(), position, "redid command");
        self.applied += 1;
        true
    }

    /// Returns `true` if at least one command is applied.
    #[inline]
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.applied > 0
    }

    /// Returns `true` if at least one undone command can be redone.
    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.applied < self.entries.len()
    }

    /// Returns the index of the last applied command, or `None` when every
    /// recorded command has been undone.
    #[inline]
    #[must_use]
    pub const fn current_index(&self) -> Option<usize> {
        self.applied.checked_sub(1)
    }

    /// Describes the last applied command, or `"No operations"` if there is
    /// none.
    #[must_use]
    pub fn current_description(&self) -> &str {
        self.current_index()
            .and_then(|index| self.entries.get(index))
            .map_or("No operations", |entry| entry.label())
    }

    /// Returns the descriptions of all recorded commands, oldest first,
    /// including redoable ones.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label())
    }

    /// Forgets every recorded command. The structure is left as it is.
    pub fn clear(&mut self) {
        tracing::debug!(discarded = self.entries.len(), "cleared history");
        self.entries.clear();
        self.applied = 0;
    }

    /// Returns the number of recorded commands.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no command is recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of retained commands.
    #[inline]
    #[must_use]
    pub const fn max_history(&self) -> usize {
        self.config.max_history
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &HistoryConfig {
        &self.config
    }
}

impl<S> Default for History<S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for History<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("History")
            .field("entries", &self.descriptions().collect::<Vec<_>>())
            .field("current_index", &self.current_index())
            .field("config", &self.config)
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::DataStructureCommand;
    use crate::structures::Stack;
    use rstest::rstest;

    fn push(value: i32) -> DataStructureCommand<Stack<i32>, ()> {
        DataStructureCommand::new(format!("Push {value}"), move |stack: &mut Stack<i32>| {
            stack.push(value);
        })
    }

    #[rstest]
    fn test_new_history_is_empty() {
        let history: History<Stack<i32>> = History::new();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.current_index(), None);
        assert_eq!(history.current_description(), "No operations");
        assert_eq!(history.max_history(), DEFAULT_MAX_HISTORY);
    }

    #[rstest]
    fn test_execute_advances_cursor() {
        let mut stack = Stack::new();
        let mut history = History::new();
        history.execute(&mut stack, push(1));
        history.execute(&mut stack, push(2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current_index(), Some(1));
        assert_eq!(history.current_description(), "Push 2");
    }

    #[rstest]
    fn test_undo_and_redo_move_cursor() {
        let mut stack = Stack::new();
        let mut history = History::new();
        history.execute(&mut stack, push(1));
        history.execute(&mut stack, push(2));

        assert!(history.undo(&mut stack));
        assert_eq!(history.current_index(), Some(0));
        assert_eq!(stack.to_sequence(), vec![1]);

        assert!(history.redo(&mut stack));
        assert_eq!(history.current_index(), Some(1));
        assert_eq!(stack.to_sequence(), vec![1, 2]);
    }

    #[rstest]
    fn test_undo_past_start_fails() {
        let mut stack = Stack::new();
        let mut history = History::new();
        history.execute(&mut stack, push(1));
        assert!(history.undo(&mut stack));
        assert!(!history.undo(&mut stack));
        assert!(stack.is_empty());
        assert_eq!(history.current_index(), None);
    }

    #[rstest]
    fn test_redo_at_end_fails() {
        let mut stack = Stack::new();
        let mut history = History::new();
        history.execute(&mut stack, push(1));
        assert!(!history.redo(&mut stack));
        assert_eq!(stack.to_sequence(), vec![1]);
    }

    #[rstest]
    fn test_execute_after_undo_discards_redo_branch() {
        let mut stack = Stack::new();
        let mut history = History::new();
        history.execute(&mut stack, push(1));
        history.execute(&mut stack, push(2));
        history.undo(&mut stack);
        history.execute(&mut stack, push(3));

        assert!(!history.redo(&mut stack));
        assert_eq!(history.descriptions().collect::<Vec<_>>(), vec!["Push 1", "Push 3"]);
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn test_capacity_evicts_oldest(#[case] max_history: usize) {
        let mut stack = Stack::new();
        let mut history = History::with_config(HistoryConfig::default().with_max_history(max_history));
        for value in 0..5 {
            history.execute(&mut stack, push(value));
        }

        assert_eq!(history.len(), max_history);
        assert_eq!(history.current_index(), Some(max_history - 1));

        let mut undone = 0;
        while history.undo(&mut stack) {
            undone += 1;
        }
        assert_eq!(undone, max_history);
        assert_eq!(stack.size(), 5 - max_history);
    }

    #[rstest]
    fn test_zero_capacity_keeps_nothing() {
        let mut stack = Stack::new();
        let mut history = History::with_config(HistoryConfig::default().with_max_history(0));
        history.execute(&mut stack, push(1));
        assert!(history.is_empty());
        assert_eq!(history.current_index(), None);
        assert!(!history.undo(&mut stack));
        assert_eq!(stack.to_sequence(), vec![1]);
    }

    #[rstest]
    fn test_clear_forgets_commands_but_keeps_structure() {
        let mut stack = Stack::new();
        let mut history = History::new();
        history.execute(&mut stack, push(1));
        history.clear();
        assert!(history.is_empty());
        assert!(!history.can_undo());
        assert_eq!(stack.to_sequence(), vec![1]);
    }

    #[rstest]
    fn test_execute_returns_command_output() {
        let mut stack: Stack<i32> = (1..=2).collect();
        let mut history = History::new();
        let popped = history.execute(
            &mut stack,
            DataStructureCommand::new("Pop", |stack: &mut Stack<i32>| stack.pop()),
        );
        assert_eq!(popped, Some(2));
    }

    #[rstest]
    fn test_debug_lists_descriptions() {
        let mut stack = Stack::new();
        let mut history = History::new();
        history.execute(&mut stack, push(1));
        let rendered = format!("{history:?}");
        assert!(rendered.contains("Push 1"));
        assert!(rendered.contains("current_index: Some(0)"));
    }
}
