//! Registry of challenges with a single active slot.

use std::collections::HashMap;

use super::{
    BalancedTreeChallenge, Challenge, FindMiddleChallenge, QueueFromStacksChallenge,
    ReverseStackChallenge, StructureKind, Workspace, WorkspaceStructure,
};

// =============================================================================
// Type-Erased Entries
// =============================================================================

/// Object-safe view of a [`Challenge`] that trades in [`Workspace`]s.
trait ChallengeEntry {
    fn title(&self) -> &str;
    fn objective(&self) -> &str;
    fn prepare(&mut self) -> Workspace;
    fn check(&self, workspace: &Workspace) -> bool;
    fn observe(&mut self, value: i32);
}

impl<C: Challenge> ChallengeEntry for C {
    fn title(&self) -> &str {
        self.name()
    }

    fn objective(&self) -> &str {
        self.goal()
    }

    fn prepare(&mut self) -> Workspace {
        self.setup().into_workspace()
    }

    fn check(&self, workspace: &Workspace) -> bool {
        <C::Structure as WorkspaceStructure>::from_workspace(workspace)
            .is_some_and(|structure| self.validate(structure))
    }

    fn observe(&mut self, value: i32) {
        self.record_output(value);
    }
}

// =============================================================================
// ChallengeInfo
// =============================================================================

/// Name and goal of a registered challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChallengeInfo<'a> {
    /// Kind the challenge is registered under.
    pub kind: StructureKind,
    /// Position within that kind's list.
    pub index: usize,
    /// Short title.
    pub name: &'a str,
    /// The condition the challenge checks.
    pub goal: &'a str,
}

// =============================================================================
// ChallengeManager Definition
// =============================================================================

/// Challenges grouped by [`StructureKind`], with at most one active.
///
/// Starting a challenge hands out its prepared structure as a [`Workspace`].
/// The caller mutates it and passes it back to
/// [`validate_current`](Self::validate_current).
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::challenge::{ChallengeManager, StructureKind};
/// use dsviz_engine::structures::TwoStackQueue;
///
/// let mut manager = ChallengeManager::with_builtin_challenges();
/// let mut workspace = manager.start_challenge(StructureKind::Queue, 0).unwrap();
///
/// let queue = workspace.get_mut::<TwoStackQueue<i32>>().unwrap();
/// queue.extend([1, 2, 3]);
/// let mut dequeued = Vec::new();
/// while let Some(value) = queue.dequeue() {
///     dequeued.push(value);
/// }
/// for value in dequeued {
///     manager.record_output(value);
/// }
///
/// assert!(manager.validate_current(&workspace));
/// ```
#[derive(Default)]
pub struct ChallengeManager {
    challenges: HashMap<StructureKind, Vec<Box<dyn ChallengeEntry>>>,
    active: Option<(StructureKind, usize)>,
}

impl ChallengeManager {
    /// Creates a manager with no challenges registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager holding the four built-in challenges, each at index
    /// 0 of its kind.
    #[must_use]
    pub fn with_builtin_challenges() -> Self {
        let mut manager = Self::new();
        manager.register_challenge(ReverseStackChallenge);
        manager.register_challenge(QueueFromStacksChallenge::new());
        manager.register_challenge(FindMiddleChallenge);
        manager.register_challenge(BalancedTreeChallenge);
        manager
    }

    /// Appends a challenge to the list of its structure kind.
    pub fn register_challenge<C>(&mut self, challenge: C)
    where
        C: Challenge + 'static,
    {
        let kind = <C::Structure as WorkspaceStructure>::KIND;
        let entries = self.challenges.entry(kind).or_default();
        tracing::debug!(%kind, index = entries.len(), name = challenge.name(), "challenge registered");
        entries.push(Box::new(challenge));
    }

    /// Returns the challenges registered under `kind`, in registration order.
    pub fn challenges(&self, kind: StructureKind) -> impl Iterator<Item = ChallengeInfo<'_>> {
        self.challenges
            .get(&kind)
            .into_iter()
            .flatten()
            .enumerate()
            .map(move |(index, entry)| ChallengeInfo {
                kind,
                index,
                name: entry.title(),
                goal: entry.objective(),
            })
    }

    /// Makes the challenge at `index` of `kind` active and returns its
    /// prepared structure.
    ///
    /// Returns `None`, leaving the active challenge unchanged, if no such
    /// challenge exists.
    pub fn start_challenge(&mut self, kind: StructureKind, index: usize) -> Option<Workspace> {
        let Some(entry) = self
            .challenges
            .get_mut(&kind)
            .and_then(|entries| entries.get_mut(index))
        else {
            tracing::debug!(%kind, index, "no such challenge");
            return None;
        };
        let workspace = entry.prepare();
        tracing::debug!(%kind, index, name = entry.title(), "challenge started");
        self.active = Some((kind, index));
        Some(workspace)
    }

    /// Returns `true` if a challenge is active and `workspace` reaches its
    /// goal.
    ///
    /// A workspace holding a structure of another kind never validates.
    #[must_use]
    pub fn validate_current(&self, workspace: &Workspace) -> bool {
        let Some(entry) = self.active_entry() else {
            return false;
        };
        let solved = entry.check(workspace);
        tracing::debug!(name = entry.title(), solved, "challenge validated");
        solved
    }

    /// Passes a value produced by the user to the active challenge.
    ///
    /// Returns `false` if no challenge is active.
    pub fn record_output(&mut self, value: i32) -> bool {
        let Some((kind, index)) = self.active else {
            return false;
        };
        match self
            .challenges
            .get_mut(&kind)
            .and_then(|entries| entries.get_mut(index))
        {
            Some(entry) => {
                entry.observe(value);
                true
            }
            None => false,
        }
    }

    /// Returns the name and goal of the active challenge.
    #[must_use]
    pub fn current_challenge_info(&self) -> Option<ChallengeInfo<'_>> {
        let (kind, index) = self.active?;
        self.active_entry().map(|entry| ChallengeInfo {
            kind,
            index,
            name: entry.title(),
            goal: entry.objective(),
        })
    }

    /// Clears the active challenge.
    pub fn end_challenge(&mut self) {
        if let Some((kind, index)) = self.active.take() {
            tracing::debug!(%kind, index, "challenge ended");
        }
    }

    /// Returns `true` while a challenge is active.
    #[must_use]
    pub const fn is_challenge_active(&self) -> bool {
        self.active.is_some()
    }

    fn active_entry(&self) -> Option<&dyn ChallengeEntry> {
        let (kind, index) = self.active?;
        self.challenges
            .get(&kind)
            .and_then(|entries| entries.get(index))
            .map(AsRef::as_ref)
    }
}

impl std::fmt::Debug for ChallengeManager {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut counts: Vec<_> = self
            .challenges
            .iter()
            .map(|(kind, entries)| (*kind, entries.len()))
            .collect();
        counts.sort_unstable();
        formatter
            .debug_struct("ChallengeManager")
            .field("challenges", &counts)
            .field("active", &self.active)
            .finish()
    }
}
