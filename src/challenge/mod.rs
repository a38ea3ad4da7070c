//! Exercises over the data structures.
//!
//! A challenge prepares a structure, lets the user work on it, and then
//! decides whether the result reaches a fixed goal:
//!
//! - [`Challenge`]: the setup / validate interface, typed by the structure it
//!   works on
//! - [`ReverseStackChallenge`], [`FindMiddleChallenge`],
//!   [`QueueFromStacksChallenge`], [`BalancedTreeChallenge`]: the built-in
//!   challenges, one per structure kind
//! - [`ChallengeManager`]: a registry keyed by [`StructureKind`] that tracks
//!   at most one active challenge
//!
//! The manager hands structures out and takes them back as a [`Workspace`],
//! so challenges over different structures can live in one registry.
//!
//! # Examples
//!
//! ```rust
//! use dsviz_engine::challenge::{ChallengeManager, StructureKind};
//! use dsviz_engine::structures::Stack;
//!
//! let mut manager = ChallengeManager::with_builtin_challenges();
//! let mut workspace = manager.start_challenge(StructureKind::Stack, 0).unwrap();
//! assert!(!manager.validate_current(&workspace));
//!
//! workspace.get_mut::<Stack<i32>>().unwrap().reverse();
//! assert!(manager.validate_current(&workspace));
//!
//! manager.end_challenge();
//! assert!(!manager.is_challenge_active());
//! ```

use std::fmt;

use crate::structures::{BinarySearchTree, LinkedList, Stack, TwoStackQueue};

mod builtin;
mod manager;

pub use builtin::{
    BalancedTreeChallenge, FindMiddleChallenge, QueueFromStacksChallenge, ReverseStackChallenge,
};
pub use manager::{ChallengeInfo, ChallengeManager};

// =============================================================================
// StructureKind
// =============================================================================

/// The structure family a challenge is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StructureKind {
    /// [`Stack`]
    Stack,
    /// [`TwoStackQueue`]
    Queue,
    /// [`LinkedList`]
    LinkedList,
    /// [`BinarySearchTree`]
    BinarySearchTree,
}

impl StructureKind {
    /// Every kind, in registry order.
    pub const ALL: [Self; 4] = [
        Self::Stack,
        Self::Queue,
        Self::LinkedList,
        Self::BinarySearchTree,
    ];
}

impl fmt::Display for StructureKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Stack => "stack",
            Self::Queue => "queue",
            Self::LinkedList => "linked list",
            Self::BinarySearchTree => "binary search tree",
        };
        formatter.write_str(name)
    }
}

// =============================================================================
// Workspace
// =============================================================================

/// The structure a running challenge is played on.
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::challenge::{StructureKind, Workspace};
/// use dsviz_engine::structures::{LinkedList, Stack};
///
/// let workspace = Workspace::from((1..=3).collect::<Stack<i32>>());
/// assert_eq!(workspace.kind(), StructureKind::Stack);
/// assert_eq!(workspace.get::<Stack<i32>>().map(Stack::size), Some(3));
/// assert!(workspace.get::<LinkedList<i32>>().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workspace {
    /// A stack of integers.
    Stack(Stack<i32>),
    /// A queue built from two stacks.
    Queue(TwoStackQueue<i32>),
    /// A singly linked list of integers.
    LinkedList(LinkedList<i32>),
    /// A binary search tree of integers.
    BinarySearchTree(BinarySearchTree<i32>),
}

impl Workspace {
    /// Returns the kind of the held structure.
    #[must_use]
    pub const fn kind(&self) -> StructureKind {
        match self {
            Self::Stack(_) => StructureKind::Stack,
            Self::Queue(_) => StructureKind::Queue,
            Self::LinkedList(_) => StructureKind::LinkedList,
            Self::BinarySearchTree(_) => StructureKind::BinarySearchTree,
        }
    }

    /// Returns the held structure if it is an `S`.
    #[must_use]
    pub fn get<S: WorkspaceStructure>(&self) -> Option<&S> {
        S::from_workspace(self)
    }

    /// Returns the held structure mutably if it is an `S`.
    pub fn get_mut<S: WorkspaceStructure>(&mut self) -> Option<&mut S> {
        S::from_workspace_mut(self)
    }
}

/// A structure that can be held by a [`Workspace`].
pub trait WorkspaceStructure: Sized {
    /// The kind this structure is registered under.
    const KIND: StructureKind;

    /// Wraps the structure.
    fn into_workspace(self) -> Workspace;

    /// Borrows the structure out of a workspace of the same kind.
    fn from_workspace(workspace: &Workspace) -> Option<&Self>;

    /// Mutably borrows the structure out of a workspace of the same kind.
    fn from_workspace_mut(workspace: &mut Workspace) -> Option<&mut Self>;
}

macro_rules! impl_workspace_structure {
    ($structure:ty, $variant:ident) => {
        impl WorkspaceStructure for $structure {
            const KIND: StructureKind = StructureKind::$variant;

            fn into_workspace(self) -> Workspace {
                Workspace::$variant(self)
            }

            fn from_workspace(workspace: &Workspace) -> Option<&Self> {
                match workspace {
                    Workspace::$variant(structure) => Some(structure),
                    _ => None,
                }
            }

            fn from_workspace_mut(workspace: &mut Workspace) -> Option<&mut Self> {
                match workspace {
                    Workspace::$variant(structure) => Some(structure),
                    _ => None,
                }
            }
        }

        impl From<$structure> for Workspace {
            fn from(structure: $structure) -> Self {
                structure.into_workspace()
            }
        }
    };
}

impl_workspace_structure!(Stack<i32>, Stack);
impl_workspace_structure!(TwoStackQueue<i32>, Queue);
impl_workspace_structure!(LinkedList<i32>, LinkedList);
impl_workspace_structure!(BinarySearchTree<i32>, BinarySearchTree);

// =============================================================================
// Challenge
// =============================================================================

/// A goal to reach on a freshly prepared structure.
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::challenge::Challenge;
/// use dsviz_engine::structures::Stack;
///
/// struct PushThree;
///
/// impl Challenge for PushThree {
///     type Structure = Stack<i32>;
///
///     fn name(&self) -> &str {
///         "Push three"
///     }
///
///     fn goal(&self) -> &str {
///         "Leave exactly three elements on the stack"
///     }
///
///     fn setup(&mut self) -> Stack<i32> {
///         Stack::new()
///     }
///
///     fn validate(&self, stack: &Stack<i32>) -> bool {
///         stack.size() == 3
///     }
/// }
///
/// let mut challenge = PushThree;
/// let mut stack = challenge.setup();
/// stack.extend([1, 2, 3]);
/// assert!(challenge.validate(&stack));
/// ```
pub trait Challenge {
    /// The structure this challenge is played on.
    type Structure: WorkspaceStructure;

    /// Short title.
    fn name(&self) -> &str;

    /// The condition [`validate`](Challenge::validate) checks, in words.
    fn goal(&self) -> &str;

    /// Resets the challenge and returns the structure to start from.
    fn setup(&mut self) -> Self::Structure;

    /// Returns `true` if `structure` reaches the goal.
    fn validate(&self, structure: &Self::Structure) -> bool;

    /// Records a value the user produced while solving, such as a dequeued
    /// element. Ignored unless the challenge checks produced values.
    fn record_output(&mut self, value: i32) {
        let _ = value;
    }
}
