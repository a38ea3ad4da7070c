//! State transfer between structures and the command layer.
//!
//! Every structure in this crate can describe its full logical content as a
//! [`StructureState`]: the stored values in a canonical order together with
//! the element count. [`StateTransfer`] is the pair of operations built on
//! top of it, and it is the only channel through which
//! [`crate::command::DataStructureCommand`] snapshots and restores a
//! structure.
//!
//! The canonical order of each structure:
//!
//! | Structure             | `items` order        | rebuilt with       |
//! |-----------------------|----------------------|--------------------|
//! | `Stack`               | bottom to top        | `push`             |
//! | `Queue`               | front to rear        | `enqueue`          |
//! | `TwoStackQueue`       | front to rear        | `enqueue`          |
//! | `LinkedList`          | head to tail         | `insert_at_tail`   |
//! | `BinarySearchTree`    | preorder             | `insert`           |
//!
//! A state owns its items. It never shares storage with the structure it was
//! taken from, so mutating the structure afterwards cannot change a snapshot.
//!
//! # Examples
//!
//! ```rust
//! use dsviz_engine::state::StateTransfer;
//! use dsviz_engine::structures::BinarySearchTree;
//!
//! let tree: BinarySearchTree<i32> = [5, 3, 8, 1].into_iter().collect();
//! let state = tree.get_state();
//! assert_eq!(state.items(), &[5, 3, 1, 8]);
//!
//! let restored = BinarySearchTree::from_state(state);
//! assert_eq!(restored.preorder_traversal(), tree.preorder_traversal());
//! ```

use std::fmt;

// =============================================================================
// Error Definition
// =============================================================================

/// Errors raised when a state blob does not describe a valid structure.
///
/// # Examples
///
/// ```rust
/// use dsviz_engine::state::{StateError, StructureState};
///
/// let error = StructureState::from_parts(vec![1, 2], 3).unwrap_err();
/// assert_eq!(error, StateError::SizeMismatch { declared: 3, actual: 2 });
/// assert_eq!(
///     format!("{error}"),
///     "state declares size 3 but carries 2 items"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// The declared `size` disagrees with the number of items.
    SizeMismatch {
        /// The size recorded in the state.
        declared: usize,
        /// The number of items actually present.
        actual: usize,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { declared, actual } => write!(
                formatter,
                "state declares size {declared} but carries {actual} items"
            ),
        }
    }
}

impl std::error::Error for StateError {}

// =============================================================================
// StructureState Definition
// =============================================================================

/// The serializable content of a structure: `items` in canonical order and
/// the element count `size`.
///
/// The invariant `size == items.len()` always holds for values of this type;
/// [`StructureState::from_parts`] is the checked entry point for states that
/// arrive from outside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StructureState<T> {
    items: Vec<T>,
    size: usize,
}

impl<T> StructureState<T> {
    /// Creates a state from items, deriving the size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dsviz_engine::state::StructureState;
    ///
    /// let state = StructureState::new(vec![1, 2, 3]);
    /// assert_eq!(state.size(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        let size = items.len();
        Self { items, size }
    }

    /// Creates a state from items and a declared size.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::SizeMismatch`] if `size` differs from
    /// `items.len()`.
    pub fn from_parts(items: Vec<T>, size: usize) -> Result<Self, StateError> {
        if items.len() == size {
            Ok(Self { items, size })
        } else {
            Err(StateError::SizeMismatch {
                declared: size,
                actual: items.len(),
            })
        }
    }

    /// Creates the state of an empty structure.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            items: Vec::new(),
            size: 0,
        }
    }

    /// Returns the items in the structure's canonical order.
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of items.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the state describes an empty structure.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Consumes the state and returns its items.
    #[inline]
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for StructureState<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> FromIterator<T> for StructureState<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// =============================================================================
// StateTransfer Trait
// =============================================================================

/// Snapshot and restore of a structure's full logical content.
///
/// `get_state` must return a deep copy; `set_state` must clear the structure
/// and rebuild it from `items` using the structure's own insertion primitive.
pub trait StateTransfer {
    /// The element type stored by the structure.
    type Element;

    /// Captures the current content in canonical order.
    fn get_state(&self) -> StructureState<Self::Element>;

    /// Replaces the current content with `state`.
    fn set_state(&mut self, state: StructureState<Self::Element>);

    /// Builds a fresh structure from `state`.
    #[must_use]
    fn from_state(state: StructureState<Self::Element>) -> Self
    where
        Self: Default + Sized,
    {
        let mut structure = Self::default();
        structure.set_state(state);
        structure
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for StructureState<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("StructureState", 2)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("size", &self.size)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawStructureState<T> {
    items: Vec<T>,
    size: usize,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for StructureState<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = <RawStructureState<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_parts(raw.items, raw.size).map_err(serde::de::Error::custom)
    }
}

/// Implements `Serialize`/`Deserialize` for a structure by going through its
/// [`StructureState`].
#[cfg(feature = "serde")]
macro_rules! impl_serde_via_state {
    ($structure:ident $(, $bound:path)*) => {
        impl<T> serde::Serialize for $structure<T>
        where
            T: serde::Serialize + Clone $(+ $bound)*,
        {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(
                    &$crate::state::StateTransfer::get_state(self),
                    serializer,
                )
            }
        }

        impl<'de, T> serde::Deserialize<'de> for $structure<T>
        where
            T: serde::Deserialize<'de> + Clone $(+ $bound)*,
        {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let state =
                    <$crate::state::StructureState<T> as serde::Deserialize>::deserialize(
                        deserializer,
                    )?;
                Ok(<Self as $crate::state::StateTransfer>::from_state(state))
            }
        }
    };
}

#[cfg(feature = "serde")]
pub(crate) use impl_serde_via_state;

// =============================================================================
// Tests
// =============================================================================
