//! Error types for draft building and submission gating.

use thiserror::Error;

/// Errors raised while building or submitting a tower draft.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DraftError {
    /// Tower name missing at the submission gate.
    #[error("tower name is required")]
    MissingTowerName,

    /// Floor count must be a positive integer.
    #[error("total floors must be a positive integer, got {given}")]
    InvalidFloorCount {
        /// The rejected value.
        given: u32,
    },

    /// No floor unit selected.
    #[error("a floor unit must be selected")]
    MissingFloorUnit,

    /// Quantity input required for this sub-property type but absent or
    /// non-positive.
    #[error("quantity must be a positive integer for this sub-property type")]
    InvalidQuantity,

    /// Assignments cannot be added while per-floor-same is "no"; floors and
    /// units are defined individually in the serialization step instead.
    #[error("structure assignments are disabled when units per floor are not the same")]
    AssignmentsDisabled,

    /// The addition would oversubscribe the linkable capacity.
    #[error("capacity exceeded: {requested} units requested, {remaining} remaining")]
    CapacityExceeded {
        /// Units the addition would consume.
        requested: u32,
        /// Units still available.
        remaining: u32,
    },

    /// Capacity tracking applies but no total has been loaded for the active
    /// (structure, area) pair; additions are blocked fail-closed.
    #[error("linkable capacity is unavailable for the selected structure and area")]
    CapacityUnavailable,

    /// Per-floor-same is "yes" but the draft holds no assignments.
    #[error("at least one structure assignment is required")]
    NoAssignments,

    /// Removal index out of range.
    #[error("assignment index {index} out of range (draft holds {len})")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of assignments in the draft.
        len: usize,
    },
}

/// Result type alias for draft operations.
pub type Result<T> = std::result::Result<T, DraftError>;
