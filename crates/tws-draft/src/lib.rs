//! Tower draft building with capacity-tracked structure assignments.
//!
//! A [`TowerDraft`] accumulates (structure, area, quantity-per-floor)
//! assignments for a tower being defined, validating each addition against
//! the backend-computed linkable capacity, and converts into the
//! tower-creation request once the submission gate passes.

pub mod builder;
pub mod capacity;
pub mod error;
pub mod submit;

pub use builder::{
    AddOutcome, Assignment, AssignmentCandidate, AssignmentKey, PerFloorSame, TowerDraft,
};
pub use capacity::{LinkableCapacity, apply_assignment_delta};
pub use error::{DraftError, Result};
pub use submit::build_create_request;
