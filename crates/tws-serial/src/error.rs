//! Error types for unit numbering.

use thiserror::Error;

use tws_model::ModelError;

/// Errors raised while numbering a tower's units.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SerializeError {
    /// Bulk-fill range rejected: both ends must be ≥ 1 and from ≤ to.
    #[error("invalid bulk-fill range {from}..={to}: both ends must be >= 1 and from <= to")]
    InvalidRange {
        /// Requested start number.
        from: u64,
        /// Requested end number.
        to: u64,
    },

    /// No flat at the addressed (floor, flat) position.
    #[error("no flat at floor {floor}, position {flat}")]
    NoSuchFlat {
        /// Floor index, zero-based.
        floor: usize,
        /// Flat index within the floor, zero-based.
        flat: usize,
    },

    /// Aggregate completeness check failed; submission is blocked before any
    /// network call.
    #[error("{missing} of {total} flats have no unit number")]
    IncompleteNumbering {
        /// Flats whose trimmed number is empty.
        missing: usize,
        /// Total flats in the structure.
        total: usize,
    },

    /// Structure-level decoding or identity adaptation failed.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type alias for numbering operations.
pub type Result<T> = std::result::Result<T, SerializeError>;
