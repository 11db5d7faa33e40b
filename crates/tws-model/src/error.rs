use thiserror::Error;

use crate::tower::{FlatIdentityField, UnitKind};

/// Errors raised while decoding or adapting tower structures.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// The backend response carried no non-empty unit collection.
    #[error("tower {id} has no unit collection (floors, plots, house villas, or commercial units)")]
    EmptyUnitCollection {
        /// Root id of the tower/block record.
        id: i64,
    },

    /// A unit kind that cannot be flattened into a floor/flat numbering buffer.
    #[error("unit numbering is only supported for floor/flat structures, got {kind}")]
    UnsupportedUnitKind {
        /// The discriminant decoded from the response.
        kind: UnitKind,
    },

    /// A write payload was requested for the wrong flat-identity flavor.
    ///
    /// The create path carries `id` on each flat, the fetch-by-id path
    /// carries `flatId`; the two are not interchangeable on write.
    #[error("flat identity mismatch: payload requires {required}, structure carries {found}")]
    IdentityMismatch {
        /// Identity field the target endpoint expects.
        required: FlatIdentityField,
        /// Identity field recorded when the structure was decoded.
        found: FlatIdentityField,
    },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
