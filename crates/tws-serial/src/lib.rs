//! Unit numbering for materialized tower structures.
//!
//! Takes the nested floors/flats shape the backend owns, flattens it into
//! an editable buffer, supports bulk sequential fill and manual per-flat
//! override, validates completeness, and reconstitutes the exact nested
//! shape with only the numbers applied.

pub mod buffer;
pub mod error;
pub mod existing;
pub mod session;

pub use buffer::{BufferEntry, BulkFillOutcome, SerializationBuffer};
pub use error::{Result, SerializeError};
pub use existing::ExistingAssignment;
pub use session::SerializeSession;
