//! Library surface of the tower-studio CLI (logging bootstrap and the
//! on-disk draft format, shared with integration tests).

pub mod logging;
pub mod types;
