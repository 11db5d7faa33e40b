//! Blocking REST client for the real-estate property backend.

pub mod client;
pub mod credentials;
pub mod error;

pub use client::{ApiClient, AreaQuery, CapacityQuery, StructureQuery};
pub use credentials::Credentials;
pub use error::{ClientError, Result};
