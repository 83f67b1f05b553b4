//! attriboard-common — Shared error types used across all Attriboard crates.

pub mod error;

pub use error::{ApiError, AttriboardError, Result};
