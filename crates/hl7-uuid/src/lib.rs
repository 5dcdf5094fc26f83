//! Message control ID minting.
//!
//! HL7 v2.5 limits MSH-10 (message control ID) to 20 characters, which is too short for a
//! hyphenated or even a simple-form UUID. This crate derives control IDs from a v4 UUID and
//! keeps the first 20 hex digits, upper-cased:
//!
//! - Length: 20
//! - Characters: `0-9` and `A-F` only
//! - Example: `550E8400E29B41D4A716`
//!
//! 80 random bits are kept per ID, so collisions inside any realistic correlation window are
//! not a practical concern.
//!
//! Control IDs received from other systems are never forced into this form; the codec keeps
//! whatever the sender supplied. [`ControlId::parse`] only validates IDs this crate minted.

mod service;

pub use service::{ControlId, Uuid, CONTROL_ID_LEN};

/// Error type for control ID operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for control ID operations.
pub type UuidResult<T> = Result<T, UuidError>;
