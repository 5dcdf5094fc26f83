//! Internal implementation of control ID generation.

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Length of a minted control ID, matching the HL7 v2.5 MSH-10 maximum.
pub const CONTROL_ID_LEN: usize = 20;

/// A freshly minted message control ID.
///
/// # Construction
/// - [`ControlId::new`] mints a new ID from a random v4 UUID.
/// - [`ControlId::from_uuid`] derives the ID deterministically from a given UUID.
/// - [`ControlId::parse`] validates a previously minted ID.
///
/// # Display format
/// Always 20 upper-case hexadecimal characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControlId(String);

impl Default for ControlId {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlId {
    /// Mints a new control ID.
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Derives a control ID from the first 20 hex digits of `uuid`.
    pub fn from_uuid(uuid: Uuid) -> Self {
        let mut hex = uuid.simple().to_string().to_ascii_uppercase();
        hex.truncate(CONTROL_ID_LEN);
        Self(hex)
    }

    /// Validates a string that must already be in minted form.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidInput`] if `input` is not exactly 20 upper-case hex
    /// characters.
    pub fn parse(input: &str) -> UuidResult<Self> {
        if Self::is_canonical(input) {
            return Ok(Self(input.to_string()));
        }
        Err(UuidError::InvalidInput(format!(
            "control ID must be {} upper-case hex characters, got: '{}'",
            CONTROL_ID_LEN, input
        )))
    }

    /// Returns true if `input` has the shape of a minted control ID.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == CONTROL_ID_LEN
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'A'..=b'F'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ControlId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ControlId {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ControlId::parse(s)
    }
}
