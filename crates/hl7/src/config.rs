//! Codec runtime configuration.
//!
//! Configuration is resolved once at process startup and passed into the parse entry points.
//! Library code never reads environment variables itself; binaries resolve textual values
//! with the helpers below.

use crate::{Hl7Error, Hl7Result};
use std::str::FromStr;

/// What to do when an inbound message has an empty MSH-10 (message control ID).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingControlIdPolicy {
    /// Mint a fallback control ID and flag the message as carrying a generated ID.
    #[default]
    Generate,
    /// Fail the parse with [`Hl7Error::MissingControlId`].
    Reject,
}

impl FromStr for MissingControlIdPolicy {
    type Err = Hl7Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "generate" => Ok(Self::Generate),
            "reject" => Ok(Self::Reject),
            other => Err(Hl7Error::InvalidConfig(format!(
                "missing control ID policy must be 'generate' or 'reject', got '{other}'"
            ))),
        }
    }
}

/// Codec configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CodecConfig {
    missing_control_id: MissingControlIdPolicy,
}

impl CodecConfig {
    pub fn new(missing_control_id: MissingControlIdPolicy) -> Self {
        Self { missing_control_id }
    }

    pub fn missing_control_id(&self) -> MissingControlIdPolicy {
        self.missing_control_id
    }
}

/// Parse the missing-control-ID policy from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default policy.
pub fn missing_control_id_policy_from_env_value(
    value: Option<String>,
) -> Hl7Result<MissingControlIdPolicy> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value
        .map(|v| v.parse::<MissingControlIdPolicy>())
        .transpose()?;

    Ok(parsed.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_generates() {
        assert_eq!(
            CodecConfig::default().missing_control_id(),
            MissingControlIdPolicy::Generate
        );
    }

    #[test]
    fn env_value_absent_or_blank_uses_default() {
        assert_eq!(
            missing_control_id_policy_from_env_value(None).expect("default"),
            MissingControlIdPolicy::Generate
        );
        assert_eq!(
            missing_control_id_policy_from_env_value(Some("   ".into())).expect("default"),
            MissingControlIdPolicy::Generate
        );
    }

    #[test]
    fn env_value_is_case_insensitive() {
        assert_eq!(
            missing_control_id_policy_from_env_value(Some("REJECT".into())).expect("reject"),
            MissingControlIdPolicy::Reject
        );
        assert_eq!(
            missing_control_id_policy_from_env_value(Some(" Generate ".into())).expect("generate"),
            MissingControlIdPolicy::Generate
        );
    }

    #[test]
    fn env_value_rejects_unknown_policy() {
        let err = missing_control_id_policy_from_env_value(Some("ignore".into()))
            .expect_err("unknown policy");
        assert!(matches!(err, Hl7Error::InvalidConfig(msg) if msg.contains("ignore")));
    }
}
