//! Required-segment validation.
//!
//! Validation runs on an already parsed [`Message`] and never fails: every problem becomes a
//! human-readable entry in [`ValidationReport::errors`]. A message can therefore parse
//! successfully and still be reported invalid (for example an `ADT^A01` with no PID).

use crate::message::Message;
use serde::Serialize;

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// `true` exactly when `errors` is empty.
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Rule table: message code, optional trigger event, segment that must be present.
///
/// A `None` trigger applies the rule to every trigger of that code.
const REQUIRED_SEGMENTS: &[(&str, Option<&str>, &str)] = &[
    ("ADT", None, "PID"),
    ("SIU", None, "SCH"),
    ("ORU", Some("R01"), "OBX"),
];

/// Check a parsed message against the structural and per-message-type rules.
///
/// # Arguments
///
/// * `message` - A message that has already parsed successfully.
///
/// # Returns
///
/// A [`ValidationReport`] listing every rule the message breaks. Unknown message types
/// only get the structural checks. This never fails and never panics.
pub fn validate(message: &Message) -> ValidationReport {
    let mut errors = Vec::new();

    if message.message_type.trim().is_empty() {
        errors.push("message type (MSH-9) is missing".to_string());
    }
    if message.message_control_id.trim().is_empty() {
        errors.push("message control ID (MSH-10) is missing".to_string());
    }

    let parts = message.message_type_parts();
    for (code, trigger, required) in REQUIRED_SEGMENTS {
        if parts.code != *code {
            continue;
        }
        if trigger.is_some_and(|t| parts.trigger_event != t) {
            continue;
        }
        if !message.segments.contains(required) {
            errors.push(format!(
                "{} message requires a {required} segment",
                message.message_type
            ));
        }
    }

    ValidationReport::from_errors(errors)
}
