//! Message assembly.
//!
//! Raw text flows one way: tokenizer, then the MSH header (which fixes the delimiters), then
//! every other segment, then assembly into a [`Message`]. Any structural failure aborts the
//! whole parse; no partially built message is ever handed out.

use crate::components::Components;
use crate::config::{CodecConfig, MissingControlIdPolicy};
use crate::datetime::decode_datetime;
use crate::segments::{parse_segment, MshSegment, Segments};
use crate::tokenizer::tokenize;
use crate::{Hl7Error, Hl7Result};
use chrono::{DateTime, Utc};
use hl7_types::Delimiters;
use hl7_uuid::ControlId;
use serde::Serialize;

/// A parsed HL7 v2.x message.
///
/// Header identity fields are lifted from MSH for convenience; the full header stays
/// available as `segments.msh()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// MSH-9 as received, e.g. `ADT^A04`.
    pub message_type: String,
    /// MSH-10, or a minted fallback when the sender left it empty.
    pub message_control_id: String,
    /// `true` when `message_control_id` was minted by the codec.
    pub control_id_generated: bool,
    pub sending_application: String,
    pub sending_facility: String,
    pub receiving_application: String,
    pub receiving_facility: String,
    /// MSH-7 as received.
    pub timestamp: String,
    pub version_id: String,
    #[serde(skip)]
    pub delimiters: Delimiters,
    pub segments: Segments,
    /// The original text, kept for audit and debugging.
    pub raw: String,
}

/// Decoded view of MSH-9: `code^trigger_event^structure`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageType {
    pub code: String,
    pub trigger_event: String,
    pub structure: String,
}

impl Message {
    /// Parse raw HL7 text with the default [`CodecConfig`].
    pub fn parse(raw: &str) -> Hl7Result<Self> {
        Self::parse_with_config(raw, &CodecConfig::default())
    }

    /// Parse raw HL7 text.
    ///
    /// The MSH line fixes the delimiters for every other line. Modelled segments are mapped
    /// onto typed records; any other line is kept verbatim under its tag.
    ///
    /// # Arguments
    ///
    /// * `raw` - Message text; `\r`, `\n` and `\r\n` are all accepted as terminators.
    /// * `config` - Decides what happens when MSH-10 is empty.
    ///
    /// # Returns
    ///
    /// The assembled [`Message`]. `control_id_generated` is `true` when MSH-10 was empty and
    /// a fallback was minted.
    ///
    /// # Errors
    ///
    /// - [`Hl7Error::EmptyMessage`] if the text holds no segments.
    /// - [`Hl7Error::MissingMsh`] if no MSH segment is present.
    /// - [`Hl7Error::Segment`] naming the offending tag if any segment is malformed.
    /// - [`Hl7Error::MissingControlId`] if MSH-10 is empty and the config rejects that.
    pub fn parse_with_config(raw: &str, config: &CodecConfig) -> Hl7Result<Self> {
        let lines = tokenize(raw)?;

        let header_idx = lines
            .iter()
            .position(|line| line.tag == "MSH")
            .ok_or(Hl7Error::MissingMsh)?;
        let msh = MshSegment::parse(lines[header_idx].line)
            .map_err(|source| Hl7Error::segment("MSH", source))?;
        let delimiters = msh.delimiters;

        let body = lines
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != header_idx)
            .map(|(_, line)| {
                parse_segment(*line, &delimiters).map_err(|source| Hl7Error::segment(line.tag, source))
            })
            .collect::<Hl7Result<Vec<_>>>()?;

        let (message_control_id, control_id_generated) = if msh.message_control_id.is_empty() {
            match config.missing_control_id() {
                MissingControlIdPolicy::Reject => return Err(Hl7Error::MissingControlId),
                MissingControlIdPolicy::Generate => {
                    let minted = ControlId::new().into_string();
                    tracing::warn!(
                        control_id = %minted,
                        sending_application = %msh.sending_application,
                        "message has no control ID; minted a fallback"
                    );
                    (minted, true)
                }
            }
        } else {
            (msh.message_control_id.clone(), false)
        };

        let message = Self {
            message_type: msh.message_type.clone(),
            message_control_id,
            control_id_generated,
            sending_application: msh.sending_application.clone(),
            sending_facility: msh.sending_facility.clone(),
            receiving_application: msh.receiving_application.clone(),
            receiving_facility: msh.receiving_facility.clone(),
            timestamp: msh.date_time_of_message.clone(),
            version_id: msh.version_id.clone(),
            delimiters,
            segments: Segments::new(msh, body),
            raw: raw.to_string(),
        };

        tracing::debug!(
            message_type = %message.message_type,
            control_id = %message.message_control_id,
            segments = message.segments.len(),
            "parsed HL7 message"
        );
        Ok(message)
    }

    /// MSH-9 split into its components using the message's own separator.
    pub fn message_type_parts(&self) -> MessageType {
        let c = Components::new(&self.message_type, self.delimiters.component);
        MessageType {
            code: c.text(0),
            trigger_event: c.text(1),
            structure: c.text(2),
        }
    }

    /// MSH-7 as an instant, if it holds at least a full date.
    pub fn timestamp_instant(&self) -> Option<DateTime<Utc>> {
        decode_datetime(&self.timestamp)
    }
}
