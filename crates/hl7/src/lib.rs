//! HL7 v2.x message codec.
//!
//! This crate turns pipe-delimited HL7 v2.x text (ADT, SIU, ORU, ...) received from lab and
//! scheduling interfaces into typed records, checks them against per-message-type
//! required-segment rules, and builds acknowledgment (ACK) replies.
//!
//! Responsibilities:
//! - Tokenise raw text into segments (any of `\r`, `\n`, `\r\n` as terminator)
//! - Parse the MSH header, discovering the field separator and encoding characters
//! - Map PID, PV1, OBX, SCH, AIL and AIP fields onto typed records
//! - Keep unrecognised segments as raw lines, grouped by tag
//! - Validate required segments per message type
//! - Generate MSH+MSA acknowledgments
//! - Convert HL7 `YYYYMMDDHHmmss` timestamps to and from instants
//!
//! Not handled here: MLLP framing, sockets, persistence, batch envelopes (BHS/FHS), escape
//! sequences and sub-components.
//!
//! Every operation is synchronous and free of shared state, so the codec can be called from
//! any number of threads or tasks at once.

pub mod ack;
pub mod components;
pub mod config;
pub mod datetime;
pub mod message;
pub mod segments;
pub mod tokenizer;
pub mod validation;

pub use ack::{generate_ack, generate_ack_with_text};
pub use components::{Address, CodedElement, PersonName, ProviderIdentifier};
pub use config::{CodecConfig, MissingControlIdPolicy};
pub use datetime::{decode_date, decode_datetime, encode_datetime};
pub use message::{Message, MessageType};
pub use segments::{
    AilSegment, AipSegment, MshSegment, ObxSegment, PidSegment, Pv1Segment, SchSegment, Segment,
    Segments, UnrecognisedSegment,
};
pub use validation::{validate, ValidationReport};

// Re-export shared value types
pub use hl7_types::{AckCode, AckCodeError, DelimiterError, Delimiters};

/// Errors that abort a whole message parse.
#[derive(Debug, thiserror::Error)]
pub enum Hl7Error {
    #[error("empty message: no segments found")]
    EmptyMessage,

    #[error("MSH segment is required")]
    MissingMsh,

    #[error("failed to parse {tag} segment: {source}")]
    Segment {
        tag: String,
        #[source]
        source: SegmentError,
    },

    #[error("message control ID (MSH-10) is missing")]
    MissingControlId,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Hl7Error {
    pub(crate) fn segment(tag: &str, source: SegmentError) -> Self {
        Hl7Error::Segment {
            tag: tag.to_string(),
            source,
        }
    }
}

/// Structural problems found inside a single segment line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error("expected field separator '{expected}' after segment tag, found '{found}'")]
    MissingFieldSeparator { expected: char, found: char },

    #[error("header is too short to declare a field separator")]
    TruncatedHeader,

    #[error("invalid encoding characters: {0}")]
    EncodingCharacters(#[from] DelimiterError),

    #[error("more than one MSH segment; batch messages are not supported")]
    DuplicateHeader,
}

/// Type alias for Results that can fail with an [`Hl7Error`].
pub type Hl7Result<T> = Result<T, Hl7Error>;

/// Parse raw HL7 text with the default [`CodecConfig`].
///
/// # Errors
///
/// Returns [`Hl7Error`] if the text has no segments, has no MSH segment, or any segment is
/// structurally malformed. No partial message is ever returned.
pub fn parse(raw: &str) -> Hl7Result<Message> {
    Message::parse(raw)
}

/// Parse raw HL7 text with an explicit [`CodecConfig`].
pub fn parse_with_config(raw: &str, config: &CodecConfig) -> Hl7Result<Message> {
    Message::parse_with_config(raw, config)
}
