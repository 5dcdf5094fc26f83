//! MSH (message header) segment.
//!
//! The header cannot be split like the other segments: MSH-1 *is* the field separator, read
//! from the character right after the tag, and MSH-2 is the encoding-character block that
//! follows it up to the next field separator. Only after both are known can the rest of
//! the line, and every other line of the message, be split.

use super::Fields;
use crate::SegmentError;
use hl7_types::Delimiters;
use serde::Serialize;

mod field {
    pub const ENCODING_CHARACTERS: usize = 2;
    pub const SENDING_APPLICATION: usize = 3;
    pub const SENDING_FACILITY: usize = 4;
    pub const RECEIVING_APPLICATION: usize = 5;
    pub const RECEIVING_FACILITY: usize = 6;
    pub const DATE_TIME_OF_MESSAGE: usize = 7;
    pub const SECURITY: usize = 8;
    pub const MESSAGE_TYPE: usize = 9;
    pub const MESSAGE_CONTROL_ID: usize = 10;
    pub const PROCESSING_ID: usize = 11;
    pub const VERSION_ID: usize = 12;
}

/// Character offset of MSH-1 within the header line.
const FIELD_SEPARATOR_OFFSET: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MshSegment {
    pub field_separator: char,
    /// MSH-2 exactly as the sender declared it.
    pub encoding_characters: String,
    pub sending_application: String,
    pub sending_facility: String,
    pub receiving_application: String,
    pub receiving_facility: String,
    pub date_time_of_message: String,
    pub security: String,
    pub message_type: String,
    pub message_control_id: String,
    pub processing_id: String,
    pub version_id: String,
    /// Resolved separators, with standard characters filling any positions MSH-2 omitted.
    #[serde(skip)]
    pub delimiters: Delimiters,
}

impl MshSegment {
    /// Parse a header line that the tokenizer has already tagged `MSH`.
    ///
    /// # Errors
    ///
    /// - [`SegmentError::TruncatedHeader`] if nothing follows the tag.
    /// - [`SegmentError::EncodingCharacters`] if the declared separators are unusable.
    pub fn parse(line: &str) -> Result<Self, SegmentError> {
        let (sep_idx, separator) = line
            .char_indices()
            .nth(FIELD_SEPARATOR_OFFSET)
            .ok_or(SegmentError::TruncatedHeader)?;
        let sep_end = sep_idx + separator.len_utf8();
        let after_separator = &line[sep_end..];

        let (encoding, remainder) = match after_separator.split_once(separator) {
            Some((encoding, rest)) => (encoding, Some(rest)),
            None => (after_separator, None),
        };
        let delimiters = Delimiters::from_encoding_characters(separator, encoding)?;

        let mut values = vec![&line[..sep_idx], &line[sep_idx..sep_end], encoding];
        if let Some(rest) = remainder {
            values.extend(rest.split(separator));
        }
        let fields = Fields::from_values(values);

        Ok(Self {
            field_separator: separator,
            encoding_characters: fields.text(field::ENCODING_CHARACTERS),
            sending_application: fields.text(field::SENDING_APPLICATION),
            sending_facility: fields.text(field::SENDING_FACILITY),
            receiving_application: fields.text(field::RECEIVING_APPLICATION),
            receiving_facility: fields.text(field::RECEIVING_FACILITY),
            date_time_of_message: fields.text(field::DATE_TIME_OF_MESSAGE),
            security: fields.text(field::SECURITY),
            message_type: fields.text(field::MESSAGE_TYPE),
            message_control_id: fields.text(field::MESSAGE_CONTROL_ID),
            processing_id: fields.text(field::PROCESSING_ID),
            version_id: fields.text(field::VERSION_ID),
            delimiters,
        })
    }

    /// Render this header as a single segment line (no terminator).
    pub fn render(&self) -> String {
        let f = self.delimiters.field.to_string();
        let fields: [&str; 10] = [
            self.sending_application.as_str(),
            &self.sending_facility,
            &self.receiving_application,
            &self.receiving_facility,
            &self.date_time_of_message,
            &self.security,
            &self.message_type,
            &self.message_control_id,
            &self.processing_id,
            &self.version_id,
        ];
        format!(
            "MSH{f}{}{f}{}",
            self.encoding_characters,
            fields.join(f.as_str())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "MSH|^~\\&|SENDAPP|SENDFAC|RECVAPP|RECVFAC|20250106120000||ADT^A04|CTRL00123|P|2.5";

    #[test]
    fn parses_standard_header() {
        let msh = MshSegment::parse(HEADER).expect("parse header");
        assert_eq!(msh.field_separator, '|');
        assert_eq!(msh.encoding_characters, "^~\\&");
        assert_eq!(msh.sending_application, "SENDAPP");
        assert_eq!(msh.sending_facility, "SENDFAC");
        assert_eq!(msh.receiving_application, "RECVAPP");
        assert_eq!(msh.receiving_facility, "RECVFAC");
        assert_eq!(msh.date_time_of_message, "20250106120000");
        assert_eq!(msh.security, "");
        assert_eq!(msh.message_type, "ADT^A04");
        assert_eq!(msh.message_control_id, "CTRL00123");
        assert_eq!(msh.processing_id, "P");
        assert_eq!(msh.version_id, "2.5");
        assert_eq!(msh.delimiters, Delimiters::default());
    }

    #[test]
    fn discovers_unconventional_separators() {
        let msh = MshSegment::parse("MSH#$*\\!#APP#FAC#RAPP#RFAC#20250106##ORU$R01#C1#T#2.3")
            .expect("parse header");
        assert_eq!(msh.field_separator, '#');
        assert_eq!(msh.delimiters.component, '$');
        assert_eq!(msh.delimiters.repetition, '*');
        assert_eq!(msh.sending_application, "APP");
        assert_eq!(msh.message_type, "ORU$R01");
        assert_eq!(msh.version_id, "2.3");
    }

    #[test]
    fn missing_trailing_fields_are_empty() {
        let msh = MshSegment::parse("MSH|^~\\&|APP").expect("parse header");
        assert_eq!(msh.sending_application, "APP");
        assert_eq!(msh.message_control_id, "");
        assert_eq!(msh.version_id, "");
    }

    #[test]
    fn header_without_fields_after_encoding_block() {
        let msh = MshSegment::parse("MSH|^~\\&").expect("parse header");
        assert_eq!(msh.encoding_characters, "^~\\&");
        assert_eq!(msh.sending_application, "");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let msh = MshSegment::parse(&format!("{HEADER}|||AL|NE|USA")).expect("parse header");
        assert_eq!(msh.version_id, "2.5");
    }

    #[test]
    fn short_encoding_block_uses_standard_fallbacks() {
        let msh = MshSegment::parse("MSH|^~\\|APP").expect("parse header");
        assert_eq!(msh.encoding_characters, "^~\\");
        assert_eq!(msh.delimiters.subcomponent, '&');
    }

    #[test]
    fn short_block_under_ampersand_separator() {
        let msh = MshSegment::parse("MSH&^~\\&A&F").expect("parse header");
        assert_eq!(msh.field_separator, '&');
        assert_eq!(msh.encoding_characters, "^~\\");
        assert_eq!(msh.sending_application, "A");
        assert_eq!(msh.sending_facility, "F");
    }

    #[test]
    fn bare_tag_is_truncated() {
        assert_eq!(
            MshSegment::parse("MSH").expect_err("no separator"),
            SegmentError::TruncatedHeader
        );
    }

    #[test]
    fn rejects_alphanumeric_field_separator() {
        let err = MshSegment::parse("MSHX^~\\&XAPP").expect_err("alphanumeric separator");
        assert!(matches!(err, SegmentError::EncodingCharacters(_)));
    }

    #[test]
    fn render_reproduces_header() {
        let msh = MshSegment::parse(HEADER).expect("parse header");
        assert_eq!(msh.render(), HEADER);
    }
}
