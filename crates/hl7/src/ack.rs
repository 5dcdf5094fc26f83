//! Acknowledgment (ACK) generation.
//!
//! An ACK is a two-segment message: an MSH header addressed back to the original sender and
//! an MSA segment carrying the acknowledgment code and the original control ID. It is
//! encoded with the same delimiters as the message it answers.

use crate::datetime::encode_datetime;
use crate::message::Message;
use crate::segments::MshSegment;
use crate::tokenizer::SEGMENT_TERMINATOR;
use chrono::{DateTime, Utc};
use hl7_types::{AckCode, Delimiters};
use hl7_uuid::ControlId;

const ACK_MESSAGE_CODE: &str = "ACK";
const DEFAULT_PROCESSING_ID: &str = "P";

/// Build an ACK for `original` with the given code.
///
/// Sender and receiver are swapped, a fresh control ID is minted and MSA-2 carries the
/// original control ID so the sender can correlate the reply.
///
/// # Arguments
///
/// * `original` - The parsed message being acknowledged.
/// * `code` - `AA` to accept, `AE` for an application error, `AR` to reject.
///
/// # Returns
///
/// The MSH and MSA segments joined by `\r`, encoded with the original message's field
/// separator and MSH-2 block. The message type is `ACK^<trigger>`, or `ACK` when the
/// original carries no trigger event; MSH-11 echoes the original processing ID (`P` if
/// absent) and MSH-12 the original version.
pub fn generate_ack(original: &Message, code: AckCode) -> String {
    render_ack(original, code, None, ControlId::new(), Utc::now())
}

/// Like [`generate_ack`], with a free-text explanation in MSA-3.
///
/// Delimiter characters and line breaks in `text` are replaced with spaces so the reply
/// stays well formed.
pub fn generate_ack_with_text(original: &Message, code: AckCode, text: &str) -> String {
    render_ack(original, code, Some(text), ControlId::new(), Utc::now())
}

fn render_ack(
    original: &Message,
    code: AckCode,
    text: Option<&str>,
    control_id: ControlId,
    now: DateTime<Utc>,
) -> String {
    let delimiters = original.delimiters;
    let original_msh = original.segments.msh();

    let trigger = original.message_type_parts().trigger_event;
    let message_type = if trigger.is_empty() {
        ACK_MESSAGE_CODE.to_string()
    } else {
        format!("{ACK_MESSAGE_CODE}{}{trigger}", delimiters.component)
    };
    let processing_id = if original_msh.processing_id.is_empty() {
        DEFAULT_PROCESSING_ID.to_string()
    } else {
        original_msh.processing_id.clone()
    };

    let header = MshSegment {
        field_separator: delimiters.field,
        encoding_characters: original_msh.encoding_characters.clone(),
        sending_application: original.receiving_application.clone(),
        sending_facility: original.receiving_facility.clone(),
        receiving_application: original.sending_application.clone(),
        receiving_facility: original.sending_facility.clone(),
        date_time_of_message: encode_datetime(now),
        security: String::new(),
        message_type,
        message_control_id: control_id.into_string(),
        processing_id,
        version_id: original.version_id.clone(),
        delimiters,
    };

    let f = delimiters.field;
    let mut msa = format!("MSA{f}{code}{f}{}", original.message_control_id);
    if let Some(text) = text {
        msa.push(f);
        msa.push_str(&sanitise_text(text, &delimiters));
    }

    tracing::debug!(
        code = %code,
        original_control_id = %original.message_control_id,
        ack_control_id = %header.message_control_id,
        "generated ACK"
    );

    [header.render(), msa].join(&SEGMENT_TERMINATOR.to_string())
}

fn sanitise_text(text: &str, delimiters: &Delimiters) -> String {
    text.chars()
        .map(|c| {
            if c == '\r' || c == '\n' || delimiters.is_delimiter(c) {
                ' '
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ORIGINAL: &str = "MSH|^~\\&|APP_A|FAC_A|APP_B|FAC_B|20250106120000||ADT^A04|CTRL1|T|2.5\rPID|1||MRN1";

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 6, 12, 30, 45).unwrap()
    }

    fn control_id() -> ControlId {
        ControlId::parse("0123456789ABCDEF0123").expect("control id")
    }

    #[test]
    fn renders_exact_ack() {
        let original = Message::parse(ORIGINAL).expect("parse");
        let ack = render_ack(&original, AckCode::Accept, None, control_id(), fixed_now());
        assert_eq!(
            ack,
            "MSH|^~\\&|APP_B|FAC_B|APP_A|FAC_A|20250106123045||ACK^A04|0123456789ABCDEF0123|T|2.5\rMSA|AA|CTRL1"
        );
    }

    #[test]
    fn ack_swaps_sender_and_receiver() {
        let original = Message::parse(ORIGINAL).expect("parse");
        let ack = generate_ack(&original, AckCode::Accept);
        let parsed = Message::parse(&ack).expect("ack parses");
        assert_eq!(parsed.sending_application, "APP_B");
        assert_eq!(parsed.sending_facility, "FAC_B");
        assert_eq!(parsed.receiving_application, "APP_A");
        assert_eq!(parsed.receiving_facility, "FAC_A");
        assert_eq!(parsed.message_type, "ACK^A04");
        assert_eq!(parsed.version_id, "2.5");
        assert!(ControlId::is_canonical(&parsed.message_control_id));
        assert_ne!(parsed.message_control_id, "CTRL1");

        let msa = parsed.segments.unrecognised("MSA");
        assert_eq!(msa, vec!["MSA|AA|CTRL1"]);
    }

    #[test]
    fn each_ack_gets_a_fresh_control_id() {
        let original = Message::parse(ORIGINAL).expect("parse");
        let a = Message::parse(&generate_ack(&original, AckCode::Accept)).expect("a");
        let b = Message::parse(&generate_ack(&original, AckCode::Accept)).expect("b");
        assert_ne!(a.message_control_id, b.message_control_id);
    }

    #[test]
    fn ack_reuses_original_delimiters() {
        let original = Message::parse("MSH#$~\\&#LAB#LF#EMR#EF#20250106##ORU$R01#C9#P#2.3\rOBX#1#NM#A$B##1")
            .expect("parse");
        let ack = render_ack(&original, AckCode::Error, None, control_id(), fixed_now());
        assert!(ack.starts_with("MSH#$~\\&#EMR#EF#LAB#LF#20250106123045##ACK$R01#"));
        assert!(ack.ends_with("\rMSA#AE#C9"));
    }

    #[test]
    fn ack_keeps_short_encoding_block_parseable() {
        let original = Message::parse("MSH&^~\\&A&F&B&G&20250106&&ADT^A01&C7&P&2.5").expect("parse");
        let ack = render_ack(&original, AckCode::Accept, None, control_id(), fixed_now());
        assert!(ack.starts_with("MSH&^~\\&B&G&A&F&"));

        let parsed = Message::parse(&ack).expect("ack parses");
        assert_eq!(parsed.sending_application, "B");
        assert_eq!(parsed.message_type, "ACK^A01");
        assert_eq!(parsed.segments.unrecognised("MSA"), vec!["MSA&AA&C7"]);
    }

    #[test]
    fn ack_without_trigger_is_bare() {
        let original = Message::parse("MSH|^~\\&|A|F|B|G|20250106||QRY|Q1||2.4").expect("parse");
        let ack = render_ack(&original, AckCode::Reject, None, control_id(), fixed_now());
        assert!(ack.contains("|ACK|0123456789ABCDEF0123|P|2.4\r"));
        assert!(ack.ends_with("MSA|AR|Q1"));
    }

    #[test]
    fn ack_text_is_sanitised() {
        let original = Message::parse(ORIGINAL).expect("parse");
        let ack = render_ack(
            &original,
            AckCode::Error,
            Some("PID|3 missing^bad\nretry"),
            control_id(),
            fixed_now(),
        );
        assert!(ack.ends_with("\rMSA|AE|CTRL1|PID 3 missing bad retry"));
        assert_eq!(ack.matches('\r').count(), 1);
    }

    #[test]
    fn generated_ack_with_text_parses() {
        let original = Message::parse(ORIGINAL).expect("parse");
        let ack = generate_ack_with_text(&original, AckCode::Reject, "unsupported event");
        let parsed = Message::parse(&ack).expect("ack parses");
        assert_eq!(
            parsed.segments.unrecognised("MSA"),
            vec!["MSA|AR|CTRL1|unsupported event"]
        );
    }
}
