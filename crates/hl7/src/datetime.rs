//! HL7 timestamp conversion.
//!
//! HL7 v2.x timestamps are digit strings of variable precision:
//! `YYYY[MM[DD[HH[MM[SS[.S[S[S[S]]]]]]]]][+/-ZZZZ]`.
//!
//! Output is always full second precision in UTC (`YYYYMMDDHHmmss`). Input is lenient:
//! anything from `YYYYMMDD` upwards is accepted, missing time parts default to zero,
//! fractional seconds are dropped and a trailing offset is applied. Values shorter than a
//! full date, or that do not name a real calendar instant, decode to `None` rather than an
//! error.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// chrono format for the full-precision HL7 timestamp.
pub const HL7_DATETIME_FORMAT: &str = "%Y%m%d%H%M%S";

const MIN_DATE_LEN: usize = 8;

/// Encode an instant as `YYYYMMDDHHmmss` (UTC, sub-second precision discarded).
pub fn encode_datetime(instant: DateTime<Utc>) -> String {
    instant.format(HL7_DATETIME_FORMAT).to_string()
}

/// Decode an HL7 timestamp into a UTC instant.
///
/// Returns `None` if fewer than 8 digits are present or the value is not a valid date/time.
pub fn decode_datetime(value: &str) -> Option<DateTime<Utc>> {
    let (naive, offset) = parse_parts(value)?;
    match offset {
        Some(offset) => offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc)),
        None => Some(Utc.from_utc_datetime(&naive)),
    }
}

/// Decode only the calendar date of an HL7 timestamp, ignoring time and offset.
///
/// Suited to date-of-birth style fields where shifting across an offset would be wrong.
pub fn decode_date(value: &str) -> Option<NaiveDate> {
    parse_parts(value).map(|(naive, _)| naive.date())
}

fn parse_parts(value: &str) -> Option<(NaiveDateTime, Option<FixedOffset>)> {
    let value = value.trim();
    if value.len() < MIN_DATE_LEN {
        return None;
    }

    let (body, offset) = match value.find(|c: char| c == '+' || c == '-') {
        Some(idx) => (&value[..idx], Some(parse_offset(&value[idx..])?)),
        None => (value, None),
    };

    // Fractional seconds are accepted but not kept.
    let digits = body.split_once('.').map_or(body, |(whole, _)| whole);
    if digits.len() < MIN_DATE_LEN || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let year: i32 = digits[0..4].parse().ok()?;
    let month = two_digits(digits, 4)?;
    let day = two_digits(digits, 6)?;
    let hour = two_digits(digits, 8).unwrap_or(0);
    let minute = two_digits(digits, 10).unwrap_or(0);
    let second = two_digits(digits, 12).unwrap_or(0);

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
    Some((naive, offset))
}

fn two_digits(digits: &str, start: usize) -> Option<u32> {
    digits.get(start..start + 2)?.parse().ok()
}

fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let (sign, rest) = match raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => return None,
    };
    if rest.len() != 4 || !rest.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = rest[0..2].parse().ok()?;
    let minutes: i32 = rest[2..4].parse().ok()?;
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
