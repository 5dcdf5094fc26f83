//! Shared HL7 v2.x value types.
//!
//! These types are small, validated carriers used by both the codec and its callers:
//! - [`Delimiters`]: the per-message encoding characters declared in MSH-1 and MSH-2.
//! - [`AckCode`]: the original-mode acknowledgment codes carried in MSA-1.

use std::fmt;
use std::str::FromStr;

/// Errors that can occur when building a [`Delimiters`] set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DelimiterError {
    /// A delimiter was a letter, digit or whitespace character.
    #[error("delimiter '{0}' must not be alphanumeric or whitespace")]
    NotPunctuation(char),

    /// The same character was declared for two different roles.
    #[error("delimiter '{0}' is declared more than once")]
    Duplicate(char),

    /// More encoding characters than HL7 defines were declared.
    #[error("encoding characters '{0}' exceed the 4 defined positions")]
    TooManyEncodingCharacters(String),
}

/// The five separator characters that govern how a message is split.
///
/// The field separator is MSH-1; the remaining four come from the MSH-2 encoding-character
/// block in the order component, repetition, escape, sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delimiters {
    pub field: char,
    pub component: char,
    pub repetition: char,
    pub escape: char,
    pub subcomponent: char,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            field: '|',
            component: '^',
            repetition: '~',
            escape: '\\',
            subcomponent: '&',
        }
    }
}

impl Delimiters {
    /// Builds a delimiter set from a field separator and an MSH-2 encoding-character block.
    ///
    /// Positions missing from a short block fall back to the standard characters
    /// (`^~\&`), so `"^~"` declares only the component and repetition separators.
    ///
    /// # Errors
    ///
    /// Returns [`DelimiterError`] if the block is longer than four characters, if any
    /// declared delimiter is alphanumeric or whitespace, or if a declared character is used
    /// twice. A fallback that happens to equal a declared character is not an error.
    pub fn from_encoding_characters(field: char, encoding: &str) -> Result<Self, DelimiterError> {
        let declared: Vec<char> = encoding.chars().collect();
        if declared.len() > 4 {
            return Err(DelimiterError::TooManyEncodingCharacters(
                encoding.to_string(),
            ));
        }

        let standard = Self::default();
        let pick = |idx: usize, fallback: char| declared.get(idx).copied().unwrap_or(fallback);

        // Only what the sender declared must be distinct; fallbacks fill the gaps as-is.
        let mut explicit = Vec::with_capacity(declared.len() + 1);
        explicit.push(field);
        explicit.extend_from_slice(&declared);
        check_declared(&explicit)?;

        Ok(Self {
            field,
            component: pick(0, standard.component),
            repetition: pick(1, standard.repetition),
            escape: pick(2, standard.escape),
            subcomponent: pick(3, standard.subcomponent),
        })
    }

    fn as_array(&self) -> [char; 5] {
        [
            self.field,
            self.component,
            self.repetition,
            self.escape,
            self.subcomponent,
        ]
    }

    /// Returns the MSH-2 block for these delimiters, e.g. `^~\&`.
    pub fn encoding_characters(&self) -> String {
        [self.component, self.repetition, self.escape, self.subcomponent]
            .iter()
            .collect()
    }

    /// Returns `true` if `c` is one of the five delimiters.
    pub fn is_delimiter(&self, c: char) -> bool {
        self.as_array().contains(&c)
    }
}

fn check_declared(declared: &[char]) -> Result<(), DelimiterError> {
    for (idx, c) in declared.iter().enumerate() {
        if c.is_alphanumeric() || c.is_whitespace() {
            return Err(DelimiterError::NotPunctuation(*c));
        }
        if declared[..idx].contains(c) {
            return Err(DelimiterError::Duplicate(*c));
        }
    }
    Ok(())
}

/// Error returned when parsing an acknowledgment code from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid acknowledgment code '{0}' (expected AA, AE or AR)")]
pub struct AckCodeError(pub String);

/// Original-mode acknowledgment code (MSA-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AckCode {
    /// Application accept: the message was accepted and applied.
    #[serde(rename = "AA")]
    Accept,
    /// Application error: the message was understood but processing failed.
    #[serde(rename = "AE")]
    Error,
    /// Application reject: the message was refused outright.
    #[serde(rename = "AR")]
    Reject,
}

impl AckCode {
    /// Returns the two-letter wire code.
    pub fn as_str(self) -> &'static str {
        match self {
            AckCode::Accept => "AA",
            AckCode::Error => "AE",
            AckCode::Reject => "AR",
        }
    }
}

impl fmt::Display for AckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AckCode {
    type Err = AckCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AA" => Ok(AckCode::Accept),
            "AE" => Ok(AckCode::Error),
            "AR" => Ok(AckCode::Reject),
            _ => Err(AckCodeError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_delimiters_are_standard() {
        let d = Delimiters::default();
        assert_eq!(d.field, '|');
        assert_eq!(d.encoding_characters(), "^~\\&");
    }

    #[test]
    fn builds_from_full_encoding_block() {
        let d = Delimiters::from_encoding_characters('#', "$*\\!").expect("valid block");
        assert_eq!(d.field, '#');
        assert_eq!(d.component, '$');
        assert_eq!(d.repetition, '*');
        assert_eq!(d.escape, '\\');
        assert_eq!(d.subcomponent, '!');
    }

    #[test]
    fn short_block_falls_back_to_standard_characters() {
        let d = Delimiters::from_encoding_characters('|', "^~").expect("valid block");
        assert_eq!(d.escape, '\\');
        assert_eq!(d.subcomponent, '&');
    }

    #[test]
    fn fallback_may_match_declared_field_separator() {
        let d = Delimiters::from_encoding_characters('&', "^~\\").expect("valid block");
        assert_eq!(d.field, '&');
        assert_eq!(d.escape, '\\');
        assert_eq!(d.subcomponent, '&');
    }

    #[test]
    fn rejects_duplicate_delimiters() {
        let err = Delimiters::from_encoding_characters('|', "^|\\&").expect_err("duplicate");
        assert_eq!(err, DelimiterError::Duplicate('|'));
    }

    #[test]
    fn rejects_alphanumeric_delimiters() {
        let err = Delimiters::from_encoding_characters('A', "^~\\&").expect_err("alphanumeric");
        assert_eq!(err, DelimiterError::NotPunctuation('A'));
    }

    #[test]
    fn rejects_overlong_block() {
        let err = Delimiters::from_encoding_characters('|', "^~\\&#!").expect_err("too long");
        assert!(matches!(err, DelimiterError::TooManyEncodingCharacters(_)));
    }

    #[test]
    fn is_delimiter_covers_all_five() {
        let d = Delimiters::default();
        for c in ['|', '^', '~', '\\', '&'] {
            assert!(d.is_delimiter(c));
        }
        assert!(!d.is_delimiter('A'));
    }

    #[test]
    fn ack_code_parses_case_insensitively() {
        assert_eq!("aa".parse::<AckCode>(), Ok(AckCode::Accept));
        assert_eq!("AE".parse::<AckCode>(), Ok(AckCode::Error));
        assert_eq!(" ar ".parse::<AckCode>(), Ok(AckCode::Reject));
    }

    #[test]
    fn ack_code_rejects_unknown_values() {
        let err = "CA".parse::<AckCode>().expect_err("enhanced mode codes unsupported");
        assert!(err.to_string().contains("CA"));
    }

    #[test]
    fn ack_code_serialises_as_wire_code() {
        let json = serde_json::to_string(&AckCode::Error).expect("serialise");
        assert_eq!(json, "\"AE\"");
    }
}
