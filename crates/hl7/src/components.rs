//! Composite field decoding.
//!
//! A field may be subdivided into ordered components (`^`) and may repeat (`~`). The helpers
//! here split on whichever characters the message declared in MSH-2, and decode the few
//! composite data types the segment parsers need.
//!
//! Components are addressed positionally. A component the sender left off is read as the
//! empty string, so `Doe^John` decodes to a name with an empty middle name rather than a
//! shorter list.
//!
//! Escape sequences (`\F\`, `\S\`, `\Xhh\`, ...) and sub-components (`&`) are passed
//! through untouched.

use serde::Serialize;

/// Split a field into its components.
///
/// An empty field yields a single empty component.
pub fn split_components(field: &str, separator: char) -> Vec<&str> {
    field.split(separator).collect()
}

/// Split a field into its repetitions.
///
/// An empty field has no repetitions.
pub fn split_repetitions(field: &str, separator: char) -> Vec<&str> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(separator).collect()
}

/// Positional view over the components of one field.
#[derive(Debug, Clone)]
pub struct Components<'a>(Vec<&'a str>);

impl<'a> Components<'a> {
    pub fn new(field: &'a str, separator: char) -> Self {
        Self(split_components(field, separator))
    }

    /// Returns component `idx` (zero-based), or `""` if the sender left it off.
    pub fn get(&self, idx: usize) -> &'a str {
        self.0.get(idx).copied().unwrap_or("")
    }

    pub fn text(&self, idx: usize) -> String {
        self.get(idx).to_string()
    }
}

/// Extended person name (XPN): `family^given^middle^suffix^prefix`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub last: String,
    pub first: String,
    pub middle: String,
    pub suffix: String,
    pub prefix: String,
}

impl PersonName {
    pub fn decode(field: &str, component: char) -> Self {
        let c = Components::new(field, component);
        Self {
            last: c.text(0),
            first: c.text(1),
            middle: c.text(2),
            suffix: c.text(3),
            prefix: c.text(4),
        }
    }
}

/// Extended address (XAD): `street^other designation^city^state^zip^country`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub other_designation: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Address {
    pub fn decode(field: &str, component: char) -> Self {
        let c = Components::new(field, component);
        Self {
            street: c.text(0),
            other_designation: c.text(1),
            city: c.text(2),
            state: c.text(3),
            zip: c.text(4),
            country: c.text(5),
        }
    }
}

/// Coded element (CE): `identifier^text^name of coding system`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodedElement {
    pub code: String,
    pub text: String,
    pub coding_system: String,
}

impl CodedElement {
    pub fn decode(field: &str, component: char) -> Self {
        let c = Components::new(field, component);
        Self {
            code: c.text(0),
            text: c.text(1),
            coding_system: c.text(2),
        }
    }
}

/// Extended composite ID number and name for persons (XCN), first three components:
/// `id^family^given`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderIdentifier {
    pub id: String,
    pub last_name: String,
    pub first_name: String,
}

impl ProviderIdentifier {
    pub fn decode(field: &str, component: char) -> Self {
        let c = Components::new(field, component);
        Self {
            id: c.text(0),
            last_name: c.text(1),
            first_name: c.text(2),
        }
    }

    /// Decode every repetition of a repeating XCN field.
    pub fn decode_repeated(field: &str, repetition: char, component: char) -> Vec<Self> {
        split_repetitions(field, repetition)
            .into_iter()
            .map(|rep| Self::decode(rep, component))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_trailing_components_are_empty() {
        let c = Components::new("Doe^John", '^');
        assert_eq!(c.get(0), "Doe");
        assert_eq!(c.get(1), "John");
        assert_eq!(c.get(2), "");
        assert_eq!(c.get(9), "");
    }

    #[test]
    fn empty_field_has_no_repetitions() {
        assert!(split_repetitions("", '~').is_empty());
        assert_eq!(split_repetitions("A~B~", '~'), vec!["A", "B", ""]);
    }

    #[test]
    fn decodes_person_name() {
        let name = PersonName::decode("Doe^John^Q^Jr^Dr", '^');
        assert_eq!(
            name,
            PersonName {
                last: "Doe".into(),
                first: "John".into(),
                middle: "Q".into(),
                suffix: "Jr".into(),
                prefix: "Dr".into(),
            }
        );
    }

    #[test]
    fn decodes_address_with_gaps() {
        let addr = Address::decode("123 Main St^^Springfield^IL^62704", '^');
        assert_eq!(addr.street, "123 Main St");
        assert_eq!(addr.other_designation, "");
        assert_eq!(addr.city, "Springfield");
        assert_eq!(addr.state, "IL");
        assert_eq!(addr.zip, "62704");
        assert_eq!(addr.country, "");
    }

    #[test]
    fn decodes_coded_element() {
        let ce = CodedElement::decode("2345-7^Glucose^LN", '^');
        assert_eq!(ce.code, "2345-7");
        assert_eq!(ce.text, "Glucose");
        assert_eq!(ce.coding_system, "LN");
    }

    #[test]
    fn decodes_with_declared_component_separator() {
        let provider = ProviderIdentifier::decode("1234$Smith$Jane", '$');
        assert_eq!(provider.id, "1234");
        assert_eq!(provider.last_name, "Smith");
        assert_eq!(provider.first_name, "Jane");
    }

    #[test]
    fn decodes_repeated_providers() {
        let providers =
            ProviderIdentifier::decode_repeated("111^Adams^Ann~222^Baker", '~', '^');
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[0].last_name, "Adams");
        assert_eq!(providers[1].id, "222");
        assert_eq!(providers[1].first_name, "");
    }

    #[test]
    fn escape_and_subcomponents_pass_through() {
        let name = PersonName::decode("O\\T\\Brien^Mary&Ann", '^');
        assert_eq!(name.last, "O\\T\\Brien");
        assert_eq!(name.first, "Mary&Ann");
    }
}
