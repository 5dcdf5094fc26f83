//! OBX (observation/result) segment.
//!
//! A message may carry any number of OBX segments; they are kept in order of appearance.

use super::Fields;
use crate::components::CodedElement;
use hl7_types::Delimiters;
use serde::Serialize;

mod field {
    pub const SET_ID: usize = 1;
    pub const VALUE_TYPE: usize = 2;
    pub const OBSERVATION_IDENTIFIER: usize = 3;
    pub const OBSERVATION_SUB_ID: usize = 4;
    pub const OBSERVATION_VALUE: usize = 5;
    pub const UNITS: usize = 6;
    pub const REFERENCES_RANGE: usize = 7;
    pub const ABNORMAL_FLAGS: usize = 8;
    pub const PROBABILITY: usize = 9;
    pub const NATURE_OF_ABNORMAL_TEST: usize = 10;
    pub const OBSERVATION_RESULT_STATUS: usize = 11;
    pub const EFFECTIVE_DATE_OF_REFERENCE_RANGE: usize = 12;
    pub const USER_DEFINED_ACCESS_CHECKS: usize = 13;
    pub const DATE_TIME_OF_OBSERVATION: usize = 14;
    pub const PRODUCERS_ID: usize = 15;
    pub const RESPONSIBLE_OBSERVER: usize = 16;
    pub const OBSERVATION_METHOD: usize = 17;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObxSegment {
    pub set_id: String,
    pub value_type: String,
    pub observation_identifier: CodedElement,
    pub observation_sub_id: String,
    pub observation_value: String,
    pub units: String,
    pub references_range: String,
    pub abnormal_flags: String,
    pub probability: String,
    pub nature_of_abnormal_test: String,
    pub observation_result_status: String,
    pub effective_date_of_reference_range: String,
    pub user_defined_access_checks: String,
    pub date_time_of_observation: String,
    pub producers_id: String,
    pub responsible_observer: String,
    pub observation_method: String,
}

impl ObxSegment {
    pub(crate) fn from_fields(fields: &Fields<'_>, delimiters: &Delimiters) -> Self {
        Self {
            set_id: fields.text(field::SET_ID),
            value_type: fields.text(field::VALUE_TYPE),
            observation_identifier: CodedElement::decode(
                fields.get(field::OBSERVATION_IDENTIFIER),
                delimiters.component,
            ),
            observation_sub_id: fields.text(field::OBSERVATION_SUB_ID),
            observation_value: fields.text(field::OBSERVATION_VALUE),
            units: fields.text(field::UNITS),
            references_range: fields.text(field::REFERENCES_RANGE),
            abnormal_flags: fields.text(field::ABNORMAL_FLAGS),
            probability: fields.text(field::PROBABILITY),
            nature_of_abnormal_test: fields.text(field::NATURE_OF_ABNORMAL_TEST),
            observation_result_status: fields.text(field::OBSERVATION_RESULT_STATUS),
            effective_date_of_reference_range: fields
                .text(field::EFFECTIVE_DATE_OF_REFERENCE_RANGE),
            user_defined_access_checks: fields.text(field::USER_DEFINED_ACCESS_CHECKS),
            date_time_of_observation: fields.text(field::DATE_TIME_OF_OBSERVATION),
            producers_id: fields.text(field::PRODUCERS_ID),
            responsible_observer: fields.text(field::RESPONSIBLE_OBSERVER),
            observation_method: fields.text(field::OBSERVATION_METHOD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_lab_result() {
        let d = Delimiters::default();
        let line = "OBX|1|NM|2345-7^Glucose^LN||95|mg/dL|70-99|N|||F|||20250106083000";
        let obx = ObxSegment::from_fields(&Fields::split(line, &d).expect("split"), &d);
        assert_eq!(obx.set_id, "1");
        assert_eq!(obx.value_type, "NM");
        assert_eq!(obx.observation_identifier.code, "2345-7");
        assert_eq!(obx.observation_identifier.text, "Glucose");
        assert_eq!(obx.observation_identifier.coding_system, "LN");
        assert_eq!(obx.observation_value, "95");
        assert_eq!(obx.units, "mg/dL");
        assert_eq!(obx.references_range, "70-99");
        assert_eq!(obx.abnormal_flags, "N");
        assert_eq!(obx.observation_result_status, "F");
        assert_eq!(obx.date_time_of_observation, "20250106083000");
        assert_eq!(obx.responsible_observer, "");
    }
}
