//! AIP (appointment information, personnel resource) segment.

use super::Fields;
use crate::components::ProviderIdentifier;
use hl7_types::Delimiters;
use serde::Serialize;

mod field {
    pub const SET_ID: usize = 1;
    pub const SEGMENT_ACTION_CODE: usize = 2;
    pub const PERSONNEL_RESOURCE_ID: usize = 3;
    pub const RESOURCE_TYPE: usize = 4;
    pub const RESOURCE_GROUP: usize = 5;
    pub const START_DATE_TIME: usize = 6;
    pub const START_DATE_TIME_OFFSET: usize = 7;
    pub const START_DATE_TIME_OFFSET_UNITS: usize = 8;
    pub const DURATION: usize = 9;
    pub const DURATION_UNITS: usize = 10;
    pub const ALLOW_SUBSTITUTION_CODE: usize = 11;
    pub const FILLER_STATUS_CODE: usize = 12;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AipSegment {
    pub set_id: String,
    pub segment_action_code: String,
    pub personnel_resource_id: ProviderIdentifier,
    pub resource_type: String,
    pub resource_group: String,
    pub start_date_time: String,
    pub start_date_time_offset: String,
    pub start_date_time_offset_units: String,
    pub duration: String,
    pub duration_units: String,
    pub allow_substitution_code: String,
    pub filler_status_code: String,
}

impl AipSegment {
    pub(crate) fn from_fields(fields: &Fields<'_>, delimiters: &Delimiters) -> Self {
        Self {
            set_id: fields.text(field::SET_ID),
            segment_action_code: fields.text(field::SEGMENT_ACTION_CODE),
            personnel_resource_id: ProviderIdentifier::decode(
                fields.get(field::PERSONNEL_RESOURCE_ID),
                delimiters.component,
            ),
            resource_type: fields.text(field::RESOURCE_TYPE),
            resource_group: fields.text(field::RESOURCE_GROUP),
            start_date_time: fields.text(field::START_DATE_TIME),
            start_date_time_offset: fields.text(field::START_DATE_TIME_OFFSET),
            start_date_time_offset_units: fields.text(field::START_DATE_TIME_OFFSET_UNITS),
            duration: fields.text(field::DURATION),
            duration_units: fields.text(field::DURATION_UNITS),
            allow_substitution_code: fields.text(field::ALLOW_SUBSTITUTION_CODE),
            filler_status_code: fields.text(field::FILLER_STATUS_CODE),
        }
    }
}
