//! AIL (appointment information, location resource) segment.

use super::Fields;
use serde::Serialize;

mod field {
    pub const SET_ID: usize = 1;
    pub const SEGMENT_ACTION_CODE: usize = 2;
    pub const LOCATION_RESOURCE_ID: usize = 3;
    pub const LOCATION_TYPE: usize = 4;
    pub const LOCATION_GROUP: usize = 5;
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
pub struct AilSegment {
    pub set_id: String,
    pub segment_action_code: String,
    pub location_resource_id: String,
    pub location_type: String,
    pub location_group: String,
    pub start_date_time: String,
    pub start_date_time_offset: String,
    pub start_date_time_offset_units: String,
    pub duration: String,
    pub duration_units: String,
    pub allow_substitution_code: String,
    pub filler_status_code: String,
}

impl AilSegment {
    pub(crate) fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            set_id: fields.text(field::SET_ID),
            segment_action_code: fields.text(field::SEGMENT_ACTION_CODE),
            location_resource_id: fields.text(field::LOCATION_RESOURCE_ID),
            location_type: fields.text(field::LOCATION_TYPE),
            location_group: fields.text(field::LOCATION_GROUP),
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

#[cfg(test)]
mod tests {
    use super::*;
    use hl7_types::Delimiters;

    #[test]
    fn maps_location_resource() {
        let line = "AIL|1|A|ROOM3^^^DERMCLINIC|EXAM||20250110093000|||30|min||Booked";
        let ail = AilSegment::from_fields(&Fields::split(line, &Delimiters::default()).expect("split"));
        assert_eq!(ail.set_id, "1");
        assert_eq!(ail.segment_action_code, "A");
        assert_eq!(ail.location_resource_id, "ROOM3^^^DERMCLINIC");
        assert_eq!(ail.location_type, "EXAM");
        assert_eq!(ail.start_date_time, "20250110093000");
        assert_eq!(ail.duration, "30");
        assert_eq!(ail.duration_units, "min");
        assert_eq!(ail.filler_status_code, "Booked");
    }
}
