//! SCH (scheduling activity information) segment.

use super::Fields;
use serde::Serialize;

mod field {
    pub const PLACER_APPOINTMENT_ID: usize = 1;
    pub const FILLER_APPOINTMENT_ID: usize = 2;
    pub const OCCURRENCE_NUMBER: usize = 3;
    pub const PLACER_GROUP_NUMBER: usize = 4;
    pub const SCHEDULE_ID: usize = 5;
    pub const EVENT_REASON: usize = 6;
    pub const APPOINTMENT_REASON: usize = 7;
    pub const APPOINTMENT_TYPE: usize = 8;
    pub const APPOINTMENT_DURATION: usize = 9;
    pub const APPOINTMENT_DURATION_UNITS: usize = 10;
    pub const APPOINTMENT_TIMING_QUANTITY: usize = 11;
    pub const PLACER_CONTACT_PERSON: usize = 12;
    pub const PLACER_CONTACT_PHONE: usize = 13;
    pub const PLACER_CONTACT_ADDRESS: usize = 14;
    pub const PLACER_CONTACT_LOCATION: usize = 15;
    pub const FILLER_CONTACT_PERSON: usize = 16;
    pub const FILLER_CONTACT_PHONE: usize = 17;
    pub const FILLER_CONTACT_ADDRESS: usize = 18;
    pub const FILLER_CONTACT_LOCATION: usize = 19;
    pub const ENTERED_BY_PERSON: usize = 20;
    pub const ENTERED_BY_PHONE: usize = 21;
    pub const ENTERED_BY_LOCATION: usize = 22;
    pub const PARENT_PLACER_APPOINTMENT_ID: usize = 23;
    pub const PARENT_FILLER_APPOINTMENT_ID: usize = 24;
    pub const FILLER_STATUS_CODE: usize = 25;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchSegment {
    pub placer_appointment_id: String,
    pub filler_appointment_id: String,
    pub occurrence_number: String,
    pub placer_group_number: String,
    pub schedule_id: String,
    pub event_reason: String,
    pub appointment_reason: String,
    pub appointment_type: String,
    pub appointment_duration: String,
    pub appointment_duration_units: String,
    pub appointment_timing_quantity: String,
    pub placer_contact_person: String,
    pub placer_contact_phone: String,
    pub placer_contact_address: String,
    pub placer_contact_location: String,
    pub filler_contact_person: String,
    pub filler_contact_phone: String,
    pub filler_contact_address: String,
    pub filler_contact_location: String,
    pub entered_by_person: String,
    pub entered_by_phone: String,
    pub entered_by_location: String,
    pub parent_placer_appointment_id: String,
    pub parent_filler_appointment_id: String,
    pub filler_status_code: String,
}

impl SchSegment {
    pub(crate) fn from_fields(fields: &Fields<'_>) -> Self {
        Self {
            placer_appointment_id: fields.text(field::PLACER_APPOINTMENT_ID),
            filler_appointment_id: fields.text(field::FILLER_APPOINTMENT_ID),
            occurrence_number: fields.text(field::OCCURRENCE_NUMBER),
            placer_group_number: fields.text(field::PLACER_GROUP_NUMBER),
            schedule_id: fields.text(field::SCHEDULE_ID),
            event_reason: fields.text(field::EVENT_REASON),
            appointment_reason: fields.text(field::APPOINTMENT_REASON),
            appointment_type: fields.text(field::APPOINTMENT_TYPE),
            appointment_duration: fields.text(field::APPOINTMENT_DURATION),
            appointment_duration_units: fields.text(field::APPOINTMENT_DURATION_UNITS),
            appointment_timing_quantity: fields.text(field::APPOINTMENT_TIMING_QUANTITY),
            placer_contact_person: fields.text(field::PLACER_CONTACT_PERSON),
            placer_contact_phone: fields.text(field::PLACER_CONTACT_PHONE),
            placer_contact_address: fields.text(field::PLACER_CONTACT_ADDRESS),
            placer_contact_location: fields.text(field::PLACER_CONTACT_LOCATION),
            filler_contact_person: fields.text(field::FILLER_CONTACT_PERSON),
            filler_contact_phone: fields.text(field::FILLER_CONTACT_PHONE),
            filler_contact_address: fields.text(field::FILLER_CONTACT_ADDRESS),
            filler_contact_location: fields.text(field::FILLER_CONTACT_LOCATION),
            entered_by_person: fields.text(field::ENTERED_BY_PERSON),
            entered_by_phone: fields.text(field::ENTERED_BY_PHONE),
            entered_by_location: fields.text(field::ENTERED_BY_LOCATION),
            parent_placer_appointment_id: fields.text(field::PARENT_PLACER_APPOINTMENT_ID),
            parent_filler_appointment_id: fields.text(field::PARENT_FILLER_APPOINTMENT_ID),
            filler_status_code: fields.text(field::FILLER_STATUS_CODE),
        }
    }
}
