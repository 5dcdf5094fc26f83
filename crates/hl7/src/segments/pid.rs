//! PID (patient identification) segment.

use super::Fields;
use crate::components::{Address, Components, PersonName};
use crate::datetime::decode_date;
use chrono::NaiveDate;
use hl7_types::Delimiters;
use serde::Serialize;

mod field {
    pub const SET_ID: usize = 1;
    pub const PATIENT_ID: usize = 2;
    pub const PATIENT_IDENTIFIER_LIST: usize = 3;
    pub const ALTERNATE_PATIENT_ID: usize = 4;
    pub const PATIENT_NAME: usize = 5;
    pub const MOTHERS_MAIDEN_NAME: usize = 6;
    pub const DATE_OF_BIRTH: usize = 7;
    pub const SEX: usize = 8;
    pub const PATIENT_ALIAS: usize = 9;
    pub const RACE: usize = 10;
    pub const PATIENT_ADDRESS: usize = 11;
    pub const COUNTY_CODE: usize = 12;
    pub const HOME_PHONE: usize = 13;
    pub const BUSINESS_PHONE: usize = 14;
    pub const PRIMARY_LANGUAGE: usize = 15;
    pub const MARITAL_STATUS: usize = 16;
    pub const RELIGION: usize = 17;
    pub const ACCOUNT_NUMBER: usize = 18;
    pub const SSN: usize = 19;
    pub const DRIVERS_LICENSE: usize = 20;
    pub const ETHNIC_GROUP: usize = 22;
    pub const DEATH_DATE_TIME: usize = 29;
    pub const DEATH_INDICATOR: usize = 30;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PidSegment {
    pub set_id: String,
    /// PID-2, the external patient ID.
    pub patient_id: String,
    /// PID-3 as received (may carry several components and repetitions).
    pub patient_identifier_list: String,
    /// First component of PID-3, used as the practice's own record number.
    pub internal_patient_id: String,
    pub alternate_patient_id: String,
    pub patient_name: PersonName,
    pub mothers_maiden_name: String,
    pub date_of_birth: String,
    pub sex: String,
    pub patient_alias: String,
    pub race: String,
    pub address: Address,
    pub county_code: String,
    pub home_phone: String,
    pub business_phone: String,
    pub primary_language: String,
    pub marital_status: String,
    pub religion: String,
    pub account_number: String,
    pub ssn: String,
    pub drivers_license: String,
    pub ethnic_group: String,
    pub death_date_time: String,
    pub death_indicator: String,
}

impl PidSegment {
    pub(crate) fn from_fields(fields: &Fields<'_>, delimiters: &Delimiters) -> Self {
        let identifiers = fields.get(field::PATIENT_IDENTIFIER_LIST);
        // Only the first repetition's first component names the internal ID.
        let first_identifier = identifiers
            .split(delimiters.repetition)
            .next()
            .unwrap_or("");

        Self {
            set_id: fields.text(field::SET_ID),
            patient_id: fields.text(field::PATIENT_ID),
            patient_identifier_list: identifiers.to_string(),
            internal_patient_id: Components::new(first_identifier, delimiters.component).text(0),
            alternate_patient_id: fields.text(field::ALTERNATE_PATIENT_ID),
            patient_name: PersonName::decode(
                fields.get(field::PATIENT_NAME),
                delimiters.component,
            ),
            mothers_maiden_name: fields.text(field::MOTHERS_MAIDEN_NAME),
            date_of_birth: fields.text(field::DATE_OF_BIRTH),
            sex: fields.text(field::SEX),
            patient_alias: fields.text(field::PATIENT_ALIAS),
            race: fields.text(field::RACE),
            address: Address::decode(fields.get(field::PATIENT_ADDRESS), delimiters.component),
            county_code: fields.text(field::COUNTY_CODE),
            home_phone: fields.text(field::HOME_PHONE),
            business_phone: fields.text(field::BUSINESS_PHONE),
            primary_language: fields.text(field::PRIMARY_LANGUAGE),
            marital_status: fields.text(field::MARITAL_STATUS),
            religion: fields.text(field::RELIGION),
            account_number: fields.text(field::ACCOUNT_NUMBER),
            ssn: fields.text(field::SSN),
            drivers_license: fields.text(field::DRIVERS_LICENSE),
            ethnic_group: fields.text(field::ETHNIC_GROUP),
            death_date_time: fields.text(field::DEATH_DATE_TIME),
            death_indicator: fields.text(field::DEATH_INDICATOR),
        }
    }

    /// Date of birth as a calendar date, if PID-7 holds at least `YYYYMMDD`.
    pub fn birth_date(&self) -> Option<NaiveDate> {
        decode_date(&self.date_of_birth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> PidSegment {
        let d = Delimiters::default();
        PidSegment::from_fields(&Fields::split(line, &d).expect("split"), &d)
    }

    #[test]
    fn maps_sample_pid() {
        let pid = parse("PID|1||MRN123456||Doe^John^Q||19900115|M");
        assert_eq!(pid.set_id, "1");
        assert_eq!(pid.patient_id, "");
        assert_eq!(pid.patient_identifier_list, "MRN123456");
        assert_eq!(pid.internal_patient_id, "MRN123456");
        assert_eq!(pid.patient_name.last, "Doe");
        assert_eq!(pid.patient_name.first, "John");
        assert_eq!(pid.patient_name.middle, "Q");
        assert_eq!(pid.date_of_birth, "19900115");
        assert_eq!(pid.sex, "M");
        assert_eq!(pid.birth_date(), NaiveDate::from_ymd_opt(1990, 1, 15));
    }

    #[test]
    fn internal_id_uses_first_component_of_first_repetition() {
        let pid = parse("PID|1|EXT9|MRN1^^^DERM^MR~SSN9^^^SSA^SS");
        assert_eq!(pid.patient_id, "EXT9");
        assert_eq!(pid.internal_patient_id, "MRN1");
        assert_eq!(pid.patient_identifier_list, "MRN1^^^DERM^MR~SSN9^^^SSA^SS");
    }

    #[test]
    fn decodes_address_and_contact_fields() {
        let pid = parse(
            "PID|1||MRN1||Roe^Jane||19851203|F|||12 Elm St^Apt 4^Austin^TX^78701^USA||(512)555-0100|(512)555-0199|EN|M",
        );
        assert_eq!(pid.address.street, "12 Elm St");
        assert_eq!(pid.address.other_designation, "Apt 4");
        assert_eq!(pid.address.city, "Austin");
        assert_eq!(pid.address.country, "USA");
        assert_eq!(pid.home_phone, "(512)555-0100");
        assert_eq!(pid.business_phone, "(512)555-0199");
        assert_eq!(pid.primary_language, "EN");
        assert_eq!(pid.marital_status, "M");
    }

    #[test]
    fn short_segment_fills_empty_strings() {
        let pid = parse("PID|1");
        assert_eq!(pid.internal_patient_id, "");
        assert_eq!(pid.patient_name, PersonName::default());
        assert_eq!(pid.address, Address::default());
        assert_eq!(pid.birth_date(), None);
    }
}
