//! PV1 (patient visit) segment.

use super::Fields;
use crate::components::ProviderIdentifier;
use hl7_types::Delimiters;
use serde::Serialize;

mod field {
    pub const SET_ID: usize = 1;
    pub const PATIENT_CLASS: usize = 2;
    pub const ASSIGNED_PATIENT_LOCATION: usize = 3;
    pub const ADMISSION_TYPE: usize = 4;
    pub const PREADMIT_NUMBER: usize = 5;
    pub const PRIOR_PATIENT_LOCATION: usize = 6;
    pub const ATTENDING_DOCTOR: usize = 7;
    pub const REFERRING_DOCTOR: usize = 8;
    pub const CONSULTING_DOCTOR: usize = 9;
    pub const HOSPITAL_SERVICE: usize = 10;
    pub const ADMIT_SOURCE: usize = 14;
    pub const ADMITTING_DOCTOR: usize = 17;
    pub const PATIENT_TYPE: usize = 18;
    pub const VISIT_NUMBER: usize = 19;
    pub const FINANCIAL_CLASS: usize = 20;
    pub const DISCHARGE_DISPOSITION: usize = 36;
    pub const ADMIT_DATE_TIME: usize = 44;
    pub const DISCHARGE_DATE_TIME: usize = 45;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pv1Segment {
    pub set_id: String,
    pub patient_class: String,
    pub assigned_patient_location: String,
    pub admission_type: String,
    pub preadmit_number: String,
    pub prior_patient_location: String,
    pub attending_doctor: ProviderIdentifier,
    pub referring_doctor: ProviderIdentifier,
    /// PV1-9 repeats; one entry per repetition, empty when the field is empty.
    pub consulting_doctors: Vec<ProviderIdentifier>,
    pub hospital_service: String,
    pub admit_source: String,
    pub admitting_doctor: ProviderIdentifier,
    pub patient_type: String,
    pub visit_number: String,
    pub financial_class: String,
    pub discharge_disposition: String,
    pub admit_date_time: String,
    pub discharge_date_time: String,
}

impl Pv1Segment {
    pub(crate) fn from_fields(fields: &Fields<'_>, delimiters: &Delimiters) -> Self {
        let provider = |idx| ProviderIdentifier::decode(fields.get(idx), delimiters.component);

        Self {
            set_id: fields.text(field::SET_ID),
            patient_class: fields.text(field::PATIENT_CLASS),
            assigned_patient_location: fields.text(field::ASSIGNED_PATIENT_LOCATION),
            admission_type: fields.text(field::ADMISSION_TYPE),
            preadmit_number: fields.text(field::PREADMIT_NUMBER),
            prior_patient_location: fields.text(field::PRIOR_PATIENT_LOCATION),
            attending_doctor: provider(field::ATTENDING_DOCTOR),
            referring_doctor: provider(field::REFERRING_DOCTOR),
            consulting_doctors: ProviderIdentifier::decode_repeated(
                fields.get(field::CONSULTING_DOCTOR),
                delimiters.repetition,
                delimiters.component,
            ),
            hospital_service: fields.text(field::HOSPITAL_SERVICE),
            admit_source: fields.text(field::ADMIT_SOURCE),
            admitting_doctor: provider(field::ADMITTING_DOCTOR),
            patient_type: fields.text(field::PATIENT_TYPE),
            visit_number: fields.text(field::VISIT_NUMBER),
            financial_class: fields.text(field::FINANCIAL_CLASS),
            discharge_disposition: fields.text(field::DISCHARGE_DISPOSITION),
            admit_date_time: fields.text(field::ADMIT_DATE_TIME),
            discharge_date_time: fields.text(field::DISCHARGE_DATE_TIME),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Pv1Segment {
        let d = Delimiters::default();
        Pv1Segment::from_fields(&Fields::split(line, &d).expect("split"), &d)
    }

    #[test]
    fn maps_providers_and_visit_fields() {
        let pv1 = parse(
            "PV1|1|O|DERM^101^A||||1234^Smith^Jane|5678^Jones^Tom|111^Adams^Ann~222^Baker^Bob|DER|||||||9012^Lee^Kim||V100|SELF",
        );
        assert_eq!(pv1.patient_class, "O");
        assert_eq!(pv1.assigned_patient_location, "DERM^101^A");
        assert_eq!(pv1.attending_doctor.id, "1234");
        assert_eq!(pv1.attending_doctor.last_name, "Smith");
        assert_eq!(pv1.attending_doctor.first_name, "Jane");
        assert_eq!(pv1.referring_doctor.last_name, "Jones");
        assert_eq!(pv1.consulting_doctors.len(), 2);
        assert_eq!(pv1.consulting_doctors[1].first_name, "Bob");
        assert_eq!(pv1.hospital_service, "DER");
        assert_eq!(pv1.admitting_doctor.id, "9012");
        assert_eq!(pv1.visit_number, "V100");
        assert_eq!(pv1.financial_class, "SELF");
    }

    #[test]
    fn empty_consulting_field_has_no_doctors() {
        let pv1 = parse("PV1|1|O");
        assert!(pv1.consulting_doctors.is_empty());
        assert_eq!(pv1.attending_doctor, ProviderIdentifier::default());
        assert_eq!(pv1.visit_number, "");
    }
}
