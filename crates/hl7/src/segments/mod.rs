//! Typed segment records.
//!
//! Each supported segment type has a record filled from fixed field positions. The
//! position-to-attribute mapping lives in a `field` table next to each record, so that
//! record construction reads by name rather than by bare index.
//!
//! Conventions shared by every record:
//! - Field numbering follows the HL7 standard (`PID-5` is index 5; index 0 is the tag).
//! - A field the sender left off is the empty string, never an error.
//! - Composite fields are decoded with the message's own component separator.
//!
//! MSH is special: the field separator sits at a fixed offset and is itself MSH-1, so it is
//! parsed first and by hand (see [`msh`]). The remaining segments are parsed with the
//! delimiters it declares.

pub mod ail;
pub mod aip;
pub mod msh;
pub mod obx;
pub mod pid;
pub mod pv1;
pub mod sch;

pub use ail::AilSegment;
pub use aip::AipSegment;
pub use msh::MshSegment;
pub use obx::ObxSegment;
pub use pid::PidSegment;
pub use pv1::Pv1Segment;
pub use sch::SchSegment;

use crate::tokenizer::RawSegment;
use crate::SegmentError;
use hl7_types::Delimiters;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// Positional view over the fields of one segment line.
#[derive(Debug, Clone)]
pub(crate) struct Fields<'a> {
    values: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Split a (non-MSH) segment line on the field separator.
    ///
    /// The character right after the 3-character tag must be the field separator, unless the
    /// segment carries no fields at all.
    pub(crate) fn split(line: &'a str, delimiters: &Delimiters) -> Result<Self, SegmentError> {
        let after_tag = line.get(3..).unwrap_or("");
        if let Some(found) = after_tag.chars().next() {
            if found != delimiters.field {
                return Err(SegmentError::MissingFieldSeparator {
                    expected: delimiters.field,
                    found,
                });
            }
        }

        Ok(Self {
            values: line.split(delimiters.field).collect(),
        })
    }

    pub(crate) fn from_values(values: Vec<&'a str>) -> Self {
        Self { values }
    }

    /// Returns field `idx`, or `""` if the segment ends before it.
    pub(crate) fn get(&self, idx: usize) -> &'a str {
        self.values.get(idx).copied().unwrap_or("")
    }

    pub(crate) fn text(&self, idx: usize) -> String {
        self.get(idx).to_string()
    }
}

/// A segment line the codec does not model, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnrecognisedSegment {
    pub tag: String,
    pub raw: String,
}

/// One parsed body segment (everything except the MSH header).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Pid(PidSegment),
    Pv1(Pv1Segment),
    Obx(ObxSegment),
    Sch(SchSegment),
    Ail(AilSegment),
    Aip(AipSegment),
    Unrecognised(UnrecognisedSegment),
}

impl Segment {
    /// Returns the 3-character segment tag.
    pub fn tag(&self) -> &str {
        match self {
            Segment::Pid(_) => "PID",
            Segment::Pv1(_) => "PV1",
            Segment::Obx(_) => "OBX",
            Segment::Sch(_) => "SCH",
            Segment::Ail(_) => "AIL",
            Segment::Aip(_) => "AIP",
            Segment::Unrecognised(u) => &u.tag,
        }
    }
}

/// Parse one body segment with the delimiters declared by the message header.
///
/// Unrecognised tags are not inspected beyond their tag and are kept verbatim.
pub(crate) fn parse_segment(
    raw: RawSegment<'_>,
    delimiters: &Delimiters,
) -> Result<Segment, SegmentError> {
    let segment = match raw.tag {
        "PID" => Segment::Pid(PidSegment::from_fields(
            &Fields::split(raw.line, delimiters)?,
            delimiters,
        )),
        "PV1" => Segment::Pv1(Pv1Segment::from_fields(
            &Fields::split(raw.line, delimiters)?,
            delimiters,
        )),
        "OBX" => Segment::Obx(ObxSegment::from_fields(
            &Fields::split(raw.line, delimiters)?,
            delimiters,
        )),
        "SCH" => Segment::Sch(SchSegment::from_fields(&Fields::split(
            raw.line, delimiters,
        )?)),
        "AIL" => Segment::Ail(AilSegment::from_fields(&Fields::split(
            raw.line, delimiters,
        )?)),
        "AIP" => Segment::Aip(AipSegment::from_fields(
            &Fields::split(raw.line, delimiters)?,
            delimiters,
        )),
        "MSH" => return Err(SegmentError::DuplicateHeader),
        other => {
            tracing::debug!(tag = other, "keeping unrecognised segment verbatim");
            Segment::Unrecognised(UnrecognisedSegment {
                tag: other.to_string(),
                raw: raw.line.to_string(),
            })
        }
    };
    Ok(segment)
}

/// All segments of one message.
///
/// The MSH header is always present; a `Segments` value cannot be built without one. Body
/// segments keep their order of appearance.
///
/// Keyed access follows the usual HL7 reading of a message: PID, PV1, SCH, AIL and AIP are
/// singletons (if repeated, the last occurrence is returned), OBX is a list, and unrecognised
/// segments are grouped by tag. The full ordered sequence is available through
/// [`Segments::iter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    msh: MshSegment,
    body: Vec<Segment>,
}

impl Segments {
    pub(crate) fn new(msh: MshSegment, body: Vec<Segment>) -> Self {
        Self { msh, body }
    }

    pub fn msh(&self) -> &MshSegment {
        &self.msh
    }

    pub fn pid(&self) -> Option<&PidSegment> {
        self.last_of(|s| match s {
            Segment::Pid(pid) => Some(pid),
            _ => None,
        })
    }

    pub fn pv1(&self) -> Option<&Pv1Segment> {
        self.last_of(|s| match s {
            Segment::Pv1(pv1) => Some(pv1),
            _ => None,
        })
    }

    pub fn sch(&self) -> Option<&SchSegment> {
        self.last_of(|s| match s {
            Segment::Sch(sch) => Some(sch),
            _ => None,
        })
    }

    pub fn ail(&self) -> Option<&AilSegment> {
        self.last_of(|s| match s {
            Segment::Ail(ail) => Some(ail),
            _ => None,
        })
    }

    pub fn aip(&self) -> Option<&AipSegment> {
        self.last_of(|s| match s {
            Segment::Aip(aip) => Some(aip),
            _ => None,
        })
    }

    /// All OBX segments in order of appearance (empty if there are none).
    pub fn obx(&self) -> Vec<&ObxSegment> {
        self.body
            .iter()
            .filter_map(|s| match s {
                Segment::Obx(obx) => Some(obx),
                _ => None,
            })
            .collect()
    }

    /// Raw lines of every unrecognised segment with the given tag, in order.
    pub fn unrecognised(&self, tag: &str) -> Vec<&str> {
        self.body
            .iter()
            .filter_map(|s| match s {
                Segment::Unrecognised(u) if u.tag == tag => Some(u.raw.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Returns `true` if at least one segment with `tag` is present (MSH included).
    pub fn contains(&self, tag: &str) -> bool {
        tag == "MSH" || self.body.iter().any(|s| s.tag() == tag)
    }

    /// Body segments in order of appearance.
    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter()
    }

    /// Number of segments, MSH included.
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Always `false`: a message has at least its header.
    pub fn is_empty(&self) -> bool {
        false
    }

    fn last_of<'a, T>(&'a self, pick: impl Fn(&'a Segment) -> Option<&'a T>) -> Option<&'a T> {
        self.body.iter().rev().find_map(pick)
    }
}

impl Serialize for Segments {
    /// Serialises as a map keyed by segment tag: typed records for known singletons, a list
    /// for OBX, and lists of raw lines for unrecognised tags.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut unrecognised: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for segment in &self.body {
            if let Segment::Unrecognised(u) = segment {
                unrecognised.entry(&u.tag).or_default().push(&u.raw);
            }
        }

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("MSH", &self.msh)?;
        if let Some(pid) = self.pid() {
            map.serialize_entry("PID", pid)?;
        }
        if let Some(pv1) = self.pv1() {
            map.serialize_entry("PV1", pv1)?;
        }
        let obx = self.obx();
        if !obx.is_empty() {
            map.serialize_entry("OBX", &obx)?;
        }
        if let Some(sch) = self.sch() {
            map.serialize_entry("SCH", sch)?;
        }
        if let Some(ail) = self.ail() {
            map.serialize_entry("AIL", ail)?;
        }
        if let Some(aip) = self.aip() {
            map.serialize_entry("AIP", aip)?;
        }
        for (tag, lines) in &unrecognised {
            map.serialize_entry(tag, lines)?;
        }
        map.end()
    }
}
