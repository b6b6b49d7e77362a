//! External serde shapes for schedule input.
//!
//! The HTTP layer submits subject requests as plain JSON records; this
//! module validates them and assembles a [`ScheduleData`]. Outbound
//! shapes ([`ScheduleResult`](crate::models::ScheduleResult),
//! [`CheckScheduleResult`](crate::validation::CheckScheduleResult))
//! serialize directly from their model types.
//!
//! Classroom preferences arrive as nested arrays: the outer index
//! selects a building (numbered from 1 so the `(0, 0)` "any classroom"
//! sentinel stays unambiguous), the inner values are room ids within it.

use serde::{Deserialize, Serialize};
use std::{error::Error, fmt};

use crate::models::{ClassKind, Classroom, DataError, ScheduleData, Slot, SubjectRequest};

/// One subject request as submitted over the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRequestWire {
    pub id: u32,
    pub professor: u32,
    pub complexity: u32,
    /// Attending student groups.
    #[serde(default)]
    pub groups: Vec<u32>,
    /// Eligible slot indices in `[0, 84)`. Empty or absent means every
    /// slot is eligible.
    #[serde(default)]
    pub lessons: Vec<u16>,
    /// Acceptable rooms per building; outer index `i` is building `i + 1`.
    /// Empty means any classroom will do.
    ///
    /// Building numbers are 1-based relative to this array: classroom
    /// records in the emitted schedule carry those shifted numbers, with
    /// building 0 reserved for the `(0, 0)` "any classroom" sentinel.
    #[serde(default)]
    pub classrooms: Vec<Vec<u32>>,
    /// Evening classes take late lessons or Saturdays.
    #[serde(default)]
    pub evening: bool,
}

/// Rejection reasons for externally submitted schedule input.
#[derive(Debug)]
pub enum WireError {
    /// A `lessons` entry fell outside `[0, 84)`.
    LessonOutOfRange { request_id: u32, lesson: u16 },
    /// The assembled request set failed model-level validation.
    Data(DataError),
    /// The payload was not valid JSON for the expected shape.
    Parse(serde_json::Error),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::LessonOutOfRange { request_id, lesson } => write!(
                f,
                "request {request_id}: lesson index {lesson} is outside the schedule grid"
            ),
            WireError::Data(err) => write!(f, "invalid request set: {err}"),
            WireError::Parse(err) => write!(f, "malformed request payload: {err}"),
        }
    }
}

impl Error for WireError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            WireError::Data(err) => Some(err),
            WireError::Parse(err) => Some(err),
            WireError::LessonOutOfRange { .. } => None,
        }
    }
}

impl From<DataError> for WireError {
    fn from(err: DataError) -> Self {
        WireError::Data(err)
    }
}

impl From<serde_json::Error> for WireError {
    fn from(err: serde_json::Error) -> Self {
        WireError::Parse(err)
    }
}

impl TryFrom<SubjectRequestWire> for SubjectRequest {
    type Error = WireError;

    fn try_from(wire: SubjectRequestWire) -> Result<Self, Self::Error> {
        let mut eligible = Vec::with_capacity(wire.lessons.len());
        for &lesson in &wire.lessons {
            let slot = Slot::new(lesson).ok_or(WireError::LessonOutOfRange {
                request_id: wire.id,
                lesson,
            })?;
            eligible.push(slot);
        }

        let mut classrooms = Vec::new();
        for (building_index, rooms) in wire.classrooms.iter().enumerate() {
            let building = building_index as u32 + 1;
            for &room in rooms {
                classrooms.push(Classroom::room(building, room));
            }
        }

        let mut request = SubjectRequest::new(wire.id, wire.professor, wire.complexity, wire.groups)
            .with_eligible_slots(eligible)
            .with_classrooms(classrooms);
        if wire.evening {
            request = request.with_kind(ClassKind::Evening);
        }
        Ok(request)
    }
}

/// Validates a batch of wire requests into a [`ScheduleData`].
pub fn schedule_data_from_wire(
    requests: Vec<SubjectRequestWire>,
) -> Result<ScheduleData, WireError> {
    let requests = requests
        .into_iter()
        .map(SubjectRequest::try_from)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ScheduleData::new(requests)?)
}

/// Parses and validates a JSON array of wire requests.
pub fn parse_schedule_data(json: &str) -> Result<ScheduleData, WireError> {
    let requests: Vec<SubjectRequestWire> = serde_json::from_str(json)?;
    schedule_data_from_wire(requests)
}
