//! Timetabling domain models.
//!
//! Core data types for the scheduling problem and its solutions:
//!
//! | Type | Role |
//! |------|------|
//! | [`Slot`] | Flat address in the 84-slot two-week grid |
//! | [`Classroom`] | `(building, room)` address with `Any`/`Unassigned` sentinels |
//! | [`SubjectRequest`] | One professor × subject × groups demand |
//! | [`ScheduleData`] | Validated, indexed problem input |
//! | [`ScheduleResult`] | Materialized slot/classroom assignment |

mod classroom;
mod data;
mod request;
mod result;
mod slot;

pub use classroom::{Classroom, ClassroomWire};
pub use data::{DataError, ScheduleData};
pub use request::{ClassKind, SubjectRequest};
pub use result::{PlacedLesson, ScheduleResult};
pub use slot::{Slot, DAYS_PER_CYCLE, LESSONS_PER_DAY, SLOT_COUNT, WEEKDAYS_PER_WEEK};
