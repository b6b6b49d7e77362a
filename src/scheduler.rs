//! The scheduling backend seam.
//!
//! Callers depend on [`Scheduler`] only, so the GA engine and any
//! alternative backend (e.g. a constraint-programming solver) are
//! interchangeable without the caller observing a difference in
//! input/output shape.

use crate::models::{ScheduleData, ScheduleResult};

/// A timetable generator.
///
/// Implementations never fail at generation time: infeasible requests
/// are omitted from the result rather than reported as errors, and all
/// configuration is validated at construction.
pub trait Scheduler {
    /// Produces a timetable for the given problem input.
    fn generate(&self, data: &ScheduleData) -> ScheduleResult;
}
