//! Conflict-aware weekly class timetabling.
//!
//! Places subject requests (professor + student groups + eligible slots +
//! classroom preferences) onto an 84-slot two-week grid with a genetic
//! algorithm, so that no professor, group, or real classroom is double
//! booked and soft costs (gaps, building transitions, heavy subjects late
//! in the day) stay low.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Slot`, `Classroom`, `SubjectRequest`,
//!   `ScheduleData`, `PlacedLesson`, `ScheduleResult`
//! - **`ga`**: The search engine — constructive initializer, mutation and
//!   crossover operators, worst-case fitness, the generational driver,
//!   and parameter persistence
//! - **`validation`**: Post-hoc conflict detection on finished schedules
//! - **`wire`**: External JSON shapes and input validation
//! - **`scheduler`**: The backend-neutral generation trait
//!
//! # References
//!
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"
//! - Eiben & Smith (2015), "Introduction to Evolutionary Computing"

pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod wire;
