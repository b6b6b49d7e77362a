//! Classroom addressing.
//!
//! A classroom is addressed by a `(building, room)` pair. Two reserved
//! states exist alongside real rooms: [`Classroom::Any`] (the request has
//! no room preference and never conflicts with anything) and
//! [`Classroom::Unassigned`] (no room has been chosen yet). The wire
//! encoding keeps the historical sentinels: `Any = (0, 0)` and
//! `Unassigned = (max, max)`, so real buildings are numbered from 1.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A classroom address, totally ordered: `Any < Room { .. } < Unassigned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "ClassroomWire", into = "ClassroomWire")]
pub enum Classroom {
    /// No specific room required; never participates in classroom conflicts.
    Any,
    /// A concrete room. Buildings are numbered from 1.
    Room { building: u32, room: u32 },
    /// No room assigned yet.
    Unassigned,
}

/// Flat `(building, room)` record used on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassroomWire {
    pub building: u32,
    pub room: u32,
}

impl Classroom {
    /// Creates a concrete room address.
    pub fn room(building: u32, room: u32) -> Self {
        Self::Room { building, room }
    }

    /// Whether this is the "no preference" sentinel.
    #[inline]
    pub fn is_any(self) -> bool {
        matches!(self, Self::Any)
    }

    /// Whether this is the "not yet assigned" sentinel.
    #[inline]
    pub fn is_unassigned(self) -> bool {
        matches!(self, Self::Unassigned)
    }

    /// The building number for a concrete room, `None` for sentinels.
    #[inline]
    pub fn building(self) -> Option<u32> {
        match self {
            Self::Room { building, .. } => Some(building),
            _ => None,
        }
    }
}

impl From<Classroom> for ClassroomWire {
    fn from(c: Classroom) -> Self {
        match c {
            Classroom::Any => ClassroomWire { building: 0, room: 0 },
            Classroom::Room { building, room } => ClassroomWire { building, room },
            Classroom::Unassigned => ClassroomWire {
                building: u32::MAX,
                room: u32::MAX,
            },
        }
    }
}

impl TryFrom<ClassroomWire> for Classroom {
    type Error = String;

    fn try_from(w: ClassroomWire) -> Result<Self, Self::Error> {
        match (w.building, w.room) {
            (0, 0) => Ok(Classroom::Any),
            (u32::MAX, u32::MAX) => Ok(Classroom::Unassigned),
            (0, room) => Err(format!("building 0 is reserved (room {room})")),
            (building, room) => Ok(Classroom::Room { building, room }),
        }
    }
}

impl fmt::Display for Classroom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::Room { building, room } => write!(f, "{building}/{room}"),
            Self::Unassigned => write!(f, "unassigned"),
        }
    }
}
