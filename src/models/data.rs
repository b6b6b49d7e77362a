//! Scheduling problem input.
//!
//! [`ScheduleData`] owns the full, validated set of [`SubjectRequest`]s
//! together with derived professor/group indices used by the conflict
//! predicates and the fitness evaluator. It is immutable once built;
//! every chromosome in a run is interpreted against the same instance.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use super::request::SubjectRequest;
use super::slot::Slot;

/// Input error: the request data is structurally unusable.
///
/// These fail fast at construction and are never retried. Search-time
/// infeasibility is *not* an error and is represented by sentinel genes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// The request list is empty.
    EmptyRequests,
    /// A locked lesson or block names a request id that does not exist.
    UnknownRequestId(u32),
    /// A locked slot is outside the request's eligible set.
    IneligibleLockedSlot { id: u32, slot: Slot },
    /// A block needs at least two requests.
    UndersizedBlock,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRequests => write!(f, "request list is empty"),
            Self::UnknownRequestId(id) => write!(f, "unknown subject request id {id}"),
            Self::IneligibleLockedSlot { id, slot } => {
                write!(f, "locked slot {slot} is not eligible for request {id}")
            }
            Self::UndersizedBlock => write!(f, "a block must contain at least two requests"),
        }
    }
}

impl Error for DataError {}

/// The immutable input to a scheduling run.
#[derive(Debug, Clone)]
pub struct ScheduleData {
    requests: Vec<SubjectRequest>,
    /// professor id → request indices, built once at construction.
    by_professor: HashMap<u32, Vec<usize>>,
    /// group id → request indices, built once at construction.
    by_group: HashMap<u32, Vec<usize>>,
    /// request index → externally pinned slot.
    locked: HashMap<usize, Slot>,
    /// Groups of request indices that must occupy adjacent slots.
    blocks: Vec<Vec<usize>>,
}

impl ScheduleData {
    /// Builds the problem input from a list of requests.
    ///
    /// The list is kept in order; later requests repeating an earlier id
    /// are dropped. Fails on an empty list.
    pub fn new(requests: Vec<SubjectRequest>) -> Result<Self, DataError> {
        if requests.is_empty() {
            return Err(DataError::EmptyRequests);
        }

        let mut seen = HashMap::new();
        let mut deduped = Vec::with_capacity(requests.len());
        for req in requests {
            if seen.insert(req.id, ()).is_none() {
                deduped.push(req);
            }
        }

        let mut by_professor: HashMap<u32, Vec<usize>> = HashMap::new();
        let mut by_group: HashMap<u32, Vec<usize>> = HashMap::new();
        for (idx, req) in deduped.iter().enumerate() {
            by_professor.entry(req.professor).or_default().push(idx);
            for &group in req.groups() {
                by_group.entry(group).or_default().push(idx);
            }
        }

        Ok(Self {
            requests: deduped,
            by_professor,
            by_group,
            locked: HashMap::new(),
            blocks: Vec::new(),
        })
    }

    /// Pins a request to a fixed slot. Locked lessons are placed upfront
    /// by the initializer and never touched by mutation or crossover.
    pub fn with_locked_lesson(mut self, request_id: u32, slot: Slot) -> Result<Self, DataError> {
        let idx = self
            .index_of(request_id)
            .ok_or(DataError::UnknownRequestId(request_id))?;
        if !self.requests[idx].is_slot_eligible(slot) {
            return Err(DataError::IneligibleLockedSlot {
                id: request_id,
                slot,
            });
        }
        self.locked.insert(idx, slot);
        Ok(self)
    }

    /// Declares a block: requests that must be scheduled in adjacent
    /// slots (e.g. a lecture/lab pair).
    pub fn with_block(mut self, request_ids: &[u32]) -> Result<Self, DataError> {
        if request_ids.len() < 2 {
            return Err(DataError::UndersizedBlock);
        }
        let mut indices = Vec::with_capacity(request_ids.len());
        for &id in request_ids {
            indices.push(self.index_of(id).ok_or(DataError::UnknownRequestId(id))?);
        }
        self.blocks.push(indices);
        Ok(self)
    }

    /// The ordered request list.
    pub fn requests(&self) -> &[SubjectRequest] {
        &self.requests
    }

    /// Number of requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Always false: construction rejects empty input.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// The request at an array position.
    pub fn request(&self, index: usize) -> &SubjectRequest {
        &self.requests[index]
    }

    /// Array position of a request id.
    pub fn index_of(&self, request_id: u32) -> Option<usize> {
        self.requests.iter().position(|r| r.id == request_id)
    }

    /// professor id → request indices.
    pub fn by_professor(&self) -> &HashMap<u32, Vec<usize>> {
        &self.by_professor
    }

    /// group id → request indices.
    pub fn by_group(&self) -> &HashMap<u32, Vec<usize>> {
        &self.by_group
    }

    /// The externally pinned slot for a request index, if any.
    pub fn locked_slot(&self, index: usize) -> Option<Slot> {
        self.locked.get(&index).copied()
    }

    /// Declared blocks, as request indices.
    pub fn blocks(&self) -> &[Vec<usize>] {
        &self.blocks
    }

    /// The block containing a request index, if any.
    pub fn block_of(&self, index: usize) -> Option<&[usize]> {
        self.blocks
            .iter()
            .find(|b| b.contains(&index))
            .map(|b| b.as_slice())
    }

    /// Whether a request's slot gene is off-limits to the genetic
    /// operators (locked, or part of an adjacency block).
    pub fn is_pinned(&self, index: usize) -> bool {
        self.locked.contains_key(&index) || self.block_of(index).is_some()
    }
}
