//! # Exam Area
//!
//! Catalog of exam rooms shown on the exam-area page: the "live now" and
//! "upcoming" collections, exact lookup by subject code, and the
//! subject-code search box. Carousel rendering is the UI's concern.

mod error;

pub use crate::error::ExamError;

use fxhash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use tracing::debug;

/// Where a room currently sits in the exam-area page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Status {
    Live,
    Upcoming,
}

/// One exam room card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamRoom {
    /// Subject code, the search key (e.g. `"MATH1010"`).
    pub code: String,
    pub subject: String,
    /// Display name of the hosting lecturer.
    pub host: String,
    pub participants: u32,
}

/// The exam-area catalog: ordered live/upcoming collections indexed by
/// subject code.
#[derive(Debug, Clone, Default)]
pub struct ExamCatalog {
    live: Vec<ExamRoom>,
    upcoming: Vec<ExamRoom>,
    index: FxHashMap<String, Status>,
}

impl ExamCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a room to the "live now" collection.
    ///
    /// # Errors
    /// Returns [`ExamError::DuplicateCode`] if the subject code is already
    /// catalogued in either collection.
    pub fn push_live(&mut self, room: ExamRoom) -> Result<(), ExamError> {
        self.push(room, Status::Live)
    }

    /// Adds a room to the "upcoming" collection.
    ///
    /// # Errors
    /// Returns [`ExamError::DuplicateCode`] if the subject code is already
    /// catalogued in either collection.
    pub fn push_upcoming(&mut self, room: ExamRoom) -> Result<(), ExamError> {
        self.push(room, Status::Upcoming)
    }

    fn push(&mut self, room: ExamRoom, status: Status) -> Result<(), ExamError> {
        if self.index.contains_key(&room.code) {
            return Err(ExamError::DuplicateCode { code: room.code });
        }

        debug!(code = %room.code, %status, "Exam room catalogued");
        self.index.insert(room.code.clone(), status);
        match status {
            Status::Live => self.live.push(room),
            Status::Upcoming => self.upcoming.push(room),
        }
        Ok(())
    }

    /// Exact lookup by subject code, across both collections.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&ExamRoom> {
        let status = self.index.get(code)?;
        let collection = match status {
            Status::Live => &self.live,
            Status::Upcoming => &self.upcoming,
        };
        collection.iter().find(|room| room.code == code)
    }

    /// The "Nhập mã môn" search box: case-insensitive subject-code substring
    /// match over the live collection, preserving catalog order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&ExamRoom> {
        let needle = query.to_lowercase();
        self.live.iter().filter(|room| room.code.to_lowercase().contains(&needle)).collect()
    }

    /// Rooms currently running, in catalog order.
    #[must_use]
    pub fn live(&self) -> &[ExamRoom] {
        &self.live
    }

    /// Rooms scheduled next, in catalog order.
    #[must_use]
    pub fn upcoming(&self) -> &[ExamRoom] {
        &self.upcoming
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len() + self.upcoming.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty() && self.upcoming.is_empty()
    }
}
