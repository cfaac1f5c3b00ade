//! Record types for the five persisted collections.
//!
//! All records carry human-readable date strings stamped at creation time by
//! the service layer; appointments additionally carry an epoch-milliseconds
//! timestamp that drives their sort order.

use crate::model::record::{require, Record, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Photo memory shown to the patient: a captioned image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memory {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Opaque URI or path to the picked image; never dereferenced by core.
    pub image: String,
    pub date: String,
}

impl Memory {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            image: image.into(),
            date: date.into(),
        }
    }
}

impl Record for Memory {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("image", &self.image)?;
        Ok(())
    }
}

/// Short reminder card written by the caregiver or the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryCard {
    pub id: String,
    /// Card category, e.g. "routine" or "people".
    pub kind: String,
    pub message: String,
    pub date: String,
    /// Role of the author, see [`CardAuthor`].
    pub created_by: String,
}

/// Author roles stamped onto memory cards.
pub mod card_author {
    pub const CAREGIVER: &str = "caregiver";
    pub const PATIENT: &str = "patient";
}

impl MemoryCard {
    pub fn new(
        kind: impl Into<String>,
        message: impl Into<String>,
        date: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: kind.into(),
            message: message.into(),
            date: date.into(),
            created_by: created_by.into(),
        }
    }
}

impl Record for MemoryCard {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("kind", &self.kind)?;
        require("message", &self.message)?;
        Ok(())
    }
}

/// Free-form journal note kept by the patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalNote {
    pub id: String,
    pub text: String,
    pub date: String,
}

impl JournalNote {
    pub fn new(text: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            date: date.into(),
        }
    }
}

impl Record for JournalNote {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("text", &self.text)
    }
}

/// Caregiver log entry: a categorized observation with date and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareLogEntry {
    pub id: String,
    pub category: String,
    pub description: String,
    pub date: String,
    pub time: String,
}

impl CareLogEntry {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category: category.into(),
            description: description.into(),
            date: date.into(),
            time: time.into(),
        }
    }
}

impl Record for CareLogEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("category", &self.category)?;
        require("description", &self.description)?;
        Ok(())
    }
}

/// Medical appointment. `timestamp` is epoch milliseconds and is the sort
/// key for the agenda collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub doctor: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub timestamp: i64,
}

impl Appointment {
    pub fn new(
        doctor: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            doctor: doctor.into(),
            description: description.into(),
            date: date.into(),
            time: time.into(),
            timestamp,
        }
    }
}

impl Record for Appointment {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require("doctor", &self.doctor)?;
        require("description", &self.description)?;
        Ok(())
    }
}
