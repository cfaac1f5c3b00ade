//! Use-case services over the durable collections.
//!
//! # Responsibility
//! - Validate user input before anything reaches storage.
//! - Stamp ids, dates and times onto new records.
//! - Gate every destructive operation behind a confirmation capability.
//!
//! # Invariants
//! - A declined confirmation leaves persisted state untouched.
//! - Callers may update in-memory state only after a service call returns
//!   success; services never report success for an unpersisted change.

use crate::model::record::ValidationError;
use crate::repo::collection::CollectionError;
use chrono::{DateTime, Local};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod agenda_service;
pub mod card_service;
pub mod care_log_service;
pub mod confirm;
pub mod journal_service;
pub mod memory_service;
pub mod zone_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error surface shared by the domain services.
#[derive(Debug)]
pub enum ServiceError {
    /// Input failed client-side validation; nothing reached the store.
    Validation(ValidationError),
    /// The underlying write failed; persisted state is unchanged.
    Collection(CollectionError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Collection(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Collection(err) => Some(err),
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CollectionError> for ServiceError {
    fn from(value: CollectionError) -> Self {
        // Validation raised inside a collection write is still a user-input
        // problem, not a storage one.
        match value {
            CollectionError::Validation(err) => Self::Validation(err),
            other => Self::Collection(other),
        }
    }
}

/// Long-form date for memories and journal notes, e.g.
/// "Tuesday, August 5 2026".
pub(crate) fn long_date(when: &DateTime<Local>) -> String {
    when.format("%A, %B %-d %Y").to_string()
}

/// Compact date used by cards, log entries and appointments.
pub(crate) fn short_date(when: &DateTime<Local>) -> String {
    when.format("%Y-%m-%d").to_string()
}

/// Wall-clock time, minutes precision.
pub(crate) fn clock_time(when: &DateTime<Local>) -> String {
    when.format("%H:%M").to_string()
}
