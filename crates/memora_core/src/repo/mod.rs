//! Repository layer: generic durable collections and the per-entity set.
//!
//! # Responsibility
//! - Provide ordered-list CRUD over named store keys.
//! - Pin each entity type to its storage key and ordering policy.
//!
//! # Invariants
//! - Record validation runs before every write.
//! - Read-modify-write cycles on one key are serialized process-wide.

pub mod care_repos;
pub mod collection;
