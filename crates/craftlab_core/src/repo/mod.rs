//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the record persistence contract used by the game engine.
//! - Isolate SQLite query details from engine orchestration.
//!
//! # Invariants
//! - Repository writes replace a record in full; records are never appended.
//! - Repository APIs return semantic errors in addition to DB transport
//!   errors.

pub mod record_repo;
