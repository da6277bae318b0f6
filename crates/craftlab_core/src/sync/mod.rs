//! Optional remote backup boundary.
//!
//! # Responsibility
//! - Specify the save/load contract against the opportunistic backup
//!   collaborator.
//! - Keep backup failures contained; the engine never depends on a backup
//!   succeeding.

pub mod backup_store;
