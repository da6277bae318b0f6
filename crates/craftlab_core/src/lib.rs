//! Core domain logic for CraftLab, a combine-elements sandbox.
//! This crate is the single source of truth for discovery and persistence
//! invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod sync;

pub use logging::{default_log_level, init_logging};
pub use model::element::{derive_element_id, display_name_from_id, Element, ElementId};
pub use model::pair::{PairKey, PairKeyParseError};
pub use model::tile::{Tile, TileId};
pub use repo::record_repo::{
    MemoryRecordRepository, RecordKey, RecordRepository, RepoError, RepoResult,
    SqliteRecordRepository,
};
pub use seed::{seed_combinations, seed_elements, CombinationDictionary};
pub use service::engine::{DiscoveryPolicy, EngineConfig, GameEngine};
pub use sync::backup_store::{
    BackupAck, BackupErrorEnvelope, BackupRecord, BackupResult, BackupStore, MemoryBackupStore,
    NewBackup,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
