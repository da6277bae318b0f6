//! The game engine: discovery, board mutation and state persistence.
//!
//! # Responsibility
//! - Own the three core collections (catalog, dictionary, board) exclusively.
//! - Resolve unordered element pairs into results, minting new elements per
//!   the configured discovery policy.
//! - Mirror every collection mutation back to the record repository.
//!
//! # Invariants
//! - Catalog and dictionary are append-only; no operation overwrites or
//!   removes an existing entry.
//! - Operations referencing unknown ids degrade to no-ops; the engine never
//!   panics or errors on a stale reference.
//! - Nothing is persisted before the initial load completes, so seed defaults
//!   cannot clobber previously saved state.

use crate::model::element::{derive_element_id, display_name_from_id, Element};
use crate::model::pair::PairKey;
use crate::model::tile::{Tile, TileId};
use crate::repo::record_repo::{RecordKey, RecordRepository};
use crate::seed::{seed_combinations, seed_elements, CombinationDictionary};
use crate::sync::backup_store::{BackupRecord, NewBackup};
use log::{error, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Icon used when a dictionary value has no catalog entry and a placeholder
/// element must be minted to repair the inconsistency.
const REPAIR_ICON: &str = "✨";

/// Fixed palette for newly synthesized elements; one entry is picked through
/// the injected RNG so discovery stays reproducible under a fixed seed.
const SYNTHESIS_ICONS: &[&str] = &["✨", "🌟", "💫", "🔮", "🧪", "⚗️", "🌀", "🔹"];

/// Behavior when a combination has no dictionary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryPolicy {
    /// Unknown pairs are inert: the combination has no effect.
    Inert,
    /// Unknown pairs mint a new element named from the operands and record
    /// the rule for every future session.
    #[default]
    Synthesize,
}

/// Engine construction parameters.
///
/// Board bounds replace the live canvas rect the presentation layer would
/// otherwise supply; spawn positions are drawn inside them.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub policy: DiscoveryPolicy,
    pub board_width: f64,
    pub board_height: f64,
    /// Spawned tiles keep at least this distance from every board edge.
    pub spawn_inset: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            policy: DiscoveryPolicy::default(),
            board_width: 1024.0,
            board_height: 768.0,
            spawn_inset: 50.0,
        }
    }
}

/// Combination-discovery and state-persistence engine.
///
/// Single-threaded: each user intent is handled to completion before the
/// next, so the collections need no locking. The repository is injected so
/// tests run against an in-memory fake.
pub struct GameEngine<R: RecordRepository> {
    repo: R,
    config: EngineConfig,
    rng: SmallRng,
    elements: Vec<Element>,
    combinations: CombinationDictionary,
    tiles: Vec<Tile>,
    loaded: bool,
}

impl<R: RecordRepository> GameEngine<R> {
    /// Creates an engine seeded with the base catalog and dictionary.
    ///
    /// The engine is not ready until `load()` has merged persisted state;
    /// mutations before that point are kept in memory but not mirrored to
    /// storage.
    pub fn new(repo: R, config: EngineConfig) -> Self {
        Self::with_rng_seed(repo, config, rand::random())
    }

    /// Creates an engine with a fixed RNG seed for reproducible icon and
    /// spawn-position choices.
    pub fn with_rng_seed(repo: R, config: EngineConfig, rng_seed: u64) -> Self {
        Self {
            repo,
            config,
            rng: SmallRng::seed_from_u64(rng_seed),
            elements: seed_elements(),
            combinations: seed_combinations(),
            tiles: Vec::new(),
            loaded: false,
        }
    }

    /// Merges persisted state over the seed collections and marks the engine
    /// ready.
    ///
    /// Total by design: read failures and corrupt records degrade to the seed
    /// defaults for the affected record, logged but never surfaced.
    ///
    /// # Contract
    /// - Seed elements always survive (persisted duplicates cannot shadow
    ///   them).
    /// - Persisted dictionary entries overlay seed entries; seed keys are
    ///   never removed.
    /// - Tiles load as-is, or empty when absent.
    pub fn load(&mut self) {
        if let Some(saved) = self.read_and_decode::<Vec<Element>>(RecordKey::Elements) {
            for element in saved {
                if self.element(&element.id).is_none() {
                    self.elements.push(element);
                }
            }
        }

        if let Some(saved) = self.read_and_decode::<CombinationDictionary>(RecordKey::Combinations)
        {
            self.combinations.extend(saved);
        }

        if let Some(saved) = self.read_and_decode::<Vec<Tile>>(RecordKey::Tiles) {
            self.tiles = saved;
        }

        self.loaded = true;
        info!(
            "event=state_load module=engine status=ok elements={} combinations={} tiles={}",
            self.elements.len(),
            self.combinations.len(),
            self.tiles.len()
        );
    }

    /// Readiness signal: true once the initial load has completed.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    // --- catalog ---

    /// All discovered elements in insertion order (seed first).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Resolves one element by id.
    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id == id)
    }

    /// Case-insensitive substring search over display names.
    ///
    /// An empty or whitespace-only query returns the whole catalog.
    pub fn search_elements(&self, query: &str) -> Vec<&Element> {
        let needle = query.trim().to_lowercase();
        self.elements
            .iter()
            .filter(|element| needle.is_empty() || element.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// The combination dictionary (append-only).
    pub fn combinations(&self) -> &CombinationDictionary {
        &self.combinations
    }

    // --- discovery ---

    /// Resolves an unordered pair of element ids into a result element.
    ///
    /// Dictionary hits resolve (repairing a missing catalog entry with a
    /// placeholder); misses follow the configured `DiscoveryPolicy`. Returns
    /// `None` when either input id is unknown or the pair is inert.
    ///
    /// # Contract
    /// - Symmetric: operand order never changes the result.
    /// - Idempotent synthesis: re-deriving an existing id reuses the element.
    /// - Side effects are limited to catalog/dictionary insertion.
    pub fn combine_elements(&mut self, a: &str, b: &str) -> Option<Element> {
        if self.element(a).is_none() || self.element(b).is_none() {
            warn!("event=combine module=engine status=stale_element a={a} b={b}");
            return None;
        }

        let key = PairKey::new(a, b);
        if let Some(result_id) = self.combinations.get(&key).cloned() {
            if self.element(&result_id).is_none() {
                self.repair_missing_result(&result_id);
            }
            return self.element(&result_id).cloned();
        }

        match self.config.policy {
            DiscoveryPolicy::Inert => {
                info!("event=combine module=engine status=inert pair={key}");
                None
            }
            DiscoveryPolicy::Synthesize => Some(self.synthesize(key)),
        }
    }

    /// Mints a placeholder element for a dictionary value missing from the
    /// catalog, so a recipe can never fail to resolve.
    fn repair_missing_result(&mut self, result_id: &str) {
        let placeholder = Element::with_id(
            result_id.to_string(),
            display_name_from_id(result_id),
            REPAIR_ICON,
        );
        info!("event=catalog_repair module=engine status=ok element_id={result_id}");
        self.elements.push(placeholder);
        self.persist_record(RecordKey::Elements);
    }

    /// Mints the element for an unknown pair and records the rule.
    ///
    /// The synthesized name concatenates the operand display names in
    /// canonical pair order, keeping discovery symmetric.
    fn synthesize(&mut self, key: PairKey) -> Element {
        let name_lo = self.display_name(key.lo());
        let name_hi = self.display_name(key.hi());
        let name = format!("{name_lo} {name_hi}");
        let id = derive_element_id(&name);

        if self.element(&id).is_none() {
            let icon = SYNTHESIS_ICONS[self.rng.random_range(0..SYNTHESIS_ICONS.len())];
            self.elements.push(Element::with_id(id.clone(), name, icon));
            self.persist_record(RecordKey::Elements);
            info!("event=discovery module=engine status=new element_id={id} pair={key}");
        } else {
            info!("event=discovery module=engine status=reused element_id={id} pair={key}");
        }

        self.combinations.entry(key).or_insert_with(|| id.clone());
        self.persist_record(RecordKey::Combinations);

        self.element(&id)
            .cloned()
            .unwrap_or_else(|| Element::with_id(id.clone(), display_name_from_id(&id), REPAIR_ICON))
    }

    fn display_name(&self, id: &str) -> String {
        self.element(id)
            .map(|element| element.name.clone())
            .unwrap_or_else(|| display_name_from_id(id))
    }

    // --- board ---

    /// Tiles currently placed on the board.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Places one tile, at the given position or at a random spot inside the
    /// configured bounds (inset from every edge).
    pub fn spawn_tile(&mut self, element_id: &str, position: Option<(f64, f64)>) -> Tile {
        let (x, y) = match position {
            Some(position) => position,
            None => self.random_position(),
        };
        let tile = Tile::new(element_id, x, y);
        self.tiles.push(tile.clone());
        self.persist_record(RecordKey::Tiles);
        tile
    }

    /// Repositions exactly one tile; no-op when the instance id is unknown.
    pub fn move_tile(&mut self, instance_id: TileId, x: f64, y: f64) {
        let Some(tile) = self
            .tiles
            .iter_mut()
            .find(|tile| tile.instance_id == instance_id)
        else {
            return;
        };
        tile.x = x;
        tile.y = y;
        self.persist_record(RecordKey::Tiles);
    }

    /// Deletes one tile; no-op when the instance id is unknown.
    pub fn remove_tile(&mut self, instance_id: TileId) {
        let before = self.tiles.len();
        self.tiles.retain(|tile| tile.instance_id != instance_id);
        if self.tiles.len() != before {
            self.persist_record(RecordKey::Tiles);
        }
    }

    /// Deletes every tile unconditionally.
    pub fn clear_board(&mut self) {
        self.tiles.clear();
        self.persist_record(RecordKey::Tiles);
    }

    /// Combines two placed tiles through the discovery engine.
    ///
    /// On success the source and target tiles are removed and one result tile
    /// is inserted at the target's last position, atomically. On any no-op
    /// (unknown instance, stale element, inert pair) the board is left
    /// byte-for-byte unchanged.
    pub fn attempt_combine(&mut self, source: TileId, target: TileId) -> Option<Element> {
        if source == target {
            return None;
        }
        let source_element = self
            .tiles
            .iter()
            .find(|tile| tile.instance_id == source)?
            .element_id
            .clone();
        let target_tile = self.tiles.iter().find(|tile| tile.instance_id == target)?;
        let (target_element, x, y) = (target_tile.element_id.clone(), target_tile.x, target_tile.y);

        let result = self.combine_elements(&source_element, &target_element)?;

        self.tiles
            .retain(|tile| tile.instance_id != source && tile.instance_id != target);
        self.tiles.push(Tile::new(result.id.clone(), x, y));
        self.persist_record(RecordKey::Tiles);
        Some(result)
    }

    fn random_position(&mut self) -> (f64, f64) {
        let inset = self.config.spawn_inset;
        let span_x = self.config.board_width - 2.0 * inset;
        let span_y = self.config.board_height - 2.0 * inset;
        let x = if span_x > 0.0 {
            inset + self.rng.random_range(0.0..span_x)
        } else {
            inset
        };
        let y = if span_y > 0.0 {
            inset + self.rng.random_range(0.0..span_y)
        } else {
            inset
        };
        (x, y)
    }

    // --- backup boundary ---

    /// Snapshots the three collections into a backup payload for the remote
    /// collaborator.
    pub fn export_backup(&self, user_id: impl Into<String>) -> NewBackup {
        NewBackup {
            user_id: user_id.into(),
            elements: serde_json::to_value(&self.elements).unwrap_or(Value::Null),
            combinations: serde_json::to_value(&self.combinations).unwrap_or(Value::Null),
            tiles: serde_json::to_value(&self.tiles).unwrap_or(Value::Null),
        }
    }

    /// Applies a backup through the same additive merge as startup load and
    /// mirrors the merged state back to storage.
    ///
    /// Unparseable payload sections are skipped; applying a backup can only
    /// add state, never lose it.
    pub fn import_backup(&mut self, record: &BackupRecord) {
        if let Ok(saved) = serde_json::from_value::<Vec<Element>>(record.elements.clone()) {
            for element in saved {
                if self.element(&element.id).is_none() {
                    self.elements.push(element);
                }
            }
            self.persist_record(RecordKey::Elements);
        }
        if let Ok(saved) =
            serde_json::from_value::<CombinationDictionary>(record.combinations.clone())
        {
            self.combinations.extend(saved);
            self.persist_record(RecordKey::Combinations);
        }
        if let Ok(saved) = serde_json::from_value::<Vec<Tile>>(record.tiles.clone()) {
            self.tiles = saved;
            self.persist_record(RecordKey::Tiles);
        }
        info!(
            "event=backup_import module=engine status=ok user_id={}",
            record.user_id
        );
    }

    // --- persistence mirroring ---

    fn read_and_decode<T: DeserializeOwned>(&self, key: RecordKey) -> Option<T> {
        let payload = match self.repo.read_record(key) {
            Ok(payload) => payload?,
            Err(err) => {
                error!(
                    "event=state_load module=engine status=error record={key} fallback=seed error={err}"
                );
                return None;
            }
        };
        match serde_json::from_str(&payload) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                warn!(
                    "event=state_load module=engine status=corrupt record={key} fallback=seed error={err}"
                );
                None
            }
        }
    }

    /// Mirrors one collection back to storage in full.
    ///
    /// Gated on readiness so seed defaults never clobber saved state before
    /// restoration completes; write failures are logged and swallowed
    /// (best-effort persistence, the in-memory state stays authoritative).
    fn persist_record(&self, key: RecordKey) {
        if !self.loaded {
            return;
        }
        let payload = match key {
            RecordKey::Elements => encode(&self.elements),
            RecordKey::Combinations => encode(&self.combinations),
            RecordKey::Tiles => encode(&self.tiles),
        };
        let Some(payload) = payload else {
            error!("event=state_save module=engine status=encode_error record={key}");
            return;
        };
        if let Err(err) = self.repo.write_record(key, &payload) {
            error!("event=state_save module=engine status=error record={key} error={err}");
        }
    }
}

fn encode<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}
