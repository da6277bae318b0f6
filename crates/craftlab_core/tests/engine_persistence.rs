use craftlab_core::db::open_db_in_memory;
use craftlab_core::{
    EngineConfig, GameEngine, MemoryRecordRepository, PairKey, RecordKey, RecordRepository,
    SqliteRecordRepository,
};

fn loaded_engine(repo: &MemoryRecordRepository) -> GameEngine<&'_ MemoryRecordRepository> {
    let mut engine = GameEngine::with_rng_seed(repo, EngineConfig::default(), 42);
    engine.load();
    engine
}

#[test]
fn engine_is_not_ready_before_load() {
    let repo = MemoryRecordRepository::new();
    let engine = GameEngine::with_rng_seed(&repo, EngineConfig::default(), 42);
    assert!(!engine.is_loaded());

    let mut engine = engine;
    engine.load();
    assert!(engine.is_loaded());
}

#[test]
fn nothing_is_persisted_before_the_initial_load() {
    let repo = MemoryRecordRepository::new();
    let mut engine = GameEngine::with_rng_seed(&repo, EngineConfig::default(), 42);

    // A pre-load mutation must not clobber storage with seed defaults.
    engine.spawn_tile("water", None);
    assert!(repo.read_record(RecordKey::Tiles).unwrap().is_none());
    assert!(repo.read_record(RecordKey::Elements).unwrap().is_none());

    engine.load();
    engine.spawn_tile("fire", None);
    assert!(repo.read_record(RecordKey::Tiles).unwrap().is_some());
}

#[test]
fn persisted_extra_element_survives_alongside_every_seed_element() {
    let repo = MemoryRecordRepository::new();
    repo.put_record(
        RecordKey::Elements,
        r#"[{"id":"custom-gas","name":"Custom Gas","icon":"🎈"}]"#,
    );

    let engine = loaded_engine(&repo);

    assert!(engine.element("custom-gas").is_some());
    for seeded in craftlab_core::seed_elements() {
        assert!(
            engine.element(&seeded.id).is_some(),
            "seed element {} lost during merge",
            seeded.id
        );
    }
}

#[test]
fn stale_persisted_copy_cannot_shadow_a_seed_element() {
    let repo = MemoryRecordRepository::new();
    repo.put_record(
        RecordKey::Elements,
        r#"[{"id":"water","name":"Stale Water","icon":"🚱"}]"#,
    );

    let engine = loaded_engine(&repo);

    let water = engine.element("water").unwrap();
    assert_eq!(water.name, "Water");
    let copies = engine
        .elements()
        .iter()
        .filter(|element| element.id == "water")
        .count();
    assert_eq!(copies, 1);
}

#[test]
fn persisted_combinations_overlay_the_seed_dictionary() {
    let repo = MemoryRecordRepository::new();
    repo.put_record(
        RecordKey::Combinations,
        r#"{"fire|water":"vapor","dragon|snow":"frostfang"}"#,
    );

    let engine = loaded_engine(&repo);

    // Persisted value wins on key collision.
    assert_eq!(
        engine
            .combinations()
            .get(&PairKey::new("water", "fire"))
            .map(String::as_str),
        Some("vapor")
    );
    // New persisted keys are added.
    assert_eq!(
        engine
            .combinations()
            .get(&PairKey::new("dragon", "snow"))
            .map(String::as_str),
        Some("frostfang")
    );
    // Seed keys not mentioned by the overlay are untouched.
    assert_eq!(
        engine
            .combinations()
            .get(&PairKey::new("air", "water"))
            .map(String::as_str),
        Some("cloud")
    );
}

#[test]
fn corrupt_records_fall_back_to_seed_defaults() {
    let repo = MemoryRecordRepository::new();
    repo.put_record(RecordKey::Elements, "not json at all");
    repo.put_record(RecordKey::Combinations, "{\"truncated\":");
    repo.put_record(RecordKey::Tiles, "[{\"instanceId\":42}]");

    let engine = loaded_engine(&repo);

    assert_eq!(engine.elements().len(), craftlab_core::seed_elements().len());
    assert_eq!(
        engine.combinations().len(),
        craftlab_core::seed_combinations().len()
    );
    assert!(engine.tiles().is_empty());
    assert!(engine.is_loaded());
}

#[test]
fn saved_tiles_are_restored_verbatim() {
    let repo = MemoryRecordRepository::new();
    {
        let mut engine = loaded_engine(&repo);
        engine.spawn_tile("water", Some((11.0, 22.0)));
        engine.spawn_tile("fire", Some((33.0, 44.0)));
    }

    let engine = loaded_engine(&repo);
    assert_eq!(engine.tiles().len(), 2);
    assert_eq!(engine.tiles()[0].element_id, "water");
    assert_eq!((engine.tiles()[1].x, engine.tiles()[1].y), (33.0, 44.0));
}

#[test]
fn discoveries_survive_a_reload() {
    let repo = MemoryRecordRepository::new();
    {
        let mut engine = loaded_engine(&repo);
        let minted = engine.combine_elements("dragon", "snow").unwrap();
        assert_eq!(minted.id, "dragon-snow");
    }

    let engine = loaded_engine(&repo);
    assert!(engine.element("dragon-snow").is_some());
    assert_eq!(
        engine
            .combinations()
            .get(&PairKey::new("dragon", "snow"))
            .map(String::as_str),
        Some("dragon-snow")
    );
}

#[test]
fn write_failures_are_best_effort_and_do_not_disturb_state() {
    let repo = MemoryRecordRepository::new();
    let mut engine = loaded_engine(&repo);

    repo.set_fail_writes(true);
    let tile = engine.spawn_tile("water", Some((1.0, 1.0)));
    let minted = engine.combine_elements("dragon", "snow");

    // In-memory state is authoritative even when storage rejects writes.
    assert!(minted.is_some());
    assert_eq!(engine.tiles().len(), 1);
    assert_eq!(engine.tiles()[0].instance_id, tile.instance_id);

    // Once storage recovers, the next mutation mirrors the full collection.
    repo.set_fail_writes(false);
    engine.spawn_tile("fire", Some((2.0, 2.0)));
    let payload = repo.read_record(RecordKey::Tiles).unwrap().unwrap();
    assert!(payload.contains("water"));
    assert!(payload.contains("fire"));
}

#[test]
fn state_round_trips_through_a_real_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("craftlab.db");

    {
        let conn = craftlab_core::db::open_db(&path).unwrap();
        let repo = SqliteRecordRepository::try_new(&conn).unwrap();
        let mut engine = GameEngine::with_rng_seed(repo, EngineConfig::default(), 42);
        engine.load();
        engine.combine_elements("dragon", "snow").unwrap();
        engine.spawn_tile("dragon-snow", Some((5.0, 5.0)));
    }

    let conn = craftlab_core::db::open_db(&path).unwrap();
    let repo = SqliteRecordRepository::try_new(&conn).unwrap();
    let mut engine = GameEngine::with_rng_seed(repo, EngineConfig::default(), 43);
    engine.load();

    assert!(engine.element("dragon-snow").is_some());
    assert_eq!(engine.tiles().len(), 1);
    assert_eq!(engine.tiles()[0].element_id, "dragon-snow");
}

#[test]
fn sqlite_round_trip_uses_one_row_per_record() {
    let conn = open_db_in_memory().unwrap();
    {
        let repo = SqliteRecordRepository::try_new(&conn).unwrap();
        let mut engine = GameEngine::with_rng_seed(repo, EngineConfig::default(), 42);
        engine.load();
        engine.spawn_tile("water", None);
        engine.spawn_tile("fire", None);
        engine.clear_board();
    }

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM game_records;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1, "only the tiles record should have been written");
}
