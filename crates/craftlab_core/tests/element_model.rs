use craftlab_core::{derive_element_id, Element, PairKey, Tile};
use std::collections::BTreeMap;

#[test]
fn element_serialization_uses_expected_wire_fields() {
    let element = Element::with_id("molten-glass", "Molten Glass", "🔥");

    let json = serde_json::to_value(&element).unwrap();
    assert_eq!(json["id"], "molten-glass");
    assert_eq!(json["name"], "Molten Glass");
    assert_eq!(json["icon"], "🔥");

    let decoded: Element = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, element);
}

#[test]
fn tile_serialization_uses_camel_case_wire_fields() {
    let tile = Tile::new("water", 12.5, 40.0);

    let json = serde_json::to_value(&tile).unwrap();
    assert_eq!(json["instanceId"], tile.instance_id.to_string());
    assert_eq!(json["elementId"], "water");
    assert_eq!(json["x"], 12.5);
    assert_eq!(json["y"], 40.0);
    assert!(json.get("instance_id").is_none());

    let decoded: Tile = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, tile);
}

#[test]
fn dictionary_serializes_as_plain_object_with_pair_keys() {
    let mut dictionary: BTreeMap<PairKey, String> = BTreeMap::new();
    dictionary.insert(PairKey::new("water", "fire"), "steam".to_string());

    let json = serde_json::to_string(&dictionary).unwrap();
    assert_eq!(json, r#"{"fire|water":"steam"}"#);

    let decoded: BTreeMap<PairKey, String> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, dictionary);
}

#[test]
fn dictionary_deserialization_rejects_malformed_pair_keys() {
    let result: Result<BTreeMap<PairKey, String>, _> =
        serde_json::from_str(r#"{"steam":"water"}"#);
    assert!(result.is_err());
}

#[test]
fn derived_ids_match_the_storage_convention() {
    assert_eq!(derive_element_id("Cow Wash"), "cow-wash");
    assert_eq!(derive_element_id("EV"), "ev");
}
