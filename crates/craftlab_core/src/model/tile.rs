//! Board tile domain model.
//!
//! # Responsibility
//! - Represent one placed instance of an element on the interactive surface.
//!
//! # Invariants
//! - `instance_id` is unique per placement and never shared with an element id.
//! - Position is free-floating; only board operations mutate it.

use crate::model::element::ElementId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one physical tile placement.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TileId = Uuid;

/// One placed instance of an element. Multiple tiles may reference the same
/// element; destroying a tile never destroys the element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// Unique per placement. Serialized as `instanceId` to match the stored
    /// record shape.
    pub instance_id: TileId,
    /// Foreign key into the catalog.
    pub element_id: ElementId,
    pub x: f64,
    pub y: f64,
}

impl Tile {
    /// Creates a tile with a fresh instance id at the given position.
    pub fn new(element_id: impl Into<ElementId>, x: f64, y: f64) -> Self {
        Self {
            instance_id: Uuid::new_v4(),
            element_id: element_id.into(),
            x,
            y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tile;

    #[test]
    fn new_tiles_get_distinct_instance_ids() {
        let a = Tile::new("water", 10.0, 20.0);
        let b = Tile::new("water", 10.0, 20.0);
        assert_ne!(a.instance_id, b.instance_id);
        assert_eq!(a.element_id, b.element_id);
    }
}
