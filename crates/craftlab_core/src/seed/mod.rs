//! Seed catalog and seed dictionary accessors.
//!
//! # Responsibility
//! - Materialize the static base tables into the engine's collection types.
//!
//! # Invariants
//! - Seed content is additive ground truth: merging persisted state never
//!   removes a seed element or a seed recipe.

use crate::model::element::{Element, ElementId};
use crate::model::pair::PairKey;
use std::collections::BTreeMap;

mod combinations;
mod elements;

/// Dictionary type shared by seed data and the live engine: canonical pair
/// key to result element id, append-only at runtime.
pub type CombinationDictionary = BTreeMap<PairKey, ElementId>;

/// Builds the base catalog in its shipped order.
pub fn seed_elements() -> Vec<Element> {
    elements::SEED_ELEMENTS
        .iter()
        .map(|(id, name, icon)| Element::with_id(*id, *name, *icon))
        .collect()
}

/// Builds the base combination dictionary.
pub fn seed_combinations() -> CombinationDictionary {
    combinations::SEED_COMBINATIONS
        .iter()
        .map(|(a, b, result)| (PairKey::new(*a, *b), (*result).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{seed_combinations, seed_elements};
    use crate::model::element::derive_element_id;
    use std::collections::HashSet;

    #[test]
    fn seed_element_ids_are_unique_and_slug_shaped() {
        let elements = seed_elements();
        let mut seen = HashSet::new();
        for element in &elements {
            assert!(seen.insert(element.id.clone()), "duplicate id {}", element.id);
            assert_eq!(
                element.id,
                derive_element_id(&element.id),
                "id {} is not in canonical slug form",
                element.id
            );
        }
        assert!(elements.len() > 200);
    }

    #[test]
    fn seed_pairs_are_canonical() {
        let combinations = seed_combinations();
        for key in combinations.keys() {
            assert!(key.lo() <= key.hi(), "non-canonical seed pair {key}");
        }
        assert!(combinations.len() > 230);
    }

    #[test]
    fn seed_contains_the_classic_recipe() {
        let combinations = seed_combinations();
        let key = crate::model::pair::PairKey::new("water", "fire");
        assert_eq!(combinations.get(&key).map(String::as_str), Some("steam"));
    }
}
