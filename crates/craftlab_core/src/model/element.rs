//! Element domain model and slug derivation.
//!
//! # Responsibility
//! - Define the discoverable game concept record (`id`, `name`, `icon`).
//! - Derive stable element ids from display names.
//!
//! # Invariants
//! - `id` is lowercase, with whitespace runs collapsed to single hyphens.
//! - Two elements never share an id; ids are never reused for another concept.
//! - Elements are immutable once created and are never destroyed.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Stable slug identifier for every element in the catalog.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ElementId = String;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Canonical record for one discoverable game concept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Stable slug id, derived from `name` at creation time.
    pub id: ElementId,
    /// Human-readable display name.
    pub name: String,
    /// Single emoji (or short glyph) shown on cards and tiles.
    pub icon: String,
}

impl Element {
    /// Creates an element, deriving its id from the display name.
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: derive_element_id(&name),
            name,
            icon: icon.into(),
        }
    }

    /// Creates an element with a caller-provided id.
    ///
    /// Used by seed loading and placeholder repair, where the id already
    /// exists as a dictionary value and must be preserved verbatim.
    pub fn with_id(
        id: impl Into<ElementId>,
        name: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
        }
    }
}

/// Derives the stable slug id for a display name.
///
/// Lowercases the trimmed name and collapses every whitespace run into a
/// single `-`. The derivation is total and deterministic, so the same name
/// always maps to the same id.
pub fn derive_element_id(name: &str) -> ElementId {
    WHITESPACE_RUN
        .replace_all(name.trim(), "-")
        .to_lowercase()
}

/// Derives a display name for an element known only by id.
///
/// Splits the slug on `-` and title-cases each segment. Used when a
/// dictionary value has no catalog entry and a placeholder must be minted.
pub fn display_name_from_id(id: &str) -> String {
    id.split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::{derive_element_id, display_name_from_id, Element};

    #[test]
    fn derive_lowercases_and_hyphenates() {
        assert_eq!(derive_element_id("Fire Water"), "fire-water");
        assert_eq!(derive_element_id("  Molten   Glass "), "molten-glass");
        assert_eq!(derive_element_id("Steam"), "steam");
    }

    #[test]
    fn derivation_is_idempotent_on_existing_ids() {
        assert_eq!(derive_element_id("fire-water"), "fire-water");
    }

    #[test]
    fn new_derives_id_from_name() {
        let element = Element::new("Solar Flare", "☀️");
        assert_eq!(element.id, "solar-flare");
        assert_eq!(element.name, "Solar Flare");
    }

    #[test]
    fn display_name_title_cases_segments() {
        assert_eq!(display_name_from_id("flying-fish"), "Flying Fish");
        assert_eq!(display_name_from_id("dust"), "Dust");
    }
}
