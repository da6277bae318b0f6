//! Domain model for the crafting sandbox.
//!
//! # Responsibility
//! - Define the canonical records shared by catalog, dictionary and board.
//! - Keep id derivation and pair canonicalization rules in one place.
//!
//! # Invariants
//! - Every `Element` is identified by a stable slug id, unique in the catalog.
//! - Unordered element pairs are always represented by a canonical `PairKey`.

pub mod element;
pub mod pair;
pub mod tile;
