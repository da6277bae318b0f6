//! Canonical unordered pair key for the combination dictionary.
//!
//! # Responsibility
//! - Represent "an unordered pair of element ids" as a real value type.
//! - Own the one canonicalization rule: sort ascending, join with `|`.
//!
//! # Invariants
//! - `lo <= hi` always holds; operand order at construction never matters.
//! - The serialized form is exactly `"lo|hi"` and parses back losslessly.

use crate::model::element::ElementId;
use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const PAIR_SEPARATOR: char = '|';

/// Canonical dictionary key for an unordered pair of element ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    lo: ElementId,
    hi: ElementId,
}

impl PairKey {
    /// Builds the canonical key for two element ids, in either order.
    ///
    /// Self-pairs (`a == b`) are legal and produce `"a|a"`.
    pub fn new(a: impl Into<ElementId>, b: impl Into<ElementId>) -> Self {
        let a = a.into();
        let b = b.into();
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// Lexicographically smaller operand.
    pub fn lo(&self) -> &str {
        &self.lo
    }

    /// Lexicographically larger operand.
    pub fn hi(&self) -> &str {
        &self.hi
    }
}

impl Display for PairKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.lo, PAIR_SEPARATOR, self.hi)
    }
}

/// Parse failure for a serialized pair key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairKeyParseError {
    MissingSeparator(String),
    EmptySide(String),
    ExtraSeparator(String),
}

impl Display for PairKeyParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingSeparator(value) => {
                write!(f, "pair key `{value}` is missing the `|` separator")
            }
            Self::EmptySide(value) => {
                write!(f, "pair key `{value}` has an empty operand")
            }
            Self::ExtraSeparator(value) => {
                write!(f, "pair key `{value}` has more than one `|` separator")
            }
        }
    }
}

impl Error for PairKeyParseError {}

impl FromStr for PairKey {
    type Err = PairKeyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (a, b) = value
            .split_once(PAIR_SEPARATOR)
            .ok_or_else(|| PairKeyParseError::MissingSeparator(value.to_string()))?;
        if b.contains(PAIR_SEPARATOR) {
            return Err(PairKeyParseError::ExtraSeparator(value.to_string()));
        }
        if a.is_empty() || b.is_empty() {
            return Err(PairKeyParseError::EmptySide(value.to_string()));
        }
        Ok(Self::new(a, b))
    }
}

// Serialized as a bare string so the dictionary round-trips as a plain JSON
// object keyed by `"a|b"`.
impl Serialize for PairKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for PairKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PairKeyVisitor;

        impl Visitor<'_> for PairKeyVisitor {
            type Value = PairKey;

            fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str("a pair key of the form `a|b`")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<PairKey, E> {
                value.parse().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(PairKeyVisitor)
    }
}
