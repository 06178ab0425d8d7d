//! Name-keyed unit definitions and SI base-unit seeding.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The seven SI base units seeded into every registry.
pub const BASE_UNITS: [&str; 7] = ["s", "m", "kg", "A", "K", "mol", "cd"];

/// A named unit and its defining formula.
///
/// A unit is a *base unit* iff its formula is its own name; everything else
/// is derived and can be expanded through the registry. Units are immutable
/// once created.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit {
    name: String,
    formula: String,
}

impl Unit {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn formula(&self) -> &str {
        &self.formula
    }

    pub fn is_base(&self) -> bool {
        self.formula == self.name
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Registry of unit definitions, keyed by name.
///
/// The backing map is ordered, so listings and persisted output are
/// deterministic. Removal policy (base units, in-use checks) is deliberately
/// not enforced here; callers decide.
#[derive(Clone, Debug)]
pub struct UnitRegistry {
    units: BTreeMap<String, Unit>,
}

impl UnitRegistry {
    /// A registry containing only the seven SI base units, each defined as
    /// itself.
    pub fn new() -> Self {
        let mut units = BTreeMap::new();
        for name in BASE_UNITS {
            units.insert(
                name.to_string(),
                Unit {
                    name: name.to_string(),
                    formula: name.to_string(),
                },
            );
        }
        Self { units }
    }

    /// Look up a unit by exact name.
    pub fn get(&self, name: &str) -> Result<&Unit> {
        self.units
            .get(name)
            .ok_or_else(|| Error::UnknownUnit(name.to_string()))
    }

    /// Insert a new definition. The formula is stored as-is; callers are
    /// expected to parse and validate it beforehand.
    pub fn add(&mut self, name: &str, formula: &str) -> Result<&Unit> {
        if self.units.contains_key(name) {
            return Err(Error::AlreadyDefined(name.to_string()));
        }
        let unit = Unit {
            name: name.to_string(),
            formula: formula.to_string(),
        };
        Ok(self.units.entry(name.to_string()).or_insert(unit))
    }

    /// Delete a definition unconditionally.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        self.units
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| Error::UnknownUnit(name.to_string()))
    }

    /// All registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    /// All registered units, in name order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}
