//! Catalog data types.
//!
//! Contains the records read from the catalog files:
//! - Food: what a creature eats
//! - Largo: a paired entry built from two slime types
//! - Slime: a base type, whose `selected` flag is derived from the largo selection

use serde::Deserialize;

/// Food preference of a largo or slime.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    /// Food category, `None` when the creature eats anything
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Whether the favourite food is a crop
    #[serde(default)]
    pub has_crop: bool,
    /// Favourite food name
    #[serde(default)]
    pub fav: String,
}

impl Food {
    /// Label shown in the food column.
    pub fn label(&self) -> &str {
        self.kind.as_deref().unwrap_or("Any food")
    }
}

/// A catalog entry combining two slime types.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Largo {
    /// Display name
    #[serde(rename = "type")]
    pub name: String,
    /// The two base types; the first one is the sort and group key
    pub slime_types: [String; 2],
    pub food: Food,
    /// Toggled by the user, never loaded from disk
    #[serde(skip_deserializing)]
    pub selected: bool,
}

impl Largo {
    /// Primary base type, used for ordering and row banding.
    pub fn primary(&self) -> &str {
        &self.slime_types[0]
    }
}

/// `largoable` is either a flag or a free-form note in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Largoable {
    Flag(bool),
    Note(String),
}

impl Default for Largoable {
    fn default() -> Self {
        Self::Flag(true)
    }
}

/// A base slime type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slime {
    #[serde(rename = "type")]
    pub name: String,
    pub food: Food,
    #[serde(default)]
    pub largoable: Largoable,
    #[serde(default)]
    pub plot: String,
    #[serde(default)]
    pub color: String,
    /// Derived: some selected largo covers this type
    #[serde(skip_deserializing)]
    pub selected: bool,
}
