//! Frontend Models
//!
//! The persisted item record and the list view mode.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A checklist entry (persisted as-is)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub quantity: NonZeroU32,
    pub name: String,
    pub stored: bool,
}

impl Item {
    /// Create a not-yet-stored item with a fresh id
    pub fn new(name: impl Into<String>, quantity: NonZeroU32) -> Self {
        Self {
            id: Uuid::new_v4(),
            quantity,
            name: name.into(),
            stored: false,
        }
    }

    /// Text shown in the list row
    pub fn label(&self) -> String {
        format!("{} {}", self.quantity, self.name)
    }
}

/// How the list is sorted or filtered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Insertion order
    #[default]
    Newest,
    /// Only stored items, insertion order
    Stored,
    /// Everything, by name
    Alphabetically,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Newest, SortMode::Stored, SortMode::Alphabetically];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Stored => "stored",
            SortMode::Alphabetically => "alphabetically",
        }
    }

    /// Parse a select value, falling back to `Newest`
    pub fn from_value(s: &str) -> Self {
        match s {
            "stored" => SortMode::Stored,
            "alphabetically" => SortMode::Alphabetically,
            _ => SortMode::Newest,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Newest => "Ordenar por mais recentes",
            SortMode::Stored => "Mostrar guardados",
            SortMode::Alphabetically => "Ordem alfabética",
        }
    }

    /// Apply the mode to a collection without touching it
    pub fn apply<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        match self {
            SortMode::Newest => items.iter().collect(),
            SortMode::Stored => items.iter().filter(|item| item.stored).collect(),
            SortMode::Alphabetically => {
                let mut sorted: Vec<&Item> = items.iter().collect();
                // stable: equal names keep insertion order
                sorted.sort_by(|a, b| a.name.cmp(&b.name));
                sorted
            }
        }
    }
}
