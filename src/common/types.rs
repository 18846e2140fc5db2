use crate::common::constants::{ITEMS_DATASET, ITEMS_REMOTE_PATH, MODS_DATASET, MODS_REMOTE_PATH};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw payload as returned by the data host: normally an object keyed by an
/// opaque id, but nothing about its shape is guaranteed
pub type RawRecordSet = Value;

/// Simplified base item as written to `items.json`
///
/// Pass-through fields keep the raw JSON value verbatim. `None` means the raw
/// field was absent and the key is left out of the output entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_class: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_item_level: Option<Value>,
    pub max_item_level: Value,
    pub implicit_mods: Value,
    pub mod_tags: Value,
    pub item_stats: ItemStats,
}

/// Weapon stats pulled out of the nested `properties` block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_damage_min: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_damage_max: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_speed: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_strike_chance: Option<Value>,
}

/// Simplified modifier as written to `mods.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mod_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_group: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_type: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_level: Option<Value>,
    pub spawn_weights: Value,
    pub stats: Value,
}

/// The datasets this tool knows how to refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dataset {
    Items,
    Mods,
}

impl Dataset {
    /// Canonical refresh order
    pub const ALL: [Dataset; 2] = [Dataset::Items, Dataset::Mods];

    /// Name used on the command line and as the output file stem
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Items => ITEMS_DATASET,
            Dataset::Mods => MODS_DATASET,
        }
    }

    /// Path of the dataset relative to the host's base URL
    pub fn remote_path(&self) -> &'static str {
        match self {
            Dataset::Items => ITEMS_REMOTE_PATH,
            Dataset::Mods => MODS_REMOTE_PATH,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            ITEMS_DATASET => Some(Dataset::Items),
            MODS_DATASET => Some(Dataset::Mods),
            _ => None,
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
