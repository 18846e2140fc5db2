/// Dataset and host constants to ensure consistency across the codebase

// Remote static data host (RePoE fork, Path of Exile 2 export)
pub const DEFAULT_BASE_URL: &str = "https://repoe-fork.github.io/poe2";

// User-friendly dataset names (used in CLI and as output file stems)
pub const ITEMS_DATASET: &str = "items";
pub const MODS_DATASET: &str = "mods";

// Paths relative to the base URL
pub const ITEMS_REMOTE_PATH: &str = "base_items.json";
pub const MODS_REMOTE_PATH: &str = "mods.json";

pub const OUTPUT_EXTENSION: &str = "json";

/// Used when a raw item has no usable `max_item_level`
pub const DEFAULT_MAX_ITEM_LEVEL: u64 = 100;

/// Get all supported dataset names, in the order they are refreshed
pub fn get_supported_datasets() -> Vec<&'static str> {
    vec![ITEMS_DATASET, MODS_DATASET]
}
