use crate::common::constants::MODS_DATASET;
use crate::common::types::{ModRecord, RawRecordSet};
use crate::policies::fields::{field, kind_of, or_empty_sequence, record_map};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Map every raw modifier to a [`ModRecord`], keeping the payload's order.
///
/// A payload that is not a keyed mapping yields an empty list.
#[instrument(skip(raw))]
pub fn process_mods(raw: &RawRecordSet) -> Vec<ModRecord> {
    let Some(records) = record_map(raw) else {
        warn!(dataset = MODS_DATASET, "Raw mods data is not an object (got {})", kind_of(raw));
        return Vec::new();
    };

    let mods: Vec<ModRecord> = records.values().map(map_mod).collect();
    debug!("Mapped {} mods", mods.len());
    mods
}

pub fn map_mod(raw: &Value) -> ModRecord {
    ModRecord {
        id: field(raw, "id"),
        name: field(raw, "name"),
        mod_type: field(raw, "type"),
        mod_group: field(raw, "mod_group"),
        generation_type: field(raw, "generation_type"),
        item_level: field(raw, "spawn_level"),
        spawn_weights: or_empty_sequence(field(raw, "spawn_weights")),
        stats: or_empty_sequence(field(raw, "stats")),
    }
}
