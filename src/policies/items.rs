use crate::common::constants::{DEFAULT_MAX_ITEM_LEVEL, ITEMS_DATASET};
use crate::common::types::{ItemRecord, ItemStats, RawRecordSet};
use crate::policies::fields::{field, kind_of, nested_field, or_default, or_empty_sequence, record_map};
use serde_json::Value;
use tracing::{debug, instrument, warn};

/// Map every raw base item to an [`ItemRecord`], keeping the payload's order.
///
/// A payload that is not a keyed mapping yields an empty list.
#[instrument(skip(raw))]
pub fn process_items(raw: &RawRecordSet) -> Vec<ItemRecord> {
    let Some(records) = record_map(raw) else {
        warn!(dataset = ITEMS_DATASET, "Raw items data is not an object (got {})", kind_of(raw));
        return Vec::new();
    };

    let items: Vec<ItemRecord> = records.values().map(map_item).collect();
    debug!("Mapped {} items", items.len());
    items
}

pub fn map_item(raw: &Value) -> ItemRecord {
    ItemRecord {
        id: field(raw, "id"),
        name: field(raw, "name"),
        item_class: field(raw, "item_class"),
        base_item_level: field(raw, "drop_level"),
        max_item_level: max_item_level(raw),
        implicit_mods: or_empty_sequence(field(raw, "implicits")),
        mod_tags: or_empty_sequence(field(raw, "tags")),
        item_stats: item_stats(raw),
    }
}

/// Falsy values (including an explicit `0`) fall back to the default
pub fn max_item_level(raw: &Value) -> Value {
    or_default(field(raw, "max_item_level"), Value::from(DEFAULT_MAX_ITEM_LEVEL))
}

pub fn item_stats(raw: &Value) -> ItemStats {
    ItemStats {
        physical_damage_min: nested_field(raw, &["properties", "physical_damage", "min"]),
        physical_damage_max: nested_field(raw, &["properties", "physical_damage", "max"]),
        attack_speed: nested_field(raw, &["properties", "attack_speed"]),
        critical_strike_chance: nested_field(raw, &["properties", "critical_strike_chance"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rusted_sword() {
        let raw = json!({
            "x1": {
                "id": "i1",
                "name": "Rusted Sword",
                "item_class": "Sword",
                "drop_level": 1,
                "tags": ["weapon"]
            }
        });

        let items = process_items(&raw);
        assert_eq!(items.len(), 1);

        let item = &items[0];
        assert_eq!(item.id, Some(json!("i1")));
        assert_eq!(item.name, Some(json!("Rusted Sword")));
        assert_eq!(item.item_class, Some(json!("Sword")));
        assert_eq!(item.base_item_level, Some(json!(1)));
        assert_eq!(item.max_item_level, json!(100));
        assert_eq!(item.implicit_mods, json!([]));
        assert_eq!(item.mod_tags, json!(["weapon"]));
        assert_eq!(item.item_stats, ItemStats::default());

        assert_eq!(
            serde_json::to_value(item).unwrap(),
            json!({
                "id": "i1",
                "name": "Rusted Sword",
                "itemClass": "Sword",
                "baseItemLevel": 1,
                "maxItemLevel": 100,
                "implicitMods": [],
                "modTags": ["weapon"],
                "itemStats": {}
            })
        );
    }

    #[test]
    fn test_weapon_properties() {
        let raw = json!({
            "id": "Metadata/Items/Weapons/OneHandWeapons/OneHandMaces/OneHandMace1",
            "name": "Wooden Club",
            "item_class": "One Hand Mace",
            "drop_level": 1,
            "max_item_level": 60,
            "implicits": ["LocalIncreasedPhysicalDamageImplicit"],
            "tags": ["mace", "weapon", "default"],
            "properties": {
                "physical_damage": { "min": 6, "max": 10 },
                "attack_speed": 1.45,
                "critical_strike_chance": 500
            }
        });

        let item = map_item(&raw);
        assert_eq!(item.max_item_level, json!(60));
        assert_eq!(item.implicit_mods, json!(["LocalIncreasedPhysicalDamageImplicit"]));
        assert_eq!(item.item_stats.physical_damage_min, Some(json!(6)));
        assert_eq!(item.item_stats.physical_damage_max, Some(json!(10)));
        assert_eq!(item.item_stats.attack_speed, Some(json!(1.45)));
        assert_eq!(item.item_stats.critical_strike_chance, Some(json!(500)));
    }

    #[test]
    fn test_missing_properties_leaves_stats_absent() {
        let item = map_item(&json!({ "id": "ring", "properties": {} }));
        assert_eq!(item.item_stats, ItemStats::default());

        let item = map_item(&json!({ "id": "belt", "properties": { "physical_damage": null } }));
        assert_eq!(item.item_stats.physical_damage_min, None);
        assert_eq!(item.item_stats.physical_damage_max, None);
    }

    #[test]
    fn test_zero_max_item_level_defaults_to_100() {
        assert_eq!(max_item_level(&json!({ "max_item_level": 0 })), json!(100));
        assert_eq!(max_item_level(&json!({ "max_item_level": null })), json!(100));
        assert_eq!(max_item_level(&json!({ "max_item_level": 84 })), json!(84));
    }

    #[test]
    fn test_missing_drop_level_stays_absent() {
        let item = map_item(&json!({ "id": "i2" }));
        assert_eq!(item.base_item_level, None);
        assert_eq!(item.name, None);

        let value = serde_json::to_value(&item).unwrap();
        assert!(value.get("baseItemLevel").is_none());
        assert_eq!(value["implicitMods"], json!([]));
        assert_eq!(value["modTags"], json!([]));
    }

    #[test]
    fn test_non_object_entry_gets_defaults() {
        let items = process_items(&json!({ "broken": null }));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, None);
        assert_eq!(items[0].max_item_level, json!(100));
        assert_eq!(items[0].implicit_mods, json!([]));
    }

    #[test]
    fn test_non_mapping_payload_yields_nothing() {
        assert!(process_items(&json!(null)).is_empty());
        assert!(process_items(&json!([])).is_empty());
        assert!(process_items(&json!([{ "id": "i1" }])).is_empty());
        assert!(process_items(&json!(17)).is_empty());
        assert!(process_items(&json!("items")).is_empty());
    }

    #[test]
    fn test_order_follows_payload() {
        let raw: Value = serde_json::from_str(
            r#"{ "z": { "id": "last-key-first" }, "a": { "id": "second" }, "10": { "id": "third" } }"#,
        )
        .unwrap();

        let ids: Vec<_> = process_items(&raw).into_iter().map(|i| i.id.unwrap()).collect();
        assert_eq!(ids, vec![json!("last-key-first"), json!("second"), json!("third")]);
    }
}
