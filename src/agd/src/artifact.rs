//! Artifact set lookup, listing, and profile extraction.
//!
//! Sets have no text of their own: display names live on the level-0 entry
//! of the set's equip affix, and rarity is derived from the reliquary pieces
//! that belong to the set.

use crate::format::{entity_key, round_all, strip_markup};
use crate::record::Record;
use crate::reference;
use crate::store::{is_unresolved, DataStore};
use crate::weapon::AffixProp;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Full research profile for one artifact set.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactSetProfile {
    pub set_id: i64,
    pub key: String,
    pub name_en: String,
    pub name_chs: String,
    pub rarity: i64,
    pub equip_affix_id: i64,
    pub bonuses: Vec<SetBonus>,
    pub pieces: Vec<SetPiece>,
}

/// One piece-count bonus of the set.
#[derive(Debug, Clone, Serialize)]
pub struct SetBonus {
    pub pieces: i64,
    pub description: String,
    pub description_chs: String,
    pub params: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_props: Vec<AffixProp>,
    pub open_config: String,
}

/// One representative piece per equip slot.
#[derive(Debug, Clone, Serialize)]
pub struct SetPiece {
    pub id: i64,
    pub name_en: String,
    pub name_chs: String,
    pub equip_type: String,
    pub equip_name: String,
    pub rarity: i64,
    pub max_level: i64,
}

/// One row of an artifact-set listing.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactListing {
    pub set_id: i64,
    pub name_en: String,
    pub name_chs: String,
    pub rarity: i64,
    pub bonuses: String,
}

/// EN and CHS names of a set, from the level-0 affix entry.
pub fn set_names(store: &DataStore, artifact_set: &Record) -> (String, String) {
    let affix_table = store.excel("EquipAffixExcelConfigData.json");
    let affix_id = artifact_set.int_or("equipAffixId", 0);
    for entry in affix_table.rows() {
        if entry.int("id") == Some(affix_id) && entry.int_or("level", 0) == 0 {
            let hash = entry.int_or("nameTextMapHash", 0);
            return (store.text_en(hash), store.text_chs(hash));
        }
    }
    ("Unknown".to_string(), "Unknown".to_string())
}

/// Find an artifact set by numeric set id or by EN/CHS name of its affix.
pub fn find_artifact_set(store: &DataStore, query: &str) -> Option<Record> {
    let sets = store.excel("ReliquarySetExcelConfigData.json");

    if let Ok(id) = query.trim().parse::<i64>() {
        return sets
            .rows()
            .iter()
            .find(|s| s.int("setId") == Some(id))
            .cloned();
    }

    let q = query.trim().to_lowercase();
    for s in sets.rows() {
        if s.int_or("equipAffixId", 0) == 0 {
            continue;
        }
        let (en, chs) = set_names(store, s);
        let en = en.to_lowercase();
        let chs = chs.to_lowercase();
        if en == q || chs == q {
            return Some(s.clone());
        }
        if !en.is_empty() && en.contains(&q) {
            return Some(s.clone());
        }
    }
    None
}

/// Max piece rarity per set id, from the reliquary table.
fn set_rarities(store: &DataStore) -> HashMap<i64, i64> {
    let reliquaries = store.excel("ReliquaryExcelConfigData.json");
    let mut rarities: HashMap<i64, i64> = HashMap::new();
    for r in reliquaries.rows() {
        let set_id = r.int_or("setId", 0);
        let rank = r.int_or("rankLevel", 0);
        if set_id != 0 && rank != 0 {
            let entry = rarities.entry(set_id).or_insert(0);
            *entry = (*entry).max(rank);
        }
    }
    rarities
}

/// List artifact sets at or above a rarity, sorted rarity-descending then
/// by name. Sets without a resolvable name are skipped.
pub fn list_artifact_sets(store: &DataStore, min_rarity: i64) -> Vec<ArtifactListing> {
    let sets = store.excel("ReliquarySetExcelConfigData.json");
    let rarities = set_rarities(store);

    let mut results = Vec::new();
    for s in sets.rows() {
        let set_id = s.int_or("setId", 0);
        let rarity = rarities.get(&set_id).copied().unwrap_or(0);
        if rarity < min_rarity {
            continue;
        }
        let (name_en, name_chs) = set_names(store, s);
        if name_en.is_empty() || name_en == "Unknown" || is_unresolved(&name_en) {
            continue;
        }
        let need: Vec<String> = s
            .list("setNeedNum")
            .iter()
            .filter_map(Value::as_i64)
            .map(|n| format!("{n}pc"))
            .collect();
        results.push(ArtifactListing {
            set_id,
            name_en,
            name_chs,
            rarity,
            bonuses: if need.is_empty() {
                "N/A".to_string()
            } else {
                need.join("/")
            },
        });
    }
    results.sort_by(|a, b| b.rarity.cmp(&a.rarity).then_with(|| a.name_en.cmp(&b.name_en)));
    results
}

fn extract_bonuses(store: &DataStore, artifact_set: &Record) -> Vec<SetBonus> {
    let affix_table = store.excel("EquipAffixExcelConfigData.json");
    let affix_id = artifact_set.int_or("equipAffixId", 0);
    let need_nums: Vec<i64> = artifact_set
        .list("setNeedNum")
        .iter()
        .filter_map(Value::as_i64)
        .collect();

    let mut entries: Vec<&Record> = affix_table
        .rows()
        .iter()
        .filter(|a| a.int("id") == Some(affix_id))
        .collect();
    entries.sort_by_key(|a| a.int_or("level", 0));

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let pieces = need_nums
                .get(i)
                .copied()
                .unwrap_or((i as i64 + 1) * 2);
            let params: Vec<f64> = entry
                .list("paramList")
                .iter()
                .filter_map(Value::as_f64)
                .collect();
            let add_props = entry
                .records("addProps")
                .iter()
                .filter(|p| !p.str_or("propType", "").is_empty() && p.float_or("value", 0.0) != 0.0)
                .map(|p| {
                    let prop = p.str_or("propType", "");
                    AffixProp {
                        prop: prop.to_string(),
                        name: reference::fight_prop_name(prop).to_string(),
                        value: p.float_or("value", 0.0),
                    }
                })
                .collect();
            SetBonus {
                pieces,
                description: strip_markup(&store.text_en(entry.int_or("descTextMapHash", 0))),
                description_chs: strip_markup(&store.text_chs(entry.int_or("descTextMapHash", 0))),
                params: round_all(&params, 4),
                add_props,
                open_config: entry.str_or("openConfig", "").to_string(),
            }
        })
        .collect()
}

/// Extract the full research profile for an artifact set row.
pub fn artifact_set_profile(store: &DataStore, artifact_set: &Record) -> ArtifactSetProfile {
    let set_id = artifact_set.int_or("setId", 0);
    let (name_en, name_chs) = set_names(store, artifact_set);

    let reliquaries = store.excel("ReliquaryExcelConfigData.json");

    // One representative piece per slot: highest rarity, ties broken by the
    // higher level cap (the base piece).
    let mut by_slot: HashMap<String, &Record> = HashMap::new();
    let mut max_rarity = 0;
    for r in reliquaries.rows() {
        if r.int("setId") != Some(set_id) {
            continue;
        }
        let rank = r.int_or("rankLevel", 0);
        let slot = r.str_or("equipType", "").to_string();
        max_rarity = max_rarity.max(rank);
        match by_slot.get(&slot) {
            None => {
                by_slot.insert(slot, r);
            }
            Some(existing) => {
                let existing_rank = existing.int_or("rankLevel", 0);
                if rank > existing_rank
                    || (rank == existing_rank
                        && r.int_or("maxLevel", 1) >= existing.int_or("maxLevel", 1))
                {
                    by_slot.insert(slot, r);
                }
            }
        }
    }

    // Older sets only enumerate their pieces through containsList.
    if by_slot.is_empty() {
        for piece_id in artifact_set.list("containsList").iter().filter_map(Value::as_i64) {
            if let Some(r) = reliquaries
                .rows()
                .iter()
                .find(|r| r.int("id") == Some(piece_id))
            {
                max_rarity = max_rarity.max(r.int_or("rankLevel", 0));
                by_slot.insert(r.str_or("equipType", "").to_string(), r);
            }
        }
    }

    // Last resort: some set rows carry a small integer rarity field under an
    // obfuscated key. Exclude the known non-rarity integer fields and accept
    // the first plausible value that doesn't lower the derived rarity.
    const NON_RARITY_FIELDS: &[&str] = &["setId", "equipAffixId", "bagSortValue", "disableFilter"];
    for (key, value) in artifact_set.fields() {
        if let Some(v) = value.as_i64() {
            if (1..=5).contains(&v)
                && !NON_RARITY_FIELDS.contains(&key.as_str())
                && v >= max_rarity
            {
                max_rarity = v;
                break;
            }
        }
    }

    let pieces = reference::EQUIP_SLOTS
        .iter()
        .filter_map(|slot| by_slot.get(slot.code).map(|r| (slot, r)))
        .map(|(slot, r)| SetPiece {
            id: r.int_or("id", 0),
            name_en: store.text_en(r.int_or("nameTextMapHash", 0)),
            name_chs: store.text_chs(r.int_or("nameTextMapHash", 0)),
            equip_type: slot.code.to_string(),
            equip_name: slot.name.to_string(),
            rarity: r.int_or("rankLevel", 0),
            max_level: r.int_or("maxLevel", 1),
        })
        .collect();

    ArtifactSetProfile {
        set_id,
        key: entity_key(&name_en),
        name_en,
        name_chs,
        rarity: max_rarity,
        equip_affix_id: artifact_set.int_or("equipAffixId", 0),
        bonuses: extract_bonuses(store, artifact_set),
        pieces,
    }
}
