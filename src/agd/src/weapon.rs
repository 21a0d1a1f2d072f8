//! Weapon lookup, listing, and profile extraction.

use crate::curve;
use crate::format::{entity_key, round_all, round_to, strip_markup};
use crate::promote::{CostItem, PromoteTable};
use crate::record::Record;
use crate::reference;
use crate::store::{is_unresolved, DataStore};
use serde::Serialize;
use serde_json::Value;

/// Full research profile for one weapon.
#[derive(Debug, Clone, Serialize)]
pub struct WeaponProfile {
    pub id: i64,
    pub key: String,
    pub name_en: String,
    pub name_chs: String,
    pub description: String,
    pub weapon_type: String,
    pub rarity: i64,
    pub base_atk: f64,
    pub base_atk_curve: String,
    pub sub_stat: Option<SubStat>,
    pub lv90_stats: WeaponLv90,
    pub ascension: WeaponAscension,
    pub passive_effects: Vec<RefinementEffect>,
}

/// Secondary stat rolled on the weapon.
#[derive(Debug, Clone, Serialize)]
pub struct SubStat {
    pub prop: String,
    pub name: String,
    pub base_value: f64,
    pub curve: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaponLv90 {
    pub atk: f64,
    pub sub_stat_value: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaponAscension {
    pub promote_id: i64,
    pub phases: Vec<WeaponPhase>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeaponPhase {
    pub phase: i64,
    pub max_level: i64,
    pub atk_add: f64,
    pub sub_add: f64,
    pub mora_cost: i64,
    pub cost_items: Vec<CostItem>,
}

/// One refinement rank of the weapon passive.
#[derive(Debug, Clone, Serialize)]
pub struct RefinementEffect {
    pub affix_id: i64,
    pub refinement: i64,
    pub name_en: String,
    pub name_chs: String,
    pub description: String,
    pub params: Vec<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub add_props: Vec<AffixProp>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AffixProp {
    pub prop: String,
    pub name: String,
    pub value: f64,
}

/// One row of a weapon listing.
#[derive(Debug, Clone, Serialize)]
pub struct WeaponListing {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub weapon_type: String,
    pub rarity: i64,
}

/// Find a weapon by numeric id, exact EN/CHS name, or partial EN name.
pub fn find_weapon(store: &DataStore, query: &str) -> Option<Record> {
    let weapons = store.excel("WeaponExcelConfigData.json");

    if let Ok(id) = query.trim().parse::<i64>() {
        return weapons
            .rows()
            .iter()
            .find(|w| w.int("id") == Some(id))
            .cloned();
    }

    let q = query.trim().to_lowercase();
    for w in weapons.rows() {
        let hash = w.int_or("nameTextMapHash", 0);
        if store.text_en(hash).to_lowercase() == q || store.text_chs(hash).to_lowercase() == q {
            return Some(w.clone());
        }
    }
    weapons
        .rows()
        .iter()
        .find(|w| {
            let en = store.text_en(w.int_or("nameTextMapHash", 0)).to_lowercase();
            !en.is_empty() && en.contains(&q)
        })
        .cloned()
}

/// List weapons, optionally filtered by display type, at or above a rarity.
/// Sorted rarity-descending then by name; entries whose names cannot be
/// resolved are skipped.
pub fn list_weapons(
    store: &DataStore,
    weapon_type: Option<&str>,
    min_rarity: i64,
) -> Vec<WeaponListing> {
    let weapons = store.excel("WeaponExcelConfigData.json");
    let mut results = Vec::new();
    for w in weapons.rows() {
        let rarity = w.int_or("rankLevel", 0);
        if rarity < min_rarity {
            continue;
        }
        let type_name = reference::weapon_type_name(w.str_or("weaponType", "")).unwrap_or("");
        if let Some(wanted) = weapon_type {
            if !type_name.eq_ignore_ascii_case(wanted) {
                continue;
            }
        }
        let name = store.text_en(w.int_or("nameTextMapHash", 0));
        if name.is_empty() || is_unresolved(&name) {
            continue;
        }
        results.push(WeaponListing {
            id: w.int_or("id", 0),
            name,
            weapon_type: type_name.to_string(),
            rarity,
        });
    }
    results.sort_by(|a, b| b.rarity.cmp(&a.rarity).then_with(|| a.name.cmp(&b.name)));
    results
}

/// The base-ATK prop and the first other positive prop from `weaponProp`.
fn split_weapon_props(weapon: &Record) -> (f64, String, Option<SubStat>) {
    let mut base_atk = 0.0;
    let mut base_atk_curve = String::new();
    let mut sub_stat = None;
    for prop in weapon.records("weaponProp") {
        let prop_type = prop.str_or("propType", "");
        let init_value = prop.float_or("initValue", 0.0);
        let curve = prop.str_or("type", "");
        if prop_type == "FIGHT_PROP_BASE_ATTACK" {
            base_atk = init_value;
            base_atk_curve = curve.to_string();
        } else if !prop_type.is_empty() && init_value > 0.0 && sub_stat.is_none() {
            sub_stat = Some(SubStat {
                prop: prop_type.to_string(),
                name: reference::fight_prop_name(prop_type).to_string(),
                base_value: round_to(init_value, 4),
                curve: curve.to_string(),
            });
        }
    }
    (base_atk, base_atk_curve, sub_stat)
}

/// Extract the full research profile for a weapon row.
pub fn weapon_profile(store: &DataStore, weapon: &Record) -> WeaponProfile {
    let id = weapon.int_or("id", 0);
    let name_hash = weapon.int_or("nameTextMapHash", 0);
    let name_en = store.text_en(name_hash);
    let name_chs = store.text_chs(name_hash);
    let rarity = weapon.int_or("rankLevel", 0);
    let weapon_type = reference::weapon_type_name(weapon.str_or("weaponType", ""))
        .unwrap_or("Unknown")
        .to_string();

    let (base_atk, base_atk_curve, sub_stat) = split_weapon_props(weapon);

    let curves = store.excel("WeaponCurveExcelConfigData.json");
    let atk_90_base = if base_atk_curve.is_empty() {
        base_atk
    } else {
        base_atk * curve::multiplier_at(&curves, &base_atk_curve, 90)
    };
    let sub_90_base = sub_stat
        .as_ref()
        .filter(|s| !s.curve.is_empty() && s.base_value != 0.0)
        .map_or(0.0, |s| {
            s.base_value * curve::multiplier_at(&curves, &s.curve, 90)
        });

    let promote_id = weapon.int_or("weaponPromoteId", 0);
    let promote = PromoteTable::parse(&store.excel("WeaponPromoteExcelConfigData.json"));
    let phases = promote.phases_for(promote_id);

    let mut atk_asc_bonus = 0.0;
    let mut sub_asc_bonus = 0.0;
    let mut ascension_phases = Vec::new();
    for phase in &phases {
        let atk_add = phase.bonus_at("FIGHT_PROP_BASE_ATTACK");
        let sub_add = sub_stat
            .as_ref()
            .map_or(0.0, |s| phase.bonus_at(&s.prop));
        if phase.phase == 6 {
            atk_asc_bonus = atk_add;
            sub_asc_bonus = sub_add;
        }
        ascension_phases.push(WeaponPhase {
            phase: phase.phase,
            max_level: phase.max_level,
            atk_add: round_to(atk_add, 2),
            sub_add: round_to(sub_add, 4),
            mora_cost: phase.mora_cost,
            cost_items: phase.cost_items.clone(),
        });
    }

    WeaponProfile {
        id,
        key: entity_key(&name_en),
        description: strip_markup(&store.text_en(weapon.int_or("descTextMapHash", 0))),
        name_en,
        name_chs,
        weapon_type,
        rarity,
        base_atk: round_to(base_atk, 2),
        base_atk_curve,
        lv90_stats: WeaponLv90 {
            atk: round_to(atk_90_base + atk_asc_bonus, 2),
            sub_stat_value: if sub_stat.is_some() {
                round_to(sub_90_base + sub_asc_bonus, 4)
            } else {
                0.0
            },
        },
        sub_stat,
        ascension: WeaponAscension {
            promote_id,
            phases: ascension_phases,
        },
        passive_effects: extract_affixes(store, weapon),
    }
}

/// Refinement passives come from the equip-affix table: one entry per
/// refinement rank, keyed by the weapon's `skillAffix` ids.
fn extract_affixes(store: &DataStore, weapon: &Record) -> Vec<RefinementEffect> {
    let affix_table = store.excel("EquipAffixExcelConfigData.json");
    let mut effects = Vec::new();
    for affix_id in weapon.list("skillAffix").iter().filter_map(Value::as_i64) {
        if affix_id == 0 {
            continue;
        }
        let mut entries: Vec<&Record> = affix_table
            .rows()
            .iter()
            .filter(|a| a.int("id") == Some(affix_id))
            .collect();
        entries.sort_by_key(|a| a.int_or("level", 0));

        for entry in entries {
            let params: Vec<f64> = entry
                .list("paramList")
                .iter()
                .filter_map(Value::as_f64)
                .collect();
            let add_props = entry
                .records("addProps")
                .iter()
                .filter(|p| p.float_or("value", 0.0) != 0.0)
                .map(|p| {
                    let prop = p.str_or("propType", "");
                    AffixProp {
                        prop: prop.to_string(),
                        name: reference::fight_prop_name(prop).to_string(),
                        value: p.float_or("value", 0.0),
                    }
                })
                .collect();
            effects.push(RefinementEffect {
                affix_id: entry.int_or("affixId", 0),
                refinement: entry.int_or("level", 0) + 1,
                name_en: store.text_en(entry.int_or("nameTextMapHash", 0)),
                name_chs: store.text_chs(entry.int_or("nameTextMapHash", 0)),
                description: strip_markup(&store.text_en(entry.int_or("descTextMapHash", 0))),
                params: round_all(&params, 4),
                add_props,
            });
        }
    }
    effects
}
