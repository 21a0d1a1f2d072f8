//! Character lookup and profile extraction.
//!
//! A character profile joins the avatar row with its skill depot, skill and
//! proud-skill tables, promotion chain, and growth curves, resolving all
//! display text along the way.

use crate::curve;
use crate::format::{entity_key, round_all, round_to};
use crate::index;
use crate::promote::{dominant_bonus_stat, CostItem, PromoteTable, PromotionPhase};
use crate::record::{Record, Table};
use crate::reference;
use crate::store::{is_unresolved, DataStore};
use serde::Serialize;
use serde_json::Value;

/// Full research profile for one character.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterProfile {
    pub id: i64,
    pub key: String,
    pub name_en: String,
    pub name_chs: String,
    pub element: String,
    pub weapon_type: String,
    pub rarity: u8,
    pub body_type: String,
    pub skill_depot_id: i64,
    pub base_stats: BaseStats,
    pub growth_curves: Vec<GrowthCurve>,
    pub lv90_stats: Lv90Stats,
    pub ascension: AscensionInfo,
    pub skills: Vec<SkillEntry>,
    pub passives: Vec<PassiveTalent>,
    pub constellations: Vec<Constellation>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BaseStats {
    pub hp_base: f64,
    pub atk_base: f64,
    pub def_base: f64,
    pub crit_rate: f64,
    pub crit_dmg: f64,
    pub elemental_mastery: f64,
    pub energy_recharge: f64,
}

/// One entry of the avatar's `propGrowCurves` list.
#[derive(Debug, Clone, Serialize)]
pub struct GrowthCurve {
    pub prop: String,
    pub curve: String,
}

/// Base stats projected to level 90, ascension included.
#[derive(Debug, Clone, Serialize)]
pub struct Lv90Stats {
    pub hp: f64,
    pub atk: f64,
    pub def: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AscensionInfo {
    pub promote_id: i64,
    pub bonus_stat_type: Option<String>,
    pub bonus_stat_name: String,
    pub phases: Vec<AscensionPhase>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AscensionPhase {
    pub phase: i64,
    pub max_level: i64,
    pub hp_add: f64,
    pub atk_add: f64,
    pub def_add: f64,
    pub bonus_stat: f64,
    pub mora_cost: i64,
    pub cost_items: Vec<CostItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillEntry {
    pub category: String,
    pub id: i64,
    pub name_en: String,
    pub name_chs: String,
    pub cd: f64,
    pub cost_type: String,
    pub cost_val: f64,
    pub max_charges: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub proud_skill_group_id: i64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub multipliers: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub param_descriptions: Vec<String>,
}

fn is_zero(v: &i64) -> bool {
    *v == 0
}

#[derive(Debug, Clone, Serialize)]
pub struct PassiveTalent {
    pub proud_skill_group_id: i64,
    pub name_en: String,
    pub name_chs: String,
    pub description: String,
    pub params: Vec<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Constellation {
    pub level: usize,
    pub talent_id: i64,
    pub name_en: String,
    pub name_chs: String,
    pub description: String,
    pub params: Vec<f64>,
    pub open_config: String,
}

/// Find a character by numeric id, exact EN/CHS name, or partial EN name.
pub fn find_character(store: &DataStore, query: &str) -> Option<Record> {
    let avatars = store.excel("AvatarExcelConfigData.json");

    if let Ok(id) = query.trim().parse::<i64>() {
        return avatars
            .rows()
            .iter()
            .find(|av| av.int("id") == Some(id))
            .cloned();
    }

    let q = query.trim().to_lowercase();
    for av in avatars.rows() {
        let hash = av.int_or("nameTextMapHash", 0);
        if store.text_en(hash).to_lowercase() == q || store.text_chs(hash).to_lowercase() == q {
            return Some(av.clone());
        }
    }
    avatars
        .rows()
        .iter()
        .find(|av| {
            store
                .text_en(av.int_or("nameTextMapHash", 0))
                .to_lowercase()
                .contains(&q)
        })
        .cloned()
}

/// All proud-skill rows of a group, sorted by level.
pub fn proud_skill_entries<'a>(proud: &'a Table, group_id: i64) -> Vec<&'a Record> {
    let mut entries: Vec<&Record> = proud
        .rows()
        .iter()
        .filter(|r| r.int("proudSkillGroupId") == Some(group_id))
        .collect();
    entries.sort_by_key(|r| r.int_or("level", 0));
    entries
}

/// Transpose `paramList` arrays across skill levels.
///
/// The result holds one row per parameter slot, each row carrying that
/// parameter's value at every level (`rows[0] = [lv1_p0, lv2_p0, ...]`).
/// Short lists pad with 0 and all-zero rows are dropped.
pub fn transpose_params(entries: &[&Record]) -> Vec<Vec<f64>> {
    let Some(first) = entries.first() else {
        return Vec::new();
    };
    let n_params = first.list("paramList").len();
    let mut rows = Vec::new();
    for i in 0..n_params {
        let row: Vec<f64> = entries
            .iter()
            .map(|e| e.list("paramList").get(i).and_then(Value::as_f64).unwrap_or(0.0))
            .collect();
        if row.iter().any(|&v| v != 0.0) {
            rows.push(row);
        }
    }
    rows
}

/// Element is derived from the depot's energy skill cost type.
fn element_from_depot(store: &DataStore, depot: &Record) -> String {
    let skills = store.excel("AvatarSkillExcelConfigData.json");
    let skill_idx = index::by_key(&skills, "id");
    let energy_skill = depot.int_or("energySkill", 0);
    if energy_skill != 0 {
        if let Some(skill) = skill_idx.get(&energy_skill) {
            return reference::element_name(skill.str_or("costElemType", "")).to_string();
        }
    }
    "Unknown".to_string()
}

fn ascension_phase_summary(
    phases: &[&PromotionPhase],
    bonus_stat: Option<&str>,
) -> Vec<AscensionPhase> {
    phases
        .iter()
        .map(|phase| AscensionPhase {
            phase: phase.phase,
            max_level: phase.max_level,
            hp_add: round_to(phase.bonus_at("FIGHT_PROP_BASE_HP"), 2),
            atk_add: round_to(phase.bonus_at("FIGHT_PROP_BASE_ATTACK"), 2),
            def_add: round_to(phase.bonus_at("FIGHT_PROP_BASE_DEFENSE"), 2),
            bonus_stat: round_to(
                bonus_stat.map(|s| phase.bonus_at(s)).unwrap_or(0.0),
                4,
            ),
            mora_cost: phase.mora_cost,
            cost_items: phase.cost_items.clone(),
        })
        .collect()
}

fn extract_skills(store: &DataStore, depot: &Record) -> Vec<SkillEntry> {
    let skill_table = store.excel("AvatarSkillExcelConfigData.json");
    let skill_idx = index::by_key(&skill_table, "id");
    let proud = store.excel("ProudSkillExcelConfigData.json");

    let skill_ids: Vec<i64> = depot
        .list("skills")
        .iter()
        .filter_map(Value::as_i64)
        .filter(|&id| id != 0)
        .collect();
    let energy_skill = depot.int_or("energySkill", 0);

    // Category order: normal attack, elemental skill(s), burst.
    let mut ids = skill_ids.clone();
    let mut categories = vec!["normal_attack".to_string()];
    for i in 1..skill_ids.len() {
        categories.push(if i > 1 {
            format!("elemental_skill_{i}")
        } else {
            "elemental_skill".to_string()
        });
    }
    if energy_skill != 0 {
        ids.push(energy_skill);
        categories.push("elemental_burst".to_string());
    }

    let mut skills = Vec::new();
    for (i, sid) in ids.iter().enumerate() {
        let Some(skill) = skill_idx.get(sid) else {
            continue;
        };
        let category = categories
            .get(i)
            .cloned()
            .unwrap_or_else(|| format!("skill_{i}"));

        let group_id = skill.int_or("proudSkillGroupId", 0);
        let mut multipliers = Vec::new();
        let mut param_descriptions = Vec::new();
        if group_id != 0 {
            let entries = proud_skill_entries(&proud, group_id);
            if let Some(first) = entries.first() {
                multipliers = transpose_params(&entries)
                    .iter()
                    .map(|row| round_all(row, 4))
                    .collect();
                param_descriptions = first
                    .list("paramDescList")
                    .iter()
                    .filter_map(Value::as_i64)
                    .map(|hash| store.text_en(hash))
                    .filter(|t| !t.is_empty() && !is_unresolved(t))
                    .collect();
            }
        }

        skills.push(SkillEntry {
            category,
            id: *sid,
            name_en: store.text_en(skill.int_or("nameTextMapHash", 0)),
            name_chs: store.text_chs(skill.int_or("nameTextMapHash", 0)),
            cd: skill.float_or("cdTime", 0.0),
            cost_type: skill.str_or("costElemType", "None").to_string(),
            cost_val: skill.float_or("costElemVal", 0.0),
            max_charges: skill.int_or("maxChargeNum", 1),
            proud_skill_group_id: group_id,
            multipliers,
            param_descriptions,
        });
    }
    skills
}

// Inherent proud skills hide behind obfuscated depot fields in current
// exports; the readable name is kept for older ones.
const INHERENT_FIELDS: &[&str] = &["GFFGFBCGBDH", "LOAMPGAFLMA", "inherentProudSkillOpens"];

fn extract_passives(store: &DataStore, depot: &Record) -> Vec<PassiveTalent> {
    let proud = store.excel("ProudSkillExcelConfigData.json");
    let mut passives = Vec::new();
    for field in INHERENT_FIELDS {
        for entry in depot.records(field) {
            let group_id = entry.int_or("proudSkillGroupId", 0);
            if group_id == 0 {
                continue;
            }
            let entries = proud_skill_entries(&proud, group_id);
            let Some(first) = entries.first() else {
                continue;
            };
            let params: Vec<f64> = first
                .list("paramList")
                .iter()
                .filter_map(Value::as_f64)
                .collect();
            passives.push(PassiveTalent {
                proud_skill_group_id: group_id,
                name_en: store.text_en(first.int_or("nameTextMapHash", 0)),
                name_chs: store.text_chs(first.int_or("nameTextMapHash", 0)),
                description: store.text_en(first.int_or("descTextMapHash", 0)),
                params: round_all(&params, 4),
            });
        }
    }
    passives
}

fn extract_constellations(store: &DataStore, depot: &Record) -> Vec<Constellation> {
    let talent_table = store.excel("AvatarTalentExcelConfigData.json");
    let talent_idx = index::by_key(&talent_table, "talentId");
    let mut constellations = Vec::new();
    for cid in depot.list("talents").iter().filter_map(Value::as_i64) {
        if cid == 0 {
            continue;
        }
        let Some(talent) = talent_idx.get(&cid) else {
            continue;
        };
        let params: Vec<f64> = talent
            .list("paramList")
            .iter()
            .filter_map(Value::as_f64)
            .collect();
        constellations.push(Constellation {
            level: constellations.len() + 1,
            talent_id: cid,
            name_en: store.text_en(talent.int_or("nameTextMapHash", 0)),
            name_chs: store.text_chs(talent.int_or("nameTextMapHash", 0)),
            description: store.text_en(talent.int_or("descTextMapHash", 0)),
            params: round_all(&params, 4),
            open_config: talent.str_or("openConfig", "").to_string(),
        });
    }
    constellations
}

/// Extract the full research profile for an avatar row.
pub fn character_profile(store: &DataStore, avatar: &Record) -> CharacterProfile {
    let id = avatar.int_or("id", 0);
    let name_hash = avatar.int_or("nameTextMapHash", 0);
    let name_en = store.text_en(name_hash);
    let name_chs = store.text_chs(name_hash);
    let rarity = reference::rarity_from_quality(avatar.str_or("qualityType", "")).unwrap_or(4);

    let depot_table = store.excel("AvatarSkillDepotExcelConfigData.json");
    let depot_idx = index::by_key(&depot_table, "id");
    let skill_depot_id = avatar.int_or("skillDepotId", 0);
    let depot = depot_idx
        .get(&skill_depot_id)
        .copied()
        .cloned()
        .unwrap_or_default();

    let element = element_from_depot(store, &depot);
    let weapon_type = reference::weapon_type_name(avatar.str_or("weaponType", ""))
        .unwrap_or("Unknown")
        .to_string();

    let base_stats = BaseStats {
        hp_base: round_to(avatar.float_or("hpBase", 0.0), 2),
        atk_base: round_to(avatar.float_or("attackBase", 0.0), 2),
        def_base: round_to(avatar.float_or("defenseBase", 0.0), 2),
        crit_rate: avatar.float_or("critical", 0.05),
        crit_dmg: avatar.float_or("criticalHurt", 0.5),
        elemental_mastery: avatar.float_or("elementMastery", 0.0),
        energy_recharge: avatar.float_or("chargeEfficiency", 1.0),
    };

    let growth_curves: Vec<GrowthCurve> = avatar
        .records("propGrowCurves")
        .iter()
        .map(|gc| GrowthCurve {
            prop: gc.str_or("type", "").to_string(),
            curve: gc.str_or("growCurve", "").to_string(),
        })
        .collect();
    let curve_for = |prop: &str| {
        growth_curves
            .iter()
            .find(|gc| gc.prop == prop)
            .map(|gc| gc.curve.as_str())
            .unwrap_or("")
    };

    let promote_id = avatar.int_or("avatarPromoteId", 0);
    let promote = PromoteTable::parse(&store.excel("AvatarPromoteExcelConfigData.json"));
    let phases = promote.phases_for(promote_id);
    let bonus_stat = dominant_bonus_stat(&phases).map(str::to_string);

    // Flat base-stat adds from the final ascension (phase 6).
    let final_phase = phases.iter().find(|p| p.phase == 6);
    let hp_add = final_phase.map_or(0.0, |p| p.bonus_at("FIGHT_PROP_BASE_HP"));
    let atk_add = final_phase.map_or(0.0, |p| p.bonus_at("FIGHT_PROP_BASE_ATTACK"));
    let def_add = final_phase.map_or(0.0, |p| p.bonus_at("FIGHT_PROP_BASE_DEFENSE"));

    let curves = store.excel("AvatarCurveExcelConfigData.json");
    let lv90_stats = Lv90Stats {
        hp: round_to(
            curve::stat_at_level(
                avatar.float_or("hpBase", 0.0),
                &curves,
                curve_for("FIGHT_PROP_BASE_HP"),
                90,
                hp_add,
            ),
            2,
        ),
        atk: round_to(
            curve::stat_at_level(
                avatar.float_or("attackBase", 0.0),
                &curves,
                curve_for("FIGHT_PROP_BASE_ATTACK"),
                90,
                atk_add,
            ),
            2,
        ),
        def: round_to(
            curve::stat_at_level(
                avatar.float_or("defenseBase", 0.0),
                &curves,
                curve_for("FIGHT_PROP_BASE_DEFENSE"),
                90,
                def_add,
            ),
            2,
        ),
    };

    let ascension = AscensionInfo {
        promote_id,
        bonus_stat_name: bonus_stat
            .as_deref()
            .map(|s| reference::fight_prop_name(s).to_string())
            .unwrap_or_else(|| "None".to_string()),
        phases: ascension_phase_summary(&phases, bonus_stat.as_deref()),
        bonus_stat_type: bonus_stat,
    };

    CharacterProfile {
        id,
        key: entity_key(&name_en),
        name_en,
        name_chs,
        element,
        weapon_type,
        rarity,
        body_type: avatar.str_or("bodyType", "").to_string(),
        skill_depot_id,
        base_stats,
        growth_curves,
        lv90_stats,
        ascension,
        skills: extract_skills(store, &depot),
        passives: extract_passives(store, &depot),
        constellations: extract_constellations(store, &depot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;

    fn fixture_store() -> (tempfile::TempDir, DataStore) {
        let dir = tempfile::tempdir().unwrap();
        let files: &[(&str, serde_json::Value)] = &[
            (
                "AvatarExcelConfigData.json",
                json!([{
                    "id": 10000099,
                    "nameTextMapHash": 111,
                    "qualityType": "QUALITY_ORANGE",
                    "weaponType": "WEAPON_SWORD_ONE_HAND",
                    "bodyType": "BODY_GIRL",
                    "skillDepotId": 99,
                    "avatarPromoteId": 55,
                    "hpBase": 1000.0,
                    "attackBase": 100.0,
                    "defenseBase": 60.0,
                    "critical": 0.05,
                    "criticalHurt": 0.5,
                    "chargeEfficiency": 1.0,
                    "propGrowCurves": [
                        {"type": "FIGHT_PROP_BASE_HP", "growCurve": "GROW_CURVE_HP_S5"},
                        {"type": "FIGHT_PROP_BASE_ATTACK", "growCurve": "GROW_CURVE_ATTACK_S5"},
                        {"type": "FIGHT_PROP_BASE_DEFENSE", "growCurve": "GROW_CURVE_HP_S5"}
                    ]
                }]),
            ),
            (
                "AvatarSkillDepotExcelConfigData.json",
                json!([{
                    "id": 99,
                    "skills": [701, 702, 0, 0],
                    "energySkill": 705,
                    "talents": [901, 0],
                    "inherentProudSkillOpens": [
                        {"proudSkillGroupId": 8001},
                        {"needAvatarPromoteLevel": 1}
                    ]
                }]),
            ),
            (
                "AvatarSkillExcelConfigData.json",
                json!([
                    {"id": 701, "nameTextMapHash": 201, "proudSkillGroupId": 7011},
                    {"id": 702, "nameTextMapHash": 202, "cdTime": 8.0, "proudSkillGroupId": 7021},
                    {"id": 705, "nameTextMapHash": 205, "cdTime": 15.0,
                     "costElemType": "Fire", "costElemVal": 60.0, "proudSkillGroupId": 7051}
                ]),
            ),
            (
                "ProudSkillExcelConfigData.json",
                json!([
                    {"proudSkillGroupId": 7011, "level": 2,
                     "paramList": [0.55, 0.0], "paramDescList": [301, 999]},
                    {"proudSkillGroupId": 7011, "level": 1,
                     "paramList": [0.5, 0.0], "paramDescList": [301, 999]},
                    {"proudSkillGroupId": 7011, "level": 3,
                     "paramList": [0.6, 0.0], "paramDescList": [301, 999]},
                    {"proudSkillGroupId": 7021, "level": 1, "paramList": [1.2]},
                    {"proudSkillGroupId": 7051, "level": 1, "paramList": [2.4]},
                    {"proudSkillGroupId": 8001, "level": 1,
                     "nameTextMapHash": 501, "descTextMapHash": 502,
                     "paramList": [0.25, 0.0]}
                ]),
            ),
            (
                "AvatarPromoteExcelConfigData.json",
                json!([
                    {"avatarPromoteId": 55, "unlockMaxLevel": 20},
                    {"avatarPromoteId": 55, "promoteLevel": 1, "unlockMaxLevel": 40,
                     "scoinCost": 20000,
                     "addProps": [{"propType": "FIGHT_PROP_BASE_HP", "value": 100.0}]},
                    {"avatarPromoteId": 55, "promoteLevel": 2, "unlockMaxLevel": 50,
                     "addProps": [
                         {"propType": "FIGHT_PROP_BASE_HP", "value": 200.0},
                         {"propType": "FIGHT_PROP_CRITICAL", "value": 0.048}
                     ]},
                    {"avatarPromoteId": 55, "promoteLevel": 3, "unlockMaxLevel": 60,
                     "addProps": [{"propType": "FIGHT_PROP_CRITICAL", "value": 0.096}]},
                    {"avatarPromoteId": 55, "promoteLevel": 6, "unlockMaxLevel": 90,
                     "scoinCost": 120000,
                     "addProps": [
                         {"propType": "FIGHT_PROP_BASE_HP", "value": 500.0},
                         {"propType": "FIGHT_PROP_BASE_ATTACK", "value": 50.0},
                         {"propType": "FIGHT_PROP_BASE_DEFENSE", "value": 30.0},
                         {"propType": "FIGHT_PROP_CRITICAL", "value": 0.192}
                     ]}
                ]),
            ),
            (
                "AvatarCurveExcelConfigData.json",
                json!([{
                    "level": 90,
                    "curveInfos": [
                        {"type": "GROW_CURVE_HP_S5", "value": 8.0},
                        {"type": "GROW_CURVE_ATTACK_S5", "value": 6.0}
                    ]
                }]),
            ),
            (
                "AvatarTalentExcelConfigData.json",
                json!([{
                    "talentId": 901, "nameTextMapHash": 401, "descTextMapHash": 402,
                    "paramList": [0.2, 0.0], "openConfig": "Testa_C1"
                }]),
            ),
            (
                "TextMapEN.json",
                json!({
                    "111": "Testa",
                    "201": "Normal Strike",
                    "202": "Flame Art",
                    "205": "Grand Finale",
                    "301": "1-Hit DMG",
                    "401": "First Light",
                    "402": "Enhances <i>everything</i>.",
                    "501": "Hidden Talent",
                    "502": "Does hidden things."
                }),
            ),
            ("TextMapCHS.json", json!({"111": "苔丝塔"})),
        ];
        for (name, doc) in files {
            fs::write(dir.path().join(name), serde_json::to_string(doc).unwrap()).unwrap();
        }
        let store = DataStore::with_dirs(dir.path(), dir.path());
        (dir, store)
    }

    #[test]
    fn test_find_character_by_id_name_and_partial() {
        let (_dir, store) = fixture_store();
        assert!(find_character(&store, "10000099").is_some());
        assert!(find_character(&store, "testa").is_some());
        assert!(find_character(&store, "苔丝塔").is_some());
        assert!(find_character(&store, "est").is_some());
        assert!(find_character(&store, "nobody").is_none());
        assert!(find_character(&store, "424242").is_none());
    }

    #[test]
    fn test_profile_identity_and_element() {
        let (_dir, store) = fixture_store();
        let avatar = find_character(&store, "Testa").unwrap();
        let profile = character_profile(&store, &avatar);
        assert_eq!(profile.id, 10000099);
        assert_eq!(profile.key, "testa");
        assert_eq!(profile.name_chs, "苔丝塔");
        assert_eq!(profile.element, "Pyro");
        assert_eq!(profile.weapon_type, "Sword");
        assert_eq!(profile.rarity, 5);
    }

    #[test]
    fn test_profile_lv90_stats_include_phase6_adds() {
        let (_dir, store) = fixture_store();
        let avatar = find_character(&store, "Testa").unwrap();
        let profile = character_profile(&store, &avatar);
        // base * curve@90 + phase-6 flat add
        assert_eq!(profile.lv90_stats.hp, 1000.0 * 8.0 + 500.0);
        assert_eq!(profile.lv90_stats.atk, 100.0 * 6.0 + 50.0);
        assert_eq!(profile.lv90_stats.def, 60.0 * 8.0 + 30.0);
    }

    #[test]
    fn test_profile_ascension_bonus_stat() {
        let (_dir, store) = fixture_store();
        let avatar = find_character(&store, "Testa").unwrap();
        let profile = character_profile(&store, &avatar);
        assert_eq!(
            profile.ascension.bonus_stat_type.as_deref(),
            Some("FIGHT_PROP_CRITICAL")
        );
        assert_eq!(profile.ascension.bonus_stat_name, "CRIT Rate");
        assert_eq!(profile.ascension.phases.len(), 5);
        let last = profile.ascension.phases.last().unwrap();
        assert_eq!(last.phase, 6);
        assert_eq!(last.bonus_stat, 0.192);
        assert_eq!(last.mora_cost, 120000);
    }

    #[test]
    fn test_profile_skills_in_category_order() {
        let (_dir, store) = fixture_store();
        let avatar = find_character(&store, "Testa").unwrap();
        let profile = character_profile(&store, &avatar);
        let categories: Vec<&str> = profile.skills.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, ["normal_attack", "elemental_skill", "elemental_burst"]);
        let normal = &profile.skills[0];
        assert_eq!(normal.name_en, "Normal Strike");
        // transposed across levels 1..3, all-zero row dropped
        assert_eq!(normal.multipliers, vec![vec![0.5, 0.55, 0.6]]);
        // hash 999 is unresolved and filtered out
        assert_eq!(normal.param_descriptions, vec!["1-Hit DMG"]);
        let burst = &profile.skills[2];
        assert_eq!(burst.cost_val, 60.0);
        assert_eq!(burst.cd, 15.0);
    }

    #[test]
    fn test_profile_passives_and_constellations() {
        let (_dir, store) = fixture_store();
        let avatar = find_character(&store, "Testa").unwrap();
        let profile = character_profile(&store, &avatar);
        assert_eq!(profile.passives.len(), 1);
        assert_eq!(profile.passives[0].name_en, "Hidden Talent");
        assert_eq!(profile.passives[0].params, vec![0.25, 0.0]);
        assert_eq!(profile.constellations.len(), 1);
        assert_eq!(profile.constellations[0].level, 1);
        assert_eq!(profile.constellations[0].name_en, "First Light");
        assert_eq!(profile.constellations[0].open_config, "Testa_C1");
    }
}
