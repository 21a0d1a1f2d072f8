//! Compact JSON artifacts.
//!
//! The full profile goes to `auto_data.json` verbatim; these builders shape
//! the condensed per-entity JSON that sits next to it, with zero-valued
//! noise and markup stripped out.

use agd::artifact::ArtifactSetProfile;
use agd::character::CharacterProfile;
use agd::format::strip_markup;
use agd::weapon::WeaponProfile;
use serde_json::{json, Map, Value};

fn nonzero(params: &[f64]) -> Vec<f64> {
    params.iter().copied().filter(|&v| v != 0.0).collect()
}

pub fn character_compact(profile: &CharacterProfile) -> Value {
    let skills: Vec<Value> = profile
        .skills
        .iter()
        .map(|sk| {
            let mut entry = Map::new();
            entry.insert("category".into(), json!(sk.category));
            entry.insert("name".into(), json!(sk.name_en));
            if !sk.name_chs.is_empty() {
                entry.insert("name_chs".into(), json!(sk.name_chs));
            }
            if sk.cd != 0.0 {
                entry.insert("cd".into(), json!(sk.cd));
            }
            if sk.cost_val > 0.0 {
                entry.insert("energy_cost".into(), json!(sk.cost_val));
            }
            if sk.max_charges > 1 {
                entry.insert("charges".into(), json!(sk.max_charges));
            }
            if !sk.multipliers.is_empty() {
                entry.insert("multipliers".into(), json!(sk.multipliers));
            }
            if !sk.param_descriptions.is_empty() {
                let cleaned: Vec<String> = sk
                    .param_descriptions
                    .iter()
                    .map(|d| strip_markup(d))
                    .collect();
                entry.insert("param_descriptions".into(), json!(cleaned));
            }
            Value::Object(entry)
        })
        .collect();

    let passives: Vec<Value> = profile
        .passives
        .iter()
        .map(|p| {
            json!({
                "name_en": p.name_en,
                "name_chs": p.name_chs,
                "description": strip_markup(&p.description),
                "params": nonzero(&p.params),
            })
        })
        .collect();

    let constellations: Vec<Value> = profile
        .constellations
        .iter()
        .map(|c| {
            json!({
                "level": c.level,
                "name_en": c.name_en,
                "name_chs": c.name_chs,
                "description": strip_markup(&c.description),
                "params": nonzero(&c.params),
            })
        })
        .collect();

    json!({
        "id": profile.id,
        "key": profile.key,
        "name_en": profile.name_en,
        "name_chs": profile.name_chs,
        "element": profile.element,
        "weapon_type": profile.weapon_type,
        "rarity": profile.rarity,
        "base_stats": profile.base_stats,
        "growth_curves": profile.growth_curves,
        "lv90_stats": profile.lv90_stats,
        "ascension": {
            "bonus_stat_type": profile.ascension.bonus_stat_type,
            "bonus_stat_name": profile.ascension.bonus_stat_name,
            "values": profile.ascension.phases.iter().map(|p| p.bonus_stat).collect::<Vec<f64>>(),
        },
        "skills": skills,
        "passives": passives,
        "constellations": constellations,
    })
}

pub fn weapon_compact(profile: &WeaponProfile) -> Value {
    let mut root = Map::new();
    root.insert("name".into(), json!(profile.name_en));
    root.insert("name_chs".into(), json!(profile.name_chs));
    root.insert("rarity".into(), json!(profile.rarity));
    root.insert("type".into(), json!(profile.weapon_type));
    root.insert("base_atk".into(), json!(profile.lv90_stats.atk));
    let sub_name = profile
        .sub_stat
        .as_ref()
        .map(|s| s.name.as_str())
        .unwrap_or("None");
    root.insert("sub_stat".into(), json!(sub_name));
    root.insert("sub_value".into(), json!(profile.lv90_stats.sub_stat_value));

    if let Some(r1) = profile.passive_effects.iter().find(|e| e.refinement == 1) {
        root.insert("passive_name".into(), json!(r1.name_en));
        root.insert("passive".into(), json!(r1.description));
        root.insert("passive_params_r1".into(), json!(r1.params));
    }
    if !profile.passive_effects.is_empty() {
        let mut refinements = Map::new();
        for effect in &profile.passive_effects {
            refinements.insert(format!("r{}", effect.refinement), json!(effect.params));
        }
        root.insert("refinement_params".into(), Value::Object(refinements));
    }
    Value::Object(root)
}

pub fn artifact_compact(profile: &ArtifactSetProfile) -> Value {
    let mut bonuses = Map::new();
    for bonus in &profile.bonuses {
        bonuses.insert(
            format!("{}pc", bonus.pieces),
            json!({
                "effect": bonus.description,
                "effect_chs": bonus.description_chs,
                "params": nonzero(&bonus.params),
                "add_props": bonus.add_props,
            }),
        );
    }
    let pieces: Vec<Value> = profile
        .pieces
        .iter()
        .map(|p| {
            json!({
                "name": p.name_en,
                "name_chs": p.name_chs,
                "type": p.equip_name,
                "slot": p.equip_type,
            })
        })
        .collect();

    json!({
        "set_id": profile.set_id,
        "name": profile.name_en,
        "name_chs": profile.name_chs,
        "rarity": profile.rarity,
        "bonuses": bonuses,
        "pieces": pieces,
    })
}
