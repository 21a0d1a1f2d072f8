//! Markdown research reports.
//!
//! One report per entity, mirroring the layout of the JSON artifacts:
//! identity table, stat projections, ascension, then the entity-specific
//! sections (skills, refinements, set bonuses).

use agd::artifact::ArtifactSetProfile;
use agd::character::CharacterProfile;
use agd::format::{fmt_multiplier, fmt_percent, strip_markup};
use agd::reference::is_percent_prop;
use agd::weapon::WeaponProfile;

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

fn fmt_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{out}")
    } else {
        out
    }
}

fn title_case(category: &str) -> String {
    category
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Format a bonus value, as a percentage when the prop calls for one.
fn fmt_prop_value(prop: &str, value: f64) -> String {
    if is_percent_prop(prop) {
        fmt_percent(value, 2)
    } else {
        format!("{}", (value * 10.0).round() / 10.0)
    }
}

pub fn character_markdown(p: &CharacterProfile) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut a = |s: String| lines.push(s);

    a(format!("# {} Research\n", p.name_en));
    a(format!("> Auto-generated from AnimeGameData on {}", today()));
    a("> Manual verification required before implementation.\n".to_string());

    a("## Basic Info".to_string());
    a("| Property | Value |".to_string());
    a("|----------|-------|".to_string());
    a(format!("| Name (EN) | {} |", p.name_en));
    a(format!("| Name (CHS) | {} |", p.name_chs));
    a(format!("| Element | {} |", p.element));
    a(format!("| Weapon | {} |", p.weapon_type));
    a(format!("| Rarity | {}\u{2605} |", p.rarity));
    a(format!("| ID | {} |", p.id));
    a(format!("| Skill Depot ID | {} |", p.skill_depot_id));
    a(String::new());

    let bs = &p.base_stats;
    let curve_for = |prop: &str| {
        p.growth_curves
            .iter()
            .find(|gc| gc.prop == prop)
            .map(|gc| gc.curve.as_str())
            .unwrap_or("N/A")
            .to_string()
    };
    a("## Base Stats".to_string());
    a("| Stat | Base (Lv1) | Lv90 (with ascension) | Growth Curve |".to_string());
    a("|------|------------|----------------------|--------------|".to_string());
    a(format!(
        "| HP | {} | {} | {} |",
        bs.hp_base,
        p.lv90_stats.hp,
        curve_for("FIGHT_PROP_BASE_HP")
    ));
    a(format!(
        "| ATK | {} | {} | {} |",
        bs.atk_base,
        p.lv90_stats.atk,
        curve_for("FIGHT_PROP_BASE_ATTACK")
    ));
    a(format!(
        "| DEF | {} | {} | {} |",
        bs.def_base,
        p.lv90_stats.def,
        curve_for("FIGHT_PROP_BASE_DEFENSE")
    ));
    a(format!("| CRIT Rate | {} | - | - |", fmt_percent(bs.crit_rate, 2)));
    a(format!("| CRIT DMG | {} | - | - |", fmt_percent(bs.crit_dmg, 2)));
    if bs.elemental_mastery != 0.0 {
        a(format!("| Elemental Mastery | {} | - | - |", bs.elemental_mastery));
    }
    if bs.energy_recharge != 1.0 {
        a(format!(
            "| Energy Recharge | {} | - | - |",
            fmt_percent(bs.energy_recharge, 2)
        ));
    }
    a(String::new());

    let asc = &p.ascension;
    let bonus_type = asc.bonus_stat_type.as_deref().unwrap_or("");
    a(format!("## Ascension (Bonus: {})", asc.bonus_stat_name));
    a("| Phase | Max Level | HP Add | ATK Add | DEF Add | Bonus Stat | Mora |".to_string());
    a("|-------|-----------|--------|---------|---------|------------|------|".to_string());
    for phase in &asc.phases {
        let bonus = if phase.bonus_stat != 0.0 && is_percent_prop(bonus_type) {
            fmt_percent(phase.bonus_stat, 2)
        } else {
            format!("{}", phase.bonus_stat)
        };
        a(format!(
            "| {} | {} | {} | {} | {} | {} | {} |",
            phase.phase,
            phase.max_level,
            phase.hp_add,
            phase.atk_add,
            phase.def_add,
            bonus,
            fmt_thousands(phase.mora_cost)
        ));
    }
    a(String::new());

    a("## Skills\n".to_string());
    for sk in &p.skills {
        a(format!(
            "### {}: {} ({})",
            title_case(&sk.category),
            sk.name_en,
            sk.name_chs
        ));
        a(format!("- **Skill ID**: {}", sk.id));
        if sk.cd != 0.0 {
            a(format!("- **CD**: {}s", sk.cd));
        }
        if sk.cost_val > 0.0 {
            a(format!("- **Energy Cost**: {}", sk.cost_val));
        }
        if sk.max_charges > 1 {
            a(format!("- **Max Charges**: {}", sk.max_charges));
        }
        a(String::new());

        if !sk.multipliers.is_empty() {
            a("#### Multipliers (Lv1 → Lv10 → Lv15)".to_string());
            a(String::new());
            for (i, row) in sk.multipliers.iter().enumerate() {
                let desc = sk
                    .param_descriptions
                    .get(i)
                    .map(|d| truncate(&strip_markup(d), 60))
                    .unwrap_or_else(|| format!("Param {}", i + 1));
                let lv1 = row.first().map(|&v| fmt_multiplier(v)).unwrap_or_else(|| "?".into());
                let lv10 = row.get(9).map(|&v| fmt_multiplier(v)).unwrap_or_else(|| "?".into());
                let lv15 = row.last().map(|&v| fmt_multiplier(v)).unwrap_or_else(|| "?".into());
                a(format!("| {desc} | {lv1} | {lv10} | {lv15} |"));
            }
            a(String::new());
        }
    }
    a(String::new());

    if !p.passives.is_empty() {
        a("## Passive Talents\n".to_string());
        for pt in &p.passives {
            a(format!("### {} ({})", pt.name_en, pt.name_chs));
            a(format!("{}\n", strip_markup(&pt.description)));
            let params: Vec<f64> = pt.params.iter().copied().filter(|&v| v != 0.0).collect();
            if !params.is_empty() {
                a(format!("**Parameters**: {params:?}\n"));
            }
        }
    }
    a(String::new());

    if !p.constellations.is_empty() {
        a("## Constellations\n".to_string());
        for c in &p.constellations {
            a(format!("### C{}: {} ({})", c.level, c.name_en, c.name_chs));
            a(format!("{}\n", strip_markup(&c.description)));
            let params: Vec<f64> = c.params.iter().copied().filter(|&v| v != 0.0).collect();
            if !params.is_empty() {
                a(format!("**Parameters**: {params:?}\n"));
            }
        }
    }
    a(String::new());

    a("## References\n".to_string());
    a(format!("- **AnimeGameData ID**: {}", p.id));
    a(format!("- **Skill Depot**: {}", p.skill_depot_id));
    a(String::new());

    lines.join("\n")
}

pub fn weapon_markdown(p: &WeaponProfile) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut a = |s: String| lines.push(s);

    a(format!("# {} Research\n", p.name_en));
    a(format!("> Auto-generated from AnimeGameData on {}\n", today()));

    a("## Basic Info".to_string());
    a("| Property | Value |".to_string());
    a("|----------|-------|".to_string());
    a(format!("| Name (EN) | {} |", p.name_en));
    a(format!("| Name (CHS) | {} |", p.name_chs));
    a(format!("| Type | {} |", p.weapon_type));
    a(format!("| Rarity | {}\u{2605} |", p.rarity));
    a(format!("| ID | {} |", p.id));
    a(String::new());

    a("## Stats".to_string());
    a("| Stat | Base (Lv1) | Lv90 |".to_string());
    a("|------|------------|------|".to_string());
    a(format!("| Base ATK | {} | {} |", p.base_atk, p.lv90_stats.atk));
    if let Some(sub) = &p.sub_stat {
        a(format!(
            "| {} | {} | {} |",
            sub.name,
            fmt_prop_value(&sub.prop, sub.base_value),
            fmt_prop_value(&sub.prop, p.lv90_stats.sub_stat_value)
        ));
    }
    a(String::new());

    if !p.passive_effects.is_empty() {
        a("## Passive Effect\n".to_string());
        if let Some(r1) = p.passive_effects.iter().find(|e| e.refinement == 1) {
            a(format!("**{}** ({})\n", r1.name_en, r1.name_chs));
            a(format!("{}\n", r1.description));
        }
        a("### Refinement Scaling".to_string());
        a("| R | Parameters |".to_string());
        a("|---|-----------|".to_string());
        for effect in &p.passive_effects {
            let params: Vec<f64> = effect.params.iter().copied().filter(|&v| v != 0.0).collect();
            a(format!("| R{} | {params:?} |", effect.refinement));
        }
        a(String::new());
    }

    lines.join("\n")
}

pub fn artifact_markdown(p: &ArtifactSetProfile) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut a = |s: String| lines.push(s);

    a(format!("# {} Research\n", p.name_en));
    a(format!("> Auto-generated from AnimeGameData on {}\n", today()));

    a("## Basic Info".to_string());
    a("| Property | Value |".to_string());
    a("|----------|-------|".to_string());
    a(format!("| Name (EN) | {} |", p.name_en));
    a(format!("| Name (CHS) | {} |", p.name_chs));
    a(format!("| Set ID | {} |", p.set_id));
    a(format!("| Max Rarity | {}\u{2605} |", p.rarity));
    a(String::new());

    a("## Set Bonuses\n".to_string());
    for bonus in &p.bonuses {
        a(format!("### {}-Piece Bonus", bonus.pieces));
        a(format!("{}\n", bonus.description));
        if !bonus.add_props.is_empty() {
            a("**Stat Bonuses:**".to_string());
            for prop in &bonus.add_props {
                a(format!("- {}: +{}", prop.name, fmt_prop_value(&prop.prop, prop.value)));
            }
            a(String::new());
        }
        let params: Vec<f64> = bonus.params.iter().copied().filter(|&v| v != 0.0).collect();
        if !params.is_empty() {
            a(format!("**Parameters**: {params:?}\n"));
        }
        if !bonus.open_config.is_empty() {
            a(format!("**Config**: `{}`\n", bonus.open_config));
        }
    }

    a("## Pieces\n".to_string());
    a("| Slot | Name (EN) | Name (CHS) |".to_string());
    a("|------|-----------|------------|".to_string());
    for piece in &p.pieces {
        a(format!(
            "| {} | {} | {} |",
            piece.equip_name, piece.name_en, piece.name_chs
        ));
    }
    a(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use agd::artifact::{SetBonus, SetPiece};
    use agd::character::{AscensionInfo, AscensionPhase, BaseStats, Lv90Stats, SkillEntry};
    use agd::weapon::{RefinementEffect, SubStat, WeaponAscension, WeaponLv90};

    fn sample_character() -> CharacterProfile {
        CharacterProfile {
            id: 10000099,
            key: "testa".into(),
            name_en: "Testa".into(),
            name_chs: "苔丝塔".into(),
            element: "Pyro".into(),
            weapon_type: "Sword".into(),
            rarity: 5,
            body_type: "BODY_GIRL".into(),
            skill_depot_id: 99,
            base_stats: BaseStats {
                hp_base: 1000.0,
                atk_base: 100.0,
                def_base: 60.0,
                crit_rate: 0.05,
                crit_dmg: 0.5,
                elemental_mastery: 0.0,
                energy_recharge: 1.0,
            },
            growth_curves: Vec::new(),
            lv90_stats: Lv90Stats {
                hp: 8500.0,
                atk: 650.0,
                def: 510.0,
            },
            ascension: AscensionInfo {
                promote_id: 55,
                bonus_stat_type: Some("FIGHT_PROP_CRITICAL".into()),
                bonus_stat_name: "CRIT Rate".into(),
                phases: vec![AscensionPhase {
                    phase: 6,
                    max_level: 90,
                    hp_add: 500.0,
                    atk_add: 50.0,
                    def_add: 30.0,
                    bonus_stat: 0.192,
                    mora_cost: 120000,
                    cost_items: Vec::new(),
                }],
            },
            skills: vec![SkillEntry {
                category: "elemental_burst".into(),
                id: 705,
                name_en: "Grand Finale".into(),
                name_chs: String::new(),
                cd: 15.0,
                cost_type: "Fire".into(),
                cost_val: 60.0,
                max_charges: 1,
                proud_skill_group_id: 7051,
                multipliers: vec![vec![2.4, 2.6]],
                param_descriptions: vec!["Skill DMG".into()],
            }],
            passives: Vec::new(),
            constellations: Vec::new(),
        }
    }

    #[test]
    fn test_character_markdown_sections() {
        let md = character_markdown(&sample_character());
        assert!(md.starts_with("# Testa Research\n"));
        assert!(md.contains("## Basic Info"));
        assert!(md.contains("## Ascension (Bonus: CRIT Rate)"));
        // percent-prop bonus rendered as a percentage
        assert!(md.contains("19.20%"));
        assert!(md.contains("120,000"));
        assert!(md.contains("### Elemental Burst: Grand Finale"));
        assert!(md.contains("- **Energy Cost**: 60"));
        // no passives, no passive header
        assert!(!md.contains("## Passive Talents"));
    }

    #[test]
    fn test_weapon_markdown_sections() {
        let profile = WeaponProfile {
            id: 13501,
            key: "spear_of_trials".into(),
            name_en: "Spear of Trials".into(),
            name_chs: "试炼之枪".into(),
            description: String::new(),
            weapon_type: "Polearm".into(),
            rarity: 5,
            base_atk: 46.0,
            base_atk_curve: String::new(),
            sub_stat: Some(SubStat {
                prop: "FIGHT_PROP_CRITICAL_HURT".into(),
                name: "CRIT DMG".into(),
                base_value: 0.144,
                curve: String::new(),
            }),
            lv90_stats: WeaponLv90 {
                atk: 615.5,
                sub_stat_value: 0.288,
            },
            ascension: WeaponAscension {
                promote_id: 13501,
                phases: Vec::new(),
            },
            passive_effects: vec![RefinementEffect {
                affix_id: 1,
                refinement: 1,
                name_en: "Trial by Fire".into(),
                name_chs: String::new(),
                description: "Gain Pyro DMG.".into(),
                params: vec![0.12, 0.0],
                add_props: Vec::new(),
            }],
        };
        let md = weapon_markdown(&profile);
        assert!(md.contains("## Stats"));
        // substat formatted as a percentage at both columns
        assert!(md.contains("| CRIT DMG | 14.40% | 28.80% |"));
        assert!(md.contains("### Refinement Scaling"));
        assert!(md.contains("| R1 | [0.12] |"));
    }

    #[test]
    fn test_artifact_markdown_sections() {
        let profile = ArtifactSetProfile {
            set_id: 15006,
            key: "crimson_witch_of_flames".into(),
            name_en: "Crimson Witch of Flames".into(),
            name_chs: "炽烈的炎之魔女".into(),
            rarity: 5,
            equip_affix_id: 215006,
            bonuses: vec![SetBonus {
                pieces: 2,
                description: "Pyro DMG Bonus +15%.".into(),
                description_chs: String::new(),
                params: vec![0.0],
                add_props: Vec::new(),
                open_config: String::new(),
            }],
            pieces: vec![SetPiece {
                id: 81550,
                name_en: "Witch's Flower of Blazing Ice".into(),
                name_chs: String::new(),
                equip_type: "EQUIP_BRACER".into(),
                equip_name: "Flower of Life".into(),
                rarity: 5,
                max_level: 21,
            }],
        };
        let md = artifact_markdown(&profile);
        assert!(md.contains("### 2-Piece Bonus"));
        assert!(md.contains("| Flower of Life | Witch's Flower of Blazing Ice |"));
    }

    #[test]
    fn test_fmt_thousands() {
        assert_eq!(fmt_thousands(0), "0");
        assert_eq!(fmt_thousands(999), "999");
        assert_eq!(fmt_thousands(120000), "120,000");
        assert_eq!(fmt_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_title_case_and_truncate() {
        assert_eq!(title_case("normal_attack"), "Normal Attack");
        assert_eq!(title_case("elemental_skill_2"), "Elemental Skill 2");
        assert_eq!(truncate("short", 60), "short");
        assert_eq!(truncate(&"x".repeat(70), 60), format!("{}...", "x".repeat(57)));
    }
}
