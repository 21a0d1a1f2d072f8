//! Reference data for AnimeGameData exports.
//!
//! Hardcoded mappings from the corpus' internal identifiers (fight props,
//! weapon types, elemental cost types, quality grades, equip slots) to the
//! display names and short keys used in research artifacts.

// ============================================================================
// Fight props
// ============================================================================

/// Fight prop information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FightProp {
    pub prop: &'static str,
    pub name: &'static str,
    pub short: &'static str,
}

/// All fight props the research artifacts care about
pub const FIGHT_PROPS: &[FightProp] = &[
    FightProp {
        prop: "FIGHT_PROP_BASE_HP",
        name: "Base HP",
        short: "hp",
    },
    FightProp {
        prop: "FIGHT_PROP_HP",
        name: "HP",
        short: "hp_flat",
    },
    FightProp {
        prop: "FIGHT_PROP_HP_PERCENT",
        name: "HP%",
        short: "hp_percent",
    },
    FightProp {
        prop: "FIGHT_PROP_BASE_ATTACK",
        name: "Base ATK",
        short: "atk",
    },
    FightProp {
        prop: "FIGHT_PROP_ATTACK",
        name: "ATK",
        short: "atk_flat",
    },
    FightProp {
        prop: "FIGHT_PROP_ATTACK_PERCENT",
        name: "ATK%",
        short: "atk_percent",
    },
    FightProp {
        prop: "FIGHT_PROP_BASE_DEFENSE",
        name: "Base DEF",
        short: "def",
    },
    FightProp {
        prop: "FIGHT_PROP_DEFENSE",
        name: "DEF",
        short: "def_flat",
    },
    FightProp {
        prop: "FIGHT_PROP_DEFENSE_PERCENT",
        name: "DEF%",
        short: "def_percent",
    },
    FightProp {
        prop: "FIGHT_PROP_CRITICAL",
        name: "CRIT Rate",
        short: "crit_rate",
    },
    FightProp {
        prop: "FIGHT_PROP_CRITICAL_HURT",
        name: "CRIT DMG",
        short: "crit_dmg",
    },
    FightProp {
        prop: "FIGHT_PROP_CHARGE_EFFICIENCY",
        name: "Energy Recharge",
        short: "energy_recharge",
    },
    FightProp {
        prop: "FIGHT_PROP_HEAL_ADD",
        name: "Healing Bonus",
        short: "healing_bonus",
    },
    FightProp {
        prop: "FIGHT_PROP_ELEMENT_MASTERY",
        name: "Elemental Mastery",
        short: "elemental_mastery",
    },
    FightProp {
        prop: "FIGHT_PROP_PHYSICAL_ADD_HURT",
        name: "Physical DMG Bonus",
        short: "physical_dmg_bonus",
    },
    FightProp {
        prop: "FIGHT_PROP_FIRE_ADD_HURT",
        name: "Pyro DMG Bonus",
        short: "pyro_dmg_bonus",
    },
    FightProp {
        prop: "FIGHT_PROP_WATER_ADD_HURT",
        name: "Hydro DMG Bonus",
        short: "hydro_dmg_bonus",
    },
    FightProp {
        prop: "FIGHT_PROP_ELEC_ADD_HURT",
        name: "Electro DMG Bonus",
        short: "electro_dmg_bonus",
    },
    FightProp {
        prop: "FIGHT_PROP_ICE_ADD_HURT",
        name: "Cryo DMG Bonus",
        short: "cryo_dmg_bonus",
    },
    FightProp {
        prop: "FIGHT_PROP_WIND_ADD_HURT",
        name: "Anemo DMG Bonus",
        short: "anemo_dmg_bonus",
    },
    FightProp {
        prop: "FIGHT_PROP_ROCK_ADD_HURT",
        name: "Geo DMG Bonus",
        short: "geo_dmg_bonus",
    },
    FightProp {
        prop: "FIGHT_PROP_GRASS_ADD_HURT",
        name: "Dendro DMG Bonus",
        short: "dendro_dmg_bonus",
    },
];

/// Base-stat props excluded when deriving the ascension bonus stat
pub const BASE_STAT_PROPS: &[&str] = &[
    "FIGHT_PROP_BASE_HP",
    "FIGHT_PROP_BASE_ATTACK",
    "FIGHT_PROP_BASE_DEFENSE",
];

/// Get a fight prop entry by internal key
pub fn fight_prop(prop: &str) -> Option<&'static FightProp> {
    FIGHT_PROPS.iter().find(|p| p.prop == prop)
}

/// Display name for a fight prop, falling back to the internal key
pub fn fight_prop_name(prop: &str) -> &str {
    fight_prop(prop).map(|p| p.name).unwrap_or(prop)
}

/// Whether a fight prop's values render as percentages
pub fn is_percent_prop(prop: &str) -> bool {
    ["PERCENT", "CRITICAL", "CHARGE", "ADD_HURT", "HEAL"]
        .iter()
        .any(|marker| prop.contains(marker))
}

// ============================================================================
// Weapon types
// ============================================================================

/// Internal weapon type → display name
pub const WEAPON_TYPES: &[(&str, &str)] = &[
    ("WEAPON_SWORD_ONE_HAND", "Sword"),
    ("WEAPON_CLAYMORE", "Claymore"),
    ("WEAPON_POLE", "Polearm"),
    ("WEAPON_CATALYST", "Catalyst"),
    ("WEAPON_BOW", "Bow"),
];

/// Display name for a weapon type code
pub fn weapon_type_name(code: &str) -> Option<&'static str> {
    WEAPON_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

// ============================================================================
// Elements
// ============================================================================

/// Skill cost element type → element name
pub const ELEMENTS: &[(&str, &str)] = &[
    ("Fire", "Pyro"),
    ("Water", "Hydro"),
    ("Electric", "Electro"),
    ("Ice", "Cryo"),
    ("Wind", "Anemo"),
    ("Rock", "Geo"),
    ("Grass", "Dendro"),
];

/// Element name for a skill cost type, falling back to the raw code
pub fn element_name(cost_type: &str) -> &str {
    ELEMENTS
        .iter()
        .find(|(c, _)| *c == cost_type)
        .map(|(_, name)| *name)
        .unwrap_or(cost_type)
}

// ============================================================================
// Quality / rarity
// ============================================================================

/// Quality grade → rarity stars
pub const QUALITY_RARITY: &[(&str, u8)] = &[
    ("QUALITY_ORANGE", 5),
    ("QUALITY_ORANGE_SP", 5),
    ("QUALITY_PURPLE", 4),
    ("QUALITY_BLUE", 3),
    ("QUALITY_GREEN", 2),
    ("QUALITY_GRAY", 1),
];

/// Rarity stars for a quality grade
pub fn rarity_from_quality(quality: &str) -> Option<u8> {
    QUALITY_RARITY
        .iter()
        .find(|(q, _)| *q == quality)
        .map(|(_, stars)| *stars)
}

// ============================================================================
// Artifact equip slots
// ============================================================================

/// Equip slot information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipSlot {
    pub code: &'static str,
    pub name: &'static str,
}

/// Artifact slots in canonical display order
pub const EQUIP_SLOTS: &[EquipSlot] = &[
    EquipSlot {
        code: "EQUIP_BRACER",
        name: "Flower of Life",
    },
    EquipSlot {
        code: "EQUIP_NECKLACE",
        name: "Plume of Death",
    },
    EquipSlot {
        code: "EQUIP_SHOES",
        name: "Sands of Eon",
    },
    EquipSlot {
        code: "EQUIP_RING",
        name: "Goblet of Eonothem",
    },
    EquipSlot {
        code: "EQUIP_DRESS",
        name: "Circlet of Logos",
    },
];

/// Display name for an equip slot code
pub fn equip_slot_name(code: &str) -> Option<&'static str> {
    EQUIP_SLOTS
        .iter()
        .find(|s| s.code == code)
        .map(|s| s.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fight_prop_lookup() {
        assert_eq!(fight_prop_name("FIGHT_PROP_CRITICAL"), "CRIT Rate");
        assert_eq!(fight_prop_name("FIGHT_PROP_MYSTERY"), "FIGHT_PROP_MYSTERY");
        assert_eq!(
            fight_prop("FIGHT_PROP_ELEMENT_MASTERY").unwrap().short,
            "elemental_mastery"
        );
    }

    #[test]
    fn test_percent_props() {
        assert!(is_percent_prop("FIGHT_PROP_HP_PERCENT"));
        assert!(is_percent_prop("FIGHT_PROP_CRITICAL_HURT"));
        assert!(is_percent_prop("FIGHT_PROP_CHARGE_EFFICIENCY"));
        assert!(is_percent_prop("FIGHT_PROP_FIRE_ADD_HURT"));
        assert!(!is_percent_prop("FIGHT_PROP_BASE_ATTACK"));
        assert!(!is_percent_prop("FIGHT_PROP_ELEMENT_MASTERY"));
    }

    #[test]
    fn test_quality_and_weapon_types() {
        assert_eq!(rarity_from_quality("QUALITY_ORANGE"), Some(5));
        assert_eq!(rarity_from_quality("QUALITY_ORANGE_SP"), Some(5));
        assert_eq!(rarity_from_quality("QUALITY_WOOD"), None);
        assert_eq!(weapon_type_name("WEAPON_POLE"), Some("Polearm"));
        assert_eq!(element_name("Electric"), "Electro");
        assert_eq!(element_name("Void"), "Void");
    }

    #[test]
    fn test_equip_slot_order() {
        let codes: Vec<&str> = EQUIP_SLOTS.iter().map(|s| s.code).collect();
        assert_eq!(codes[0], "EQUIP_BRACER");
        assert_eq!(codes[4], "EQUIP_DRESS");
        assert_eq!(equip_slot_name("EQUIP_RING"), Some("Goblet of Eonothem"));
    }
}
