//! Promotion (ascension) chains.
//!
//! Promotion tables come in two source schemas: avatar rows identify their
//! chain via `avatarPromoteId`, weapon rows via `weaponPromoteId`. Each row
//! belongs to exactly one schema, so the chain id is resolved once when the
//! table is parsed and tagged as a [`ChainId`] variant; queries never look
//! at raw field names again.

use crate::record::{Record, Table};
use crate::reference::BASE_STAT_PROPS;
use serde::Serialize;

/// Chain identifier, tagged by the schema the row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChainId {
    Avatar(i64),
    Weapon(i64),
}

impl ChainId {
    fn of(row: &Record) -> Option<Self> {
        if let Some(id) = row.int("avatarPromoteId") {
            return Some(Self::Avatar(id));
        }
        if let Some(id) = row.int("weaponPromoteId") {
            return Some(Self::Weapon(id));
        }
        None
    }

    /// Numeric chain id regardless of schema.
    pub fn id(&self) -> i64 {
        match self {
            Self::Avatar(id) | Self::Weapon(id) => *id,
        }
    }
}

/// One stat bonus granted by a promotion phase.
#[derive(Debug, Clone, Serialize)]
pub struct StatBonus {
    pub prop: String,
    pub value: f64,
}

/// One material cost of a promotion phase.
#[derive(Debug, Clone, Serialize)]
pub struct CostItem {
    pub id: i64,
    pub count: i64,
}

/// One promotion phase of a chain.
#[derive(Debug, Clone, Serialize)]
pub struct PromotionPhase {
    pub chain: ChainId,
    /// Phase number, starting at 0.
    pub phase: i64,
    /// Level ceiling unlocked by this phase.
    pub max_level: i64,
    pub add_props: Vec<StatBonus>,
    pub cost_items: Vec<CostItem>,
    pub mora_cost: i64,
}

impl PromotionPhase {
    fn parse(row: &Record) -> Option<Self> {
        let chain = ChainId::of(row)?;
        // The mora field name follows the schema the row came from.
        let mora_cost = match chain {
            ChainId::Avatar(_) => row.int_or("scoinCost", 0),
            ChainId::Weapon(_) => row.int_or("coinCost", 0),
        };
        let add_props = row
            .records("addProps")
            .iter()
            .map(|p| StatBonus {
                prop: p.str_or("propType", "").to_string(),
                value: p.float_or("value", 0.0),
            })
            .collect();
        let cost_items = row
            .records("costItems")
            .iter()
            .filter(|item| item.has("id"))
            .map(|item| CostItem {
                id: item.int_or("id", 0),
                count: item.int_or("count", 0),
            })
            .collect();
        Some(Self {
            chain,
            phase: row.int_or("promoteLevel", 0),
            max_level: row.int_or("unlockMaxLevel", 20),
            add_props,
            cost_items,
            mora_cost,
        })
    }

    /// Bonus value for a stat, `0.0` when the phase does not grant it.
    /// Absence is normal: most phases touch only one stat.
    pub fn bonus_at(&self, prop: &str) -> f64 {
        self.add_props
            .iter()
            .find(|b| b.prop == prop)
            .map(|b| b.value)
            .unwrap_or(0.0)
    }
}

/// A promotion table with chain ids resolved.
#[derive(Debug, Clone, Default)]
pub struct PromoteTable {
    phases: Vec<PromotionPhase>,
}

impl PromoteTable {
    /// Resolve every row's chain id. Rows carrying neither schema's id field
    /// are malformed and silently skipped.
    pub fn parse(table: &Table) -> Self {
        let phases = table.rows().iter().filter_map(PromotionPhase::parse).collect();
        Self { phases }
    }

    /// All phases of a chain, ordered ascending by phase number. Both schema
    /// variants match on their numeric id.
    pub fn phases_for(&self, chain_id: i64) -> Vec<&PromotionPhase> {
        let mut phases: Vec<&PromotionPhase> = self
            .phases
            .iter()
            .filter(|p| p.chain.id() == chain_id)
            .collect();
        phases.sort_by_key(|p| p.phase);
        phases
    }
}

/// The ascension bonus stat of a chain: the first non-zero, non-base-stat
/// bonus on the third phase (index 2).
///
/// The third phase is where the special stat is first introduced and its
/// per-phase value stays constant afterwards. Chains with fewer than three
/// phases have no answer.
pub fn dominant_bonus_stat<'a, P>(phases: &'a [P]) -> Option<&'a str>
where
    P: std::borrow::Borrow<PromotionPhase>,
{
    let third = phases.get(2)?.borrow();
    third
        .add_props
        .iter()
        .find(|b| b.value > 0.0 && !BASE_STAT_PROPS.contains(&b.prop.as_str()))
        .map(|b| b.prop.as_str())
}
