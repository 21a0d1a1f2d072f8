//! Growth curve evaluation.
//!
//! Curve tables hold one row per level, each with a `curveInfos` list of
//! `(type, value)` pairs. Lookups are exact: the source data supplies a
//! value at every level that matters, so there is no interpolation.

use crate::record::Table;

/// Multiplier for a named curve at a level. An unknown `(level, curve)`
/// combination is the identity multiplier `1.0`.
pub fn multiplier_at(curves: &Table, curve: &str, level: i64) -> f64 {
    for row in curves.rows() {
        if row.int("level") != Some(level) {
            continue;
        }
        for info in row.records("curveInfos") {
            if info.str_or("type", "") == curve {
                return info.float_or("value", 1.0);
            }
        }
    }
    1.0
}

/// Project a base stat to a level: multiply by the curve value first, then
/// add the flat ascension term. Ascension bonuses are additive, never
/// multiplicative.
pub fn stat_at_level(
    base: f64,
    curves: &Table,
    curve: &str,
    level: i64,
    ascension_bonus: f64,
) -> f64 {
    base * multiplier_at(curves, curve, level) + ascension_bonus
}
