//! Priority ordering of units needing intervention.

use std::cmp::Ordering;

use crate::model::Unit;

/// Filters to units needing action and orders them by descending impact
/// score (the PM reading when no explicit score is stored).
///
/// The sort is stable, so equal scores keep their input order and the
/// ranking is deterministic across runs. Ranking an already ranked
/// sequence returns the same order.
pub fn rank_priority<U: Unit>(units: &[U]) -> Vec<&U> {
    let mut ranked: Vec<&U> = units
        .iter()
        .filter(|u| u.routes_needing_action() > 0)
        .collect();

    ranked.sort_by(|a, b| {
        b.impact_score()
            .partial_cmp(&a.impact_score())
            .unwrap_or(Ordering::Equal)
    });

    ranked
}
