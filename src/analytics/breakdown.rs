//! Per-group aggregation keyed by ward, contractor, or any caller-chosen key.

use std::collections::HashMap;

use serde::Serialize;

use crate::analytics::aggregate::{FleetSummary, summarize};
use crate::error::AnalyticsError;
use crate::model::Unit;

/// Aggregate figures for one group of units.
#[derive(Debug, Serialize)]
pub struct GroupSummary {
    pub key: String,
    pub unit_count: usize,
    #[serde(flatten)]
    pub summary: FleetSummary,
}

/// Partitions units by `key` and aggregates each partition independently.
///
/// Groups are returned in the order their keys first appear in the input,
/// not sorted; callers wanting a different order sort the result. Every
/// unit lands in exactly one group, so the groups partition the input.
pub fn breakdown<'a, U, K>(units: &'a [U], key: K) -> Result<Vec<GroupSummary>, AnalyticsError>
where
    U: Unit,
    K: Fn(&'a U) -> &'a str,
{
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&'a U>> = HashMap::new();

    for unit in units {
        let k = key(unit);
        if !groups.contains_key(k) {
            order.push(k);
        }
        groups.entry(k).or_default().push(unit);
    }

    order
        .into_iter()
        .map(|k| {
            let members = &groups[k];
            let summary = summarize(members)?;
            Ok(GroupSummary {
                key: k.to_string(),
                unit_count: members.len(),
                summary,
            })
        })
        .collect()
}
