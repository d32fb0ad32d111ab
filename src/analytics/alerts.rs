//! Contractor performance alerts.
//!
//! Alert generation is a policy, not a fixed algorithm: thresholds live
//! in [`AlertPolicy`] and are passed in by the caller.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::analytics::utility::mean;
use crate::model::RouteRecord;

/// Kind of contractor performance flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    /// Recent treatments barely reduced PM.
    Ineffective,
    /// An untreated route has waited past the staleness window.
    Skipped,
    /// PM rose after treatment.
    Worsening,
}

/// A derived performance flag against a contractor.
#[derive(Debug, Serialize)]
pub struct Alert {
    pub contractor: String,
    pub kind: AlertKind,
    pub unit_id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Thresholds controlling alert derivation.
#[derive(Debug, Clone)]
pub struct AlertPolicy {
    /// Number of most recent treatments considered for the
    /// ineffectiveness check.
    pub window: usize,
    /// Mean effectiveness (percent) under which the window is flagged.
    pub effectiveness_floor: f64,
    /// Hours an untreated route needing action may wait before it counts
    /// as skipped.
    pub staleness_hours: i64,
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self {
            window: 3,
            effectiveness_floor: 15.0,
            staleness_hours: 24,
        }
    }
}

/// Derives performance alerts from a route snapshot.
///
/// Per route: a `Skipped` alert when an untreated route still needing
/// action has waited longer than the staleness window, and a `Worsening`
/// alert when a treated route's reading rose. Per contractor: an
/// `Ineffective` alert when the mean effectiveness of the last
/// `policy.window` treatments falls under the floor (contractors with
/// fewer treatments than the window are not judged).
pub fn derive_alerts(
    routes: &[RouteRecord],
    policy: &AlertPolicy,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for route in routes {
        if route.pm_after.is_none()
            && route.needs_action
            && now - route.recorded_at > Duration::hours(policy.staleness_hours)
        {
            alerts.push(Alert {
                contractor: route.contractor.clone(),
                kind: AlertKind::Skipped,
                unit_id: route.id.clone(),
                message: format!(
                    "{} has needed sprinkling for over {} hours",
                    route.name, policy.staleness_hours
                ),
                timestamp: now,
            });
        }

        if let Some(effectiveness) = route.derived_effectiveness() {
            if effectiveness < 0.0 {
                alerts.push(Alert {
                    contractor: route.contractor.clone(),
                    kind: AlertKind::Worsening,
                    unit_id: route.id.clone(),
                    message: format!(
                        "PM10 on {} rose from {:.0} to {:.0} µg/m³ after treatment",
                        route.name,
                        route.pm_before,
                        route.current_pm()
                    ),
                    timestamp: now,
                });
            }
        }
    }

    // per-contractor ineffectiveness over the most recent treatments
    let mut order: Vec<&str> = Vec::new();
    let mut treated: HashMap<&str, Vec<&RouteRecord>> = HashMap::new();

    for route in routes {
        if route.last_treated.is_none() || route.derived_effectiveness().is_none() {
            continue;
        }
        let contractor = route.contractor.as_str();
        if !treated.contains_key(contractor) {
            order.push(contractor);
        }
        treated.entry(contractor).or_default().push(route);
    }

    for contractor in order {
        let mut recent = treated.remove(contractor).unwrap_or_default();
        recent.sort_by_key(|r| std::cmp::Reverse(r.last_treated));
        recent.truncate(policy.window);

        if recent.len() < policy.window {
            continue;
        }

        let series: Vec<f64> = recent
            .iter()
            .filter_map(|r| r.derived_effectiveness())
            .collect();
        let avg = mean(&series);

        if avg < policy.effectiveness_floor {
            alerts.push(Alert {
                contractor: contractor.to_string(),
                kind: AlertKind::Ineffective,
                unit_id: recent[0].id.clone(),
                message: format!(
                    "last {} treatments averaged {:.0}% PM reduction (floor {:.0}%)",
                    policy.window, avg, policy.effectiveness_floor
                ),
                timestamp: now,
            });
        }
    }

    alerts
}
