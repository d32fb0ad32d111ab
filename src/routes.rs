//! Per-ward route synthesis.
//!
//! The dashboard has no per-route telemetry feed, so route readings are
//! synthesized around each ward's PM level. The generator takes an
//! injected RNG; callers seed it explicitly so output is reproducible.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::model::{RouteRecord, WardRecord};

/// PM10 readings never drop below this floor, regardless of variation.
const PM_FLOOR: f64 = 50.0;

static ROUTE_NAMES: &[&str] = &[
    "Main Street",
    "Highway Connector",
    "Industrial Road",
    "Market Lane",
    "Residential Block A",
    "Commercial Zone",
    "School Road",
    "Hospital Road",
    "Ring Road Section",
    "Metro Station Road",
    "Bus Depot Road",
    "Park Avenue",
    "Temple Street",
    "Bridge Approach",
    "Flyover Section",
    "Construction Zone",
];

/// Synthesizes one route record per monitored route in the ward.
///
/// Route PM varies within ±30 µg/m³ of the ward reading, clamped to
/// [`PM_FLOOR`]. The ward's first `routes_needing_action` routes are
/// untreated and flagged for action; the rest carry a before/after pair
/// from a treatment 1–4 hours ago. Results are sorted by descending PM.
pub fn synthesize_routes(
    ward: &WardRecord,
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Vec<RouteRecord> {
    let mut routes = Vec::with_capacity(ward.routes_count as usize);

    for i in 0..ward.routes_count {
        let variation = rng.random_range(-30..=30) as f64;
        let pm = (ward.pm_level + variation).max(PM_FLOOR);
        let needs_action = i < ward.routes_needing_action;
        let recorded_at = now - Duration::minutes(rng.random_range(1..=6));

        let (pm_before, pm_after, last_treated) = if needs_action {
            (pm, None, None)
        } else {
            let reduction = rng.random_range(10..=120) as f64;
            let treated_at = now - Duration::hours(rng.random_range(1..=4));
            (pm + reduction, Some(pm), Some(treated_at))
        };

        routes.push(RouteRecord {
            id: format!("{}-r{}", ward.id, i + 1),
            name: format!("{} - {}", ROUTE_NAMES[i as usize % ROUTE_NAMES.len()], ward.name),
            ward_id: ward.id.clone(),
            contractor: ward.contractor.clone(),
            pm_before,
            pm_after,
            humidity: ward.humidity,
            needs_action,
            impact_score: None,
            recorded_at,
            last_treated,
        });
    }

    routes.sort_by(|a, b| {
        b.current_pm()
            .partial_cmp(&a.current_pm())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    routes
}

/// Synthesizes routes for every ward in the snapshot.
pub fn synthesize_all(
    wards: &[WardRecord],
    rng: &mut impl Rng,
    now: DateTime<Utc>,
) -> Vec<RouteRecord> {
    wards
        .iter()
        .flat_map(|w| synthesize_routes(w, rng, now))
        .collect()
}
