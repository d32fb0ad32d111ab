//! Fleet-wide aggregation over a set of units.

use serde::Serialize;

use crate::analytics::status::PmStatus;
use crate::analytics::utility::{mean, round_half_up};
use crate::error::AnalyticsError;
use crate::model::Unit;

/// Aggregate figures over a non-empty set of units.
#[derive(Debug, Clone, Serialize)]
pub struct FleetSummary {
    pub total_routes: u32,
    pub routes_needing_action: u32,
    /// Mean PM10 reading, rounded half-up.
    pub avg_pm: u32,
    /// Mean effectiveness over treated units only, rounded half-up.
    /// 0 when no unit has been treated.
    pub avg_effectiveness: u32,
    pub avg_humidity: u32,
    pub status: PmStatus,
}

/// Aggregates a set of units into a single [`FleetSummary`].
///
/// Untreated units are excluded from the effectiveness average entirely
/// rather than counted as 0%.
///
/// # Errors
///
/// Fails with [`AnalyticsError::EmptyInput`] for zero units; an average
/// over nothing is rejected instead of propagating NaN.
pub fn summarize<U: Unit>(units: &[U]) -> Result<FleetSummary, AnalyticsError> {
    if units.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let mut total_routes = 0u32;
    let mut routes_needing_action = 0u32;

    let mut pm_series = Vec::with_capacity(units.len());
    let mut humidity_series = Vec::with_capacity(units.len());
    let mut effectiveness_series = Vec::new();

    for unit in units {
        total_routes += unit.route_count();
        routes_needing_action += unit.routes_needing_action();

        pm_series.push(unit.pm_level());
        humidity_series.push(unit.humidity());

        if let Some(effectiveness) = unit.effectiveness() {
            effectiveness_series.push(effectiveness);
        }
    }

    let avg_pm = round_half_up(mean(&pm_series));

    Ok(FleetSummary {
        total_routes,
        routes_needing_action,
        avg_pm,
        avg_effectiveness: round_half_up(mean(&effectiveness_series)),
        avg_humidity: round_half_up(mean(&humidity_series)),
        status: PmStatus::classify(avg_pm as f64),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WardRecord;

    fn ward(pm: f64, needing: u32, effectiveness: f64) -> WardRecord {
        WardRecord {
            id: format!("w{pm}"),
            name: "Test Ward".to_string(),
            pm_level: pm,
            humidity: 50.0,
            routes_count: 1,
            routes_needing_action: needing,
            last_updated: "1 min ago".to_string(),
            contractor: "ABC Contractors".to_string(),
            effectiveness,
        }
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let units: Vec<WardRecord> = vec![];
        assert!(matches!(
            summarize(&units),
            Err(AnalyticsError::EmptyInput)
        ));
    }

    #[test]
    fn test_two_unit_scenario() {
        let units = vec![ward(289.0, 1, 22.0), ward(98.0, 0, 78.0)];
        let summary = summarize(&units).unwrap();

        // 193.5 rounds half-up to 194
        assert_eq!(summary.avg_pm, 194);
        assert_eq!(summary.routes_needing_action, 1);
        assert_eq!(summary.total_routes, 2);
        assert_eq!(summary.avg_effectiveness, 50);
        assert_eq!(summary.status, PmStatus::Poor);
    }

    #[test]
    fn test_identical_readings_average_to_themselves() {
        let units = vec![ward(134.0, 0, 60.0), ward(134.0, 0, 60.0), ward(134.0, 0, 60.0)];
        let summary = summarize(&units).unwrap();

        assert_eq!(summary.avg_pm, 134);
        assert_eq!(summary.status, PmStatus::Moderate);
    }

    #[test]
    fn test_singleton_behaves_like_larger_sets() {
        let units = vec![ward(134.0, 2, 41.0)];
        let summary = summarize(&units).unwrap();

        assert_eq!(summary.avg_pm, 134);
        assert_eq!(summary.avg_effectiveness, 41);
        assert_eq!(summary.status, PmStatus::Moderate);
    }

    #[test]
    fn test_untreated_units_excluded_from_effectiveness() {
        use crate::model::RouteRecord;
        use chrono::Utc;

        let route = |pm_before: f64, pm_after: Option<f64>| RouteRecord {
            id: "r".to_string(),
            name: "Main Street".to_string(),
            ward_id: "north".to_string(),
            contractor: "ABC Contractors".to_string(),
            pm_before,
            pm_after,
            humidity: 50.0,
            needs_action: pm_after.is_none(),
            impact_score: None,
            recorded_at: Utc::now(),
            last_treated: None,
        };

        // one treated route at 50% reduction, two untreated
        let units = vec![
            route(200.0, Some(100.0)),
            route(180.0, None),
            route(220.0, None),
        ];
        let summary = summarize(&units).unwrap();

        // untreated routes do not drag the average toward zero
        assert_eq!(summary.avg_effectiveness, 50);
        assert_eq!(summary.total_routes, 3);
        assert_eq!(summary.routes_needing_action, 2);
    }

    #[test]
    fn test_no_treated_units_yields_zero_effectiveness() {
        use crate::model::RouteRecord;
        use chrono::Utc;

        let units = vec![RouteRecord {
            id: "r1".to_string(),
            name: "Main Street".to_string(),
            ward_id: "north".to_string(),
            contractor: "ABC Contractors".to_string(),
            pm_before: 180.0,
            pm_after: None,
            humidity: 50.0,
            needs_action: true,
            impact_score: None,
            recorded_at: Utc::now(),
            last_treated: None,
        }];

        let summary = summarize(&units).unwrap();
        assert_eq!(summary.avg_effectiveness, 0);
    }
}
