//! Report builders tying the analytics functions together.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::analytics::aggregate::summarize;
use crate::analytics::alerts::{AlertPolicy, derive_alerts};
use crate::analytics::breakdown::breakdown;
use crate::analytics::status::PmStatus;
use crate::analytics::types::{
    CitySummary, ContractorReport, RouteEntry, SummaryRow, WardReport, WardStatusEntry,
};
use crate::error::AnalyticsError;
use crate::model::{RouteRecord, WardRecord};

fn ward_entry(ward: &WardRecord) -> WardStatusEntry {
    WardStatusEntry {
        ward_id: ward.id.clone(),
        name: ward.name.clone(),
        pm_level: ward.pm_level,
        status: PmStatus::classify(ward.pm_level),
        humidity: ward.humidity,
        effectiveness: ward.effectiveness,
        routes_count: ward.routes_count,
        routes_needing_action: ward.routes_needing_action,
        contractor: ward.contractor.clone(),
        last_updated: ward.last_updated.clone(),
    }
}

/// Builds the city-wide summary over a ward snapshot.
///
/// # Errors
///
/// Fails with [`AnalyticsError::EmptyInput`] when the snapshot holds no
/// wards.
pub fn city_summary(wards: &[WardRecord]) -> Result<CitySummary, AnalyticsError> {
    let fleet = summarize(wards)?;

    let mut entries: Vec<WardStatusEntry> = wards.iter().map(ward_entry).collect();
    entries.sort_by(|a, b| {
        b.pm_level
            .partial_cmp(&a.pm_level)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let priority_wards = entries
        .iter()
        .filter(|e| e.status.is_priority())
        .cloned()
        .collect();

    debug!(wards = entries.len(), avg_pm = fleet.avg_pm, "City summary built");

    Ok(CitySummary {
        generated_at: Utc::now(),
        fleet,
        wards: entries,
        priority_wards,
    })
}

impl CitySummary {
    /// Flattens the summary into a CSV-appendable row.
    pub fn to_row(&self) -> SummaryRow {
        SummaryRow {
            timestamp: self.generated_at,
            ward_count: self.wards.len(),
            total_routes: self.fleet.total_routes,
            routes_needing_action: self.fleet.routes_needing_action,
            avg_pm: self.fleet.avg_pm,
            avg_effectiveness: self.fleet.avg_effectiveness,
            avg_humidity: self.fleet.avg_humidity,
            status: self.fleet.status,
        }
    }
}

/// Builds the detail report for one ward from its route snapshot.
///
/// # Errors
///
/// Fails with [`AnalyticsError::EmptyInput`] when the ward has no routes.
pub fn ward_report(
    ward: &WardRecord,
    routes: &[RouteRecord],
) -> Result<WardReport, AnalyticsError> {
    let routes_summary = summarize(routes)?;

    let entries = routes
        .iter()
        .map(|r| RouteEntry {
            route_id: r.id.clone(),
            name: r.name.clone(),
            pm_level: r.current_pm(),
            status: PmStatus::classify(r.current_pm()),
            needs_action: r.needs_action,
            effectiveness: r.derived_effectiveness(),
            last_treated: r.last_treated,
        })
        .collect();

    Ok(WardReport {
        generated_at: Utc::now(),
        ward: ward_entry(ward),
        routes_summary,
        routes: entries,
    })
}

/// Builds the contractor breakdown plus derived performance alerts.
///
/// The breakdown runs over the ward snapshot (contractors are judged on
/// the wards assigned to them) while alerts come from the route-level
/// treatment history.
pub fn contractor_report(
    wards: &[WardRecord],
    routes: &[RouteRecord],
    policy: &AlertPolicy,
    now: DateTime<Utc>,
) -> Result<ContractorReport, AnalyticsError> {
    let contractors = breakdown(wards, |w| w.contractor.as_str())?;
    let alerts = derive_alerts(routes, policy, now);

    debug!(
        contractors = contractors.len(),
        alerts = alerts.len(),
        "Contractor report built"
    );

    Ok(ContractorReport {
        generated_at: now,
        contractors,
        alerts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builtin_wards;
    use crate::routes::synthesize_all;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_city_summary_over_builtin_dataset() {
        let wards = builtin_wards();
        let summary = city_summary(&wards).unwrap();

        assert_eq!(summary.fleet.total_routes, 106);
        assert_eq!(summary.fleet.routes_needing_action, 29);
        assert_eq!(summary.fleet.avg_pm, 176);
        assert_eq!(summary.fleet.avg_effectiveness, 49);
        assert_eq!(summary.fleet.avg_humidity, 51);
        assert_eq!(summary.fleet.status, PmStatus::Poor);

        // worst first
        assert_eq!(summary.wards[0].ward_id, "shahdara");
        assert_eq!(summary.wards[0].status, PmStatus::Critical);

        // 7 wards read over 150
        assert_eq!(summary.priority_wards.len(), 7);
        assert_eq!(summary.priority_wards[0].ward_id, "shahdara");
        assert_eq!(summary.priority_wards[1].ward_id, "north-east");
    }

    #[test]
    fn test_city_summary_empty_snapshot() {
        let err = city_summary(&[]).unwrap_err();
        assert!(matches!(err, AnalyticsError::EmptyInput));
    }

    #[test]
    fn test_summary_row_mirrors_fleet() {
        let wards = builtin_wards();
        let summary = city_summary(&wards).unwrap();
        let row = summary.to_row();

        assert_eq!(row.ward_count, 11);
        assert_eq!(row.avg_pm, summary.fleet.avg_pm);
        assert_eq!(row.status, summary.fleet.status);
    }

    #[test]
    fn test_contractor_breakdown_over_builtin_dataset() {
        let wards = builtin_wards();
        let routes = synthesize_all(&wards, &mut StdRng::seed_from_u64(0), Utc::now());
        let report = contractor_report(&wards, &routes, &AlertPolicy::default(), Utc::now()).unwrap();

        let keys: Vec<&str> = report.contractors.iter().map(|g| g.key.as_str()).collect();
        // first-seen order from the ward snapshot
        assert_eq!(keys, ["ABC Contractors", "Green Clean Ltd", "XYZ Services"]);

        // ABC: wards at 178, 134, 98, 289 -> mean 174.75 -> 175
        assert_eq!(report.contractors[0].summary.avg_pm, 175);
        assert_eq!(report.contractors[0].summary.status, PmStatus::Poor);
        // Green Clean: 156, 112, 142 -> mean 136.67 -> 137
        assert_eq!(report.contractors[1].summary.avg_pm, 137);
        assert_eq!(report.contractors[1].summary.status, PmStatus::Moderate);
        // XYZ: 245, 198, 167, 212 -> mean 205.5 -> 206
        assert_eq!(report.contractors[2].summary.avg_pm, 206);
        assert_eq!(report.contractors[2].summary.status, PmStatus::Poor);
    }

    #[test]
    fn test_ward_report_over_synthesized_routes() {
        let wards = builtin_wards();
        let ward = wards.iter().find(|w| w.id == "north").unwrap();
        let routes = crate::routes::synthesize_routes(ward, &mut StdRng::seed_from_u64(1), Utc::now());

        let report = ward_report(ward, &routes).unwrap();
        assert_eq!(report.ward.ward_id, "north");
        assert_eq!(report.routes.len(), 12);
        assert_eq!(report.routes_summary.total_routes, 12);
        assert_eq!(report.routes_summary.routes_needing_action, 4);

        for pair in report.routes.windows(2) {
            assert!(pair[0].pm_level >= pair[1].pm_level);
        }
    }
}
