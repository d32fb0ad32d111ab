//! Report types produced by the analytics layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analytics::aggregate::FleetSummary;
use crate::analytics::alerts::Alert;
use crate::analytics::breakdown::GroupSummary;
use crate::analytics::status::PmStatus;

/// One ward's line in the city summary.
#[derive(Debug, Clone, Serialize)]
pub struct WardStatusEntry {
    pub ward_id: String,
    pub name: String,
    pub pm_level: f64,
    pub status: PmStatus,
    pub humidity: f64,
    pub effectiveness: f64,
    pub routes_count: u32,
    pub routes_needing_action: u32,
    pub contractor: String,
    pub last_updated: String,
}

/// City-wide dashboard report.
#[derive(Debug, Serialize)]
pub struct CitySummary {
    pub generated_at: DateTime<Utc>,
    pub fleet: FleetSummary,
    /// All wards, worst reading first.
    pub wards: Vec<WardStatusEntry>,
    /// Wards classified poor or critical, worst first.
    pub priority_wards: Vec<WardStatusEntry>,
}

/// One route's line in a ward report.
#[derive(Debug, Serialize)]
pub struct RouteEntry {
    pub route_id: String,
    pub name: String,
    pub pm_level: f64,
    pub status: PmStatus,
    pub needs_action: bool,
    /// Derived percent PM reduction; absent until the route is treated.
    pub effectiveness: Option<f64>,
    pub last_treated: Option<DateTime<Utc>>,
}

/// Detail report for a single ward.
#[derive(Debug, Serialize)]
pub struct WardReport {
    pub generated_at: DateTime<Utc>,
    pub ward: WardStatusEntry,
    /// Aggregate over the ward's routes.
    pub routes_summary: FleetSummary,
    /// The ward's routes, worst reading first.
    pub routes: Vec<RouteEntry>,
}

/// Per-contractor breakdown with derived performance alerts.
#[derive(Debug, Serialize)]
pub struct ContractorReport {
    pub generated_at: DateTime<Utc>,
    pub contractors: Vec<GroupSummary>,
    pub alerts: Vec<Alert>,
}

/// Flat summary row appended to the report CSV.
#[derive(Debug, Serialize)]
pub struct SummaryRow {
    pub timestamp: DateTime<Utc>,
    pub ward_count: usize,
    pub total_routes: u32,
    pub routes_needing_action: u32,
    pub avg_pm: u32,
    pub avg_effectiveness: u32,
    pub avg_humidity: u32,
    pub status: PmStatus,
}
