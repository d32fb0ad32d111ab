//! Core record types for monitored wards and routes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A monitored unit of the road network.
///
/// Wards and individual routes play the same structural role in the
/// analytics functions, so both expose their readings through this trait.
pub trait Unit {
    /// Current PM10 reading in µg/m³.
    fn pm_level(&self) -> f64;

    /// Relative humidity percentage.
    fn humidity(&self) -> f64;

    /// Number of routes covered by this unit, 1 when the unit is itself
    /// a route.
    fn route_count(&self) -> u32;

    /// Number of covered routes currently requiring intervention.
    fn routes_needing_action(&self) -> u32;

    /// Percent PM reduction attributed to treatment. `None` means the
    /// unit has not been treated; it must never be read as 0%.
    fn effectiveness(&self) -> Option<f64>;

    /// Severity score used for priority ranking. Units without a stored
    /// score rank by their PM reading.
    fn impact_score(&self) -> f64 {
        self.pm_level()
    }
}

impl<U: Unit + ?Sized> Unit for &U {
    fn pm_level(&self) -> f64 {
        (**self).pm_level()
    }

    fn humidity(&self) -> f64 {
        (**self).humidity()
    }

    fn route_count(&self) -> u32 {
        (**self).route_count()
    }

    fn routes_needing_action(&self) -> u32 {
        (**self).routes_needing_action()
    }

    fn effectiveness(&self) -> Option<f64> {
        (**self).effectiveness()
    }

    fn impact_score(&self) -> f64 {
        (**self).impact_score()
    }
}

/// A municipal ward: an administrative area aggregating multiple routes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WardRecord {
    pub id: String,
    pub name: String,
    pub pm_level: f64,
    pub humidity: f64,
    pub routes_count: u32,
    pub routes_needing_action: u32,
    pub last_updated: String,
    pub contractor: String,
    pub effectiveness: f64,
}

impl Unit for WardRecord {
    fn pm_level(&self) -> f64 {
        self.pm_level
    }

    fn humidity(&self) -> f64 {
        self.humidity
    }

    fn route_count(&self) -> u32 {
        self.routes_count
    }

    fn routes_needing_action(&self) -> u32 {
        self.routes_needing_action
    }

    fn effectiveness(&self) -> Option<f64> {
        Some(self.effectiveness)
    }
}

/// A single monitored road segment within a ward.
///
/// `pm_before` is always present; `pm_after` is recorded only once the
/// route has been treated.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    pub id: String,
    pub name: String,
    pub ward_id: String,
    pub contractor: String,
    pub pm_before: f64,
    pub pm_after: Option<f64>,
    pub humidity: f64,
    pub needs_action: bool,
    pub impact_score: Option<f64>,
    pub recorded_at: DateTime<Utc>,
    pub last_treated: Option<DateTime<Utc>>,
}

impl RouteRecord {
    /// Current PM10 reading: the post-treatment value when one exists.
    pub fn current_pm(&self) -> f64 {
        self.pm_after.unwrap_or(self.pm_before)
    }

    /// Percent PM reduction achieved by treatment, derived from the
    /// before/after readings. `None` until the route has been treated.
    /// Negative when the reading worsened after treatment.
    pub fn derived_effectiveness(&self) -> Option<f64> {
        let after = self.pm_after?;
        if self.pm_before == 0.0 {
            return None;
        }
        Some((self.pm_before - after) / self.pm_before * 100.0)
    }
}

impl Unit for RouteRecord {
    fn pm_level(&self) -> f64 {
        self.current_pm()
    }

    fn humidity(&self) -> f64 {
        self.humidity
    }

    fn route_count(&self) -> u32 {
        1
    }

    fn routes_needing_action(&self) -> u32 {
        u32::from(self.needs_action)
    }

    fn effectiveness(&self) -> Option<f64> {
        self.derived_effectiveness()
    }

    fn impact_score(&self) -> f64 {
        self.impact_score.unwrap_or_else(|| self.current_pm())
    }
}
