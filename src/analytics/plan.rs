//! Sprinkling schedule derived from the priority ranking.
//!
//! Routes needing action are bucketed into the day's three treatment
//! windows by severity: critical readings go out with the morning crews,
//! poor readings in the evening, and the remainder overnight.

use serde::Serialize;

use crate::analytics::priority::rank_priority;
use crate::analytics::status::PmStatus;
use crate::model::RouteRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Evening,
    Night,
}

impl TimeSlot {
    pub fn hours(self) -> &'static str {
        match self {
            Self::Morning => "6:00 - 10:00",
            Self::Evening => "16:00 - 19:00",
            Self::Night => "22:00 - 02:00",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanPriority {
    High,
    Medium,
}

/// One scheduled treatment.
#[derive(Debug, Serialize)]
pub struct PlannedRoute {
    pub route_id: String,
    pub name: String,
    pub pm_level: f64,
    pub priority: PlanPriority,
    pub reason: String,
}

/// All treatments scheduled for one time slot.
#[derive(Debug, Serialize)]
pub struct SlotPlan {
    pub slot: TimeSlot,
    pub hours: &'static str,
    pub routes: Vec<PlannedRoute>,
}

// poor and critical readings both go out as high priority; only the slot
// differs by severity
fn slot_for(status: PmStatus) -> (TimeSlot, PlanPriority) {
    match status {
        PmStatus::Critical => (TimeSlot::Morning, PlanPriority::High),
        PmStatus::Poor => (TimeSlot::Evening, PlanPriority::High),
        PmStatus::Moderate | PmStatus::Good => (TimeSlot::Night, PlanPriority::Medium),
    }
}

fn reason_for(status: PmStatus, pm: f64) -> String {
    match status {
        PmStatus::Critical => format!("PM10 at {pm:.0} µg/m³"),
        PmStatus::Poor => "Expected PM spike".to_string(),
        PmStatus::Moderate | PmStatus::Good => "Overnight settlement".to_string(),
    }
}

/// Builds the day's schedule from the current route snapshot.
///
/// Only routes needing action are scheduled. Within each slot, routes
/// keep the priority ranking's order (worst first). All three slots are
/// present in the output even when empty.
pub fn build_plan(routes: &[RouteRecord]) -> Vec<SlotPlan> {
    let mut slots = vec![
        SlotPlan {
            slot: TimeSlot::Morning,
            hours: TimeSlot::Morning.hours(),
            routes: Vec::new(),
        },
        SlotPlan {
            slot: TimeSlot::Evening,
            hours: TimeSlot::Evening.hours(),
            routes: Vec::new(),
        },
        SlotPlan {
            slot: TimeSlot::Night,
            hours: TimeSlot::Night.hours(),
            routes: Vec::new(),
        },
    ];

    for route in rank_priority(routes) {
        let pm = route.current_pm();
        let status = PmStatus::classify(pm);
        let (slot, priority) = slot_for(status);

        let planned = PlannedRoute {
            route_id: route.id.clone(),
            name: route.name.clone(),
            pm_level: pm,
            priority,
            reason: reason_for(status, pm),
        };

        let idx = match slot {
            TimeSlot::Morning => 0,
            TimeSlot::Evening => 1,
            TimeSlot::Night => 2,
        };
        slots[idx].routes.push(planned);
    }

    slots
}
