//! Built-in reference dataset: the eleven Delhi municipal wards.
//!
//! Readings are a fixed snapshot used when no CSV file is supplied. The
//! collection is constructed once and never mutated.

use crate::model::WardRecord;

/// Returns the built-in ward snapshot.
pub fn builtin_wards() -> Vec<WardRecord> {
    fn ward(
        id: &str,
        name: &str,
        pm_level: f64,
        humidity: f64,
        routes_count: u32,
        routes_needing_action: u32,
        last_updated: &str,
        contractor: &str,
        effectiveness: f64,
    ) -> WardRecord {
        WardRecord {
            id: id.to_string(),
            name: name.to_string(),
            pm_level,
            humidity,
            routes_count,
            routes_needing_action,
            last_updated: last_updated.to_string(),
            contractor: contractor.to_string(),
            effectiveness,
        }
    }

    vec![
        ward("north", "North", 178.0, 48.0, 12, 4, "5 min ago", "ABC Contractors", 42.0),
        ward("north-west", "North West", 156.0, 52.0, 8, 2, "3 min ago", "Green Clean Ltd", 58.0),
        ward("north-east", "North East", 245.0, 44.0, 6, 4, "2 min ago", "XYZ Services", 28.0),
        ward("west", "West", 134.0, 56.0, 10, 1, "4 min ago", "ABC Contractors", 62.0),
        ward("central", "Central", 198.0, 50.0, 14, 5, "1 min ago", "XYZ Services", 45.0),
        ward("new-delhi", "New Delhi", 112.0, 58.0, 16, 2, "2 min ago", "Green Clean Ltd", 71.0),
        ward("south-west", "South West", 98.0, 62.0, 9, 0, "6 min ago", "ABC Contractors", 78.0),
        ward("south", "South", 142.0, 54.0, 11, 2, "3 min ago", "Green Clean Ltd", 55.0),
        ward("south-east", "South East", 167.0, 51.0, 7, 2, "4 min ago", "XYZ Services", 48.0),
        ward("east", "East", 212.0, 46.0, 8, 3, "2 min ago", "XYZ Services", 35.0),
        ward("shahdara", "Shahdara", 289.0, 42.0, 5, 4, "1 min ago", "ABC Contractors", 22.0),
    ]
}
