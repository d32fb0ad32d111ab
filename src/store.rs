//! Immutable ward data source.
//!
//! A [`WardStore`] is built once, either from the built-in snapshot or
//! from a CSV file, and is handed to the analytics functions read-only.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::data::builtin_wards;
use crate::error::AnalyticsError;
use crate::model::WardRecord;

/// Read-only collection of ward records with lookup by id.
#[derive(Debug)]
pub struct WardStore {
    wards: Vec<WardRecord>,
}

impl WardStore {
    /// Builds a store over the built-in reference dataset.
    pub fn builtin() -> Self {
        Self {
            wards: builtin_wards(),
        }
    }

    pub fn new(wards: Vec<WardRecord>) -> Self {
        Self { wards }
    }

    /// Loads ward records from a CSV file with a header row matching the
    /// [`WardRecord`] field names.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, AnalyticsError> {
        let file = File::open(path.as_ref())?;
        let mut rdr = csv::Reader::from_reader(file);

        let mut wards = Vec::new();
        for result in rdr.deserialize() {
            let record: WardRecord = result?;
            wards.push(record);
        }

        debug!(count = wards.len(), path = %path.as_ref().display(), "Loaded ward CSV");
        Ok(Self { wards })
    }

    pub fn all(&self) -> &[WardRecord] {
        &self.wards
    }

    /// Looks up a ward by id.
    pub fn get(&self, id: &str) -> Result<&WardRecord, AnalyticsError> {
        self.wards
            .iter()
            .find(|w| w.id == id)
            .ok_or_else(|| AnalyticsError::UnknownUnit(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.wards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::io::Write;

    #[test]
    fn test_builtin_store_lookup() {
        let store = WardStore::builtin();
        let ward = store.get("shahdara").unwrap();
        assert_eq!(ward.name, "Shahdara");
        assert_eq!(ward.pm_level, 289.0);
    }

    #[test]
    fn test_unknown_id_is_an_error() {
        let store = WardStore::builtin();
        let err = store.get("atlantis").unwrap_err();
        assert!(matches!(err, AnalyticsError::UnknownUnit(id) if id == "atlantis"));
    }

    #[test]
    fn test_from_csv_roundtrip() {
        let path = format!("{}/dust_route_rater_test_wards.csv", env::temp_dir().display());
        let _ = fs::remove_file(&path);

        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            "id,name,pm_level,humidity,routes_count,routes_needing_action,last_updated,contractor,effectiveness"
        )
        .unwrap();
        writeln!(file, "north,North,178,48,12,4,5 min ago,ABC Contractors,42").unwrap();
        writeln!(file, "west,West,134,56,10,1,4 min ago,ABC Contractors,62").unwrap();

        let store = WardStore::from_csv(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("west").unwrap().routes_count, 10);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_csv_missing_file() {
        let result = WardStore::from_csv("/nonexistent/wards.csv");
        assert!(matches!(result, Err(AnalyticsError::Io(_))));
    }
}
