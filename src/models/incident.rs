use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::ZipCode;

/// Canonical classification assigned to every surviving incident.
pub const AUTO_THEFT: &str = "AUTO THEFT";

/// A cleaned crime incident row, after per-file column normalization and
/// ZIP filtering but before the county merge. Date fields stay as raw text
/// here; they are parsed during the merge stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrimeRecord {
    pub incident_number: String,
    pub date_reported: String,
    pub date_occurred: String,
    pub offense_classification: String,
    pub location_category: String,
    pub was_offense_completed: String,
    pub zip: ZipCode,
    pub offense_code_name: String,
}

/// A fully enriched output row. `offense_code_name` is consumed to derive
/// `value_range` and does not appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedRecord {
    pub zip: ZipCode,
    pub incident_number: String,
    pub date_reported: NaiveDateTime,
    pub date_occurred: NaiveDateTime,
    pub offense_classification: String,
    pub location_category: String,
    pub was_offense_completed: String,
    pub value_range: String,
    pub week_day_reported: String,
    pub week_day_occurred: String,
}
