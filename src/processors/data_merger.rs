use std::collections::HashMap;

use tracing::info;

use crate::error::Result;
use crate::models::{CrimeRecord, MergedRecord, ZipCode};
use crate::processors::{LocationMapper, ValueRangeExtractor};
use crate::utils::dates::{parse_mixed_datetime, weekday_name};

/// Joins cleaned crime rows to the county ZIP set and enriches them with
/// parsed dates, monetary bands, canonical locations and weekday names.
pub struct DataMerger {
    value_ranges: ValueRangeExtractor,
    locations: LocationMapper,
}

impl DataMerger {
    pub fn new() -> Self {
        Self {
            value_ranges: ValueRangeExtractor::new(),
            locations: LocationMapper::new(),
        }
    }

    /// Inner join on ZIP, left-driven by the county ZIP set: output rows
    /// follow the ZIP-set order, with each ZIP's crime rows in their
    /// cleaned-table order. Null ZIP entries and crime rows without a
    /// county match drop out here.
    pub fn merge(
        &self,
        crime_records: &[CrimeRecord],
        county_zips: &[Option<ZipCode>],
    ) -> Result<Vec<MergedRecord>> {
        let by_zip = self.group_by_zip(crime_records);

        let mut merged = Vec::new();
        for zip in county_zips.iter().flatten() {
            if let Some(indices) = by_zip.get(zip) {
                for &index in indices {
                    merged.push(self.enrich(&crime_records[index])?);
                }
            }
        }

        info!(
            crime_rows = crime_records.len(),
            merged_rows = merged.len(),
            "joined incidents to county ZIP set"
        );
        Ok(merged)
    }

    fn group_by_zip(&self, crime_records: &[CrimeRecord]) -> HashMap<ZipCode, Vec<usize>> {
        let mut by_zip: HashMap<ZipCode, Vec<usize>> = HashMap::new();
        for (index, record) in crime_records.iter().enumerate() {
            by_zip.entry(record.zip).or_default().push(index);
        }
        by_zip
    }

    fn enrich(&self, record: &CrimeRecord) -> Result<MergedRecord> {
        let date_reported = parse_mixed_datetime(&normalize_date_text(&record.date_reported))?;
        let date_occurred = parse_mixed_datetime(&normalize_date_text(&record.date_occurred))?;

        Ok(MergedRecord {
            zip: record.zip,
            incident_number: record.incident_number.clone(),
            date_reported,
            date_occurred,
            offense_classification: record.offense_classification.clone(),
            location_category: self.locations.remap(&record.location_category),
            was_offense_completed: record.was_offense_completed.clone(),
            value_range: self.value_ranges.extract(&record.offense_code_name),
            week_day_reported: weekday_name(&date_reported),
            week_day_occurred: weekday_name(&date_occurred),
        })
    }
}

impl Default for DataMerger {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_date_text(raw: &str) -> String {
    raw.trim().replace('/', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AUTO_THEFT;
    use pretty_assertions::assert_eq;

    fn crime_row(incident: &str, zip: u32, uor: &str, location: &str) -> CrimeRecord {
        CrimeRecord {
            incident_number: incident.to_string(),
            date_reported: "2023-07-15 14:30:00".to_string(),
            date_occurred: "07/14/2023 22:00".to_string(),
            offense_classification: AUTO_THEFT.to_string(),
            location_category: location.to_string(),
            was_offense_completed: "YES".to_string(),
            zip: ZipCode(zip),
            offense_code_name: uor.to_string(),
        }
    }

    #[test]
    fn test_inner_join_drops_unmatched_zip() {
        let merger = DataMerger::new();
        let crime = vec![
            crime_row("80-23-1", 40202, "AUTO THEFT", "RESIDENCE/HOME"),
            crime_row("80-23-2", 40014, "AUTO THEFT", "RESIDENCE/HOME"),
        ];
        let zips = vec![Some(ZipCode(40202))];

        let merged = merger.merge(&crime, &zips).unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].incident_number, "80-23-1");
    }

    #[test]
    fn test_null_zip_entries_never_join() {
        let merger = DataMerger::new();
        let crime = vec![crime_row("80-23-1", 40202, "AUTO THEFT", "RESIDENCE/HOME")];
        let zips = vec![None, Some(ZipCode(40202)), None];

        let merged = merger.merge(&crime, &zips).unwrap();
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn test_output_ordered_by_zip_set_then_crime_order() {
        let merger = DataMerger::new();
        let crime = vec![
            crime_row("80-23-1", 40219, "AUTO THEFT", "RESIDENCE/HOME"),
            crime_row("80-23-2", 40202, "AUTO THEFT", "RESIDENCE/HOME"),
            crime_row("80-23-3", 40219, "AUTO THEFT", "RESIDENCE/HOME"),
        ];
        let zips = vec![Some(ZipCode(40202)), Some(ZipCode(40219))];

        let merged = merger.merge(&crime, &zips).unwrap();

        let order: Vec<&str> = merged.iter().map(|r| r.incident_number.as_str()).collect();
        assert_eq!(order, vec!["80-23-2", "80-23-1", "80-23-3"]);
    }

    #[test]
    fn test_enrichment_fields() {
        let merger = DataMerger::new();
        let crime = vec![crime_row(
            "80-23-1",
            40202,
            "AUTO THEFT > $500 BUT < $10,000",
            "RESIDENCE/HOME",
        )];
        let zips = vec![Some(ZipCode(40202))];

        let merged = merger.merge(&crime, &zips).unwrap();
        let row = &merged[0];

        assert_eq!(row.value_range, "$500 < $10,000");
        assert_eq!(row.location_category, "RESIDENCE / HOME");
        assert_eq!(row.week_day_reported, "Saturday");
        assert_eq!(row.week_day_occurred, "Friday");
    }

    #[test]
    fn test_slashed_dates_parse() {
        let merger = DataMerger::new();
        let mut record = crime_row("80-23-1", 40202, "AUTO THEFT", "RESIDENCE/HOME");
        record.date_reported = " 2023/07/15 ".to_string();
        let merged = merger.merge(&[record], &[Some(ZipCode(40202))]).unwrap();

        assert_eq!(merged[0].week_day_reported, "Saturday");
    }

    #[test]
    fn test_unparseable_date_is_fatal() {
        let merger = DataMerger::new();
        let mut record = crime_row("80-23-1", 40202, "AUTO THEFT", "RESIDENCE/HOME");
        record.date_occurred = "sometime in July".to_string();

        let result = merger.merge(&[record], &[Some(ZipCode(40202))]);
        assert!(result.is_err());
    }
}
