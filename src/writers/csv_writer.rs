use std::fs::File;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{MergedRecord, OutputSchema, ZipCode};

/// Timestamp rendering used in the final artifact.
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes the pipeline's CSV artifacts: the intermediate county ZIP set
/// and the final merged dataset. No leading index column in either.
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }

    /// Persist the filtered ZIP column. Null entries are written as empty
    /// fields so the artifact keeps the filtered row order intact.
    pub fn write_zip_codes(&self, zips: &[Option<ZipCode>], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(["zip"])?;
        for zip in zips {
            match zip {
                Some(zip) => writer.write_record([zip.to_string()])?,
                None => writer.write_record([""])?,
            }
        }
        writer.flush()?;

        info!(path = %path.display(), rows = zips.len(), "wrote ZIP artifact");
        Ok(())
    }

    /// Write the final merged dataset with the schema's column order.
    pub fn write_merged(
        &self,
        records: &[MergedRecord],
        schema: &OutputSchema,
        path: &Path,
    ) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(schema.column_names())?;
        for record in records {
            writer.write_record([
                record.zip.to_string(),
                record.incident_number.clone(),
                record.date_reported.format(DATETIME_FORMAT).to_string(),
                record.date_occurred.format(DATETIME_FORMAT).to_string(),
                record.offense_classification.clone(),
                record.location_category.clone(),
                record.was_offense_completed.clone(),
                record.value_range.clone(),
                record.week_day_reported.clone(),
                record.week_day_occurred.clone(),
            ])?;
        }
        writer.flush()?;

        info!(path = %path.display(), rows = records.len(), "wrote merged dataset");
        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColumnType, AUTO_THEFT};
    use crate::processors::Retyper;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample_record() -> MergedRecord {
        let reported = NaiveDate::from_ymd_opt(2023, 7, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        MergedRecord {
            zip: ZipCode(40202),
            incident_number: "80-23-012345".to_string(),
            date_reported: reported,
            date_occurred: reported,
            offense_classification: AUTO_THEFT.to_string(),
            location_category: "RESIDENCE / HOME".to_string(),
            was_offense_completed: "YES".to_string(),
            value_range: "$500 < $10,000".to_string(),
            week_day_reported: "Saturday".to_string(),
            week_day_occurred: "Saturday".to_string(),
        }
    }

    #[test]
    fn test_zip_artifact_round_trip_with_nulls() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jefferson_zip.csv");
        let zips = vec![Some(ZipCode(40202)), None, Some(ZipCode(40219))];

        CsvWriter::new().write_zip_codes(&zips, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "zip\n40202\n\"\"\n40219\n");
    }

    #[test]
    fn test_merged_output_header_and_dates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("combined_crime_data.csv");
        let schema = Retyper::new().assign_types();

        CsvWriter::new()
            .write_merged(&[sample_record()], &schema, &path)
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "zip,incident_number,date_reported,date_occurred,offense_classification,location_category,was_offense_completed,value_range,week_day_reported,week_day_occurred"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("40202,80-23-012345,2023-07-15 14:30:00"));
        assert!(row.contains("\"$500 < $10,000\""));
    }

    #[test]
    fn test_empty_dataset_still_writes_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("combined_crime_data.csv");
        let schema = OutputSchema {
            columns: vec![("zip", ColumnType::Text)],
        };

        CsvWriter::new().write_merged(&[], &schema, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "zip\n");
    }

    #[test]
    fn test_unwritable_path_is_fatal() {
        let schema = Retyper::new().assign_types();
        let result = CsvWriter::new().write_merged(
            &[sample_record()],
            &schema,
            Path::new("/proc/not-writable/out.csv"),
        );
        assert!(result.is_err());
    }
}
