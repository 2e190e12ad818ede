use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ProcessingError, Result};
use crate::models::{CrimeRecord, ZipCode, AUTO_THEFT};

/// Canonical column names every yearly extract must resolve to.
const REQUIRED_COLUMNS: [&str; 8] = [
    "incident_number",
    "date_reported",
    "date_occurred",
    "offense_classification",
    "location_category",
    "was_offense_completed",
    "zip",
    "offense_code_name",
];

/// Column handling for the yearly incident extracts: which source headers
/// to discard, how the rest map onto canonical names, and which offense
/// labels count as auto theft. Built once and passed in, never global.
#[derive(Debug, Clone)]
pub struct CleaningConfig {
    pub rename: HashMap<&'static str, &'static str>,
    pub drop: HashSet<&'static str>,
    pub offense_aliases: HashSet<&'static str>,
}

impl CleaningConfig {
    /// The LMPD open-data naming conventions, covering the header variants
    /// used across the 2020-2024 extracts.
    pub fn lmpd() -> Self {
        let rename = HashMap::from([
            ("ZIP_CODE", "zip"),
            ("zip_code", "zip"),
            ("INCIDENT_NUMBER", "incident_number"),
            ("DATE_REPORTED", "date_reported"),
            ("DATE_OCCURED", "date_occurred"),
            ("CRIME_TYPE", "offense_classification"),
            ("PREMISE_TYPE", "location_category"),
            ("ATT_COMP", "was_offense_completed"),
            ("UOR_DESC", "offense_code_name"),
        ]);
        let drop = HashSet::from([
            "block_address",
            "BLOCK_ADDRESS",
            "city",
            "City",
            "badge_id",
            "BADGE_ID",
            "ObjectId",
            "nibrs_code",
            "NIBRS_CODE",
            "nibrs_group_name",
            "UCR_HIERARCHY",
            "LMPD_BEAT",
            "lmpd_beat",
            "LMPD_DIVISION",
            "lmpd_division",
        ]);
        let offense_aliases = HashSet::from(["MOTOR VEHICLE THEFT", "14 AUTO THEFT"]);
        Self {
            rename,
            drop,
            offense_aliases,
        }
    }
}

/// Loads the yearly incident extracts and applies the per-file cleaning
/// pass: column drop/rename, offense filtering, categorical normalization
/// and ZIP canonicalization.
pub struct IncidentReader {
    config: CleaningConfig,
}

impl IncidentReader {
    pub fn new(config: CleaningConfig) -> Self {
        Self { config }
    }

    /// Read every yearly file in order and concatenate the cleaned rows,
    /// preserving per-file row order. Any unreadable file is fatal for
    /// the whole run.
    pub fn read_files(&self, paths: &[impl AsRef<Path>]) -> Result<Vec<CrimeRecord>> {
        let mut records = Vec::new();
        for path in paths {
            let mut file_records = self.read_file(path.as_ref())?;
            records.append(&mut file_records);
        }
        info!(rows = records.len(), "concatenated cleaned incident files");
        Ok(records)
    }

    pub fn read_file(&self, path: &Path) -> Result<Vec<CrimeRecord>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let columns = self.resolve_columns(reader.headers()?, path)?;

        let mut records = Vec::new();
        let mut read = 0usize;
        for record in reader.records() {
            let record = record?;
            read += 1;
            if let Some(cleaned) = self.clean_row(&record, &columns) {
                records.push(cleaned);
            }
        }

        debug!(
            path = %path.display(),
            rows_read = read,
            rows_kept = records.len(),
            "cleaned incident file"
        );
        Ok(records)
    }

    /// Resolve source headers to canonical column indices. Drop-set
    /// headers are skipped, rename-map entries are translated and any
    /// other header passes through under its own name.
    fn resolve_columns(
        &self,
        headers: &csv::StringRecord,
        path: &Path,
    ) -> Result<HashMap<String, usize>> {
        let mut columns = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            let header = header.trim();
            if self.config.drop.contains(header) {
                continue;
            }
            let canonical = self.config.rename.get(header).copied().unwrap_or(header);
            columns.entry(canonical.to_string()).or_insert(index);
        }

        for column in REQUIRED_COLUMNS {
            if !columns.contains_key(column) {
                return Err(ProcessingError::MissingColumn {
                    column: column.to_string(),
                    path: path.to_path_buf(),
                });
            }
        }
        Ok(columns)
    }

    fn clean_row(
        &self,
        record: &csv::StringRecord,
        columns: &HashMap<String, usize>,
    ) -> Option<CrimeRecord> {
        let offense = field(record, columns, "offense_classification").trim();
        if !self.config.offense_aliases.contains(offense) {
            return None;
        }

        let zip = ZipCode::parse(field(record, columns, "zip"))?;

        Some(CrimeRecord {
            incident_number: field(record, columns, "incident_number").to_string(),
            date_reported: field(record, columns, "date_reported").to_string(),
            date_occurred: field(record, columns, "date_occurred").to_string(),
            offense_classification: AUTO_THEFT.to_string(),
            location_category: field(record, columns, "location_category").trim().to_string(),
            was_offense_completed: normalize_completion(field(
                record,
                columns,
                "was_offense_completed",
            )),
            zip,
            offense_code_name: field(record, columns, "offense_code_name").to_string(),
        })
    }
}

fn field<'a>(
    record: &'a csv::StringRecord,
    columns: &HashMap<String, usize>,
    name: &str,
) -> &'a str {
    columns
        .get(name)
        .and_then(|&index| record.get(index))
        .unwrap_or("")
}

/// Substring-based normalization of the attempted/completed flag. Any
/// value containing "COMPLETED" or "ATTEMPTED" has that fragment rewritten
/// rather than requiring an exact match; a missing value is "UNKNOWN".
fn normalize_completion(raw: &str) -> String {
    if raw.is_empty() {
        return "UNKNOWN".to_string();
    }
    raw.replace("COMPLETED", "YES").replace("ATTEMPTED", "NO")
}
