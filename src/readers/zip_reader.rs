use std::fs::File;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{ProcessingError, Result};
use crate::models::ZipCode;
use crate::utils::constants::{TARGET_COUNTY, TARGET_STATE};

/// County/state pair a ZIP reference row must match to survive.
#[derive(Debug, Clone)]
pub struct CountyFilter {
    pub county: String,
    pub state: String,
}

impl CountyFilter {
    pub fn new(county: &str, state: &str) -> Self {
        Self {
            county: county.to_string(),
            state: state.to_string(),
        }
    }

    pub fn jefferson_ky() -> Self {
        Self::new(TARGET_COUNTY, TARGET_STATE)
    }
}

/// Reads the ZIP-code/county reference table and filters it to one county.
pub struct ZipReader {
    filter: CountyFilter,
}

impl ZipReader {
    pub fn new(filter: CountyFilter) -> Self {
        Self { filter }
    }

    /// Read the reference CSV and return the ordered ZIP column for the
    /// target county. Rows whose ZIP fails integer coercion are kept as
    /// null entries; they fall out at the inner join instead.
    pub fn read_filtered(&self, path: &Path) -> Result<Vec<Option<ZipCode>>> {
        let file = File::open(path)?;
        let mut reader = csv::Reader::from_reader(file);

        let headers = reader.headers()?.clone();
        let zip_idx = self.find_column(&headers, &["zip", "ZIP_CODE"], path)?;
        let county_idx = self.find_column(&headers, &["county"], path)?;
        let state_idx = self.find_column(&headers, &["state"], path)?;

        let mut zips = Vec::new();
        for record in reader.records() {
            let record = record?;
            let county = record.get(county_idx).unwrap_or("");
            let state = record.get(state_idx).unwrap_or("");
            if county != self.filter.county || state != self.filter.state {
                continue;
            }
            let raw = record.get(zip_idx).unwrap_or("");
            let zip = ZipCode::coerce(raw);
            if zip.is_none() {
                debug!(value = raw, "ZIP failed integer coercion, kept as null");
            }
            zips.push(zip);
        }

        info!(
            county = %self.filter.county,
            state = %self.filter.state,
            rows = zips.len(),
            "filtered ZIP reference table"
        );
        Ok(zips)
    }

    fn find_column(
        &self,
        headers: &csv::StringRecord,
        candidates: &[&str],
        path: &Path,
    ) -> Result<usize> {
        for (index, header) in headers.iter().enumerate() {
            if candidates.contains(&header.trim()) {
                return Ok(index);
            }
        }
        Err(ProcessingError::MissingColumn {
            column: candidates[0].to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Re-read the persisted ZIP artifact for the merge stage. Empty fields
/// are the null entries the filter stage let through.
pub fn read_zip_artifact(path: &Path) -> Result<Vec<Option<ZipCode>>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut zips = Vec::new();
    for record in reader.records() {
        let record = record?;
        let raw = record.get(0).unwrap_or("");
        zips.push(ZipCode::coerce(raw));
    }
    Ok(zips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_reference(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_filters_to_target_county() {
        let file = write_reference(
            "zip,county,state,city\n\
             40202,Jefferson County,KY,Louisville\n\
             40014,Oldham County,KY,Crestwood\n\
             40202,Jefferson County,IN,Wrongstate\n\
             40219,Jefferson County,KY,Louisville\n",
        );

        let reader = ZipReader::new(CountyFilter::jefferson_ky());
        let zips = reader.read_filtered(file.path()).unwrap();

        assert_eq!(zips, vec![Some(ZipCode(40202)), Some(ZipCode(40219))]);
    }

    #[test]
    fn test_uppercase_zip_header_accepted() {
        let file = write_reference(
            "ZIP_CODE,county,state\n40202,Jefferson County,KY\n",
        );

        let reader = ZipReader::new(CountyFilter::jefferson_ky());
        let zips = reader.read_filtered(file.path()).unwrap();

        assert_eq!(zips, vec![Some(ZipCode(40202))]);
    }

    #[test]
    fn test_uncoercible_zip_kept_as_null() {
        let file = write_reference(
            "zip,county,state\n\
             bogus,Jefferson County,KY\n\
             40202,Jefferson County,KY\n",
        );

        let reader = ZipReader::new(CountyFilter::jefferson_ky());
        let zips = reader.read_filtered(file.path()).unwrap();

        assert_eq!(zips, vec![None, Some(ZipCode(40202))]);
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let reader = ZipReader::new(CountyFilter::jefferson_ky());
        let err = reader
            .read_filtered(Path::new("/nonexistent/zip.csv"))
            .unwrap_err();
        assert!(matches!(err, ProcessingError::Io(_)));
    }

    #[test]
    fn test_artifact_round_trip() {
        let file = write_reference("zip\n40202\n\"\"\n40219\n");
        let zips = read_zip_artifact(file.path()).unwrap();
        assert_eq!(
            zips,
            vec![Some(ZipCode(40202)), None, Some(ZipCode(40219))]
        );
    }

    #[test]
    fn test_missing_county_column() {
        let file = write_reference("zip,state\n40202,KY\n");

        let reader = ZipReader::new(CountyFilter::jefferson_ky());
        let err = reader.read_filtered(file.path()).unwrap_err();
        assert!(matches!(err, ProcessingError::MissingColumn { .. }));
    }
}
