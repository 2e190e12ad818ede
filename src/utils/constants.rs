/// County/state pair the pipeline filters to.
pub const TARGET_COUNTY: &str = "Jefferson County";
pub const TARGET_STATE: &str = "KY";

/// Inclusive year range of the yearly incident extracts.
pub const FIRST_YEAR: u16 = 2020;
pub const LAST_YEAR: u16 = 2024;

/// Fixed file names, resolved relative to the data directory.
pub const RAW_DATA_DIR: &str = "raw_data";
pub const ZIP_REFERENCE_FILE: &str = "zip.csv";
pub const ZIP_ARTIFACT_FILE: &str = "jefferson_zip.csv";
pub const OUTPUT_FILE: &str = "combined_crime_data.csv";

/// Default data directory when none is given on the command line.
pub const DEFAULT_DATA_DIR: &str = "./data";
