pub mod incident_reader;
pub mod zip_reader;

pub use incident_reader::{CleaningConfig, IncidentReader};
pub use zip_reader::{read_zip_artifact, CountyFilter, ZipReader};
