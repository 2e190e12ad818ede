pub mod incident;
pub mod schema;
pub mod zip_code;

pub use incident::{CrimeRecord, MergedRecord, AUTO_THEFT};
pub use schema::{ColumnType, OutputSchema};
pub use zip_code::ZipCode;
