pub mod constants;
pub mod dates;
pub mod progress;

pub use constants::*;
pub use dates::{parse_mixed_datetime, weekday_name};
pub use progress::ProgressReporter;
