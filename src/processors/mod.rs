pub mod data_merger;
pub mod location_mapper;
pub mod retyper;
pub mod value_range;

pub use data_merger::DataMerger;
pub use location_mapper::LocationMapper;
pub use retyper::Retyper;
pub use value_range::{ValueRangeExtractor, UNKNOWN_RANGE};
