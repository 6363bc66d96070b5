pub mod analytics;
pub mod donation_request;
pub mod permission;
pub mod region;
pub mod settings;

pub use region::{Region, RegionIndex, SubRegion};
pub use analytics::{Granularity, PeriodRecord, SeriesPoint};
