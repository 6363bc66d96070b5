// Public modules
pub mod auth;
pub mod context;
pub mod domains;
pub mod errors;
pub mod types;
pub mod utils;
pub mod validation;

pub use context::AppContext;
pub use domains::analytics::{format_period, to_series};
pub use domains::region::RegionIndex;

use domains::region::{Region, SubRegion};

/// Group upazilas under their districts. Alias of [`RegionIndex::build`].
pub fn build_index(regions: Vec<Region>, sub_regions: Vec<SubRegion>) -> RegionIndex {
    RegionIndex::build(regions, sub_regions)
}

/// Exact-name district lookup; `None` means the selection is cleared
pub fn find_region_by_name<'a>(index: &'a RegionIndex, name: &str) -> Option<&'a Region> {
    index.find_region_by_name(name)
}

/// Upazila candidates for a district name; empty on an unknown name
pub fn sub_regions_for<'a>(index: &'a RegionIndex, region_name: &str) -> &'a [SubRegion] {
    index.sub_regions_for(region_name)
}
