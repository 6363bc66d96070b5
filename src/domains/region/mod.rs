mod types;
pub mod index;
pub mod loader;
pub mod selection;

pub use types::{Region, SubRegion};
pub use index::RegionIndex;
pub use loader::{load_regions_json, load_sub_regions_json, load_regions_file, load_sub_regions_file};
pub use selection::LocationSelection;
