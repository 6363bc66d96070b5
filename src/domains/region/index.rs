use std::collections::HashMap;
use crate::domains::region::types::{Region, SubRegion};

/// Two-level district → upazila lookup built once from reference lists.
///
/// Lookups never fail: an unknown or empty district name resolves to an empty
/// candidate list, which the form renders as a disabled dependent field.
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    regions: Vec<Region>,
    position_by_id: HashMap<i64, usize>,
    id_by_name: HashMap<String, i64>,
    sub_regions_by_region: HashMap<i64, Vec<SubRegion>>,
    sub_region_count: usize,
    orphan_count: usize,
}

impl RegionIndex {
    /// Group `sub_regions` under their district.
    ///
    /// A repeated region id overwrites the earlier record but keeps its
    /// position. A repeated name resolves to the last region carrying it.
    pub fn build(regions: Vec<Region>, sub_regions: Vec<SubRegion>) -> Self {
        let mut deduped: Vec<Region> = Vec::with_capacity(regions.len());
        let mut position_by_id: HashMap<i64, usize> = HashMap::with_capacity(regions.len());

        for region in regions {
            match position_by_id.get(&region.id) {
                Some(&position) => {
                    log::debug!(
                        "Duplicate region id {}: '{}' replaces '{}'",
                        region.id,
                        region.name,
                        deduped[position].name
                    );
                    deduped[position] = region;
                }
                None => {
                    position_by_id.insert(region.id, deduped.len());
                    deduped.push(region);
                }
            }
        }

        let id_by_name: HashMap<String, i64> = deduped
            .iter()
            .map(|region| (region.name.clone(), region.id))
            .collect();

        let sub_region_count = sub_regions.len();
        let mut sub_regions_by_region: HashMap<i64, Vec<SubRegion>> = HashMap::new();
        for sub_region in sub_regions {
            sub_regions_by_region
                .entry(sub_region.district_id)
                .or_default()
                .push(sub_region);
        }

        let orphan_count: usize = sub_regions_by_region
            .iter()
            .filter(|(district_id, _)| !position_by_id.contains_key(district_id))
            .map(|(_, orphans)| orphans.len())
            .sum();
        if orphan_count > 0 {
            log::warn!(
                "{} sub-regions reference unknown districts and will not be offered",
                orphan_count
            );
        }

        log::debug!(
            "Built region index: {} regions, {} sub-regions",
            deduped.len(),
            sub_region_count
        );

        Self {
            regions: deduped,
            position_by_id,
            id_by_name,
            sub_regions_by_region,
            sub_region_count,
            orphan_count,
        }
    }

    /// Exact, case-sensitive name lookup
    pub fn find_region_by_name(&self, name: &str) -> Option<&Region> {
        let id = self.id_by_name.get(name)?;
        self.find_region_by_id(*id)
    }

    pub fn find_region_by_id(&self, id: i64) -> Option<&Region> {
        self.position_by_id.get(&id).map(|&position| &self.regions[position])
    }

    /// Upazilas of the named district, in reference-list order
    pub fn sub_regions_for(&self, region_name: &str) -> &[SubRegion] {
        match self.find_region_by_name(region_name) {
            Some(region) => self.sub_regions_for_id(region.id),
            None => &[],
        }
    }

    /// Upazilas of a known district id; orphans stay unreachable
    pub fn sub_regions_for_id(&self, region_id: i64) -> &[SubRegion] {
        if !self.position_by_id.contains_key(&region_id) {
            return &[];
        }
        self.sub_regions_by_region
            .get(&region_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// An upazila name is only meaningful inside its own district
    pub fn find_sub_region(&self, region_name: &str, sub_region_name: &str) -> Option<&SubRegion> {
        self.sub_regions_for(region_name)
            .iter()
            .find(|sub_region| sub_region.name == sub_region_name)
    }

    /// Districts in reference-list order, for the first dropdown
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// All sub-regions handed to `build`, orphans included
    pub fn sub_region_count(&self) -> usize {
        self.sub_region_count
    }

    pub fn orphan_count(&self) -> usize {
        self.orphan_count
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
