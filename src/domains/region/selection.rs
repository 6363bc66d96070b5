use serde::{Deserialize, Serialize};
use crate::domains::region::index::RegionIndex;
use crate::domains::region::types::SubRegion;

/// District/upazila pair held by one form instance.
///
/// Names are kept verbatim because they are what the backend receives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSelection {
    pub district: Option<String>,
    pub upazila: Option<String>,
}

impl LocationSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the district. A selected upazila that does not belong to the
    /// new district is cleared; an empty or unknown name clears both fields.
    pub fn select_district(&mut self, name: &str, index: &RegionIndex) {
        if name.is_empty() {
            self.clear();
            return;
        }
        if index.find_region_by_name(name).is_none() {
            log::debug!("Unknown district '{}', clearing selection", name);
            self.clear();
            return;
        }

        let keep_upazila = self
            .upazila
            .as_deref()
            .is_some_and(|upazila| index.find_sub_region(name, upazila).is_some());
        if !keep_upazila && self.upazila.is_some() {
            log::debug!("Clearing upazila after district changed to '{}'", name);
            self.upazila = None;
        }
        self.district = Some(name.to_string());
    }

    /// Accept the upazila only if it is a candidate of the current district
    pub fn select_upazila(&mut self, name: &str, index: &RegionIndex) -> bool {
        let Some(district) = self.district.as_deref() else {
            return false;
        };
        if index.find_sub_region(district, name).is_some() {
            self.upazila = Some(name.to_string());
            true
        } else {
            false
        }
    }

    /// Options for the dependent dropdown
    pub fn candidates<'a>(&self, index: &'a RegionIndex) -> &'a [SubRegion] {
        match self.district.as_deref() {
            Some(district) => index.sub_regions_for(district),
            None => &[],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.district.is_some() && self.upazila.is_some()
    }

    pub fn clear(&mut self) {
        self.district = None;
        self.upazila = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::region::types::Region;

    fn index() -> RegionIndex {
        RegionIndex::build(
            vec![Region::new(1, "Dhaka"), Region::new(2, "Chittagong")],
            vec![
                SubRegion::new(10, "Mirpur", 1),
                SubRegion::new(11, "Panchlaish", 2),
                SubRegion::new(12, "Savar", 1),
            ],
        )
    }

    #[test]
    fn test_changing_district_clears_foreign_upazila() {
        let index = index();
        let mut selection = LocationSelection::new();
        selection.select_district("Dhaka", &index);
        assert!(selection.select_upazila("Mirpur", &index));
        assert!(selection.is_complete());

        selection.select_district("Chittagong", &index);
        assert_eq!(selection.district.as_deref(), Some("Chittagong"));
        assert_eq!(selection.upazila, None);
        assert_eq!(selection.candidates(&index), &[SubRegion::new(11, "Panchlaish", 2)]);
    }

    #[test]
    fn test_reselecting_same_district_keeps_upazila() {
        let index = index();
        let mut selection = LocationSelection::new();
        selection.select_district("Dhaka", &index);
        selection.select_upazila("Savar", &index);
        selection.select_district("Dhaka", &index);
        assert_eq!(selection.upazila.as_deref(), Some("Savar"));
    }

    #[test]
    fn test_upazila_outside_district_rejected() {
        let index = index();
        let mut selection = LocationSelection::new();
        assert!(!selection.select_upazila("Mirpur", &index));

        selection.select_district("Chittagong", &index);
        assert!(!selection.select_upazila("Mirpur", &index));
        assert_eq!(selection.upazila, None);
    }

    #[test]
    fn test_unknown_district_has_no_candidates() {
        let index = index();
        let mut selection = LocationSelection::new();
        selection.select_district("Dhaka", &index);
        assert!(selection.select_upazila("Mirpur", &index));

        selection.select_district("Atlantis", &index);
        assert_eq!(selection.district, None);
        assert_eq!(selection.upazila, None);
        assert!(selection.candidates(&index).is_empty());
        assert!(!selection.select_upazila("Mirpur", &index));

        selection.select_district("", &index);
        assert_eq!(selection, LocationSelection::default());
    }
}
