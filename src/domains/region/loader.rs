//! Reference data decoding for the bundled district and upazila lists.
//!
//! Two shapes are accepted: a flat JSON array of records, or a database
//! export where the array holds header entries and one `"type": "table"`
//! entry with the records under `"data"`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;
use crate::domains::region::types::{Region, SubRegion};
use crate::errors::{DomainError, DomainResult};

pub fn load_regions_json(json: &str) -> DomainResult<Vec<Region>> {
    decode_records(json, "districts")
}

pub fn load_sub_regions_json(json: &str) -> DomainResult<Vec<SubRegion>> {
    decode_records(json, "upazilas")
}

pub fn load_regions_file(path: &Path) -> DomainResult<Vec<Region>> {
    let json = std::fs::read_to_string(path)?;
    load_regions_json(&json)
}

pub fn load_sub_regions_file(path: &Path) -> DomainResult<Vec<SubRegion>> {
    let json = std::fs::read_to_string(path)?;
    load_sub_regions_json(&json)
}

fn decode_records<T: DeserializeOwned>(json: &str, dataset: &str) -> DomainResult<Vec<T>> {
    let value: Value = serde_json::from_str(json)?;
    let records = unwrap_export(value, dataset)?;

    let decoded: Vec<T> = serde_json::from_value(records).map_err(|e| {
        DomainError::ReferenceData(format!("invalid {} record: {}", dataset, e))
    })?;
    log::debug!("Loaded {} {} records", decoded.len(), dataset);
    Ok(decoded)
}

fn unwrap_export(value: Value, dataset: &str) -> DomainResult<Value> {
    let Value::Array(entries) = value else {
        return Err(DomainError::ReferenceData(format!(
            "{} reference data must be a JSON array",
            dataset
        )));
    };

    let is_export = entries
        .iter()
        .any(|entry| entry.get("type").and_then(Value::as_str).is_some());
    if !is_export {
        return Ok(Value::Array(entries));
    }

    entries
        .into_iter()
        .find(|entry| entry.get("type").and_then(Value::as_str) == Some("table"))
        .and_then(|mut table| table.get_mut("data").map(Value::take))
        .ok_or_else(|| {
            DomainError::ReferenceData(format!("{} export has no table data", dataset))
        })
}
