use serde::{Deserialize, Deserializer, Serialize};

/// District: top-level administrative area of a donation request.
/// The `name` is what gets submitted to the backend, never the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
}

/// Upazila: second-level area nested under a district
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRegion {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: String,
    #[serde(alias = "districtId", deserialize_with = "deserialize_id")]
    pub district_id: i64,
}

impl Region {
    pub fn new(id: i64, name: &str) -> Self {
        Self { id, name: name.to_string() }
    }
}

impl SubRegion {
    pub fn new(id: i64, name: &str, district_id: i64) -> Self {
        Self { id, name: name.to_string(), district_id }
    }
}

// Reference exports carry ids either as numbers or as numeric strings
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Int(i64),
    Text(String),
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Int(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric id: '{}'", text))),
    }
}
