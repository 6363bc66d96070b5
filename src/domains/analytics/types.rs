use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Label used for points whose period key could not be parsed
pub const INVALID_DATE_LABEL: &str = "Invalid Date";

/// Bucket size the backend grouped donation totals by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
            Granularity::Yearly => "yearly",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "weekly" => Some(Granularity::Weekly),
            "monthly" => Some(Granularity::Monthly),
            "yearly" => Some(Granularity::Yearly),
            _ => None,
        }
    }

    pub fn all() -> [Granularity; 3] {
        [Granularity::Weekly, Granularity::Monthly, Granularity::Yearly]
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One pre-aggregated row from the funding stats endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPeriodRecord")]
pub struct PeriodRecord {
    pub date: String,
    pub total: Option<f64>,
    pub count: Option<f64>,
}

impl PeriodRecord {
    pub fn with_total(date: &str, total: f64) -> Self {
        Self { date: date.to_string(), total: Some(total), count: None }
    }

    pub fn with_count(date: &str, count: u64) -> Self {
        Self { date: date.to_string(), total: None, count: Some(count as f64) }
    }

    /// Numeric value to chart: the total, else the count, else zero
    pub fn value(&self) -> f64 {
        self.total.or(self.count).unwrap_or(0.0)
    }
}

// Loosely typed stats row. `_id` and `period` are fallbacks for `date`;
// `amount` is a fallback for `total`.
#[derive(Debug, Default, Deserialize)]
struct RawPeriodRecord {
    #[serde(default)]
    date: Option<Value>,
    #[serde(default, rename = "_id")]
    id: Option<Value>,
    #[serde(default)]
    period: Option<Value>,
    #[serde(default)]
    total: Option<Value>,
    #[serde(default)]
    amount: Option<Value>,
    #[serde(default)]
    count: Option<Value>,
}

impl From<RawPeriodRecord> for PeriodRecord {
    fn from(raw: RawPeriodRecord) -> Self {
        let date = [raw.date, raw.id, raw.period]
            .into_iter()
            .flatten()
            .find(|key| !key.is_null())
            .map(period_key)
            .unwrap_or_default();

        Self {
            date,
            total: raw.total.and_then(number).or_else(|| raw.amount.and_then(number)),
            count: raw.count.and_then(number),
        }
    }
}

// A numeric key is still a record; it just gets the sentinel label
fn period_key(value: Value) -> String {
    match value {
        Value::String(key) => key,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn number(value: Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// A chart-ready point, in the order the backend returned its period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub amount: f64,
    /// False when the period key failed to parse
    pub valid: bool,
}

/// Totals shown next to a chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub total_amount: f64,
    pub point_count: usize,
    pub invalid_points: usize,
    pub peak_label: Option<String>,
    pub peak_amount: Option<f64>,
}

/// A single donation as listed by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationRecord {
    #[serde(alias = "date", alias = "createdAt")]
    pub timestamp: DateTime<Utc>,
    pub amount: f64,
    #[serde(alias = "name", alias = "donorName")]
    pub donor_name: String,
}

/// Funding stats summary for dashboards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationStats {
    pub total_amount: f64,
    pub donation_count: usize,
    pub average_amount: f64,
    pub largest: Option<f64>,
}
