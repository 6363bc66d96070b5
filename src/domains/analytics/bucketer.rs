use chrono::{DateTime, NaiveDate, NaiveDateTime};
use crate::domains::analytics::types::{Granularity, PeriodRecord, SeriesPoint, INVALID_DATE_LABEL};
use crate::errors::DomainResult;
use serde_json::Value;

/// Render a period key as a chart label, or the sentinel when it is malformed
pub fn format_period(period_key: &str, granularity: Granularity) -> String {
    try_format_period(period_key, granularity)
        .unwrap_or_else(|| INVALID_DATE_LABEL.to_string())
}

/// Render a period key as a chart label.
///
/// Yearly keys are `YYYY-MM`; a `-01` day is appended before parsing so the
/// partial date is never interpreted loosely. They render as `Jul 2025`.
/// Weekly and monthly keys are full dates and render as `Jul 17`.
pub fn try_format_period(period_key: &str, granularity: Granularity) -> Option<String> {
    let key = period_key.trim();
    match granularity {
        Granularity::Yearly => {
            let date = NaiveDate::parse_from_str(&format!("{}-01", key), "%Y-%m-%d").ok()?;
            Some(date.format("%b %Y").to_string())
        }
        Granularity::Weekly | Granularity::Monthly => {
            let date = parse_full_date(key)?;
            Some(date.format("%b %-d").to_string())
        }
    }
}

fn parse_full_date(key: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(key) {
        return Some(timestamp.date_naive());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(key, fmt).ok())
        .map(|timestamp| timestamp.date())
}

/// One point per record, in input order. Records whose key does not parse
/// keep their value under the sentinel label so totals stay correct.
pub fn to_series(records: &[PeriodRecord], granularity: Granularity) -> Vec<SeriesPoint> {
    let series: Vec<SeriesPoint> = records
        .iter()
        .map(|record| {
            let label = try_format_period(&record.date, granularity);
            if label.is_none() {
                log::warn!(
                    "Unparseable {} period key '{}', keeping value {}",
                    granularity,
                    record.date,
                    record.value()
                );
            }
            SeriesPoint {
                valid: label.is_some(),
                label: label.unwrap_or_else(|| INVALID_DATE_LABEL.to_string()),
                amount: record.value(),
            }
        })
        .collect();

    log::debug!("Shaped {} {} points", series.len(), granularity);
    series
}

/// Decode the stats endpoint payload and shape it for the chart.
///
/// Only a payload that is not a JSON array is an error. A row that is not an
/// object becomes a zero-valued sentinel point in its position.
pub fn parse_series_json(json: &str, granularity: Granularity) -> DomainResult<Vec<SeriesPoint>> {
    let rows: Vec<Value> = serde_json::from_str(json)?;
    let records: Vec<PeriodRecord> = rows
        .into_iter()
        .enumerate()
        .map(|(position, row)| {
            serde_json::from_value(row).unwrap_or_else(|e| {
                log::warn!("Skipping malformed stats row {}: {}", position, e);
                PeriodRecord::default()
            })
        })
        .collect();
    Ok(to_series(&records, granularity))
}
