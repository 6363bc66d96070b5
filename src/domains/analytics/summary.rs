use crate::domains::analytics::types::{DonationRecord, DonationStats, SeriesPoint, SeriesSummary};

/// Totals over a shaped series. Invalid points still count toward the total;
/// the peak ignores them and ties go to the earliest point.
pub fn summarize_series(points: &[SeriesPoint]) -> SeriesSummary {
    let total_amount: f64 = points.iter().map(|p| p.amount).sum();
    let invalid_points = points.iter().filter(|p| !p.valid).count();

    let peak = points
        .iter()
        .filter(|p| p.valid && !p.amount.is_nan())
        .fold(None::<&SeriesPoint>, |best, point| match best {
            Some(current) if current.amount >= point.amount => Some(current),
            _ => Some(point),
        });

    SeriesSummary {
        total_amount,
        point_count: points.len(),
        invalid_points,
        peak_label: peak.map(|p| p.label.clone()),
        peak_amount: peak.map(|p| p.amount),
    }
}

pub fn summarize_donations(records: &[DonationRecord]) -> DonationStats {
    let total_amount: f64 = records.iter().map(|r| r.amount).sum();
    let donation_count = records.len();
    let average_amount = if donation_count == 0 {
        0.0
    } else {
        total_amount / donation_count as f64
    };
    let largest = records
        .iter()
        .map(|r| r.amount)
        .fold(None::<f64>, |max, amount| Some(max.map_or(amount, |m| m.max(amount))));

    DonationStats {
        total_amount,
        donation_count,
        average_amount,
        largest,
    }
}

/// Newest donations first; equal timestamps keep their listed order
pub fn recent_donations(records: &[DonationRecord], limit: usize) -> Vec<&DonationRecord> {
    let mut sorted: Vec<&DonationRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}
