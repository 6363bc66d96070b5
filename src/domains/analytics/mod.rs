mod types;
pub mod bucketer;
pub mod summary;

pub use types::{
    Granularity, PeriodRecord, SeriesPoint, SeriesSummary, DonationRecord, DonationStats,
    INVALID_DATE_LABEL,
};
pub use bucketer::{format_period, try_format_period, to_series, parse_series_json};
pub use summary::{summarize_series, summarize_donations, recent_donations};
