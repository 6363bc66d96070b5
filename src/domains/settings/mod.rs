mod types;

pub use types::{AppSettings, AppTheme};
