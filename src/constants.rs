use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Set on first access; `main` touches it at startup.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
