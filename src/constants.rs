use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Forced in `main` so uptime counts from boot, not from the first health check.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);
