//! Various utility functions
//!

pub mod fs;
pub mod logging;
pub mod str;

/// Timestamps on the ledger are milliseconds since the Unix epoch.
pub mod millis {
    use chrono::{DateTime, Local, TimeZone, Utc};

    pub fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    pub fn to_local(millis: i64) -> Option<DateTime<Local>> {
        Local.timestamp_millis_opt(millis).single()
    }
}
