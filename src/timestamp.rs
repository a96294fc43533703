//! HAR timestamp encoding
//!
//! HAR cookies carry expiry as `YYYY-MM-DDTHH:MM:SSZ` in UTC, while cookie
//! stores keep Unix seconds. Only whole seconds are representable.

use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::error::{HarJarError, Result};

const HAR_TIMESTAMP_LEN: usize = "YYYY-MM-DDTHH:MM:SSZ".len();

/// Parse a HAR expiry string into Unix seconds.
///
/// The input must match `YYYY-MM-DDTHH:MM:SSZ` exactly and is read as UTC.
pub fn parse_har_timestamp(input: &str) -> Result<i64> {
    // `[year]` would otherwise accept a leading sign.
    if input.len() != HAR_TIMESTAMP_LEN || !input.starts_with(|c: char| c.is_ascii_digit()) {
        log::debug!("Rejected HAR timestamp {:?}: unexpected shape", input);
        return Err(HarJarError::InvalidTimestamp(input.to_string()));
    }
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");
    PrimitiveDateTime::parse(input, format)
        .map(|datetime| datetime.assume_utc().unix_timestamp())
        .map_err(|e| {
            log::debug!("Rejected HAR timestamp {:?}: {}", input, e);
            HarJarError::InvalidTimestamp(input.to_string())
        })
}

/// Format Unix seconds as a HAR expiry string.
///
/// Returns `None` when the instant falls outside the years 0000..=9999.
pub fn format_har_timestamp(unix_secs: i64) -> Option<String> {
    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");
    let datetime = OffsetDateTime::from_unix_timestamp(unix_secs).ok()?;
    if datetime.year() < 0 {
        return None;
    }
    datetime.format(format).ok()
}
