//! Fixed-format timestamps as they appear in the source data.
//!
//! Every timestamp is written as `YYYY-MM-DDTHH:MM:SS ±HH:MM`, e.g.
//! `2016-05-21T11:10:28 -10:00`. An unset timestamp is `null` (or missing)
//! and is held as `None`, never as a sentinel minimum time.
//!
//! Use with `#[serde(default, with = "desk_core::timestamp::option")]`.
//!
//! # Example
//! ```
//! use desk_core::timestamp;
//!
//! let ts = timestamp::parse("2016-05-21T11:10:28 -10:00").unwrap();
//! assert_eq!(timestamp::format(&ts), "2016-05-21T11:10:28 -10:00");
//! ```

use chrono::{DateTime, FixedOffset, ParseError};
use thiserror::Error;

/// `strftime` pattern of the source data timestamps.
pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S %:z";

/// A timestamp with the offset it was recorded in.
///
/// Equality compares instants, so `10:00 +00:00` equals `00:00 -10:00`.
pub type Timestamp = DateTime<FixedOffset>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimestampError {
    #[error("expected exactly one space between the time and the UTC offset")]
    Separator,

    #[error(transparent)]
    Chrono(#[from] ParseError),
}

/// Parse a timestamp in the fixed source format.
///
/// chrono reads the space in [`FORMAT`] as optional whitespace, so the
/// single separator before the offset is checked here first.
///
/// # Errors
///
/// Returns [`TimestampError::Separator`] if the time and offset are not
/// separated by exactly one space, or the chrono error if `raw` is otherwise
/// not in [`FORMAT`].
pub fn parse(raw: &str) -> Result<Timestamp, TimestampError> {
    let raw = raw.trim();
    let Some((date_time, offset)) = raw.rsplit_once(' ') else {
        return Err(TimestampError::Separator);
    };
    if date_time.contains(char::is_whitespace) || !offset.starts_with(['+', '-']) {
        return Err(TimestampError::Separator);
    }
    Ok(DateTime::parse_from_str(raw, FORMAT)?)
}

/// Render a timestamp in the fixed source format.
#[must_use]
pub fn format(ts: &Timestamp) -> String {
    ts.format(FORMAT).to_string()
}

/// Serde adapter for `Option<Timestamp>`: `null` or `""` is unset.
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Timestamp;

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(ts: &Option<Timestamp>, s: S) -> Result<S::Ok, S::Error> {
        match ts {
            Some(ts) => s.serialize_str(&super::format(ts)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Timestamp>, D::Error> {
        let raw = Option::<String>::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => super::parse(value)
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{value}': {e}"))),
        }
    }
}
