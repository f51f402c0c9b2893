//! Wall-clock timestamps stored as ISO-8601 strings
//!
//! Values are held at millisecond precision (what `Date.now()` returns)
//! and serialize in the `Date.prototype.toISOString` shape, so entries
//! written by either side of the wasm boundary read back identically.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Errors parsing an ISO-8601 timestamp
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TimestampError {
    /// The text is not an RFC 3339 date-time with an offset.
    #[error("malformed timestamp: {0}")]
    Parse(#[from] chrono::ParseError),

    /// The instant is outside the representable range.
    #[error("timestamp out of range")]
    OutOfRange,
}

/// A UTC instant truncated to whole milliseconds
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create from epoch milliseconds; out-of-range values map to the epoch
    pub fn from_millis(ms: i64) -> Self {
        Self(DateTime::from_timestamp_millis(ms).unwrap_or_default())
    }

    /// Create from a JavaScript `Date.now()` value (fraction dropped)
    #[inline]
    pub fn from_js_millis(ms: f64) -> Self {
        Self::from_millis(ms.floor() as i64)
    }

    /// Current wall-clock time
    pub fn now() -> Self {
        Self::from_millis(Utc::now().timestamp_millis())
    }

    /// Epoch milliseconds
    #[inline]
    pub fn as_millis(self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Format as `YYYY-MM-DDTHH:MM:SS.sssZ`
    pub fn to_iso_string(self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = DateTime::parse_from_rfc3339(s)?;
        // Finer digits than milliseconds are dropped.
        DateTime::from_timestamp_millis(parsed.timestamp_millis())
            .map(Timestamp)
            .ok_or(TimestampError::OutOfRange)
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
