// Reading domain model
use serde::Deserialize;

/// Number of leading characters of an ISO-8601 timestamp that form the day key ("YYYY-MM-DD")
pub const DAY_KEY_LEN: usize = 10;

/// One telemetry sample reported by a station
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reading {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    pub value: f64,
}

impl Reading {
    #[cfg(test)]
    pub fn new(date_time: impl Into<String>, value: f64) -> Self {
        Self {
            date_time: date_time.into(),
            value,
        }
    }

    /// Calendar day this reading is bucketed into.
    ///
    /// Taken verbatim from the timestamp string, so no timezone normalization happens.
    /// Shorter timestamps are used whole.
    pub fn day_key(&self) -> &str {
        match self.date_time.char_indices().nth(DAY_KEY_LEN) {
            Some((idx, _)) => &self.date_time[..idx],
            None => &self.date_time,
        }
    }
}
