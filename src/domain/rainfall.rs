// Rainfall aggregation domain model
use super::reading::Reading;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub day: String,
    pub total: f64,
}

/// Per-day rainfall sums, kept in the order the days were first seen
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DailyTotals {
    days: Vec<DailyTotal>,
}

impl DailyTotals {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyTotal> {
        self.days.iter()
    }

    pub fn labels(&self) -> Vec<String> {
        self.days.iter().map(|d| d.day.clone()).collect()
    }

    pub fn totals(&self) -> Vec<f64> {
        self.days.iter().map(|d| d.total).collect()
    }
}

/// Group readings by day key and sum their values.
///
/// Never fails: an empty slice yields empty totals.
pub fn process_rainfall(readings: &[Reading]) -> DailyTotals {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut days: Vec<DailyTotal> = Vec::new();

    for reading in readings {
        let key = reading.day_key();
        match index.get(key) {
            Some(&i) => days[i].total += reading.value,
            None => {
                index.insert(key, days.len());
                days.push(DailyTotal {
                    day: key.to_string(),
                    total: reading.value,
                });
            }
        }
    }

    DailyTotals { days }
}
