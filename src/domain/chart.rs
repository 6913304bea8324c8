// Chart configuration domain model
//
// Serializes to the configuration object a Chart.js `new Chart(ctx, config)` call expects.
use super::rainfall::DailyTotals;
use serde::Serialize;

pub const DATASET_LABEL: &str = "Rainfall (mm/day)";
pub const Y_AXIS_ID: &str = "yRain";
pub const Y_AXIS_TITLE: &str = "Rainfall (mm)";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(rename = "yAxisID")]
    pub y_axis_id: String,
    pub border_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub interaction: Interaction,
    pub scales: Scales,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Interaction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub position: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub mode: &'static str,
    pub intersect: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scales {
    #[serde(rename = "yRain")]
    pub y_rain: Axis,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    pub begin_at_zero: bool,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

impl BarChart {
    /// Bar chart of daily rainfall, one bar per day in mapping order
    pub fn rainfall(totals: &DailyTotals) -> Self {
        let shared_index = Interaction {
            mode: "index",
            intersect: false,
        };

        Self {
            kind: "bar",
            data: ChartData {
                labels: totals.labels(),
                datasets: vec![Dataset {
                    label: DATASET_LABEL.to_string(),
                    data: totals.totals(),
                    y_axis_id: Y_AXIS_ID.to_string(),
                    border_width: 1,
                }],
            },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                plugins: Plugins {
                    legend: Legend { position: "bottom" },
                    tooltip: shared_index.clone(),
                },
                interaction: shared_index,
                scales: Scales {
                    y_rain: Axis {
                        begin_at_zero: true,
                        title: AxisTitle {
                            display: true,
                            text: Y_AXIS_TITLE.to_string(),
                        },
                    },
                },
            },
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.data.labels
    }

    /// Values of the single rainfall series
    pub fn series(&self) -> &[f64] {
        self.data
            .datasets
            .first()
            .map(|d| d.data.as_slice())
            .unwrap_or(&[])
    }
}
