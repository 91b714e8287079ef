use serde::{Deserialize, Serialize};

/// Summary statistics of a series' values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub min: f64,
    pub max: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

/// One row of the stats table shown next to the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsRow {
    pub name: String,
    pub summary: Summary,
}

impl StatsRow {
    /// Tab-separated name, min, max and standard deviation, each number
    /// rounded to `precision` decimals.
    pub fn format(&self, precision: usize) -> String {
        format!(
            "{}\t{:.p$}\t{:.p$}\t{:.p$}",
            self.name,
            self.summary.min,
            self.summary.max,
            self.summary.std_dev,
            p = precision
        )
    }
}
