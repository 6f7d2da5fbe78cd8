//! Injury analytics: per-season injury metrics by exposure type
//!
//! Each dataset is a list of season rows whose remaining keys are exposure
//! categories. Charts want the transpose, one series per category over the
//! season axis, which is what `InjuryDataset::chart_data` produces.

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{Result, RosterError};
use crate::fixtures::BUNDLED_INJURIES_JSON;

/// Key holding the season label in a dataset row
const SEASON_KEY: &str = "season";

/// Shown in place of a chart whose dataset has no rows
pub const NO_INJURY_DATA: &str = "No injury data";

/// Which injury measure a dataset holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InjuryMetric {
    /// Number of injuries
    #[default]
    Counts,
    /// Injuries per 100 exposure hours
    Rates,
    /// Days lost to injury
    TimeLoss,
    /// Days lost per 100 exposure hours
    TimeLossRates,
}

impl InjuryMetric {
    pub fn all() -> [Self; 4] {
        [Self::Counts, Self::Rates, Self::TimeLoss, Self::TimeLossRates]
    }

    /// Command-line and dataset spelling
    pub fn key(&self) -> &'static str {
        match self {
            Self::Counts => "counts",
            Self::Rates => "rates",
            Self::TimeLoss => "time-loss",
            Self::TimeLossRates => "time-loss-rates",
        }
    }

    /// Short tab label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Counts => "Counts",
            Self::Rates => "Rates",
            Self::TimeLoss => "Time loss",
            Self::TimeLossRates => "Time-loss rates",
        }
    }

    /// Rates carry one decimal, totals none
    pub fn decimals(&self) -> usize {
        match self {
            Self::Counts | Self::TimeLoss => 0,
            Self::Rates | Self::TimeLossRates => 1,
        }
    }

    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }
}

impl fmt::Display for InjuryMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for InjuryMetric {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::all()
            .into_iter()
            .find(|m| m.key() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown injury metric '{}' (expected counts, rates, time-loss or time-loss-rates)",
                    s
                )
            })
    }
}

/// One season of a dataset: category values in document order
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonRow {
    pub season: String,
    pub values: Vec<(String, f64)>,
}

impl SeasonRow {
    pub fn value(&self, category: &str) -> Option<f64> {
        self.values
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, value)| *value)
    }
}

impl<'de> Deserialize<'de> for SeasonRow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RowVisitor;

        impl<'de> Visitor<'de> for RowVisitor {
            type Value = SeasonRow;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a season row mapping categories to numbers")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<SeasonRow, A::Error> {
                let mut season = None;
                let mut values = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key == SEASON_KEY {
                        season = Some(map.next_value::<String>()?);
                    } else if let Some(value) = map.next_value::<Option<f64>>()? {
                        // null means "not recorded"
                        values.push((key, value));
                    }
                }
                let season = season.ok_or_else(|| de::Error::missing_field(SEASON_KEY))?;
                Ok(SeasonRow { season, values })
            }
        }

        deserializer.deserialize_map(RowVisitor)
    }
}

/// A titled injury metric over several seasons
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InjuryDataset {
    pub metric: InjuryMetric,
    pub title: String,
    pub description: String,
    pub data: Vec<SeasonRow>,
}

impl InjuryDataset {
    /// Reshape season rows into one series per category
    ///
    /// Categories appear in first-seen order across all rows. A season that
    /// lacks a category gets `None` in that series.
    pub fn chart_data(&self) -> ChartData {
        let mut labels: Vec<&str> = Vec::new();
        for row in &self.data {
            for (category, _) in &row.values {
                if !labels.contains(&category.as_str()) {
                    labels.push(category.as_str());
                }
            }
        }

        let series = labels
            .into_iter()
            .map(|label| Series {
                label: label.to_string(),
                data: self.data.iter().map(|row| row.value(label)).collect(),
            })
            .collect();

        ChartData {
            metric: self.metric,
            title: self.title.clone(),
            description: self.description.clone(),
            seasons: self.data.iter().map(|row| row.season.clone()).collect(),
            series,
        }
    }
}

/// Values of one category, aligned with `ChartData::seasons`
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub data: Vec<Option<f64>>,
}

/// Chart-ready form of a dataset: a season axis and one series per category
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub metric: InjuryMetric,
    pub title: String,
    pub description: String,
    pub seasons: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty() || self.series.is_empty()
    }

    pub fn value(&self, season: usize, series: usize) -> Option<f64> {
        self.series.get(series)?.data.get(season).copied().flatten()
    }

    /// Largest recorded value, 0 when nothing is recorded
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.data.iter().flatten())
            .fold(0.0, |max: f64, v| max.max(*v))
    }

    /// The single bar at (`season`, `series`), if both indices exist
    pub fn detail(&self, season: usize, series: usize) -> Option<BarDetail> {
        let season_label = self.seasons.get(season)?;
        let category = self.series.get(series)?;
        Some(BarDetail {
            metric: self.metric,
            season: season_label.clone(),
            category: category.label.clone(),
            value: self.value(season, series),
            description: self.description.clone(),
        })
    }
}

/// One season/category cell of a chart
#[derive(Debug, Clone, PartialEq)]
pub struct BarDetail {
    pub metric: InjuryMetric,
    pub season: String,
    pub category: String,
    pub value: Option<f64>,
    pub description: String,
}

impl BarDetail {
    pub fn value_text(&self) -> String {
        self.value
            .map_or_else(|| "n/a".to_string(), |v| self.metric.format_value(v))
    }

    pub fn explanation(&self) -> String {
        format!(
            "This represents the {} for the selected period.",
            self.description.to_lowercase()
        )
    }
}

/// Every injury dataset, at most one per metric
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjuryInsights {
    datasets: Vec<InjuryDataset>,
}

impl InjuryInsights {
    pub fn new(datasets: Vec<InjuryDataset>) -> Result<Self> {
        let mut seen = HashSet::new();
        for dataset in &datasets {
            if !seen.insert(dataset.metric) {
                return Err(RosterError::DuplicateInjuryMetric(dataset.metric));
            }
            if dataset.data.iter().any(|row| row.season.trim().is_empty()) {
                return Err(RosterError::BlankSeason(dataset.metric));
            }
        }
        debug!("Injury insights hold {} datasets", datasets.len());
        Ok(Self { datasets })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let datasets: Vec<InjuryDataset> =
            serde_json::from_str(json).map_err(RosterError::InjuryFormat)?;
        Self::new(datasets)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| RosterError::DatasetIo {
            path: path.display().to_string(),
            source,
        })?;
        let insights = Self::from_json_str(&content)?;
        info!(
            "Loaded {} injury datasets from {}",
            insights.datasets.len(),
            path.display()
        );
        Ok(insights)
    }

    pub fn bundled() -> Result<Self> {
        Self::from_json_str(BUNDLED_INJURIES_JSON)
    }

    /// Load from `path`, or the bundled datasets when none is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => {
                info!("Using bundled injury datasets");
                Self::bundled()
            }
        }
    }

    pub fn datasets(&self) -> &[InjuryDataset] {
        &self.datasets
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn dataset(&self, metric: InjuryMetric) -> Option<&InjuryDataset> {
        self.datasets.iter().find(|d| d.metric == metric)
    }

    pub fn chart(&self, metric: InjuryMetric) -> Option<ChartData> {
        self.dataset(metric).map(InjuryDataset::chart_data)
    }
}
