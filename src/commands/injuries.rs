use anyhow::{bail, Result};
use unicode_width::UnicodeWidthStr;

use crate::config::{Config, DisplayConfig};
use crate::formatting::{fit_width, format_header};
use crate::injuries::{BarDetail, ChartData, InjuryInsights, InjuryMetric, NO_INJURY_DATA};

/// Placeholder for a season that did not record a category
const MISSING_VALUE: &str = "-";

#[derive(Debug, Clone, Default)]
pub struct InjuryOptions {
    pub metric: InjuryMetric,
    /// Season and category of a single bar to describe
    pub bar: Option<(String, String)>,
}

/// Season-by-category table for one metric
pub fn format_chart(chart: &ChartData, display: &DisplayConfig) -> String {
    let mut output = format_header(&chart.title, true, display);
    output.push_str(&chart.description);
    output.push_str("\n\n");

    if chart.is_empty() {
        output.push_str(NO_INJURY_DATA);
        output.push('\n');
        return output;
    }

    let label_width = chart
        .series
        .iter()
        .map(|s| s.label.width())
        .chain(std::iter::once("Category".len()))
        .max()
        .unwrap_or(0);
    let cells: Vec<Vec<String>> = chart
        .series
        .iter()
        .map(|s| {
            s.data
                .iter()
                .map(|v| v.map_or_else(|| MISSING_VALUE.to_string(), |v| chart.metric.format_value(v)))
                .collect()
        })
        .collect();
    let value_width = chart
        .seasons
        .iter()
        .map(|s| s.width())
        .chain(cells.iter().flatten().map(|c| c.len()))
        .max()
        .unwrap_or(0);

    output.push_str(&fit_width("Category", label_width, &display.box_chars.ellipsis));
    for season in &chart.seasons {
        output.push_str(&format!("  {:>w$}", season, w = value_width));
    }
    output.push('\n');

    for (series, row) in chart.series.iter().zip(&cells) {
        output.push_str(&fit_width(&series.label, label_width, &display.box_chars.ellipsis));
        for cell in row {
            output.push_str(&format!("  {:>w$}", cell, w = value_width));
        }
        output.push('\n');
    }
    output
}

/// Find the bar for `season` and `category` by label
pub fn select_bar(chart: &ChartData, season: &str, category: &str) -> Result<BarDetail> {
    let Some(season_index) = chart.seasons.iter().position(|s| s == season) else {
        bail!(
            "Unknown season '{}'. Available: {}",
            season,
            chart.seasons.join(", ")
        );
    };
    let Some(series_index) = chart.series.iter().position(|s| s.label == category) else {
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        bail!("Unknown category '{}'. Available: {}", category, labels.join(", "));
    };
    match chart.detail(season_index, series_index) {
        Some(detail) => Ok(detail),
        None => bail!("No value for {} in {}", category, season),
    }
}

pub fn format_detail(detail: &BarDetail, display: &DisplayConfig) -> String {
    let mut output = format_header("Detail View", false, display);
    output.push_str(&format!("Season: {}\n", detail.season));
    output.push_str(&format!("Category: {}\n", detail.category));
    output.push_str(&format!("Value: {}\n\n", detail.value_text()));
    output.push_str(&detail.explanation());
    output.push('\n');
    output
}

pub fn run(insights: &InjuryInsights, config: &Config, options: InjuryOptions) -> Result<()> {
    let Some(chart) = insights.chart(options.metric) else {
        bail!("No injury dataset for metric '{}'", options.metric);
    };
    let display = config.display();

    print!("{}", format_chart(&chart, &display));
    if let Some((season, category)) = &options.bar {
        let detail = select_bar(&chart, season, category)?;
        println!();
        print!("{}", format_detail(&detail, &display));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundled_chart(metric: InjuryMetric) -> ChartData {
        InjuryInsights::bundled().unwrap().chart(metric).unwrap()
    }

    #[test]
    fn test_format_rates_table() {
        let output = format_chart(&bundled_chart(InjuryMetric::Rates), &DisplayConfig::default());
        let expected = "\
Injury Rates (per 100 hours)
════════════════════════════
Injury rate by season and exposure type

Category  2021-22  2022-23  2023-24
Training      2.4      3.1      1.9
Games         4.8      5.2      4.1
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_format_counts_table() {
        let output = format_chart(&bundled_chart(InjuryMetric::Counts), &DisplayConfig::default());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "Injury Counts by Season and Exposure Type");
        assert_eq!(lines[4], "Category             2021-22  2022-23  2023-24");
        assert_eq!(lines[5], "Training Contact          12       15        9");
        assert_eq!(lines[8], "Games Contact             18       22       16");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_missing_values_use_placeholder() {
        let json = r#"[{"metric": "counts", "title": "T", "description": "D", "data": [
            {"season": "A", "Games": 1}, {"season": "B", "Training": 2}
        ]}]"#;
        let chart = InjuryInsights::from_json_str(json).unwrap().chart(InjuryMetric::Counts).unwrap();
        let output = format_chart(&chart, &DisplayConfig::default());
        assert!(output.ends_with("Category  A  B\nGames     1  -\nTraining  -  2\n"));
    }

    #[test]
    fn test_empty_dataset_message() {
        let json = r#"[{"metric": "time-loss", "title": "T", "description": "D", "data": []}]"#;
        let chart = InjuryInsights::from_json_str(json).unwrap().chart(InjuryMetric::TimeLoss).unwrap();
        assert_eq!(
            format_chart(&chart, &DisplayConfig::default()),
            "T\n═\nD\n\nNo injury data\n"
        );
    }

    #[test]
    fn test_select_bar_and_detail() {
        let chart = bundled_chart(InjuryMetric::TimeLossRates);
        let detail = select_bar(&chart, "2022-23", "Training").unwrap();
        let output = format_detail(&detail, &DisplayConfig::default());
        let expected = "\
Detail View
───────────
Season: 2022-23
Category: Training
Value: 46.5

This represents the injury burden by season and exposure type for the selected period.
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_select_bar_unknown_labels() {
        let chart = bundled_chart(InjuryMetric::Rates);
        let err = select_bar(&chart, "1999-00", "Training").unwrap_err();
        assert!(err.to_string().starts_with("Unknown season '1999-00'"));
        let err = select_bar(&chart, "2021-22", "Games Contact").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unknown category 'Games Contact'. Available: Training, Games"
        );
    }
}
