// Console table rendering for a parameter's time series
use crate::domain::reading::TimeSeries;

const TIMESTAMP_HEADER: &str = "Timestamp";
const MIN_VALUE_COLUMN_WIDTH: usize = 12;
const MARKDOWN_VALUE_WIDTH: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStyle {
    Markdown,
    #[default]
    Boxed,
}

/// Render a reading the way it is shown in tables: `20.0`, `21.5`, `1e+16`, `1.5e-05`
pub fn format_reading(value: f64) -> String {
    let shortest = format!("{:?}", value);
    match shortest.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => shortest,
        },
        None => shortest,
    }
}

pub fn render_table(parameter: &str, series: &TimeSeries, style: TableStyle) -> String {
    match style {
        TableStyle::Markdown => render_markdown(parameter, series),
        TableStyle::Boxed => render_boxed(parameter, series),
    }
}

fn render_markdown(parameter: &str, series: &TimeSeries) -> String {
    let mut lines = vec![
        format!("| {} | {} |", TIMESTAMP_HEADER, parameter),
        "| ---------------- |:---------:|".to_string(),
    ];
    for reading in series.iter() {
        lines.push(format!(
            "| {} | {:>width$} |",
            reading.timestamp,
            format_reading(reading.value),
            width = MARKDOWN_VALUE_WIDTH
        ));
    }
    lines.join("\n")
}

fn render_boxed(parameter: &str, series: &TimeSeries) -> String {
    let longest_timestamp = series
        .iter()
        .map(|r| r.timestamp.chars().count())
        .max()
        .unwrap_or(0);
    let ts_width = TIMESTAMP_HEADER.len().max(longest_timestamp);
    let value_width = parameter.chars().count().max(MIN_VALUE_COLUMN_WIDTH);

    // Column widths include one space of padding on each side
    let border = format!("+{}+{}+", "-".repeat(ts_width + 2), "-".repeat(value_width + 2));
    let row = |ts: &str, value: &str| format!("| {:<ts_width$} | {:<value_width$} |", ts, value);

    let mut lines = vec![border.clone(), row(TIMESTAMP_HEADER, parameter), border.clone()];
    for reading in series.iter() {
        lines.push(row(&reading.timestamp, &format_reading(reading.value)));
    }
    lines.push(border);
    lines.join("\n")
}
