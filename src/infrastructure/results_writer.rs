// Persists the statistics report as pretty-printed JSON
use crate::domain::statistics::StatsReport;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

pub fn write_report_to<W: Write>(writer: W, report: &StatsReport) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    report
        .serialize(&mut serializer)
        .context("Failed to serialize statistics")?;
    Ok(())
}

pub fn write_report(path: &Path, report: &StatsReport) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_report_to(&mut writer, report)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!("Wrote {} parameter records to {}", report.parameter_count(), path.display());
    Ok(())
}
