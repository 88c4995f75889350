use crate::Result;
use crate::render::rows::ReportRow;
use anyhow::Context;
use std::io::Write;

/// Pretty-printed JSON array of report rows; missing deviations are `null`.
pub fn write_json<W: Write>(rows: &[ReportRow], mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, rows).context("write json report")?;
    writeln!(out).context("write json report")?;
    Ok(())
}
