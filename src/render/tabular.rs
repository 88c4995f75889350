use crate::Result;
use crate::render::rows::ReportRow;
use anyhow::Context;
use std::io::Write;

pub const CSV_HEADER: [&str; 9] = [
    "Client",
    "Iteration",
    "Operation",
    "min(Latency)",
    "avg(Latency)",
    "median(Latency)",
    "max(latency)",
    "pstdev(Latency)",
    "stdev(Latency)",
];

/// Write the header row followed by one record per row.
///
/// Missing standard deviations become empty cells.
pub fn write_csv<W: Write>(rows: &[ReportRow], out: W) -> Result<()> {
    let mut wr = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    wr.write_record(CSV_HEADER).context("write csv header")?;
    for row in rows {
        wr.serialize(row)
            .with_context(|| format!("write csv row for {} run {}", row.client, row.iteration))?;
    }
    wr.flush().context("flush csv output")?;
    Ok(())
}
