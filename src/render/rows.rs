use crate::model::Hosts;
use crate::op::OpKind;
use serde::Serialize;

/// One (client, iteration, operation) line of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub client: String,
    pub iteration: u64,
    pub operation: OpKind,
    pub min: f64,
    pub avg: f64,
    pub median: f64,
    pub max: f64,
    pub pstdev: Option<f64>,
    pub stdev: Option<f64>,
}

/// Flatten every client's statistics.
///
/// Order: clients as first encountered, then runs as first encountered, then
/// operations in whitelist order.
pub fn report_rows(hosts: &Hosts) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    for host in hosts.clients() {
        for (iteration, stats) in host.all_statistics() {
            for (operation, s) in stats {
                rows.push(ReportRow {
                    client: host.hostname().to_string(),
                    iteration,
                    operation,
                    min: s.min,
                    avg: s.avg,
                    median: s.median,
                    max: s.max,
                    pstdev: s.pstdev,
                    stdev: s.stdev,
                });
            }
        }
    }
    rows
}
