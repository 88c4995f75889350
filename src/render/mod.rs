//! Report emitters: flatten the aggregated hosts into rows and serialize them.

pub mod json;
pub mod rows;
pub mod tabular;

pub use json::write_json;
pub use rows::{ReportRow, report_rows};
pub use tabular::{CSV_HEADER, write_csv};
