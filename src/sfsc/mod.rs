//! Parsing for SPEC SFS 2014 client logs (sfsc files).
//!
//! Two layers:
//! - `segment` walks a log line by line and cuts it into runs and per-thread
//!   detail blocks.
//! - `parse` turns one detail block into a [`ThreadProfile`].

pub mod parse;
pub mod row;
pub mod segment;

pub use parse::parse_details;
pub use row::{OpSample, ThreadProfile};
pub use segment::{segment_file, segment_reader};
