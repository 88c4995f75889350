//! Per-client, per-iteration latency statistics from SPEC SFS 2014 client logs.
//!
//! Pipeline: [`sfsc`] cuts logs into runs and thread detail blocks, [`model`]
//! stores one profile per (client, run, thread) and reduces across threads,
//! [`render`] flattens the result into report rows.

pub mod diagnostics;
pub mod model;
pub mod op;
pub mod output;
pub mod render;
pub mod sfsc;

pub type Result<T> = anyhow::Result<T>;

pub use model::{DuplicateSlot, HostRuns, Hosts, RunStats};
pub use op::OpKind;
pub use sfsc::{ThreadProfile, parse_details, segment_file, segment_reader};
