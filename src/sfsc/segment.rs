use crate::Result;
use crate::diagnostics::Location;
use crate::model::Hosts;
use crate::sfsc::parse::parse_details_at;

use anyhow::Context;
use rayon::prelude::*;
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// Start of a benchmark run, e.g. "Starting Run 2 of 3 ...".
const RUN_MARKER_RE: &str = r"(?i)Run (\d+) of (\d+)";

/// Start of one thread's detail block, e.g. "Client client07 ID: 4311 ...".
///
/// Capture: 1) client name, 2) thread id.
const CLIENT_MARKER_RE: &str = r"(?i)Client\s+(\S+)\s+ID:\s+(\d+)(?:\s|$)";

static RUN_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(RUN_MARKER_RE).expect("run marker pattern is valid"));
static CLIENT_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CLIENT_MARKER_RE).expect("client marker pattern is valid"));

/// Lines collected between one run marker and the next.
struct RunSegment {
    iteration: u64,
    lines: Vec<String>,
}

/// Detail text for one client thread, waiting for the next marker to close it.
struct ClientBlock {
    client: String,
    thread_id: String,
    text: String,
}

/// Segment one sfsc file into `hosts`.
pub fn segment_file(path: &Path, hosts: &mut Hosts) -> Result<()> {
    let file = File::open(path).with_context(|| format!("read sfsc file {}", path.display()))?;
    segment_reader(&path.display().to_string(), BufReader::new(file), hosts)
}

/// Segment every file, in order, into a fresh set of hosts.
///
/// With `jobs > 1` files are parsed on a worker pool, each into its own partial
/// result; the partials are then merged in argument order so the outcome is the
/// same as a sequential pass.
pub fn segment_files(paths: &[PathBuf], jobs: usize) -> Result<Hosts> {
    let mut hosts = Hosts::new();

    if jobs <= 1 || paths.len() <= 1 {
        for path in paths {
            segment_file(path, &mut hosts)?;
        }
        return Ok(hosts);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("build parser thread pool")?;
    let partials: Vec<Hosts> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let mut partial = Hosts::new();
                segment_file(path, &mut partial)?;
                Ok(partial)
            })
            .collect::<Result<Vec<_>>>()
    })?;

    for (path, partial) in paths.iter().zip(partials) {
        hosts
            .merge(partial)
            .with_context(|| format!("merge {}", path.display()))?;
    }
    Ok(hosts)
}

/// Single forward pass over a log.
///
/// Everything before the first run marker is ignored. Each run is cut into
/// client blocks once the next run marker (or the end of input) is reached.
pub fn segment_reader<R: BufRead>(source: &str, mut reader: R, hosts: &mut Hosts) -> Result<()> {
    let mut run: Option<RunSegment> = None;
    let mut buf = Vec::new();
    let mut lno = 0usize;

    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("read {} after line {}", source, lno))?;
        if n == 0 {
            break;
        }
        lno += 1;

        // Client logs are ASCII in practice; tolerate stray bytes rather than abort.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        if let Some(caps) = RUN_MARKER.captures(line) {
            let iteration: u64 = caps[1]
                .parse()
                .with_context(|| format!("bad run number at {}:{}: {}", source, lno, &caps[1]))?;
            log::debug!("{}:{}: run {} of {}", source, lno, iteration, &caps[2]);

            if let Some(prev) = run.take() {
                split_clients(source, prev, hosts)?;
            }
            run = Some(RunSegment {
                iteration,
                lines: Vec::new(),
            });
            continue;
        }

        if let Some(r) = run.as_mut() {
            r.lines.push(line.to_string());
        }
    }

    if let Some(prev) = run.take() {
        split_clients(source, prev, hosts)?;
    }
    Ok(())
}

/// Cut one run into client blocks and record each into `hosts`.
fn split_clients(source: &str, run: RunSegment, hosts: &mut Hosts) -> Result<()> {
    let at = Location::file(source).run(run.iteration);
    let mut current: Option<ClientBlock> = None;
    let mut blocks = 0usize;

    for line in &run.lines {
        if let Some(caps) = CLIENT_MARKER.captures(line) {
            // Kept as printed: ids are opaque and may carry leading zeros.
            let thread_id = caps[2].to_string();

            if let Some(block) = current.take() {
                flush_block(at, run.iteration, block, hosts)?;
                blocks += 1;
            }
            current = Some(ClientBlock {
                client: caps[1].to_string(),
                thread_id,
                text: String::new(),
            });
            continue;
        }

        if let Some(block) = current.as_mut() {
            block.text.push_str(line);
            block.text.push('\n');
        }
    }

    // The last block has no marker after it.
    match current {
        Some(block) => {
            flush_block(at, run.iteration, block, hosts)?;
            blocks += 1;
        }
        None => log::debug!("{}: no client detail blocks", at),
    }

    log::debug!("{}: {} detail blocks", at, blocks);
    Ok(())
}

fn flush_block(at: Location<'_>, iteration: u64, block: ClientBlock, hosts: &mut Hosts) -> Result<()> {
    let at = at.thread(&block.client, &block.thread_id);
    let profile = parse_details_at(Some(&at), &block.thread_id, &block.text);
    hosts
        .record(&block.client, iteration, &block.thread_id, profile)
        .with_context(|| format!("{}", at))?;
    Ok(())
}
