use clap::{ArgAction, Parser, ValueEnum};
use log::LevelFilter;
use sfs_latency::output::{check_output_path, open_output};
use sfs_latency::sfsc::segment::segment_files;
use sfs_latency::{DuplicateSlot, Result, diagnostics, render};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_FAILURE: u8 = 1;
const EXIT_BAD_OUTPUT: u8 = 2;
const EXIT_DUPLICATE_SLOT: u8 = 3;

#[derive(Parser)]
#[command(name = "sfs-latency")]
#[command(
    about = "Aggregate per-iteration, per-client, per-op latency data from a SPEC SFS 2014 benchmark run",
    long_about = None
)]
struct Cli {
    /// sfsc file(s); may be repeated
    #[arg(short = 'i', long = "input", value_name = "SFSC_FILE", required = true, num_args = 1.., action = ArgAction::Append)]
    inputs: Vec<PathBuf>,

    /// Output file, omit for stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_CSV")]
    output: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Parse input files on this many threads
    #[arg(short = 'j', long, default_value_t = 1)]
    jobs: usize,

    /// More diagnostics on stderr (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // 1) Parse every input before touching the output.
    let hosts = segment_files(&cli.inputs, cli.jobs)?;
    log::info!(
        "parsed {} file(s), {} client(s)",
        cli.inputs.len(),
        hosts.len()
    );

    // 2) Flatten statistics.
    let rows = render::report_rows(&hosts);

    // 3) Serialize.
    let mut out = open_output(cli.output.as_deref())?;
    match cli.format {
        Format::Csv => render::write_csv(&rows, &mut out)?,
        Format::Json => render::write_json(&rows, &mut out)?,
    }
    out.flush()?;

    if let Some(path) = &cli.output {
        log::info!("wrote {} rows to {}", rows.len(), path.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(path) = &cli.output {
        if let Err(e) = check_output_path(path) {
            eprintln!("{}", diagnostics::error_message(e));
            return ExitCode::from(EXIT_BAD_OUTPUT);
        }
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", diagnostics::error_message(format!("{:#}", e)));
            if e.downcast_ref::<DuplicateSlot>().is_some() {
                ExitCode::from(EXIT_DUPLICATE_SLOT)
            } else {
                ExitCode::from(EXIT_FAILURE)
            }
        }
    }
}
