use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const GOOD_LOG: &str = "\
Run 1 of 1
Client c1 ID: 1
   write ops = 100 Avg Latency: 0.005
Client c1 ID: 2
   write ops = 200 Avg Latency: 0.010
";

const DUPLICATE_LOG: &str = "\
Run 1 of 1
Client c1 ID: 1
   write ops = 100 Avg Latency: 0.005
Client c1 ID: 1
   write ops = 200 Avg Latency: 0.010
";

fn sfs_latency(args: &[&Path]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sfs-latency"))
        .args(args)
        .output()
        .expect("run sfs-latency")
}

fn write_log(dir: &Path, name: &str, text: &str) -> PathBuf {
    let p = dir.join(name);
    std::fs::write(&p, text).unwrap();
    p
}

#[test]
fn writes_report_to_new_file() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "a.sfsc", GOOD_LOG);
    let out = dir.path().join("out.csv");

    let res = sfs_latency(&[Path::new("-i"), &log, Path::new("-o"), &out]);
    assert_eq!(res.status.code(), Some(0));

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("c1,1,write,5.0,7.5,7.5,10.0,"));
}

#[test]
fn report_goes_to_stdout_without_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "a.sfsc", GOOD_LOG);

    let res = sfs_latency(&[Path::new("-i"), &log]);
    assert_eq!(res.status.code(), Some(0));
    let stdout = String::from_utf8(res.stdout).unwrap();
    assert!(stdout.starts_with("Client,Iteration,Operation,"));
}

#[test]
fn existing_output_file_exits_2_and_is_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "a.sfsc", GOOD_LOG);
    let out = write_log(dir.path(), "out.csv", "keep");

    let res = sfs_latency(&[Path::new("-i"), &log, Path::new("-o"), &out]);
    assert_eq!(res.status.code(), Some(2));
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "keep");
}

#[test]
fn missing_output_directory_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "a.sfsc", GOOD_LOG);
    let out = dir.path().join("missing").join("out.csv");

    let res = sfs_latency(&[Path::new("-i"), &log, Path::new("-o"), &out]);
    assert_eq!(res.status.code(), Some(2));
    assert!(!out.exists());
}

#[test]
fn duplicate_slot_exits_3_without_creating_output() {
    let dir = tempfile::tempdir().unwrap();
    let log = write_log(dir.path(), "a.sfsc", DUPLICATE_LOG);
    let out = dir.path().join("out.csv");

    let res = sfs_latency(&[Path::new("-i"), &log, Path::new("-o"), &out]);
    assert_eq!(res.status.code(), Some(3));
    assert!(!out.exists());
    assert!(String::from_utf8_lossy(&res.stderr).contains("duplicate detail block"));
}

#[test]
fn duplicate_slot_across_files_exits_3_with_parallel_parse() {
    let dir = tempfile::tempdir().unwrap();
    let a = write_log(dir.path(), "a.sfsc", GOOD_LOG);
    let b = write_log(dir.path(), "b.sfsc", GOOD_LOG);
    let out = dir.path().join("out.csv");

    let res = sfs_latency(&[
        Path::new("-j"),
        Path::new("2"),
        Path::new("-i"),
        &a,
        &b,
        Path::new("-o"),
        &out,
    ]);
    assert_eq!(res.status.code(), Some(3));
    assert!(!out.exists());
}

#[test]
fn unreadable_input_exits_1_without_creating_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");

    let res = sfs_latency(&[Path::new("-i"), &dir.path().join("absent.sfsc"), Path::new("-o"), &out]);
    assert_eq!(res.status.code(), Some(1));
    assert!(!out.exists());
}
