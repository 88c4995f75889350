use crate::diagnostics::{self, Location};
use crate::op::OpKind;
use crate::sfsc::row::{OpSample, ThreadProfile};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// One operation line of a detail block.
///
/// Example:
///         write ops =       1523   Avg Latency:   0.004812
///    open file ops =          0   Avg Latency:   Not collected
///
/// Capture:
/// 1) operation name, optionally followed by the word "file"
/// 2) op count (captured loosely, validated afterwards)
/// 3) average latency in seconds, or "Not collected"
const OP_LINE_RE: &str = r"(?im)(?:^|\s)\s*(\w+(?: file)?)\s+ops\s*=\s*(\S+)\s+Avg Latency:\s*(Not collected|\S+)";

static OP_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(OP_LINE_RE).expect("operation line pattern is valid"));

const NOT_COLLECTED: &str = "not collected";

/// Parse one thread's detail block into a profile.
///
/// Unknown operation names are dropped, malformed counts and latencies become
/// zero. An operation listed twice keeps its last values.
pub fn parse_details(thread_id: &str, text: &str) -> ThreadProfile {
    parse_details_at(None, thread_id, text)
}

/// Same as [`parse_details`], with a location used to prefix diagnostics.
pub fn parse_details_at(at: Option<&Location<'_>>, thread_id: &str, text: &str) -> ThreadProfile {
    let mut samples = BTreeMap::new();

    for caps in OP_LINE.captures_iter(text) {
        let name = caps[1].to_lowercase();
        let Some(op) = OpKind::from_log_name(&name) else {
            log::warn!(
                "{}",
                diagnostics::warn_message(at, format!("invalid op \"{}\" encountered, ignoring", name))
            );
            continue;
        };

        let count = parse_count(&caps[2]).unwrap_or_else(|| {
            log::warn!(
                "{}",
                diagnostics::warn_message(
                    at,
                    format!("invalid op count {} for op {}, setting to zero", &caps[2], op)
                )
            );
            0
        });

        let latency_ms = parse_latency_ms(&caps[3]).unwrap_or_else(|| {
            log::warn!(
                "{}",
                diagnostics::warn_message(
                    at,
                    format!("invalid latency {} for op {}, setting to zero", &caps[3], op)
                )
            );
            0.0
        });

        samples.insert(op, OpSample { count, latency_ms });
    }

    ThreadProfile::new(thread_id, samples)
}

fn parse_count(s: &str) -> Option<u64> {
    s.parse().ok()
}

/// Seconds as printed by the client, converted to milliseconds.
///
/// "Not collected" is a normal value and maps to zero; `None` means the text
/// was not a usable number.
fn parse_latency_ms(s: &str) -> Option<f64> {
    if s.eq_ignore_ascii_case(NOT_COLLECTED) {
        return Some(0.0);
    }
    let secs: f64 = s.parse().ok()?;
    let ms = secs * 1000.0;
    if !ms.is_finite() || ms < 0.0 {
        return None;
    }
    Some(ms)
}
