use crate::op::OpKind;
use std::collections::BTreeMap;

/// Counters one thread reported for one operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpSample {
    pub count: u64,
    /// Average latency in milliseconds; 0.0 when the client did not collect it.
    pub latency_ms: f64,
}

/// Per-operation counters from a single thread's detail block in one run.
///
/// Count and latency live in the same entry, so an operation is either fully
/// present or absent.
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadProfile {
    /// Digits exactly as printed after `ID:`; `007` and `7` are different threads.
    pub thread_id: String,
    samples: BTreeMap<OpKind, OpSample>,
}

impl ThreadProfile {
    pub fn new(thread_id: impl Into<String>, samples: BTreeMap<OpKind, OpSample>) -> Self {
        Self {
            thread_id: thread_id.into(),
            samples,
        }
    }

    pub fn sample(&self, op: OpKind) -> Option<&OpSample> {
        self.samples.get(&op)
    }

    pub fn op_count(&self, op: OpKind) -> Option<u64> {
        self.samples.get(&op).map(|s| s.count)
    }

    pub fn latency_ms(&self, op: OpKind) -> Option<f64> {
        self.samples.get(&op).map(|s| s.latency_ms)
    }

    pub fn ops(&self) -> impl Iterator<Item = (OpKind, &OpSample)> {
        self.samples.iter().map(|(op, s)| (*op, s))
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
