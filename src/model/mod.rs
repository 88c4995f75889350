//! Aggregation model: thread profiles grouped by client, then run.

pub mod stats;

pub use stats::RunStats;

use crate::op::OpKind;
use crate::sfsc::ThreadProfile;
use indexmap::IndexMap;
use std::collections::{BTreeMap, btree_map};

/// A second detail block for an already populated (client, run, thread) slot.
///
/// This means the log is corrupt or two logs of the same benchmark were fed in
/// together; the whole aggregation is abandoned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duplicate detail block for client {client}, iteration {iteration}, thread {thread_id}")]
pub struct DuplicateSlot {
    pub client: String,
    pub iteration: u64,
    pub thread_id: String,
}

/// Statistics for one run, keyed by operation.
pub type IterationStats = BTreeMap<OpKind, RunStats>;

/// Everything recorded for one client: runs in first-seen order, each holding
/// at most one profile per thread id.
#[derive(Debug, Clone)]
pub struct HostRuns {
    hostname: String,
    iterations: IndexMap<u64, BTreeMap<String, ThreadProfile>>,
}

impl HostRuns {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            iterations: IndexMap::new(),
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn record_thread(
        &mut self,
        iteration: u64,
        thread_id: &str,
        profile: ThreadProfile,
    ) -> Result<(), DuplicateSlot> {
        let threads = self.iterations.entry(iteration).or_default();
        match threads.entry(thread_id.to_string()) {
            btree_map::Entry::Occupied(_) => Err(DuplicateSlot {
                client: self.hostname.clone(),
                iteration,
                thread_id: thread_id.to_string(),
            }),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(profile);
                Ok(())
            }
        }
    }

    /// Runs in the order they were first seen.
    pub fn iterations(&self) -> impl Iterator<Item = u64> + '_ {
        self.iterations.keys().copied()
    }

    pub fn threads(&self, iteration: u64) -> Option<&BTreeMap<String, ThreadProfile>> {
        self.iterations.get(&iteration)
    }

    /// Per-operation statistics for one run.
    ///
    /// Only threads with a positive op count contribute; operations no thread
    /// actually performed are left out. Unknown runs give an empty map.
    pub fn statistics_for(&self, iteration: u64) -> IterationStats {
        let Some(threads) = self.iterations.get(&iteration) else {
            return IterationStats::new();
        };

        let mut lats: BTreeMap<OpKind, Vec<f64>> = BTreeMap::new();
        for profile in threads.values() {
            for (op, sample) in profile.ops() {
                if sample.count > 0 {
                    lats.entry(op).or_default().push(sample.latency_ms);
                }
            }
        }

        lats.into_iter()
            .filter_map(|(op, v)| RunStats::from_latencies(&v).map(|s| (op, s)))
            .collect()
    }

    pub fn all_statistics(&self) -> IndexMap<u64, IterationStats> {
        self.iterations()
            .map(|it| (it, self.statistics_for(it)))
            .collect()
    }
}

/// All clients seen so far, in first-encountered order.
#[derive(Debug, Clone, Default)]
pub struct Hosts {
    hosts: IndexMap<String, HostRuns>,
}

impl Hosts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a thread profile, creating the client on first sight.
    pub fn record(
        &mut self,
        client: &str,
        iteration: u64,
        thread_id: &str,
        profile: ThreadProfile,
    ) -> Result<(), DuplicateSlot> {
        self.hosts
            .entry(client.to_string())
            .or_insert_with(|| HostRuns::new(client))
            .record_thread(iteration, thread_id, profile)
    }

    /// Fold another partial result into this one, in its order.
    pub fn merge(&mut self, other: Hosts) -> Result<(), DuplicateSlot> {
        for (name, host) in other.hosts {
            let target = self
                .hosts
                .entry(name.clone())
                .or_insert_with(|| HostRuns::new(name));
            for (iteration, threads) in host.iterations {
                for (thread_id, profile) in threads {
                    target.record_thread(iteration, &thread_id, profile)?;
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, client: &str) -> Option<&HostRuns> {
        self.hosts.get(client)
    }

    pub fn clients(&self) -> impl Iterator<Item = &HostRuns> {
        self.hosts.values()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
