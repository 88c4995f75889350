//! Summary statistics over per-thread latencies.

use serde::Serialize;
use std::cmp::Ordering;

/// Latency summary for one operation across the qualifying threads of a run.
///
/// Both standard deviations are `None` when only one thread qualified.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunStats {
    pub threads: usize,
    pub min: f64,
    pub avg: f64,
    pub median: f64,
    pub max: f64,
    pub pstdev: Option<f64>,
    pub stdev: Option<f64>,
}

impl RunStats {
    /// Summarize latencies in milliseconds. Returns `None` for an empty slice.
    pub fn from_latencies(lats: &[f64]) -> Option<Self> {
        if lats.is_empty() {
            return None;
        }

        let mut sorted = lats.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let n = sorted.len();
        let avg = sorted.iter().sum::<f64>() / n as f64;
        let mid = n / 2;
        let median = if n % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        let (pstdev, stdev) = if n < 2 {
            (None, None)
        } else {
            let ss: f64 = sorted.iter().map(|v| (v - avg) * (v - avg)).sum();
            (
                Some((ss / n as f64).sqrt()),
                Some((ss / (n - 1) as f64).sqrt()),
            )
        };

        Some(Self {
            threads: n,
            min: sorted[0],
            avg,
            median,
            max: sorted[n - 1],
            pstdev,
            stdev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_has_no_stats() {
        assert_eq!(RunStats::from_latencies(&[]), None);
    }

    #[test]
    fn three_threads() {
        let s = RunStats::from_latencies(&[30.0, 10.0, 20.0]).unwrap();
        assert_eq!(s.threads, 3);
        assert_eq!((s.min, s.max), (10.0, 30.0));
        assert!(close(s.avg, 20.0));
        assert!(close(s.median, 20.0));
        assert!(close(s.pstdev.unwrap(), (200.0f64 / 3.0).sqrt()));
        assert!(close(s.stdev.unwrap(), 10.0));
    }

    #[test]
    fn even_count_median_is_midpoint() {
        let s = RunStats::from_latencies(&[1.0, 4.0, 2.0, 8.0]).unwrap();
        assert!(close(s.median, 3.0));
    }

    #[test]
    fn single_thread_has_no_deviation() {
        let s = RunStats::from_latencies(&[4.5]).unwrap();
        assert_eq!(s.threads, 1);
        assert_eq!((s.min, s.avg, s.median, s.max), (4.5, 4.5, 4.5, 4.5));
        assert_eq!(s.pstdev, None);
        assert_eq!(s.stdev, None);
    }
}
