//! Session Metrics

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Recent blink durations kept for display (the running average uses the
/// exact sum over all blinks)
const RECENT_BLINKS_CAP: usize = 256;

/// Append-only counters for the session
#[derive(Debug, Clone, Default)]
pub struct Metrics {
    blink_count: u64,
    yawn_count: u64,
    blink_duration_sum_ms: u64,
    recent_blink_ms: VecDeque<u64>,
}

/// Display snapshot of the running metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub blink_count: u64,
    pub yawn_count: u64,
    /// Rounded running average blink duration, 0 before the first blink
    pub avg_blink_ms: u64,
    pub alertness_score: u8,
}

impl Metrics {
    /// Record one completed blink
    pub fn record_blink(&mut self, duration_ms: u64) {
        self.blink_count += 1;
        self.blink_duration_sum_ms += duration_ms;
        if self.recent_blink_ms.len() == RECENT_BLINKS_CAP {
            self.recent_blink_ms.pop_front();
        }
        self.recent_blink_ms.push_back(duration_ms);
    }

    /// Record one yawn
    pub fn record_yawn(&mut self) {
        self.yawn_count += 1;
    }

    pub fn blink_count(&self) -> u64 {
        self.blink_count
    }

    pub fn yawn_count(&self) -> u64 {
        self.yawn_count
    }

    /// Rounded running average over all recorded blinks
    pub fn avg_blink_ms(&self) -> u64 {
        if self.blink_count == 0 {
            return 0;
        }
        (self.blink_duration_sum_ms + self.blink_count / 2) / self.blink_count
    }

    /// Most recent blink durations, oldest first
    pub fn recent_blinks(&self) -> impl Iterator<Item = u64> + '_ {
        self.recent_blink_ms.iter().copied()
    }

    /// Snapshot for display components
    pub fn snapshot(&self, alertness_score: u8) -> MetricsSnapshot {
        MetricsSnapshot {
            blink_count: self.blink_count,
            yawn_count: self.yawn_count,
            avg_blink_ms: self.avg_blink_ms(),
            alertness_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_is_rounded_running_mean() {
        let mut metrics = Metrics::default();
        metrics.record_blink(100);
        metrics.record_blink(201);
        // (301 + 1) / 2
        assert_eq!(metrics.avg_blink_ms(), 151);
    }

    #[test]
    fn test_average_before_first_blink_is_zero() {
        let metrics = Metrics::default();
        assert_eq!(metrics.avg_blink_ms(), 0);
    }

    #[test]
    fn test_recent_ring_is_bounded() {
        let mut metrics = Metrics::default();
        for i in 0..(RECENT_BLINKS_CAP as u64 + 10) {
            metrics.record_blink(i);
        }
        assert_eq!(metrics.recent_blinks().count(), RECENT_BLINKS_CAP);
        assert_eq!(metrics.recent_blinks().next(), Some(10));
        // The average still covers every blink, not only the ring
        assert_eq!(metrics.blink_count(), RECENT_BLINKS_CAP as u64 + 10);
    }
}
