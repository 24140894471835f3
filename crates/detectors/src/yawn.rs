//! Mouth Opening State Machine
//!
//! Inert until the resting-MAR baseline exists. The open threshold is
//! relative to that baseline, so it adapts per subject without retuning.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum MouthState {
    Closed,
    Open { since_ms: u64 },
}

/// Yawn detector over the smoothed MAR stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YawnDetector {
    rel_factor: f64,
    hold_ms: u64,
    state: MouthState,
}

impl YawnDetector {
    /// Create a detector firing after `hold_ms` above `baseline * rel_factor`
    pub fn new(rel_factor: f64, hold_ms: u64) -> Self {
        Self {
            rel_factor,
            hold_ms,
            state: MouthState::Closed,
        }
    }

    /// Feed one smoothed MAR sample; returns true when a yawn fires
    ///
    /// While `baseline` is `None` the detector reports nothing and holds
    /// no state.
    pub fn update(&mut self, mar: f64, baseline: Option<f64>, now_ms: u64) -> bool {
        let Some(baseline) = baseline else {
            self.state = MouthState::Closed;
            return false;
        };

        let threshold = baseline * self.rel_factor;

        match self.state {
            MouthState::Closed => {
                if mar > threshold {
                    debug!(now_ms, "mouth open beyond yawn threshold");
                    self.state = MouthState::Open { since_ms: now_ms };
                }
                false
            }
            MouthState::Open { since_ms } => {
                if mar > threshold {
                    if now_ms.saturating_sub(since_ms) >= self.hold_ms {
                        // Reset so the same continuous opening cannot re-fire
                        self.state = MouthState::Closed;
                        return true;
                    }
                    false
                } else {
                    // Short or partial opening, discarded silently
                    self.state = MouthState::Closed;
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inert_without_baseline() {
        let mut det = YawnDetector::new(2.0, 700);
        for t in (0..2000).step_by(50) {
            assert!(!det.update(0.9, None, t));
        }
    }

    #[test]
    fn test_yawn_fires_after_hold() {
        let mut det = YawnDetector::new(2.0, 700);
        let baseline = Some(0.05);
        // MAR 0.11 > 0.05 * 2.0
        assert!(!det.update(0.11, baseline, 0));
        assert!(!det.update(0.11, baseline, 400));
        assert!(det.update(0.11, baseline, 800));
        // Same opening cannot immediately re-fire
        assert!(!det.update(0.11, baseline, 850));
        assert!(!det.update(0.11, baseline, 1500));
        assert!(det.update(0.11, baseline, 1550));
    }

    #[test]
    fn test_short_opening_is_discarded() {
        let mut det = YawnDetector::new(2.0, 700);
        let baseline = Some(0.05);
        assert!(!det.update(0.11, baseline, 0));
        assert!(!det.update(0.11, baseline, 400));
        // Mouth closes before the hold elapses
        assert!(!det.update(0.04, baseline, 500));
        // A new opening must re-accumulate the full hold
        assert!(!det.update(0.11, baseline, 600));
        assert!(!det.update(0.11, baseline, 1200));
        assert!(det.update(0.11, baseline, 1300));
    }

    #[test]
    fn test_at_threshold_is_not_open() {
        let mut det = YawnDetector::new(2.0, 700);
        // Exactly baseline * factor must not count as open
        assert!(!det.update(0.10, Some(0.05), 0));
        assert!(!det.update(0.10, Some(0.05), 1000));
    }
}
