//! Head Turn State Machine
//!
//! Uses the nose-tip x coordinate as a yaw proxy: outside the centered
//! band around 0.5 for longer than the hold means the driver is looking
//! away.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum HeadState {
    Centered,
    Turned { since_ms: u64 },
}

/// Sustained head-turn detector over the nose-x stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadTurnDetector {
    offset: f64,
    hold_ms: u64,
    state: HeadState,
}

impl HeadTurnDetector {
    /// Create a detector with the centered-band half-width and hold
    pub fn new(offset: f64, hold_ms: u64) -> Self {
        Self {
            offset,
            hold_ms,
            state: HeadState::Centered,
        }
    }

    /// Feed one nose-x sample; returns true when a sustained turn fires
    pub fn update(&mut self, nose_x: f64, now_ms: u64) -> bool {
        let turned = nose_x < 0.5 - self.offset || nose_x > 0.5 + self.offset;

        match self.state {
            HeadState::Centered => {
                if turned {
                    debug!(now_ms, nose_x, "head turned away from center");
                    self.state = HeadState::Turned { since_ms: now_ms };
                }
                false
            }
            HeadState::Turned { since_ms } => {
                if !turned {
                    // Back in the band: accumulated hold time is discarded
                    self.state = HeadState::Centered;
                    return false;
                }
                if now_ms.saturating_sub(since_ms) >= self.hold_ms {
                    // Hold must re-accumulate before the next fire
                    self.state = HeadState::Centered;
                    return true;
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sustained_turn_fires_once_then_reaccumulates() {
        let mut det = HeadTurnDetector::new(0.22, 1200);
        assert!(!det.update(0.9, 0));
        assert!(!det.update(0.9, 600));
        assert!(det.update(0.9, 1200));
        // Still turned: band re-entry never happened, but the timer restarted
        assert!(!det.update(0.9, 1300));
        assert!(!det.update(0.9, 2400));
        assert!(det.update(0.9, 2500));
    }

    #[test]
    fn test_returning_to_center_discards_hold() {
        let mut det = HeadTurnDetector::new(0.22, 1200);
        assert!(!det.update(0.1, 0));
        assert!(!det.update(0.1, 1100));
        // Centered just before the hold elapses
        assert!(!det.update(0.5, 1150));
        assert!(!det.update(0.1, 1200));
        assert!(!det.update(0.1, 2300));
        assert!(det.update(0.1, 2400));
    }

    #[test]
    fn test_both_sides_of_band_count_as_turned() {
        let mut left = HeadTurnDetector::new(0.22, 1200);
        assert!(!left.update(0.27, 0));
        assert!(left.update(0.27, 1200));

        let mut right = HeadTurnDetector::new(0.22, 1200);
        assert!(!right.update(0.73, 0));
        assert!(right.update(0.73, 1200));
    }

    #[test]
    fn test_band_edges_are_centered() {
        let mut det = HeadTurnDetector::new(0.22, 1200);
        assert!(!det.update(0.28, 0));
        assert!(!det.update(0.28, 5000));
        assert!(!det.update(0.72, 10000));
        assert!(!det.update(0.72, 20000));
    }
}
