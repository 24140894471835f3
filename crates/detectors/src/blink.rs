//! Eye Closure State Machine
//!
//! Open -> Closed on the EAR threshold. A closure that outlasts the
//! drowsy hold fires `Drowsiness` and forces the state back to Open,
//! skipping blink bookkeeping for that closure. A closure that ends
//! naturally reports its duration so the session can count it (and
//! escalate to `LongBlink` past the long-blink duration).

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum EyeState {
    Open,
    Closed { since_ms: u64 },
}

/// Outcome of one eye-closure update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyeEvent {
    /// Continuous closure reached the drowsy hold
    Drowsiness,
    /// A closure ended; `long` when the duration reached the long-blink bar
    Blink { duration_ms: u64, long: bool },
}

/// Blink / drowsiness detector over the smoothed EAR stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlinkDetector {
    ear_threshold: f64,
    long_blink_ms: u64,
    drowsy_ms: u64,
    state: EyeState,
}

impl BlinkDetector {
    /// Create a detector with the given threshold and holds
    pub fn new(ear_threshold: f64, long_blink_ms: u64, drowsy_ms: u64) -> Self {
        Self {
            ear_threshold,
            long_blink_ms,
            drowsy_ms,
            state: EyeState::Open,
        }
    }

    /// Feed one smoothed EAR sample at `now_ms`
    pub fn update(&mut self, ear: f64, now_ms: u64) -> Option<EyeEvent> {
        match self.state {
            EyeState::Open => {
                if ear < self.ear_threshold {
                    debug!(now_ms, "eyes closed");
                    self.state = EyeState::Closed { since_ms: now_ms };
                }
                None
            }
            EyeState::Closed { since_ms } => {
                // Drowsiness wins over a same-frame reopen; the closure's
                // blink bookkeeping is skipped entirely.
                if now_ms.saturating_sub(since_ms) >= self.drowsy_ms {
                    self.state = EyeState::Open;
                    return Some(EyeEvent::Drowsiness);
                }

                if ear >= self.ear_threshold {
                    let duration_ms = now_ms.saturating_sub(since_ms);
                    self.state = EyeState::Open;
                    return Some(EyeEvent::Blink {
                        duration_ms,
                        long: duration_ms >= self.long_blink_ms,
                    });
                }

                None
            }
        }
    }

    /// Whether the eyes are currently tracked as closed
    pub fn is_closed(&self) -> bool {
        matches!(self.state, EyeState::Closed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> BlinkDetector {
        BlinkDetector::new(0.23, 550, 1500)
    }

    #[test]
    fn test_short_blink_counted_not_long() {
        let mut det = detector();
        assert_eq!(det.update(0.30, 0), None);
        assert_eq!(det.update(0.10, 100), None);
        assert_eq!(det.update(0.10, 200), None);
        let event = det.update(0.30, 300).unwrap();
        assert_eq!(
            event,
            EyeEvent::Blink {
                duration_ms: 200,
                long: false
            }
        );
    }

    #[test]
    fn test_600ms_closure_is_one_long_blink() {
        let mut det = detector();
        det.update(0.10, 0);
        for t in (100..=600).step_by(100) {
            assert_eq!(det.update(0.10, t), None);
        }
        let event = det.update(0.30, 700).unwrap();
        assert_eq!(
            event,
            EyeEvent::Blink {
                duration_ms: 700,
                long: true
            }
        );
        // No trailing second event
        assert_eq!(det.update(0.30, 800), None);
    }

    #[test]
    fn test_drowsiness_fires_once_at_boundary_and_timer_resets() {
        let mut det = detector();
        det.update(0.10, 0);
        assert_eq!(det.update(0.10, 1400), None);
        assert_eq!(det.update(0.10, 1500), Some(EyeEvent::Drowsiness));

        // State was forced open; the continued closure starts a new timer
        assert_eq!(det.update(0.10, 1533), None);
        assert_eq!(det.update(0.10, 3000), None);
        assert_eq!(det.update(0.10, 3033), Some(EyeEvent::Drowsiness));
    }

    #[test]
    fn test_drowsiness_takes_priority_over_same_frame_reopen() {
        let mut det = detector();
        det.update(0.10, 0);
        // Eyes reopen on the exact frame the drowsy hold elapses
        assert_eq!(det.update(0.30, 1500), Some(EyeEvent::Drowsiness));
    }

    #[test]
    fn test_reopen_after_drowsiness_is_not_a_blink() {
        let mut det = detector();
        det.update(0.10, 0);
        det.update(0.10, 1500);
        // Bookkeeping for the fired closure was skipped
        assert_eq!(det.update(0.30, 1600), None);
    }
}
