//! Alert Policy Implementation
//!
//! Two independent monotonic clocks: the alert cooldown gates dispatch,
//! the log cooldown debounces the event log. A suppressed alert still
//! goes through the log path (tagged "(suppressed)") and does not touch
//! the alert clock.

use detectors::EventKind;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Alert policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertPolicyConfig {
    /// Minimum interval between two dispatched alerts (ms)
    pub alert_cooldown_ms: u64,
    /// Minimum interval between two log records (ms)
    pub log_cooldown_ms: u64,
}

impl Default for AlertPolicyConfig {
    fn default() -> Self {
        Self {
            alert_cooldown_ms: 3500,
            log_cooldown_ms: 1200,
        }
    }
}

/// One alert decision, dispatched or suppressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub kind: EventKind,
    pub timestamp_ms: u64,
    pub suppressed: bool,
}

/// One debounced log record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp_ms: u64,
    pub message: String,
}

/// Rate-limiting and scoring policy over detector events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertPolicy {
    config: AlertPolicyConfig,
    last_alert_ms: Option<u64>,
    last_log_ms: Option<u64>,
    score: u8,
}

impl AlertPolicy {
    /// Create a policy with a full alertness score
    pub fn new(config: AlertPolicyConfig) -> Self {
        Self {
            config,
            last_alert_ms: None,
            last_log_ms: None,
            score: 100,
        }
    }

    /// Handle one fired event at `now_ms`
    ///
    /// Returns the alert record plus the log record the event produced,
    /// if the log debounce admitted one.
    pub fn trigger(&mut self, kind: EventKind, now_ms: u64) -> (AlertRecord, Option<LogRecord>) {
        if let Some(last) = self.last_alert_ms {
            if now_ms.saturating_sub(last) < self.config.alert_cooldown_ms {
                debug!(%kind, now_ms, "alert suppressed by cooldown");
                let log = self.log_event(format!("{kind} (suppressed)"), now_ms);
                return (
                    AlertRecord {
                        kind,
                        timestamp_ms: now_ms,
                        suppressed: true,
                    },
                    log,
                );
            }
        }

        self.last_alert_ms = Some(now_ms);
        self.score = self.score.saturating_sub(penalty(kind));
        info!(%kind, now_ms, score = self.score, "alert dispatched");
        let log = self.log_event(kind.label().to_string(), now_ms);

        (
            AlertRecord {
                kind,
                timestamp_ms: now_ms,
                suppressed: false,
            },
            log,
        )
    }

    /// Debounced log path; `None` when inside the log cooldown
    pub fn log_event(&mut self, message: String, now_ms: u64) -> Option<LogRecord> {
        if let Some(last) = self.last_log_ms {
            if now_ms.saturating_sub(last) < self.config.log_cooldown_ms {
                return None;
            }
        }
        self.last_log_ms = Some(now_ms);
        Some(LogRecord {
            timestamp_ms: now_ms,
            message,
        })
    }

    /// Current alertness score in [0, 100]
    pub fn score(&self) -> u8 {
        self.score
    }
}

impl Default for AlertPolicy {
    fn default() -> Self {
        Self::new(AlertPolicyConfig::default())
    }
}

/// Score penalty per event kind
fn penalty(kind: EventKind) -> u8 {
    match kind {
        EventKind::Drowsiness => 20,
        EventKind::Yawn => 10,
        EventKind::Distraction => 8,
        EventKind::LongBlink => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_alert_dispatches() {
        let mut policy = AlertPolicy::default();
        let (record, log) = policy.trigger(EventKind::Yawn, 0);
        assert!(!record.suppressed);
        assert_eq!(policy.score(), 90);
        assert_eq!(log.unwrap().message, "Yawn detected");
    }

    #[test]
    fn test_second_alert_within_cooldown_is_suppressed_and_logged() {
        let mut policy = AlertPolicy::default();
        policy.trigger(EventKind::Drowsiness, 0);
        let (record, log) = policy.trigger(EventKind::Yawn, 2000);
        assert!(record.suppressed);
        // Suppressed alerts never touch the score
        assert_eq!(policy.score(), 80);
        assert_eq!(log.unwrap().message, "Yawn detected (suppressed)");
    }

    #[test]
    fn test_suppression_does_not_extend_the_cooldown() {
        let mut policy = AlertPolicy::default();
        policy.trigger(EventKind::Drowsiness, 0);
        policy.trigger(EventKind::Yawn, 2000); // suppressed
        // 3500 after the dispatched alert, not after the suppressed one
        let (record, _) = policy.trigger(EventKind::Yawn, 3500);
        assert!(!record.suppressed);
    }

    #[test]
    fn test_alert_and_log_clocks_are_independent() {
        let mut policy = AlertPolicy::default();
        let (_, log) = policy.trigger(EventKind::Drowsiness, 0);
        assert!(log.is_some());

        // Inside the alert cooldown and the log cooldown: suppressed, no log
        let (record, log) = policy.trigger(EventKind::Yawn, 1000);
        assert!(record.suppressed);
        assert!(log.is_none());

        // Still inside the alert cooldown, log debounce has expired
        let (record, log) = policy.trigger(EventKind::Yawn, 1300);
        assert!(record.suppressed);
        assert_eq!(log.unwrap().message, "Yawn detected (suppressed)");
    }

    #[test]
    fn test_score_penalties_by_kind() {
        for (kind, expected) in [
            (EventKind::Drowsiness, 80),
            (EventKind::Yawn, 90),
            (EventKind::Distraction, 92),
            (EventKind::LongBlink, 95),
        ] {
            let mut policy = AlertPolicy::default();
            policy.trigger(kind, 0);
            assert_eq!(policy.score(), expected, "{kind:?}");
        }
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let mut policy = AlertPolicy::default();
        let mut now = 0;
        for _ in 0..10 {
            policy.trigger(EventKind::Drowsiness, now);
            now += 4000;
        }
        assert_eq!(policy.score(), 0);
    }
}
