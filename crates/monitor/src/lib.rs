//! Driver Vigilance Session
//!
//! Single-threaded, frame-synchronous pipeline:
//! landmarks -> ratios -> smoothed ratios -> baseline -> detectors ->
//! alert policy -> `FrameOutcome`.
//!
//! One wall-clock value per frame pass: the caller supplies `now_ms` and
//! every detector and cooldown comparison inside that pass reuses it.
//! The core performs no side effects; sounds, speech, and rendering are
//! the host's job, driven by the returned records.

mod config;
mod metrics;
mod outcome;

pub use config::{ConfigError, MonitorConfig};
pub use metrics::{Metrics, MetricsSnapshot};
pub use outcome::{FrameOutcome, MonitorStatus};

pub use alerting::{AlertRecord, LogRecord};
pub use detectors::EventKind;
pub use face_geometry::Point;

use alerting::{AlertPolicy, AlertPolicyConfig};
use detectors::{BlinkDetector, EyeEvent, HeadTurnDetector, YawnDetector};
use face_geometry::GeometryExtractor;
use signal_filter::{EmaFilter, MarBaseline};
use tracing::warn;

/// One monitoring session; owns every piece of mutable state
pub struct DriverMonitor {
    extractor: GeometryExtractor,
    ear_filter: EmaFilter,
    mar_filter: EmaFilter,
    baseline: MarBaseline,
    blink: BlinkDetector,
    yawn: YawnDetector,
    head: HeadTurnDetector,
    policy: AlertPolicy,
    metrics: Metrics,
}

impl DriverMonitor {
    /// Create a session; rejects out-of-range configuration
    pub fn new(config: MonitorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            extractor: GeometryExtractor::new(config.indices.clone()),
            ear_filter: EmaFilter::new(config.ema_alpha),
            mar_filter: EmaFilter::new(config.ema_alpha),
            baseline: MarBaseline::new(config.baseline_frames),
            blink: BlinkDetector::new(
                config.ear_threshold,
                config.long_blink_ms,
                config.drowsy_ms,
            ),
            yawn: YawnDetector::new(config.mar_rel_factor, config.yawn_hold_ms),
            head: HeadTurnDetector::new(config.head_turn_offset, config.head_turn_ms),
            policy: AlertPolicy::new(AlertPolicyConfig {
                alert_cooldown_ms: config.alert_cooldown_ms,
                log_cooldown_ms: config.log_cooldown_ms,
            }),
            metrics: Metrics::default(),
        })
    }

    /// Process one landmark frame taken at `now_ms`
    ///
    /// `None` (or a frame missing a required index) short-circuits to the
    /// no-face outcome without mutating any session state.
    pub fn process_frame(&mut self, landmarks: Option<&[Point]>, now_ms: u64) -> FrameOutcome {
        let Some(points) = landmarks else {
            return FrameOutcome::no_face();
        };

        let ratios = match self.extractor.extract(points) {
            Ok(ratios) => ratios,
            Err(err) => {
                warn!(%err, "unusable landmark frame");
                return FrameOutcome::no_face();
            }
        };

        let ear = self.ear_filter.apply(ratios.ear);
        let mar = self.mar_filter.apply(ratios.mar);
        self.baseline.observe(mar);

        let mut outcome = FrameOutcome {
            face_detected: true,
            status: if self.baseline.is_frozen() {
                MonitorStatus::Monitoring
            } else {
                MonitorStatus::Calibrating
            },
            smoothed_ear: Some(ear),
            smoothed_mar: Some(mar),
            events: Vec::new(),
            log: Vec::new(),
        };

        match self.blink.update(ear, now_ms) {
            Some(EyeEvent::Drowsiness) => {
                outcome.status = MonitorStatus::Drowsy;
                self.alert(EventKind::Drowsiness, now_ms, &mut outcome);
            }
            Some(EyeEvent::Blink { duration_ms, long }) => {
                self.metrics.record_blink(duration_ms);
                if long {
                    self.alert(EventKind::LongBlink, now_ms, &mut outcome);
                }
            }
            None => {}
        }

        if self.yawn.update(mar, self.baseline.value(), now_ms) {
            self.metrics.record_yawn();
            self.alert(EventKind::Yawn, now_ms, &mut outcome);
        }

        if self.head.update(ratios.nose_x, now_ms) {
            self.alert(EventKind::Distraction, now_ms, &mut outcome);
        }

        outcome
    }

    /// Running metrics for display components
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot(self.policy.score())
    }

    /// Frozen mouth baseline, `None` during warm-up
    pub fn mouth_baseline(&self) -> Option<f64> {
        self.baseline.value()
    }

    fn alert(&mut self, kind: EventKind, now_ms: u64, outcome: &mut FrameOutcome) {
        let (record, log) = self.policy.trigger(kind, now_ms);
        outcome.events.push(record);
        if let Some(log) = log {
            outcome.log.push(log);
        }
    }
}
