//! Frame Outcome Types

use alerting::{AlertRecord, LogRecord};
use serde::{Deserialize, Serialize};

/// Session status reported with each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MonitorStatus {
    /// No usable landmarks this frame; nothing was updated
    NoFace,
    /// Baseline warm-up still in progress; yawn detection disabled
    Calibrating,
    /// Normal operation
    #[default]
    Monitoring,
    /// A drowsiness event fired this frame
    Drowsy,
}

/// Everything one `process_frame` call produced, for the external
/// renderer and log UI
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameOutcome {
    /// Whether usable landmarks were present
    pub face_detected: bool,

    /// Session status for this frame
    pub status: MonitorStatus,

    /// Smoothed EAR, `None` until the first detected frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothed_ear: Option<f64>,

    /// Smoothed MAR, `None` until the first detected frame
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smoothed_mar: Option<f64>,

    /// Alert decisions made this frame, in detector order
    pub events: Vec<AlertRecord>,

    /// Debounced log records emitted this frame
    pub log: Vec<LogRecord>,
}

impl FrameOutcome {
    /// Outcome for a frame with no usable landmarks
    pub(crate) fn no_face() -> Self {
        Self {
            face_detected: false,
            status: MonitorStatus::NoFace,
            ..Default::default()
        }
    }

    /// Whether any alert was dispatched (not merely suppressed)
    pub fn has_dispatched_alert(&self) -> bool {
        self.events.iter().any(|e| !e.suppressed)
    }
}
