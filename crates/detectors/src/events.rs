//! Event Vocabulary

use serde::{Deserialize, Serialize};

/// Alert-worthy driver-state events
///
/// Normal blinks are counted in the session metrics but never become
/// events; everything here is routed to the alert policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    /// Eyes closed continuously beyond the drowsy hold
    Drowsiness,

    /// Blink longer than the long-blink duration
    LongBlink,

    /// Mouth held open beyond the adaptive yawn threshold
    Yawn,

    /// Head turned away from center beyond the hold
    Distraction,
}

impl EventKind {
    /// Human-readable label used for log records
    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Drowsiness => "Drowsiness - eyes closed",
            EventKind::LongBlink => "Long blink",
            EventKind::Yawn => "Yawn detected",
            EventKind::Distraction => "Driver distracted (looking away)",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
