//! Driver-State Event Detectors
//!
//! Three independent hold-then-fire state machines over the smoothed
//! ratio streams:
//! - Eye closure: blink / long blink / drowsiness
//! - Mouth opening: yawn (adaptive baseline threshold)
//! - Head yaw: sustained turn / distraction
//!
//! Each detector fires at most one event per continuous excursion and
//! resets its hold timer on firing, so a sustained condition must
//! re-accumulate the full hold before firing again.

mod blink;
mod events;
mod head;
mod yawn;

pub use blink::{BlinkDetector, EyeEvent};
pub use events::EventKind;
pub use head::HeadTurnDetector;
pub use yawn::YawnDetector;
