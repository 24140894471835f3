//! Alerting Policy
//!
//! Rate-limits detector events into user-facing alerts and maintains the
//! decaying alertness score. The policy never performs side effects; it
//! returns records for the host to dispatch (sound, speech, rendering).

mod policy;

pub use policy::{AlertPolicy, AlertPolicyConfig, AlertRecord, LogRecord};
