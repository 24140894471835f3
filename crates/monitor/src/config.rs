//! Monitor Configuration

use face_geometry::FaceIndices;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors, checked once at session construction
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Value outside its allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Duration or count that must be positive
    #[error("{0} must be positive")]
    NonPositive(&'static str),
}

/// All session tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    /// EMA smoothing factor for the EAR and MAR streams, in (0, 1]
    pub ema_alpha: f64,

    /// EAR below this counts as eyes closed
    pub ear_threshold: f64,

    /// Blink at least this long is a long blink (ms)
    pub long_blink_ms: u64,

    /// Continuous closure at least this long is drowsiness (ms)
    pub drowsy_ms: u64,

    /// Mouth opening must exceed baseline times this factor
    pub mar_rel_factor: f64,

    /// Mouth must stay open this long to count as a yawn (ms)
    pub yawn_hold_ms: u64,

    /// Half-width of the centered head band around nose-x 0.5
    pub head_turn_offset: f64,

    /// Head must stay turned this long to count as distraction (ms)
    pub head_turn_ms: u64,

    /// Minimum interval between dispatched alerts (ms)
    pub alert_cooldown_ms: u64,

    /// Minimum interval between log records (ms)
    pub log_cooldown_ms: u64,

    /// Frames collected before the mouth baseline freezes
    pub baseline_frames: usize,

    /// Landmark index layout
    pub indices: FaceIndices,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            ema_alpha: 0.18,
            ear_threshold: 0.23,
            long_blink_ms: 550,
            drowsy_ms: 1500,
            mar_rel_factor: 2.0,
            yawn_hold_ms: 700,
            head_turn_offset: 0.22,
            head_turn_ms: 1200,
            alert_cooldown_ms: 3500,
            log_cooldown_ms: 1200,
            baseline_frames: 50,
            indices: FaceIndices::default(),
        }
    }
}

impl MonitorConfig {
    /// Lower holds and a higher EAR threshold (fires earlier)
    pub fn strict() -> Self {
        Self {
            ear_threshold: 0.25,
            drowsy_ms: 1000,
            yawn_hold_ms: 500,
            head_turn_ms: 800,
            ..Default::default()
        }
    }

    /// Higher holds (fires later)
    pub fn lenient() -> Self {
        Self {
            drowsy_ms: 2500,
            yawn_hold_ms: 1000,
            head_turn_ms: 2000,
            ..Default::default()
        }
    }

    /// Validate every tunable; called by the session constructor
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.ema_alpha.is_finite() || self.ema_alpha <= 0.0 || self.ema_alpha > 1.0 {
            return Err(ConfigError::OutOfRange {
                field: "ema_alpha",
                value: self.ema_alpha,
                min: 0.0,
                max: 1.0,
            });
        }
        check_positive_f64("ear_threshold", self.ear_threshold)?;
        check_positive_f64("mar_rel_factor", self.mar_rel_factor)?;
        if self.head_turn_offset < 0.0 || self.head_turn_offset >= 0.5 {
            return Err(ConfigError::OutOfRange {
                field: "head_turn_offset",
                value: self.head_turn_offset,
                min: 0.0,
                max: 0.5,
            });
        }
        check_positive_ms("long_blink_ms", self.long_blink_ms)?;
        check_positive_ms("drowsy_ms", self.drowsy_ms)?;
        check_positive_ms("yawn_hold_ms", self.yawn_hold_ms)?;
        check_positive_ms("head_turn_ms", self.head_turn_ms)?;
        check_positive_ms("alert_cooldown_ms", self.alert_cooldown_ms)?;
        check_positive_ms("log_cooldown_ms", self.log_cooldown_ms)?;
        if self.baseline_frames == 0 {
            return Err(ConfigError::NonPositive("baseline_frames"));
        }
        Ok(())
    }
}

fn check_positive_f64(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        Err(ConfigError::NonPositive(field))
    } else {
        Ok(())
    }
}

fn check_positive_ms(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        Err(ConfigError::NonPositive(field))
    } else {
        Ok(())
    }
}
