//! Resting Mouth-Ratio Baseline
//!
//! Learns a subject-specific resting MAR from the first N frames of a
//! session. Once frozen the value never changes; yawn detection stays
//! disabled until it exists.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Means below this are treated as a failed warm-up (e.g. mouth occluded)
const MIN_BASELINE: f64 = 0.0001;

/// Substitute baseline when the warm-up mean is implausibly small
const FALLBACK_BASELINE: f64 = 0.02;

/// Freeze-once baseline estimator for the smoothed MAR stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarBaseline {
    target: usize,
    samples: Vec<f64>,
    value: Option<f64>,
}

impl MarBaseline {
    /// Create an estimator that freezes after `target` samples
    pub fn new(target: usize) -> Self {
        Self {
            target,
            samples: Vec::with_capacity(target),
            value: None,
        }
    }

    /// Feed one smoothed MAR sample; a no-op once frozen
    pub fn observe(&mut self, mar: f64) {
        if self.value.is_some() {
            return;
        }

        self.samples.push(mar);
        if self.samples.len() == self.target {
            let mean = self.samples.iter().sum::<f64>() / self.samples.len() as f64;
            let baseline = if mean < MIN_BASELINE {
                FALLBACK_BASELINE
            } else {
                mean
            };
            info!("Mouth baseline frozen at {:.4}", baseline);
            self.value = Some(baseline);
        }
    }

    /// Frozen baseline, `None` during warm-up
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Whether the warm-up phase has completed
    pub fn is_frozen(&self) -> bool {
        self.value.is_some()
    }

    /// Samples accumulated so far (stops growing at the target)
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}
