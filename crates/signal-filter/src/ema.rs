//! Exponential Moving Average Filter

use serde::{Deserialize, Serialize};

/// EMA filter over a scalar stream
///
/// The first observation passes through unchanged so a cold start carries
/// no bias toward an arbitrary seed value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaFilter {
    alpha: f64,
    state: Option<f64>,
}

impl EmaFilter {
    /// Create a filter with the given smoothing factor
    pub fn new(alpha: f64) -> Self {
        Self { alpha, state: None }
    }

    /// Feed one observation and return the smoothed value
    pub fn apply(&mut self, value: f64) -> f64 {
        let next = match self.state {
            None => value,
            Some(prev) => self.alpha * value + (1.0 - self.alpha) * prev,
        };
        self.state = Some(next);
        next
    }

    /// Current smoothed value, `None` before the first observation
    pub fn value(&self) -> Option<f64> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_output_equals_first_input() {
        let mut filter = EmaFilter::new(0.18);
        assert_eq!(filter.apply(0.31), 0.31);
        assert_eq!(filter.value(), Some(0.31));
    }

    #[test]
    fn test_converges_to_constant_input() {
        let mut filter = EmaFilter::new(0.18);
        filter.apply(0.9);
        let mut out = 0.0;
        for _ in 0..500 {
            out = filter.apply(0.2);
        }
        assert!((out - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_no_state_before_first_observation() {
        let filter = EmaFilter::new(0.18);
        assert_eq!(filter.value(), None);
    }

    proptest! {
        /// Each step stays within [min(prev, cur), max(prev, cur)]
        #[test]
        fn prop_output_bounded_by_prev_and_cur(
            alpha in 0.0f64..=1.0,
            first in -1.0f64..1.0,
            inputs in prop::collection::vec(-1.0f64..1.0, 1..64),
        ) {
            let mut filter = EmaFilter::new(alpha);
            let mut prev = filter.apply(first);
            for cur in inputs {
                let out = filter.apply(cur);
                prop_assert!(out >= prev.min(cur) - 1e-12);
                prop_assert!(out <= prev.max(cur) + 1e-12);
                prev = out;
            }
        }
    }
}
