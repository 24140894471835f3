//! Signal Conditioning
//!
//! Per-frame scalar filters for the ratio streams:
//! - `EmaFilter`: exponential moving average with cold-start pass-through
//! - `MarBaseline`: freeze-once resting mouth-ratio estimator

mod baseline;
mod ema;

pub use baseline::MarBaseline;
pub use ema::EmaFilter;
