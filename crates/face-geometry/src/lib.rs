//! Facial Landmark Geometry
//!
//! Converts a positionally-indexed landmark frame into the scalar signals
//! used by the driver-state detectors:
//! - EAR (eye aspect ratio) - lower means more closed
//! - MAR (mouth aspect ratio) - higher means more open
//! - nose-tip x - normalized head-yaw proxy

mod extractor;
mod indices;
mod point;

pub use extractor::{GeometryExtractor, Ratios};
pub use indices::FaceIndices;
pub use point::Point;

use thiserror::Error;

/// Geometry extraction errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Landmark frame is shorter than a referenced index
    #[error("Landmark index {index} out of bounds (frame has {len} points)")]
    MissingLandmark { index: usize, len: usize },
}
