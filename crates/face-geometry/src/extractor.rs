//! Ratio Extraction
//!
//! 6-point EAR per Soukupova & Cech: (|p1-p5| + |p2-p4|) / (2 * |p0-p3|),
//! averaged over both eyes. MAR is the inner-lip gap over mouth width.

use serde::{Deserialize, Serialize};

use crate::{FaceIndices, GeometryError, Point};

/// Minimum mouth width accepted before the ratio divides
const MIN_MOUTH_WIDTH: f64 = 1e-6;

/// Per-frame derived ratios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ratios {
    /// Eye aspect ratio, mean of both eyes
    pub ear: f64,
    /// Mouth aspect ratio
    pub mar: f64,
    /// Nose-tip x in [0,1], head-yaw proxy
    pub nose_x: f64,
}

/// Stateless ratio extractor bound to a fixed index set
#[derive(Debug, Clone, Default)]
pub struct GeometryExtractor {
    indices: FaceIndices,
}

impl GeometryExtractor {
    /// Create an extractor with the given index set
    pub fn new(indices: FaceIndices) -> Self {
        Self { indices }
    }

    /// Compute EAR, MAR, and the head-yaw proxy for one landmark frame
    pub fn extract(&self, landmarks: &[Point]) -> Result<Ratios, GeometryError> {
        let idx = &self.indices;

        let left = eye_aspect_ratio(landmarks, &idx.left_eye)?;
        let right = eye_aspect_ratio(landmarks, &idx.right_eye)?;
        let ear = (left + right) / 2.0;

        let vertical = point_at(landmarks, idx.upper_lip)?
            .distance(&point_at(landmarks, idx.lower_lip)?);
        let width = point_at(landmarks, idx.mouth_left)?
            .distance(&point_at(landmarks, idx.mouth_right)?)
            .max(MIN_MOUTH_WIDTH);
        let mar = vertical / width;

        let nose_x = point_at(landmarks, idx.nose_tip)?.x;

        Ok(Ratios { ear, mar, nose_x })
    }
}

fn point_at(landmarks: &[Point], index: usize) -> Result<Point, GeometryError> {
    landmarks
        .get(index)
        .copied()
        .ok_or(GeometryError::MissingLandmark {
            index,
            len: landmarks.len(),
        })
}

/// 6-point EAR for one eye; a zero horizontal span yields 0
fn eye_aspect_ratio(landmarks: &[Point], eye: &[usize; 6]) -> Result<f64, GeometryError> {
    let p0 = point_at(landmarks, eye[0])?;
    let p1 = point_at(landmarks, eye[1])?;
    let p2 = point_at(landmarks, eye[2])?;
    let p3 = point_at(landmarks, eye[3])?;
    let p4 = point_at(landmarks, eye[4])?;
    let p5 = point_at(landmarks, eye[5])?;

    let horizontal = p0.distance(&p3);
    if horizontal == 0.0 {
        return Ok(0.0);
    }

    Ok((p1.distance(&p5) + p2.distance(&p4)) / (2.0 * horizontal))
}
