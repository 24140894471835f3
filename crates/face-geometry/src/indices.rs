//! Fixed Landmark Index Sets
//!
//! Index layout follows the MediaPipe FaceMesh topology (468 points).
//! Eye index ordering is (outer corner, upper lid x2, inner corner,
//! lower lid x2), matching the 6-point EAR formula.

use serde::{Deserialize, Serialize};

/// Landmark indices for the features the extractor reads
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceIndices {
    /// Left eye, 6 points in EAR order
    pub left_eye: [usize; 6],
    /// Right eye, 6 points in EAR order
    pub right_eye: [usize; 6],
    /// Upper inner-lip center
    pub upper_lip: usize,
    /// Lower inner-lip center
    pub lower_lip: usize,
    /// Left mouth corner
    pub mouth_left: usize,
    /// Right mouth corner
    pub mouth_right: usize,
    /// Nose tip (head-yaw proxy)
    pub nose_tip: usize,
}

impl Default for FaceIndices {
    fn default() -> Self {
        Self {
            left_eye: [33, 160, 158, 133, 153, 144],
            right_eye: [362, 385, 387, 263, 373, 380],
            upper_lip: 13,
            lower_lip: 14,
            mouth_left: 61,
            mouth_right: 291,
            nose_tip: 1,
        }
    }
}

impl FaceIndices {
    /// Largest index referenced, for frame-length checks
    pub fn max_index(&self) -> usize {
        let eyes = self
            .left_eye
            .iter()
            .chain(self.right_eye.iter())
            .copied()
            .max()
            .unwrap_or(0);
        eyes.max(self.upper_lip)
            .max(self.lower_lip)
            .max(self.mouth_left)
            .max(self.mouth_right)
            .max(self.nose_tip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_index_is_right_eye_upper_lid() {
        let indices = FaceIndices::default();
        assert_eq!(indices.max_index(), 387);
    }
}
