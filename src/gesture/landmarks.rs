//! Hand landmark data model
//!
//! One observation = 21 MediaPipe hand landmarks in normalized [0,1]
//! coordinates, produced fresh each perception frame and never
//! retained across frames.

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_TIP: usize = 4;
pub const INDEX_PIP: usize = 6;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_TIP: usize = 12;
pub const RING_PIP: usize = 14;
pub const RING_TIP: usize = 16;
pub const PINKY_PIP: usize = 18;
pub const PINKY_TIP: usize = 20;

pub const HAND_LANDMARK_COUNT: usize = 21;

/// (tip, pip) pairs for the four non-thumb fingers
pub const FINGER_JOINTS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single 3D landmark point (normalized coordinates)
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized, grows downward in screen space
    pub z: f32, // Relative depth, unused by the gesture logic
}

impl Landmark {
    /// Planar distance; depth does not participate in any gesture.
    pub fn distance_to(&self, other: &Landmark) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One hand as seen this frame
#[derive(Clone, Copy, Debug)]
pub struct HandObservation {
    pub landmarks: [Landmark; HAND_LANDMARK_COUNT],
}

impl HandObservation {
    /// Builds an observation from 63 flat floats (x, y, z per landmark).
    ///
    /// Fewer than 21 points is a contract violation in the perception
    /// layer, not a recoverable input.
    pub fn from_flat(data: &[f32]) -> Self {
        assert!(
            data.len() >= HAND_LANDMARK_COUNT * 3,
            "hand observation requires {} landmarks, got {} floats",
            HAND_LANDMARK_COUNT,
            data.len()
        );

        let mut landmarks = [Landmark::default(); HAND_LANDMARK_COUNT];
        for i in 0..HAND_LANDMARK_COUNT {
            landmarks[i] = Landmark {
                x: data[i * 3],
                y: data[i * 3 + 1],
                z: data[i * 3 + 2],
            };
        }
        Self { landmarks }
    }

    pub fn landmark(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }
}

// ============================================================================
// TEST CONSTRUCTORS
// ============================================================================

#[cfg(test)]
impl HandObservation {
    /// All landmarks at the origin; classifies as an open hand.
    pub(crate) fn open() -> Self {
        Self {
            landmarks: [Landmark::default(); HAND_LANDMARK_COUNT],
        }
    }

    /// Every non-thumb fingertip curled below its middle joint.
    pub(crate) fn fist() -> Self {
        let mut hand = Self::open();
        for (tip, pip) in FINGER_JOINTS {
            hand.landmarks[pip] = Landmark {
                x: 0.5,
                y: 0.5,
                z: 0.0,
            };
            hand.landmarks[tip] = Landmark {
                x: 0.5,
                y: 0.7,
                z: 0.0,
            };
        }
        hand
    }

    pub(crate) fn with_landmark(mut self, index: usize, x: f32, y: f32) -> Self {
        self.landmarks[index] = Landmark { x, y, z: 0.0 };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_parses_strided_coordinates() {
        let mut data = vec![0.0; HAND_LANDMARK_COUNT * 3];
        data[INDEX_TIP * 3] = 0.25;
        data[INDEX_TIP * 3 + 1] = 0.75;
        data[INDEX_TIP * 3 + 2] = -0.1;

        let hand = HandObservation::from_flat(&data);
        let tip = hand.landmark(INDEX_TIP);
        assert_eq!(tip.x, 0.25);
        assert_eq!(tip.y, 0.75);
        assert_eq!(tip.z, -0.1);
    }

    #[test]
    #[should_panic]
    fn test_from_flat_rejects_short_payload() {
        HandObservation::from_flat(&[0.0; 20]);
    }

    #[test]
    fn test_distance_is_planar() {
        let a = Landmark {
            x: 0.0,
            y: 0.0,
            z: 5.0,
        };
        let b = Landmark {
            x: 0.3,
            y: 0.4,
            z: -5.0,
        };
        assert!((a.distance_to(&b) - 0.5).abs() < 1e-6);
    }
}
