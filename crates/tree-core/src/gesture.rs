//! Hand-landmark gesture classification.
//!
//! Consumes the 21-point hand skeleton produced by an external landmark
//! detector (normalized image coordinates, depth in `z`) and derives the palm
//! position plus a discrete [`TreeState`].

use glam::Vec3;

use crate::constants::{FINGER_EXTENSION_RATIO, PINCH_THRESHOLD};
use crate::error::GestureError;
use crate::state::{RotationSignal, TreeState};

// ============================================================================
// HAND LANDMARK INDICES
// ============================================================================

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

pub const LANDMARK_COUNT: usize = 21;

/// (tip, pip) pairs of the four non-thumb fingers.
pub const FINGERS: [(usize, usize); 4] = [
    (INDEX_TIP, INDEX_PIP),
    (MIDDLE_TIP, MIDDLE_PIP),
    (RING_TIP, RING_PIP),
    (PINKY_TIP, PINKY_PIP),
];

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// One detected hand. Consumed immediately, never retained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandSample {
    pub landmarks: [Vec3; LANDMARK_COUNT],
}

impl HandSample {
    /// Build a sample from a detector's landmark list.
    pub fn from_points(points: &[Vec3]) -> Result<Self, GestureError> {
        let landmarks: [Vec3; LANDMARK_COUNT] = points
            .try_into()
            .map_err(|_| GestureError::MalformedSample(points.len()))?;
        Ok(Self { landmarks })
    }

    #[inline]
    pub fn dist(&self, a: usize, b: usize) -> f32 {
        self.landmarks[a].distance(self.landmarks[b])
    }

    /// Palm center, approximated by the wrist / middle-MCP midpoint.
    #[inline]
    pub fn palm(&self) -> Vec3 {
        (self.landmarks[WRIST] + self.landmarks[MIDDLE_MCP]) * 0.5
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    pub pinch_distance: f32,
    pub extension_ratio: f32,
    /// Flip the horizontal palm coordinate. Off by default: the preview the
    /// user sees is already mirrored, so raw `x` matches their motion.
    pub mirror_x: bool,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            pinch_distance: PINCH_THRESHOLD,
            extension_ratio: FINGER_EXTENSION_RATIO,
            mirror_x: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Pinch,
    OpenHand,
    /// Fist or any unrecognised pose.
    Other,
}

impl Gesture {
    pub fn tree_state(self) -> TreeState {
        match self {
            Gesture::Pinch => TreeState::Word,
            Gesture::OpenHand => TreeState::Chaos,
            Gesture::Other => TreeState::Formed,
        }
    }
}

/// Output of one sample: always a rotation, a state only when a hand was seen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub rotation: RotationSignal,
    pub gesture: Option<Gesture>,
}

impl Classification {
    pub fn state(&self) -> Option<TreeState> {
        self.gesture.map(Gesture::tree_state)
    }
}

#[derive(Clone, Debug, Default)]
pub struct GestureClassifier {
    pub thresholds: GestureThresholds,
}

impl GestureClassifier {
    pub fn new(thresholds: GestureThresholds) -> Self {
        Self { thresholds }
    }

    pub fn is_pinch(&self, hand: &HandSample) -> bool {
        hand.dist(THUMB_TIP, INDEX_TIP) < self.thresholds.pinch_distance
    }

    /// A finger is extended when its tip is clearly farther from the wrist
    /// than its PIP joint.
    pub fn is_extended(&self, hand: &HandSample, tip: usize, pip: usize) -> bool {
        hand.dist(WRIST, tip) > hand.dist(WRIST, pip) * self.thresholds.extension_ratio
    }

    pub fn is_open_hand(&self, hand: &HandSample) -> bool {
        FINGERS
            .iter()
            .all(|&(tip, pip)| self.is_extended(hand, tip, pip))
    }

    /// First match wins: pinch, then open hand, then everything else.
    pub fn classify(&self, hand: &HandSample) -> Gesture {
        if self.is_pinch(hand) {
            Gesture::Pinch
        } else if self.is_open_hand(hand) {
            Gesture::OpenHand
        } else {
            Gesture::Other
        }
    }

    pub fn rotation(&self, hand: &HandSample) -> RotationSignal {
        let palm = hand.palm();
        let x = if self.thresholds.mirror_x {
            1.0 - palm.x
        } else {
            palm.x
        };
        RotationSignal::hand(x, palm.y)
    }

    pub fn process(&self, hand: Option<&HandSample>) -> Classification {
        match hand {
            Some(h) => Classification {
                rotation: self.rotation(h),
                gesture: Some(self.classify(h)),
            },
            None => Classification {
                rotation: RotationSignal::NO_HAND,
                gesture: None,
            },
        }
    }
}
