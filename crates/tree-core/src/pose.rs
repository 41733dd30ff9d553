//! Synthetic hand skeletons.
//!
//! Produces detector-shaped landmark sets for canned poses so the classifier
//! can be driven without a camera (simulation front-ends, tests).

use glam::{Vec2, Vec3};

use crate::gesture::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandPose {
    Fist,
    Open,
    Pinch,
    /// All fingers extended with thumb and index tips touching.
    PinchOpen,
}

impl HandPose {
    pub const ALL: [HandPose; 4] = [
        HandPose::Fist,
        HandPose::Open,
        HandPose::Pinch,
        HandPose::PinchOpen,
    ];
}

// Hand layout relative to the wrist, image axes (y grows downward).
const MCP_Y: f32 = -0.10;
const FINGER_X: [f32; 4] = [-0.03, -0.01, 0.01, 0.03];
const EXTENDED: [f32; 3] = [-0.035, -0.06, -0.08]; // pip, dip, tip offsets from MCP
const CURLED: [f32; 3] = [-0.03, -0.005, 0.02];
const THUMB: [[f32; 2]; 4] = [[-0.03, -0.02], [-0.055, -0.04], [-0.075, -0.055], [-0.09, -0.07]];
const PINCH_GAP: f32 = 0.01;

fn finger(points: &mut [Vec3; LANDMARK_COUNT], mcp: usize, x: f32, offsets: &[f32; 3]) {
    points[mcp] = Vec3::new(x, MCP_Y, 0.0);
    for (k, dy) in offsets.iter().enumerate() {
        points[mcp + 1 + k] = Vec3::new(x, MCP_Y + dy, 0.0);
    }
}

/// Landmarks for `pose` with the palm center at `palm` (normalized image
/// coordinates).
pub fn synthesize_hand(pose: HandPose, palm: Vec2) -> HandSample {
    let mut p = [Vec3::ZERO; LANDMARK_COUNT];
    for (i, xy) in THUMB.iter().enumerate() {
        p[THUMB_CMC + i] = Vec3::new(xy[0], xy[1], 0.0);
    }
    let mcps = [INDEX_MCP, MIDDLE_MCP, RING_MCP, PINKY_MCP];
    for (f, &mcp) in mcps.iter().enumerate() {
        let open = matches!(pose, HandPose::Open | HandPose::PinchOpen);
        finger(&mut p, mcp, FINGER_X[f], if open { &EXTENDED } else { &CURLED });
    }
    match pose {
        HandPose::Pinch => {
            // index reaches over to the thumb
            p[INDEX_TIP] = p[THUMB_TIP] + Vec3::new(PINCH_GAP, 0.0, 0.0);
        }
        HandPose::PinchOpen => {
            // thumb reaches up to the extended index
            p[THUMB_TIP] = p[INDEX_TIP] - Vec3::new(PINCH_GAP, 0.0, 0.0);
        }
        HandPose::Fist | HandPose::Open => {}
    }

    let center = (p[WRIST] + p[MIDDLE_MCP]) * 0.5;
    let shift = palm.extend(0.0) - center;
    for v in p.iter_mut() {
        *v += shift;
    }
    HandSample { landmarks: p }
}
