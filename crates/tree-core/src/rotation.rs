//! Orientation of the whole tree group and of the star.

use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::constants::*;
use crate::state::{RotationSignal, TreeState};

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Yaw/pitch of the tree group, steered by the palm position when a hand is
/// present and auto-rotating otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupRotation {
    pub yaw: f32,
    pub pitch: f32,
}

impl GroupRotation {
    pub fn step(&mut self, signal: RotationSignal, state: TreeState, dt_sec: f32) {
        if signal.present {
            let target_yaw = (signal.x - 0.5) * GROUP_YAW_RANGE;
            let target_pitch = (signal.y - 0.5) * GROUP_PITCH_RANGE;
            self.yaw = lerp(self.yaw, target_yaw, dt_sec * GROUP_FOLLOW_RATE);
            self.pitch = lerp(self.pitch, target_pitch, dt_sec * GROUP_FOLLOW_RATE);
        } else {
            let drift = if state == TreeState::Formed {
                GROUP_DRIFT_FORMED
            } else {
                GROUP_DRIFT_IDLE
            };
            self.yaw += dt_sec * drift;
            self.pitch = lerp(self.pitch, 0.0, dt_sec * GROUP_RECENTER_RATE);
        }
    }

    /// Model matrix for the group, including its fixed downward offset.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(group_offset_vec3())
            * Mat4::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

/// Star spin: a slow regal yaw when assembled, a tumble in chaos.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StarSpin {
    pub euler: Vec3,
}

impl StarSpin {
    pub fn step(&mut self, state: TreeState, dt_sec: f32) {
        match state {
            TreeState::Formed | TreeState::Word => self.euler.y += dt_sec * STAR_SPIN_FORMED,
            TreeState::Chaos => {
                self.euler.x += dt_sec * STAR_SPIN_CHAOS;
                self.euler.z += dt_sec * STAR_SPIN_CHAOS;
            }
        }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.euler.x, self.euler.y, self.euler.z)
    }
}
