//! Shared state passed between the render-tick and gesture-sampling drivers.
//!
//! Both drivers run on one logical thread, so the cells are `Rc<Cell<_>>`
//! handles rather than locks. Each driver receives a clone at construction;
//! nothing here is a global.

use glam::{Mat4, Vec3};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::constants::NO_HAND_ROTATION;

/// Target formation of every population.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TreeState {
    Chaos,
    /// The app opens with the tree assembled.
    #[default]
    Formed,
    Word,
}

impl TreeState {
    pub const ALL: [TreeState; 3] = [TreeState::Chaos, TreeState::Formed, TreeState::Word];

    pub fn label(self) -> &'static str {
        match self {
            TreeState::Chaos => "CHAOS",
            TreeState::Formed => "FORMED",
            TreeState::Word => "WORD",
        }
    }
}

impl fmt::Display for TreeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Handle to the process-wide [`TreeState`].
#[derive(Clone, Debug, Default)]
pub struct StateCell(Rc<Cell<TreeState>>);

impl StateCell {
    pub fn new(initial: TreeState) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    #[inline]
    pub fn get(&self) -> TreeState {
        self.0.get()
    }

    /// Commit `state`. Re-committing the current state is a no-op; returns
    /// whether the value changed.
    pub fn commit(&self, state: TreeState) -> bool {
        let prev = self.0.replace(state);
        if prev != state {
            log::info!("[state] {} -> {}", prev, state);
            true
        } else {
            false
        }
    }
}

/// Normalized palm position in `[0,1]²` plus hand presence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationSignal {
    pub x: f32,
    pub y: f32,
    pub present: bool,
}

impl RotationSignal {
    pub const NO_HAND: RotationSignal = RotationSignal {
        x: NO_HAND_ROTATION[0],
        y: NO_HAND_ROTATION[1],
        present: false,
    };

    pub fn hand(x: f32, y: f32) -> Self {
        Self { x, y, present: true }
    }
}

impl Default for RotationSignal {
    fn default() -> Self {
        Self::NO_HAND
    }
}

/// Handle to the latest [`RotationSignal`]; overwritten every sample.
#[derive(Clone, Debug, Default)]
pub struct RotationCell(Rc<Cell<RotationSignal>>);

impl RotationCell {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self) -> RotationSignal {
        self.0.get()
    }

    #[inline]
    pub fn set(&self, signal: RotationSignal) {
        self.0.set(signal);
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Default framing: slightly above the tree, far enough back to keep the
    /// whole chaos cloud in view.
    pub fn overview(aspect: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 4.0, 30.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: 45f32.to_radians(),
            znear: 0.1,
            zfar: 200.0,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
