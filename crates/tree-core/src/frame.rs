//! Render-tick driver.
//!
//! `FrameContext` owns the scene and reads the shared state cells once per
//! displayed frame. It eases everything toward the active formation and
//! keeps a flat instance buffer that a renderer can upload as-is.

use glam::{Mat4, Quat};
use instant::Instant;
use std::ops::Range;

use crate::constants::{FOLIAGE_SIZE_BASE, FOLIAGE_SIZE_SPAN};
use crate::interpolator::{StateInterpolator, TickReport};
use crate::population::{Population, PopulationKind};
use crate::rotation::{GroupRotation, StarSpin};
use crate::scene::TreeScene;
use crate::state::{RotationCell, StateCell, TreeState};

/// Sprite shapes understood by the particle shader.
pub const SHAPE_DISC: f32 = 0.0;
pub const SHAPE_STAR: f32 = 1.0;

/// One billboard instance. Layout matches the particle shader's instance
/// attributes.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub pos: [f32; 3],
    pub scale: f32,
    pub color: [f32; 4],
    pub phase: f32,
    pub shape: f32,
}

fn instance_for(pop: &Population, i: usize) -> InstanceData {
    let e = &pop.elements()[i];
    let (scale, shape) = match pop.kind {
        PopulationKind::Foliage => (FOLIAGE_SIZE_BASE + FOLIAGE_SIZE_SPAN * e.phase, SHAPE_DISC),
        PopulationKind::Star => (pop.scale, SHAPE_STAR),
        PopulationKind::Ornament | PopulationKind::Pearl => (pop.scale, SHAPE_DISC),
    };
    InstanceData {
        pos: e.current.to_array(),
        scale,
        color: [e.color_rgb[0], e.color_rgb[1], e.color_rgb[2], 1.0],
        phase: e.phase,
        shape,
    }
}

/// What a renderer needs after one tick.
#[derive(Debug)]
pub struct FrameOutput<'a> {
    pub instances: &'a [InstanceData],
    /// Group model matrix (palm-steered rotation plus the fixed offset).
    pub model: Mat4,
    /// Orientation applied to star-shaped sprites; uploaded as a uniform so
    /// spinning never touches the instance buffer.
    pub star_rotation: Quat,
    /// Current state, for instruction overlay highlighting.
    pub state: TreeState,
    /// Whether any instance changed since the previous frame. False once
    /// the scene has settled.
    pub upload: bool,
    pub report: TickReport,
}

pub struct FrameContext {
    pub scene: TreeScene,
    pub interpolator: StateInterpolator,
    pub group: GroupRotation,
    pub star_spin: StarSpin,
    state: StateCell,
    rotation: RotationCell,
    instances: Vec<InstanceData>,
    ranges: Vec<Range<usize>>,
    last_instant: Instant,
}

impl FrameContext {
    pub fn new(scene: TreeScene, state: StateCell, rotation: RotationCell) -> Self {
        let mut instances = Vec::with_capacity(scene.element_count());
        let mut ranges = Vec::with_capacity(scene.populations().len());
        for pop in scene.populations() {
            let start = instances.len();
            instances.extend((0..pop.len()).map(|i| instance_for(pop, i)));
            ranges.push(start..instances.len());
        }
        Self {
            scene,
            interpolator: StateInterpolator::new(),
            group: GroupRotation::default(),
            star_spin: StarSpin::default(),
            state,
            rotation,
            instances,
            ranges,
            last_instant: Instant::now(),
        }
    }

    pub fn instances(&self) -> &[InstanceData] {
        &self.instances
    }

    /// Tick using wall-clock time since the previous call.
    pub fn frame(&mut self) -> FrameOutput<'_> {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        self.advance(dt.as_secs_f32())
    }

    /// Tick by an explicit frame time.
    pub fn advance(&mut self, dt_sec: f32) -> FrameOutput<'_> {
        let state = self.state.get();
        let signal = self.rotation.get();

        self.group.step(signal, state, dt_sec);
        self.star_spin.step(state, dt_sec);
        let report = self
            .interpolator
            .tick(self.scene.populations_mut(), state, dt_sec);

        let mut upload = false;
        for (pop, range) in self.scene.populations_mut().iter_mut().zip(&self.ranges) {
            if !pop.take_dirty() {
                continue;
            }
            for (i, slot) in self.instances[range.clone()].iter_mut().enumerate() {
                *slot = instance_for(pop, i);
            }
            upload = true;
        }

        FrameOutput {
            instances: &self.instances,
            model: self.group.model_matrix(),
            star_rotation: self.star_spin.quat(),
            state,
            upload,
            report,
        }
    }

    /// Swap the message; the next tick re-uploads the affected instances.
    pub fn set_message(&mut self, message: &str) -> bool {
        self.scene.set_message(message)
    }
}
