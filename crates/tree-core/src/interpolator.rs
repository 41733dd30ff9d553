//! Per-frame easing of every element toward the active formation.
//!
//! Motion is exponential smoothing: each tick covers a fixed fraction of the
//! remaining distance, where the fraction is the element's per-frame speed
//! rescaled by the real frame time. Elements within `epsilon` of their target
//! are left untouched so a settled scene produces no redraws.

use glam::Vec3;

use crate::constants::{MIX_EPSILON, MIX_RATE, REFERENCE_FPS, SETTLE_EPSILON};
use crate::population::{Element, Motion, Population};
use crate::state::TreeState;

/// Convert a per-frame speed into this frame's lerp fraction.
#[inline]
pub fn frame_rate(speed: f32, dt_sec: f32) -> f32 {
    (speed * REFERENCE_FPS * dt_sec).clamp(0.0, 1.0)
}

/// Scene-wide chaos→tree and →word weights for blended populations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MixWeights {
    pub tree: f32,
    pub word: f32,
}

impl MixWeights {
    /// Resting weights for `state`.
    pub fn target(state: TreeState) -> Self {
        Self {
            tree: if state == TreeState::Formed { 1.0 } else { 0.0 },
            word: if state == TreeState::Word { 1.0 } else { 0.0 },
        }
    }

    /// Ease both weights toward `state`'s target by `rate`. Returns whether
    /// either weight moved.
    pub fn ease(&mut self, state: TreeState, rate: f32) -> bool {
        let target = Self::target(state);
        let a = ease_scalar(&mut self.tree, target.tree, rate);
        let b = ease_scalar(&mut self.word, target.word, rate);
        a || b
    }

    /// Displayed position: chaos→tree by `tree`, then that result →word by
    /// `word`. The word stage always wins at full weight.
    #[inline]
    pub fn blend(&self, e: &Element) -> Vec3 {
        e.chaos.lerp(e.tree, self.tree).lerp(e.word, self.word)
    }
}

fn ease_scalar(value: &mut f32, target: f32, rate: f32) -> bool {
    let diff = target - *value;
    if diff.abs() <= MIX_EPSILON {
        let moved = *value != target;
        *value = target;
        return moved;
    }
    *value += diff * rate;
    true
}

/// Summary of one interpolation tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub moved: usize,
    pub settled: usize,
    pub dirty_populations: usize,
}

#[derive(Clone, Debug)]
pub struct StateInterpolator {
    pub mix: MixWeights,
    pub epsilon: f32,
    pub mix_rate: f32,
}

impl Default for StateInterpolator {
    fn default() -> Self {
        Self {
            mix: MixWeights::default(),
            epsilon: SETTLE_EPSILON,
            mix_rate: MIX_RATE,
        }
    }
}

impl StateInterpolator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move one element toward its target for `state`. Returns `false`
    /// without touching the element when it is already settled.
    #[inline]
    pub fn step_element(&self, e: &mut Element, state: TreeState, rate: f32) -> bool {
        let dest = e.target(state);
        if e.current.distance(dest) <= self.epsilon {
            return false;
        }
        e.current = e.current.lerp(dest, rate);
        true
    }

    /// Step every element of a per-element population with one shared lerp
    /// fraction. Returns the number of elements that moved.
    pub fn step_population_at_rate(
        &self,
        pop: &mut Population,
        state: TreeState,
        rate: f32,
    ) -> usize {
        self.step_elements(pop, state, |_| rate)
    }

    fn step_elements(
        &self,
        pop: &mut Population,
        state: TreeState,
        rate_of: impl Fn(&Element) -> f32,
    ) -> usize {
        let mut moved = 0;
        for e in pop.elements_mut() {
            let rate = rate_of(e);
            if self.step_element(e, state, rate) {
                moved += 1;
            }
        }
        if moved > 0 {
            pop.mark_dirty();
        }
        moved
    }

    /// Step a population by frame time. Blended populations follow the
    /// current mix weights instead of their own speeds; `mix_moved` tells
    /// whether the weights changed this tick. A blended population whose
    /// word targets were regenerated is recomputed regardless.
    pub fn step_population(
        &self,
        pop: &mut Population,
        state: TreeState,
        dt_sec: f32,
        mix_moved: bool,
    ) -> usize {
        match pop.motion {
            Motion::PerElement => self.step_elements(pop, state, |e| frame_rate(e.speed, dt_sec)),
            Motion::Blended => {
                let reblend = pop.take_reblend();
                if !mix_moved && !reblend {
                    return 0;
                }
                let mix = self.mix;
                for e in pop.elements_mut() {
                    e.current = mix.blend(e);
                }
                pop.mark_dirty();
                pop.len()
            }
        }
    }

    /// Advance the mix weights and every population by one render tick.
    pub fn tick(&mut self, populations: &mut [Population], state: TreeState, dt_sec: f32) -> TickReport {
        let mix_moved = self.mix.ease(state, frame_rate(self.mix_rate, dt_sec));
        let mut report = TickReport::default();
        for pop in populations.iter_mut() {
            let moved = self.step_population(pop, state, dt_sec, mix_moved);
            report.moved += moved;
            report.settled += pop.len() - moved;
            if pop.is_dirty() {
                report.dirty_populations += 1;
            }
        }
        log::trace!(
            "[interp] state={} moved={} settled={} mix=({:.3},{:.3})",
            state,
            report.moved,
            report.settled,
            self.mix.tree,
            self.mix.word
        );
        report
    }
}
