//! Elements and the populations that group them.

use glam::{Vec2, Vec3};
use rand::prelude::*;

use crate::config::{OrnamentType, SceneConfig};
use crate::constants::{COLOR_DEEP_GOLD, COLOR_PEARL_CREAM, FOLIAGE_PALETTE, REFERENCE_FPS, STAR_LERP_PER_SEC};
use crate::formation;
use crate::state::TreeState;
use crate::text::GlyphCloud;

/// One animated unit with three fixed targets and a mutable position.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub chaos: Vec3,
    pub tree: Vec3,
    pub word: Vec3,
    pub current: Vec3,
    /// Fraction of the remaining distance covered per frame at 60 fps.
    pub speed: f32,
    /// Per-element random in `[0,1)` for size and twinkle; not used by motion.
    pub phase: f32,
    pub color_rgb: [f32; 3],
}

impl Element {
    /// New element resting at its chaos target.
    pub fn new(chaos: Vec3, tree: Vec3, word: Vec3, speed: f32) -> Self {
        Self {
            chaos,
            tree,
            word,
            current: chaos,
            speed,
            phase: 0.0,
            color_rgb: [1.0, 1.0, 1.0],
        }
    }

    #[inline]
    pub fn target(&self, state: TreeState) -> Vec3 {
        match state {
            TreeState::Word => self.word,
            TreeState::Formed => self.tree,
            TreeState::Chaos => self.chaos,
        }
    }

    #[inline]
    pub fn is_settled(&self, state: TreeState, epsilon: f32) -> bool {
        self.current.distance(self.target(state)) <= epsilon
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PopulationKind {
    Foliage,
    Ornament,
    Pearl,
    Star,
}

/// How a population's displayed position is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Each element eases toward its own active target.
    PerElement,
    /// Positions come from the scene-wide chaos/tree/word mix weights.
    Blended,
}

/// A named group of elements sharing generation rules and a render style.
#[derive(Clone, Debug)]
pub struct Population {
    pub name: String,
    pub kind: PopulationKind,
    pub motion: Motion,
    /// Render scale of one instance.
    pub scale: f32,
    elements: Vec<Element>,
    dirty: bool,
    // blended positions must be recomputed even if the mix weights rest
    reblend: bool,
}

impl Population {
    pub fn new(
        name: impl Into<String>,
        kind: PopulationKind,
        motion: Motion,
        scale: f32,
        elements: Vec<Element>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            motion,
            scale,
            elements,
            dirty: true,
            reblend: false,
        }
    }

    /// Diffuse foliage points, blended by the global mix weights.
    pub fn foliage<R: Rng + ?Sized>(cfg: &SceneConfig, word: &GlyphCloud, rng: &mut R) -> Self {
        let words = sample_words(cfg, word, cfg.foliage_count, rng);
        let elements = words
            .into_iter()
            .map(|w| {
                let chaos = formation::chaos_point(rng, cfg.chaos_radius);
                let tree = formation::foliage_point(rng, &cfg.tree);
                let mut e = Element::new(chaos, tree, w, 0.0);
                e.phase = rng.gen();
                let (rgb, k) = FOLIAGE_PALETTE[rng.gen_range(0..FOLIAGE_PALETTE.len())];
                e.color_rgb = [rgb[0] * k, rgb[1] * k, rgb[2] * k];
                e
            })
            .collect();
        Self::new("foliage", PopulationKind::Foliage, Motion::Blended, 1.0, elements)
    }

    /// One ornament group; speed is the type's weight.
    pub fn ornaments<R: Rng + ?Sized>(
        cfg: &SceneConfig,
        ty: &OrnamentType,
        word: &GlyphCloud,
        rng: &mut R,
    ) -> Self {
        let words = sample_words(cfg, word, cfg.ornaments_per_type(), rng);
        let elements = words
            .into_iter()
            .map(|w| {
                let chaos = formation::chaos_point(rng, cfg.chaos_radius);
                let tree = formation::ornament_point(rng, &cfg.tree);
                let mut e = Element::new(chaos, tree, w, ty.weight);
                e.color_rgb = ty.color_rgb;
                e
            })
            .collect();
        Self::new(
            format!("ornaments/{}", ty.name),
            PopulationKind::Ornament,
            Motion::PerElement,
            ty.scale,
            elements,
        )
    }

    /// Pearl strands, ordered strand-major.
    pub fn pearls<R: Rng + ?Sized>(cfg: &SceneConfig, word: &GlyphCloud, rng: &mut R) -> Self {
        let p = &cfg.pearls;
        let words = sample_words(cfg, word, p.strands * p.per_strand, rng);
        let mut elements = Vec::with_capacity(words.len());
        let mut words = words.into_iter();
        for s in 0..p.strands {
            for b in 0..p.per_strand {
                let w = words.next().unwrap_or(Vec3::ZERO);
                let chaos = formation::chaos_point(rng, cfg.chaos_radius);
                let tree = formation::pearl_point(s, b, p, &cfg.tree);
                let speed = p.speed_min + rng.gen::<f32>() * p.speed_jitter;
                let mut e = Element::new(chaos, tree, w, speed);
                e.color_rgb = COLOR_PEARL_CREAM;
                elements.push(e);
            }
        }
        Self::new("pearls", PopulationKind::Pearl, Motion::PerElement, p.size, elements)
    }

    /// The single tree-top star.
    pub fn star<R: Rng + ?Sized>(cfg: &SceneConfig, rng: &mut R) -> Self {
        let (chaos, tree, word) =
            formation::star_targets(rng, &cfg.star, &cfg.tree, cfg.chaos_radius);
        let mut e = Element::new(chaos, tree, word, STAR_LERP_PER_SEC / REFERENCE_FPS);
        e.color_rgb = COLOR_DEEP_GOLD;
        Self::new("star", PopulationKind::Star, Motion::PerElement, cfg.star.scale, vec![e])
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.elements
    }

    /// Replace the word targets, keeping chaos and tree targets. The star's
    /// word target is a fixed hover point and is left alone.
    pub fn resample_words<R: Rng + ?Sized>(
        &mut self,
        cfg: &SceneConfig,
        word: &GlyphCloud,
        rng: &mut R,
    ) {
        if self.kind == PopulationKind::Star {
            return;
        }
        let words = sample_words(cfg, word, self.elements.len(), rng);
        for (e, w) in self.elements.iter_mut().zip(words) {
            e.word = w;
        }
        self.dirty = true;
        self.reblend = self.motion == Motion::Blended;
    }

    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and clear the redraw flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Read and clear the pending re-blend set by [`Population::resample_words`].
    pub fn take_reblend(&mut self) -> bool {
        std::mem::take(&mut self.reblend)
    }
}

fn sample_words<R: Rng + ?Sized>(
    cfg: &SceneConfig,
    word: &GlyphCloud,
    count: usize,
    rng: &mut R,
) -> Vec<Vec3> {
    let area = Vec2::new(cfg.text.area_width, cfg.text.area_height);
    word.sample(count, area, cfg.text.depth_scale, rng)
}
