//! Scene configuration.
//!
//! `SceneConfig::default()` reproduces the production tree. Front-ends may
//! tweak individual fields and should call [`SceneConfig::validate`] before
//! building a [`TreeScene`](crate::TreeScene).

use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec3;

/// Cone the tree formation is built on. The cone is centered on the origin,
/// so heights span `-height/2..=height/2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeDims {
    pub height: f32,
    pub base_radius: f32,
}

impl Default for TreeDims {
    fn default() -> Self {
        Self {
            height: TREE_HEIGHT,
            base_radius: TREE_BASE_RADIUS,
        }
    }
}

impl TreeDims {
    /// Cone radius at normalized height `h` (0 = base, 1 = apex).
    #[inline]
    pub fn cone_radius(&self, h: f32) -> f32 {
        (1.0 - h) * self.base_radius
    }

    /// World-space Y for normalized height `h`.
    #[inline]
    pub fn y_at(&self, h: f32) -> f32 {
        h * self.height - self.height / 2.0
    }

    /// Normalized height for world-space Y, the inverse of [`TreeDims::y_at`].
    #[inline]
    pub fn h_at(&self, y: f32) -> f32 {
        (y + self.height / 2.0) / self.height
    }
}

/// Helical pearl strands wound around the trunk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PearlConfig {
    pub strands: usize,
    pub per_strand: usize,
    pub size: f32,
    pub rotations: f32,
    pub radius_offset: f32,
    pub speed_min: f32,
    pub speed_jitter: f32,
}

impl Default for PearlConfig {
    fn default() -> Self {
        Self {
            strands: PEARL_STRANDS,
            per_strand: PEARLS_PER_STRAND,
            size: PEARL_SIZE,
            rotations: PEARL_ROTATIONS,
            radius_offset: PEARL_RADIUS_OFFSET,
            speed_min: PEARL_SPEED_MIN,
            speed_jitter: PEARL_SPEED_JITTER,
        }
    }
}

/// One ornament sub-type. `weight` doubles as the per-frame interpolation
/// speed, so lighter baubles (lower weight) trail behind.
#[derive(Clone, Debug, PartialEq)]
pub struct OrnamentType {
    pub name: &'static str,
    pub color_rgb: [f32; 3],
    pub weight: f32,
    pub scale: f32,
}

pub fn default_ornament_types() -> Vec<OrnamentType> {
    vec![
        OrnamentType {
            name: "gold",
            color_rgb: COLOR_DEEP_GOLD,
            weight: 0.05,
            scale: 0.25,
        },
        OrnamentType {
            name: "blue",
            color_rgb: COLOR_NEON_BLUE,
            weight: 0.08,
            scale: 0.2,
        },
        OrnamentType {
            name: "silver",
            color_rgb: COLOR_PURE_WHITE,
            weight: 0.1,
            scale: 0.15,
        },
    ]
}

/// Word formation parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct TextConfig {
    pub message: String,
    pub area_width: f32,
    pub area_height: f32,
    pub depth_scale: f32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            area_width: WORD_AREA_WIDTH,
            area_height: WORD_AREA_HEIGHT,
            depth_scale: WORD_DEPTH_SCALE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarConfig {
    pub clearance: f32,
    pub chaos_factor: f32,
    pub word_position: Vec3,
    pub scale: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            clearance: STAR_CLEARANCE,
            chaos_factor: STAR_CHAOS_FACTOR,
            word_position: star_word_vec3(),
            scale: STAR_SCALE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub tree: TreeDims,
    pub chaos_radius: f32,
    pub foliage_count: usize,
    pub ornament_count: usize,
    pub ornament_types: Vec<OrnamentType>,
    pub pearls: PearlConfig,
    pub text: TextConfig,
    pub star: StarConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            tree: TreeDims::default(),
            chaos_radius: CHAOS_RADIUS,
            foliage_count: FOLIAGE_COUNT,
            ornament_count: ORNAMENT_COUNT,
            ornament_types: default_ornament_types(),
            pearls: PearlConfig::default(),
            text: TextConfig::default(),
            star: StarConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("tree.height", self.tree.height)?;
        positive("tree.base_radius", self.tree.base_radius)?;
        positive("chaos_radius", self.chaos_radius)?;
        positive("text.area_width", self.text.area_width)?;
        positive("text.area_height", self.text.area_height)?;
        positive("pearls.size", self.pearls.size)?;
        if self.pearls.per_strand < 2 {
            return Err(ConfigError::TooFewBeads(self.pearls.per_strand));
        }
        if self.ornament_types.is_empty() {
            return Err(ConfigError::NoOrnamentTypes);
        }
        for t in &self.ornament_types {
            if !(0.0..=1.0).contains(&t.weight) {
                return Err(ConfigError::OrnamentWeight(t.weight));
            }
            positive("ornament.scale", t.scale)?;
        }
        Ok(())
    }

    /// Elements per ornament group; the remainder of an uneven split is dropped.
    pub fn ornaments_per_type(&self) -> usize {
        self.ornament_count / self.ornament_types.len().max(1)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    // NaN fails this check too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}
