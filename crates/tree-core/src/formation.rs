//! Procedural chaos and tree formations.
//!
//! Every call draws fresh randomness; nothing is cached between builds.

use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

use crate::config::{PearlConfig, StarConfig, TreeDims};
use crate::constants::{FOLIAGE_SURFACE_SHARE, ORNAMENT_BAND_MIN, ORNAMENT_BAND_SPAN};

#[inline]
fn spherical(r: f32, theta: f32, phi: f32) -> Vec3 {
    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Uniform point inside a filled sphere of `radius`.
///
/// The cube-root radius keeps density uniform per unit volume instead of
/// piling points up at the center.
pub fn chaos_point<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let r = rng.gen::<f32>().cbrt() * radius;
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).acos();
    spherical(r, theta, phi)
}

/// Point on a cone slice at normalized height `h` and distance `r` from the axis.
#[inline]
fn on_slice<R: Rng + ?Sized>(rng: &mut R, dims: &TreeDims, h: f32, r: f32) -> Vec3 {
    let theta = rng.gen::<f32>() * TAU;
    Vec3::new(r * theta.cos(), dims.y_at(h), r * theta.sin())
}

/// Foliage point inside the cone.
///
/// Roughly 70% of points take a sqrt-distributed radius (rim-heavy, reads as
/// the tree's surface) and the rest a linear radius (axis-heavy filler).
pub fn foliage_point<R: Rng + ?Sized>(rng: &mut R, dims: &TreeDims) -> Vec3 {
    let h = rng.gen::<f32>();
    let cone = dims.cone_radius(h);
    let surface = rng.gen::<f32>() < FOLIAGE_SURFACE_SHARE;
    let u = rng.gen::<f32>();
    let r = cone * if surface { u.sqrt() } else { u };
    on_slice(rng, dims, h, r)
}

/// Ornament point in a thin band (0.9..1.1 of the cone radius) around the
/// cone surface.
pub fn ornament_point<R: Rng + ?Sized>(rng: &mut R, dims: &TreeDims) -> Vec3 {
    let h = rng.gen::<f32>();
    let r = dims.cone_radius(h) * (ORNAMENT_BAND_MIN + ORNAMENT_BAND_SPAN * rng.gen::<f32>());
    on_slice(rng, dims, h, r)
}

/// Position of bead `bead` on strand `strand`.
///
/// Deterministic: strands are spaced evenly around the trunk and each one
/// climbs as a shrinking helix from base to apex.
pub fn pearl_point(strand: usize, bead: usize, pearls: &PearlConfig, dims: &TreeDims) -> Vec3 {
    let t = bead as f32 / (pearls.per_strand.max(2) - 1) as f32;
    let phase = strand as f32 / pearls.strands.max(1) as f32 * TAU;
    let r = dims.base_radius * (1.0 - t) + pearls.radius_offset;
    let angle = t * TAU * pearls.rotations + phase;
    Vec3::new(r * angle.cos(), dims.y_at(t), r * angle.sin())
}

/// The star's three targets as `(chaos, tree, word)`.
///
/// Its chaos target sits on a shell at `chaos_factor * chaos_radius` rather
/// than inside the sphere, so it stays visible at the edge of the cloud.
pub fn star_targets<R: Rng + ?Sized>(
    rng: &mut R,
    star: &StarConfig,
    dims: &TreeDims,
    chaos_radius: f32,
) -> (Vec3, Vec3, Vec3) {
    let theta = rng.gen::<f32>() * TAU;
    let phi = rng.gen::<f32>() * PI;
    let chaos = spherical(chaos_radius * star.chaos_factor, theta, phi);
    let tree = Vec3::new(0.0, dims.height / 2.0 + star.clearance, 0.0);
    (chaos, tree, star.word_position)
}
