// Statistical and geometric checks for the procedural formations.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f32::consts::TAU;
use tree_core::formation::*;
use tree_core::*;

fn radial(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

#[test]
fn chaos_points_stay_inside_the_sphere() {
    let mut rng = StdRng::seed_from_u64(10);
    for _ in 0..10_000 {
        let p = chaos_point(&mut rng, CHAOS_RADIUS);
        assert!(p.length() <= CHAOS_RADIUS + 1e-3);
    }
}

#[test]
fn chaos_density_is_uniform_per_volume() {
    let mut rng = StdRng::seed_from_u64(11);
    let n = 40_000;
    let mut inner = 0;
    let mut outer = 0;
    for _ in 0..n {
        let r = chaos_point(&mut rng, 1.0).length();
        if r < 0.5 {
            inner += 1;
        }
        if r > 0.9 {
            outer += 1;
        }
    }
    // a uniform ball puts 1/8 of its volume inside half the radius and
    // 1 - 0.9^3 = 0.271 in the outer shell
    let inner = inner as f32 / n as f32;
    let outer = outer as f32 / n as f32;
    assert!((inner - 0.125).abs() < 0.01, "inner fraction {inner}");
    assert!((outer - 0.271).abs() < 0.015, "outer fraction {outer}");
}

#[test]
fn chaos_directions_are_not_biased() {
    let mut rng = StdRng::seed_from_u64(12);
    let n = 20_000;
    let mean = (0..n)
        .map(|_| chaos_point(&mut rng, 1.0))
        .fold(Vec3::ZERO, |a, p| a + p)
        / n as f32;
    assert!(mean.length() < 0.02, "mean {mean}");
}

#[test]
fn foliage_stays_inside_the_cone() {
    let dims = TreeDims::default();
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..10_000 {
        let p = foliage_point(&mut rng, &dims);
        assert!(p.y >= -dims.height / 2.0 - 1e-4 && p.y <= dims.height / 2.0 + 1e-4);
        let cone = dims.cone_radius(dims.h_at(p.y));
        assert!(radial(p) <= cone + 1e-3, "radius {} > cone {}", radial(p), cone);
    }
}

#[test]
fn foliage_leans_toward_the_rim() {
    let dims = TreeDims::default();
    let mut rng = StdRng::seed_from_u64(14);
    let n = 20_000;
    let mean_ratio: f32 = (0..n)
        .map(|_| {
            let p = foliage_point(&mut rng, &dims);
            let cone = dims.cone_radius(dims.h_at(p.y)).max(1e-4);
            (radial(p) / cone).min(1.0)
        })
        .sum::<f32>()
        / n as f32;
    // 0.7 * E[sqrt u] + 0.3 * E[u] = 0.7 * 2/3 + 0.3 * 1/2
    assert!((mean_ratio - 0.6167).abs() < 0.02, "mean ratio {mean_ratio}");
}

#[test]
fn ornaments_hug_the_cone_surface() {
    let dims = TreeDims::default();
    let mut rng = StdRng::seed_from_u64(15);
    let mut checked = 0;
    for _ in 0..5_000 {
        let p = ornament_point(&mut rng, &dims);
        assert!(p.y.abs() <= dims.height / 2.0 + 1e-4);
        let cone = dims.cone_radius(dims.h_at(p.y));
        if cone < 0.5 {
            continue; // ratio is ill-conditioned right at the apex
        }
        let ratio = radial(p) / cone;
        assert!((0.89..=1.11).contains(&ratio), "ratio {ratio}");
        checked += 1;
    }
    assert!(checked > 4_000);
}

#[test]
fn pearl_strands_climb_from_base_to_apex() {
    let dims = TreeDims::default();
    let pearls = PearlConfig::default();
    let last = pearls.per_strand - 1;
    for s in 0..pearls.strands {
        let base = pearl_point(s, 0, &pearls, &dims);
        let top = pearl_point(s, last, &pearls, &dims);
        assert!((base.y + dims.height / 2.0).abs() < 1e-4);
        assert!((top.y - dims.height / 2.0).abs() < 1e-4);
        assert!((radial(base) - (dims.base_radius + pearls.radius_offset)).abs() < 1e-4);
        assert!((radial(top) - pearls.radius_offset).abs() < 1e-4);
    }
}

#[test]
fn pearl_strands_start_evenly_spaced() {
    let dims = TreeDims::default();
    let pearls = PearlConfig::default();
    for s in 0..pearls.strands {
        let p = pearl_point(s, 0, &pearls, &dims);
        let expected = s as f32 / pearls.strands as f32 * TAU;
        let angle = p.z.atan2(p.x).rem_euclid(TAU);
        let diff = (angle - expected).rem_euclid(TAU);
        assert!(diff < 1e-3 || TAU - diff < 1e-3, "strand {s} angle {angle}");
    }
}

#[test]
fn pearl_helix_is_deterministic_and_shrinks() {
    let dims = TreeDims::default();
    let pearls = PearlConfig::default();
    assert_eq!(pearl_point(2, 40, &pearls, &dims), pearl_point(2, 40, &pearls, &dims));
    let radii: Vec<f32> = (0..pearls.per_strand)
        .map(|b| radial(pearl_point(0, b, &pearls, &dims)))
        .collect();
    assert!(radii.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn star_targets_are_fixed_points() {
    let dims = TreeDims::default();
    let star = StarConfig::default();
    let mut rng = StdRng::seed_from_u64(16);
    for _ in 0..100 {
        let (chaos, tree, word) = star_targets(&mut rng, &star, &dims, CHAOS_RADIUS);
        assert!((chaos.length() - CHAOS_RADIUS * STAR_CHAOS_FACTOR).abs() < 1e-3);
        assert_eq!(tree, Vec3::new(0.0, dims.height / 2.0 + STAR_CLEARANCE, 0.0));
        assert_eq!(word, Vec3::from(STAR_WORD_POSITION));
    }
}
