// Easing of elements toward the active formation.

use glam::Vec3;
use rand::SeedableRng;
use tree_core::interpolator::frame_rate;
use tree_core::*;

const DT: f32 = 1.0 / 60.0;

fn three_axis_population(speed: f32) -> Population {
    let elements = [Vec3::X, Vec3::Y, Vec3::Z]
        .into_iter()
        .map(|axis| Element::new(axis, axis * 2.0, axis * -3.0, speed))
        .collect();
    Population::new("axes", PopulationKind::Ornament, Motion::PerElement, 1.0, elements)
}

fn positions(pop: &Population) -> Vec<Vec3> {
    pop.elements().iter().map(|e| e.current).collect()
}

#[test]
fn one_tick_at_half_rate_covers_half_the_distance() {
    let mut pop = three_axis_population(0.0);
    let interp = StateInterpolator::new();
    let moved = interp.step_population_at_rate(&mut pop, TreeState::Formed, 0.5);
    assert_eq!(moved, 3);
    assert_eq!(
        positions(&pop),
        vec![
            Vec3::new(1.5, 0.0, 0.0),
            Vec3::new(0.0, 1.5, 0.0),
            Vec3::new(0.0, 0.0, 1.5)
        ]
    );
}

#[test]
fn frame_rate_scales_with_frame_time() {
    assert!((frame_rate(0.05, DT) - 0.05).abs() < 1e-6);
    assert!((frame_rate(0.05, 2.0 * DT) - 0.1).abs() < 1e-6);
    // long stalls land exactly on the target instead of overshooting
    assert_eq!(frame_rate(0.5, 1.0), 1.0);
    assert_eq!(frame_rate(0.5, -1.0), 0.0);
}

#[test]
fn settled_elements_stay_put() {
    let mut pop = three_axis_population(0.2);
    let mut interp = StateInterpolator::new();
    for _ in 0..600 {
        interp.tick(std::slice::from_mut(&mut pop), TreeState::Formed, DT);
    }
    assert!(pop
        .elements()
        .iter()
        .all(|e| e.is_settled(TreeState::Formed, SETTLE_EPSILON)));

    pop.take_dirty();
    let before = positions(&pop);
    let report = interp.tick(std::slice::from_mut(&mut pop), TreeState::Formed, DT);
    assert_eq!(report.moved, 0);
    assert_eq!(report.settled, 3);
    assert_eq!(report.dirty_populations, 0);
    assert_eq!(positions(&pop), before);
    assert!(!pop.is_dirty());
}

#[test]
fn chaos_formed_chaos_returns_to_the_chaos_targets() {
    let mut pop = three_axis_population(0.1);
    let mut interp = StateInterpolator::new();
    let run = |interp: &mut StateInterpolator, pop: &mut Population, state| {
        for _ in 0..400 {
            interp.tick(std::slice::from_mut(pop), state, DT);
        }
    };

    run(&mut interp, &mut pop, TreeState::Formed);
    for e in pop.elements() {
        assert!(e.current.distance(e.tree) <= SETTLE_EPSILON);
    }
    run(&mut interp, &mut pop, TreeState::Chaos);
    for e in pop.elements() {
        assert!(e.current.distance(e.chaos) <= SETTLE_EPSILON);
    }
}

#[test]
fn state_change_mid_flight_retargets_immediately() {
    let mut pop = three_axis_population(0.1);
    let mut interp = StateInterpolator::new();
    for _ in 0..5 {
        interp.tick(std::slice::from_mut(&mut pop), TreeState::Formed, DT);
    }
    let e = &pop.elements()[0];
    let before = e.current.distance(e.word);
    interp.tick(std::slice::from_mut(&mut pop), TreeState::Word, DT);
    let e = &pop.elements()[0];
    assert!(e.current.distance(e.word) < before);
}

#[test]
fn word_weight_takes_precedence() {
    let e = Element::new(Vec3::X, Vec3::Y, Vec3::Z, 0.0);
    let mix = MixWeights { tree: 1.0, word: 1.0 };
    assert!(mix.blend(&e).distance(Vec3::Z) < 1e-6);
    assert_eq!(MixWeights::target(TreeState::Word), MixWeights { tree: 0.0, word: 1.0 });
    assert_eq!(MixWeights::target(TreeState::Formed), MixWeights { tree: 1.0, word: 0.0 });
    assert_eq!(MixWeights::target(TreeState::Chaos), MixWeights::default());
}

#[test]
fn mix_weights_snap_and_stop() {
    let mut mix = MixWeights::default();
    let mut ticks = 0;
    while mix.ease(TreeState::Formed, 0.05) {
        ticks += 1;
        assert!(ticks < 10_000, "mix never settled");
    }
    assert_eq!(mix, MixWeights::target(TreeState::Formed));
    assert!(!mix.ease(TreeState::Formed, 0.05));
}

#[test]
fn blended_population_follows_the_mix() {
    let elements = vec![Element::new(Vec3::ZERO, Vec3::new(0.0, 4.0, 0.0), Vec3::X, 0.0)];
    let mut pop = Population::new("foliage", PopulationKind::Foliage, Motion::Blended, 1.0, elements);
    let mut interp = StateInterpolator::new();

    let report = interp.tick(std::slice::from_mut(&mut pop), TreeState::Formed, DT);
    assert_eq!(report.moved, 1);
    let y = pop.elements()[0].current.y;
    assert!(y > 0.0 && y < 4.0);

    for _ in 0..2_000 {
        interp.tick(std::slice::from_mut(&mut pop), TreeState::Formed, DT);
    }
    assert_eq!(interp.mix, MixWeights::target(TreeState::Formed));
    assert!(pop.elements()[0].current.distance(Vec3::new(0.0, 4.0, 0.0)) < 1e-5);

    // weights at rest: no per-element work
    pop.take_dirty();
    let report = interp.tick(std::slice::from_mut(&mut pop), TreeState::Formed, DT);
    assert_eq!(report.moved, 0);
    assert!(!pop.is_dirty());
}

#[test]
fn tick_report_accounts_for_every_element() {
    let mut pops = vec![three_axis_population(0.05), three_axis_population(0.3)];
    let mut interp = StateInterpolator::new();
    let report = interp.tick(&mut pops, TreeState::Word, DT);
    assert_eq!(report.moved + report.settled, 6);
    assert_eq!(report.dirty_populations, 2);
}

#[test]
fn faster_elements_arrive_first() {
    let mut slow = three_axis_population(0.05);
    let mut fast = three_axis_population(0.1);
    let interp = StateInterpolator::new();
    for _ in 0..10 {
        interp.step_population(&mut slow, TreeState::Formed, DT, false);
        interp.step_population(&mut fast, TreeState::Formed, DT, false);
    }
    let gap = |p: &Population| p.elements()[0].current.distance(p.elements()[0].tree);
    assert!(gap(&fast) < gap(&slow));
}

#[test]
fn blended_population_picks_up_new_word_targets_at_rest() {
    let elements = vec![Element::new(Vec3::ZERO, Vec3::Y, Vec3::X, 0.0)];
    let mut pop = Population::new("foliage", PopulationKind::Foliage, Motion::Blended, 1.0, elements);
    let mut interp = StateInterpolator::new();
    for _ in 0..2_000 {
        interp.tick(std::slice::from_mut(&mut pop), TreeState::Word, DT);
    }
    assert_eq!(interp.mix, MixWeights::target(TreeState::Word));

    // swap the word target the way a message change does
    let config = SceneConfig::default();
    let cloud = TextRasterSampler::default().trace("");
    let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    pop.elements_mut()[0].current = Vec3::X;
    pop.resample_words(&config, &cloud, &mut rng);
    assert_eq!(pop.elements()[0].word, Vec3::ZERO);

    let report = interp.tick(std::slice::from_mut(&mut pop), TreeState::Word, DT);
    assert_eq!(report.moved, 1);
    assert!(pop.elements()[0].current.distance(Vec3::ZERO) < 1e-6);

    // the re-blend is one-shot
    pop.take_dirty();
    let report = interp.tick(std::slice::from_mut(&mut pop), TreeState::Word, DT);
    assert_eq!(report.moved, 0);
}
