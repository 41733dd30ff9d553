// Gesture classification driven by synthetic hand skeletons.

use glam::{Vec2, Vec3};
use tree_core::gesture::*;
use tree_core::*;

fn classify(pose: HandPose) -> Classification {
    GestureClassifier::default().process(Some(&synthesize_hand(pose, Vec2::splat(0.5))))
}

#[test]
fn fist_forms_the_tree() {
    let c = classify(HandPose::Fist);
    assert_eq!(c.gesture, Some(Gesture::Other));
    assert_eq!(c.state(), Some(TreeState::Formed));
}

#[test]
fn open_hand_scatters() {
    let c = classify(HandPose::Open);
    assert_eq!(c.gesture, Some(Gesture::OpenHand));
    assert_eq!(c.state(), Some(TreeState::Chaos));
}

#[test]
fn pinch_spells_the_word() {
    assert_eq!(classify(HandPose::Pinch).state(), Some(TreeState::Word));
}

#[test]
fn pinch_wins_over_open_hand() {
    let classifier = GestureClassifier::default();
    let hand = synthesize_hand(HandPose::PinchOpen, Vec2::splat(0.5));
    // both predicates hold; pinch is checked first
    assert!(classifier.is_open_hand(&hand));
    assert!(classifier.is_pinch(&hand));
    assert_eq!(classifier.classify(&hand), Gesture::Pinch);
    assert_eq!(classifier.process(Some(&hand)).state(), Some(TreeState::Word));
}

#[test]
fn no_hand_centers_rotation_and_keeps_state() {
    let c = GestureClassifier::default().process(None);
    assert_eq!(c.rotation, RotationSignal::NO_HAND);
    assert_eq!((c.rotation.x, c.rotation.y, c.rotation.present), (0.5, 0.5, false));
    assert_eq!(c.state(), None);
}

#[test]
fn rotation_follows_the_palm() {
    let hand = synthesize_hand(HandPose::Fist, Vec2::new(0.3, 0.7));
    let c = GestureClassifier::default().process(Some(&hand));
    assert!(c.rotation.present);
    assert!((c.rotation.x - 0.3).abs() < 1e-5);
    assert!((c.rotation.y - 0.7).abs() < 1e-5);
}

#[test]
fn mirroring_flips_horizontal_only() {
    let classifier = GestureClassifier::new(GestureThresholds {
        mirror_x: true,
        ..GestureThresholds::default()
    });
    let hand = synthesize_hand(HandPose::Open, Vec2::new(0.2, 0.6));
    let r = classifier.rotation(&hand);
    assert!((r.x - 0.8).abs() < 1e-5);
    assert!((r.y - 0.6).abs() < 1e-5);
}

#[test]
fn classification_ignores_palm_position() {
    let classifier = GestureClassifier::default();
    for pose in HandPose::ALL {
        let a = classifier.classify(&synthesize_hand(pose, Vec2::new(0.1, 0.1)));
        let b = classifier.classify(&synthesize_hand(pose, Vec2::new(0.9, 0.8)));
        assert_eq!(a, b, "{pose:?}");
    }
}

#[test]
fn repeated_samples_reemit_the_same_state() {
    let classifier = GestureClassifier::default();
    let hand = synthesize_hand(HandPose::Open, Vec2::splat(0.5));
    let first = classifier.process(Some(&hand));
    let second = classifier.process(Some(&hand));
    assert_eq!(first, second);
    assert_eq!(second.state(), Some(TreeState::Chaos));
}

#[test]
fn pinch_threshold_is_strict() {
    let mut hand = synthesize_hand(HandPose::Fist, Vec2::splat(0.5));
    let thumb = hand.landmarks[THUMB_TIP];
    let classifier = GestureClassifier::default();

    hand.landmarks[INDEX_TIP] = thumb + Vec3::new(PINCH_THRESHOLD * 0.9, 0.0, 0.0);
    assert!(classifier.is_pinch(&hand));
    hand.landmarks[INDEX_TIP] = thumb + Vec3::new(PINCH_THRESHOLD * 1.1, 0.0, 0.0);
    assert!(!classifier.is_pinch(&hand));
}

#[test]
fn one_curled_finger_breaks_the_open_hand() {
    let classifier = GestureClassifier::default();
    let mut hand = synthesize_hand(HandPose::Open, Vec2::splat(0.5));
    // fold the pinky tip back onto its PIP joint
    hand.landmarks[PINKY_TIP] = hand.landmarks[PINKY_PIP];
    assert!(!classifier.is_extended(&hand, PINKY_TIP, PINKY_PIP));
    assert!(!classifier.is_open_hand(&hand));
    assert_eq!(classifier.classify(&hand), Gesture::Other);
}

#[test]
fn depth_counts_toward_distances() {
    let classifier = GestureClassifier::default();
    let mut hand = synthesize_hand(HandPose::Pinch, Vec2::splat(0.5));
    assert!(classifier.is_pinch(&hand));
    hand.landmarks[INDEX_TIP].z += 0.2;
    assert!(!classifier.is_pinch(&hand));
}

#[test]
fn short_landmark_sets_are_rejected() {
    let points = vec![Vec3::ZERO; 20];
    assert_eq!(
        HandSample::from_points(&points),
        Err(GestureError::MalformedSample(20))
    );
    let hand = HandSample::from_points(&[Vec3::ONE; LANDMARK_COUNT]);
    assert!(hand.is_ok());
}

#[test]
fn gestures_map_to_states() {
    assert_eq!(Gesture::Pinch.tree_state(), TreeState::Word);
    assert_eq!(Gesture::OpenHand.tree_state(), TreeState::Chaos);
    assert_eq!(Gesture::Other.tree_state(), TreeState::Formed);
}
