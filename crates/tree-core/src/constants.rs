use glam::Vec3;

// Shared tuning constants used by the core and the native front-end.

// Tree layout
pub const TREE_HEIGHT: f32 = 12.0; // apex-to-base height, centered on the origin
pub const TREE_BASE_RADIUS: f32 = 4.5; // cone radius at the base
pub const CHAOS_RADIUS: f32 = 30.0; // radius of the filled chaos sphere

// Populations
pub const FOLIAGE_COUNT: usize = 15_000;
pub const ORNAMENT_COUNT: usize = 400; // split evenly across ornament types
pub const PEARL_STRANDS: usize = 5;
pub const PEARLS_PER_STRAND: usize = 80;
pub const PEARL_SIZE: f32 = 0.15;
pub const PEARL_ROTATIONS: f32 = 4.0; // full turns per strand from base to apex
pub const PEARL_RADIUS_OFFSET: f32 = 0.2; // keeps the helix off the axis at the apex
pub const PEARL_SPEED_MIN: f32 = 0.03;
pub const PEARL_SPEED_JITTER: f32 = 0.02;

// Foliage point sprite size in world units: base + span * phase
pub const FOLIAGE_SIZE_BASE: f32 = 0.06;
pub const FOLIAGE_SIZE_SPAN: f32 = 0.12;

// Foliage radial mix: share of points using the sqrt (rim-heavy) radius
pub const FOLIAGE_SURFACE_SHARE: f32 = 0.7;

// Ornaments sit in a band around the cone surface
pub const ORNAMENT_BAND_MIN: f32 = 0.9;
pub const ORNAMENT_BAND_SPAN: f32 = 0.2;

// Star
pub const STAR_CLEARANCE: f32 = 0.5; // distance above the apex
pub const STAR_CHAOS_FACTOR: f32 = 0.8; // fraction of CHAOS_RADIUS for the star's chaos shell
pub const STAR_WORD_POSITION: [f32; 3] = [0.0, 8.0, 0.0]; // hovers above the text block
pub const STAR_LERP_PER_SEC: f32 = 2.0;
pub const STAR_SCALE: f32 = 0.9;
pub const STAR_SPIN_FORMED: f32 = 0.2; // rad/s yaw when formed or spelling
pub const STAR_SPIN_CHAOS: f32 = 1.0; // rad/s tumble about X and Z

// Word formation
pub const DEFAULT_MESSAGE: &str = "MERRY\nCHRISTMAS";
pub const WORD_AREA_WIDTH: f32 = 25.0;
pub const WORD_AREA_HEIGHT: f32 = 12.0;
pub const WORD_DEPTH_SCALE: f32 = 1.0;

// Text raster
pub const RASTER_WIDTH: u32 = 1024;
pub const RASTER_HEIGHT: u32 = 512;
pub const RASTER_FONT_PX: u32 = 112; // glyph cell height in bitmap pixels
pub const RASTER_LINE_HEIGHT: u32 = 160;
pub const RASTER_STRIDE: u32 = 4; // sample every 4th pixel in both axes
pub const RASTER_THRESHOLD: u8 = 100; // minimum luminance for a lit sample
pub const RASTER_BOLD_DIVISOR: u32 = 4; // smear width = glyph pixel size / divisor

// Interpolation
pub const REFERENCE_FPS: f32 = 60.0; // speeds are tuned as per-frame fractions at this rate
pub const SETTLE_EPSILON: f32 = 0.01;
pub const MIX_RATE: f32 = 0.05; // per-frame ease of the shader mix weights
pub const MIX_EPSILON: f32 = 1e-3; // mix weights snap to their target inside this band

// Group rotation
pub const GROUP_YAW_RANGE: f32 = 3.0; // radians across the full horizontal hand range
pub const GROUP_PITCH_RANGE: f32 = 1.0;
pub const GROUP_FOLLOW_RATE: f32 = 5.0; // per second, while a hand is present
pub const GROUP_RECENTER_RATE: f32 = 2.0; // per second, pitch back to level
pub const GROUP_DRIFT_FORMED: f32 = 0.1; // rad/s auto-rotate when formed
pub const GROUP_DRIFT_IDLE: f32 = 0.05; // rad/s auto-rotate otherwise
pub const GROUP_OFFSET_Y: f32 = -4.0; // world-space offset applied to the whole tree

// Gesture
pub const PINCH_THRESHOLD: f32 = 0.05; // landmark units
pub const FINGER_EXTENSION_RATIO: f32 = 1.2;
pub const NO_HAND_ROTATION: [f32; 2] = [0.5, 0.5];

// Palette
pub const COLOR_ICE_BLUE: [f32; 3] = [0.627, 0.941, 1.0];
pub const COLOR_NEON_BLUE: [f32; 3] = [0.302, 0.933, 0.918];
pub const COLOR_PURE_WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const COLOR_PEARL_CREAM: [f32; 3] = [0.992, 0.988, 0.961];
pub const COLOR_DEEP_GOLD: [f32; 3] = [1.0, 0.843, 0.0];
pub const COLOR_PALE_GOLD: [f32; 3] = [0.988, 0.906, 0.643];
pub const COLOR_SPACE_DARK: [f32; 3] = [0.02, 0.02, 0.063];

// Foliage palette: base color and brightness multiplier
pub const FOLIAGE_PALETTE: [([f32; 3], f32); 4] = [
    (COLOR_ICE_BLUE, 0.8),
    (COLOR_NEON_BLUE, 0.6),
    (COLOR_PURE_WHITE, 0.9),
    (COLOR_DEEP_GOLD, 0.8),
];

#[inline]
pub fn star_word_vec3() -> Vec3 {
    Vec3::from(STAR_WORD_POSITION)
}

#[inline]
pub fn group_offset_vec3() -> Vec3 {
    Vec3::new(0.0, GROUP_OFFSET_Y, 0.0)
}
