//! Particle formation engine for the gesture-driven Christmas tree.
//!
//! Every visual element owns three targets (chaos, tree, word). A discrete
//! [`TreeState`] picked by hand gestures decides which one each element
//! eases toward on every render tick.

pub mod config;
pub mod constants;
pub mod error;
pub mod formation;
pub mod frame;
pub mod gesture;
pub mod interpolator;
pub mod population;
pub mod pose;
pub mod rotation;
pub mod sampler;
pub mod scene;
pub mod state;
pub mod text;

pub static PARTICLES_WGSL: &str = include_str!("../shaders/particles.wgsl");

pub use config::*;
pub use constants::*;
pub use error::*;
pub use frame::{FrameContext, FrameOutput, InstanceData};
pub use gesture::{Classification, Gesture, GestureClassifier, GestureThresholds, HandSample};
pub use interpolator::{MixWeights, StateInterpolator, TickReport};
pub use population::{Element, Motion, Population, PopulationKind};
pub use pose::{synthesize_hand, HandPose};
pub use rotation::{GroupRotation, StarSpin};
pub use sampler::{
    CameraSource, GestureSampler, HandTrackingBackend, Hands, LandmarkDetector, SamplerStatus,
    VideoFrame,
};
pub use scene::TreeScene;
pub use state::*;
pub use text::{Bitmap, GlyphCloud, RasterParams, TextRasterSampler};
