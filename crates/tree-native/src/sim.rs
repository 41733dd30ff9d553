//! Simulated hand tracking.
//!
//! Stands in for a webcam plus landmark model: the keyboard picks a pose, the
//! mouse moves the palm, and the detector emits a synthetic 21-point hand
//! that goes through the real classifier.

use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use tree_core::{
    synthesize_hand, CameraSource, GestureError, HandPose, HandTrackingBackend, Hands,
    LandmarkDetector, VideoFrame,
};

const SIM_FRAME_WIDTH: u32 = 320;
const SIM_FRAME_HEIGHT: u32 = 240;
const SIM_FRAME_INTERVAL_MS: f64 = 1000.0 / 30.0;
const SIM_WARMUP_FRAMES: u32 = 3; // frames reported with zero size before the "stream" is up

#[derive(Clone, Copy, Debug)]
pub struct SimInput {
    pub pose: HandPose,
    pub palm: Vec2,
    pub present: bool,
}

impl Default for SimInput {
    fn default() -> Self {
        Self {
            pose: HandPose::Fist,
            palm: Vec2::splat(0.5),
            present: false,
        }
    }
}

pub type SharedInput = Rc<RefCell<SimInput>>;

pub struct SimulatedBackend {
    input: SharedInput,
    camera_available: bool,
}

impl SimulatedBackend {
    pub fn new(input: SharedInput) -> Self {
        Self {
            input,
            // lets the unavailable/retry path be exercised by hand
            camera_available: std::env::var_os("TREE_SIM_NO_CAMERA").is_none(),
        }
    }

    pub fn set_camera_available(&mut self, available: bool) {
        self.camera_available = available;
    }
}

impl HandTrackingBackend for SimulatedBackend {
    type Detector = SimDetector;
    type Camera = SimCamera;

    fn load_detector(&mut self) -> Result<SimDetector, GestureError> {
        log::info!("[sim] synthetic landmark detector ready");
        Ok(SimDetector {
            input: Rc::clone(&self.input),
        })
    }

    fn open_camera(&mut self) -> Result<SimCamera, GestureError> {
        if !self.camera_available {
            return Err(GestureError::CameraUnavailable("no simulated device".into()));
        }
        let started = Instant::now();
        Ok(SimCamera {
            started,
            frames: 0,
            last_ms: -SIM_FRAME_INTERVAL_MS,
        })
    }
}

pub struct SimDetector {
    input: SharedInput,
}

impl LandmarkDetector for SimDetector {
    fn detect(&mut self, _frame: &VideoFrame) -> Result<Hands, GestureError> {
        let input = *self.input.borrow();
        let mut hands = Hands::new();
        if input.present {
            hands.push(synthesize_hand(input.pose, input.palm));
        }
        Ok(hands)
    }

    fn close(&mut self) {
        log::info!("[sim] detector closed");
    }
}

pub struct SimCamera {
    started: Instant,
    frames: u32,
    last_ms: f64,
}

impl CameraSource for SimCamera {
    fn next_frame(&mut self) -> Option<VideoFrame> {
        let now_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        if now_ms - self.last_ms < SIM_FRAME_INTERVAL_MS {
            return None;
        }
        self.last_ms = now_ms;
        self.frames += 1;
        if self.frames <= SIM_WARMUP_FRAMES {
            return Some(VideoFrame {
                timestamp_ms: now_ms,
                ..VideoFrame::default()
            });
        }
        Some(VideoFrame {
            width: SIM_FRAME_WIDTH,
            height: SIM_FRAME_HEIGHT,
            timestamp_ms: now_ms,
        })
    }

    fn stop(&mut self) {
        log::info!("[sim] camera stopped after {} frames", self.frames);
    }
}
