//! Gesture-sampling driver.
//!
//! Pulls frames from a camera, runs the external landmark detector and
//! publishes the classifier's output into the shared state cells. Runs on the
//! same thread as rendering, one `tick` per camera frame. Per-frame detection
//! errors are logged and skipped; initialization failures park the sampler
//! in an unavailable status until `retry`.

use smallvec::SmallVec;

use crate::error::GestureError;
use crate::gesture::{Classification, GestureClassifier, HandSample};
use crate::state::{RotationCell, RotationSignal, StateCell};

/// Detector output for one frame; almost always zero or one hand.
pub type Hands = SmallVec<[HandSample; 2]>;

/// Frame metadata; pixel data stays with the camera/detector pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    pub timestamp_ms: f64,
}

impl VideoFrame {
    /// Cameras report zero dimensions until the first frame is decoded.
    pub fn is_ready(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

pub trait CameraSource {
    /// Latest frame, or `None` when nothing new is available.
    fn next_frame(&mut self) -> Option<VideoFrame>;
    /// Release the device. Called at most once.
    fn stop(&mut self);
}

pub trait LandmarkDetector {
    fn detect(&mut self, frame: &VideoFrame) -> Result<Hands, GestureError>;
    /// Release model resources. Called at most once.
    fn close(&mut self);
}

/// Factory for the camera and detector. Both may fail and be retried.
pub trait HandTrackingBackend {
    type Detector: LandmarkDetector;
    type Camera: CameraSource;

    fn load_detector(&mut self) -> Result<Self::Detector, GestureError>;
    fn open_camera(&mut self) -> Result<Self::Camera, GestureError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SamplerStatus {
    Initializing,
    Active,
    DetectorUnavailable(String),
    CameraUnavailable(String),
    Stopped,
}

impl SamplerStatus {
    /// Short label for a status overlay.
    pub fn label(&self) -> &'static str {
        match self {
            SamplerStatus::Initializing => "LOADING",
            SamplerStatus::Active => "VISION ACTIVE",
            SamplerStatus::DetectorUnavailable(_) => "AI INIT FAILED",
            SamplerStatus::CameraUnavailable(_) => "CAMERA UNAVAILABLE",
            SamplerStatus::Stopped => "STOPPED",
        }
    }
}

pub struct GestureSampler<B: HandTrackingBackend> {
    backend: B,
    detector: Option<B::Detector>,
    camera: Option<B::Camera>,
    classifier: GestureClassifier,
    state: StateCell,
    rotation: RotationCell,
    status: SamplerStatus,
    skipped_frames: u64,
}

impl<B: HandTrackingBackend> GestureSampler<B> {
    pub fn new(
        backend: B,
        classifier: GestureClassifier,
        state: StateCell,
        rotation: RotationCell,
    ) -> Self {
        Self {
            backend,
            detector: None,
            camera: None,
            classifier,
            state,
            rotation,
            status: SamplerStatus::Initializing,
            skipped_frames: 0,
        }
    }

    pub fn status(&self) -> &SamplerStatus {
        &self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == SamplerStatus::Active
    }

    /// Frames dropped because the detector failed on them.
    pub fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Load the detector, then open the camera. Whatever already succeeded
    /// on a previous attempt is kept.
    pub fn start(&mut self) -> &SamplerStatus {
        if self.status == SamplerStatus::Stopped {
            return &self.status;
        }
        self.rotation.set(RotationSignal::NO_HAND);
        if self.detector.is_none() {
            match self.backend.load_detector() {
                Ok(d) => self.detector = Some(d),
                Err(e) => {
                    log::error!("[sampler] {}", e);
                    self.status = SamplerStatus::DetectorUnavailable(e.to_string());
                    return &self.status;
                }
            }
        }
        if self.camera.is_none() {
            match self.backend.open_camera() {
                Ok(c) => self.camera = Some(c),
                Err(e) => {
                    log::error!("[sampler] {}", e);
                    self.status = SamplerStatus::CameraUnavailable(e.to_string());
                    return &self.status;
                }
            }
        }
        log::info!("[sampler] vision active");
        self.status = SamplerStatus::Active;
        &self.status
    }

    /// User-triggered re-initialization after a detector or camera failure.
    pub fn retry(&mut self) -> &SamplerStatus {
        match self.status {
            SamplerStatus::DetectorUnavailable(_) | SamplerStatus::CameraUnavailable(_) => {
                log::info!("[sampler] retrying initialization");
                self.start()
            }
            _ => &self.status,
        }
    }

    /// Process one camera frame. Returns the classification that was
    /// published, or `None` when nothing was sampled.
    pub fn tick(&mut self) -> Option<Classification> {
        if self.status != SamplerStatus::Active {
            return None;
        }
        let frame = self.camera.as_mut()?.next_frame()?;
        if !frame.is_ready() {
            return None;
        }
        let hands = match self.detector.as_mut()?.detect(&frame) {
            Ok(h) => h,
            Err(e) => {
                self.skipped_frames += 1;
                log::warn!("[sampler] detection error, frame skipped: {}", e);
                return None;
            }
        };
        let c = self.classifier.process(hands.first());
        self.rotation.set(c.rotation);
        if let Some(state) = c.state() {
            self.state.commit(state);
        }
        Some(c)
    }

    /// Halt sampling and release the camera and detector. Idempotent.
    pub fn stop(&mut self) {
        if self.status == SamplerStatus::Stopped {
            return;
        }
        if let Some(mut d) = self.detector.take() {
            d.close();
        }
        if let Some(mut c) = self.camera.take() {
            c.stop();
        }
        self.status = SamplerStatus::Stopped;
        log::info!("[sampler] stopped");
    }
}

impl<B: HandTrackingBackend> Drop for GestureSampler<B> {
    fn drop(&mut self) {
        self.stop();
    }
}
