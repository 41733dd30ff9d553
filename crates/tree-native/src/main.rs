mod renderer;
mod sim;

use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use tree_core::{
    FrameContext, GestureClassifier, GestureSampler, HandPose, RotationCell, SamplerStatus,
    SceneConfig, StateCell, TreeScene, TreeState, DEFAULT_MESSAGE,
};

use renderer::ParticleRenderer;
use sim::{SimInput, SimulatedBackend};

const MESSAGES: [&str; 3] = [DEFAULT_MESSAGE, "HAPPY\nHOLIDAYS", "JOY"];

fn window_title(state: TreeState, status: &SamplerStatus, hand: bool) -> String {
    let hint = match state {
        TreeState::Chaos => "open hand: scatter",
        TreeState::Formed => "fist: assemble",
        TreeState::Word => "pinch: spell",
    };
    format!(
        "Particle Tree [{}] {} | {}{}",
        state,
        hint,
        status.label(),
        if hand { "" } else { " (no hand)" }
    )
}

fn pose_for_key(key: &str) -> Option<HandPose> {
    match key {
        "1" | "f" | "F" => Some(HandPose::Fist),
        "2" | "o" | "O" => Some(HandPose::Open),
        "3" | "p" | "P" => Some(HandPose::Pinch),
        "4" => Some(HandPose::PinchOpen),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut config = SceneConfig::default();
    if let Ok(message) = std::env::var("TREE_MESSAGE") {
        config.text.message = message.replace("\\n", "\n");
    }

    // Shared between the render tick and the gesture sampler
    let state = StateCell::new(TreeState::Formed);
    let rotation = RotationCell::new();

    let scene = TreeScene::new(config)?;
    let mut frame_ctx = FrameContext::new(scene, state.clone(), rotation.clone());

    let input = Rc::new(RefCell::new(SimInput::default()));
    let mut sampler = GestureSampler::new(
        SimulatedBackend::new(Rc::clone(&input)),
        GestureClassifier::default(),
        state.clone(),
        rotation,
    );
    sampler.start();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(window_title(state.get(), sampler.status(), false))
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(ParticleRenderer::new(&window, frame_ctx.instances()))?;
    let start = Instant::now();
    let mut message_index = MESSAGES
        .iter()
        .position(|m| *m == frame_ctx.scene.message())
        .unwrap_or(0);
    let mut last_title = String::new();

    log::info!("[native] keys: 1/F fist, 2/O open, 3/P pinch, 4 pinch+open, H hand, T text, R retry, Esc quit");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => {
                sampler.stop();
                elwt.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                let size = gpu.size();
                let mut i = input.borrow_mut();
                i.palm.x = (position.x as f32 / size.width as f32).clamp(0.0, 1.0);
                i.palm.y = (position.y as f32 / size.height as f32).clamp(0.0, 1.0);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Escape) => {
                    sampler.stop();
                    elwt.exit();
                }
                Key::Character(c) => {
                    let c = c.as_str();
                    if let Some(pose) = pose_for_key(c) {
                        let mut i = input.borrow_mut();
                        i.pose = pose;
                        i.present = true;
                        log::info!("[native] pose {:?}", pose);
                    } else {
                        match c {
                            "h" | "H" => {
                                let mut i = input.borrow_mut();
                                i.present = !i.present;
                            }
                            "t" | "T" => {
                                message_index = (message_index + 1) % MESSAGES.len();
                                frame_ctx.set_message(MESSAGES[message_index]);
                            }
                            "r" | "R" => {
                                sampler.backend_mut().set_camera_available(true);
                                sampler.retry();
                            }
                            _ => {}
                        }
                    }
                }
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            sampler.tick();
            let out = frame_ctx.frame();
            let current = out.state;
            match gpu.render(&out, start.elapsed().as_secs_f32()) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::warn!("[native] surface error: {:?}", e),
            }
            let title = window_title(current, sampler.status(), input.borrow().present);
            if title != last_title {
                gpu.window.set_title(&title);
                last_title = title;
            }
        }
        _ => {}
    })?;
    Ok(())
}
