//! The window.  Opens it, then lets the event loop drive the frame
//! clock: every tick repaints the scene at the next camera angle and
//! hands the raster to the pixel surface, until the window is closed.

use log::{error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use std::time::Instant;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

use crate::canvas::Canvas;
use crate::clock::FrameClock;
use crate::config::Config;
use crate::error::Error;
use crate::scene::Scene;

/// Size of the raster frames are drawn into.
pub const CANVAS_WIDTH: u32 = 640;
/// Size of the raster frames are drawn into.
pub const CANVAS_HEIGHT: u32 = 480;

fn wants_exit(input: &KeyboardInput) -> bool {
    input.state == ElementState::Pressed && input.virtual_keycode == Some(VirtualKeyCode::Escape)
}

/// Shows `scene` in a window, looping over its frames every `config.interval`.
/// Only returns if the window can't be set up; otherwise the process
/// ends when the window closes.
pub fn show(scene: Scene, config: &Config) -> Result<(), Error> {
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("contourbrot")
        .with_inner_size(LogicalSize::new(CANVAS_WIDTH, CANVAS_HEIGHT))
        .with_min_inner_size(LogicalSize::new(CANVAS_WIDTH, CANVAS_HEIGHT))
        .build(&event_loop)
        .map_err(|e| Error::Display(e.to_string()))?;

    let size = window.inner_size();
    let surface = SurfaceTexture::new(size.width, size.height, &window);
    let mut pixels = Pixels::new(CANVAS_WIDTH, CANVAS_HEIGHT, surface)
        .map_err(|e| Error::Display(e.to_string()))?;
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut clock = FrameClock::new(scene.frames(), config.interval, Instant::now());
    info!(
        "showing {} frames every {:?}; close the window or press Esc to quit",
        scene.frames(),
        config.interval
    );

    event_loop.run(move |event, _, control_flow| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
            WindowEvent::KeyboardInput { input, .. } => {
                if wants_exit(&input) {
                    *control_flow = ControlFlow::Exit;
                }
            }
            WindowEvent::Resized(size) => {
                if let Err(e) = pixels.resize_surface(size.width.max(1), size.height.max(1)) {
                    warn!("could not resize surface: {}", e);
                }
            }
            _ => {}
        },
        Event::MainEventsCleared => {
            if clock.tick(Instant::now()) {
                window.request_redraw();
            }
            if *control_flow != ControlFlow::Exit {
                *control_flow = ControlFlow::WaitUntil(clock.deadline());
            }
        }
        Event::RedrawRequested(_) => {
            scene.draw(clock.frame(), &mut canvas);
            canvas.copy_to(pixels.frame_mut());
            if let Err(e) = pixels.render() {
                error!("could not present frame: {}", e);
                *control_flow = ControlFlow::Exit;
            }
        }
        _ => {}
    })
}
