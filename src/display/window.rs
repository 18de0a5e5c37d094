// Window shell built on winit and pixels
//
// Drives the pull-based frame loop: once per redraw it feeds the current
// keyboard state to the controllers, asks the emulator for the next
// frame, and blits it scaled to the window.
//
// # Hotkeys
//
// | Key    | Action      |
// |--------|-------------|
// | P      | Pause       |
// | F8     | Reset       |
// | F9     | Screenshot  |
// | Escape | Quit        |

use crate::emulator::Emulator;
use crate::input::{KeyboardHandler, Player};
use crate::ppu::{SCREEN_HEIGHT, SCREEN_WIDTH};
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Window configuration
#[derive(Debug, Clone, Copy)]
pub struct WindowConfig {
    /// Integer scale factor for the 256x240 output
    pub scale: u32,
    /// Target frame rate (60 for NTSC)
    pub target_fps: u32,
    /// Whether to wait for vertical sync
    pub vsync: bool,
}

impl WindowConfig {
    /// Default: 3x scale, 60 FPS, VSync on
    pub fn new() -> Self {
        Self {
            scale: 3,
            target_fps: 60,
            vsync: true,
        }
    }

    /// Set the scale factor (clamped to 1-8)
    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.clamp(1, 8);
        self
    }

    /// Set the target frame rate
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.target_fps = fps.max(1);
        self
    }

    /// Enable or disable VSync
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    /// Window width in physical pixels
    pub fn window_width(&self) -> u32 {
        SCREEN_WIDTH as u32 * self.scale
    }

    /// Window height in physical pixels
    pub fn window_height(&self) -> u32 {
        SCREEN_HEIGHT as u32 * self.scale
    }

    /// Time budget of one frame at the target rate
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.target_fps as u64)
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The running window and its emulator
struct DisplayWindow {
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
    config: WindowConfig,
    emulator: Emulator,
    keyboard: KeyboardHandler,
    last_frame_time: Instant,
}

impl DisplayWindow {
    fn new(emulator: Emulator, config: WindowConfig) -> Self {
        Self {
            window: None,
            pixels: None,
            config,
            emulator,
            keyboard: KeyboardHandler::new(),
            last_frame_time: Instant::now(),
        }
    }

    /// Run one emulated frame and present it
    fn render_frame(&mut self, event_loop: &ActiveEventLoop) {
        let player1 = self.keyboard.controller_state(Player::One);
        let player2 = self.keyboard.controller_state(Player::Two);
        self.emulator.set_controllers(player1, player2);

        let frame = match self.emulator.next_frame() {
            Ok(frame) => frame,
            Err(err) => {
                eprintln!("fatal: {}", err);
                event_loop.exit();
                return;
            }
        };

        if let Some(pixels) = &mut self.pixels {
            for (target, &pixel) in pixels.frame_mut().chunks_exact_mut(4).zip(frame.iter()) {
                target.copy_from_slice(&pixel.to_be_bytes());
            }
            if let Err(err) = pixels.render() {
                eprintln!("render error: {}", err);
                event_loop.exit();
            }
        }
    }

    /// Pace the loop to the configured frame rate
    fn frame_due(&mut self) -> bool {
        if self.last_frame_time.elapsed() >= self.config.frame_duration() {
            self.last_frame_time = Instant::now();
            true
        } else {
            false
        }
    }

    fn handle_hotkey(&mut self, key: KeyCode, event_loop: &ActiveEventLoop) {
        match key {
            KeyCode::Escape => event_loop.exit(),
            KeyCode::KeyP => self.emulator.toggle_pause(),
            KeyCode::F8 => self.emulator.reset(),
            KeyCode::F9 => match self.emulator.screenshot() {
                Ok(path) => println!("screenshot saved to {}", path.display()),
                Err(err) => eprintln!("screenshot failed: {}", err),
            },
            _ => {}
        }
    }
}

impl ApplicationHandler for DisplayWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let title = format!(
            "rusticom - {}",
            self.emulator
                .rom_path()
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        );

        let attributes = Window::default_attributes()
            .with_title(title)
            .with_inner_size(LogicalSize::new(
                self.config.window_width(),
                self.config.window_height(),
            ))
            .with_resizable(false);

        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .expect("failed to create window"),
        );
        let size = window.inner_size();

        let surface = SurfaceTexture::new(size.width, size.height, window.clone());
        let pixels = Pixels::new(SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32, surface)
            .expect("failed to create pixel buffer");

        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key,
                        state,
                        repeat: false,
                        ..
                    },
                ..
            } => match state {
                ElementState::Pressed => {
                    self.keyboard.handle_key_press(physical_key);
                    if let PhysicalKey::Code(code) = physical_key {
                        self.handle_hotkey(code, event_loop);
                    }
                }
                ElementState::Released => {
                    self.keyboard.handle_key_release(physical_key);
                }
            },
            WindowEvent::RedrawRequested => {
                if self.frame_due() {
                    self.render_frame(event_loop);
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

/// Open the window and run the emulator until the user quits
///
/// # Errors
/// Fails when the event loop cannot be created or exits abnormally.
pub fn run_display(
    emulator: Emulator,
    config: WindowConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(if config.vsync {
        ControlFlow::Wait
    } else {
        ControlFlow::Poll
    });

    let mut display = DisplayWindow::new(emulator, config);
    event_loop.run_app(&mut display)?;
    Ok(())
}
