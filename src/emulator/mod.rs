// Emulator module - the top-level coordinator
//
// Wraps the console with everything the host shell needs: ROM loading,
// reset, pause, per-frame controller updates, and screenshots. The shell
// pulls frames; the emulator owns the machine.

mod config;
mod screenshot;

pub use config::{EmulatorConfig, VideoConfig, CONFIG_FILE};
pub use screenshot::{save_screenshot, ScreenshotError};

use crate::cartridge::Cartridge;
use crate::console::Console;
use crate::cpu::CpuError;
use crate::input::Controller;
use crate::ppu::SCREEN_SIZE;
use std::error::Error;
use std::path::{Path, PathBuf};

/// The emulator: a console plus host-side state
pub struct Emulator {
    /// The running machine
    console: Console,

    /// Path of the loaded ROM, for screenshots and window titles
    rom_path: PathBuf,

    /// Whether frame production is paused
    paused: bool,

    /// The last completed frame, held while paused
    last_frame: Vec<u32>,
}

impl Emulator {
    /// Load an iNES file and boot a console around it
    ///
    /// # Errors
    /// Surfaces loader errors (bad magic, trainer, truncation) and
    /// unsupported-mapper errors before any emulation starts.
    pub fn load_rom<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let cartridge = Cartridge::from_ines_file(path)?;
        let console = Console::new(cartridge)?;

        Ok(Emulator {
            console,
            rom_path: path.to_path_buf(),
            paused: false,
            last_frame: vec![0; SCREEN_SIZE],
        })
    }

    /// Produce the next frame, or repeat the last one while paused
    ///
    /// # Errors
    /// Propagates a fatal `CpuError` from the console.
    pub fn next_frame(&mut self) -> Result<&[u32], CpuError> {
        if !self.paused {
            let frame = self.console.next_frame()?;
            self.last_frame.copy_from_slice(frame);
        }
        Ok(&self.last_frame)
    }

    /// Push fresh controller states into the console
    ///
    /// Called once per frame by the shell before the frame is run.
    pub fn set_controllers(&mut self, player1: Controller, player2: Controller) {
        let ports = self.console.bus_mut().controllers_mut();
        ports.set_controller(0, player1);
        ports.set_controller(1, player2);
    }

    /// Warm-boot the console (the reset button)
    pub fn reset(&mut self) {
        self.console.reset();
        self.paused = false;
    }

    /// Toggle the paused state
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Whether the emulator is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Save the last completed frame as a PNG
    ///
    /// # Errors
    /// Fails when the screenshot cannot be written or encoded.
    pub fn screenshot(&self) -> Result<PathBuf, ScreenshotError> {
        screenshot::save_screenshot(&self.last_frame, Some(&self.rom_path))
    }

    /// The loaded ROM's path
    pub fn rom_path(&self) -> &Path {
        &self.rom_path
    }

    /// The console, for integration tests and debugging
    pub fn console(&self) -> &Console {
        &self.console
    }

    /// Mutable console access
    pub fn console_mut(&mut self) -> &mut Console {
        &mut self.console
    }
}
