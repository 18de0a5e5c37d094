// rusticom - main entry point
//
// Usage: rusticom <rom.nes>
//
// Window scale, VSync, and frame rate come from rusticom.toml next to
// the executable (defaults are used when it does not exist).

use rusticom::display::{run_display, WindowConfig};
use rusticom::emulator::{Emulator, EmulatorConfig, CONFIG_FILE};
use std::process::ExitCode;

fn main() -> ExitCode {
    let Some(rom_path) = std::env::args().nth(1) else {
        eprintln!("usage: rusticom <rom.nes>");
        return ExitCode::FAILURE;
    };

    let config = EmulatorConfig::load_or_default(CONFIG_FILE);
    let window_config = WindowConfig::new()
        .with_scale(config.video.scale)
        .with_fps(config.video.fps)
        .with_vsync(config.video.vsync);

    let emulator = match Emulator::load_rom(&rom_path) {
        Ok(emulator) => emulator,
        Err(err) => {
            eprintln!("failed to load {}: {}", rom_path, err);
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = run_display(emulator, window_config) {
        eprintln!("{}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
