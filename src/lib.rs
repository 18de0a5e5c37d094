// rusticom - a NES emulator
//
// The core is a cycle-interleaved pair of interpreters: an instruction-
// stepped 6502 CPU and a dot-stepped PPU, glued by a bus that decodes
// the CPU's address space and a mapper that decodes the cartridge's.
// The console harness pulls frames out of the pair; the display shell
// presents them.

pub mod apu;
pub mod bus;
pub mod cartridge;
pub mod console;
pub mod cpu;
pub mod display;
pub mod emulator;
pub mod input;
pub mod ppu;

// Re-export the main types for convenience
pub use apu::Apu;
pub use bus::Bus;
pub use cartridge::{Cartridge, INesError, INesHeader, Mapper, MapperError, Mirroring};
pub use console::Console;
pub use cpu::{Cpu, CpuError};
pub use display::{run_display, WindowConfig};
pub use emulator::{Emulator, EmulatorConfig};
pub use input::{Button, Controller, ControllerPorts};
pub use ppu::{Ppu, PALETTE, SCREEN_HEIGHT, SCREEN_WIDTH};
