// Shared test helpers: in-memory iNES image construction
//
// The integration tests build tiny NROM images instead of shipping ROM
// files. A single 16KB PRG bank mirrors across $8000-$FFFF, so code
// starts at $8000 and the vectors sit at the top of the bank.

#![allow(dead_code)]

use rusticom::{Cartridge, Console};

/// Size of the single PRG bank in the built images
pub const PRG_SIZE: usize = 16 * 1024;

/// Size of the CHR bank
pub const CHR_SIZE: usize = 8 * 1024;

/// Builder for minimal NROM test images
pub struct RomBuilder {
    prg: Vec<u8>,
    chr: Vec<u8>,
    flag6: u8,
}

impl RomBuilder {
    /// An empty image: RESET -> $8000, NMI -> $9000, IRQ -> $A000
    pub fn new() -> Self {
        let mut builder = RomBuilder {
            prg: vec![0; PRG_SIZE],
            chr: vec![0; CHR_SIZE],
            flag6: 0,
        };
        builder.set_vector(0xFFFC, 0x8000);
        builder.set_vector(0xFFFA, 0x9000);
        builder.set_vector(0xFFFE, 0xA000);
        builder
    }

    /// Place bytes at a CPU address within $8000-$BFFF
    pub fn with_code(mut self, addr: u16, code: &[u8]) -> Self {
        let offset = (addr as usize - 0x8000) % PRG_SIZE;
        self.prg[offset..offset + code.len()].copy_from_slice(code);
        self
    }

    /// Point a vector somewhere else
    pub fn with_vector(mut self, vector: u16, target: u16) -> Self {
        self.set_vector(vector, target);
        self
    }

    /// Fill one 8x8 CHR tile with a solid 2-bit color
    pub fn with_solid_tile(mut self, tile: usize, color: u8) -> Self {
        for row in 0..8 {
            self.chr[tile * 16 + row] = if color & 1 != 0 { 0xFF } else { 0x00 };
            self.chr[tile * 16 + row + 8] = if color & 2 != 0 { 0xFF } else { 0x00 };
        }
        self
    }

    /// Use vertical mirroring instead of horizontal
    pub fn with_vertical_mirroring(mut self) -> Self {
        self.flag6 |= 0x01;
        self
    }

    /// Serialize to iNES file bytes
    pub fn build(&self) -> Vec<u8> {
        let mut rom = vec![
            0x4E, 0x45, 0x53, 0x1A, // magic
            1,    // 16KB PRG banks
            1,    // 8KB CHR banks
            self.flag6, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        ];
        rom.extend_from_slice(&self.prg);
        rom.extend_from_slice(&self.chr);
        rom
    }

    /// Boot a console around the image
    pub fn into_console(self) -> Console {
        let cartridge = Cartridge::from_ines_bytes(&self.build()).expect("valid test ROM");
        Console::new(cartridge).expect("supported mapper")
    }

    fn set_vector(&mut self, vector: u16, target: u16) {
        let offset = (vector as usize - 0x8000) % PRG_SIZE;
        self.prg[offset] = (target & 0xFF) as u8;
        self.prg[offset + 1] = (target >> 8) as u8;
    }
}

impl Default for RomBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A console running an infinite `JMP $8000` loop, handy when the test
/// only cares about the PPU side
pub fn idle_console() -> Console {
    RomBuilder::new()
        .with_code(0x8000, &[0x4C, 0x00, 0x80])
        .into_console()
}

/// Run until the PPU sits inside the VBlank interval
///
/// Status flags must be sampled here: the pre-render line clears them,
/// and an instruction's dot batch can carry the PPU straight across the
/// frame boundary onto it.
pub fn run_to_vblank(console: &mut Console) {
    loop {
        console.step().expect("program runs cleanly");
        // Deep inside VBlank: the flag-setting dot at (241, 1) has run
        // and the pre-render clear is still a dozen scanlines away
        if console.bus().ppu().scanline() == 245 {
            return;
        }
    }
}
