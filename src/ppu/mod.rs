// PPU module - Picture Processing Unit (2C02) emulation
//
// The PPU is a dot-stepped state machine: `step` advances exactly one dot
// (pixel time), and the console drives three dots per CPU cycle. A frame
// is 262 scanlines of 341 dots each, except that the pre-render line of
// every other frame drops one dot while background rendering is enabled.
//
// ## Frame Timing
//
// ```text
// Scanline -1      Pre-render: VBlank and sprite-zero flags clear at dot 0
// Scanlines 0-239  Visible: dots 1-256 emit the pixels of the scanline
// Scanline 240     Post-render: idle
// Scanline 241     VBlank begins at dot 1 (NMI raised if enabled)
// Scanlines 242-260  VBlank continues
// ```
//
// Sprites for each scanline are evaluated at dot 257 of the previous
// line: the first 8 OAM entries covering the line are recorded and
// consulted while its pixels are emitted.
//
// ## Register Map
//
// The 8 registers at $2000-$2007 are mirrored through $3FFF.
//
// | Address | Name       | Access  | Description                    |
// |---------|------------|---------|--------------------------------|
// | $2000   | PPUCTRL    | Write   | Nametable select, NMI enable   |
// | $2001   | PPUMASK    | Write   | Rendering toggles and clipping |
// | $2002   | PPUSTATUS  | Read    | VBlank / sprite-zero flags     |
// | $2003   | OAMADDR    | Write   | OAM address port               |
// | $2004   | OAMDATA    | R/W     | OAM data port                  |
// | $2005   | PPUSCROLL  | Write*2 | Scroll latch (X then Y)        |
// | $2006   | PPUADDR    | Write*2 | VRAM address latch (high, low) |
// | $2007   | PPUDATA    | R/W     | VRAM data port (buffered read) |

mod constants;
mod memory;
pub mod palette;
mod registers;
mod rendering;

pub use constants::{SCREEN_HEIGHT, SCREEN_SIZE, SCREEN_WIDTH};
pub use palette::PALETTE;

use crate::cartridge::{Mapper, Mirroring};
use constants::*;
use std::cell::RefCell;
use std::rc::Rc;

/// The Picture Processing Unit
pub struct Ppu {
    // ========================================
    // Registers
    // ========================================
    /// $2000: PPUCTRL
    pub(crate) ppuctrl: u8,

    /// $2001: PPUMASK
    pub(crate) ppumask: u8,

    /// $2002: PPUSTATUS (bit 7 VBlank, bit 6 sprite-zero hit)
    pub(crate) ppustatus: u8,

    /// $2003: OAMADDR
    pub(crate) oam_addr: u8,

    /// $2005: scroll latch, X in the high byte and Y in the low byte
    pub(crate) ppuscroll: u16,

    /// $2006: VRAM address latch, masked to 14 bits
    pub(crate) ppuaddr: u16,

    /// Write toggle shared by the PPUSCROLL/PPUADDR two-write protocol.
    /// Reading PPUSTATUS resets it.
    pub(crate) write_toggle: bool,

    /// PPUDATA read buffer: non-palette reads return the previous value
    pub(crate) read_buffer: u8,

    // ========================================
    // Memory
    // ========================================
    /// PPU address space backing store. Pattern tables ($0000-$1FFF) are
    /// serviced by the mapper instead when it maps CHR.
    pub(crate) vram: [u8; VRAM_SIZE],

    /// Object Attribute Memory: 64 sprites, 4 bytes each (Y, tile,
    /// attributes, X)
    pub(crate) oam: [u8; OAM_SIZE],

    /// Mirroring fallback when no cartridge is attached
    mirroring: Mirroring,

    /// Cartridge mapper for pattern-table accesses and live mirroring
    mapper: Option<Rc<RefCell<Box<dyn Mapper>>>>,

    // ========================================
    // Output
    // ========================================
    /// Completed pixels as packed RGBA (red in the high byte)
    frame_buffer: Vec<u32>,

    /// 2-bit background color index per pixel, consulted for sprite
    /// priority and sprite-zero hit
    background_chr: Vec<u8>,

    // ========================================
    // Timing
    // ========================================
    /// Dot within the scanline (0-340)
    x: u16,

    /// Current scanline: -1 is pre-render, 0-239 visible, 241-260 VBlank
    scanline: i16,

    /// Alternates every frame; odd frames skip a pre-render dot while
    /// background rendering is enabled
    odd_frame: bool,

    /// Completed frame count
    frame: u64,

    /// One-shot NMI line toward the CPU, set at the start of VBlank
    nmi_pending: bool,

    // ========================================
    // Sprite evaluation scratch
    // ========================================
    /// OAM indices of the (up to 8) sprites on the current scanline
    oam_temp: [usize; 8],

    /// Number of valid entries in `oam_temp`
    sprite_count: usize,
}

impl Ppu {
    /// Create a PPU in its power-on state
    pub fn new() -> Self {
        Ppu {
            ppuctrl: 0,
            ppumask: 0,
            ppustatus: 0,
            oam_addr: 0,
            ppuscroll: 0,
            ppuaddr: 0,
            write_toggle: false,
            read_buffer: 0,
            vram: [0; VRAM_SIZE],
            oam: [0; OAM_SIZE],
            mirroring: Mirroring::Horizontal,
            mapper: None,
            frame_buffer: vec![0; SCREEN_SIZE],
            background_chr: vec![0; SCREEN_SIZE],
            x: 0,
            scanline: PRERENDER_SCANLINE,
            odd_frame: false,
            frame: 0,
            nmi_pending: false,
            oam_temp: [0; 8],
            sprite_count: 0,
        }
    }

    /// Reset the PPU registers, as the warm-boot sequence does
    ///
    /// VRAM, OAM, and the frame counter survive a reset.
    pub fn reset(&mut self) {
        self.ppuctrl = 0;
        self.ppumask = 0;
        self.write_toggle = false;
        self.read_buffer = 0;
        self.x = 0;
        self.scanline = PRERENDER_SCANLINE;
        self.nmi_pending = false;
        self.sprite_count = 0;
    }

    /// Attach the cartridge mapper
    ///
    /// Pattern-table accesses route through the mapper from here on, and
    /// nametable mirroring follows the mapper (MMC1 switches it at
    /// runtime).
    pub fn attach_mapper(&mut self, mapper: Rc<RefCell<Box<dyn Mapper>>>) {
        self.mirroring = mapper.borrow().mirroring();
        self.mapper = Some(mapper);
    }

    /// Bulk-copy a 256-byte page into OAM ($4014 DMA)
    ///
    /// The copy starts at OAMADDR and wraps within OAM.
    pub fn oam_dma(&mut self, page: &[u8; OAM_SIZE]) {
        for (i, &byte) in page.iter().enumerate() {
            self.oam[self.oam_addr.wrapping_add(i as u8) as usize] = byte;
        }
    }

    /// The completed frame as packed RGBA pixels
    pub fn frame_buffer(&self) -> &[u32] {
        &self.frame_buffer
    }

    /// Number of frames completed since power-on
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Current scanline (-1 through 260)
    pub fn scanline(&self) -> i16 {
        self.scanline
    }

    /// Current dot within the scanline (0-340)
    pub fn dot(&self) -> u16 {
        self.x
    }

    /// Take the NMI line: returns true at most once per assertion
    pub fn poll_nmi(&mut self) -> bool {
        let pending = self.nmi_pending;
        self.nmi_pending = false;
        pending
    }

    /// Advance the PPU by one dot
    ///
    /// Returns true when the dot completed a frame (the scanline counter
    /// wrapped past 260).
    pub fn step(&mut self) -> bool {
        match self.scanline {
            PRERENDER_SCANLINE => {
                if self.x == 0 {
                    self.ppustatus &= !(STATUS_VBLANK | STATUS_SPRITE_ZERO_HIT);
                }
            }
            0..=LAST_VISIBLE_SCANLINE => {
                if (1..=SCREEN_WIDTH as u16).contains(&self.x) {
                    self.render_pixel((self.x - 1) as usize, self.scanline as usize);
                }
            }
            VBLANK_SCANLINE => {
                if self.x == 1 {
                    self.ppustatus |= STATUS_VBLANK;
                    if self.ppuctrl & CTRL_NMI_ENABLE != 0 {
                        self.nmi_pending = true;
                    }
                }
            }
            _ => {}
        }

        if self.x == SPRITE_EVAL_DOT {
            self.evaluate_sprites();
        }

        self.x += 1;

        // Odd frames drop the last pre-render dot while the background is
        // being rendered
        let line_dots = if self.scanline == PRERENDER_SCANLINE
            && self.odd_frame
            && self.ppumask & MASK_SHOW_BACKGROUND != 0
        {
            DOTS_PER_SCANLINE - 1
        } else {
            DOTS_PER_SCANLINE
        };

        if self.x >= line_dots {
            self.x = 0;
            self.scanline += 1;

            if self.scanline > LAST_SCANLINE {
                self.scanline = PRERENDER_SCANLINE;
                self.frame += 1;
                self.odd_frame = !self.odd_frame;
                return true;
            }
        }

        false
    }
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
