// PPU constants

/// Size of the PPU address space backing store (14-bit address space)
pub(super) const VRAM_SIZE: usize = 0x4000;

/// Size of Object Attribute Memory (64 sprites * 4 bytes)
pub(super) const OAM_SIZE: usize = 256;

/// Screen width in pixels
pub const SCREEN_WIDTH: usize = 256;

/// Screen height in pixels
pub const SCREEN_HEIGHT: usize = 240;

/// Total number of pixels in a frame
pub const SCREEN_SIZE: usize = SCREEN_WIDTH * SCREEN_HEIGHT;

// ========================================
// Timing (NTSC)
// ========================================

/// Dots per scanline (the skipped-dot pre-render line has one fewer)
pub(super) const DOTS_PER_SCANLINE: u16 = 341;

/// Pre-render scanline
pub(super) const PRERENDER_SCANLINE: i16 = -1;

/// Last visible scanline
pub(super) const LAST_VISIBLE_SCANLINE: i16 = 239;

/// Scanline on which VBlank begins (at dot 1)
pub(super) const VBLANK_SCANLINE: i16 = 241;

/// Last scanline before the counter wraps back to the pre-render line
pub(super) const LAST_SCANLINE: i16 = 260;

/// Dot at which sprites are evaluated for the next scanline
pub(super) const SPRITE_EVAL_DOT: u16 = 257;

// ========================================
// PPUSTATUS bits
// ========================================

/// Bit 7: VBlank flag
pub(super) const STATUS_VBLANK: u8 = 0x80;

/// Bit 6: Sprite-zero hit
pub(super) const STATUS_SPRITE_ZERO_HIT: u8 = 0x40;

// ========================================
// PPUCTRL bits
// ========================================

/// Bit 0: Base nametable X (adds 256 to the scrolled X coordinate)
pub(super) const CTRL_NAMETABLE_X: u8 = 0x01;

/// Bit 1: Base nametable Y (adds 240 to the scrolled Y coordinate)
pub(super) const CTRL_NAMETABLE_Y: u8 = 0x02;

/// Bit 2: PPUDATA address increment (0: +1, 1: +32)
pub(super) const CTRL_VRAM_INCREMENT: u8 = 0x04;

/// Bit 3: Sprite pattern table for 8x8 sprites (0: $0000, 1: $1000)
pub(super) const CTRL_SPRITE_PATTERN: u8 = 0x08;

/// Bit 4: Background pattern table (0: $0000, 1: $1000)
pub(super) const CTRL_BACKGROUND_PATTERN: u8 = 0x10;

/// Bit 5: Sprite size (0: 8x8, 1: 8x16)
pub(super) const CTRL_SPRITE_SIZE: u8 = 0x20;

/// Bit 7: Raise NMI at the start of VBlank
pub(super) const CTRL_NMI_ENABLE: u8 = 0x80;

// ========================================
// PPUMASK bits
// ========================================

/// Bit 1: Show background in the leftmost 8 pixels
pub(super) const MASK_BACKGROUND_LEFT: u8 = 0x02;

/// Bit 2: Show sprites in the leftmost 8 pixels
pub(super) const MASK_SPRITES_LEFT: u8 = 0x04;

/// Bit 3: Show background
pub(super) const MASK_SHOW_BACKGROUND: u8 = 0x08;

/// Bit 4: Show sprites
pub(super) const MASK_SHOW_SPRITES: u8 = 0x10;
