// Frame timing tests: VBlank, NMI, and the dot counters

use super::{step_frame, step_to};
use crate::ppu::Ppu;

// ========================================
// VBlank and NMI
// ========================================

#[test]
fn test_vblank_sets_at_scanline_241_dot_1() {
    let mut ppu = Ppu::new();
    step_to(&mut ppu, 241, 1);
    assert_eq!(ppu.ppustatus & 0x80, 0, "not yet set before the dot runs");

    ppu.step();
    assert_eq!(ppu.ppustatus & 0x80, 0x80);
}

#[test]
fn test_vblank_clears_on_prerender_line() {
    let mut ppu = Ppu::new();
    step_to(&mut ppu, 241, 2);
    assert_eq!(ppu.ppustatus & 0x80, 0x80);

    step_to(&mut ppu, -1, 1);
    assert_eq!(ppu.ppustatus & 0x80, 0, "pre-render clears VBlank");
}

#[test]
fn test_nmi_raised_when_enabled() {
    let mut ppu = Ppu::new();
    ppu.write_register(0, 0x80);

    step_to(&mut ppu, 241, 2);
    assert!(ppu.poll_nmi());
    assert!(!ppu.poll_nmi(), "the NMI line is one-shot");
}

#[test]
fn test_nmi_not_raised_when_disabled() {
    let mut ppu = Ppu::new();
    step_to(&mut ppu, 241, 2);
    assert!(!ppu.poll_nmi());
    assert_eq!(ppu.ppustatus & 0x80, 0x80, "VBlank still sets");
}

// ========================================
// Frame cadence
// ========================================

#[test]
fn test_frame_count_increments_once_per_frame() {
    let mut ppu = Ppu::new();
    assert_eq!(ppu.frame_count(), 0);

    step_frame(&mut ppu);
    assert_eq!(ppu.frame_count(), 1);

    step_frame(&mut ppu);
    assert_eq!(ppu.frame_count(), 2);
}

#[test]
fn test_frame_is_89342_dots_with_rendering_disabled() {
    let mut ppu = Ppu::new();
    let mut dots = 0u32;
    while !ppu.step() {
        dots += 1;
    }
    dots += 1;
    assert_eq!(dots, 89_342);

    // Every frame has the same length while rendering is off
    let mut dots = 0u32;
    while !ppu.step() {
        dots += 1;
    }
    dots += 1;
    assert_eq!(dots, 89_342);
}

#[test]
fn test_vblank_periods_alternate_with_background_enabled() {
    let mut ppu = Ppu::new();
    ppu.write_register(1, 0x08); // Show background

    // Measure dots between successive (241, 1) events
    let mut intervals = Vec::new();
    step_to(&mut ppu, 241, 1);
    for _ in 0..4 {
        let mut dots = 0u32;
        loop {
            ppu.step();
            dots += 1;
            if ppu.scanline() == 241 && ppu.dot() == 1 {
                break;
            }
        }
        intervals.push(dots);
    }

    // The skipped pre-render dot alternates frame lengths
    assert!(intervals.contains(&89_342), "intervals: {:?}", intervals);
    assert!(intervals.contains(&89_341), "intervals: {:?}", intervals);
    for pair in intervals.windows(2) {
        assert_ne!(pair[0], pair[1], "lengths alternate: {:?}", intervals);
    }
}

#[test]
fn test_scanline_wraps_to_prerender() {
    let mut ppu = Ppu::new();
    step_to(&mut ppu, 260, 340);
    ppu.step();
    assert_eq!(ppu.scanline(), -1);
    assert_eq!(ppu.dot(), 0);
}

#[test]
fn test_sprite_zero_hit_clears_on_prerender() {
    let mut ppu = Ppu::new();
    ppu.ppustatus |= 0x40;

    step_to(&mut ppu, -1, 1);
    assert_eq!(ppu.ppustatus & 0x40, 0);
}
