// Console module - the CPU/PPU interleaving harness
//
// The console owns the CPU and the bus (which owns everything else) and
// enforces the timing contract: after each CPU instruction that consumed
// k cycles, the PPU advances 3k dots. The PPU's NMI line is sampled
// after the ticks, so an NMI raised mid-instruction is observed at the
// next instruction boundary.

use crate::bus::Bus;
use crate::cartridge::{Cartridge, MapperError};
use crate::cpu::{Cpu, CpuError};

/// PPU dots per CPU cycle
const PPU_DOTS_PER_CPU_CYCLE: u32 = 3;

/// A complete NES: CPU, bus, PPU, APU, controllers, and cartridge
pub struct Console {
    cpu: Cpu,
    bus: Bus,
}

impl Console {
    /// Build a console around a cartridge and cold-boot it
    ///
    /// # Errors
    /// Fails when the cartridge needs an unsupported mapper.
    pub fn new(cartridge: Cartridge) -> Result<Self, MapperError> {
        let mut bus = Bus::new();
        bus.attach_cartridge(cartridge)?;

        let mut cpu = Cpu::new();
        cpu.cold_boot(&mut bus);

        Ok(Console { cpu, bus })
    }

    /// Warm-boot the console, as the reset button does
    pub fn reset(&mut self) {
        self.bus.ppu_mut().reset();
        self.cpu.warm_boot(&mut self.bus);
    }

    /// Execute one CPU instruction and the PPU dots it pays for
    ///
    /// Returns the CPU cycles consumed.
    ///
    /// # Errors
    /// Propagates a fatal `CpuError`; the console must not be stepped
    /// afterwards.
    pub fn step(&mut self) -> Result<u8, CpuError> {
        let cycles = self.cpu.step(&mut self.bus)?;

        for _ in 0..(cycles as u32 * PPU_DOTS_PER_CPU_CYCLE) {
            self.bus.ppu_mut().step();
        }

        // The NMI becomes visible to the CPU at its next fetch
        if self.bus.ppu_mut().poll_nmi() {
            self.cpu.nmi_pending = true;
        }

        Ok(cycles)
    }

    /// Run until the PPU completes the next frame, then expose it
    ///
    /// This is the pull-based cadence the host loop drives: one call per
    /// displayed frame.
    ///
    /// # Errors
    /// Propagates a fatal `CpuError`.
    pub fn next_frame(&mut self) -> Result<&[u32], CpuError> {
        let frame = self.bus.ppu().frame_count();
        while self.bus.ppu().frame_count() == frame {
            self.step()?;
        }
        Ok(self.bus.ppu().frame_buffer())
    }

    /// The CPU, for tests and tracing
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Mutable CPU access
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// The bus, for tests and the shell
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Mutable bus access (controller updates, debugging)
    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartridge::mappers::test_support::test_cartridge;
    use crate::cartridge::PRG_BANK_SIZE;

    /// An NROM cartridge with a program at $8000 and the reset vector
    /// pointing at it
    fn console_with_program(program: &[u8]) -> Console {
        let mut cartridge = test_cartridge(0, 1, 1);
        cartridge.prg_rom[..program.len()].copy_from_slice(program);
        cartridge.prg_rom[PRG_BANK_SIZE - 4] = 0x00; // Reset vector $8000
        cartridge.prg_rom[PRG_BANK_SIZE - 3] = 0x80;
        Console::new(cartridge).unwrap()
    }

    #[test]
    fn test_cold_boot_state() {
        let console = console_with_program(&[0xEA]);
        let cpu = console.cpu();

        assert_eq!(cpu.pc, 0x8000, "PC from the reset vector");
        assert_eq!(cpu.a, 0);
        assert_eq!(cpu.x, 0);
        assert_eq!(cpu.y, 0);
        assert_eq!(cpu.sp, 0xFD);
        assert_eq!(cpu.status, 0x34);
    }

    #[test]
    fn test_ppu_advances_three_dots_per_cpu_cycle() {
        let mut console = console_with_program(&[0xEA, 0xEA]); // 2 cycles each

        let cycles = console.step().unwrap();
        assert_eq!(cycles, 2);
        // Boot leaves the PPU at (-1, 0); 6 dots later it sits at dot 6
        assert_eq!(console.bus().ppu().dot(), 6);

        console.step().unwrap();
        assert_eq!(console.bus().ppu().dot(), 12);
    }

    #[test]
    fn test_illegal_opcode_surfaces_from_step() {
        let mut console = console_with_program(&[0x02]);

        let err = console.step().unwrap_err();
        assert!(matches!(err, CpuError::IllegalOpcode { pc: 0x8000, opcode: 0x02, .. }));
    }

    #[test]
    fn test_next_frame_advances_frame_count() {
        // Tight infinite loop: JMP $8000
        let mut console = console_with_program(&[0x4C, 0x00, 0x80]);

        assert_eq!(console.bus().ppu().frame_count(), 0);
        console.next_frame().unwrap();
        assert_eq!(console.bus().ppu().frame_count(), 1);
        console.next_frame().unwrap();
        assert_eq!(console.bus().ppu().frame_count(), 2);
    }

    #[test]
    fn test_reset_rereads_reset_vector() {
        let mut console = console_with_program(&[0x4C, 0x00, 0x80]);
        console.next_frame().unwrap();

        let sp_before = console.cpu().sp;
        console.reset();

        assert_eq!(console.cpu().pc, 0x8000);
        assert_eq!(console.cpu().sp, sp_before.wrapping_sub(3));
    }
}
