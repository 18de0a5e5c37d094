// Instruction fetch, decode, and dispatch

use crate::bus::Bus;
use crate::cpu::addressing::{AddressingMode, AddressingResult};
use crate::cpu::opcodes::{OpcodeInfo, OPCODE_TABLE};
use crate::cpu::{Cpu, CpuError};

impl Cpu {
    /// Execute one instruction and return the cycles it consumed
    ///
    /// A pending NMI is serviced first: the interrupt sequence runs
    /// instead of an instruction and reports a single cycle (interrupt
    /// timing is not modeled precisely).
    ///
    /// # Errors
    /// `CpuError::IllegalOpcode` when the fetched opcode is outside the
    /// documented instruction set. Execution cannot continue past this.
    pub fn step(&mut self, bus: &mut Bus) -> Result<u8, CpuError> {
        if self.nmi_pending {
            self.nmi_pending = false;
            self.nmi(bus);
            self.cycles = self.cycles.wrapping_add(1);
            return Ok(1);
        }

        let pc = self.pc;
        let opcode = bus.read8(pc);
        let info = &OPCODE_TABLE[opcode as usize];

        if !info.legal {
            return Err(CpuError::IllegalOpcode {
                pc,
                opcode,
                cycles: self.cycles,
            });
        }

        self.pc = self.pc.wrapping_add(1);

        let result = match info.mode {
            AddressingMode::Implied => self.addr_implied(),
            AddressingMode::Accumulator => self.addr_accumulator(),
            AddressingMode::Immediate => self.addr_immediate(bus),
            AddressingMode::ZeroPage => self.addr_zero_page(bus),
            AddressingMode::ZeroPageX => self.addr_zero_page_x(bus),
            AddressingMode::ZeroPageY => self.addr_zero_page_y(bus),
            AddressingMode::Relative => self.addr_relative(bus),
            AddressingMode::Absolute => self.addr_absolute(bus),
            AddressingMode::AbsoluteX => self.addr_absolute_x(bus),
            AddressingMode::AbsoluteY => self.addr_absolute_y(bus),
            AddressingMode::Indirect => self.addr_indirect(bus),
            AddressingMode::IndexedIndirect => self.addr_indexed_indirect(bus),
            AddressingMode::IndirectIndexed => self.addr_indirect_indexed(bus),
        };

        let extra = self.dispatch(opcode, &result, bus);

        let mut cycles = info.cycles;
        if info.page_cycle && result.page_crossed {
            cycles += 1;
        }
        cycles += extra;

        self.cycles = self.cycles.wrapping_add(cycles as u64);
        Ok(cycles)
    }

    /// Route an opcode to its handler
    ///
    /// Returns extra cycles beyond the table's base count (only branches
    /// report any).
    fn dispatch(&mut self, opcode: u8, result: &AddressingResult, bus: &mut Bus) -> u8 {
        match opcode {
            // Load / store
            0xA9 | 0xA5 | 0xB5 | 0xAD | 0xBD | 0xB9 | 0xA1 | 0xB1 => self.lda(bus, result),
            0xA2 | 0xA6 | 0xB6 | 0xAE | 0xBE => self.ldx(bus, result),
            0xA0 | 0xA4 | 0xB4 | 0xAC | 0xBC => self.ldy(bus, result),
            0x85 | 0x95 | 0x8D | 0x9D | 0x99 | 0x81 | 0x91 => self.sta(bus, result),
            0x86 | 0x96 | 0x8E => self.stx(bus, result),
            0x84 | 0x94 | 0x8C => self.sty(bus, result),

            // Transfers
            0xAA => self.tax(),
            0xA8 => self.tay(),
            0x8A => self.txa(),
            0x98 => self.tya(),
            0xBA => self.tsx(),
            0x9A => self.txs(),

            // Stack
            0x48 => self.pha(bus),
            0x68 => self.pla(bus),
            0x08 => self.php(bus),
            0x28 => self.plp(bus),

            // Arithmetic
            0x69 | 0x65 | 0x75 | 0x6D | 0x7D | 0x79 | 0x61 | 0x71 => self.adc(bus, result),
            0xE9 | 0xE5 | 0xF5 | 0xED | 0xFD | 0xF9 | 0xE1 | 0xF1 => self.sbc(bus, result),
            0xE6 | 0xF6 | 0xEE | 0xFE => self.inc(bus, result),
            0xE8 => self.inx(),
            0xC8 => self.iny(),
            0xC6 | 0xD6 | 0xCE | 0xDE => self.dec(bus, result),
            0xCA => self.dex(),
            0x88 => self.dey(),

            // Logic
            0x29 | 0x25 | 0x35 | 0x2D | 0x3D | 0x39 | 0x21 | 0x31 => self.and(bus, result),
            0x09 | 0x05 | 0x15 | 0x0D | 0x1D | 0x19 | 0x01 | 0x11 => self.ora(bus, result),
            0x49 | 0x45 | 0x55 | 0x4D | 0x5D | 0x59 | 0x41 | 0x51 => self.eor(bus, result),
            0x24 | 0x2C => self.bit(bus, result),

            // Shifts and rotates (accumulator or memory form)
            0x0A => self.asl(bus, result, true),
            0x06 | 0x16 | 0x0E | 0x1E => self.asl(bus, result, false),
            0x4A => self.lsr(bus, result, true),
            0x46 | 0x56 | 0x4E | 0x5E => self.lsr(bus, result, false),
            0x2A => self.rol(bus, result, true),
            0x26 | 0x36 | 0x2E | 0x3E => self.rol(bus, result, false),
            0x6A => self.ror(bus, result, true),
            0x66 | 0x76 | 0x6E | 0x7E => self.ror(bus, result, false),

            // Compares
            0xC9 | 0xC5 | 0xD5 | 0xCD | 0xDD | 0xD9 | 0xC1 | 0xD1 => self.cmp(bus, result),
            0xE0 | 0xE4 | 0xEC => self.cpx(bus, result),
            0xC0 | 0xC4 | 0xCC => self.cpy(bus, result),

            // Branches report their extra cycles
            0x90 => return self.bcc(result),
            0xB0 => return self.bcs(result),
            0xF0 => return self.beq(result),
            0x30 => return self.bmi(result),
            0xD0 => return self.bne(result),
            0x10 => return self.bpl(result),
            0x50 => return self.bvc(result),
            0x70 => return self.bvs(result),

            // Jumps and subroutines
            0x4C | 0x6C => self.jmp(result),
            0x20 => self.jsr(bus, result),
            0x60 => self.rts(bus),

            // Flag manipulation
            0x18 => self.clc(),
            0xD8 => self.cld(),
            0x58 => self.cli(),
            0xB8 => self.clv(),
            0x38 => self.sec(),
            0xF8 => self.sed(),
            0x78 => self.sei(),

            // Miscellaneous
            0x00 => self.brk(bus),
            0x40 => self.rti(bus),
            0xEA => self.nop(),

            // Unreachable: illegal opcodes error out before dispatch
            _ => {}
        }
        0
    }

    /// Format the instruction at PC as a one-line trace
    ///
    /// ```text
    /// 8000  A9 42     LDA #$42        A:00 X:00 Y:00 P:34 SP:FD CYC:0
    /// ```
    pub fn trace(&self, bus: &mut Bus) -> String {
        let pc = self.pc;
        let opcode = bus.read8(pc);
        let info = &OPCODE_TABLE[opcode as usize];

        let operand_lo = bus.read8(pc.wrapping_add(1));
        let operand_hi = bus.read8(pc.wrapping_add(2));

        let raw_bytes = match info.bytes {
            2 => format!("{:02X} {:02X}   ", opcode, operand_lo),
            3 => format!("{:02X} {:02X} {:02X}", opcode, operand_lo, operand_hi),
            _ => format!("{:02X}      ", opcode),
        };

        let disassembly = Self::disassemble(info, pc, operand_lo, operand_hi);

        format!(
            "{:04X}  {}  {:<14}A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} CYC:{}",
            pc, raw_bytes, disassembly, self.a, self.x, self.y, self.status, self.sp, self.cycles
        )
    }

    fn disassemble(info: &OpcodeInfo, pc: u16, lo: u8, hi: u8) -> String {
        let word = u16::from_le_bytes([lo, hi]);
        match info.mode {
            AddressingMode::Implied => info.mnemonic.to_string(),
            AddressingMode::Accumulator => format!("{} A", info.mnemonic),
            AddressingMode::Immediate => format!("{} #${:02X}", info.mnemonic, lo),
            AddressingMode::ZeroPage => format!("{} ${:02X}", info.mnemonic, lo),
            AddressingMode::ZeroPageX => format!("{} ${:02X},X", info.mnemonic, lo),
            AddressingMode::ZeroPageY => format!("{} ${:02X},Y", info.mnemonic, lo),
            AddressingMode::Relative => {
                let target = pc.wrapping_add(2).wrapping_add(lo as i8 as u16);
                format!("{} ${:04X}", info.mnemonic, target)
            }
            AddressingMode::Absolute => format!("{} ${:04X}", info.mnemonic, word),
            AddressingMode::AbsoluteX => format!("{} ${:04X},X", info.mnemonic, word),
            AddressingMode::AbsoluteY => format!("{} ${:04X},Y", info.mnemonic, word),
            AddressingMode::Indirect => format!("{} (${:04X})", info.mnemonic, word),
            AddressingMode::IndexedIndirect => format!("{} (${:02X},X)", info.mnemonic, lo),
            AddressingMode::IndirectIndexed => format!("{} (${:02X}),Y", info.mnemonic, lo),
        }
    }
}
