// Shift and rotate instructions, in accumulator and memory forms

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::flags;

impl crate::cpu::Cpu {
    /// Apply a shift/rotate to the accumulator or memory operand
    ///
    /// `op` maps (input, carry-in as 0/1) to (result, carry-out).
    fn shift_operand(
        &mut self,
        bus: &mut Bus,
        result: &AddressingResult,
        accumulator: bool,
        op: fn(u8, u8) -> (u8, bool),
    ) {
        let input = if accumulator {
            self.a
        } else {
            bus.read8(result.address)
        };

        let (output, carry) = op(input, self.carry_bit());

        if accumulator {
            self.a = output;
        } else {
            bus.write8(result.address, output);
        }

        self.update_flag(flags::CARRY, carry);
        self.update_zero_and_negative_flags(output);
    }

    /// ASL - shift left; bit 7 becomes the carry. Flags: C, Z, N
    pub fn asl(&mut self, bus: &mut Bus, result: &AddressingResult, accumulator: bool) {
        self.shift_operand(bus, result, accumulator, |m, _| (m << 1, m & 0x80 != 0));
    }

    /// LSR - shift right; bit 0 becomes the carry. N always clears
    pub fn lsr(&mut self, bus: &mut Bus, result: &AddressingResult, accumulator: bool) {
        self.shift_operand(bus, result, accumulator, |m, _| (m >> 1, m & 0x01 != 0));
    }

    /// ROL - rotate left through the carry flag
    pub fn rol(&mut self, bus: &mut Bus, result: &AddressingResult, accumulator: bool) {
        self.shift_operand(bus, result, accumulator, |m, c| {
            ((m << 1) | c, m & 0x80 != 0)
        });
    }

    /// ROR - rotate right through the carry flag
    pub fn ror(&mut self, bus: &mut Bus, result: &AddressingResult, accumulator: bool) {
        self.shift_operand(bus, result, accumulator, |m, c| {
            ((m >> 1) | (c << 7), m & 0x01 != 0)
        });
    }
}
