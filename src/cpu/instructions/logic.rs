// Bitwise logic instructions

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::flags;

impl crate::cpu::Cpu {
    /// AND - A &= M. Flags: Z, N
    pub fn and(&mut self, bus: &mut Bus, result: &AddressingResult) {
        self.a &= self.read_operand(bus, result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// ORA - A |= M. Flags: Z, N
    pub fn ora(&mut self, bus: &mut Bus, result: &AddressingResult) {
        self.a |= self.read_operand(bus, result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// EOR - A ^= M. Flags: Z, N
    pub fn eor(&mut self, bus: &mut Bus, result: &AddressingResult) {
        self.a ^= self.read_operand(bus, result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// BIT - test memory against A without modifying either
    ///
    /// Z from `A & M`; N and V copied from bits 7 and 6 of the operand.
    pub fn bit(&mut self, bus: &mut Bus, result: &AddressingResult) {
        let operand = self.read_operand(bus, result);
        self.update_flag(flags::ZERO, self.a & operand == 0);
        self.update_flag(flags::NEGATIVE, operand & 0x80 != 0);
        self.update_flag(flags::OVERFLOW, operand & 0x40 != 0);
    }
}
