// Arithmetic instructions: add/subtract with carry, increments and
// decrements

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::flags;

impl crate::cpu::Cpu {
    /// The shared ADC core: A + operand + C
    ///
    /// V is set when both addends share a sign that differs from the
    /// result's sign. SBC routes through here with the operand inverted,
    /// which yields identical C and V semantics.
    fn add_to_accumulator(&mut self, operand: u8) {
        let sum = self.a as u16 + operand as u16 + self.carry_bit() as u16;
        let result = sum as u8;

        self.update_flag(flags::CARRY, sum > 0xFF);
        self.update_flag(
            flags::OVERFLOW,
            (self.a ^ operand) & 0x80 == 0 && (self.a ^ result) & 0x80 != 0,
        );

        self.a = result;
        self.update_zero_and_negative_flags(result);
    }

    /// ADC - add with carry. Flags: C, V, Z, N
    pub fn adc(&mut self, bus: &mut Bus, result: &AddressingResult) {
        let operand = self.read_operand(bus, result);
        self.add_to_accumulator(operand);
    }

    /// SBC - subtract with borrow, computed as A + !M + C
    pub fn sbc(&mut self, bus: &mut Bus, result: &AddressingResult) {
        let operand = self.read_operand(bus, result);
        self.add_to_accumulator(!operand);
    }

    /// INC - increment memory. Flags: Z, N
    pub fn inc(&mut self, bus: &mut Bus, result: &AddressingResult) {
        let value = bus.read8(result.address).wrapping_add(1);
        bus.write8(result.address, value);
        self.update_zero_and_negative_flags(value);
    }

    /// DEC - decrement memory. Flags: Z, N
    pub fn dec(&mut self, bus: &mut Bus, result: &AddressingResult) {
        let value = bus.read8(result.address).wrapping_sub(1);
        bus.write8(result.address, value);
        self.update_zero_and_negative_flags(value);
    }

    /// INX - increment X. Flags: Z, N
    pub fn inx(&mut self) {
        self.x = self.x.wrapping_add(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// INY - increment Y. Flags: Z, N
    pub fn iny(&mut self) {
        self.y = self.y.wrapping_add(1);
        self.update_zero_and_negative_flags(self.y);
    }

    /// DEX - decrement X. Flags: Z, N
    pub fn dex(&mut self) {
        self.x = self.x.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.x);
    }

    /// DEY - decrement Y. Flags: Z, N
    pub fn dey(&mut self) {
        self.y = self.y.wrapping_sub(1);
        self.update_zero_and_negative_flags(self.y);
    }
}
