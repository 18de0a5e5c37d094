// Flag manipulation instructions

use crate::cpu::flags;

impl crate::cpu::Cpu {
    /// CLC - clear carry
    pub fn clc(&mut self) {
        self.clear_flag(flags::CARRY);
    }

    /// SEC - set carry
    pub fn sec(&mut self) {
        self.set_flag(flags::CARRY);
    }

    /// CLD - clear decimal mode (the 2A03 ignores it, but it is writable)
    pub fn cld(&mut self) {
        self.clear_flag(flags::DECIMAL);
    }

    /// SED - set decimal mode
    pub fn sed(&mut self) {
        self.set_flag(flags::DECIMAL);
    }

    /// CLI - clear interrupt disable
    pub fn cli(&mut self) {
        self.clear_flag(flags::INTERRUPT_DISABLE);
    }

    /// SEI - set interrupt disable
    pub fn sei(&mut self) {
        self.set_flag(flags::INTERRUPT_DISABLE);
    }

    /// CLV - clear overflow (there is no SEV)
    pub fn clv(&mut self) {
        self.clear_flag(flags::OVERFLOW);
    }
}
