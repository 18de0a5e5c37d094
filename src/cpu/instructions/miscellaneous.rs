// BRK, RTI, and NOP

use crate::bus::Bus;
use crate::cpu::{flags, vectors};

impl crate::cpu::Cpu {
    /// BRK - software interrupt
    ///
    /// Pushes the address two bytes past the opcode (BRK carries a
    /// padding byte the return skips), then P with bits 4 and 5 set, then
    /// vectors through $FFFE.
    pub fn brk(&mut self, bus: &mut Bus) {
        self.stack_push16(bus, self.pc.wrapping_add(1));
        self.stack_push(bus, self.status | flags::BREAK | flags::UNUSED);
        self.set_flag(flags::INTERRUPT_DISABLE);
        self.pc = bus.read16(vectors::IRQ, false);
    }

    /// RTI - pop P, then PC, with no return-address adjustment
    pub fn rti(&mut self, bus: &mut Bus) {
        self.status = self.stack_pop(bus);
        self.pc = self.stack_pop16(bus);
    }

    /// NOP - burn two cycles
    pub fn nop(&self) {}
}
