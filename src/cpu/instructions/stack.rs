// Stack instructions

use crate::bus::Bus;
use crate::cpu::flags;

impl crate::cpu::Cpu {
    /// PHA - push the accumulator
    pub fn pha(&mut self, bus: &mut Bus) {
        self.stack_push(bus, self.a);
    }

    /// PLA - pop into the accumulator. Flags: Z, N
    pub fn pla(&mut self, bus: &mut Bus) {
        self.a = self.stack_pop(bus);
        self.update_zero_and_negative_flags(self.a);
    }

    /// PHP - push P with bits 4 and 5 set on the pushed copy
    pub fn php(&mut self, bus: &mut Bus) {
        self.stack_push(bus, self.status | flags::BREAK | flags::UNUSED);
    }

    /// PLP - restore P verbatim from the stack
    pub fn plp(&mut self, bus: &mut Bus) {
        self.status = self.stack_pop(bus);
    }
}
