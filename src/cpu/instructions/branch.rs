// Branch instructions
//
// All eight are 2 cycles untaken, 3 taken, 4 when the taken branch
// crosses a page relative to the instruction's end. The table carries
// the base 2; the handlers return the remainder.

use crate::cpu::addressing::AddressingResult;
use crate::cpu::flags;

impl crate::cpu::Cpu {
    /// Take the branch if the condition holds; returns the extra cycles
    fn branch_if(&mut self, condition: bool, result: &AddressingResult) -> u8 {
        if !condition {
            return 0;
        }
        self.pc = result.address;
        1 + result.page_crossed as u8
    }

    /// BCC - branch if carry clear
    pub fn bcc(&mut self, result: &AddressingResult) -> u8 {
        let condition = !self.get_flag(flags::CARRY);
        self.branch_if(condition, result)
    }

    /// BCS - branch if carry set
    pub fn bcs(&mut self, result: &AddressingResult) -> u8 {
        let condition = self.get_flag(flags::CARRY);
        self.branch_if(condition, result)
    }

    /// BEQ - branch if zero set
    pub fn beq(&mut self, result: &AddressingResult) -> u8 {
        let condition = self.get_flag(flags::ZERO);
        self.branch_if(condition, result)
    }

    /// BNE - branch if zero clear
    pub fn bne(&mut self, result: &AddressingResult) -> u8 {
        let condition = !self.get_flag(flags::ZERO);
        self.branch_if(condition, result)
    }

    /// BMI - branch if negative set
    pub fn bmi(&mut self, result: &AddressingResult) -> u8 {
        let condition = self.get_flag(flags::NEGATIVE);
        self.branch_if(condition, result)
    }

    /// BPL - branch if negative clear
    pub fn bpl(&mut self, result: &AddressingResult) -> u8 {
        let condition = !self.get_flag(flags::NEGATIVE);
        self.branch_if(condition, result)
    }

    /// BVS - branch if overflow set
    pub fn bvs(&mut self, result: &AddressingResult) -> u8 {
        let condition = self.get_flag(flags::OVERFLOW);
        self.branch_if(condition, result)
    }

    /// BVC - branch if overflow clear
    pub fn bvc(&mut self, result: &AddressingResult) -> u8 {
        let condition = !self.get_flag(flags::OVERFLOW);
        self.branch_if(condition, result)
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::flags;
    use crate::cpu::instructions::test_support::cpu_with_program;

    #[test]
    fn test_branch_not_taken_is_two_cycles() {
        let (mut cpu, mut bus) = cpu_with_program(&[0xD0, 0x10]); // BNE +16
        cpu.set_flag(flags::ZERO);

        assert_eq!(cpu.step(&mut bus).unwrap(), 2);
        assert_eq!(cpu.pc, 0x0202, "falls through to the next instruction");
    }

    #[test]
    fn test_branch_taken_same_page_is_three_cycles() {
        let (mut cpu, mut bus) = cpu_with_program(&[0xD0, 0x10]);
        cpu.clear_flag(flags::ZERO);

        assert_eq!(cpu.step(&mut bus).unwrap(), 3);
        assert_eq!(cpu.pc, 0x0212);
    }

    #[test]
    fn test_branch_taken_page_cross_is_four_cycles() {
        let mut bus = crate::bus::Bus::new();
        bus.write8(0x02F0, 0xD0); // BNE +0x20 crosses into page 3
        bus.write8(0x02F1, 0x20);
        let mut cpu = crate::cpu::Cpu::new();
        cpu.pc = 0x02F0;
        cpu.clear_flag(flags::ZERO);

        assert_eq!(cpu.step(&mut bus).unwrap(), 4);
        assert_eq!(cpu.pc, 0x0312);
    }

    #[test]
    fn test_backward_branch() {
        let mut bus = crate::bus::Bus::new();
        bus.write8(0x0210, 0xD0); // BNE -4
        bus.write8(0x0211, 0xFC);
        let mut cpu = crate::cpu::Cpu::new();
        cpu.pc = 0x0210;
        cpu.clear_flag(flags::ZERO);

        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.pc, 0x020E);
    }

    #[test]
    fn test_each_branch_condition() {
        // (opcode, flag, branches_when_set)
        let cases = [
            (0x90u8, flags::CARRY, false),    // BCC
            (0xB0, flags::CARRY, true),       // BCS
            (0xF0, flags::ZERO, true),        // BEQ
            (0xD0, flags::ZERO, false),       // BNE
            (0x30, flags::NEGATIVE, true),    // BMI
            (0x10, flags::NEGATIVE, false),   // BPL
            (0x70, flags::OVERFLOW, true),    // BVS
            (0x50, flags::OVERFLOW, false),   // BVC
        ];

        for (opcode, flag, branches_when_set) in cases {
            for flag_set in [false, true] {
                let (mut cpu, mut bus) = cpu_with_program(&[opcode, 0x04]);
                cpu.status = 0;
                cpu.update_flag(flag, flag_set);

                cpu.step(&mut bus).unwrap();
                let taken = cpu.pc == 0x0206;
                assert_eq!(
                    taken,
                    flag_set == branches_when_set,
                    "opcode {:#04X} with flag {}",
                    opcode,
                    flag_set
                );
            }
        }
    }
}
