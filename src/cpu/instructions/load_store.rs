// Load and store instructions

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;

impl crate::cpu::Cpu {
    /// LDA - load the accumulator. Flags: Z, N
    pub fn lda(&mut self, bus: &mut Bus, result: &AddressingResult) {
        self.a = self.read_operand(bus, result);
        self.update_zero_and_negative_flags(self.a);
    }

    /// LDX - load X. Flags: Z, N
    pub fn ldx(&mut self, bus: &mut Bus, result: &AddressingResult) {
        self.x = self.read_operand(bus, result);
        self.update_zero_and_negative_flags(self.x);
    }

    /// LDY - load Y. Flags: Z, N
    pub fn ldy(&mut self, bus: &mut Bus, result: &AddressingResult) {
        self.y = self.read_operand(bus, result);
        self.update_zero_and_negative_flags(self.y);
    }

    /// STA - store the accumulator. No flags
    pub fn sta(&self, bus: &mut Bus, result: &AddressingResult) {
        bus.write8(result.address, self.a);
    }

    /// STX - store X. No flags
    pub fn stx(&self, bus: &mut Bus, result: &AddressingResult) {
        bus.write8(result.address, self.x);
    }

    /// STY - store Y. No flags
    pub fn sty(&self, bus: &mut Bus, result: &AddressingResult) {
        bus.write8(result.address, self.y);
    }
}

#[cfg(test)]
mod tests {
    use crate::cpu::flags;
    use crate::cpu::instructions::test_support::cpu_with_program;

    #[test]
    fn test_lda_immediate_flag_law() {
        // For any value v: Z == (v == 0), N == (v >= 0x80)
        for value in [0x00u8, 0x01, 0x42, 0x7F, 0x80, 0xFF] {
            let (mut cpu, mut bus) = cpu_with_program(&[0xA9, value]);
            cpu.step(&mut bus).unwrap();

            assert_eq!(cpu.a, value);
            assert_eq!(cpu.get_flag(flags::ZERO), value == 0, "Z for {:#04X}", value);
            assert_eq!(
                cpu.get_flag(flags::NEGATIVE),
                value >= 0x80,
                "N for {:#04X}",
                value
            );
        }
    }

    #[test]
    fn test_lda_zero_page() {
        let (mut cpu, mut bus) = cpu_with_program(&[0xA5, 0x10]);
        bus.write8(0x0010, 0x55);

        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.a, 0x55);
    }

    #[test]
    fn test_lda_indirect_indexed() {
        let (mut cpu, mut bus) = cpu_with_program(&[0xB1, 0x40]);
        cpu.y = 0x02;
        bus.write8(0x0040, 0x00);
        bus.write8(0x0041, 0x03);
        bus.write8(0x0302, 0x99);

        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.a, 0x99);
    }

    #[test]
    fn test_ldx_zero_page_y() {
        let (mut cpu, mut bus) = cpu_with_program(&[0xB6, 0x10]);
        cpu.y = 0x05;
        bus.write8(0x0015, 0x33);

        cpu.step(&mut bus).unwrap();
        assert_eq!(cpu.x, 0x33);
    }

    #[test]
    fn test_ldy_immediate() {
        let (mut cpu, mut bus) = cpu_with_program(&[0xA0, 0x80]);
        cpu.step(&mut bus).unwrap();

        assert_eq!(cpu.y, 0x80);
        assert!(cpu.get_flag(flags::NEGATIVE));
    }

    #[test]
    fn test_sta_does_not_touch_flags() {
        let (mut cpu, mut bus) = cpu_with_program(&[0x85, 0x10]);
        cpu.a = 0x00;
        let status = cpu.status;

        cpu.step(&mut bus).unwrap();
        assert_eq!(bus.read8(0x0010), 0x00);
        assert_eq!(cpu.status, status, "stores leave P untouched");
    }

    #[test]
    fn test_sta_absolute_x() {
        let (mut cpu, mut bus) = cpu_with_program(&[0x9D, 0x00, 0x03]);
        cpu.a = 0x42;
        cpu.x = 0x10;

        cpu.step(&mut bus).unwrap();
        assert_eq!(bus.read8(0x0310), 0x42);
    }

    #[test]
    fn test_stx_sty() {
        let (mut cpu, mut bus) = cpu_with_program(&[0x86, 0x20, 0x84, 0x21]);
        cpu.x = 0x11;
        cpu.y = 0x22;

        cpu.step(&mut bus).unwrap();
        cpu.step(&mut bus).unwrap();
        assert_eq!(bus.read8(0x0020), 0x11);
        assert_eq!(bus.read8(0x0021), 0x22);
    }
}
