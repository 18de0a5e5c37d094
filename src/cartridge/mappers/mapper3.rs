// Mapper 3 (CNROM) - switchable 8KB CHR bank
//
// Memory Layout:
// - CPU $8000-$FFFF: 16KB or 32KB of fixed PRG-ROM (as NROM)
// - PPU $0000-$1FFF: Switchable 8KB CHR-ROM bank
//
// Any write to $8000-$FFFF selects the CHR bank. Used by Arkanoid,
// Gradius, and Solomon's Key.

use crate::cartridge::{Cartridge, Mapper, Mirroring, CHR_BANK_SIZE};

/// Mapper 3 implementation (CNROM)
pub struct CnRom {
    prg_rom: Vec<u8>,
    chr: Vec<u8>,
    mirroring: Mirroring,
    /// 8KB CHR bank mapped into the pattern tables
    chr_bank: u8,
}

impl CnRom {
    /// Create a new CNROM mapper from a cartridge
    pub fn new(cartridge: Cartridge) -> Self {
        CnRom {
            mirroring: cartridge.mirroring(),
            prg_rom: cartridge.prg_rom,
            chr: cartridge.chr_rom,
            chr_bank: 0,
        }
    }

    fn chr_bank_count(&self) -> usize {
        self.chr.len() / CHR_BANK_SIZE
    }
}

impl Mapper for CnRom {
    fn read(&self, addr: u16) -> u8 {
        match addr {
            0x8000..=0xFFFF => {
                let offset = (addr - 0x8000) as usize % self.prg_rom.len();
                self.prg_rom[offset]
            }
            _ => 0,
        }
    }

    fn write(&mut self, addr: u16, value: u8) {
        if addr >= 0x8000 {
            self.chr_bank = value;
        }
    }

    fn read_chr(&self, addr: u16) -> u8 {
        let bank = self.chr_bank as usize % self.chr_bank_count();
        self.chr[bank * CHR_BANK_SIZE + addr as usize]
    }

    fn write_chr(&mut self, _addr: u16, _value: u8) {
        // CNROM carries CHR-ROM only
    }

    fn maps_chr(&self) -> bool {
        true
    }

    fn mirroring(&self) -> Mirroring {
        self.mirroring
    }
}
