// Mappers module - cartridge bank-switching hardware
//
// Each mapper translates CPU accesses at $4020-$FFFF and PPU accesses at
// $0000-$1FFF into bank + offset reads and writes. The factory below
// selects the implementation from the iNES mapper number.

mod mapper0;
mod mapper1;
mod mapper2;
mod mapper3;

pub use mapper0::Nrom;
pub use mapper1::Mmc1;
pub use mapper2::UxRom;
pub use mapper3::CnRom;

use super::{Cartridge, Mapper};
use std::fmt;

/// Error type for mapper creation
#[derive(Debug)]
pub enum MapperError {
    /// The requested mapper number is not supported
    UnsupportedMapper(u8),
}

impl fmt::Display for MapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapperError::UnsupportedMapper(num) => {
                write!(f, "mapper {} is not supported", num)
            }
        }
    }
}

impl std::error::Error for MapperError {}

/// Create a mapper instance for the cartridge's mapper number
///
/// # Errors
/// Returns `MapperError::UnsupportedMapper` for numbers outside {0,1,2,3}.
///
/// # Example
/// ```no_run
/// use rusticom::cartridge::{create_mapper, Cartridge};
///
/// let cartridge = Cartridge::from_ines_file("game.nes").unwrap();
/// let mapper = create_mapper(cartridge).unwrap();
/// ```
pub fn create_mapper(cartridge: Cartridge) -> Result<Box<dyn Mapper>, MapperError> {
    match cartridge.mapper_number() {
        0 => Ok(Box::new(Nrom::new(cartridge))),
        1 => Ok(Box::new(Mmc1::new(cartridge))),
        2 => Ok(Box::new(UxRom::new(cartridge))),
        3 => Ok(Box::new(CnRom::new(cartridge))),
        num => Err(MapperError::UnsupportedMapper(num)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::cartridge::{Cartridge, INesHeader, Mirroring, CHR_BANK_SIZE, PRG_BANK_SIZE};

    /// Build a cartridge directly, bypassing the iNES container
    pub fn test_cartridge(mapper: u8, prg_banks: usize, chr_banks: usize) -> Cartridge {
        let chr_is_ram = chr_banks == 0;
        let chr_rom = if chr_is_ram {
            vec![0; CHR_BANK_SIZE]
        } else {
            vec![0; chr_banks * CHR_BANK_SIZE]
        };

        Cartridge {
            header: INesHeader {
                prg_banks: prg_banks as u8,
                chr_banks: chr_banks as u8,
                mapper,
                mirroring: Mirroring::Horizontal,
                has_battery: false,
                has_trainer: false,
                prg_ram_banks: 1,
            },
            prg_rom: vec![0; prg_banks * PRG_BANK_SIZE],
            chr_rom,
            chr_is_ram,
        }
    }
}
