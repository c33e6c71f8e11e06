use serde::{Deserialize, Serialize};

use super::registers::{Init0, SamState, INIT0, INIT1, MEMORY_EXTENSION};
use super::Gime;
use crate::BLOCK_SIZE;

/// Logical page that covers $FE00-$FEFF.
const OVERLAY_PAGE: usize = 8;
const OVERLAY_OFFSET: usize = 0x1E00;

/// ROM block numbers for MMU blocks $3C-$3F, by $FF90 bits 0-1.
/// Blocks 0-3 are internal ROM, 4-7 cartridge ROM.
const ROM_MAP: [[u8; 4]; 4] = [[0, 1, 6, 7], [0, 1, 6, 7], [0, 1, 2, 3], [4, 5, 6, 7]];

/// One $FFAx bank selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MmuEntry {
    /// Byte as written to $FFAx; all eight bits take part in mapping.
    pub selector: u8,
}

impl MmuEntry {
    pub fn new(selector: u8) -> Self {
        Self { selector }
    }

    /// Physical 8 KiB block number with the $FF9B bank bits 4-5 on top.
    pub fn block(self, ff9b: u8) -> u16 {
        u16::from(self.selector) | (u16::from((ff9b >> 4) & 0x03) << 8)
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageTarget {
    #[default]
    Ram,
    Rom,
    CartridgeRom,
}

/// Where a logical page currently points.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMapping {
    pub target: PageTarget,
    /// MMU block (RAM) or ROM block number.
    pub block: u16,
    /// Byte offset of the page start inside the target image.
    pub base: usize,
    pub writable: bool,
}

impl Gime {
    /// Recompute the mapping of a single logical page (0-7, or 8 for
    /// the $FE00 overlay).
    pub(super) fn update_memory(&mut self, page: usize) {
        let init0 = self.init0();
        let mut mmu_enabled = init0.contains(Init0::MMU_ENABLE);
        let (bank, offset, force_ram) = if page == OVERLAY_PAGE {
            mmu_enabled &= !init0.contains(Init0::MC3);
            (7, OVERLAY_OFFSET, true)
        } else {
            (page, 0, false)
        };

        let block = if mmu_enabled {
            let task = if self.registers[INIT1] & 0x01 != 0 { 8 } else { 0 };
            // $FF9B is sampled on every remap, not when $FFAx is written.
            self.mmu[bank + task].block(self.registers[MEMORY_EXTENSION])
        } else {
            bank as u16 + 0x38
        };

        let all_ram = self.sam().contains(SamState::TY);
        let mapping = if block & 0x3F >= 0x3C && !all_ram && !force_ram {
            let rom_map = &ROM_MAP[usize::from(self.registers[INIT0] & 0x03)];
            let rom_block = rom_map[usize::from(block & 0x3F) - 0x3C];
            let target = if rom_block & 0x04 != 0 && self.cart_rom.is_some() {
                PageTarget::CartridgeRom
            } else {
                PageTarget::Rom
            };
            PageMapping {
                target,
                block: u16::from(rom_block),
                base: usize::from(rom_block & 0x03) * BLOCK_SIZE + offset,
                writable: false,
            }
        } else {
            PageMapping {
                target: PageTarget::Ram,
                block,
                base: (usize::from(block) * BLOCK_SIZE) % self.ram.len() + offset,
                writable: true,
            }
        };

        if self.pages[page] != mapping {
            log::trace!("GIME page {page} -> {mapping:?}");
        }
        self.pages[page] = mapping;
    }

    /// Recompute every page, including the overlay.
    pub(super) fn update_all_memory(&mut self) {
        for page in 0..self.pages.len() {
            self.update_memory(page);
        }
    }

    /// Install or remove the cartridge ROM image.
    pub fn set_cartridge_rom(&mut self, rom: Option<Vec<u8>>) {
        if rom.is_none() {
            log::debug!("No cartridge ROM, high ROM blocks fall back to internal ROM");
        }
        self.cart_rom = rom;
        self.update_all_memory();
    }

    /// Current mapping of logical page `page` (0-8).
    pub fn page_mapping(&self, page: usize) -> PageMapping {
        self.pages[page]
    }

    /// CPU read through the MMU. The host decodes $FF00-$FFFF I/O
    /// before calling this.
    pub fn read_memory(&self, addr: u16) -> u8 {
        let (page, offset) = page_of(addr);
        let mapping = &self.pages[page];
        match mapping.target {
            PageTarget::Ram => self.ram[(mapping.base + offset) % self.ram.len()],
            PageTarget::Rom => read_image(&self.config.rom, mapping.base + offset),
            PageTarget::CartridgeRom => {
                let image = self.cart_rom.as_deref().unwrap_or(&self.config.rom);
                read_image(image, mapping.base + offset)
            }
        }
    }

    /// CPU write through the MMU. Writes to ROM pages are dropped.
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        let (page, offset) = page_of(addr);
        let mapping = self.pages[page];
        if !mapping.writable {
            log::trace!("write ${value:02X} to ROM at ${addr:04X} discarded");
            return;
        }
        let len = self.ram.len();
        self.ram[(mapping.base + offset) % len] = value;
    }
}

fn page_of(addr: u16) -> (usize, usize) {
    if addr & 0xFF00 == 0xFE00 {
        (OVERLAY_PAGE, usize::from(addr & 0x00FF))
    } else {
        (usize::from(addr >> 13), usize::from(addr & 0x1FFF))
    }
}

/// ROM images shorter than the mapped window mirror; a missing image
/// reads as $FF.
fn read_image(image: &[u8], offset: usize) -> u8 {
    if image.is_empty() {
        return 0xFF;
    }
    image[offset % image.len()]
}
