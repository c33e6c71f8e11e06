use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::palette::rgb_color;
use super::{
    Gime, GimeEvent, GimeSnapshot, InterruptSource, MmuEntry, PageMapping, PageTarget, VideoOutput,
};
use crate::{
    Artifacting, GimeConfig, GimeRevision, BLOCK_SIZE, ROM_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Internal ROM whose bytes identify their 8 KiB block: $A0 | block.
fn rom_image() -> Vec<u8> {
    (0..ROM_SIZE).map(|i| 0xA0 | (i / BLOCK_SIZE) as u8).collect()
}

fn config() -> GimeConfig {
    GimeConfig::builder().rom(rom_image()).build()
}

fn gime() -> Gime {
    Gime::new(config())
}

/// Floating bus that always reads `value`.
fn bus(value: u8) -> impl FnMut() -> u8 {
    move || value
}

fn frame_buffer() -> Vec<u32> {
    vec![0; SCREEN_WIDTH * SCREEN_HEIGHT]
}

/// Straightforward page resolver used to cross-check the cached page
/// table after arbitrary register traffic.
fn reference_page(gime: &Gime, page: usize) -> (PageTarget, u16) {
    const ROM_MAP: [[u16; 4]; 4] = [[0, 1, 6, 7], [0, 1, 6, 7], [0, 1, 2, 3], [4, 5, 6, 7]];
    let init0 = gime.registers[0];
    let mmu_enabled = init0 & 0x40 != 0;
    let (bank, force_ram, enabled) = if page == 8 {
        (7, true, mmu_enabled && init0 & 0x08 == 0)
    } else {
        (page, false, mmu_enabled)
    };
    let block = if enabled {
        let task = if gime.registers[1] & 0x01 != 0 { 8 } else { 0 };
        let entry = gime.mmu[bank + task];
        u16::from(entry.selector) | (u16::from((gime.registers[0x0B] >> 4) & 0x03) << 8)
    } else {
        bank as u16 + 0x38
    };
    let all_ram = gime.sam_state & 0x8000 != 0;
    if block & 0x3F >= 0x3C && !all_ram && !force_ram {
        let rom = ROM_MAP[usize::from(init0 & 0x03)][usize::from(block & 0x3F) - 0x3C];
        if rom >= 4 && gime.cart_rom.is_some() {
            (PageTarget::CartridgeRom, rom)
        } else {
            (PageTarget::Rom, rom)
        }
    } else {
        (PageTarget::Ram, block)
    }
}

#[test]
fn reset_state() {
    let mut gime = gime();
    assert_eq!(gime.registers, [0; 16]);
    for i in 0..8 {
        assert_eq!(gime.mmu[i].selector, 0x38 + i as u8);
        assert_eq!(gime.mmu[i + 8].selector, 0x38 + i as u8);
    }
    assert!(!gime.irq_line());
    assert!(!gime.firq_line());
    assert_eq!(gime.next_timer_deadline(), None);
    assert!(gime.take_events().is_empty());
}

#[test]
fn mmu_disabled_maps_fixed_blocks() {
    let gime = gime();
    for page in 0..4 {
        let mapping = gime.page_mapping(page);
        assert_eq!(mapping.target, PageTarget::Ram);
        assert_eq!(mapping.block, 0x38 + page as u16);
    }
    // $FF90 ROM map 0: 16K internal + 16K external, no cartridge.
    assert_eq!(gime.read_memory(0x8000), 0xA0);
    assert_eq!(gime.read_memory(0xA000), 0xA1);
    // Blocks 6/7 fall back to internal ROM blocks 2/3.
    assert_eq!(gime.page_mapping(6).target, PageTarget::Rom);
    assert_eq!(gime.read_memory(0xC000), 0xA2);
    assert_eq!(gime.read_memory(0xE000), 0xA3);
}

#[test]
fn mmu_write_remaps_only_its_page() {
    for entry in 0..16usize {
        let mut gime = gime();
        gime.write(0x00, 0x40);
        gime.write(0x01, if entry >= 8 { 0x01 } else { 0x00 });
        let before: Vec<PageMapping> = (0..8).map(|page| gime.page_mapping(page)).collect();

        let block = 0x10 + entry as u8;
        let page = entry & 0x07;
        gime.write(0x10 + entry as u8, block);

        let mapping = gime.page_mapping(page);
        assert_eq!(mapping.target, PageTarget::Ram, "entry {entry}");
        assert_eq!(mapping.block, u16::from(block), "entry {entry}");
        for (other, previous) in before.iter().enumerate() {
            if other != page {
                assert_eq!(gime.page_mapping(other), *previous, "entry {entry} touched page {other}");
            }
        }

        gime.ram_mut()[usize::from(block) * BLOCK_SIZE + 0x0123] = 0x5A;
        assert_eq!(gime.read_memory(((page as u16) << 13) | 0x0123), 0x5A);
    }
}

#[test]
fn inactive_task_entries_do_not_remap() {
    let mut gime = gime();
    gime.write(0x00, 0x40);
    let before = gime.page_mapping(2);
    // Task 1 entry while task 0 is active.
    gime.write(0x1A, 0x05);
    assert_eq!(gime.page_mapping(2), before);

    gime.write(0x01, 0x01);
    assert_eq!(gime.page_mapping(2).block, 0x05);
}

#[test]
fn rom_pages_discard_writes() {
    let mut gime = gime();
    gime.write_memory(0x8000, 0x55);
    assert_eq!(gime.read_memory(0x8000), 0xA0);
    assert!(gime.ram().iter().all(|&b| b == 0));

    gime.write_memory(0x0010, 0x55);
    assert_eq!(gime.read_memory(0x0010), 0x55);
    assert_eq!(gime.ram()[0x38 * BLOCK_SIZE + 0x10], 0x55);
}

#[test]
fn cartridge_rom_selected_by_rom_map() {
    let mut gime = gime();
    gime.set_cartridge_rom(Some(vec![0xC5; 0x4000]));
    // $FF90 = MC1|MC0: 32K external.
    gime.write(0x00, 0x03);
    assert_eq!(gime.page_mapping(4).target, PageTarget::CartridgeRom);
    assert_eq!(gime.read_memory(0x8000), 0xC5);
    // Blocks past a 16K image mirror.
    assert_eq!(gime.read_memory(0xC000), 0xC5);

    // 32K internal ignores the cartridge.
    gime.write(0x00, 0x02);
    assert_eq!(gime.read_memory(0xC000), 0xA2);

    gime.write(0x00, 0x03);
    gime.set_cartridge_rom(None);
    assert_eq!(gime.page_mapping(4).target, PageTarget::Rom);
    assert_eq!(gime.read_memory(0x8000), 0xA0);
}

#[test]
fn sam_ty_maps_all_ram() {
    let mut gime = gime();
    gime.write(0x4F, 0);
    assert_eq!(gime.take_events(), vec![GimeEvent::SamRegisterWrite { offset: 0x4F }]);
    let mapping = gime.page_mapping(4);
    assert_eq!(mapping.target, PageTarget::Ram);
    assert_eq!(mapping.block, 0x3C);
    gime.write_memory(0x8000, 0x77);
    assert_eq!(gime.read_memory(0x8000), 0x77);

    gime.write(0x4E, 0);
    assert_eq!(gime.page_mapping(4).target, PageTarget::Rom);
}

#[test]
fn sam_rate_bits_report_cpu_rate() {
    let mut gime = gime();
    // R0 set.
    gime.write(0x47, 0);
    assert_eq!(
        gime.take_events(),
        vec![GimeEvent::SamRegisterWrite { offset: 0x47 }, GimeEvent::CpuRateChanged { rate: 1 }]
    );
    // Setting R0 again changes nothing.
    gime.write(0x47, 0);
    assert_eq!(gime.take_events(), vec![GimeEvent::SamRegisterWrite { offset: 0x47 }]);
}

#[test]
fn overlay_page_forces_ram() {
    let mut gime = gime();
    // MMU on, $FE00 constant.
    gime.write(0x00, 0x48);
    gime.write(0x17, 0x00);
    let overlay = gime.page_mapping(8);
    assert_eq!(overlay.target, PageTarget::Ram);
    assert_eq!(overlay.block, 0x3F);
    assert_eq!(overlay.base, 0x3F * BLOCK_SIZE + 0x1E00);

    // Without MC3 the overlay follows task entry 7, even into a ROM block.
    gime.write(0x00, 0x40);
    assert_eq!(gime.page_mapping(8).block, 0x00);
    gime.write(0x17, 0x3E);
    let overlay = gime.page_mapping(8);
    assert_eq!(overlay.target, PageTarget::Ram);
    assert_eq!(overlay.base, 0x3E * BLOCK_SIZE + 0x1E00);

    gime.write_memory(0xFE10, 0x99);
    assert_eq!(gime.ram()[0x3E * BLOCK_SIZE + 0x1E10], 0x99);
    assert_eq!(gime.read_memory(0xFE10), 0x99);
    // The rest of page 7 is still ROM.
    assert_eq!(gime.page_mapping(7).target, PageTarget::Rom);
}

#[test]
fn ff9b_bank_bits_sit_above_the_full_selector() {
    let mut gime = Gime::new(GimeConfig::builder().ram_size(8 * 1024 * 1024).build());
    gime.write(0x00, 0x40);
    gime.write(0x0B, 0x10);
    gime.write(0x10, 0x05);
    assert_eq!(gime.mmu[0], MmuEntry::new(0x05));
    assert_eq!(gime.page_mapping(0).block, 0x105);

    // Selector bits 6-7 address past 512K.
    gime.write(0x0B, 0x00);
    gime.write(0x10, 0x45);
    assert_eq!(gime.page_mapping(0).block, 0x45);
    assert_eq!(gime.page_mapping(0).base, 0x45 * BLOCK_SIZE);
    // Readback keeps six bits.
    assert_eq!(gime.read(0x10, &mut bus(0x00)), 0x05);

    gime.ram_mut()[0x345 * BLOCK_SIZE + 7] = 0xE7;
    gime.write(0x0B, 0x30);
    // $FF9B alone does not remap.
    assert_eq!(gime.page_mapping(0).block, 0x45);
    // Any remap picks it up, a task switch included.
    gime.write(0x01, 0x01);
    gime.write(0x01, 0x00);
    assert_eq!(gime.page_mapping(0).block, 0x345);
    assert_eq!(gime.read_memory(0x0007), 0xE7);
}

#[test]
fn ff9b_bank_bits_keep_rom_decode_on_low_six_bits() {
    let mut gime = Gime::new(GimeConfig::builder().ram_size(2 * 1024 * 1024).rom(rom_image()).build());
    gime.write(0x00, 0x40);
    gime.write(0x0B, 0x20);
    // $7C with bank 2 is still a ROM block.
    gime.write(0x14, 0x7C);
    assert_eq!(gime.page_mapping(4).target, PageTarget::Rom);
    assert_eq!(gime.read_memory(0x8000), 0xA0);
    gime.write(0x14, 0x7B);
    assert_eq!(gime.page_mapping(4).block, 0x27B);
}

#[test]
fn ram_wraps_modulo_size() {
    let mut gime = Gime::new(GimeConfig::builder().ram_size(128 * 1024).build());
    gime.write(0x00, 0x40);
    // Block $30 wraps to block $00 in 128K.
    gime.write(0x10, 0x30);
    assert_eq!(gime.page_mapping(0).base, 0);
    gime.write_memory(0x0001, 0x42);
    assert_eq!(gime.ram()[1], 0x42);
}

#[test]
fn unreadable_bits_come_from_floating_bus() {
    let mut gime = gime();
    for offset in [0x00, 0x01, 0x04, 0x05, 0x08, 0x09, 0x0A, 0x0F, 0x30, 0x4F] {
        assert_eq!(gime.read(offset, &mut bus(0xA5)), 0xA5, "offset {offset:#04x}");
    }

    gime.write(0x10, 0xFF);
    assert_eq!(gime.read(0x10, &mut bus(0x00)), 0x3F);
    assert_eq!(gime.read(0x10, &mut bus(0xC0)), 0xFF);

    // Palette keeps six bits; the top two float.
    gime.write(0x21, 0xFF);
    assert_eq!(gime.read(0x21, &mut bus(0x00)), 0x3F);
    gime.write(0x21, 0x2A);
    assert_eq!(gime.read(0x21, &mut bus(0x40)), 0x6A);
}

#[test]
fn floating_bus_accepts_stateful_sources() {
    struct Latch(u8);
    impl super::FloatingBus for Latch {
        fn read_floating_bus(&mut self) -> u8 {
            self.0 = self.0.wrapping_add(1);
            self.0
        }
    }

    let mut gime = gime();
    let mut bus = Latch(0);
    assert_eq!(gime.read(0x0A, &mut bus), 1);
    assert_eq!(gime.read(0x0A, &mut bus), 2);
    // Pending IRQ reads do not sample the bus.
    gime.read(0x02, &mut bus);
    assert_eq!(bus.0, 2);
}

#[test]
fn every_source_sets_and_acknowledges_irq() {
    for bit in 0..6 {
        let source = InterruptSource::from_bits_retain(1 << bit);
        let mut gime = gime();
        gime.write(0x00, 0x20);
        gime.write(0x02, source.bits());

        gime.set_interrupt_line(source, true);
        assert!(gime.irq_line());
        assert_eq!(gime.pending_irq(), source);
        assert_eq!(gime.take_events(), vec![GimeEvent::IrqChanged(true)]);

        assert_eq!(gime.read(0x02, &mut bus(0)), source.bits());
        assert!(!gime.irq_line());
        assert_eq!(gime.take_events(), vec![GimeEvent::IrqChanged(false)]);
        assert_eq!(gime.read(0x02, &mut bus(0)), 0);
    }
}

#[test]
fn every_source_sets_and_acknowledges_firq() {
    for bit in 0..6 {
        let source = InterruptSource::from_bits_retain(1 << bit);
        let mut gime = gime();
        gime.write(0x00, 0x10);
        gime.write(0x03, source.bits());

        gime.interrupt_rising_edge(source);
        assert!(gime.firq_line());
        assert!(!gime.irq_line());
        assert_eq!(gime.take_events(), vec![GimeEvent::FirqChanged(true)]);

        assert_eq!(gime.read(0x03, &mut bus(0)), source.bits());
        assert!(!gime.firq_line());
        assert_eq!(gime.take_events(), vec![GimeEvent::FirqChanged(false)]);
    }
}

#[test]
fn edges_need_both_enables() {
    let mut gime = gime();
    // Source enabled but $FF90 IEN clear.
    gime.write(0x02, 0x02);
    gime.interrupt_rising_edge(InterruptSource::EI1);
    assert!(!gime.irq_line());

    // IEN set but a different source.
    gime.write(0x00, 0x20);
    gime.interrupt_rising_edge(InterruptSource::EI0);
    assert!(!gime.irq_line());
    assert!(gime.take_events().is_empty());
}

#[test]
fn only_rising_edges_latch() {
    let mut gime = gime();
    gime.write(0x00, 0x20);
    gime.write(0x02, 0x01);
    gime.set_interrupt_line(InterruptSource::EI0, true);
    gime.read(0x02, &mut bus(0));
    // Still high: no new edge.
    gime.set_interrupt_line(InterruptSource::EI0, true);
    assert!(!gime.irq_line());
    gime.set_interrupt_line(InterruptSource::EI0, false);
    gime.set_interrupt_line(InterruptSource::EI0, true);
    assert!(gime.irq_line());
}

#[test]
fn disabling_a_pending_source_acknowledges_it() {
    let mut gime = gime();
    gime.write(0x00, 0x20);
    gime.write(0x02, 0x28);
    gime.interrupt_rising_edge(InterruptSource::TMR);
    gime.enter_bottom_border();
    assert_eq!(gime.pending_irq(), InterruptSource::TMR | InterruptSource::VBORD);
    assert_eq!(gime.take_events(), vec![GimeEvent::IrqChanged(true)]);

    gime.write(0x02, 0x20);
    assert_eq!(gime.pending_irq(), InterruptSource::TMR);
    assert!(gime.irq_line());
    assert!(gime.take_events().is_empty());

    gime.write(0x02, 0x00);
    assert!(!gime.irq_line());
    assert_eq!(gime.take_events(), vec![GimeEvent::IrqChanged(false)]);
}

#[test]
fn event_queue_is_bounded() {
    let mut gime = gime();
    for _ in 0..100 {
        gime.write(0x30, 0);
    }
    let events = gime.take_events();
    assert_eq!(events.len(), super::EVENT_QUEUE_CAPACITY);
}

/// Clock-mode timer with TMR routed to FIRQ.
fn clock_timer(revision: GimeRevision, reload: u16) -> Gime {
    let mut gime = Gime::new(GimeConfig::builder().revision(revision).build());
    gime.write(0x00, 0x10);
    gime.write(0x03, 0x20);
    gime.write(0x01, 0x20);
    gime.write(0x04, (reload >> 8) as u8);
    gime.write(0x05, reload as u8);
    gime.take_events();
    gime
}

#[test]
fn clock_timer_1986_counts_value_plus_two() {
    let mut gime = clock_timer(GimeRevision::Gime1986, 0x010);
    assert_eq!(gime.next_timer_deadline(), Some(18));
    gime.advance_clock(17);
    assert!(!gime.firq_line());
    gime.advance_clock(1);
    assert!(gime.firq_line());
    assert!(gime.is_blinking());
    assert_eq!(gime.next_timer_deadline(), Some(36));
}

#[test]
fn clock_timer_1987_counts_value_plus_one() {
    let mut gime = clock_timer(GimeRevision::Gime1987, 0x010);
    assert_eq!(gime.next_timer_deadline(), Some(17));
    gime.advance_clock(16);
    assert!(!gime.firq_line());
    gime.advance_clock(1);
    assert!(gime.firq_line());
}

#[test]
fn clock_timer_fires_every_deadline_in_a_long_step() {
    let mut gime = clock_timer(GimeRevision::Gime1986, 0x001);
    // Period 3: expiries at 3, 6, 9.
    gime.advance_clock(10);
    assert!(gime.is_blinking());
    assert_eq!(gime.next_timer_deadline(), Some(12));
    assert_eq!(gime.clock(), 10);
}

#[test]
fn ff95_reloads_only_a_stopped_timer() {
    let mut gime = clock_timer(GimeRevision::Gime1986, 0x010);
    gime.advance_clock(10);
    gime.write(0x05, 0x20);
    assert_eq!(gime.next_timer_deadline(), Some(18));
    // $FF94 always reloads.
    gime.write(0x04, 0x00);
    assert_eq!(gime.next_timer_deadline(), Some(10 + 0x22));
}

#[test]
fn zero_reload_disables_both_timer_modes() {
    let mut gime = clock_timer(GimeRevision::Gime1986, 0);
    assert_eq!(gime.next_timer_deadline(), None);
    gime.advance_clock(1_000_000);
    assert!(!gime.firq_line());
    assert!(!gime.is_blinking());

    // Border clocking with the same registers stays inert.
    gime.write(0x01, 0x00);
    for _ in 0..5000 {
        gime.horizontal_sync_changed(true);
        gime.horizontal_sync_changed(false);
    }
    assert!(!gime.firq_line());
    assert!(!gime.is_blinking());
}

#[test]
fn border_timer_counts_rising_hsync() {
    let mut gime = gime();
    gime.write(0x00, 0x10);
    gime.write(0x03, 0x20);
    gime.write(0x05, 0x03);
    assert_eq!(gime.next_timer_deadline(), None);

    for _ in 0..4 {
        gime.horizontal_sync_changed(true);
        gime.horizontal_sync_changed(false);
    }
    assert!(!gime.firq_line());
    gime.horizontal_sync_changed(false);
    assert!(!gime.firq_line());
    gime.horizontal_sync_changed(true);
    assert!(gime.firq_line());
    assert!(gime.is_blinking());
}

#[test]
fn switching_to_clock_mode_rearms() {
    let mut gime = gime();
    gime.write(0x05, 0x03);
    gime.advance_clock(100);
    assert_eq!(gime.next_timer_deadline(), None);
    gime.write(0x01, 0x20);
    assert_eq!(gime.next_timer_deadline(), Some(105));
}

#[test]
fn hsync_drives_hbord() {
    let mut gime = gime();
    gime.write(0x00, 0x20);
    gime.write(0x02, 0x10);
    gime.horizontal_sync_changed(false);
    assert!(!gime.irq_line());
    gime.horizontal_sync_changed(true);
    assert_eq!(gime.pending_irq(), InterruptSource::HBORD);
}

#[test]
fn palette_rotation_keeps_recorded_colours() {
    let mut gime = gime();
    gime.write(0x20, 0x3F);
    gime.new_frame();
    gime.record_body_scanline(30);
    gime.write(0x20, 0x00);
    gime.record_body_scanline(31);

    let mut buffer = frame_buffer();
    gime.render_frame(&mut buffer, VideoOutput::Rgb);
    // Text mode over zeroed RAM: the first two body pixels are background.
    let a = &buffer[30 * SCREEN_WIDTH..31 * SCREEN_WIDTH];
    let b = &buffer[31 * SCREEN_WIDTH..32 * SCREEN_WIDTH];
    assert_eq!(a[64], 0xFFFFFF);
    assert_eq!(b[64], 0x000000);
}

#[test]
fn palette_writes_before_recording_share_a_slot() {
    let mut gime = gime();
    gime.new_frame();
    gime.record_body_scanline(0);
    gime.write(0x20, 0x01);
    gime.write(0x21, 0x02);
    gime.write(0x22, 0x03);
    assert_eq!(gime.palette.position(), 1);
    gime.record_body_scanline(1);
    gime.write(0x20, 0x04);
    assert_eq!(gime.palette.position(), 2);
    assert_eq!(gime.scanlines[1].palette_slot, 1);
}

#[test]
fn border_lines_fill_with_border_colour() {
    let mut gime = gime();
    gime.write(0x0A, 0x24);
    gime.new_frame();
    gime.record_border_scanline(0);
    let mut buffer = frame_buffer();
    gime.render_frame(&mut buffer, VideoOutput::Rgb);
    assert!(buffer[..SCREEN_WIDTH].iter().all(|&p| p == 0xFF0000));
}

#[test]
fn graphics_160_samples_fill_640_pixels() {
    let mut gime = gime();
    for (index, color) in [0x00u8, 0x24, 0x12, 0x09].into_iter().enumerate() {
        gime.write(0x20 + index as u8, color);
    }
    gime.write(0x08, 0x80);
    gime.write(0x09, 0x1C);
    gime.write(0x0A, 0x3F);
    gime.ram_mut()[..160].fill(0b0001_1011);
    gime.new_frame();
    gime.record_body_scanline(10);

    let mut buffer = frame_buffer();
    gime.render_frame(&mut buffer, VideoOutput::Rgb);
    let row = &buffer[10 * SCREEN_WIDTH..11 * SCREEN_WIDTH];
    assert_eq!(row.len(), 640);
    assert_eq!(&row[..4], &[0x000000, 0xFF0000, 0x00FF00, 0x0000FF]);
    assert_eq!(row[639], 0x0000FF);
    assert!(!row.contains(&0xFFFFFF), "wide mode has no border");
}

#[test]
fn graphics_128_samples_keep_borders() {
    let mut gime = gime();
    gime.write(0x21, 0x24);
    gime.write(0x08, 0x80);
    gime.write(0x09, 0x18);
    gime.write(0x0A, 0x3F);
    gime.ram_mut()[..128].fill(0x55);
    gime.new_frame();
    gime.record_body_scanline(10);

    let mut buffer = frame_buffer();
    gime.render_frame(&mut buffer, VideoOutput::Rgb);
    let row = &buffer[10 * SCREEN_WIDTH..11 * SCREEN_WIDTH];
    assert!(row[..64].iter().all(|&p| p == 0xFFFFFF));
    assert!(row[576..].iter().all(|&p| p == 0xFFFFFF));
    assert!(row[64..576].iter().all(|&p| p == 0xFF0000));
}

#[test]
fn every_graphics_layout_fills_its_body() {
    for ff99 in 0..0x20u8 {
        let mut gime = gime();
        gime.write(0x08, 0x80);
        gime.write(0x09, ff99);
        gime.write(0x0A, 0x3F);
        gime.new_frame();
        gime.record_body_scanline(0);
        let mut buffer = frame_buffer();
        gime.render_frame(&mut buffer, VideoOutput::Rgb);
        let row = &buffer[..SCREEN_WIDTH];
        let border = row.iter().filter(|&&p| p == 0xFFFFFF).count();
        let expected = if ff99 & 0x04 != 0 { 0 } else { 128 };
        assert_eq!(border, expected, "$FF99 = {ff99:#04x}");
    }
}

#[test]
fn video_base_and_row_pitch() {
    let mut gime = Gime::new(GimeConfig::builder().ram_size(2 * 1024 * 1024).build());
    gime.write(0x08, 0x80);
    // 16 bytes per line, lines per row 2.
    gime.write(0x08, 0x82);
    gime.write(0x09, 0x00);
    gime.write(0x0B, 0x01);
    gime.write(0x0D, 0xC0);
    gime.write(0x0E, 0x02);
    gime.new_frame();
    assert_eq!(gime.video_position, 0x80000 + 0x60000 + 0x10);

    gime.record_body_scanline(0);
    assert_eq!(gime.video_position, 0xE0010);
    gime.record_body_scanline(1);
    assert_eq!(gime.video_position, 0xE0020);

    // Horizontal virtual screen forces a 256 byte pitch.
    gime.write(0x0F, 0x80);
    gime.record_body_scanline(2);
    gime.record_body_scanline(3);
    assert_eq!(gime.video_position, 0xE0120);
}

#[test]
fn horizontal_offset_wraps_within_256_bytes() {
    let mut gime = gime();
    gime.write(0x08, 0x80);
    gime.write(0x09, 0x00);
    // Offset 0x7F * 2 = 0xFE.
    gime.write(0x0F, 0x7F);
    for i in 0..256 {
        gime.ram_mut()[i] = i as u8;
    }
    gime.new_frame();
    gime.record_body_scanline(0);
    assert_eq!(&gime.scanlines[0].data[..4], &[0xFE, 0xFF, 0x00, 0x01]);
}

#[test]
fn attribute_text_colours_and_underline() {
    let mut gime = gime();
    gime.write(0x21, 0x3F);
    gime.write(0x2A, 0x24);
    // 8 lines per row, 32 columns with attributes.
    gime.write(0x08, 0x03);
    gime.write(0x09, 0x01);
    // 'A' with underline, fg 8 + 2, bg 1.
    gime.ram_mut()[0] = 0x41;
    gime.ram_mut()[1] = 0x40 | (2 << 3) | 1;

    gime.write(0x0C, 0x00);
    gime.new_frame();
    gime.record_body_scanline(0);
    gime.write(0x0C, 0x07);
    gime.new_frame();
    gime.record_body_scanline(1);

    let mut buffer = frame_buffer();
    gime.render_frame(&mut buffer, VideoOutput::Rgb);
    // Row 0 of 'A' is 0x10: only bit 4 lit.
    let top = &buffer[64..80];
    assert_eq!(top[0], 0xFFFFFF);
    assert_eq!(top[6], 0xFF0000);
    assert_eq!(top[7], 0xFF0000);
    assert_eq!(top[8], 0xFFFFFF);
    // Row 7 is the underline row for 8 lines per row.
    let underline = &buffer[SCREEN_WIDTH + 64..SCREEN_WIDTH + 80];
    assert!(underline.iter().all(|&p| p == 0xFF0000));
}

#[test]
fn blinking_characters_blank_when_flip_flop_set() {
    let mut gime = gime();
    gime.write(0x08, 0x00);
    gime.write(0x09, 0x01);
    gime.ram_mut()[0] = 0x41;
    gime.ram_mut()[1] = 0x80 | (1 << 3);

    gime.new_frame();
    gime.record_body_scanline(0);
    assert_eq!(gime.scanlines[0].data[0], 0x41);
    assert_eq!(gime.scanlines[0].mode[0], 1 << 3);

    // Border timer period 3 toggles the blink flip-flop.
    gime.write(0x05, 0x01);
    for _ in 0..3 {
        gime.horizontal_sync_changed(false);
        gime.horizontal_sync_changed(true);
    }
    assert!(gime.is_blinking());
    gime.new_frame();
    gime.record_body_scanline(0);
    assert_eq!(gime.scanlines[0].data[0], 0x20);
    assert_eq!(gime.scanlines[0].mode[0], 1 << 3);
}

#[test]
fn legacy_text_uses_sam_offset_and_css_palette() {
    let mut gime = gime();
    gime.write(0x2C, 0x12);
    gime.write(0x2D, 0x00);
    gime.write(0x00, 0x80);
    // SAM F1 set: display offset 2 * 512.
    gime.write(0x39, 0);
    gime.write(0x0C, 0x04);
    gime.ram_mut()[0x400] = 0x01;
    gime.ram_mut()[0x401] = 0x41;
    gime.set_ff22(0x00);
    gime.new_frame();
    assert_eq!(gime.video_position, 0x400);

    gime.record_body_scanline(50);
    let mut buffer = frame_buffer();
    gime.render_frame(&mut buffer, VideoOutput::Rgb);
    let row = &buffer[50 * SCREEN_WIDTH..51 * SCREEN_WIDTH];
    // 'A' row 4 is 0x14.
    assert!(row[64..70].iter().all(|&p| p == rgb_color(0x12)));
    assert_eq!(&row[70..76], &[0, 0, rgb_color(0x12), rgb_color(0x12), 0, 0]);
    // Inverse 'A' on the next cell.
    assert_eq!(row[80], 0x000000);
    assert_eq!(row[86], rgb_color(0x12));
    // Legacy text border is black.
    assert_eq!(row[0], 0x000000);
}

#[test]
fn composite_artifacting_colours_pmode4() {
    let mut gime = Gime::new(
        GimeConfig::builder()
            .rom(rom_image())
            .artifacting(Artifacting::Standard)
            .build(),
    );
    gime.write(0x29, 0x3F);
    gime.write(0x00, 0x80);
    gime.ram_mut()[..32].fill(0xA5);
    gime.set_ff22(0xF0);
    gime.new_frame();
    gime.record_body_scanline(30);

    let mut buffer = frame_buffer();
    gime.render_frame(&mut buffer, VideoOutput::Composite);
    let row = &buffer[30 * SCREEN_WIDTH..31 * SCREEN_WIDTH];
    assert_eq!(row[64], 0xFF8000);
    assert_eq!(row[72], 0x0080FF);

    // RGB output never artifacts.
    gime.render_frame(&mut buffer, VideoOutput::Rgb);
    let row = &buffer[30 * SCREEN_WIDTH..31 * SCREEN_WIDTH];
    assert_eq!(row[64], rgb_color(0x3F));
    assert_eq!(row[66], rgb_color(0x00));

    gime.render_frame(&mut buffer, VideoOutput::Composite);
    assert!(!gime.render_frame(&mut buffer, VideoOutput::Composite));
    gime.set_artifacting(Artifacting::Reverse);
    assert!(gime.render_frame(&mut buffer, VideoOutput::Composite));
    assert_eq!(buffer[30 * SCREEN_WIDTH + 64], 0x0080FF);
}

#[test]
fn legacy_border_follows_ff22() {
    let mut gime = gime();
    gime.write(0x00, 0x80);
    gime.set_ff22(0x88);
    gime.new_frame();
    gime.record_border_scanline(0);
    assert_eq!(gime.scanlines[0].border, 0x3F);
    gime.set_ff22(0x80);
    gime.record_border_scanline(1);
    assert_eq!(gime.scanlines[1].border, 0x12);
}

#[test]
fn geometry_follows_lpf() {
    let mut gime = gime();
    assert_eq!(gime.geometry().top_border, Some(25));
    gime.write(0x09, 0x20);
    assert_eq!((gime.geometry().top_border, gime.geometry().body), (Some(23), Some(200)));
    gime.write(0x09, 0x40);
    assert_eq!((gime.geometry().top_border, gime.geometry().body), (None, None));
    gime.write(0x09, 0x68);
    assert_eq!((gime.geometry().top_border, gime.geometry().body), (Some(8), Some(225)));
    assert!(gime.geometry().wide);

    // Legacy video is never wide; the flag is latched at frame start.
    gime.write(0x00, 0x80);
    assert!(gime.geometry().wide);
    gime.new_frame();
    assert!(!gime.geometry().wide);
}

#[test]
fn render_reports_changes() {
    let mut gime = gime();
    let mut buffer = frame_buffer();
    gime.new_frame();
    gime.record_border_scanline(0);
    assert!(gime.render_frame(&mut buffer, VideoOutput::Rgb));
    gime.new_frame();
    gime.record_border_scanline(0);
    assert!(!gime.render_frame(&mut buffer, VideoOutput::Rgb));

    gime.write(0x25, 0x11);
    assert!(gime.render_frame(&mut buffer, VideoOutput::Rgb));
    assert!(gime.render_frame(&mut buffer, VideoOutput::Composite));
    assert!(!gime.render_frame(&mut buffer, VideoOutput::Composite));
}

#[test]
fn composite_output_and_phase_invert() {
    let mut gime = gime();
    gime.write(0x0A, 0x01);
    gime.new_frame();
    gime.record_border_scanline(0);
    let mut buffer = frame_buffer();
    gime.render_frame(&mut buffer, VideoOutput::Composite);
    let normal = buffer[0];
    assert_eq!(normal, 0x004C00);

    gime.write(0x08, 0x20);
    gime.render_frame(&mut buffer, VideoOutput::Composite);
    assert_ne!(buffer[0], normal);

    // Monochrome composite.
    gime.write(0x08, 0x10);
    gime.render_frame(&mut buffer, VideoOutput::Composite);
    let c = cocogime_common::Color::from_rgb24(buffer[0]);
    assert!(c.r == c.g && c.g == c.b);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut gime = gime();
    gime.write(0x00, 0x60);
    gime.write(0x02, 0x08);
    gime.write(0x11, 0x22);
    gime.write(0x17, 0x3D);
    gime.write(0x21, 0x2A);
    gime.write(0x08, 0x20);
    gime.write(0x01, 0x20);
    gime.write(0x05, 0x40);
    gime.write(0x4F, 0);
    gime.set_ff22(0x88);
    gime.advance_clock(7);
    gime.enter_bottom_border();
    for (i, byte) in gime.ram_mut().iter_mut().enumerate().take(0x10000) {
        *byte = i as u8;
    }

    let snapshot = gime.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: GimeSnapshot = serde_json::from_str(&json).unwrap();

    let mut restored = Gime::new(config());
    restored.ram_mut().copy_from_slice(gime.ram());
    restored.restore(&decoded);

    assert_eq!(restored.snapshot(), snapshot);
    assert_eq!(restored.next_timer_deadline(), gime.next_timer_deadline());
    assert_eq!(restored.irq_line(), gime.irq_line());
    for page in 0..9 {
        assert_eq!(restored.page_mapping(page), gime.page_mapping(page));
    }
    for addr in (0..=0xFEFFu16).step_by(0x0101) {
        assert_eq!(restored.read_memory(addr), gime.read_memory(addr), "${addr:04X}");
    }
    for offset in 0x00..0x50 {
        assert_eq!(restored.read(offset, &mut bus(0x5A)), gime.read(offset, &mut bus(0x5A)));
    }
}

#[test]
fn restore_collapses_palette_rotation() {
    let mut gime = gime();
    gime.new_frame();
    gime.record_body_scanline(0);
    gime.write(0x20, 0x15);
    assert_eq!(gime.palette.position(), 1);

    let snapshot = gime.snapshot();
    gime.restore(&snapshot);
    assert_eq!(gime.palette.position(), 0);
    assert_eq!(gime.read(0x20, &mut bus(0)), 0x15);
    assert!(gime.take_events().is_empty());
}

#[test]
fn restore_keeps_latched_legacy_video() {
    let mut gime = gime();
    gime.write(0x09, 0x28);
    assert!(gime.geometry().wide);
    gime.write(0x00, 0x80);
    gime.new_frame();
    assert!(!gime.geometry().wide);
    let snapshot = gime.snapshot();
    assert!(snapshot.legacy_video);

    let mut restored = Gime::new(config());
    restored.restore(&snapshot);
    assert_eq!(restored.geometry(), gime.geometry());
    restored.record_body_scanline(0);
    assert_eq!(restored.scanlines[0].video_mode, super::recorder::VideoMode::Legacy);
}

#[test]
fn restore_keeps_pending_sources() {
    let mut gime = gime();
    gime.write(0x00, 0x30);
    gime.write(0x02, 0x28);
    gime.write(0x03, 0x01);
    gime.interrupt_rising_edge(InterruptSource::TMR);
    gime.enter_bottom_border();
    gime.set_interrupt_line(InterruptSource::EI0, true);
    let json = serde_json::to_string(&gime.snapshot()).unwrap();

    let mut restored = Gime::new(config());
    restored.restore(&serde_json::from_str(&json).unwrap());
    assert_eq!(restored.pending_irq(), InterruptSource::TMR | InterruptSource::VBORD);
    assert_eq!(restored.pending_firq(), InterruptSource::EI0);
    // EI0 is still held high: no new edge.
    restored.set_interrupt_line(InterruptSource::EI0, true);
    assert_eq!(restored.read(0x03, &mut bus(0)), 0x01);
    restored.set_interrupt_line(InterruptSource::EI0, true);
    assert!(!restored.firq_line());
}

#[test]
fn random_register_traffic_keeps_page_table_coherent() {
    let mut rng = StdRng::seed_from_u64(0x6113);
    let mut gime = gime();
    let offsets: Vec<u8> = [0x00, 0x01, 0x0B, 0x4E, 0x4F].into_iter().chain(0x10..0x20).collect();

    for step in 0..5000 {
        let offset = offsets[rng.gen_range(0..offsets.len())];
        let value: u8 = rng.gen();
        gime.write(offset, value);
        if offset == 0x0B {
            // $FF9B only lands on the next remap; flip TR twice to force one.
            let ff91 = gime.registers[1];
            gime.write(0x01, ff91 ^ 0x01);
            gime.write(0x01, ff91);
        }
        if step % 500 == 0 {
            let cart = if rng.gen_bool(0.5) { Some(vec![0xC0; 0x4000]) } else { None };
            gime.set_cartridge_rom(cart);
        }
        for page in 0..9 {
            let mapping = gime.page_mapping(page);
            assert_eq!(
                (mapping.target, mapping.block),
                reference_page(&gime, page),
                "page {page} after ${:04X} <== ${value:02X}",
                0xFF90 + u16::from(offset)
            );
        }
    }
}

#[test]
fn reset_restores_power_on_mapping() {
    let mut gime = gime();
    gime.write(0x00, 0x60);
    gime.write(0x10, 0x00);
    gime.write(0x02, 0x01);
    gime.interrupt_rising_edge(InterruptSource::EI0);
    gime.ram_mut()[0] = 0x12;
    gime.reset();

    assert!(!gime.irq_line());
    assert_eq!(gime.page_mapping(0).block, 0x38);
    assert_eq!(gime.ram()[0], 0x12);
}
