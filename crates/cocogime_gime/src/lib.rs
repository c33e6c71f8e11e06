//! Model of the CoCo 3 GIME ("Graphics Interrupt Memory Enhancer").
//!
//! The chip is driven by a host machine: the host forwards register
//! accesses in the `$FF90-$FFDF` window, routes CPU memory traffic
//! through the MMU, raises the external interrupt inputs, and calls
//! the raster hooks (`new_frame`, `record_*_scanline`, hsync edges)
//! at the right points of its scanline schedule. Frames are recorded
//! while the beam runs and rendered afterwards in one pass.

mod config;
mod gime;

pub use config::{Artifacting, GimeConfig, GimeRevision};
pub use gime::{
    FloatingBus, FrameGeometry, Gime, GimeEvent, GimeSnapshot, InterruptSource, MmuEntry,
    PageMapping, PageTarget, VideoOutput,
};

/// Width of one rendered scanline in pixels.
pub const SCREEN_WIDTH: usize = 640;
/// Number of recorded scanlines (top border, body and bottom border).
pub const SCREEN_HEIGHT: usize = 243;
/// Size of one MMU block.
pub const BLOCK_SIZE: usize = 0x2000;
/// Size of the internal BASIC/extended ROM image.
pub const ROM_SIZE: usize = 0x8000;
