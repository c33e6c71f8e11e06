use std::path::PathBuf;

use anyhow::{Context, Result};
use cocogime_gime::{
    Artifacting, Gime, GimeConfig, GimeRevision, VideoOutput, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use typed_builder::TypedBuilder;

pub mod demo;
mod raster;

pub use raster::{FrameStats, Raster, LINES_PER_FRAME, TICKS_PER_LINE};

/// Frame count used when neither the command line nor
/// `COCOGIME_FRAMES` gives one.
pub const DEFAULT_FRAMES: u32 = 60;

#[derive(Debug, Clone, TypedBuilder)]
pub struct RunConfig {
    #[builder(default = DEFAULT_FRAMES)]
    pub frames: u32,
    #[builder(default)]
    pub output: VideoOutput,
    #[builder(default)]
    pub revision: GimeRevision,
    #[builder(default)]
    pub artifacting: Artifacting,
    /// Where to write the last frame as raw RGB24.
    #[builder(default, setter(strip_option))]
    pub rgb_out: Option<PathBuf>,
    /// Where to write the final chip snapshot as JSON.
    #[builder(default, setter(strip_option))]
    pub snapshot_out: Option<PathBuf>,
}

/// Outcome of [`run_demo`].
pub struct RunReport {
    pub frames: u32,
    pub stats: FrameStats,
    /// Frames whose rendered picture differed from the previous one.
    pub changed_frames: u32,
    /// Last rendered frame, `0x00RRGGBB` per pixel.
    pub pixels: Vec<u32>,
    pub gime: Gime,
}

/// Frame count override from `COCOGIME_FRAMES`, if set and valid.
pub fn frames_from_env() -> Option<u32> {
    std::env::var("COCOGIME_FRAMES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
}

/// Run the demo workload for `config.frames` frames, rendering each
/// one, and write the requested dumps.
pub fn run_demo(config: &RunConfig) -> Result<RunReport> {
    let mut gime = Gime::new(
        GimeConfig::builder()
            .revision(config.revision)
            .artifacting(config.artifacting)
            .build(),
    );
    demo::setup(&mut gime);
    let mut raster = Raster::new(gime);

    let mut pixels = vec![0u32; SCREEN_WIDTH * SCREEN_HEIGHT];
    let mut stats = FrameStats::default();
    let mut changed_frames = 0;
    for _ in 0..config.frames {
        stats.accumulate(raster.run_frame(demo::on_line));
        if raster.gime_mut().render_frame(&mut pixels, config.output) {
            changed_frames += 1;
        }
    }
    log::info!(
        "{} frames, {} IRQs, {} FIRQs, {changed_frames} changed",
        config.frames,
        stats.irqs,
        stats.firqs
    );

    let gime = raster.into_gime();
    if let Some(path) = &config.rgb_out {
        let mut bytes = Vec::with_capacity(pixels.len() * 3);
        cocogime_common::write_rgb24(&pixels, &mut bytes);
        std::fs::write(path, &bytes)
            .with_context(|| format!("Failed to write frame to '{}'", path.display()))?;
    }
    if let Some(path) = &config.snapshot_out {
        write_snapshot(&gime, path)?;
    }

    Ok(RunReport {
        frames: config.frames,
        stats,
        changed_frames,
        pixels,
        gime,
    })
}

pub fn write_snapshot(gime: &Gime, path: &std::path::Path) -> Result<()> {
    let json = serde_json::to_string_pretty(&gime.snapshot()).context("Failed to encode snapshot")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write snapshot to '{}'", path.display()))
}
