use std::path::PathBuf;

use cocogime::{RunConfig, DEFAULT_FRAMES};
use cocogime_gime::{Artifacting, VideoOutput, SCREEN_HEIGHT, SCREEN_WIDTH};

const USAGE: &str = "Usage: cocogime demo <out_rgb24_path> [frames] [--composite] [--artifacts]\n       \
                     cocogime snapshot <out_json_path> [frames]";

fn usage() -> ! {
    eprintln!("{USAGE}");
    std::process::exit(2);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| usage());
    let out_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| usage());

    let mut frames = cocogime::frames_from_env().unwrap_or(DEFAULT_FRAMES);
    let mut output = VideoOutput::Rgb;
    let mut artifacting = Artifacting::Off;
    for arg in args {
        if arg == "--composite" {
            output = VideoOutput::Composite;
        } else if arg == "--artifacts" {
            artifacting = Artifacting::Standard;
        } else {
            frames = arg.parse().unwrap_or_else(|_| {
                eprintln!("Invalid frames '{arg}'; expected an integer.");
                std::process::exit(2);
            });
        }
    }

    match command.as_str() {
        "demo" => {
            let config = RunConfig::builder()
                .frames(frames)
                .output(output)
                .artifacting(artifacting)
                .rgb_out(out_path.clone())
                .build();
            let report = cocogime::run_demo(&config)?;
            println!(
                "Wrote {} bytes ({}x{} rgb24) after {} frames to '{}'",
                report.pixels.len() * 3,
                SCREEN_WIDTH,
                SCREEN_HEIGHT,
                report.frames,
                out_path.display()
            );
        }
        "snapshot" => {
            let config = RunConfig::builder()
                .frames(frames)
                .snapshot_out(out_path.clone())
                .build();
            let report = cocogime::run_demo(&config)?;
            println!(
                "Wrote snapshot at tick {} to '{}'",
                report.gime.clock(),
                out_path.display()
            );
        }
        other => {
            eprintln!("Unknown command '{other}'.");
            usage();
        }
    }
    Ok(())
}
