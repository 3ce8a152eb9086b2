//! turntable: run a scene of rotators in a headless frame loop.
//!
//! Usage:
//!   turntable [SCENE_JSON] [--frames N] [--realtime]
//!
//! Without a scene file a single default rotator is spawned. Without
//! `--frames` the loop runs until interrupted.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::Context;

use turntable_app::frame_loop::{self, LoopConfig};
use turntable_app::logging::init_logging;
use turntable_core::config::SceneConfig;

struct Args {
    scene: Option<PathBuf>,
    frames: Option<u64>,
    realtime: bool,
}

fn main() {
    init_logging("info");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    if let Err(err) = run(&args) {
        log::error!("{err:#}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "turntable: headless per-frame rotator host\n\
         \n\
           turntable [SCENE_JSON] [--frames N] [--realtime]\n\
         \n\
           SCENE_JSON   Scene config file (default: one rotator around +Y at 10 deg/s)\n\
           --frames N   Stop after N frames and print the final snapshot as JSON\n\
           --realtime   Pace frames at 60 Hz even with --frames\n"
    );
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut parsed = Args {
        scene: None,
        frames: None,
        realtime: false,
    };
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frames" => {
                let value = iter.next().context("--frames needs a value")?;
                parsed.frames = Some(
                    value
                        .parse()
                        .with_context(|| format!("bad frame count `{value}`"))?,
                );
            }
            "--realtime" => parsed.realtime = true,
            other if other.starts_with("--") => anyhow::bail!("unknown option `{other}`"),
            path => parsed.scene = Some(PathBuf::from(path)),
        }
    }
    Ok(parsed)
}

fn run(args: &[String]) -> anyhow::Result<()> {
    let args = parse_args(args)?;

    let scene = match &args.scene {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::single_default(),
    };

    // A bounded run without --realtime is a batch job: no pacing, and
    // every frame is exactly one nominal frame long.
    let batch = args.frames.is_some() && !args.realtime;
    let config = if batch {
        LoopConfig {
            max_frames: args.frames,
            frame_duration: Duration::ZERO,
            fixed_delta: Some(frame_loop::FRAME_DURATION.as_secs_f32()),
        }
    } else {
        LoopConfig {
            max_frames: args.frames,
            ..LoopConfig::default()
        }
    };

    let handle = frame_loop::spawn_frame_loop(scene, config)?;

    let last = handle.join()?;
    if let Some(snapshot) = last {
        let json = serde_json::to_string_pretty(&snapshot).context("serializing snapshot")?;
        println!("{json}");
    }
    Ok(())
}
