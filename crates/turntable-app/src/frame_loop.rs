//! Frame loop thread: runs the scene engine at the target frame rate.
//!
//! The engine is created inside the thread so the thread owns it outright.
//! Commands arrive via an `mpsc` channel; the latest snapshot is stored in
//! shared state for polling. Each frame is fed the real time elapsed since
//! the previous one.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::Context;

use turntable_core::config::SceneConfig;
use turntable_core::constants::TARGET_FRAME_RATE;
use turntable_core::state::SceneSnapshot;
use turntable_sim::SceneEngine;

use crate::state::{LoopCommand, LoopHandle, SharedSnapshot};

/// Nominal duration of one frame.
pub const FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TARGET_FRAME_RATE as u64);

/// How the loop runs.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Stop on its own after this many frames. `None` runs until shutdown.
    pub max_frames: Option<u64>,
    /// Pacing between frames. `Duration::ZERO` runs flat out.
    pub frame_duration: Duration,
    /// Feed every frame this many seconds instead of the measured time.
    pub fixed_delta: Option<f32>,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            max_frames: None,
            frame_duration: FRAME_DURATION,
            fixed_delta: None,
        }
    }
}

/// Spawns the frame loop in a new thread.
pub fn spawn_frame_loop(scene: SceneConfig, config: LoopConfig) -> anyhow::Result<LoopHandle> {
    let (command_tx, command_rx) = mpsc::channel::<LoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = latest_snapshot.clone();

    let thread = std::thread::Builder::new()
        .name("turntable-frame-loop".into())
        .spawn(move || {
            let engine = SceneEngine::new(scene);
            run_frame_loop(engine, &config, &command_rx, &shared);
        })
        .context("failed to spawn frame loop thread")?;

    Ok(LoopHandle {
        command_tx,
        latest_snapshot,
        thread,
    })
}

/// The frame loop. Runs until Shutdown, channel disconnect, or the frame limit.
fn run_frame_loop(
    mut engine: SceneEngine,
    config: &LoopConfig,
    command_rx: &mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<SceneSnapshot>>,
) {
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;
    log::info!("frame loop started");

    loop {
        // 1. Drain pending commands
        loop {
            match command_rx.try_recv() {
                Ok(LoopCommand::Scene(command)) => engine.queue_command(command),
                Ok(LoopCommand::Shutdown) => {
                    log::info!("frame loop shut down at frame {}", engine.time().frame);
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one frame by the real time since the last one
        let now = Instant::now();
        let measured = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;
        let delta = config.fixed_delta.unwrap_or(measured);
        let snapshot = engine.frame(delta);
        let frame = snapshot.time.frame;

        // 3. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if config.max_frames.is_some_and(|max| frame >= max) {
            log::info!("frame loop reached {frame} frames");
            return;
        }

        // 4. Sleep until the next frame
        next_frame_time += config.frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > config.frame_duration * 2 {
            // Too far behind; reset to avoid a catch-up spiral
            log::debug!("frame loop fell behind, resetting schedule");
            next_frame_time = now;
        }
    }
}
