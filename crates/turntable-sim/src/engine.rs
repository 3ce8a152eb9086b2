//! Scene engine: the host side of the rotator.
//!
//! `SceneEngine` owns the hecs ECS world, processes scene commands at frame
//! boundaries, advances the frame clock, runs the rotation system, and
//! produces `SceneSnapshot`s. Completely headless, so it can be driven by
//! a real-time loop or stepped by hand in tests.

use std::collections::VecDeque;

use anyhow::Context;
use hecs::World;

use turntable_core::commands::SceneCommand;
use turntable_core::components::{ObjectId, Rotator};
use turntable_core::config::{ObjectConfig, SceneConfig};
use turntable_core::constants::{MAX_TIME_SCALE, MIN_TIME_SCALE};
use turntable_core::state::SceneSnapshot;
use turntable_core::types::FrameTime;

use crate::systems;
use crate::world_setup;

/// The scene engine. Owns the ECS world and frame timing.
pub struct SceneEngine {
    world: World,
    time: FrameTime,
    time_scale: f32,
    paused: bool,
    next_object_id: u32,
    command_queue: VecDeque<SceneCommand>,
}

impl Default for SceneEngine {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}

impl SceneEngine {
    /// Create a scene populated from `config`.
    ///
    /// Objects that fail validation are skipped with a warning.
    pub fn new(config: SceneConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            time: FrameTime::default(),
            time_scale: 1.0,
            paused: false,
            next_object_id: 0,
            command_queue: VecDeque::new(),
        };
        engine.set_time_scale(config.time_scale);
        for object in &config.objects {
            if let Err(err) = engine.spawn(object) {
                log::warn!("skipping object: {err:#}");
            }
        }
        engine
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: SceneCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SceneCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the scene by one frame of `raw_delta_secs` real seconds and
    /// return the resulting snapshot.
    pub fn frame(&mut self, raw_delta_secs: f32) -> SceneSnapshot {
        self.process_commands();

        let scale = if self.paused { 0.0 } else { self.time_scale };
        self.time.advance(raw_delta_secs, scale);
        systems::rotate::run(&mut self.world, self.time.delta_secs);

        log::trace!(
            "frame {} dt={:.4}s elapsed={:.3}s",
            self.time.frame,
            self.time.delta_secs,
            self.time.elapsed_secs
        );
        self.snapshot()
    }

    /// Snapshot of the current state without advancing.
    pub fn snapshot(&self) -> SceneSnapshot {
        systems::snapshot::build_snapshot(&self.world, &self.time, self.paused, self.time_scale)
    }

    /// Spawn an object immediately, bypassing the command queue.
    pub fn spawn(&mut self, object: &ObjectConfig) -> anyhow::Result<ObjectId> {
        object.validate().context("invalid object")?;
        let mut object = object.clone();
        object.normalize();
        let (_entity, id) =
            world_setup::spawn_object(&mut self.world, &mut self.next_object_id, &object);
        log::info!("spawned object {} `{}`", id.0, object.name);
        Ok(id)
    }

    pub fn time(&self) -> FrameTime {
        self.time
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Current rotator of an object, if it has one.
    pub fn rotator(&self, object_id: ObjectId) -> Option<Rotator> {
        let entity = world_setup::find_object(&self.world, object_id)?;
        let rotator = self.world.get::<&Rotator>(entity).ok()?;
        Some(*rotator)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command. Invalid commands are logged and dropped.
    fn handle_command(&mut self, command: SceneCommand) {
        match command {
            SceneCommand::SetProperty {
                object_id,
                property,
                value,
            } => self.with_rotator(object_id, |rotator| {
                if let Err(err) = rotator.set(property, value) {
                    log::warn!("object {}: {err}", object_id.0);
                }
            }),
            SceneCommand::SetEnabled { object_id, enabled } => {
                self.with_rotator(object_id, |rotator| rotator.enabled = enabled)
            }
            SceneCommand::Spawn { object } => {
                if let Err(err) = self.spawn(&object) {
                    log::warn!("spawn `{}` rejected: {err:#}", object.name);
                }
            }
            SceneCommand::Despawn { object_id } => {
                match world_setup::find_object(&self.world, object_id) {
                    Some(entity) => {
                        // Found above, so despawn cannot fail.
                        let _ = self.world.despawn(entity);
                        log::info!("despawned object {}", object_id.0);
                    }
                    None => log::warn!("despawn: no object {}", object_id.0),
                }
            }
            SceneCommand::SetTimeScale { scale } => self.set_time_scale(scale),
            SceneCommand::Pause => self.paused = true,
            SceneCommand::Resume => self.paused = false,
        }
    }

    fn set_time_scale(&mut self, scale: f32) {
        if !scale.is_finite() {
            log::warn!("ignoring non-finite time scale {scale}");
            return;
        }
        self.time_scale = scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE);
    }

    fn with_rotator(&mut self, object_id: ObjectId, edit: impl FnOnce(&mut Rotator)) {
        let Some(entity) = world_setup::find_object(&self.world, object_id) else {
            log::warn!("no object {}", object_id.0);
            return;
        };
        match self.world.get::<&mut Rotator>(entity) {
            Ok(mut rotator) => edit(&mut *rotator),
            Err(_) => log::warn!("object {} has no rotator", object_id.0),
        }
    }
}
