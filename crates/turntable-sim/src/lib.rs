//! Scene host for TURNTABLE.
//!
//! Owns the hecs ECS world, advances the frame clock, runs the rotation
//! system once per frame, and produces `SceneSnapshot`s.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SceneEngine;
pub use turntable_core as core;
