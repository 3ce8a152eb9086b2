//! Core types and definitions for the TURNTABLE scene.
//!
//! This crate defines the vocabulary shared across the other crates:
//! transforms, the rotator component, frame timing, commands, snapshots,
//! the inspector property surface, and scene configuration.
//! It has no dependency on the ECS or the frame loop.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod inspector;
pub mod state;
pub mod types;
