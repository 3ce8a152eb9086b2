//! TURNTABLE headless host.
//!
//! Drives a `SceneEngine` from a real-time frame loop thread and exposes
//! it to other threads through a command channel and a shared snapshot.

pub mod frame_loop;
pub mod logging;
pub mod state;

pub use turntable_core as core;
