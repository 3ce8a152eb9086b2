//! ECS systems that operate on the scene world each frame.
//!
//! Systems are plain functions over `&mut World` (or `&World` when
//! read-only). They hold no state of their own.

pub mod rotate;
pub mod snapshot;
