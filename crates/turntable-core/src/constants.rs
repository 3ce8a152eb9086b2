//! Scene constants and tuning defaults.

use glam::Vec3;

/// Target frame rate of the headless frame loop (Hz).
pub const TARGET_FRAME_RATE: u32 = 60;

/// Largest raw frame delta the clock will accept (seconds).
/// A hitch longer than this is treated as exactly this long.
pub const MAX_FRAME_DELTA: f32 = 1.0 / 3.0;

// --- Rotator defaults ---

/// Default rotation speed (degrees per second).
pub const DEFAULT_ROTATION_SPEED: f32 = 10.0;

/// Default rotation axis (world up).
pub const DEFAULT_ROTATION_AXIS: Vec3 = Vec3::Y;

/// Squared length below which a quaternion cannot be normalized reliably.
pub const MIN_ROTATION_LENGTH_SQUARED: f32 = 1e-6;

// --- Time scale ---

/// Lower bound for the scene time scale.
pub const MIN_TIME_SCALE: f32 = 0.0;

/// Upper bound for the scene time scale.
pub const MAX_TIME_SCALE: f32 = 4.0;
