//! Rotation system.
//!
//! Each frame, every enabled `Rotator` turns its entity's `Transform` by
//! `axis * speed * dt` degrees of euler rotation.

use glam::{EulerRot, Quat, Vec3};
use hecs::World;

use turntable_core::components::Rotator;
use turntable_core::constants::MIN_ROTATION_LENGTH_SQUARED;
use turntable_core::types::{Space, Transform};

/// Euler increment (degrees) a rotator contributes over `dt` seconds.
///
/// Each component is computed in f64 and reduced modulo a full turn, so
/// any finite axis, speed, and delta yield a finite increment.
pub fn euler_delta(rotator: &Rotator, dt: f32) -> Vec3 {
    let turn = |axis: f32| -> f32 {
        (axis as f64 * rotator.speed as f64 * dt as f64 % 360.0) as f32
    };
    Vec3::new(turn(rotator.axis.x), turn(rotator.axis.y), turn(rotator.axis.z))
}

/// Quaternion for an (x, y, z) euler increment in degrees.
///
/// Applied z first, then x, then y, about fixed axes.
pub fn euler_to_quat(euler_degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        euler_degrees.y.to_radians(),
        euler_degrees.x.to_radians(),
        euler_degrees.z.to_radians(),
    )
}

/// Compose an euler increment onto a transform's orientation.
///
/// A zero increment leaves the transform untouched. So does any increment
/// or orientation that cannot produce a finite unit quaternion.
pub fn apply_rotation(transform: &mut Transform, euler_degrees: Vec3, space: Space) {
    if euler_degrees == Vec3::ZERO {
        return;
    }
    if !euler_degrees.is_finite() {
        log::warn!("skipping non-finite rotation increment {euler_degrees}");
        return;
    }
    let increment = euler_to_quat(euler_degrees);
    let rotated = match space {
        Space::Local => transform.rotation * increment,
        Space::World => increment * transform.rotation,
    };
    if !rotated.is_finite() || rotated.length_squared() < MIN_ROTATION_LENGTH_SQUARED {
        log::warn!("skipping degenerate orientation {rotated}");
        return;
    }
    transform.rotation = rotated.normalize();
}

/// Rotate every entity with Transform + Rotator by one frame of `dt` seconds.
pub fn run(world: &mut World, dt: f32) {
    if dt == 0.0 {
        return;
    }
    for (_entity, (transform, rotator)) in world.query_mut::<(&mut Transform, &Rotator)>() {
        if !rotator.enabled {
            continue;
        }
        apply_rotation(transform, euler_delta(rotator, dt), rotator.space);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_euler_delta_is_axis_times_speed_times_dt() {
        let r = Rotator::new(Vec3::new(1.0, 2.0, -3.0), 10.0);
        assert_eq!(euler_delta(&r, 0.5), Vec3::new(5.0, 10.0, -15.0));
    }

    #[test]
    fn test_euler_delta_wraps_full_turns() {
        let r = Rotator::new(Vec3::new(1.0, 0.0, -1.0), 400.0);
        let d = euler_delta(&r, 1.0);
        assert!((d.x - 40.0).abs() < 1e-4);
        assert!((d.z + 40.0).abs() < 1e-4);
        let q = euler_to_quat(d);
        let expected = euler_to_quat(Vec3::new(400.0, 0.0, -400.0));
        assert!(q.abs_diff_eq(expected, EPS) || q.abs_diff_eq(-expected, EPS));
    }

    #[test]
    fn test_extreme_finite_inputs_stay_finite() {
        for (axis, speed, dt) in [
            (Vec3::new(0.0, 4.0, 0.0), f32::MAX, 0.1),
            (Vec3::splat(f32::MAX), f32::MAX, 1.0 / 3.0),
            (Vec3::new(-f32::MAX, 1.0, f32::MIN_POSITIVE), -f32::MAX, 1e-30),
        ] {
            let r = Rotator::new(axis, speed);
            let d = euler_delta(&r, dt);
            assert!(d.is_finite(), "delta {d} for axis {axis} speed {speed}");

            let mut t = Transform::IDENTITY;
            for _ in 0..3 {
                apply_rotation(&mut t, d, Space::Local);
                apply_rotation(&mut t, d, Space::World);
            }
            assert!(t.rotation.is_finite(), "rotation {}", t.rotation);
            assert!((t.rotation.length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_degenerate_orientation_is_left_alone() {
        let mut t = Transform::from_rotation(Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));
        apply_rotation(&mut t, Vec3::new(0.0, 10.0, 0.0), Space::Local);
        assert_eq!(t.rotation, Quat::from_xyzw(0.0, 0.0, 0.0, 0.0));

        let mut t = Transform::IDENTITY;
        apply_rotation(&mut t, Vec3::new(f32::NAN, 0.0, 0.0), Space::Local);
        assert_eq!(t.rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_non_unit_orientation_is_renormalized() {
        let mut t = Transform::from_rotation(Quat::from_rotation_x(0.5) * 3.0);
        apply_rotation(&mut t, Vec3::new(0.0, 20.0, 0.0), Space::Local);
        let expected = Quat::from_rotation_x(0.5) * Quat::from_rotation_y(20f32.to_radians());
        assert!(t.rotation.abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_single_axis_matches_axis_angle() {
        for (axis, expected) in [
            (Vec3::X, Quat::from_rotation_x(30f32.to_radians())),
            (Vec3::Y, Quat::from_rotation_y(30f32.to_radians())),
            (Vec3::Z, Quat::from_rotation_z(30f32.to_radians())),
        ] {
            let q = euler_to_quat(axis * 30.0);
            assert!(q.abs_diff_eq(expected, EPS), "axis {axis}: {q} != {expected}");
        }
    }

    #[test]
    fn test_euler_order_z_then_x_then_y() {
        let e = Vec3::new(20.0, 30.0, 40.0);
        let expected = Quat::from_rotation_y(30f32.to_radians())
            * Quat::from_rotation_x(20f32.to_radians())
            * Quat::from_rotation_z(40f32.to_radians());
        assert!(euler_to_quat(e).abs_diff_eq(expected, EPS));
    }

    #[test]
    fn test_zero_increment_is_exact_noop() {
        let start = Quat::from_xyzw(0.1, 0.2, 0.3, 0.9);
        let mut t = Transform::from_rotation(start);
        apply_rotation(&mut t, Vec3::ZERO, Space::Local);
        apply_rotation(&mut t, Vec3::ZERO, Space::World);
        assert_eq!(t.rotation, start);
    }

    #[test]
    fn test_local_and_world_space_composition() {
        let start = Quat::from_rotation_x(90f32.to_radians());
        let inc = Vec3::new(0.0, 45.0, 0.0);
        let q = Quat::from_rotation_y(45f32.to_radians());

        let mut local = Transform::from_rotation(start);
        apply_rotation(&mut local, inc, Space::Local);
        assert!(local.rotation.abs_diff_eq(start * q, EPS));

        let mut world = Transform::from_rotation(start);
        apply_rotation(&mut world, inc, Space::World);
        assert!(world.rotation.abs_diff_eq(q * start, EPS));

        assert!(!local.rotation.abs_diff_eq(world.rotation, 1e-3));
    }

    #[test]
    fn test_space_irrelevant_from_identity() {
        let inc = Vec3::new(10.0, 20.0, 30.0);
        let mut local = Transform::IDENTITY;
        let mut world = Transform::IDENTITY;
        apply_rotation(&mut local, inc, Space::Local);
        apply_rotation(&mut world, inc, Space::World);
        assert!(local.rotation.abs_diff_eq(world.rotation, EPS));
    }

    #[test]
    fn test_result_stays_normalized() {
        let mut t = Transform::IDENTITY;
        for _ in 0..10_000 {
            apply_rotation(&mut t, Vec3::new(0.7, 1.3, 0.2), Space::Local);
        }
        assert!((t.rotation.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_run_skips_disabled_and_bare_transforms() {
        let mut world = World::new();
        let spinning = world.spawn((Transform::IDENTITY, Rotator::new(Vec3::Y, 90.0)));
        let disabled = world.spawn((
            Transform::IDENTITY,
            Rotator {
                enabled: false,
                ..Rotator::new(Vec3::Y, 90.0)
            },
        ));
        let bare = world.spawn((Transform::IDENTITY,));

        run(&mut world, 1.0);

        let expected = Quat::from_rotation_y(90f32.to_radians());
        let t = world.get::<&Transform>(spinning).unwrap();
        assert!(t.rotation.abs_diff_eq(expected, EPS));
        assert_eq!(world.get::<&Transform>(disabled).unwrap().rotation, Quat::IDENTITY);
        assert_eq!(world.get::<&Transform>(bare).unwrap().rotation, Quat::IDENTITY);
    }

    #[test]
    fn test_run_leaves_translation_and_scale() {
        let mut world = World::new();
        let start = Transform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::IDENTITY,
            scale: Vec3::splat(2.0),
        };
        let e = world.spawn((start, Rotator::default()));
        run(&mut world, 0.25);
        let t = *world.get::<&Transform>(e).unwrap();
        assert_eq!(t.translation, start.translation);
        assert_eq!(t.scale, start.scale);
        assert_ne!(t.rotation, Quat::IDENTITY);
    }
}
