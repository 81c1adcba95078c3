//! Integration tests for aerolattice-math.

use std::f64::consts::{FRAC_PI_2, PI};

use aerolattice_math::biot_savart::core_velocity_cap;
use aerolattice_math::rotation::rotate_vector;
use aerolattice_math::{filament_velocity, BoundingBox, CoreModel, DQuat, DVec3, EulerRot, RigidMotion};
use approx::assert_relative_eq;

// ─── Rotation Tests ───────────────────────────────────────────

#[test]
fn sandwich_rotation_matches_glam() {
    let q = DQuat::from_axis_angle(DVec3::new(1.0, 2.0, -0.5).normalize(), 0.7);
    let v = DVec3::new(0.3, -1.2, 2.0);
    let ours = rotate_vector(q, q.inverse(), v);
    let theirs = q * v;
    assert_relative_eq!(ours.x, theirs.x, epsilon = 1e-12);
    assert_relative_eq!(ours.y, theirs.y, epsilon = 1e-12);
    assert_relative_eq!(ours.z, theirs.z, epsilon = 1e-12);
}

#[test]
fn rigid_motion_rotates_about_pivot() {
    let motion = RigidMotion::new(
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(1.0, 0.0, 0.0),
        DQuat::from_rotation_z(FRAC_PI_2),
    );
    let p = motion.apply_point(DVec3::new(2.0, 0.0, 0.0));
    assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 1.0, epsilon = 1e-12);
}

#[test]
fn rigid_motion_inverse_round_trip() {
    let motion = RigidMotion::new(
        DVec3::new(0.4, -2.0, 0.1),
        DVec3::new(0.25, 0.0, 0.0),
        DQuat::from_euler(EulerRot::XYZ, 0.1, -0.3, 0.9),
    );
    let p = DVec3::new(3.0, 1.5, -0.7);
    let back = motion.inverse().apply_point(motion.apply_point(p));
    assert!((back - p).length() < 1e-12);
}

#[test]
fn directions_are_not_translated() {
    let motion = RigidMotion::new(DVec3::splat(10.0), DVec3::ZERO, DQuat::IDENTITY);
    assert_eq!(motion.apply_direction(DVec3::Z), DVec3::Z);
}

// ─── BoundingBox Tests ────────────────────────────────────────

#[test]
fn empty_box() {
    let b = BoundingBox::empty();
    assert!(b.is_empty());
    assert_eq!(b.extent(), DVec3::ZERO);
    assert!(!b.contains_point(DVec3::ZERO));
}

#[test]
fn box_from_points() {
    let b = BoundingBox::from_points([DVec3::new(1.0, -1.0, 0.0), DVec3::new(-2.0, 3.0, 0.5)]);
    assert_eq!(b.min, DVec3::new(-2.0, -1.0, 0.0));
    assert_eq!(b.max, DVec3::new(1.0, 3.0, 0.5));
    assert_eq!(b.center(), DVec3::new(-0.5, 1.0, 0.25));
    assert!(b.contains_point(DVec3::new(0.0, 0.0, 0.25)));
}

#[test]
fn box_overlap_and_merge() {
    let a = BoundingBox::from_points([DVec3::ZERO, DVec3::ONE]);
    let mut b = BoundingBox::from_points([DVec3::splat(0.5), DVec3::splat(2.0)]);
    let c = BoundingBox::from_points([DVec3::splat(3.0), DVec3::splat(4.0)]);
    assert!(a.overlaps(&b));
    assert!(!a.overlaps(&c));
    assert!(!a.overlaps(&BoundingBox::empty()));
    b.merge(&c);
    assert_eq!(b.max, DVec3::splat(4.0));
}

#[test]
fn box_transform_translates() {
    let a = BoundingBox::from_points([DVec3::ZERO, DVec3::ONE]);
    let moved = a.transformed(&RigidMotion::new(DVec3::X, DVec3::ZERO, DQuat::IDENTITY));
    assert_eq!(moved.min, DVec3::X);
    assert_eq!(moved.max, DVec3::new(2.0, 1.0, 1.0));
}

#[test]
fn box_serializes() {
    let a = BoundingBox::from_points([DVec3::ZERO, DVec3::new(1.0, 2.0, 3.0)]);
    let json = serde_json::to_string(&a).unwrap();
    let back: BoundingBox = serde_json::from_str(&json).unwrap();
    assert_eq!(a, back);
}

// ─── Biot-Savart Tests ────────────────────────────────────────

/// Closed-form speed on the perpendicular bisector of a filament of half-length `l`.
fn bisector_speed(gamma: f64, l: f64, d: f64) -> f64 {
    gamma / (4.0 * PI * d) * 2.0 * l / (l * l + d * d).sqrt()
}

#[test]
fn bisector_matches_closed_form() {
    let (gamma, l, d, core) = (2.5, 1.0, 0.8, 1.0e-4);
    let a = DVec3::new(-l, 0.0, 0.0);
    let b = DVec3::new(l, 0.0, 0.0);
    for model in [CoreModel::Rankine, CoreModel::Scully, CoreModel::LambOseen] {
        let q = filament_velocity(DVec3::new(0.0, d, 0.0), a, b, gamma, core, model);
        assert_relative_eq!(q.length(), bisector_speed(gamma, l, d), max_relative = 1e-6);
        // r1 × r2 points along +z for this layout
        assert!(q.z > 0.0);
        assert!(q.x.abs() < 1e-14 && q.y.abs() < 1e-14);
    }
}

#[test]
fn off_center_point_matches_angle_form() {
    let (gamma, core) = (1.0, 1.0e-3);
    let a = DVec3::new(0.0, 0.0, 0.0);
    let b = DVec3::new(2.0, 0.0, 0.0);
    let p = DVec3::new(0.5, 0.0, 1.5);
    let q = filament_velocity(p, a, b, gamma, core, CoreModel::LambOseen);

    let h = 1.5_f64;
    let cos1 = 0.5 / (0.25 + h * h).sqrt();
    let cos2 = -1.5 / (2.25 + h * h).sqrt();
    let expected = gamma / (4.0 * PI * h) * (cos1 - cos2);
    assert_relative_eq!(q.length(), expected, max_relative = 1e-10);
}

#[test]
fn velocity_is_linear_in_gamma() {
    let a = DVec3::new(0.0, -0.5, 0.0);
    let b = DVec3::new(0.1, 0.5, 0.2);
    let p = DVec3::new(0.7, 0.2, -0.3);
    let q1 = filament_velocity(p, a, b, 1.3, 0.05, CoreModel::LambOseen);
    let q2 = filament_velocity(p, a, b, 2.6, 0.05, CoreModel::LambOseen);
    assert_relative_eq!(q2.x, 2.0 * q1.x, max_relative = 1e-14);
    assert_relative_eq!(q2.y, 2.0 * q1.y, max_relative = 1e-14);
    assert_relative_eq!(q2.z, 2.0 * q1.z, max_relative = 1e-14);
}

#[test]
fn reversing_filament_flips_velocity() {
    let a = DVec3::new(-1.0, 0.0, 0.0);
    let b = DVec3::new(1.0, 0.0, 0.0);
    let p = DVec3::new(0.3, 0.4, 0.1);
    let q_ab = filament_velocity(p, a, b, 1.0, 0.01, CoreModel::Scully);
    let q_ba = filament_velocity(p, b, a, 1.0, 0.01, CoreModel::Scully);
    assert!((q_ab + q_ba).length() < 1e-14);
}

#[test]
fn speed_bounded_approaching_axis() {
    let gamma = 3.0;
    let core = 0.01;
    let a = DVec3::new(-1.0, 0.0, 0.0);
    let b = DVec3::new(1.0, 0.0, 0.0);
    let cap = core_velocity_cap(gamma, core);

    for model in [CoreModel::Rankine, CoreModel::Scully, CoreModel::LambOseen] {
        let mut ratio = 10.0;
        while ratio >= 0.001 {
            let p = DVec3::new(0.0, ratio * core, 0.0);
            let q = filament_velocity(p, a, b, gamma, core, model);
            assert!(q.is_finite());
            assert!(
                q.length() <= cap,
                "{model:?} at h = {ratio} core: |q| = {} > cap {cap}",
                q.length()
            );
            ratio *= 0.5;
        }
    }
}

#[test]
fn on_axis_point_gives_zero() {
    let a = DVec3::new(-1.0, 0.0, 0.0);
    let b = DVec3::new(1.0, 0.0, 0.0);
    for p in [DVec3::ZERO, a, b, DVec3::new(3.0, 0.0, 0.0)] {
        let q = filament_velocity(p, a, b, 1.0, 0.0, CoreModel::LambOseen);
        assert_eq!(q, DVec3::ZERO);
    }
}

#[test]
fn zero_length_filament_gives_zero() {
    let a = DVec3::new(0.2, 0.2, 0.2);
    let q = filament_velocity(DVec3::ZERO, a, a, 5.0, 0.1, CoreModel::Rankine);
    assert_eq!(q, DVec3::ZERO);
}

#[test]
fn zero_core_near_axis_stays_finite() {
    let a = DVec3::new(-1.0, 0.0, 0.0);
    let b = DVec3::new(1.0, 0.0, 0.0);
    let q = filament_velocity(DVec3::new(0.0, 1e-9, 0.0), a, b, 1.0, 0.0, CoreModel::Rankine);
    assert!(q.is_finite());
}

#[test]
fn core_factor_limits() {
    for model in [CoreModel::Rankine, CoreModel::Scully, CoreModel::LambOseen] {
        assert_eq!(model.factor(0.0, 0.1), 0.0);
        assert_eq!(model.factor(0.25, 0.0), 1.0);
    }
    assert_eq!(CoreModel::Rankine.factor(4.0, 1.0), 1.0);
    assert_relative_eq!(CoreModel::LambOseen.factor(100.0, 1.0), 1.0, epsilon = 1e-12);
}
