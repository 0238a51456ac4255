use springsim::configuration::config::DynamicsConfig;
use springsim::simulation::forces::{AnchoredSpring, AngularDrag, Gravity, LinearDrag, LoadSet};
use springsim::simulation::integrator::spring_verlet_step;
use springsim::simulation::params::Parameters;
use springsim::simulation::states::{cross, rotate_about, BodyError, NVec2, RectBody, System};

use approx::{assert_abs_diff_eq, assert_relative_eq};

use std::f64::consts::{FRAC_PI_2, PI};

/// Build the demo body: 100x50 rectangle with its top-left at (200, 0)
pub fn demo_body() -> RectBody {
    RectBody::new(200.0, 0.0, 100.0, 50.0, None).unwrap()
}

/// Demo system: the body moving down at 2 m/s, spring anchored at its
/// initial top-left corner
pub fn demo_system() -> System {
    let mut body = demo_body();
    body.v = NVec2::new(0.0, 2.0);

    System {
        body,
        anchor: NVec2::new(200.0, 0.0),
        t: 0.0,
    }
}

/// The classic demo parameters
pub fn demo_params() -> Parameters {
    Parameters {
        dt: 0.02,
        stiffness: 0.5,
        linear_damping: -1.0,
        angular_damping: -7.0,
        gravity: 9.81,
        world_scale: 100.0,
    }
}

/// Parameters with every force coefficient zeroed
pub fn zero_params() -> Parameters {
    Parameters {
        dt: 0.02,
        stiffness: 0.0,
        linear_damping: 0.0,
        angular_damping: 0.0,
        gravity: 0.0,
        world_scale: 100.0,
    }
}

/// Register the full demo load set for the given parameters
pub fn load_set(p: &Parameters) -> LoadSet {
    LoadSet::new()
        .with(Gravity { g: p.gravity })
        .with(LinearDrag {
            b: p.linear_damping,
        })
        .with(AnchoredSpring {
            stiffness: p.stiffness,
        })
        .with(AngularDrag {
            b: p.angular_damping,
        })
}

// ==================================================================================
// Vector helper tests
// ==================================================================================

#[test]
fn cross_is_z_component_of_3d_cross() {
    assert_eq!(cross(NVec2::new(1.0, 0.0), NVec2::new(0.0, 1.0)), 1.0);
    assert_eq!(cross(NVec2::new(0.0, 1.0), NVec2::new(1.0, 0.0)), -1.0);
}

#[test]
fn rotate_about_origin_quarter_turn() {
    let p = rotate_about(NVec2::new(1.0, 0.0), FRAC_PI_2, NVec2::zeros());
    assert_abs_diff_eq!(p, NVec2::new(0.0, 1.0), epsilon = 1e-12);
}

#[test]
fn rotate_about_offset_pivot() {
    // (2, 1) rotated a half turn about (1, 1) lands at (0, 1)
    let p = rotate_about(NVec2::new(2.0, 1.0), PI, NVec2::new(1.0, 1.0));
    assert_abs_diff_eq!(p, NVec2::new(0.0, 1.0), epsilon = 1e-12);
}

// ==================================================================================
// Body geometry tests
// ==================================================================================

#[test]
fn center_is_diagonal_midpoint() {
    let body = RectBody::new(10.0, 20.0, 100.0, 50.0, None).unwrap();
    assert_eq!(body.center(), NVec2::new(60.0, 45.0));
}

#[test]
fn translate_shifts_all_corners_exactly() {
    let mut body = demo_body();
    let before = body.clone();
    let delta = NVec2::new(3.5, -2.0);

    body.translate(delta);

    assert_eq!(body.top_left, before.top_left + delta);
    assert_eq!(body.top_right, before.top_right + delta);
    assert_eq!(body.bottom_right, before.bottom_right + delta);
    assert_eq!(body.bottom_left, before.bottom_left + delta);

    // Nothing but the corners moves
    assert_eq!(body.width, before.width);
    assert_eq!(body.height, before.height);
    assert_eq!(body.theta, before.theta);
    assert_eq!(body.v, before.v);
}

#[test]
fn rotation_preserves_center() {
    for angle in [0.3, -1.2, PI, 7.5] {
        let mut body = demo_body();
        let center_before = body.center();

        body.rotate(angle);

        assert_relative_eq!(body.center(), center_before, epsilon = 1e-9);
    }
}

#[test]
fn rotations_compose() {
    let mut stepped = demo_body();
    stepped.rotate(0.4);
    stepped.rotate(0.35);

    let mut direct = demo_body();
    direct.rotate(0.75);

    assert_relative_eq!(stepped.top_left, direct.top_left, epsilon = 1e-9);
    assert_relative_eq!(stepped.top_right, direct.top_right, epsilon = 1e-9);
    assert_relative_eq!(stepped.bottom_right, direct.bottom_right, epsilon = 1e-9);
    assert_relative_eq!(stepped.bottom_left, direct.bottom_left, epsilon = 1e-9);
    assert_relative_eq!(stepped.theta, direct.theta, epsilon = 1e-12);
}

#[test]
fn rotation_keeps_edge_lengths() {
    let mut body = demo_body();
    body.rotate(1.1);

    let top = body.top_right - body.top_left;
    let side = body.bottom_left - body.top_left;

    assert_relative_eq!(top.norm(), body.width, epsilon = 1e-9);
    assert_relative_eq!(side.norm(), body.height, epsilon = 1e-9);
}

// ==================================================================================
// Construction guard tests
// ==================================================================================

#[test]
fn mass_defaults_to_one() {
    let body = demo_body();
    assert_eq!(body.m, 1.0);
    // Plate approximation: (50^2 + 100^2) / 12000
    assert_relative_eq!(body.j, 12500.0 / 12000.0, epsilon = 1e-12);
}

#[test]
fn non_positive_mass_is_rejected() {
    for m in [0.0, -1.0, f64::NAN] {
        let res = RectBody::new(0.0, 0.0, 10.0, 10.0, Some(m));
        assert!(
            matches!(res, Err(BodyError::NonPositiveMass(_))),
            "mass {m} should be rejected"
        );
    }
}

#[test]
fn degenerate_rect_is_rejected() {
    let res = RectBody::new(0.0, 0.0, 0.0, 10.0, None);
    assert!(matches!(res, Err(BodyError::DegenerateRect { .. })));
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn coasting_without_loads_keeps_velocities() {
    let params = zero_params();
    let loads = load_set(&params);

    let mut sys = demo_system();
    sys.body.v = NVec2::new(3.0, -1.0);
    sys.body.omega = 0.25;

    let v0 = sys.body.v;
    let omega0 = sys.body.omega;

    for _ in 0..100 {
        spring_verlet_step(&mut sys, &loads, &params, DynamicsConfig::Classic);
    }

    // No force coefficients, no velocity change - bit-exact
    assert_eq!(sys.body.v, v0);
    assert_eq!(sys.body.omega, omega0);
}

#[test]
fn first_step_translation_is_exact() {
    // With the spring removed the first step has no torque, so the corners
    // see the pure predictor translation: v * dt * world_scale = (0, 4)
    let mut params = demo_params();
    params.stiffness = 0.0;
    let loads = load_set(&params);

    let mut sys = demo_system();
    spring_verlet_step(&mut sys, &loads, &params, DynamicsConfig::Classic);

    assert_eq!(sys.body.top_left, NVec2::new(200.0, 4.0));
    assert_eq!(sys.body.top_right, NVec2::new(300.0, 4.0));
    assert_eq!(sys.body.bottom_right, NVec2::new(300.0, 54.0));
    assert_eq!(sys.body.bottom_left, NVec2::new(200.0, 54.0));
    assert_eq!(sys.body.theta, 0.0);
}

#[test]
fn demo_first_step_values() {
    // Hand-computed single step of the full demo scene:
    //   after the (0, 4) translation the spring stretch is (0, 4), so
    //   f = (0, 9.81) + (0, -2) + (0, -2) = (0, 5.81)
    //   r = (50, 25), spring force (0, -2) => torque = 100
    //   alpha = 100 / (12500 / 12000) = 96
    let params = demo_params();
    let loads = load_set(&params);

    let mut sys = demo_system();
    spring_verlet_step(&mut sys, &loads, &params, DynamicsConfig::Classic);

    assert_eq!(sys.body.v.x, 0.0);
    assert_relative_eq!(sys.body.v.y, 2.0581, epsilon = 1e-12);
    assert_relative_eq!(sys.body.alpha, 96.0, epsilon = 1e-12);
    assert_relative_eq!(sys.body.omega, 1.92, epsilon = 1e-12);
    assert_relative_eq!(sys.body.theta, 0.0384, epsilon = 1e-12);
    assert_relative_eq!(sys.t, 0.02, epsilon = 1e-15);
}

#[test]
fn long_run_stays_finite() {
    let params = demo_params();
    let loads = load_set(&params);

    let mut sys = demo_system();
    for _ in 0..1000 {
        spring_verlet_step(&mut sys, &loads, &params, DynamicsConfig::Classic);
    }

    let body = &sys.body;
    for value in [
        body.top_left.x,
        body.top_left.y,
        body.v.x,
        body.v.y,
        body.theta,
        body.omega,
        body.alpha,
    ] {
        assert!(value.is_finite(), "state went non-finite: {value}");
    }
}

#[test]
fn unstretched_spring_exerts_nothing() {
    // Anchor on the resting top-left corner, no gravity, no motion: the
    // spring term sees zero displacement and the body must stay put
    let mut params = zero_params();
    params.stiffness = 0.5;
    let loads = load_set(&params);

    let mut sys = demo_system();
    sys.body.v = NVec2::zeros();

    spring_verlet_step(&mut sys, &loads, &params, DynamicsConfig::Classic);

    assert_eq!(sys.body.v, NVec2::zeros());
    assert_eq!(sys.body.omega, 0.0);
    assert_eq!(sys.body.top_left, NVec2::new(200.0, 0.0));
}

// ==================================================================================
// Dynamics mode tests
// ==================================================================================

#[test]
fn classic_never_refreshes_stored_acceleration() {
    // Gravity only. The stored acceleration stays at its initial zero, so
    // the second step's translation comes from velocity alone:
    // dy = v1 * dt * scale = 0.0981 * 0.02 * 100 = 0.1962
    let mut params = zero_params();
    params.gravity = 9.81;
    let loads = load_set(&params);

    let mut sys = demo_system();
    sys.body.v = NVec2::zeros();

    spring_verlet_step(&mut sys, &loads, &params, DynamicsConfig::Classic);
    assert_eq!(sys.body.a, NVec2::zeros());
    assert_relative_eq!(sys.body.v.y, 0.0981, epsilon = 1e-12);

    spring_verlet_step(&mut sys, &loads, &params, DynamicsConfig::Classic);
    assert_eq!(sys.body.a, NVec2::zeros());
    assert_relative_eq!(sys.body.top_left.y, 0.1962, epsilon = 1e-9);
}

#[test]
fn corrected_feeds_acceleration_forward() {
    // Same gravity-only scene in corrected mode: after the first step the
    // body carries a = (0, 9.81), and the second step's translation gains
    // the a * dt^2 / 2 term:
    // dy = (0.0981 * 0.02 + 9.81 * 0.5 * 0.02^2) * 100 = 0.3924
    let mut params = zero_params();
    params.gravity = 9.81;
    let loads = load_set(&params);

    let mut sys = demo_system();
    sys.body.v = NVec2::zeros();

    spring_verlet_step(&mut sys, &loads, &params, DynamicsConfig::Corrected);
    assert_relative_eq!(sys.body.a.y, 9.81, epsilon = 1e-12);
    assert_relative_eq!(sys.body.v.y, 0.0981, epsilon = 1e-12);

    spring_verlet_step(&mut sys, &loads, &params, DynamicsConfig::Corrected);
    assert_relative_eq!(sys.body.top_left.y, 0.3924, epsilon = 1e-9);
}

#[test]
fn classic_scales_force_by_mass() {
    // With m = 2 the classic corrector computes new_a = f * m = (0, 39.24),
    // four times the corrected f / m = (0, 9.81)
    let mut params = zero_params();
    params.gravity = 9.81;
    let loads = load_set(&params);

    let body = RectBody::new(200.0, 0.0, 100.0, 50.0, Some(2.0)).unwrap();
    let mut classic = System {
        body: body.clone(),
        anchor: NVec2::new(200.0, 0.0),
        t: 0.0,
    };
    let mut corrected = System {
        body,
        anchor: NVec2::new(200.0, 0.0),
        t: 0.0,
    };

    spring_verlet_step(&mut classic, &loads, &params, DynamicsConfig::Classic);
    spring_verlet_step(&mut corrected, &loads, &params, DynamicsConfig::Corrected);

    assert_relative_eq!(classic.body.v.y, 0.3924, epsilon = 1e-12);
    assert_relative_eq!(corrected.body.v.y, 0.0981, epsilon = 1e-12);
    assert_relative_eq!(classic.body.v.y, 4.0 * corrected.body.v.y, epsilon = 1e-12);
}
