//! Fixed-step time integrator for the spring-rectangle system
//!
//! One call advances the system by one step `params.dt`: velocity-Verlet
//! for the linear state, semi-implicit Euler for the angular state, driven
//! by a `LoadSet` and `Parameters`

use crate::configuration::config::DynamicsConfig;
use crate::simulation::forces::{LoadSet, Loads};
use crate::simulation::params::Parameters;
use crate::simulation::states::System;

/// Advance the system by one step.
///
/// Linear state uses velocity-Verlet: the position moves first using the
/// stored acceleration, loads are evaluated at the new pose, then the
/// velocity is corrected with the average of old and new acceleration.
/// Angular state uses semi-implicit Euler for contrast: the angular
/// velocity is updated from the torque first, and the already-updated
/// value rotates the body.
///
/// `mode` picks how force becomes acceleration in the corrector:
/// [`DynamicsConfig::Classic`] scales the net force by the mass and leaves
/// the stored acceleration untouched, while [`DynamicsConfig::Corrected`]
/// uses `f / m` and writes the new acceleration back for the next step's
/// position update.
pub fn spring_verlet_step(
    sys: &mut System,
    loads: &LoadSet,
    params: &Parameters,
    mode: DynamicsConfig,
) {
    let dt = params.dt;

    // Start velocity-Verlet by performing the translation:
    // dr = v * dt + a * (dt^2 / 2), using the acceleration stored on the
    // body. Positions are in pixels (1 px = 1 cm) while the math assumes
    // meters, so the displacement is scaled up by world_scale.
    let body = &mut sys.body;
    let dr = body.v * dt + body.a * (0.5 * dt * dt);
    body.translate(dr * params.world_scale);

    // Advance time; loads are evaluated at the new pose and time
    sys.t += dt;

    let mut out = Loads::default();
    loads.accumulate_loads(sys.t, &*sys, &mut out);

    let body = &mut sys.body;

    // Finish velocity-Verlet: turn the net force into the new acceleration
    // and advance the velocity by the average of old and new.
    let new_a = match mode {
        // Classic multiplies by the mass instead of dividing, and never
        // writes new_a back, so `body.a` stays at whatever the body started
        // with and the predictor above keeps reusing it.
        DynamicsConfig::Classic => out.force * body.m,
        DynamicsConfig::Corrected => out.force / body.m,
    };
    let dv = (body.a + new_a) * (0.5 * dt);
    body.v += dv;
    if mode == DynamicsConfig::Corrected {
        body.a = new_a;
    }

    // Rotation, semi-implicit Euler:
    // alpha_n+1 = torque / J
    // omega_n+1 = omega_n + alpha_n+1 * dt
    // theta advances using the already-updated omega
    body.alpha = out.torque / body.j;
    body.omega += body.alpha * dt;
    let delta_theta = body.omega * dt;
    body.rotate(delta_theta);
}
