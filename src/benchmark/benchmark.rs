use std::time::Instant;

use crate::configuration::config::DynamicsConfig;
use crate::simulation::forces::{AnchoredSpring, AngularDrag, Gravity, LinearDrag, LoadSet, Loads};
use crate::simulation::integrator::spring_verlet_step;
use crate::simulation::params::Parameters;
use crate::simulation::states::{NVec2, RectBody, System};

/// Demo parameters used by both benchmarks
fn bench_params() -> Parameters {
    Parameters {
        dt: 0.02,
        stiffness: 0.5,
        linear_damping: -1.0,
        angular_damping: -7.0,
        gravity: 9.81,
        world_scale: 100.0,
    }
}

/// Build the demo system: 100x50 rectangle hanging at (200, 0)
fn bench_system() -> System {
    let mut body = RectBody::new(200.0, 0.0, 100.0, 50.0, None).unwrap();
    body.v = NVec2::new(0.0, 2.0);

    System {
        body,
        anchor: NVec2::new(200.0, 0.0),
        t: 0.0,
    }
}

fn bench_loads_set(p: &Parameters) -> LoadSet {
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

/// Time raw load accumulation (no integration) over a static system
pub fn bench_loads() {
    let iters = 1_000_000_u64;

    let params = bench_params();
    let sys = bench_system();
    let loads = bench_loads_set(&params);

    let mut out = Loads::default();

    // Warm up
    loads.accumulate_loads(sys.t, &sys, &mut out);

    // Accumulate a sink so the calls cannot be optimized away
    let mut sink = 0.0;
    let t0 = Instant::now();
    for _ in 0..iters {
        loads.accumulate_loads(sys.t, &sys, &mut out);
        sink += out.force.y + out.torque;
    }
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "bench_loads: {iters} evals in {elapsed:8.6} s, {:12.0} evals/s (sink {sink:.3})",
        iters as f64 / elapsed
    );
}

/// Time full integration steps for increasing step counts
pub fn bench_step() {
    let step_counts = [10_000_u64, 100_000, 1_000_000];

    let params = bench_params();
    let loads = bench_loads_set(&params);

    for steps in step_counts {
        // Fresh system per run so every run integrates the same trajectory
        let mut sys = bench_system();

        let t0 = Instant::now();
        for _ in 0..steps {
            spring_verlet_step(&mut sys, &loads, &params, DynamicsConfig::Classic);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "bench_step: {steps:8} steps in {elapsed:8.6} s, {:12.0} steps/s (t = {:.1} s)",
            steps as f64 / elapsed,
            sys.t
        );
    }
}
