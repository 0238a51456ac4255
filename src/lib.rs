pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{cross, rotate_about, BodyError, NVec2, RectBody, System};
pub use simulation::forces::{AnchoredSpring, AngularDrag, Gravity, LinearDrag, Load, LoadSet, Loads};
pub use simulation::integrator::spring_verlet_step;
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    DynamicsConfig, EngineConfig, ParametersConfig, RectConfig, ScenarioConfig,
};

pub use visualization::springsim_vis2d::run_2d;

pub use benchmark::benchmark::{bench_loads, bench_step};
