//! Build a fully-initialized simulation scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with the body and anchor at t = 0)
//! - active load set (`LoadSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! integration and visualization systems

use bevy::prelude::Resource;

use crate::configuration::config::{DynamicsConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::forces::{AnchoredSpring, AngularDrag, Gravity, LinearDrag, LoadSet};
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyError, NVec2, RectBody, System};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// This is the main "runtime bundle" constructed from a [`ScenarioConfig`]:
/// it contains the engine settings, parameters, current system state, and
/// the set of active load terms
///
/// In Bevy terms, this is inserted as a `Resource` and then read by systems
/// responsible for integration and visualization
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub loads: LoadSet,
}

impl Scenario {
    /// Map `ScenarioConfig` -> runtime `Scenario`.
    ///
    /// Fails when the body configuration violates the construction
    /// contract (non-positive mass or dimensions).
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, BodyError> {
        // Body: map `RectConfig` -> runtime `RectBody`
        let r = &cfg.rect;
        let mut body = RectBody::new(r.top_left[0], r.top_left[1], r.width, r.height, r.m)?;
        body.v = NVec2::new(r.v[0], r.v[1]);

        // Initial system state: body and anchor at t = 0
        let system = System {
            body,
            anchor: NVec2::new(cfg.anchor[0], cfg.anchor[1]),
            t: 0.0,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            dt: p_cfg.dt,
            stiffness: p_cfg.stiffness,
            linear_damping: p_cfg.linear_damping,
            angular_damping: p_cfg.angular_damping,
            gravity: p_cfg.gravity,
            world_scale: p_cfg.world_scale,
        };

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            dynamics: cfg.engine.dynamics.unwrap_or(DynamicsConfig::Classic),
        };

        // Loads: register every term the demo exerts on the body. The
        // registration order matches the accumulation order of the step.
        let loads = LoadSet::new()
            .with(Gravity {
                g: parameters.gravity,
            })
            .with(LinearDrag {
                b: parameters.linear_damping,
            })
            .with(AnchoredSpring {
                stiffness: parameters.stiffness,
            })
            .with(AngularDrag {
                b: parameters.angular_damping,
            });

        Ok(Self {
            engine,
            parameters,
            system,
            loads,
        })
    }
}
