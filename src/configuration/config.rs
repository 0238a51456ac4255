//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – global engine options (dynamics mode)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`RectConfig`]       – initial state of the rectangle body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   dynamics: "classic"     # or "corrected"
//!
//! parameters:
//!   dt: 0.02                # fixed step size (s)
//!   stiffness: 0.5          # spring constant k
//!   linear_damping: -1.0    # b (negative, velocity-opposing)
//!   angular_damping: -7.0   # angular drag (negative)
//!   gravity: 9.81           # m/s^2
//!   world_scale: 100.0      # pixels per meter (1 px = 1 cm)
//!
//! rect:
//!   top_left: [200.0, 0.0]
//!   width: 100.0
//!   height: 50.0
//!   v: [0.0, 2.0]
//!   m: 1.0                  # optional, defaults to 1
//!
//! anchor: [200.0, 0.0]
//! ```
//!
//! The engine then maps this configuration into its internal runtime
//! scenario representation.

use serde::Deserialize;

/// How the velocity corrector turns force into acceleration
/// `dynamics: "classic"` or `dynamics: "corrected"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicsConfig {
    #[serde(rename = "classic")] // new_a = f * m, and the stored acceleration is never refreshed
    Classic,

    #[serde(rename = "corrected")] // Textbook arithmetic: new_a = f / m, written back so the next position update uses it
    Corrected,
}

/// High-level engine configuration
/// Controls the structure of the simulation
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub dynamics: Option<DynamicsConfig>, // velocity-corrector mode, defaults to classic
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub dt: f64,              // fixed step size (s)
    pub stiffness: f64,       // spring constant k
    pub linear_damping: f64,  // linear drag coefficient b, negative
    pub angular_damping: f64, // angular drag coefficient, negative
    pub gravity: f64,         // gravitational acceleration (m/s^2)
    pub world_scale: f64,     // pixels per meter
}

/// Configuration for the rectangle body's initial state
#[derive(Deserialize, Debug)]
pub struct RectConfig {
    pub top_left: [f64; 2], // initial top-left corner (pixels)
    pub width: f64,         // rectangle width (pixels)
    pub height: f64,        // rectangle height (pixels)
    pub v: [f64; 2],        // initial linear velocity
    pub m: Option<f64>,     // mass; defaults to 1 when omitted
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // engine-level configuration (dynamics mode)
    pub parameters: ParametersConfig, // global numerical and physical parameters
    pub rect: RectConfig,             // initial state of the rectangle body
    pub anchor: [f64; 2],             // fixed end of the spring (pixels)
}
