//! High-level runtime engine settings
//!
//! Selects the dynamics mode (classic or corrected) used when building
//! and running a `Scenario`

use crate::configuration::config::DynamicsConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub dynamics: DynamicsConfig, // classic or corrected velocity update
}
