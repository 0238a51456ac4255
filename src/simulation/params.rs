//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size,
//! - spring stiffness and the two damping coefficients,
//! - gravitational acceleration,
//! - the world-to-pixel scale factor

#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64,              // fixed step size (seconds)
    pub stiffness: f64,       // spring constant k
    pub linear_damping: f64,  // b, negative so drag opposes velocity
    pub angular_damping: f64, // angular drag coefficient, negative
    pub gravity: f64,         // gravitational acceleration (m/s^2)
    pub world_scale: f64,     // pixels per meter (physics in meters, 1 px = 1 cm)
}
