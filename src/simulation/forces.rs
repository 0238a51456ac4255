//! Force and torque contributors for the spring-rectangle system
//!
//! Defines the `Load` trait plus the four terms the demo registers:
//! gravity, linear drag, the anchored spring (force and torque), and
//! angular drag

use crate::simulation::states::{cross, NVec2, System};

/// Net force and torque accumulated over one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loads {
    pub force: NVec2, // net force on the center of mass
    pub torque: f64,  // net torque about the center of mass
}

impl Default for Loads {
    fn default() -> Self {
        Self {
            force: NVec2::zeros(),
            torque: 0.0,
        }
    }
}

/// Collection of load terms (gravity, drag, spring, etc.)
/// Each term implements [`Load`] and their contributions are summed
/// into a single force vector and torque scalar
pub struct LoadSet {
    terms: Vec<Box<dyn Load + Send + Sync>>,
}

impl LoadSet {
    /// Create an empty load set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add a load term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Load + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute the total loads on the body at time `t`
    /// - `out` is zeroed, then every term adds its contribution
    pub fn accumulate_loads(&self, t: f64, sys: &System, out: &mut Loads) {
        // Zero the accumulator
        *out = Loads::default();
        // Iterate over all load contributors
        for term in &self.terms {
            term.load(t, sys, out);
        }
    }
}

impl Default for LoadSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for load sources operating on [`System`]
/// Implementations add their force/torque contribution into `out`
pub trait Load {
    fn load(&self, t: f64, sys: &System, out: &mut Loads);
}

/// Uniform gravity. Screen coordinates put +y downward, so the weight
/// force is positive y.
pub struct Gravity {
    pub g: f64, // gravitational acceleration
}

impl Load for Gravity {
    fn load(&self, _t: f64, sys: &System, out: &mut Loads) {
        out.force += NVec2::new(0.0, sys.body.m * self.g);
    }
}

/// Linear velocity damping: `f += v * b` with `b` negative, so the
/// contribution always opposes the current velocity.
pub struct LinearDrag {
    pub b: f64, // damping coefficient, negative
}

impl Load for LinearDrag {
    fn load(&self, _t: f64, sys: &System, out: &mut Loads) {
        out.force += sys.body.v * self.b;
    }
}

/// Hookean spring from the system anchor to the body's top-left corner.
///
/// The attachment point is the corner, not the center of mass, so the
/// spring contributes a torque as well as a force.
pub struct AnchoredSpring {
    pub stiffness: f64, // spring constant k
}

impl Load for AnchoredSpring {
    fn load(&self, _t: f64, sys: &System, out: &mut Loads) {
        let body = &sys.body;

        // Hooke's law on the attachment corner. The displacement points
        // from the anchor to the corner; scaling by -k turns it into a
        // restoring force pulling the corner back toward the anchor.
        let spring_force = (body.top_left - sys.anchor) * (-self.stiffness);

        // Lever arm from the attachment corner to the center of mass.
        let r = body.center() - body.top_left;

        // r x f measures the force's tendency to spin the body about its
        // center; the torque convention here opposes that cross product.
        let rxf = cross(r, spring_force);

        out.torque += -1.0 * rxf;
        out.force += spring_force;
    }
}

/// Angular velocity damping: `torque += omega * b` with `b` negative.
pub struct AngularDrag {
    pub b: f64, // angular damping coefficient, negative
}

impl Load for AngularDrag {
    fn load(&self, _t: f64, sys: &System, out: &mut Loads) {
        out.torque += sys.body.omega * self.b;
    }
}
