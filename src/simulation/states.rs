//! Core state types for the spring-rectangle simulation.
//!
//! Defines the 2D vector alias and helpers plus the body/system structs:
//! - `NVec2` with free `cross` / `rotate_about` helpers
//! - `RectBody` - the rectangle with linear and angular state
//! - `System` - the body, the spring anchor, and the current time `t`

use nalgebra::{Rotation2, Vector2};
use thiserror::Error;

pub type NVec2 = Vector2<f64>;

/// Scalar cross product of two 2D vectors: `a.x * b.y - a.y * b.x`.
///
/// Both inputs are implicitly z = 0, so the full cross product would have
/// only a z-component; that component is returned as a scalar.
pub fn cross(a: NVec2, b: NVec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Rotate point `p` by `angle` radians about `pivot`.
///
/// Translates `p` relative to the pivot, applies the standard rotation
/// matrix, and translates back. Returns a new vector.
pub fn rotate_about(p: NVec2, angle: f64, pivot: NVec2) -> NVec2 {
    pivot + Rotation2::new(angle) * (p - pivot)
}

/// Construction-time contract violations for [`RectBody`].
///
/// A non-positive mass or a degenerate rectangle zeroes the moment of
/// inertia, which the torque update divides by every step.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("body mass must be positive, got {0}")]
    NonPositiveMass(f64),
    #[error("rectangle dimensions must be positive, got {width} x {height}")]
    DegenerateRect { width: f64, height: f64 },
}

/// A rigid rectangle, stored as its four corners.
///
/// The corners always form a `width` x `height` rectangle consistent with
/// `theta`: they are only ever mutated through [`RectBody::translate`] and
/// [`RectBody::rotate`], starting from an axis-aligned construction.
#[derive(Debug, Clone)]
pub struct RectBody {
    pub width: f64,
    pub height: f64,

    pub top_left: NVec2,
    pub top_right: NVec2,
    pub bottom_right: NVec2,
    pub bottom_left: NVec2,

    pub v: NVec2,   // linear velocity
    pub a: NVec2,   // linear acceleration
    pub theta: f64, // orientation (radians, accumulates, not wrapped)
    pub omega: f64, // angular velocity
    pub alpha: f64, // angular acceleration
    pub m: f64,     // mass
    pub j: f64,     // moment of inertia, fixed at construction
}

impl RectBody {
    /// Build an axis-aligned rectangle from its top-left corner.
    ///
    /// `m` defaults to 1 when not given. The moment of inertia is the
    /// rectangular-plate approximation `m * (h^2 + w^2) / 12000`; the 12000
    /// folds the plate formula's 1/12 together with the cm^2 -> m^2 unit
    /// conversion (positions are in pixels, one pixel per centimeter).
    pub fn new(x: f64, y: f64, width: f64, height: f64, m: Option<f64>) -> Result<Self, BodyError> {
        let m = m.unwrap_or(1.0);
        if !(m > 0.0) {
            return Err(BodyError::NonPositiveMass(m));
        }
        if !(width > 0.0) || !(height > 0.0) {
            return Err(BodyError::DegenerateRect { width, height });
        }

        Ok(Self {
            width,
            height,
            top_left: NVec2::new(x, y),
            top_right: NVec2::new(x + width, y),
            bottom_right: NVec2::new(x + width, y + height),
            bottom_left: NVec2::new(x, y + height),
            v: NVec2::zeros(),
            a: NVec2::zeros(),
            theta: 0.0,
            omega: 0.0,
            alpha: 0.0,
            m,
            j: m * (height * height + width * width) / 12000.0,
        })
    }

    /// Midpoint of the top-left -> bottom-right diagonal.
    ///
    /// Recomputed from the current corners on every call; the corners move
    /// every step, so caching would go stale immediately.
    pub fn center(&self) -> NVec2 {
        let diagonal = self.bottom_right - self.top_left;
        self.top_left + diagonal * 0.5
    }

    /// Rotate the rectangle by `angle` radians about its own center.
    ///
    /// The center is evaluated once, before any corner moves; all four
    /// corners rotate about that same cached point.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.theta += angle;
        let center = self.center();

        self.top_left = rotate_about(self.top_left, angle, center);
        self.top_right = rotate_about(self.top_right, angle, center);
        self.bottom_right = rotate_about(self.bottom_right, angle, center);
        self.bottom_left = rotate_about(self.bottom_left, angle, center);

        self
    }

    /// Translate all four corners by `delta`. No other state changes.
    pub fn translate(&mut self, delta: NVec2) -> &mut Self {
        self.top_left += delta;
        self.top_right += delta;
        self.bottom_right += delta;
        self.bottom_left += delta;

        self
    }
}

/// The whole simulation state: one body on a spring.
#[derive(Debug, Clone)]
pub struct System {
    pub body: RectBody, // the rectangle
    pub anchor: NVec2,  // fixed end of the spring
    pub t: f64,         // time
}
