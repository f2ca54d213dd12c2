pub mod tolerance;

pub use tolerance::Tolerance;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
///
/// Shape coordinates come out of sampled floating-point arithmetic, so
/// identity, containment, and ordering decisions all go through this
/// tolerance rather than exact comparison.
pub const EPSILON: f64 = 1e-5;

/// Rotates a vector by 90 degrees: `(x, y) -> (y, -x)`.
#[must_use]
pub fn perp(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// An axis-aligned rectangle given by two opposite corners.
///
/// Used both as the visible viewport when clipping unbounded shapes and
/// as the bounding box returned by bounded ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Corner with the smaller coordinates.
    pub min: Point2,
    /// Corner with the larger coordinates.
    pub max: Point2,
}

impl Rect {
    /// Creates a rectangle from two opposite corners.
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }
}
