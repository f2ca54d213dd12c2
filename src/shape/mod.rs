mod circle;
mod line;
mod point;
mod ray;
mod segment;

pub use circle::Circle;
pub use line::Line;
pub use point::Point;
pub use ray::Ray;
pub use segment::Segment;

use crate::math::{Point2, Rect, Tolerance, Vector2};
use crate::raster::Mask;
use crate::render::Canvas;

/// Auxiliary display state attached to every shape.
///
/// Consumed by scene-level code for labeling and layout decisions. Never
/// participates in geometric identity and survives transforms unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayState {
    /// 1-based label index; `None` when unlabeled.
    pub index: Option<usize>,
    /// Whether scene-level code should skip rendering this shape.
    pub hidden: bool,
}

/// Capability set shared by every shape kind.
///
/// Shapes are immutable values: [`scaled`](GeoObject::scaled) and
/// [`shifted`](GeoObject::shifted) return a new shape with every derived
/// field recomputed, so no caller can observe a half-updated shape.
pub trait GeoObject: Clone {
    /// Stable type tag, e.g. `"Circle"`.
    fn name(&self) -> &'static str;

    /// Compares the packed numeric data of two shapes of the same kind
    /// within the default tolerance.
    fn identical_to(&self, other: &Self) -> bool;

    /// Distance from `p` to the geometric locus, always `>= 0`.
    fn distance_to(&self, p: &Point2) -> f64;

    /// Renders the shape onto a vector canvas.
    ///
    /// `clip` is the visible viewport, used to bound shapes with
    /// unbounded extent; `scale` is the current world-to-canvas scale,
    /// used to keep stroke widths and point radii constant in screen
    /// space. `visualize` selects the highlighted stroke width.
    fn draw(&self, canvas: &mut dyn Canvas, clip: &Rect, scale: f64, visualize: bool);

    /// Returns this shape scaled by a scalar factor about the origin.
    ///
    /// Non-uniform scaling is not supported; callers pass positive
    /// factors.
    #[must_use]
    fn scaled(&self, factor: f64) -> Self;

    /// Returns this shape translated by `offset`.
    #[must_use]
    fn shifted(&self, offset: &Vector2) -> Self;

    /// Axis-aligned bounding box, or `None` for unbounded shapes.
    fn bounding_box(&self) -> Option<Rect>;

    /// Rasterizes the shape into an `out_size` binary mask.
    ///
    /// The occupied region is thickened by `mask_size` pixels and world
    /// coordinates map to grid coordinates through division by `scale`.
    fn mask(&self, clip: &Rect, out_size: (usize, usize), scale: f64, mask_size: usize) -> Mask;

    /// Display state for scene-level consumers.
    fn display(&self) -> &DisplayState;

    /// Mutable display state.
    fn display_mut(&mut self) -> &mut DisplayState;

    /// Sets the 1-based label index.
    fn set_index(&mut self, index: usize) {
        self.display_mut().index = Some(index);
    }

    /// Sets the hidden flag.
    fn set_hidden(&mut self, hidden: bool) {
        self.display_mut().hidden = hidden;
    }
}

/// Shapes representable as a locus of points.
///
/// Adds membership and metric projection on top of [`GeoObject`].
/// [`Point`] is deliberately not a `PointSet`; the [`Shape`] sum type
/// handles its degenerate case.
pub trait PointSet: GeoObject {
    /// Epsilon-tolerant membership test.
    fn contains(&self, p: &Point2) -> bool;

    /// Closest point of the shape to `p`.
    fn closest_point(&self, p: &Point2) -> Point2;
}

/// The closed set of shape kinds.
///
/// Dispatch is by exhaustive match; adding a kind is a compile-time
/// event, not a runtime one.
#[derive(Debug, Clone)]
pub enum Shape {
    /// A zero-dimensional point.
    Point(Point),
    /// A circle given by center and radius.
    Circle(Circle),
    /// An infinite line in normal form.
    Line(Line),
    /// A bounded span between two endpoints.
    Segment(Segment),
    /// A half-line from a start point.
    Ray(Ray),
}

impl Shape {
    /// Epsilon-tolerant membership test.
    ///
    /// For the point variant this means "is `p` the point itself";
    /// every other variant delegates to its [`PointSet`] impl.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        match self {
            Shape::Point(point) => {
                Tolerance::default().identical_all(&point.data(), &[p.x, p.y])
            }
            Shape::Circle(circle) => circle.contains(p),
            Shape::Line(line) => line.contains(p),
            Shape::Segment(segment) => segment.contains(p),
            Shape::Ray(ray) => ray.contains(p),
        }
    }

    /// Closest point of the shape to `p`.
    ///
    /// A point is its own closest point; every other variant delegates
    /// to its [`PointSet`] impl.
    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Point2 {
        match self {
            Shape::Point(point) => *point.position(),
            Shape::Circle(circle) => circle.closest_point(p),
            Shape::Line(line) => line.closest_point(p),
            Shape::Segment(segment) => segment.closest_point(p),
            Shape::Ray(ray) => ray.closest_point(p),
        }
    }
}

impl GeoObject for Shape {
    fn name(&self) -> &'static str {
        match self {
            Shape::Point(point) => point.name(),
            Shape::Circle(circle) => circle.name(),
            Shape::Line(line) => line.name(),
            Shape::Segment(segment) => segment.name(),
            Shape::Ray(ray) => ray.name(),
        }
    }

    fn identical_to(&self, other: &Self) -> bool {
        match (self, other) {
            (Shape::Point(a), Shape::Point(b)) => a.identical_to(b),
            (Shape::Circle(a), Shape::Circle(b)) => a.identical_to(b),
            (Shape::Line(a), Shape::Line(b)) => a.identical_to(b),
            (Shape::Segment(a), Shape::Segment(b)) => a.identical_to(b),
            (Shape::Ray(a), Shape::Ray(b)) => a.identical_to(b),
            _ => false,
        }
    }

    fn distance_to(&self, p: &Point2) -> f64 {
        match self {
            Shape::Point(point) => point.distance_to(p),
            Shape::Circle(circle) => circle.distance_to(p),
            Shape::Line(line) => line.distance_to(p),
            Shape::Segment(segment) => segment.distance_to(p),
            Shape::Ray(ray) => ray.distance_to(p),
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, clip: &Rect, scale: f64, visualize: bool) {
        match self {
            Shape::Point(point) => point.draw(canvas, clip, scale, visualize),
            Shape::Circle(circle) => circle.draw(canvas, clip, scale, visualize),
            Shape::Line(line) => line.draw(canvas, clip, scale, visualize),
            Shape::Segment(segment) => segment.draw(canvas, clip, scale, visualize),
            Shape::Ray(ray) => ray.draw(canvas, clip, scale, visualize),
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        match self {
            Shape::Point(point) => Shape::Point(point.scaled(factor)),
            Shape::Circle(circle) => Shape::Circle(circle.scaled(factor)),
            Shape::Line(line) => Shape::Line(line.scaled(factor)),
            Shape::Segment(segment) => Shape::Segment(segment.scaled(factor)),
            Shape::Ray(ray) => Shape::Ray(ray.scaled(factor)),
        }
    }

    fn shifted(&self, offset: &Vector2) -> Self {
        match self {
            Shape::Point(point) => Shape::Point(point.shifted(offset)),
            Shape::Circle(circle) => Shape::Circle(circle.shifted(offset)),
            Shape::Line(line) => Shape::Line(line.shifted(offset)),
            Shape::Segment(segment) => Shape::Segment(segment.shifted(offset)),
            Shape::Ray(ray) => Shape::Ray(ray.shifted(offset)),
        }
    }

    fn bounding_box(&self) -> Option<Rect> {
        match self {
            Shape::Point(point) => point.bounding_box(),
            Shape::Circle(circle) => circle.bounding_box(),
            Shape::Line(line) => line.bounding_box(),
            Shape::Segment(segment) => segment.bounding_box(),
            Shape::Ray(ray) => ray.bounding_box(),
        }
    }

    fn mask(&self, clip: &Rect, out_size: (usize, usize), scale: f64, mask_size: usize) -> Mask {
        match self {
            Shape::Point(point) => point.mask(clip, out_size, scale, mask_size),
            Shape::Circle(circle) => circle.mask(clip, out_size, scale, mask_size),
            Shape::Line(line) => line.mask(clip, out_size, scale, mask_size),
            Shape::Segment(segment) => segment.mask(clip, out_size, scale, mask_size),
            Shape::Ray(ray) => ray.mask(clip, out_size, scale, mask_size),
        }
    }

    fn display(&self) -> &DisplayState {
        match self {
            Shape::Point(point) => point.display(),
            Shape::Circle(circle) => circle.display(),
            Shape::Line(line) => line.display(),
            Shape::Segment(segment) => segment.display(),
            Shape::Ray(ray) => ray.display(),
        }
    }

    fn display_mut(&mut self) -> &mut DisplayState {
        match self {
            Shape::Point(point) => point.display_mut(),
            Shape::Circle(circle) => circle.display_mut(),
            Shape::Line(line) => line.display_mut(),
            Shape::Segment(segment) => segment.display_mut(),
            Shape::Ray(ray) => ray.display_mut(),
        }
    }
}

impl From<Point> for Shape {
    fn from(point: Point) -> Self {
        Shape::Point(point)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Shape::Line(line)
    }
}

impl From<Segment> for Shape {
    fn from(segment: Segment) -> Self {
        Shape::Segment(segment)
    }
}

impl From<Ray> for Shape {
    fn from(ray: Ray) -> Self {
        Shape::Ray(ray)
    }
}
