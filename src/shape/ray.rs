use crate::error::Result;
use crate::math::{perp, Point2, Rect, Vector2};
use crate::raster::Mask;
use crate::render::Canvas;

use super::line::{stroke_chord, thick_chord_mask};
use super::{DisplayState, GeoObject, Line, PointSet};

/// A half-line from a start point in a fixed direction.
///
/// Keeps an embedded normal-form [`Line`]; the start point lies on that
/// line by construction and the positive side is the line's tangent.
#[derive(Debug, Clone)]
pub struct Ray {
    line: Line,
    start: Point2,
}

impl Ray {
    /// Creates a ray from a start point and direction vector.
    ///
    /// The line normal is the negative perpendicular of `direction`, so
    /// the derived tangent points along `direction`.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction is the zero vector.
    pub fn new(start: Point2, direction: Vector2) -> Result<Self> {
        let normal = -perp(&direction);
        let line = Line::new(normal, normal.dot(&start.coords))?;
        Ok(Self { line, start })
    }

    /// Returns the underlying infinite line.
    #[must_use]
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Unit direction of the positive side.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.line.direction()
    }

    /// Packed numeric identity data of the underlying line.
    #[must_use]
    pub fn data(&self) -> [f64; 3] {
        self.line.data()
    }

    /// Visible extent of the ray within the viewport.
    ///
    /// Keeps the infinite line's boundary crossings that lie strictly
    /// ahead of the start point. With one crossing ahead the start point
    /// itself bounds the visible span; with none the ray misses the
    /// viewport entirely.
    #[must_use]
    pub fn endpoints(&self, clip: &Rect) -> Option<[Point2; 2]> {
        let crossings = self.line.endpoints(clip)?;
        let v = self.direction();
        let ahead: Vec<Point2> = crossings
            .into_iter()
            .filter(|p| v.dot(&(p - self.start)) > 0.0)
            .collect();
        match *ahead.as_slice() {
            [] => None,
            [p] => Some([self.start, p]),
            [a, b, ..] => Some([a, b]),
        }
    }
}

impl GeoObject for Ray {
    fn name(&self) -> &'static str {
        "Ray"
    }

    fn identical_to(&self, other: &Self) -> bool {
        self.line.identical_to(&other.line)
    }

    fn distance_to(&self, p: &Point2) -> f64 {
        if self.direction().dot(&(*p - self.start)) >= 0.0 {
            self.line.distance_to(p)
        } else {
            (*p - self.start).norm()
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, clip: &Rect, scale: f64, visualize: bool) {
        if let Some(endpoints) = self.endpoints(clip) {
            stroke_chord(canvas, endpoints, scale, visualize);
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            line: self.line.scaled(factor),
            start: self.start * factor,
        }
    }

    fn shifted(&self, offset: &Vector2) -> Self {
        Self {
            line: self.line.shifted(offset),
            start: self.start + offset,
        }
    }

    /// Only the finite endpoint is reported; callers needing visible
    /// extent use [`Ray::endpoints`] with a viewport.
    fn bounding_box(&self) -> Option<Rect> {
        Some(Rect::new(self.start, self.start))
    }

    fn mask(&self, clip: &Rect, out_size: (usize, usize), scale: f64, mask_size: usize) -> Mask {
        match self.endpoints(clip) {
            Some(endpoints) => thick_chord_mask(endpoints, out_size, scale, mask_size),
            None => Mask::new(out_size),
        }
    }

    fn display(&self) -> &DisplayState {
        self.line.display()
    }

    fn display_mut(&mut self) -> &mut DisplayState {
        self.line.display_mut()
    }
}

impl PointSet for Ray {
    fn contains(&self, p: &Point2) -> bool {
        self.line.contains(p) && self.direction().dot(&(*p - self.start)) >= 0.0
    }

    fn closest_point(&self, p: &Point2) -> Point2 {
        let candidate = self.line.closest_point(p);
        if self.contains(&candidate) {
            candidate
        } else {
            self.start
        }
    }
}
