use crate::error::{GeometryError, Result};
use crate::math::{perp, Point2, Rect, Tolerance, Vector2};
use crate::raster::Mask;
use crate::render::Canvas;

use super::line::{stroke_chord, thick_chord_mask};
use super::{DisplayState, GeoObject, Line, PointSet};

/// A bounded span between two distinct endpoints.
///
/// Keeps an embedded normal-form [`Line`] for distance and containment
/// math; the endpoints and the line are always rebuilt together, so they
/// cannot desynchronize.
#[derive(Debug, Clone)]
pub struct Segment {
    line: Line,
    end_points: [Point2; 2],
    length: f64,
}

impl Segment {
    /// Creates a segment between two endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoints coincide.
    pub fn new(p1: Point2, p2: Point2) -> Result<Self> {
        if p1 == p2 {
            return Err(
                GeometryError::Degenerate("segment endpoints must be distinct".into()).into(),
            );
        }
        let normal = perp(&(p1 - p2));
        let line = Line::new(normal, normal.dot(&p1.coords))?;
        Ok(Self {
            line,
            end_points: [p1, p2],
            length: (p1 - p2).norm(),
        })
    }

    /// Returns the underlying infinite line.
    #[must_use]
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Returns the two endpoints.
    ///
    /// A segment is already bounded, so no viewport is involved.
    #[must_use]
    pub fn endpoints(&self) -> [Point2; 2] {
        self.end_points
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Packed numeric identity data of the underlying line.
    #[must_use]
    pub fn data(&self) -> [f64; 3] {
        self.line.data()
    }
}

impl GeoObject for Segment {
    fn name(&self) -> &'static str {
        "Segment"
    }

    fn identical_to(&self, other: &Self) -> bool {
        self.line.identical_to(&other.line)
    }

    fn distance_to(&self, p: &Point2) -> f64 {
        let [p1, p2] = self.end_points;
        if (p2 - p1).dot(&(*p - p1)) < 0.0 {
            (*p - p1).norm()
        } else if (p1 - p2).dot(&(*p - p2)) < 0.0 {
            (*p - p2).norm()
        } else {
            self.line.distance_to(p)
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas, _clip: &Rect, scale: f64, visualize: bool) {
        stroke_chord(canvas, self.end_points, scale, visualize);
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            line: self.line.scaled(factor),
            end_points: [self.end_points[0] * factor, self.end_points[1] * factor],
            length: self.length * factor,
        }
    }

    fn shifted(&self, offset: &Vector2) -> Self {
        Self {
            line: self.line.shifted(offset),
            end_points: [self.end_points[0] + offset, self.end_points[1] + offset],
            length: self.length,
        }
    }

    fn bounding_box(&self) -> Option<Rect> {
        let [p1, p2] = self.end_points;
        Some(Rect::new(
            Point2::new(p1.x.min(p2.x), p1.y.min(p2.y)),
            Point2::new(p1.x.max(p2.x), p1.y.max(p2.y)),
        ))
    }

    fn mask(&self, _clip: &Rect, out_size: (usize, usize), scale: f64, mask_size: usize) -> Mask {
        thick_chord_mask(self.end_points, out_size, scale, mask_size)
    }

    fn display(&self) -> &DisplayState {
        self.line.display()
    }

    fn display_mut(&mut self) -> &mut DisplayState {
        self.line.display_mut()
    }
}

impl PointSet for Segment {
    /// On the infinite line, with the projection falling between the
    /// endpoints. The exact-endpoint boundary is tolerated through an
    /// is-close check.
    fn contains(&self, p: &Point2) -> bool {
        if !self.line.contains(p) {
            return false;
        }
        let [p1, p2] = self.end_points;
        let tol = Tolerance::default();
        for along in [(p2 - p1).dot(&(*p - p1)), (p1 - p2).dot(&(*p - p2))] {
            if along < 0.0 && !tol.zero(along) {
                return false;
            }
        }
        true
    }

    fn closest_point(&self, p: &Point2) -> Point2 {
        let candidate = self.line.closest_point(p);
        if self.contains(&candidate) {
            return candidate;
        }
        let [p1, p2] = self.end_points;
        if (*p - p1).norm() <= (*p - p2).norm() {
            p1
        } else {
            p2
        }
    }
}
