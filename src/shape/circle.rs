use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Rect, Tolerance, Vector2};
use crate::raster::{draw, Mask};
use crate::render::Canvas;

use super::{DisplayState, GeoObject, PointSet};

/// A circle given by center and positive radius.
#[derive(Debug, Clone)]
pub struct Circle {
    c: Point2,
    r: f64,
    display: DisplayState,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius <= 0.0 {
            return Err(
                GeometryError::Degenerate("circle radius must be positive".into()).into(),
            );
        }
        Ok(Self {
            c: center,
            r: radius,
            display: DisplayState::default(),
        })
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.c
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.r
    }

    /// Returns the squared radius.
    #[must_use]
    pub fn r_squared(&self) -> f64 {
        self.r * self.r
    }

    /// Packed numeric identity data `[cx, cy, r]`.
    #[must_use]
    pub fn data(&self) -> [f64; 3] {
        [self.c.x, self.c.y, self.r]
    }
}

impl GeoObject for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn identical_to(&self, other: &Self) -> bool {
        Tolerance::default().identical_all(&self.data(), &other.data())
    }

    fn distance_to(&self, p: &Point2) -> f64 {
        (self.r - (p - self.c).norm()).abs()
    }

    fn draw(&self, canvas: &mut dyn Canvas, _clip: &Rect, scale: f64, visualize: bool) {
        canvas.arc(self.c, self.r, 0.0, TAU);
        if visualize {
            canvas.set_line_width(2.0 / scale);
        } else {
            canvas.set_line_width(1.0 / scale);
        }
        canvas.stroke();
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            c: self.c * factor,
            r: self.r * factor,
            display: self.display,
        }
    }

    fn shifted(&self, offset: &Vector2) -> Self {
        Self {
            c: self.c + offset,
            r: self.r,
            display: self.display,
        }
    }

    fn bounding_box(&self) -> Option<Rect> {
        let reach = Vector2::new(self.r, self.r);
        Some(Rect::new(self.c - reach, self.c + reach))
    }

    fn mask(&self, _clip: &Rect, out_size: (usize, usize), scale: f64, mask_size: usize) -> Mask {
        let mut mask = Mask::new(out_size);
        let center = ((self.c.x / scale) as i64, (self.c.y / scale) as i64);
        // Annulus: fill out to the thickened radius, then clear the interior,
        // leaving a ring of thickness 2 * mask_size on the circumference.
        let outer = (self.r / scale + mask_size as f64) as i64;
        let inner = (self.r / scale - mask_size as f64) as i64;
        draw::fill_disk(&mut mask, center, outer as f64, 1);
        if inner > 0 {
            draw::fill_disk(&mut mask, center, inner as f64, 0);
        }
        mask
    }

    fn display(&self) -> &DisplayState {
        &self.display
    }

    fn display_mut(&mut self) -> &mut DisplayState {
        &mut self.display
    }
}

impl PointSet for Circle {
    fn contains(&self, p: &Point2) -> bool {
        Tolerance::default().zero(self.distance_to(p))
    }

    /// Radial projection onto the circumference.
    ///
    /// The projection is undefined at the exact center; callers must not
    /// query it there.
    fn closest_point(&self, p: &Point2) -> Point2 {
        let vec = p - self.c;
        self.c + vec * (self.r / vec.norm())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::EPSILON;
    use crate::render::{CanvasCommand, RecordingCanvas};
    use approx::assert_relative_eq;

    fn viewport() -> Rect {
        Rect::new(Point2::new(0.0, 0.0), Point2::new(100.0, 100.0))
    }

    #[test]
    fn rejects_non_positive_radius() {
        assert!(Circle::new(Point2::new(0.0, 0.0), 0.0).is_err());
        assert!(Circle::new(Point2::new(0.0, 0.0), -2.0).is_err());
    }

    #[test]
    fn distance_is_to_circumference() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 5.0).unwrap();
        assert_relative_eq!(circle.distance_to(&Point2::new(0.0, 0.0)), 5.0);
        assert_relative_eq!(circle.distance_to(&Point2::new(5.0, 0.0)), 0.0);
        assert_relative_eq!(circle.distance_to(&Point2::new(8.0, 0.0)), 3.0);
    }

    #[test]
    fn contains_points_on_circumference() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 5.0).unwrap();
        assert!(circle.contains(&Point2::new(3.0, 4.0)));
        assert!(!circle.contains(&Point2::new(3.0, 3.0)));
        assert!(!circle.contains(&Point2::new(0.0, 0.0)));
    }

    #[test]
    fn closest_point_lands_on_circle() {
        let circle = Circle::new(Point2::new(1.0, 1.0), 2.0).unwrap();
        for probe in [
            Point2::new(5.0, 1.0),
            Point2::new(1.0, 1.5),
            Point2::new(-3.0, -4.0),
        ] {
            let on = circle.closest_point(&probe);
            assert!(circle.distance_to(&on) < EPSILON);
            assert!(circle.contains(&on));
        }
    }

    #[test]
    fn closest_point_is_nearest_sampled() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 5.0).unwrap();
        let probe = Point2::new(7.0, 3.0);
        let best = circle.distance_to(&probe);
        for step in 0..64 {
            let angle = TAU * f64::from(step) / 64.0;
            let q = Point2::new(5.0 * angle.cos(), 5.0 * angle.sin());
            assert!(best <= (probe - q).norm() + EPSILON);
        }
    }

    #[test]
    fn bounding_box_spans_diameter() {
        let circle = Circle::new(Point2::new(2.0, -1.0), 3.0).unwrap();
        let bb = circle.bounding_box().unwrap();
        assert_eq!(bb.min, Point2::new(-1.0, -4.0));
        assert_eq!(bb.max, Point2::new(5.0, 2.0));
    }

    #[test]
    fn scale_rescales_center_and_radius() {
        let circle = Circle::new(Point2::new(2.0, 4.0), 3.0).unwrap();
        let scaled = circle.scaled(2.0);
        assert_relative_eq!(scaled.radius(), 6.0);
        assert_relative_eq!(scaled.r_squared(), 36.0);
        assert_eq!(*scaled.center(), Point2::new(4.0, 8.0));
        assert!(circle.identical_to(&scaled.scaled(0.5)));
    }

    #[test]
    fn shift_round_trip_restores_data() {
        let circle = Circle::new(Point2::new(2.0, 4.0), 3.0).unwrap();
        let offset = Vector2::new(-1.5, 0.25);
        assert!(circle.identical_to(&circle.shifted(&offset).shifted(&-offset)));
    }

    #[test]
    fn draw_strokes_with_screen_constant_width() {
        let circle = Circle::new(Point2::new(0.0, 0.0), 5.0).unwrap();
        let mut canvas = RecordingCanvas::new();
        circle.draw(&mut canvas, &viewport(), 4.0, false);
        circle.draw(&mut canvas, &viewport(), 4.0, true);
        let widths: Vec<f64> = canvas
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                CanvasCommand::SetLineWidth(w) => Some(*w),
                _ => None,
            })
            .collect();
        assert_eq!(widths, [0.25, 0.5]);
    }

    #[test]
    fn mask_is_annulus() {
        let circle = Circle::new(Point2::new(10.0, 10.0), 5.0).unwrap();
        let mask = circle.mask(&viewport(), (20, 20), 1.0, 1);
        // On the circumference.
        assert_eq!(mask.get(10, 15), 1);
        assert_eq!(mask.get(15, 10), 1);
        // Interior and center cleared.
        assert_eq!(mask.get(10, 10), 0);
        assert_eq!(mask.get(10, 13), 0);
        // Outside the thickened ring.
        assert_eq!(mask.get(10, 17), 0);
    }
}
