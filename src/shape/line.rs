use crate::error::{GeometryError, Result};
use crate::math::{perp, Point2, Rect, Tolerance, Vector2};
use crate::raster::{draw, Mask};
use crate::render::Canvas;

use super::{DisplayState, GeoObject, PointSet};

/// An infinite line in normal form: `{p : n · p = c}`.
///
/// The normal is unit-length and the offset is rescaled to match on
/// construction, so two lines with proportional inputs store the same
/// representation (up to a global sign flip).
#[derive(Debug, Clone)]
pub struct Line {
    n: Vector2,
    c: f64,
    display: DisplayState,
}

impl Line {
    /// Creates a line from a normal vector and signed offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is the zero vector.
    pub fn new(normal: Vector2, offset: f64) -> Result<Self> {
        let len = normal.norm();
        if len <= 0.0 {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self {
            n: normal / len,
            c: offset / len,
            display: DisplayState::default(),
        })
    }

    /// Returns the unit normal.
    #[must_use]
    pub fn normal(&self) -> &Vector2 {
        &self.n
    }

    /// Returns the signed offset along the normal.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.c
    }

    /// Unit tangent: the 90-degree rotation of the normal.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        perp(&self.n)
    }

    /// Packed numeric identity data `[nx, ny, c]`.
    #[must_use]
    pub fn data(&self) -> [f64; 3] {
        [self.n.x, self.n.y, self.c]
    }

    /// The two points where the line crosses the viewport boundary.
    ///
    /// For each axis the line is not parallel to, both rectangle
    /// boundaries on that axis are intersected and crossings landing
    /// within the rectangle's extent on the other axis are kept. The two
    /// kept crossings are routed into separate result slots; when the
    /// normal's components share a sign the slot order on the second
    /// axis flips so opposite crossings never collide. Returns `None`
    /// when the line misses the viewport.
    #[must_use]
    pub fn endpoints(&self, clip: &Rect) -> Option<[Point2; 2]> {
        let mut result: [Option<Point2>; 2] = [None, None];
        let mut bounds = [[clip.min.x, clip.max.x], [clip.min.y, clip.max.y]];
        if self.n.x * self.n.y > 0.0 {
            bounds[1].swap(0, 1);
        }

        for axis in 0..2 {
            let other = 1 - axis;
            if self.n[other] == 0.0 {
                continue;
            }
            for (slot, &bound) in bounds[axis].iter().enumerate() {
                let mut p = [0.0_f64; 2];
                p[axis] = bound;
                p[other] = (self.c - bound * self.n[axis]) / self.n[other];
                if (p[other] - bounds[other][0]) * (p[other] - bounds[other][1]) <= 0.0 {
                    result[slot] = Some(Point2::new(p[0], p[1]));
                }
            }
        }

        match result {
            [Some(a), Some(b)] => Some([a, b]),
            _ => None,
        }
    }
}

impl GeoObject for Line {
    fn name(&self) -> &'static str {
        "Line"
    }

    /// `(n, c)` and `(-n, -c)` describe the same line, so identity holds
    /// up to a global sign flip.
    fn identical_to(&self, other: &Self) -> bool {
        let tol = Tolerance::default();
        let data = self.data();
        let flipped = [-other.n.x, -other.n.y, -other.c];
        tol.identical_all(&data, &other.data()) || tol.identical_all(&data, &flipped)
    }

    fn distance_to(&self, p: &Point2) -> f64 {
        (self.n.dot(&p.coords) - self.c).abs()
    }

    fn draw(&self, canvas: &mut dyn Canvas, clip: &Rect, scale: f64, visualize: bool) {
        if let Some(endpoints) = self.endpoints(clip) {
            stroke_chord(canvas, endpoints, scale, visualize);
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            n: self.n,
            c: self.c * factor,
            display: self.display,
        }
    }

    /// Translating by `offset` moves the signed offset by the component
    /// of `offset` along the normal.
    fn shifted(&self, offset: &Vector2) -> Self {
        Self {
            n: self.n,
            c: self.c + offset.dot(&self.n),
            display: self.display,
        }
    }

    fn bounding_box(&self) -> Option<Rect> {
        None
    }

    fn mask(&self, clip: &Rect, out_size: (usize, usize), scale: f64, mask_size: usize) -> Mask {
        match self.endpoints(clip) {
            Some(endpoints) => thick_chord_mask(endpoints, out_size, scale, mask_size),
            None => Mask::new(out_size),
        }
    }

    fn display(&self) -> &DisplayState {
        &self.display
    }

    fn display_mut(&mut self) -> &mut DisplayState {
        &mut self.display
    }
}

impl PointSet for Line {
    fn contains(&self, p: &Point2) -> bool {
        Tolerance::default().zero(self.distance_to(p))
    }

    fn closest_point(&self, p: &Point2) -> Point2 {
        *p - self.n * (self.n.dot(&p.coords) - self.c)
    }
}

/// Strokes the chord between two endpoints with the screen-constant
/// width convention shared by all line-like shapes.
pub(crate) fn stroke_chord(
    canvas: &mut dyn Canvas,
    endpoints: [Point2; 2],
    scale: f64,
    visualize: bool,
) {
    canvas.move_to(endpoints[0]);
    canvas.line_to(endpoints[1]);
    if visualize {
        canvas.set_line_width(2.0 / scale);
    } else {
        canvas.set_line_width(1.0 / scale);
    }
    canvas.stroke();
}

/// Rasterizes a thick chord as `2 * mask_size` offset copies of the
/// 1-pixel line, shifted by `±i` along each axis independently.
///
/// This approximates a thick stroke without true dilation and can leave
/// gaps near steep angles; the label consumer expects exactly this
/// rendering. Endpoint coordinates are clamped into the raster before
/// tracing.
pub(crate) fn thick_chord_mask(
    endpoints: [Point2; 2],
    out_size: (usize, usize),
    scale: f64,
    mask_size: usize,
) -> Mask {
    let mut mask = Mask::new(out_size);
    if out_size.0 == 0 || out_size.1 == 0 {
        return mask;
    }
    let e0 = ((endpoints[0].x / scale) as i64, (endpoints[0].y / scale) as i64);
    let e1 = ((endpoints[1].x / scale) as i64, (endpoints[1].y / scale) as i64);
    let hi_x = out_size.0 as i64 - 1;
    let hi_y = out_size.1 as i64 - 1;

    let reach = mask_size as i64;
    for i in -reach..reach {
        draw::draw_line(
            &mut mask,
            ((e0.0 + i).clamp(0, hi_x), e0.1.clamp(0, hi_y)),
            ((e1.0 + i).clamp(0, hi_x), e1.1.clamp(0, hi_y)),
            1,
        );
        draw::draw_line(
            &mut mask,
            (e0.0.clamp(0, hi_x), (e0.1 + i).clamp(0, hi_y)),
            (e1.0.clamp(0, hi_x), (e1.1 + i).clamp(0, hi_y)),
            1,
        );
    }
    mask
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::EPSILON;
    use crate::render::{CanvasCommand, RecordingCanvas};
    use approx::assert_relative_eq;

    fn unit_box() -> Rect {
        Rect::new(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0))
    }

    #[test]
    fn rejects_zero_normal() {
        assert!(Line::new(Vector2::new(0.0, 0.0), 1.0).is_err());
    }

    #[test]
    fn construction_normalizes() {
        let line = Line::new(Vector2::new(0.0, 2.0), 6.0).unwrap();
        assert_relative_eq!(line.normal().norm(), 1.0);
        assert_relative_eq!(line.offset(), 3.0);
    }

    #[test]
    fn sign_flip_is_identical() {
        let line = Line::new(Vector2::new(1.0, 2.0), 3.0).unwrap();
        let flipped = Line::new(Vector2::new(-1.0, -2.0), -3.0).unwrap();
        assert!(line.identical_to(&flipped));
    }

    #[test]
    fn distinct_offsets_are_not_identical() {
        let a = Line::new(Vector2::new(0.0, 1.0), 1.0).unwrap();
        let b = Line::new(Vector2::new(0.0, 1.0), 2.0).unwrap();
        assert!(!a.identical_to(&b));
    }

    #[test]
    fn distance_and_containment_agree() {
        // y = 3
        let line = Line::new(Vector2::new(0.0, 1.0), 3.0).unwrap();
        assert_relative_eq!(line.distance_to(&Point2::new(7.0, 5.0)), 2.0);
        assert!(line.contains(&Point2::new(-100.0, 3.0)));
        assert!(!line.contains(&Point2::new(0.0, 3.1)));
    }

    #[test]
    fn closest_point_is_orthogonal_projection() {
        let line = Line::new(Vector2::new(0.0, 1.0), 3.0).unwrap();
        let projected = line.closest_point(&Point2::new(7.0, 5.0));
        assert_relative_eq!(projected.x, 7.0);
        assert_relative_eq!(projected.y, 3.0);
        assert!(line.distance_to(&projected) < EPSILON);
    }

    #[test]
    fn bounding_box_is_unbounded() {
        let line = Line::new(Vector2::new(0.0, 1.0), 3.0).unwrap();
        assert!(line.bounding_box().is_none());
    }

    #[test]
    fn shift_moves_offset_along_normal() {
        let line = Line::new(Vector2::new(0.0, 1.0), 3.0).unwrap();
        let moved = line.shifted(&Vector2::new(5.0, 2.0));
        assert_relative_eq!(moved.offset(), 5.0);
        assert!(moved.contains(&Point2::new(0.0, 5.0)));
    }

    #[test]
    fn shift_round_trip_restores_data() {
        let line = Line::new(Vector2::new(1.0, 2.0), 3.0).unwrap();
        let offset = Vector2::new(-0.5, 4.0);
        assert!(line.identical_to(&line.shifted(&offset).shifted(&-offset)));
    }

    #[test]
    fn scale_round_trip_restores_data() {
        let line = Line::new(Vector2::new(1.0, 2.0), 3.0).unwrap();
        assert!(line.identical_to(&line.scaled(4.0).scaled(0.25)));
    }

    // ── viewport clipping ──

    #[test]
    fn endpoints_of_horizontal_line() {
        let line = Line::new(Vector2::new(0.0, 1.0), 3.0).unwrap();
        let [a, b] = line.endpoints(&unit_box()).unwrap();
        assert_relative_eq!(a.x, 0.0);
        assert_relative_eq!(a.y, 3.0);
        assert_relative_eq!(b.x, 10.0);
        assert_relative_eq!(b.y, 3.0);
    }

    #[test]
    fn endpoints_of_diagonal_through_corners() {
        // x = y
        let line = Line::new(Vector2::new(1.0, -1.0), 0.0).unwrap();
        let [a, b] = line.endpoints(&unit_box()).unwrap();
        assert!((a - Point2::new(0.0, 0.0)).norm() < EPSILON);
        assert!((b - Point2::new(10.0, 10.0)).norm() < EPSILON);
    }

    #[test]
    fn endpoints_swap_case_keeps_both_crossings() {
        // x + y = 5 crosses the left and bottom edges; both normal
        // components are positive, exercising the slot swap.
        let line = Line::new(Vector2::new(1.0, 1.0), 5.0).unwrap();
        let [a, b] = line.endpoints(&unit_box()).unwrap();
        assert!((a - Point2::new(0.0, 5.0)).norm() < EPSILON);
        assert!((b - Point2::new(5.0, 0.0)).norm() < EPSILON);
    }

    #[test]
    fn endpoints_none_when_line_misses_viewport() {
        let line = Line::new(Vector2::new(0.0, 1.0), 20.0).unwrap();
        assert!(line.endpoints(&unit_box()).is_none());
    }

    #[test]
    fn draw_skips_line_outside_viewport() {
        let line = Line::new(Vector2::new(0.0, 1.0), 20.0).unwrap();
        let mut canvas = RecordingCanvas::new();
        line.draw(&mut canvas, &unit_box(), 1.0, false);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn draw_strokes_clipped_chord() {
        let line = Line::new(Vector2::new(0.0, 1.0), 3.0).unwrap();
        let mut canvas = RecordingCanvas::new();
        line.draw(&mut canvas, &unit_box(), 2.0, true);
        assert_eq!(
            canvas.commands(),
            &[
                CanvasCommand::MoveTo(Point2::new(0.0, 3.0)),
                CanvasCommand::LineTo(Point2::new(10.0, 3.0)),
                CanvasCommand::SetLineWidth(1.0),
                CanvasCommand::Stroke,
            ]
        );
    }

    // ── mask rasterization ──

    #[test]
    fn mask_covers_offset_scanlines() {
        let line = Line::new(Vector2::new(0.0, 1.0), 5.0).unwrap();
        let mask = line.mask(&unit_box(), (11, 11), 1.0, 1);
        assert_eq!(mask.get(5, 5), 1);
        assert_eq!(mask.get(5, 4), 1);
        assert_eq!(mask.get(5, 7), 0);
        assert_eq!(mask.get(5, 2), 0);
    }

    #[test]
    fn mask_empty_when_line_misses_viewport() {
        let line = Line::new(Vector2::new(0.0, 1.0), 20.0).unwrap();
        let mask = line.mask(&unit_box(), (11, 11), 1.0, 2);
        assert_eq!(mask.count_nonzero(), 0);
    }

    #[test]
    fn mask_empty_with_zero_mask_size() {
        // The offset range is empty, so nothing is traced.
        let line = Line::new(Vector2::new(0.0, 1.0), 5.0).unwrap();
        let mask = line.mask(&unit_box(), (11, 11), 1.0, 0);
        assert_eq!(mask.count_nonzero(), 0);
    }
}
