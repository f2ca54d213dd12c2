use std::f64::consts::TAU;

use crate::math::{Point2, Rect, Tolerance, Vector2};
use crate::raster::{draw, Mask};
use crate::render::{Canvas, Color};

use super::{DisplayState, GeoObject};

/// On-screen disk radius in canvas pixels; divided by the view scale so
/// the dot stays the same size at any zoom.
const DRAW_RADIUS: f64 = 5.0;
/// Horizontal label offset in canvas pixels.
const LABEL_OFFSET: f64 = 10.0;
/// Label font size.
const LABEL_FONT_SIZE: f64 = 30.0;

/// A zero-dimensional point.
#[derive(Debug, Clone)]
pub struct Point {
    a: Point2,
    display: DisplayState,
}

impl Point {
    /// Creates a point at the given position.
    #[must_use]
    pub fn new(position: Point2) -> Self {
        Self {
            a: position,
            display: DisplayState::default(),
        }
    }

    /// Returns the position.
    #[must_use]
    pub fn position(&self) -> &Point2 {
        &self.a
    }

    /// Packed numeric identity data.
    #[must_use]
    pub fn data(&self) -> [f64; 2] {
        [self.a.x, self.a.y]
    }

    /// Draws the uppercase letter for a 1-based label index.
    ///
    /// Indices outside `1..=26` draw nothing.
    fn draw_label(&self, canvas: &mut dyn Canvas, scale: f64, index: usize) {
        if !(1..=26).contains(&index) {
            return;
        }
        let letter = char::from(b'A' + (index - 1) as u8);
        canvas.set_color(Color::BLACK);
        canvas.set_font_size(LABEL_FONT_SIZE);
        canvas.show_text(
            Point2::new(self.a.x + LABEL_OFFSET / scale, self.a.y),
            &letter.to_string(),
        );
    }
}

impl GeoObject for Point {
    fn name(&self) -> &'static str {
        "Point"
    }

    fn identical_to(&self, other: &Self) -> bool {
        Tolerance::default().identical_all(&self.data(), &other.data())
    }

    fn distance_to(&self, p: &Point2) -> f64 {
        (self.a - p).norm()
    }

    fn draw(&self, canvas: &mut dyn Canvas, _clip: &Rect, scale: f64, _visualize: bool) {
        canvas.arc(self.a, DRAW_RADIUS / scale, 0.0, TAU);
        canvas.fill();
        if let Some(index) = self.display.index {
            self.draw_label(canvas, scale, index);
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            a: self.a * factor,
            display: self.display,
        }
    }

    fn shifted(&self, offset: &Vector2) -> Self {
        Self {
            a: self.a + offset,
            display: self.display,
        }
    }

    fn bounding_box(&self) -> Option<Rect> {
        Some(Rect::new(self.a, self.a))
    }

    fn mask(&self, _clip: &Rect, out_size: (usize, usize), scale: f64, mask_size: usize) -> Mask {
        let mut mask = Mask::new(out_size);
        let center = ((self.a.x / scale) as i64, (self.a.y / scale) as i64);
        draw::fill_disk(&mut mask, center, (2 * mask_size) as f64, 1);
        mask
    }

    fn display(&self) -> &DisplayState {
        &self.display
    }

    fn display_mut(&mut self) -> &mut DisplayState {
        &mut self.display
    }
}
