use crate::math::Point2;

/// RGBA color in linear space.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
}

/// A 2D vector canvas backend.
///
/// Shapes describe themselves through this capability set; concrete
/// backends (a GUI surface, an image surface) execute it. Path state is
/// backend-owned: `move_to`/`line_to`/`arc` build the current path,
/// `stroke`/`fill` consume it.
pub trait Canvas {
    /// Begins a new subpath at `p`.
    fn move_to(&mut self, p: Point2);

    /// Extends the current subpath with a line to `p`.
    fn line_to(&mut self, p: Point2);

    /// Appends a circular arc from `start_angle` to `end_angle` (radians).
    fn arc(&mut self, center: Point2, radius: f64, start_angle: f64, end_angle: f64);

    /// Sets the stroke width for subsequent strokes.
    fn set_line_width(&mut self, width: f64);

    /// Sets the color for subsequent strokes, fills, and text.
    fn set_color(&mut self, color: Color);

    /// Sets the font size for subsequent text.
    fn set_font_size(&mut self, size: f64);

    /// Strokes the current path and clears it.
    fn stroke(&mut self);

    /// Fills the current path and clears it.
    fn fill(&mut self);

    /// Draws `text` with its anchor at `position`.
    fn show_text(&mut self, position: Point2, text: &str);
}

/// A single recorded canvas operation.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasCommand {
    /// Begin a subpath.
    MoveTo(Point2),
    /// Line to a point.
    LineTo(Point2),
    /// Circular arc.
    Arc {
        /// Arc center.
        center: Point2,
        /// Arc radius.
        radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// End angle in radians.
        end_angle: f64,
    },
    /// Stroke width change.
    SetLineWidth(f64),
    /// Color change.
    SetColor(Color),
    /// Font size change.
    SetFontSize(f64),
    /// Stroke the current path.
    Stroke,
    /// Fill the current path.
    Fill,
    /// Draw text at a position.
    ShowText(Point2, String),
}

/// A [`Canvas`] that records commands instead of painting.
///
/// Concrete backends can replay the command list; tests assert on it.
#[derive(Debug, Default, Clone)]
pub struct RecordingCanvas {
    commands: Vec<CanvasCommand>,
}

impl RecordingCanvas {
    /// Creates an empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Access all recorded commands.
    #[must_use]
    pub fn commands(&self) -> &[CanvasCommand] {
        &self.commands
    }
}

impl Canvas for RecordingCanvas {
    fn move_to(&mut self, p: Point2) {
        self.commands.push(CanvasCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Point2) {
        self.commands.push(CanvasCommand::LineTo(p));
    }

    fn arc(&mut self, center: Point2, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(CanvasCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(CanvasCommand::SetLineWidth(width));
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(CanvasCommand::SetColor(color));
    }

    fn set_font_size(&mut self, size: f64) {
        self.commands.push(CanvasCommand::SetFontSize(size));
    }

    fn stroke(&mut self) {
        self.commands.push(CanvasCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(CanvasCommand::Fill);
    }

    fn show_text(&mut self, position: Point2, text: &str) {
        self.commands
            .push(CanvasCommand::ShowText(position, text.to_owned()));
    }
}
