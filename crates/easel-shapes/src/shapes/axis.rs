use easel_canvas::coords::{Bounds, Point};
use easel_canvas::paint::Rgba8;
use easel_canvas::surface::Surface;

use crate::error::{DrawError, RangeError};
use crate::shape::ShapeKind;
use crate::style::Style;
use crate::widget::Widget;

use super::line::{Line, Segments};
use super::text::Text;

const DEFAULT_NOTCH_LEN: i32 = 5;

/// Builds the notch positions for a `[min, max]` range stepped by `step`;
/// the last notch may overshoot `max` by less than one step.
fn notch_values(min: f64, max: f64, step: f64) -> Result<Vec<f64>, RangeError> {
    if max < min {
        return Err(RangeError::Inverted { min, max });
    }
    if step <= 0.0 {
        return Err(RangeError::BadStep { step });
    }
    let mut values = vec![min];
    while *values.last().unwrap_or(&max) < max {
        let next = values.last().copied().unwrap_or(max) + step;
        values.push(next);
    }
    Ok(values)
}

/// A horizontal axis: main line, notch cross-ticks, and labels.
///
/// The pixel origin anchors the domain's zero; when the range does not
/// include zero the origin shifts so the range's low edge lands on the
/// configured anchor instead. Recoloring the axis recolors every part.
pub struct XAxis {
    origin: Point,
    x_min: f64,
    x_max: f64,
    sx: f64,
    notch_len: i32,
    axis: Line,
    notches: Segments,
    labels: Vec<Text>,
    bounds: Bounds,
    style: Style,
}

impl XAxis {
    pub fn new(
        x_range: (f64, f64),
        step: f64,
        anchor: Point,
        len: i32,
    ) -> Result<Self, RangeError> {
        Self::with_notch_len(x_range, step, anchor, len, DEFAULT_NOTCH_LEN)
    }

    pub fn with_notch_len(
        x_range: (f64, f64),
        step: f64,
        anchor: Point,
        len: i32,
        notch_len: i32,
    ) -> Result<Self, RangeError> {
        let (x_min, x_max) = x_range;
        let values = notch_values(x_min, x_max, step)?;
        let sx = len as f64 / (x_max - x_min);

        // Zero-crossing correction: when zero is outside the range, anchor
        // the low edge of the domain at the configured point.
        let mut origin = anchor;
        if x_min > 0.0 || x_max < 0.0 {
            origin.x -= (x_min * sx).round() as i32;
        }

        let mut notches = Segments::new();
        for &v in &values {
            let x = origin.x + (v * sx).round() as i32;
            notches.add((
                Point::new(x, origin.y + notch_len),
                Point::new(x, origin.y - notch_len),
            ));
        }

        let bounds = Bounds::new(
            Point::new(origin.x + (x_min * sx).round() as i32, origin.y - notch_len),
            Point::new(origin.x + (x_max * sx).round() as i32, origin.y + notch_len),
        );
        let axis = Line::new(
            Point::new(bounds.tl.x, origin.y),
            Point::new(bounds.br.x, origin.y),
        );

        Ok(Self {
            origin,
            x_min,
            x_max,
            sx,
            notch_len,
            axis,
            notches,
            labels: Vec::new(),
            bounds,
            style: Style::default(),
        })
    }

    /// Maps a domain value to its pixel x coordinate.
    #[inline]
    pub fn pos(&self, v: f64) -> i32 {
        self.origin.x + (v * self.sx).round() as i32
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn range(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    #[inline]
    pub fn notch_count(&self) -> usize {
        self.notches.len()
    }

    /// Places `text` at domain position `v` on the axis line, nudged by
    /// `(dx, dy)` pixels.
    pub fn add_label(&mut self, v: f64, text: impl Into<String>, dx: i32, dy: i32) {
        let label = Text::new(Point::new(self.pos(v) + dx, self.origin.y + dy), text);
        self.bounds = self.bounds.union(label.bounds());
        self.labels.push(label);
    }
}

impl ShapeKind for XAxis {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        self.bounds
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        self.axis.draw(surface)?;
        self.notches.draw(surface)?;
        for label in &mut self.labels {
            label.draw(surface)?;
        }
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        self.axis.translate(dx, dy);
        self.notches.translate(dx, dy);
        for label in &mut self.labels {
            label.translate(dx, dy);
        }
        self.origin = self.origin.offset(dx, dy);
        self.bounds.translate(dx, dy);
    }

    fn apply_color(&mut self, color: Rgba8) {
        self.style_mut().set_color(color);
        self.axis.apply_color(color);
        self.notches.apply_color(color);
        for label in &mut self.labels {
            label.apply_color(color);
        }
    }
}

/// A vertical axis; the pixel y coordinate decreases as the domain value
/// grows.
pub struct YAxis {
    origin: Point,
    y_min: f64,
    y_max: f64,
    sy: f64,
    notch_len: i32,
    axis: Line,
    notches: Segments,
    labels: Vec<Text>,
    bounds: Bounds,
    style: Style,
}

impl YAxis {
    pub fn new(
        y_range: (f64, f64),
        step: f64,
        anchor: Point,
        len: i32,
    ) -> Result<Self, RangeError> {
        Self::with_notch_len(y_range, step, anchor, len, DEFAULT_NOTCH_LEN)
    }

    pub fn with_notch_len(
        y_range: (f64, f64),
        step: f64,
        anchor: Point,
        len: i32,
        notch_len: i32,
    ) -> Result<Self, RangeError> {
        let (y_min, y_max) = y_range;
        let values = notch_values(y_min, y_max, step)?;
        let sy = len as f64 / (y_max - y_min);

        let mut origin = anchor;
        if y_min > 0.0 || y_max < 0.0 {
            origin.y += (y_min * sy).round() as i32;
        }

        let mut notches = Segments::new();
        for &v in &values {
            let y = origin.y - (v * sy).round() as i32;
            notches.add((
                Point::new(origin.x + notch_len, y),
                Point::new(origin.x - notch_len, y),
            ));
        }

        let low = origin.y - (y_min * sy).round() as i32;
        let high = origin.y - (y_max * sy).round() as i32;
        let bounds = Bounds::from_points([
            Point::new(origin.x - notch_len, low),
            Point::new(origin.x + notch_len, high),
        ])
        .unwrap_or_default();
        let axis = Line::new(Point::new(origin.x, high), Point::new(origin.x, low));

        Ok(Self {
            origin,
            y_min,
            y_max,
            sy,
            notch_len,
            axis,
            notches,
            labels: Vec::new(),
            bounds,
            style: Style::default(),
        })
    }

    /// Maps a domain value to its pixel y coordinate.
    #[inline]
    pub fn pos(&self, v: f64) -> i32 {
        self.origin.y - (v * self.sy).round() as i32
    }

    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    #[inline]
    pub fn range(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    #[inline]
    pub fn notch_count(&self) -> usize {
        self.notches.len()
    }

    pub fn add_label(&mut self, v: f64, text: impl Into<String>, dx: i32, dy: i32) {
        let label = Text::new(Point::new(self.origin.x + dx, self.pos(v) + dy), text);
        self.bounds = self.bounds.union(label.bounds());
        self.labels.push(label);
    }
}

impl ShapeKind for YAxis {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        self.bounds
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        self.axis.draw(surface)?;
        self.notches.draw(surface)?;
        for label in &mut self.labels {
            label.draw(surface)?;
        }
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        self.axis.translate(dx, dy);
        self.notches.translate(dx, dy);
        for label in &mut self.labels {
            label.translate(dx, dy);
        }
        self.origin = self.origin.offset(dx, dy);
        self.bounds.translate(dx, dy);
    }

    fn apply_color(&mut self, color: Rgba8) {
        self.style_mut().set_color(color);
        self.axis.apply_color(color);
        self.notches.apply_color(color);
        for label in &mut self.labels {
            label.apply_color(color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_canvas::paint::Color;
    use easel_canvas::surface::{DrawCmd, RecordingSurface};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn inverted_range_is_rejected() {
        assert!(matches!(
            XAxis::new((5.0, 1.0), 1.0, p(0, 0), 100),
            Err(RangeError::Inverted { .. })
        ));
        assert!(matches!(
            YAxis::new((5.0, 1.0), 1.0, p(0, 0), 100),
            Err(RangeError::Inverted { .. })
        ));
    }

    #[test]
    fn notch_per_step_plus_endpoints() {
        let axis = XAxis::new((-2.0, 2.0), 1.0, p(320, 240), 200).unwrap();
        // -2, -1, 0, 1, 2
        assert_eq!(axis.notch_count(), 5);
    }

    // ── affine mapping ────────────────────────────────────────────────────

    #[test]
    fn x_mapping_is_affine_over_the_span() {
        // scale = 200 / 4 = 50 pixels per unit, zero at the anchor.
        let axis = XAxis::new((-2.0, 2.0), 1.0, p(320, 240), 200).unwrap();
        assert_eq!(axis.pos(-2.0), 320 - 100);
        assert_eq!(axis.pos(0.0), 320);
        assert_eq!(axis.pos(2.0), 320 + 100);
        assert_eq!(axis.shape_bounds().tl.x, 320 - 100);
        assert_eq!(axis.shape_bounds().br.x, 320 + 100);
    }

    #[test]
    fn y_mapping_grows_upward() {
        let axis = YAxis::new((0.0, 100.0), 10.0, p(100, 430), 400).unwrap();
        assert_eq!(axis.pos(0.0), 430);
        assert_eq!(axis.pos(100.0), 30);
        assert!(axis.pos(50.0) > axis.pos(100.0));
    }

    #[test]
    fn x_zero_crossing_correction() {
        // Range [2000, 2009] excludes zero: pos(min) must land on the
        // anchor x rather than kilometers off-screen.
        let axis = XAxis::new((2000.0, 2009.0), 1.0, p(100, 430), 400).unwrap();
        assert_eq!(axis.pos(2000.0), 100);
        assert_eq!(axis.pos(2009.0), 500);
    }

    #[test]
    fn y_zero_crossing_correction() {
        let axis = YAxis::new((10.0, 20.0), 5.0, p(50, 400), 100).unwrap();
        assert_eq!(axis.pos(10.0), 400);
        assert_eq!(axis.pos(20.0), 300);
    }

    // ── composite behavior ────────────────────────────────────────────────

    #[test]
    fn recolor_reaches_every_part() {
        let mut axis = XAxis::new((-1.0, 1.0), 1.0, p(100, 100), 100).unwrap();
        axis.add_label(1.0, "1", 0, 0);
        axis.set_color(Color::Magenta);

        let mut surface = RecordingSurface::new(300, 300);
        axis.draw(&mut surface).unwrap();
        let magenta = Color::Magenta.to_rgba();
        for cmd in surface.cmds() {
            match cmd {
                DrawCmd::Line { paint, .. } => assert_eq!(paint.color, magenta),
                DrawCmd::Text { paint, .. } => assert_eq!(paint.color, magenta),
                other => panic!("unexpected command {other:?}"),
            }
        }
    }

    #[test]
    fn move_keeps_mapping_consistent() {
        let mut axis = XAxis::new((-2.0, 2.0), 1.0, p(320, 240), 200).unwrap();
        let before = axis.pos(1.0);
        axis.move_shape(100, -50);
        assert_eq!(axis.pos(1.0), before + 100);
        assert_eq!(axis.shape_bounds().tl.y, 240 - 50 - DEFAULT_NOTCH_LEN);
    }

    #[test]
    fn bounds_grow_with_labels() {
        let mut axis = XAxis::new((0.0, 100.0), 10.0, p(100, 430), 400).unwrap();
        let before = axis.shape_bounds();
        axis.add_label(0.0, "0%", -40, 0);
        assert!(axis.shape_bounds().tl.x <= before.tl.x - 40);
    }
}
