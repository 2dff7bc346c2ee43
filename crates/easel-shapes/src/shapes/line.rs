use easel_canvas::coords::{Bounds, Point};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::shape::ShapeKind;
use crate::style::Style;

/// A single straight line between two points.
pub struct Line {
    a: Point,
    b: Point,
    style: Style,
}

impl Line {
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b, style: Style::default() }
    }

    #[inline]
    pub fn endpoints(&self) -> (Point, Point) {
        (self.a, self.b)
    }

    pub fn set_endpoints(&mut self, a: Point, b: Point) {
        self.a = a;
        self.b = b;
    }
}

impl ShapeKind for Line {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        let mut bounds = Bounds::at(self.a);
        bounds.expand(self.b);
        bounds
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        surface.line(self.a, self.b);
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        self.a = self.a.offset(dx, dy);
        self.b = self.b.offset(dx, dy);
    }
}

/// A growable list of independent line segments.
///
/// The bounding box is the union over all endpoints and is rebuilt from
/// scratch whenever the list changes.
#[derive(Default)]
pub struct Segments {
    segments: Vec<(Point, Point)>,
    bounds: Bounds,
    style: Style,
}

impl Segments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: impl IntoIterator<Item = (Point, Point)>) -> Self {
        let mut s = Self::new();
        for seg in segments {
            s.segments.push(seg);
        }
        s.rebuild();
        s
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<(Point, Point)> {
        self.segments.get(index).copied()
    }

    pub fn add(&mut self, segment: (Point, Point)) {
        self.segments.push(segment);
        self.rebuild();
    }

    /// Replaces the segment at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set(&mut self, index: usize, segment: (Point, Point)) {
        self.segments[index] = segment;
        self.rebuild();
    }

    /// Removes the segment at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn remove(&mut self, index: usize) -> (Point, Point) {
        let seg = self.segments.remove(index);
        self.rebuild();
        seg
    }

    fn rebuild(&mut self) {
        let endpoints = self.segments.iter().flat_map(|(a, b)| [*a, *b]);
        if let Some(bounds) = Bounds::from_points(endpoints) {
            self.bounds = bounds;
        }
    }
}

impl ShapeKind for Segments {
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
        for (a, b) in &self.segments {
            surface.line(*a, *b);
        }
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        for (a, b) in &mut self.segments {
            *a = a.offset(dx, dy);
            *b = b.offset(dx, dy);
        }
        self.bounds.translate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;
    use easel_canvas::paint::{Color, PaintState};
    use easel_canvas::surface::{DrawCmd, RecordingSurface};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn line_bounds_are_tight_regardless_of_direction() {
        // Pointing up-left: the raw endpoints would give an inverted box.
        let line = Line::new(p(50, 80), p(10, 20));
        assert_eq!(line.shape_bounds(), Bounds::new(p(10, 20), p(50, 80)));
    }

    #[test]
    fn line_translate_moves_both_endpoints() {
        let mut line = Line::new(p(0, 0), p(10, 5));
        line.translate(3, -2);
        assert_eq!(line.endpoints(), (p(3, -2), p(13, 3)));
    }

    #[test]
    fn segments_bounds_shrink_on_remove() {
        let mut segs = Segments::new();
        segs.add((p(0, 0), p(10, 10)));
        segs.add((p(50, 50), p(90, 90)));
        segs.remove(1);
        assert_eq!(segs.shape_bounds(), Bounds::new(p(0, 0), p(10, 10)));
    }

    #[test]
    fn draw_restores_surface_paint() {
        let mut surface = RecordingSurface::new(100, 100);
        let before = surface.paint();

        let mut line = Line::new(p(0, 0), p(10, 0));
        line.set_color(Color::Red);
        line.draw(&mut surface).unwrap();

        assert_eq!(surface.paint(), before);
        match &surface.cmds()[0] {
            DrawCmd::Line { paint, .. } => {
                assert_eq!(paint.color, Color::Red.to_rgba());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn hidden_line_draws_nothing() {
        let mut surface = RecordingSurface::new(100, 100);
        let mut line = Line::new(p(0, 0), p(10, 0));
        line.hide();
        line.draw(&mut surface).unwrap();
        assert!(surface.cmds().is_empty());
    }

    #[test]
    fn default_paint_state_is_hairline_black() {
        assert_eq!(Line::new(p(0, 0), p(1, 1)).style().paint(), PaintState::default());
    }
}
