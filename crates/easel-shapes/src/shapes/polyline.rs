use easel_canvas::coords::{Bounds, Point};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::seq::PointSeq;
use crate::shape::ShapeKind;
use crate::style::Style;

/// Draws the connecting segments of an open polyline.
pub(super) fn draw_open(seq: &PointSeq, surface: &mut dyn Surface) {
    for pair in seq.points().windows(2) {
        surface.line(pair[0], pair[1]);
    }
}

/// Draws a polyline closed by the wrap-around edge.
pub(super) fn draw_closed(seq: &PointSeq, surface: &mut dyn Surface) {
    draw_open(seq, surface);
    if seq.len() > 2 {
        let points = seq.points();
        surface.line(points[points.len() - 1], points[0]);
    }
}

/// A sequence of points joined by line segments.
#[derive(Default)]
pub struct OpenPolyline {
    seq: PointSeq,
    style: Style,
}

impl OpenPolyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self { seq: PointSeq::from_points(points), style: Style::default() }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    #[inline]
    pub fn point(&self, index: usize) -> Option<Point> {
        self.seq.get(index)
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        self.seq.points()
    }

    pub fn add_point(&mut self, p: Point) {
        self.seq.push(p);
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set_point(&mut self, index: usize, p: Point) {
        self.seq.set(index, p);
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn remove_point(&mut self, index: usize) -> Point {
        self.seq.remove(index)
    }
}

impl ShapeKind for OpenPolyline {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        self.seq.bounds()
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        draw_open(&self.seq, surface);
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        self.seq.translate(dx, dy);
    }
}

/// A polyline whose last point connects back to its first.
#[derive(Default)]
pub struct ClosedPolyline {
    seq: PointSeq,
    style: Style,
}

impl ClosedPolyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self { seq: PointSeq::from_points(points), style: Style::default() }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    #[inline]
    pub fn point(&self, index: usize) -> Option<Point> {
        self.seq.get(index)
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        self.seq.points()
    }

    pub fn add_point(&mut self, p: Point) {
        self.seq.push(p);
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set_point(&mut self, index: usize, p: Point) {
        self.seq.set(index, p);
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn remove_point(&mut self, index: usize) -> Point {
        self.seq.remove(index)
    }
}

impl ShapeKind for ClosedPolyline {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        self.seq.bounds()
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        draw_closed(&self.seq, surface);
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        self.seq.translate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;
    use easel_canvas::surface::{DrawCmd, RecordingSurface};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn open_polyline_draws_n_minus_one_segments() {
        let mut poly = OpenPolyline::from_points([p(0, 0), p(10, 0), p(10, 10)]);
        let mut surface = RecordingSurface::new(100, 100);
        poly.draw(&mut surface).unwrap();
        assert_eq!(surface.cmds().len(), 2);
    }

    #[test]
    fn closed_polyline_adds_wrap_edge() {
        let mut poly = ClosedPolyline::from_points([p(0, 0), p(10, 0), p(10, 10)]);
        let mut surface = RecordingSurface::new(100, 100);
        poly.draw(&mut surface).unwrap();
        assert_eq!(surface.cmds().len(), 3);
        match surface.cmds().last().unwrap() {
            DrawCmd::Line { a, b, .. } => {
                assert_eq!((*a, *b), (p(10, 10), p(0, 0)));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn degenerate_polylines_draw_nothing() {
        for count in 0..2 {
            let mut poly = OpenPolyline::from_points((0..count).map(|i| p(i, i)));
            let mut surface = RecordingSurface::new(100, 100);
            poly.draw(&mut surface).unwrap();
            assert!(surface.cmds().is_empty(), "{count} points drew something");
        }
    }

    #[test]
    fn bounds_follow_set_point() {
        let mut poly = OpenPolyline::from_points([p(0, 0), p(10, 10)]);
        poly.set_point(1, p(100, 1));
        assert_eq!(poly.shape_bounds(), Bounds::new(p(0, 0), p(100, 1)));
    }

    #[test]
    fn move_to_places_top_left_corner() {
        let mut poly = OpenPolyline::from_points([p(10, 10), p(30, 40)]);
        poly.move_to(p(0, 0));
        assert_eq!(poly.points(), &[p(0, 0), p(20, 30)]);
    }
}
