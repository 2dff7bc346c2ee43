use easel_canvas::coords::{Bounds, Point};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::seq::PointSeq;
use crate::shape::ShapeKind;
use crate::style::Style;

use super::polyline::draw_open;

/// A polyline whose vertices carry text marks.
///
/// Marks come in two arities: one mark per point, or a single mark shared by
/// every point. Anything else fails at draw time with
/// [`DrawError::MarkCount`].
///
/// The bounding box covers the points at all times; the mark text extents
/// are folded in whenever a surface (and therefore font metrics) is
/// available: at draw, or explicitly via
/// [`measure_with`](MarkedPolyline::measure_with).
pub struct MarkedPolyline {
    seq: PointSeq,
    marks: Vec<String>,
    mark_bounds: Option<Bounds>,
    style: Style,
}

impl MarkedPolyline {
    /// Creates an empty marked polyline. No marks (or a single empty mark)
    /// normalizes to the default `"*"`.
    pub fn new(marks: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut marks: Vec<String> = marks.into_iter().map(Into::into).collect();
        if marks.is_empty() || (marks.len() == 1 && marks[0].is_empty()) {
            marks = vec!["*".to_owned()];
        }
        Self { seq: PointSeq::new(), marks, mark_bounds: None, style: Style::default() }
    }

    pub fn with_points(
        marks: impl IntoIterator<Item = impl Into<String>>,
        points: impl IntoIterator<Item = Point>,
    ) -> Self {
        let mut this = Self::new(marks);
        this.seq = PointSeq::from_points(points);
        this
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
        self.mark_bounds = None;
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set_point(&mut self, index: usize, p: Point) {
        self.seq.set(index, p);
        self.mark_bounds = None;
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn remove_point(&mut self, index: usize) -> Point {
        self.mark_bounds = None;
        self.seq.remove(index)
    }

    #[inline]
    pub fn mark_count(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    pub fn mark(&self, index: usize) -> Option<&str> {
        self.marks.get(index).map(String::as_str)
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set_mark(&mut self, index: usize, mark: impl Into<String>) {
        self.marks[index] = mark.into();
        self.mark_bounds = None;
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn remove_mark(&mut self, index: usize) -> String {
        self.mark_bounds = None;
        self.marks.remove(index)
    }

    /// The mark shown at point `index` under the shared-mark rule, if the
    /// arities are consistent.
    fn mark_for(&self, index: usize) -> Result<&str, DrawError> {
        if self.marks.len() == self.seq.len() {
            Ok(&self.marks[index])
        } else if self.marks.len() == 1 {
            Ok(&self.marks[0])
        } else {
            Err(DrawError::MarkCount { points: self.seq.len(), marks: self.marks.len() })
        }
    }

    /// Folds the mark text extents into the bounding box using the
    /// surface's font metrics.
    pub fn measure_with(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        if self.seq.is_empty() {
            return Ok(());
        }
        let saved = surface.font();
        surface.set_font(self.style.font());
        let mut bounds = self.seq.bounds();
        for (i, p) in self.seq.points().iter().enumerate() {
            let mark = match self.mark_for(i) {
                Ok(m) => m,
                Err(e) => {
                    surface.set_font(saved);
                    return Err(e);
                }
            };
            let text_box = surface.text_extents(mark).bounds_at(*p);
            bounds = bounds.union(text_box);
        }
        surface.set_font(saved);
        self.mark_bounds = Some(bounds);
        Ok(())
    }

    /// Draws the marks only. Assumes the surface font is already set.
    fn draw_marks(&self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        for (i, p) in self.seq.points().iter().enumerate() {
            let mark = self.mark_for(i)?;
            surface.text(mark, *p);
        }
        Ok(())
    }

    fn draw_marks_with_font(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        let saved = surface.font();
        surface.set_font(self.style.font());
        let result = self.draw_marks(surface);
        surface.set_font(saved);
        self.measure_with(surface)?;
        result
    }
}

impl ShapeKind for MarkedPolyline {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        self.mark_bounds.unwrap_or_else(|| self.seq.bounds())
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        self.draw_marks_with_font(surface)?;
        draw_open(&self.seq, surface);
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        self.seq.translate(dx, dy);
        if let Some(b) = &mut self.mark_bounds {
            b.translate(dx, dy);
        }
    }
}

/// Text marks at a set of points, with no connecting lines.
pub struct Marks {
    inner: MarkedPolyline,
}

impl Marks {
    pub fn new(mark: impl Into<String>) -> Self {
        Self { inner: MarkedPolyline::new([mark.into()]) }
    }

    pub fn with_points(
        marks: impl IntoIterator<Item = impl Into<String>>,
        points: impl IntoIterator<Item = Point>,
    ) -> Self {
        Self { inner: MarkedPolyline::with_points(marks, points) }
    }

    /// A single-character mark at a single point.
    pub fn single(p: Point, mark: char) -> Self {
        Self::with_points([mark.to_string()], [p])
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.inner.point_count()
    }

    #[inline]
    pub fn point(&self, index: usize) -> Option<Point> {
        self.inner.point(index)
    }

    pub fn add_point(&mut self, p: Point) {
        self.inner.add_point(p);
    }

    #[inline]
    pub fn mark(&self, index: usize) -> Option<&str> {
        self.inner.mark(index)
    }
}

impl ShapeKind for Marks {
    fn style(&self) -> &Style {
        self.inner.style()
    }

    fn style_mut(&mut self) -> &mut Style {
        self.inner.style_mut()
    }

    fn shape_bounds(&self) -> Bounds {
        self.inner.shape_bounds()
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        self.inner.draw_marks_with_font(surface)
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        self.inner.move_shape(dx, dy);
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
    fn empty_marks_normalize_to_star() {
        let m = MarkedPolyline::new(Vec::<String>::new());
        assert_eq!(m.mark(0), Some("*"));
        let m = MarkedPolyline::new([""]);
        assert_eq!(m.mark(0), Some("*"));
    }

    #[test]
    fn one_mark_per_point_draws_each() {
        let mut m = MarkedPolyline::with_points(
            ["one", "two", "three"],
            [p(0, 0), p(50, 0), p(100, 0)],
        );
        let mut surface = RecordingSurface::new(200, 100);
        m.draw(&mut surface).unwrap();
        let texts: Vec<&str> = surface
            .cmds()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn shared_mark_repeats() {
        let mut m = MarkedPolyline::with_points(["x"], [p(0, 0), p(50, 0)]);
        let mut surface = RecordingSurface::new(200, 100);
        m.draw(&mut surface).unwrap();
        let text_count = surface
            .cmds()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Text { .. }))
            .count();
        assert_eq!(text_count, 2);
    }

    #[test]
    fn arity_mismatch_fails() {
        let mut m = MarkedPolyline::with_points(["a", "b"], [p(0, 0), p(10, 0), p(20, 0)]);
        let mut surface = RecordingSurface::new(100, 100);
        assert_eq!(
            m.draw(&mut surface),
            Err(DrawError::MarkCount { points: 3, marks: 2 })
        );
    }

    #[test]
    fn measured_bounds_cover_mark_text() {
        let mut m = MarkedPolyline::with_points(["wide mark"], [p(50, 50)]);
        let mut surface = RecordingSurface::new(200, 100);
        m.measure_with(&mut surface).unwrap();
        let bounds = m.shape_bounds();
        // Text extends right of and above its baseline anchor.
        assert!(bounds.br.x > 50);
        assert!(bounds.tl.y < 50);
    }

    #[test]
    fn marks_draw_no_lines() {
        let mut marks = Marks::with_points(["x"], [p(0, 0), p(50, 50)]);
        let mut surface = RecordingSurface::new(100, 100);
        marks.draw(&mut surface).unwrap();
        assert!(
            surface
                .cmds()
                .iter()
                .all(|c| matches!(c, DrawCmd::Text { .. }))
        );
    }

    #[test]
    fn single_is_one_char_at_one_point() {
        let m = Marks::single(p(5, 5), 'z');
        assert_eq!(m.point_count(), 1);
        assert_eq!(m.mark(0), Some("z"));
    }
}
