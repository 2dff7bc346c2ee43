use easel_canvas::coords::{Bounds, Point};
use easel_canvas::paint::Rgba8;
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::shape::ShapeKind;
use crate::style::Style;

/// An axis-aligned rectangle with independent fill and outline.
///
/// The fill uses the shape's color; the outline is always black, matching
/// the rest of the library's outlined look.
pub struct Rectangle {
    bounds: Bounds,
    filled: bool,
    outline: bool,
    style: Style,
}

impl Rectangle {
    pub fn new(tl: Point, w: i32, h: i32) -> Self {
        Self::from_corners(tl, Point::new(tl.x + w, tl.y + h))
    }

    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            bounds: Bounds::from_points([a, b]).unwrap_or_default(),
            filled: true,
            outline: true,
            style: Style::default(),
        }
    }

    #[inline]
    pub fn filled(&self) -> bool {
        self.filled
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }

    #[inline]
    pub fn outline(&self) -> bool {
        self.outline
    }

    pub fn set_outline(&mut self, outline: bool) {
        self.outline = outline;
    }
}

impl ShapeKind for Rectangle {
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
        let tl = self.bounds.tl;
        let (w, h) = (self.bounds.width(), self.bounds.height());
        if self.filled {
            surface.fill_rect(tl, w, h);
        }
        if self.outline {
            let mut paint = surface.paint();
            let fill_color = paint.color;
            paint.color = Rgba8::BLACK;
            surface.set_paint(paint);
            surface.rect(tl, w, h);
            paint.color = fill_color;
            surface.set_paint(paint);
        }
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        self.bounds.translate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;
    use easel_canvas::paint::Color;
    use easel_canvas::surface::{DrawCmd, RecordingSurface};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn corners_normalize() {
        let r = Rectangle::from_corners(p(30, 40), p(10, 20));
        assert_eq!(r.shape_bounds(), Bounds::new(p(10, 20), p(30, 40)));
    }

    #[test]
    fn filled_with_outline_emits_fill_then_black_rect() {
        let mut r = Rectangle::new(p(0, 0), 20, 10);
        r.set_color(Color::Yellow);
        let mut surface = RecordingSurface::new(100, 100);
        r.draw(&mut surface).unwrap();

        match &surface.cmds()[0] {
            DrawCmd::FillRect { paint, .. } => assert_eq!(paint.color, Color::Yellow.to_rgba()),
            other => panic!("unexpected command {other:?}"),
        }
        match &surface.cmds()[1] {
            DrawCmd::Rect { paint, .. } => assert_eq!(paint.color, Rgba8::BLACK),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn outline_only() {
        let mut r = Rectangle::new(p(0, 0), 20, 10);
        r.set_filled(false);
        let mut surface = RecordingSurface::new(100, 100);
        r.draw(&mut surface).unwrap();
        assert_eq!(surface.cmds().len(), 1);
        assert!(matches!(surface.cmds()[0], DrawCmd::Rect { .. }));
    }

    #[test]
    fn neither_fill_nor_outline_draws_nothing() {
        let mut r = Rectangle::new(p(0, 0), 20, 10);
        r.set_filled(false);
        r.set_outline(false);
        let mut surface = RecordingSurface::new(100, 100);
        r.draw(&mut surface).unwrap();
        assert!(surface.cmds().is_empty());
    }

    #[test]
    fn move_preserves_size() {
        let mut r = Rectangle::new(p(10, 10), 30, 20);
        r.translate(5, -5);
        assert_eq!(r.shape_bounds(), Bounds::new(p(15, 5), p(45, 25)));
    }
}
