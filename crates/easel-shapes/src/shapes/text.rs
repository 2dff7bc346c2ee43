use easel_canvas::coords::{Bounds, Point};
use easel_canvas::surface::{Surface, TextExtents};

use crate::error::DrawError;
use crate::shape::ShapeKind;
use crate::style::Style;

/// A text run anchored at its baseline's left end.
///
/// Extents (and so the bounding box) come from the surface's font metrics;
/// they are captured whenever the shape draws or is measured explicitly.
/// Until then the box degenerates to the anchor point.
pub struct Text {
    anchor: Option<Point>,
    text: String,
    extents: Option<TextExtents>,
    style: Style,
}

impl Text {
    pub fn new(anchor: Point, text: impl Into<String>) -> Self {
        Self { anchor: Some(anchor), text: text.into(), extents: None, style: Style::default() }
    }

    /// A text shape with no anchor yet; [`set_text`](Text::set_text) fails
    /// until [`set_anchor`](Text::set_anchor) is called.
    pub fn unanchored() -> Self {
        Self { anchor: None, text: String::new(), extents: None, style: Style::default() }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> Result<(), DrawError> {
        if self.anchor.is_none() {
            return Err(DrawError::NoAnchor);
        }
        self.text = text.into();
        self.extents = None;
        Ok(())
    }

    #[inline]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = Some(anchor);
    }

    /// Captures extents from `surface` without drawing.
    pub fn measure_with(&mut self, surface: &mut dyn Surface) {
        let saved = surface.font();
        surface.set_font(self.style.font());
        self.extents = Some(surface.text_extents(&self.text));
        surface.set_font(saved);
    }
}

impl ShapeKind for Text {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        match (self.anchor, self.extents) {
            (Some(anchor), Some(extents)) => extents.bounds_at(anchor),
            (Some(anchor), None) => Bounds::at(anchor),
            (None, _) => Bounds::default(),
        }
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        let Some(anchor) = self.anchor else {
            log::debug!("text {:?} has no anchor yet, skipping", self.text);
            return Ok(());
        };
        let saved = surface.font();
        surface.set_font(self.style.font());
        surface.text(&self.text, anchor);
        self.extents = Some(surface.text_extents(&self.text));
        surface.set_font(saved);
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        if let Some(anchor) = &mut self.anchor {
            *anchor = anchor.offset(dx, dy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;
    use easel_canvas::paint::{Font, FontSpec};
    use easel_canvas::surface::{DrawCmd, RecordingSurface};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn set_text_without_anchor_fails() {
        let mut t = Text::unanchored();
        assert_eq!(t.set_text("hi"), Err(DrawError::NoAnchor));
        t.set_anchor(p(10, 10));
        assert!(t.set_text("hi").is_ok());
    }

    #[test]
    fn bounds_cover_text_after_draw() {
        let mut t = Text::new(p(100, 100), "hello");
        assert_eq!(t.shape_bounds(), Bounds::at(p(100, 100)));

        let mut surface = RecordingSurface::new(300, 200);
        t.draw(&mut surface).unwrap();
        let b = t.shape_bounds();
        assert!(b.width() > 0);
        assert!(b.tl.y < 100, "box should rise above the baseline");
    }

    #[test]
    fn draw_uses_the_shape_font_and_restores() {
        let mut t = Text::new(p(0, 50), "styled");
        t.set_font(Font::TimesBoldItalic, 18);

        let mut surface = RecordingSurface::new(300, 200);
        let before = surface.font();
        t.draw(&mut surface).unwrap();
        assert_eq!(surface.font(), before);

        match &surface.cmds()[0] {
            DrawCmd::Text { font, .. } => {
                assert_eq!(*font, FontSpec::new(Font::TimesBoldItalic, 18));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn move_shifts_anchor_and_box() {
        let mut t = Text::new(p(10, 20), "m");
        let mut surface = RecordingSurface::new(300, 200);
        t.measure_with(&mut surface);
        let before = t.shape_bounds();
        t.translate(5, 7);
        let mut after = before;
        after.translate(5, 7);
        assert_eq!(t.shape_bounds(), after);
    }
}
