use std::any::Any;

use easel_canvas::coords::{Bounds, Point};
use easel_canvas::paint::{PaintState, Rgba8};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::widget::Widget;

use super::FIELD_FILL;

/// A read-only text display field.
pub struct OutBox {
    bounds: Bounds,
    label: String,
    text: String,
    visible: bool,
}

impl OutBox {
    pub fn new(tl: Point, w: i32, h: i32, label: impl Into<String>) -> Self {
        Self {
            bounds: Bounds::from_size(tl, w, h),
            label: label.into(),
            text: String::new(),
            visible: true,
        }
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn set_value(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for OutBox {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        if !self.visible {
            return Ok(());
        }
        let saved = surface.paint();
        let (w, h) = (self.bounds.width(), self.bounds.height());

        let mut paint = PaintState { color: FIELD_FILL, ..PaintState::default() };
        surface.set_paint(paint);
        surface.fill_rect(self.bounds.tl, w, h);

        paint.color = Rgba8::BLACK;
        surface.set_paint(paint);
        surface.rect(self.bounds.tl, w, h);

        let label_extents = surface.text_extents(&self.label);
        let mid = self.bounds.tl.y + (h - label_extents.h) / 2 - label_extents.dy;
        surface.text(&self.label, Point::new(self.bounds.tl.x - label_extents.w - 4, mid));
        surface.text(&self.text, Point::new(self.bounds.tl.x + 4, mid));

        surface.set_paint(saved);
        Ok(())
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.bounds.translate(dx, dy);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_canvas::surface::{DrawCmd, RecordingSurface};

    #[test]
    fn shows_its_value() {
        let mut out = OutBox::new(Point::new(50, 50), 100, 20, "out:");
        out.set_value("(320,240)");

        let mut surface = RecordingSurface::new(300, 300);
        out.draw(&mut surface).unwrap();
        assert!(surface.cmds().iter().any(|c| matches!(
            c,
            DrawCmd::Text { text, .. } if text == "(320,240)"
        )));
    }

    #[test]
    fn hidden_outbox_draws_nothing() {
        let mut out = OutBox::new(Point::new(0, 0), 100, 20, "out:");
        out.hide();
        let mut surface = RecordingSurface::new(300, 300);
        out.draw(&mut surface).unwrap();
        assert!(surface.cmds().is_empty());
    }
}
