use std::any::Any;
use std::num::ParseIntError;

use easel_canvas::coords::{Bounds, Point};
use easel_canvas::paint::{PaintState, Rgba8};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::event::{Event, EventResult};
use crate::widget::Widget;

use super::FIELD_FILL;

/// A single-line text input field.
///
/// Click to focus; text input events append to the focused box. The label
/// draws to the left of the field.
pub struct InBox {
    bounds: Bounds,
    label: String,
    text: String,
    focused: bool,
    visible: bool,
}

impl InBox {
    pub fn new(tl: Point, w: i32, h: i32, label: impl Into<String>) -> Self {
        Self {
            bounds: Bounds::from_size(tl, w, h),
            label: label.into(),
            text: String::new(),
            focused: false,
            visible: true,
        }
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.text
    }

    /// The current text parsed as an integer.
    pub fn value_i32(&self) -> Result<i32, ParseIntError> {
        self.text.trim().parse()
    }

    pub fn set_value(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Widget for InBox {
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

    fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Click { pos } => {
                // Clicking elsewhere drops focus but leaves the event for
                // whoever it was aimed at.
                self.focused = self.visible && self.bounds.contains(*pos);
                if self.focused {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::TextInput { text } if self.focused => {
                self.text.push_str(text);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
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

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn click(pos: Point) -> Event {
        Event::Click { pos }
    }

    fn typed(s: &str) -> Event {
        Event::TextInput { text: s.to_owned() }
    }

    #[test]
    fn typing_requires_focus() {
        let mut inbox = InBox::new(p(0, 0), 100, 20, "x:");
        assert!(!inbox.handle_event(&typed("42")).is_consumed());
        assert_eq!(inbox.value(), "");

        inbox.handle_event(&click(p(50, 10)));
        assert!(inbox.is_focused());
        assert!(inbox.handle_event(&typed("42")).is_consumed());
        assert_eq!(inbox.value(), "42");
    }

    #[test]
    fn click_outside_drops_focus() {
        let mut inbox = InBox::new(p(0, 0), 100, 20, "x:");
        inbox.handle_event(&click(p(50, 10)));
        inbox.handle_event(&click(p(500, 500)));
        assert!(!inbox.is_focused());
    }

    #[test]
    fn value_parses_integers() {
        let mut inbox = InBox::new(p(0, 0), 100, 20, "x:");
        inbox.set_value(" 320 ");
        assert_eq!(inbox.value_i32(), Ok(320));
        inbox.set_value("abc");
        assert!(inbox.value_i32().is_err());
    }

    #[test]
    fn input_appends() {
        let mut inbox = InBox::new(p(0, 0), 100, 20, "x:");
        inbox.handle_event(&click(p(1, 1)));
        inbox.handle_event(&typed("3"));
        inbox.handle_event(&typed("20"));
        assert_eq!(inbox.value(), "320");
    }
}
