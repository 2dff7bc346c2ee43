use std::any::Any;

use easel_canvas::coords::{Bounds, Point};
use easel_canvas::paint::{PaintState, Rgba8};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::event::{Event, EventResult};
use crate::widget::Widget;

use super::CONTROL_FILL;

/// A clickable, labeled region.
///
/// # Example
/// ```rust,ignore
/// let button = Button::new(Point::new(100, 100), 100, 50, "click me")
///     .on_press(|| log::info!("pressed"));
/// let handle = win.attach(button);
/// ```
pub struct Button {
    bounds: Bounds,
    label: String,
    on_press: Option<Box<dyn FnMut()>>,
    visible: bool,
}

impl Button {
    pub fn new(tl: Point, w: i32, h: i32, label: impl Into<String>) -> Self {
        Self {
            bounds: Bounds::from_size(tl, w, h),
            label: label.into(),
            on_press: None,
            visible: true,
        }
    }

    /// Callback fired when a click lands on the button.
    pub fn on_press(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }
}

impl Widget for Button {
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

        let mut paint = PaintState { color: CONTROL_FILL, ..PaintState::default() };
        surface.set_paint(paint);
        surface.fill_rect(self.bounds.tl, w, h);

        paint.color = Rgba8::BLACK;
        surface.set_paint(paint);
        surface.rect(self.bounds.tl, w, h);

        // Label centered on the face.
        let extents = surface.text_extents(&self.label);
        let baseline = Point::new(
            self.bounds.tl.x + (w - extents.w) / 2,
            self.bounds.tl.y + (h - extents.h) / 2 - extents.dy,
        );
        surface.text(&self.label, baseline);

        surface.set_paint(saved);
        Ok(())
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.bounds.translate(dx, dy);
    }

    fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Click { pos } if self.visible && self.bounds.contains(*pos) => {
                if let Some(f) = &mut self.on_press {
                    f();
                }
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
    use std::cell::Cell;
    use std::rc::Rc;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn click_inside_fires_the_callback() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut button =
            Button::new(p(10, 10), 100, 50, "go").on_press(move || counter.set(counter.get() + 1));

        let result = button.handle_event(&Event::Click { pos: p(50, 30) });
        assert!(result.is_consumed());
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn click_outside_is_ignored() {
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let mut button =
            Button::new(p(10, 10), 100, 50, "go").on_press(move || counter.set(counter.get() + 1));

        let result = button.handle_event(&Event::Click { pos: p(5, 5) });
        assert!(!result.is_consumed());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn hidden_button_does_not_react() {
        let mut button = Button::new(p(0, 0), 10, 10, "x");
        button.hide();
        let result = button.handle_event(&Event::Click { pos: p(5, 5) });
        assert!(!result.is_consumed());
    }
}
