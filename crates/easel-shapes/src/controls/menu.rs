use std::any::Any;

use easel_canvas::coords::{Bounds, Point};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::event::{Event, EventResult};
use crate::widget::Widget;

use super::Button;

/// Stacking direction of a [`Menu`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum MenuLayout {
    Horizontal,
    #[default]
    Vertical,
}

/// A stack of buttons laid out with a fixed gap.
///
/// The menu owns its buttons: [`add_button`](Menu::add_button) moves the
/// button into place at the end of the stack. Showing or hiding the menu
/// shows or hides all of them; events route into the buttons while visible.
pub struct Menu {
    tl: Point,
    layout: MenuLayout,
    gap: i32,
    width: i32,
    height: i32,
    buttons: Vec<Button>,
    visible: bool,
}

impl Menu {
    pub fn new(tl: Point, layout: MenuLayout) -> Self {
        Self::with_gap(tl, layout, 5)
    }

    pub fn with_gap(tl: Point, layout: MenuLayout, gap: i32) -> Self {
        Self { tl, layout, gap, width: 0, height: 0, buttons: Vec::new(), visible: true }
    }

    /// Moves `button` to the end of the stack.
    pub fn add_button(&mut self, mut button: Button) {
        match self.layout {
            MenuLayout::Horizontal => {
                button.move_to(Point::new(self.tl.x + self.width, self.tl.y));
                self.width += button.bounds().width() + self.gap;
                self.height = self.height.max(button.bounds().height());
            }
            MenuLayout::Vertical => {
                button.move_to(Point::new(self.tl.x, self.tl.y + self.height));
                self.height += button.bounds().height() + self.gap;
                self.width = self.width.max(button.bounds().width());
            }
        }
        self.buttons.push(button);
    }

    #[inline]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    #[inline]
    pub fn button(&self, index: usize) -> Option<&Button> {
        self.buttons.get(index)
    }
}

impl Widget for Menu {
    fn bounds(&self) -> Bounds {
        Bounds::from_size(self.tl, self.width, self.height)
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
        for button in &mut self.buttons {
            button.draw(surface)?;
        }
        Ok(())
    }

    fn translate(&mut self, dx: i32, dy: i32) {
        self.tl = self.tl.offset(dx, dy);
        for button in &mut self.buttons {
            button.translate(dx, dy);
        }
    }

    fn handle_event(&mut self, event: &Event) -> EventResult {
        if !self.visible {
            return EventResult::Ignored;
        }
        for button in &mut self.buttons {
            if button.handle_event(event).is_consumed() {
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
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

    fn button(label: &str) -> Button {
        Button::new(p(0, 0), 100, 50, label)
    }

    #[test]
    fn vertical_menu_stacks_downward() {
        let mut menu = Menu::new(p(100, 100), MenuLayout::Vertical);
        menu.add_button(button("a"));
        menu.add_button(button("b"));
        assert_eq!(menu.button(0).unwrap().bounds().tl, p(100, 100));
        assert_eq!(menu.button(1).unwrap().bounds().tl, p(100, 155));
        assert_eq!(menu.bounds().width(), 100);
    }

    #[test]
    fn horizontal_menu_stacks_rightward() {
        let mut menu = Menu::new(p(10, 10), MenuLayout::Horizontal);
        menu.add_button(button("a"));
        menu.add_button(button("b"));
        assert_eq!(menu.button(1).unwrap().bounds().tl, p(115, 10));
        assert_eq!(menu.bounds().height(), 50);
    }

    #[test]
    fn clicks_route_to_the_hit_button() {
        let picked = Rc::new(Cell::new(' '));
        let mut menu = Menu::new(p(0, 0), MenuLayout::Vertical);
        for c in ['a', 'b'] {
            let tag = Rc::clone(&picked);
            menu.add_button(
                Button::new(p(0, 0), 100, 50, c.to_string()).on_press(move || tag.set(c)),
            );
        }
        let result = menu.handle_event(&Event::Click { pos: p(50, 80) });
        assert!(result.is_consumed());
        assert_eq!(picked.get(), 'b');
    }

    #[test]
    fn hidden_menu_swallows_nothing() {
        let mut menu = Menu::new(p(0, 0), MenuLayout::Vertical);
        menu.add_button(button("a"));
        menu.hide();
        let result = menu.handle_event(&Event::Click { pos: p(10, 10) });
        assert!(!result.is_consumed());
    }

    #[test]
    fn menu_moves_as_a_unit() {
        let mut menu = Menu::new(p(0, 0), MenuLayout::Vertical);
        menu.add_button(button("a"));
        menu.translate(30, 40);
        assert_eq!(menu.bounds().tl, p(30, 40));
        assert_eq!(menu.button(0).unwrap().bounds().tl, p(30, 40));
    }
}
