use std::any::Any;

use easel_canvas::coords::{Bounds, Point};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::event::{Event, EventResult};

// ── Widget trait ──────────────────────────────────────────────────────────

/// Anything with a bounding box that can live in a window's draw list.
///
/// Shapes get this implemented for free through
/// [`ShapeKind`](crate::shape::ShapeKind); controls implement it directly.
/// The `Any` plumbing (`as_any` and friends) exists so windows can hand out
/// typed access through [`Handle`](crate::window::Handle)s.
pub trait Widget: Any {
    /// Tight axis-aligned bounding box of the widget's geometry.
    fn bounds(&self) -> Bounds;

    fn visible(&self) -> bool;
    fn set_visible(&mut self, visible: bool);

    /// Draws onto `surface`. Implementations must leave the surface's paint
    /// and font state as they found it.
    fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError>;

    /// Shifts all geometry by `(dx, dy)`.
    fn translate(&mut self, dx: i32, dy: i32);

    /// Moves so the bounding box's top-left corner lands on `p`.
    fn move_to(&mut self, p: Point) {
        let tl = self.bounds().tl;
        self.translate(p.x - tl.x, p.y - tl.y);
    }

    #[inline]
    fn show(&mut self) {
        self.set_visible(true);
    }

    #[inline]
    fn hide(&mut self) {
        self.set_visible(false);
    }

    /// Routes an input event. The default ignores everything; interactive
    /// controls override.
    fn handle_event(&mut self, _event: &Event) -> EventResult {
        EventResult::Ignored
    }

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

// ── Element ───────────────────────────────────────────────────────────────

/// A type-erased widget: the element type a window's draw list stores.
pub struct Element(Box<dyn Widget>);

impl Element {
    pub fn new<W: Widget>(widget: W) -> Self {
        Self(Box::new(widget))
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.0.bounds()
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.0.visible()
    }

    #[inline]
    pub fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        self.0.draw(surface)
    }

    #[inline]
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.0.translate(dx, dy)
    }

    #[inline]
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        self.0.handle_event(event)
    }

    #[inline]
    pub fn downcast_ref<W: Widget>(&self) -> Option<&W> {
        self.0.as_any().downcast_ref()
    }

    #[inline]
    pub fn downcast_mut<W: Widget>(&mut self) -> Option<&mut W> {
        self.0.as_any_mut().downcast_mut()
    }

    /// Recovers the concrete widget, or returns `self` unchanged if the type
    /// does not match.
    pub fn into_inner<W: Widget>(self) -> Result<W, Element> {
        if self.downcast_ref::<W>().is_some() {
            // Checked just above; unwrap cannot fire.
            Ok(*self.0.into_any().downcast::<W>().unwrap())
        } else {
            Err(self)
        }
    }
}

impl<W: Widget> From<W> for Element {
    fn from(widget: W) -> Self {
        Self::new(widget)
    }
}
