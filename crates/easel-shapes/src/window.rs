use std::marker::PhantomData;

use easel_canvas::paint::Rgba8;
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::event::{Event, EventResult};
use crate::widget::{Element, Widget};

/// Identity of an attached widget within its window.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

/// Typed handle returned by [`Window::attach`].
///
/// A handle outlives detachment harmlessly; lookups just return `None`.
pub struct Handle<W> {
    id: WidgetId,
    _marker: PhantomData<fn() -> W>,
}

impl<W> Handle<W> {
    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }
}

impl<W> Copy for Handle<W> {}

impl<W> Clone for Handle<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> std::fmt::Debug for Handle<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Handle").field(&self.id).finish()
    }
}

struct Slot {
    id: WidgetId,
    element: Element,
}

/// Owner of the draw order: an ordered list of attached widgets plus the
/// window chrome (title, size, background).
///
/// There is no OS window behind this; rendering happens on whatever
/// [`Surface`] the application passes in, and input arrives as synthetic
/// [`Event`]s through [`dispatch`](Window::dispatch).
pub struct Window {
    title: String,
    width: i32,
    height: i32,
    background: Rgba8,
    slots: Vec<Slot>,
    next_id: u64,
}

impl Window {
    pub fn new(width: i32, height: i32, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            background: Rgba8::WHITE,
            slots: Vec::new(),
            next_id: 0,
        }
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[inline]
    pub fn x_max(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn y_max(&self) -> i32 {
        self.height
    }

    pub fn set_background(&mut self, color: Rgba8) {
        self.background = color;
    }

    #[inline]
    pub fn widget_count(&self) -> usize {
        self.slots.len()
    }

    /// Moves `widget` into the draw list (on top of everything attached so
    /// far) and returns a typed handle to it.
    pub fn attach<W: Widget>(&mut self, widget: W) -> Handle<W> {
        let id = self.push(Element::new(widget));
        Handle { id, _marker: PhantomData }
    }

    /// Attaches an already type-erased element.
    pub fn attach_element(&mut self, element: Element) -> WidgetId {
        self.push(element)
    }

    fn push(&mut self, element: Element) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.slots.push(Slot { id, element });
        id
    }

    /// Removes the widget and hands it back to the caller.
    pub fn detach<W: Widget>(&mut self, handle: Handle<W>) -> Option<W> {
        let index = self.index_of(handle.id)?;
        let slot = self.slots.remove(index);
        slot.element.into_inner().ok()
    }

    /// Removes a widget by id, returning the type-erased element.
    pub fn detach_element(&mut self, id: WidgetId) -> Option<Element> {
        let index = self.index_of(id)?;
        Some(self.slots.remove(index).element)
    }

    /// Moves an attached widget to the end of the draw list so it renders
    /// above everything else. Returns false if `id` is not attached.
    pub fn put_on_top(&mut self, id: WidgetId) -> bool {
        match self.index_of(id) {
            Some(index) => {
                let slot = self.slots.remove(index);
                self.slots.push(slot);
                true
            }
            None => false,
        }
    }

    pub fn get<W: Widget>(&self, handle: &Handle<W>) -> Option<&W> {
        let index = self.index_of(handle.id)?;
        self.slots[index].element.downcast_ref()
    }

    pub fn get_mut<W: Widget>(&mut self, handle: &Handle<W>) -> Option<&mut W> {
        let index = self.index_of(handle.id)?;
        self.slots[index].element.downcast_mut()
    }

    /// Translates an attached widget without typed access. Returns false if
    /// `id` is not attached.
    pub fn translate_widget(&mut self, id: WidgetId, dx: i32, dy: i32) -> bool {
        match self.index_of(id) {
            Some(index) => {
                self.slots[index].element.translate(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Draws the background and every attached widget in draw-list order.
    ///
    /// Stops at the first widget that fails its draw precondition and
    /// propagates the error.
    pub fn render(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        surface.clear(self.background);
        for slot in &mut self.slots {
            slot.element.draw(surface)?;
        }
        Ok(())
    }

    /// Routes an event through the widgets, topmost first. Returns the id
    /// of the widget that consumed it, if any.
    pub fn dispatch(&mut self, event: &Event) -> Option<WidgetId> {
        for slot in self.slots.iter_mut().rev() {
            if slot.element.handle_event(event) == EventResult::Consumed {
                return Some(slot.id);
            }
        }
        None
    }

    fn index_of(&self, id: WidgetId) -> Option<usize> {
        self.slots.iter().position(|s| s.id == id)
    }
}
