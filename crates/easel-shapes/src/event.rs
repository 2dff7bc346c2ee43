use easel_canvas::coords::Point;

/// Input events routed through a window's widgets.
///
/// The host event loop is out of scope here; events are synthesized by the
/// application (or a test) and handed to
/// [`Window::dispatch`](crate::window::Window::dispatch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Primary button pressed and released at `pos`.
    Click { pos: Point },
    /// Committed text input (one or more characters), routed to the focused
    /// input control.
    TextInput { text: String },
}

/// Result returned by [`Widget::handle_event`](crate::widget::Widget::handle_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled; stop routing.
    Consumed,
    /// Event was not handled; keep routing.
    Ignored,
}

impl EventResult {
    #[inline]
    pub fn is_consumed(self) -> bool {
        self == EventResult::Consumed
    }
}
