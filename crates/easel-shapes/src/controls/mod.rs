//! Interactive controls: button, input box, output box, menu.
//!
//! Controls are ordinary widgets in a window's draw list. Input arrives as
//! synthetic [`Event`](crate::event::Event)s through
//! [`Window::dispatch`](crate::window::Window::dispatch); a control consumes
//! an event that lands inside its bounds. Callbacks are plain `FnMut`
//! closures bound at construction.

mod button;
mod inbox;
mod menu;
mod outbox;

pub use button::Button;
pub use inbox::InBox;
pub use menu::{Menu, MenuLayout};
pub use outbox::OutBox;

use easel_canvas::paint::Rgba8;

pub(crate) const CONTROL_FILL: Rgba8 = Rgba8::opaque(225, 225, 225);
pub(crate) const FIELD_FILL: Rgba8 = Rgba8::WHITE;
