//! One function per demo scene, mirroring the library tour: primitives,
//! styled shapes, marks, images, plots, and interactive controls driven by
//! synthetic events.

mod basic;
mod images;
mod interact;
mod marks;
mod plots;

pub use basic::{circles, colorgrid, ellipses, grid, lines, polylines, rectangles, text};
pub use images::images;
pub use interact::{buttons, inoutbox, lines_window, menu};
pub use marks::{circles_with_marks, marked_polylines, marks};
pub use plots::{dataplots, exponentials, functions};
