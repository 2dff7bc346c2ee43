//! Easel shapes: a teaching-oriented 2D shape library over the
//! [`easel_canvas`] drawing surface.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use easel_shapes::prelude::*;
//!
//! let mut win = Window::new(640, 480, "hello");
//! let mut line = Line::new(Point::new(100, 300), Point::new(200, 300));
//! line.set_color(Color::Blue);
//! line.set_style(LineStyle::Solid, 2);
//! win.attach(line);
//!
//! let fonts = FontStore::new();
//! let mut surface = RasterSurface::new(640, 480, &fonts)?;
//! win.render(&mut surface)?;
//! surface.save_png("hello.png")?;
//! ```
//!
//! Shapes own their geometry and style; a [`Window`](window::Window) owns
//! the draw order. `attach` moves a shape in and hands back a typed handle
//! for later mutation, `detach` gives it back.
//!
//! # Extending with custom shapes
//!
//! Implement [`ShapeKind`](shape::ShapeKind) for a type and register it with
//! the crate's `impl_shape_widget!` macro; the generated
//! [`Widget`](widget::Widget) impl supplies the draw template (apply paint →
//! draw geometry → restore paint), visibility, and window integration.

pub mod controls;
pub mod error;
pub mod event;
pub mod seq;
pub mod shape;
pub mod shapes;
pub mod style;
pub mod widget;
pub mod window;

/// Everything demo and application code usually needs.
pub mod prelude {
    pub use easel_canvas::bitmap::Bitmap;
    pub use easel_canvas::coords::{Bounds, Point};
    pub use easel_canvas::paint::{Color, Font, FontSpec, LineStyle, Rgba8};
    pub use easel_canvas::raster::RasterSurface;
    pub use easel_canvas::surface::{RecordingSurface, Surface};
    pub use easel_canvas::text::FontStore;

    pub use crate::controls::{Button, InBox, Menu, MenuLayout, OutBox};
    pub use crate::error::{DrawError, RangeError};
    pub use crate::event::{Event, EventResult};
    pub use crate::shape::ShapeKind;
    pub use crate::shapes::{
        Circle, ClosedPolyline, Ellipse, FunctionPlot, Image, Line, MarkedPolyline, Marks,
        OpenPolyline, Polygon, Rectangle, Segments, Text, XAxis, YAxis,
    };
    pub use crate::widget::{Element, Widget};
    pub use crate::window::{Handle, WidgetId, Window};
}
