//! The shape types.
//!
//! Each shape is a plain struct composing a [`Style`](crate::style::Style)
//! and its geometry, wired into the draw template through
//! [`ShapeKind`](crate::shape::ShapeKind). Extending the library:
//! - add a shape module here
//! - implement `ShapeKind` for it
//! - list it in the `impl_shape_widget!` invocation below; the generated
//!   `Widget` impl handles visibility, paint save/restore, and window
//!   integration

mod axis;
mod circle;
mod ellipse;
mod function;
mod image;
mod line;
mod marked;
mod polygon;
mod polyline;
mod rect;
mod text;

pub use axis::{XAxis, YAxis};
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use function::FunctionPlot;
pub use image::Image;
pub use line::{Line, Segments};
pub use marked::{MarkedPolyline, Marks};
pub use polygon::Polygon;
pub use polyline::{ClosedPolyline, OpenPolyline};
pub use rect::Rectangle;
pub use text::Text;

crate::shape::impl_shape_widget!(
    Circle,
    ClosedPolyline,
    Ellipse,
    FunctionPlot,
    Image,
    Line,
    MarkedPolyline,
    Marks,
    OpenPolyline,
    Polygon,
    Rectangle,
    Segments,
    Text,
    XAxis,
    YAxis,
);
