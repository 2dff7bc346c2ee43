//! Paint model shared between shapes and surfaces.
//!
//! Scope:
//! - color: abstract named palette, color-by-index, native RGBA
//! - line style: abstract dash enumeration, native dash arrays
//! - font: abstract font enumeration, native family/weight/slant
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod font;
pub mod style;

pub use color::{Color, Rgba8};
pub use font::{Font, FontFamily, FontSpec};
pub use style::LineStyle;

/// Current drawing state of a [`Surface`](crate::surface::Surface): one
/// color and one line style/width, saved and restored around every shape
/// draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PaintState {
    pub color: Rgba8,
    pub style: LineStyle,
    /// Line width in pixels. `0` means hairline (drawn one pixel wide).
    pub width: i32,
}

impl Default for PaintState {
    fn default() -> Self {
        Self { color: Rgba8::BLACK, style: LineStyle::Solid, width: 0 }
    }
}

impl PaintState {
    /// Width as drawn: hairline (`0`) maps to one pixel.
    #[inline]
    pub fn effective_width(self) -> i32 {
        self.width.max(1)
    }
}
