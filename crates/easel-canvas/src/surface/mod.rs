//! The immediate-mode drawing surface consumed by shapes.
//!
//! Responsibilities:
//! - define the stateful [`Surface`] trait (paint + font registers, drawing
//!   primitives, text metrics)
//! - provide the renderer-agnostic [`DrawCmd`] stream and the
//!   [`RecordingSurface`] built on it
//!
//! The raster implementation lives in [`crate::raster`].

mod cmd;
mod recording;

pub use cmd::DrawCmd;
pub use recording::RecordingSurface;

use crate::bitmap::Bitmap;
use crate::coords::{Bounds, Point};
use crate::paint::{FontSpec, PaintState, Rgba8};

/// Extents of a text run relative to its baseline anchor.
///
/// `(dx, dy)` is the offset from the anchor to the top-left corner of the
/// enclosing box (`dy` is negative for any text with an ascender), `w`/`h`
/// are the box dimensions.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TextExtents {
    pub dx: i32,
    pub dy: i32,
    pub w: i32,
    pub h: i32,
}

impl TextExtents {
    /// The enclosing box for text anchored at `baseline`.
    #[inline]
    pub fn bounds_at(self, baseline: Point) -> Bounds {
        Bounds::new(
            Point::new(baseline.x + self.dx, baseline.y + self.dy),
            Point::new(baseline.x + self.dx + self.w, baseline.y + self.dy + self.h),
        )
    }
}

/// Stateful immediate-mode drawing surface.
///
/// The surface carries one current [`PaintState`] and one current
/// [`FontSpec`]; shape draw templates save the state, install their own,
/// emit primitives, and restore what they found. All coordinates are
/// integer pixels, origin top-left.
pub trait Surface {
    fn width(&self) -> i32;
    fn height(&self) -> i32;

    fn paint(&self) -> PaintState;
    fn set_paint(&mut self, paint: PaintState);

    fn font(&self) -> FontSpec;
    fn set_font(&mut self, font: FontSpec);

    /// Fills the whole surface with `color`, discarding prior content.
    fn clear(&mut self, color: Rgba8);

    /// Straight line from `a` to `b` in the current paint.
    fn line(&mut self, a: Point, b: Point);

    /// Rectangle outline.
    fn rect(&mut self, tl: Point, w: i32, h: i32);

    /// Filled rectangle.
    fn fill_rect(&mut self, tl: Point, w: i32, h: i32);

    /// Ellipse outline inscribed in the `w`×`h` box at `tl`.
    fn ellipse(&mut self, tl: Point, w: i32, h: i32);

    /// Text anchored at `baseline` in the current font and paint color.
    fn text(&mut self, s: &str, baseline: Point);

    /// Metrics of `s` in the current font.
    fn text_extents(&self, s: &str) -> TextExtents;

    /// Blits the `w`×`h` region of `bitmap` starting at `src` to `dest`.
    fn blit(&mut self, bitmap: &Bitmap, dest: Point, src: Point, w: i32, h: i32);
}
