//! CPU raster surface backed by `tiny-skia`.
//!
//! This is the production backend: shapes draw into a pixmap, the demo
//! binary exports frames as PNG. Glyphs are rasterized through the
//! [`FontStore`]'s `fontdue` fonts and composited per pixel; a variant with
//! no registered data keeps its fallback metrics and skips glyph output
//! with a warning.

use std::fmt;
use std::path::Path;

use tiny_skia::{
    FilterQuality, Paint, PathBuilder, Pattern, Pixmap, SpreadMode, Stroke, StrokeDash, Transform,
};

use crate::bitmap::Bitmap;
use crate::coords::Point;
use crate::paint::{FontSpec, PaintState, Rgba8};
use crate::surface::{Surface, TextExtents};
use crate::text::FontStore;

/// Error from raster surface construction or export.
#[derive(Debug)]
pub enum RasterError {
    /// Width or height was zero or negative.
    InvalidSize { width: i32, height: i32 },
    /// PNG encoding failed.
    Encode(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::InvalidSize { width, height } => {
                write!(f, "invalid surface size {width}x{height}")
            }
            RasterError::Encode(msg) => write!(f, "png encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for RasterError {}

/// A [`Surface`] rendering into a `tiny-skia` pixmap.
pub struct RasterSurface<'a> {
    pixmap: Pixmap,
    paint: PaintState,
    font: FontSpec,
    fonts: &'a FontStore,
}

impl<'a> RasterSurface<'a> {
    /// Creates a white surface of the given pixel size.
    pub fn new(width: i32, height: i32, fonts: &'a FontStore) -> Result<Self, RasterError> {
        if width <= 0 || height <= 0 {
            return Err(RasterError::InvalidSize { width, height });
        }
        let mut pixmap = Pixmap::new(width as u32, height as u32)
            .ok_or(RasterError::InvalidSize { width, height })?;
        pixmap.fill(to_skia(Rgba8::WHITE));
        Ok(Self { pixmap, paint: PaintState::default(), font: FontSpec::default(), fonts })
    }

    /// Writes the surface out as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        self.pixmap
            .save_png(path.as_ref())
            .map_err(|e| RasterError::Encode(e.to_string()))
    }

    /// Straight-alpha color of the pixel at `(x, y)`, if in range.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        if x < 0 || y < 0 {
            return None;
        }
        let px = self.pixmap.pixel(x as u32, y as u32)?;
        let c = px.demultiply();
        Some(Rgba8::new(c.red(), c.green(), c.blue(), c.alpha()))
    }

    fn stroke(&self) -> Stroke {
        let width = self.paint.effective_width() as f32;
        Stroke {
            width,
            dash: self
                .paint
                .style
                .dash_pattern(self.paint.width)
                .and_then(|p| StrokeDash::new(p, 0.0)),
            ..Stroke::default()
        }
    }

    fn stroke_paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(to_skia(self.paint.color));
        paint.anti_alias = true;
        paint
    }

    fn stroke_path(&mut self, path: tiny_skia::Path) {
        let paint = self.stroke_paint();
        let stroke = self.stroke();
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Composites one coverage value of `color` onto the pixmap.
    fn blend_coverage(&mut self, x: i32, y: i32, color: Rgba8, coverage: u8) {
        if coverage == 0 || x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return;
        }
        let w = self.pixmap.width() as usize;
        let idx = (y as usize * w + x as usize) * 4;
        let data = self.pixmap.data_mut();

        let alpha = color.a as u32 * coverage as u32 / 255;
        let inv = 255 - alpha;
        // Premultiplied source-over.
        let blend = |src: u8, dst: u8| -> u8 {
            ((src as u32 * alpha + dst as u32 * inv) / 255) as u8
        };
        data[idx] = blend(color.r, data[idx]);
        data[idx + 1] = blend(color.g, data[idx + 1]);
        data[idx + 2] = blend(color.b, data[idx + 2]);
        data[idx + 3] = (alpha + data[idx + 3] as u32 * inv / 255) as u8;
    }
}

impl Surface for RasterSurface<'_> {
    fn width(&self) -> i32 {
        self.pixmap.width() as i32
    }

    fn height(&self) -> i32 {
        self.pixmap.height() as i32
    }

    fn paint(&self) -> PaintState {
        self.paint
    }

    fn set_paint(&mut self, paint: PaintState) {
        self.paint = paint;
    }

    fn font(&self) -> FontSpec {
        self.font
    }

    fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    fn clear(&mut self, color: Rgba8) {
        self.pixmap.fill(to_skia(color));
    }

    fn line(&mut self, a: Point, b: Point) {
        let mut pb = PathBuilder::new();
        // Center coordinates on the pixel grid so odd widths stay crisp.
        pb.move_to(a.x as f32 + 0.5, a.y as f32 + 0.5);
        pb.line_to(b.x as f32 + 0.5, b.y as f32 + 0.5);
        if let Some(path) = pb.finish() {
            self.stroke_path(path);
        }
    }

    fn rect(&mut self, tl: Point, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let Some(rect) = tiny_skia::Rect::from_xywh(
            tl.x as f32 + 0.5,
            tl.y as f32 + 0.5,
            (w - 1).max(1) as f32,
            (h - 1).max(1) as f32,
        ) else {
            return;
        };
        self.stroke_path(PathBuilder::from_rect(rect));
    }

    fn fill_rect(&mut self, tl: Point, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let Some(rect) = tiny_skia::Rect::from_xywh(tl.x as f32, tl.y as f32, w as f32, h as f32)
        else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(to_skia(self.paint.color));
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn ellipse(&mut self, tl: Point, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let Some(rect) =
            tiny_skia::Rect::from_xywh(tl.x as f32, tl.y as f32, w as f32, h as f32)
        else {
            return;
        };
        if let Some(path) = PathBuilder::from_oval(rect) {
            self.stroke_path(path);
        }
    }

    fn text(&mut self, s: &str, baseline: Point) {
        let Some(font) = self.fonts.get(self.font.font) else {
            log::warn!("no font data registered for {:?}, skipping text", self.font.font);
            return;
        };
        let px = self.font.size.max(1) as f32;
        let color = self.paint.color;
        let mut pen = baseline.x as f32;
        for ch in s.chars() {
            let (metrics, coverage) = font.rasterize(ch, px);
            let left = (pen + metrics.xmin as f32).round() as i32;
            let top = baseline.y - metrics.ymin - metrics.height as i32;
            for row in 0..metrics.height {
                for col in 0..metrics.width {
                    let c = coverage[row * metrics.width + col];
                    self.blend_coverage(left + col as i32, top + row as i32, color, c);
                }
            }
            pen += metrics.advance_width;
        }
    }

    fn text_extents(&self, s: &str) -> TextExtents {
        self.fonts.extents(self.font, s)
    }

    fn blit(&mut self, bitmap: &Bitmap, dest: Point, src: Point, w: i32, h: i32) {
        if w <= 0 || h <= 0 {
            return;
        }
        let Some(source) = premultiplied(bitmap) else {
            return;
        };
        let Some(rect) =
            tiny_skia::Rect::from_xywh(dest.x as f32, dest.y as f32, w as f32, h as f32)
        else {
            return;
        };
        let shift = Transform::from_translate((dest.x - src.x) as f32, (dest.y - src.y) as f32);
        let paint = Paint {
            shader: Pattern::new(
                source.as_ref(),
                SpreadMode::Pad,
                FilterQuality::Nearest,
                1.0,
                shift,
            ),
            ..Paint::default()
        };
        self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }
}

fn to_skia(c: Rgba8) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

/// Converts a straight-alpha bitmap into a premultiplied pixmap.
fn premultiplied(bitmap: &Bitmap) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(bitmap.width() as u32, bitmap.height() as u32)?;
    let src = bitmap.rgba_bytes();
    let dst = pixmap.data_mut();
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        let a = s[3] as u32;
        d[0] = (s[0] as u32 * a / 255) as u8;
        d[1] = (s[1] as u32 * a / 255) as u8;
        d[2] = (s[2] as u32 * a / 255) as u8;
        d[3] = s[3];
    }
    Some(pixmap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Color, LineStyle};

    #[test]
    fn new_surface_is_white() {
        let fonts = FontStore::new();
        let s = RasterSurface::new(8, 8, &fonts).unwrap();
        assert_eq!(s.pixel(4, 4), Some(Rgba8::WHITE));
    }

    #[test]
    fn zero_size_is_rejected() {
        let fonts = FontStore::new();
        assert!(RasterSurface::new(0, 8, &fonts).is_err());
    }

    #[test]
    fn fill_rect_paints_interior_exactly() {
        let fonts = FontStore::new();
        let mut s = RasterSurface::new(32, 32, &fonts).unwrap();
        s.set_paint(PaintState {
            color: Color::Red.to_rgba(),
            style: LineStyle::Solid,
            width: 1,
        });
        s.fill_rect(Point::new(4, 4), 10, 10);
        assert_eq!(s.pixel(8, 8), Some(Color::Red.to_rgba()));
        assert_eq!(s.pixel(20, 20), Some(Rgba8::WHITE));
    }

    #[test]
    fn blit_copies_pixels() {
        let fonts = FontStore::new();
        let mut s = RasterSurface::new(16, 16, &fonts).unwrap();
        let blue = Color::Blue.to_rgba();
        let bytes: Vec<u8> = std::iter::repeat([blue.r, blue.g, blue.b, blue.a])
            .take(4 * 4)
            .flatten()
            .collect();
        let bmp = Bitmap::from_rgba(4, 4, bytes).unwrap();
        s.blit(&bmp, Point::new(2, 2), Point::origin(), 4, 4);
        assert_eq!(s.pixel(3, 3), Some(blue));
        assert_eq!(s.pixel(10, 10), Some(Rgba8::WHITE));
    }
}
