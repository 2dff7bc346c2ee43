use std::path::Path;

use easel_canvas::bitmap::{Bitmap, BitmapError};
use easel_canvas::coords::{Bounds, Point};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::shape::ShapeKind;
use crate::style::Style;

/// A decoded bitmap positioned by its top-left corner.
///
/// The view can be restricted to a sub-region
/// ([`set_mask`](Image::set_mask)) or resampled to a new size
/// ([`scale`](Image::scale)); scaling replaces any mask.
pub struct Image {
    tl: Point,
    bitmap: Bitmap,
    scaled: Option<Bitmap>,
    src: Point,
    view_w: i32,
    view_h: i32,
    style: Style,
}

impl Image {
    /// Decodes `path` and places the full image at `tl`.
    pub fn open(tl: Point, path: impl AsRef<Path>) -> Result<Self, BitmapError> {
        Ok(Self::from_bitmap(tl, Bitmap::open(path)?))
    }

    pub fn from_bitmap(tl: Point, bitmap: Bitmap) -> Self {
        let (w, h) = (bitmap.width(), bitmap.height());
        Self {
            tl,
            bitmap,
            scaled: None,
            src: Point::origin(),
            view_w: w,
            view_h: h,
            style: Style::default(),
        }
    }

    /// Shows only the `w`×`h` region of the source starting at `origin`.
    pub fn set_mask(&mut self, origin: Point, w: i32, h: i32) {
        self.src = origin;
        self.view_w = w;
        self.view_h = h;
        self.scaled = None;
    }

    /// Resamples the full source image to `w`×`h`.
    pub fn scale(&mut self, w: i32, h: i32) {
        self.scaled = Some(self.bitmap.scaled(w, h));
        self.src = Point::origin();
        self.view_w = w;
        self.view_h = h;
    }

    #[inline]
    pub fn mask_origin(&self) -> Point {
        self.src
    }

    #[inline]
    pub fn size(&self) -> (i32, i32) {
        (self.view_w, self.view_h)
    }
}

impl ShapeKind for Image {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        Bounds::from_size(self.tl, self.view_w, self.view_h)
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        match &self.scaled {
            Some(scaled) => {
                surface.blit(scaled, self.tl, Point::origin(), self.view_w, self.view_h)
            }
            None => surface.blit(&self.bitmap, self.tl, self.src, self.view_w, self.view_h),
        }
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        self.tl = self.tl.offset(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;
    use easel_canvas::surface::{DrawCmd, RecordingSurface};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn checker(w: u32, h: u32) -> Bitmap {
        let bytes = (0..w * h)
            .flat_map(|i| {
                if i % 2 == 0 {
                    [0, 0, 0, 255]
                } else {
                    [255, 255, 255, 255]
                }
            })
            .collect();
        Bitmap::from_rgba(w, h, bytes).unwrap()
    }

    #[test]
    fn bounds_are_the_image_size() {
        let img = Image::from_bitmap(p(10, 20), checker(8, 4));
        assert_eq!(img.shape_bounds(), Bounds::new(p(10, 20), p(18, 24)));
    }

    #[test]
    fn mask_restricts_the_view() {
        let mut img = Image::from_bitmap(p(0, 0), checker(16, 16));
        img.set_mask(p(4, 4), 8, 8);
        assert_eq!(img.shape_bounds().width(), 8);

        let mut surface = RecordingSurface::new(100, 100);
        img.draw(&mut surface).unwrap();
        match surface.cmds()[0] {
            DrawCmd::Blit { src, w, h, .. } => {
                assert_eq!(src, p(4, 4));
                assert_eq!((w, h), (8, 8));
            }
            ref other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn scale_resizes_bounds_and_clears_mask() {
        let mut img = Image::from_bitmap(p(0, 0), checker(8, 8));
        img.set_mask(p(2, 2), 4, 4);
        img.scale(32, 16);
        assert_eq!(img.shape_bounds(), Bounds::new(p(0, 0), p(32, 16)));
        assert_eq!(img.mask_origin(), p(0, 0));
    }

    #[test]
    fn move_shifts_the_placement_only() {
        let mut img = Image::from_bitmap(p(0, 0), checker(4, 4));
        img.set_mask(p(1, 1), 2, 2);
        img.translate(10, 10);
        assert_eq!(img.shape_bounds().tl, p(10, 10));
        assert_eq!(img.mask_origin(), p(1, 1));
    }
}
