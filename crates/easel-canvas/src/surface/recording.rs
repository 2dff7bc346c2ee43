use crate::bitmap::Bitmap;
use crate::coords::Point;
use crate::paint::{FontSpec, PaintState, Rgba8};
use crate::text::FontStore;

use super::{DrawCmd, Surface, TextExtents};

/// A [`Surface`] that appends every primitive to an inspectable command
/// stream instead of touching pixels.
///
/// Text metrics come from an owned [`FontStore`]; with no fonts registered
/// the store's deterministic fallback metrics apply, which keeps recorded
/// runs reproducible across machines. Used as the test double throughout
/// the shape library and as a display-list debugging aid.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: i32,
    height: i32,
    paint: PaintState,
    font: FontSpec,
    fonts: FontStore,
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Recorded commands in issue order.
    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Takes the recorded commands, leaving the stream empty.
    pub fn take_cmds(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }

    pub fn fonts_mut(&mut self) -> &mut FontStore {
        &mut self.fonts
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
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
        self.cmds.push(DrawCmd::Clear { color });
    }

    fn line(&mut self, a: Point, b: Point) {
        self.cmds.push(DrawCmd::Line { a, b, paint: self.paint });
    }

    fn rect(&mut self, tl: Point, w: i32, h: i32) {
        self.cmds.push(DrawCmd::Rect { tl, w, h, paint: self.paint });
    }

    fn fill_rect(&mut self, tl: Point, w: i32, h: i32) {
        self.cmds.push(DrawCmd::FillRect { tl, w, h, paint: self.paint });
    }

    fn ellipse(&mut self, tl: Point, w: i32, h: i32) {
        self.cmds.push(DrawCmd::Ellipse { tl, w, h, paint: self.paint });
    }

    fn text(&mut self, s: &str, baseline: Point) {
        self.cmds.push(DrawCmd::Text {
            text: s.to_owned(),
            baseline,
            paint: self.paint,
            font: self.font,
        });
    }

    fn text_extents(&self, s: &str) -> TextExtents {
        self.fonts.extents(self.font, s)
    }

    fn blit(&mut self, _bitmap: &Bitmap, dest: Point, src: Point, w: i32, h: i32) {
        self.cmds.push(DrawCmd::Blit { dest, src, w, h });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;

    #[test]
    fn records_in_issue_order() {
        let mut s = RecordingSurface::new(100, 100);
        s.line(Point::new(0, 0), Point::new(10, 0));
        s.fill_rect(Point::new(1, 1), 5, 5);
        assert!(matches!(s.cmds()[0], DrawCmd::Line { .. }));
        assert!(matches!(s.cmds()[1], DrawCmd::FillRect { .. }));
    }

    #[test]
    fn commands_capture_the_active_paint() {
        let mut s = RecordingSurface::new(100, 100);
        let red = PaintState { color: Color::Red.to_rgba(), ..PaintState::default() };
        s.set_paint(red);
        s.line(Point::new(0, 0), Point::new(10, 0));
        s.set_paint(PaintState::default());
        match &s.cmds()[0] {
            DrawCmd::Line { paint, .. } => assert_eq!(*paint, red),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
