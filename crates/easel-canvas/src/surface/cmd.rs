use crate::coords::Point;
use crate::paint::{FontSpec, PaintState, Rgba8};

/// Renderer-agnostic draw command.
///
/// Each geometry command captures the paint state it was issued under, so a
/// recorded stream is self-contained: replaying or inspecting it needs no
/// knowledge of the state changes in between.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Clear {
        color: Rgba8,
    },
    Line {
        a: Point,
        b: Point,
        paint: PaintState,
    },
    Rect {
        tl: Point,
        w: i32,
        h: i32,
        paint: PaintState,
    },
    FillRect {
        tl: Point,
        w: i32,
        h: i32,
        paint: PaintState,
    },
    Ellipse {
        tl: Point,
        w: i32,
        h: i32,
        paint: PaintState,
    },
    Text {
        text: String,
        baseline: Point,
        paint: PaintState,
        font: FontSpec,
    },
    Blit {
        dest: Point,
        src: Point,
        w: i32,
        h: i32,
    },
}
