use anyhow::Result;

use easel_shapes::prelude::*;

use crate::stage::Stage;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Marked polylines: one mark per point, and a single shared-style list
/// grown point by point.
pub fn marked_polylines(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Marked polylines");

    let mut named = MarkedPolyline::with_points(
        ["one", "two", "three", "four"],
        [p(100, 100), p(200, 100), p(150, 50), p(150, 150)],
    );
    named.set_color(Color::Magenta);
    named.set_style(LineStyle::Solid, 2);
    named.set_font(Font::TimesBoldItalic, 12);
    win.attach(named);

    let mut coords = MarkedPolyline::new(["{250,200}", "{300,75}", "{300,350}", "{200,400}"]);
    coords.add_point(p(250, 200));
    coords.add_point(p(300, 75));
    coords.add_point(p(300, 350));
    coords.add_point(p(200, 400));
    coords.set_color(Color::Yellow);
    coords.set_style(LineStyle::Solid, 4);
    coords.set_font(Font::TimesBoldItalic, 28);
    win.attach(coords);

    stage.present(&mut win, "marked-polylines")
}

/// Marks without connecting lines.
pub fn marks(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Marks");

    let mut marks = Marks::with_points(
        ["x"],
        [p(250, 200), p(300, 75), p(300, 350), p(200, 400)],
    );
    marks.set_color(Color::Red);
    marks.set_style(LineStyle::Solid, 4);
    marks.set_font(Font::TimesBoldItalic, 28);
    win.attach(marks);

    stage.present(&mut win, "marks")
}

/// Circles with their centers lettered.
pub fn circles_with_marks(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Circles with centers");

    let centers = [p(100, 200), p(150, 200), p(200, 200)];
    let radii = [50, 100, 150];
    let colors = [Color::Blue, Color::Red, Color::Green];
    for ((center, radius), color) in centers.iter().zip(radii).zip(colors) {
        let mut circle = Circle::new(*center, radius);
        circle.set_color(color);
        win.attach(circle);
    }

    for (center, letter) in centers.iter().zip(['x', 'y', 'z']) {
        win.attach(Marks::single(*center, letter));
    }

    stage.present(&mut win, "circles-with-marks")
}
