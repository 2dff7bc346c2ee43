use anyhow::Result;

use easel_shapes::prelude::*;

use crate::stage::Stage;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Single lines plus a segment list forming a cross.
pub fn lines(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Lines");

    let mut horizontal = Line::new(p(100, 300), p(200, 300));
    horizontal.set_color(Color::Blue);
    horizontal.set_style(LineStyle::Solid, 2);
    let mut vertical = Line::new(p(150, 50), p(150, 150));
    vertical.set_color(Color::Blue);
    vertical.set_style(LineStyle::Solid, 2);
    win.attach(horizontal);
    win.attach(vertical);

    let mut diagonal = Line::new(p(200, 200), p(250, 250));
    diagonal.set_color(Color::Blue);
    diagonal.set_style(LineStyle::Solid, 2);
    win.attach(diagonal);

    let mut cross = Segments::new();
    cross.add((p(300, 300), p(400, 300)));
    cross.add((p(350, 250), p(350, 350)));
    win.attach(cross);

    stage.present(&mut win, "lines")
}

/// A dashed full-window grid out of one `Segments` shape.
pub fn grid(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Grid");

    let mut grid = Segments::new();
    let (x_size, y_size) = (win.x_max(), win.y_max());
    let (x_grid, y_grid) = (80, 40);
    for x in (x_grid..x_size).step_by(x_grid as usize) {
        grid.add((p(x, 0), p(x, y_size)));
    }
    for y in (y_grid..y_size).step_by(y_grid as usize) {
        grid.add((p(0, y), p(x_size, y)));
    }
    grid.set_color(Color::Red);
    grid.set_style(LineStyle::Dash, 4);
    win.attach(grid);

    stage.present(&mut win, "grid")
}

/// Open and closed polylines next to a valid polygon.
pub fn polylines(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Polylines and polygon");

    let mut open =
        OpenPolyline::from_points([p(100, 100), p(200, 100), p(150, 50), p(150, 150)]);
    open.set_color(Color::Magenta);
    open.set_style(LineStyle::Solid, 4);
    win.attach(open);

    let mut closed =
        ClosedPolyline::from_points([p(300, 300), p(400, 300), p(350, 250), p(350, 350)]);
    closed.set_color(Color::Green);
    closed.set_style(LineStyle::Solid, 4);
    win.attach(closed);

    let mut poly = Polygon::from_points([p(200, 150), p(250, 25), p(250, 300), p(150, 350)]);
    poly.set_color(Color::Yellow);
    poly.set_style(LineStyle::Solid, 4);
    win.attach(poly);

    stage.present(&mut win, "polylines")
}

/// Rectangles: recolor, move, reorder, and strip the outlines.
pub fn rectangles(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Rectangles 1");

    let rect00 = win.attach(Rectangle::new(p(150, 100), 200, 100));
    let rect11 = win.attach(Rectangle::new(p(50, 50), 200, 100));
    let rect12 = win.attach(Rectangle::new(p(50, 150), 200, 100));
    let rect21 = win.attach(Rectangle::new(p(250, 50), 200, 100));
    let rect22 = win.attach(Rectangle::new(p(250, 150), 200, 100));

    let all = [rect00, rect11, rect12, rect21, rect22];
    let colors = [Color::Yellow, Color::Blue, Color::Red, Color::Green];
    for (handle, color) in all.iter().zip(colors) {
        if let Some(rect) = win.get_mut(handle) {
            rect.set_color(color);
        }
    }
    if let Some(rect) = win.get_mut(&rect22) {
        rect.set_filled(false);
    }
    stage.present(&mut win, "rectangles-1")?;

    win.set_title("Rectangles 2");
    if let Some(rect) = win.get_mut(&rect11) {
        rect.set_color(Color::White);
        rect.translate(400, 0);
    }
    stage.present(&mut win, "rectangles-2")?;

    win.set_title("Rectangles 3");
    win.put_on_top(rect00.id());
    stage.present(&mut win, "rectangles-3")?;

    win.set_title("Rectangles 4");
    for handle in &all {
        if let Some(rect) = win.get_mut(handle) {
            rect.set_outline(false);
        }
    }
    stage.present(&mut win, "rectangles-4")
}

/// The full 256-entry palette as a 16×16 grid.
pub fn colorgrid(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "16x16 color grid");

    for i in 0..16 {
        for j in 0..16 {
            let mut cell = Rectangle::new(p(i * 20, j * 20), 20, 20);
            cell.set_color_index((i * 16 + j) as u8);
            win.attach(cell);
        }
    }

    stage.present(&mut win, "colorgrid")
}

/// A closed polyline annotated with styled text.
pub fn text(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Closed polyline with text");

    let mut closed =
        ClosedPolyline::from_points([p(300, 300), p(400, 300), p(350, 250), p(350, 350)]);
    closed.set_color(Color::Green);
    closed.set_style(LineStyle::Solid, 4);

    let mut label = Text::new(p(200, 200), " A closed polyline that isn't a polygon");
    label.set_font(Font::TimesBoldItalic, 18);
    label.set_color(Color::Blue);

    win.attach(closed);
    win.attach(label);

    stage.present(&mut win, "text")
}

/// Concentric-ish circles.
pub fn circles(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Circles");

    win.attach(Circle::new(p(100, 200), 50));
    win.attach(Circle::new(p(150, 200), 100));
    win.attach(Circle::new(p(200, 200), 150));

    stage.present(&mut win, "circles")
}

/// Ellipses sharing a center with growing axes.
pub fn ellipses(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Ellipses");

    win.attach(Ellipse::new(p(200, 200), 50, 50));
    win.attach(Ellipse::new(p(200, 200), 100, 50));
    win.attach(Ellipse::new(p(200, 200), 100, 150));

    stage.present(&mut win, "ellipses")
}
