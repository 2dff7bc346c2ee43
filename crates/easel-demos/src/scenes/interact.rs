use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};

use easel_shapes::prelude::*;

use crate::stage::Stage;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn click(pos: Point) -> Event {
    Event::Click { pos }
}

fn typed(text: &str) -> Event {
    Event::TextInput { text: text.to_owned() }
}

/// A button wired to a closure, pressed synthetically.
pub fn buttons(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Click me button");

    let presses = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&presses);
    win.attach(
        Button::new(p(100, 100), 100, 50, "click me")
            .on_press(move || counter.set(counter.get() + 1)),
    );

    stage.present(&mut win, "buttons")?;

    win.dispatch(&click(p(150, 125)));
    log::info!("button pressed {} time(s)", presses.get());
    Ok(())
}

/// Input box echoed into an output box, driven by synthetic typing.
pub fn inoutbox(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Input & output boxes");

    let in_box = win.attach(InBox::new(p(100, 100), 100, 50, "input:"));
    let out_box = win.attach(OutBox::new(p(200, 300), 100, 50, "output:"));

    let script = [click(p(150, 125)), typed("hel"), typed("lo")];
    for event in script {
        win.dispatch(&event);
        let value = win
            .get(&in_box)
            .context("input box missing")?
            .value()
            .to_owned();
        win.get_mut(&out_box)
            .context("output box missing")?
            .set_value(value);
    }

    stage.present(&mut win, "inoutbox")
}

/// A vertical menu of color buttons driving a rectangle's fill.
pub fn menu(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Menu of buttons");

    let mut rect = Rectangle::new(p(400, 200), 200, 100);
    rect.set_color(Color::White);
    let rect = win.attach(rect);

    let picked: Rc<Cell<Option<Color>>> = Rc::new(Cell::new(None));
    let mut colors = Menu::new(p(100, 100), MenuLayout::Vertical);
    for (label, color) in [
        ("Blue", Color::Blue),
        ("Red", Color::Red),
        ("Green", Color::Green),
    ] {
        let choice = Rc::clone(&picked);
        colors.add_button(
            Button::new(p(0, 0), 100, 50, label).on_press(move || choice.set(Some(color))),
        );
    }
    win.attach(colors);

    stage.present(&mut win, "menu")?;

    // Press "Red" (second entry: 50px tall buttons with a 5px gap).
    win.dispatch(&click(p(150, 180)));
    if let Some(color) = picked.take() {
        win.get_mut(&rect).context("rectangle missing")?.set_color(color);
    }
    stage.present(&mut win, "menu-picked")
}

/// The little lines-window application: input boxes feed new points into a
/// polyline, a menu recolors it.
pub fn lines_window(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "lines");
    let right = win.x_max() - 250;

    let lines = win.attach(OpenPolyline::new());
    let next_x = win.attach(InBox::new(p(100, 0), 50, 20, "next x:"));
    let next_y = win.attach(InBox::new(p(250, 0), 50, 20, "next y:"));
    let xy_out = win.attach(OutBox::new(p(100, 50), 100, 20, "current (x,y):"));

    let add_button = win.attach(Button::new(p(right, 0), 100, 50, "Add point"));
    let menu_button = win.attach(Button::new(p(right, 100), 100, 50, "Menu color"));

    let picked: Rc<Cell<Option<Color>>> = Rc::new(Cell::new(None));
    let mut color_menu = Menu::new(p(right, 100), MenuLayout::Vertical);
    for (label, color) in [
        ("Red", Color::Red),
        ("Blue", Color::Blue),
        ("Green", Color::Green),
    ] {
        let choice = Rc::clone(&picked);
        color_menu.add_button(
            Button::new(p(0, 0), 100, 50, label).on_press(move || choice.set(Some(color))),
        );
    }
    color_menu.hide();
    let color_menu = win.attach(color_menu);

    // Feed the interaction script: two points, then a recolor via the menu.
    let script = [
        (p(125, 10), "320", p(275, 10), "240"),
        (p(125, 10), "150", p(275, 10), "100"),
    ];
    for (x_pos, x_text, y_pos, y_text) in script {
        win.dispatch(&click(x_pos));
        win.dispatch(&typed(x_text));
        win.dispatch(&click(y_pos));
        win.dispatch(&typed(y_text));

        let consumed = win.dispatch(&click(p(right + 50, 25)));
        if consumed == Some(add_button.id()) {
            add_point(&mut win, &lines, &next_x, &next_y, &xy_out)?;
        }
        for handle in [&next_x, &next_y] {
            win.get_mut(handle).context("input box missing")?.clear();
        }
    }
    stage.present(&mut win, "lines-window")?;

    // Open the color menu and pick blue.
    let consumed = win.dispatch(&click(p(right + 50, 125)));
    if consumed == Some(menu_button.id()) {
        win.get_mut(&menu_button).context("menu button missing")?.hide();
        win.get_mut(&color_menu).context("color menu missing")?.show();
    }
    win.dispatch(&click(p(right + 50, 160)));
    if let Some(color) = picked.take() {
        win.get_mut(&lines).context("polyline missing")?.set_color(color);
        win.get_mut(&color_menu).context("color menu missing")?.hide();
        win.get_mut(&menu_button).context("menu button missing")?.show();
    }
    stage.present(&mut win, "lines-window-recolored")
}

fn add_point(
    win: &mut Window,
    lines: &Handle<OpenPolyline>,
    next_x: &Handle<InBox>,
    next_y: &Handle<InBox>,
    xy_out: &Handle<OutBox>,
) -> Result<()> {
    let x = win
        .get(next_x)
        .context("input box missing")?
        .value_i32()
        .context("next x is not a number")?;
    let y = win
        .get(next_y)
        .context("input box missing")?
        .value_i32()
        .context("next y is not a number")?;
    win.get_mut(lines).context("polyline missing")?.add_point(p(x, y));
    win.get_mut(xy_out)
        .context("output box missing")?
        .set_value(format!("({x},{y})"));
    Ok(())
}
