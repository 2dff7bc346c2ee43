use anyhow::Result;

use easel_shapes::prelude::*;

use crate::stage::Stage;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn fact(n: i32) -> f64 {
    let mut r = 1.0;
    for k in 2..=n {
        r *= k as f64;
    }
    r
}

/// Exponential approximated by the first `n` Taylor terms.
fn expe(x: f64, n: i32) -> f64 {
    (0..n).map(|i| x.powi(i) / fact(i)).sum()
}

/// A constant, a line, and a parabola over shared axes; then everything
/// moves together.
pub fn functions(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Functions");

    let mut constant =
        FunctionPlot::new(|_| 1.0, (-2.0, 2.0), 0.001, (-2.0, 2.0), p(320, 240), 200)?;
    constant.add_label(-1.5, "1", 0, 0);
    constant.set_color(Color::Red);

    let mut slope =
        FunctionPlot::new(|x| 2.0 * x, (-2.0, 2.0), 0.001, (-2.0, 2.0), p(320, 240), 200)?;
    slope.add_label(-1.0, "2x", 0, 0);
    slope.set_color(Color::Green);

    let mut parabola =
        FunctionPlot::new(|x| x * x, (-2.0, 2.0), 0.001, (-2.0, 2.0), p(320, 240), 200)?;
    parabola.add_label(-0.5, "x^2", 0, 0);
    parabola.set_color(Color::Blue);

    let mut xaxis = XAxis::new((-2.0, 2.0), 1.0, p(320, 240), 200)?;
    xaxis.add_label(1.0, "1", 0, 0);
    xaxis.set_color(Color::Magenta);

    let mut yaxis = YAxis::new((-2.0, 2.0), 1.0, p(320, 240), 200)?;
    yaxis.add_label(0.0, "O", 0, 0);
    yaxis.add_label(1.0, "1", 0, 0);
    yaxis.set_color(Color::Magenta);

    let plots = [
        win.attach(constant).id(),
        win.attach(slope).id(),
        win.attach(parabola).id(),
        win.attach(xaxis).id(),
        win.attach(yaxis).id(),
    ];
    stage.present(&mut win, "functions")?;

    // Shift the whole diagram and render again.
    for id in plots {
        win.translate_widget(id, 100, -50);
    }
    stage.present(&mut win, "functions-moved")
}

/// e^x against its Taylor approximations of growing order.
pub fn exponentials(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Exponential functions");

    let mut reference =
        FunctionPlot::new(f64::exp, (-8.0, 8.0), 0.001, (-8.0, 8.0), p(320, 240), 400)?;
    reference.set_color(Color::Red);
    reference.add_label(2.0, "e^x", 0, 0);
    win.attach(reference);

    let mut xaxis = XAxis::new((-8.0, 8.0), 1.0, p(320, 240), 400)?;
    xaxis.add_label(1.0, "1", 0, 0);
    xaxis.set_color(Color::Magenta);
    win.attach(xaxis);

    let mut yaxis = YAxis::new((-8.0, 8.0), 1.0, p(320, 240), 400)?;
    yaxis.add_label(0.0, "O", 0, 0);
    yaxis.add_label(1.0, "1", 0, 0);
    yaxis.set_color(Color::Magenta);
    win.attach(yaxis);

    for n in 0..10 {
        win.set_title(format!("exponential approx n= {n}"));
        let approx = FunctionPlot::new(
            move |x| expe(x, n),
            (-8.0, 8.0),
            0.001,
            (-8.0, 8.0),
            p(320, 240),
            400,
        )?;
        let handle = win.attach(approx);
        stage.present(&mut win, &format!("exponential-{n}"))?;
        win.detach(handle);
    }
    Ok(())
}

/// Three data series plotted against labeled axes, using the axis `pos`
/// mapping to place data points.
pub fn dataplots(stage: &mut Stage) -> Result<()> {
    let mut win = Window::new(640, 480, "Data");

    let mut xaxis = XAxis::new((2000.0, 2009.0), 1.0, p(100, 430), 400)?;
    xaxis.add_label(2000.0, "2000", 0, 20);
    xaxis.add_label(2005.0, "2005", 0, 20);
    xaxis.add_label(2009.0, "2009", 0, 20);
    xaxis.set_color(Color::Black);
    let x_title = Text::new(p(120, 470), "Years");

    let mut yaxis = YAxis::new((0.0, 100.0), 10.0, p(100, 430), 400)?;
    yaxis.add_label(0.0, "0%", -40, 0);
    yaxis.add_label(50.0, "50%", -40, 0);
    yaxis.add_label(100.0, "100%", -40, 0);
    yaxis.set_color(Color::Black);
    let y_title = Text::new(p(40, 90), "Growth");

    let series: [(&[(i32, i32)], Color, &str, i32); 3] = [
        (
            &[
                (2001, 78),
                (2002, 70),
                (2003, 83),
                (2004, 75),
                (2005, 70),
                (2006, 72),
                (2007, 75),
                (2008, 77),
                (2009, 87),
            ],
            Color::Red,
            "Dataset 1",
            -30,
        ),
        (
            &[
                (2001, 41),
                (2002, 50),
                (2003, 38),
                (2004, 51),
                (2005, 43),
                (2006, 52),
                (2007, 33),
                (2008, 44),
                (2009, 61),
            ],
            Color::Yellow,
            "Dataset 2",
            -50,
        ),
        (
            &[
                (2001, 22),
                (2002, 14),
                (2003, 32),
                (2004, 21),
                (2005, 23),
                (2006, 27),
                (2007, 13),
                (2008, 20),
                (2009, 22),
            ],
            Color::Blue,
            "Dataset 3",
            -30,
        ),
    ];

    for (data, color, name, dy) in series {
        let mut poly = OpenPolyline::new();
        for (year, value) in data {
            poly.add_point(p(xaxis.pos(*year as f64), yaxis.pos(*value as f64)));
        }
        poly.set_color(color);

        let first = data[0];
        let mut title = Text::new(
            p(xaxis.pos(first.0 as f64), yaxis.pos(first.1 as f64) + dy),
            name,
        );
        title.set_color(color);

        win.attach(title);
        win.attach(poly);
    }

    win.attach(x_title);
    win.attach(y_title);
    win.attach(xaxis);
    win.attach(yaxis);

    stage.present(&mut win, "dataplots")
}
