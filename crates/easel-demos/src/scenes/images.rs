use anyhow::Result;

use easel_shapes::prelude::*;

use crate::stage::Stage;

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

/// Image shapes: scaling to the window and masking a sub-region.
///
/// The repository ships no image assets, so the scene first renders a small
/// tile with the raster surface and saves it as PNG; loading it back
/// through [`Image::open`] exercises the whole decode path.
pub fn images(stage: &mut Stage) -> Result<()> {
    let tile_path = stage.asset_path("tile.png")?;
    render_tile(stage, &tile_path)?;

    let mut win = Window::new(640, 480, "Images");

    let mut backdrop = Image::open(p(0, 0), &tile_path)?;
    backdrop.scale(win.x_max(), win.y_max());

    let mut detail = Image::open(p(0, 0), &tile_path)?;
    detail.set_mask(p(32, 32), 64, 64);
    detail.move_to(p(350, 350));

    win.attach(backdrop);
    win.attach(detail);

    stage.present(&mut win, "images")
}

/// Draws a colorful tile and writes it to `path`.
fn render_tile(stage: &Stage, path: &std::path::Path) -> Result<()> {
    let mut win = Window::new(128, 128, "tile");
    for i in 0..8 {
        for j in 0..8 {
            let mut cell = Rectangle::new(p(i * 16, j * 16), 16, 16);
            cell.set_color_index((56 + (i * 8 + j) * 3) as u8);
            cell.set_outline(false);
            win.attach(cell);
        }
    }
    let mut circle = Circle::new(p(64, 64), 40);
    circle.set_style(LineStyle::Solid, 3);
    win.attach(circle);

    let mut surface = RasterSurface::new(128, 128, stage.fonts())?;
    win.render(&mut surface)?;
    surface.save_png(path)?;
    Ok(())
}
