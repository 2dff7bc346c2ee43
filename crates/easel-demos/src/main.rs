//! Demo runner: builds every scene and writes the frames as PNG files.
//!
//! Usage: `easel-demos [output-dir]` (default `frames/`).
//!
//! Exit codes distinguish failures from this library (1) from anything
//! unexpected (2).

mod scenes;
mod stage;

use anyhow::Result;

use easel_canvas::bitmap::BitmapError;
use easel_canvas::raster::RasterError;
use easel_canvas::text::FontLoadError;
use easel_shapes::error::{DrawError, RangeError};

use stage::Stage;

fn main() {
    easel_canvas::logging::init();
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        let known = err.is::<DrawError>()
            || err.is::<RangeError>()
            || err.is::<BitmapError>()
            || err.is::<RasterError>()
            || err.is::<FontLoadError>();
        std::process::exit(if known { 1 } else { 2 });
    }
}

fn run() -> Result<()> {
    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "frames".to_owned());
    let mut stage = Stage::new(out_dir)?;

    scenes::lines(&mut stage)?;
    scenes::grid(&mut stage)?;
    scenes::polylines(&mut stage)?;
    scenes::rectangles(&mut stage)?;
    scenes::colorgrid(&mut stage)?;
    scenes::text(&mut stage)?;
    scenes::circles(&mut stage)?;
    scenes::ellipses(&mut stage)?;
    scenes::marked_polylines(&mut stage)?;
    scenes::marks(&mut stage)?;
    scenes::circles_with_marks(&mut stage)?;
    scenes::images(&mut stage)?;
    scenes::functions(&mut stage)?;
    scenes::exponentials(&mut stage)?;
    scenes::dataplots(&mut stage)?;
    scenes::buttons(&mut stage)?;
    scenes::inoutbox(&mut stage)?;
    scenes::menu(&mut stage)?;
    scenes::lines_window(&mut stage)?;

    log::info!("all scenes rendered");
    Ok(())
}
