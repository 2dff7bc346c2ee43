use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use easel_canvas::paint::Font;
use easel_canvas::raster::RasterSurface;
use easel_canvas::text::FontStore;
use easel_shapes::window::Window;

/// Well-known font locations tried when `EASEL_FONT` is unset.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];

/// Shared scene context: output directory, loaded fonts, frame counter.
///
/// Where the interactive original blocked on a button click, scenes call
/// [`present`](Stage::present) instead and a numbered PNG frame lands in
/// the output directory.
pub struct Stage {
    out_dir: PathBuf,
    fonts: FontStore,
    frame: u32,
}

impl Stage {
    pub fn new(out_dir: impl Into<PathBuf>) -> Result<Self> {
        let out_dir = out_dir.into();
        std::fs::create_dir_all(&out_dir)
            .with_context(|| format!("creating output dir {}", out_dir.display()))?;
        Ok(Self { out_dir, fonts: load_fonts(), frame: 0 })
    }

    /// Renders the window into a fresh raster surface and writes the next
    /// numbered frame.
    pub fn present(&mut self, win: &mut Window, slug: &str) -> Result<()> {
        let mut surface = RasterSurface::new(win.x_max(), win.y_max(), &self.fonts)?;
        win.render(&mut surface)?;
        let path = self.out_dir.join(format!("{:03}-{slug}.png", self.frame));
        self.frame += 1;
        surface.save_png(&path)?;
        log::info!("{} -> {}", win.title(), path.display());
        Ok(())
    }

    pub fn fonts(&self) -> &FontStore {
        &self.fonts
    }

    /// Path for a generated asset file, with its directory created.
    pub fn asset_path(&self, name: &str) -> Result<PathBuf> {
        let dir = self.out_dir.join("assets");
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating asset dir {}", dir.display()))?;
        Ok(dir.join(name))
    }
}

/// Registers one sans font file for every abstract font variant.
///
/// Without any usable file the store stays empty: metrics fall back to the
/// deterministic box model and glyph drawing is skipped with a warning.
fn load_fonts() -> FontStore {
    let mut store = FontStore::new();

    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Ok(path) = std::env::var("EASEL_FONT") {
        candidates.push(PathBuf::from(path));
    }
    candidates.extend(FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in &candidates {
        if !Path::new(path).exists() {
            continue;
        }
        match std::fs::read(path) {
            Ok(bytes) => {
                let mut any = false;
                for font in Font::ALL {
                    match store.register(font, &bytes) {
                        Ok(()) => any = true,
                        Err(e) => log::debug!("{}: {e}", path.display()),
                    }
                }
                if any {
                    log::info!("using font file {}", path.display());
                    return store;
                }
            }
            Err(e) => log::debug!("{}: {e}", path.display()),
        }
    }

    log::warn!("no usable font file found; text draws with fallback metrics only");
    store
}
