use easel_canvas::paint::{FontSpec, LineStyle, PaintState, Rgba8};

/// Style state composed into every shape: color, line style and width, font,
/// and visibility.
///
/// Colors are stored in the native representation; conversion from the
/// abstract enumerations happens at the setter seam, mirroring the surface's
/// own paint model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Style {
    color: Rgba8,
    line_style: LineStyle,
    line_width: i32,
    font: FontSpec,
    visible: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Rgba8::BLACK,
            line_style: LineStyle::Solid,
            line_width: 0,
            font: FontSpec::default(),
            visible: true,
        }
    }
}

impl Style {
    /// The paint state a surface should carry while this shape draws.
    #[inline]
    pub fn paint(&self) -> PaintState {
        PaintState { color: self.color, style: self.line_style, width: self.line_width }
    }

    #[inline]
    pub fn color(&self) -> Rgba8 {
        self.color
    }

    #[inline]
    pub fn set_color(&mut self, color: Rgba8) {
        self.color = color;
    }

    #[inline]
    pub fn line(&self) -> (LineStyle, i32) {
        (self.line_style, self.line_width)
    }

    #[inline]
    pub fn set_line(&mut self, style: LineStyle, width: i32) {
        self.line_style = style;
        self.line_width = width;
    }

    #[inline]
    pub fn font(&self) -> FontSpec {
        self.font
    }

    #[inline]
    pub fn set_font(&mut self, font: FontSpec) {
        self.font = font;
    }

    #[inline]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[inline]
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
