/// Font family groups recognized by the font store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
    Symbol,
    Screen,
    Dingbats,
}

/// Abstract font enumeration offered to shape code.
///
/// Each variant names a family plus weight/slant; the font store maps a
/// variant to actual font data registered by the application.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Font {
    #[default]
    Helvetica,
    HelveticaBold,
    HelveticaItalic,
    HelveticaBoldItalic,
    Courier,
    CourierBold,
    CourierItalic,
    CourierBoldItalic,
    Times,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Symbol,
    Screen,
    ScreenBold,
    ZapfDingbats,
}

impl Font {
    pub const ALL: [Font; 16] = [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::HelveticaItalic,
        Font::HelveticaBoldItalic,
        Font::Courier,
        Font::CourierBold,
        Font::CourierItalic,
        Font::CourierBoldItalic,
        Font::Times,
        Font::TimesBold,
        Font::TimesItalic,
        Font::TimesBoldItalic,
        Font::Symbol,
        Font::Screen,
        Font::ScreenBold,
        Font::ZapfDingbats,
    ];

    pub const fn family(self) -> FontFamily {
        match self {
            Font::Helvetica
            | Font::HelveticaBold
            | Font::HelveticaItalic
            | Font::HelveticaBoldItalic => FontFamily::Sans,
            Font::Times | Font::TimesBold | Font::TimesItalic | Font::TimesBoldItalic => {
                FontFamily::Serif
            }
            Font::Courier | Font::CourierBold | Font::CourierItalic | Font::CourierBoldItalic => {
                FontFamily::Mono
            }
            Font::Symbol => FontFamily::Symbol,
            Font::Screen | Font::ScreenBold => FontFamily::Screen,
            Font::ZapfDingbats => FontFamily::Dingbats,
        }
    }

    pub const fn is_bold(self) -> bool {
        matches!(
            self,
            Font::HelveticaBold
                | Font::HelveticaBoldItalic
                | Font::CourierBold
                | Font::CourierBoldItalic
                | Font::TimesBold
                | Font::TimesBoldItalic
                | Font::ScreenBold
        )
    }

    pub const fn is_italic(self) -> bool {
        matches!(
            self,
            Font::HelveticaItalic
                | Font::HelveticaBoldItalic
                | Font::CourierItalic
                | Font::CourierBoldItalic
                | Font::TimesItalic
                | Font::TimesBoldItalic
        )
    }

    /// Position in [`Font::ALL`]; used by the font store as a slot index.
    pub fn slot(self) -> usize {
        Font::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }
}

/// A font selection: variant plus size in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FontSpec {
    pub font: Font,
    pub size: i32,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self { font: Font::Helvetica, size: 14 }
    }
}

impl FontSpec {
    #[inline]
    pub const fn new(font: Font, size: i32) -> Self {
        Self { font, size }
    }
}
