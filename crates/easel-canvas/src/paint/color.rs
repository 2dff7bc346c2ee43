/// Native surface color: straight-alpha RGBA bytes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const BLACK: Rgba8 = Rgba8::opaque(0, 0, 0);
    pub const WHITE: Rgba8 = Rgba8::opaque(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Reverse lookup into the named palette. Only the named entries
    /// round-trip; ramp and cube colors return `None`.
    pub fn to_named(self) -> Option<Color> {
        Color::ALL.iter().copied().find(|c| c.to_rgba() == self)
    }
}

/// Abstract color enumeration offered to shape code.
///
/// Conversion to the native representation goes through [`to_rgba`]
/// (named entries) or [`index`] (the full 256-entry palette).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
    White,
    Black,
    Magenta,
    Cyan,
    DarkRed,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
}

impl Color {
    pub const ALL: [Color; 13] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::White,
        Color::Black,
        Color::Magenta,
        Color::Cyan,
        Color::DarkRed,
        Color::DarkYellow,
        Color::DarkBlue,
        Color::DarkMagenta,
        Color::DarkCyan,
    ];

    #[inline]
    pub const fn to_rgba(self) -> Rgba8 {
        match self {
            Color::Red => Rgba8::opaque(255, 0, 0),
            Color::Blue => Rgba8::opaque(0, 0, 255),
            Color::Green => Rgba8::opaque(0, 255, 0),
            Color::Yellow => Rgba8::opaque(255, 255, 0),
            Color::White => Rgba8::WHITE,
            Color::Black => Rgba8::BLACK,
            Color::Magenta => Rgba8::opaque(255, 0, 255),
            Color::Cyan => Rgba8::opaque(0, 255, 255),
            Color::DarkRed => Rgba8::opaque(128, 0, 0),
            Color::DarkYellow => Rgba8::opaque(128, 128, 0),
            Color::DarkBlue => Rgba8::opaque(0, 0, 128),
            Color::DarkMagenta => Rgba8::opaque(128, 0, 128),
            Color::DarkCyan => Rgba8::opaque(0, 128, 128),
        }
    }

    /// Converts a palette index to its native color.
    ///
    /// Palette layout:
    /// - `0..=15`: named entries (black, primaries, dark variants, grays)
    /// - `16..=31`: reserved, rendered black
    /// - `32..=55`: 24-step gray ramp from black to white
    /// - `56..=255`: 5×8×5 color cube, `index = 56 + b*40 + r*8 + g`
    pub fn index(i: u8) -> Rgba8 {
        match i {
            0 => Rgba8::BLACK,
            1 => Color::Red.to_rgba(),
            2 => Color::Green.to_rgba(),
            3 => Color::Yellow.to_rgba(),
            4 => Color::Blue.to_rgba(),
            5 => Color::Magenta.to_rgba(),
            6 => Color::Cyan.to_rgba(),
            7 => Rgba8::WHITE,
            8 => Color::DarkRed.to_rgba(),
            9 => Rgba8::opaque(0, 128, 0),
            10 => Color::DarkYellow.to_rgba(),
            11 => Color::DarkBlue.to_rgba(),
            12 => Color::DarkMagenta.to_rgba(),
            13 => Color::DarkCyan.to_rgba(),
            14 => Rgba8::opaque(192, 192, 192),
            15 => Rgba8::opaque(64, 64, 64),
            16..=31 => Rgba8::BLACK,
            32..=55 => {
                let step = (i - 32) as u32;
                let v = (step * 255 / 23) as u8;
                Rgba8::opaque(v, v, v)
            }
            56..=255 => {
                let cube = (i - 56) as u32;
                let b = cube / 40;
                let r = (cube % 40) / 8;
                let g = cube % 8;
                Rgba8::opaque(
                    (r * 255 / 4) as u8,
                    (g * 255 / 7) as u8,
                    (b * 255 / 4) as u8,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_round_trips() {
        for c in Color::ALL {
            assert_eq!(c.to_rgba().to_named(), Some(c));
        }
    }

    #[test]
    fn gray_ramp_endpoints() {
        assert_eq!(Color::index(32), Rgba8::BLACK);
        assert_eq!(Color::index(55), Rgba8::WHITE);
    }

    #[test]
    fn gray_ramp_is_monotone() {
        let mut prev = 0u8;
        for i in 32..=55u8 {
            let v = Color::index(i).r;
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn cube_corners() {
        // index = 56 + b*40 + r*8 + g
        assert_eq!(Color::index(56), Rgba8::BLACK); // r=0 g=0 b=0
        assert_eq!(Color::index(56 + 4 * 8), Rgba8::opaque(255, 0, 0)); // r=4
        assert_eq!(Color::index(56 + 7), Rgba8::opaque(0, 255, 0)); // g=7
        assert_eq!(Color::index(56 + 4 * 40), Rgba8::opaque(0, 0, 255)); // b=4
        assert_eq!(Color::index(255), Rgba8::WHITE); // r=4 g=7 b=4
    }
}
