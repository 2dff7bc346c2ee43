use std::fmt;

use crate::paint::{Font, FontSpec};
use crate::surface::TextExtents;

/// Error returned by [`FontStore::register`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Owns the font data behind the abstract [`Font`] enumeration.
///
/// Applications register TrueType/OpenType bytes per variant; surfaces query
/// metrics and glyphs through the store. A variant with no registered data
/// falls back to a deterministic box model so that metrics (and therefore
/// shape bounding boxes) never depend on what happens to be installed on the
/// host.
#[derive(Default)]
pub struct FontStore {
    slots: Vec<Option<fontdue::Font>>,
}

impl fmt::Debug for FontStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let registered: Vec<Font> = Font::ALL
            .iter()
            .copied()
            .filter(|v| self.is_registered(*v))
            .collect();
        f.debug_struct("FontStore").field("registered", &registered).finish()
    }
}

impl FontStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores font data for `font`, replacing any prior
    /// registration of the same variant.
    pub fn register(&mut self, font: Font, bytes: &[u8]) -> Result<(), FontLoadError> {
        let parsed = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let slot = font.slot();
        if self.slots.len() <= slot {
            self.slots.resize_with(Font::ALL.len(), || None);
        }
        self.slots[slot] = Some(parsed);
        Ok(())
    }

    #[inline]
    pub fn is_registered(&self, font: Font) -> bool {
        self.get(font).is_some()
    }

    pub(crate) fn get(&self, font: Font) -> Option<&fontdue::Font> {
        self.slots.get(font.slot()).and_then(|s| s.as_ref())
    }

    /// Metrics of `text` under `spec`, relative to the baseline anchor.
    ///
    /// Registered fonts report real ascent/descent and summed advances.
    /// Unregistered fonts use the fallback box model: advance 3/5 of the
    /// size per character, ascent 4/5, descent 1/5.
    pub fn extents(&self, spec: FontSpec, text: &str) -> TextExtents {
        let size = spec.size.max(1);
        match self.get(spec.font) {
            Some(font) => {
                let px = size as f32;
                let (ascent, descent) = match font.horizontal_line_metrics(px) {
                    Some(m) => (m.ascent, m.descent),
                    None => (px * 0.8, -px * 0.2),
                };
                let width: f32 = text
                    .chars()
                    .map(|ch| font.metrics(ch, px).advance_width)
                    .sum();
                let ascent = ascent.round() as i32;
                let descent = (-descent).round() as i32;
                TextExtents {
                    dx: 0,
                    dy: -ascent,
                    w: width.round() as i32,
                    h: ascent + descent,
                }
            }
            None => {
                let advance = size * 3 / 5;
                let ascent = size * 4 / 5;
                let descent = size / 5;
                TextExtents {
                    dx: 0,
                    dy: -ascent,
                    w: advance * text.chars().count() as i32,
                    h: ascent + descent,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_metrics_are_deterministic() {
        let store = FontStore::new();
        let spec = FontSpec::new(Font::Helvetica, 20);
        let a = store.extents(spec, "hello");
        let b = store.extents(spec, "hello");
        assert_eq!(a, b);
        assert_eq!(a.w, 12 * 5); // 3/5 of 20 per char
        assert_eq!(a.dy, -16); // 4/5 of 20
        assert_eq!(a.h, 20);
    }

    #[test]
    fn fallback_width_scales_with_length() {
        let store = FontStore::new();
        let spec = FontSpec::new(Font::Times, 10);
        let short = store.extents(spec, "ab");
        let long = store.extents(spec, "abcd");
        assert_eq!(long.w, short.w * 2);
    }

    #[test]
    fn empty_text_has_zero_width() {
        let store = FontStore::new();
        let e = store.extents(FontSpec::default(), "");
        assert_eq!(e.w, 0);
        assert!(e.h > 0);
    }

    #[test]
    fn register_rejects_garbage() {
        let mut store = FontStore::new();
        assert!(store.register(Font::Helvetica, b"not a font").is_err());
        assert!(!store.is_registered(Font::Helvetica));
    }
}
