/// Abstract line style enumeration.
///
/// Converted to a native dash array by [`dash_pattern`](LineStyle::dash_pattern);
/// raster backends feed the array to their stroker unchanged.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// `───────`
    #[default]
    Solid,
    /// `─ ─ ─ ─`
    Dash,
    /// `∙∙∙∙∙∙∙`
    Dot,
    /// `─ ∙ ─ ∙`
    DashDot,
    /// `─ ∙ ∙ ─`
    DashDotDot,
}

impl LineStyle {
    /// Native on/off dash array for the given line width, or `None` for a
    /// solid stroke. Dash lengths scale with the width so patterns stay
    /// legible at every thickness.
    pub fn dash_pattern(self, width: i32) -> Option<Vec<f32>> {
        let u = width.max(1) as f32;
        match self {
            LineStyle::Solid => None,
            LineStyle::Dash => Some(vec![3.0 * u, 3.0 * u]),
            LineStyle::Dot => Some(vec![u, 2.0 * u]),
            LineStyle::DashDot => Some(vec![3.0 * u, 2.0 * u, u, 2.0 * u]),
            LineStyle::DashDotDot => Some(vec![3.0 * u, 2.0 * u, u, 2.0 * u, u, 2.0 * u]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_has_no_dash_array() {
        assert_eq!(LineStyle::Solid.dash_pattern(4), None);
    }

    #[test]
    fn patterns_scale_with_width() {
        let narrow = LineStyle::Dash.dash_pattern(1).unwrap();
        let wide = LineStyle::Dash.dash_pattern(4).unwrap();
        assert_eq!(narrow, vec![3.0, 3.0]);
        assert_eq!(wide, vec![12.0, 12.0]);
    }

    #[test]
    fn hairline_width_behaves_like_one() {
        assert_eq!(LineStyle::Dot.dash_pattern(0), LineStyle::Dot.dash_pattern(1));
    }

    #[test]
    fn dash_arrays_have_even_length() {
        for style in [
            LineStyle::Dash,
            LineStyle::Dot,
            LineStyle::DashDot,
            LineStyle::DashDotDot,
        ] {
            assert_eq!(style.dash_pattern(2).unwrap().len() % 2, 0);
        }
    }
}
