use easel_canvas::coords::Bounds;
use easel_canvas::paint::{Color, Font, FontSpec, LineStyle, Rgba8};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::style::Style;

/// The shape side of the widget contract.
///
/// A shape provides geometry hooks (`draw_shape`, `move_shape`,
/// `shape_bounds`) and a [`Style`]; the `impl_shape_widget!` macro wraps
/// them into a [`Widget`](crate::widget::Widget) impl carrying the draw
/// template: save the surface paint, install the shape's own, draw if
/// visible, restore.
///
/// Composite shapes (axes) override the `apply_*` hooks to forward style
/// changes to their parts.
pub trait ShapeKind: 'static {
    fn style(&self) -> &Style;
    fn style_mut(&mut self) -> &mut Style;

    fn shape_bounds(&self) -> Bounds;

    /// Emits this shape's primitives. The surface paint is already set.
    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError>;

    fn move_shape(&mut self, dx: i32, dy: i32);

    // ── style hooks ───────────────────────────────────────────────────────

    fn apply_color(&mut self, color: Rgba8) {
        self.style_mut().set_color(color);
    }

    fn apply_line(&mut self, style: LineStyle, width: i32) {
        self.style_mut().set_line(style, width);
    }

    fn apply_font(&mut self, font: FontSpec) {
        self.style_mut().set_font(font);
    }

    // ── convenience API in abstract terms ─────────────────────────────────

    fn set_color(&mut self, color: Color) {
        self.apply_color(color.to_rgba());
    }

    /// Sets the color from the 256-entry palette.
    fn set_color_index(&mut self, index: u8) {
        self.apply_color(Color::index(index));
    }

    fn color(&self) -> Rgba8 {
        self.style().color()
    }

    fn set_style(&mut self, style: LineStyle, width: i32) {
        self.apply_line(style, width);
    }

    fn line_style(&self) -> (LineStyle, i32) {
        self.style().line()
    }

    fn set_font(&mut self, font: Font, size: i32) {
        self.apply_font(FontSpec::new(font, size));
    }
}

/// Implements [`Widget`](crate::widget::Widget) for shape types in terms of
/// their [`ShapeKind`] hooks.
///
/// A blanket impl cannot coexist with the hand-written `Widget` impls of
/// the controls under coherence rules, so the template is stamped per type
/// instead.
macro_rules! impl_shape_widget {
    ($($ty:ty),+ $(,)?) => {$(
        impl crate::widget::Widget for $ty {
            fn bounds(&self) -> ::easel_canvas::coords::Bounds {
                crate::shape::ShapeKind::shape_bounds(self)
            }

            fn visible(&self) -> bool {
                crate::shape::ShapeKind::style(self).visible()
            }

            fn set_visible(&mut self, visible: bool) {
                crate::shape::ShapeKind::style_mut(self).set_visible(visible);
            }

            fn draw(
                &mut self,
                surface: &mut dyn ::easel_canvas::surface::Surface,
            ) -> Result<(), crate::error::DrawError> {
                let saved = surface.paint();
                surface.set_paint(crate::shape::ShapeKind::style(self).paint());
                let result = if crate::shape::ShapeKind::style(self).visible() {
                    crate::shape::ShapeKind::draw_shape(self, surface)
                } else {
                    Ok(())
                };
                surface.set_paint(saved);
                result
            }

            fn translate(&mut self, dx: i32, dy: i32) {
                crate::shape::ShapeKind::move_shape(self, dx, dy);
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
                self
            }
        }
    )+};
}

pub(crate) use impl_shape_widget;
