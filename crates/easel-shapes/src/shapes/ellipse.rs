use easel_canvas::coords::{Bounds, Point};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::shape::ShapeKind;
use crate::style::Style;

/// An axis-aligned ellipse outline defined by center and the two semi-axes.
pub struct Ellipse {
    center: Point,
    radius_x: i32,
    radius_y: i32,
    style: Style,
}

impl Ellipse {
    pub fn new(center: Point, radius_x: i32, radius_y: i32) -> Self {
        Self { center, radius_x, radius_y, style: Style::default() }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    #[inline]
    pub fn radius_x(&self) -> i32 {
        self.radius_x
    }

    pub fn set_radius_x(&mut self, radius: i32) {
        self.radius_x = radius;
    }

    #[inline]
    pub fn radius_y(&self) -> i32 {
        self.radius_y
    }

    pub fn set_radius_y(&mut self, radius: i32) {
        self.radius_y = radius;
    }
}

impl ShapeKind for Ellipse {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        Bounds::new(
            self.center.offset(-self.radius_x, -self.radius_y),
            self.center.offset(self.radius_x, self.radius_y),
        )
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        let b = self.shape_bounds();
        surface.ellipse(b.tl, b.width(), b.height());
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        self.center = self.center.offset(dx, dy);
    }
}
