use easel_canvas::coords::{Bounds, Point};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::shape::ShapeKind;
use crate::style::Style;

/// A circle outline defined by center and radius.
pub struct Circle {
    center: Point,
    radius: i32,
    style: Style,
}

impl Circle {
    pub fn new(center: Point, radius: i32) -> Self {
        Self { center, radius, style: Style::default() }
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    pub fn set_center(&mut self, center: Point) {
        self.center = center;
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: i32) {
        self.radius = radius;
    }
}

impl ShapeKind for Circle {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        Bounds::new(
            self.center.offset(-self.radius, -self.radius),
            self.center.offset(self.radius, self.radius),
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

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn bounds_are_the_enclosing_square() {
        let c = Circle::new(p(100, 200), 50);
        assert_eq!(c.shape_bounds(), Bounds::new(p(50, 150), p(150, 250)));
    }

    #[test]
    fn bounds_follow_radius_change() {
        let mut c = Circle::new(p(0, 0), 10);
        c.set_radius(3);
        assert_eq!(c.shape_bounds(), Bounds::new(p(-3, -3), p(3, 3)));
    }

    #[test]
    fn move_shifts_center() {
        let mut c = Circle::new(p(10, 10), 5);
        c.move_shape(-10, 2);
        assert_eq!(c.center(), p(0, 12));
    }
}
