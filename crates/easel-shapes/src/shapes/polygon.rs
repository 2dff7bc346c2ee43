use easel_canvas::coords::{Bounds, Point};
use easel_canvas::surface::Surface;

use crate::error::DrawError;
use crate::seq::PointSeq;
use crate::shape::ShapeKind;
use crate::style::Style;

use super::polyline::draw_closed;

/// A closed polyline that refuses to draw if any two non-adjacent edges
/// cross.
///
/// The validity check is the brute-force O(n²) pairwise test over the edge
/// list; each pair runs the division-free parametric intersection test in
/// wide integer arithmetic.
#[derive(Default)]
pub struct Polygon {
    seq: PointSeq,
    style: Style,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Self {
        Self { seq: PointSeq::from_points(points), style: Style::default() }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.seq.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    #[inline]
    pub fn point(&self, index: usize) -> Option<Point> {
        self.seq.get(index)
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        self.seq.points()
    }

    pub fn add_point(&mut self, p: Point) {
        self.seq.push(p);
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set_point(&mut self, index: usize, p: Point) {
        self.seq.set(index, p);
    }

    /// # Panics
    /// Panics if `index` is out of range.
    pub fn remove_point(&mut self, index: usize) -> Point {
        self.seq.remove(index)
    }

    /// True if any pair of non-adjacent edges intersects.
    pub fn is_self_intersecting(&self) -> bool {
        let points = self.seq.points();
        let n = points.len();
        if n < 4 {
            // With three edges or fewer every pair is adjacent.
            return false;
        }
        let edge = |i: usize| (points[i], points[(i + 1) % n]);
        for i in 0..n {
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            for j in (i + 1)..n {
                if j == prev || j == next {
                    continue;
                }
                let (a, b) = edge(i);
                let (c, d) = edge(j);
                if segments_intersect(a, b, c, d) {
                    return true;
                }
            }
        }
        false
    }
}

impl ShapeKind for Polygon {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        self.seq.bounds()
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        if self.is_self_intersecting() {
            return Err(DrawError::SelfIntersection);
        }
        draw_closed(&self.seq, surface);
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        self.seq.translate(dx, dy);
    }
}

/// Bounded segment-segment intersection test, division-free.
///
/// Solves the two-line system for the scaled intersection point
/// `(n/m, o/m)` where `m` is the direction determinant, then checks that
/// the scaled coordinates fall inside both segments' extents. Comparing
/// against interval endpoints in either order makes the test independent of
/// `m`'s sign and of segment orientation. Parallel segments (`m == 0`)
/// report no intersection. Endpoint contact counts as intersecting.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    let m1 = (b.y - a.y) as i128;
    let m2 = (b.x - a.x) as i128;
    let m3 = (d.y - c.y) as i128;
    let m4 = (d.x - c.x) as i128;
    let m5 = (c.y - a.y) as i128;
    let m6 = (c.x - a.x) as i128;

    let m = m1 * m4 - m2 * m3;
    if m == 0 {
        return false;
    }
    // Scaled intersection point: xp = n / m, yp = o / m.
    let n = m1 * m4 * a.x as i128 + m2 * (m4 * m5 - m3 * c.x as i128);
    let o = m1 * (m4 * m5 - m3 * m6) + m * a.y as i128;

    within(n, m * a.x as i128, m * b.x as i128)
        && within(n, m * c.x as i128, m * d.x as i128)
        && within(o, m * a.y as i128, m * b.y as i128)
        && within(o, m * c.y as i128, m * d.y as i128)
}

/// True if `v` lies between `e0` and `e1` in either order, inclusive.
#[inline]
fn within(v: i128, e0: i128, e1: i128) -> bool {
    let (lo, hi) = if e0 <= e1 { (e0, e1) } else { (e1, e0) };
    lo <= v && v <= hi
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::Widget;
    use easel_canvas::surface::RecordingSurface;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    // ── segments_intersect ────────────────────────────────────────────────

    #[test]
    fn crossing_segments_intersect() {
        assert!(segments_intersect(p(0, 0), p(10, 10), p(0, 10), p(10, 0)));
    }

    #[test]
    fn crossing_is_orientation_independent() {
        // All eight endpoint orderings of an X cross must agree.
        let ends = [
            (p(0, 0), p(10, 10)),
            (p(10, 10), p(0, 0)),
        ];
        let others = [
            (p(0, 10), p(10, 0)),
            (p(10, 0), p(0, 10)),
        ];
        for (a, b) in ends {
            for (c, d) in others {
                assert!(segments_intersect(a, b, c, d));
                assert!(segments_intersect(c, d, a, b));
            }
        }
    }

    #[test]
    fn disjoint_segments_do_not_intersect() {
        assert!(!segments_intersect(p(0, 0), p(10, 0), p(0, 5), p(10, 5)));
        assert!(!segments_intersect(p(0, 0), p(4, 4), p(6, 6), p(10, 10)));
    }

    #[test]
    fn meeting_on_extension_does_not_intersect() {
        // The infinite lines cross at (5, 5) but the second segment stops
        // short of it.
        assert!(!segments_intersect(p(0, 0), p(10, 10), p(0, 10), p(4, 6)));
    }

    #[test]
    fn endpoint_touch_intersects() {
        assert!(segments_intersect(p(0, 0), p(10, 10), p(5, 5), p(5, -5)));
    }

    #[test]
    fn symmetry() {
        let cases = [
            (p(0, 0), p(10, 10), p(0, 10), p(10, 0)),
            (p(0, 0), p(10, 0), p(0, 5), p(10, 5)),
            (p(-3, 2), p(7, 2), p(1, -4), p(1, 8)),
        ];
        for (a, b, c, d) in cases {
            assert_eq!(
                segments_intersect(a, b, c, d),
                segments_intersect(c, d, a, b),
            );
        }
    }

    // ── polygon validity ──────────────────────────────────────────────────

    #[test]
    fn convex_polygon_is_simple() {
        let square = Polygon::from_points([p(0, 0), p(10, 0), p(10, 10), p(0, 10)]);
        assert!(!square.is_self_intersecting());
    }

    #[test]
    fn concave_polygon_is_simple() {
        let l_shape = Polygon::from_points([
            p(0, 0),
            p(10, 0),
            p(10, 4),
            p(4, 4),
            p(4, 10),
            p(0, 10),
        ]);
        assert!(!l_shape.is_self_intersecting());
    }

    #[test]
    fn bowtie_is_self_intersecting() {
        let bowtie = Polygon::from_points([p(0, 0), p(10, 10), p(10, 0), p(0, 10)]);
        assert!(bowtie.is_self_intersecting());
    }

    #[test]
    fn bowtie_reversed_winding_is_self_intersecting() {
        let bowtie = Polygon::from_points([p(0, 10), p(10, 0), p(10, 10), p(0, 0)]);
        assert!(bowtie.is_self_intersecting());
    }

    #[test]
    fn triangle_never_self_intersects() {
        let tri = Polygon::from_points([p(0, 0), p(10, 0), p(5, 8)]);
        assert!(!tri.is_self_intersecting());
    }

    #[test]
    fn drawing_a_bowtie_fails() {
        let mut bowtie = Polygon::from_points([p(0, 0), p(10, 10), p(10, 0), p(0, 10)]);
        let mut surface = RecordingSurface::new(100, 100);
        assert_eq!(bowtie.draw(&mut surface), Err(DrawError::SelfIntersection));
        assert!(surface.cmds().is_empty());
    }

    #[test]
    fn drawing_a_square_closes_the_outline() {
        let mut square = Polygon::from_points([p(0, 0), p(10, 0), p(10, 10), p(0, 10)]);
        let mut surface = RecordingSurface::new(100, 100);
        square.draw(&mut surface).unwrap();
        assert_eq!(surface.cmds().len(), 4);
    }

    #[test]
    fn mutating_into_a_bowtie_is_caught_at_draw() {
        let mut poly = Polygon::from_points([p(0, 0), p(10, 0), p(10, 10), p(0, 10)]);
        assert!(!poly.is_self_intersecting());
        poly.set_point(1, p(10, 10));
        poly.set_point(2, p(10, 0));
        assert!(poly.is_self_intersecting());
    }
}
