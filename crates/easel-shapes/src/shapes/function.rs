use easel_canvas::coords::{Bounds, Point};
use easel_canvas::surface::Surface;

use crate::error::RangeError;
use crate::shape::ShapeKind;
use crate::style::Style;
use crate::widget::Widget;

use super::text::Text;
use crate::error::DrawError;

/// A plotted `f64 -> f64` function.
///
/// The domain `[x_min, x_max)` is sampled at a fixed step; samples map to
/// pixels through `origin ± round(value * scale)` with
/// `scale = len / (max - min)` per axis. Only segments whose endpoints both
/// lie strictly inside the y-range are drawn, so poles and runaway growth
/// clip instead of scribbling across the window.
pub struct FunctionPlot {
    f: Box<dyn Fn(f64) -> f64>,
    xs: Vec<f64>,
    ys: Vec<f64>,
    points: Vec<Point>,
    y_min: f64,
    y_max: f64,
    origin: Point,
    sx: f64,
    sy: f64,
    labels: Vec<Text>,
    bounds: Bounds,
    style: Style,
}

impl FunctionPlot {
    /// Plots `f` over `x_range` with a square aspect (y span equals x span).
    pub fn new(
        f: impl Fn(f64) -> f64 + 'static,
        x_range: (f64, f64),
        step: f64,
        y_range: (f64, f64),
        origin: Point,
        len_x: i32,
    ) -> Result<Self, RangeError> {
        Self::with_aspect(f, x_range, step, y_range, origin, len_x, 1.0)
    }

    /// Like [`new`](FunctionPlot::new) with an explicit y/x pixel-length
    /// ratio.
    pub fn with_aspect(
        f: impl Fn(f64) -> f64 + 'static,
        x_range: (f64, f64),
        step: f64,
        y_range: (f64, f64),
        origin: Point,
        len_x: i32,
        ratio: f64,
    ) -> Result<Self, RangeError> {
        let (x_min, x_max) = x_range;
        let (y_min, y_max) = y_range;
        if x_max < x_min {
            return Err(RangeError::Inverted { min: x_min, max: x_max });
        }
        if y_max < y_min {
            return Err(RangeError::Inverted { min: y_min, max: y_max });
        }
        if step <= 0.0 {
            return Err(RangeError::BadStep { step });
        }

        let f: Box<dyn Fn(f64) -> f64> = Box::new(f);
        let len_y = (len_x as f64 * ratio).round() as i32;
        let sx = len_x as f64 / (x_max - x_min);
        let sy = len_y as f64 / (y_max - y_min);

        // Sample from x_min until x_max is reached; the last sample may
        // overshoot by less than one step.
        let mut xs = vec![x_min];
        while *xs.last().unwrap_or(&x_max) < x_max {
            let next = xs.last().copied().unwrap_or(x_max) + step;
            xs.push(next);
        }
        let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();

        let points: Vec<Point> = xs
            .iter()
            .zip(&ys)
            .map(|(&x, &y)| {
                Point::new(
                    origin.x + (x * sx).round() as i32,
                    origin.y - (y * sy).round() as i32,
                )
            })
            .collect();

        let bounds = Bounds::new(
            Point::new(
                origin.x + (x_min * sx).round() as i32,
                origin.y - (y_max * sy).round() as i32,
            ),
            Point::new(
                origin.x + (x_max * sx).round() as i32,
                origin.y - (y_min * sy).round() as i32,
            ),
        );

        Ok(Self {
            f,
            xs,
            ys,
            points,
            y_min,
            y_max,
            origin,
            sx,
            sy,
            labels: Vec::new(),
            bounds,
            style: Style::default(),
        })
    }

    /// Places `text` next to the curve at domain position `x`, nudged by
    /// `(dx, dy)` pixels.
    pub fn add_label(&mut self, x: f64, text: impl Into<String>, dx: i32, dy: i32) {
        let anchor = Point::new(
            self.origin.x + (x * self.sx).round() as i32 + dx,
            self.origin.y - ((self.f)(x) * self.sy).round() as i32 + dy,
        );
        let label = Text::new(anchor, text);
        self.bounds = self.bounds.union(label.bounds());
        self.labels.push(label);
    }

    #[inline]
    pub fn sample_count(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn sample(&self, index: usize) -> Option<(f64, f64)> {
        Some((*self.xs.get(index)?, *self.ys.get(index)?))
    }

    #[inline]
    pub fn pixel(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }
}

impl ShapeKind for FunctionPlot {
    fn style(&self) -> &Style {
        &self.style
    }

    fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    fn shape_bounds(&self) -> Bounds {
        self.bounds
    }

    fn draw_shape(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        for n in 0..self.points.len().saturating_sub(1) {
            let inside = |y: f64| y > self.y_min && y < self.y_max;
            if inside(self.ys[n]) && inside(self.ys[n + 1]) {
                surface.line(self.points[n], self.points[n + 1]);
            }
        }
        for label in &mut self.labels {
            label.draw(surface)?;
        }
        Ok(())
    }

    fn move_shape(&mut self, dx: i32, dy: i32) {
        for p in &mut self.points {
            *p = p.offset(dx, dy);
        }
        for label in &mut self.labels {
            label.translate(dx, dy);
        }
        self.origin = self.origin.offset(dx, dy);
        self.bounds.translate(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_canvas::surface::{DrawCmd, RecordingSurface};

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = FunctionPlot::new(|x| x, (2.0, -2.0), 0.1, (-1.0, 1.0), p(0, 0), 100);
        assert!(matches!(err, Err(RangeError::Inverted { .. })));
    }

    #[test]
    fn zero_step_is_rejected() {
        let err = FunctionPlot::new(|x| x, (-1.0, 1.0), 0.0, (-1.0, 1.0), p(0, 0), 100);
        assert_eq!(err.err(), Some(RangeError::BadStep { step: 0.0 }));
    }

    #[test]
    fn identity_maps_domain_edges_to_pixel_span() {
        // scale = 100 / 4 = 25 pixels per unit.
        let plot =
            FunctionPlot::new(|x| x, (-2.0, 2.0), 0.5, (-2.0, 2.0), p(320, 240), 100).unwrap();
        assert_eq!(plot.pixel(0), Some(p(320 - 50, 240 + 50)));
        let last = plot.sample_count() - 1;
        assert_eq!(plot.pixel(last), Some(p(320 + 50, 240 - 50)));
    }

    #[test]
    fn bounds_span_the_configured_ranges() {
        let plot =
            FunctionPlot::new(|x| x * x, (-2.0, 2.0), 0.1, (-1.0, 3.0), p(100, 100), 80).unwrap();
        // sx = 20, sy = 20.
        assert_eq!(plot.shape_bounds(), Bounds::new(p(60, 40), p(140, 120)));
    }

    #[test]
    fn out_of_range_samples_are_clipped() {
        // x² over [-2, 2] with y capped at 1: the steep flanks must not draw.
        let mut plot =
            FunctionPlot::new(|x| x * x, (-2.0, 2.0), 0.5, (-1.0, 1.0), p(0, 0), 100).unwrap();
        let mut surface = RecordingSurface::new(400, 400);
        plot.draw(&mut surface).unwrap();

        let lines = surface
            .cmds()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
            .count();
        // Samples: -2 -1.5 -1 -0.5 0 0.5 1 1.5 2 → y = 4 2.25 1 .25 0 .25 1 2.25 4
        // Strictly-inside pairs: (-0.5, 0) and (0, 0.5) only.
        assert_eq!(lines, 2);
    }

    #[test]
    fn labels_move_with_the_plot() {
        let mut plot =
            FunctionPlot::new(|_| 1.0, (-2.0, 2.0), 0.5, (-2.0, 2.0), p(320, 240), 200).unwrap();
        plot.add_label(-1.5, "one", 0, 0);
        let before = plot.labels[0].anchor().unwrap();
        plot.move_shape(100, -50);
        assert_eq!(plot.labels[0].anchor().unwrap(), before.offset(100, -50));
    }

    #[test]
    fn sampling_covers_the_whole_domain() {
        let plot =
            FunctionPlot::new(|x| x, (0.0, 1.0), 0.3, (0.0, 1.0), p(0, 0), 100).unwrap();
        // 0.0, 0.3, 0.6, 0.9, 1.2; the last sample overshoots past x_max.
        assert_eq!(plot.sample_count(), 5);
        assert!(plot.sample(4).unwrap().0 >= 1.0);
    }
}
