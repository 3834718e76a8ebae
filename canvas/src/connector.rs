//! Connector geometry: the cubic curve drawn from a parent to a child.
//!
//! Paths are derived data. The graph recomputes them whenever an endpoint
//! node moves or is resized; nothing else writes to them.

#[cfg(test)]
#[path = "connector_test.rs"]
mod connector_test;

use serde::Serialize;

use crate::camera::{Point, Rect};

/// Cubic Bézier from the parent's output anchor to the child's input anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CubicPath {
    pub start: Point,
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub end: Point,
}

impl CubicPath {
    /// Horizontal S-curve: both control points sit at the midpoint x, each at its own endpoint's y.
    #[must_use]
    pub fn between(start: Point, end: Point) -> Self {
        let mid_x = start.x + (end.x - start.x) * 0.5;
        Self { start, ctrl1: Point::new(mid_x, start.y), ctrl2: Point::new(mid_x, end.y), end }
    }

    /// Evaluate the curve at `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        Point::new(
            a * self.start.x + b * self.ctrl1.x + c * self.ctrl2.x + d * self.end.x,
            a * self.start.y + b * self.ctrl1.y + c * self.ctrl2.y + d * self.end.y,
        )
    }

    /// Sample the curve into `segments + 1` points, for adapters that only draw polylines.
    #[must_use]
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = i as f64 / segments as f64;
                self.point_at(t)
            })
            .collect()
    }

    /// Bounding box of the control polygon. The curve never leaves it.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let xs = [self.start.x, self.ctrl1.x, self.ctrl2.x, self.end.x];
        let ys = [self.start.y, self.ctrl1.y, self.ctrl2.y, self.end.y];
        let min_x = xs.iter().copied().fold(f64::INFINITY, f64::min);
        let max_x = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min_y = ys.iter().copied().fold(f64::INFINITY, f64::min);
        let max_y = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}
