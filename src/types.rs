//! Value types for the segment geometry.
//!
//! Everything here is `Copy` and compared by value. There is no validation:
//! NaN and infinite coordinates are carried through untouched.

use std::fmt;

use glam::{DVec2, dvec2};

/// A point in data space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Point2D { x, y }
    }

    /// Translate by a displacement in data units.
    #[inline]
    pub fn offset_by(self, dx: f64, dy: f64) -> Point2D {
        Point2D::new(self.x + dx, self.y + dy)
    }

    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }
}

impl From<DVec2> for Point2D {
    fn from(v: DVec2) -> Self {
        Point2D::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Point2D::new(x, y)
    }
}

/// Formats as `(x, y)` with shortest round-trip coordinates that always keep
/// a fractional part, e.g. `(150.0, 110.7)`.
impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.x, self.y)
    }
}

/// A line from `start` to `end`. Coincident endpoints are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Segment {
    pub start: Point2D,
    pub end: Point2D,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point2D, end: Point2D) -> Self {
        Segment { start, end }
    }

    /// True when both endpoints compare equal.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Fixed displacement standing in for half the line thickness.
///
/// Not rotated against the segment direction; see [`crate::geometry::derive_points`].
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PerpendicularOffset {
    pub perp_x: f64,
    pub perp_y: f64,
}

impl PerpendicularOffset {
    pub const ZERO: PerpendicularOffset = PerpendicularOffset::new(0.0, 0.0);

    #[inline]
    pub const fn new(perp_x: f64, perp_y: f64) -> Self {
        PerpendicularOffset { perp_x, perp_y }
    }
}
