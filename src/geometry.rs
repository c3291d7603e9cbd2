//! Band points around a segment.

use crate::log;
use crate::types::{PerpendicularOffset, Point2D, Segment};

/// The four points marking the band drawn around a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedPoints {
    pub p1_left: Point2D,
    pub p1_right: Point2D,
    pub p2_left: Point2D,
    pub p2_right: Point2D,
}

impl DerivedPoints {
    /// Points paired with their names, in `p1_left, p1_right, p2_left, p2_right` order.
    pub fn labelled(&self) -> [(&'static str, Point2D); 4] {
        [
            ("p1_left", self.p1_left),
            ("p1_right", self.p1_right),
            ("p2_left", self.p2_left),
            ("p2_right", self.p2_right),
        ]
    }

    /// The `p1` pair, drawn as the start markers.
    pub fn start_pair(&self) -> [Point2D; 2] {
        [self.p1_left, self.p1_right]
    }

    /// The `p2` pair, drawn as the end markers.
    pub fn end_pair(&self) -> [Point2D; 2] {
        [self.p2_left, self.p2_right]
    }
}

/// Derive the band points for `segment`.
///
/// Only `offset.perp_y` is used, and only against `start.y`: the `p1` pair
/// sits at `start.y + perp_y` spanning `start.x..end.x`, the `p2` pair sits at
/// `end.y`. This is a fixed vertical shift, not a projection along the
/// segment normal.
pub fn derive_points(segment: Segment, offset: PerpendicularOffset) -> DerivedPoints {
    let Segment { start, end } = segment;
    let p1_y = start.y + offset.perp_y;

    let points = DerivedPoints {
        p1_left: Point2D::new(start.x, p1_y),
        p1_right: Point2D::new(end.x, p1_y),
        p2_left: Point2D::new(start.x, end.y),
        p2_right: Point2D::new(end.x, end.y),
    };

    log::debug!(
        p1_left = %points.p1_left,
        p1_right = %points.p1_right,
        p2_left = %points.p2_left,
        p2_right = %points.p2_right,
        "derived band points"
    );

    points
}
