//! The fixed inputs of a run.

use crate::types::{PerpendicularOffset, Point2D, Segment};

pub const START: Point2D = Point2D::new(150.0, 110.0);
pub const END: Point2D = Point2D::new(170.0, 130.0);
pub const SEGMENT: Segment = Segment::new(START, END);
pub const OFFSET: PerpendicularOffset = PerpendicularOffset::new(0.7, 0.7);

/// Visible data range, `[min, max]` per axis.
pub const X_LIMITS: (f64, f64) = (140.0, 180.0);
pub const Y_LIMITS: (f64, f64) = (100.0, 140.0);

pub const PLOT_FILE: &str = "line_with_thickness.png";
pub const PANEL_FILE: &str = "annotations.png";
