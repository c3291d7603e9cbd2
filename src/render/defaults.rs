//! Default sizes and styling (figure sizes in inches, text in points)

use plotters::style::RGBColor;

/// Pixels per inch for every figure.
pub const DPI: f64 = 100.0;
/// Pixels per typographic point at [`DPI`].
pub const PX_PER_PT: f64 = DPI / 72.0;

pub const PLOT_SIZE: (f64, f64) = (10.0, 6.0);
pub const PANEL_SIZE: (f64, f64) = (4.0, 6.0);

/// Space around the chart, then room for tick labels and axis captions.
pub const MARGIN_PX: u32 = 20;
pub const X_LABEL_AREA_PX: u32 = 50;
pub const Y_LABEL_AREA_PX: u32 = 70;

/// Upper bound on labelled ticks per axis; 9 gives a step of 5 over 40 units.
pub const TICK_COUNT: usize = 9;

pub const FONT_FAMILY: &str = "DejaVu Sans, Arial, sans-serif";
pub const FONT_SIZE_PT: f64 = 10.0;
pub const TITLE_SIZE_PT: f64 = 12.0;
pub const PANEL_FONT_SIZE_PT: f64 = 12.0;
/// Baseline-to-baseline distance as a fraction of the font size.
pub const LINE_SPACING: f64 = 1.2;

pub const LINE_WIDTH_PT: f64 = 2.0;
pub const MARKER_SIZE_PT: f64 = 6.0;
pub const GRID_LINE_WIDTH_PT: f64 = 0.8;
pub const GRID_COLOR: RGBColor = RGBColor(0xb0, 0xb0, 0xb0);

/// Data-space shift from an annotated point to its label anchor.
pub const ANNOTATION_SHIFT: (f64, f64) = (2.0, 2.0);
pub const ANNOTATION_BOX_OPACITY: f64 = 0.7;
pub const PANEL_BOX_OPACITY: f64 = 0.8;
/// Padding between text and its box, as a fraction of the font size.
pub const BOX_PAD: f64 = 0.3;

pub const LEGEND_PAD_PX: u32 = 7;
pub const LEGEND_HANDLE_PX: i32 = 28;
pub const LEGEND_BOX_OPACITY: f64 = 0.8;
pub const LEGEND_BORDER_COLOR: RGBColor = RGBColor(0xcc, 0xcc, 0xcc);
