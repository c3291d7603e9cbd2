//! Axes figure: series, annotations, ticks, grid and legend.

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::errors::RenderError;
use crate::log;
use crate::types::Point2D;

use super::defaults;
use super::{Figure, FigureSize, pt, text_style};

/// Inclusive data range of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        AxisRange { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Both bounds finite and `min < max`. Anything else cannot be laid out.
    pub fn is_drawable(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    fn check(&self, axis: &'static str) -> Result<(), RenderError> {
        if self.is_drawable() {
            Ok(())
        } else {
            Err(RenderError::InvalidRange {
                axis,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((min, max): (f64, f64)) -> Self {
        AxisRange::new(min, max)
    }
}

/// How a series is drawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeriesStyle {
    /// Connected polyline, width in points
    Line { color: RGBColor, width: f64 },
    /// Filled circles, diameter in points
    Markers { color: RGBColor, size: f64 },
}

impl SeriesStyle {
    pub fn line(color: RGBColor, width: f64) -> Self {
        SeriesStyle::Line { color, width }
    }

    pub fn markers(color: RGBColor, size: f64) -> Self {
        SeriesStyle::Markers { color, size }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point2D>,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(label: &str, points: impl IntoIterator<Item = Point2D>, style: SeriesStyle) -> Self {
        Series {
            label: label.to_string(),
            points: points.into_iter().collect(),
            style,
        }
    }

    fn coords(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|p| (p.x, p.y)).collect()
    }
}

/// A labelled point, drawn as `label` over `(x, y)` beside the point
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub point: Point2D,
    pub label: String,
}

impl Annotation {
    pub fn new(point: Point2D, label: &str) -> Self {
        Annotation {
            point,
            label: label.to_string(),
        }
    }

    pub fn text(&self) -> String {
        format!("{}\n({:.2}, {:.2})", self.label, self.point.x, self.point.y)
    }

    /// Where the lower-left corner of the text goes, in data space.
    pub fn anchor(&self) -> Point2D {
        let (dx, dy) = defaults::ANNOTATION_SHIFT;
        self.point.offset_by(dx, dy)
    }
}

/// A single set of axes with everything drawn on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Plot {
    pub size: FigureSize,
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub series: Vec<Series>,
    pub annotations: Vec<Annotation>,
    pub grid: bool,
    pub legend: bool,
}

impl Plot {
    pub fn new(size: FigureSize, x_range: AxisRange, y_range: AxisRange) -> Self {
        Plot {
            size,
            title: String::new(),
            x_label: String::new(),
            y_label: String::new(),
            x_range,
            y_range,
            series: Vec::new(),
            annotations: Vec::new(),
            grid: false,
            legend: false,
        }
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let label_style = text_style(defaults::FONT_SIZE_PT);
        let mut builder = ChartBuilder::on(root);
        builder
            .margin(defaults::MARGIN_PX)
            .x_label_area_size(defaults::X_LABEL_AREA_PX)
            .y_label_area_size(defaults::Y_LABEL_AREA_PX);
        if !self.title.is_empty() {
            builder.caption(&self.title, text_style(defaults::TITLE_SIZE_PT));
        }
        let mut chart = builder.build_cartesian_2d(
            self.x_range.min..self.x_range.max,
            self.y_range.min..self.y_range.max,
        )?;

        let tick_label = |v: &f64| format!("{v:.0}");
        let grid_style = defaults::GRID_COLOR.stroke_width(pt(defaults::GRID_LINE_WIDTH_PT).round() as u32);
        let mut mesh = chart.configure_mesh();
        mesh.x_labels(defaults::TICK_COUNT)
            .y_labels(defaults::TICK_COUNT)
            .x_label_formatter(&tick_label)
            .y_label_formatter(&tick_label)
            .x_desc(self.x_label.as_str())
            .y_desc(self.y_label.as_str())
            .label_style(label_style.clone())
            .axis_desc_style(label_style.clone())
            .bold_line_style(grid_style)
            .max_light_lines(0);
        if !self.grid {
            mesh.disable_mesh();
        }
        mesh.draw()?;

        for series in &self.series {
            match series.style {
                SeriesStyle::Line { color, width } => {
                    let style = color.stroke_width(pt(width).round() as u32);
                    chart
                        .draw_series(LineSeries::new(series.coords(), style))?
                        .label(series.label.as_str())
                        .legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + defaults::LEGEND_HANDLE_PX, y)], style)
                        });
                }
                SeriesStyle::Markers { color, size } => {
                    let radius = (pt(size) / 2.0).round() as u32;
                    let style = color.filled();
                    chart
                        .draw_series(
                            series
                                .coords()
                                .into_iter()
                                .map(|c| Circle::new(c, radius, style)),
                        )?
                        .label(series.label.as_str())
                        .legend(move |(x, y)| {
                            Circle::new((x + defaults::LEGEND_HANDLE_PX / 2, y), radius, style)
                        });
                }
            }
        }

        // Boxes are sized in pixels, so place them on the root area.
        let line_height = (pt(defaults::FONT_SIZE_PT) * defaults::LINE_SPACING).round() as i32;
        let pad = (pt(defaults::FONT_SIZE_PT) * defaults::BOX_PAD).round() as i32;
        let background = WHITE.mix(defaults::ANNOTATION_BOX_OPACITY).filled();
        for annotation in &self.annotations {
            let anchor = annotation.anchor();
            let (x, bottom) = chart.backend_coord(&(anchor.x, anchor.y));
            let text = annotation.text();
            let lines: Vec<&str> = text.lines().collect();

            let mut width = 0;
            for line in &lines {
                width = width.max(root.estimate_text_size(line, &label_style)?.0 as i32);
            }
            let top = bottom - line_height * lines.len() as i32;
            root.draw(&Rectangle::new(
                [(x - pad, top - pad), (x + width + pad, bottom + pad)],
                background,
            ))?;
            for (i, line) in lines.iter().enumerate() {
                root.draw(&Text::new(*line, (x, top + line_height * i as i32), label_style.clone()))?;
            }
        }

        if self.legend && !self.series.is_empty() {
            chart
                .configure_series_labels()
                .position(SeriesLabelPosition::LowerRight)
                .margin(defaults::LEGEND_PAD_PX)
                .label_font(label_style)
                .background_style(WHITE.mix(defaults::LEGEND_BOX_OPACITY).filled())
                .border_style(defaults::LEGEND_BORDER_COLOR)
                .draw()?;
        }

        Ok(())
    }
}

impl Figure for Plot {
    fn size(&self) -> FigureSize {
        self.size
    }

    fn to_svg(&self) -> Result<String, RenderError> {
        self.x_range.check("x")?;
        self.y_range.check("y")?;

        let (width, height) = self.size.px();
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            self.draw(&root)?;
            root.present()?;
        }
        log::debug!(series = self.series.len(), annotations = self.annotations.len(), "laid out plot");
        Ok(svg)
    }
}
