//! The two figures of a run, built from a segment and its band points.

use plotters::style::{BLACK, BLUE, RED};

use crate::defaults;
use crate::geometry::DerivedPoints;
use crate::render::defaults as style;
use crate::render::{Annotation, AxisRange, FigureSize, Plot, Series, SeriesStyle, TextPanel};
use crate::types::Segment;

pub const PLOT_TITLE: &str = "Line with Perpendicular Points";

/// The segment, both marker pairs and a label for each of the six points.
pub fn line_plot(segment: Segment, points: &DerivedPoints) -> Plot {
    let mut plot = Plot::new(
        FigureSize::from(style::PLOT_SIZE),
        AxisRange::from(defaults::X_LIMITS),
        AxisRange::from(defaults::Y_LIMITS),
    );
    plot.title = PLOT_TITLE.to_string();
    plot.x_label = "X Coordinate".to_string();
    plot.y_label = "Y Coordinate".to_string();
    plot.grid = true;
    plot.legend = true;

    plot.series = vec![
        Series::new(
            "Line",
            [segment.start, segment.end],
            SeriesStyle::line(BLACK, style::LINE_WIDTH_PT),
        ),
        Series::new(
            "Start Points",
            points.start_pair(),
            SeriesStyle::markers(RED, style::MARKER_SIZE_PT),
        ),
        Series::new(
            "End Points",
            points.end_pair(),
            SeriesStyle::markers(BLUE, style::MARKER_SIZE_PT),
        ),
    ];

    plot.annotations = [("Start", segment.start), ("End", segment.end)]
        .into_iter()
        .chain(points.labelled())
        .map(|(label, point)| Annotation::new(point, label))
        .collect();

    plot
}

/// Every point value as text, endpoints first.
pub fn annotation_text(segment: Segment, points: &DerivedPoints) -> String {
    let mut text = format!(
        "Start Point: {}\nEnd Point: {}\n",
        segment.start, segment.end
    );
    for (label, point) in points.labelled() {
        text.push_str(&format!("\n{label}: {point}"));
    }
    text
}

pub fn annotation_panel(segment: Segment, points: &DerivedPoints) -> TextPanel {
    TextPanel::new(
        FigureSize::from(style::PANEL_SIZE),
        annotation_text(segment, points),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::derive_points;

    fn reference() -> (Segment, DerivedPoints) {
        (defaults::SEGMENT, derive_points(defaults::SEGMENT, defaults::OFFSET))
    }

    #[test]
    fn plot_has_three_series_and_six_labels() {
        let (segment, points) = reference();
        let plot = line_plot(segment, &points);
        let labels: Vec<_> = plot.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Line", "Start Points", "End Points"]);
        assert_eq!(plot.series[1].points, points.start_pair());

        let names: Vec<_> = plot.annotations.iter().map(|a| a.label.as_str()).collect();
        assert_eq!(names, ["Start", "End", "p1_left", "p1_right", "p2_left", "p2_right"]);
        assert_eq!(plot.annotations[2].point, points.p1_left);
    }

    #[test]
    fn plot_uses_fixed_limits() {
        let (segment, points) = reference();
        let plot = line_plot(segment, &points);
        assert_eq!(plot.x_range, AxisRange::new(140.0, 180.0));
        assert_eq!(plot.y_range, AxisRange::new(100.0, 140.0));
        assert_eq!(plot.title, PLOT_TITLE);
    }

    #[test]
    fn text_lists_six_points() {
        let (segment, points) = reference();
        let text = annotation_text(segment, &points);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Start Point: (150.0, 110.0)",
                "End Point: (170.0, 130.0)",
                "",
                "p1_left: (150.0, 110.7)",
                "p1_right: (170.0, 110.7)",
                "p2_left: (150.0, 130.0)",
                "p2_right: (170.0, 130.0)",
            ]
        );
    }
}
