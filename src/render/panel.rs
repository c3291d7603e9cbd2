//! Axis-less figure holding one boxed block of text.

use glam::{DVec2, dvec2};
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::errors::RenderError;

use super::defaults;
use super::{Figure, FigureSize, pt, text_style};

#[derive(Debug, Clone, PartialEq)]
pub struct TextPanel {
    pub size: FigureSize,
    pub text: String,
    /// Font size in points
    pub font_size: f64,
}

impl TextPanel {
    pub fn new(size: FigureSize, text: impl Into<String>) -> Self {
        TextPanel {
            size,
            text: text.into(),
            font_size: defaults::PANEL_FONT_SIZE_PT,
        }
    }

    fn line_height(&self) -> f64 {
        pt(self.font_size) * defaults::LINE_SPACING
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
    ) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
        root.fill(&WHITE)?;

        let style = text_style(self.font_size);
        let lines: Vec<&str> = self.text.lines().collect();
        let mut widest = 0;
        for line in &lines {
            widest = widest.max(root.estimate_text_size(line, &style)?.0);
        }

        let (width, height) = root.dim_in_pixel();
        let center = dvec2(width as f64, height as f64) / 2.0;
        let text_size = dvec2(widest as f64, lines.len() as f64 * self.line_height());
        let half = text_size / 2.0 + DVec2::splat(pt(self.font_size) * defaults::BOX_PAD);
        let corners = [backend(center - half), backend(center + half)];
        root.draw(&Rectangle::new(
            corners,
            WHITE.mix(defaults::PANEL_BOX_OPACITY).filled(),
        ))?;
        root.draw(&Rectangle::new(corners, BLACK.stroke_width(1)))?;

        let centered = style.pos(Pos::new(HPos::Center, VPos::Center));
        let top = center.y - text_size.y / 2.0;
        for (i, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }
            let y = top + (i as f64 + 0.5) * self.line_height();
            root.draw(&Text::new(*line, backend(dvec2(center.x, y)), centered.clone()))?;
        }
        Ok(())
    }
}

fn backend(p: DVec2) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

impl Figure for TextPanel {
    fn size(&self) -> FigureSize {
        self.size
    }

    fn to_svg(&self) -> Result<String, RenderError> {
        let (width, height) = self.size.px();
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
            self.draw(&root)?;
            root.present()?;
        }
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attr(element: &str, name: &str) -> Option<f64> {
        let key = format!(r#" {name}=""#);
        let start = element.find(&key)? + key.len();
        let len = element[start..].find('"')?;
        element[start..start + len].parse().ok()
    }

    #[test]
    fn centered_box_with_every_line() {
        let panel = TextPanel::new(FigureSize::new(4.0, 6.0), "Start Point: (1.0, 2.0)\n\np1_left: (1.0, 2.5)");
        let svg = panel.to_svg().expect("lays out");
        assert!(svg.contains(r#"viewBox="0 0 400 600""#));

        let texts: Vec<&str> = svg.match_indices("<text").map(|(i, _)| &svg[i..]).collect();
        assert_eq!(texts.len(), 2);
        assert!(texts[0].contains(">Start Point: (1.0, 2.0)</text>"));
        assert!(texts[1].contains(">p1_left: (1.0, 2.5)</text>"));
        for t in &texts {
            assert_eq!(attr(t, "x"), Some(200.0));
        }

        // Background fill first, then the box fill and its frame.
        let rects: Vec<&str> = svg.match_indices("<rect").map(|(i, _)| &svg[i..]).collect();
        let frame = rects.last().expect("boxed text");
        let (x, y) = (attr(frame, "x").unwrap(), attr(frame, "y").unwrap());
        let (w, h) = (attr(frame, "width").unwrap(), attr(frame, "height").unwrap());
        assert!((x + w / 2.0 - 200.0).abs() <= 1.0);
        assert!((y + h / 2.0 - 300.0).abs() <= 1.0);
    }

    #[test]
    fn markup_in_text_is_escaped() {
        let panel = TextPanel::new(FigureSize::new(2.0, 1.0), "a < b & c");
        let svg = panel.to_svg().expect("lays out");
        assert!(svg.contains(">a &lt; b &amp; c</text>"));
        usvg::Tree::from_str(&svg, &usvg::Options::default()).expect("valid svg");
    }
}
