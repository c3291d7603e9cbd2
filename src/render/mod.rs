//! Figure rendering: plotters draws into an SVG string, resvg turns that
//! into PNG bytes, and [`Figure::save`] puts them on disk.

pub mod defaults;
pub mod panel;
pub mod plot;
pub mod raster;

use std::path::Path;

use enum_dispatch::enum_dispatch;
use plotters::style::{BLACK, IntoFont, TextStyle};

use crate::errors::RenderError;
use crate::log;

pub use panel::TextPanel;
pub use plot::{Annotation, AxisRange, Plot, Series, SeriesStyle};

/// Points to pixels at the figure DPI.
#[inline]
pub(crate) fn pt(points: f64) -> f64 {
    points * defaults::PX_PER_PT
}

/// Black text in the figure font, size in points.
pub(crate) fn text_style(size_pt: f64) -> TextStyle<'static> {
    (defaults::FONT_FAMILY, pt(size_pt)).into_font().color(&BLACK)
}

/// Physical figure size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureSize {
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
}

impl FigureSize {
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        FigureSize {
            width_in,
            height_in,
            dpi: defaults::DPI,
        }
    }

    /// Size in whole pixels
    pub fn px(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi).round() as u32,
            (self.height_in * self.dpi).round() as u32,
        )
    }
}

impl From<(f64, f64)> for FigureSize {
    fn from((w, h): (f64, f64)) -> Self {
        FigureSize::new(w, h)
    }
}

/// Common behavior for all figures
#[enum_dispatch]
pub trait Figure {
    fn size(&self) -> FigureSize;

    /// Lay the figure out as an SVG document in pixel coordinates
    fn to_svg(&self) -> Result<String, RenderError>;

    /// Rasterize to PNG bytes
    fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        let svg = self.to_svg()?;
        log::debug!(bytes = svg.len(), "generated svg");
        raster::svg_to_png(&svg)
    }

    /// Rasterize and write to `path`
    fn save(&self, path: &Path) -> Result<(), RenderError> {
        let png = self.to_png()?;
        std::fs::write(path, &png).map_err(|source| RenderError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!(path = %path.display(), bytes = png.len(), "wrote figure");
        Ok(())
    }
}

/// Any figure this crate knows how to draw
#[enum_dispatch(Figure)]
#[derive(Debug, Clone, PartialEq)]
pub enum FigureKind {
    Plot,
    TextPanel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_size_in_pixels() {
        assert_eq!(FigureSize::new(10.0, 6.0).px(), (1000, 600));
        assert_eq!(FigureSize::from((4.0, 6.0)).px(), (400, 600));
    }

    #[test]
    fn points_to_pixels() {
        assert!((pt(72.0) - defaults::DPI).abs() < 1e-9);
    }

    #[test]
    fn dispatch_through_kind() {
        let kind: FigureKind = TextPanel::new(FigureSize::new(1.0, 0.5), "hi").into();
        assert_eq!(kind.size().px(), (100, 50));
        let png = kind.to_png().expect("renders");
        assert!(!png.is_empty());
    }

    #[test]
    fn save_reports_unwritable_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("out.png");
        let panel = TextPanel::new(FigureSize::new(1.0, 1.0), "x");
        match panel.save(&path) {
            Err(RenderError::Write { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected write error, got {other:?}"),
        }
    }
}
