//! Band points around a line segment, rendered as two PNG figures.
//!
//! [`derive_points`] is the whole of the geometry; everything else lays the
//! result out as an annotated plot and a text panel and rasterizes them.

pub mod defaults;
pub mod errors;
pub mod figures;
pub mod geometry;
pub mod log;
pub mod render;
pub mod types;

use std::path::{Path, PathBuf};

pub use errors::RenderError;
pub use geometry::{DerivedPoints, derive_points};
pub use render::{Figure, FigureKind};
pub use types::{PerpendicularOffset, Point2D, Segment};

/// Paths of the files written by [`render_figures`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFiles {
    pub plot: PathBuf,
    pub panel: PathBuf,
}

/// Derive the band points for the fixed segment and write both figures into `dir`.
pub fn render_figures(dir: &Path) -> Result<RenderedFiles, RenderError> {
    let segment = defaults::SEGMENT;
    let points = derive_points(segment, defaults::OFFSET);

    let files = RenderedFiles {
        plot: dir.join(defaults::PLOT_FILE),
        panel: dir.join(defaults::PANEL_FILE),
    };
    let outputs: [(FigureKind, &Path); 2] = [
        (figures::line_plot(segment, &points).into(), files.plot.as_path()),
        (figures::annotation_panel(segment, &points).into(), files.panel.as_path()),
    ];
    for (figure, path) in outputs {
        figure.save(path)?;
    }

    Ok(files)
}
