//! Error types with diagnostics using miette

use std::path::PathBuf;

use miette::Diagnostic;
use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Errors that occur while turning a figure into a PNG file
#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error("cannot lay out the {axis} axis over [{min}, {max}]")]
    #[diagnostic(
        code(thickline::render::invalid_range),
        help("axis limits must be finite with min < max")
    )]
    InvalidRange {
        axis: &'static str,
        min: f64,
        max: f64,
    },

    #[error("drawing the figure failed: {0}")]
    #[diagnostic(code(thickline::render::draw))]
    Draw(#[from] DrawingAreaErrorKind<std::io::Error>),

    #[error("generated SVG was rejected: {0}")]
    #[diagnostic(code(thickline::render::invalid_svg))]
    InvalidSvg(#[from] usvg::Error),

    #[error("cannot allocate a {width}x{height} pixmap")]
    #[diagnostic(
        code(thickline::render::invalid_size),
        help("figure dimensions must be non-zero")
    )]
    InvalidSize { width: u32, height: u32 },

    #[error("PNG encoding failed: {message}")]
    #[diagnostic(code(thickline::render::encode))]
    Encode { message: String },

    #[error("cannot write {}", .path.display())]
    #[diagnostic(
        code(thickline::render::write),
        help("check that the output directory exists and is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
