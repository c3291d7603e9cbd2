//! SVG to PNG conversion.

use std::sync::{Arc, LazyLock};

use crate::errors::RenderError;
use crate::log;

/// System fonts, loaded once and shared by every conversion.
static FONTDB: LazyLock<Arc<usvg::fontdb::Database>> = LazyLock::new(|| {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    if db.len() == 0 {
        log::warn!("no system fonts found, text will not be drawn");
    } else {
        log::debug!(faces = db.len(), "loaded system fonts");
    }
    Arc::new(db)
});

/// Rasterize an SVG document at its own size onto a white background.
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>, RenderError> {
    let options = usvg::Options {
        fontdb: FONTDB.clone(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(svg, &options)?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|e| RenderError::Encode {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

    #[test]
    fn renders_simple_document() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="40" height="20" viewBox="0 0 40 20">
<line x1="0" y1="10" x2="40" y2="10" stroke="black" stroke-width="2"/>
</svg>"#;
        let png = svg_to_png(svg).expect("renders");
        assert!(png.starts_with(PNG_MAGIC));
    }

    #[test]
    fn rejects_malformed_svg() {
        let err = svg_to_png("<svg").unwrap_err();
        assert!(matches!(err, RenderError::InvalidSvg(_)));
    }
}
