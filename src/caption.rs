//! The caption pipeline: fetch, decode, composite, save.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use imageproc::drawing::draw_filled_rect_mut;

use crate::{
    error::{CaptionError, CaptionResult},
    fetch,
    font::CaptionFont,
    layout::caption_layout,
    style,
};

/// Fetches the image at `image_url`, overlays `text` bottom-center on a
/// filled background box, and writes the result to `output_path`.
///
/// The output encoder is selected by the path's extension. Returns the
/// output path on success. Transport and decode failures abort before any
/// file is written; a save failure aborts with no partial output.
#[tracing::instrument(skip(text))]
pub fn caption(
    image_url: &str,
    text: &str,
    output_path: impl AsRef<Path> + std::fmt::Debug,
) -> CaptionResult<PathBuf> {
    let output_path = output_path.as_ref();

    let bytes = fetch::fetch_bytes(image_url)?;
    let mut image = image::load_from_memory(&bytes)
        .map_err(CaptionError::Decode)?
        .to_rgba8();
    tracing::debug!(
        width = image.width(),
        height = image.height(),
        "decoded source image"
    );

    let font = CaptionFont::load_or_default(Path::new(style::FONT_PATH), style::FONT_SIZE);
    caption_image(&mut image, text, &font);

    image.save(output_path).map_err(CaptionError::Write)?;
    Ok(output_path.to_path_buf())
}

/// Composites the caption onto `image` in place: background box first, then
/// the text on top. Never resizes or crops; drawing clips at the edges.
pub fn caption_image(image: &mut RgbaImage, text: &str, font: &CaptionFont) {
    let (text_w, text_h) = font.text_size(text);
    let layout = caption_layout(image.width(), image.height(), text_w, text_h);
    tracing::debug!(?layout, "caption layout");

    draw_filled_rect_mut(image, layout.background.to_rect(), style::BACKGROUND_COLOR);
    font.draw(
        image,
        layout.text_x,
        layout.text_y,
        style::TEXT_COLOR,
        text,
    );
}
