//! Font acquisition, text measurement, and glyph drawing.
//!
//! A caption is rendered with a scalable font when one can be loaded from
//! disk, and otherwise with the built-in 8x8 bitmap font. The fallback is
//! best-effort by design: a missing or unparseable font file must never
//! fail a caption run.

use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use anyhow::Context as _;
use font8x8::legacy::BASIC_LEGACY;
use image::{Rgba, RgbaImage};

/// Glyph cell edge of the bitmap fallback font, in pixels.
const BITMAP_CELL: u32 = 8;

/// A font usable for caption measurement and drawing.
pub enum CaptionFont {
    /// A parsed scalable font rendered at a fixed pixel size.
    Scalable { font: FontVec, scale: PxScale },
    /// The built-in fixed-size bitmap font.
    Bitmap,
}

impl CaptionFont {
    /// Tries to load the scalable font at `path`; on any failure returns the
    /// bitmap fallback instead. Never errors.
    pub fn load_or_default(path: &Path, size: f32) -> Self {
        match Self::try_load_scalable(path, size) {
            Ok(font) => font,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %format!("{err:#}"),
                    "scalable font unavailable, using bitmap fallback"
                );
                Self::Bitmap
            }
        }
    }

    fn try_load_scalable(path: &Path, size: f32) -> anyhow::Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        let font = FontVec::try_from_vec(bytes)
            .with_context(|| format!("parse font '{}'", path.display()))?;
        Ok(Self::Scalable {
            font,
            scale: PxScale::from(size),
        })
    }

    /// Pixel bounding box of `text` as it would be drawn at the origin.
    /// Empty text measures (0, 0).
    pub fn text_size(&self, text: &str) -> (u32, u32) {
        match self {
            Self::Scalable { font, scale } => imageproc::drawing::text_size(*scale, font, text),
            Self::Bitmap => {
                if text.is_empty() {
                    (0, 0)
                } else {
                    (text.chars().count() as u32 * BITMAP_CELL, BITMAP_CELL)
                }
            }
        }
    }

    /// Draws `text` with its top-left corner at `(x, y)`, clipping at the
    /// image edges.
    pub fn draw(&self, image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
        match self {
            Self::Scalable { font, scale } => {
                imageproc::drawing::draw_text_mut(image, color, x, y, *scale, font, text);
            }
            Self::Bitmap => draw_bitmap_text(image, x, y, color, text),
        }
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self, Self::Bitmap)
    }
}

fn draw_bitmap_text(image: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, text: &str) {
    let (image_w, image_h) = (image.width() as i32, image.height() as i32);

    for (i, ch) in text.chars().enumerate() {
        // Characters outside the 8x8 set occupy a blank cell.
        let Some(glyph) = bitmap_glyph(ch) else {
            continue;
        };

        let cell_x = x + i as i32 * BITMAP_CELL as i32;
        for (row, bits) in glyph.iter().enumerate() {
            let py = y + row as i32;
            if py < 0 || py >= image_h {
                continue;
            }
            for col in 0..BITMAP_CELL as i32 {
                // Bit 0 is the leftmost pixel of the row.
                if bits & (1 << col) == 0 {
                    continue;
                }
                let px = cell_x + col;
                if px < 0 || px >= image_w {
                    continue;
                }
                image.put_pixel(px as u32, py as u32, color);
            }
        }
    }
}

fn bitmap_glyph(ch: char) -> Option<[u8; 8]> {
    BASIC_LEGACY.get(ch as usize).copied()
}
