//! Fixed styling constants for the caption overlay.

use image::Rgba;

/// Path of the scalable font tried first; any load failure falls back to
/// the built-in bitmap font.
pub const FONT_PATH: &str = "arial.ttf";

/// Pixel size the scalable font is rendered at.
pub const FONT_SIZE: f32 = 40.0;

/// Margin added around the text on all four sides of the background box.
pub const PADDING: i32 = 10;

/// Distance between the text baseline box and the bottom image edge.
pub const BOTTOM_MARGIN: i32 = 20;

/// Caption text color (opaque white).
pub const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Caption background color (opaque black).
pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);
