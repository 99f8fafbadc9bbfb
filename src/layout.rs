//! Caption geometry: where the text goes and the box drawn behind it.
//!
//! Everything here is pure arithmetic on pixel dimensions, so the exact
//! placement rules are testable without decoding a single image.

use imageproc::rect::Rect;

use crate::style::{BOTTOM_MARGIN, PADDING};

/// Placement of a caption inside an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptionLayout {
    /// Left edge of the text, centered horizontally.
    pub text_x: i32,
    /// Top edge of the text, a fixed margin above the bottom image edge.
    pub text_y: i32,
    /// Filled box drawn behind the text.
    pub background: BackgroundBox,
}

/// Axis-aligned box in pixel coordinates. May extend past the image edges
/// for text wider than the image; drawing clips at the edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BackgroundBox {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl BackgroundBox {
    pub fn width(&self) -> u32 {
        (self.right - self.left) as u32
    }

    pub fn height(&self) -> u32 {
        (self.bottom - self.top) as u32
    }

    pub fn to_rect(&self) -> Rect {
        Rect::at(self.left, self.top).of_size(self.width(), self.height())
    }
}

/// Computes the caption placement for the given image and measured text
/// dimensions.
///
/// The text is centered horizontally with truncated integer division (the
/// one-pixel bias for odd width differences is deliberate) and sits
/// [`BOTTOM_MARGIN`] pixels above the bottom edge. The background box is the
/// text box expanded by [`PADDING`] on all four sides, so it always contains
/// the text.
pub fn caption_layout(image_w: u32, image_h: u32, text_w: u32, text_h: u32) -> CaptionLayout {
    let text_w = text_w as i32;
    let text_h = text_h as i32;

    let text_x = (image_w as i32 - text_w) / 2;
    let text_y = image_h as i32 - text_h - BOTTOM_MARGIN;

    CaptionLayout {
        text_x,
        text_y,
        background: BackgroundBox {
            left: text_x - PADDING,
            top: text_y - PADDING,
            right: text_x + text_w + PADDING,
            bottom: text_y + text_h + PADDING,
        },
    }
}
