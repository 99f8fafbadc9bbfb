#![forbid(unsafe_code)]

//! Fetch a remote image and overlay a centered bottom caption.
//!
//! The pipeline is a single straight line: fetch the source bytes over
//! HTTP(S), decode them, measure the caption for the acquired font, draw a
//! filled background box and the text on top, and save to a path whose
//! extension selects the encoder. See [`caption`].

pub mod caption;
pub mod error;
pub mod fetch;
pub mod font;
pub mod layout;
pub mod style;

pub use caption::{caption, caption_image};
pub use error::{CaptionError, CaptionResult};
pub use font::CaptionFont;
pub use layout::{BackgroundBox, CaptionLayout, caption_layout};
