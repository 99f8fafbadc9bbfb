pub type CaptionResult<T> = Result<T, CaptionError>;

#[derive(thiserror::Error, Debug)]
pub enum CaptionError {
    /// The HTTP GET failed: DNS, refused connection, or a non-2xx status.
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The response body is not a decodable image.
    #[error("decode error: {0}")]
    Decode(image::ImageError),

    /// Encoding or writing the composited image failed.
    #[error("write error: {0}")]
    Write(image::ImageError),
}
