//! Blocking retrieval of the source image bytes.

use crate::error::CaptionResult;

/// Fetches the body of `url` with a single blocking GET.
///
/// Transport defaults apply: no custom headers, no auth, the client's
/// standard redirect policy. Non-2xx statuses are errors.
// TODO: configure a request timeout; an unresponsive server currently
// blocks the caller indefinitely.
pub fn fetch_bytes(url: &str) -> CaptionResult<Vec<u8>> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let bytes = response.bytes()?;
    tracing::debug!(url, len = bytes.len(), "fetched source image bytes");
    Ok(bytes.to_vec())
}
