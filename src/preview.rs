//! Local image preview data.
//!
//! The browser reads the selected file into a data URL. Before it is used as
//! an `<img>` source it is checked here: it must be a well-formed base64 data
//! URL. The declared media type is not checked, since browsers report
//! `application/octet-stream` (or nothing) for images without a known
//! extension and `<img>` sniffs the content anyway. A malformed URL is a
//! decode failure, which the controller treats as "no preview" rather than an
//! error state.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use std::io;

use base64::engine::general_purpose::STANDARD;
use base64::read::DecoderReader;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("file could not be read: {0}")]
    Read(String),
    #[error("not a data URL")]
    NotDataUrl,
    #[error("data URL is not base64 encoded")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    Payload(String),
}

/// A well-formed base64 data URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewImage {
    url: String,
}

impl PreviewImage {
    /// Validate a data URL produced by the file reader.
    ///
    /// The payload is decoded in a streaming pass and discarded, so validation
    /// does not hold a second copy of the file.
    ///
    /// # Errors
    ///
    /// Returns a [`PreviewError`] describing why the URL cannot be used as a
    /// preview source.
    pub fn from_data_url(url: String) -> Result<Self, PreviewError> {
        let rest = url.strip_prefix("data:").ok_or(PreviewError::NotDataUrl)?;
        let (header, payload) = rest.split_once(',').ok_or(PreviewError::NotDataUrl)?;

        if !header
            .split(';')
            .skip(1)
            .any(|p| p.trim().eq_ignore_ascii_case("base64"))
        {
            return Err(PreviewError::NotBase64);
        }

        let mut decoder = DecoderReader::new(payload.trim().as_bytes(), &STANDARD);
        let decoded = io::copy(&mut decoder, &mut io::sink())
            .map_err(|e| PreviewError::Payload(e.to_string()))?;
        log::debug!("preview payload holds {decoded} bytes");

        Ok(Self { url })
    }

    /// The URL to assign to the preview image source.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}
