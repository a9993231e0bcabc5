//! Image payload representation
//!
//! Uploaded and generated images travel through the app as base64 data URLs
//! (`data:image/png;base64,...`), the self-contained form the browser's
//! FileReader produces. `ImagePayload` validates that shape once at
//! construction so every holder can rely on it.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::{Error, Result};

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// A validated `data:<mime>;base64,<data>` image payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    data_url: String,
    /// Byte offset of the end of the MIME type within `data_url`.
    mime_end: usize,
    /// Byte offset of the start of the base64 section within `data_url`.
    data_start: usize,
}

fn check_mime(mime: &str) -> Result<()> {
    // A MIME type containing the marker would re-parse at the wrong split.
    if mime.is_empty() || !mime.contains('/') || mime.contains(BASE64_MARKER) {
        return Err(Error::MalformedPayload(format!(
            "\"{}\" is not a MIME type",
            mime
        )));
    }
    Ok(())
}

impl ImagePayload {
    /// Parse and validate a data URL.
    ///
    /// Accepts exactly the `data:<mime>;base64,<data>` shape with a
    /// `type/subtype` MIME and a well-formed base64 section (standard
    /// alphabet, length a multiple of four, at most two trailing `=`). An
    /// empty data section is allowed; a zero-byte file reads as one.
    pub fn from_data_url(data_url: String) -> Result<Self> {
        let rest = data_url
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or_else(|| Error::MalformedPayload("missing data: prefix".to_string()))?;

        let marker = rest
            .find(BASE64_MARKER)
            .ok_or_else(|| Error::MalformedPayload("missing ;base64, marker".to_string()))?;

        check_mime(&rest[..marker])?;

        let encoded = &rest[marker + BASE64_MARKER.len()..];
        if encoded.len() % 4 != 0 {
            return Err(Error::MalformedPayload(
                "base64 section length is not a multiple of four".to_string(),
            ));
        }
        let padding = encoded.bytes().rev().take_while(|&b| b == b'=').count();
        if padding > 2 {
            return Err(Error::MalformedPayload(
                "more than two base64 padding characters".to_string(),
            ));
        }
        let body = &encoded[..encoded.len() - padding];
        if let Some(bad) = body
            .bytes()
            .find(|b| !(b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/')))
        {
            return Err(Error::MalformedPayload(format!(
                "invalid base64 byte 0x{:02x}",
                bad
            )));
        }

        let mime_end = DATA_URL_PREFIX.len() + marker;
        let data_start = mime_end + BASE64_MARKER.len();
        Ok(Self {
            data_url,
            mime_end,
            data_start,
        })
    }

    /// Build a payload from raw image bytes.
    ///
    /// The MIME type faces the same shape check as parsing, so the rendered
    /// URL always re-parses.
    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Result<Self> {
        check_mime(mime)?;
        let encoded = BASE64.encode(bytes);
        let mime_end = DATA_URL_PREFIX.len() + mime.len();
        let data_start = mime_end + BASE64_MARKER.len();
        Ok(Self {
            data_url: format!("{}{}{}{}", DATA_URL_PREFIX, mime, BASE64_MARKER, encoded),
            mime_end,
            data_start,
        })
    }

    /// The declared MIME type, e.g. `image/jpeg`.
    pub fn mime_type(&self) -> &str {
        &self.data_url[DATA_URL_PREFIX.len()..self.mime_end]
    }

    /// The base64-encoded data section.
    pub fn base64_data(&self) -> &str {
        &self.data_url[self.data_start..]
    }

    /// Number of bytes the data section decodes to, without decoding it.
    pub fn decoded_len(&self) -> usize {
        let encoded = self.base64_data();
        let padding = encoded.bytes().rev().take_while(|&b| b == b'=').count();
        // Construction caps padding at two, so this cannot underflow.
        encoded.len() / 4 * 3 - padding
    }

    /// Decode the image bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        BASE64
            .decode(self.base64_data())
            .map_err(|e| Error::MalformedPayload(e.to_string()))
    }

    /// The full data URL.
    pub fn as_str(&self) -> &str {
        &self.data_url
    }
}

impl std::fmt::Display for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_jpeg_data_url() {
        let payload =
            ImagePayload::from_data_url("data:image/jpeg;base64,/9j/4AAQSkZJRg==".to_string())
                .expect("parse failed");
        assert_eq!(payload.mime_type(), "image/jpeg");
        assert_eq!(payload.base64_data(), "/9j/4AAQSkZJRg==");
    }

    #[test]
    fn test_parse_png_data_url() {
        let payload = ImagePayload::from_data_url("data:image/png;base64,iVBORw0KGgo=".to_string())
            .expect("parse failed");
        assert_eq!(payload.mime_type(), "image/png");
        assert_eq!(payload.base64_data(), "iVBORw0KGgo=");
    }

    #[test]
    fn test_reject_missing_prefix() {
        let result = ImagePayload::from_data_url("image/png;base64,AAAA".to_string());
        assert!(matches!(result, Err(Error::MalformedPayload(_))));
    }

    #[test]
    fn test_reject_missing_base64_marker() {
        let result = ImagePayload::from_data_url("data:image/png,AAAA".to_string());
        assert!(matches!(result, Err(Error::MalformedPayload(_))));
    }

    #[test]
    fn test_reject_empty_mime() {
        let result = ImagePayload::from_data_url("data:;base64,AAAA".to_string());
        assert!(matches!(result, Err(Error::MalformedPayload(_))));
    }

    #[test]
    fn test_reject_mime_without_slash() {
        let result = ImagePayload::from_data_url("data:image;base64,AAAA".to_string());
        assert!(matches!(result, Err(Error::MalformedPayload(_))));
    }

    #[test]
    fn test_reject_invalid_base64_bytes() {
        let result = ImagePayload::from_data_url("data:image/png;base64,AA$A".to_string());
        assert!(matches!(result, Err(Error::MalformedPayload(_))));
    }

    #[test]
    fn test_reject_unpadded_base64_length() {
        let result = ImagePayload::from_data_url("data:image/png;base64,AAAAA".to_string());
        assert!(matches!(result, Err(Error::MalformedPayload(_))));
    }

    #[test]
    fn test_reject_excess_padding() {
        // Padding beyond two characters never comes out of an encoder; this
        // shape previously constructed and broke the length accounting.
        let result = ImagePayload::from_data_url("data:image/png;base64,====".to_string());
        assert!(matches!(result, Err(Error::MalformedPayload(_))));

        let result = ImagePayload::from_data_url("data:image/png;base64,A===".to_string());
        assert!(matches!(result, Err(Error::MalformedPayload(_))));
    }

    #[test]
    fn test_reject_padding_inside_body() {
        let result = ImagePayload::from_data_url("data:image/png;base64,AA=A".to_string());
        assert!(matches!(result, Err(Error::MalformedPayload(_))));

        let result = ImagePayload::from_data_url("data:image/png;base64,==AA".to_string());
        assert!(matches!(result, Err(Error::MalformedPayload(_))));
    }

    #[test]
    fn test_two_trailing_padding_characters_parse() {
        let payload = ImagePayload::from_data_url("data:image/png;base64,AA==".to_string())
            .expect("parse failed");
        assert_eq!(payload.decoded_len(), 1);
    }

    #[test]
    fn test_empty_data_section_parses() {
        // A zero-byte file reads as an empty data section.
        let payload = ImagePayload::from_data_url("data:image/png;base64,".to_string())
            .expect("parse failed");
        assert_eq!(payload.decoded_len(), 0);
        assert_eq!(payload.decode().expect("decode failed"), Vec::<u8>::new());
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let bytes = vec![0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a];
        let payload = ImagePayload::from_bytes("image/png", &bytes).expect("build failed");

        assert_eq!(payload.mime_type(), "image/png");
        assert!(payload.as_str().starts_with("data:image/png;base64,"));
        assert_eq!(payload.decode().expect("decode failed"), bytes);

        // The produced URL parses back to an identical payload.
        let reparsed = ImagePayload::from_data_url(payload.as_str().to_string())
            .expect("reparse failed");
        assert_eq!(reparsed, payload);
    }

    #[test]
    fn test_from_bytes_rejects_invalid_mime() {
        assert!(matches!(
            ImagePayload::from_bytes("", &[1]),
            Err(Error::MalformedPayload(_))
        ));
        assert!(matches!(
            ImagePayload::from_bytes("image", &[1]),
            Err(Error::MalformedPayload(_))
        ));
        // A mime smuggling the marker would not survive a re-parse.
        assert!(matches!(
            ImagePayload::from_bytes("image/png;base64,", &[1]),
            Err(Error::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_decoded_len_padding_cases() {
        // One, two and three input bytes cover both padding widths.
        for len in [1usize, 2, 3, 4, 5] {
            let bytes = vec![0xABu8; len];
            let payload = ImagePayload::from_bytes("image/png", &bytes).expect("build failed");
            assert_eq!(payload.decoded_len(), len, "wrong length for {} bytes", len);
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        let payload = ImagePayload::from_bytes("image/jpeg", &[1, 2, 3]).expect("build failed");
        assert_eq!(format!("{}", payload), payload.as_str());
    }
}
