//! Error type definitions
//!
//! Two taxonomies: `Error` covers file ingestion and payload handling and
//! doubles as the source of the user-facing alert strings; `GenerateError`
//! is the typed failure of a generation call.

use thiserror::Error;

/// Ingestion and payload errors.
///
/// The `Display` strings are shown verbatim in the blocking alert a
/// rejected upload triggers, so they are phrased for the user.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please select a valid image file (\"{0}\" is not an image)")]
    NotAnImage(String),

    #[error("Unsupported image format \"{0}\": please use a JPEG or PNG photo")]
    UnsupportedImageType(String),

    #[error("File size must be less than 10MB ({0} bytes)")]
    FileTooLarge(u64),

    #[error("Malformed image payload: {0}")]
    MalformedPayload(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Typed failure of a personalization call.
///
/// Whatever the variant, the controller converts it to the fixed
/// user-facing message before entering the error screen; the variant itself
/// goes to the console log.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("personalization service returned status {status}")]
    Backend { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response from personalization service: {0}")]
    InvalidResponse(String),

    #[error("personalization timed out")]
    TimedOut,
}

/// Result alias for ingestion/payload operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_an_image() {
        let error = Error::NotAnImage("text/plain".to_string());
        let display = format!("{}", error);
        assert!(display.contains("valid image file"));
        assert!(display.contains("text/plain"));
    }

    #[test]
    fn test_error_display_unsupported_image_type() {
        let error = Error::UnsupportedImageType("image/gif".to_string());
        let display = format!("{}", error);
        assert!(display.contains("image/gif"));
        assert!(display.contains("JPEG or PNG"));
    }

    #[test]
    fn test_error_display_file_too_large() {
        let error = Error::FileTooLarge(10_485_761);
        let display = format!("{}", error);
        assert!(display.contains("less than 10MB"));
        assert!(display.contains("10485761"));
    }

    #[test]
    fn test_error_display_malformed_payload() {
        let error = Error::MalformedPayload("missing data: prefix".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Malformed image payload"));
        assert!(display.contains("missing data: prefix"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_display_nonempty() {
        let errors = vec![
            Error::NotAnImage("application/pdf".to_string()),
            Error::UnsupportedImageType("image/webp".to_string()),
            Error::FileTooLarge(20_000_000),
            Error::MalformedPayload("no comma".to_string()),
        ];

        for error in errors {
            let display = format!("{}", error);
            assert!(!display.is_empty(), "empty message for: {:?}", error);
        }
    }

    #[test]
    fn test_generate_error_display() {
        assert_eq!(
            format!("{}", GenerateError::Backend { status: 503 }),
            "personalization service returned status 503"
        );
        assert_eq!(
            format!("{}", GenerateError::TimedOut),
            "personalization timed out"
        );

        let network = format!("{}", GenerateError::Network("fetch rejected".to_string()));
        assert!(network.contains("fetch rejected"));

        let invalid = format!("{}", GenerateError::InvalidResponse("not a data URL".to_string()));
        assert!(invalid.contains("not a data URL"));
    }

    #[test]
    fn test_generate_error_eq() {
        assert_eq!(GenerateError::TimedOut, GenerateError::TimedOut);
        assert_ne!(
            GenerateError::Backend { status: 500 },
            GenerateError::Backend { status: 404 }
        );
    }
}
