// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Gallery(GalleryError),
    Storage(StorageError),
}

/// Failures raised while fetching a page or an image from the remote gallery.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// The network is unreachable or the connection was refused.
    NoConnection,

    /// The request did not complete within the configured budget.
    Timeout,

    /// The server answered with a non-2xx status code.
    HttpStatus(u16),

    /// The body could not be decoded as the expected JSON shape.
    MalformedResponse(String),

    /// Any other transport failure (invalid URL, TLS, redirect loop...).
    Request(String),
}

impl GalleryError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GalleryError::NoConnection => "error-gallery-no-connection",
            GalleryError::Timeout => "error-gallery-timeout",
            GalleryError::HttpStatus(500 | 503) => "error-gallery-server-unavailable",
            GalleryError::HttpStatus(404) => "error-gallery-not-found",
            GalleryError::HttpStatus(401 | 403) => "error-gallery-unauthorized",
            GalleryError::HttpStatus(_) => "error-gallery-http-status",
            GalleryError::MalformedResponse(_) => "error-gallery-malformed",
            GalleryError::Request(_) => "error-gallery-request",
        }
    }

    /// Whether retrying later could plausibly succeed without user action.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GalleryError::NoConnection
                | GalleryError::Timeout
                | GalleryError::HttpStatus(500..=599)
        )
    }

    /// Classifies a reqwest failure into the gallery taxonomy.
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            GalleryError::Timeout
        } else if err.is_connect() {
            GalleryError::NoConnection
        } else if let Some(status) = err.status() {
            GalleryError::HttpStatus(status.as_u16())
        } else if err.is_decode() {
            GalleryError::MalformedResponse(err.to_string())
        } else {
            GalleryError::Request(err.to_string())
        }
    }
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::NoConnection => write!(f, "No internet connection"),
            GalleryError::Timeout => write!(f, "Request timeout"),
            GalleryError::HttpStatus(code) => write!(f, "HTTP status {code}"),
            GalleryError::MalformedResponse(msg) => write!(f, "Malformed response: {msg}"),
            GalleryError::Request(msg) => write!(f, "Request failed: {msg}"),
        }
    }
}

impl std::error::Error for GalleryError {}

/// Failures of the local key-value storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The stored value exists but could not be read.
    Read(String),

    /// The value could not be written.
    Write(String),

    /// The value could not be serialized or deserialized.
    Encode(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Read(msg) => write!(f, "Storage read failed: {msg}"),
            StorageError::Write(msg) => write!(f, "Storage write failed: {msg}"),
            StorageError::Encode(msg) => write!(f, "Storage encoding failed: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<GalleryError> for Error {
    fn from(err: GalleryError) -> Self {
        Error::Gallery(err)
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Storage(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn gallery_error_wraps_into_crate_error() {
        let err: Error = GalleryError::Timeout.into();
        assert!(matches!(err, Error::Gallery(GalleryError::Timeout)));
        assert_eq!(format!("{}", err), "Gallery Error: Request timeout");
    }

    #[test]
    fn storage_error_wraps_into_crate_error() {
        let err: Error = StorageError::Write("read-only".into()).into();
        assert!(format!("{}", err).contains("read-only"));
    }

    #[test]
    fn http_status_keys_distinguish_server_and_client_errors() {
        assert_eq!(
            GalleryError::HttpStatus(503).i18n_key(),
            "error-gallery-server-unavailable"
        );
        assert_eq!(
            GalleryError::HttpStatus(500).i18n_key(),
            "error-gallery-server-unavailable"
        );
        assert_eq!(
            GalleryError::HttpStatus(404).i18n_key(),
            "error-gallery-not-found"
        );
        assert_eq!(
            GalleryError::HttpStatus(401).i18n_key(),
            "error-gallery-unauthorized"
        );
        assert_eq!(
            GalleryError::HttpStatus(418).i18n_key(),
            "error-gallery-http-status"
        );
    }

    #[test]
    fn transient_errors() {
        assert!(GalleryError::NoConnection.is_transient());
        assert!(GalleryError::Timeout.is_transient());
        assert!(GalleryError::HttpStatus(502).is_transient());
        assert!(!GalleryError::HttpStatus(404).is_transient());
        assert!(!GalleryError::MalformedResponse("x".into()).is_transient());
    }
}
