// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the catalog layer and the ambient plumbing.
///
/// The catalog-facing variants mirror the failure taxonomy of the photo
/// service: a transport/status failure, an unparsable body, or a body
/// that parses but contains no photos.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The photo service request failed or returned a non-2xx status.
    Network {
        /// HTTP status code, when a response was received at all.
        status: Option<u16>,
        message: String,
    },
    /// The response body was not valid JSON or was missing required fields.
    Parse(String),
    /// The catalog parsed cleanly but contained zero photos.
    EmptyCatalog,
    Config(String),
    Io(String),
}

impl Error {
    /// Returns the i18n message key for the user-facing description of
    /// this error. Technical details stay in `Display`.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Network { .. } => "error-catalog-network",
            Error::Parse(_) => "error-catalog-parse",
            Error::EmptyCatalog => "error-catalog-empty",
            Error::Config(_) => "error-config",
            Error::Io(_) => "error-io",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Network {
                status: Some(code),
                message,
            } => write!(f, "Network Error (HTTP {}): {}", code, message),
            Error::Network {
                status: None,
                message,
            } => write!(f, "Network Error: {}", message),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
            Error::EmptyCatalog => write!(f, "Catalog is empty"),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
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
    fn display_formats_network_error_with_status() {
        let err = Error::Network {
            status: Some(500),
            message: "internal server error".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Network Error (HTTP 500): internal server error"
        );
    }

    #[test]
    fn display_formats_network_error_without_status() {
        let err = Error::Network {
            status: None,
            message: "connection refused".to_string(),
        };
        assert_eq!(format!("{}", err), "Network Error: connection refused");
    }

    #[test]
    fn from_serde_json_error_produces_parse_variant() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Parse(_)));
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
    fn i18n_keys_are_distinct_per_variant() {
        let keys = [
            Error::Network {
                status: None,
                message: String::new(),
            }
            .i18n_key(),
            Error::Parse(String::new()).i18n_key(),
            Error::EmptyCatalog.i18n_key(),
            Error::Config(String::new()).i18n_key(),
            Error::Io(String::new()).i18n_key(),
        ];
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
    }
}
