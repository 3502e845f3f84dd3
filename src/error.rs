// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors surfaced by the I/O boundary of the frontend: loading the settings
/// file, a theme directory, or a catalog file.
///
/// The carousel engine itself has no error type; missing or malformed theme
/// attributes silently fall back to defaults.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Theme(String),
    Catalog(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Theme(e) => write!(f, "Theme Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
        }
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
