use std::fmt::{self, Debug, Display};
use std::io;
use std::path::PathBuf;

pub type Error = Box<dyn std::error::Error + Send + Sync + 'static>;

pub struct DisplayError(Error);

impl Debug for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T: Into<Error>> From<T> for DisplayError {
    fn from(display: T) -> Self {
        DisplayError(display.into())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load config from {}: {source}", .path.display())]
    LoadFailure {
        path: PathBuf,
        #[source]
        source: Error,
    },
    #[error("Found more than one default command in configuration ('{first}' and '{second}')")]
    MultipleDefaults { first: String, second: String },
    #[error("No default command in configuration, mark exactly one with \"default\": true")]
    NoDefault,
    #[error("Command '{name}' has {count} '%s' placeholders in url_with_params, expected exactly one")]
    InvalidTemplate { name: String, count: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum ResolutionError {
    #[error("No command matched and no default command is available")]
    NoDefaultAvailable,
}

pub trait IoErrorExt {
    fn applies_to(&self) -> AppliesTo;
}

impl IoErrorExt for io::Error {
    fn applies_to(&self) -> AppliesTo {
        match self.kind() {
            io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset => AppliesTo::Connection,
            _ => AppliesTo::Listener,
        }
    }
}

pub enum AppliesTo {
    Connection,
    Listener,
}
