use std::{io, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ConfigurationError {
    #[error("Failed to load configuration file \"{}\".", .file_path.display())]
    #[diagnostic(code(herald::configuration::load))]
    FileLoadError {
        file_path: PathBuf,
        #[source]
        error: io::Error,
    },

    #[error(
        "Failed to parse configuration file \
        \"{}\" as TOML: {}.", .file_path.display(), .error
    )]
    #[diagnostic(code(herald::configuration::format))]
    FileFormatError {
        file_path: PathBuf,
        error: Box<toml::de::Error>,
    },

    #[error("Failed to parse configuration as TOML: {error}.")]
    #[diagnostic(code(herald::configuration::format))]
    InlineFormatError { error: Box<toml::de::Error> },

    #[error("Invalid value for \"{key}\": {reason}.")]
    #[diagnostic(
        code(herald::configuration::value),
        help("Check the corresponding entry in your configuration file.")
    )]
    InvalidValue { key: &'static str, reason: String },
}
