//! Module containing the entire configuration structure for
//! the main herald configuration.

pub mod logging;
pub mod messages;
pub mod ui;

use std::fs;
use std::path::PathBuf;

use miette::{miette, Context, IntoDiagnostic, Result};
use serde::Deserialize;

use crate::error::ConfigurationError;
use crate::logging::{LoggingConfiguration, UnresolvedLoggingConfiguration};
use crate::messages::{MessagesConfiguration, UnresolvedMessagesConfiguration};
use crate::traits::{ResolvableConfiguration, ResolvableWithContextConfiguration};
use crate::ui::{UiConfiguration, UnresolvedUiConfiguration};
use crate::utilities::get_default_configuration_file_path;

/// This struct contains the entire `herald` configuration.
///
/// Every section and key is optional; anything missing takes its built-in default.
#[derive(Clone, Debug)]
pub struct Configuration {
    pub messages: MessagesConfiguration,

    pub logging: LoggingConfiguration,

    pub ui: UiConfiguration,

    /// Where this configuration was loaded from (`None` for built-in defaults and inline TOML).
    pub configuration_file_path: Option<PathBuf>,
}

#[derive(Deserialize, Clone, Default)]
#[serde(default)]
struct UnresolvedConfiguration {
    messages: UnresolvedMessagesConfiguration,

    logging: UnresolvedLoggingConfiguration,

    ui: UnresolvedUiConfiguration,
}

impl Configuration {
    pub fn load_from_path<S: Into<PathBuf>>(
        configuration_filepath: S,
    ) -> Result<Configuration> {
        let configuration_filepath = configuration_filepath.into();

        // Read the configuration file into memory.
        let configuration_string = fs::read_to_string(&configuration_filepath)
            .map_err(|error| ConfigurationError::FileLoadError {
                file_path: configuration_filepath.clone(),
                error,
            })?;

        // Parse the string into the `Config` structure.
        let unresolved_configuration: UnresolvedConfiguration =
            toml::from_str(&configuration_string).map_err(|error| {
                ConfigurationError::FileFormatError {
                    file_path: configuration_filepath.clone(),
                    error: Box::new(error),
                }
            })?;

        let configuration_file_path = dunce::canonicalize(&configuration_filepath)
            .into_diagnostic()
            .wrap_err_with(|| {
                miette!("Could not canonicalize configuration file path.")
            })?;

        // Resolve the configuration into its final state.
        unresolved_configuration.resolve(Some(configuration_file_path))
    }

    /// Load `./data/configuration.toml` next to the executable, falling back to
    /// the built-in defaults if that file does not exist.
    pub fn load_default_path() -> Result<Configuration> {
        let default_path = get_default_configuration_file_path().wrap_err_with(|| {
            miette!("Could not get default configuration file path.")
        })?;

        match default_path {
            Some(path) => Configuration::load_from_path(path),
            None => Configuration::built_in(),
        }
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(configuration_string: &str) -> Result<Configuration> {
        let unresolved_configuration: UnresolvedConfiguration =
            toml::from_str(configuration_string).map_err(|error| {
                ConfigurationError::InlineFormatError {
                    error: Box::new(error),
                }
            })?;

        unresolved_configuration.resolve(None)
    }

    /// The configuration used when no configuration file is available.
    pub fn built_in() -> Result<Configuration> {
        UnresolvedConfiguration::default().resolve(None)
    }
}

impl ResolvableWithContextConfiguration for UnresolvedConfiguration {
    type Resolved = Configuration;
    type Context = Option<PathBuf>;

    fn resolve(
        self,
        configuration_file_path: Option<PathBuf>,
    ) -> Result<Self::Resolved> {
        let messages = self.messages.resolve()?;
        let logging = self.logging.resolve()?;
        let ui = self.ui.resolve()?;

        Ok(Configuration {
            messages,
            logging,
            ui,
            configuration_file_path,
        })
    }
}
