use herald_configuration::Configuration;
use herald_library::SubjectSettings;

pub use broadcast::*;
pub use demo::*;
pub use show_config::*;

mod broadcast;
mod demo;
mod show_config;

/// Build the subject settings from the `[messages]` configuration section.
pub fn subject_settings_from_configuration(
    config: &Configuration,
) -> SubjectSettings {
    SubjectSettings {
        default_message: config.messages.default_message.clone(),
        business_logic_message: config.messages.business_logic_message.clone(),
    }
}
