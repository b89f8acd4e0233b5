use std::path::PathBuf;

use chrono::Local;
use serde::Deserialize;

use crate::traits::ResolvableConfiguration;
use crate::utilities::get_running_executable_directory;


#[derive(Clone, Debug)]
pub struct LoggingConfiguration {
    pub default_log_output_path: Option<PathBuf>,
}


#[derive(Deserialize, Clone, Default)]
#[serde(default)]
pub(crate) struct UnresolvedLoggingConfiguration {
    default_log_output_path: Option<PathBuf>,
}


impl ResolvableConfiguration for UnresolvedLoggingConfiguration {
    type Resolved = LoggingConfiguration;

    fn resolve(self) -> miette::Result<Self::Resolved> {
        let Some(output_path) = self.default_log_output_path else {
            return Ok(LoggingConfiguration {
                default_log_output_path: None,
            });
        };

        let mut path_as_string = output_path.to_string_lossy().to_string();

        if path_as_string.contains("{SELF}") {
            let executable_directory = get_running_executable_directory()?
                .to_string_lossy()
                .to_string();

            path_as_string = path_as_string.replace("{SELF}", &executable_directory);
        }

        let formatted_time_now = Local::now().format("%Y-%m-%d_%H-%M-%S");
        let path_as_string =
            path_as_string.replace("{DATETIME}", &formatted_time_now.to_string());

        Ok(LoggingConfiguration {
            default_log_output_path: Some(PathBuf::from(path_as_string)),
        })
    }
}
