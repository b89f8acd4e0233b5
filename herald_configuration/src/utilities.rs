use std::env::args;
use std::path::{Path, PathBuf};

use miette::{miette, Context, IntoDiagnostic, Result};

/// Inspect the first command line argument to find out the directory the program resides in.
///
/// When running from cargo's debug target directory (`./target/debug`), this returns the
/// project directory instead, but only if that directory contains `Cargo.toml`:
///
///  <project directory>
///  |-- target
///  |   |-- debug
///  |       |- herald(.exe)
///  |- Cargo.toml
///  |- data
///      |- configuration.toml
pub fn get_running_executable_directory() -> Result<PathBuf> {
    let current_args = args()
        .next()
        .ok_or_else(|| miette!("Could not get first commandline argument!"))?;

    let executable_directory = dunce::canonicalize(current_args)
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!("Could not canonicalize running executable path.")
        })?
        .parent()
        .ok_or_else(|| miette!("Could not get executable's directory."))?
        .to_path_buf();

    Ok(escape_cargo_target_directory(&executable_directory)
        .unwrap_or(executable_directory))
}

/// Given `<project>/target/debug`, returns `<project>` if it contains `Cargo.toml`.
fn escape_cargo_target_directory(directory: &Path) -> Option<PathBuf> {
    if directory.file_name()? != "debug" {
        return None;
    }

    let target_directory = directory.parent()?;
    if target_directory.file_name()? != "target" {
        return None;
    }

    let project_directory = target_directory.parent()?;
    project_directory
        .join("Cargo.toml")
        .exists()
        .then(|| project_directory.to_path_buf())
}

/// Returns the default configuration filepath (`./data/configuration.toml` next to the executable),
/// or `None` if there is no such file.
pub fn get_default_configuration_file_path() -> Result<Option<PathBuf>> {
    let mut configuration_filepath = get_running_executable_directory()
        .wrap_err_with(|| miette!("Could not get the executable directory."))?;
    configuration_filepath.push("data");
    configuration_filepath.push("configuration.toml");

    if !configuration_filepath.exists() {
        return Ok(None);
    }

    let configuration_filepath = dunce::canonicalize(configuration_filepath)
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!("Could not canonicalize the configuration.toml file path.")
        })?;

    Ok(Some(configuration_filepath))
}
