use std::{
    env::args,
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::Path,
};

use chrono::Local;
use miette::{miette, Context, IntoDiagnostic, Result};
use strip_ansi_escapes::Writer as StripAnsiWriter;

use crate::HERALD_VERSION;

/// Prepares the log file for log output.
/// This involves opening the file for writing (creating it and its parent directories if necessary).
/// If the file already exists, it is opened in append mode.
///
/// A small invocation header is written to the log file before the writer
/// handle is returned. Everything written through the handle has its ANSI escapes stripped.
pub fn initialize_log_file_for_log_output(
    log_output_file_path: &Path,
) -> Result<BufWriter<StripAnsiWriter<File>>> {
    if let Some(log_output_directory_path) = log_output_file_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        if log_output_directory_path.exists()
            && !log_output_directory_path.is_dir()
        {
            return Err(miette!("Invalid log file path: parent directory path is actually not a directory."));
        }

        if !log_output_directory_path.exists() {
            fs::create_dir_all(log_output_directory_path)
                .into_diagnostic()
                .wrap_err_with(|| {
                    miette!("Failed to create log file parent directory.")
                })?;
        }
    }

    let output_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_output_file_path)
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!(
                "Failed to open log output file for appending: {:?}",
                log_output_file_path
            )
        })?;

    let ansi_escaping_writer = StripAnsiWriter::new(output_file);
    let mut buf_writer = BufWriter::with_capacity(1024, ansi_escaping_writer);

    // Write an "invocation header", marking the start of this run.
    let formatted_time_now = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

    buf_writer
        .write_all(
            format!(
                "{} Hello from herald {}. Started with arguments: {:?}\n",
                formatted_time_now,
                HERALD_VERSION,
                args().collect::<Vec<_>>()
            )
            .as_bytes(),
        )
        .into_diagnostic()
        .wrap_err_with(|| {
            miette!("Could not write invocation header to file.")
        })?;

    Ok(buf_writer)
}
