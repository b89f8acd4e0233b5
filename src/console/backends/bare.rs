use std::cell::RefCell;
use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crossterm::style::Stylize;
use herald_library::{Notice, NoticeSink};
use miette::{IntoDiagnostic, Result};
use strip_ansi_escapes::Writer;

use crate::console::logging::initialize_log_file_for_log_output;
use crate::console::{LogBackend, LogToFileBackend, TerminalBackend};

/// A bare-bones backend that simply linearly logs all activity to the console
/// (and, optionally, into a log file).
///
/// Subjects and observers print through this backend by using it as their `NoticeSink`.
pub struct BareTerminalBackend {
    log_file_output: RefCell<Option<BufWriter<Writer<File>>>>,

    coloured_output: bool,

    show_verbose_notices: bool,
}

impl BareTerminalBackend {
    pub fn new(coloured_output: bool, show_verbose_notices: bool) -> Self {
        Self {
            log_file_output: RefCell::new(None),
            coloured_output,
            show_verbose_notices,
        }
    }

    /// Print a header line, e.g. to separate the phases of a command.
    pub fn log_header<D: Display>(&self, header: D) {
        let header = format!("== {header} ==");

        if self.coloured_output {
            self.log_println(header.cyan().bold());
        } else {
            self.log_println(header);
        }
    }

    pub fn log_subheader<D: Display>(&self, subheader: D) {
        let subheader = format!("- {subheader} -");

        if self.coloured_output {
            self.log_println(subheader.cyan());
        } else {
            self.log_println(subheader);
        }
    }

    /// Print a warning line.
    pub fn log_warning<D: Display>(&self, warning: D) {
        let warning = format!("Warning: {warning}");

        if self.coloured_output {
            self.log_println(warning.dark_yellow());
        } else {
            self.log_println(warning);
        }
    }

    fn write_to_log_file(&self, content: &str) {
        let mut log_file_output = self.log_file_output.borrow_mut();

        if let Some(writer) = log_file_output.as_mut() {
            let write_result = writer
                .write_all(content.as_bytes())
                .and_then(|_| writer.write_all("\n".as_bytes()));

            if let Err(error) = write_result {
                eprintln!("Could not write to log file, disabling it: {error}");
                *log_file_output = None;
            }
        }
    }
}

impl TerminalBackend for BareTerminalBackend {
    fn setup(&mut self) -> Result<()> {
        Ok(())
    }

    fn destroy(&mut self) -> Result<()> {
        // If logging to file was enabled, we should disable it before this backend is dropped,
        // otherwise we risk failing to flush to file.
        self.disable_saving_logs_to_file()?;

        Ok(())
    }
}

impl LogBackend for BareTerminalBackend {
    fn log_newline(&self) {
        println!();
        self.write_to_log_file("");
    }

    fn log_println<D: Display>(&self, content: D) {
        let content_string = content.to_string();

        println!("{}", content_string);
        self.write_to_log_file(&content_string);
    }
}

impl LogToFileBackend for BareTerminalBackend {
    fn enable_saving_logs_to_file(
        &mut self,
        log_file_path: PathBuf,
    ) -> Result<()> {
        let buf_writer = initialize_log_file_for_log_output(&log_file_path)?;
        self.log_file_output = RefCell::new(Some(buf_writer));

        Ok(())
    }

    fn disable_saving_logs_to_file(&mut self) -> Result<()> {
        if let Some(mut buf_writer) = self.log_file_output.get_mut().take() {
            buf_writer.flush().into_diagnostic()?;
        }

        Ok(())
    }
}

impl NoticeSink for BareTerminalBackend {
    fn emit(&self, notice: Notice) {
        if notice.is_verbose() && !self.show_verbose_notices {
            return;
        }

        if !self.coloured_output {
            self.log_println(notice);
            return;
        }

        let line = notice.to_string();
        match notice {
            Notice::ObserverCreated { .. } => self.log_println(line.green()),
            Notice::MessageReceived { .. } => self.log_println(line.white()),
            Notice::ObserverDetached { .. } => self.log_println(line.yellow()),
            Notice::ObserverCount { .. } => self.log_println(line.blue()),
            Notice::BusinessLogicFinished => self.log_println(line.magenta()),
            Notice::ObserverDropped { .. } | Notice::SubjectDropped => {
                self.log_println(line.dark_grey())
            }
            Notice::ObserverAttached { .. }
            | Notice::ObserverDetachedOnDrop { .. } => {
                self.log_println(line.dark_grey().italic())
            }
        }
    }
}
