use herald_configuration::Configuration;

use crate::console::backends::BareTerminalBackend;
use crate::console::LogBackend;

pub fn cmd_show_config(config: &Configuration, terminal: &BareTerminalBackend) {
    terminal.log_header("CONFIGURATION");

    let source = match &config.configuration_file_path {
        Some(path) => path.to_string_lossy().to_string(),
        None => "built-in defaults".to_string(),
    };
    terminal.log_println(format!("(using {source})"));
    terminal.log_newline();

    terminal.log_subheader("messages");
    terminal.log_println(format!(
        "  default_message = {:?}",
        config.messages.default_message,
    ));
    terminal.log_println(format!(
        "  business_logic_message = {:?}",
        config.messages.business_logic_message,
    ));
    terminal.log_newline();

    terminal.log_subheader("logging");
    match &config.logging.default_log_output_path {
        Some(path) => terminal.log_println(format!(
            "  default_log_output_path = {}",
            path.to_string_lossy(),
        )),
        None => terminal.log_println("  default_log_output_path is unset"),
    }
    terminal.log_newline();

    terminal.log_subheader("ui");
    terminal.log_println(format!(
        "  coloured_output = {}",
        config.ui.coloured_output,
    ));
}
