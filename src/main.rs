use std::path::PathBuf;
use std::process::exit;
use std::rc::Rc;

use clap::{Args, Parser, Subcommand};
use herald_configuration::Configuration;
use miette::{miette, Context, Result};

use crate::commands::BroadcastPlan;
use crate::console::backends::BareTerminalBackend;
use crate::console::{LogToFileBackend, TerminalBackend};
use crate::globals::{is_verbose_enabled, VERBOSE};

mod commands;
mod console;
mod globals;

pub const HERALD_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Subcommand)]
enum CLICommand {
    #[command(
        name = "demo",
        about = "Run the scripted demo: five observers come and go while a subject broadcasts three messages."
    )]
    Demo(DemoArgs),

    #[command(
        name = "broadcast",
        about = "Attach a number of observers to a subject and broadcast the given messages to them."
    )]
    Broadcast(BroadcastArgs),

    #[command(
        name = "show-config",
        about = "Loads, validates and prints the current configuration."
    )]
    ShowConfig,
}

#[derive(Args)]
struct DemoArgs {
    #[arg(
        long = "log-to-file",
        help = "Path to the log file. If this is unset, the configured default is used (if any)."
    )]
    log_to_file: Option<PathBuf>,
}

#[derive(Args)]
struct BroadcastArgs {
    #[arg(
        short = 'n',
        long = "observers",
        default_value_t = 3,
        help = "How many observers to attach to the subject."
    )]
    observers: u32,

    #[arg(
        short = 'd',
        long = "detach",
        help = "Number of an observer to detach before broadcasting. Can be repeated."
    )]
    detach: Vec<u32>,

    #[arg(
        long = "business-logic",
        help = "After the messages, let the subject run its business logic (broadcasting the configured business logic message)."
    )]
    business_logic: bool,

    #[arg(
        long = "log-to-file",
        help = "Path to the log file. If this is unset, the configured default is used (if any)."
    )]
    log_to_file: Option<PathBuf>,

    #[arg(
        help = "Messages to broadcast, in order. Without any, the configured default message is broadcast."
    )]
    messages: Vec<String>,
}

#[derive(Parser)]
#[command(
    name = "herald",
    about = "Subject/observer message broadcasting, on the console.",
    long_about = "herald demonstrates the observer protocol: a subject keeps a list of attached observers \
                  and pushes every new message to all of them, in the order they attached. \
                  Observers attach themselves when created and detach themselves when they go away.",
    version
)]
struct CLIArgs {
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        help = "Optionally a path to your configuration file. Without this option, \
                herald tries to load ./data/configuration.toml (relative to the binary) \
                and falls back to built-in defaults if there is no such file."
    )]
    config: Option<PathBuf>,

    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        help = "Increase the verbosity of output."
    )]
    verbose: bool,

    #[command(subcommand)]
    command: CLICommand,
}


/// Load and return the configuration, given the command line arguments
/// (`-c`/`--config` can override the load path).
fn get_configuration(args: &CLIArgs) -> Result<Configuration> {
    match &args.config {
        Some(configuration_path) => {
            Configuration::load_from_path(configuration_path)
        }
        None => Configuration::load_default_path(),
    }
}

/// Initializes the bare terminal backend, optionally saving its output to a log file
/// (the `--log-to-file` argument takes precedence over the configured default).
fn prepare_terminal(
    config: &Configuration,
    log_to_file: Option<PathBuf>,
) -> Result<Rc<BareTerminalBackend>> {
    let mut terminal =
        BareTerminalBackend::new(config.ui.coloured_output, is_verbose_enabled());

    if let Some(log_file_path) =
        log_to_file.or_else(|| config.logging.default_log_output_path.clone())
    {
        terminal
            .enable_saving_logs_to_file(log_file_path)
            .wrap_err_with(|| miette!("Failed to enable logging to disk."))?;
    }

    terminal
        .setup()
        .wrap_err_with(|| miette!("Failed to set up terminal backend."))?;

    Ok(Rc::new(terminal))
}

/// Takes back sole ownership of the terminal backend and destroys it.
/// Every subject and observer created by a command must be gone by now.
fn destroy_terminal(terminal: Rc<BareTerminalBackend>) -> Result<()> {
    let mut terminal = Rc::try_unwrap(terminal).map_err(|_| {
        miette!("Terminal backend is still in use by a subject or observer.")
    })?;

    terminal
        .destroy()
        .wrap_err_with(|| miette!("Failed to destroy terminal backend."))
}

/// Initializes the terminal backend and executes the given CLI command.
fn run_requested_cli_command(
    args: CLIArgs,
    config: &Configuration,
) -> Result<()> {
    match args.command {
        CLICommand::Demo(demo_args) => {
            let terminal = prepare_terminal(config, demo_args.log_to_file)?;

            commands::cmd_demo(config, &terminal);

            destroy_terminal(terminal)
        }
        CLICommand::Broadcast(broadcast_args) => {
            let terminal =
                prepare_terminal(config, broadcast_args.log_to_file)?;

            commands::cmd_broadcast(
                config,
                &terminal,
                BroadcastPlan {
                    observer_count: broadcast_args.observers,
                    detach_numbers: broadcast_args.detach,
                    messages: broadcast_args.messages,
                    run_business_logic: broadcast_args.business_logic,
                },
            );

            destroy_terminal(terminal)
        }
        CLICommand::ShowConfig => {
            let mut terminal = BareTerminalBackend::new(
                config.ui.coloured_output,
                is_verbose_enabled(),
            );
            terminal.setup().wrap_err_with(|| {
                miette!("Failed to set up terminal backend.")
            })?;
            let terminal = Rc::new(terminal);

            commands::cmd_show_config(config, &terminal);

            destroy_terminal(terminal)
        }
    }
}

/// Entry function for `herald`.
///
/// Parses CLI arguments, loads the configuration file and starts executing the requested command.
fn main() -> Result<()> {
    let args = CLIArgs::parse();
    VERBOSE.set(args.verbose);

    let configuration = get_configuration(&args)
        .wrap_err_with(|| miette!("Could not load configuration."))?;

    match run_requested_cli_command(args, &configuration) {
        Ok(_) => exit(0),
        Err(error) => {
            eprintln!("{:?}", error);
            exit(1);
        }
    }
}
