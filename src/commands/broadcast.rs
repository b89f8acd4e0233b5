use std::rc::Rc;

use herald_configuration::Configuration;
use herald_library::{Observer, Subject};

use crate::commands::subject_settings_from_configuration;
use crate::console::backends::BareTerminalBackend;
use crate::console::LogBackend;

/// What `herald broadcast` should do, as parsed from the command line.
pub struct BroadcastPlan {
    /// How many observers to attach to the subject.
    pub observer_count: u32,

    /// Numbers of observers to detach before the first broadcast.
    pub detach_numbers: Vec<u32>,

    /// Messages to broadcast, in order. If empty, the default message is broadcast once.
    pub messages: Vec<String>,

    /// Whether to finish with the subject's business logic broadcast.
    pub run_business_logic: bool,
}

/// Create a subject with the requested observers, detach some of them, broadcast the given messages
/// and print what every observer ended up with.
pub fn cmd_broadcast(
    config: &Configuration,
    terminal: &Rc<BareTerminalBackend>,
    plan: BroadcastPlan,
) {
    terminal.log_header("Attaching observers");

    let subject = Subject::with_settings(
        terminal.clone(),
        subject_settings_from_configuration(config),
    );

    let observers: Vec<Rc<Observer>> = (0..plan.observer_count)
        .map(|_| Observer::new(&subject))
        .collect();

    if !plan.detach_numbers.is_empty() {
        terminal.log_header("Detaching observers");

        for number in &plan.detach_numbers {
            let observer = observers
                .iter()
                .find(|observer| observer.number().get() == *number);

            match observer {
                Some(observer) => {
                    if !observer.detach() {
                        terminal.log_warning(format!(
                            "Observer \"{number}\" was already detached."
                        ));
                    }
                }
                None => terminal.log_warning(format!(
                    "There is no observer numbered \"{number}\"."
                )),
            }
        }
    }

    terminal.log_header("Broadcasting");

    if plan.messages.is_empty() {
        subject.create_default_message();
    } else {
        for message in plan.messages {
            subject.create_message(message);
        }
    }

    if plan.run_business_logic {
        subject.some_business_logic();
    }

    terminal.log_header("Summary");
    terminal.log_println(format!(
        "{} of {} observers still attached.",
        subject.observer_count(),
        observers.len(),
    ));

    for observer in &observers {
        let last_message = observer.last_message();
        let last_message = if last_message.is_empty() {
            "(nothing)".to_string()
        } else {
            last_message
        };

        terminal.log_println(format!(
            "  Observer \"{}\" ({}) last received: {}",
            observer.number(),
            if observer.is_attached() {
                "attached"
            } else {
                "detached"
            },
            last_message,
        ));
    }

    terminal.log_newline();

    // Observers go first, in reverse creation order; the subject is dropped with the last one.
    drop(subject);
    for observer in observers.into_iter().rev() {
        drop(observer);
    }
}
