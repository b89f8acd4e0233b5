use std::rc::Rc;

use herald_configuration::Configuration;
use herald_library::{Observer, Subject};

use crate::commands::subject_settings_from_configuration;
use crate::console::backends::BareTerminalBackend;
use crate::console::LogBackend;

/// Run the scripted client scenario: five observers come and go
/// while the subject broadcasts three messages.
pub fn cmd_demo(config: &Configuration, terminal: &Rc<BareTerminalBackend>) {
    terminal.log_header("Observer demo");

    let subject = Subject::with_settings(
        terminal.clone(),
        subject_settings_from_configuration(config),
    );

    let observer1 = Observer::new(&subject);
    let observer2 = Observer::new(&subject);
    let observer3 = Observer::new(&subject);

    subject.create_message("Hello World! :D");
    observer3.detach();

    subject.create_message("The weather is hot today! :p");
    let observer4 = Observer::new(&subject);

    observer2.detach();
    let observer5 = Observer::new(&subject);

    subject.create_message("My new car is great! ;)");
    observer5.detach();

    observer4.detach();
    observer1.detach();

    terminal.log_newline();

    drop(observer5);
    drop(observer4);
    drop(observer3);
    drop(observer2);
    drop(observer1);
    drop(subject);
}
