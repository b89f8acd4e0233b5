use std::fmt::{Display, Formatter};

use crate::ObserverNumber;

/// A single line of human-readable output produced by subjects and observers.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Notice {
    /// An observer has been constructed (and attached to its subject).
    ObserverCreated { number: ObserverNumber },

    /// An observer has been registered with its subject.
    /// Emitted right before `ObserverCreated`; considered verbose output.
    ObserverAttached { number: ObserverNumber },

    /// An observer has received a message from its subject.
    MessageReceived {
        number: ObserverNumber,
        message: String,
    },

    /// An observer has explicitly removed itself from its subject.
    ObserverDetached { number: ObserverNumber },

    /// An observer was dropped while still attached and removed itself. Considered verbose output.
    ObserverDetachedOnDrop { number: ObserverNumber },

    /// An observer has been dropped.
    ObserverDropped { number: ObserverNumber },

    /// A subject is about to notify `count` observers.
    ObserverCount { count: usize },

    /// A subject has finished its business logic broadcast.
    BusinessLogicFinished,

    /// A subject has been dropped.
    SubjectDropped,
}

impl Notice {
    /// Whether this notice should only be shown in verbose mode.
    pub fn is_verbose(&self) -> bool {
        matches!(
            self,
            Notice::ObserverAttached { .. } | Notice::ObserverDetachedOnDrop { .. }
        )
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::ObserverCreated { number } => {
                write!(f, "Hi, I'm the Observer \"{number}\".")
            }
            Notice::ObserverAttached { number } => {
                write!(f, "Observer \"{number}\" attached to the subject.")
            }
            Notice::MessageReceived { number, message } => write!(
                f,
                "Observer \"{number}\": a new message is available --> {message}"
            ),
            Notice::ObserverDetached { number } => {
                write!(f, "Observer \"{number}\" removed from the vector.")
            }
            Notice::ObserverDetachedOnDrop { number } => write!(
                f,
                "Observer \"{number}\" was still attached when dropped, removed it from the vector."
            ),
            Notice::ObserverDropped { number } => {
                write!(f, "Goodbye, I was the Observer \"{number}\".")
            }
            Notice::ObserverCount { count } => {
                write!(f, "There are {count} observers in the vector.")
            }
            Notice::BusinessLogicFinished => {
                write!(f, "I'm about to do some thing important")
            }
            Notice::SubjectDropped => write!(f, "Goodbye, I was the Subject."),
        }
    }
}

/// Receiver of [`Notice`]s. Subjects and observers emit all of their output through this.
pub trait NoticeSink {
    /// Emit the notice to the sink (called by subjects and observers).
    fn emit(&self, notice: Notice);
}

/// A [`NoticeSink`] that discards everything.
#[derive(Default, Copy, Clone, Debug)]
pub struct SilentSink;

impl NoticeSink for SilentSink {
    fn emit(&self, _notice: Notice) {}
}
