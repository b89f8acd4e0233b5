use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::{MessageObserver, MessageSubject, Notice, ObserverNumber, Subject};

/// Observer that stores the last message it received from its subject.
///
/// An `Observer` is bound to exactly one [`Subject`] for its entire life:
/// - it attaches itself in [`Observer::new`],
/// - it can detach itself at any time with [`Observer::detach`] (repeated calls are no-ops),
/// - if it is dropped while still attached, it detaches itself first.
///
/// The observer keeps its subject alive, so a subject outlives all of its observers.
pub struct Observer {
    subject: Rc<Subject>,

    number: ObserverNumber,

    last_message: RefCell<String>,

    /// Our own address, as stored in the subject's observer list.
    self_reference: Weak<dyn MessageObserver>,
}

impl Observer {
    /// Create a new observer and attach it to `subject`.
    ///
    /// The observer takes the next number from the subject's [`ObserverNumbering`](crate::ObserverNumbering).
    pub fn new(subject: &Rc<Subject>) -> Rc<Self> {
        let observer = Rc::new_cyclic(|weak_self: &Weak<Observer>| {
            let self_reference: Weak<dyn MessageObserver> = weak_self.clone();
            subject.attach(self_reference.clone());

            Self {
                subject: subject.clone(),
                number: subject.numbering().next_number(),
                last_message: RefCell::new(String::new()),
                self_reference,
            }
        });

        let sink = observer.subject.sink();
        sink.emit(Notice::ObserverAttached {
            number: observer.number,
        });
        sink.emit(Notice::ObserverCreated {
            number: observer.number,
        });

        observer
    }

    /// Remove this observer from its subject.
    ///
    /// Returns `true` if the observer was attached. Detaching an already-detached
    /// observer does nothing and returns `false`.
    pub fn detach(&self) -> bool {
        let was_attached = self.subject.detach(&self.self_reference) > 0;

        if was_attached {
            self.subject.sink().emit(Notice::ObserverDetached {
                number: self.number,
            });
        }

        was_attached
    }

    pub fn is_attached(&self) -> bool {
        self.subject.is_attached(&self.self_reference)
    }

    pub fn number(&self) -> ObserverNumber {
        self.number
    }

    /// The last message received from the subject (empty if none yet).
    pub fn last_message(&self) -> String {
        self.last_message.borrow().clone()
    }

    pub fn subject(&self) -> &Rc<Subject> {
        &self.subject
    }

    /// Weak reference to this observer, usable with [`MessageSubject::attach`]/[`MessageSubject::detach`].
    pub fn as_weak(&self) -> Weak<dyn MessageObserver> {
        self.self_reference.clone()
    }
}

impl MessageObserver for Observer {
    fn update(&self, message: &str) {
        *self.last_message.borrow_mut() = message.to_string();

        self.subject.sink().emit(Notice::MessageReceived {
            number: self.number,
            message: message.to_string(),
        });
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        if self.subject.detach(&self.self_reference) > 0 {
            self.subject.sink().emit(Notice::ObserverDetachedOnDrop {
                number: self.number,
            });
        }

        self.subject.sink().emit(Notice::ObserverDropped {
            number: self.number,
        });
    }
}
