use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::traits::is_same_observer;
use crate::{MessageObserver, MessageSubject, Notice, NoticeSink, ObserverNumbering};

pub const DEFAULT_MESSAGE: &str = "Empty";
pub const DEFAULT_BUSINESS_LOGIC_MESSAGE: &str = "change message message";

/// Messages a [`Subject`] falls back to when the caller does not provide one.
#[derive(Clone, Debug)]
pub struct SubjectSettings {
    /// Message used by [`Subject::create_default_message`].
    pub default_message: String,

    /// Message broadcast by [`Subject::some_business_logic`].
    pub business_logic_message: String,
}

impl Default for SubjectSettings {
    fn default() -> Self {
        Self {
            default_message: DEFAULT_MESSAGE.to_string(),
            business_logic_message: DEFAULT_BUSINESS_LOGIC_MESSAGE.to_string(),
        }
    }
}

/// Broadcasts its current message to every attached observer.
///
/// Subjects are always handled through an `Rc`: each [`Observer`](crate::Observer)
/// keeps its subject alive, while the subject only holds `Weak` references to observers.
///
/// ## Membership changes during notification
/// `notify` walks a snapshot of the observer list and re-checks membership before every delivery,
/// so an observer may attach or detach (itself or others) from inside `update`:
/// - an observer detached mid-notification does not receive the rest of that notification,
/// - an observer attached mid-notification is first notified on the next `notify`.
pub struct Subject {
    observers: RefCell<Vec<Weak<dyn MessageObserver>>>,

    message: RefCell<String>,

    settings: SubjectSettings,

    numbering: Rc<ObserverNumbering>,

    sink: Rc<dyn NoticeSink>,
}

impl Subject {
    /// Create a subject with default settings and its own observer numbering.
    pub fn new(sink: Rc<dyn NoticeSink>) -> Rc<Self> {
        Self::with_settings(sink, SubjectSettings::default())
    }

    pub fn with_settings(
        sink: Rc<dyn NoticeSink>,
        settings: SubjectSettings,
    ) -> Rc<Self> {
        Self::with_numbering(sink, settings, Rc::new(ObserverNumbering::new()))
    }

    /// Create a subject whose observers are numbered from the given (possibly shared) sequence.
    pub fn with_numbering(
        sink: Rc<dyn NoticeSink>,
        settings: SubjectSettings,
        numbering: Rc<ObserverNumbering>,
    ) -> Rc<Self> {
        Rc::new(Self {
            observers: RefCell::new(Vec::new()),
            message: RefCell::new(String::new()),
            settings,
            numbering,
            sink,
        })
    }

    /// Set the current message and notify all attached observers.
    pub fn create_message<S: Into<String>>(&self, message: S) {
        *self.message.borrow_mut() = message.into();
        self.notify();
    }

    /// Same as `create_message`, using the configured default message (`"Empty"` unless configured).
    pub fn create_default_message(&self) {
        self.create_message(self.settings.default_message.clone());
    }

    /// Broadcast the business logic message, then announce the upcoming "important" work.
    pub fn some_business_logic(&self) {
        self.create_message(self.settings.business_logic_message.clone());
        self.sink.emit(Notice::BusinessLogicFinished);
    }

    /// Current message (empty until the first `create_message`).
    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    /// Number of attached observers that are still alive.
    /// An observer attached twice counts twice.
    pub fn observer_count(&self) -> usize {
        self.observers
            .borrow()
            .iter()
            .filter(|observer| observer.strong_count() > 0)
            .count()
    }

    /// Whether the given observer currently has at least one registration.
    pub fn is_attached(&self, observer: &Weak<dyn MessageObserver>) -> bool {
        self.observers
            .borrow()
            .iter()
            .any(|attached| is_same_observer(attached, observer))
    }

    pub fn settings(&self) -> &SubjectSettings {
        &self.settings
    }

    pub fn numbering(&self) -> &Rc<ObserverNumbering> {
        &self.numbering
    }

    pub(crate) fn sink(&self) -> &Rc<dyn NoticeSink> {
        &self.sink
    }

    /// Drop registrations of observers that no longer exist.
    fn prune_dead_observers(&self) {
        self.observers
            .borrow_mut()
            .retain(|observer| observer.strong_count() > 0);
    }
}

impl MessageSubject for Subject {
    fn attach(&self, observer: Weak<dyn MessageObserver>) {
        self.observers.borrow_mut().push(observer);
    }

    fn detach(&self, observer: &Weak<dyn MessageObserver>) -> usize {
        let mut observers = self.observers.borrow_mut();

        let count_before = observers.len();
        observers.retain(|attached| !is_same_observer(attached, observer));

        count_before - observers.len()
    }

    fn notify(&self) {
        let snapshot = self.observers.borrow().clone();
        let message = self.message();

        self.sink.emit(Notice::ObserverCount {
            count: self.observer_count(),
        });

        let mut found_dead_observer = false;

        for observer in &snapshot {
            if !self.is_attached(observer) {
                continue;
            }

            match observer.upgrade() {
                Some(observer) => observer.update(&message),
                None => found_dead_observer = true,
            }
        }

        if found_dead_observer {
            self.prune_dead_observers();
        }
    }
}

impl Drop for Subject {
    fn drop(&mut self) {
        self.sink.emit(Notice::SubjectDropped);
    }
}
