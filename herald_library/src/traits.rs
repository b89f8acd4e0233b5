use std::rc::Weak;

/// Anything that can receive messages from a [`MessageSubject`].
pub trait MessageObserver {
    /// Receive the subject's current message (called by the subject during `notify`).
    fn update(&self, message: &str);
}

/// Anything that can broadcast messages to a set of [`MessageObserver`]s.
///
/// Observers are held as `Weak` references: the subject never keeps an observer alive.
pub trait MessageSubject {
    /// Register an observer. Registering the same observer twice is allowed
    /// and results in it being notified twice.
    fn attach(&self, observer: Weak<dyn MessageObserver>);

    /// Remove every registration of the given observer (compared by address),
    /// keeping the relative order of the remaining observers.
    ///
    /// Returns the number of removed registrations; `0` means the observer was not attached.
    fn detach(&self, observer: &Weak<dyn MessageObserver>) -> usize;

    /// Deliver the current message to every attached observer, in attachment order.
    fn notify(&self);
}

/// Compares two observer references by the address of the observer they point to.
///
/// This works even when the observer is in the middle of being dropped.
#[inline]
pub(crate) fn is_same_observer(
    first: &Weak<dyn MessageObserver>,
    second: &Weak<dyn MessageObserver>,
) -> bool {
    first.as_ptr() as *const () == second.as_ptr() as *const ()
}
