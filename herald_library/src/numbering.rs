use std::cell::Cell;
use std::fmt::{Display, Formatter};

/// Display identifier of an [`Observer`](crate::Observer), handed out by [`ObserverNumbering`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ObserverNumber(u32);

impl ObserverNumber {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Display for ObserverNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ObserverNumber> for u32 {
    fn from(number: ObserverNumber) -> Self {
        number.0
    }
}

/// Monotonically increasing counter for observer numbers.
///
/// Every subject owns one. To number observers across several subjects
/// from a single sequence, construct the subjects with a shared `Rc<ObserverNumbering>`.
#[derive(Default, Debug)]
pub struct ObserverNumbering {
    last_issued: Cell<u32>,
}

impl ObserverNumbering {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter and return the new value. The first number issued is `1`.
    pub fn next_number(&self) -> ObserverNumber {
        let next = self.last_issued.get().saturating_add(1);
        self.last_issued.set(next);

        ObserverNumber(next)
    }

    /// The most recently issued number, if any.
    pub fn last_issued(&self) -> Option<ObserverNumber> {
        match self.last_issued.get() {
            0 => None,
            last => Some(ObserverNumber(last)),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_start_at_one_and_increase() {
        let numbering = ObserverNumbering::new();
        assert_eq!(numbering.last_issued(), None);

        let first = numbering.next_number();
        let second = numbering.next_number();
        let third = numbering.next_number();

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
        assert_eq!(third.get(), 3);
        assert!(first < second && second < third);
        assert_eq!(numbering.last_issued(), Some(third));
    }

    #[test]
    fn number_displays_as_plain_integer() {
        let numbering = ObserverNumbering::new();
        numbering.next_number();

        assert_eq!(numbering.next_number().to_string(), "2");
    }
}
