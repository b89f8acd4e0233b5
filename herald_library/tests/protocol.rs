use std::cell::RefCell;
use std::rc::{Rc, Weak};

use herald_library::{
    MessageObserver,
    MessageSubject,
    Notice,
    NoticeSink,
    Observer,
    ObserverNumber,
    SilentSink,
    Subject,
};

#[derive(Default)]
struct RecordingSink {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingSink {
    /// Observer numbers in the order they received a message.
    fn delivery_order(&self) -> Vec<u32> {
        self.notices
            .borrow()
            .iter()
            .filter_map(|notice| match notice {
                Notice::MessageReceived { number, .. } => Some(number.get()),
                _ => None,
            })
            .collect()
    }

    fn clear(&self) {
        self.notices.borrow_mut().clear();
    }
}

impl NoticeSink for RecordingSink {
    fn emit(&self, notice: Notice) {
        self.notices.borrow_mut().push(notice);
    }
}

fn numbers(observers: &[&Rc<Observer>]) -> Vec<ObserverNumber> {
    observers.iter().map(|observer| observer.number()).collect()
}


#[test]
fn hello_world_scenario() {
    let subject = Subject::new(Rc::new(SilentSink));
    let a = Observer::new(&subject);
    let b = Observer::new(&subject);
    let c = Observer::new(&subject);

    subject.create_message("Hello World! :D");
    for observer in [&a, &b, &c] {
        assert_eq!(observer.last_message(), "Hello World! :D");
    }

    c.detach();
    subject.create_message("The weather is hot today! :p");

    assert_eq!(a.last_message(), "The weather is hot today! :p");
    assert_eq!(b.last_message(), "The weather is hot today! :p");
    assert_eq!(c.last_message(), "Hello World! :D");
    assert_eq!(subject.observer_count(), 2);
}

#[test]
fn count_tracks_attaches_minus_successful_detaches() {
    let subject = Subject::new(Rc::new(SilentSink));
    let mut observers = Vec::new();

    for expected_count in 1..=6 {
        observers.push(Observer::new(&subject));
        assert_eq!(subject.observer_count(), expected_count);
    }

    let mut expected_count = observers.len();
    for (index, observer) in observers.iter().enumerate() {
        if index % 2 == 0 {
            assert!(observer.detach());
            expected_count -= 1;

            // Repeating a detach never changes the count.
            assert!(!observer.detach());
        }

        assert_eq!(subject.observer_count(), expected_count);
    }

    assert_eq!(subject.observer_count(), 3);
}

#[test]
fn second_detach_does_not_affect_others() {
    let subject = Subject::new(Rc::new(SilentSink));
    let a = Observer::new(&subject);
    let b = Observer::new(&subject);
    let c = Observer::new(&subject);

    assert!(b.detach());
    assert!(!b.detach());
    assert!(!b.detach());

    assert!(a.is_attached());
    assert!(c.is_attached());
    assert_eq!(subject.observer_count(), 2);

    subject.create_message("after");
    assert_eq!(a.last_message(), "after");
    assert_eq!(b.last_message(), "");
    assert_eq!(c.last_message(), "after");
}

#[test]
fn notification_follows_attachment_order() {
    let sink = Rc::new(RecordingSink::default());
    let subject = Subject::new(sink.clone());

    let first = Observer::new(&subject);
    let second = Observer::new(&subject);
    let third = Observer::new(&subject);
    let fourth = Observer::new(&subject);

    second.detach();
    let fifth = Observer::new(&subject);
    sink.clear();

    subject.create_message("ordered");

    let expected: Vec<u32> = numbers(&[&first, &third, &fourth, &fifth])
        .into_iter()
        .map(ObserverNumber::get)
        .collect();
    assert_eq!(sink.delivery_order(), expected);
}

#[test]
fn dropping_attached_observer_keeps_subject_consistent() {
    let subject = Subject::new(Rc::new(SilentSink));
    let keeper = Observer::new(&subject);

    {
        let _forgetful = Observer::new(&subject);
        assert_eq!(subject.observer_count(), 2);
    }

    assert_eq!(subject.observer_count(), 1);

    subject.create_message("nothing dangling");
    assert_eq!(keeper.last_message(), "nothing dangling");
}

#[test]
fn client_scenario_transcript() {
    let sink = Rc::new(RecordingSink::default());
    let subject = Subject::new(sink.clone());

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

    drop(observer5);
    drop(observer4);
    drop(observer3);
    drop(observer2);
    drop(observer1);
    drop(subject);

    let transcript: Vec<String> = sink
        .notices
        .borrow()
        .iter()
        .filter(|notice| !notice.is_verbose())
        .map(|notice| notice.to_string())
        .collect();

    let expected = vec![
        "Hi, I'm the Observer \"1\".",
        "Hi, I'm the Observer \"2\".",
        "Hi, I'm the Observer \"3\".",
        "There are 3 observers in the vector.",
        "Observer \"1\": a new message is available --> Hello World! :D",
        "Observer \"2\": a new message is available --> Hello World! :D",
        "Observer \"3\": a new message is available --> Hello World! :D",
        "Observer \"3\" removed from the vector.",
        "There are 2 observers in the vector.",
        "Observer \"1\": a new message is available --> The weather is hot today! :p",
        "Observer \"2\": a new message is available --> The weather is hot today! :p",
        "Hi, I'm the Observer \"4\".",
        "Observer \"2\" removed from the vector.",
        "Hi, I'm the Observer \"5\".",
        "There are 3 observers in the vector.",
        "Observer \"1\": a new message is available --> My new car is great! ;)",
        "Observer \"4\": a new message is available --> My new car is great! ;)",
        "Observer \"5\": a new message is available --> My new car is great! ;)",
        "Observer \"5\" removed from the vector.",
        "Observer \"4\" removed from the vector.",
        "Observer \"1\" removed from the vector.",
        "Goodbye, I was the Observer \"5\".",
        "Goodbye, I was the Observer \"4\".",
        "Goodbye, I was the Observer \"3\".",
        "Goodbye, I was the Observer \"2\".",
        "Goodbye, I was the Observer \"1\".",
        "Goodbye, I was the Subject.",
    ];

    assert_eq!(transcript, expected);
}


/// Observer that runs a callback against its subject whenever it is notified.
struct Meddler {
    subject: Rc<Subject>,
    received: RefCell<Vec<String>>,
    on_update: Box<dyn Fn(&Subject)>,
}

impl MessageObserver for Meddler {
    fn update(&self, message: &str) {
        self.received.borrow_mut().push(message.to_string());
        (self.on_update)(&self.subject);
    }
}

fn meddler(subject: &Rc<Subject>, on_update: Box<dyn Fn(&Subject)>) -> Rc<Meddler> {
    let meddler = Rc::new(Meddler {
        subject: subject.clone(),
        received: RefCell::new(Vec::new()),
        on_update,
    });

    let weak: Weak<Meddler> = Rc::downgrade(&meddler);
    subject.attach(weak);

    meddler
}

#[test]
fn observer_detached_during_notification_misses_the_rest_of_it() {
    let subject = Subject::new(Rc::new(SilentSink));
    let victim = Observer::new(&subject);
    let victim_reference = victim.as_weak();

    let detacher = meddler(
        &subject,
        Box::new(move |subject: &Subject| {
            subject.detach(&victim_reference);
        }),
    );
    // Move the victim behind the detacher, so the detacher is notified first.
    subject.detach(&victim.as_weak());
    subject.attach(victim.as_weak());

    subject.create_message("first");

    assert_eq!(*detacher.received.borrow(), vec!["first"]);
    assert_eq!(victim.last_message(), "");
    assert!(!victim.is_attached());
    assert_eq!(subject.observer_count(), 1);
}

#[test]
fn observer_attached_during_notification_waits_for_the_next_one() {
    let subject = Subject::new(Rc::new(SilentSink));
    let late_joiner = Rc::new(RefCell::new(None::<Rc<Observer>>));

    let late_joiner_slot = late_joiner.clone();
    let subject_for_callback = subject.clone();
    let recruiter = meddler(
        &subject,
        Box::new(move |_: &Subject| {
            let mut slot = late_joiner_slot.borrow_mut();
            if slot.is_none() {
                *slot = Some(Observer::new(&subject_for_callback));
            }
        }),
    );

    subject.create_message("first");

    let joined = late_joiner
        .borrow()
        .clone()
        .expect("observer should have been created during notification");
    assert_eq!(joined.last_message(), "");
    assert_eq!(subject.observer_count(), 2);

    subject.create_message("second");
    assert_eq!(joined.last_message(), "second");
    assert_eq!(*recruiter.received.borrow(), vec!["first", "second"]);
}

#[test]
fn observer_may_detach_itself_during_notification() {
    let subject = Subject::new(Rc::new(SilentSink));
    let stay = Observer::new(&subject);

    let self_detaching: Rc<RefCell<Option<Weak<dyn MessageObserver>>>> =
        Rc::new(RefCell::new(None));
    let own_reference = self_detaching.clone();
    let once = meddler(
        &subject,
        Box::new(move |subject: &Subject| {
            if let Some(reference) = own_reference.borrow().as_ref() {
                subject.detach(reference);
            }
        }),
    );
    let once_weak: Weak<Meddler> = Rc::downgrade(&once);
    let once_weak: Weak<dyn MessageObserver> = once_weak;
    *self_detaching.borrow_mut() = Some(once_weak);

    let after = Observer::new(&subject);

    subject.create_message("one-shot");
    subject.create_message("again");

    assert_eq!(*once.received.borrow(), vec!["one-shot"]);
    assert_eq!(stay.last_message(), "again");
    assert_eq!(after.last_message(), "again");
    assert_eq!(subject.observer_count(), 2);
}
