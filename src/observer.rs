// Observer Pattern - an ordered listener registry with broadcast.
//
// Broadcast works from a snapshot of the registry: listeners added or removed
// while a broadcast is running are seen by the next broadcast, not this one.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::console::Console;

pub const OBSERVER_MESSAGE: &str = "Observer updated";

pub trait Observer {
    fn update(&self, console: &mut dyn Console);
}

/// Announces each update on the console.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl Observer for ConsoleObserver {
    fn update(&self, console: &mut dyn Console) {
        console.line(OBSERVER_MESSAGE);
    }
}

pub trait Observable {
    fn add_observer(&self, observer: Rc<dyn Observer>);

    /// Removes the first registration of this exact observer.
    /// Returns false when it was not registered.
    fn remove_observer(&self, observer: &Rc<dyn Observer>) -> bool;

    /// Updates every registered observer once, in registration order.
    /// Returns how many were notified.
    fn notify_observers(&self, console: &mut dyn Console) -> usize;
}

/// Registry of observers. Duplicates are allowed and notified once per entry.
#[derive(Default)]
pub struct Subject {
    observers: RefCell<Vec<Rc<dyn Observer>>>,
}

impl Subject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }
}

impl Observable for Subject {
    fn add_observer(&self, observer: Rc<dyn Observer>) {
        let mut observers = self.observers.borrow_mut();
        observers.push(observer);
        debug!(registered = observers.len(), "observer added");
    }

    fn remove_observer(&self, observer: &Rc<dyn Observer>) -> bool {
        let mut observers = self.observers.borrow_mut();
        match observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                observers.remove(index);
                debug!(registered = observers.len(), "observer removed");
                true
            }
            None => false,
        }
    }

    fn notify_observers(&self, console: &mut dyn Console) -> usize {
        // Clone out of the RefCell so observers may touch the registry.
        let snapshot: Vec<Rc<dyn Observer>> = self.observers.borrow().clone();
        debug!(count = snapshot.len(), "broadcasting");
        for observer in &snapshot {
            observer.update(console);
        }
        snapshot.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;
    use proptest::prelude::*;

    // Writes its id so tests can read back notification order.
    struct Tagged(usize);

    impl Observer for Tagged {
        fn update(&self, console: &mut dyn Console) {
            console.line(&self.0.to_string());
        }
    }

    fn tagged(id: usize) -> Rc<dyn Observer> {
        Rc::new(Tagged(id))
    }

    fn order(console: &RecordingConsole) -> Vec<usize> {
        console
            .lines()
            .iter()
            .filter_map(|line| line.parse().ok())
            .collect()
    }

    #[test]
    fn test_console_observer() {
        let subject = Subject::new();
        subject.add_observer(Rc::new(ConsoleObserver));

        let mut console = RecordingConsole::new();
        assert_eq!(subject.notify_observers(&mut console), 1);
        assert_eq!(console.lines(), [OBSERVER_MESSAGE]);
    }

    #[test]
    fn test_empty_broadcast() {
        let subject = Subject::new();
        let mut console = RecordingConsole::new();
        assert_eq!(subject.notify_observers(&mut console), 0);
        assert!(console.lines().is_empty());
        assert!(subject.is_empty());
    }

    #[test]
    fn test_registration_order() {
        let subject = Subject::new();
        for id in [3, 1, 2] {
            subject.add_observer(tagged(id));
        }

        let mut console = RecordingConsole::new();
        subject.notify_observers(&mut console);
        assert_eq!(order(&console), vec![3, 1, 2]);
    }

    #[test]
    fn test_duplicates_and_remove_first() {
        let subject = Subject::new();
        let a = tagged(1);
        let b = tagged(2);
        subject.add_observer(a.clone());
        subject.add_observer(b.clone());
        subject.add_observer(a.clone());

        assert!(subject.remove_observer(&a));
        assert_eq!(subject.len(), 2);

        let mut console = RecordingConsole::new();
        subject.notify_observers(&mut console);
        assert_eq!(order(&console), vec![2, 1]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let subject = Subject::new();
        subject.add_observer(tagged(1));
        assert!(!subject.remove_observer(&tagged(1)));
        assert_eq!(subject.len(), 1);
    }

    // Registers a newcomer and unregisters a victim while being notified.
    struct Meddler {
        subject: Rc<Subject>,
        newcomer: Rc<dyn Observer>,
        victim: Rc<dyn Observer>,
    }

    impl Observer for Meddler {
        fn update(&self, console: &mut dyn Console) {
            console.line("0");
            self.subject.add_observer(self.newcomer.clone());
            self.subject.remove_observer(&self.victim);
        }
    }

    #[test]
    fn test_mutation_during_broadcast_is_deferred() {
        let subject = Rc::new(Subject::new());
        let victim = tagged(1);
        let newcomer = tagged(2);
        subject.add_observer(Rc::new(Meddler {
            subject: subject.clone(),
            newcomer: newcomer.clone(),
            victim: victim.clone(),
        }));
        subject.add_observer(victim);

        let mut first = RecordingConsole::new();
        assert_eq!(subject.notify_observers(&mut first), 2);
        assert_eq!(order(&first), vec![0, 1]);

        let mut second = RecordingConsole::new();
        subject.notify_observers(&mut second);
        assert_eq!(order(&second), vec![0, 2]);
        assert_eq!(subject.len(), 3);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize),
        Remove(usize),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..6usize).prop_map(Op::Add),
            (0..6usize).prop_map(Op::Remove),
        ]
    }

    proptest! {
        #[test]
        fn test_broadcast_follows_registration(ops in prop::collection::vec(op(), 0..40)) {
            let pool: Vec<Rc<dyn Observer>> = (0..6).map(tagged).collect();
            let subject = Subject::new();
            let mut model: Vec<usize> = Vec::new();

            for op in ops {
                match op {
                    Op::Add(id) => {
                        subject.add_observer(pool[id].clone());
                        model.push(id);
                    }
                    Op::Remove(id) => {
                        let removed = subject.remove_observer(&pool[id]);
                        let position = model.iter().position(|&m| m == id);
                        prop_assert_eq!(removed, position.is_some());
                        if let Some(index) = position {
                            model.remove(index);
                        }
                    }
                }
            }

            let mut console = RecordingConsole::new();
            prop_assert_eq!(subject.notify_observers(&mut console), model.len());
            prop_assert_eq!(order(&console), model);
        }
    }
}
