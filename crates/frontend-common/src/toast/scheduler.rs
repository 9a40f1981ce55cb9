//! Deferred callbacks

use gloo::timers::callback::Timeout;

/// Runs a callback once after a delay.
///
/// Dropping the returned handle cancels the callback if it has not fired.
pub trait Scheduler {
    type Handle: 'static;

    fn schedule<F>(&self, delay_ms: u32, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static;
}

/// Browser event-loop timers (`setTimeout`)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule<F>(&self, delay_ms: u32, callback: F) -> Self::Handle
    where
        F: FnOnce() + 'static,
    {
        Timeout::new(delay_ms, callback)
    }
}

#[cfg(test)]
pub(crate) mod manual {
    //! Virtual-clock scheduler for host tests

    use super::Scheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Task {
        due: u64,
        seq: u64,
        cancelled: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_seq: u64,
        tasks: Vec<Task>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        clock: Rc<RefCell<Clock>>,
    }

    pub struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.clock.borrow().now
        }

        /// Callbacks still waiting to fire
        pub fn pending(&self) -> usize {
            self.clock
                .borrow()
                .tasks
                .iter()
                .filter(|task| !task.cancelled.get())
                .count()
        }

        /// Move time forward, firing due callbacks in deadline order
        pub fn advance(&self, ms: u64) {
            let target = self.now() + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let index = clock
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, task)| task.due <= target)
                        .min_by_key(|(_, task)| (task.due, task.seq))
                        .map(|(index, _)| index);
                    index.map(|index| {
                        let task = clock.tasks.remove(index);
                        clock.now = task.due;
                        task
                    })
                };

                match next {
                    Some(task) if !task.cancelled.get() => (task.callback)(),
                    Some(_) => {}
                    None => break,
                }
            }
            self.clock.borrow_mut().now = target;
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule<F>(&self, delay_ms: u32, callback: F) -> Self::Handle
        where
            F: FnOnce() + 'static,
        {
            let cancelled = Rc::new(Cell::new(false));
            let mut clock = self.clock.borrow_mut();
            let due = clock.now + u64::from(delay_ms);
            let seq = clock.next_seq;
            clock.next_seq += 1;
            clock.tasks.push(Task {
                due,
                seq,
                cancelled: cancelled.clone(),
                callback: Box::new(callback),
            });
            ManualHandle { cancelled }
        }
    }

    mod tests {
        use super::*;

        #[test]
        fn fires_in_deadline_order() {
            let scheduler = ManualScheduler::new();
            let log = Rc::new(RefCell::new(Vec::new()));

            let handles: Vec<_> = [(30, "c"), (10, "a"), (20, "b")]
                .into_iter()
                .map(|(delay, name)| {
                    let log = log.clone();
                    scheduler.schedule(delay, move || log.borrow_mut().push(name))
                })
                .collect();

            scheduler.advance(25);
            assert_eq!(*log.borrow(), vec!["a", "b"]);

            scheduler.advance(5);
            assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
            drop(handles);
        }

        #[test]
        fn dropped_handle_never_fires() {
            let scheduler = ManualScheduler::new();
            let fired = Rc::new(Cell::new(false));

            let flag = fired.clone();
            let handle = scheduler.schedule(10, move || flag.set(true));
            drop(handle);
            scheduler.advance(100);

            assert!(!fired.get());
            assert_eq!(scheduler.pending(), 0);
        }
    }
}
