use std::{cell::RefCell, rc::Rc, time::Duration};

use super::{Cancel, MotionError, Scheduler};

/// Trailing-edge debounce: each call cancels the pending one, so only the
/// last value of a burst reaches `apply`, `delay` after it arrived.
pub struct Debouncer<S: Scheduler, T> {
    scheduler: S,
    delay: Duration,
    pending: Rc<RefCell<Option<S::Timeout>>>,
    apply: Rc<dyn Fn(T)>,
}

impl<S: Scheduler, T: 'static> Debouncer<S, T> {
    pub fn new(scheduler: S, delay: Duration, apply: impl Fn(T) + 'static) -> Self {
        Self {
            scheduler,
            delay,
            pending: Rc::new(RefCell::new(None)),
            apply: Rc::new(apply),
        }
    }

    pub fn call(&self, value: T) -> Result<(), MotionError> {
        self.cancel();
        let pending = Rc::clone(&self.pending);
        let apply = Rc::clone(&self.apply);
        let handle = self.scheduler.set_timeout(
            self.delay,
            Box::new(move || {
                pending.borrow_mut().take();
                apply(value);
            }),
        )?;
        *self.pending.borrow_mut() = Some(handle);
        Ok(())
    }

    pub fn cancel(&self) {
        let handle = self.pending.borrow_mut().take();
        if let Some(handle) = handle {
            handle.cancel();
        }
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::motion::scheduler::manual::ManualScheduler;

    fn recording() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        (seen, move |v| sink.borrow_mut().push(v))
    }

    #[test]
    fn test_only_last_value_of_burst_applies() {
        let clock = ManualScheduler::default();
        let (seen, apply) = recording();
        let debouncer = Debouncer::new(clock.clone(), Duration::from_millis(16), apply);

        for v in 1..=5 {
            debouncer.call(v).unwrap();
            clock.advance(Duration::from_millis(3));
        }
        assert!(seen.borrow().is_empty());
        assert_eq!(clock.pending_timers(), 1);

        clock.advance(Duration::from_millis(16));
        assert_eq!(*seen.borrow(), vec![5]);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_separate_windows_apply_separately() {
        let clock = ManualScheduler::default();
        let (seen, apply) = recording();
        let debouncer = Debouncer::new(clock.clone(), Duration::from_millis(16), apply);

        debouncer.call(1).unwrap();
        clock.advance(Duration::from_millis(20));
        debouncer.call(2).unwrap();
        clock.advance(Duration::from_millis(20));

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_cancel_drops_pending_value() {
        let clock = ManualScheduler::default();
        let (seen, apply) = recording();
        let debouncer = Debouncer::new(clock.clone(), Duration::from_millis(16), apply);

        debouncer.call(7).unwrap();
        debouncer.cancel();
        clock.advance(Duration::from_millis(100));

        assert!(seen.borrow().is_empty());
        assert_eq!(clock.pending_timers(), 0);
    }
}
