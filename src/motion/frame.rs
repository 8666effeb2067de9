use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use super::{Cancel, MotionError, Scheduler};

/// Coalesces requests into at most one animation-frame callback at a time.
pub struct FrameGate<S: Scheduler> {
    scheduler: S,
    ticking: Rc<Cell<bool>>,
    pending: Rc<RefCell<Option<S::Frame>>>,
}

impl<S: Scheduler> FrameGate<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            ticking: Rc::new(Cell::new(false)),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Schedules `task` for the next frame unless one is already pending.
    /// Returns whether a frame was requested.
    pub fn request(&self, task: impl FnOnce() + 'static) -> Result<bool, MotionError> {
        if self.ticking.get() {
            return Ok(false);
        }
        let ticking = Rc::clone(&self.ticking);
        let pending = Rc::clone(&self.pending);
        let handle = self.scheduler.request_frame(Box::new(move || {
            pending.borrow_mut().take();
            task();
            ticking.set(false);
        }))?;
        self.ticking.set(true);
        *self.pending.borrow_mut() = Some(handle);
        Ok(true)
    }

    pub fn cancel(&self) {
        let handle = self.pending.borrow_mut().take();
        if let Some(handle) = handle {
            handle.cancel();
        }
        self.ticking.set(false);
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.ticking.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scheduler::manual::ManualScheduler;

    #[test]
    fn test_burst_coalesces_to_one_frame() {
        let clock = ManualScheduler::default();
        let gate = FrameGate::new(clock.clone());
        let runs = Rc::new(Cell::new(0));

        let mut requested = 0;
        for _ in 0..10 {
            let runs = Rc::clone(&runs);
            if gate.request(move || runs.set(runs.get() + 1)).unwrap() {
                requested += 1;
            }
        }
        assert_eq!(requested, 1);
        assert_eq!(clock.pending_frames(), 1);

        clock.run_frame();
        assert_eq!(runs.get(), 1);
        assert!(!gate.is_pending());
    }

    #[test]
    fn test_reopens_after_frame() {
        let clock = ManualScheduler::default();
        let gate = FrameGate::new(clock.clone());
        let runs = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let r = Rc::clone(&runs);
            gate.request(move || r.set(r.get() + 1)).unwrap();
            clock.run_frame();
        }
        assert_eq!(runs.get(), 3);
    }

    #[test]
    fn test_cancel_clears_pending_frame() {
        let clock = ManualScheduler::default();
        let gate = FrameGate::new(clock.clone());
        let runs = Rc::new(Cell::new(0));

        let r = Rc::clone(&runs);
        gate.request(move || r.set(r.get() + 1)).unwrap();
        gate.cancel();
        clock.run_frame();

        assert_eq!(runs.get(), 0);
        assert!(!gate.is_pending());
    }
}
