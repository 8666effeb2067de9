use std::time::Duration;

use super::MotionError;

/// Handle to a scheduled task that can be called off before it runs.
pub trait Cancel {
    fn cancel(self);
}

/// Source of one-shot timers and animation frames.
pub trait Scheduler: Clone + 'static {
    type Timeout: Cancel + 'static;
    type Frame: Cancel + 'static;

    fn set_timeout(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<Self::Timeout, MotionError>;

    fn request_frame(&self, task: Box<dyn FnOnce()>) -> Result<Self::Frame, MotionError>;
}

#[cfg(test)]
pub(crate) mod manual {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use super::{Cancel, Scheduler};
    use crate::motion::MotionError;

    type Task = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Queue {
        now: Duration,
        next_id: u64,
        timers: Vec<(u64, Duration, Task)>,
        frames: Vec<(u64, Task)>,
    }

    /// Virtual clock for driving timers and frames by hand.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub(crate) struct ManualHandle {
        id: u64,
        queue: Rc<RefCell<Queue>>,
    }

    impl Cancel for ManualHandle {
        fn cancel(self) {
            let mut queue = self.queue.borrow_mut();
            queue.timers.retain(|(id, _, _)| *id != self.id);
            queue.frames.retain(|(id, _)| *id != self.id);
        }
    }

    impl ManualScheduler {
        fn handle(&self, id: u64) -> ManualHandle {
            ManualHandle {
                id,
                queue: Rc::clone(&self.queue),
            }
        }

        /// Move the clock forward, running every timer that comes due.
        pub(crate) fn advance(&self, by: Duration) {
            let due = {
                let mut queue = self.queue.borrow_mut();
                queue.now += by;
                let now = queue.now;
                let (mut due, rest): (Vec<_>, Vec<_>) =
                    queue.timers.drain(..).partition(|(_, at, _)| *at <= now);
                queue.timers = rest;
                due.sort_by_key(|(id, at, _)| (*at, *id));
                due
            };
            for (_, _, task) in due {
                task();
            }
        }

        /// Run every frame callback requested so far.
        pub(crate) fn run_frame(&self) {
            let frames = std::mem::take(&mut self.queue.borrow_mut().frames);
            for (_, task) in frames {
                task();
            }
        }

        pub(crate) fn pending_timers(&self) -> usize {
            self.queue.borrow().timers.len()
        }

        pub(crate) fn pending_frames(&self) -> usize {
            self.queue.borrow().frames.len()
        }
    }

    impl Scheduler for ManualScheduler {
        type Timeout = ManualHandle;
        type Frame = ManualHandle;

        fn set_timeout(&self, delay: Duration, task: Task) -> Result<ManualHandle, MotionError> {
            let id = {
                let mut queue = self.queue.borrow_mut();
                queue.next_id += 1;
                let id = queue.next_id;
                let at = queue.now + delay;
                queue.timers.push((id, at, task));
                id
            };
            Ok(self.handle(id))
        }

        fn request_frame(&self, task: Task) -> Result<ManualHandle, MotionError> {
            let id = {
                let mut queue = self.queue.borrow_mut();
                queue.next_id += 1;
                let id = queue.next_id;
                queue.frames.push((id, task));
                id
            };
            Ok(self.handle(id))
        }
    }
}
