use std::{cell::Cell, rc::Rc, time::Duration};

use super::{Debouncer, FrameGate, IntersectionChange, Pointer, Scheduler};

/// Pointer updates land at most once per display frame at 60Hz.
pub const POINTER_DEBOUNCE: Duration = Duration::from_millis(16);
/// Background layer moves at this fraction of the page scroll.
pub const PARALLAX_FACTOR: f64 = 0.3;

pub fn parallax_transform(scroll_offset: f64) -> String {
    format!("translateY({:.1}px)", scroll_offset * PARALLAX_FACTOR)
}

/// Where the controller delivers its updates.
pub struct MotionSinks {
    pub pointer: Box<dyn Fn(Pointer)>,
    /// Receives the page scroll offset read inside the animation frame.
    pub parallax: Box<dyn Fn(f64)>,
    pub visibility: Box<dyn Fn(IntersectionChange)>,
}

/// Event handling for the root view: debounced pointer, frame-coalesced
/// parallax and visibility changes, all inert after [`PageMotion::teardown`].
pub struct PageMotion<S: Scheduler> {
    active: Rc<Cell<bool>>,
    pointer: Debouncer<S, Pointer>,
    parallax: FrameGate<S>,
    scroll_offset: Rc<dyn Fn() -> f64>,
    on_parallax: Rc<dyn Fn(f64)>,
    on_visibility: Box<dyn Fn(IntersectionChange)>,
}

impl<S: Scheduler> PageMotion<S> {
    pub fn new(scheduler: S, scroll_offset: impl Fn() -> f64 + 'static, sinks: MotionSinks) -> Self {
        let MotionSinks {
            pointer: on_pointer,
            parallax: on_parallax,
            visibility: on_visibility,
        } = sinks;
        let active = Rc::new(Cell::new(true));
        let pointer = {
            let active = Rc::clone(&active);
            Debouncer::new(scheduler.clone(), POINTER_DEBOUNCE, move |p| {
                if active.get() {
                    on_pointer(p);
                }
            })
        };
        Self {
            active,
            pointer,
            parallax: FrameGate::new(scheduler),
            scroll_offset: Rc::new(scroll_offset),
            on_parallax: Rc::from(on_parallax),
            on_visibility,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn pointer_moved(&self, pointer: Pointer) {
        if !self.is_active() {
            return;
        }
        if let Err(e) = self.pointer.call(pointer) {
            log::warn!("dropping pointer update: {e}");
        }
    }

    pub fn scrolled(&self) {
        if !self.is_active() {
            return;
        }
        let active = Rc::clone(&self.active);
        let read = Rc::clone(&self.scroll_offset);
        let apply = Rc::clone(&self.on_parallax);
        let requested = self.parallax.request(move || {
            if active.get() {
                apply(read());
            }
        });
        if let Err(e) = requested {
            log::warn!("dropping parallax update: {e}");
        }
    }

    /// Applies a batch from the intersection watcher, one change at a time.
    pub fn intersections(&self, changes: impl IntoIterator<Item = IntersectionChange>) {
        if !self.is_active() {
            return;
        }
        for change in changes {
            (self.on_visibility)(change);
        }
    }

    pub fn teardown(&self) {
        if !self.active.replace(false) {
            return;
        }
        self.pointer.cancel();
        self.parallax.cancel();
        log::debug!("page motion torn down");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::motion::{scheduler::manual::ManualScheduler, Section, VisibilityFlags};

    #[derive(Default)]
    struct Recorded {
        pointer: Vec<Pointer>,
        parallax: Vec<f64>,
        flags: VisibilityFlags,
        flag_changes: usize,
    }

    fn page(clock: &ManualScheduler, scroll: Rc<Cell<f64>>) -> (PageMotion<ManualScheduler>, Rc<RefCell<Recorded>>) {
        let rec = Rc::new(RefCell::new(Recorded::default()));
        let sinks = MotionSinks {
            pointer: Box::new({
                let rec = Rc::clone(&rec);
                move |p| rec.borrow_mut().pointer.push(p)
            }),
            parallax: Box::new({
                let rec = Rc::clone(&rec);
                move |offset| rec.borrow_mut().parallax.push(offset)
            }),
            visibility: Box::new({
                let rec = Rc::clone(&rec);
                move |change| {
                    let mut rec = rec.borrow_mut();
                    if rec.flags.apply(change) {
                        rec.flag_changes += 1;
                    }
                }
            }),
        };
        let motion = PageMotion::new(clock.clone(), move || scroll.get(), sinks);
        (motion, rec)
    }

    #[test]
    fn test_pointer_burst_applies_last_position_once() {
        let clock = ManualScheduler::default();
        let (motion, rec) = page(&clock, Rc::new(Cell::new(0.0)));

        for i in 0..8 {
            motion.pointer_moved(Pointer::new(10.0 * i as f64, 5.0 * i as f64));
            clock.advance(Duration::from_millis(1));
        }
        clock.advance(POINTER_DEBOUNCE);

        assert_eq!(rec.borrow().pointer, vec![Pointer::new(70.0, 35.0)]);
    }

    #[test]
    fn test_scroll_burst_applies_one_parallax_update() {
        let clock = ManualScheduler::default();
        let scroll = Rc::new(Cell::new(0.0));
        let (motion, rec) = page(&clock, Rc::clone(&scroll));

        for y in [10.0, 40.0, 120.0, 200.0] {
            scroll.set(y);
            motion.scrolled();
        }
        assert_eq!(clock.pending_frames(), 1);
        clock.run_frame();

        // offset is read when the frame runs, not when the event fired
        assert_eq!(rec.borrow().parallax, vec![200.0]);

        scroll.set(300.0);
        motion.scrolled();
        clock.run_frame();
        assert_eq!(rec.borrow().parallax, vec![200.0, 300.0]);
    }

    #[test]
    fn test_parallax_transform() {
        assert_eq!(parallax_transform(0.0), "translateY(0.0px)");
        assert_eq!(parallax_transform(200.0), "translateY(60.0px)");
    }

    #[test]
    fn test_batch_applies_each_change() {
        let clock = ManualScheduler::default();
        let (motion, rec) = page(&clock, Rc::new(Cell::new(0.0)));

        motion.intersections([
            IntersectionChange {
                section: Section::Hero,
                intersecting: true,
            },
            IntersectionChange {
                section: Section::About,
                intersecting: true,
            },
            IntersectionChange {
                section: Section::Hero,
                intersecting: true,
            },
        ]);

        let rec = rec.borrow();
        assert!(rec.flags.is_visible(Section::Hero));
        assert!(rec.flags.is_visible(Section::About));
        assert!(!rec.flags.is_visible(Section::Skills));
        assert_eq!(rec.flag_changes, 2);
    }

    #[test]
    fn test_nothing_applies_after_teardown() {
        let clock = ManualScheduler::default();
        let scroll = Rc::new(Cell::new(50.0));
        let (motion, rec) = page(&clock, scroll);

        // pending work at teardown is dropped
        motion.pointer_moved(Pointer::new(1.0, 2.0));
        motion.scrolled();
        motion.teardown();
        assert_eq!(clock.pending_timers(), 0);
        assert_eq!(clock.pending_frames(), 0);

        motion.pointer_moved(Pointer::new(3.0, 4.0));
        motion.scrolled();
        motion.intersections([IntersectionChange {
            section: Section::Contact,
            intersecting: true,
        }]);
        clock.advance(Duration::from_millis(100));
        clock.run_frame();

        let rec = rec.borrow();
        assert!(rec.pointer.is_empty());
        assert!(rec.parallax.is_empty());
        assert_eq!(rec.flags, VisibilityFlags::default());
        assert!(!motion.is_active());

        // second teardown is harmless
        motion.teardown();
    }
}
