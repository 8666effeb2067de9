//! Browser side of the interaction core: real timers and frames, window
//! listeners and the section intersection watcher.

use std::{rc::Rc, time::Duration};

use leptos::{
    ev,
    prelude::{
        request_animation_frame_with_handle, set_timeout_with_handle,
        window_event_listener, AnimationFrameRequestHandle, TimeoutHandle, WindowListenerHandle,
    },
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{
    Cancel, IntersectionChange, MotionError, PageMotion, Pointer, Scheduler, Section, ROOT_MARGIN,
    THRESHOLD,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

pub struct Timer(TimeoutHandle);

impl Cancel for Timer {
    fn cancel(self) {
        self.0.clear();
    }
}

pub struct Frame(AnimationFrameRequestHandle);

impl Cancel for Frame {
    fn cancel(self) {
        self.0.cancel();
    }
}

impl Scheduler for BrowserScheduler {
    type Timeout = Timer;
    type Frame = Frame;

    fn set_timeout(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce()>,
    ) -> Result<Timer, MotionError> {
        set_timeout_with_handle(task, delay)
            .map(Timer)
            .map_err(|_| MotionError::Schedule("timeout"))
    }

    fn request_frame(&self, task: Box<dyn FnOnce()>) -> Result<Frame, MotionError> {
        request_animation_frame_with_handle(task)
            .map(Frame)
            .map_err(|_| MotionError::Schedule("animation frame"))
    }
}

/// Current vertical page scroll, zero when there is no window.
pub fn scroll_offset() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Intersection observer watching the page sections by element id.
pub struct SectionWatcher {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl SectionWatcher {
    /// Observes every section in `sections` that exists in the document;
    /// missing elements are skipped.
    pub fn observe(
        sections: &[Section],
        on_change: impl Fn(Vec<IntersectionChange>) + 'static,
    ) -> Result<Self, MotionError> {
        let callback: EntriesCallback = Closure::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let changes = entries
                    .iter()
                    .filter_map(|entry| {
                        let entry = entry.dyn_into::<IntersectionObserverEntry>().ok()?;
                        let section = Section::from_id(&entry.target().id())?;
                        Some(IntersectionChange {
                            section,
                            intersecting: entry.is_intersecting(),
                        })
                    })
                    .collect::<Vec<_>>();
                on_change(changes);
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(THRESHOLD));
        options.set_root_margin(ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|_| MotionError::Observer)?;

        let doc = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(MotionError::NoWindow)?;
        for section in sections {
            if let Some(el) = doc.get_element_by_id(section.id()) {
                observer.observe(&el);
            } else {
                log::debug!("section #{} not in document, not observed", section.id());
            }
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn disconnect(self) {
        self.observer.disconnect();
    }
}

/// Everything [`install`] attached to the window, removed together.
pub struct Listeners {
    motion: Rc<PageMotion<BrowserScheduler>>,
    pointer: WindowListenerHandle,
    scroll: WindowListenerHandle,
    sections: Option<SectionWatcher>,
}

/// Wires pointer, scroll and section visibility events into `motion`.
pub fn install(motion: PageMotion<BrowserScheduler>) -> Listeners {
    let motion = Rc::new(motion);

    let pointer = window_event_listener(ev::mousemove, {
        let motion = Rc::clone(&motion);
        move |e| motion.pointer_moved(Pointer::new(f64::from(e.client_x()), f64::from(e.client_y())))
    });
    let scroll = window_event_listener(ev::scroll, {
        let motion = Rc::clone(&motion);
        move |_| motion.scrolled()
    });
    let sections = {
        let motion = Rc::clone(&motion);
        match SectionWatcher::observe(&Section::ALL, move |changes| motion.intersections(changes)) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                log::warn!("section entrances disabled: {e}");
                None
            }
        }
    };

    log::debug!("page motion listeners installed");
    Listeners {
        motion,
        pointer,
        scroll,
        sections,
    }
}

impl Listeners {
    pub fn remove(self) {
        self.pointer.remove();
        self.scroll.remove();
        if let Some(sections) = self.sections {
            sections.disconnect();
        }
        self.motion.teardown();
    }
}
