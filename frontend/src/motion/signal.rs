use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::NodeRef;

use crate::error::MotionError;
use crate::motion::progress::{Measurement, ScrollRange};
use crate::motion::reveal::RevealLatch;

/// Something that can report where one element sits in the viewport.
pub trait ScrollSource {
    fn measure(&self) -> Option<Measurement>;
}

/// Fires a callback the first time a watched element enters the viewport.
pub trait VisibilityNotifier {
    fn watch(&mut self, on_enter: Box<dyn FnMut()>) -> Result<(), MotionError>;
    fn disconnect(&mut self);
}

/// Progress of a tracked element through a scroll range.
pub struct ScrollTracker<S> {
    source: S,
    range: ScrollRange,
    last: f64,
}

impl<S: ScrollSource> ScrollTracker<S> {
    pub fn new(source: S, range: ScrollRange) -> Self {
        Self { source, range, last: 0.0 }
    }

    /// Re-measure; returns the new progress when it changed.
    pub fn update(&mut self) -> Option<f64> {
        let m = self.source.measure()?;
        let p = self.range.progress(&m);
        if p == self.last {
            return None;
        }
        self.last = p;
        Some(p)
    }

    #[cfg(test)]
    pub fn progress(&self) -> f64 {
        self.last
    }
}

/// Reads the tracked node's bounding box and the window height.
pub struct ElementScroll {
    node: NodeRef,
}

impl ElementScroll {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }
}

impl ScrollSource for ElementScroll {
    fn measure(&self) -> Option<Measurement> {
        let element = self.node.cast::<web_sys::Element>()?;
        let viewport_height = web_sys::window()?.inner_height().ok()?.as_f64()?;
        let rect = element.get_bounding_client_rect();
        Some(Measurement {
            element_top: rect.top(),
            element_height: rect.height(),
            viewport_height,
        })
    }
}

/// Starts watching. When the host cannot observe, `on_reveal` runs straight
/// away and the error is handed back for logging.
pub fn arm_reveal<N: VisibilityNotifier>(
    notifier: &mut N,
    on_reveal: Rc<dyn Fn()>,
) -> Result<(), MotionError> {
    let fire = on_reveal.clone();
    notifier.watch(Box::new(move || fire())).map_err(|err| {
        on_reveal();
        err
    })
}

/// Turns a `Reflect::has` lookup for the observer constructor into a result.
fn observer_support(present: Result<bool, JsValue>) -> Result<(), MotionError> {
    match present {
        Ok(true) => Ok(()),
        Ok(false) => Err(MotionError::Unsupported("IntersectionObserver")),
        Err(err) => Err(err.into()),
    }
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// `IntersectionObserver` over a single node, disconnected after first entry.
pub struct ViewportObserver {
    node: NodeRef,
    margin: String,
    observer: Option<IntersectionObserver>,
    callback: Option<EntryCallback>,
}

impl ViewportObserver {
    pub fn new(node: NodeRef, margin_px: i32) -> Self {
        Self {
            node,
            margin: format!("{}px", margin_px),
            observer: None,
            callback: None,
        }
    }
}

impl VisibilityNotifier for ViewportObserver {
    fn watch(&mut self, mut on_enter: Box<dyn FnMut()>) -> Result<(), MotionError> {
        let element = self
            .node
            .cast::<web_sys::Element>()
            .ok_or(MotionError::NotMounted)?;
        let window = web_sys::window().ok_or(MotionError::Unsupported("window"))?;
        observer_support(Reflect::has(&window, &JsValue::from_str("IntersectionObserver")))?;

        let mut latch = RevealLatch::default();
        let callback: EntryCallback = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|e| e.is_intersecting())
                        .unwrap_or(false)
                });
                if latch.observe(intersecting) {
                    observer.disconnect();
                    on_enter();
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(&self.margin);
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(&element);

        self.observer = Some(observer);
        self.callback = Some(callback);
        Ok(())
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback = None;
    }
}

impl Drop for ViewportObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FakeScroll {
        top: Rc<Cell<f64>>,
    }

    impl ScrollSource for FakeScroll {
        fn measure(&self) -> Option<Measurement> {
            Some(Measurement {
                element_top: self.top.get(),
                element_height: 1000.0,
                viewport_height: 900.0,
            })
        }
    }

    struct Unmounted;

    impl ScrollSource for Unmounted {
        fn measure(&self) -> Option<Measurement> {
            None
        }
    }

    struct FakeNotifier {
        supported: bool,
        pending: Option<Box<dyn FnMut()>>,
    }

    impl FakeNotifier {
        fn enter(&mut self) {
            if let Some(mut on_enter) = self.pending.take() {
                on_enter();
            }
        }
    }

    impl VisibilityNotifier for FakeNotifier {
        fn watch(&mut self, on_enter: Box<dyn FnMut()>) -> Result<(), MotionError> {
            if !self.supported {
                return Err(MotionError::Unsupported("IntersectionObserver"));
            }
            self.pending = Some(on_enter);
            Ok(())
        }

        fn disconnect(&mut self) {
            self.pending = None;
        }
    }

    #[test]
    fn reveal_waits_for_entry() {
        let shown = Rc::new(Cell::new(0));
        let mut notifier = FakeNotifier { supported: true, pending: None };
        let counter = shown.clone();
        arm_reveal(&mut notifier, Rc::new(move || counter.set(counter.get() + 1))).unwrap();
        assert_eq!(shown.get(), 0);
        notifier.enter();
        notifier.enter();
        assert_eq!(shown.get(), 1);
    }

    #[test]
    fn reveal_falls_back_when_unsupported() {
        let shown = Rc::new(Cell::new(false));
        let mut notifier = FakeNotifier { supported: false, pending: None };
        let flag = shown.clone();
        let err = arm_reveal(&mut notifier, Rc::new(move || flag.set(true))).unwrap_err();
        assert_eq!(err, MotionError::Unsupported("IntersectionObserver"));
        assert!(shown.get());
    }

    #[test]
    fn missing_observer_constructor_is_unsupported() {
        assert_eq!(observer_support(Ok(true)), Ok(()));
        assert_eq!(
            observer_support(Ok(false)),
            Err(MotionError::Unsupported("IntersectionObserver"))
        );
    }

    #[test]
    fn disconnect_drops_pending_callback() {
        let shown = Rc::new(Cell::new(false));
        let mut notifier = FakeNotifier { supported: true, pending: None };
        let flag = shown.clone();
        arm_reveal(&mut notifier, Rc::new(move || flag.set(true))).unwrap();
        notifier.disconnect();
        notifier.enter();
        assert!(!shown.get());
    }

    #[test]
    fn tracker_reports_only_changes() {
        let top = Rc::new(Cell::new(0.0));
        let mut tracker = ScrollTracker::new(
            FakeScroll { top: top.clone() },
            ScrollRange::START_START_TO_END_START,
        );
        assert_eq!(tracker.update(), None);

        top.set(-250.0);
        assert_eq!(tracker.update(), Some(0.25));
        assert_eq!(tracker.update(), None);

        top.set(-5000.0);
        assert_eq!(tracker.update(), Some(1.0));
        top.set(-6000.0);
        assert_eq!(tracker.update(), None);
        assert_eq!(tracker.progress(), 1.0);
    }

    #[test]
    fn unmounted_source_keeps_last_progress() {
        let mut tracker = ScrollTracker::new(Unmounted, ScrollRange::default());
        assert_eq!(tracker.update(), None);
        assert_eq!(tracker.progress(), 0.0);
    }
}
