use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::motion::progress::ScrollRange;
use crate::motion::signal::{arm_reveal, ElementScroll, ScrollTracker, ViewportObserver};

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

/// Scroll progress of `node` through `range`, recomputed on every scroll and
/// resize event.
#[hook]
pub fn use_scroll_progress(node: NodeRef, range: ScrollRange) -> f64 {
    let progress = use_state(|| 0.0_f64);

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut tracker = ScrollTracker::new(ElementScroll::new(node.clone()), range);
                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(p) = tracker.update() {
                        progress.set(p);
                    }
                }) as Box<dyn FnMut()>);

                let window = web_sys::window();
                if let Some(window) = &window {
                    for event in SCROLL_EVENTS {
                        if let Err(err) = window.add_event_listener_with_callback(
                            event,
                            scroll_callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("could not listen for {}: {:?}", event, err);
                        }
                    }
                }

                // Initial check
                let _ = scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL);

                move || {
                    if let Some(window) = window {
                        for event in SCROLL_EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                scroll_callback.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            node,
        );
    }

    *progress
}

/// `true` once `node` has entered the viewport (grown by `margin_px`, which
/// may be negative). Never goes back to `false`.
#[hook]
pub fn use_reveal(node: NodeRef, margin_px: i32) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut observer = ViewportObserver::new(node.clone(), margin_px);
                let on_reveal: Rc<dyn Fn()> = Rc::new(move || revealed.set(true));
                if let Err(err) = arm_reveal(&mut observer, on_reveal) {
                    warn!("reveal observer unavailable, showing immediately: {}", err);
                }
                move || drop(observer)
            },
            node,
        );
    }

    *revealed
}

/// Flips to `true` right after mount so CSS transitions on first paint run.
#[hook]
pub fn use_entered() -> bool {
    let entered = use_state(|| false);

    {
        let entered = entered.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(30, move || {
                    debug!("entrance animation started");
                    entered.set(true);
                });
                move || drop(timeout)
            },
            (),
        );
    }

    *entered
}
