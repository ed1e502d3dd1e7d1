use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Array, Date};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MouseEvent,
};
use yew::prelude::*;
use yew_hooks::prelude::*;

use super::math::{
    document_scroll_progress, element_scroll_progress, map_range, pointer_offset, Throttle,
};

pub const PARALLAX_THROTTLE_MS: f64 = 50.0;

/// Fires a callback the first time an element intersects the viewport.
/// Disconnects on drop.
pub struct ViewObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ViewObserver {
    pub fn once<F>(element: &Element, root_margin: &str, threshold: f64, on_visible: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        let mut on_visible = Some(on_visible);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .dyn_into::<IntersectionObserverEntry>()
                        .map(|entry| entry.is_intersecting())
                        .unwrap_or(false)
                });
                if intersecting {
                    observer.disconnect();
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                }
            },
        );

        let mut init = IntersectionObserverInit::new();
        init.root_margin(root_margin);
        init.threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        observer.observe(element);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ViewObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Becomes `true` once at least 10% of the node has been on screen, and
/// stays `true`.
#[hook]
pub fn use_in_view(node: NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let setter = visible.setter();
                    ViewObserver::once(&element, "0px", 0.1, move || setter.set(true))
                });
                // No observer support: show content straight away.
                if observer.is_none() {
                    visible.set(true);
                }
                move || drop(observer)
            },
            node,
        );
    }

    *visible
}

fn viewport_height() -> f64 {
    window()
        .and_then(|window| window.inner_height().ok())
        .and_then(|height| height.as_f64())
        .unwrap_or(0.0)
}

fn document_height() -> f64 {
    window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0)
}

/// How far the whole page has been scrolled, in `[0, 1]`.
#[hook]
pub fn use_scroll_progress() -> f64 {
    let (_, scroll_y) = use_window_scroll();
    document_scroll_progress(scroll_y, document_height(), viewport_height())
}

/// How far `node` has travelled through the viewport, in `[0, 1]`.
#[hook]
pub fn use_element_scroll_progress(node: NodeRef) -> f64 {
    // Re-render on every scroll so the rect below is fresh.
    let _ = use_window_scroll();
    node.cast::<Element>()
        .map(|element| {
            let rect = element.get_bounding_client_rect();
            element_scroll_progress(rect.top(), rect.height(), viewport_height())
        })
        .unwrap_or(0.0)
}

/// Translation for a background that drifts against the mouse.
///
/// The pointer offset from the node's centre is scaled by `multiplier` and
/// then mapped from `input` to `output`. Mouse moves are throttled and
/// applied on the next animation frame.
#[hook]
pub fn use_mouse_parallax(
    node: NodeRef,
    multiplier: f64,
    input: (f64, f64),
    output: (f64, f64),
) -> (f64, f64) {
    let offset = use_state(|| (0.0_f64, 0.0_f64));

    {
        let offset = offset.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let node = node.clone();
                let guard = window().map(|window| {
                    let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();
                    let slot = Rc::clone(&pending);
                    let mut throttle = Throttle::new(PARALLAX_THROTTLE_MS);

                    let listener = EventListener::new(&window, "mousemove", move |event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        if !throttle.admit(Date::now()) {
                            return;
                        }
                        let (client_x, client_y) = (event.client_x() as f64, event.client_y() as f64);
                        let node = node.clone();
                        let offset = offset.clone();
                        let frame = request_animation_frame(move |_| {
                            let Some(element) = node.cast::<Element>() else {
                                return;
                            };
                            let rect = element.get_bounding_client_rect();
                            offset.set((
                                pointer_offset(client_x, rect.left(), rect.width(), multiplier),
                                pointer_offset(client_y, rect.top(), rect.height(), multiplier),
                            ));
                        });
                        // Replacing the slot cancels a frame that has not run yet.
                        *slot.borrow_mut() = Some(frame);
                    });
                    (listener, pending)
                });
                move || drop(guard)
            },
            node,
        );
    }

    let (x, y) = *offset;
    (map_range(x, input, output), map_range(y, input, output))
}
