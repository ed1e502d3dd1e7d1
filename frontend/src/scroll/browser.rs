use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{window, Element};

use super::engine::{FrameScheduler, ScrollEngine, ScrollTarget, Viewport};
use super::input::{HistorySink, TargetLookup};

/// The browser window's document scroll position.
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn scroll_top(&self) -> f64 {
        let Some(window) = window() else {
            return 0.0;
        };
        if let Ok(y) = window.scroll_y() {
            return y;
        }
        window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| root.scroll_top() as f64)
            .unwrap_or(0.0)
    }

    fn set_scroll_top(&self, top: f64) {
        if let Some(window) = window() {
            let x = window.scroll_x().unwrap_or(0.0);
            window.scroll_to_with_x_and_y(x, top);
        }
    }
}

/// Drives frames from `requestAnimationFrame`.
pub struct AnimationFrameScheduler;

impl FrameScheduler for AnimationFrameScheduler {
    type Frame = AnimationFrame;

    fn request_frame(&self, callback: Box<dyn FnOnce(f64)>) -> AnimationFrame {
        request_animation_frame(callback)
    }
}

impl ScrollTarget for Element {
    fn viewport_top(&self) -> f64 {
        self.get_bounding_client_rect().top()
    }
}

pub type WindowScrollEngine = ScrollEngine<WindowViewport, AnimationFrameScheduler>;

pub fn window_engine() -> WindowScrollEngine {
    ScrollEngine::new(Rc::new(WindowViewport), Rc::new(AnimationFrameScheduler))
}

/// Looks up the element a fragment id points at.
pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

/// Resolves fragment ids against the current document.
pub struct DocumentLookup;

impl TargetLookup for DocumentLookup {
    type Target = Element;

    fn find(&self, id: &str) -> Option<Element> {
        element_by_id(id)
    }
}

/// Pushes fragments onto the window's session history.
pub struct WindowHistory;

impl HistorySink for WindowHistory {
    fn push_hash(&self, hash: &str) {
        let Some(history) = window().and_then(|window| window.history().ok()) else {
            debug!("no history available for {}", hash);
            return;
        };
        if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(hash)) {
            debug!("pushState for {} failed: {:?}", hash, err);
        }
    }
}
