use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, Event, HtmlAnchorElement};
use yew::prelude::*;

use super::anchor::{fragment_id, AnchorLink, PageLocation, ANCHOR_OFFSET, NO_SMOOTH_SCROLL_ATTR};
use super::browser::{
    element_by_id, window_engine, DocumentLookup, WindowHistory, WindowScrollEngine,
};
use super::engine::ScrollOptions;
use super::input::{follow_anchor, interrupt, INTERRUPT_EVENTS};

/// Delay before honouring a fragment present at page load, lets layout settle.
pub const INITIAL_HASH_DELAY_MS: u32 = 100;

/// Handle to the page's smooth-scroll engine.
#[derive(Clone, PartialEq)]
pub struct SmoothScroll {
    engine: WindowScrollEngine,
}

impl Default for SmoothScroll {
    fn default() -> Self {
        Self {
            engine: window_engine(),
        }
    }
}

impl SmoothScroll {
    pub fn scroll_to(&self, target: Option<&Element>, options: ScrollOptions) {
        self.engine.scroll_to(target, options);
    }

    pub fn cancel(&self) {
        self.engine.cancel();
    }

    pub fn is_active(&self) -> bool {
        self.engine.is_active()
    }

    /// Scrolls to the element a `#fragment` names. Returns `false` when
    /// nothing on the page carries that id.
    pub fn scroll_to_fragment(&self, hash: &str) -> bool {
        let Some(element) = fragment_id(hash).and_then(|id| element_by_id(&id)) else {
            debug!("no element for fragment {}", hash);
            return false;
        };
        self.scroll_to(Some(&element), ScrollOptions::default().with_offset(ANCHOR_OFFSET));
        true
    }
}

/// Window listeners binding the engine to user input. Dropping this
/// removes them and stops any running animation.
struct ScrollListeners {
    scroll: SmoothScroll,
    _interrupts: Vec<EventListener>,
    _click: EventListener,
    _initial_hash: Option<Timeout>,
}

impl ScrollListeners {
    fn install(scroll: &SmoothScroll) -> Option<Self> {
        let window = window()?;

        let interrupts = INTERRUPT_EVENTS
            .iter()
            .map(|&event_type| {
                let scroll = scroll.clone();
                EventListener::new(&window, event_type, move |event| {
                    if interrupt(&scroll.engine, &event.type_()) {
                        debug!("scroll interrupted by {}", event.type_());
                    }
                })
            })
            .collect();

        let click = {
            let scroll = scroll.clone();
            EventListener::new_with_options(
                &window,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| intercept_anchor_click(&scroll, event),
            )
        };

        let initial_hash = window
            .location()
            .hash()
            .ok()
            .filter(|hash| !hash.is_empty())
            .map(|hash| {
                let scroll = scroll.clone();
                Timeout::new(INITIAL_HASH_DELAY_MS, move || {
                    scroll.scroll_to_fragment(&hash);
                })
            });

        Some(Self {
            scroll: scroll.clone(),
            _interrupts: interrupts,
            _click: click,
            _initial_hash: initial_hash,
        })
    }
}

impl Drop for ScrollListeners {
    fn drop(&mut self) {
        self.scroll.cancel();
    }
}

fn intercept_anchor_click(scroll: &SmoothScroll, event: &Event) {
    let Some(anchor) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest("a").ok().flatten())
        .and_then(|anchor| anchor.dyn_into::<HtmlAnchorElement>().ok())
    else {
        return;
    };
    let Some(window) = window() else {
        return;
    };
    let location = window.location();
    let (Ok(host), Ok(pathname)) = (location.host(), location.pathname()) else {
        return;
    };

    let hash = anchor.hash();
    let link_host = anchor.host();
    let link_path = anchor.pathname();
    let link = AnchorLink {
        host: &link_host,
        pathname: &link_path,
        hash: &hash,
        opted_out: anchor.has_attribute(NO_SMOOTH_SCROLL_ATTR),
    };
    let page = PageLocation {
        host: &host,
        pathname: &pathname,
    };

    if follow_anchor(&scroll.engine, &link, &page, &DocumentLookup, &WindowHistory) {
        event.prevent_default();
    }
}

/// Creates the page's engine and keeps its window listeners installed for
/// as long as the calling component is mounted.
#[hook]
pub fn use_smooth_scroll_engine() -> SmoothScroll {
    let scroll = use_memo(|_| SmoothScroll::default(), ());

    {
        let scroll = (*scroll).clone();
        use_effect_with_deps(
            move |_| {
                let listeners = ScrollListeners::install(&scroll);
                move || drop(listeners)
            },
            (),
        );
    }

    (*scroll).clone()
}

/// The engine provided by the nearest [`SmoothScrollProvider`].
#[hook]
pub fn use_smooth_scroll() -> Option<SmoothScroll> {
    use_context::<SmoothScroll>()
}

#[derive(Properties, PartialEq)]
pub struct SmoothScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SmoothScrollProvider)]
pub fn smooth_scroll_provider(props: &SmoothScrollProviderProps) -> Html {
    let scroll = use_smooth_scroll_engine();

    html! {
        <ContextProvider<SmoothScroll> context={scroll}>
            { for props.children.iter() }
        </ContextProvider<SmoothScroll>>
    }
}
