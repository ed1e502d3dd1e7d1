use log::info;
use web_sys::SubmitEvent;
use yew::prelude::*;

/// Jumps to the top when a page mounts. A `#fragment` in the URL is
/// honoured afterwards by the smooth-scroll listeners.
#[hook]
pub fn use_scroll_to_top() {
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );
}

/// Keeps a form on the page. Submissions are not sent anywhere.
pub fn suppress_submit(form: &'static str) -> Callback<SubmitEvent> {
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        info!("{} form submitted, no handler attached", form);
    })
}
