use yew::prelude::*;
use yew_router::prelude::*;

use super::common::use_scroll_to_top;
use crate::components::page_banner::PageBanner;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_scroll_to_top();

    html! {
        <main class="not-found-page">
            <PageBanner title="404" subtitle="Oops! This page wandered off for a coffee break." />
            <div class="placeholder-body">
                <Link<Route> to={Route::Home} classes="button-primary">
                    {"Return to Home"}
                </Link<Route>>
            </div>
        </main>
    }
}
