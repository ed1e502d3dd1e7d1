use yew::prelude::*;

use super::common::use_scroll_to_top;
use crate::components::page_banner::PageBanner;

#[function_component(Events)]
pub fn events() -> Html {
    use_scroll_to_top();

    html! {
        <main class="events-page">
            <PageBanner title="Events & Happenings" />
            <div class="placeholder-body">
                <p>
                    {"Our Events calendar is coming soon! Check back for updates on live music, tastings, and special events."}
                </p>
            </div>
        </main>
    }
}
