use yew::prelude::*;
use yew_router::prelude::*;

use super::common::use_scroll_to_top;
use crate::components::page_banner::PageBanner;
use crate::home::about::STORY;
use crate::motion::reveal::Reveal;
use crate::Route;

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="about-page">
            <PageBanner title="About Us" subtitle="Where Every Cup Tells a Story" />
            <div class="about-page-body">
                <h2>{"Our Story"}</h2>
                <div class="section-rule"></div>
                {
                    STORY.iter().enumerate().map(|(i, paragraph)| html! {
                        <Reveal delay_ms={100 * i as u32}>
                            <p>{*paragraph}</p>
                        </Reveal>
                    }).collect::<Html>()
                }
                <div class="about-page-actions">
                    <Link<Route> to={Route::Menu} classes="button-primary">{"Explore the Menu"}</Link<Route>>
                    <Link<Route> to={Route::Contact} classes="button-outline dark">{"Get In Touch"}</Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .about-page-body {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }

                .about-page-body h2 {
                    font-family: var(--font-display);
                    font-size: 2.25rem;
                    color: var(--cafe-dark-brown);
                }

                .about-page-body .section-rule {
                    margin: 1rem 0 2rem;
                }

                .about-page-body p {
                    color: var(--cafe-brown);
                    line-height: 1.8;
                    margin-bottom: 1.25rem;
                }

                .about-page-actions {
                    display: flex;
                    gap: 1rem;
                    margin-top: 2rem;
                    flex-wrap: wrap;
                }
                "#}
            </style>
        </main>
    }
}
