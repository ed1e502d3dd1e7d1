use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::imaging::preload_images;
use crate::scroll::anchor::ANCHOR_OFFSET;
use crate::scroll::browser::element_by_id;
use crate::scroll::engine::ScrollOptions;
use crate::scroll::hook::use_smooth_scroll;
use crate::Route;

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1600093463592-8e36ae95ef56?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=2070&q=80";
const HERO_TEXT: &str = "A perfect romantic dining experience";

#[function_component(Hero)]
pub fn hero() -> Html {
    let smooth_scroll = use_smooth_scroll();

    use_effect_with_deps(
        |_| {
            preload_images(&[HERO_IMAGE]);
            || ()
        },
        (),
    );

    let scroll_to_about = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        if let Some(scroll) = &smooth_scroll {
            scroll.scroll_to(
                element_by_id("about").as_ref(),
                ScrollOptions::default().with_offset(ANCHOR_OFFSET),
            );
        }
    });

    html! {
        <section class="hero">
            <div class="hero-background" style={format!("background-image: url('{}');", HERO_IMAGE)}>
                <div class="hero-overlay"></div>
            </div>

            <div class="hero-content">
                <h1 class="enter-up">
                    {"Welcome to "}<span class="accent">{"CafeMRP"}</span>
                </h1>
                <p class="hero-lead enter-up" style="animation-delay: 100ms;">
                    {"A perfect blend of exquisite coffee, delicious cuisine, and handcrafted cocktails"}
                </p>
                <div class="hero-actions enter-up" style="animation-delay: 200ms;">
                    <Link<Route> to={Route::Menu} classes="button-primary">
                        {"View Menu"}
                    </Link<Route>>
                    <Link<Route> to={Route::Reservation} classes="button-outline">
                        {"Make Reservation"}
                    </Link<Route>>
                </div>
            </div>

            <div class="hero-text enter-fade" style="animation-delay: 400ms;">
                <p>{HERO_TEXT}</p>
            </div>

            <button class="scroll-indicator" aria-label="Scroll to about" onclick={scroll_to_about}>
                <span class="scroll-indicator-dot"></span>
            </button>

            <style>
                {r#"
                .hero {
                    position: relative;
                    height: 100vh;
                    overflow: hidden;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    animation: hero-zoom 1.5s ease-out both;
                    will-change: transform, opacity;
                }

                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.85), rgba(0, 0, 0, 0.75), rgba(0, 0, 0, 0.85));
                }

                .hero-content {
                    position: relative;
                    z-index: 1;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 0 1rem;
                }

                .hero h1 {
                    font-family: var(--font-display);
                    font-size: 4.5rem;
                    color: #fff;
                    margin-bottom: 1rem;
                }

                .hero-lead {
                    font-size: 1.5rem;
                    color: var(--cafe-cream);
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }

                .hero-text {
                    position: absolute;
                    bottom: 10rem;
                    left: 0;
                    right: 0;
                    z-index: 1;
                    text-align: center;
                }

                .hero-text p {
                    font-family: var(--font-display);
                    font-style: italic;
                    font-size: 1.5rem;
                    color: rgba(212, 175, 55, 0.9);
                }

                .scroll-indicator {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    z-index: 1;
                    width: 2rem;
                    height: 3rem;
                    margin-left: -1rem;
                    border: 2px solid var(--cafe-cream);
                    border-radius: 9999px;
                    background: transparent;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    animation: scroll-bob 2s ease-in-out infinite;
                }

                .scroll-indicator-dot {
                    width: 0.375rem;
                    height: 0.75rem;
                    border-radius: 9999px;
                    background: var(--cafe-cream);
                }

                @keyframes hero-zoom {
                    from { transform: scale(1.1); opacity: 0; }
                    to { transform: scale(1); opacity: 1; }
                }

                @keyframes scroll-bob {
                    0%, 25%, 100% { transform: translateY(0); }
                    12% { transform: translateY(8px); }
                }

                @media (max-width: 767px) {
                    .hero h1 {
                        font-size: 3rem;
                    }

                    .hero-lead {
                        font-size: 1.25rem;
                    }

                    .hero-actions {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </section>
    }
}
