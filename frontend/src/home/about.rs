use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::imaging::LazyImage;
use crate::motion::hooks::use_scroll_progress;
use crate::motion::math::map_range;
use crate::motion::reveal::{Reveal, RevealFrom};
use crate::Route;

const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1600093463592-8e36ae95ef56?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1470&q=80";

pub const STORY: [&str; 3] = [
    "Founded in 2018, CafeMRP has quickly become the heart of the community, offering a unique combination of specialty coffee, gourmet food, and craft cocktails.",
    "Our mission is simple: create a warm, inviting space where people can gather to enjoy exceptional food and drink in a relaxed atmosphere. Every detail, from our carefully sourced coffee beans to our locally inspired menu, reflects our commitment to quality and sustainability.",
    "Whether you're starting your day with a freshly brewed coffee, meeting friends for lunch, or unwinding in the evening with a signature cocktail, CafeMRP provides the perfect setting for every occasion.",
];

#[function_component(About)]
pub fn about() -> Html {
    let hovered = use_state(|| false);
    let progress = use_scroll_progress();
    // Gold block drifts up as the page scrolls.
    let drift = map_range(progress, (0.0, 1.0), (0.0, -50.0));

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <section id="about" class="about-section">
            <div class="blob blob-gold"></div>
            <div class="blob blob-burgundy"></div>

            <div class="about-layout">
                <Reveal from={RevealFrom::Left} class="about-media">
                    <div
                        class={classes!("about-frame", (*hovered).then(|| "hovered"))}
                        {onmouseenter}
                        {onmouseleave}
                    >
                        <div class="about-image">
                            <LazyImage src={ABOUT_IMAGE} alt="CafeMRP Interior" />
                            <div class="about-caption">
                                <span>{"Where Every Cup Tells a Story"}</span>
                            </div>
                        </div>
                        <div
                            class="about-deco about-deco-block"
                            style={format!("translate: 0 {:.1}px;", drift)}
                        ></div>
                        <div class="about-deco about-deco-outline"></div>
                    </div>
                </Reveal>

                <Reveal from={RevealFrom::Right} class="about-copy">
                    <h2 class="about-title">
                        <span>{"Our Story"}</span>
                        <span class="about-title-bar"></span>
                    </h2>
                    {
                        STORY.iter().enumerate().map(|(i, paragraph)| html! {
                            <Reveal delay_ms={100 * (i as u32 + 1)}>
                                <p>{*paragraph}</p>
                            </Reveal>
                        }).collect::<Html>()
                    }
                    <Reveal delay_ms={400}>
                        <Link<Route> to={Route::About} classes="button-primary">
                            {"Learn More About Us"}
                        </Link<Route>>
                    </Reveal>
                </Reveal>
            </div>

            <style>
                {r#"
                .about-section {
                    position: relative;
                    overflow: hidden;
                    padding: 5rem 1rem;
                    background: var(--cafe-cream);
                }

                .blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                }

                .blob-gold {
                    top: 0;
                    left: 0;
                    width: 16rem;
                    height: 16rem;
                    background: rgba(212, 175, 55, 0.1);
                    transform: translate(-50%, -50%);
                }

                .blob-burgundy {
                    bottom: 0;
                    right: 0;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(128, 0, 32, 0.05);
                    transform: translate(33%, 33%);
                }

                .about-layout {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    gap: 3rem;
                }

                .about-layout > .reveal {
                    flex: 1;
                }

                .about-frame {
                    position: relative;
                }

                .about-image {
                    position: relative;
                    z-index: 1;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    transition: transform 0.3s ease;
                }

                .about-frame.hovered .about-image {
                    transform: scale(1.02);
                }

                .about-caption {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: flex-end;
                    padding: 1.5rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .about-caption span {
                    font-family: var(--font-display);
                    font-size: 1.25rem;
                    color: #fff;
                    transform: translateY(20px);
                    transition: transform 0.3s ease 0.1s;
                }

                .about-frame.hovered .about-caption {
                    opacity: 1;
                }

                .about-frame.hovered .about-caption span {
                    transform: none;
                }

                .about-deco {
                    position: absolute;
                    border-radius: 0.5rem;
                    transition: transform 0.4s ease;
                }

                .about-deco-block {
                    bottom: -1.5rem;
                    right: -1.5rem;
                    width: 8rem;
                    height: 8rem;
                    background: var(--cafe-gold);
                }

                .about-deco-outline {
                    top: -1rem;
                    left: -1rem;
                    width: 5rem;
                    height: 5rem;
                    border: 2px solid var(--cafe-burgundy);
                }

                .about-frame.hovered .about-deco-block {
                    transform: rotate(10deg) scale(1.1);
                }

                .about-frame.hovered .about-deco-outline {
                    transform: rotate(-5deg) scale(1.1);
                }

                .about-title {
                    position: relative;
                    font-family: var(--font-display);
                    font-size: 2.25rem;
                    color: var(--cafe-dark-brown);
                    margin-bottom: 2rem;
                }

                .about-title span:first-child {
                    position: relative;
                    z-index: 1;
                }

                .about-title-bar {
                    position: absolute;
                    bottom: 0;
                    left: 0;
                    height: 0.5rem;
                    width: 0;
                    background: var(--cafe-gold);
                    transition: width 0.8s ease 0.3s;
                }

                .is-visible .about-title-bar {
                    width: 5rem;
                }

                .about-copy p {
                    color: var(--cafe-brown);
                    line-height: 1.7;
                    margin-bottom: 1.25rem;
                }

                @media (max-width: 767px) {
                    .about-layout {
                        flex-direction: column;
                    }

                    .about-deco {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
