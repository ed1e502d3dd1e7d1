use yew::prelude::*;
use yew_router::prelude::*;

use crate::content::{site, MenuCategory, MenuItem};
use crate::imaging::LazyImage;
use crate::motion::hooks::use_mouse_parallax;
use crate::Route;

/// Stagger between card entrances.
const CARD_STAGGER_MS: u32 = 80;

#[derive(Properties, PartialEq)]
struct MenuCardProps {
    item: MenuItem,
    index: usize,
}

#[function_component(MenuCard)]
fn menu_card(props: &MenuCardProps) -> Html {
    let MenuCardProps { item, index } = props;
    let featured = *index == 0;

    html! {
        <div
            class="menu-card enter-up"
            style={format!("animation-delay: {}ms;", CARD_STAGGER_MS * *index as u32)}
        >
            <div class="menu-card-media">
                <LazyImage src={item.image.clone()} alt={item.name.clone()} />
                <div class="menu-card-shade"></div>
                <div class="menu-card-price"><span>{&item.price}</span></div>
                if featured {
                    <div class="menu-card-hot">
                        <i class="fa-solid fa-fire"></i>
                        <span>{"Hot"}</span>
                    </div>
                }
            </div>
            <div class="menu-card-body">
                if featured {
                    <div class="menu-card-featured">
                        <i class="fa-solid fa-star"></i>
                        <span>{"FEATURED"}</span>
                    </div>
                }
                <h3>{&item.name}</h3>
                <p>{&item.description}</p>
            </div>
        </div>
    }
}

#[function_component(MenuHighlights)]
pub fn menu_highlights() -> Html {
    let content = site();
    let active = use_state(|| MenuCategory::Coffee);
    let container = use_node_ref();
    let (bg_x, bg_y) = use_mouse_parallax(container.clone(), 200.0, (-300.0, 300.0), (5.0, -5.0));

    let section = content.section(*active);
    let background = section.map(|s| s.background.clone()).unwrap_or_default();

    let tabs = content
        .menu
        .iter()
        .map(|section| {
            let category = section.id;
            let onclick = {
                let active = active.clone();
                Callback::from(move |_: MouseEvent| active.set(category))
            };
            html! {
                <button
                    class={classes!("menu-tab", (*active == category).then(|| "active"))}
                    {onclick}
                >
                    <i class={category.icon()}></i>
                    <span>{&section.label}</span>
                </button>
            }
        })
        .collect::<Html>();

    let cards = section
        .map(|section| {
            section
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    html! {
                        <MenuCard
                            key={format!("{}-{}", section.id.anchor(), index)}
                            item={item.clone()}
                            {index}
                        />
                    }
                })
                .collect::<Html>()
        })
        .unwrap_or_default();

    html! {
        <section id="menu-highlights" class="menu-highlights" ref={container}>
            <div
                class="menu-highlights-bg"
                style={format!(
                    "background-image: url('{}'); transform: translate({:.2}px, {:.2}px);",
                    background, bg_x, bg_y
                )}
            >
                <div class="menu-highlights-shade"></div>
                <div class={classes!("menu-glow", active.anchor())}></div>
            </div>

            <div class="menu-highlights-content">
                <div class="section-heading light">
                    <h2>{"Menu Highlights"}</h2>
                    <div class="section-rule fade"></div>
                    <p>{"Explore our curated selection of specialty coffee, delicious cuisine, and craft cocktails."}</p>
                </div>

                <div class="menu-tabs">
                    <div class="menu-tabs-inner">{tabs}</div>
                </div>

                <div class="menu-grid">{cards}</div>

                <div class="menu-highlights-more">
                    <Link<Route> to={Route::Menu} classes="button-outline">
                        {"View Full Menu"}
                    </Link<Route>>
                </div>
            </div>

            <style>
                {r#"
                .menu-highlights {
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 1rem;
                }

                .menu-highlights-bg {
                    position: absolute;
                    inset: -10px;
                    background-size: cover;
                    background-position: center;
                    transition: background-image 1s ease;
                    will-change: transform;
                }

                .menu-highlights-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.75), rgba(0, 0, 0, 0.8));
                }

                .menu-glow {
                    position: absolute;
                    top: 20%;
                    left: 30%;
                    width: 12rem;
                    height: 12rem;
                    border-radius: 50%;
                    filter: blur(64px);
                    opacity: 0.2;
                    animation: menu-glow-float 15s linear infinite;
                }

                .menu-glow.coffee { background: rgba(101, 67, 33, 0.6); }
                .menu-glow.food { background: rgba(133, 100, 4, 0.6); }
                .menu-glow.drinks { background: rgba(128, 0, 32, 0.6); }

                .menu-highlights-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .menu-tabs {
                    display: flex;
                    justify-content: center;
                    margin-bottom: 4rem;
                }

                .menu-tabs-inner {
                    display: flex;
                    gap: 0.75rem;
                    padding: 0.5rem;
                    background: rgba(0, 0, 0, 0.4);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                }

                .menu-tab {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.75rem 1.25rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    color: var(--cafe-cream);
                    font-weight: 500;
                    cursor: pointer;
                    transition: background-color 0.3s ease, transform 0.2s ease;
                }

                .menu-tab:hover {
                    background: rgba(255, 255, 255, 0.1);
                    transform: scale(1.05);
                }

                .menu-tab i {
                    color: rgba(212, 175, 55, 0.8);
                }

                .menu-tab.active {
                    background: linear-gradient(to right, rgba(212, 175, 55, 0.9), rgba(212, 175, 55, 0.8));
                    color: var(--cafe-dark-brown);
                }

                .menu-tab.active i {
                    color: var(--cafe-dark-brown);
                }

                .menu-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2.5rem;
                }

                .menu-card {
                    position: relative;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.3);
                    transition: transform 0.3s ease-out;
                }

                .menu-card:hover {
                    transform: translateY(-10px) scale(1.03);
                }

                .menu-card-media {
                    position: relative;
                    height: 16rem;
                    overflow: hidden;
                }

                .menu-card-media img {
                    width: 100%;
                    height: 16rem;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }

                .menu-card:hover .menu-card-media img {
                    transform: scale(1.05);
                }

                .menu-card-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.9), rgba(0, 0, 0, 0.5), transparent);
                }

                .menu-card-price {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    width: 4rem;
                    height: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    border: 2px solid rgba(212, 175, 55, 0.8);
                    background: rgba(62, 39, 35, 0.8);
                    color: var(--cafe-gold);
                    font-size: 0.875rem;
                    font-weight: 700;
                }

                .menu-card-hot {
                    position: absolute;
                    top: 1rem;
                    left: 1rem;
                    display: flex;
                    gap: 0.25rem;
                    align-items: center;
                    padding: 0.25rem 0.5rem;
                    border-radius: 9999px;
                    background: rgba(128, 0, 32, 0.9);
                    color: #fff;
                    font-size: 0.75rem;
                }

                .menu-card-body {
                    position: relative;
                    padding: 1.5rem;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.6));
                }

                .menu-card-featured {
                    position: absolute;
                    top: -1.25rem;
                    left: 1.5rem;
                    display: flex;
                    gap: 0.25rem;
                    align-items: center;
                    padding: 0.25rem 0.75rem;
                    border-radius: 0.375rem;
                    background: rgba(212, 175, 55, 0.9);
                    color: var(--cafe-dark-brown);
                    font-size: 0.75rem;
                    font-weight: 700;
                }

                .menu-card-body h3 {
                    font-family: var(--font-display);
                    font-size: 1.25rem;
                    color: #fff;
                    margin-bottom: 0.75rem;
                }

                .menu-card-body p {
                    color: rgba(245, 236, 215, 0.9);
                    font-size: 0.875rem;
                    line-height: 1.6;
                }

                .menu-highlights-more {
                    margin-top: 4rem;
                    text-align: center;
                }

                @keyframes menu-glow-float {
                    0%, 100% { transform: translateY(0) scale(1); }
                    50% { transform: translateY(-20px) scale(1.05); }
                }

                @media (max-width: 1023px) {
                    .menu-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 767px) {
                    .menu-grid {
                        grid-template-columns: 1fr;
                    }

                    .menu-tab {
                        padding: 0.75rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
