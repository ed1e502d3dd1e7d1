use yew::prelude::*;

use crate::config::{INSTAGRAM_HANDLE, SOCIAL_LINKS};
use crate::content::site;
use crate::motion::hooks::use_mouse_parallax;
use crate::motion::reveal::Reveal;

/// Pixel height of a tile with relative height 1.
const TILE_BASE_HEIGHT: f64 = 280.0;
const TILE_STAGGER_MS: u32 = 100;

/// Grid rows a tile spans in the masonry layout.
pub fn tile_row_span(relative_height: f64) -> u32 {
    (relative_height * 8.0).ceil().max(1.0) as u32
}

#[function_component(Instagram)]
pub fn instagram() -> Html {
    let content = site();
    let posts = &content.instagram;
    let container = use_node_ref();
    let loaded = use_state(|| vec![false; posts.len()]);
    let hovered = use_state(|| None::<usize>);
    let (bg_x, bg_y) = use_mouse_parallax(container.clone(), 50.0, (-100.0, 100.0), (3.0, -3.0));

    let profile_url = SOCIAL_LINKS
        .iter()
        .find(|(label, _, _)| *label == "Instagram")
        .map(|(_, url, _)| *url)
        .unwrap_or("https://instagram.com");

    let tiles = posts
        .iter()
        .enumerate()
        .map(|(index, post)| {
            let is_loaded = loaded.get(index).copied().unwrap_or(false);
            let is_hovered = *hovered == Some(index);

            let onload = {
                let loaded = loaded.clone();
                Callback::from(move |_: Event| {
                    let mut next = (*loaded).clone();
                    if let Some(flag) = next.get_mut(index) {
                        *flag = true;
                    }
                    loaded.set(next);
                })
            };
            let onmouseenter = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
            };
            let onmouseleave = {
                let hovered = hovered.clone();
                Callback::from(move |_: MouseEvent| hovered.set(None))
            };

            html! {
                <div
                    class="insta-cell"
                    style={format!(
                        "grid-row: span {}; height: {}px;",
                        tile_row_span(post.height),
                        TILE_BASE_HEIGHT * post.height
                    )}
                >
                    <Reveal delay_ms={TILE_STAGGER_MS * index as u32} class="insta-reveal">
                        <div
                            class={classes!("insta-tile", is_hovered.then(|| "hovered"))}
                            {onmouseenter}
                            {onmouseleave}
                        >
                            if !is_loaded {
                                <div class="insta-loading"><div class="insta-spinner"></div></div>
                            }
                            <img
                                src={post.url.clone()}
                                alt={format!("Instagram post {}", index + 1)}
                                loading="lazy"
                                class={classes!(is_loaded.then(|| "is-loaded"))}
                                {onload}
                            />
                            <div class="insta-overlay">
                                <p>{&post.caption}</p>
                                <div class="insta-stats">
                                    <span><i class="fa-solid fa-heart"></i>{post.likes}</span>
                                    <span><i class="fa-solid fa-comment"></i>{post.comments}</span>
                                </div>
                            </div>
                            <div class="insta-badge"><i class="fa-brands fa-instagram"></i></div>
                        </div>
                    </Reveal>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section class="instagram" ref={container}>
            <div
                class="instagram-bg"
                style={format!("transform: translate({:.2}px, {:.2}px);", bg_x, bg_y)}
            >
                <div class="insta-orb gold" style="top: 180px; left: 12%; width: 140px; height: 140px;"></div>
                <div class="insta-orb burgundy" style="top: 320px; left: 55%; width: 180px; height: 180px; animation-delay: 0.7s;"></div>
                <div class="insta-orb gold" style="top: 90px; left: 80%; width: 110px; height: 110px; animation-delay: 1.4s;"></div>
            </div>

            <div class="instagram-content">
                <div class="section-heading">
                    <h2><i class="fa-brands fa-instagram"></i>{"Follow Us On Instagram"}</h2>
                    <p class="insta-handle">{format!("@{}", INSTAGRAM_HANDLE)}</p>
                    <div class="section-rule fade"></div>
                </div>

                <div class="insta-grid">{tiles}</div>

                <div class="insta-follow">
                    <a class="button-primary" href={profile_url} target="_blank" rel="noopener noreferrer">
                        {"Follow @"}{INSTAGRAM_HANDLE}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .instagram {
                    position: relative;
                    overflow: hidden;
                    padding: 4rem 1rem;
                    background: linear-gradient(to bottom, rgba(62, 39, 35, 0.05), rgba(245, 236, 215, 0.5));
                    border-top: 1px solid rgba(212, 175, 55, 0.1);
                    border-bottom: 1px solid rgba(212, 175, 55, 0.1);
                }

                .instagram-bg {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                    transition: transform 0.5s ease-out;
                }

                .insta-orb {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(64px);
                    opacity: 0.2;
                    animation: menu-glow-float 15s linear infinite;
                }

                .insta-orb.gold { background: rgba(212, 175, 55, 0.15); }
                .insta-orb.burgundy { background: rgba(128, 0, 32, 0.1); }

                .instagram-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .instagram .section-heading h2 i {
                    color: var(--cafe-burgundy);
                    margin-right: 1rem;
                }

                .insta-handle {
                    font-size: 1.25rem;
                    font-weight: 600;
                    background: linear-gradient(to right, rgba(212, 175, 55, 0.8), rgba(128, 0, 32, 0.8));
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .insta-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    grid-auto-rows: auto;
                    gap: 1.25rem;
                }

                .insta-cell .insta-reveal,
                .insta-tile {
                    height: 100%;
                }

                .insta-tile {
                    position: relative;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    transition: transform 0.2s ease-out;
                }

                .insta-tile.hovered {
                    transform: translateY(-5px) scale(1.03);
                }

                .insta-tile img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0;
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }

                .insta-tile img.is-loaded {
                    opacity: 1;
                }

                .insta-tile.hovered img {
                    transform: scale(1.05);
                }

                .insta-loading {
                    position: absolute;
                    inset: 0;
                    z-index: 1;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #e5e7eb;
                    animation: insta-pulse 2s ease-in-out infinite;
                }

                .insta-spinner {
                    width: 2rem;
                    height: 2rem;
                    border: 4px solid rgba(212, 175, 55, 0.3);
                    border-top-color: var(--cafe-gold);
                    border-radius: 50%;
                    animation: spinner-rotate 1s linear infinite;
                }

                .insta-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding: 1rem;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.8), rgba(0, 0, 0, 0.4), transparent);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .insta-tile.hovered .insta-overlay {
                    opacity: 1;
                }

                .insta-overlay p {
                    color: #fff;
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }

                .insta-stats {
                    display: flex;
                    gap: 0.75rem;
                    color: #fff;
                    font-size: 0.75rem;
                }

                .insta-stats i {
                    margin-right: 0.25rem;
                }

                .insta-stats .fa-heart {
                    color: #ef4444;
                }

                .insta-badge {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    padding: 0.625rem;
                    border-radius: 50%;
                    background: #fff;
                    color: var(--cafe-burgundy);
                    opacity: 0;
                    transform: scale(0);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }

                .insta-tile.hovered .insta-badge {
                    opacity: 1;
                    transform: scale(1);
                }

                .insta-follow {
                    margin-top: 3rem;
                    text-align: center;
                }

                @keyframes insta-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }

                @media (max-width: 767px) {
                    .insta-grid {
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_span_rounds_up() {
        assert_eq!(tile_row_span(1.0), 8);
        assert_eq!(tile_row_span(1.2), 10);
        assert_eq!(tile_row_span(1.5), 12);
        assert_eq!(tile_row_span(0.0), 1);
    }
}
