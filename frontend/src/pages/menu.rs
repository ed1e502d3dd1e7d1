use yew::prelude::*;

use super::common::use_scroll_to_top;
use crate::components::page_banner::PageBanner;
use crate::content::site;
use crate::imaging::LazyImage;
use crate::motion::reveal::Reveal;

const ITEM_STAGGER_MS: u32 = 80;

#[function_component(Menu)]
pub fn menu() -> Html {
    use_scroll_to_top();
    let content = site();

    // In-page links, handled by the smooth-scroll click interceptor.
    let jump_links = content
        .menu
        .iter()
        .map(|section| {
            html! {
                <a class="menu-jump" href={format!("#{}", section.id.anchor())}>
                    <i class={section.id.icon()}></i>
                    <span>{&section.label}</span>
                </a>
            }
        })
        .collect::<Html>();

    let sections = content
        .menu
        .iter()
        .map(|section| {
            html! {
                <section id={section.id.anchor()} class="menu-category">
                    <h2>{&section.label}</h2>
                    <div class="section-rule"></div>
                    <div class="menu-list">
                        {
                            section.items.iter().enumerate().map(|(i, item)| html! {
                                <Reveal delay_ms={ITEM_STAGGER_MS * i as u32} class="menu-entry">
                                    <LazyImage src={item.image.clone()} alt={item.name.clone()} class="menu-entry-image" />
                                    <div class="menu-entry-text">
                                        <div class="menu-entry-head">
                                            <h3>{&item.name}</h3>
                                            <span class="menu-entry-price">{&item.price}</span>
                                        </div>
                                        <p>{&item.description}</p>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </section>
            }
        })
        .collect::<Html>();

    html! {
        <main class="menu-page">
            <PageBanner title="Our Menu" />
            <div class="menu-page-body">
                <nav class="menu-jumps">{jump_links}</nav>
                {sections}
                <p class="menu-page-note">
                    {"Our full menu is coming soon! Check back for updates."}
                </p>
            </div>
            <style>
                {r#"
                .menu-page-body {
                    max-width: 960px;
                    margin: 0 auto;
                    padding: 4rem 1rem;
                }

                .menu-jumps {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-bottom: 3rem;
                    flex-wrap: wrap;
                }

                .menu-jump {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.625rem 1.25rem;
                    border: 1px solid var(--cafe-gold);
                    border-radius: 9999px;
                    color: var(--cafe-dark-brown);
                    text-decoration: none;
                    transition: background-color 0.3s ease;
                }

                .menu-jump:hover {
                    background: rgba(212, 175, 55, 0.15);
                }

                .menu-category {
                    margin-bottom: 4rem;
                }

                .menu-category h2 {
                    font-family: var(--font-display);
                    font-size: 2.25rem;
                    color: var(--cafe-dark-brown);
                    text-align: center;
                }

                .menu-category .section-rule {
                    margin: 1rem auto 2.5rem;
                }

                .menu-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .menu-entry {
                    display: flex;
                    gap: 1.5rem;
                    align-items: center;
                }

                .menu-entry-image {
                    width: 7rem;
                    height: 7rem;
                    flex-shrink: 0;
                    border-radius: 0.5rem;
                    overflow: hidden;
                }

                .menu-entry-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .menu-entry-text {
                    flex: 1;
                }

                .menu-entry-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: baseline;
                    gap: 1rem;
                    border-bottom: 1px dashed rgba(111, 78, 55, 0.3);
                    padding-bottom: 0.25rem;
                    margin-bottom: 0.5rem;
                }

                .menu-entry-head h3 {
                    font-family: var(--font-display);
                    font-size: 1.25rem;
                    color: var(--cafe-dark-brown);
                }

                .menu-entry-price {
                    color: var(--cafe-gold);
                    font-weight: 700;
                }

                .menu-entry-text p {
                    color: var(--cafe-brown);
                    font-size: 0.95rem;
                }

                .menu-page-note {
                    text-align: center;
                    font-size: 1.25rem;
                    color: var(--cafe-brown);
                }
                "#}
            </style>
        </main>
    }
}
