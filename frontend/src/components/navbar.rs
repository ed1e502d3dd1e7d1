use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Scroll offset past which the bar turns solid.
const SCROLLED_THRESHOLD: f64 = 50.0;

const LINKS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::Menu, "Menu"),
    (Route::About, "About"),
    (Route::Events, "Events"),
    (Route::Contact, "Contact"),
];

/// Whether the bar should be drawn solid at this scroll offset.
pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_THRESHOLD
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let solid = is_scrolled(scroll_y);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", solid.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <i class="fa-solid fa-mug-hot"></i>
                    <span>{"Cafe"}<span class="accent">{"MRP"}</span></span>
                </Link<Route>>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        LINKS.iter().map(|(route, label)| html! {
                            <div onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()} classes="nav-link">
                                    {*label}
                                </Link<Route>>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 1rem 0;
                    background: transparent;
                    transition: background-color 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
                }

                .top-nav.scrolled {
                    padding: 0.5rem 0;
                    background: rgba(62, 39, 35, 0.95);
                    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.25);
                }

                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-family: var(--font-display);
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #fff;
                    text-decoration: none;
                }

                .nav-logo i,
                .nav-logo .accent {
                    color: var(--cafe-gold);
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link {
                    color: var(--cafe-cream);
                    font-weight: 500;
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .nav-link:hover {
                    color: var(--cafe-gold);
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.5rem;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: var(--cafe-cream);
                    transition: transform 0.3s ease, opacity 0.3s ease;
                }

                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }

                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                @media (max-width: 767px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 1rem 1.5rem;
                        background: rgba(62, 39, 35, 0.95);
                    }

                    .nav-links.mobile-menu-open {
                        display: flex;
                    }

                    .nav-link {
                        display: block;
                        padding: 0.5rem 0;
                        font-size: 1.125rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_turns_solid_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(SCROLLED_THRESHOLD));
        assert!(is_scrolled(SCROLLED_THRESHOLD + 1.0));
    }
}
