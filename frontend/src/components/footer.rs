use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{ADDRESS_LINES, CAFE_TAGLINE, EMAILS, OPENING_HOURS, PHONES, SOCIAL_LINKS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-column">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <i class="fa-solid fa-mug-hot"></i>
                        <span>{"Cafe"}<span class="accent">{"MRP"}</span></span>
                    </Link<Route>>
                    <p class="footer-tagline">{CAFE_TAGLINE}</p>
                    <div class="footer-social">
                        {
                            SOCIAL_LINKS.iter().map(|(label, url, icon)| html! {
                                <a href={*url} target="_blank" rel="noopener noreferrer" aria-label={*label}>
                                    <i class={*icon}></i>
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <div class="footer-column">
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::Home}>{"Home"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Menu}>{"Menu"}</Link<Route>></li>
                        <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Events}>{"Events"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>

                <div class="footer-column">
                    <h3>{"Contact Us"}</h3>
                    <address>
                        { for ADDRESS_LINES.iter().map(|line| html! { <p>{*line}</p> }) }
                        <p class="spaced">{format!("Phone: {}", PHONES[0])}</p>
                        <p>{format!("Email: {}", EMAILS[0])}</p>
                    </address>
                    <div>
                        <h4>{"Hours"}</h4>
                        { for OPENING_HOURS.iter().map(|entry| html! {
                            <p>{format!("{}: {}", entry.days, entry.hours)}</p>
                        }) }
                    </div>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} CafeMRP. All rights reserved.", year)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: var(--cafe-dark-brown);
                    color: var(--cafe-cream);
                    padding: 3rem 1.5rem 1.5rem;
                }

                .footer-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }

                .footer-column h3 {
                    font-family: var(--font-display);
                    color: var(--cafe-gold);
                    font-size: 1.125rem;
                    margin-bottom: 1rem;
                }

                .footer-column h4 {
                    color: var(--cafe-gold);
                    margin: 1rem 0 0.5rem;
                }

                .footer-column ul {
                    list-style: none;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .footer-column a {
                    color: var(--cafe-cream);
                    text-decoration: none;
                    transition: color 0.3s ease;
                }

                .footer-column a:hover {
                    color: var(--cafe-gold);
                }

                .footer-column address {
                    font-style: normal;
                }

                .footer-column .spaced {
                    margin-top: 0.75rem;
                }

                .footer-tagline {
                    max-width: 20rem;
                    opacity: 0.8;
                    margin: 1rem 0;
                }

                .footer-social {
                    display: flex;
                    gap: 1rem;
                    font-size: 1.25rem;
                }

                .footer-bottom {
                    max-width: 1200px;
                    margin: 2.5rem auto 0;
                    padding-top: 1.5rem;
                    border-top: 1px solid #2d2d2d;
                    text-align: center;
                    font-size: 0.875rem;
                    opacity: 0.7;
                }

                @media (max-width: 767px) {
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
