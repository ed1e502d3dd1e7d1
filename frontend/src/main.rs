use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod content;
mod imaging;
mod scroll {
    pub mod anchor;
    pub mod browser;
    pub mod easing;
    pub mod engine;
    pub mod hook;
    pub mod input;
}
mod motion {
    pub mod hooks;
    pub mod math;
    pub mod reveal;
}
mod components {
    pub mod footer;
    pub mod loading_spinner;
    pub mod map_embed;
    pub mod navbar;
    pub mod page_banner;
    pub mod whatsapp_button;
}
mod home {
    pub mod about;
    pub mod contact;
    pub mod hero;
    pub mod instagram;
    pub mod menu_highlights;
    pub mod testimonials;
}
mod pages {
    pub mod about;
    pub mod common;
    pub mod contact;
    pub mod events;
    pub mod home;
    pub mod menu;
    pub mod not_found;
    pub mod reservation;
}

use components::{
    footer::Footer,
    navbar::Navbar,
    whatsapp_button::{ButtonPosition, WhatsAppButton},
};
use pages::{
    about::AboutPage,
    contact::ContactPage,
    events::Events,
    home::Home,
    menu::Menu,
    not_found::NotFound,
    reservation::Reservation,
};
use scroll::hook::SmoothScrollProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/menu")]
    Menu,
    #[at("/about")]
    About,
    #[at("/events")]
    Events,
    #[at("/contact")]
    Contact,
    #[at("/reservation")]
    Reservation,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Menu => {
            info!("Rendering Menu page");
            html! { <Menu /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        },
        Route::Events => {
            info!("Rendering Events page");
            html! { <Events /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        },
        Route::Reservation => {
            info!("Rendering Reservation page");
            html! { <Reservation /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SmoothScrollProvider>
                <Navbar />
                <Switch<Route> render={switch} />
                <Footer />
                <WhatsAppButton position={ButtonPosition::BottomRight} show_on_mobile={true} />
            </SmoothScrollProvider>
            <style>
                {r#"
                :root {
                    --cafe-dark-brown: #3e2723;
                    --cafe-brown: #6f4e37;
                    --cafe-cream: #f5ecd7;
                    --cafe-gold: #d4af37;
                    --cafe-burgundy: #800020;
                    --font-display: 'Playfair Display', Georgia, serif;
                    --font-body: 'Poppins', system-ui, sans-serif;
                }

                * {
                    box-sizing: border-box;
                    margin: 0;
                    padding: 0;
                }

                body {
                    font-family: var(--font-body);
                    background: #fff;
                    color: var(--cafe-dark-brown);
                    min-height: 100vh;
                }

                .accent {
                    color: var(--cafe-gold);
                }

                .button-primary,
                .button-outline {
                    display: inline-block;
                    padding: 0.75rem 2rem;
                    border-radius: 0.375rem;
                    font-weight: 500;
                    text-decoration: none;
                    cursor: pointer;
                    transition: background-color 0.3s ease, color 0.3s ease, transform 0.2s ease;
                }

                .button-primary {
                    background: var(--cafe-gold);
                    color: var(--cafe-dark-brown);
                    border: none;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }

                .button-primary:hover {
                    background: var(--cafe-dark-brown);
                    color: #fff;
                    transform: scale(1.03);
                }

                .button-primary.wide {
                    width: 100%;
                }

                .button-outline {
                    background: transparent;
                    border: 2px solid var(--cafe-gold);
                    color: var(--cafe-gold);
                }

                .button-outline:hover {
                    background: rgba(212, 175, 55, 0.1);
                }

                .button-outline.dark {
                    color: var(--cafe-dark-brown);
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 3rem;
                }

                .section-heading h2 {
                    font-family: var(--font-display);
                    font-size: 3rem;
                    color: var(--cafe-dark-brown);
                    margin-bottom: 1rem;
                }

                .section-heading p {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: var(--cafe-brown);
                }

                .section-heading.light h2 {
                    color: #fff;
                    text-shadow: 0 2px 5px rgba(0, 0, 0, 0.3);
                }

                .section-heading.light p {
                    color: rgba(245, 236, 215, 0.9);
                }

                .section-rule {
                    width: 6rem;
                    height: 0.25rem;
                    margin: 0 auto 1.5rem;
                    background: var(--cafe-gold);
                }

                .section-rule.fade {
                    width: 8rem;
                    height: 2px;
                    background: linear-gradient(to right, transparent, var(--cafe-gold), transparent);
                }

                .section-rule.grow {
                    animation: rule-grow 0.5s ease-out 0.3s both;
                }

                .placeholder-body {
                    padding: 4rem 1rem;
                    text-align: center;
                    font-size: 1.25rem;
                    color: var(--cafe-brown);
                }

                .form-page-body {
                    padding: 4rem 1rem;
                    background: var(--cafe-cream);
                }

                .form-page-grid {
                    max-width: 1200px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }

                .form-page-body h2 {
                    font-family: var(--font-display);
                    font-size: 1.875rem;
                    color: var(--cafe-dark-brown);
                    margin-bottom: 1.5rem;
                }

                .form-card {
                    max-width: 42rem;
                    margin: 0 auto;
                    padding: 2rem;
                    background: #fff;
                    border-radius: 0.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }

                .cafe-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .form-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }

                .form-field label {
                    display: block;
                    font-weight: 500;
                    margin-bottom: 0.5rem;
                }

                .form-field input,
                .form-field select,
                .form-field textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.375rem;
                    font: inherit;
                }

                .form-field input:focus,
                .form-field select:focus,
                .form-field textarea:focus {
                    outline: 2px solid var(--cafe-gold);
                    border-color: transparent;
                }

                .form-note {
                    text-align: center;
                    font-size: 0.875rem;
                    color: #6b7280;
                }

                .lazy-image img {
                    display: block;
                    width: 100%;
                    filter: blur(8px);
                    transition: filter 0.5s ease, opacity 0.5s ease;
                }

                .lazy-image img.is-loaded {
                    filter: none;
                }

                .reveal {
                    opacity: 0;
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }

                .reveal-below { transform: translateY(20px); }
                .reveal-above { transform: translateY(-20px); }
                .reveal-left { transform: translateX(-30px); }
                .reveal-right { transform: translateX(30px); }

                .reveal.is-visible {
                    opacity: 1;
                    transform: none;
                }

                .enter-up { animation: enter-up 0.5s ease-out both; }
                .enter-down { animation: enter-down 0.5s ease-out both; }
                .enter-left { animation: enter-left 0.7s ease-out both; }
                .enter-right { animation: enter-right 0.7s ease-out both; }
                .enter-fade { animation: enter-fade 0.5s ease-out both; }

                @keyframes enter-up {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: none; }
                }

                @keyframes enter-down {
                    from { opacity: 0; transform: translateY(-20px); }
                    to { opacity: 1; transform: none; }
                }

                @keyframes enter-left {
                    from { opacity: 0; transform: translateX(-30px); }
                    to { opacity: 1; transform: none; }
                }

                @keyframes enter-right {
                    from { opacity: 0; transform: translateX(30px); }
                    to { opacity: 1; transform: none; }
                }

                @keyframes enter-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }

                @keyframes rule-grow {
                    from { width: 0; }
                    to { width: 6rem; }
                }

                @media (max-width: 767px) {
                    .section-heading h2 {
                        font-size: 2.25rem;
                    }

                    .form-page-grid,
                    .form-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
