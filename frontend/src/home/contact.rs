use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::map_embed::MapEmbed;
use crate::config::{ADDRESS_LINES, CAFE_LOCATION, EMAILS, MAP_ZOOM, OPENING_HOURS, PHONES};
use crate::motion::reveal::{Reveal, RevealFrom};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ContactItemProps {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: Vec<String>,
}

#[function_component(ContactItem)]
pub fn contact_item(props: &ContactItemProps) -> Html {
    html! {
        <Reveal from={RevealFrom::Left} class="contact-item">
            <div class="contact-icon"><i class={props.icon}></i></div>
            <div>
                <h3>{props.title}</h3>
                <div class="contact-lines">
                    { for props.lines.iter().map(|line| html! { <p>{line}</p> }) }
                </div>
            </div>
        </Reveal>
    }
}

/// Address, hours, phone and email blocks.
pub fn contact_items() -> Html {
    html! {
        <>
            <ContactItem
                icon="fa-solid fa-location-dot"
                title="Our Location"
                lines={ADDRESS_LINES.iter().map(|l| l.to_string()).collect::<Vec<_>>()}
            />
            <ContactItem
                icon="fa-solid fa-clock"
                title="Opening Hours"
                lines={OPENING_HOURS.iter().map(|h| format!("{}: {}", h.days, h.hours)).collect::<Vec<_>>()}
            />
            <ContactItem
                icon="fa-solid fa-phone"
                title="Phone"
                lines={PHONES.iter().map(|p| p.to_string()).collect::<Vec<_>>()}
            />
            <ContactItem
                icon="fa-solid fa-envelope"
                title="Email"
                lines={EMAILS.iter().map(|e| e.to_string()).collect::<Vec<_>>()}
            />
        </>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id="visit" class="contact-section">
            <div class="contact-content">
                <div class="section-heading">
                    <Reveal><h2>{"Visit Us"}</h2></Reveal>
                    <div class="section-rule grow"></div>
                    <Reveal from={RevealFrom::Fade} delay_ms={500}>
                        <p>{"We'd love to see you! Drop by our location in Connaught Place or get in touch to book a reservation."}</p>
                    </Reveal>
                </div>

                <div class="contact-layout">
                    <Reveal from={RevealFrom::Left} class="contact-map">
                        <MapEmbed
                            lat={CAFE_LOCATION.lat}
                            lng={CAFE_LOCATION.lng}
                            zoom={MAP_ZOOM}
                            height="100%"
                            title={CAFE_LOCATION.address}
                        />
                    </Reveal>
                    <Reveal from={RevealFrom::Right} class="contact-details">
                        { contact_items() }
                        <Link<Route> to={Route::Reservation} classes="button-primary contact-cta">
                            {"Make a Reservation"}
                        </Link<Route>>
                    </Reveal>
                </div>
            </div>

            <style>
                {r#"
                .contact-section {
                    padding: 5rem 1rem;
                    background: var(--cafe-cream);
                }

                .contact-content {
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .contact-layout {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                }

                .contact-map,
                .contact-map .map-embed {
                    min-height: 420px;
                    height: 100%;
                }

                .contact-item > .reveal,
                .contact-item {
                    display: flex;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }

                .contact-icon {
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 50%;
                    background: var(--cafe-gold);
                    color: var(--cafe-dark-brown);
                    font-size: 1.25rem;
                }

                .contact-item h3 {
                    font-family: var(--font-display);
                    font-size: 1.25rem;
                    color: var(--cafe-dark-brown);
                    margin-bottom: 0.5rem;
                }

                .contact-lines {
                    color: var(--cafe-brown);
                }

                .contact-cta {
                    display: block;
                    width: 100%;
                    text-align: center;
                    margin-top: 1rem;
                }

                @media (max-width: 1023px) {
                    .contact-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
