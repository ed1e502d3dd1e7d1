use yew::prelude::*;

use super::common::{suppress_submit, use_scroll_to_top};
use crate::components::page_banner::PageBanner;
use crate::home::contact::contact_items;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class="contact-page">
            <PageBanner title="Get In Touch" />
            <div class="form-page-body">
                <div class="form-page-grid">
                    <div class="enter-left">
                        <h2>{"Contact Information"}</h2>
                        { contact_items() }
                    </div>
                    <div class="enter-right">
                        <h2>{"Send Us a Message"}</h2>
                        <form class="cafe-form" onsubmit={suppress_submit("contact")}>
                            <div class="form-field">
                                <label for="name">{"Your Name"}</label>
                                <input type="text" id="name" placeholder="John Doe" />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Your Email"}</label>
                                <input type="email" id="email" placeholder="john@example.com" />
                            </div>
                            <div class="form-field">
                                <label for="subject">{"Subject"}</label>
                                <input type="text" id="subject" placeholder="Reservation Inquiry" />
                            </div>
                            <div class="form-field">
                                <label for="message">{"Your Message"}</label>
                                <textarea id="message" rows="4" placeholder="Write your message here..."></textarea>
                            </div>
                            <button type="submit" class="button-primary">{"Send Message"}</button>
                        </form>
                    </div>
                </div>
            </div>
        </main>
    }
}
