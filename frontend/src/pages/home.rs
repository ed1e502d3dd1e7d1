use yew::prelude::*;

use super::common::use_scroll_to_top;
use crate::home::{
    about::About, contact::Contact, hero::Hero, instagram::Instagram,
    menu_highlights::MenuHighlights, testimonials::Testimonials,
};
use crate::imaging::use_image_fallback;

#[function_component(Home)]
pub fn home() -> Html {
    use_scroll_to_top();
    use_image_fallback();

    html! {
        <main class="home-page">
            <Hero />
            <About />
            <MenuHighlights />
            <Testimonials />
            <Contact />
            <Instagram />
        </main>
    }
}
