use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::is_mobile;
use crate::content::{site, Testimonial};
use crate::motion::hooks::use_element_scroll_progress;
use crate::motion::math::{interpolate, map_range};

pub const DESKTOP_ROTATE_MS: u32 = 6_000;
pub const MOBILE_ROTATE_MS: u32 = 8_000;

/// (left %, top %, size px, opacity, animation delay s)
const SPARKS: [(f64, f64, f64, f64, f64); 6] = [
    (8.0, 20.0, 6.0, 0.3, 0.0),
    (22.0, 70.0, 4.0, 0.2, 1.5),
    (45.0, 35.0, 8.0, 0.25, 3.0),
    (63.0, 80.0, 5.0, 0.3, 0.8),
    (78.0, 15.0, 7.0, 0.2, 2.2),
    (92.0, 55.0, 4.0, 0.35, 4.1),
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + 1) % len
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (current + len - 1) % len
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let t = &props.testimonial;
    html! {
        <div class="testimonial-card enter-fade">
            <div class="testimonial-avatar">
                <div class="testimonial-photo">
                    <img src={t.image.clone()} alt={t.name.clone()} loading="lazy" />
                </div>
                <div class="testimonial-ring"></div>
            </div>
            <div class="testimonial-body">
                <div class="testimonial-quote-mark"><i class="fa-solid fa-quote-left"></i></div>
                <p class="testimonial-quote">{format!("\"{}\"", t.quote)}</p>
                <h4>{&t.name}</h4>
                <p class="testimonial-role">{&t.role}</p>
                <div class="testimonial-stars">
                    { for (0..t.rating).map(|_| html! { <i class="fa-solid fa-star"></i> }) }
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let content = site();
    let len = content.testimonials.len();
    let active = use_state(|| 0_usize);
    let (width, _) = use_window_size();
    let mobile = is_mobile(width);
    let container = use_node_ref();
    let progress = use_element_scroll_progress(container.clone());

    {
        let active = active.clone();
        use_interval(
            move || active.set(next_index(*active, len)),
            if mobile { MOBILE_ROTATE_MS } else { DESKTOP_ROTATE_MS },
        );
    }

    let heading_y = map_range(progress, (0.0, 1.0), (0.0, -30.0));
    let heading_opacity = interpolate(progress, &[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0]);

    let on_prev = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(prev_index(*active, len)))
    };
    let on_next = {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(next_index(*active, len)))
    };

    let dots = (0..len)
        .map(|index| {
            let onclick = {
                let active = active.clone();
                Callback::from(move |_: MouseEvent| active.set(index))
            };
            html! {
                <button
                    class={classes!("testimonial-dot", (index == *active).then(|| "active"))}
                    aria-label={format!("Go to testimonial {}", index + 1)}
                    {onclick}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section class="testimonials" ref={container}>
            <div class="testimonials-bg">
                if !mobile {
                    <div class="testimonials-grid"></div>
                }
                {
                    SPARKS.iter().map(|(left, top, size, opacity, delay)| html! {
                        <div
                            class="testimonial-spark"
                            style={format!(
                                "left: {}%; top: {}%; width: {}px; height: {}px; opacity: {}; animation-delay: {}s;",
                                left, top, size, size, opacity, delay
                            )}
                        ></div>
                    }).collect::<Html>()
                }
            </div>

            <div class="testimonials-content">
                <div
                    class="testimonials-heading"
                    style={format!("transform: translateY({:.1}px); opacity: {:.3};", heading_y, heading_opacity)}
                >
                    <h2>{"What Our "}<span class="accent">{"Guests"}</span>{" Say"}</h2>
                    <div class="testimonials-rule"></div>
                    <p>{"Our guests' experiences speak louder than words. Here's what they have to say about their time with us."}</p>
                </div>

                <div class="testimonials-carousel">
                    <div class="testimonials-stage">
                        {
                            content.testimonials.get(*active).map(|testimonial| html! {
                                <TestimonialCard key={*active} testimonial={testimonial.clone()} />
                            }).unwrap_or_default()
                        }
                    </div>
                    <div class="testimonials-controls">
                        <button class="testimonial-arrow" aria-label="Previous testimonial" onclick={on_prev}>
                            <i class="fa-solid fa-arrow-left-long"></i>
                        </button>
                        <div class="testimonial-dots">{dots}</div>
                        <button class="testimonial-arrow" aria-label="Next testimonial" onclick={on_next}>
                            <i class="fa-solid fa-arrow-right-long"></i>
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .testimonials {
                    position: relative;
                    overflow: hidden;
                    padding: 6rem 1rem;
                    background: var(--cafe-dark-brown);
                    color: #fff;
                }

                .testimonials-bg {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                }

                .testimonials-grid {
                    position: absolute;
                    inset: 0;
                    opacity: 0.3;
                    background-image:
                        linear-gradient(rgba(212, 175, 55, 0.05) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(212, 175, 55, 0.05) 1px, transparent 1px);
                    background-size: 60px 60px;
                }

                .testimonial-spark {
                    position: absolute;
                    border-radius: 50%;
                    background: var(--cafe-gold);
                    filter: blur(1px);
                    animation: spark-drift 12s ease-in-out infinite alternate;
                }

                .testimonials-content {
                    position: relative;
                    z-index: 1;
                    max-width: 1200px;
                    margin: 0 auto;
                }

                .testimonials-heading {
                    text-align: center;
                    margin-bottom: 4rem;
                    will-change: transform, opacity;
                }

                .testimonials-heading h2 {
                    font-family: var(--font-display);
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .testimonials-rule {
                    width: 10rem;
                    height: 0.375rem;
                    margin: 0 auto 2rem;
                    border-radius: 9999px;
                    background: var(--cafe-gold);
                }

                .testimonials-heading p {
                    max-width: 36rem;
                    margin: 0 auto;
                    color: var(--cafe-cream);
                    font-size: 1.125rem;
                }

                .testimonials-carousel {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .testimonials-stage {
                    min-height: 300px;
                    padding: 2rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: linear-gradient(to bottom right, rgba(111, 78, 55, 0.6), rgba(62, 39, 35, 0.9));
                    backdrop-filter: blur(4px);
                }

                .testimonial-card {
                    display: flex;
                    align-items: center;
                    gap: 2.5rem;
                }

                .testimonial-avatar {
                    position: relative;
                    flex-shrink: 0;
                }

                .testimonial-photo {
                    width: 8rem;
                    height: 8rem;
                    border-radius: 50%;
                    overflow: hidden;
                    border: 4px solid rgba(212, 175, 55, 0.3);
                    box-shadow: 0 0 15px rgba(212, 175, 55, 0.25);
                }

                .testimonial-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .testimonial-ring {
                    position: absolute;
                    inset: -0.75rem;
                    border-radius: 50%;
                    border: 2px dashed rgba(212, 175, 55, 0.2);
                    animation: ring-spin 20s linear infinite;
                }

                .testimonial-quote-mark {
                    color: var(--cafe-gold);
                    font-size: 3rem;
                    opacity: 0.6;
                    margin-bottom: 1.5rem;
                }

                .testimonial-quote {
                    font-family: var(--font-display);
                    font-style: italic;
                    font-size: 1.25rem;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                .testimonial-body h4 {
                    font-family: var(--font-display);
                    color: var(--cafe-gold);
                    font-size: 1.25rem;
                    margin-bottom: 0.25rem;
                }

                .testimonial-role {
                    color: var(--cafe-cream);
                    opacity: 0.8;
                    margin-bottom: 0.75rem;
                }

                .testimonial-stars {
                    display: flex;
                    gap: 0.25rem;
                    color: var(--cafe-gold);
                }

                .testimonials-controls {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }

                .testimonial-arrow {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    background: rgba(111, 78, 55, 0.5);
                    color: var(--cafe-gold);
                    cursor: pointer;
                    transition: background-color 0.3s ease;
                }

                .testimonial-arrow:hover {
                    background: rgba(111, 78, 55, 0.7);
                }

                .testimonial-dots {
                    display: flex;
                    gap: 0.75rem;
                }

                .testimonial-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    padding: 0;
                    border: none;
                    border-radius: 50%;
                    background: rgba(245, 236, 215, 0.3);
                    cursor: pointer;
                    transition: background-color 0.3s ease;
                }

                .testimonial-dot.active {
                    background: var(--cafe-gold);
                }

                @keyframes ring-spin {
                    to { transform: rotate(360deg); }
                }

                @keyframes spark-drift {
                    from { transform: translate(0, 0); }
                    to { transform: translate(20px, -100px); }
                }

                @media (max-width: 767px) {
                    .testimonials {
                        padding: 4rem 1rem;
                    }

                    .testimonials-heading h2 {
                        font-size: 1.875rem;
                    }

                    .testimonials-stage {
                        min-height: 380px;
                        padding: 1.5rem;
                    }

                    .testimonial-card {
                        flex-direction: column;
                        gap: 2rem;
                    }

                    .testimonial-photo {
                        width: 6rem;
                        height: 6rem;
                    }

                    .testimonial-quote {
                        font-size: 1.125rem;
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
    fn next_wraps_to_first() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        assert_eq!(prev_index(0, 4), 3);
        assert_eq!(prev_index(2, 4), 1);
    }

    #[test]
    fn empty_carousel_stays_at_zero() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
