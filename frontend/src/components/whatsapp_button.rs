use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{is_mobile, WHATSAPP_MESSAGE, WHATSAPP_PHONE};

/// Scroll offset past which the button appears.
pub const SHOW_AFTER_SCROLL: f64 = 300.0;
pub const TOOLTIP_DELAY_MS: u32 = 2_000;
pub const TOOLTIP_VISIBLE_MS: u32 = 5_000;
/// Session storage key remembering that the visitor dismissed the button.
pub const CLOSED_KEY: &str = "whatsapp_closed";

/// `wa.me` deep link. Non-digits are stripped from the phone number.
pub fn whatsapp_url(phone: &str, message: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("https://wa.me/{}?text={}", digits, urlencoding::encode(message))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonPosition {
    #[default]
    BottomRight,
    BottomLeft,
}

impl ButtonPosition {
    fn class(self) -> &'static str {
        match self {
            ButtonPosition::BottomRight => "bottom-right",
            ButtonPosition::BottomLeft => "bottom-left",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct WhatsAppButtonProps {
    #[prop_or(AttrValue::Static(WHATSAPP_PHONE))]
    pub phone_number: AttrValue,
    #[prop_or(AttrValue::Static(WHATSAPP_MESSAGE))]
    pub message: AttrValue,
    #[prop_or_default]
    pub position: ButtonPosition,
    #[prop_or(true)]
    pub show_on_mobile: bool,
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button(props: &WhatsAppButtonProps) -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (width, _) = use_window_size();
    let closed = use_session_storage::<bool>(CLOSED_KEY.to_string());
    let show_tooltip = use_state(|| false);
    let hovered = use_state(|| false);

    let mobile = is_mobile(width);
    let visible = scroll_y > SHOW_AFTER_SCROLL && !(*closed).unwrap_or(false);

    {
        let show_tooltip = show_tooltip.clone();
        use_effect_with_deps(
            move |&(visible, mobile)| {
                let hide: Rc<RefCell<Option<Timeout>>> = Rc::default();
                let show = (visible && !mobile).then(|| {
                    let hide = Rc::clone(&hide);
                    Timeout::new(TOOLTIP_DELAY_MS, move || {
                        show_tooltip.set(true);
                        let show_tooltip = show_tooltip.clone();
                        *hide.borrow_mut() = Some(Timeout::new(TOOLTIP_VISIBLE_MS, move || {
                            show_tooltip.set(false);
                        }));
                    })
                });
                move || {
                    drop(show);
                    let _ = hide.borrow_mut().take();
                }
            },
            (visible, mobile),
        );
    }

    if mobile && !props.show_on_mobile {
        return html! {};
    }
    if !visible {
        return html! {};
    }

    let url = whatsapp_url(&props.phone_number, &props.message);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let onclick = Callback::from(|_: MouseEvent| info!("WhatsApp button clicked"));
    let on_close = {
        let closed = closed.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            closed.set(true);
        })
    };

    html! {
        <div class={classes!("whatsapp-float", props.position.class())}>
            <a
                href={url}
                target="_blank"
                rel="noopener noreferrer"
                class={classes!("whatsapp-button", (!*hovered).then(|| "pulse"))}
                aria-label="Chat on WhatsApp"
                {onmouseenter}
                {onmouseleave}
                {onclick}
            >
                <i class="fa-brands fa-whatsapp"></i>
                <span class="whatsapp-dot"></span>
            </a>
            if (*show_tooltip || *hovered) && !mobile {
                <div class="whatsapp-tooltip">
                    {"Chat with us on WhatsApp"}
                    <div class="whatsapp-tooltip-arrow"></div>
                </div>
            }
            if mobile {
                <button class="whatsapp-close" aria-label="Close WhatsApp button" onclick={on_close}>
                    <i class="fa-solid fa-xmark"></i>
                </button>
            }
            <style>
                {r#"
                .whatsapp-float {
                    position: fixed;
                    bottom: 2rem;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    animation: whatsapp-in 0.3s ease-out;
                }

                .whatsapp-float.bottom-right {
                    right: 2rem;
                }

                .whatsapp-float.bottom-left {
                    left: 2rem;
                }

                .whatsapp-button {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 50%;
                    background: #22c55e;
                    color: #fff;
                    font-size: 1.5rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    transition: background-color 0.3s ease, transform 0.2s ease;
                }

                .whatsapp-button:hover {
                    background: #16a34a;
                    transform: scale(1.05);
                }

                .whatsapp-button.pulse {
                    animation: whatsapp-pulse 2s infinite;
                }

                .whatsapp-dot {
                    position: absolute;
                    top: -0.25rem;
                    right: -0.25rem;
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    background: #fff;
                }

                .whatsapp-tooltip {
                    position: absolute;
                    bottom: 100%;
                    margin-bottom: 0.5rem;
                    white-space: nowrap;
                    background: #fff;
                    color: #1f2937;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    filter: drop-shadow(0 2px 5px rgba(0, 0, 0, 0.1));
                    animation: whatsapp-in 0.2s ease-out;
                }

                .bottom-right .whatsapp-tooltip {
                    right: 0;
                }

                .bottom-left .whatsapp-tooltip {
                    left: 0;
                }

                .whatsapp-tooltip-arrow {
                    position: absolute;
                    bottom: -6px;
                    width: 1rem;
                    height: 1rem;
                    background: #fff;
                    transform: rotate(45deg);
                }

                .bottom-right .whatsapp-tooltip-arrow {
                    right: 16px;
                }

                .bottom-left .whatsapp-tooltip-arrow {
                    left: 16px;
                }

                .whatsapp-close {
                    position: absolute;
                    top: -0.75rem;
                    right: -0.75rem;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 50%;
                    border: 1px solid #e5e7eb;
                    background: #fff;
                    color: #4b5563;
                    font-size: 0.75rem;
                    cursor: pointer;
                }

                @keyframes whatsapp-in {
                    from { opacity: 0; transform: translateY(20px) scale(0.8); }
                    to { opacity: 1; transform: none; }
                }

                @keyframes whatsapp-pulse {
                    0% { box-shadow: 0 0 0 0 rgba(34, 197, 94, 0.6); }
                    70% { box-shadow: 0 0 0 14px rgba(34, 197, 94, 0); }
                    100% { box-shadow: 0 0 0 0 rgba(34, 197, 94, 0); }
                }

                @media (max-width: 767px) {
                    .whatsapp-float {
                        bottom: 1rem;
                    }

                    .whatsapp-float.bottom-right {
                        right: 1rem;
                    }

                    .whatsapp-float.bottom-left {
                        left: 1rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_strips_non_digits_and_encodes_message() {
        assert_eq!(
            whatsapp_url("+1 (234) 567-8901", "Hi there, table for 2?"),
            "https://wa.me/12345678901?text=Hi%20there%2C%20table%20for%202%3F"
        );
    }

    #[test]
    fn default_contact_link() {
        let url = whatsapp_url(WHATSAPP_PHONE, WHATSAPP_MESSAGE);
        assert!(url.starts_with("https://wa.me/12345678901?text=Hello%21%20"));
        assert!(!url.contains(' '));
    }
}
