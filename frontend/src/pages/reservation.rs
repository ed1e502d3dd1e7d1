use chrono::NaiveTime;
use yew::prelude::*;

use super::common::{suppress_submit, use_scroll_to_top};
use crate::components::page_banner::PageBanner;

/// Lunch and dinner service, as minutes after midnight, end inclusive.
pub const SERVICE_WINDOWS: [(u32, u32); 2] = [(11 * 60, 14 * 60), (18 * 60, 21 * 60)];
pub const SLOT_MINUTES: u32 = 30;
pub const MAX_LISTED_GUESTS: u32 = 6;

/// Bookable times across all service windows.
pub fn time_slots() -> Vec<NaiveTime> {
    SERVICE_WINDOWS
        .iter()
        .flat_map(|&(start, end)| (start..=end).step_by(SLOT_MINUTES as usize))
        .filter_map(|minute| NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0))
        .collect()
}

/// `(value, label)` for a time slot, e.g. `("13:00", "1:00 PM")`.
pub fn slot_option(time: NaiveTime) -> (String, String) {
    (
        time.format("%H:%M").to_string(),
        time.format("%-I:%M %p").to_string(),
    )
}

/// `(value, label)` for every party size on offer.
pub fn guest_options() -> Vec<(String, String)> {
    (1..=MAX_LISTED_GUESTS)
        .map(|n| {
            let label = if n == 1 {
                "1 Person".to_string()
            } else {
                format!("{} People", n)
            };
            (n.to_string(), label)
        })
        .chain(std::iter::once((
            format!("{}+", MAX_LISTED_GUESTS + 1),
            format!("{}+ People", MAX_LISTED_GUESTS + 1),
        )))
        .collect()
}

fn options(entries: Vec<(String, String)>) -> Html {
    entries
        .into_iter()
        .map(|(value, label)| html! { <option value={value}>{label}</option> })
        .collect()
}

#[function_component(Reservation)]
pub fn reservation() -> Html {
    use_scroll_to_top();

    let slots = time_slots().into_iter().map(slot_option).collect::<Vec<_>>();

    html! {
        <main class="reservation-page">
            <PageBanner title="Make a Reservation" />
            <div class="form-page-body">
                <div class="form-card">
                    <h2>{"Book Your Table"}</h2>
                    <form class="cafe-form" onsubmit={suppress_submit("reservation")}>
                        <div class="form-grid">
                            <div class="form-field">
                                <label for="name">{"Full Name"}</label>
                                <input type="text" id="name" placeholder="John Doe" />
                            </div>
                            <div class="form-field">
                                <label for="email">{"Email"}</label>
                                <input type="email" id="email" placeholder="john@example.com" />
                            </div>
                            <div class="form-field">
                                <label for="phone">{"Phone"}</label>
                                <input type="tel" id="phone" placeholder="(123) 456-7890" />
                            </div>
                            <div class="form-field">
                                <label for="guests">{"Number of Guests"}</label>
                                <select id="guests">{ options(guest_options()) }</select>
                            </div>
                            <div class="form-field">
                                <label for="date">{"Date"}</label>
                                <input type="date" id="date" />
                            </div>
                            <div class="form-field">
                                <label for="time">{"Time"}</label>
                                <select id="time">{ options(slots) }</select>
                            </div>
                        </div>
                        <div class="form-field">
                            <label for="special-requests">{"Special Requests"}</label>
                            <textarea
                                id="special-requests"
                                rows="4"
                                placeholder="Any special requests or dietary requirements..."
                            ></textarea>
                        </div>
                        <button type="submit" class="button-primary wide">{"Book Now"}</button>
                        <p class="form-note">
                            {"Reservations should be made at least 24 hours in advance. For same-day reservations, please call us directly."}
                        </p>
                    </form>
                </div>
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cover_lunch_and_dinner() {
        let values: Vec<String> = time_slots().into_iter().map(|t| slot_option(t).0).collect();
        assert_eq!(values.len(), 14);
        assert_eq!(values.first().map(String::as_str), Some("11:00"));
        assert_eq!(values[6], "14:00");
        assert_eq!(values[7], "18:00");
        assert_eq!(values.last().map(String::as_str), Some("21:00"));
    }

    #[test]
    fn slot_labels_use_twelve_hour_clock() {
        let labels: Vec<String> = time_slots().into_iter().map(|t| slot_option(t).1).collect();
        assert_eq!(labels[0], "11:00 AM");
        assert_eq!(labels[2], "12:00 PM");
        assert_eq!(labels[4], "1:00 PM");
        assert_eq!(labels[13], "9:00 PM");
    }

    #[test]
    fn guest_options_end_with_large_party() {
        let options = guest_options();
        assert_eq!(options.len(), 7);
        assert_eq!(options[0], ("1".to_string(), "1 Person".to_string()));
        assert_eq!(options[1].1, "2 People");
        assert_eq!(options[6], ("7+".to_string(), "7+ People".to_string()));
    }
}
