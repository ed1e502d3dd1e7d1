use log::Level;

pub const CAFE_NAME: &str = "CafeMRP";
pub const CAFE_TAGLINE: &str =
    "A perfect blend of coffee, cuisine, and cocktails in a cozy and inviting atmosphere.";

pub const WHATSAPP_PHONE: &str = "12345678901";
pub const WHATSAPP_MESSAGE: &str =
    "Hello! I'd like to make a reservation or inquiry about CafeMRP.";

/// Widths below this render the mobile variants.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub struct CafeLocation {
    pub address: &'static str,
    pub lat: f64,
    pub lng: f64,
}

pub const CAFE_LOCATION: CafeLocation = CafeLocation {
    address: "Cafe MRP, N-16, Outer Circle, Connaught Place, New Delhi, India",
    lat: 28.6332,
    lng: 77.2194,
};

pub const MAP_ZOOM: u8 = 15;

pub const ADDRESS_LINES: [&str; 2] = ["N-16, Outer Circle", "Connaught Place, New Delhi, India"];
pub const PHONES: [&str; 2] = ["+91 (11) 4567-8901", "+91 (11) 4567-8902"];
pub const EMAILS: [&str; 2] = ["info@cafemrp.com", "reservations@cafemrp.com"];

pub struct OpeningHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const OPENING_HOURS: [OpeningHours; 2] = [
    OpeningHours {
        days: "Monday - Friday",
        hours: "7:00 AM - 11:00 PM",
    },
    OpeningHours {
        days: "Weekends",
        hours: "8:00 AM - 1:00 AM",
    },
];

/// (label, url, icon class)
pub const SOCIAL_LINKS: [(&str, &str, &str); 3] = [
    ("Facebook", "https://facebook.com", "fa-brands fa-facebook"),
    ("Instagram", "https://instagram.com", "fa-brands fa-instagram"),
    ("Twitter", "https://twitter.com", "fa-brands fa-twitter"),
];

pub const INSTAGRAM_HANDLE: &str = "cafemrp";

pub fn is_mobile(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
