#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL, same origin as the page
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}

// WhatsApp business line, international format
pub const WHATSAPP_NUMBER: &str = "+6287729138734";
pub const WHATSAPP_BOOKING_MESSAGE: &str = "Hi, I would like to book an appointment at Marvie Beauty.";

pub const HERO_INTERVAL_MS: u32 = 5_000;

// Header turns solid once the page has scrolled past this many pixels
pub const HEADER_SOLID_THRESHOLD_PX: f64 = 20.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
