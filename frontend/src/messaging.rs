use crate::config;

/// `wa.me` click-to-chat link. `wa.me` wants the bare digits of the
/// international number, so `+`, spaces and dashes are dropped.
pub fn whatsapp_url(number: &str, text: Option<&str>) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    match text.filter(|t| !t.is_empty()) {
        Some(text) => format!("https://wa.me/{}?text={}", digits, urlencoding::encode(text)),
        None => format!("https://wa.me/{}", digits),
    }
}

/// Chat link with the booking greeting pre-filled.
pub fn booking_whatsapp_url() -> String {
    whatsapp_url(config::WHATSAPP_NUMBER, Some(config::WHATSAPP_BOOKING_MESSAGE))
}

pub fn plain_whatsapp_url() -> String {
    whatsapp_url(config::WHATSAPP_NUMBER, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_from_number() {
        assert_eq!(whatsapp_url("+62 877-2913-8734", None), "https://wa.me/6287729138734");
    }

    #[test]
    fn encodes_prefilled_text() {
        assert_eq!(
            whatsapp_url("+6287729138734", Some("Hi, I'd like a facial & peel")),
            "https://wa.me/6287729138734?text=Hi%2C%20I%27d%20like%20a%20facial%20%26%20peel"
        );
    }

    #[test]
    fn empty_text_is_dropped() {
        assert_eq!(whatsapp_url("6287729138734", Some("")), "https://wa.me/6287729138734");
    }

    #[test]
    fn booking_link_carries_greeting() {
        let url = booking_whatsapp_url();
        assert!(url.starts_with("https://wa.me/6287729138734?text=Hi%2C%20I%20would%20like"));
    }
}
