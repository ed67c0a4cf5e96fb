use yew::prelude::*;

use crate::messaging::booking_whatsapp_url;

#[function_component(FloatingWhatsApp)]
pub fn floating_whatsapp() -> Html {
    html! {
        <a
            class="floating-whatsapp"
            href={booking_whatsapp_url()}
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat with us on WhatsApp"
        >
            <style>
                {r#"
                .floating-whatsapp {
                    position: fixed;
                    right: 1.5rem;
                    bottom: 1.5rem;
                    z-index: 30;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 9999px;
                    background: #25D366;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.2);
                    transition: transform 0.3s;
                }
                .floating-whatsapp:hover { transform: scale(1.1); }
                "#}
            </style>
            <svg width="28" height="28" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                <path d={super::contact::WHATSAPP_ICON} />
            </svg>
        </a>
    }
}
