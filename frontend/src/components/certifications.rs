use yew::prelude::*;

use crate::content::{CERTIFICATIONS, SATISFIED_CLIENTS};

/// Outline icon paths, one per certification in display order.
const ICONS: [&str; 4] = [
    "M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z",
    "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
    "M12 4.354a4 4 0 110 5.292M15 21H3v-1a6 6 0 0112 0v1zm0 0h6v-1a6 6 0 00-9-5.197M13 7a4 4 0 11-8 0 4 4 0 018 0z",
    "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.286 6.857L21 12l-5.714 2.143L13 21l-2.286-6.857L5 12l5.714-2.143L13 3z",
];

#[function_component(Certifications)]
pub fn certifications() -> Html {
    html! {
        <section class="certifications-section">
            <style>
                {r#"
                .certifications-section {
                    padding: 5rem 1.5rem;
                    background: #475161;
                    color: #fff;
                    text-align: center;
                }
                .cert-eyebrow {
                    color: #D9C7B0;
                    font-size: 0.875rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .certifications-section h2 {
                    font-size: 2.5rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin: 0 0 1rem;
                }
                .cert-intro { color: #d1d5db; font-weight: 300; margin-bottom: 4rem; }
                .cert-grid {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 2rem;
                }
                .cert-card {
                    padding: 1.5rem;
                    border: 1px solid rgba(217, 199, 176, 0.2);
                    border-radius: 0.5rem;
                    transition: all 0.3s;
                }
                .cert-card:hover { border-color: rgba(217, 199, 176, 0.5); transform: scale(1.05); }
                .cert-card svg { color: #D9C7B0; margin-bottom: 1rem; }
                .cert-card h3 {
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin: 0;
                }
                .cert-counter { margin-top: 4rem; }
                .cert-counter strong { display: block; font-size: 3.5rem; color: #D9C7B0; }
                @media (min-width: 768px) {
                    .cert-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
            <p class="cert-eyebrow">{"Trust & Excellence"}</p>
            <h2>{"Certifications & Standards"}</h2>
            <p class="cert-intro">{"We maintain the highest standards of safety and professionalism"}</p>
            <div class="cert-grid">
                { for CERTIFICATIONS.iter().zip(ICONS).map(|(title, icon)| html! {
                    <div key={*title} class="cert-card">
                        <svg width="48" height="48" fill="none" stroke="currentColor" stroke-width="1.5"
                            stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24" aria-hidden="true">
                            <path d={icon} />
                        </svg>
                        <h3>{ *title }</h3>
                    </div>
                }) }
            </div>
            <div class="cert-counter">
                <p class="cert-eyebrow">{"Trusted By Over"}</p>
                <strong>{ SATISFIED_CLIENTS }</strong>
                <p class="cert-intro">{"Satisfied Clients"}</p>
            </div>
        </section>
    }
}
