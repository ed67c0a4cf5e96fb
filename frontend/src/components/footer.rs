use chrono::Datelike;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{self, NavItem, FOOTER_LINKS, SOCIAL_LINKS};
use crate::ui::navigation::scroll_to_section;

fn section_link(item: NavItem) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(item.section);
    })
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = chrono::Utc::now().year();
    let get_started = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("contact");
    });

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer { background: #2A2F3A; color: #fff; }
                .footer-cta { background: #D9C7B0; padding: 4rem 1.5rem; text-align: center; color: #475161; }
                .footer-cta p {
                    font-size: 0.875rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    font-weight: 300;
                }
                .footer-cta h2 {
                    font-size: 2rem;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin: 0 0 1.5rem;
                }
                .footer-cta a {
                    display: inline-block;
                    padding: 1rem 2rem;
                    background: #475161;
                    color: #fff;
                    text-decoration: none;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }
                .footer-cta a:hover { background: #2A2F3A; }
                .footer-main { max-width: 80rem; margin: 0 auto; padding: 3rem 1.5rem; }
                .footer-columns { display: grid; gap: 2rem; margin-bottom: 2rem; }
                .footer-columns h3 { font-size: 1.25rem; margin: 0 0 1rem; }
                .footer-columns p { color: rgba(255, 255, 255, 0.8); line-height: 1.6; }
                .footer-columns ul { list-style: none; margin: 0; padding: 0; }
                .footer-columns li { margin-bottom: 0.5rem; }
                .footer-columns a { color: rgba(255, 255, 255, 0.8); text-decoration: none; }
                .footer-columns a:hover { color: #fff; }
                .footer-social { display: flex; gap: 1rem; }
                .footer-social a {
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    transition: all 0.3s;
                }
                .footer-social a:hover { background: #D9C7B0; color: #475161; }
                .footer-copyright {
                    border-top: 1px solid rgba(255, 255, 255, 0.2);
                    padding-top: 2rem;
                    text-align: center;
                    color: rgba(255, 255, 255, 0.6);
                }
                @media (min-width: 768px) {
                    .footer-columns { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
            <div class="footer-cta">
                <p>{"Ready To Transform?"}</p>
                <h2>{"Book Your Appointment Now"}</h2>
                <a href="#contact" onclick={get_started}>{"Get Started Today"}</a>
            </div>
            <div class="footer-main">
                <div class="footer-columns">
                    <div>
                        <h3>{ content::BRAND }</h3>
                        <p>{ content::TAGLINE }</p>
                    </div>
                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul>
                            { for FOOTER_LINKS.iter().map(|item| html! {
                                <li key={item.section}>
                                    <a href={format!("#{}", item.section)} onclick={section_link(*item)}>{ item.label }</a>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h3>{"Follow Us"}</h3>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a key={social.name} href={social.href} target="_blank"
                                    rel="noopener noreferrer" aria-label={social.name}>
                                    { social.name }
                                </a>
                            }) }
                        </div>
                    </div>
                </div>
                <div class="footer-copyright">
                    <p>{ format!("© {} {}. All rights reserved.", current_year, content::BRAND) }</p>
                </div>
            </div>
        </footer>
    }
}
