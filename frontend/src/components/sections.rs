use yew::prelude::*;

use crate::content::{self, ABOUT_PARAGRAPHS, GALLERY, REASONS};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="about-section">
            <style>
                {r#"
                .about-section {
                    padding: 5rem 1.5rem;
                    background: #F3EDE4;
                }
                .about-inner { max-width: 56rem; margin: 0 auto; text-align: center; }
                .about-inner h2 {
                    font-family: Zagora, sans-serif;
                    font-size: 2.5rem;
                    color: #475161;
                    margin-bottom: 2rem;
                }
                .about-inner p {
                    color: #858D93;
                    font-size: 1.125rem;
                    line-height: 1.8;
                    margin-bottom: 1.5rem;
                }
                "#}
            </style>
            <div class="about-inner">
                <h2>{ format!("About {}", content::BRAND) }</h2>
                { for ABOUT_PARAGRAPHS.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
            </div>
        </section>
    }
}

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section id="why-us" class="why-section">
            <style>
                {r#"
                .why-section { padding: 5rem 1.5rem; background: #fff; }
                .why-inner { max-width: 64rem; margin: 0 auto; }
                .why-inner h2 {
                    font-family: Zagora, sans-serif;
                    font-size: 2.5rem;
                    color: #475161;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .why-list {
                    display: grid;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .why-list li {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    color: #475161;
                    font-size: 1.125rem;
                }
                .why-check {
                    flex-shrink: 0;
                    width: 1.75rem;
                    height: 1.75rem;
                    border-radius: 9999px;
                    background: #D9C7B0;
                    color: #fff;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                @media (min-width: 768px) {
                    .why-list { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
            <div class="why-inner">
                <h2>{"Why Choose Us"}</h2>
                <ul class="why-list">
                    { for REASONS.iter().map(|reason| html! {
                        <li key={*reason}>
                            <span class="why-check" aria-hidden="true">{"✓"}</span>
                            <span>{ *reason }</span>
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}

#[function_component(Gallery)]
pub fn gallery() -> Html {
    html! {
        <section id="gallery" class="gallery-section">
            <style>
                {r#"
                .gallery-section { padding: 5rem 1.5rem; background: #F3EDE4; }
                .gallery-section h2 {
                    font-family: Zagora, sans-serif;
                    font-size: 2.5rem;
                    color: #475161;
                    text-align: center;
                    margin-bottom: 3rem;
                }
                .gallery-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1rem;
                }
                .gallery-grid figure { margin: 0; overflow: hidden; border-radius: 0.5rem; }
                .gallery-grid img {
                    width: 100%;
                    height: 100%;
                    aspect-ratio: 1;
                    object-fit: cover;
                    transition: transform 0.5s;
                }
                .gallery-grid img:hover { transform: scale(1.05); }
                @media (min-width: 1024px) {
                    .gallery-grid { grid-template-columns: repeat(4, 1fr); }
                }
                "#}
            </style>
            <h2>{"Our Results"}</h2>
            <div class="gallery-grid">
                { for GALLERY.iter().map(|image| html! {
                    <figure key={image.src}>
                        <img src={image.src} alt={image.alt} loading="lazy"
                            width={image.width.to_string()} height={image.height.to_string()} />
                    </figure>
                }) }
            </div>
        </section>
    }
}
