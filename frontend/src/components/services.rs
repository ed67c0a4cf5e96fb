use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{ServiceCard, SERVICES};

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub on_booking_click: Callback<()>,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let book = {
        let on_booking_click = props.on_booking_click.clone();
        Callback::from(move |_: MouseEvent| on_booking_click.emit(()))
    };

    let card = |service: &ServiceCard| {
        html! {
            <article key={service.title} class="service-card">
                <div class="service-image">
                    <img src={service.image.src} alt={service.image.alt} loading="lazy"
                        width={service.image.width.to_string()} height={service.image.height.to_string()} />
                </div>
                <div class="service-body">
                    <h3>{ service.title }</h3>
                    <p>{ service.description }</p>
                    <button class="service-book" onclick={book.clone()}>{"Book Now"}</button>
                </div>
            </article>
        }
    };

    html! {
        <section id="services" class="services-section">
            <style>
                {r#"
                .services-section { padding: 5rem 1.5rem; background: #fff; }
                .services-section > h2 {
                    font-family: Zagora, sans-serif;
                    font-size: 2.5rem;
                    color: #475161;
                    text-align: center;
                    margin-bottom: 1rem;
                }
                .services-intro {
                    text-align: center;
                    color: #858D93;
                    max-width: 40rem;
                    margin: 0 auto 3rem;
                }
                .services-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    gap: 2rem;
                }
                .service-card {
                    background: #fff;
                    border-radius: 0.5rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                    transition: transform 0.3s, box-shadow 0.3s;
                }
                .service-card:hover { transform: translateY(-4px); box-shadow: 0 20px 25px rgba(0, 0, 0, 0.12); }
                .service-image { aspect-ratio: 3 / 2; overflow: hidden; }
                .service-image img { width: 100%; height: 100%; object-fit: cover; }
                .service-body { padding: 1.5rem; }
                .service-body h3 { color: #475161; font-size: 1.25rem; margin: 0 0 0.75rem; }
                .service-body p { color: #858D93; line-height: 1.6; margin: 0 0 1.25rem; }
                .service-book {
                    padding: 0.5rem 1.5rem;
                    background: #D9C7B0;
                    color: #475161;
                    border: none;
                    font-weight: 600;
                    cursor: pointer;
                }
                .service-book:hover { background: #B8A890; }
                @media (min-width: 768px) {
                    .services-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (min-width: 1024px) {
                    .services-grid { grid-template-columns: repeat(3, 1fr); }
                }
                "#}
            </style>
            <h2>{"Our Services"}</h2>
            <p class="services-intro">
                {"Personalised aesthetic treatments delivered by certified practitioners."}
            </p>
            <div class="services-grid">
                { for SERVICES.iter().map(card) }
            </div>
        </section>
    }
}
