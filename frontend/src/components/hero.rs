use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::content::{self, HERO_SLIDES};
use crate::ui::carousel::{Carousel, CarouselAction};
use crate::ui::navigation::scroll_to_section;
use crate::ui::schedule::{IntervalScheduler, Scheduler};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_booking_click: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let slides = use_reducer(|| Carousel::new(HERO_SLIDES.len()));

    // Auto-advance; the task is cancelled when the hero unmounts.
    {
        let dispatcher = slides.dispatcher();
        use_effect_with_deps(
            move |_| {
                let task = IntervalScheduler.every(
                    config::HERO_INTERVAL_MS,
                    Box::new(move || dispatcher.dispatch(CarouselAction::Next)),
                );
                move || drop(task)
            },
            (),
        );
    }

    let open_booking = {
        let on_booking_click = props.on_booking_click.clone();
        Callback::from(move |_: MouseEvent| on_booking_click.emit(()))
    };
    let to_contact = Callback::from(|_: MouseEvent| scroll_to_section("contact"));
    let to_services = Callback::from(|_: MouseEvent| scroll_to_section("services"));
    let current = slides.current();

    html! {
        <section id="home" class="hero">
            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-slide {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    transition: opacity 1s;
                }
                .hero-slide.active { opacity: 1; }
                .hero-slide img { width: 100%; height: 100%; object-fit: cover; }
                .hero-slide.active img { animation: hero-zoom-in 5s ease-out forwards; }
                .hero-slide::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(135deg, rgba(0,0,0,0.3), rgba(0,0,0,0.1), rgba(0,0,0,0.2));
                }
                @keyframes hero-zoom-in {
                    from { transform: scale(1); }
                    to { transform: scale(1.1); }
                }
                .hero-content {
                    position: relative;
                    z-index: 10;
                    text-align: center;
                    color: #fff;
                    padding: 5rem 1rem;
                }
                .hero-eyebrow {
                    color: #D9C7B0;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    font-weight: 300;
                }
                .hero-content h1 {
                    font-family: Zagora, sans-serif;
                    font-size: clamp(3rem, 8vw, 4.5rem);
                    letter-spacing: 0.05em;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    font-weight: 300;
                    max-width: 48rem;
                    margin: 0 auto 2.5rem;
                    line-height: 1.6;
                }
                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                    margin-bottom: 4rem;
                }
                .hero-cta {
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    color: #fff;
                    background: rgba(255, 255, 255, 0.1);
                    border: 2px solid #fff;
                    backdrop-filter: blur(4px);
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .hero-cta:hover { background: #fff; color: #475161; }
                .hero-dots { display: flex; gap: 0.75rem; justify-content: center; margin-bottom: 2rem; }
                .hero-dot {
                    width: 0.75rem;
                    height: 0.75rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.5);
                    cursor: pointer;
                    transition: all 0.3s;
                }
                .hero-dot.active { width: 2rem; background: #D9C7B0; }
                .hero-scroll-hint {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.8);
                    cursor: pointer;
                    animation: hero-bounce 1s infinite;
                }
                @keyframes hero-bounce {
                    0%, 100% { transform: translateY(-25%); }
                    50% { transform: translateY(0); }
                }
                "#}
            </style>
            <div class="hero-slides">
                { for HERO_SLIDES.iter().enumerate().map(|(index, slide)| html! {
                    <div key={slide.src} class={classes!("hero-slide", (index == current).then(|| "active"))}
                        aria-hidden={(index != current).to_string()}>
                        <img src={slide.src} alt={slide.alt}
                            width={slide.width.to_string()} height={slide.height.to_string()} />
                    </div>
                }) }
            </div>
            <div class="hero-content">
                <p class="hero-eyebrow">{"Premium Aesthetic Care"}</p>
                <h1>{"MARVIE BEAUTY"}</h1>
                <p class="hero-subtitle">{ content::TAGLINE }</p>
                <div class="hero-cta-group">
                    <button class="hero-cta" onclick={open_booking}>{"Book Appointment"}</button>
                    <button class="hero-cta" onclick={to_contact}>{"Contact Us"}</button>
                </div>
                <div class="hero-dots">
                    { for (0..slides.len()).map(|index| {
                        let go_to = {
                            let slides = slides.clone();
                            Callback::from(move |_: MouseEvent| slides.dispatch(CarouselAction::GoTo(index)))
                        };
                        html! {
                            <button key={index}
                                class={classes!("hero-dot", (index == current).then(|| "active"))}
                                aria-label={format!("Go to slide {}", index + 1)}
                                onclick={go_to} />
                        }
                    }) }
                </div>
                <button class="hero-scroll-hint" aria-label="Scroll to services section" onclick={to_services}>
                    <svg width="32" height="32" fill="none" stroke="currentColor" stroke-width="2"
                        stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
                        <path d="M19 14l-7 7m0 0l-7-7m7 7V3" />
                    </svg>
                </button>
            </div>
        </section>
    }
}
