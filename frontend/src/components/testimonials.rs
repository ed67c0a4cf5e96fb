use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::content::TESTIMONIALS;
use crate::ui::carousel::{Carousel, CarouselAction};
use crate::ui::scroll_lock::ScrollLock;

fn stars(rating: u8) -> Html {
    html! {
        <div class="testimonial-stars" aria-label={format!("{} out of 5 stars", rating)}>
            { for (0..rating).map(|_| html! {
                <svg width="20" height="20" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
                    <path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z" />
                </svg>
            }) }
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));
    let scroll_lock = use_context::<ScrollLock>();

    {
        let dispatcher = carousel.dispatcher();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            // Arrow keys belong to the open dialog while the page is locked.
            if scroll_lock.as_ref().map_or(false, ScrollLock::is_locked) {
                return;
            }
            match e.key().as_str() {
                "ArrowLeft" => dispatcher.dispatch(CarouselAction::Prev),
                "ArrowRight" => dispatcher.dispatch(CarouselAction::Next),
                _ => {}
            }
        });
    }

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Prev))
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::Next))
    };

    let current = carousel.current();
    let Some(testimonial) = TESTIMONIALS.get(current) else {
        return html! {};
    };
    let has_controls = carousel.len() > 1;

    html! {
        <section id="testimonials" class="testimonials-section">
            <style>
                {r#"
                .testimonials-section { padding: 5rem 1.5rem; background: #fff; text-align: center; }
                .testimonials-section h2 {
                    font-family: Zagora, sans-serif;
                    font-size: 2.5rem;
                    color: #475161;
                    margin-bottom: 3rem;
                }
                .testimonial-stage {
                    position: relative;
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 0 3rem;
                }
                .testimonial-card { animation: testimonial-fade 0.5s ease-out; }
                .testimonial-card img {
                    width: 6rem;
                    height: 6rem;
                    border-radius: 9999px;
                    object-fit: cover;
                    margin-bottom: 1.5rem;
                }
                .testimonial-stars { color: #D9C7B0; display: flex; justify-content: center; gap: 0.25rem; }
                .testimonial-card blockquote {
                    font-size: 1.25rem;
                    font-style: italic;
                    color: #475161;
                    line-height: 1.7;
                    margin: 1.5rem 0;
                }
                .testimonial-card cite { color: #858D93; font-style: normal; font-weight: 600; }
                .testimonial-arrow {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    border: 1px solid #D9C7B0;
                    background: #fff;
                    color: #475161;
                    cursor: pointer;
                }
                .testimonial-arrow:hover { background: #D9C7B0; }
                .testimonial-arrow.prev { left: 0; }
                .testimonial-arrow.next { right: 0; }
                .testimonial-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 2rem; }
                .testimonial-dot {
                    width: 0.625rem;
                    height: 0.625rem;
                    border: none;
                    border-radius: 9999px;
                    background: #d1d5db;
                    cursor: pointer;
                }
                .testimonial-dot.active { background: #D9C7B0; width: 1.5rem; }
                @keyframes testimonial-fade {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
            <h2>{"What Our Clients Say"}</h2>
            <div class="testimonial-stage" aria-roledescription="carousel" aria-live="polite">
                <figure key={current} class="testimonial-card">
                    <img src={testimonial.image.src} alt={testimonial.image.alt} loading="lazy"
                        width={testimonial.image.width.to_string()} height={testimonial.image.height.to_string()} />
                    { stars(testimonial.rating) }
                    <blockquote>{ format!("\u{201c}{}\u{201d}", testimonial.text) }</blockquote>
                    <figcaption><cite>{ testimonial.author }</cite></figcaption>
                </figure>
                if has_controls {
                    <button class="testimonial-arrow prev" aria-label="Previous testimonial" onclick={prev}>{"‹"}</button>
                    <button class="testimonial-arrow next" aria-label="Next testimonial" onclick={next}>{"›"}</button>
                }
            </div>
            if has_controls {
                <div class="testimonial-dots">
                    { for (0..carousel.len()).map(|index| {
                        let go_to = {
                            let carousel = carousel.clone();
                            Callback::from(move |_: MouseEvent| carousel.dispatch(CarouselAction::GoTo(index)))
                        };
                        html! {
                            <button key={index}
                                class={classes!("testimonial-dot", (index == current).then(|| "active"))}
                                aria-label={format!("Go to testimonial {}", index + 1)}
                                aria-current={(index == current).to_string()}
                                onclick={go_to} />
                        }
                    }) }
                </div>
            }
        </section>
    }
}
