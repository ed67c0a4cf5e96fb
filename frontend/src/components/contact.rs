use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_update;

use crate::contact::form::{ContactForm, Field, FormStatus, Service, SubmitBlocked};
use crate::contact::transport::{deliver, HttpContactTransport};
use crate::content::CONTACT;
use crate::messaging::plain_whatsapp_url;

pub(crate) const WHATSAPP_ICON: &str = "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413Z";

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub on_booking_click: Callback<()>,
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactSectionProps) -> Html {
    let book_online = {
        let on_booking_click = props.on_booking_click.clone();
        Callback::from(move |_: MouseEvent| on_booking_click.emit(()))
    };

    let detail = |label: &'static str, value: &'static str| {
        html! {
            <div class="contact-detail">
                <p class="contact-detail-label">{ label }</p>
                <p class="contact-detail-value">{ value }</p>
            </div>
        }
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                .contact-section { padding: 5rem 1.5rem; background: #F3EDE4; }
                .contact-heading { text-align: center; margin-bottom: 4rem; }
                .contact-heading .eyebrow {
                    color: #B8A890;
                    font-size: 0.875rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                }
                .contact-heading h2 {
                    font-size: 2.5rem;
                    color: #475161;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin: 0 0 1rem;
                }
                .contact-heading p { color: #858D93; font-size: 1.125rem; font-weight: 300; }
                .contact-layout {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    gap: 3rem;
                }
                .contact-card { background: #fff; border-radius: 0.5rem; padding: 2rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.05); }
                .contact-card h3 { color: #475161; font-size: 1.5rem; margin: 0 0 1.5rem; }
                .contact-whatsapp {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    border-radius: 0.5rem;
                    background: #f0fdf4;
                    text-decoration: none;
                    color: inherit;
                }
                .contact-whatsapp svg { color: #22c55e; flex-shrink: 0; }
                .contact-detail { margin-bottom: 1rem; }
                .contact-detail-label { font-weight: 600; color: #475161; margin: 0; }
                .contact-detail-value { color: #858D93; margin: 0.25rem 0 0; }
                .contact-book {
                    width: 100%;
                    margin-top: 1rem;
                    padding: 1rem;
                    background: #475161;
                    color: #fff;
                    border: none;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                }
                .contact-book:hover { background: #2A2F3A; }
                .contact-map { border-radius: 0.5rem; overflow: hidden; min-height: 24rem; }
                .contact-map iframe { width: 100%; height: 100%; min-height: 24rem; border: 0; }
                @media (min-width: 1024px) {
                    .contact-layout { grid-template-columns: repeat(2, 1fr); }
                }
                "#}
            </style>
            <div class="contact-heading">
                <p class="eyebrow">{"Get In Touch"}</p>
                <h2>{"Visit Our Clinic"}</h2>
                <p>{"Have questions or ready to start your journey? Reach out to us."}</p>
            </div>
            <div class="contact-layout">
                <div class="contact-card">
                    <h3>{"Contact Information"}</h3>
                    <a class="contact-whatsapp" href={plain_whatsapp_url()} target="_blank" rel="noopener noreferrer">
                        <svg width="28" height="28" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
                            <path d={WHATSAPP_ICON} />
                        </svg>
                        <div>
                            <p class="contact-detail-label">{"WhatsApp"}</p>
                            <p class="contact-detail-value">{ CONTACT.whatsapp_display }</p>
                        </div>
                    </a>
                    { detail("Phone", CONTACT.phone) }
                    { detail("Email", CONTACT.email) }
                    { detail("Address", CONTACT.address) }
                    { detail("Hours", CONTACT.hours) }
                    <button class="contact-book" onclick={book_online}>{"Book online"}</button>
                </div>
                <div class="contact-map">
                    <iframe
                        src={CONTACT.map_embed}
                        title="Marvie Beauty location"
                        loading="lazy"
                        referrerpolicy="no-referrer-when-downgrade"
                        allowfullscreen=true
                    />
                </div>
            </div>
        </section>
    }
}

/// Booking form shown inside the modal.
#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let form = use_mut_ref(ContactForm::default);
    let update = use_update();

    let on_text = |field: Field| {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: InputEvent| {
            let value = match field {
                Field::Message => e.target_unchecked_into::<HtmlTextAreaElement>().value(),
                _ => e.target_unchecked_into::<HtmlInputElement>().value(),
            };
            form.borrow_mut().set(field, value);
            update();
        })
    };

    let on_service = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            form.borrow_mut().set(Field::Service, select.value());
            update();
        })
    };

    let on_submit = {
        let form = form.clone();
        let update = update.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let started = form.borrow_mut().begin_submit();
            update();
            let payload = match started {
                Ok(payload) => payload,
                Err(SubmitBlocked::InFlight) => return,
                Err(blocked) => {
                    warn!("Booking form not sent: {}", blocked);
                    return;
                }
            };
            let form = form.clone();
            let update = update.clone();
            spawn_local(async move {
                let outcome = deliver(&HttpContactTransport::default(), &payload).await;
                form.borrow_mut().finish(outcome);
                info!("Booking form finished with {:?}", form.borrow().status());
                update();
            });
        })
    };

    let state = form.borrow();
    let error_for = |field: Field| match state.error(field) {
        Some(message) => html! {
            <p id={format!("{}-error", field)} class="form-error" role="alert">{ message }</p>
        },
        None => html! {},
    };
    let invalid = |field: Field| state.error(field).is_some().to_string();
    let described_by = |field: Field| {
        state
            .error(field)
            .map(|_| AttrValue::from(format!("{}-error", field)))
    };
    let selected = state.service.map(Service::slug).unwrap_or_default();
    let submitting = state.is_submitting();
    let banner_class = match state.status() {
        FormStatus::Sent => "form-banner success",
        _ => "form-banner failure",
    };

    html! {
        <form class="booking-form" onsubmit={on_submit} novalidate=true>
            <style>
                {r#"
                .booking-form { display: flex; flex-direction: column; gap: 1.25rem; }
                .booking-form label { display: block; font-size: 0.875rem; font-weight: 600; color: #475161; margin-bottom: 0.5rem; }
                .booking-form input,
                .booking-form select,
                .booking-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .booking-form input:focus,
                .booking-form select:focus,
                .booking-form textarea:focus { outline: 2px solid #D9C7B0; border-color: transparent; }
                .booking-form [aria-invalid="true"] { border-color: #ef4444; }
                .form-error { color: #ef4444; font-size: 0.875rem; margin: 0.25rem 0 0; }
                .form-banner { padding: 1rem; border-radius: 0.5rem; font-size: 0.875rem; }
                .form-banner.success { background: #f0fdf4; color: #166534; }
                .form-banner.failure { background: #fef2f2; color: #991b1b; }
                .form-submit {
                    padding: 1rem;
                    background: #475161;
                    color: #fff;
                    border: none;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                }
                .form-submit:disabled { opacity: 0.6; cursor: not-allowed; }
                "#}
            </style>
            if let Some(message) = state.banner() {
                <div class={banner_class} role="status">{ message }</div>
            }
            <div>
                <label for="name">{"Full Name *"}</label>
                <input id="name" type="text" autocomplete="name" placeholder="Your full name"
                    value={state.name.clone()} oninput={on_text(Field::Name)}
                    aria-invalid={invalid(Field::Name)} aria-describedby={described_by(Field::Name)} />
                { error_for(Field::Name) }
            </div>
            <div>
                <label for="phone">{"Phone / WhatsApp *"}</label>
                <input id="phone" type="tel" autocomplete="tel" placeholder="+62 8xx xxxx xxxx"
                    value={state.phone.clone()} oninput={on_text(Field::Phone)}
                    aria-invalid={invalid(Field::Phone)} aria-describedby={described_by(Field::Phone)} />
                { error_for(Field::Phone) }
            </div>
            <div>
                <label for="email">{"Email"}</label>
                <input id="email" type="email" autocomplete="email" placeholder="you@example.com"
                    value={state.email.clone()} oninput={on_text(Field::Email)}
                    aria-invalid={invalid(Field::Email)} aria-describedby={described_by(Field::Email)} />
                { error_for(Field::Email) }
            </div>
            <div>
                <label for="service">{"Treatment *"}</label>
                <select id="service" onchange={on_service}
                    aria-invalid={invalid(Field::Service)} aria-describedby={described_by(Field::Service)}>
                    <option value="" selected={selected.is_empty()}>{"Select a treatment"}</option>
                    { for Service::ALL.iter().map(|service| html! {
                        <option key={service.slug()} value={service.slug()} selected={selected == service.slug()}>
                            { service.label() }
                        </option>
                    }) }
                </select>
                { error_for(Field::Service) }
            </div>
            <div>
                <label for="message">{"Message"}</label>
                <textarea id="message" rows="4" placeholder="Tell us what you would like to achieve"
                    value={state.message.clone()} oninput={on_text(Field::Message)} />
            </div>
            <button type="submit" class="form-submit" disabled={submitting}>
                { if submitting { "Sending..." } else { "Send Booking Request" } }
            </button>
        </form>
    }
}
