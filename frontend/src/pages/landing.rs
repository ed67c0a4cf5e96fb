use log::info;
use yew::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::certifications::Certifications;
use crate::components::contact::{BookingForm, ContactSection};
use crate::components::feature_grid::FeatureGrid;
use crate::components::floating_whatsapp::FloatingWhatsApp;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::modal::Modal;
use crate::components::sections::{About, Gallery, WhyChooseUs};
use crate::components::services::Services;
use crate::components::testimonials::Testimonials;

#[function_component(Landing)]
pub fn landing() -> Html {
    let is_booking_open = use_state(|| false);

    let open_booking = {
        let is_booking_open = is_booking_open.clone();
        Callback::from(move |_: ()| {
            info!("Opening booking dialog");
            is_booking_open.set(true);
        })
    };
    let close_booking = {
        let is_booking_open = is_booking_open.clone();
        Callback::from(move |_: ()| {
            info!("Closing booking dialog");
            is_booking_open.set(false);
        })
    };

    html! {
        <div class="landing-page">
            <Header on_booking_click={open_booking.clone()} />
            <main>
                <Hero on_booking_click={open_booking.clone()} />
                <AnimatedSection><About /></AnimatedSection>
                <AnimatedSection><Services on_booking_click={open_booking.clone()} /></AnimatedSection>
                <AnimatedSection><FeatureGrid on_booking_click={open_booking.clone()} /></AnimatedSection>
                <AnimatedSection><WhyChooseUs /></AnimatedSection>
                <AnimatedSection><Certifications /></AnimatedSection>
                <AnimatedSection><Testimonials /></AnimatedSection>
                <AnimatedSection><Gallery /></AnimatedSection>
                <AnimatedSection><ContactSection on_booking_click={open_booking} /></AnimatedSection>
            </main>
            <Footer />
            <FloatingWhatsApp />
            <Modal is_open={*is_booking_open} on_close={close_booking} title="Book an Appointment">
                <BookingForm />
            </Modal>
        </div>
    }
}
