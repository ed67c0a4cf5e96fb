use yew::prelude::*;
use log::{info, Level};

mod config;
mod content;
mod messaging;
mod ui {
    pub mod scroll_lock;
    pub mod focus;
    pub mod dialog;
    pub mod carousel;
    pub mod schedule;
    pub mod reveal;
    pub mod navigation;
}
mod contact {
    pub mod form;
    pub mod transport;
}
mod components {
    pub mod animated_section;
    pub mod certifications;
    pub mod contact;
    pub mod feature_grid;
    pub mod floating_whatsapp;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod modal;
    pub mod sections;
    pub mod services;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use ui::scroll_lock::{BodyOverflow, ScrollLock};


#[function_component]
fn App() -> Html {
    // One lock for the whole page so overlays can tell when the body is frozen.
    let scroll_lock = use_memo(|_| ScrollLock::new(BodyOverflow), ());

    html! {
        <ContextProvider<ScrollLock> context={(*scroll_lock).clone()}>
            <Landing />
        </ContextProvider<ScrollLock>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    info!("Page references {} image assets", content::asset_catalog().len());
    yew::Renderer::<App>::new().render();
}
