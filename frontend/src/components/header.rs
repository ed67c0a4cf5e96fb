use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{self, NavItem};
use crate::ui::navigation::{header_is_solid, scroll_to_section, scroll_y};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub on_booking_click: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| header_is_solid(scroll_y()));

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::<dyn Fn()>::new(move || {
                    is_scrolled.set(header_is_solid(scroll_y()));
                });
                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_click = |item: NavItem| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(item.section);
        })
    };

    let open_booking = {
        let menu_open = menu_open.clone();
        let on_booking_click = props.on_booking_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_booking_click.emit(());
        })
    };

    let mobile_tab_index = if *menu_open { "0" } else { "-1" };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))} role="banner">
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 40;
                    transition: box-shadow 0.3s ease-in-out;
                }
                .site-header::before {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: #2A2F3A;
                    opacity: 0;
                    transition: opacity 0.3s;
                }
                .site-header.scrolled { box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1); }
                .site-header.scrolled::before { opacity: 1; }
                .header-nav {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .header-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #fff;
                    text-decoration: none;
                    font-size: 1.5rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                }
                .header-logo img { height: 3.5rem; width: auto; }
                .header-links { display: none; gap: 2rem; list-style: none; margin: 0; padding: 0; }
                .header-links a { color: #fff; text-decoration: none; font-weight: 500; }
                .header-links a:hover { color: #D9C7B0; }
                .header-cta {
                    display: none;
                    padding: 0.75rem 2rem;
                    background: #D9C7B0;
                    color: #475161;
                    border: none;
                    font-weight: 600;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    cursor: pointer;
                }
                .header-cta:hover { background: #B8A890; }
                .burger-menu { background: none; border: none; color: #fff; padding: 0.5rem; cursor: pointer; }
                .mobile-menu {
                    position: relative;
                    background: #1f2937;
                    max-height: 0;
                    opacity: 0;
                    overflow: hidden;
                    transition: all 0.3s ease-in-out;
                }
                .mobile-menu.open { max-height: 24rem; opacity: 1; }
                .mobile-menu ul { list-style: none; margin: 0; padding: 1rem 1.5rem; }
                .mobile-menu a { display: block; padding: 0.5rem 0; color: #fff; text-decoration: none; }
                .mobile-menu .header-cta { display: block; width: 100%; margin-top: 0.5rem; }
                @media (min-width: 768px) {
                    .header-links { display: flex; }
                    .header-cta { display: block; }
                    .burger-menu, .mobile-menu { display: none; }
                }
                "#}
            </style>
            <nav class="header-nav" aria-label="Main navigation">
                <a href="#home" class="header-logo" onclick={nav_click(content::NAV_ITEMS[0])}>
                    <img src={content::LOGO.src} alt={content::LOGO.alt}
                        width={content::LOGO.width.to_string()} height={content::LOGO.height.to_string()} />
                    <span>{"MARVIE BEAUTY"}</span>
                </a>
                <ul class="header-links">
                    { for content::NAV_ITEMS.iter().map(|item| html! {
                        <li key={item.section}>
                            <a href={format!("#{}", item.section)} onclick={nav_click(*item)}>{ item.label }</a>
                        </li>
                    }) }
                </ul>
                <button class="header-cta" onclick={open_booking.clone()}>{"Book Appointment"}</button>
                <button
                    class="burger-menu"
                    onclick={toggle_menu}
                    aria-label="Toggle menu"
                    aria-expanded={(*menu_open).to_string()}
                >
                    <svg width="24" height="24" fill="none" stroke="currentColor" stroke-width="2"
                        stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
                        if *menu_open {
                            <path d="M6 18L18 6M6 6l12 12" />
                        } else {
                            <path d="M4 6h16M4 12h16M4 18h16" />
                        }
                    </svg>
                </button>
            </nav>
            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))} role="menu" aria-hidden={(!*menu_open).to_string()}>
                <ul>
                    { for content::NAV_ITEMS.iter().map(|item| html! {
                        <li key={item.section} role="none">
                            <a href={format!("#{}", item.section)} role="menuitem"
                                tabindex={mobile_tab_index} onclick={nav_click(*item)}>
                                { item.label }
                            </a>
                        </li>
                    }) }
                    <li role="none">
                        <button class="header-cta" role="menuitem" tabindex={mobile_tab_index} onclick={open_booking}>
                            {"Book Appointment"}
                        </button>
                    </li>
                </ul>
            </div>
        </header>
    }
}
