use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::{FeaturePanel, PROMO_PANEL, SIDE_PANELS};

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    /// Every panel action leads to the booking form.
    pub on_booking_click: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    panel: FeaturePanel,
    large: bool,
    on_action: Callback<MouseEvent>,
}

#[function_component(Panel)]
fn panel(props: &PanelProps) -> Html {
    let panel = &props.panel;
    let class = classes!(
        "feature-panel",
        props.large.then(|| "feature-panel-large"),
        panel.image.is_none().then(|| "feature-panel-plain"),
    );

    html! {
        <div class={class}>
            if let Some(image) = panel.image {
                <img src={image.src} alt={image.alt} loading="lazy"
                    width={image.width.to_string()} height={image.height.to_string()} />
                <div class="feature-shade" aria-hidden="true"></div>
            }
            <div class="feature-copy">
                <p class="feature-eyebrow">{ panel.eyebrow }</p>
                <h3>{ panel.title[0] }<br />{ panel.title[1] }</h3>
                <button class="feature-action" onclick={props.on_action.clone()}>{ panel.action }</button>
            </div>
        </div>
    }
}

#[function_component(FeatureGrid)]
pub fn feature_grid(props: &FeatureGridProps) -> Html {
    let on_action = {
        let on_booking_click = props.on_booking_click.clone();
        Callback::from(move |_: MouseEvent| on_booking_click.emit(()))
    };

    html! {
        <section class="feature-grid-section">
            <style>
                {r#"
                .feature-grid-section { background: #f3f4f6; }
                .feature-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr;
                }
                .feature-side { display: grid; grid-template-rows: repeat(3, 1fr); }
                .feature-panel {
                    position: relative;
                    height: 12rem;
                    overflow: hidden;
                    color: #fff;
                    cursor: pointer;
                }
                .feature-panel-large { height: 24rem; }
                .feature-panel-plain {
                    background: linear-gradient(135deg, #475161, #2A2F3A);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                .feature-panel img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s;
                }
                .feature-panel:hover img { transform: scale(1.1); }
                .feature-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(71, 81, 97, 0.9), rgba(71, 81, 97, 0.3), transparent);
                }
                .feature-panel img ~ .feature-copy { position: absolute; bottom: 0; left: 0; padding: 1.5rem; }
                .feature-panel-plain .feature-copy { padding: 1.5rem; }
                .feature-copy { position: relative; }
                .feature-eyebrow {
                    color: #D9C7B0;
                    font-size: 0.75rem;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    margin: 0 0 0.5rem;
                }
                .feature-copy h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin: 0 0 0.75rem;
                }
                .feature-panel-large .feature-copy h3 { font-size: 2.5rem; }
                .feature-action {
                    background: none;
                    border: none;
                    color: #D9C7B0;
                    font-size: 0.75rem;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: underline;
                    text-underline-offset: 4px;
                    cursor: pointer;
                    padding: 0;
                }
                .feature-panel-large .feature-action {
                    border: 2px solid #fff;
                    color: #fff;
                    text-decoration: none;
                    padding: 0.5rem 1.5rem;
                }
                .feature-action:hover { color: #fff; }
                @media (min-width: 768px) {
                    .feature-grid { grid-template-columns: repeat(2, 1fr); }
                    .feature-panel { height: 12.5rem; }
                    .feature-panel-large { height: 37.5rem; }
                }
                "#}
            </style>
            <div class="feature-grid">
                <Panel panel={PROMO_PANEL} large=true on_action={on_action.clone()} />
                <div class="feature-side">
                    { for SIDE_PANELS.iter().map(|panel| html! {
                        <Panel key={panel.eyebrow} panel={*panel} large=false on_action={on_action.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
