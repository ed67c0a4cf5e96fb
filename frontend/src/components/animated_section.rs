use yew::prelude::*;

use crate::ui::reveal::use_reveal;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    let class = classes!(
        "animated-section",
        if visible { "is-visible" } else { "is-hidden" },
        props.class.clone(),
    );

    html! {
        <div ref={node} class={class}>
            { for props.children.iter() }
        </div>
    }
}
