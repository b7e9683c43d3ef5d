use yew::prelude::*;

use crate::hooks::use_reveal;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    /// Anchor id; sections listed in the registry must set it.
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A page section that fades in the first time it scrolls into view.
#[function_component(RevealSection)]
pub fn reveal_section(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("page-section", "reveal", revealed.then_some("visible"), props.class.clone())}
        >
            { for props.children.iter() }
        </section>
    }
}

