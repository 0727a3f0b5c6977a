use yew::prelude::*;

use crate::config::REVEAL_MARGIN_PX;
use crate::motion::hooks::use_reveal;
use crate::motion::reveal::{reveal_css, RevealStyle, Stagger};

/// Whether the enclosing `Section` has entered the viewport.
#[derive(Clone, Copy, PartialEq)]
pub struct Revealed(pub bool);

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(REVEAL_MARGIN_PX)]
    pub margin: i32,
    pub children: Children,
}

/// Reveal container: latches once on viewport entry and lets every
/// `FadeUp` inside it animate in with its own delay.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.margin);

    html! {
        <section
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal-section", props.class.clone(), revealed.then_some("is-revealed"))}
        >
            <ContextProvider<Revealed> context={Revealed(revealed)}>
                { for props.children.iter() }
            </ContextProvider<Revealed>>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeUpProps {
    #[prop_or_default]
    pub index: usize,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
    #[prop_or(RevealStyle::FADE_UP)]
    pub reveal: RevealStyle,
    pub children: Children,
}

/// Staggered child of a `Section`. Outside a section it renders shown.
#[function_component(FadeUp)]
pub fn fade_up(props: &FadeUpProps) -> Html {
    let revealed = use_context::<Revealed>().map_or(true, |r| r.0);
    let motion = reveal_css(&props.reveal, &Stagger::FADE_UP, props.index, revealed);
    let style = match &props.style {
        Some(extra) => format!("{} {}", motion, extra),
        None => motion,
    };

    html! {
        <div class={props.class.clone()} {style}>
            { for props.children.iter() }
        </div>
    }
}
