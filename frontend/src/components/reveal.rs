use yew::prelude::*;

use crate::motion::{self, Pose, Transition};
use crate::viewport::dom::use_in_view;
use crate::viewport::watcher::WatchOptions;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Pose::rise(20.0))]
    pub hidden: Pose,
    #[prop_or(Pose::REST)]
    pub shown: Pose,
    #[prop_or(Transition::new(0.8))]
    pub transition: Transition,
    /// Fraction of the element that must be on screen.
    #[prop_or(0.3)]
    pub amount: f64,
    #[prop_or(true)]
    pub once: bool,
}

/// Animates its children from `hidden` to `shown` when scrolled into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let options = WatchOptions {
        once: props.once,
        ..WatchOptions::default()
    }
    .amount(props.amount);
    let in_view = use_in_view(node.clone(), options);

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={motion::style(props.hidden, props.shown, in_view, props.transition)}
        >
            { props.children.clone() }
        </div>
    }
}
