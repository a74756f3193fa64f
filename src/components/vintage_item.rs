use log::debug;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::dom;

const HOVERED: &[(&str, &str)] = &[
    ("transform", "scale(1.2) rotate(10deg)"),
    ("transition", "all 0.3s cubic-bezier(0.4, 0, 0.2, 1)"),
];

const RESTING: &[(&str, &str)] = &[("transform", "scale(1) rotate(0deg)")];

#[derive(Properties, PartialEq)]
pub struct VintageItemProps {
    pub emoji: &'static str,
    pub label: &'static str,
}

#[function_component(VintageItem)]
pub fn vintage_item(props: &VintageItemProps) -> Html {
    let item_ref = use_node_ref();

    let restyle = |styles: &'static [(&'static str, &'static str)]| {
        let item_ref = item_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(item) = item_ref.cast::<HtmlElement>() {
                if let Err(e) = dom::set_styles(&item, styles) {
                    debug!("Hover style not applied: {}", e);
                }
            }
        })
    };

    html! {
        <span
            ref={item_ref.clone()}
            class="item"
            role="img"
            aria-label={props.label}
            onmouseenter={restyle(HOVERED)}
            onmouseleave={restyle(RESTING)}
        >
            { props.emoji }
        </span>
    }
}
