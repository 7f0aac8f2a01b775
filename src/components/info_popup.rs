//! Disclosure panel hanging off a node card, plus the small stat cards used
//! inside it. Pure presentation, driven entirely by the owner's open flag.

use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InfoPopupProps {
    pub open: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(InfoPopup)]
pub fn info_popup(props: &InfoPopupProps) -> Html {
    if !props.open {
        return html! {};
    }
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    html! {
        <div
            onmousedown={swallow}
            style="position:absolute; top:0; right:calc(100% + 12px); width:300px; background:#161b22; border:1px solid #30363d; border-radius:10px; padding:14px 16px; box-shadow:0 6px 18px rgba(0,0,0,0.6); cursor:default;"
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct InfoCardProps {
    pub label: String,
    pub value: String,
}

/// One label/value cell of a popup stat grid.
#[function_component(InfoCard)]
pub fn info_card(props: &InfoCardProps) -> Html {
    html! {
        <div style="display:flex; justify-content:space-between; gap:6px; background:#0d1117; border:1px solid #21262d; border-radius:6px; padding:5px 8px; font-size:12px;">
            <span style="color:#8b949e;">{ props.label.clone() }</span>
            <span style="font-weight:500;">{ props.value.clone() }</span>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MaterialCardProps {
    pub name: String,
    #[prop_or_default]
    pub icon: Option<&'static str>,
    #[prop_or_default]
    pub quantity: Option<u32>,
}

/// Icon + name row for fuels and construction costs.
#[function_component(MaterialCard)]
pub fn material_card(props: &MaterialCardProps) -> Html {
    html! {
        <div style="display:flex; align-items:center; gap:6px; background:#0d1117; border:1px solid #21262d; border-radius:6px; padding:5px 8px; font-size:12px;">
            { match props.icon {
                Some(src) => html! { <img src={src} alt={props.name.clone()} style="width:18px; height:18px;" /> },
                None => html! {},
            } }
            <span style="color:#8b949e; flex:1;">{ props.name.clone() }</span>
            { match props.quantity {
                Some(q) => html! { <span style="font-weight:500;">{ q }</span> },
                None => html! {},
            } }
        </div>
    }
}
