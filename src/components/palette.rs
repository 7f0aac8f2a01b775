use yew::prelude::*;

use crate::graph::types::NodeTypeRegistry;

#[derive(Properties, PartialEq, Clone)]
pub struct PalettePanelProps {
    pub registry: NodeTypeRegistry,
    pub on_add: Callback<&'static str>,
}

/// One add-button per registered building type.
#[function_component(PalettePanel)]
pub fn palette_panel(props: &PalettePanelProps) -> Html {
    let buttons = props.registry.types.iter().map(|ty| {
        let on_click = {
            let cb = props.on_add.clone();
            let tag = ty.tag;
            Callback::from(move |_| cb.emit(tag))
        };
        html! {
            <button key={ty.tag} onclick={on_click}>{ format!("+ {}", ty.title) }</button>
        }
    });
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:180px; display:flex; flex-direction:column; gap:6px;">
        <div style="font-weight:600; margin-bottom:2px;">{"Buildings"}</div>
        { for buttons }
        <div style="font-size:11px; opacity:0.7; line-height:1.3;">{"Drag cards to arrange. Drag a handle to connect; click an edge to cut it."}</div>
    </div>}
}
