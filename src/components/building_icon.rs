use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NodeBuildingIconProps {
    pub icon: Option<&'static str>,
    pub alt: &'static str,
    pub open: bool,
    pub on_toggle: Callback<()>,
}

/// Building portrait in the card corner; clicking it toggles the info popup.
#[function_component(NodeBuildingIcon)]
pub fn node_building_icon(props: &NodeBuildingIconProps) -> Html {
    let toggle = {
        let cb = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            cb.emit(());
        })
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    let border = if props.open { "#58a6ff" } else { "#30363d" };
    html! {
        <div
            onclick={toggle}
            onmousedown={swallow}
            title={props.alt}
            style={format!(
                "width:44px; height:44px; display:flex; align-items:center; justify-content:center; background:#0d1117; border:1px solid {}; border-radius:8px; cursor:pointer;",
                border
            )}
        >
            { match props.icon {
                Some(src) => html! { <img src={src} alt={props.alt} style="width:34px; height:34px;" /> },
                None => html! {},
            } }
        </div>
    }
}
