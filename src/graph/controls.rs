use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CanvasControlsProps {
    pub on_zoom_in: Callback<()>,
    pub on_zoom_out: Callback<()>,
    pub on_fit: Callback<()>,
}

#[function_component(CanvasControls)]
pub fn canvas_controls(props: &CanvasControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom_in.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let zo = {
        let cb = props.on_zoom_out.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let fit = {
        let cb = props.on_fit.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());
    html! {<div style="position:absolute; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;"
        onmousedown={swallow}>
        <button onclick={zi}> {"+"} </button>
        <button onclick={zo}> {"-"} </button>
        <span style="width:8px;"></span>
        <button onclick={fit}> {"Fit"} </button>
    </div>}
}
