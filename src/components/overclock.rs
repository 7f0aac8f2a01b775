//! The overclocking control: text entry, stepped increment buttons and a
//! decade-snapping slider, all converging on one clamped value that is
//! emitted upstream on every accepted change.

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::assets;
use crate::model::{
    DEFAULT_PERCENT, MAX_PERCENT, MIN_PERCENT, clamp_percent, snap_to_decade, step_decade_down,
    step_decade_up, step_unit_down, step_unit_up,
};

#[derive(Properties, PartialEq, Clone)]
pub struct OverclockSectionProps {
    #[prop_or(DEFAULT_PERCENT)]
    pub value: i32,
    pub on_change: Callback<i32>,
}

#[function_component(OverclockSection)]
pub fn overclock_section(props: &OverclockSectionProps) -> Html {
    let amount = use_state(|| clamp_percent(props.value));

    // The owner's value is authoritative; follow it whenever it changes.
    {
        let amount = amount.clone();
        use_effect_with(props.value, move |v| {
            amount.set(clamp_percent(*v));
            || ()
        });
    }

    // Single funnel for all entry paths: clamp, store, notify.
    let set_value = {
        let amount = amount.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |v: i32| {
            let v = clamp_percent(v);
            amount.set(v);
            on_change.emit(v);
        })
    };

    let preset_default = {
        let set = set_value.clone();
        Callback::from(move |_: MouseEvent| set.emit(DEFAULT_PERCENT))
    };
    let preset_max = {
        let set = set_value.clone();
        Callback::from(move |_: MouseEvent| set.emit(MAX_PERCENT))
    };
    let dec_ten = {
        let set = set_value.clone();
        let amount = amount.clone();
        Callback::from(move |_: MouseEvent| set.emit(step_decade_down(*amount)))
    };
    let dec_one = {
        let set = set_value.clone();
        let amount = amount.clone();
        Callback::from(move |_: MouseEvent| set.emit(step_unit_down(*amount)))
    };
    let inc_one = {
        let set = set_value.clone();
        let amount = amount.clone();
        Callback::from(move |_: MouseEvent| set.emit(step_unit_up(*amount)))
    };
    let inc_ten = {
        let set = set_value.clone();
        let amount = amount.clone();
        Callback::from(move |_: MouseEvent| set.emit(step_decade_up(*amount)))
    };
    let on_text = {
        let set = set_value.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            // Non-numeric entry is silently ignored; the previous value stands.
            if let Ok(v) = input.value().trim().parse::<i32>() {
                set.emit(v);
            }
        })
    };
    let on_slider = {
        let set = set_value.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            if let Ok(raw) = input.value().parse::<i32>() {
                set.emit(snap_to_decade(raw));
            }
        })
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    let ticks = (0..25).map(|i| {
        html! { <span key={i} style="width:1px; height:6px; background:#30363d;"></span> }
    });

    html! {
        <div style="display:flex; flex-direction:column; gap:8px; margin-top:10px;" onmousedown={swallow}>
            <h2 style="display:flex; align-items:center; gap:6px; margin:0; font-size:14px;">
                { match assets::icon("Power Shard") {
                    Some(src) => html! { <img src={src} alt="Power Shard" style="width:18px; height:18px;" /> },
                    None => html! {},
                } }
                {"Overclocking"}
            </h2>

            <span style="display:flex; gap:6px;">
                <button onclick={preset_default} style="flex:1;">{"Default (100%)"}</button>
                <button onclick={preset_max} style="flex:1;">{"Max (250%)"}</button>
            </span>

            <span style="display:flex; gap:4px; align-items:center;">
                <button onclick={dec_ten}>{"-10"}</button>
                <button onclick={dec_one}>{"-1"}</button>
                <input
                    min={MIN_PERCENT.to_string()}
                    max={MAX_PERCENT.to_string()}
                    maxlength="3"
                    inputmode="numeric"
                    value={amount.to_string()}
                    oninput={on_text}
                    style="flex:1; min-width:0; text-align:center; padding:4px;"
                />
                <button onclick={inc_one}>{"+1"}</button>
                <button onclick={inc_ten}>{"+10"}</button>
            </span>

            <div style="display:flex; flex-direction:column; gap:2px;">
                <input
                    type="range"
                    min={MIN_PERCENT.to_string()}
                    max={MAX_PERCENT.to_string()}
                    step="1"
                    value={amount.to_string()}
                    oninput={on_slider}
                    style="width:100%;"
                />
                <div style="display:flex; justify-content:space-between; padding:0 6px;">
                    { for ticks }
                </div>
            </div>
        </div>
    }
}
