//! Single-select dropdown with icon-annotated options. The open list excludes
//! the current selection, closes on selection, on a pointer press outside the
//! control, and on Escape.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{KeyboardEvent, Node};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
    pub icon: Option<&'static str>,
}

#[derive(Properties, PartialEq, Clone)]
pub struct DropdownProps {
    pub label: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub on_change: Callback<String>,
    /// Narrow variant for short value sets (miner tiers).
    #[prop_or_default]
    pub compact: bool,
}

#[function_component(Dropdown)]
pub fn dropdown(props: &DropdownProps) -> Html {
    let open = use_state(|| false);
    let root_ref = use_node_ref();

    // Dismissal: capture-phase pointer press outside the root, or Escape.
    {
        let open = open.clone();
        let root_ref = root_ref.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .expect("document");
            let outside_cb = {
                let open = open.clone();
                let root_ref = root_ref.clone();
                Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
                    let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let inside = match (root_ref.get(), target.as_ref()) {
                        (Some(root), Some(t)) => root.contains(Some(t)),
                        _ => false,
                    };
                    if !inside {
                        open.set(false);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            document
                .add_event_listener_with_callback_and_bool(
                    "mousedown",
                    outside_cb.as_ref().unchecked_ref(),
                    true,
                )
                .unwrap();
            let escape_cb = {
                let open = open.clone();
                Closure::wrap(Box::new(move |e: KeyboardEvent| {
                    if e.key() == "Escape" {
                        open.set(false);
                    }
                }) as Box<dyn FnMut(_)>)
            };
            document
                .add_event_listener_with_callback("keydown", escape_cb.as_ref().unchecked_ref())
                .unwrap();
            move || {
                let _ = document.remove_event_listener_with_callback_and_bool(
                    "mousedown",
                    outside_cb.as_ref().unchecked_ref(),
                    true,
                );
                let _ = document.remove_event_listener_with_callback(
                    "keydown",
                    escape_cb.as_ref().unchecked_ref(),
                );
                drop(outside_cb);
                drop(escape_cb);
            }
        });
    }

    let selected = props.options.iter().find(|o| o.value == props.value);
    let available: Vec<&DropdownOption> = props
        .options
        .iter()
        .filter(|o| o.value != props.value)
        .collect();

    let toggle = {
        let open = open.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            open.set(!*open);
        })
    };
    let swallow = Callback::from(|e: MouseEvent| e.stop_propagation());

    let rows = available.iter().map(|opt| {
        let on_select = {
            let open = open.clone();
            let on_change = props.on_change.clone();
            let value = opt.value.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_change.emit(value.clone());
                open.set(false);
            })
        };
        html! {
            <div
                key={opt.value.clone()}
                onclick={on_select}
                style="display:flex; align-items:center; gap:6px; padding:5px 8px; cursor:pointer; font-size:12px; border-bottom:1px solid #21262d;"
            >
                { match opt.icon {
                    Some(src) => html! { <img src={src} alt={opt.label.clone()} style="width:16px; height:16px;" /> },
                    None => html! {},
                } }
                <span>{ opt.label.clone() }</span>
            </div>
        }
    });

    let root_style = if props.compact {
        "position:relative; display:flex; flex-direction:column; gap:3px; width:76px;"
    } else {
        "position:relative; display:flex; flex-direction:column; gap:3px; flex:1; min-width:0;"
    };
    let arrow_style = if *open {
        "font-size:9px; color:#8b949e; transform:rotate(180deg); transition:transform 0.12s;"
    } else {
        "font-size:9px; color:#8b949e; transition:transform 0.12s;"
    };

    html! {
        <div ref={root_ref} style={root_style} onmousedown={swallow}>
            <label style="font-size:11px; color:#8b949e;">{ props.label }</label>
            <div
                onclick={toggle}
                style="display:flex; align-items:center; justify-content:space-between; gap:6px; padding:5px 8px; background:#0d1117; border:1px solid #30363d; border-radius:6px; cursor:pointer; font-size:12px;"
            >
                <div style="display:flex; align-items:center; gap:6px; min-width:0;">
                    { match selected.and_then(|s| s.icon) {
                        Some(src) => html! { <img src={src} alt={selected.map(|s| s.label.clone()).unwrap_or_default()} style="width:16px; height:16px;" /> },
                        None => html! {},
                    } }
                    <span style="white-space:nowrap; overflow:hidden; text-overflow:ellipsis;">
                        { selected.map(|s| s.label.clone()).unwrap_or_default() }
                    </span>
                </div>
                <span style={arrow_style}>{"▼"}</span>
            </div>
            { if *open {
                html! {
                    <div style="position:absolute; top:100%; left:0; right:0; margin-top:2px; max-height:180px; overflow-y:auto; background:#0d1117; border:1px solid #30363d; border-radius:6px; z-index:30;">
                        { for rows }
                    </div>
                }
            } else {
                html! {}
            } }
        </div>
    }
}
