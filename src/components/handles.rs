//! Connection points on node cards. A handle is a dot on the card edge that
//! starts (source) or completes (target) an edge drag through the canvas
//! connection context, and shows a tooltip describing what flows through it.

use yew::prelude::*;

use crate::graph::canvas::ConnectionContext;
use crate::graph::types::{HandleKind, HandleRef, HandleSide, HandleSpec};

#[derive(Properties, PartialEq, Clone)]
pub struct HandlePointProps {
    pub node_id: String,
    pub spec: HandleSpec,
    /// Tooltip cards shown while hovering the handle.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(HandlePoint)]
pub fn handle_point(props: &HandlePointProps) -> Html {
    let hovered = use_state(|| false);
    let conn = use_context::<ConnectionContext>();

    let handle_ref = HandleRef {
        node: props.node_id.clone(),
        handle: props.spec.id,
    };
    let on_down = {
        let conn = conn.clone();
        let handle_ref = handle_ref.clone();
        let kind = props.spec.kind;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            if kind == HandleKind::Source {
                if let Some(c) = &conn {
                    c.begin.emit(handle_ref.clone());
                }
            }
        })
    };
    let on_up = {
        let conn = conn.clone();
        let kind = props.spec.kind;
        Callback::from(move |_e: MouseEvent| {
            if kind == HandleKind::Target {
                if let Some(c) = &conn {
                    c.complete.emit(handle_ref.clone());
                }
            }
        })
    };
    let enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let side_pos = match props.spec.side {
        HandleSide::Left => "left:-9px;",
        HandleSide::Right => "right:-9px;",
    };
    let dot_style = format!(
        "position:absolute; top:{:.0}px; {} width:16px; height:16px; border-radius:50%; \
         background:#0d1117; border:2px solid #58a6ff; box-sizing:border-box; cursor:crosshair;",
        props.spec.y_offset - 8.0,
        side_pos
    );
    let tooltip = if *hovered && !props.children.is_empty() {
        let tip_pos = match props.spec.side {
            HandleSide::Left => "right:24px;",
            HandleSide::Right => "left:24px;",
        };
        html! {
            <div style={format!(
                "position:absolute; top:-8px; {} display:flex; flex-direction:column; gap:6px; \
                 background:rgba(13,17,23,0.95); border:1px solid #30363d; border-radius:8px; \
                 padding:8px; min-width:170px; z-index:40; pointer-events:none;",
                tip_pos
            )}>
                { for props.children.iter() }
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <div
            style={dot_style}
            onmousedown={on_down}
            onmouseup={on_up}
            onmouseenter={enter}
            onmouseleave={leave}
        >
            { tooltip }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct TooltipCardProps {
    pub title: String,
    pub kind: &'static str,
    #[prop_or_default]
    pub icon: Option<&'static str>,
    #[prop_or_default]
    pub rate: Option<String>,
}

#[function_component(TooltipCard)]
pub fn tooltip_card(props: &TooltipCardProps) -> Html {
    html! {
        <div style="display:flex; align-items:center; gap:8px;">
            { match props.icon {
                Some(src) => html! { <img src={src} alt={props.title.clone()} style="width:24px; height:24px;" /> },
                None => html! {},
            } }
            <div style="display:flex; flex-direction:column;">
                <span style="font-size:12px; font-weight:600;">{ props.title.clone() }</span>
                <span style="font-size:10px; color:#8b949e;">{ props.kind }</span>
                { match &props.rate {
                    Some(rate) => html! { <span style="font-size:11px; color:#58a6ff;">{ rate.clone() }</span> },
                    None => html! {},
                } }
            </div>
        </div>
    }
}
