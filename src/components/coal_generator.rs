//! Coal generator node: burns fuel, produces power. Output and fuel use both
//! scale linearly with the clock.

use yew::prelude::*;

use super::building_icon::NodeBuildingIcon;
use super::description::DescriptionSection;
use super::handles::{HandlePoint, TooltipCard};
use super::info_popup::{InfoCard, InfoPopup, MaterialCard};
use super::overclock::OverclockSection;
use crate::assets;
use crate::data::{COAL_GENERATOR, COAL_GENERATOR_DESCRIPTION, COAL_GENERATOR_DIMENSIONS};
use crate::graph::types::{HandleKind, HandleSide, HandleSpec, NodeDescriptor};
use crate::model::{DEFAULT_PERCENT, scale_linear};
use crate::util::format_one_decimal;

pub const TYPE_TAG: &str = "coal_generator";

pub const HANDLES: &[HandleSpec] = &[
    HandleSpec {
        id: "input-coal",
        side: HandleSide::Left,
        kind: HandleKind::Target,
        y_offset: 120.0,
    },
    HandleSpec {
        id: "input-water",
        side: HandleSide::Left,
        kind: HandleKind::Target,
        y_offset: 158.0,
    },
];

pub fn render(node: &NodeDescriptor) -> Html {
    html! { <CoalGeneratorNode id={node.id.clone()} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CoalGeneratorNodeProps {
    pub id: String,
}

#[function_component(CoalGeneratorNode)]
pub fn coal_generator_node(props: &CoalGeneratorNodeProps) -> Html {
    let overclock = use_state(|| DEFAULT_PERCENT);
    let popup_open = use_state(|| false);
    let description_expanded = use_state(|| false);

    let output_mw = scale_linear(COAL_GENERATOR.base_output_mw, *overclock);
    let fuel_per_min = scale_linear(COAL_GENERATOR.base_fuel_per_min, *overclock);

    let on_overclock = {
        let overclock = overclock.clone();
        Callback::from(move |v: i32| overclock.set(v))
    };
    let toggle_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_| popup_open.set(!*popup_open))
    };
    let toggle_description = {
        let description_expanded = description_expanded.clone();
        Callback::from(move |_| description_expanded.set(!*description_expanded))
    };

    let dims = COAL_GENERATOR_DIMENSIONS;
    let fuels = COAL_GENERATOR.accepted_fuels.iter().map(|fuel| {
        html! { <MaterialCard key={*fuel} name={fuel.to_string()} icon={assets::icon(fuel)} /> }
    });
    let materials = COAL_GENERATOR.build_materials.iter().map(|m| {
        html! {
            <MaterialCard
                key={m.name}
                name={m.name.to_string()}
                icon={assets::icon(m.name)}
                quantity={m.quantity}
            />
        }
    });
    let fuel_tooltips = COAL_GENERATOR.accepted_fuels.iter().map(|fuel| {
        html! {
            <TooltipCard
                key={*fuel}
                icon={assets::icon(fuel)}
                title={fuel.to_string()}
                kind="Solid Fuel Input"
            />
        }
    });

    html! {
        <div style="display:flex; flex-direction:column; gap:4px;">
            <NodeBuildingIcon
                icon={assets::icon("Coal Generator")}
                alt="Coal Generator"
                open={*popup_open}
                on_toggle={toggle_popup}
            />
            <InfoPopup open={*popup_open}>
                <div>
                    <h2 style="margin:0; font-size:16px;">{"Coal Generator"}</h2>
                    <h3 style="margin:2px 0 0 0; font-size:11px; color:#8b949e; font-weight:400;">{"Power Generation"}</h3>
                </div>

                <DescriptionSection
                    text={COAL_GENERATOR_DESCRIPTION}
                    expanded={*description_expanded}
                    on_toggle={toggle_description}
                />

                <div style="margin-top:10px;">
                    <h3 style="margin:0 0 6px 0; font-size:12px; color:#8b949e;">{"Power Production"}</h3>
                    <div style="display:grid; grid-template-columns:1fr 1fr; gap:6px;">
                        <InfoCard label="Base Output:" value={format!("{} MW", COAL_GENERATOR.base_output_mw as i32)} />
                        <InfoCard label="Overclock:" value={format!("{}%", *overclock)} />
                        <InfoCard label="Current Output:" value={format!("{} MW", format_one_decimal(output_mw))} />
                        <InfoCard label="Fuel Consumption:" value={format!("{}/min", format_one_decimal(fuel_per_min))} />
                    </div>
                </div>

                <div style="margin-top:10px;">
                    <h3 style="margin:0 0 6px 0; font-size:12px; color:#8b949e;">{"Accepted Fuels"}</h3>
                    <section style="display:flex; flex-direction:column; gap:6px;">
                        { for fuels }
                    </section>
                </div>

                <div style="margin-top:10px;">
                    <h3 style="margin:0 0 6px 0; font-size:12px; color:#8b949e;">{"Dimensions"}</h3>
                    <div style="display:grid; grid-template-columns:1fr 1fr; gap:6px;">
                        <InfoCard label="Width:" value={format!("{} m", dims.width_m)} />
                        <InfoCard label="Height:" value={format!("{} m", dims.height_m)} />
                        <InfoCard label="Length:" value={format!("{} m", dims.length_m)} />
                        <InfoCard label="Area:" value={format!("{} m²", dims.area_m2())} />
                    </div>
                </div>

                <div style="margin-top:10px;">
                    <h3 style="margin:0 0 6px 0; font-size:12px; color:#8b949e;">{"Build Materials"}</h3>
                    <section style="display:flex; flex-direction:column; gap:6px;">
                        { for materials }
                    </section>
                </div>
            </InfoPopup>

            <h1 style="margin:4px 0 0 0; font-size:16px;">{"Coal Generator"}</h1>

            <OverclockSection value={*overclock} on_change={on_overclock} />

            <div style="display:flex; justify-content:space-between; margin-top:10px; padding:6px 8px; background:#0d1117; border:1px solid #21262d; border-radius:6px; font-size:12px;">
                <span style="color:#8b949e;">{"Power Production:"}</span>
                <span style="font-weight:600; color:#58a6ff;">{ format!("{} MW", format_one_decimal(output_mw)) }</span>
            </div>

            <HandlePoint node_id={props.id.clone()} spec={HANDLES[0]}>
                { for fuel_tooltips }
            </HandlePoint>
            <HandlePoint node_id={props.id.clone()} spec={HANDLES[1]}>
                <TooltipCard icon={assets::icon("Water")} title="Water" kind="Liquid Input" />
            </HandlePoint>
        </div>
    }
}
