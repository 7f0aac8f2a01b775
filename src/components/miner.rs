//! Miner node: extracts ore at a rate set by tier, deposit quality and the
//! clock. Extraction scales linearly; power draw follows the power law.

use yew::prelude::*;

use super::building_icon::NodeBuildingIcon;
use super::description::DescriptionSection;
use super::dropdown::{Dropdown, DropdownOption};
use super::handles::{HandlePoint, TooltipCard};
use super::info_popup::{InfoCard, InfoPopup, MaterialCard};
use super::overclock::OverclockSection;
use crate::assets;
use crate::data::{MINER_DESCRIPTION, MINER_DIMENSIONS, MinerTier, OreQuality, OreType, miner_spec};
use crate::graph::types::{HandleKind, HandleSide, HandleSpec, NodeDescriptor};
use crate::model::{DEFAULT_PERCENT, extractor_power_mw, scale_linear};
use crate::util::format_one_decimal;

pub const TYPE_TAG: &str = "miner";

pub const HANDLES: &[HandleSpec] = &[HandleSpec {
    id: "output-ore",
    side: HandleSide::Right,
    kind: HandleKind::Source,
    y_offset: 140.0,
}];

pub fn render(node: &NodeDescriptor) -> Html {
    html! { <MinerNode id={node.id.clone()} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct MinerNodeProps {
    pub id: String,
}

#[function_component(MinerNode)]
pub fn miner_node(props: &MinerNodeProps) -> Html {
    let overclock = use_state(|| DEFAULT_PERCENT);
    let tier = use_state(|| MinerTier::Mk1);
    let ore = use_state(|| OreType::Iron);
    let quality = use_state(|| OreQuality::Normal);
    let popup_open = use_state(|| false);
    let description_expanded = use_state(|| false);

    // Tier and quality changes recompute against the current clock; the
    // clock itself never resets.
    let spec = miner_spec(*tier);
    let power_mw = extractor_power_mw(spec.base_power_mw, *overclock);
    let rate_per_min = scale_linear(spec.base_rate(*quality), *overclock);

    let on_overclock = {
        let overclock = overclock.clone();
        Callback::from(move |v: i32| overclock.set(v))
    };
    let on_tier = {
        let tier = tier.clone();
        Callback::from(move |v: String| {
            if let Some(t) = MinerTier::from_label(&v) {
                tier.set(t);
            }
        })
    };
    let on_ore = {
        let ore = ore.clone();
        Callback::from(move |v: String| {
            if let Some(o) = OreType::from_label(&v) {
                ore.set(o);
            }
        })
    };
    let on_quality = {
        let quality = quality.clone();
        Callback::from(move |v: String| {
            if let Some(q) = OreQuality::from_label(&v) {
                quality.set(q);
            }
        })
    };
    let toggle_popup = {
        let popup_open = popup_open.clone();
        Callback::from(move |_| popup_open.set(!*popup_open))
    };
    let toggle_description = {
        let description_expanded = description_expanded.clone();
        Callback::from(move |_| description_expanded.set(!*description_expanded))
    };

    let tier_options: Vec<DropdownOption> = MinerTier::ALL
        .iter()
        .map(|t| DropdownOption {
            value: t.label().to_string(),
            label: t.label().to_string(),
            icon: None,
        })
        .collect();
    let ore_options: Vec<DropdownOption> = OreType::ALL
        .iter()
        .map(|o| DropdownOption {
            value: o.label().to_string(),
            label: o.label().to_string(),
            icon: assets::icon(o.label()),
        })
        .collect();
    let quality_options: Vec<DropdownOption> = OreQuality::ALL
        .iter()
        .map(|q| DropdownOption {
            value: q.label().to_string(),
            label: q.label().to_string(),
            icon: None,
        })
        .collect();

    let dims = MINER_DIMENSIONS;
    let materials = spec.build_materials.iter().map(|m| {
        html! {
            <MaterialCard
                key={m.name}
                name={m.name.to_string()}
                icon={assets::icon(m.name)}
                quantity={m.quantity}
            />
        }
    });

    html! {
        <div style="display:flex; flex-direction:column; gap:4px;">
            <NodeBuildingIcon
                icon={assets::icon(tier.icon_name())}
                alt="Miner"
                open={*popup_open}
                on_toggle={toggle_popup}
            />
            <InfoPopup open={*popup_open}>
                <div>
                    <h2 style="margin:0; font-size:16px;">{ format!("{} Miner", tier.label()) }</h2>
                    <h3 style="margin:2px 0 0 0; font-size:11px; color:#8b949e; font-weight:400;">{"Production"}</h3>
                </div>

                <DescriptionSection
                    text={MINER_DESCRIPTION}
                    expanded={*description_expanded}
                    on_toggle={toggle_description}
                />

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

            <h1 style="margin:4px 0 0 0; font-size:16px;">{"Miner"}</h1>

            <div style="display:flex; gap:6px; margin-top:6px;">
                <Dropdown
                    label="Type"
                    options={tier_options}
                    value={tier.label().to_string()}
                    on_change={on_tier}
                    compact=true
                />
                <Dropdown
                    label="Ore"
                    options={ore_options}
                    value={ore.label().to_string()}
                    on_change={on_ore}
                />
            </div>
            <div style="display:flex; gap:6px;">
                <Dropdown
                    label="Quality"
                    options={quality_options}
                    value={quality.label().to_string()}
                    on_change={on_quality}
                />
            </div>

            <OverclockSection value={*overclock} on_change={on_overclock} />

            <div style="display:flex; justify-content:space-between; margin-top:10px; padding:6px 8px; background:#0d1117; border:1px solid #21262d; border-radius:6px; font-size:12px;">
                <span style="color:#8b949e;">{"Power Usage:"}</span>
                <span style="font-weight:600; color:#58a6ff;">{ format!("{} MW", format_one_decimal(power_mw)) }</span>
            </div>

            <HandlePoint node_id={props.id.clone()} spec={HANDLES[0]}>
                <TooltipCard
                    icon={assets::icon(ore.label())}
                    title={ore.label().to_string()}
                    kind="Ore Output"
                    rate={format!("{}/min", format_one_decimal(rate_per_min))}
                />
            </HandlePoint>
        </div>
    }
}
