use yew::prelude::*;

use super::{coal_generator, miner, node_registry, palette::PalettePanel};
use crate::graph::canvas::GraphCanvas;
use crate::graph::types::{GraphChange, GraphState, NodeDescriptor, Point, assign_node_id};
use crate::util::clog;

#[function_component(App)]
pub fn app() -> Html {
    let graph = use_reducer(|| {
        GraphState::with_nodes(vec![
            NodeDescriptor {
                id: "n1".to_string(),
                type_tag: coal_generator::TYPE_TAG,
                position: Point { x: 100.0, y: 100.0 },
            },
            NodeDescriptor {
                id: "n2".to_string(),
                type_tag: miner::TYPE_TAG,
                position: Point { x: 460.0, y: 100.0 },
            },
        ])
    });

    // Log every applied graph change with a full descriptor snapshot.
    {
        let graph = graph.clone();
        use_effect_with(graph.version, move |_| {
            let snapshot = serde_json::to_string(&*graph).unwrap_or_default();
            clog(&format!(
                "graph v{}: {} nodes, {} edges {}",
                graph.version,
                graph.nodes.len(),
                graph.edges.len(),
                snapshot
            ));
            || ()
        });
    }

    let on_change = {
        let graph = graph.clone();
        Callback::from(move |change: GraphChange| graph.dispatch(change))
    };
    let on_add = {
        let graph = graph.clone();
        Callback::from(move |tag: &'static str| {
            // Stagger fresh cards so repeated adds do not stack exactly.
            let n = graph.nodes.len() as f64;
            graph.dispatch(GraphChange::AddNode {
                node: NodeDescriptor {
                    id: assign_node_id(),
                    type_tag: tag,
                    position: Point {
                        x: 140.0 + 40.0 * (n % 6.0),
                        y: 140.0 + 40.0 * (n % 6.0),
                    },
                },
            });
        })
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; overflow:hidden;">
            <GraphCanvas
                nodes={graph.nodes.clone()}
                edges={graph.edges.clone()}
                registry={node_registry()}
                on_change={on_change}
            />
            <PalettePanel registry={node_registry()} on_add={on_add} />
            <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; font-weight:600;">
                {"Satisflow"}
                <span style="font-size:11px; font-weight:400; opacity:0.7; margin-left:8px;">{"production chain calculator"}</span>
            </div>
        </div>
    }
}
