//! Descriptor types for the graph canvas, the node type registry, and the
//! reducer that folds canvas change notifications into the application's
//! node and edge lists.

use serde::Serialize;
use std::rc::Rc;
use yew::{Html, Reducible};

/// Rendered width of every node card, px in world space. Edge anchors and the
/// minimap footprint both rely on this matching the shell style.
pub const NODE_WIDTH: f64 = 260.0;

/// Nominal card height used for minimap footprints and fit-view bounds. Cards
/// grow with their content; the approximation is fine at minimap scale.
pub const NODE_BASE_HEIGHT: f64 = 360.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeDescriptor {
    pub id: String,
    pub type_tag: &'static str,
    pub position: Point,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HandleRef {
    pub node: String,
    pub handle: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeDescriptor {
    pub id: String,
    pub source: HandleRef,
    pub target: HandleRef,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleSide {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandleKind {
    /// Edge origin; connection drags start here.
    Source,
    /// Edge destination; connection drags complete here.
    Target,
}

/// Where a node type exposes a connection point on its card. Used both to
/// place the handle element and to anchor edges on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandleSpec {
    pub id: &'static str,
    pub side: HandleSide,
    pub kind: HandleKind,
    pub y_offset: f64,
}

impl HandleSpec {
    /// World-space anchor of this handle on the given node.
    pub fn anchor(&self, node: &NodeDescriptor) -> (f64, f64) {
        let x = match self.side {
            HandleSide::Left => node.position.x,
            HandleSide::Right => node.position.x + NODE_WIDTH,
        };
        (x, node.position.y + self.y_offset)
    }
}

pub type NodeRenderer = fn(&NodeDescriptor) -> Html;

/// One registered building type: the seam through which new buildings are
/// added without touching the canvas component.
#[derive(Clone, Copy, PartialEq)]
pub struct NodeType {
    pub tag: &'static str,
    pub title: &'static str,
    pub render: NodeRenderer,
    pub handles: &'static [HandleSpec],
}

#[derive(Clone, Copy, PartialEq)]
pub struct NodeTypeRegistry {
    pub types: &'static [NodeType],
}

impl NodeTypeRegistry {
    pub fn lookup(&self, tag: &str) -> Option<&'static NodeType> {
        self.types.iter().find(|t| t.tag == tag)
    }

    pub fn handle_spec(&self, tag: &str, handle: &str) -> Option<&'static HandleSpec> {
        self.lookup(tag)?.handles.iter().find(|h| h.id == handle)
    }
}

/// Fresh node id. Ids only need to be unique within one session; a short
/// random suffix matches what the canvas hands out for user-placed nodes.
pub fn assign_node_id() -> String {
    format!("n{:06x}", (js_sys::Math::random() * 0xffffff as f64) as u32)
}

/// Edge ids are derived from their endpoints, which also makes duplicate
/// connections between the same pair of handles detectable.
pub fn edge_id(source: &HandleRef, target: &HandleRef) -> String {
    format!(
        "e:{}:{}->{}:{}",
        source.node, source.handle, target.node, target.handle
    )
}

/// World-space bounding box over the nodes' card footprints, or `None` when
/// the canvas is empty. Backs fit-to-view and the minimap.
pub fn node_bounds(nodes: &[NodeDescriptor]) -> Option<(f64, f64, f64, f64)> {
    let mut it = nodes.iter();
    let first = it.next()?;
    let mut min_x = first.position.x;
    let mut min_y = first.position.y;
    let mut max_x = first.position.x + NODE_WIDTH;
    let mut max_y = first.position.y + NODE_BASE_HEIGHT;
    for n in it {
        min_x = min_x.min(n.position.x);
        min_y = min_y.min(n.position.y);
        max_x = max_x.max(n.position.x + NODE_WIDTH);
        max_y = max_y.max(n.position.y + NODE_BASE_HEIGHT);
    }
    Some((min_x, min_y, max_x, max_y))
}

/// Every mutation the canvas can report: node add/move/removal and edge
/// add/removal. The application folds these into its descriptor lists.
#[derive(Clone, Debug)]
pub enum GraphChange {
    AddNode { node: NodeDescriptor },
    MoveNode { id: String, position: Point },
    RemoveNode { id: String },
    AddEdge { source: HandleRef, target: HandleRef },
    RemoveEdge { id: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GraphState {
    pub nodes: Vec<NodeDescriptor>,
    pub edges: Vec<EdgeDescriptor>,
    /// Bumped on every applied change; effects key on it.
    pub version: u64,
}

impl GraphState {
    pub fn with_nodes(nodes: Vec<NodeDescriptor>) -> Self {
        Self {
            nodes,
            edges: Vec::new(),
            version: 0,
        }
    }
}

impl Reducible for GraphState {
    type Action = GraphChange;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            GraphChange::AddNode { node } => {
                if next.nodes.iter().any(|n| n.id == node.id) {
                    return self;
                }
                next.nodes.push(node);
            }
            GraphChange::MoveNode { id, position } => {
                match next.nodes.iter_mut().find(|n| n.id == id) {
                    Some(node) => node.position = position,
                    None => return self,
                }
            }
            GraphChange::RemoveNode { id } => {
                if !next.nodes.iter().any(|n| n.id == id) {
                    return self;
                }
                next.nodes.retain(|n| n.id != id);
                // Edges cannot outlive either endpoint.
                next.edges
                    .retain(|e| e.source.node != id && e.target.node != id);
            }
            GraphChange::AddEdge { source, target } => {
                if source.node == target.node {
                    return self;
                }
                let id = edge_id(&source, &target);
                if next.edges.iter().any(|e| e.id == id) {
                    return self;
                }
                next.edges.push(EdgeDescriptor { id, source, target });
            }
            GraphChange::RemoveEdge { id } => {
                if !next.edges.iter().any(|e| e.id == id) {
                    return self;
                }
                next.edges.retain(|e| e.id != id);
            }
        }
        next.version = next.version.wrapping_add(1);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, x: f64, y: f64) -> NodeDescriptor {
        NodeDescriptor {
            id: id.to_string(),
            type_tag: "miner",
            position: Point { x, y },
        }
    }

    fn handle(node: &str, handle: &'static str) -> HandleRef {
        HandleRef {
            node: node.to_string(),
            handle,
        }
    }

    fn apply(state: GraphState, change: GraphChange) -> GraphState {
        (*Rc::new(state).reduce(change)).clone()
    }

    #[test]
    fn add_and_move_update_the_node_list() {
        let state = GraphState::with_nodes(vec![node("n1", 0.0, 0.0)]);
        let state = apply(
            state,
            GraphChange::AddNode {
                node: node("n2", 300.0, 50.0),
            },
        );
        assert_eq!(state.nodes.len(), 2);
        assert_eq!(state.version, 1);

        let state = apply(
            state,
            GraphChange::MoveNode {
                id: "n2".into(),
                position: Point { x: 10.0, y: 20.0 },
            },
        );
        assert_eq!(state.nodes[1].position, Point { x: 10.0, y: 20.0 });
        assert_eq!(state.version, 2);
    }

    #[test]
    fn duplicate_node_ids_are_rejected() {
        let state = GraphState::with_nodes(vec![node("n1", 0.0, 0.0)]);
        let state = apply(
            state,
            GraphChange::AddNode {
                node: node("n1", 99.0, 99.0),
            },
        );
        assert_eq!(state.nodes.len(), 1);
        assert_eq!(state.nodes[0].position, Point { x: 0.0, y: 0.0 });
        assert_eq!(state.version, 0);
    }

    #[test]
    fn removing_a_node_removes_its_edges() {
        let state = GraphState::with_nodes(vec![node("n1", 0.0, 0.0), node("n2", 300.0, 0.0)]);
        let state = apply(
            state,
            GraphChange::AddEdge {
                source: handle("n2", "output-ore"),
                target: handle("n1", "input-coal"),
            },
        );
        assert_eq!(state.edges.len(), 1);

        let state = apply(
            state,
            GraphChange::RemoveNode { id: "n2".into() },
        );
        assert_eq!(state.nodes.len(), 1);
        assert!(state.edges.is_empty());
    }

    #[test]
    fn self_edges_and_duplicate_edges_are_ignored() {
        let state = GraphState::with_nodes(vec![node("n1", 0.0, 0.0), node("n2", 300.0, 0.0)]);
        let state = apply(
            state,
            GraphChange::AddEdge {
                source: handle("n1", "output-ore"),
                target: handle("n1", "input-coal"),
            },
        );
        assert!(state.edges.is_empty());
        assert_eq!(state.version, 0);

        let state = apply(
            state,
            GraphChange::AddEdge {
                source: handle("n2", "output-ore"),
                target: handle("n1", "input-coal"),
            },
        );
        let state = apply(
            state,
            GraphChange::AddEdge {
                source: handle("n2", "output-ore"),
                target: handle("n1", "input-coal"),
            },
        );
        assert_eq!(state.edges.len(), 1);
    }

    #[test]
    fn removing_an_edge_leaves_its_nodes() {
        let state = GraphState::with_nodes(vec![node("n1", 0.0, 0.0), node("n2", 300.0, 0.0)]);
        let state = apply(
            state,
            GraphChange::AddEdge {
                source: handle("n2", "output-ore"),
                target: handle("n1", "input-coal"),
            },
        );
        let edge = state.edges[0].id.clone();
        let state = apply(state, GraphChange::RemoveEdge { id: edge });
        assert!(state.edges.is_empty());
        assert_eq!(state.nodes.len(), 2);
    }

    #[test]
    fn bounds_cover_every_card_footprint() {
        assert_eq!(node_bounds(&[]), None);
        let bounds = node_bounds(&[node("n1", 0.0, 0.0), node("n2", 400.0, -50.0)]);
        assert_eq!(
            bounds,
            Some((0.0, -50.0, 400.0 + NODE_WIDTH, NODE_BASE_HEIGHT))
        );
    }

    #[test]
    fn handle_anchors_sit_on_the_card_edges() {
        let spec = HandleSpec {
            id: "output-ore",
            side: HandleSide::Right,
            kind: HandleKind::Source,
            y_offset: 120.0,
        };
        let n = node("n1", 50.0, 40.0);
        assert_eq!(spec.anchor(&n), (50.0 + NODE_WIDTH, 160.0));

        let spec = HandleSpec {
            id: "input-coal",
            side: HandleSide::Left,
            kind: HandleKind::Target,
            y_offset: 96.0,
        };
        assert_eq!(spec.anchor(&n), (50.0, 136.0));
    }
}
