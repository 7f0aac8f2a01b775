pub mod app;
pub mod building_icon;
pub mod coal_generator;
pub mod description;
pub mod dropdown;
pub mod handles;
pub mod info_popup;
pub mod miner;
pub mod overclock;
pub mod palette;

use crate::graph::types::{NodeType, NodeTypeRegistry};

// Building type registry: new node types plug in here; the canvas stays
// untouched.
static NODE_TYPES: [NodeType; 2] = [
    NodeType {
        tag: coal_generator::TYPE_TAG,
        title: "Coal Generator",
        render: coal_generator::render,
        handles: coal_generator::HANDLES,
    },
    NodeType {
        tag: miner::TYPE_TAG,
        title: "Miner",
        render: miner::render,
        handles: miner::HANDLES,
    },
];

pub fn node_registry() -> NodeTypeRegistry {
    NodeTypeRegistry { types: &NODE_TYPES }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::{HandleKind, HandleSide};

    #[test]
    fn registry_resolves_known_tags_only() {
        let registry = node_registry();
        assert!(registry.lookup("miner").is_some());
        assert!(registry.lookup("coal_generator").is_some());
        assert!(registry.lookup("oil_extractor").is_none());
    }

    #[test]
    fn handle_layouts_match_their_roles() {
        let registry = node_registry();
        let ore_out = registry.handle_spec("miner", "output-ore").unwrap();
        assert_eq!(ore_out.kind, HandleKind::Source);
        assert_eq!(ore_out.side, HandleSide::Right);

        let coal_in = registry.handle_spec("coal_generator", "input-coal").unwrap();
        assert_eq!(coal_in.kind, HandleKind::Target);
        assert_eq!(coal_in.side, HandleSide::Left);
        assert!(registry.handle_spec("coal_generator", "output-ore").is_none());
    }
}
