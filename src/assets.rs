//! Icon lookup: semantic item and building names to bundled image paths.
//! Read-only; callers render nothing for names that resolve to `None`.

pub fn icon(name: &str) -> Option<&'static str> {
    let path = match name {
        // Ores
        "Iron Ore" => "assets/icons/items/iron-ore.png",
        "Copper Ore" => "assets/icons/items/copper-ore.png",
        "Limestone" => "assets/icons/items/limestone.png",
        "Coal" => "assets/icons/items/coal.png",
        "Sulfur" => "assets/icons/items/sulfur.png",
        "Caterium Ore" => "assets/icons/items/caterium-ore.png",
        "Bauxite" => "assets/icons/items/bauxite.png",
        "S.A.M. Ore" => "assets/icons/items/sam-ore.png",
        "Uranium" => "assets/icons/items/uranium.png",
        // Fuels and fluids
        "Compacted Coal" => "assets/icons/items/compacted-coal.png",
        "Petroleum Coke" => "assets/icons/items/petroleum-coke.png",
        "Water" => "assets/icons/items/water.png",
        // Construction parts
        "Portable Miner" => "assets/icons/items/portable-miner.png",
        "Iron Plate" => "assets/icons/items/iron-plate.png",
        "Concrete" => "assets/icons/items/concrete.png",
        "Encased Industrial Beam" => "assets/icons/items/encased-industrial-beam.png",
        "Steel Pipe" => "assets/icons/items/steel-pipe.png",
        "Modular Frame" => "assets/icons/items/modular-frame.png",
        "Supercomputer" => "assets/icons/items/supercomputer.png",
        "Fused Modular Frame" => "assets/icons/items/fused-modular-frame.png",
        "Turbo Motor" => "assets/icons/items/turbo-motor.png",
        "Reinforced Iron Plate" => "assets/icons/items/reinforced-iron-plate.png",
        "Motor" => "assets/icons/items/motor.png",
        "Cable" => "assets/icons/items/cable.png",
        "Power Shard" => "assets/icons/items/power-shard.png",
        // Buildings
        "Coal Generator" => "assets/icons/buildings/coal-generator.png",
        "Miner Mk.1" => "assets/icons/buildings/miner-mk1.png",
        "Miner Mk.2" => "assets/icons/buildings/miner-mk2.png",
        "Miner Mk.3" => "assets/icons/buildings/miner-mk3.png",
        _ => return None,
    };
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_and_unknown_names_do_not() {
        assert_eq!(icon("Iron Ore"), Some("assets/icons/items/iron-ore.png"));
        assert!(icon("Coal Generator").is_some());
        assert_eq!(icon("Mercer Sphere"), None);
    }
}
