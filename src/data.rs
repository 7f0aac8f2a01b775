//! Static reference data for the buildings placeable on the canvas.
//! Tables are enum-keyed constants, so adding a tier or an ore is a
//! compile-checked sweep rather than a string-map edit.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinerTier {
    Mk1,
    Mk2,
    Mk3,
}

impl MinerTier {
    pub const ALL: [MinerTier; 3] = [MinerTier::Mk1, MinerTier::Mk2, MinerTier::Mk3];

    pub fn label(self) -> &'static str {
        match self {
            MinerTier::Mk1 => "Mk.1",
            MinerTier::Mk2 => "Mk.2",
            MinerTier::Mk3 => "Mk.3",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// Semantic icon name for the building itself.
    pub fn icon_name(self) -> &'static str {
        match self {
            MinerTier::Mk1 => "Miner Mk.1",
            MinerTier::Mk2 => "Miner Mk.2",
            MinerTier::Mk3 => "Miner Mk.3",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OreQuality {
    Impure,
    Normal,
    Pure,
}

impl OreQuality {
    pub const ALL: [OreQuality; 3] = [OreQuality::Impure, OreQuality::Normal, OreQuality::Pure];

    pub fn label(self) -> &'static str {
        match self {
            OreQuality::Impure => "Impure",
            OreQuality::Normal => "Normal",
            OreQuality::Pure => "Pure",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.label() == label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OreType {
    Iron,
    Copper,
    Limestone,
    Coal,
    Sulfur,
    Caterium,
    Bauxite,
    Sam,
    Uranium,
}

impl OreType {
    pub const ALL: [OreType; 9] = [
        OreType::Iron,
        OreType::Copper,
        OreType::Limestone,
        OreType::Coal,
        OreType::Sulfur,
        OreType::Caterium,
        OreType::Bauxite,
        OreType::Sam,
        OreType::Uranium,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OreType::Iron => "Iron Ore",
            OreType::Copper => "Copper Ore",
            OreType::Limestone => "Limestone",
            OreType::Coal => "Coal",
            OreType::Sulfur => "Sulfur",
            OreType::Caterium => "Caterium Ore",
            OreType::Bauxite => "Bauxite",
            OreType::Sam => "S.A.M. Ore",
            OreType::Uranium => "Uranium",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.label() == label)
    }
}

/// One line of a building's construction cost table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MaterialCost {
    pub name: &'static str,
    pub quantity: u32,
}

/// Physical footprint of a building, metres.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width_m: u32,
    pub length_m: u32,
    pub height_m: u32,
}

impl Dimensions {
    pub fn area_m2(&self) -> u32 {
        self.width_m * self.length_m
    }
}

/// Per-tier miner stats. Extraction rates are per minute at 100% clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinerSpec {
    pub base_power_mw: f64,
    pub rate_impure: f64,
    pub rate_normal: f64,
    pub rate_pure: f64,
    pub build_materials: &'static [MaterialCost],
}

impl MinerSpec {
    pub fn base_rate(&self, quality: OreQuality) -> f64 {
        match quality {
            OreQuality::Impure => self.rate_impure,
            OreQuality::Normal => self.rate_normal,
            OreQuality::Pure => self.rate_pure,
        }
    }
}

pub fn miner_spec(tier: MinerTier) -> &'static MinerSpec {
    match tier {
        MinerTier::Mk1 => &MINER_MK1,
        MinerTier::Mk2 => &MINER_MK2,
        MinerTier::Mk3 => &MINER_MK3,
    }
}

static MINER_MK1: MinerSpec = MinerSpec {
    base_power_mw: 5.0,
    rate_impure: 30.0,
    rate_normal: 60.0,
    rate_pure: 120.0,
    build_materials: &[
        MaterialCost { name: "Portable Miner", quantity: 1 },
        MaterialCost { name: "Iron Plate", quantity: 10 },
        MaterialCost { name: "Concrete", quantity: 10 },
    ],
};

static MINER_MK2: MinerSpec = MinerSpec {
    base_power_mw: 15.0,
    rate_impure: 60.0,
    rate_normal: 120.0,
    rate_pure: 240.0,
    build_materials: &[
        MaterialCost { name: "Portable Miner", quantity: 2 },
        MaterialCost { name: "Encased Industrial Beam", quantity: 10 },
        MaterialCost { name: "Steel Pipe", quantity: 20 },
        MaterialCost { name: "Modular Frame", quantity: 10 },
    ],
};

static MINER_MK3: MinerSpec = MinerSpec {
    base_power_mw: 45.0,
    rate_impure: 120.0,
    rate_normal: 240.0,
    rate_pure: 480.0,
    build_materials: &[
        MaterialCost { name: "Portable Miner", quantity: 3 },
        MaterialCost { name: "Steel Pipe", quantity: 50 },
        MaterialCost { name: "Supercomputer", quantity: 5 },
        MaterialCost { name: "Fused Modular Frame", quantity: 10 },
        MaterialCost { name: "Turbo Motor", quantity: 3 },
    ],
};

pub const MINER_DIMENSIONS: Dimensions = Dimensions {
    width_m: 6,
    length_m: 14,
    height_m: 18,
};

pub const MINER_DESCRIPTION: &str = "Extracts solid resources from the resource node it is built on.\n\
The normal extraction rate is 60 resources per minute.\n\
The extraction rate is modified depending on resource purity. Outputs all extracted resources onto connected conveyor belts.";

/// Coal generator stats. Fuel rate is items per minute at 100% clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorSpec {
    pub base_output_mw: f64,
    pub base_fuel_per_min: f64,
    pub accepted_fuels: &'static [&'static str],
    pub build_materials: &'static [MaterialCost],
}

pub static COAL_GENERATOR: GeneratorSpec = GeneratorSpec {
    base_output_mw: 75.0,
    base_fuel_per_min: 15.0,
    accepted_fuels: &["Coal", "Compacted Coal", "Petroleum Coke"],
    build_materials: &[
        MaterialCost { name: "Concrete", quantity: 20 },
        MaterialCost { name: "Reinforced Iron Plate", quantity: 10 },
        MaterialCost { name: "Motor", quantity: 5 },
        MaterialCost { name: "Cable", quantity: 20 },
    ],
};

pub const COAL_GENERATOR_DIMENSIONS: Dimensions = Dimensions {
    width_m: 12,
    length_m: 10,
    height_m: 18,
};

pub const COAL_GENERATOR_DESCRIPTION: &str = "Burns Coal to boil Water, the produced steam rotates turbines to generate electricity for the power grid. \
Has a Conveyor Belt and Pipe input, so both the Coal and Water supply can be automated. \
Caution: Always generates at the set clock speed. Shuts down if fuel requirements are not met.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;

    #[test]
    fn mk1_normal_extraction_is_sixty_per_minute() {
        let spec = miner_spec(MinerTier::Mk1);
        assert_eq!(spec.base_rate(OreQuality::Normal), 60.0);
        assert_eq!(spec.base_power_mw, 5.0);
    }

    #[test]
    fn each_tier_doubles_rates_across_qualities() {
        for tier in MinerTier::ALL {
            let spec = miner_spec(tier);
            assert_eq!(spec.base_rate(OreQuality::Normal), spec.rate_impure * 2.0);
            assert_eq!(spec.base_rate(OreQuality::Pure), spec.rate_impure * 4.0);
        }
    }

    #[test]
    fn footprint_areas_match_the_reference_sheets() {
        assert_eq!(MINER_DIMENSIONS.area_m2(), 84);
        assert_eq!(COAL_GENERATOR_DIMENSIONS.area_m2(), 120);
    }

    #[test]
    fn labels_round_trip_through_the_dropdown_values() {
        for tier in MinerTier::ALL {
            assert_eq!(MinerTier::from_label(tier.label()), Some(tier));
        }
        for quality in OreQuality::ALL {
            assert_eq!(OreQuality::from_label(quality.label()), Some(quality));
        }
        for ore in OreType::ALL {
            assert_eq!(OreType::from_label(ore.label()), Some(ore));
        }
        assert_eq!(MinerTier::from_label("Mk.4"), None);
    }

    #[test]
    fn every_referenced_item_has_an_icon() {
        for tier in MinerTier::ALL {
            assert!(assets::icon(tier.icon_name()).is_some());
            for material in miner_spec(tier).build_materials {
                assert!(assets::icon(material.name).is_some(), "{}", material.name);
            }
        }
        for ore in OreType::ALL {
            assert!(assets::icon(ore.label()).is_some(), "{}", ore.label());
        }
        for fuel in COAL_GENERATOR.accepted_fuels {
            assert!(assets::icon(fuel).is_some(), "{}", fuel);
        }
        for material in COAL_GENERATOR.build_materials {
            assert!(assets::icon(material.name).is_some(), "{}", material.name);
        }
    }
}
