//! Variant descriptors for the parametric recipe families.
//!
//! Each family is a fixed list; its order is the order recipes are built in.

use crate::MOD_ID;

// ===========================================================================
// Apiculture
// ===========================================================================

/// Honey comb kinds. Each has a comb item and a comb block.
pub const HONEY_COMBS: &[&str] = &[
    "honey",
    "cocoa",
    "simmering",
    "stringy",
    "frozen",
    "dripping",
    "silky",
    "parched",
    "mysterious",
    "irradiated",
    "powdery",
    "reddened",
    "darkened",
    "omega",
    "wheaten",
    "mossy",
    "mellow",
];

// ===========================================================================
// Wood
// ===========================================================================

/// Where a wood type's non-fireproof blocks come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WoodSource {
    /// Added by the mod: every block is a mod block.
    Forestry,
    /// A base-game wood: only the fireproof variants are mod blocks.
    Vanilla,
}

/// The block kinds a wood type provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WoodBlockKind {
    Planks,
    Log,
    Door,
    Fence,
    FenceGate,
    Slab,
    Stairs,
}

impl WoodBlockKind {
    fn suffix(self) -> &'static str {
        match self {
            WoodBlockKind::Planks => "planks",
            WoodBlockKind::Log => "log",
            WoodBlockKind::Door => "door",
            WoodBlockKind::Fence => "fence",
            WoodBlockKind::FenceGate => "fence_gate",
            WoodBlockKind::Slab => "slab",
            WoodBlockKind::Stairs => "stairs",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WoodType {
    pub name: &'static str,
    pub source: WoodSource,
}

impl WoodType {
    const fn forestry(name: &'static str) -> Self {
        Self {
            name,
            source: WoodSource::Forestry,
        }
    }

    const fn vanilla(name: &'static str) -> Self {
        Self {
            name,
            source: WoodSource::Vanilla,
        }
    }

    /// Full identifier of one of this wood's blocks.
    ///
    /// Fireproof blocks always belong to the mod. Doors have no fireproof
    /// variant.
    pub fn block(&self, kind: WoodBlockKind, fireproof: bool) -> String {
        let suffix = kind.suffix();
        match (fireproof, self.source) {
            (true, _) => format!("{MOD_ID}:fireproof_{}_{suffix}", self.name),
            (false, WoodSource::Forestry) => format!("{MOD_ID}:{}_{suffix}", self.name),
            (false, WoodSource::Vanilla) => format!("minecraft:{}_{suffix}", self.name),
        }
    }
}

/// Every registered wood type: the mod's own followed by the base game's.
pub const WOOD_TYPES: &[WoodType] = &[
    WoodType::forestry("larch"),
    WoodType::forestry("teak"),
    WoodType::forestry("acacia_desert"),
    WoodType::forestry("lime"),
    WoodType::forestry("chestnut"),
    WoodType::forestry("wenge"),
    WoodType::forestry("baobab"),
    WoodType::forestry("sequoia"),
    WoodType::forestry("kapok"),
    WoodType::forestry("ebony"),
    WoodType::forestry("mahogany"),
    WoodType::forestry("balsa"),
    WoodType::forestry("willow"),
    WoodType::forestry("walnut"),
    WoodType::forestry("greenheart"),
    WoodType::forestry("cherry"),
    WoodType::forestry("mahoe"),
    WoodType::forestry("poplar"),
    WoodType::forestry("palm"),
    WoodType::forestry("papaya"),
    WoodType::forestry("pine"),
    WoodType::forestry("plum"),
    WoodType::forestry("maple"),
    WoodType::forestry("citrus"),
    WoodType::forestry("giganteum"),
    WoodType::forestry("ipe"),
    WoodType::forestry("padauk"),
    WoodType::forestry("cocobolo"),
    WoodType::forestry("zebrawood"),
    WoodType::vanilla("oak"),
    WoodType::vanilla("spruce"),
    WoodType::vanilla("birch"),
    WoodType::vanilla("jungle"),
    WoodType::vanilla("acacia"),
    WoodType::vanilla("dark_oak"),
];

// ===========================================================================
// Cultivation
// ===========================================================================

/// A planter and the electron tube its managed form is built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Planter {
    pub name: &'static str,
    pub tube: &'static str,
}

impl Planter {
    /// Item path of the managed (electrically driven) planter.
    pub fn managed(&self) -> String {
        format!("managed_{}", self.name)
    }

    /// Item path of the manual planter.
    pub fn manual(&self) -> String {
        format!("manual_{}", self.name)
    }
}

pub const PLANTERS: &[Planter] = &[
    Planter { name: "arboretum", tube: "gold" },
    Planter { name: "farm_crops", tube: "bronze" },
    Planter { name: "peat_pog", tube: "obsidian" },
    Planter { name: "farm_mushroom", tube: "apatite" },
    Planter { name: "farm_gourd", tube: "lapis" },
    Planter { name: "farm_nether", tube: "blaze" },
    Planter { name: "farm_ender", tube: "ender" },
];

/// Item path of an electron tube of the given kind.
pub fn electron_tube(kind: &str) -> String {
    format!("electron_tube_{kind}")
}

// ===========================================================================
// Farming
// ===========================================================================

/// A farm block material and the base-game block it is built around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FarmMaterial {
    pub name: &'static str,
    pub base: &'static str,
}

pub const FARM_MATERIALS: &[FarmMaterial] = &[
    FarmMaterial { name: "stone_brick", base: "stone_bricks" },
    FarmMaterial { name: "stone_mossy", base: "mossy_stone_bricks" },
    FarmMaterial { name: "stone_cracked", base: "cracked_stone_bricks" },
    FarmMaterial { name: "brick", base: "bricks" },
    FarmMaterial { name: "sandstone_smooth", base: "smooth_sandstone" },
    FarmMaterial { name: "sandstone_chiseled", base: "chiseled_sandstone" },
    FarmMaterial { name: "brick_nether", base: "nether_bricks" },
    FarmMaterial { name: "brick_chiseled", base: "chiseled_stone_bricks" },
    FarmMaterial { name: "quartz", base: "quartz_block" },
    FarmMaterial { name: "quartz_chiseled", base: "chiseled_quartz_block" },
    FarmMaterial { name: "quartz_lines", base: "quartz_pillar" },
];

/// Item path of a farm block built from `material`.
pub fn farm_block(kind: &str, material: &FarmMaterial) -> String {
    format!("farm_{kind}_{}", material.name)
}

// ===========================================================================
// Fluid containers
// ===========================================================================

/// Fluid container kinds, by serialized name.
pub const CONTAINERS: &[&str] = &["can", "capsule", "refractory"];

/// NBT of a container holding one bucket of `fluid`.
pub fn filled_nbt(fluid: &str) -> String {
    format!("{{Fluid:{{FluidName:\"{fluid}\",Amount:1000}}}}")
}

// ===========================================================================
// Mail
// ===========================================================================

/// A stamp denomination and the tag of its crafting material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub denomination: &'static str,
    pub material: &'static str,
}

pub const STAMPS: &[Stamp] = &[
    Stamp { denomination: "1n", material: "forge:gems/apatite" },
    Stamp { denomination: "2n", material: "forge:ingots/copper" },
    Stamp { denomination: "5n", material: "forge:ingots/tin" },
    Stamp { denomination: "10n", material: "forge:ingots/gold" },
    Stamp { denomination: "20n", material: "forge:gems/diamond" },
    Stamp { denomination: "50n", material: "forge:gems/emerald" },
    Stamp { denomination: "100n", material: "forge:ingots/bronze" },
];

pub const LETTER_STATES: &[&str] = &["fresh", "stamped", "opened"];

/// Item path of a letter in a given size and state.
pub fn letter(size: &str, state: &str) -> String {
    format!("letter_{size}_{state}")
}

// ===========================================================================
// Database
// ===========================================================================

/// Species chests that can be combined into a database.
pub const SPECIES_CHESTS: &[&str] = &["bee_chest", "tree_chest", "butterfly_chest"];
