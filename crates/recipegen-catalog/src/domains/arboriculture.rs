//! Wood blocks for every wood type, plus the grafter and tree chest.

use crate::Content;
use crate::variants::{WOOD_TYPES, WoodBlockKind, WoodSource, WoodType};
use recipegen_core::builder::{RecipeBuilder, shaped, shapeless};
use recipegen_core::error::GenError;
use recipegen_core::ingredient::Ingredient;
use recipegen_core::output::RecipeOutput;
use recipegen_core::registry::{ItemRef, TagRef};
use recipegen_core::unlock::has;

/// Stage every arboriculture recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let sticks = c.tag("forge:rods/wooden")?;
    for wood in WOOD_TYPES {
        wood_recipes(c, out, wood, &sticks)?;
    }

    let bronze = c.tag("forge:ingots/bronze")?;
    let saplings = c.tag("minecraft:saplings")?;
    shaped(&c.item("grafter")?, 1)
        .define('B', &bronze)
        .define('#', &sticks)
        .pattern("  B")
        .pattern(" # ")
        .pattern("#  ")
        .unlocked_by("has_bronze", has(&bronze))
        .save(out)?;
    shaped(&c.item("tree_chest")?, 1)
        .define('#', &c.tag("forge:glass")?)
        .define('X', &saplings)
        .define('Y', &c.tag("forge:chests/wooden")?)
        .pattern(" # ")
        .pattern("XYX")
        .pattern("XXX")
        .unlocked_by("has_sapling", has(&saplings))
        .save(out)
}

/// Planks, fence, gate, slab, and stairs from a set of planks.
///
/// The mod's own woods get both the regular and the fireproof set; base-game
/// woods only the fireproof one. Doors are built for every wood.
fn wood_recipes(
    c: &Content<'_>,
    out: &mut RecipeOutput,
    wood: &WoodType,
    sticks: &TagRef,
) -> Result<(), GenError> {
    let block = |kind, fireproof| c.id(&wood.block(kind, fireproof));
    let planks = block(WoodBlockKind::Planks, false)?;
    let fireproof_planks = block(WoodBlockKind::Planks, true)?;

    if wood.source == WoodSource::Forestry {
        let log = block(WoodBlockKind::Log, false)?;
        shapeless(&planks, 4)
            .requires(&log)
            .unlocked_by("has_log", has(&log))
            .group("planks")
            .save(out)?;
        wood_shapes(c, out, wood, false, &planks, sticks)?;
    }

    shaped(&block(WoodBlockKind::Door, false)?, 3)
        .define('#', Ingredient::any_of([&planks, &fireproof_planks]))
        .pattern("##")
        .pattern("##")
        .pattern("##")
        .unlocked_by("has_planks", has(&planks))
        .group("wooden_door")
        .save(out)?;

    let fireproof_log = block(WoodBlockKind::Log, true)?;
    shapeless(&fireproof_planks, 4)
        .requires(&fireproof_log)
        .unlocked_by("has_planks", has(&fireproof_planks))
        .group("planks")
        .save(out)?;
    wood_shapes(c, out, wood, true, &fireproof_planks, sticks)
}

fn wood_shapes(
    c: &Content<'_>,
    out: &mut RecipeOutput,
    wood: &WoodType,
    fireproof: bool,
    planks: &ItemRef,
    sticks: &TagRef,
) -> Result<(), GenError> {
    let block = |kind| c.id(&wood.block(kind, fireproof));

    shaped(&block(WoodBlockKind::Fence)?, 3)
        .define('#', sticks)
        .define('W', planks)
        .pattern("W#W")
        .pattern("W#W")
        .unlocked_by("has_planks", has(planks))
        .group("wooden_fence")
        .save(out)?;
    shaped(&block(WoodBlockKind::FenceGate)?, 1)
        .define('#', sticks)
        .define('W', planks)
        .pattern("#W#")
        .pattern("#W#")
        .unlocked_by("has_planks", has(planks))
        .group("wooden_fence_gate")
        .save(out)?;
    shaped(&block(WoodBlockKind::Slab)?, 6)
        .define('#', planks)
        .pattern("###")
        .unlocked_by("has_planks", has(planks))
        .group("wooden_slab")
        .save(out)?;
    shaped(&block(WoodBlockKind::Stairs)?, 4)
        .define('#', planks)
        .pattern("#  ")
        .pattern("## ")
        .pattern("###")
        .unlocked_by("has_planks", has(planks))
        .group("wooden_stairs")
        .save(out)
}
