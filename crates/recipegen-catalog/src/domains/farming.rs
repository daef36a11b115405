//! Multiblock farm parts, one set per farm material.

use crate::variants::{FARM_MATERIALS, FarmMaterial, electron_tube, farm_block};
use crate::Content;
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::ingredient::Ingredient;
use recipegen_core::output::RecipeOutput;
use recipegen_core::registry::TagRef;
use recipegen_core::unlock::has;

struct Parts {
    tin_tube: Ingredient,
    gold_tube: Ingredient,
    slabs: TagRef,
    copper: TagRef,
    tin_gears: TagRef,
    trapdoors: TagRef,
    glass: TagRef,
    redstone: TagRef,
}

/// Stage every farming recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let parts = Parts {
        tin_tube: c.item(&electron_tube("tin"))?.into(),
        gold_tube: c.item(&electron_tube("gold"))?.into(),
        slabs: c.tag("minecraft:wooden_slabs")?,
        copper: c.tag("forge:ingots/copper")?,
        tin_gears: c.tag("forge:gears/tin")?,
        trapdoors: c.tag("minecraft:wooden_trapdoors")?,
        glass: c.tag("forge:glass")?,
        redstone: c.tag("forge:dusts/redstone")?,
    };
    for material in FARM_MATERIALS {
        farm_blocks(c, out, &parts, material)?;
    }
    Ok(())
}

fn farm_blocks(
    c: &Content<'_>,
    out: &mut RecipeOutput,
    parts: &Parts,
    material: &FarmMaterial,
) -> Result<(), GenError> {
    let base = c.vanilla(material.base)?;
    let block = |kind: &str| c.item(&farm_block(kind, material));

    shaped(&block("plain")?, 1)
        .define('#', &base)
        .define('C', &parts.tin_tube)
        .define('W', &parts.slabs)
        .define('I', &parts.copper)
        .pattern("I#I")
        .pattern("WCW")
        .unlocked_by("has_copper", has(&parts.copper))
        .save(out)?;
    shaped(&block("gearbox")?, 1)
        .define('#', &base)
        .define('T', &parts.tin_gears)
        .pattern(" # ")
        .pattern("TTT")
        .unlocked_by("has_tin_gear", has(&parts.tin_gears))
        .save(out)?;
    shaped(&block("hatch")?, 1)
        .define('#', &base)
        .define('T', &parts.tin_gears)
        .define('D', &parts.trapdoors)
        .pattern(" # ")
        .pattern("TDT")
        .unlocked_by("has_tin_gear", has(&parts.tin_gears))
        .save(out)?;
    shaped(&block("valve")?, 1)
        .define('#', &base)
        .define('T', &parts.tin_gears)
        .define('X', &parts.glass)
        .pattern(" # ")
        .pattern("XTX")
        .unlocked_by("has_tin_gear", has(&parts.tin_gears))
        .save(out)?;
    // Unlocked by tin gears even though it takes none.
    shaped(&block("control")?, 1)
        .define('#', &base)
        .define('T', &parts.gold_tube)
        .define('X', &parts.redstone)
        .pattern(" # ")
        .pattern("XTX")
        .unlocked_by("has_tin_gear", has(&parts.tin_gears))
        .save(out)
}
