//! Factory machines: a sturdy casing ringed with glass and a material.

use crate::Content;
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::ingredient::Ingredient;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Machines whose material also flanks the casing (`XYX`).
const FLANKED: &str = "XYX";
/// Machines whose glass flanks the casing (`#Y#`).
const GLAZED: &str = "#Y#";

/// Stage every factory recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let glass = c.tag("forge:glass")?;
    let casing = c.item("sturdy_casing")?;

    let machines: [(&str, Ingredient, &str); 9] = [
        ("bottler", c.item("can")?.into(), GLAZED),
        ("carpenter", c.tag("forge:ingots/bronze")?.into(), FLANKED),
        ("centrifuge", c.tag("forge:ingots/copper")?.into(), FLANKED),
        ("fermenter", c.tag("forge:gears/bronze")?.into(), GLAZED),
        ("moistener", c.tag("forge:gears/copper")?.into(), GLAZED),
        ("rainmaker", c.tag("forge:gears/tin")?.into(), GLAZED),
        ("raintank", c.tag("forge:ingots/iron")?.into(), FLANKED),
        ("squeezer", c.tag("forge:ingots/tin")?.into(), FLANKED),
        ("still", c.tag("forge:dusts/redstone")?.into(), GLAZED),
    ];
    for (machine, material, middle) in machines {
        shaped(&c.item(machine)?, 1)
            .define('#', &glass)
            .define('X', material)
            .define('Y', &casing)
            .pattern("X#X")
            .pattern(middle)
            .pattern("X#X")
            .unlocked_by("has_casing", has(&casing))
            .save(out)?;
    }

    shaped(&c.item("fabricator")?, 1)
        .define('#', &glass)
        .define('X', &c.tag("forge:ingots/gold")?)
        .define('Y', &casing)
        .define('Z', &c.tag("forge:chests/wooden")?)
        .pattern("X#X")
        .pattern(GLAZED)
        .pattern("XZX")
        .unlocked_by("has_casing", has(&casing))
        .save(out)
}
