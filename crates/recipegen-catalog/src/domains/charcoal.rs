use crate::{Content, mod_id};
use recipegen_core::builder::{RecipeBuilder, shaped, shapeless};
use recipegen_core::error::GenError;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Stage every charcoal recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let charcoal = c.vanilla("charcoal")?;
    let charcoal_block = c.tag("forge:storage_blocks/charcoal")?;
    let logs = c.tag("minecraft:logs")?;
    let wood_pile = c.item("wood_pile")?;
    let decorative = c.item("wood_pile_decorative")?;

    shaped(&c.item("charcoal_block")?, 1)
        .define('#', &charcoal)
        .pattern("###")
        .pattern("###")
        .pattern("###")
        .unlocked_by("has_charcoal", has(&charcoal))
        .save(out)?;
    shapeless(&charcoal, 9)
        .requires(&charcoal_block)
        .unlocked_by("has_charcoal_block", has(&charcoal_block))
        .save_as(out, &mod_id("charcoal_from_block"))?;
    shaped(&wood_pile, 1)
        .define('L', &logs)
        .pattern("LL")
        .pattern("LL")
        .unlocked_by("has_log", has(&logs))
        .save(out)?;
    shapeless(&decorative, 1)
        .requires(&wood_pile)
        .unlocked_by("was_wood_pile", has(&wood_pile))
        .save(out)?;
    shapeless(&wood_pile, 1)
        .requires(&decorative)
        .unlocked_by("has_decorative", has(&decorative))
        .save_as(out, &mod_id("wood_pile_from_decorative"))
}
