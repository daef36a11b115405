use crate::variants::SPECIES_CHESTS;
use crate::{Content, mod_id};
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::ingredient::Ingredient;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// One database recipe per ordered pair of distinct species chests.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let analyzer = c.item("portable_analyzer")?;
    let casing = c.item("sturdy_casing")?;
    let planks = c.tag("minecraft:planks")?;
    let bronze = c.tag("forge:ingots/bronze")?;
    let special = Ingredient::any_of([
        Ingredient::from(c.item("royal_jelly")?),
        Ingredient::from(c.item("fruit_plum")?),
        Ingredient::from(c.tag("forge:chests/wooden")?),
    ]);
    let database = c.item("database")?;

    for first in SPECIES_CHESTS {
        for second in SPECIES_CHESTS {
            if first == second {
                continue;
            }
            shaped(&database, 1)
                .define('#', &analyzer)
                .define('C', &special)
                .define('S', &c.item(first)?)
                .define('F', &c.item(second)?)
                .define('W', &planks)
                .define('I', &bronze)
                .define('Y', &casing)
                .pattern("I#I")
                .pattern("FYS")
                .pattern("WCW")
                .unlocked_by("has_casing", has(&casing))
                .save_as(out, &mod_id(&format!("database_{first}_{second}")))?;
        }
    }
    Ok(())
}
