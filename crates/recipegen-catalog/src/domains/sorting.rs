use crate::Content;
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::ingredient::Ingredient;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Stage every sorting recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let diamond = c.tag("forge:gems/diamond")?;
    let organic = Ingredient::any_of([
        Ingredient::from(c.item("caterpillar_ge")?),
        Ingredient::from(c.item("propolis_normal")?),
        Ingredient::from(c.tag("forge:fruits")?),
    ]);

    shaped(&c.item("genetic_filter")?, 2)
        .define('B', &c.tag("forge:gears/bronze")?)
        .define('D', &diamond)
        .define('F', organic)
        .define('W', &c.tag("minecraft:planks")?)
        .define('G', &c.tag("forge:glass")?)
        .pattern("WDW")
        .pattern("FGF")
        .pattern("BDB")
        .unlocked_by("has_diamond", has(&diamond))
        .save(out)
}
