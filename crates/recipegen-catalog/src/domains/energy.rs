use crate::Content;
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Stage every energy recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let piston = c.vanilla("piston")?;
    let glass = c.tag("forge:glass")?;
    let copper_gear = c.tag("forge:gears/copper")?;

    shaped(&c.item("engine_biogas")?, 1)
        .define('#', &c.tag("forge:ingots/bronze")?)
        .define('V', &piston)
        .define('X', &glass)
        .define('Y', &c.tag("forge:gears/bronze")?)
        .pattern("###")
        .pattern(" X ")
        .pattern("YVY")
        .unlocked_by("has_piston", has(&piston))
        .save(out)?;
    shaped(&c.item("engine_clockwork")?, 1)
        .define('#', &c.tag("minecraft:planks")?)
        .define('V', &piston)
        .define('X', &glass)
        .define('Y', &c.vanilla("clock")?)
        .define('Z', &copper_gear)
        .pattern("###")
        .pattern(" X ")
        .pattern("ZVY")
        .unlocked_by("has_piston", has(&piston))
        .save(out)?;
    shaped(&c.item("engine_peat")?, 1)
        .define('#', &c.tag("forge:ingots/copper")?)
        .define('V', &piston)
        .define('X', &glass)
        .define('Y', &copper_gear)
        .pattern("###")
        .pattern(" X ")
        .pattern("YVY")
        .unlocked_by("has_piston", has(&piston))
        .save(out)
}
