use crate::Content;
use crate::variants::electron_tube;
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Stage every climatology recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let casing = c.item("sturdy_casing")?;
    let bronze_gear = c.tag("forge:gears/bronze")?;
    let diamond = c.tag("forge:gems/diamond")?;

    shaped(&c.item("habitat_former")?, 1)
        .define('S', &casing)
        .define('G', &c.tag("forge:glass")?)
        .define('B', &bronze_gear)
        .define('R', &c.tag("forge:dusts/redstone")?)
        .define('C', &c.item("circuitboard_basic")?)
        .define('T', &c.item(&electron_tube("iron"))?)
        .pattern("GRG")
        .pattern("TST")
        .pattern("BCB")
        .unlocked_by("has_casing", has(&casing))
        .save(out)?;
    shaped(&c.item("habitat_screen")?, 1)
        .define('G', &bronze_gear)
        .define('P', &c.tag("forge:glass_panes")?)
        .define('I', &c.tag("forge:ingots/bronze")?)
        .define('D', &diamond)
        .pattern("IPI")
        .pattern("IPI")
        .pattern("DGD")
        .unlocked_by("has_diamond", has(&diamond))
        .save(out)
}
