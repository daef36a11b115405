use crate::variants::{CONTAINERS, filled_nbt};
use crate::{Content, mod_id};
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::ingredient::Ingredient;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Cake from milk in any fluid container.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let cake = c.vanilla("cake")?;
    let sugar = c.vanilla("sugar")?;
    let wheat = c.vanilla("wheat")?;
    let egg = c.vanilla("egg")?;
    let milk = filled_nbt("forestry:milk");

    for container in CONTAINERS {
        let filled = Ingredient::stack(&c.item(container)?, Some(milk.clone()));
        shaped(&cake, 1)
            .define('A', filled)
            .define('B', &sugar)
            .define('C', &wheat)
            .define('E', &egg)
            .pattern("AAA")
            .pattern("BEB")
            .pattern("CCC")
            .unlocked_by("has_wheat", has(&wheat))
            .save_as(out, &mod_id(&format!("cake_{container}")))?;
    }
    Ok(())
}
