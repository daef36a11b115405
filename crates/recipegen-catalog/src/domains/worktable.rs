use crate::Content;
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Stage every worktable recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let crafting_table = c.vanilla("crafting_table")?;
    shaped(&c.item("worktable")?, 1)
        .define('B', &c.vanilla("book")?)
        .define('C', &c.tag("forge:chests/wooden")?)
        .define('W', &crafting_table)
        .pattern("B")
        .pattern("W")
        .pattern("C")
        .unlocked_by("has_crafting_table", has(&crafting_table))
        .save(out)
}
