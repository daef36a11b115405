use crate::Content;
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Stage every lepidopterology recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let butterfly = c.item("butterfly_ge")?;
    shaped(&c.item("butterfly_chest")?, 1)
        .define('#', &c.tag("forge:glass")?)
        .define('X', &butterfly)
        .define('Y', &c.tag("forge:chests/wooden")?)
        .pattern(" # ")
        .pattern("XYX")
        .pattern("XXX")
        .unlocked_by("has_butterfly", has(&butterfly))
        .save(out)
}
