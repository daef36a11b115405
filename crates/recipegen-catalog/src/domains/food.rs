use crate::Content;
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Stage every food recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let capsule = c.item("capsule")?;
    let honey_drop = c.item("honey_drop_honey")?;
    let royal_jelly = c.item("royal_jelly")?;

    shaped(&c.item("ambrosia")?, 1)
        .define('#', &c.item("honeydew")?)
        .define('X', &royal_jelly)
        .define('Y', &capsule)
        .pattern("#Y#")
        .pattern("XXX")
        .pattern("###")
        .unlocked_by("has royal_jelly", has(&royal_jelly))
        .save(out)?;
    shaped(&c.item("honey_pot")?, 1)
        .define('#', &honey_drop)
        .define('X', &capsule)
        .pattern("# #")
        .pattern(" X ")
        .pattern("# #")
        .unlocked_by("has_drop", has(&honey_drop))
        .save(out)?;
    shaped(&c.item("honeyed_slice")?, 1)
        .define('#', &honey_drop)
        .define('X', &c.vanilla("bread")?)
        .pattern("###")
        .pattern("#X#")
        .pattern("###")
        .unlocked_by("has_drop", has(&honey_drop))
        .save(out)
}
