use crate::{Content, mod_id};
use recipegen_core::builder::{RecipeBuilder, shapeless};
use recipegen_core::error::GenError;
use recipegen_core::ingredient::Ingredient;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// The forester's manual: a book plus a honey drop, a sapling, or a butterfly.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let manual = c.item("foresters_manual")?;
    let book = c.vanilla("book")?;
    let companions: [(&str, Ingredient); 3] = [
        ("honeydrop", c.item("honey_drop_honey")?.into()),
        ("sapling", c.tag("minecraft:saplings")?.into()),
        ("butterfly", c.item("butterfly_ge")?.into()),
    ];
    for (name, companion) in companions {
        shapeless(&manual, 1)
            .requires(&book)
            .requires(companion)
            .unlocked_by("has_book", has(&book))
            .save_as(out, &mod_id(&format!("foresters_manual_{name}")))?;
    }
    Ok(())
}
