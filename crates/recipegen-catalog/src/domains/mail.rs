//! Letters, stamps, and the postal blocks.

use crate::variants::{LETTER_STATES, STAMPS, electron_tube, letter};
use crate::Content;
use recipegen_core::builder::{RecipeBuilder, shaped, shapeless};
use recipegen_core::error::GenError;
use recipegen_core::ingredient::Ingredient;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Stage every mail recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let book = c.vanilla("book")?;
    let paper = c.vanilla("paper")?;
    let chests = c.tag("forge:chests/wooden")?;
    let casing = c.item("sturdy_casing")?;
    let tin = c.tag("forge:ingots/tin")?;

    shapeless(&c.item("catalogue")?, 1)
        .requires(&book)
        .requires(&c.tag("forge:stamps")?)
        .unlocked_by("has_book", has(&book))
        .save(out)?;

    let seal = Ingredient::any_of([
        Ingredient::from(c.tag("forge:propolis")?),
        Ingredient::from(c.tag("forge:slimeballs")?),
    ]);
    shapeless(&c.item(&letter("empty", "fresh"))?, 1)
        .requires(&paper)
        .requires(seal)
        .unlocked_by("has_paper", has(&paper))
        .save(out)?;

    shaped(&c.item("mailbox")?, 1)
        .define('#', &tin)
        .define('X', &chests)
        .define('Y', &casing)
        .pattern(" # ")
        .pattern("#Y#")
        .pattern("XXX")
        .unlocked_by("has_casing", has(&casing))
        .save(out)?;

    let mut emptied = Vec::with_capacity(LETTER_STATES.len());
    for state in LETTER_STATES {
        emptied.push(c.item(&letter("empty", state))?);
    }
    shaped(&paper, 1)
        .define('#', Ingredient::any_of(&emptied))
        .pattern(" # ")
        .pattern(" # ")
        .pattern(" # ")
        .unlocked_by("has_paper", has(&paper))
        .save(out)?;

    shaped(&c.item("trade_station")?, 1)
        .define('#', &c.item(&electron_tube("bronze"))?)
        .define('X', &chests)
        .define('Y', &casing)
        .define('Z', &c.item(&electron_tube("iron"))?)
        // An exact stack: a blank refined board, not any refined board.
        .define('W', Ingredient::stack(&c.item("circuitboard_refined")?, None))
        .pattern("Z#Z")
        .pattern("#Y#")
        .pattern("XWX")
        .unlocked_by("has_casing", has(&casing))
        .save(out)?;

    let glue = Ingredient::any_of([
        Ingredient::from(c.tag("forge:drops/honey")?),
        Ingredient::from(c.vanilla("slime_ball")?),
    ]);
    for stamp in STAMPS {
        shaped(&c.item(&format!("stamp_{}", stamp.denomination))?, 9)
            .define('X', &c.tag(stamp.material)?)
            .define('#', &paper)
            .define('Z', &glue)
            .pattern("XXX")
            .pattern("###")
            .pattern("ZZZ")
            .unlocked_by("has_paper", has(&paper))
            .save(out)?;
    }
    Ok(())
}
