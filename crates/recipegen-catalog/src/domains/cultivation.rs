//! Planters: a managed form built from tubes and casing, and a manual form
//! that converts back and forth with it.

use crate::variants::{PLANTERS, electron_tube};
use crate::{Content, mod_id};
use recipegen_core::builder::{RecipeBuilder, shaped, shapeless};
use recipegen_core::error::GenError;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Stage every cultivation recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let glass = c.tag("forge:glass")?;
    let casing = c.item("flexible_casing")?;
    let board = c.item("circuitboard_basic")?;

    for planter in PLANTERS {
        let managed_path = planter.managed();
        let managed = c.item(&managed_path)?;
        let manual = c.item(&planter.manual())?;

        shaped(&managed, 1)
            .define('G', &glass)
            .define('T', &c.item(&electron_tube(planter.tube))?)
            .define('C', &casing)
            .define('B', &board)
            .pattern("GTG")
            .pattern("TCT")
            .pattern("GBG")
            .unlocked_by("has_casing", has(&casing))
            .save(out)?;
        shapeless(&manual, 1)
            .requires(&managed)
            .unlocked_by("has_managed", has(&managed))
            .save(out)?;
        shapeless(&managed, 1)
            .requires(&manual)
            .unlocked_by("has_manual", has(&manual))
            .save_as(out, &mod_id(&format!("{managed_path}_from_manual")))?;
    }
    Ok(())
}
