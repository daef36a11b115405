//! Backpacks: wool and string around a chest, flanked by a themed item.

use crate::Content;
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::ingredient::Ingredient;
use recipegen_core::output::RecipeOutput;
use recipegen_core::registry::TagRef;
use recipegen_core::unlock::{Trigger, has};

#[derive(Clone)]
struct Backpack {
    wool: TagRef,
    string: TagRef,
    chest: Ingredient,
}

impl Backpack {
    fn save(
        &self,
        c: &Content<'_>,
        out: &mut RecipeOutput,
        name: &str,
        flank: impl Into<Ingredient>,
        criterion: &str,
        trigger: Trigger,
    ) -> Result<(), GenError> {
        shaped(&c.item(name)?, 1)
            .define('#', &self.wool)
            .define('V', flank)
            .define('X', &self.string)
            .define('Y', &self.chest)
            .pattern("X#X")
            .pattern("VYV")
            .pattern("X#X")
            .unlocked_by(criterion, trigger)
            .save(out)
    }
}

/// Stage every backpacks recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let chests = c.tag("forge:chests/wooden")?;
    let pack = Backpack {
        wool: c.tag("minecraft:wool")?,
        string: c.tag("forge:string")?,
        chest: Ingredient::from(&chests),
    };

    let bones = c.tag("forge:bones")?;
    pack.save(c, out, "adventurer_backpack", &bones, "has_bone", has(&bones))?;

    // The apiarist's pack is built around a tree chest, not a bee chest.
    let tree_chest = c.item("tree_chest")?;
    let sticks = c.tag("forge:rods/wooden")?;
    Backpack {
        chest: Ingredient::from(&tree_chest),
        ..pack.clone()
    }
    .save(c, out, "apiarist_backpack", &sticks, "has_bee_chest", has(&tree_chest))?;

    let clay = c.vanilla("clay_ball")?;
    pack.save(c, out, "builder_backpack", &clay, "has_clay", has(&clay))?;

    let stone = c.tag("forge:stone")?;
    pack.save(c, out, "digger_backpack", &stone, "has_stone", has(&stone))?;

    let logs = c.tag("minecraft:logs")?;
    pack.save(c, out, "forester_backpack", &logs, "has_log", has(&logs))?;

    let feathers = c.tag("forge:feathers")?;
    pack.save(c, out, "hunter_backpack", &feathers, "has_feather", has(&feathers))?;

    let butterfly_chest = c.item("butterfly_chest")?;
    pack.save(
        c,
        out,
        "lepidopterist_backpack",
        &butterfly_chest,
        "has_butterfly_chest",
        has(&butterfly_chest),
    )?;

    let iron = c.tag("forge:ingots/iron")?;
    pack.save(c, out, "miner_backpack", &iron, "has_iron", has(&iron))
}
