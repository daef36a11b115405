//! Bee housing, apiarist gear, alveary parts, and comb blocks.

use crate::variants::{HONEY_COMBS, electron_tube};
use crate::{Content, mod_id};
use recipegen_core::builder::{RecipeBuilder, shaped};
use recipegen_core::error::GenError;
use recipegen_core::output::RecipeOutput;
use recipegen_core::unlock::has;

/// Stage every apiculture recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    combs(c, out)?;
    alveary(c, out)?;
    apiarist_armour(c, out)?;
    housing(c, out)?;
    tools_and_materials(c, out)
}

/// Four combs compress into a comb block.
fn combs(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    for comb_type in HONEY_COMBS {
        let comb = c.item(&format!("bee_comb_{comb_type}"))?;
        let block = c.item(&format!("bee_comb_block_{comb_type}"))?;
        shaped(&block, 1)
            .define('#', &comb)
            .pattern("##")
            .pattern("##")
            .unlocked_by("has_comb", has(&comb))
            .group("combs")
            .save(out)?;
    }
    Ok(())
}

fn alveary(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let plain = c.item("alveary_plain")?;
    let casing = c.item("impregnated_casing")?;
    let gold_tube = c.item(&electron_tube("gold"))?;
    let iron = c.tag("forge:ingots/iron")?;

    shaped(&plain, 1)
        .define('X', &casing)
        .define('#', &c.item("scented_paneling")?)
        .pattern("###")
        .pattern("#X#")
        .pattern("###")
        .unlocked_by("has_casing", has(&casing))
        .group("alveary")
        .save(out)?;
    shaped(&c.item("alveary_fan")?, 1)
        .define('#', &gold_tube)
        .define('X', &plain)
        .define('I', &iron)
        .pattern("I I")
        .pattern(" X ")
        .pattern("I#I")
        .unlocked_by("has_plain", has(&plain))
        .group("alveary")
        .save(out)?;
    shaped(&c.item("alveary_heater")?, 1)
        .define('#', &gold_tube)
        .define('I', &iron)
        .define('X', &plain)
        .define('S', &c.tag("forge:stone")?)
        .pattern("#I#")
        .pattern(" X ")
        .pattern("SSS")
        .unlocked_by("has_plain", has(&plain))
        .group("alveary")
        .save(out)?;
    shaped(&c.item("alveary_hygro")?, 1)
        .define('G', &c.tag("forge:glass")?)
        .define('X', &plain)
        .define('I', &iron)
        .pattern("GIG")
        .pattern("GXG")
        .pattern("GIG")
        .unlocked_by("has_plain", has(&plain))
        .group("alveary")
        .save(out)?;
    shaped(&c.item("alveary_sieve")?, 1)
        .define('W', &c.item("woven_silk")?)
        .define('X', &plain)
        .define('I', &iron)
        .pattern("III")
        .pattern(" X ")
        .pattern("WWW")
        .unlocked_by("has_plain", has(&plain))
        .group("alveary")
        .save(out)?;
    shaped(&c.item("alveary_stabiliser")?, 1)
        .define('X', &plain)
        .define('G', &c.tag("forge:gems/quartz")?)
        .pattern("G G")
        .pattern("GXG")
        .pattern("G G")
        .unlocked_by("has_plain", has(&plain))
        .group("alveary")
        .save(out)?;
    shaped(&c.item("alveary_swarmer")?, 1)
        .define('#', &c.item(&electron_tube("diamond"))?)
        .define('X', &plain)
        .define('G', &c.tag("forge:ingots/gold")?)
        .pattern("#G#")
        .pattern(" X ")
        .pattern("#G#")
        .unlocked_by("has_plain", has(&plain))
        .group("alveary")
        .save(out)
}

fn apiarist_armour(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let silk = c.item("woven_silk")?;
    let pieces: [(&str, &[&str]); 4] = [
        ("apiarist_helmet", &["###", "# #"]),
        ("apiarist_chest", &["# #", "###", "###"]),
        ("apiarist_legs", &["###", "# #", "# #"]),
        ("apiarist_boots", &["# #", "# #"]),
    ];
    for (piece, rows) in pieces {
        let mut builder = shaped(&c.item(piece)?, 1).define('#', &silk);
        for row in rows {
            builder = builder.pattern(row);
        }
        builder
            .unlocked_by("has silk", has(&silk))
            .group("apiarist_armour")
            .save(out)?;
    }
    Ok(())
}

fn housing(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let slabs = c.tag("minecraft:wooden_slabs")?;
    let planks = c.tag("minecraft:planks")?;
    let casing = c.item("impregnated_casing")?;
    let combs = c.tag("forge:bee_combs")?;

    shaped(&c.item("apiary")?, 1)
        .define('S', &slabs)
        .define('P', &planks)
        .define('C', &casing)
        .pattern("SSS")
        .pattern("PCP")
        .pattern("PPP")
        .unlocked_by("has_casing", has(&casing))
        .save(out)?;
    shaped(&c.item("bee_house")?, 1)
        .define('S', &slabs)
        .define('P', &planks)
        .define('C', &combs)
        .pattern("SSS")
        .pattern("PCP")
        .pattern("PPP")
        .unlocked_by("has_casing", has(&combs))
        .save(out)?;
    shaped(&c.item("bee_chest")?, 1)
        .define('G', &c.tag("forge:glass")?)
        .define('X', &combs)
        .define('Y', &c.tag("forge:chests/wooden")?)
        .pattern(" G ")
        .pattern("XYX")
        .pattern("XXX")
        .unlocked_by("has_comb", has(&combs))
        .save(out)
}

fn tools_and_materials(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let propolis = c.item("propolis_normal")?;
    let pulsating = c.item("propolis_pulsating")?;
    let impregnated_stick = c.item("stick_impregnated")?;
    let string = c.tag("forge:string")?;
    let sticks = c.tag("forge:rods/wooden")?;
    let bronze = c.tag("forge:ingots/bronze")?;
    let tin = c.tag("forge:ingots/tin")?;
    let wool = c.tag("minecraft:wool")?;
    let melon = c.vanilla("melon_slice")?;
    let wax = c.item("beeswax")?;

    shaped(&c.item("bituminous_peat")?, 1)
        .define('#', &c.tag("forge:dusts/ash")?)
        .define('X', &c.item("peat")?)
        .define('Y', &propolis)
        .pattern(" # ")
        .pattern("XYX")
        .pattern(" # ")
        .unlocked_by("has_propolis", has(&propolis))
        .save(out)?;
    shaped(&c.item("frame_impregnated")?, 1)
        .define('#', &impregnated_stick)
        .define('S', &string)
        .pattern("###")
        .pattern("#S#")
        .pattern("###")
        .unlocked_by("has_impregnated_stick", has(&impregnated_stick))
        .save(out)?;
    shaped(&c.item("frame_untreated")?, 1)
        .define('#', &sticks)
        .define('S', &string)
        .pattern("###")
        .pattern("#S#")
        .pattern("###")
        .unlocked_by("has_impregnated_stick", has(&impregnated_stick))
        .save(out)?;
    shaped(&c.item("habitat_locator")?, 1)
        .define('X', &bronze)
        .define('#', &c.tag("forge:dusts/redstone")?)
        .pattern(" X ")
        .pattern("X#X")
        .pattern(" X ")
        .unlocked_by("has_bronze", has(&bronze))
        .save(out)?;
    shaped(&c.item("pulsating_mesh")?, 1)
        .define('#', &pulsating)
        .pattern("# #")
        .pattern(" # ")
        .pattern("# #")
        .unlocked_by("has_pulsating_propolis", has(&pulsating))
        .save(out)?;
    shaped(&c.item("scoop")?, 1)
        .define('#', &sticks)
        .define('X', &wool)
        .pattern("#X#")
        .pattern("###")
        .pattern(" # ")
        .unlocked_by("has_wool", has(&wool))
        .save(out)?;
    shaped(&c.vanilla("slime_ball")?, 1)
        .define('#', &propolis)
        .define('X', &c.item("pollen_cluster_normal")?)
        .pattern("#X#")
        .pattern("#X#")
        .pattern("#X#")
        .unlocked_by("has_propolis", has(&propolis))
        .save_as(out, &mod_id("slime_from_propolis"))?;
    shaped(&c.item("smoker")?, 1)
        .define('#', &tin)
        .define('S', &sticks)
        .define('F', &c.vanilla("flint_and_steel")?)
        .define('L', &c.tag("forge:leather")?)
        .pattern("LS#")
        .pattern("LF#")
        .pattern("###")
        .unlocked_by("has_tin", has(&tin))
        .save(out)?;
    shaped(&c.vanilla("glistering_melon_slice")?, 1)
        .define('#', &c.item("honey_drop_honey")?)
        .define('X', &c.item("honeydew")?)
        .define('Y', &melon)
        .pattern("#X#")
        .pattern("#Y#")
        .pattern("#X#")
        .unlocked_by("has_melon", has(&melon))
        .save(out)?;
    shaped(&c.vanilla("torch")?, 3)
        .define('#', &wax)
        .define('Y', &sticks)
        .pattern(" # ")
        .pattern(" # ")
        .pattern(" Y ")
        .unlocked_by("has_wax", has(&wax))
        .save_as(out, &mod_id("torch_from_wax"))?;
    shaped(&c.item("wax_cast")?, 1)
        .define('#', &wax)
        .pattern("###")
        .pattern("# #")
        .pattern("###")
        .unlocked_by("has_wax", has(&wax))
        .save(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipegen_core::recipe::RecipeKind;
    use recipegen_core::registry::RegistryBuilder;

    #[test]
    fn comb_blocks_share_group() {
        let mut b = RegistryBuilder::new();
        for comb_type in HONEY_COMBS {
            b.register_item(&mod_id(&format!("bee_comb_{comb_type}"))).unwrap();
            b.register_item(&mod_id(&format!("bee_comb_block_{comb_type}"))).unwrap();
        }
        let reg = b.build().unwrap();
        let mut out = RecipeOutput::new();
        combs(&Content::new(&reg), &mut out).unwrap();

        assert_eq!(out.len(), HONEY_COMBS.len());
        let spec = out.get("forestry:bee_comb_block_honey").unwrap();
        assert_eq!(spec.group.as_deref(), Some("combs"));
        let RecipeKind::Shaped(shaped) = &spec.kind else {
            panic!("comb block is shaped");
        };
        assert_eq!(shaped.pattern, ["##", "##"]);
        assert_eq!(spec.unlock[0].name, "has_comb");
    }
}
