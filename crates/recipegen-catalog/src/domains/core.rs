//! Core resources, tools, gears, soil, and their furnace recipes.

use crate::variants::filled_nbt;
use crate::{Content, mod_id};
use recipegen_core::builder::{
    BLASTING_TIME, RecipeBuilder, SMELTING_TIME, blasting, conditional, shaped, shapeless,
    smelting,
};
use recipegen_core::condition::Condition;
use recipegen_core::error::GenError;
use recipegen_core::ingredient::Ingredient;
use recipegen_core::output::RecipeOutput;
use recipegen_core::registry::{ItemRef, TagRef};
use recipegen_core::unlock::has;

/// Stage every core recipe.
pub fn register(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    furnace(c, out)?;
    nine_block_storage(out, &c.item("raw_tin")?, &c.item("raw_tin_block")?)?;
    storage_and_tools(c, out)?;
    gears(c, out)?;
    resources(c, out)?;
    equipment(c, out)?;
    soil(c, out)
}

// ---------------------------------------------------------------------------
// Furnace
// ---------------------------------------------------------------------------

fn furnace(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let apatite = c.item("apatite")?;
    let tin = c.item("ingot_tin")?;
    let sources: [(&str, &str, &ItemRef, &str); 3] = [
        ("forge:ores/apatite", "apatite_ore", &apatite, "apatite"),
        ("forge:ores/tin", "tin_ore", &tin, "tin_ingot"),
        ("forge:raw_materials/tin", "raw_tin", &tin, "tin_ingot"),
    ];
    for (tag, source_name, result, result_name) in sources {
        let source = c.tag(tag)?;
        let criterion = format!("has_{source_name}");
        smelting(&source, result, 0.5, SMELTING_TIME)
            .unlocked_by(&criterion, has(&source))
            .save_as(out, &mod_id(&format!("{result_name}_from_smelting_{source_name}")))?;
        blasting(&source, result, 0.5, BLASTING_TIME)
            .unlocked_by(&criterion, has(&source))
            .save_as(out, &mod_id(&format!("{result_name}_from_blasting_{source_name}")))?;
    }

    let peat = c.item("peat")?;
    smelting(&peat, &c.item("ash")?, 0.0, SMELTING_TIME)
        .unlocked_by("has_peat", has(&peat))
        .save_as(out, &mod_id("ash_from_peat_blasting"))
}

/// A block from nine items and nine items back from the block.
///
/// Identities are the bare item paths, so they land in the default
/// namespace.
fn nine_block_storage(
    out: &mut RecipeOutput,
    unpacked: &ItemRef,
    packed: &ItemRef,
) -> Result<(), GenError> {
    let unpacked_path = unpacked.id().path();
    let packed_path = packed.id().path();
    shapeless(unpacked, 9)
        .requires(packed)
        .unlocked_by(&format!("has_{packed_path}"), has(packed))
        .save_as(out, unpacked_path)?;
    shaped(packed, 1)
        .define('#', unpacked)
        .pattern("###")
        .pattern("###")
        .pattern("###")
        .unlocked_by(&format!("has_{unpacked_path}"), has(unpacked))
        .save_as(out, packed_path)
}

// ---------------------------------------------------------------------------
// Storage blocks and tools
// ---------------------------------------------------------------------------

fn storage_and_tools(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let bronze = c.tag("forge:ingots/bronze")?;
    let sticks = c.tag("forge:rods/wooden")?;
    let casing = c.item("sturdy_casing")?;

    shaped(&c.item("analyzer")?, 1)
        .define('T', &c.item("portable_analyzer")?)
        .define('X', &bronze)
        .define('Y', &casing)
        .pattern("XTX")
        .pattern(" Y ")
        .pattern("X X")
        .unlocked_by("has_casing", has(&casing))
        .save(out)?;

    // The tin block's criterion name is kept as shipped.
    let blocks = [
        ("apatite_block", "forge:gems/apatite", "has_apatite"),
        ("bronze_block", "forge:ingots/bronze", "has_bronze"),
        ("tin_block", "forge:ingots/tin", "has_apatite"),
    ];
    for (block, material, criterion) in blocks {
        let material = c.tag(material)?;
        shaped(&c.item(block)?, 1)
            .define('#', &material)
            .pattern("###")
            .pattern("###")
            .pattern("###")
            .unlocked_by(criterion, has(&material))
            .save(out)?;
    }

    shaped(&c.item("bronze_pickaxe")?, 1)
        .define('#', &bronze)
        .define('X', &sticks)
        .pattern("###")
        .pattern(" X ")
        .pattern(" X ")
        .unlocked_by("has_bronze", has(&bronze))
        .save(out)?;
    shaped(&c.item("bronze_shovel")?, 1)
        .define('#', &bronze)
        .define('X', &sticks)
        .pattern(" # ")
        .pattern(" X ")
        .pattern(" X ")
        .unlocked_by("has_bronze", has(&bronze))
        .save(out)
}

// ---------------------------------------------------------------------------
// Gears
// ---------------------------------------------------------------------------

/// Gears use a stone gear core when some other mod provides one and a copper
/// ingot otherwise.
fn gears(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let stone_gears = c.tag("forge:gears/stone")?;
    let copper = c.tag("forge:ingots/copper")?;
    let gears = [
        ("gear_bronze", "forge:ingots/bronze", "has_bronze"),
        ("gear_copper", "forge:ingots/copper", "has_copper"),
        ("gear_tin", "forge:ingots/tin", "has_tin"),
    ];
    for (gear, material, criterion) in gears {
        let result = c.item(gear)?;
        let material = c.tag(material)?;
        let recipe = |core: &TagRef| {
            shaped(&result, 1)
                .define('#', &material)
                .define('X', core)
                .pattern(" # ")
                .pattern("#X#")
                .pattern(" # ")
                .unlocked_by(criterion, has(&material))
        };
        conditional()
            .add_condition(Condition::tag_present(&stone_gears))
            .add_recipe(recipe(&stone_gears))
            .fallback(recipe(&copper))
            .save_as(out, &mod_id(gear))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

fn resources(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let tin = c.tag("forge:ingots/tin")?;
    let copper = c.tag("forge:ingots/copper")?;
    let ingot_bronze = c.item("ingot_bronze")?;

    shapeless(&ingot_bronze, 1)
        .requires(&tin)
        .requires_n(&copper, 3)
        .unlocked_by("has_tin", has(&tin))
        .save_as(out, &mod_id("ingot_bronze_alloying"))?;

    let unpacking = [
        ("apatite", "forge:storage_blocks/apatite"),
        ("ingot_bronze", "forge:storage_blocks/bronze"),
        ("ingot_tin", "forge:storage_blocks/tin"),
    ];
    for (item, block) in unpacking {
        let block = c.tag(block)?;
        shapeless(&c.item(item)?, 9)
            .requires(&block)
            .unlocked_by("has_block", has(&block))
            .save(out)?;
    }

    let wisp = c.item("silk_wisp")?;
    shaped(&c.vanilla("string")?, 1)
        .define('#', &wisp)
        .pattern(" # ")
        .pattern(" # ")
        .pattern(" # ")
        .unlocked_by("has_wisp", has(&wisp))
        .save_as(out, &mod_id("string_from_wisp"))?;
    // Saved without a namespace.
    shaped(&c.vanilla("cobweb")?, 4)
        .define('#', &wisp)
        .pattern("# #")
        .pattern(" # ")
        .pattern("# #")
        .unlocked_by("has_wisp", has(&wisp))
        .save_as(out, "cobweb_from_wisp")
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

fn equipment(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let bronze = c.tag("forge:ingots/bronze")?;
    let panes = c.tag("forge:glass_panes")?;
    let wool = c.tag("minecraft:wool")?;
    let diamond = c.tag("forge:gems/diamond")?;
    let carton = c.item("carton")?;

    for tool in ["pickaxe", "shovel"] {
        let bronze_tool = c.item(&format!("bronze_{tool}"))?;
        shapeless(&c.item(&format!("kit_{tool}"))?, 1)
            .requires(&bronze_tool)
            .requires(&carton)
            .unlocked_by(&format!("has_{tool}"), has(&bronze_tool))
            .save(out)?;
    }

    shaped(&c.item("spectacles")?, 1)
        .define('X', &bronze)
        .define('Y', &panes)
        .pattern(" X ")
        .pattern("Y Y")
        .unlocked_by("has_bronze", has(&bronze))
        .save(out)?;
    shaped(&c.item("pipette")?, 1)
        .define('#', &wool)
        .define('X', &panes)
        .pattern("  #")
        .pattern(" X ")
        .pattern("X  ")
        .unlocked_by("has_wool", has(&wool))
        .save(out)?;
    shaped(&c.item("portable_analyzer")?, 1)
        .define('#', &panes)
        .define('X', &c.tag("forge:ingots/tin")?)
        .define('R', &c.tag("forge:dusts/redstone")?)
        .define('D', &diamond)
        .pattern("X#X")
        .pattern("X#X")
        .pattern("RDR")
        .unlocked_by("has_diamond", has(&diamond))
        .save(out)?;
    shaped(&c.item("sturdy_casing")?, 1)
        .define('#', &bronze)
        .pattern("###")
        .pattern("# #")
        .pattern("###")
        .unlocked_by("has_bronze", has(&bronze))
        .save(out)?;
    shaped(&c.item("wrench")?, 1)
        .define('#', &bronze)
        .pattern("# #")
        .pattern(" # ")
        .pattern(" # ")
        .unlocked_by("has_bronze", has(&bronze))
        .save(out)
}

// ---------------------------------------------------------------------------
// Soil: compost, fertilizer, humus, bog earth
// ---------------------------------------------------------------------------

fn soil(c: &Content<'_>, out: &mut RecipeOutput) -> Result<(), GenError> {
    let dirt = c.vanilla("dirt")?;
    let wheat = c.tag("forge:crops/wheat")?;
    let ash = c.tag("forge:dusts/ash")?;
    let apatite = c.tag("forge:gems/apatite")?;
    let sand = c.tag("minecraft:sand")?;
    let compost = c.item("compost")?;
    let fertilizer = c.item("fertilizer_compound")?;
    let humus = c.item("humus")?;

    shaped(&compost, 4)
        .define('#', &dirt)
        .define('X', &wheat)
        .pattern(" X ")
        .pattern("X#X")
        .pattern(" X ")
        .unlocked_by("has_wheat", has(&wheat))
        .save_as(out, &mod_id("compost_wheat"))?;
    shaped(&compost, 1)
        .define('#', &dirt)
        .define('X', &ash)
        .pattern(" X ")
        .pattern("X#X")
        .pattern(" X ")
        .unlocked_by("has_ash", has(&ash))
        .save_as(out, &mod_id("compost_ash"))?;
    shaped(&fertilizer, 8)
        .define('#', &sand)
        .define('X', &apatite)
        .pattern(" # ")
        .pattern(" X ")
        .pattern(" # ")
        .unlocked_by("has_apatite", has(&apatite))
        .save_as(out, &mod_id("fertilizer_apatite"))?;
    shaped(&fertilizer, 16)
        .define('#', &ash)
        .define('X', &apatite)
        .pattern("###")
        .pattern("#X#")
        .pattern("###")
        .unlocked_by("has_apatite", has(&apatite))
        .save_as(out, &mod_id("fertilizer_ash"))?;
    shaped(&humus, 8)
        .define('#', &dirt)
        .define('X', &compost)
        .pattern("###")
        .pattern("#X#")
        .pattern("###")
        .unlocked_by("has_compost", has(&compost))
        .save_as(out, &mod_id("humus_compost"))?;
    shaped(&humus, 8)
        .define('#', &dirt)
        .define('X', &fertilizer)
        .pattern("###")
        .pattern("#X#")
        .pattern("###")
        .unlocked_by("has_fertilizer", has(&fertilizer))
        .save_as(out, &mod_id("humus_fertilizer"))?;

    let bog_earth = c.item("bog_earth")?;
    let water = filled_nbt("minecraft:water");
    let containers = [
        ("bucket", 6, Ingredient::stack(&c.vanilla("water_bucket")?, None)),
        ("can", 8, Ingredient::stack(&c.item("can")?, Some(water.clone()))),
        ("wax_capsule", 8, Ingredient::stack(&c.item("capsule")?, Some(water.clone()))),
        ("refractory", 8, Ingredient::stack(&c.item("refractory")?, Some(water))),
    ];
    for (name, count, container) in containers {
        shaped(&bog_earth, count)
            .define('#', &dirt)
            .define('X', container)
            .define('Y', &sand)
            .pattern("#Y#")
            .pattern("YXY")
            .pattern("#Y#")
            .unlocked_by("has_sand", has(&sand))
            .save_as(out, &mod_id(&format!("bog_earth_{name}")))?;
    }
    Ok(())
}
