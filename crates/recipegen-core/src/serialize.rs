//! Host JSON encoding of recipes and their unlock advancements.
//!
//! Key order follows the host's own data generator so that regenerated
//! files diff cleanly against hand-maintained ones.

use crate::id::ResourceLocation;
use crate::recipe::{Alternative, RecipeKind, RecipeSpec};
use serde_json::{Map, Value, json};

/// Parent of every recipe unlock advancement.
pub const ADVANCEMENT_ROOT: &str = "minecraft:recipes/root";

/// Criterion added to every advancement so owning the recipe also completes it.
pub const HAS_THE_RECIPE: &str = "has_the_recipe";

fn kind_json(kind: &RecipeKind, group: Option<&str>) -> Value {
    let mut obj = Map::new();
    obj.insert("type".into(), json!(kind.type_name()));
    if let Some(group) = group {
        obj.insert("group".into(), json!(group));
    }

    match kind {
        RecipeKind::Shaped(r) => {
            obj.insert("pattern".into(), json!(r.pattern));
            let key: Map<String, Value> = r
                .key
                .iter()
                .map(|(symbol, ingredient)| (symbol.to_string(), ingredient.to_json()))
                .collect();
            obj.insert("key".into(), Value::Object(key));
            obj.insert("result".into(), r.result.to_json());
        }
        RecipeKind::Shapeless(r) => {
            let ingredients: Vec<Value> = r.ingredients.iter().map(|i| i.to_json()).collect();
            obj.insert("ingredients".into(), Value::Array(ingredients));
            obj.insert("result".into(), r.result.to_json());
        }
        RecipeKind::Smelting(r) | RecipeKind::Blasting(r) => {
            obj.insert("ingredient".into(), r.ingredient.to_json());
            obj.insert("result".into(), json!(r.result.id().to_string()));
            obj.insert("experience".into(), json!(r.experience));
            obj.insert("cookingtime".into(), json!(r.cooking_time));
        }
        RecipeKind::Conditional(c) => {
            let recipes: Vec<Value> = c.alternatives.iter().map(alternative_json).collect();
            obj.insert("recipes".into(), Value::Array(recipes));
        }
    }

    Value::Object(obj)
}

fn alternative_json(alt: &Alternative) -> Value {
    json!({
        "conditions": [alt.condition.to_json()],
        "recipe": kind_json(&alt.kind, alt.group.as_deref()),
    })
}

/// The recipe file for one record.
pub fn recipe_json(spec: &RecipeSpec) -> Value {
    kind_json(&spec.kind, spec.group.as_deref())
}

/// Identity of a recipe's unlock advancement: `<ns>:recipes/<path>`.
pub fn advancement_id(recipe: &ResourceLocation) -> ResourceLocation {
    // namespace and path were already validated on the recipe id
    ResourceLocation::parse(&format!(
        "{}:recipes/{}",
        recipe.namespace(),
        recipe.path()
    ))
    .unwrap_or_else(|_| recipe.clone())
}

/// The unlock advancement for a record, or `None` when it carries no
/// criteria (conditional recipes).
pub fn advancement_json(spec: &RecipeSpec) -> Option<Value> {
    if spec.unlock.is_empty() {
        return None;
    }
    let id = spec.id.to_string();

    let mut criteria = Map::new();
    for criterion in &spec.unlock {
        criteria.insert(criterion.name.clone(), criterion.trigger.to_json());
    }
    criteria.insert(
        HAS_THE_RECIPE.into(),
        json!({
            "trigger": "minecraft:recipe_unlocked",
            "conditions": { "recipe": id },
        }),
    );

    let mut names: Vec<&str> = spec.unlock.iter().map(|c| c.name.as_str()).collect();
    names.push(HAS_THE_RECIPE);

    Some(json!({
        "parent": ADVANCEMENT_ROOT,
        "rewards": { "recipes": [id] },
        "criteria": criteria,
        "requirements": [names],
    }))
}

/// Pretty JSON with a trailing newline, the host file layout.
pub fn to_pretty_bytes(value: &Value) -> Result<Vec<u8>, serde_json::Error> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Compact encoding used for comparisons and the recipe table.
pub fn recipe_bytes(value: &Value) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{RecipeBuilder, conditional, shapeless, smelting};
    use crate::condition::Condition;
    use crate::output::RecipeOutput;
    use crate::test_utils::*;
    use crate::unlock::has;

    #[test]
    fn shaped_json_layout() {
        let reg = bronze_registry();
        let json = recipe_json(&pickaxe_spec(&reg));
        assert_eq!(
            json,
            json!({
                "type": "minecraft:crafting_shaped",
                "pattern": ["###", " X ", " X "],
                "key": {
                    "#": { "tag": "forge:ingots/bronze" },
                    "X": { "tag": "forge:rods/wooden" },
                },
                "result": { "item": "forestry:bronze_pickaxe" },
            })
        );
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["type", "pattern", "key", "result"]);
    }

    #[test]
    fn shapeless_json_with_group_and_count() {
        let reg = bronze_registry();
        let ingot = reg.item("forestry:ingot_bronze").unwrap();
        let stick = reg.item("minecraft:stick").unwrap();
        let spec = shapeless(&stick, 4)
            .requires(&ingot)
            .group("sticks")
            .unlocked_by("has_ingot", has(&ingot))
            .build(&ResourceLocation::parse("forestry:sticks").unwrap())
            .unwrap();
        let json = recipe_json(&spec);
        assert_eq!(json["type"], "minecraft:crafting_shapeless");
        assert_eq!(json["group"], "sticks");
        assert_eq!(json["ingredients"][0]["item"], "forestry:ingot_bronze");
        assert_eq!(json["result"]["count"], 4);
    }

    #[test]
    fn smelting_json() {
        let reg = bronze_registry();
        let pick = reg.item("forestry:bronze_pickaxe").unwrap();
        let ingot = reg.item("forestry:ingot_bronze").unwrap();
        let spec = smelting(&pick, &ingot, 0.35, 200)
            .unlocked_by("has_pickaxe", has(&pick))
            .build(&ResourceLocation::parse("forestry:ingot_bronze_from_smelting").unwrap())
            .unwrap();
        let json = recipe_json(&spec);
        assert_eq!(json["result"], "forestry:ingot_bronze");
        assert_eq!(json["experience"], 0.35);
        assert_eq!(json["cookingtime"], 200);
    }

    #[test]
    fn conditional_json() {
        let reg = bronze_registry();
        let gears = reg.tag("forge:gears/stone").unwrap();
        let mut out = RecipeOutput::new();
        conditional()
            .add_condition(Condition::tag_present(&gears))
            .add_recipe(pickaxe_builder(&reg))
            .fallback(pickaxe_builder(&reg))
            .save_as(&mut out, "forestry:bronze_pickaxe")
            .unwrap();
        let json = recipe_json(&out.recipes()[0]);
        assert_eq!(json["type"], "forge:conditional");
        let recipes = json["recipes"].as_array().unwrap();
        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[0]["conditions"][0]["type"], "forge:not");
        assert_eq!(recipes[1]["conditions"][0]["type"], "forge:true");
        assert_eq!(recipes[1]["recipe"]["type"], "minecraft:crafting_shaped");
    }

    #[test]
    fn advancement_for_pickaxe() {
        let reg = bronze_registry();
        let spec = pickaxe_spec(&reg);
        let adv = advancement_json(&spec).unwrap();
        assert_eq!(adv["parent"], ADVANCEMENT_ROOT);
        assert_eq!(adv["rewards"]["recipes"][0], "forestry:bronze_pickaxe");
        assert_eq!(
            adv["requirements"],
            json!([["has_bronze", HAS_THE_RECIPE]])
        );
        assert_eq!(
            adv["criteria"][HAS_THE_RECIPE]["conditions"]["recipe"],
            "forestry:bronze_pickaxe"
        );
        assert_eq!(
            advancement_id(&spec.id).to_string(),
            "forestry:recipes/bronze_pickaxe"
        );
    }

    #[test]
    fn pretty_bytes_end_with_newline() {
        let bytes = to_pretty_bytes(&json!({ "a": 1 })).unwrap();
        assert_eq!(bytes.last(), Some(&b'\n'));
        assert!(String::from_utf8(bytes).unwrap().contains("  \"a\": 1"));
    }
}
