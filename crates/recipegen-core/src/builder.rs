//! Fluent recipe builders.
//!
//! Each builder accumulates a recipe and checks it when it is saved:
//! unlock criteria present, result count non-zero, pattern and key in
//! agreement. A builder is consumed by its terminal `save`/`save_as`.

use crate::condition::Condition;
use crate::error::GenError;
use crate::id::ResourceLocation;
use crate::ingredient::{Ingredient, ItemStack};
use crate::output::RecipeOutput;
use crate::recipe::{
    Alternative, ConditionalRecipe, CookingRecipe, RecipeKind, RecipeSpec, ShapedRecipe,
    ShapelessRecipe,
};
use crate::registry::ItemRef;
use crate::unlock::{Criterion, Trigger};
use crate::validation::{
    MAX_SHAPELESS, PatternError, validate_alternatives, validate_pattern,
};
use std::collections::BTreeMap;

/// Default smelting time in ticks.
pub const SMELTING_TIME: u32 = 200;

/// Default blasting time in ticks.
pub const BLASTING_TIME: u32 = 100;

// ---------------------------------------------------------------------------
// Builder trait
// ---------------------------------------------------------------------------

/// A recipe under construction.
pub trait RecipeBuilder {
    /// Identity used by [`RecipeBuilder::save`]: the result item's id.
    fn default_id(&self) -> ResourceLocation;

    /// Validate and produce the record under `id`.
    fn build(&self, id: &ResourceLocation) -> Result<RecipeSpec, GenError>;

    /// Stage under the default identity.
    fn save(self, out: &mut RecipeOutput) -> Result<(), GenError>
    where
        Self: Sized,
    {
        let id = self.default_id();
        out.accept(self.build(&id)?)
    }

    /// Stage under an explicit identity. A bare path gets the default namespace.
    fn save_as(self, out: &mut RecipeOutput, id: &str) -> Result<(), GenError>
    where
        Self: Sized,
    {
        let id = ResourceLocation::parse(id)?;
        out.accept(self.build(&id)?)
    }
}

/// Shared state of the non-conditional builders.
#[derive(Debug, Clone, Default)]
struct Common {
    group: Option<String>,
    unlock: Vec<Criterion>,
}

impl Common {
    fn unlocked_by(&mut self, name: &str, trigger: Trigger) {
        match self.unlock.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.trigger = trigger,
            None => self.unlock.push(Criterion {
                name: name.to_string(),
                trigger,
            }),
        }
    }

    fn finish(&self, id: &ResourceLocation, kind: RecipeKind) -> Result<RecipeSpec, GenError> {
        if self.unlock.is_empty() {
            return Err(GenError::MissingUnlockCriterion { id: id.to_string() });
        }
        Ok(RecipeSpec {
            id: id.clone(),
            group: self.group.clone(),
            unlock: self.unlock.clone(),
            kind,
        })
    }
}

fn check_count(id: &ResourceLocation, count: u32) -> Result<(), GenError> {
    if count == 0 {
        return Err(GenError::ZeroCount { id: id.to_string() });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Shaped
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ShapedRecipeBuilder {
    result: ItemStack,
    rows: Vec<String>,
    key: BTreeMap<char, Ingredient>,
    redefined: Option<char>,
    common: Common,
}

/// Start a shaped recipe producing `count` of `result`.
pub fn shaped(result: &ItemRef, count: u32) -> ShapedRecipeBuilder {
    ShapedRecipeBuilder {
        result: ItemStack::new(result.clone(), count),
        rows: Vec::new(),
        key: BTreeMap::new(),
        redefined: None,
        common: Common::default(),
    }
}

impl ShapedRecipeBuilder {
    /// Bind a grid symbol to an ingredient. Defining a symbol twice is an error on save.
    pub fn define(mut self, symbol: char, ingredient: impl Into<Ingredient>) -> Self {
        if self.key.insert(symbol, ingredient.into()).is_some() && self.redefined.is_none() {
            self.redefined = Some(symbol);
        }
        self
    }

    /// Append one grid row, top to bottom.
    pub fn pattern(mut self, row: &str) -> Self {
        self.rows.push(row.to_string());
        self
    }

    /// Recipe-book group shared with related recipes.
    pub fn group(mut self, group: &str) -> Self {
        self.common.group = Some(group.to_string());
        self
    }

    /// Add a named unlock criterion; a repeated name replaces the earlier trigger.
    pub fn unlocked_by(mut self, name: &str, trigger: Trigger) -> Self {
        self.common.unlocked_by(name, trigger);
        self
    }
}

impl RecipeBuilder for ShapedRecipeBuilder {
    fn default_id(&self) -> ResourceLocation {
        self.result.item.id().clone()
    }

    fn build(&self, id: &ResourceLocation) -> Result<RecipeSpec, GenError> {
        check_count(id, self.result.count)?;
        let malformed = |source| GenError::MalformedPattern {
            id: id.to_string(),
            source,
        };
        if let Some(symbol) = self.redefined {
            return Err(malformed(PatternError::DuplicateSymbol(symbol)));
        }
        validate_pattern(&self.rows, &self.key).map_err(malformed)?;
        self.common.finish(
            id,
            RecipeKind::Shaped(ShapedRecipe {
                pattern: self.rows.clone(),
                key: self.key.clone(),
                result: self.result.clone(),
            }),
        )
    }
}

// ---------------------------------------------------------------------------
// Shapeless
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct ShapelessRecipeBuilder {
    result: ItemStack,
    ingredients: Vec<Ingredient>,
    common: Common,
}

/// Start a shapeless recipe producing `count` of `result`.
pub fn shapeless(result: &ItemRef, count: u32) -> ShapelessRecipeBuilder {
    ShapelessRecipeBuilder {
        result: ItemStack::new(result.clone(), count),
        ingredients: Vec::new(),
        common: Common::default(),
    }
}

impl ShapelessRecipeBuilder {
    /// Add one ingredient.
    pub fn requires(mut self, ingredient: impl Into<Ingredient>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Add `times` copies of one ingredient.
    pub fn requires_n(mut self, ingredient: impl Into<Ingredient>, times: usize) -> Self {
        let ingredient = ingredient.into();
        self.ingredients
            .extend(std::iter::repeat_n(ingredient, times));
        self
    }

    /// Recipe-book group shared with related recipes.
    pub fn group(mut self, group: &str) -> Self {
        self.common.group = Some(group.to_string());
        self
    }

    /// Add a named unlock criterion; a repeated name replaces the earlier trigger.
    pub fn unlocked_by(mut self, name: &str, trigger: Trigger) -> Self {
        self.common.unlocked_by(name, trigger);
        self
    }
}

impl RecipeBuilder for ShapelessRecipeBuilder {
    fn default_id(&self) -> ResourceLocation {
        self.result.item.id().clone()
    }

    fn build(&self, id: &ResourceLocation) -> Result<RecipeSpec, GenError> {
        check_count(id, self.result.count)?;
        let count = self.ingredients.len();
        if count == 0 || count > MAX_SHAPELESS {
            return Err(GenError::InvalidShapeless {
                id: id.to_string(),
                count,
            });
        }
        self.common.finish(
            id,
            RecipeKind::Shapeless(ShapelessRecipe {
                ingredients: self.ingredients.clone(),
                result: self.result.clone(),
            }),
        )
    }
}

// ---------------------------------------------------------------------------
// Smelting / blasting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Furnace {
    Smelting,
    Blasting,
}

#[derive(Debug, Clone)]
pub struct CookingRecipeBuilder {
    furnace: Furnace,
    recipe: CookingRecipe,
    common: Common,
}

fn cooking(
    furnace: Furnace,
    ingredient: impl Into<Ingredient>,
    result: &ItemRef,
    experience: f64,
    cooking_time: u32,
) -> CookingRecipeBuilder {
    CookingRecipeBuilder {
        furnace,
        recipe: CookingRecipe {
            ingredient: ingredient.into(),
            result: result.clone(),
            experience,
            cooking_time,
        },
        common: Common::default(),
    }
}

/// Start a furnace recipe.
pub fn smelting(
    ingredient: impl Into<Ingredient>,
    result: &ItemRef,
    experience: f64,
    cooking_time: u32,
) -> CookingRecipeBuilder {
    cooking(Furnace::Smelting, ingredient, result, experience, cooking_time)
}

/// Start a blast furnace recipe.
pub fn blasting(
    ingredient: impl Into<Ingredient>,
    result: &ItemRef,
    experience: f64,
    cooking_time: u32,
) -> CookingRecipeBuilder {
    cooking(Furnace::Blasting, ingredient, result, experience, cooking_time)
}

impl CookingRecipeBuilder {
    /// Recipe-book group shared with related recipes.
    pub fn group(mut self, group: &str) -> Self {
        self.common.group = Some(group.to_string());
        self
    }

    /// Add a named unlock criterion; a repeated name replaces the earlier trigger.
    pub fn unlocked_by(mut self, name: &str, trigger: Trigger) -> Self {
        self.common.unlocked_by(name, trigger);
        self
    }
}

impl RecipeBuilder for CookingRecipeBuilder {
    fn default_id(&self) -> ResourceLocation {
        self.recipe.result.id().clone()
    }

    fn build(&self, id: &ResourceLocation) -> Result<RecipeSpec, GenError> {
        let kind = match self.furnace {
            Furnace::Smelting => RecipeKind::Smelting(self.recipe.clone()),
            Furnace::Blasting => RecipeKind::Blasting(self.recipe.clone()),
        };
        self.common.finish(id, kind)
    }
}

// ---------------------------------------------------------------------------
// Conditional
// ---------------------------------------------------------------------------

/// Ordered alternatives, each guarded by the conditions added before it.
/// Saved only under an explicit identity.
#[derive(Default)]
pub struct ConditionalRecipeBuilder {
    pending: Vec<Condition>,
    alternatives: Vec<(Condition, Box<dyn RecipeBuilder>)>,
    dangling: bool,
}

/// Start a conditional recipe.
pub fn conditional() -> ConditionalRecipeBuilder {
    ConditionalRecipeBuilder::default()
}

impl ConditionalRecipeBuilder {
    /// Guard the next recipe. Several conditions before one recipe must all hold.
    pub fn add_condition(mut self, condition: Condition) -> Self {
        self.pending.push(condition);
        self
    }

    /// Add an alternative guarded by the conditions added since the last one.
    pub fn add_recipe(mut self, recipe: impl RecipeBuilder + 'static) -> Self {
        let condition = match self.pending.len() {
            0 => {
                self.dangling = true;
                Condition::Always
            }
            1 => self.pending.remove(0),
            _ => Condition::And(std::mem::take(&mut self.pending)),
        };
        self.alternatives.push((condition, Box::new(recipe)));
        self
    }

    /// Append the unconditional last alternative.
    pub fn fallback(self, recipe: impl RecipeBuilder + 'static) -> Self {
        self.add_condition(Condition::Always).add_recipe(recipe)
    }

    /// Build every alternative under `id` and check their ordering.
    pub fn build(&self, id: &ResourceLocation) -> Result<RecipeSpec, GenError> {
        let invalid = |reason: &str| GenError::InvalidConditional {
            id: id.to_string(),
            reason: reason.to_string(),
        };
        if self.dangling {
            return Err(invalid("recipe added without a condition"));
        }
        if !self.pending.is_empty() {
            return Err(invalid("condition added without a recipe"));
        }

        let mut alternatives = Vec::with_capacity(self.alternatives.len());
        for (condition, recipe) in &self.alternatives {
            let spec = recipe.build(id)?;
            alternatives.push(Alternative {
                condition: condition.clone(),
                group: spec.group,
                kind: spec.kind,
            });
        }
        validate_alternatives(&alternatives).map_err(|reason| invalid(&reason))?;

        Ok(RecipeSpec {
            id: id.clone(),
            group: None,
            unlock: Vec::new(),
            kind: RecipeKind::Conditional(ConditionalRecipe { alternatives }),
        })
    }

    /// Stage under `id`. A bare path gets the default namespace.
    pub fn save_as(self, out: &mut RecipeOutput, id: &str) -> Result<(), GenError> {
        let id = ResourceLocation::parse(id)?;
        out.accept(self.build(&id)?)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ConditionContext;
    use crate::test_utils::*;
    use crate::unlock::has;

    fn pickaxe(reg: &crate::registry::ContentRegistry) -> ShapedRecipeBuilder {
        let bronze = reg.tag("forge:ingots/bronze").unwrap();
        let stick = reg.tag("forge:rods/wooden").unwrap();
        shaped(&reg.item("forestry:bronze_pickaxe").unwrap(), 1)
            .define('#', &bronze)
            .define('X', &stick)
            .pattern("###")
            .pattern(" X ")
            .pattern(" X ")
            .unlocked_by("has_bronze", has(&bronze))
    }

    #[test]
    fn shaped_saves_under_result_id() {
        let reg = bronze_registry();
        let mut out = RecipeOutput::new();
        pickaxe(&reg).save(&mut out).unwrap();
        assert_eq!(out.len(), 1);
        let spec = &out.recipes()[0];
        assert_eq!(spec.id.to_string(), "forestry:bronze_pickaxe");
        match &spec.kind {
            RecipeKind::Shaped(s) => {
                assert_eq!(s.pattern, vec!["###", " X ", " X "]);
                assert_eq!(s.key.len(), 2);
                assert_eq!(s.result.count, 1);
            }
            other => panic!("expected shaped, got {other:?}"),
        }
    }

    #[test]
    fn save_as_bare_path_uses_default_namespace() {
        let reg = bronze_registry();
        let mut out = RecipeOutput::new();
        pickaxe(&reg).save_as(&mut out, "cobweb_from_wisp").unwrap();
        assert_eq!(out.recipes()[0].id.to_string(), "minecraft:cobweb_from_wisp");
    }

    #[test]
    fn shaped_without_unlock_fails() {
        let reg = bronze_registry();
        let bronze = reg.tag("forge:ingots/bronze").unwrap();
        let err = shaped(&reg.item("forestry:bronze_pickaxe").unwrap(), 1)
            .define('#', &bronze)
            .pattern("#")
            .build(&ResourceLocation::parse("forestry:x").unwrap())
            .unwrap_err();
        assert!(matches!(err, GenError::MissingUnlockCriterion { .. }));
    }

    #[test]
    fn shaped_fourth_row_fails_and_stages_nothing() {
        let reg = bronze_registry();
        let mut out = RecipeOutput::new();
        let err = pickaxe(&reg).pattern("Y").save(&mut out).unwrap_err();
        assert!(matches!(
            err,
            GenError::MalformedPattern {
                source: PatternError::TooManyRows(4),
                ..
            }
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn shaped_redefined_symbol_fails() {
        let reg = bronze_registry();
        let stick = reg.tag("forge:rods/wooden").unwrap();
        let err = pickaxe(&reg)
            .define('X', &stick)
            .build(&ResourceLocation::parse("forestry:x").unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            GenError::MalformedPattern {
                source: PatternError::DuplicateSymbol('X'),
                ..
            }
        ));
    }

    #[test]
    fn zero_count_fails() {
        let reg = bronze_registry();
        let bronze = reg.tag("forge:ingots/bronze").unwrap();
        let err = shapeless(&reg.item("forestry:bronze_pickaxe").unwrap(), 0)
            .requires(&bronze)
            .unlocked_by("has_bronze", has(&bronze))
            .build(&ResourceLocation::parse("forestry:x").unwrap())
            .unwrap_err();
        assert!(matches!(err, GenError::ZeroCount { .. }));
    }

    #[test]
    fn shapeless_ingredient_limits() {
        let reg = bronze_registry();
        let bronze = reg.tag("forge:ingots/bronze").unwrap();
        let id = ResourceLocation::parse("forestry:x").unwrap();
        let base = || {
            shapeless(&reg.item("forestry:bronze_pickaxe").unwrap(), 1)
                .unlocked_by("has_bronze", has(&bronze))
        };
        assert!(matches!(
            base().build(&id),
            Err(GenError::InvalidShapeless { count: 0, .. })
        ));
        assert!(base().requires_n(&bronze, 9).build(&id).is_ok());
        assert!(matches!(
            base().requires_n(&bronze, 10).build(&id),
            Err(GenError::InvalidShapeless { count: 10, .. })
        ));
    }

    #[test]
    fn unlock_criterion_with_same_name_is_replaced() {
        let reg = bronze_registry();
        let bronze = reg.tag("forge:ingots/bronze").unwrap();
        let ingot = reg.item("forestry:ingot_bronze").unwrap();
        let spec = pickaxe(&reg)
            .unlocked_by("has_bronze", has(&ingot))
            .unlocked_by("has_stick", has(&reg.tag("forge:rods/wooden").unwrap()))
            .build(&ResourceLocation::parse("forestry:x").unwrap())
            .unwrap();
        assert_eq!(spec.unlock.len(), 2);
        assert_eq!(spec.unlock[0].name, "has_bronze");
        assert_eq!(spec.unlock[0].trigger, has(&ingot));
        assert_ne!(spec.unlock[0].trigger, has(&bronze));
    }

    #[test]
    fn cooking_kinds() {
        let reg = bronze_registry();
        let ingot = reg.item("forestry:ingot_bronze").unwrap();
        let pick = reg.item("forestry:bronze_pickaxe").unwrap();
        let smelt = smelting(&pick, &ingot, 0.5, SMELTING_TIME)
            .unlocked_by("has_pickaxe", has(&pick))
            .build(&ResourceLocation::parse("forestry:ingot_from_smelting").unwrap())
            .unwrap();
        let blast = blasting(&pick, &ingot, 0.5, BLASTING_TIME)
            .unlocked_by("has_pickaxe", has(&pick))
            .build(&ResourceLocation::parse("forestry:ingot_from_blasting").unwrap())
            .unwrap();
        assert_eq!(smelt.kind.type_name(), "minecraft:smelting");
        assert_eq!(blast.kind.type_name(), "minecraft:blasting");
        match blast.kind {
            RecipeKind::Blasting(c) => assert_eq!(c.cooking_time, 100),
            other => panic!("expected blasting, got {other:?}"),
        }
    }

    #[test]
    fn conditional_with_fallback() {
        let reg = bronze_registry();
        let gears = reg.tag("forge:gears/stone").unwrap();
        let mut out = RecipeOutput::new();
        conditional()
            .add_condition(Condition::tag_present(&gears))
            .add_recipe(pickaxe(&reg).group("with_gear"))
            .fallback(pickaxe(&reg))
            .save_as(&mut out, "forestry:bronze_pickaxe")
            .unwrap();

        let spec = &out.recipes()[0];
        let RecipeKind::Conditional(cond) = &spec.kind else {
            panic!("expected conditional");
        };
        assert_eq!(cond.alternatives.len(), 2);
        assert_eq!(cond.alternatives[0].group.as_deref(), Some("with_gear"));
        assert!(cond.alternatives[1].condition.is_unconditional());
        // stone gear tag is empty in the fixture, so the fallback is chosen
        assert!(reg.tag_is_empty(gears.id()));
        let chosen = cond.resolve(&reg).unwrap();
        assert!(chosen.condition.is_unconditional());
    }

    #[test]
    fn conditional_requires_fallback() {
        let reg = bronze_registry();
        let gears = reg.tag("forge:gears/stone").unwrap();
        let err = conditional()
            .add_condition(Condition::tag_present(&gears))
            .add_recipe(pickaxe(&reg))
            .build(&ResourceLocation::parse("forestry:x").unwrap())
            .unwrap_err();
        assert!(matches!(err, GenError::InvalidConditional { .. }));
    }

    #[test]
    fn conditional_rejects_dangling_parts() {
        let reg = bronze_registry();
        let id = ResourceLocation::parse("forestry:x").unwrap();
        let err = conditional().add_recipe(pickaxe(&reg)).build(&id).unwrap_err();
        assert!(format!("{err}").contains("without a condition"));
        let err = conditional()
            .fallback(pickaxe(&reg))
            .add_condition(Condition::Always)
            .build(&id)
            .unwrap_err();
        assert!(format!("{err}").contains("without a recipe"));
    }

    #[test]
    fn conditional_conditions_before_one_recipe_are_combined() {
        let reg = bronze_registry();
        let gears = reg.tag("forge:gears/stone").unwrap();
        let spec = conditional()
            .add_condition(Condition::tag_present(&gears))
            .add_condition(Condition::ModLoaded("forestry".into()))
            .add_recipe(pickaxe(&reg))
            .fallback(pickaxe(&reg))
            .build(&ResourceLocation::parse("forestry:x").unwrap())
            .unwrap();
        let RecipeKind::Conditional(cond) = spec.kind else {
            panic!("expected conditional");
        };
        assert!(matches!(&cond.alternatives[0].condition, Condition::And(v) if v.len() == 2));
    }

    #[test]
    fn conditional_inner_errors_propagate() {
        let reg = bronze_registry();
        let err = conditional()
            .fallback(pickaxe(&reg).pattern("Z"))
            .build(&ResourceLocation::parse("forestry:x").unwrap())
            .unwrap_err();
        assert!(matches!(err, GenError::MalformedPattern { .. }));
    }
}
