use crate::condition::Condition;
use crate::id::ResourceLocation;
use crate::ingredient::{Ingredient, ItemStack};
use crate::registry::ItemRef;
use crate::unlock::Criterion;
use std::collections::BTreeMap;

/// A fully constructed recipe record, ready for a sink.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSpec {
    /// Globally unique identity; also names the output file.
    pub id: ResourceLocation,
    pub group: Option<String>,
    /// Empty only for conditional recipes, whose alternatives carry their own.
    pub unlock: Vec<Criterion>,
    pub kind: RecipeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecipeKind {
    Shaped(ShapedRecipe),
    Shapeless(ShapelessRecipe),
    Smelting(CookingRecipe),
    Blasting(CookingRecipe),
    Conditional(ConditionalRecipe),
}

/// A grid recipe. Every non-space symbol in `pattern` has an entry in `key`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapedRecipe {
    pub pattern: Vec<String>,
    pub key: BTreeMap<char, Ingredient>,
    pub result: ItemStack,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapelessRecipe {
    pub ingredients: Vec<Ingredient>,
    pub result: ItemStack,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CookingRecipe {
    pub ingredient: Ingredient,
    pub result: ItemRef,
    pub experience: f64,
    /// Ticks.
    pub cooking_time: u32,
}

/// Ordered alternatives; the consumer takes the first whose condition holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalRecipe {
    pub alternatives: Vec<Alternative>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alternative {
    pub condition: Condition,
    pub group: Option<String>,
    pub kind: RecipeKind,
}

impl RecipeKind {
    /// Host type name written into the recipe file.
    pub fn type_name(&self) -> &'static str {
        match self {
            RecipeKind::Shaped(_) => "minecraft:crafting_shaped",
            RecipeKind::Shapeless(_) => "minecraft:crafting_shapeless",
            RecipeKind::Smelting(_) => "minecraft:smelting",
            RecipeKind::Blasting(_) => "minecraft:blasting",
            RecipeKind::Conditional(_) => "forge:conditional",
        }
    }
}

impl ConditionalRecipe {
    /// Resolve against an environment: the first alternative whose condition holds.
    pub fn resolve<C: crate::condition::ConditionContext + ?Sized>(
        &self,
        ctx: &C,
    ) -> Option<&Alternative> {
        self.alternatives.iter().find(|a| a.condition.evaluate(ctx))
    }
}

impl RecipeSpec {
    /// Whether the record is a conditional wrapper.
    pub fn is_conditional(&self) -> bool {
        matches!(self.kind, RecipeKind::Conditional(_))
    }
}
