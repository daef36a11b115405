//! Recipegen Core -- the recipe data-generation pipeline.
//!
//! Structured recipe specifications are built against an immutable content
//! registry, validated at construction, staged, and then streamed to an
//! output sink that writes host recipe files or an in-memory table.
//!
//! # Pass Pipeline
//!
//! Each call to [`provider::run_provider`] performs one pass:
//!
//! 1. **Build** -- The provider's sub-builders dereference content through the
//!    [`registry::ContentRegistry`] and save recipes into a
//!    [`output::RecipeOutput`]. Any failure aborts the pass here.
//! 2. **Stream** -- Every staged record goes to the [`sink::RecipeSink`], in
//!    staging order, together with its unlock advancement.
//! 3. **Finish** -- The sink is told the pass is complete.
//!
//! # Builder Pattern
//!
//! ```rust,ignore
//! shaped(&registry.item("forestry:bronze_pickaxe")?, 1)
//!     .define('#', &registry.tag("forge:ingots/bronze")?)
//!     .define('X', &registry.tag("forge:rods/wooden")?)
//!     .pattern("###")
//!     .pattern(" X ")
//!     .pattern(" X ")
//!     .unlocked_by("has_bronze", has(&bronze))
//!     .save(out)?;
//! ```
//!
//! # Key Types
//!
//! - [`id::ResourceLocation`] -- Namespaced identifier (`namespace:path`).
//! - [`registry::ContentRegistry`] -- Symbolic name -> item/tag reference.
//! - [`recipe::RecipeSpec`] -- One recipe record: shaped, shapeless,
//!   smelting, blasting, or conditional.
//! - [`builder`] -- Fluent builders with validation on save.
//! - [`condition::Condition`] -- Load-time predicates for conditional recipes.
//! - [`table::RecipeTable`] -- Identity-keyed table with a bitcode snapshot.

pub mod builder;
pub mod condition;
pub mod error;
pub mod id;
pub mod ingredient;
pub mod output;
pub mod provider;
pub mod recipe;
pub mod registry;
pub mod serialize;
pub mod sink;
pub mod table;
pub mod unlock;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
