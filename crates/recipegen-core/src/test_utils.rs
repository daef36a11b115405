//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::builder::{RecipeBuilder, ShapedRecipeBuilder, shaped};
use crate::error::GenError;
use crate::id::ResourceLocation;
use crate::output::RecipeOutput;
use crate::provider::RecipeProvider;
use crate::recipe::RecipeSpec;
use crate::registry::{ContentRegistry, RegistryBuilder};
use crate::unlock::{Criterion, has};

// ===========================================================================
// Registries
// ===========================================================================

/// Bronze ingots, wooden rods, the pickaxe they make, and an empty stone
/// gear tag.
pub fn bronze_registry() -> ContentRegistry {
    let mut b = RegistryBuilder::new();
    b.register_item("forestry:ingot_bronze").unwrap();
    b.register_item("forestry:bronze_pickaxe").unwrap();
    b.register_item("minecraft:stick").unwrap();
    b.register_tag("forge:ingots/bronze", &["forestry:ingot_bronze"])
        .unwrap();
    b.register_tag("forge:rods/wooden", &["minecraft:stick"])
        .unwrap();
    b.register_tag("forge:gears/stone", &[]).unwrap();
    b.build().unwrap()
}

pub fn empty_registry() -> ContentRegistry {
    RegistryBuilder::new().build().unwrap()
}

// ===========================================================================
// Recipes
// ===========================================================================

pub fn has_bronze(reg: &ContentRegistry) -> Criterion {
    Criterion {
        name: "has_bronze".into(),
        trigger: has(&reg.tag("forge:ingots/bronze").unwrap()),
    }
}

/// The bronze pickaxe: `###` over two sticks.
pub fn pickaxe_builder(reg: &ContentRegistry) -> ShapedRecipeBuilder {
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

pub fn pickaxe_spec(reg: &ContentRegistry) -> RecipeSpec {
    let builder = pickaxe_builder(reg);
    let id = builder.default_id();
    builder.build(&id).unwrap()
}

/// Parse an identity, panicking on malformed input.
pub fn rl(id: &str) -> ResourceLocation {
    ResourceLocation::parse(id).unwrap()
}

// ===========================================================================
// Providers
// ===========================================================================

/// A provider with a single shaped sub-builder: the bronze pickaxe.
/// Looks everything up through the registry, so it fails on an empty one.
pub struct PickaxeProvider;

impl RecipeProvider for PickaxeProvider {
    fn name(&self) -> &str {
        "Pickaxe"
    }

    fn namespace(&self) -> Option<&str> {
        Some("forestry")
    }

    fn build_recipes(
        &self,
        registry: &ContentRegistry,
        out: &mut RecipeOutput,
    ) -> Result<(), GenError> {
        let bronze = registry.tag("forge:ingots/bronze")?;
        let stick = registry.tag("forge:rods/wooden")?;
        let pickaxe = registry.item("forestry:bronze_pickaxe")?;
        shaped(&pickaxe, 1)
            .define('#', &bronze)
            .define('X', &stick)
            .pattern("###")
            .pattern(" X ")
            .pattern(" X ")
            .unlocked_by("has_bronze", has(&bronze))
            .save(out)
    }
}
