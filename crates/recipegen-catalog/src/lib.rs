//! The Forestry recipe catalog.
//!
//! [`ForestryRecipes`] is a [`RecipeProvider`] that builds every crafting,
//! smelting, and conditional recipe of the mod against a content registry.
//! Recipes are grouped by content domain; each domain lives in its own
//! module under [`domains`] and is invoked in a fixed order.
//!
//! # Usage
//!
//! ```rust,ignore
//! use recipegen_catalog::ForestryRecipes;
//! use recipegen_core::provider::run_provider;
//! use recipegen_core::sink::DirectorySink;
//!
//! let registry = recipegen_data::load_content("content/")?;
//! let mut sink = DirectorySink::new("generated/");
//! let summary = run_provider(&ForestryRecipes, &registry, &mut sink)?;
//! ```

pub mod content;
pub mod domains;
pub mod variants;

use recipegen_core::error::GenError;
use recipegen_core::id::ResourceLocation;
use recipegen_core::output::RecipeOutput;
use recipegen_core::provider::RecipeProvider;
use recipegen_core::registry::ContentRegistry;
use recipegen_core::sink::{RecipeSink, SinkError};
use serde_json::Value;

pub use content::Content;

/// Namespace of every identity the catalog mints.
pub const MOD_ID: &str = "forestry";

/// Full identity string under [`MOD_ID`].
pub fn mod_id(path: &str) -> String {
    format!("{MOD_ID}:{path}")
}

/// A content domain's sub-builder.
pub type DomainFn = fn(&Content<'_>, &mut RecipeOutput) -> Result<(), GenError>;

/// Domains in invocation order.
pub const DOMAINS: &[(&str, DomainFn)] = &[
    ("arboriculture", domains::arboriculture::register),
    ("apiculture", domains::apiculture::register),
    ("food", domains::food::register),
    ("backpacks", domains::backpacks::register),
    ("charcoal", domains::charcoal::register),
    ("climatology", domains::climatology::register),
    ("core", domains::core::register),
    ("books", domains::books::register),
    ("cultivation", domains::cultivation::register),
    ("database", domains::database::register),
    ("energy", domains::energy::register),
    ("factory", domains::factory::register),
    ("farming", domains::farming::register),
    ("fluids", domains::fluids::register),
    ("lepidopterology", domains::lepidopterology::register),
    ("mail", domains::mail::register),
    ("sorting", domains::sorting::register),
    ("worktable", domains::worktable::register),
];

/// The complete Forestry recipe provider.
///
/// Advancements are generated for every recipe but not written; the mod
/// ships its own advancement data.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForestryRecipes;

impl RecipeProvider for ForestryRecipes {
    fn name(&self) -> &str {
        "Forestry Recipes"
    }

    fn namespace(&self) -> Option<&str> {
        Some(MOD_ID)
    }

    fn build_recipes(
        &self,
        registry: &ContentRegistry,
        out: &mut RecipeOutput,
    ) -> Result<(), GenError> {
        let content = Content::new(registry);
        for (domain, register) in DOMAINS {
            let before = out.len();
            register(&content, out)?;
            tracing::debug!(domain, recipes = out.len() - before, "domain built");
        }
        Ok(())
    }

    fn save_advancement(
        &self,
        _sink: &mut dyn RecipeSink,
        _id: &ResourceLocation,
        _advancement: &Value,
    ) -> Result<(), SinkError> {
        Ok(())
    }
}
