use crate::error::GenError;
use crate::id::ResourceLocation;
use crate::output::RecipeOutput;
use crate::registry::ContentRegistry;
use crate::serialize::{advancement_id, advancement_json};
use crate::sink::{RecipeSink, SinkError};
use serde_json::Value;

/// A source of recipes: one rule table built against a content registry.
///
/// Providers hold no state across passes; building twice against the same
/// registry must produce the same records in the same order.
pub trait RecipeProvider {
    /// Human-readable name, used in logs.
    fn name(&self) -> &str;

    /// Namespace the provider's identities are expected to live in.
    fn namespace(&self) -> Option<&str> {
        None
    }

    /// Build every recipe into `out`.
    fn build_recipes(
        &self,
        registry: &ContentRegistry,
        out: &mut RecipeOutput,
    ) -> Result<(), GenError>;

    /// Hook called with each recipe's unlock advancement. Forwards to the sink.
    fn save_advancement(
        &self,
        sink: &mut dyn RecipeSink,
        id: &ResourceLocation,
        advancement: &Value,
    ) -> Result<(), SinkError> {
        sink.accept_advancement(id, advancement)
    }
}

/// What a pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub provider: String,
    pub recipes: usize,
    pub conditional: usize,
    pub advancements: usize,
    /// Identities outside the provider's namespace.
    pub foreign: usize,
}

/// Run one generation pass: build everything, then stream it to `sink`.
///
/// Nothing reaches the sink unless every record was built successfully.
pub fn run_provider<P: RecipeProvider + ?Sized>(
    provider: &P,
    registry: &ContentRegistry,
    sink: &mut dyn RecipeSink,
) -> Result<RunSummary, GenError> {
    let mut out = RecipeOutput::new();
    if let Err(e) = provider.build_recipes(registry, &mut out) {
        tracing::error!(provider = provider.name(), error = %e, "recipe generation failed");
        return Err(e);
    }

    let mut summary = RunSummary {
        provider: provider.name().to_string(),
        ..RunSummary::default()
    };

    for spec in out.iter() {
        if let Some(ns) = provider.namespace()
            && spec.id.namespace() != ns
        {
            tracing::warn!(id = %spec.id, expected = ns, "recipe identity outside provider namespace");
            summary.foreign += 1;
        }

        sink.accept(spec)?;
        summary.recipes += 1;
        if spec.is_conditional() {
            summary.conditional += 1;
        }

        if let Some(advancement) = advancement_json(spec) {
            provider.save_advancement(sink, &advancement_id(&spec.id), &advancement)?;
            summary.advancements += 1;
        }
    }
    sink.finish()?;

    tracing::info!(
        provider = provider.name(),
        recipes = summary.recipes,
        conditional = summary.conditional,
        "recipe generation complete"
    );
    Ok(summary)
}
