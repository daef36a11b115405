use crate::error::GenError;
use crate::id::ResourceLocation;
use crate::recipe::RecipeSpec;
use crate::sink::SinkError;
use std::collections::HashSet;

/// Staging area for one generation pass.
///
/// Builders save into a `RecipeOutput`; a sink only sees the records after
/// every domain has been built, so a failed pass leaves the sink untouched.
#[derive(Debug, Default)]
pub struct RecipeOutput {
    recipes: Vec<RecipeSpec>,
    ids: HashSet<ResourceLocation>,
}

impl RecipeOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a record. Identities must be unique within the pass.
    pub fn accept(&mut self, spec: RecipeSpec) -> Result<(), GenError> {
        if !self.ids.insert(spec.id.clone()) {
            return Err(SinkError::DuplicateIdentity {
                id: spec.id.to_string(),
            }
            .into());
        }
        self.recipes.push(spec);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Whether `id` is already staged.
    pub fn contains(&self, id: &ResourceLocation) -> bool {
        self.ids.contains(id)
    }

    /// Staged record by identity string; `None` for unknown or malformed ids.
    pub fn get(&self, id: &str) -> Option<&RecipeSpec> {
        let id = ResourceLocation::parse(id).ok()?;
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Records in staging order.
    pub fn recipes(&self) -> &[RecipeSpec] {
        &self.recipes
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecipeSpec> {
        self.recipes.iter()
    }
}
