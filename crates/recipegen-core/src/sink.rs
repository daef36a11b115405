//! Output sinks: where finished records go.

use crate::id::ResourceLocation;
use crate::recipe::RecipeSpec;
use crate::serialize::{recipe_json, to_pretty_bytes};
use serde_json::Value;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("duplicate recipe identity '{id}'")]
    DuplicateIdentity { id: String },
    #[error("i/o error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives every record of a pass, one call per identity.
pub trait RecipeSink {
    fn accept(&mut self, recipe: &RecipeSpec) -> Result<(), SinkError>;

    /// Unlock advancements are optional; sinks that do not store them ignore them.
    fn accept_advancement(
        &mut self,
        _id: &ResourceLocation,
        _advancement: &Value,
    ) -> Result<(), SinkError> {
        Ok(())
    }

    /// Called once after the last record.
    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

fn claim(seen: &mut HashSet<ResourceLocation>, id: &ResourceLocation) -> Result<(), SinkError> {
    if seen.insert(id.clone()) {
        Ok(())
    } else {
        Err(SinkError::DuplicateIdentity { id: id.to_string() })
    }
}

// ---------------------------------------------------------------------------
// MemorySink
// ---------------------------------------------------------------------------

/// Keeps records in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    recipes: Vec<RecipeSpec>,
    advancements: Vec<(ResourceLocation, Value)>,
    seen: HashSet<ResourceLocation>,
    finished: bool,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in emission order.
    pub fn recipes(&self) -> &[RecipeSpec] {
        &self.recipes
    }

    /// Advancements in emission order.
    pub fn advancements(&self) -> &[(ResourceLocation, Value)] {
        &self.advancements
    }

    /// Whether `finish` was called.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeSink for MemorySink {
    fn accept(&mut self, recipe: &RecipeSpec) -> Result<(), SinkError> {
        claim(&mut self.seen, &recipe.id)?;
        self.recipes.push(recipe.clone());
        Ok(())
    }

    fn accept_advancement(
        &mut self,
        id: &ResourceLocation,
        advancement: &Value,
    ) -> Result<(), SinkError> {
        self.advancements.push((id.clone(), advancement.clone()));
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.finished = true;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// DirectorySink
// ---------------------------------------------------------------------------

/// Writes the host data-pack layout under a root directory:
/// `data/<ns>/recipes/<path>.json` and `data/<ns>/advancements/<path>.json`.
#[derive(Debug)]
pub struct DirectorySink {
    root: PathBuf,
    seen: HashSet<ResourceLocation>,
    files_written: usize,
}

impl DirectorySink {
    /// A sink writing under `root`. Directories are created on demand.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            seen: HashSet::new(),
            files_written: 0,
        }
    }

    /// Files written so far, recipes and advancements together.
    pub fn files_written(&self) -> usize {
        self.files_written
    }

    /// File a recipe identity is written to.
    pub fn recipe_path(&self, id: &ResourceLocation) -> PathBuf {
        self.data_path(id, "recipes")
    }

    /// File an advancement identity is written to.
    pub fn advancement_path(&self, id: &ResourceLocation) -> PathBuf {
        self.data_path(id, "advancements")
    }

    fn data_path(&self, id: &ResourceLocation, folder: &str) -> PathBuf {
        let mut path = self.root.join("data").join(id.namespace()).join(folder);
        // appended, not set_extension: a dotted path keeps its full name
        for segment in format!("{}.json", id.path()).split('/') {
            path.push(segment);
        }
        path
    }

    fn write(&mut self, path: &Path, value: &Value) -> Result<(), SinkError> {
        let io = |source| SinkError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io)?;
        }
        std::fs::write(path, to_pretty_bytes(value)?).map_err(io)?;
        self.files_written += 1;
        Ok(())
    }
}

impl RecipeSink for DirectorySink {
    fn accept(&mut self, recipe: &RecipeSpec) -> Result<(), SinkError> {
        claim(&mut self.seen, &recipe.id)?;
        let path = self.recipe_path(&recipe.id);
        self.write(&path, &recipe_json(recipe))
    }

    fn accept_advancement(
        &mut self,
        id: &ResourceLocation,
        advancement: &Value,
    ) -> Result<(), SinkError> {
        let path = self.advancement_path(id);
        self.write(&path, advancement)
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        tracing::debug!(
            root = %self.root.display(),
            files = self.files_written,
            "directory sink finished"
        );
        Ok(())
    }
}
