use crate::id::IdError;
use crate::registry::RegistryError;
use crate::sink::SinkError;
use crate::validation::PatternError;

/// Errors that abort a generation pass. All of them are authoring defects
/// caught at build time.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    /// A symbolic name was not found in the content registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A shaped grid and its symbol definitions disagree.
    #[error("malformed pattern in recipe '{id}': {source}")]
    MalformedPattern { id: String, source: PatternError },

    /// A recipe was saved without any way for the player to unlock it.
    #[error("no unlock criterion for recipe '{id}'")]
    MissingUnlockCriterion { id: String },

    /// A shapeless recipe with no ingredients or more than a grid can hold.
    #[error("shapeless recipe '{id}' has {count} ingredients, expected 1..=9")]
    InvalidShapeless { id: String, count: usize },

    /// A result stack of zero items.
    #[error("recipe '{id}' produces zero items")]
    ZeroCount { id: String },

    /// Conditional alternatives are not ordered or not exhaustive.
    #[error("conditional recipe '{id}': {reason}")]
    InvalidConditional { id: String, reason: String },

    #[error("invalid recipe identifier: {0}")]
    InvalidIdentifier(#[from] IdError),

    /// The sink rejected a record (duplicate identity, I/O).
    #[error(transparent)]
    Sink(#[from] SinkError),
}
