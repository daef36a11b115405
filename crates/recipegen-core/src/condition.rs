//! Load-time predicates for conditional recipes.
//!
//! Conditions are evaluated by the consumer of the generated data, not by
//! the generator. [`Condition::evaluate`] exists so that consumers (and
//! tests) can resolve a conditional recipe against a known environment.

use crate::id::ResourceLocation;
use crate::registry::TagRef;
use serde_json::{Value, json};

/// Environment queried when a condition is evaluated.
pub trait ConditionContext {
    /// True for tags with no members, and for tags that do not exist.
    fn tag_is_empty(&self, tag: &ResourceLocation) -> bool;
    fn mod_loaded(&self, modid: &str) -> bool;
}

/// A predicate over the loading environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// Unconditionally true. Used as the catch-all fallback.
    Always,
    TagEmpty(ResourceLocation),
    ModLoaded(String),
    Not(Box<Condition>),
    And(Vec<Condition>),
    Or(Vec<Condition>),
}

impl Condition {
    /// Holds when `tag` has no members at load time.
    pub fn tag_empty(tag: &TagRef) -> Self {
        Condition::TagEmpty(tag.id().clone())
    }

    /// Holds when `tag` has at least one member.
    pub fn tag_present(tag: &TagRef) -> Self {
        Condition::not(Condition::tag_empty(tag))
    }

    /// Negate `inner`.
    pub fn not(inner: Condition) -> Self {
        Condition::Not(Box::new(inner))
    }

    /// Only [`Condition::Always`] counts; `Or([Always])` does not.
    pub fn is_unconditional(&self) -> bool {
        matches!(self, Condition::Always)
    }

    /// Resolve against `ctx`. Empty `And` holds; empty `Or` does not.
    pub fn evaluate<C: ConditionContext + ?Sized>(&self, ctx: &C) -> bool {
        match self {
            Condition::Always => true,
            Condition::TagEmpty(tag) => ctx.tag_is_empty(tag),
            Condition::ModLoaded(modid) => ctx.mod_loaded(modid),
            Condition::Not(inner) => !inner.evaluate(ctx),
            Condition::And(all) => all.iter().all(|c| c.evaluate(ctx)),
            Condition::Or(any) => any.iter().any(|c| c.evaluate(ctx)),
        }
    }

    /// Forge condition JSON.
    pub fn to_json(&self) -> Value {
        match self {
            Condition::Always => json!({ "type": "forge:true" }),
            Condition::TagEmpty(tag) => json!({ "type": "forge:tag_empty", "tag": tag.to_string() }),
            Condition::ModLoaded(modid) => json!({ "type": "forge:mod_loaded", "modid": modid }),
            Condition::Not(inner) => json!({ "type": "forge:not", "value": inner.to_json() }),
            Condition::And(all) => json!({
                "type": "forge:and",
                "values": all.iter().map(Condition::to_json).collect::<Vec<_>>(),
            }),
            Condition::Or(any) => json!({
                "type": "forge:or",
                "values": any.iter().map(Condition::to_json).collect::<Vec<_>>(),
            }),
        }
    }
}
