//! Unlock criteria: which owned item makes a recipe visible to a player.

use crate::id::ResourceLocation;
use crate::registry::{ItemRef, TagRef};
use serde_json::{Value, json};

/// What the player must hold for a criterion to fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemPredicate {
    Item(ResourceLocation),
    Tag(ResourceLocation),
}

impl From<&ItemRef> for ItemPredicate {
    fn from(item: &ItemRef) -> Self {
        ItemPredicate::Item(item.id().clone())
    }
}

impl From<ItemRef> for ItemPredicate {
    fn from(item: ItemRef) -> Self {
        ItemPredicate::Item(item.id().clone())
    }
}

impl From<&TagRef> for ItemPredicate {
    fn from(tag: &TagRef) -> Self {
        ItemPredicate::Tag(tag.id().clone())
    }
}

impl From<TagRef> for ItemPredicate {
    fn from(tag: TagRef) -> Self {
        ItemPredicate::Tag(tag.id().clone())
    }
}

/// Fires when the inventory contains the predicate's item or any tag member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trigger {
    pub predicate: ItemPredicate,
}

/// `has(x)`: an inventory-changed trigger on `x`.
pub fn has(predicate: impl Into<ItemPredicate>) -> Trigger {
    Trigger {
        predicate: predicate.into(),
    }
}

impl Trigger {
    /// Host criterion JSON.
    pub fn to_json(&self) -> Value {
        let item = match &self.predicate {
            ItemPredicate::Item(id) => json!({ "items": [id.to_string()] }),
            ItemPredicate::Tag(id) => json!({ "tag": id.to_string() }),
        };
        json!({
            "trigger": "minecraft:inventory_changed",
            "conditions": { "items": [item] },
        })
    }
}

/// A named unlock criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    pub name: String,
    pub trigger: Trigger,
}
