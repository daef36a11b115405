use crate::id::ResourceLocation;
use crate::registry::{ItemRef, TagRef};
use serde_json::{Map, Value, json};

/// Something a recipe slot accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Ingredient {
    Item(ResourceLocation),
    Tag(ResourceLocation),
    /// Any of the listed ingredients (a merged ingredient).
    AnyOf(Vec<Ingredient>),
    /// A specific stack, optionally carrying NBT (filled containers, configured boards).
    Stack {
        item: ResourceLocation,
        count: u32,
        nbt: Option<String>,
    },
}

impl Ingredient {
    /// Merge several ingredients into one slot. Nested merges are flattened.
    pub fn any_of<I>(parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Ingredient>,
    {
        let mut flat = Vec::new();
        for part in parts {
            match part.into() {
                Ingredient::AnyOf(inner) => flat.extend(inner),
                other => flat.push(other),
            }
        }
        Ingredient::AnyOf(flat)
    }

    /// A single-item stack matched with its NBT, when given.
    pub fn stack(item: &ItemRef, nbt: Option<String>) -> Self {
        Ingredient::Stack {
            item: item.id().clone(),
            count: 1,
            nbt,
        }
    }

    /// Host ingredient JSON.
    pub fn to_json(&self) -> Value {
        match self {
            Ingredient::Item(id) => json!({ "item": id.to_string() }),
            Ingredient::Tag(id) => json!({ "tag": id.to_string() }),
            Ingredient::AnyOf(parts) => Value::Array(parts.iter().map(Ingredient::to_json).collect()),
            Ingredient::Stack { item, count, nbt } => {
                let mut obj = Map::new();
                obj.insert("type".into(), json!("forestry:complex"));
                obj.insert("item".into(), json!(item.to_string()));
                obj.insert("count".into(), json!(count));
                if let Some(nbt) = nbt {
                    obj.insert("nbt".into(), json!(nbt));
                }
                Value::Object(obj)
            }
        }
    }
}

impl From<ItemRef> for Ingredient {
    fn from(item: ItemRef) -> Self {
        Ingredient::Item(item.id().clone())
    }
}

impl From<&ItemRef> for Ingredient {
    fn from(item: &ItemRef) -> Self {
        Ingredient::Item(item.id().clone())
    }
}

impl From<TagRef> for Ingredient {
    fn from(tag: TagRef) -> Self {
        Ingredient::Tag(tag.id().clone())
    }
}

impl From<&TagRef> for Ingredient {
    fn from(tag: &TagRef) -> Self {
        Ingredient::Tag(tag.id().clone())
    }
}

impl From<&Ingredient> for Ingredient {
    fn from(ingredient: &Ingredient) -> Self {
        ingredient.clone()
    }
}

/// A recipe result: an item and how many are produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStack {
    pub item: ItemRef,
    pub count: u32,
}

impl ItemStack {
    /// A stack of `count` items.
    pub fn new(item: ItemRef, count: u32) -> Self {
        Self { item, count }
    }

    /// `{"item": .., "count": ..}`; count is omitted when it is 1.
    pub fn to_json(&self) -> Value {
        let mut obj = Map::new();
        obj.insert("item".into(), json!(self.item.id().to_string()));
        if self.count != 1 {
            obj.insert("count".into(), json!(self.count));
        }
        Value::Object(obj)
    }
}
