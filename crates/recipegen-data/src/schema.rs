//! Serde data file structs for the content registry.
//!
//! Items are listed per namespace; tags carry their member items. Both are
//! deserialized from RON, JSON, or TOML and then registered by the loader.

use serde::Deserialize;

// ===========================================================================
// Items
// ===========================================================================

/// A namespace and the item paths registered under it.
///
/// An entry that already contains a `:` is taken as a full identifier.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemGroupData {
    pub namespace: String,
    pub items: Vec<String>,
}

impl ItemGroupData {
    /// Full identifiers of every item in the group, in file order.
    pub fn qualified(&self) -> impl Iterator<Item = String> + '_ {
        self.items.iter().map(|item| {
            if item.contains(':') {
                item.clone()
            } else {
                format!("{}:{item}", self.namespace)
            }
        })
    }
}

// ===========================================================================
// Tags
// ===========================================================================

/// A tag definition. Members must be registered items.
#[derive(Debug, Clone, Deserialize)]
pub struct TagData {
    pub name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

// ===========================================================================
// TOML wrappers
// ===========================================================================

/// TOML files need a top-level table.
#[derive(Debug, Clone, Deserialize)]
pub struct TomlItems {
    pub items: Vec<ItemGroupData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlTags {
    pub tags: Vec<TagData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_group_ron() {
        let ron_str = r#"(namespace: "forestry", items: ["ingot_bronze", "minecraft:stick"])"#;
        let group: ItemGroupData = ron::from_str(ron_str).unwrap();
        let ids: Vec<String> = group.qualified().collect();
        assert_eq!(ids, ["forestry:ingot_bronze", "minecraft:stick"]);
    }

    #[test]
    fn tag_members_default_to_empty() {
        let tag: TagData = serde_json::from_str(r#"{"name": "forge:gears/stone"}"#).unwrap();
        assert_eq!(tag.name, "forge:gears/stone");
        assert!(tag.members.is_empty());
    }

    #[test]
    fn toml_wrappers() {
        let toml_str = r#"
[[items]]
namespace = "forestry"
items = ["ingot_bronze", "bronze_pickaxe"]

[[items]]
namespace = "minecraft"
items = ["stick"]
"#;
        let wrapper: TomlItems = toml::from_str(toml_str).unwrap();
        assert_eq!(wrapper.items.len(), 2);
        assert_eq!(wrapper.items[1].namespace, "minecraft");

        let toml_str = r#"
[[tags]]
name = "forge:ingots/bronze"
members = ["forestry:ingot_bronze"]
"#;
        let wrapper: TomlTags = toml::from_str(toml_str).unwrap();
        assert_eq!(wrapper.tags[0].members, ["forestry:ingot_bronze"]);
    }
}
