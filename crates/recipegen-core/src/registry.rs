use crate::condition::ConditionContext;
use crate::id::{IdError, ResourceLocation};
use std::collections::HashMap;
use std::fmt;

/// What kind of content a symbolic name is expected to resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Item,
    Tag,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Item => f.write_str("item"),
            ContentKind::Tag => f.write_str("tag"),
        }
    }
}

/// A resolved reference to a concrete item. Only handed out by a registry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemRef(ResourceLocation);

/// A resolved reference to a tag (a named group of interchangeable items).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TagRef(ResourceLocation);

impl ItemRef {
    /// The item's full identifier.
    pub fn id(&self) -> &ResourceLocation {
        &self.0
    }
}

impl TagRef {
    /// The tag's full identifier.
    pub fn id(&self) -> &ResourceLocation {
        &self.0
    }
}

/// A tag definition in the registry.
#[derive(Debug, Clone)]
pub struct TagDef {
    pub id: ResourceLocation,
    pub members: Vec<ResourceLocation>,
}

/// Builder for constructing an immutable [`ContentRegistry`].
/// Two-phase lifecycle: registration (items, tags, tag extension) -> build.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    items: Vec<ResourceLocation>,
    item_index: HashMap<ResourceLocation, usize>,
    tags: Vec<TagDef>,
    tag_index: HashMap<ResourceLocation, usize>,
}

impl RegistryBuilder {
    /// An empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an item. Returns its reference.
    pub fn register_item(&mut self, name: &str) -> Result<ItemRef, RegistryError> {
        let id = ResourceLocation::parse(name)?;
        if self.item_index.contains_key(&id) {
            return Err(RegistryError::DuplicateEntry {
                kind: ContentKind::Item,
                name: id.to_string(),
            });
        }
        self.item_index.insert(id.clone(), self.items.len());
        self.items.push(id.clone());
        Ok(ItemRef(id))
    }

    /// Register a tag with its initial members (item names).
    pub fn register_tag(&mut self, name: &str, members: &[&str]) -> Result<TagRef, RegistryError> {
        let id = ResourceLocation::parse(name)?;
        if self.tag_index.contains_key(&id) {
            return Err(RegistryError::DuplicateEntry {
                kind: ContentKind::Tag,
                name: id.to_string(),
            });
        }
        let members = members
            .iter()
            .map(|m| ResourceLocation::parse(m))
            .collect::<Result<Vec<_>, _>>()?;
        self.tag_index.insert(id.clone(), self.tags.len());
        self.tags.push(TagDef {
            id: id.clone(),
            members,
        });
        Ok(TagRef(id))
    }

    /// Append a member to an already registered tag.
    pub fn extend_tag(&mut self, name: &str, member: &str) -> Result<(), RegistryError> {
        let id = ResourceLocation::parse(name)?;
        let index = *self
            .tag_index
            .get(&id)
            .ok_or_else(|| RegistryError::MissingContentReference {
                kind: ContentKind::Tag,
                name: name.to_string(),
            })?;
        let member = ResourceLocation::parse(member)?;
        let tag = &mut self.tags[index];
        if !tag.members.contains(&member) {
            tag.members.push(member);
        }
        Ok(())
    }

    /// Items registered so far.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Tags registered so far.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }

    /// Finalize. Every tag member must be a registered item.
    pub fn build(self) -> Result<ContentRegistry, RegistryError> {
        for tag in &self.tags {
            for member in &tag.members {
                if !self.item_index.contains_key(member) {
                    return Err(RegistryError::UnknownTagMember {
                        tag: tag.id.to_string(),
                        member: member.to_string(),
                    });
                }
            }
        }

        Ok(ContentRegistry {
            items: self.items,
            item_index: self.item_index,
            tags: self.tags,
            tag_index: self.tag_index,
        })
    }
}

/// Immutable content registry. Frozen after build(); lookups never mutate.
#[derive(Debug)]
pub struct ContentRegistry {
    items: Vec<ResourceLocation>,
    item_index: HashMap<ResourceLocation, usize>,
    tags: Vec<TagDef>,
    tag_index: HashMap<ResourceLocation, usize>,
}

impl ContentRegistry {
    /// Dereference an item by symbolic name.
    pub fn item(&self, name: &str) -> Result<ItemRef, RegistryError> {
        self.lookup(name, ContentKind::Item, &self.item_index)
            .map(ItemRef)
    }

    /// Dereference a tag by symbolic name.
    pub fn tag(&self, name: &str) -> Result<TagRef, RegistryError> {
        self.lookup(name, ContentKind::Tag, &self.tag_index)
            .map(TagRef)
    }

    fn lookup(
        &self,
        name: &str,
        kind: ContentKind,
        index: &HashMap<ResourceLocation, usize>,
    ) -> Result<ResourceLocation, RegistryError> {
        let missing = || RegistryError::MissingContentReference {
            kind,
            name: name.to_string(),
        };
        let id = ResourceLocation::parse(name).map_err(|_| missing())?;
        if index.contains_key(&id) {
            Ok(id)
        } else {
            Err(missing())
        }
    }

    /// Whether `name` resolves to a registered item.
    pub fn contains_item(&self, name: &str) -> bool {
        self.item(name).is_ok()
    }

    /// Definition of a tag by identifier, members included.
    pub fn get_tag(&self, id: &ResourceLocation) -> Option<&TagDef> {
        self.tag_index.get(id).map(|&i| &self.tags[i])
    }

    /// Items in registration order.
    pub fn items(&self) -> impl Iterator<Item = &ResourceLocation> {
        self.items.iter()
    }

    /// Tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &TagDef> {
        self.tags.iter()
    }

    /// Items registered so far.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Tags registered so far.
    pub fn tag_count(&self) -> usize {
        self.tags.len()
    }
}

impl ConditionContext for ContentRegistry {
    fn tag_is_empty(&self, tag: &ResourceLocation) -> bool {
        self.get_tag(tag).is_none_or(|t| t.members.is_empty())
    }

    fn mod_loaded(&self, modid: &str) -> bool {
        self.items.iter().any(|id| id.namespace() == modid)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("missing content reference: no {kind} named '{name}'")]
    MissingContentReference { kind: ContentKind, name: String },
    #[error("duplicate {kind} '{name}'")]
    DuplicateEntry { kind: ContentKind, name: String },
    #[error("tag '{tag}' lists unknown item '{member}'")]
    UnknownTagMember { tag: String, member: String },
    #[error(transparent)]
    InvalidId(#[from] IdError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_builder() -> RegistryBuilder {
        let mut b = RegistryBuilder::new();
        b.register_item("forestry:ingot_bronze").unwrap();
        b.register_item("forestry:bronze_pickaxe").unwrap();
        b.register_item("minecraft:stick").unwrap();
        b.register_tag("forge:ingots/bronze", &["forestry:ingot_bronze"])
            .unwrap();
        b.register_tag("forge:rods/wooden", &["minecraft:stick"]).unwrap();
        b.register_tag("forge:gears/stone", &[]).unwrap();
        b
    }

    #[test]
    fn register_and_build() {
        let reg = setup_builder().build().unwrap();
        assert_eq!(reg.item_count(), 3);
        assert_eq!(reg.tag_count(), 3);
    }

    #[test]
    fn lookup_by_name() {
        let reg = setup_builder().build().unwrap();
        let pick = reg.item("forestry:bronze_pickaxe").unwrap();
        assert_eq!(pick.id().path(), "bronze_pickaxe");
        assert!(reg.tag("forge:ingots/bronze").is_ok());
        assert!(reg.contains_item("stick"));
    }

    #[test]
    fn missing_item_names_the_symbol() {
        let reg = setup_builder().build().unwrap();
        match reg.item("forestry:wrench") {
            Err(RegistryError::MissingContentReference { kind, name }) => {
                assert_eq!(kind, ContentKind::Item);
                assert_eq!(name, "forestry:wrench");
            }
            other => panic!("expected MissingContentReference, got: {other:?}"),
        }
    }

    #[test]
    fn items_and_tags_are_separate_namespaces() {
        let reg = setup_builder().build().unwrap();
        assert!(reg.item("forge:ingots/bronze").is_err());
        assert!(reg.tag("forestry:ingot_bronze").is_err());
    }

    #[test]
    fn malformed_name_is_reported_as_missing() {
        let reg = setup_builder().build().unwrap();
        let err = reg.item("Not A Name").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::MissingContentReference { ref name, .. } if name == "Not A Name"
        ));
    }

    #[test]
    fn duplicate_item_fails() {
        let mut b = setup_builder();
        let err = b.register_item("forestry:ingot_bronze").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::DuplicateEntry { kind: ContentKind::Item, .. }
        ));
    }

    #[test]
    fn duplicate_tag_fails() {
        let mut b = setup_builder();
        assert!(b.register_tag("forge:rods/wooden", &[]).is_err());
    }

    #[test]
    fn unknown_tag_member_fails_build() {
        let mut b = RegistryBuilder::new();
        b.register_tag("forge:ingots/tin", &["forestry:ingot_tin"])
            .unwrap();
        match b.build() {
            Err(RegistryError::UnknownTagMember { tag, member }) => {
                assert_eq!(tag, "forge:ingots/tin");
                assert_eq!(member, "forestry:ingot_tin");
            }
            other => panic!("expected UnknownTagMember, got: {other:?}"),
        }
    }

    #[test]
    fn extend_tag_appends_once() {
        let mut b = setup_builder();
        b.extend_tag("forge:gears/stone", "minecraft:stick").unwrap();
        b.extend_tag("forge:gears/stone", "minecraft:stick").unwrap();
        let reg = b.build().unwrap();
        let id = ResourceLocation::parse("forge:gears/stone").unwrap();
        assert_eq!(reg.get_tag(&id).unwrap().members.len(), 1);
    }

    #[test]
    fn extend_missing_tag_fails() {
        let mut b = setup_builder();
        assert!(matches!(
            b.extend_tag("forge:gears/tin", "minecraft:stick"),
            Err(RegistryError::MissingContentReference { kind: ContentKind::Tag, .. })
        ));
    }

    #[test]
    fn tag_emptiness_and_mods() {
        let reg = setup_builder().build().unwrap();
        let stone = ResourceLocation::parse("forge:gears/stone").unwrap();
        let bronze = ResourceLocation::parse("forge:ingots/bronze").unwrap();
        let unknown = ResourceLocation::parse("forge:gears/diamond").unwrap();
        assert!(reg.tag_is_empty(&stone));
        assert!(!reg.tag_is_empty(&bronze));
        assert!(reg.tag_is_empty(&unknown));
        assert!(reg.mod_loaded("forestry"));
        assert!(!reg.mod_loaded("thermal"));
    }

    #[test]
    fn empty_registry_builds_successfully() {
        let reg = RegistryBuilder::new().build().unwrap();
        assert_eq!(reg.item_count(), 0);
        assert_eq!(reg.tag_count(), 0);
    }

    #[test]
    fn error_display_messages() {
        let e = RegistryError::MissingContentReference {
            kind: ContentKind::Tag,
            name: "forge:gears/tin".into(),
        };
        let msg = format!("{e}");
        assert!(msg.contains("tag"), "got: {msg}");
        assert!(msg.contains("forge:gears/tin"), "got: {msg}");
    }
}
