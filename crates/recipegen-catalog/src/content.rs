use crate::MOD_ID;
use recipegen_core::error::GenError;
use recipegen_core::registry::{ContentRegistry, ItemRef, TagRef};

/// Registry view used by the domain sub-builders.
///
/// Short-hand lookups for the two namespaces the catalog draws from. Every
/// lookup fails with `MissingContentReference` naming the full identifier.
#[derive(Debug, Clone, Copy)]
pub struct Content<'a> {
    registry: &'a ContentRegistry,
}

impl<'a> Content<'a> {
    /// Wrap a registry for lookups.
    pub fn new(registry: &'a ContentRegistry) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &'a ContentRegistry {
        self.registry
    }

    /// A mod item by path.
    pub fn item(&self, path: &str) -> Result<ItemRef, GenError> {
        Ok(self.registry.item(&format!("{MOD_ID}:{path}"))?)
    }

    /// A base-game item by path.
    pub fn vanilla(&self, path: &str) -> Result<ItemRef, GenError> {
        Ok(self.registry.item(&format!("minecraft:{path}"))?)
    }

    /// An item by full identifier.
    pub fn id(&self, id: &str) -> Result<ItemRef, GenError> {
        Ok(self.registry.item(id)?)
    }

    /// A tag by full identifier.
    pub fn tag(&self, id: &str) -> Result<TagRef, GenError> {
        Ok(self.registry.tag(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipegen_core::registry::RegistryError;
    use recipegen_core::test_utils::*;

    #[test]
    fn lookups_qualify_paths() {
        let reg = bronze_registry();
        let content = Content::new(&reg);
        assert_eq!(
            content.item("ingot_bronze").unwrap().id().to_string(),
            "forestry:ingot_bronze"
        );
        assert_eq!(
            content.vanilla("stick").unwrap().id().to_string(),
            "minecraft:stick"
        );
        assert!(content.tag("forge:rods/wooden").is_ok());
    }

    #[test]
    fn missing_item_names_full_id() {
        let reg = bronze_registry();
        let err = Content::new(&reg).item("gear_tin").unwrap_err();
        match err {
            GenError::Registry(RegistryError::MissingContentReference { name, .. }) => {
                assert_eq!(name, "forestry:gear_tin");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
