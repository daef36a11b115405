//! In-memory recipe table with a binary snapshot.
//!
//! The table is keyed by identity, so lookups and snapshots are independent
//! of emission order. Records are stored as compact JSON text.

use crate::id::ResourceLocation;
use crate::recipe::RecipeSpec;
use crate::serialize::recipe_json;
use crate::sink::{RecipeSink, SinkError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Magic number identifying a recipe table snapshot.
pub const TABLE_MAGIC: u32 = 0x5EC1_0001;

/// Current format version. Increment when breaking the wire format.
pub const TABLE_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("bitcode encoding failed: {0}")]
    Encode(String),
    #[error("bitcode decoding failed: {0}")]
    Decode(String),
    #[error("invalid magic number: expected 0x{:08X}, got 0x{:08X}", TABLE_MAGIC, .0)]
    InvalidMagic(u32),
    #[error("unsupported table version: expected {}, got {}", TABLE_VERSION, .0)]
    UnsupportedVersion(u32),
    #[error("table from future version {0} (this build supports up to {TABLE_VERSION})")]
    FutureVersion(u32),
    #[error("header promises {header} recipes, snapshot holds {actual}")]
    CountMismatch { header: u64, actual: usize },
    #[error("stored record '{id}' is not valid JSON: {source}")]
    Record {
        id: String,
        source: serde_json::Error,
    },
}

// ---------------------------------------------------------------------------
// Snapshot header
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableHeader {
    pub magic: u32,
    pub version: u32,
    pub recipe_count: u64,
}

impl TableHeader {
    /// Header for the current format version.
    pub fn new(recipe_count: u64) -> Self {
        Self {
            magic: TABLE_MAGIC,
            version: TABLE_VERSION,
            recipe_count,
        }
    }

    /// Check magic and version.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.magic != TABLE_MAGIC {
            return Err(TableError::InvalidMagic(self.magic));
        }
        if self.version > TABLE_VERSION {
            return Err(TableError::FutureVersion(self.version));
        }
        if self.version < TABLE_VERSION {
            return Err(TableError::UnsupportedVersion(self.version));
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize)]
struct TableSnapshot {
    header: TableHeader,
    recipes: Vec<(String, String)>,
    advancements: Vec<(String, String)>,
}

// ---------------------------------------------------------------------------
// RecipeTable
// ---------------------------------------------------------------------------

/// Identity -> recipe JSON. Also a [`RecipeSink`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecipeTable {
    recipes: BTreeMap<ResourceLocation, String>,
    advancements: BTreeMap<ResourceLocation, String>,
}

impl RecipeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Whether a recipe is stored under `id`.
    pub fn contains(&self, id: &ResourceLocation) -> bool {
        self.recipes.contains_key(id)
    }

    /// Identities in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &ResourceLocation> {
        self.recipes.keys()
    }

    /// Stored advancements.
    pub fn advancement_count(&self) -> usize {
        self.advancements.len()
    }

    /// Decode the stored recipe for `id`.
    pub fn get(&self, id: &ResourceLocation) -> Result<Option<Value>, TableError> {
        self.recipes
            .get(id)
            .map(|text| {
                serde_json::from_str(text).map_err(|source| TableError::Record {
                    id: id.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Encode as a bitcode snapshot behind a [`TableHeader`].
    pub fn to_bytes(&self) -> Result<Vec<u8>, TableError> {
        let entries = |map: &BTreeMap<ResourceLocation, String>| {
            map.iter()
                .map(|(id, json)| (id.to_string(), json.clone()))
                .collect::<Vec<_>>()
        };
        let snapshot = TableSnapshot {
            header: TableHeader::new(self.recipes.len() as u64),
            recipes: entries(&self.recipes),
            advancements: entries(&self.advancements),
        };
        bitcode::serialize(&snapshot).map_err(|e| TableError::Encode(e.to_string()))
    }

    /// Decode a snapshot written by [`RecipeTable::to_bytes`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, TableError> {
        let snapshot: TableSnapshot =
            bitcode::deserialize(data).map_err(|e| TableError::Decode(e.to_string()))?;
        snapshot.header.validate()?;
        if snapshot.header.recipe_count != snapshot.recipes.len() as u64 {
            return Err(TableError::CountMismatch {
                header: snapshot.header.recipe_count,
                actual: snapshot.recipes.len(),
            });
        }

        let entries = |list: Vec<(String, String)>| {
            list.into_iter()
                .map(|(id, json)| {
                    ResourceLocation::parse(&id)
                        .map(|id| (id, json))
                        .map_err(|e| TableError::Decode(e.to_string()))
                })
                .collect::<Result<BTreeMap<_, _>, _>>()
        };
        Ok(Self {
            recipes: entries(snapshot.recipes)?,
            advancements: entries(snapshot.advancements)?,
        })
    }
}

impl RecipeSink for RecipeTable {
    fn accept(&mut self, recipe: &RecipeSpec) -> Result<(), SinkError> {
        if self.recipes.contains_key(&recipe.id) {
            return Err(SinkError::DuplicateIdentity {
                id: recipe.id.to_string(),
            });
        }
        let text = serde_json::to_string(&recipe_json(recipe))?;
        self.recipes.insert(recipe.id.clone(), text);
        Ok(())
    }

    fn accept_advancement(
        &mut self,
        id: &ResourceLocation,
        advancement: &Value,
    ) -> Result<(), SinkError> {
        self.advancements
            .insert(id.clone(), serde_json::to_string(advancement)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn filled_table() -> RecipeTable {
        let reg = bronze_registry();
        let mut table = RecipeTable::new();
        table.accept(&pickaxe_spec(&reg)).unwrap();
        table
    }

    #[test]
    fn accept_and_get() {
        let table = filled_table();
        let id = ResourceLocation::parse("forestry:bronze_pickaxe").unwrap();
        assert_eq!(table.len(), 1);
        let json = table.get(&id).unwrap().unwrap();
        assert_eq!(json["type"], "minecraft:crafting_shaped");
        let missing = ResourceLocation::parse("forestry:missing").unwrap();
        assert!(table.get(&missing).unwrap().is_none());
    }

    #[test]
    fn duplicate_is_rejected() {
        let reg = bronze_registry();
        let mut table = filled_table();
        assert!(matches!(
            table.accept(&pickaxe_spec(&reg)),
            Err(SinkError::DuplicateIdentity { .. })
        ));
    }

    #[test]
    fn snapshot_restores_table() {
        let table = filled_table();
        let bytes = table.to_bytes().unwrap();
        let restored = RecipeTable::from_bytes(&bytes).unwrap();
        assert_eq!(restored, table);
    }

    #[test]
    fn garbage_fails_to_decode() {
        assert!(matches!(
            RecipeTable::from_bytes(&[0xFF, 0x00, 0x13]),
            Err(TableError::Decode(_))
        ));
    }

    #[test]
    fn header_validation() {
        let mut header = TableHeader::new(0);
        assert!(header.validate().is_ok());
        header.version = TABLE_VERSION + 1;
        assert!(matches!(header.validate(), Err(TableError::FutureVersion(_))));
        header.version = 0;
        assert!(matches!(
            header.validate(),
            Err(TableError::UnsupportedVersion(0))
        ));
        header.magic = 0xDEAD_BEEF;
        assert!(matches!(header.validate(), Err(TableError::InvalidMagic(_))));
    }

    #[test]
    fn wrong_magic_snapshot_is_rejected() {
        let snapshot = TableSnapshot {
            header: TableHeader {
                magic: 0x1234_5678,
                version: TABLE_VERSION,
                recipe_count: 0,
            },
            recipes: Vec::new(),
            advancements: Vec::new(),
        };
        let bytes = bitcode::serialize(&snapshot).unwrap();
        assert!(matches!(
            RecipeTable::from_bytes(&bytes),
            Err(TableError::InvalidMagic(0x1234_5678))
        ));
    }

    #[test]
    fn header_count_must_match_records() {
        let snapshot = TableSnapshot {
            header: TableHeader::new(2),
            recipes: vec![(
                "forestry:bronze_pickaxe".to_string(),
                "{\"type\":\"minecraft:crafting_shaped\"}".to_string(),
            )],
            advancements: Vec::new(),
        };
        let bytes = bitcode::serialize(&snapshot).unwrap();
        assert!(matches!(
            RecipeTable::from_bytes(&bytes),
            Err(TableError::CountMismatch { header: 2, actual: 1 })
        ));
    }
}
