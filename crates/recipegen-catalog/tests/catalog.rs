use std::collections::HashSet;
use std::path::Path;

use recipegen_catalog::{Content, DOMAINS, ForestryRecipes, MOD_ID};
use recipegen_core::condition::Condition;
use recipegen_core::error::GenError;
use recipegen_core::output::RecipeOutput;
use recipegen_core::provider::{RecipeProvider, run_provider};
use recipegen_core::recipe::{RecipeKind, RecipeSpec};
use recipegen_core::registry::{ContentRegistry, RegistryBuilder, RegistryError};
use recipegen_core::sink::MemorySink;
use recipegen_core::test_utils::*;
use recipegen_core::validation::{lint, validate_determinism, validate_pattern};

fn content_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/content"))
}

fn registry() -> ContentRegistry {
    recipegen_data::load_content(content_dir()).unwrap()
}

fn catalog() -> RecipeOutput {
    let reg = registry();
    let mut out = RecipeOutput::new();
    ForestryRecipes.build_recipes(&reg, &mut out).unwrap();
    out
}

/// The shipped registry minus one item (and its tag memberships).
fn registry_without(missing: &str) -> ContentRegistry {
    let full = registry();
    let missing = rl(missing);
    let mut b = RegistryBuilder::new();
    for item in full.items().filter(|id| **id != missing) {
        b.register_item(&item.to_string()).unwrap();
    }
    for tag in full.tags() {
        let members: Vec<String> = tag
            .members
            .iter()
            .filter(|m| **m != missing)
            .map(|m| m.to_string())
            .collect();
        let members: Vec<&str> = members.iter().map(String::as_str).collect();
        b.register_tag(&tag.id.to_string(), &members).unwrap();
    }
    b.build().unwrap()
}

// -----------------------------------------------------------------------
// Catalog shape
// -----------------------------------------------------------------------

#[test]
fn every_domain_contributes() {
    let reg = registry();
    let content = Content::new(&reg);
    let expected = [
        ("arboriculture", 357),
        ("apiculture", 42),
        ("food", 3),
        ("backpacks", 8),
        ("charcoal", 5),
        ("climatology", 2),
        ("core", 41),
        ("books", 3),
        ("cultivation", 21),
        ("database", 6),
        ("energy", 3),
        ("factory", 10),
        ("farming", 55),
        ("fluids", 3),
        ("lepidopterology", 1),
        ("mail", 12),
        ("sorting", 1),
        ("worktable", 1),
    ];
    assert_eq!(DOMAINS.len(), expected.len());
    for ((name, register), (expected_name, count)) in DOMAINS.iter().zip(expected) {
        assert_eq!(*name, expected_name);
        let mut out = RecipeOutput::new();
        register(&content, &mut out).unwrap();
        assert_eq!(out.len(), count, "domain {name}");
    }
}

#[test]
fn identities_are_unique_across_domains() {
    let out = catalog();
    assert_eq!(out.len(), 574);
    let ids: HashSet<_> = out.iter().map(|s| s.id.clone()).collect();
    assert_eq!(ids.len(), out.len());
}

#[test]
fn catalog_lints_clean() {
    let out = catalog();
    let findings = lint(out.recipes(), Some(MOD_ID));
    let errors: Vec<_> = findings.iter().filter(|f| f.is_error()).collect();
    assert!(errors.is_empty(), "lint errors: {errors:?}");

    let mut foreign: Vec<String> = findings
        .iter()
        .filter(|f| !f.is_error())
        .map(|f| f.to_string())
        .collect();
    foreign.sort();
    // Six base-game doors, two nine-block storage halves, cobweb,
    // glistering melon, and paper.
    assert_eq!(foreign.len(), 11, "{foreign:?}");
    assert!(foreign.iter().any(|f| f.starts_with("minecraft:cobweb_from_wisp")));
    assert!(foreign.iter().any(|f| f.starts_with("minecraft:raw_tin_block")));
}

fn shaped_symbols_agree(id: &str, kind: &RecipeKind) {
    match kind {
        RecipeKind::Shaped(shaped) => {
            assert_eq!(validate_pattern(&shaped.pattern, &shaped.key), Ok(()), "{id}");
            let used: HashSet<char> = shaped
                .pattern
                .iter()
                .flat_map(|r| r.chars())
                .filter(|c| *c != ' ')
                .collect();
            let defined: HashSet<char> = shaped.key.keys().copied().collect();
            assert_eq!(used, defined, "{id}");
        }
        RecipeKind::Conditional(cond) => {
            for alt in &cond.alternatives {
                shaped_symbols_agree(id, &alt.kind);
            }
        }
        _ => {}
    }
}

#[test]
fn shaped_symbols_match_keys() {
    for spec in catalog().iter() {
        shaped_symbols_agree(&spec.id.to_string(), &spec.kind);
    }
}

#[test]
fn conditionals_end_in_single_fallback() {
    let out = catalog();
    let conditionals: Vec<&RecipeSpec> = out.iter().filter(|s| s.is_conditional()).collect();
    assert_eq!(conditionals.len(), 3);
    for spec in conditionals {
        let RecipeKind::Conditional(cond) = &spec.kind else {
            unreachable!();
        };
        let always: Vec<usize> = cond
            .alternatives
            .iter()
            .enumerate()
            .filter(|(_, a)| a.condition == Condition::Always)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(always, [cond.alternatives.len() - 1], "{}", spec.id);
    }
}

#[test]
fn catalog_is_deterministic() {
    let reg = registry();
    let result = validate_determinism(&ForestryRecipes, &reg).unwrap();
    assert!(result.is_deterministic, "diverged at {:?}", result.divergence);
    assert_eq!(result.recipe_count, 574);
}

// -----------------------------------------------------------------------
// Individual recipes
// -----------------------------------------------------------------------

#[test]
fn bronze_pickaxe_matches_fixture() {
    let out = catalog();
    let spec = out.get("forestry:bronze_pickaxe").unwrap();
    assert_eq!(*spec, pickaxe_spec(&bronze_registry()));
}

#[test]
fn stone_gear_tag_is_empty_so_gears_use_copper() {
    let reg = registry();
    let out = catalog();
    let RecipeKind::Conditional(cond) = &out.get("forestry:gear_copper").unwrap().kind else {
        panic!("gear is conditional");
    };
    let chosen = cond.resolve(&reg).unwrap();
    assert!(chosen.condition.is_unconditional());
}

#[test]
fn apiarist_backpack_uses_tree_chest() {
    let out = catalog();
    let spec = out.get("forestry:apiarist_backpack").unwrap();
    let RecipeKind::Shaped(shaped) = &spec.kind else {
        panic!("backpack is shaped");
    };
    assert_eq!(
        shaped.key[&'Y'],
        recipegen_core::ingredient::Ingredient::Item(rl("forestry:tree_chest"))
    );
    assert_eq!(spec.unlock[0].name, "has_bee_chest");
}

// -----------------------------------------------------------------------
// Failure and advancement hook
// -----------------------------------------------------------------------

#[test]
fn missing_item_fails_pass_and_writes_nothing() {
    let reg = registry_without("forestry:gear_tin");
    let mut sink = MemorySink::new();
    let err = run_provider(&ForestryRecipes, &reg, &mut sink).unwrap_err();
    match err {
        GenError::Registry(RegistryError::MissingContentReference { name, .. }) => {
            assert_eq!(name, "forestry:gear_tin");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(sink.is_empty());
    assert!(!sink.is_finished());
}

#[test]
fn advancements_are_not_forwarded() {
    let reg = registry();
    let mut sink = MemorySink::new();
    let summary = run_provider(&ForestryRecipes, &reg, &mut sink).unwrap();
    assert_eq!(summary.provider, "Forestry Recipes");
    assert_eq!(summary.recipes, 574);
    assert_eq!(summary.conditional, 3);
    assert_eq!(summary.advancements, 571);
    assert_eq!(summary.foreign, 11);
    assert!(sink.advancements().is_empty());
    assert!(sink.is_finished());
}
