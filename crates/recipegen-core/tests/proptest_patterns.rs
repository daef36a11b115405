//! Property-based tests for shaped pattern validation.
//!
//! Uses proptest to generate random grids and keys, then checks that the
//! validator accepts exactly the grids whose symbols and key agree.

use proptest::prelude::*;
use recipegen_core::ingredient::Ingredient;
use recipegen_core::test_utils::*;
use recipegen_core::validation::{PatternError, validate_pattern};
use std::collections::{BTreeMap, BTreeSet};

// ===========================================================================
// Generators
// ===========================================================================

const SYMBOLS: &[char] = &['#', 'X', 'I', 'G', ' '];

/// A rectangular grid of 1..=3 rows by 1..=3 columns with at least one symbol.
fn arb_grid() -> impl Strategy<Value = Vec<String>> {
    (1..=3usize, 1..=3usize)
        .prop_flat_map(|(rows, width)| {
            proptest::collection::vec(
                proptest::collection::vec(proptest::sample::select(SYMBOLS), width),
                rows,
            )
        })
        .prop_map(|rows| {
            rows.into_iter()
                .map(|r| r.into_iter().collect::<String>())
                .collect::<Vec<_>>()
        })
        .prop_filter("grid needs a symbol", |rows| {
            rows.iter().any(|r| r.chars().any(|c| c != ' '))
        })
}

fn used_symbols(rows: &[String]) -> BTreeSet<char> {
    rows.iter()
        .flat_map(|r| r.chars())
        .filter(|c| *c != ' ')
        .collect()
}

fn key_for(symbols: impl IntoIterator<Item = char>) -> BTreeMap<char, Ingredient> {
    let reg = bronze_registry();
    let bronze: Ingredient = reg.tag("forge:ingots/bronze").unwrap().into();
    symbols.into_iter().map(|s| (s, bronze.clone())).collect()
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A key defining exactly the used symbols is always accepted.
    #[test]
    fn matching_key_is_valid(grid in arb_grid()) {
        let key = key_for(used_symbols(&grid));
        prop_assert_eq!(validate_pattern(&grid, &key), Ok(()));
    }

    /// An extra definition is reported as unused.
    #[test]
    fn extra_symbol_is_unused(grid in arb_grid()) {
        let mut symbols = used_symbols(&grid);
        symbols.insert('Z');
        let key = key_for(symbols);
        prop_assert_eq!(validate_pattern(&grid, &key), Err(PatternError::UnusedSymbol('Z')));
    }

    /// Dropping any used symbol from the key is reported as undefined.
    #[test]
    fn missing_symbol_is_undefined(grid in arb_grid(), pick in any::<prop::sample::Index>()) {
        let used: Vec<char> = used_symbols(&grid).into_iter().collect();
        let dropped = used[pick.index(used.len())];
        let key = key_for(used.iter().copied().filter(|c| *c != dropped));
        prop_assert_eq!(
            validate_pattern(&grid, &key),
            Err(PatternError::UndefinedSymbol(dropped))
        );
    }

    /// Arbitrary input never panics.
    #[test]
    fn arbitrary_rows_do_not_panic(rows in proptest::collection::vec(".{0,5}", 0..5)) {
        let key = key_for(['#']);
        let _ = validate_pattern(&rows, &key);
    }
}
