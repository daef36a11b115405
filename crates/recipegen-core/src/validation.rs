//! Catalog validation: pattern/symbol agreement, conditional ordering,
//! identity uniqueness, and determinism checking.
//!
//! Builders run the per-recipe checks when a recipe is saved. [`lint`]
//! re-runs them over a whole staged catalog and adds the cross-recipe
//! checks, so a driver can report every defect at once.

use crate::error::GenError;
use crate::ingredient::Ingredient;
use crate::output::RecipeOutput;
use crate::provider::RecipeProvider;
use crate::recipe::{Alternative, RecipeKind, RecipeSpec};
use crate::registry::ContentRegistry;
use crate::serialize::{recipe_bytes, recipe_json};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Maximum grid side for shaped recipes.
pub const MAX_GRID: usize = 3;

/// Maximum ingredient count for shapeless recipes.
pub const MAX_SHAPELESS: usize = MAX_GRID * MAX_GRID;

// ---------------------------------------------------------------------------
// Shaped patterns
// ---------------------------------------------------------------------------

/// A defect in a shaped grid or its symbol definitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("pattern has {0} rows, at most 3 allowed")]
    TooManyRows(usize),
    #[error("row {row} has width {width}, expected 1..=3")]
    BadRowWidth { row: usize, width: usize },
    #[error("row {row} has width {width}, expected {expected} like the first row")]
    UnevenRows {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("symbol '{0}' is used but not defined")]
    UndefinedSymbol(char),
    #[error("symbol '{0}' is defined but not used")]
    UnusedSymbol(char),
    #[error("symbol ' ' is reserved for empty slots")]
    ReservedSymbol,
    #[error("symbol '{0}' is defined more than once")]
    DuplicateSymbol(char),
}

/// Check a grid against its key. Rows are measured in characters.
pub fn validate_pattern(
    pattern: &[String],
    key: &BTreeMap<char, Ingredient>,
) -> Result<(), PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    if pattern.len() > MAX_GRID {
        return Err(PatternError::TooManyRows(pattern.len()));
    }

    let expected = pattern[0].chars().count();
    for (row, line) in pattern.iter().enumerate() {
        let width = line.chars().count();
        if width == 0 || width > MAX_GRID {
            return Err(PatternError::BadRowWidth { row, width });
        }
        if width != expected {
            return Err(PatternError::UnevenRows {
                row,
                width,
                expected,
            });
        }
    }

    if key.contains_key(&' ') {
        return Err(PatternError::ReservedSymbol);
    }

    let mut used = HashSet::new();
    for symbol in pattern.iter().flat_map(|l| l.chars()).filter(|c| *c != ' ') {
        if !key.contains_key(&symbol) {
            return Err(PatternError::UndefinedSymbol(symbol));
        }
        used.insert(symbol);
    }

    if let Some(unused) = key.keys().find(|s| !used.contains(s)) {
        return Err(PatternError::UnusedSymbol(*unused));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Conditional alternatives
// ---------------------------------------------------------------------------

/// Alternatives must end in exactly one unconditional fallback, with no
/// repeated condition before it.
pub fn validate_alternatives(alternatives: &[Alternative]) -> Result<(), String> {
    let Some(last) = alternatives.last() else {
        return Err("no alternatives".to_string());
    };
    if !last.condition.is_unconditional() {
        return Err("last alternative is not an unconditional fallback".to_string());
    }

    let body = &alternatives[..alternatives.len() - 1];
    for (i, alt) in body.iter().enumerate() {
        if alt.condition.is_unconditional() {
            return Err(format!(
                "unconditional alternative at position {i} shadows the ones after it"
            ));
        }
        if body[..i].iter().any(|prev| prev.condition == alt.condition) {
            return Err(format!("condition at position {i} repeats an earlier one"));
        }
        if matches!(alt.kind, RecipeKind::Conditional(_)) {
            return Err(format!("alternative at position {i} is itself conditional"));
        }
    }
    if matches!(last.kind, RecipeKind::Conditional(_)) {
        return Err("fallback is itself conditional".to_string());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Whole-catalog lint
// ---------------------------------------------------------------------------

/// One defect found by [`lint`].
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    DuplicateIdentity(String),
    MalformedPattern { id: String, error: PatternError },
    InvalidConditional { id: String, reason: String },
    MissingUnlockCriterion(String),
    /// Identity outside the provider's namespace. Not an error by itself.
    ForeignNamespace { id: String, expected: String },
}

impl Finding {
    /// Foreign namespaces are reported but do not fail a check run.
    pub fn is_error(&self) -> bool {
        !matches!(self, Finding::ForeignNamespace { .. })
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::DuplicateIdentity(id) => write!(f, "duplicate identity '{id}'"),
            Finding::MalformedPattern { id, error } => write!(f, "{id}: {error}"),
            Finding::InvalidConditional { id, reason } => write!(f, "{id}: {reason}"),
            Finding::MissingUnlockCriterion(id) => write!(f, "{id}: no unlock criterion"),
            Finding::ForeignNamespace { id, expected } => {
                write!(f, "{id}: outside namespace '{expected}'")
            }
        }
    }
}

fn lint_kind(id: &str, kind: &RecipeKind, findings: &mut Vec<Finding>) {
    match kind {
        RecipeKind::Shaped(shaped) => {
            if let Err(error) = validate_pattern(&shaped.pattern, &shaped.key) {
                findings.push(Finding::MalformedPattern {
                    id: id.to_string(),
                    error,
                });
            }
        }
        RecipeKind::Conditional(cond) => {
            if let Err(reason) = validate_alternatives(&cond.alternatives) {
                findings.push(Finding::InvalidConditional {
                    id: id.to_string(),
                    reason,
                });
            }
            for alt in &cond.alternatives {
                lint_kind(id, &alt.kind, findings);
            }
        }
        RecipeKind::Shapeless(_) | RecipeKind::Smelting(_) | RecipeKind::Blasting(_) => {}
    }
}

/// Check every staged recipe, plus identity uniqueness across the catalog.
/// With `namespace` set, identities outside it are reported too.
pub fn lint(recipes: &[RecipeSpec], namespace: Option<&str>) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut seen = HashSet::new();

    for spec in recipes {
        let id = spec.id.to_string();
        if !seen.insert(spec.id.clone()) {
            findings.push(Finding::DuplicateIdentity(id.clone()));
        }
        if spec.unlock.is_empty() && !spec.is_conditional() {
            findings.push(Finding::MissingUnlockCriterion(id.clone()));
        }
        if let Some(ns) = namespace
            && spec.id.namespace() != ns
        {
            findings.push(Finding::ForeignNamespace {
                id: id.clone(),
                expected: ns.to_string(),
            });
        }
        lint_kind(&id, &spec.kind, &mut findings);
    }

    findings
}

// ---------------------------------------------------------------------------
// Determinism validation
// ---------------------------------------------------------------------------

/// Result of running a provider twice against the same registry.
#[derive(Debug)]
pub struct DeterminismResult {
    pub is_deterministic: bool,
    pub recipe_count: usize,
    /// Identity of the first record whose encoding differed (if any).
    pub divergence: Option<String>,
}

/// Build the provider's catalog twice and compare the encoded output
/// record by record.
pub fn validate_determinism<P: RecipeProvider + ?Sized>(
    provider: &P,
    registry: &ContentRegistry,
) -> Result<DeterminismResult, GenError> {
    let mut first = RecipeOutput::new();
    provider.build_recipes(registry, &mut first)?;
    let mut second = RecipeOutput::new();
    provider.build_recipes(registry, &mut second)?;

    let mut divergence = None;
    if first.len() != second.len() {
        divergence = Some(format!(
            "record count {} vs {}",
            first.len(),
            second.len()
        ));
    } else {
        for (a, b) in first.iter().zip(second.iter()) {
            let same = a.id == b.id
                && recipe_bytes(&recipe_json(a)).ok() == recipe_bytes(&recipe_json(b)).ok();
            if !same {
                divergence = Some(a.id.to_string());
                break;
            }
        }
    }

    Ok(DeterminismResult {
        is_deterministic: divergence.is_none(),
        recipe_count: first.len(),
        divergence,
    })
}

// ===========================================================================
// Tests
// ===========================================================================
