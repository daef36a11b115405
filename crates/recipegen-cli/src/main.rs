//! Offline data-generation driver.
//!
//! Loads a content registry, runs the Forestry recipe provider, and writes
//! host recipe files (and optionally a bitcode table snapshot). With
//! `--check` it only lints the catalog and verifies determinism.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use recipegen_catalog::{ForestryRecipes, MOD_ID};
use recipegen_core::id::ResourceLocation;
use recipegen_core::output::RecipeOutput;
use recipegen_core::provider::{RecipeProvider, run_provider};
use recipegen_core::recipe::RecipeSpec;
use recipegen_core::sink::{DirectorySink, RecipeSink, SinkError};
use recipegen_core::table::RecipeTable;
use recipegen_core::validation::{lint, validate_determinism};
use serde_json::Value;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "recipegen")]
#[command(about = "Generate Forestry recipe data files", long_about = None)]
struct Cli {
    /// Directory holding items.{ron,json,toml} and tags.{ron,json,toml}
    #[arg(long)]
    content: PathBuf,

    /// Root of the generated data tree
    #[arg(long, required_unless_present = "check")]
    output: Option<PathBuf>,

    /// Also write a bitcode snapshot of every recipe to this file
    #[arg(long)]
    table: Option<PathBuf>,

    /// Lint the catalog and check determinism without writing anything
    #[arg(long)]
    check: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let registry = recipegen_data::load_content(&cli.content)
        .with_context(|| format!("loading content from {}", cli.content.display()))?;
    info!(
        items = registry.item_count(),
        tags = registry.tag_count(),
        "content registry loaded"
    );

    if cli.check {
        return check(&registry);
    }
    let Some(output) = cli.output.as_deref() else {
        bail!("--output is required unless --check is given");
    };
    generate(&registry, output, cli.table.as_deref())
}

// ---------------------------------------------------------------------------
// Generate
// ---------------------------------------------------------------------------

/// Forwards everything to the directory sink and, when present, the table.
struct Tee<'a> {
    files: &'a mut DirectorySink,
    table: Option<&'a mut RecipeTable>,
}

impl RecipeSink for Tee<'_> {
    fn accept(&mut self, spec: &RecipeSpec) -> Result<(), SinkError> {
        self.files.accept(spec)?;
        if let Some(table) = self.table.as_deref_mut() {
            table.accept(spec)?;
        }
        Ok(())
    }

    fn accept_advancement(
        &mut self,
        id: &ResourceLocation,
        advancement: &Value,
    ) -> Result<(), SinkError> {
        self.files.accept_advancement(id, advancement)?;
        if let Some(table) = self.table.as_deref_mut() {
            table.accept_advancement(id, advancement)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.files.finish()?;
        if let Some(table) = self.table.as_deref_mut() {
            table.finish()?;
        }
        Ok(())
    }
}

fn generate(
    registry: &recipegen_core::registry::ContentRegistry,
    output: &Path,
    table_path: Option<&Path>,
) -> Result<()> {
    let mut files = DirectorySink::new(output);
    let mut table = table_path.map(|_| RecipeTable::new());
    let summary = {
        let mut tee = Tee {
            files: &mut files,
            table: table.as_mut(),
        };
        run_provider(&ForestryRecipes, registry, &mut tee)
            .with_context(|| format!("generating {}", ForestryRecipes.name()))?
    };

    if let (Some(path), Some(table)) = (table_path, table) {
        let bytes = table.to_bytes().context("encoding recipe table")?;
        std::fs::write(path, &bytes)
            .with_context(|| format!("writing table to {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "recipe table written");
    }

    println!(
        "{}: {} recipes ({} conditional), {} files under {}",
        summary.provider,
        summary.recipes,
        summary.conditional,
        files.files_written(),
        output.display()
    );
    if summary.foreign > 0 {
        println!(
            "{} identities outside the '{MOD_ID}' namespace",
            summary.foreign
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Check
// ---------------------------------------------------------------------------

fn check(registry: &recipegen_core::registry::ContentRegistry) -> Result<()> {
    let mut out = RecipeOutput::new();
    ForestryRecipes
        .build_recipes(registry, &mut out)
        .context("building catalog")?;

    let findings = lint(out.recipes(), ForestryRecipes.namespace());
    let mut errors = 0;
    for finding in &findings {
        if finding.is_error() {
            errors += 1;
            println!("error: {finding}");
        } else {
            println!("warning: {finding}");
        }
    }

    let determinism = validate_determinism(&ForestryRecipes, registry)?;
    if !determinism.is_deterministic {
        errors += 1;
        println!(
            "error: output is not deterministic (first divergence: {})",
            determinism.divergence.as_deref().unwrap_or("unknown")
        );
    }

    println!(
        "{} recipes checked, {} findings, {errors} errors",
        determinism.recipe_count,
        findings.len()
    );
    if errors > 0 {
        bail!("catalog check failed with {errors} errors");
    }
    Ok(())
}
