//! Export command implementation.
//!
//! Writes the loaded catalog out as a content directory that can be edited
//! and passed back with `--content-dir`. Events keep their curated upcoming
//! flag even when `--upcoming-policy date` recomputed it for display.

use std::path::PathBuf;

use cpf_catalog::{Catalog, CatalogStore};
use cpf_content::bundled::Dataset;
use tracing::debug;

use super::{CommandContext, CommandError, Result};

/// Options for the export command.
#[derive(Debug)]
pub struct ExportOptions {
    /// Target directory.
    pub dir: PathBuf,
    /// Overwrite existing dataset files.
    pub force: bool,
}

/// Executes the export command.
///
/// # Errors
///
/// Refuses to overwrite existing dataset files unless `force` is set, and
/// fails if the directory cannot be written.
pub async fn execute(ctx: &CommandContext, opts: &ExportOptions, catalog: &Catalog) -> Result<()> {
    let store = CatalogStore::with_dir(&opts.dir);

    let existing = existing_files(&store);
    if !existing.is_empty() && !opts.force {
        return Err(CommandError::Config(format!(
            "{} already contains {}. Use --force to overwrite.",
            opts.dir.display(),
            existing.join(", ")
        )));
    }

    store.save_async(&catalog.curated_content()).await?;
    debug!(dir = %opts.dir.display(), overwritten = existing.len(), "catalog exported");

    let files: Vec<&str> = Dataset::ALL.iter().map(|d| d.file_name()).collect();
    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "dir": opts.dir.display().to_string(),
            "files": files,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!(
            "Exported {} datasets to {}",
            files.len(),
            opts.dir.display()
        );
    }

    Ok(())
}

/// Dataset files already present in the store directory.
fn existing_files(store: &CatalogStore) -> Vec<&'static str> {
    Dataset::ALL
        .into_iter()
        .filter(|d| store.path_for(*d).exists())
        .map(Dataset::file_name)
        .collect()
}
