//! Booklet generation - from a linear PDF to a duplex-ready booklet
//!
//! This module orchestrates the whole process:
//! 1. Pad the source to a multiple of 4 pages and persist it
//! 2. Compute the saddle-stitch sheet assignments
//! 3. Composite each sheet two-up onto a front and a back page
//! 4. Save the booklet and remove the padded intermediate

mod io;
mod paths;

pub use io::{load_pdf, save_pdf};
pub use paths::BookletPaths;

use crate::compose::compose;
use crate::imposition::impose;
use crate::options::BookletOptions;
use crate::pad::pad_document;
use crate::render::page_ids;
use crate::stats::calculate_statistics;
use crate::types::*;
use lopdf::Document;
use std::path::Path;

/// Main booklet generation function
pub async fn generate_booklet(
    paths: &BookletPaths,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    options.validate()?;
    paths.validate()?;

    let source = load_pdf(&paths.input).await?;
    run_pipeline(source, paths, options).await
}

/// Generate a booklet from a source document that is already loaded from
/// `paths.input`
pub async fn generate_booklet_from_document(
    source: Document,
    paths: &BookletPaths,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    options.validate()?;
    paths.validate()?;
    run_pipeline(source, paths, options).await
}

async fn run_pipeline(
    mut source: Document,
    paths: &BookletPaths,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    let source_pages = page_ids(&source).len();
    log::info!(
        "Loaded {} ({} pages)",
        paths.input.display(),
        source_pages
    );

    let marker_text = options.marker_text.clone();
    let (padded, added) = tokio::task::spawn_blocking(move || {
        let added = pad_document(&mut source, &marker_text)?;
        Ok::<_, BookletError>((source, added))
    })
    .await??;
    log::info!("Padded with {} marker page(s)", added);

    save_pdf(padded, &paths.intermediate).await?;

    match impose_from_intermediate(paths, options).await {
        Ok(()) => {
            tokio::fs::remove_file(&paths.intermediate).await?;
            Ok(calculate_statistics(source_pages))
        }
        Err(err) => {
            remove_intermediate(&paths.intermediate).await;
            Err(err)
        }
    }
}

/// Reopen the padded intermediate, impose it and write the booklet
async fn impose_from_intermediate(paths: &BookletPaths, options: &BookletOptions) -> Result<()> {
    let padded = load_pdf(&paths.intermediate).await?;
    let page_count = page_ids(&padded).len();

    let sheets = impose(page_count)?;
    log::info!("Imposed {} pages onto {} sheet(s)", page_count, sheets.len());

    let sheet_size = options.sheet_size_pt();
    let booklet =
        tokio::task::spawn_blocking(move || compose(&padded, &sheets, sheet_size)).await??;

    save_pdf(booklet, &paths.output).await?;
    log::info!("Wrote {}", paths.output.display());
    Ok(())
}

/// Best-effort removal of the intermediate after a failure
async fn remove_intermediate(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        log::warn!(
            "Could not remove intermediate {}: {}",
            path.display(),
            err
        );
    }
}
