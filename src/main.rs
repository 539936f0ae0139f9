//! Mediasort - photo and video organization tool
//!
//! Sequences the library pipeline: scan the folder, create the year/month
//! structure, move files into it, and optionally clean emptied folders.
//! The merge subcommand resolves edited/original duplicate pairs.

use anyhow::{Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use mediasort::cli::{Cli, Command};
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    match cli.command {
        Command::Sort {
            folder,
            clean,
            dry_run,
        } => run_sort(&folder, clean, dry_run),
        Command::Merge { folder } => run_merge(&folder),
    }
}

fn run_sort(folder: &Path, clean: bool, dry_run: bool) -> Result<()> {
    if !folder.is_dir() {
        bail!(
            "'{}' does not exist or is not a directory. Please create it or \
             verify the path.",
            folder.display()
        );
    }

    info!(folder = %folder.display(), "Sorting files");
    info!("Scanning input folder to extract dates and files");
    let scan_result = mediasort::scan(folder)?;
    if scan_result.is_empty() {
        warn!("Scan result is empty, no further operations are required");
        return Ok(());
    }

    info!("Creating new structure");
    if !dry_run {
        mediasort::create_structure(folder, &scan_result)?;
    }

    info!("Moving files");
    if !dry_run {
        let total: usize = scan_result.values().map(Vec::len).sum();
        let bar = progress_bar(total as u64, "Moving files");
        let stats =
            mediasort::move_files_with_progress(folder, &scan_result, |_| bar.inc(1))?;
        bar.finish();
        info!(
            moved = stats.moved,
            discarded = stats.discarded,
            "Files moved"
        );
    }

    if clean {
        info!("Cleaning old subfolders");
        if !dry_run {
            mediasort::clean(folder, &scan_result)?;
        }
    } else {
        warn!("Cleaning of old subfolders is disabled and should be carried out by you");
    }

    info!("File sorting successfully completed");
    Ok(())
}

fn run_merge(folder: &Path) -> Result<()> {
    if !folder.is_dir() {
        bail!(
            "'{}' does not exist or is not a directory. Please create it or \
             verify the path.",
            folder.display()
        );
    }

    info!(folder = %folder.display(), "Merging duplicate files");
    let merged = mediasort::merge(folder)?;
    info!(merged, "Merge successfully completed");
    Ok(())
}

fn progress_bar(total: u64, message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new(total);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .expect("Invalid progress bar template")
            .progress_chars("#>-"),
    );
    bar.set_message(message);
    bar
}
