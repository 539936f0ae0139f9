//! CLI argument parsing with clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Mediasort - sort photos and videos into year/month folders
///
/// Organizes media files by capture date, read from EXIF metadata where
/// available and from filesystem timestamps otherwise.
#[derive(Parser, Debug)]
#[command(name = "mediasort")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sort media files into year/month folders by capture date
    Sort {
        /// Folder to sort
        folder: PathBuf,

        /// Delete old subfolders left empty after moving files
        #[arg(short, long)]
        clean: bool,

        /// Run without moving or deleting anything
        #[arg(short = 'd', long)]
        dry_run: bool,
    },

    /// Merge duplicate edited/original image pairs in leaf folders
    Merge {
        /// Folder to merge
        folder: PathBuf,
    },
}
