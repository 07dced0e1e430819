//! Defines the command-line interface for the application.

use clap::Parser;
use std::path::PathBuf;

/// Historical default target, kept so existing invocations with no
/// arguments keep working.
pub const DEFAULT_TARGET: &str = "c:/lifemap/website/app/page.tsx";

#[derive(Parser, Debug)]
#[command(
    name = "tagfix",
    version,
    about = "Strip stray whitespace from JSX-style tag delimiters."
)]
pub struct Cli {
    /// The source file to repair in place.
    #[arg(value_name = "FILE_PATH", default_value = DEFAULT_TARGET)]
    pub file: PathBuf,

    /// Write the output to a new file instead of modifying the original.
    #[arg(short, long, value_name = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Preview the repaired content on stdout without writing any files.
    #[arg(long, conflicts_with = "output")]
    pub dry_run: bool,

    /// Show a diff of the pending changes instead of writing files.
    #[arg(long, conflicts_with_all = ["output", "dry_run"])]
    pub diff: bool,

    /// Also collapse whitespace around `=` before a quoted attribute value.
    #[arg(long)]
    pub fix_attributes: bool,
}
