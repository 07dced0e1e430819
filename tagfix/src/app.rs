use crate::cli::Cli;
use anyhow::Context;
use clap::Parser;
use similar::TextDiff;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tagfix_lib::{FixOptions, SourceBuffer};
use tempfile::Builder as TempFileBuilder;

enum OutputMode {
    Write,
    DryRun,
    Diff,
}

pub fn run() -> anyhow::Result<()> {
    env_logger::init();

    let Cli {
        file,
        output,
        dry_run,
        diff,
        fix_attributes,
    } = Cli::parse();

    let mode = if diff {
        OutputMode::Diff
    } else if dry_run {
        OutputMode::DryRun
    } else {
        OutputMode::Write
    };

    let mut buffer = SourceBuffer::from_path(&file)?;
    let original_content = buffer.content().to_string();

    let outcome = buffer.fix(&FixOptions { fix_attributes });
    log::debug!(
        "{} occurrence(s) rewritten in {}",
        outcome.total(),
        file.display()
    );

    finalize_output(mode, &output, &file, &original_content, &buffer)
}

fn finalize_output(
    mode: OutputMode,
    output_path: &Option<PathBuf>,
    input_path: &Path,
    original_content: &str,
    buffer: &SourceBuffer,
) -> anyhow::Result<()> {
    match mode {
        OutputMode::DryRun => {
            io::stdout().write_all(buffer.content().as_bytes())?;
            return Ok(());
        }
        OutputMode::Diff => {
            let diff_output = TextDiff::from_lines(original_content, buffer.content())
                .unified_diff()
                .header("original", "modified")
                .to_string();

            io::stdout().write_all(diff_output.as_bytes())?;
            return Ok(());
        }
        OutputMode::Write => {}
    }

    if let Some(path) = output_path {
        buffer.write_to(path)?;
    } else {
        write_in_place(input_path, buffer.content())?;
    }

    println!("Fixed JSX tags in {}", input_path.display());
    Ok(())
}

/// Replaces `path` through a temporary file in the same directory, so the
/// original is swapped out in one rename rather than truncated and rewritten.
fn write_in_place(path: &Path, content: &str) -> anyhow::Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp_file = TempFileBuilder::new()
        .prefix(".tagfix-")
        .suffix(".tmp")
        .tempfile_in(parent_dir)
        .with_context(|| {
            format!(
                "Failed to create temporary file in {}",
                parent_dir.display()
            )
        })?;

    temp_file
        .write_all(content.as_bytes())
        .with_context(|| "Failed to write to temporary file")?;

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to replace original file {}", path.display()))?;

    Ok(())
}
