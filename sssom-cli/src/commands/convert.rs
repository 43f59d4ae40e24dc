use crate::error::{CliError, CliResult};
use crate::output;
use colored::Colorize;
use sssom_align::{convert_file, FileOutcome};
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix appended to each converted alignment file's stem.
const OUTPUT_SUFFIX: &str = "_sssom";

/// Convert every `*.ttl` file in `input_dir` to an SSSOM mapping set.
///
/// Files are processed in name order. A file that fails to parse or that
/// lacks the alignment schema is reported and skipped; the run continues.
pub fn run(input_dir: &Path, out_dir: Option<&Path>, quiet: bool) -> CliResult<()> {
    if !input_dir.is_dir() {
        return Err(CliError::Usage(format!(
            "input path is not a directory: {}",
            input_dir.display()
        )));
    }
    let out_dir = out_dir.unwrap_or(input_dir);

    for input in ttl_files(input_dir)? {
        let stem = input
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let out_path = out_dir.join(format!("{stem}{OUTPUT_SUFFIX}.ttl"));

        if !quiet {
            println!("Processing {} -> {}", input.display(), out_path.display());
        }

        match convert_file(&input, &out_path) {
            Ok(FileOutcome::Written { path, mapping_count }) => {
                if !quiet {
                    println!(
                        "  {} wrote {} ({mapping_count} mappings)",
                        "ok:".green().bold(),
                        path.display()
                    );
                }
            }
            Ok(FileOutcome::Skipped(reason)) => {
                output::warn(&format!("{}: {reason}; skipping", display_name(&input)));
            }
            Err(e) => {
                output::warn(&format!("{}: {e}; skipping", display_name(&input)));
            }
        }
    }
    Ok(())
}

/// `*.ttl` files of `dir`, sorted by name for a deterministic run order.
fn ttl_files(dir: &Path) -> CliResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "ttl"))
        .collect();
    files.sort();
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
