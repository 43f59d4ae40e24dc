use crate::error::{CliError, CliResult};
use crate::output;
use sssom_align::transcode::rdfxml_to_turtle;
use std::fs;
use std::path::{Path, PathBuf};

/// Convert every `*.rdf` file in `dir` to a sibling `.ttl` file.
///
/// A file that fails to parse is reported and skipped; the run continues.
pub fn run(dir: &Path, quiet: bool) -> CliResult<()> {
    if !dir.is_dir() {
        return Err(CliError::Usage(format!(
            "input path is not a directory: {}",
            dir.display()
        )));
    }

    let files = rdf_files(dir)?;
    if files.is_empty() {
        println!("No .rdf files found in {}", dir.display());
        return Ok(());
    }

    for input in files {
        let out_path = input.with_extension("ttl");
        match rdfxml_to_turtle(&input, &out_path) {
            Ok(()) => {
                if !quiet {
                    println!(
                        "Converted: {} -> {}",
                        display_name(&input),
                        display_name(&out_path)
                    );
                }
            }
            Err(e) => {
                output::warn(&format!(
                    "failed to convert {}: {e}",
                    display_name(&input)
                ));
            }
        }
    }
    Ok(())
}

/// `*.rdf` files of `dir`, sorted by name.
fn rdf_files(dir: &Path) -> CliResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "rdf"))
        .collect();
    files.sort();
    Ok(files)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
