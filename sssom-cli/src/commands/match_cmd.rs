use crate::config::Config;
use crate::error::{CliError, CliResult};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Launch the external ontology matcher on two ontologies.
///
/// The matcher is an opaque Java tool (LogMap and friends): we build the
/// conventional `java <jvm-args> -jar <jar> MATCHER <source> <target>
/// <output-dir> true` command line, run it to completion, and forward its
/// output. CLI flags take precedence over the `[matcher]` config section.
pub fn run(
    source: &str,
    target: &str,
    output_dir: &Path,
    jar: Option<PathBuf>,
    java: Option<String>,
    jvm_args: Vec<String>,
    config: &Config,
) -> CliResult<()> {
    let jar = jar
        .or_else(|| config.matcher.jar.clone())
        .ok_or(CliError::NoMatcherJar)?;
    if !jar.is_file() {
        return Err(CliError::Input(format!(
            "matcher jar not found: {}",
            jar.display()
        )));
    }

    let java = java.unwrap_or_else(|| config.matcher.java.clone());
    let jvm_args = if jvm_args.is_empty() {
        config.matcher.jvm_args.clone()
    } else {
        jvm_args
    };

    let source = as_iri(source)?;
    let target = as_iri(target)?;
    std::fs::create_dir_all(output_dir)
        .map_err(|e| CliError::Input(format!("cannot create {}: {e}", output_dir.display())))?;

    let mut command = Command::new(&java);
    command
        .args(&jvm_args)
        .arg("-jar")
        .arg(&jar)
        .arg("MATCHER")
        .arg(&source)
        .arg(&target)
        .arg(output_dir)
        .arg("true");

    debug!("running matcher: {command:?}");
    let matcher_output = command
        .output()
        .map_err(|e| CliError::Matcher(format!("failed to launch {java}: {e}")))?;

    io::stdout().write_all(&matcher_output.stdout)?;
    io::stderr().write_all(&matcher_output.stderr)?;

    if !matcher_output.status.success() {
        return Err(CliError::Matcher(format!(
            "matcher exited with {}",
            matcher_output.status
        )));
    }
    Ok(())
}

/// Turn a filesystem path into a `file://` IRI; anything already carrying a
/// scheme passes through untouched.
fn as_iri(arg: &str) -> CliResult<String> {
    if arg.contains("://") {
        return Ok(arg.to_string());
    }
    let path = Path::new(arg);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(format!("file://{}", absolute.display()))
}
