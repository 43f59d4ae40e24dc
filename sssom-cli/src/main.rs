mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use cli::{Cli, Commands};
use error::exit_with_error;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet  → always "off" (no logs, no matter what)
    //   --verbose → "info" level (useful diagnostics)
    //   default  → "off" (clean terminal; warnings are printed directly)
    //   RUST_LOG → honoured only with --verbose, so developer env vars don't
    //              leak log lines into the user-facing output.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // Disable color when --no-color flag or NO_COLOR env var is set.
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

fn run(cli: Cli) -> error::CliResult<()> {
    let config = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Convert { input_dir, out_dir } => {
            commands::convert::run(&input_dir, out_dir.as_deref(), cli.quiet)
        }

        Commands::Review {
            alignments,
            reviewer_id,
            reviewer_name,
            out_dir,
            list,
        } => commands::review::run(&alignments, reviewer_id, reviewer_name, &out_dir, list),

        Commands::Match {
            source,
            target,
            output_dir,
            jar,
            java,
            jvm_args,
        } => commands::match_cmd::run(&source, &target, &output_dir, jar, java, jvm_args, &config),

        Commands::ToTurtle { dir } => commands::to_turtle::run(&dir, cli.quiet),
    }
}
