use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sssom", about = "SSSOM alignment curation toolkit", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to config file (default: ./sssom.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert Alignment API Turtle files to SSSOM mapping sets
    Convert {
        /// Directory containing .ttl alignment files
        input_dir: PathBuf,

        /// Output directory (default: same as input)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Review SSSOM mappings and record reviewer decisions
    Review {
        /// Path to the SSSOM alignment set (Turtle)
        #[arg(short = 'a', long = "alignments")]
        alignments: PathBuf,

        /// Reviewer id (ORCID or other identifying IRI); prompted when omitted
        #[arg(long)]
        reviewer_id: Option<String>,

        /// Reviewer display name; prompted when omitted
        #[arg(long)]
        reviewer_name: Option<String>,

        /// Output directory for the reviewed set
        #[arg(long, default_value = "output")]
        out_dir: PathBuf,

        /// List the mappings and exit without reviewing
        #[arg(long)]
        list: bool,
    },

    /// Run an external ontology matcher on two ontologies
    Match {
        /// Source ontology (file path or IRI)
        source: String,

        /// Target ontology (file path or IRI)
        target: String,

        /// Directory the matcher writes its results to
        output_dir: PathBuf,

        /// Path to the matcher jar (overrides the config file)
        #[arg(long)]
        jar: Option<PathBuf>,

        /// Java binary (overrides the config file)
        #[arg(long)]
        java: Option<String>,

        /// Extra JVM argument (repeatable; replaces config JVM args)
        #[arg(long = "jvm-arg")]
        jvm_args: Vec<String>,
    },

    /// Convert RDF/XML files in a directory to Turtle
    ToTurtle {
        /// Directory containing .rdf files
        dir: PathBuf,
    },
}
