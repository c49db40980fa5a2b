//! Rebuild Provenance CLI
//!
//! Resolves the provenance of a promoted rebuild from a host build export.
//!
//! ## Commands
//!
//! - `resolve`: Print the provenance annotation for a build
//! - `hashes`: Print every remote → commit hash recorded by a build's checkouts
//! - `digest`: Print the content digest of a build's provenance record

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rebuild_provenance::{
    collect_commit_hashes, BuildHandle, BuildSnapshot, PromoteRebuildAction,
};
use serde::Serialize;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "rebuild-provenance")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve upstream and commit provenance for promoted rebuilds", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the provenance annotation for a build export
    Resolve {
        /// Path to the build export (JSON)
        #[arg(short, long, env = "REBUILD_PROVENANCE_BUILD")]
        build: PathBuf,

        /// Write the annotation to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show the remote → commit hash map collected from checkout records
    Hashes {
        /// Path to the build export (JSON)
        #[arg(short, long, env = "REBUILD_PROVENANCE_BUILD")]
        build: PathBuf,
    },

    /// Print the content digest of the resolved provenance record
    Digest {
        /// Path to the build export (JSON)
        #[arg(short, long, env = "REBUILD_PROVENANCE_BUILD")]
        build: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct DigestOutput {
    upstream_project: String,
    upstream_build: u64,
    digest: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    rebuild_provenance::init_tracing(cli.json, level);

    match cli.command {
        Commands::Resolve {
            build,
            output,
            compact,
        } => cmd_resolve(&build, output.as_deref(), compact),
        Commands::Hashes { build } => cmd_hashes(&build),
        Commands::Digest { build } => cmd_digest(&build),
    }
}

fn load_build(path: &Path) -> Result<BuildSnapshot> {
    BuildSnapshot::load(path)
        .with_context(|| format!("Failed to load build export {}", path.display()))
}

fn render_action(action: &PromoteRebuildAction, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(action)?
    } else {
        serde_json::to_string_pretty(action)?
    };
    Ok(rendered)
}

fn cmd_resolve(build_path: &Path, output: Option<&Path>, compact: bool) -> Result<()> {
    let build = load_build(build_path)?;
    let action = PromoteRebuildAction::new(&build);
    let rendered = render_action(&action, compact)?;

    match output {
        Some(path) => {
            std::fs::write(path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(
                output = %path.display(),
                url_name = action.url_name(),
                "wrote provenance annotation"
            );
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// One `{hash} {remote}` line per collected remote, ordered by remote URL.
fn render_hashes<B: BuildHandle>(build: &B) -> Vec<String> {
    let hashes = collect_commit_hashes(build.checkout_records());
    if hashes.is_empty() {
        return vec!["No checkout records with a built revision".to_string()];
    }
    hashes
        .iter()
        .map(|(remote, hash)| format!("{hash} {remote}"))
        .collect()
}

fn cmd_hashes(build_path: &Path) -> Result<()> {
    let build = load_build(build_path)?;
    for line in render_hashes(&build) {
        println!("{line}");
    }
    Ok(())
}

fn digest_output(build: &BuildSnapshot) -> DigestOutput {
    let record = PromoteRebuildAction::new(build).into_record();
    DigestOutput {
        upstream_project: record.upstream_project().to_string(),
        upstream_build: record.upstream_build(),
        digest: record.digest(),
    }
}

fn cmd_digest(build_path: &Path) -> Result<()> {
    let build = load_build(build_path)?;
    println!("{}", serde_json::to_string_pretty(&digest_output(&build))?);
    Ok(())
}
