use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use symmatria_core::config::ConfigRoot;
use symmatria_core::domain::Domain;
use symmatria_core::latex::LatexTemplate;
use symmatria_execution::logging::DEFAULT_FILTER;
use symmatria_execution::{LogOutput, init_tracing};

mod commands;

#[derive(Parser)]
#[command(name = "symmatria-cli")]
#[command(about = "SYMMATRIA CLI - Mathematical exploration and collaboration companion", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the mathematical domains
    Domains,
    /// Show the profile of one domain
    Profile {
        /// Domain id, e.g. number-theory
        domain: Domain,
        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask one question and print the reply
    Ask {
        domain: Domain,
        text: String,
        /// Print the resulting turn as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print reflections from the Think page
    Think {
        /// Number of reflections to show
        #[arg(long, default_value_t = 3)]
        cycles: usize,
    },
    /// Write the bibliography or a LaTeX document to disk
    Export {
        #[arg(value_enum)]
        target: ExportKind,
        /// Output directory (overrides [export] output_dir)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Templates inserted into the LaTeX document
        #[arg(long = "template", default_value = "theorem")]
        templates: Vec<LatexTemplate>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportKind {
    Bib,
    Tex,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = if cli.json_logs {
        LogOutput::Json
    } else {
        LogOutput::Stderr
    };
    init_tracing(DEFAULT_FILTER, output, None)?;

    let config = match &cli.config {
        Some(path) => ConfigRoot::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ConfigRoot::load_default().context("Failed to load default config")?,
    };

    match cli.command {
        Commands::Domains => commands::domains::list(config.session.default_domain),
        Commands::Profile { domain, json } => commands::domains::profile(domain, json)?,
        Commands::Ask { domain, text, json } => {
            commands::ask::run(&config.session, domain, &text, json).await?
        }
        Commands::Think { cycles } => commands::think::run(config.contemplation, cycles).await,
        Commands::Export {
            target,
            out,
            templates,
        } => {
            let dir = out.unwrap_or(config.export.output_dir);
            let path = match target {
                ExportKind::Bib => commands::export::bibliography(&dir).await?,
                ExportKind::Tex => commands::export::latex(&dir, &templates).await?,
            };
            println!("✅ Wrote {}", path.display());
        }
    }

    Ok(())
}
