use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kallysto::{AppError, KallystoConfig, OutputFormat, PublicationOptions};

#[derive(Parser)]
#[command(name = "kallysto")]
#[command(version)]
#[command(about = "Provision reproducible-research publication directories", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the directory tree, log file and definitions file for a publication
    #[clap(visible_alias = "i")]
    Init {
        /// Publication title
        title: String,
        /// Kallysto root (overrides KALLYSTO_PATH and the config file)
        #[arg(short, long)]
        root: Option<PathBuf>,
        /// Config file (defaults to ./kallysto.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Do not create the definitions file
        #[arg(long)]
        no_defs: bool,
        /// Definitions format: latex or markdown
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { title, root, config, no_defs, format } => {
            init(&title, root, config, no_defs, format)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init(
    title: &str,
    root: Option<PathBuf>,
    config: Option<PathBuf>,
    no_defs: bool,
    format: Option<OutputFormat>,
) -> Result<(), AppError> {
    let cwd = std::env::current_dir().map_err(|e| AppError::path(".", e))?;
    let config = match config {
        Some(path) => KallystoConfig::load(&path)?,
        None => KallystoConfig::discover(&cwd)?,
    };

    let kallysto_path = config.resolve_root(root.as_deref(), &cwd);
    let options = PublicationOptions {
        write_defs: config.publication.write_defs && !no_defs,
        format: format.unwrap_or(config.publication.format),
    };

    let (publication, report) = kallysto::provision_publication(title, &kallysto_path, options)?;

    for (path, status) in &report.entries {
        println!("{:>8}  {}", status.label(), path.display());
    }
    println!(
        "✅ Publication \"{}\" ready at {}",
        publication.title(),
        publication.pub_path().display()
    );
    Ok(())
}
