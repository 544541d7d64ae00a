use appmanifest::{Config, ManifestFinder, ParsedManifest, ReportFormat, Reporter};
use clap::Parser;
use miette::{miette, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// appmanifest - Parse and validate app manifest XML
#[derive(Parser, Debug)]
#[command(name = "appmanifest")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Manifest file, or directory to scan for manifests
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Locale every translated field must carry (e.g. en-GB)
    #[arg(short = 'l', long)]
    default_locale: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Patterns to exclude (can be specified multiple times)
    #[arg(short, long)]
    exclude: Vec<String>,

    /// Parse manifests in parallel
    #[arg(long)]
    parallel: bool,

    /// Compact JSON output
    #[arg(long)]
    compact: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.quiet);

    info!("appmanifest v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli)?;
    run(&config, &cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = if let Some(config_path) = &cli.config {
        Config::from_file(config_path)?
    } else {
        // Try to load from default locations
        Config::from_default_locations(config_root(&cli.path))?
    };

    // Override with CLI arguments
    if let Some(locale) = &cli.default_locale {
        config.default_locale = locale.clone();
    }
    if !cli.exclude.is_empty() {
        config.exclude.extend(cli.exclude.clone());
    }
    if cli.compact {
        config.report.pretty = false;
    }

    Ok(config)
}

/// Directory searched for a config file when none is given
fn config_root(path: &Path) -> &Path {
    if path.is_file() {
        path.parent().unwrap_or(Path::new("."))
    } else {
        path
    }
}

fn run(config: &Config, cli: &Cli) -> Result<()> {
    let format = match cli.format {
        Some(format) => ReportFormat::from(format),
        None => ReportFormat::from_name(&config.report.format)
            .ok_or_else(|| miette!("Unknown report format: {}", config.report.format))?,
    };

    let finder = ManifestFinder::new(config);
    let paths = finder.find(&cli.path)?;

    info!("Found {} manifests", paths.len());

    let manifests: Vec<ParsedManifest> = if cli.parallel {
        paths.into_par_iter().map(ParsedManifest::load).collect()
    } else {
        paths.into_iter().map(ParsedManifest::load).collect()
    };

    for parsed in manifests.iter().filter(|m| !m.is_ok()) {
        if let Err(err) = &parsed.result {
            warn!("{}: {}", parsed.path.display(), err);
        }
    }

    let reporter = Reporter::new(format, cli.output.clone(), config.default_locale.clone())
        .with_pretty(config.report.pretty);
    reporter.report(&manifests)?;

    let failed = manifests.iter().filter(|m| !m.is_ok()).count();
    if failed > 0 {
        return Err(miette!(
            "{} of {} manifests failed to parse",
            failed,
            manifests.len()
        ));
    }

    Ok(())
}
