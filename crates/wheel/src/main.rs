use anyhow::Context;
use clap::{Parser, Subcommand};
use plutchik::{Catalog, Locale, Variant};
use std::path::PathBuf;
use wheel::config::{self, Config};
use wheel::session::Session;
use wheel::sys::runtime::{self, CatalogSource};
use wheel::ui::TerminalRenderer;

#[derive(Parser, Debug)]
#[command(name = "wheel", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Emotion dataset to load (overrides the config file)
    #[arg(short = 'c', long)]
    catalog: Option<PathBuf>,

    /// Locale whose display names key the dataset, e.g. "es"
    #[arg(short = 'l', long)]
    locale: Option<Locale>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Validate the dataset and print a summary
    Check,
    /// Write the default config file and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = config::load_or_default();
    if let Some(catalog) = cli.catalog {
        config.catalog = catalog;
    }
    if cli.locale.is_some() {
        config.locale = cli.locale;
    }

    match cli.command {
        Some(Commands::Check) => check(&config),
        Some(Commands::InitConfig) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        None => run(&config),
    }
}

fn check(config: &Config) -> anyhow::Result<()> {
    let table = config.locale.map(|l| l.table()).transpose()?;
    let catalog = Catalog::from_path(&config.catalog, table.as_ref())
        .with_context(|| format!("{} is not a usable dataset", config.catalog.display()))?;

    let base = catalog
        .iter()
        .filter(|r| r.variant() == Variant::Base)
        .count();
    println!(
        "{}: {} emotions ({} base, {} intermediate)",
        config.catalog.display(),
        catalog.len(),
        base,
        catalog.len() - base
    );
    Ok(())
}

fn run(config: &Config) -> anyhow::Result<()> {
    let (tx, rx) = async_channel::bounded(32);

    runtime::start_background_services(tx, CatalogSource::from(config));

    let mut session = Session::new(TerminalRenderer::new(std::io::stdout()), config.disabled_color);
    session.run_blocking(&rx);

    if session.is_static() {
        anyhow::bail!("the session ended in static mode");
    }
    Ok(())
}
