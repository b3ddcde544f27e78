use anyhow::Context;
use clap::Parser;
use clialgo::application::{CommandDispatcher, FileStore};
use clialgo::cli::{Cli, ConsoleUi};
use clialgo::error::ClialgoError;
use clialgo::infrastructure::{Config, TomlStorage, Workspace};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let code = e
                .downcast_ref::<ClialgoError>()
                .map(ClialgoError::exit_code)
                .unwrap_or(1);
            std::process::exit(code);
        }
    }
}

fn init_tracing(verbose: bool) {
    // Logs go to stderr so they never mix with the console UI on stdout
    let filter = if verbose {
        EnvFilter::new("clialgo=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let root = Workspace::discover(cli.root).context("Failed to resolve workspace root")?;

    let mut config = Config::load_or_create(&root).context("Failed to load configuration")?;
    if let Some(dir) = cli.export_dir {
        config.export_dir = dir;
    }

    let workspace = Workspace::new(root.clone(), config.export_path(&root));
    workspace.initialize()?;

    let storage = TomlStorage::new(config.data_path(&root));
    let store = FileStore::load(storage)
        .with_context(|| format!("Failed to load notes from {}", config.data_path(&root).display()))?;

    // Drop any records skipped while loading
    store.recreate_all()?;

    tracing::info!(
        root = %root.display(),
        notes = store.len(),
        export_dir = %workspace.export_dir().display(),
        "Workspace ready"
    );

    let mut dispatcher = CommandDispatcher::new(workspace, store, ConsoleUi::stdout());
    dispatcher.run(std::io::stdin().lock())?;

    Ok(())
}
