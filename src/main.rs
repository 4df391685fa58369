mod assets;
mod commands;
mod report;

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use commands::Command;
use lodestone_catalog::{Catalog, vanilla};
use lodestone_host::StackSizes;

#[derive(Parser)]
#[command(name = "lodestone", about = "Query the block and item material catalog")]
struct Cli {
    /// Directory holding tags.toml, materials.toml and optionally stack_sizes.toml
    #[arg(long, global = true)]
    assets: Option<PathBuf>,
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, Box<dyn Error>> {
    let data_dir = assets::resolve_data_dir(cli.assets);
    let owned;
    let catalog: &Catalog = match &data_dir {
        Some(dir) => {
            log::info!("loading catalog from {}", dir.display());
            owned = Catalog::load_from_paths(assets::tags_path(dir), assets::materials_path(dir))?;
            &owned
        }
        None => vanilla(),
    };
    let stack_sizes = match &data_dir {
        Some(dir) if assets::stack_sizes_path(dir).exists() => {
            StackSizes::from_path(assets::stack_sizes_path(dir))?
        }
        _ => StackSizes::vanilla(),
    };
    let host = commands::host_for(catalog, stack_sizes);

    let outcome = commands::execute(&cli.command, catalog, &host)?;
    print!("{}", outcome.stdout);
    eprint!("{}", outcome.stderr);
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
