#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;
use argh::FromArgs;
use core::error::Error;

#[derive(FromArgs, Debug)]
/// Inspection tool for VTF texture files
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Info(commands::info::InfoCmd),
    Resources(commands::resources::ResourcesCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli: TopLevel = argh::from_env();

    match cli.command {
        Commands::Info(cmd) => {
            commands::info::handle_info_command(cmd)?;
        }
        Commands::Resources(cmd) => {
            commands::resources::handle_resources_command(cmd)?;
        }
    }

    Ok(())
}
