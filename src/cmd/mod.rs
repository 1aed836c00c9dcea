use crate::{pkg::server::listen, prelude::Result};
use clap::{Parser, Subcommand};

mod search;

#[derive(Parser)]
#[command(about = "towngig local jobs board")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the job board over http
    Listen,
    /// Filter the catalog from the command line
    Search(search::SearchArgs),
    /// Show every category with its job count
    Categories,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) => {
            listen().await?;
        }
        Some(SubCommandType::Search(search_args)) => {
            search::run(search_args).await?;
        }
        Some(SubCommandType::Categories) => {
            search::categories().await?;
        }
        None => {
            tracing::error!("no subcommand passed");
        }
    }
    Ok(())
}
