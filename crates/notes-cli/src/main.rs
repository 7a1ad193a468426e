//! Simple Note CLI - list, write, and soft-delete notes from the terminal
//!
//! Talks to a notes REST API; `notes shell` runs the interactive list and form.

mod cli;
mod commands;
mod error;


use clap::{CommandFactory, Parser};

use crate::cli::{Cli, Commands};
use crate::commands::{
    run_add, run_completions, run_config, run_delete, run_edit, run_list, run_restore, run_shell,
};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notes=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api_url = cli.api_url;

    match cli.command {
        Some(Commands::List { deleted, json }) => run_list(api_url, deleted, json).await?,
        Some(Commands::Add { title, content }) => run_add(api_url, title, content).await?,
        Some(Commands::Edit { id, title, content }) => {
            run_edit(api_url, &id, title, content).await?;
        }
        Some(Commands::Delete { id }) => run_delete(api_url, &id).await?,
        Some(Commands::Restore { id }) => run_restore(api_url, &id).await?,
        Some(Commands::Completions { shell, output }) => {
            run_completions(shell, output.as_deref())?;
        }
        Some(Commands::Config { command }) => run_config(command, api_url)?,
        Some(Commands::Shell) => run_shell(api_url).await?,
        None => {
            if std::io::IsTerminal::is_terminal(&std::io::stdin()) {
                run_shell(api_url).await?;
            } else {
                Cli::command().print_help().map_err(CliError::Io)?;
                println!();
            }
        }
    }

    Ok(())
}
