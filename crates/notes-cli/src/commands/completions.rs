use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::CliError;

pub fn run_completions(shell: Shell, output_path: Option<&Path>) -> Result<(), CliError> {
    if let Some(path) = output_path {
        let mut file = File::create(path)?;
        write_completions(shell, &mut file);
        file.flush()?;
        println!("{}", path.display());
    } else {
        write_completions(shell, &mut io::stdout().lock());
    }

    Ok(())
}

/// Write the completion script for every `notes` subcommand in `shell`'s syntax
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, out);
}
