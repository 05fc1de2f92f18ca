mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;
use cli::Commands;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Check { file } => commands::check(file.as_deref()),
        Commands::Show { file, json } => commands::show(file.as_deref(), json),
    }
}
