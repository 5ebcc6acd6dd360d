mod analysis;
mod cli;
mod dataset;
mod error;
mod fmt;
mod models;
mod pipeline;
mod settings;

use clap::Parser;

use cli::{Cli, Commands, ReportCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir } => cli::init::run(data_dir),
        Commands::Process { input, output } => {
            cli::process::run(input.as_deref(), output.as_deref())
        }
        Commands::Report { command } => match command {
            ReportCommands::Daily { region, data } => {
                cli::report::daily(region.as_deref(), data.as_deref())
            }
            ReportCommands::Verdict { region, data } => {
                cli::report::verdict(region.as_deref(), data.as_deref())
            }
        },
        Commands::Regions { data } => cli::regions::run(data.as_deref()),
        Commands::Demo => cli::demo::run(),
        Commands::Status => cli::status::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
