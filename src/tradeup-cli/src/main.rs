mod cli;
mod commands;
mod config;
mod session;

use anyhow::Result;
use clap::Parser;

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { command } => match command {
            CatalogCommand::Fetch { output, url } => {
                commands::catalog::fetch(output.as_deref(), &url)?;
            }

            CatalogCommand::Info { catalog } => {
                commands::catalog::info(catalog)?;
            }
        },

        Commands::Search {
            query,
            limit,
            catalog,
        } => {
            commands::search::handle(&query.join(" "), limit, catalog)?;
        }

        Commands::Outcomes {
            inputs,
            catalog,
            json,
        } => {
            commands::outcomes::handle(&inputs, catalog, json)?;
        }

        Commands::Float {
            inputs,
            output_id,
            catalog,
        } => {
            commands::outcomes::float(&inputs, &output_id, catalog)?;
        }

        Commands::Configure { catalog_path, show } => {
            commands::configure::handle(catalog_path, show)?;
        }
    }

    Ok(())
}
