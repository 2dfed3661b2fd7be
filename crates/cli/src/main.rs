use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use compiler::DialectKind;
use query_builder::{QueryBuilder, QueryRequest, QuerySettings};
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

#[derive(Parser)]
#[command(
    name = "linq-filter",
    version = "0.1.0",
    about = "Compile filter conditions into Dynamic LINQ expressions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Logs go to stderr so stdout carries only JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compile {
            request,
            settings,
            dialect,
            pretty,
            output,
        } => {
            let settings = load_settings(settings.as_deref(), dialect.as_deref())?;
            info!(request = %request, dialect = ?settings.dialect, "Compiling request");

            let source = tokio::fs::read_to_string(&request).await?;
            let request = QueryRequest::from_json(&source)?;
            let plan = QueryBuilder::new(&settings).plan(&request)?;

            output::write_json(&plan, pretty, output).await?;
        }
        Commands::Operators { json } => {
            if json {
                output::write_json(&output::operator_rows(), true, None).await?;
            } else {
                output::print_operator_table();
            }
        }
    }

    Ok(())
}

fn load_settings(
    path: Option<&str>,
    dialect: Option<&str>,
) -> Result<QuerySettings, CliError> {
    let mut settings = match path {
        Some(path) => QuerySettings::from_file(path)?,
        None => QuerySettings::default(),
    };

    if let Some(dialect) = dialect {
        settings.dialect = DialectKind::from_str(dialect).map_err(CliError::InvalidDialect)?;
    }

    Ok(settings)
}
