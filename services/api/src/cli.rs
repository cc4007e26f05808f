use crate::commands::{run_tenant_command, TenantCommand};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rental_hub::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Rental Hub",
    about = "Serve and inspect tenant records for the rental marketplace",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Convert tenant records between their form and API shapes
    Tenants {
        #[command(subcommand)]
        command: TenantCommand,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Tenants { command } => run_tenant_command(command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["rental-hub-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn roster_import_accepts_wire_flag() {
        let cli = Cli::try_parse_from([
            "rental-hub-api",
            "tenants",
            "import-roster",
            "roster.csv",
            "--wire",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Tenants {
                command: TenantCommand::ImportRoster(args),
            }) => {
                assert!(args.wire);
                assert_eq!(args.csv.to_string_lossy(), "roster.csv");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
