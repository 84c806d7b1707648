use crate::report::{run_directory_report, run_service_areas, DirectoryReportArgs, ServiceAreasArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use gtm_directory::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "GTM Directory",
    about = "Serve and inspect agency and fractional jobs directory statistics",
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
    /// Compute directory page statistics from CSV exports
    Directory {
        #[command(subcommand)]
        command: DirectoryCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DirectoryCommand {
    /// Print agency and job statistics for one page selection
    Report(DirectoryReportArgs),
    /// List the distinct service areas covered by published agencies
    Areas(ServiceAreasArgs),
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
        Command::Directory {
            command: DirectoryCommand::Report(args),
        } => run_directory_report(args),
        Command::Directory {
            command: DirectoryCommand::Areas(args),
        } => run_service_areas(args),
    }
}
