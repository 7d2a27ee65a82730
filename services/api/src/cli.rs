use crate::demo::{run_criteria_extract, run_demo, DemoArgs, ExtractArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use placement_tracker::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Placement Eligibility Tracker",
    about = "Run the placement eligibility and training tracker from the command line",
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
    /// Inspect criteria extraction for a hiring document
    Criteria {
        #[command(subcommand)]
        command: CriteriaCommand,
    },
    /// Run the full pipeline against a roster for a quick demo
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum CriteriaCommand {
    /// Extract structured criteria from a document file and print them as JSON
    Extract(ExtractArgs),
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
        Command::Criteria {
            command: CriteriaCommand::Extract(args),
        } => run_criteria_extract(args),
        Command::Demo(args) => run_demo(args),
    }
}
