use crate::demo::{run_dashboard_report, run_demo, DashboardReportArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use learnlytics::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Learning Analytics Dashboard",
    about = "Serve and explore the learning analytics dashboard engine from the command line",
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
    /// Generate a learning dashboard report for stakeholder demos
    Dashboard {
        #[command(subcommand)]
        command: DashboardCommand,
    },
    /// Run an end-to-end CLI demo over a seeded synthetic dataset
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum DashboardCommand {
    /// Build a filtered dashboard report and print it to stdout
    Report(DashboardReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured dataset seed
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Dashboard {
            command: DashboardCommand::Report(args),
        } => run_dashboard_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
