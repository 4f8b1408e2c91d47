mod core;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::core::errors::Error;
use crate::core::render;
use crate::core::service::ServiceKind;

#[derive(Parser)]
#[command(
    name = "git-glance",
    version,
    about = "Show a hosted git project's issues in your terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a git issue's description in your terminal
    #[command(name = "show-issue")]
    ShowIssue {
        /// Issue reference number within the project
        reference: u64,

        /// Git service type hosting the project
        #[arg(short = 't', long = "type", value_enum, default_value = "gitlab")]
        service: ServiceKind,

        /// Print raw markdown without terminal rendering
        #[arg(short, long)]
        raw: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::ShowIssue {
            reference,
            service,
            raw,
        } => cmd_show_issue(reference, service, raw),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // Picking a stubbed service family is a notice, not a failure.
        Err(err @ Error::Unsupported { .. }) => {
            println!("{}", err);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Locate the project, resolve its id, fetch the issue, print it.
/// Two blocking network calls, strictly in sequence.
fn cmd_show_issue(reference: u64, service: ServiceKind, raw: bool) -> Result<(), Error> {
    let cwd = std::env::current_dir()?;
    let info = crate::core::project::locate(&cwd)?;

    let client = service.client();
    let project_id = client.resolve_project_id(&info)?;
    let issue = client.fetch_issue(&info, project_id, reference)?;

    render::print_issue(&issue, raw);
    Ok(())
}
