use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

use fincalc::cli::{
    handle_calculate_command, handle_limits_command, handle_session_command, CalculateCommand,
};
use fincalc::config::Limits;

#[derive(Parser)]
#[command(
    name = "fincalc",
    author = "The fincalc developers",
    version,
    about = "Terminal calculator for loan payments, savings goals and future value",
    long_about = "fincalc computes the monthly payment on a loan, what regular monthly \
                  deposits grow to, and the monthly deposit needed to reach a savings \
                  goal. Run it without a subcommand for the interactive menu."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (the default)
    #[command(alias = "menu")]
    Session,

    #[command(flatten)]
    Calculate(CalculateCommand),

    /// Show the input limits
    Limits {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let limits = Limits::default();

    match cli.command {
        None | Some(Commands::Session) => {
            handle_session_command(limits)?;
        }
        Some(Commands::Calculate(cmd)) => {
            handle_calculate_command(cmd, &limits)?;
        }
        Some(Commands::Limits { json }) => {
            handle_limits_command(&limits, json)?;
        }
    }

    Ok(())
}
