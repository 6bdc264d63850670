use alza_tools::cli;
use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "alza",
    about = "Alza Tools — product-listing scraper and CSV-to-HTML catalogue builder",
    version,
    after_help = "Run 'alza <command> --help' for details on each command."
)]
struct Cli {
    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Suppress diagnostic logging
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search alza.cz and extract product listings across paginated results
    Scrape {
        /// Search query (prompted for when omitted)
        query: Option<String>,
        /// CSV output filename (implies saving without the y/n prompt)
        #[arg(long)]
        output: Option<String>,
        /// Save results without asking
        #[arg(long, short = 'y')]
        yes: bool,
        /// Run with a visible browser window instead of headless
        #[arg(long)]
        headed: bool,
    },
    /// Convert a CSV product export into a filterable HTML catalogue
    Catalogue {
        /// Input CSV path (prompted for when omitted)
        input: Option<PathBuf>,
        /// Output HTML filename (default: catalogue.html)
        #[arg(long)]
        output: Option<String>,
        /// Document title (default: "Alza Product Export List")
        #[arg(long)]
        title: Option<String>,
    },
    /// Check environment and diagnose issues
    Doctor,
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "alza_tools=debug"
    } else if cli.quiet {
        "alza_tools=error"
    } else {
        "alza_tools=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(level.parse().expect("valid logging directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Scrape {
            query,
            output,
            yes,
            headed,
        } => cli::scrape_cmd::run(query, output, yes, headed).await,
        Commands::Catalogue {
            input,
            output,
            title,
        } => cli::catalogue_cmd::run(input, output, title).await,
        Commands::Doctor => cli::doctor::run().await,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "alza", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
