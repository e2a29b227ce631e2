use clap::{Parser, Subcommand};
use stagehand::{AppError, ReportFormat};

#[derive(Parser)]
#[command(name = "stagehand")]
#[command(version)]
#[command(
    about = "Stage JSON framework configuration and launch the application server",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stage *.json configuration files into framework/
    #[clap(visible_alias = "s")]
    Stage {
        /// Destination directory (default: framework)
        #[arg(long)]
        dest: Option<String>,
        /// Preferred source directory checked before the fallback scan
        #[arg(long)]
        source: Option<String>,
        /// Report output format
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Print diagnostics: directory tree, discovered and staged config files
    #[clap(visible_alias = "d")]
    Doctor {
        /// Destination directory to inspect (default: framework)
        #[arg(long)]
        dest: Option<String>,
    },
    /// Run the container entrypoint: pre-flight, credential check, then exec the server
    Serve {
        /// Bind address (default: 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
        /// Port (default: 7860)
        #[arg(long)]
        port: Option<u16>,
        /// Server program to exec (default: uvicorn)
        #[arg(long)]
        server_program: Option<String>,
        /// Skip the pre-flight staging and diagnostic pass
        #[arg(long)]
        skip_preflight: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Stage { dest, source, format } => {
            stagehand::stage(dest.as_deref(), source.as_deref(), format).map(|_| ())
        }
        Commands::Doctor { dest } => stagehand::doctor(dest.as_deref()).map(|_| ()),
        Commands::Serve { host, port, server_program, skip_preflight } => {
            stagehand::serve(host.as_deref(), port, server_program.as_deref(), skip_preflight)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
