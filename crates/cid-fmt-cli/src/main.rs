//! cidfmt - Convert and discover properties of content identifiers.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use commands::{format, list};

#[derive(Parser)]
#[command(name = "cidfmt")]
#[command(about = "Convert and discover properties of CIDs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format and convert CIDs in various useful ways
    #[command(after_help = format!("Format directives:\n{}", cid_fmt::format_reference()))]
    Format {
        /// CIDs to format
        #[arg(required = true)]
        cids: Vec<String>,
        /// Printf style format string
        #[arg(short = 'f', default_value = cid_fmt::DEFAULT_TEMPLATE)]
        format: String,
        /// CID version to convert to
        #[arg(short = 'v')]
        version: Option<String>,
        /// Multibase to display CID in
        #[arg(short = 'b')]
        base: Option<String>,
    },
    /// Convert CIDs to base32 CID version 1 (reads stdin when no CIDs are given)
    Base32 {
        /// CIDs to convert
        cids: Vec<String>,
    },
    /// List available multibase encodings
    Bases {
        /// Also include the single letter prefixes
        #[arg(long)]
        prefix: bool,
        /// Also include numeric codes
        #[arg(long)]
        numeric: bool,
    },
    /// List available CID codecs
    Codecs {
        /// Also include numeric codes
        #[arg(long)]
        numeric: bool,
    },
    /// List available multihashes
    Hashes {
        /// Also include numeric codes
        #[arg(long)]
        numeric: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Format {
            cids,
            format: template,
            version,
            base,
        } => format::run(cids, template, version, base),
        Commands::Base32 { cids } => format::run_base32(cids),
        Commands::Bases { prefix, numeric } => list::bases(prefix, numeric),
        Commands::Codecs { numeric } => list::codecs(numeric),
        Commands::Hashes { numeric } => list::hashes(numeric),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
