use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "doi-mds")]
#[command(about = "Register and maintain DOIs at the DataCite Metadata Store")]
#[command(version)]
pub struct Cli {
    /// TOML file with a [doi.registration.datacite] section (default: ./doi.toml if present)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds (reqwest default when omitted)
    #[arg(long, short = 't')]
    pub timeout: Option<u64>,

    #[arg(long, short = 'v', help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit JSON log lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Upload metadata XML and bind the DOI to its landing page
    Register {
        #[arg(long)]
        doi: String,
        /// Path to the DataCite metadata XML document
        #[arg(long)]
        metadata: PathBuf,
        #[arg(long)]
        url: String,
    },
    /// Check that the DOI resolves to the given landing page (exit code 1 otherwise)
    Check {
        #[arg(long)]
        doi: String,
        #[arg(long)]
        url: String,
    },
    /// Bind the DOI to a new landing page
    Update {
        #[arg(long)]
        doi: String,
        #[arg(long)]
        url: String,
    },
    /// Mark the DOI's metadata inactive
    Delete {
        #[arg(long)]
        doi: String,
    },
}

impl Command {
    pub fn doi(&self) -> &str {
        match self {
            Command::Register { doi, .. }
            | Command::Check { doi, .. }
            | Command::Update { doi, .. }
            | Command::Delete { doi } => doi,
        }
    }
}
