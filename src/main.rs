mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;

use omcvote_client::config::Config;

#[derive(Parser)]
#[command(name = "omcvote")]
#[command(version = "0.1.0")]
#[command(about = "Inspection CLI for the omcvote governance program", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect a votebank and its proposals
    Votebank {
        /// Votebank title (PDA is derived) or explicit address
        #[arg(long)]
        title: Option<String>,

        /// Explicit votebank address, overrides --title
        #[arg(long)]
        address: Option<String>,
    },

    /// Inspect a single proposal
    Proposal {
        /// Votebank address the proposal belongs to
        #[arg(long)]
        votebank: String,

        /// Proposal id
        #[arg(long)]
        id: u32,
    },

    /// Inspect a wallet's delegate account
    Delegate {
        /// Wallet whose delegate account to look up
        #[arg(long)]
        owner: String,
    },

    /// Derive program addresses without touching RPC
    Pda {
        #[command(subcommand)]
        action: commands::pda::PdaCommands,
    },

    /// Translate on-chain custom error codes
    DecodeError {
        /// Custom error codes, e.g. 6209
        codes: Vec<u32>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set Solana cluster (devnet/mainnet-beta)
    SetCluster {
        /// Cluster name
        cluster: String,
    },

    /// Show current configuration
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Votebank { title, address } => {
            commands::votebank::execute(title, address)?;
        }
        Commands::Proposal { votebank, id } => {
            commands::proposal::execute(&votebank, id)?;
        }
        Commands::Delegate { owner } => {
            commands::delegate::execute(&owner)?;
        }
        Commands::Pda { action } => {
            commands::pda::execute(action)?;
        }
        Commands::DecodeError { codes } => {
            commands::decode_error::execute(&codes);
        }
        Commands::Config { action } => match action {
            ConfigCommands::SetCluster { cluster } => {
                let mut config = Config::load()?;
                config.set_cluster(&cluster)?;
                println!(
                    "Cluster set to {} ({})",
                    config.cluster.bright_green(),
                    config.rpc_url.dimmed()
                );
            }
            ConfigCommands::Show => {
                let config = Config::load()?;
                println!("{}", "═══ Configuration ═══".bright_cyan());
                println!("  Cluster:  {}", config.cluster.bright_white());
                println!("  RPC URL:  {}", config.rpc_url.bright_white());
                let program = config.program_config()?;
                println!("  Program:  {}", program.program_id.to_string().bright_white());
                println!("  Treasury: {}", program.treasury.to_string().bright_white());
            }
        },
    }

    Ok(())
}
