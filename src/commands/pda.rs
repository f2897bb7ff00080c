use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use omcvote_client::config::Config;
use omcvote_client::pda;

use super::parse_pubkey;

#[derive(Subcommand)]
pub enum PdaCommands {
    /// Votebank address for a title
    Votebank {
        /// Votebank title
        title: String,
    },

    /// Proposal address within a votebank
    Proposal {
        /// Votebank address
        #[arg(long)]
        votebank: String,

        /// Proposal id
        #[arg(long)]
        id: u32,
    },

    /// Vote ledger address for a voting identity
    Vote {
        /// Votebank address
        #[arg(long)]
        votebank: String,

        /// Voting identity mint
        #[arg(long)]
        mint: String,

        /// Proposal id
        #[arg(long)]
        id: u32,
    },

    /// Delegate account for a wallet
    Delegate {
        /// Wallet address
        owner: String,
    },

    /// Fee-payer account for a votebank
    FeePayer {
        /// Votebank address
        votebank: String,
    },
}

/// Derive and print a program address. Entirely offline.
pub fn execute(action: PdaCommands) -> Result<()> {
    let program = Config::load()?.program_config()?;

    let (address, bump) = match action {
        PdaCommands::Votebank { title } => pda::votebank_address(&title, &program.program_id)?,
        PdaCommands::Proposal { votebank, id } => {
            let votebank = parse_pubkey(&votebank, "votebank")?;
            pda::proposal_address(&votebank, id, &program.program_id)?
        }
        PdaCommands::Vote { votebank, mint, id } => {
            let votebank = parse_pubkey(&votebank, "votebank")?;
            let mint = parse_pubkey(&mint, "mint")?;
            pda::vote_address(&votebank, &mint, id, &program.program_id)?
        }
        PdaCommands::Delegate { owner } => {
            let owner = parse_pubkey(&owner, "owner")?;
            pda::delegate_address(&owner, &program.program_id)?
        }
        PdaCommands::FeePayer { votebank } => {
            let votebank = parse_pubkey(&votebank, "votebank")?;
            pda::fee_payer_address(&votebank, &program.fee_payer_seed, &program.program_id)?
        }
    };

    println!("  Address: {}", address.to_string().bright_yellow());
    println!("  Bump:    {}", bump.to_string().dimmed());

    Ok(())
}
