use anyhow::Result;
use colored::Colorize;

use omcvote_client::accounts::{DelegateAccount, ProgramAccount};
use omcvote_client::errors::ClientError;
use omcvote_client::pda;
use omcvote_client::restriction::MAX_DELEGATE_ADDRESSES;

use super::{connect, parse_pubkey};

/// Fetch a wallet's delegate account and print the authorized addresses.
pub fn execute(owner: &str) -> Result<()> {
    let (client, program) = connect()?;
    let owner = parse_pubkey(owner, "owner")?;

    let (address, _) = pda::delegate_address(&owner, &program.program_id)?;

    println!("{}", "═══ Delegation ═══".bright_cyan());
    println!("  Owner:    {}", owner.to_string().bright_yellow());
    println!("  Account:  {}", address.to_string().dimmed());

    match DelegateAccount::fetch(&client, &address) {
        Ok(delegate) => {
            println!(
                "  Delegates: {} of {}",
                delegate.accounts.len().to_string().bright_green(),
                MAX_DELEGATE_ADDRESSES
            );
            for entry in &delegate.accounts {
                let state = if entry.signed {
                    "signed".bright_green()
                } else {
                    "pending".yellow()
                };
                println!("    {} ({})", entry.address, state);
            }
        }
        Err(ClientError::AccountNotFound(_)) => {
            println!("  {}", "No delegate account created".dimmed());
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
