use anyhow::{bail, Result};
use colored::Colorize;

use omcvote_client::accounts::{sort_by_activity, Proposal, ProgramAccount, Votebank};
use omcvote_client::pda;
use omcvote_client::restriction::extract_restriction;
use omcvote_client::types::SettingsData;

use super::{connect, parse_pubkey};

/// Fetch a votebank by title or address and print its settings and
/// proposals.
pub fn execute(title: Option<String>, address: Option<String>) -> Result<()> {
    let (client, program) = connect()?;

    let votebank_address = match (&address, &title) {
        (Some(explicit), _) => parse_pubkey(explicit, "votebank")?,
        (None, Some(title)) => pda::votebank_address(title, &program.program_id)?.0,
        (None, None) => bail!("provide --title or --address"),
    };

    let votebank = Votebank::fetch(&client, &votebank_address)?;

    println!("{}", "═══ Votebank ═══".bright_cyan());
    println!("  Address:    {}", votebank_address.to_string().bright_yellow());
    for setting in &votebank.settings {
        match setting {
            SettingsData::Description { title, desc } => {
                println!("  Title:      {}", title.bright_white());
                println!("  About:      {}", desc.dimmed());
            }
            SettingsData::OwnerInfo { owners } => {
                println!("  Owners:     {}", owners.len());
                for owner in owners {
                    println!("    {}", owner.to_string().dimmed());
                }
            }
            SettingsData::VoteRestriction { .. } => {}
        }
    }

    let restriction = extract_restriction(&votebank.settings);
    if restriction.has_restriction {
        println!(
            "  Restricted: {} ({})",
            restriction.rule_kind.name().bright_white(),
            restriction.required_mint.to_string().dimmed()
        );
    } else {
        println!("  Restricted: {}", "open to anyone".dimmed());
    }

    println!();
    println!("{}", "═══ Proposals ═══".bright_cyan());
    println!(
        "  Open: {}   Closed: {}   Next id: {}",
        votebank.open_proposals.len().to_string().bright_green(),
        votebank.closed_proposals.len().to_string().dimmed(),
        votebank.max_child_id
    );

    let mut proposals = Vec::new();
    for id in &votebank.open_proposals {
        let (proposal_address, _) =
            pda::proposal_address(&votebank_address, *id, &program.program_id)?;
        match Proposal::fetch(&client, &proposal_address) {
            Ok(proposal) => proposals.push(proposal),
            Err(err) => println!("  {} proposal {}: {}", "!".yellow(), id, err),
        }
    }
    sort_by_activity(&mut proposals);

    for proposal in &proposals {
        let headline = proposal
            .post_data()
            .map(|post| post.title)
            .unwrap_or_else(|_| "(unreadable post data)".to_string());
        println!(
            "  #{:<4} {} ({} voters)",
            proposal.proposal_id,
            headline.bright_white(),
            proposal.voter_count
        );
    }

    Ok(())
}
