use anyhow::Result;
use chrono::DateTime;
use colored::Colorize;

use omcvote_client::accounts::{Proposal, ProgramAccount};
use omcvote_client::pda;
use omcvote_client::restriction::extract_restriction;

use super::{connect, parse_pubkey};

/// Fetch one proposal and print its post, options and tallies.
pub fn execute(votebank: &str, id: u32) -> Result<()> {
    let (client, program) = connect()?;
    let votebank = parse_pubkey(votebank, "votebank")?;

    let (address, _) = pda::proposal_address(&votebank, id, &program.program_id)?;
    let proposal = Proposal::fetch(&client, &address)?;

    println!("{}", "═══ Proposal ═══".bright_cyan());
    println!("  Address:  {}", address.to_string().bright_yellow());
    println!("  Poster:   {}", proposal.poster.to_string().dimmed());

    match proposal.post_data() {
        Ok(post) => {
            println!("  Title:    {}", post.title.bright_white());
            println!("  Summary:  {}", post.summary.dimmed());
            if !post.url.is_empty() {
                println!("  Link:     {}", post.url.dimmed());
            }
        }
        Err(err) => println!("  Post:     {} ({err})", "unreadable".yellow()),
    }

    let status = if proposal.vote_open {
        "open".bright_green()
    } else {
        "closed".bright_red()
    };
    println!("  Status:   {}", status);
    if proposal.end_time != 0 {
        let formatted = DateTime::from_timestamp(proposal.end_time_seconds(), 0)
            .map(|time| time.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_else(|| proposal.end_time.to_string());
        println!("  Ends:     {}", formatted.dimmed());
    }
    if proposal.quorum_threshold != 0 {
        println!(
            "  Quorum:   {} of {} needed",
            proposal.quorum_threshold, proposal.collection_size
        );
    }

    let restriction = extract_restriction(&proposal.settings);
    if restriction.has_restriction {
        println!(
            "  Restricted: {} ({})",
            restriction.rule_kind.name().bright_white(),
            restriction.required_mint.to_string().dimmed()
        );
    }

    println!();
    println!("{}", "═══ Results ═══".bright_cyan());
    println!(
        "  Voters: {}   Select up to {}",
        proposal.voter_count.to_string().bright_green(),
        proposal.max_options_selectable
    );
    let total: u32 = proposal.options.iter().map(|o| o.vote_count).sum();
    for option in &proposal.options {
        let share = if total > 0 {
            option.vote_count as f64 * 100.0 / total as f64
        } else {
            0.0
        };
        println!(
            "  [{}] {:<24} {:>6} votes  {:>5.1}%",
            option.id,
            option.title.bright_white(),
            option.vote_count,
            share
        );
    }

    Ok(())
}
