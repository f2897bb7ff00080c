use colored::Colorize;

use omcvote_client::program_errors;

/// Translate custom error codes from a failed transaction.
pub fn execute(codes: &[u32]) {
    if codes.is_empty() {
        println!("  {}", "No error codes given".dimmed());
        return;
    }

    for code in codes {
        match program_errors::from_code(*code) {
            Some(entry) => {
                println!(
                    "  {} {} {}",
                    code.to_string().bright_yellow(),
                    entry.name.bright_white(),
                    entry.message.dimmed()
                );
            }
            None => {
                println!(
                    "  {} {}",
                    code.to_string().bright_yellow(),
                    "not a known omcvote error code".yellow()
                );
            }
        }
    }
}
