pub mod decode_error;
pub mod delegate;
pub mod pda;
pub mod proposal;
pub mod votebank;

use anyhow::{Context, Result};
use solana_client::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use omcvote_client::config::{Config, ProgramConfig};

/// Load the persisted configuration and open an RPC connection against it.
pub(crate) fn connect() -> Result<(RpcClient, ProgramConfig)> {
    let config = Config::load()?;
    let program = config.program_config()?;
    let client =
        RpcClient::new_with_commitment(config.rpc_url.clone(), CommitmentConfig::confirmed());
    Ok((client, program))
}

pub(crate) fn parse_pubkey(value: &str, what: &str) -> Result<Pubkey> {
    Pubkey::from_str(value).with_context(|| format!("invalid {what} address: {value}"))
}
