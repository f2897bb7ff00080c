use borsh::BorshSerialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use super::{encode_instruction_data, optional_account};
use crate::errors::ClientError;
use crate::types::{AdditionalAccountIndices, VoteEntry};

pub const VOTE_DISCRIMINATOR: [u8; 8] = [227, 110, 155, 23, 136, 126, 172, 25];
pub const VOTE_DELEGATION_DISCRIMINATOR: [u8; 8] = [71, 140, 161, 196, 61, 52, 166, 233];

#[derive(BorshSerialize, Debug, Clone)]
pub struct VoteArgs {
    pub proposal_id: u32,
    pub vote_entries: Vec<VoteEntry>,
    /// One hint per restriction describing the roles of the appended
    /// remaining accounts.
    pub additional_account_offsets: Vec<AdditionalAccountIndices>,
}

#[derive(Debug, Clone)]
pub struct VoteAccounts {
    pub voter: Pubkey,
    /// Sponsored fee account; absent when the voter pays their own fee.
    pub fee_payer: Option<Pubkey>,
    pub votebank: Pubkey,
    pub proposal: Pubkey,
    pub votes: Pubkey,
    /// The voting identity mint: NFT mint, token mint, or the default
    /// pubkey when unrestricted.
    pub nft_vote_mint: Pubkey,
    pub treasury: Pubkey,
    /// Token/metadata/collection accounts demanded by the restriction, in
    /// the order the offsets hint describes.
    pub remaining_accounts: Vec<AccountMeta>,
}

/// Cast a vote as the wallet that owns the qualifying holding.
pub fn vote(
    accounts: &VoteAccounts,
    args: &VoteArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(VOTE_DISCRIMINATOR, args)?;
    let mut metas = vec![
        AccountMeta::new(accounts.voter, true),
        optional_account(accounts.fee_payer, true, program_id),
        AccountMeta::new(accounts.votebank, false),
        AccountMeta::new(accounts.proposal, false),
        AccountMeta::new(accounts.votes, false),
        AccountMeta::new_readonly(accounts.nft_vote_mint, false),
        AccountMeta::new(accounts.treasury, false),
        AccountMeta::new_readonly(system_program::ID, false),
    ];
    metas.extend(accounts.remaining_accounts.iter().cloned());
    Ok(Instruction {
        program_id: *program_id,
        accounts: metas,
        data,
    })
}

#[derive(Debug, Clone)]
pub struct VoteDelegationAccounts {
    pub voter: Pubkey,
    pub fee_payer: Option<Pubkey>,
    pub votebank: Pubkey,
    pub proposal: Pubkey,
    pub votes: Pubkey,
    pub nft_vote_mint: Pubkey,
    /// The delegate account proving the voter may act for the holding's
    /// owner.
    pub delegate_account: Pubkey,
    pub treasury: Pubkey,
    pub remaining_accounts: Vec<AccountMeta>,
}

/// Cast a vote through a delegate authorization.
pub fn vote_delegation(
    accounts: &VoteDelegationAccounts,
    args: &VoteArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(VOTE_DELEGATION_DISCRIMINATOR, args)?;
    let mut metas = vec![
        AccountMeta::new(accounts.voter, true),
        optional_account(accounts.fee_payer, true, program_id),
        AccountMeta::new(accounts.votebank, false),
        AccountMeta::new(accounts.proposal, false),
        AccountMeta::new(accounts.votes, false),
        AccountMeta::new_readonly(accounts.nft_vote_mint, false),
        AccountMeta::new_readonly(accounts.delegate_account, false),
        AccountMeta::new(accounts.treasury, false),
        AccountMeta::new_readonly(system_program::ID, false),
    ];
    metas.extend(accounts.remaining_accounts.iter().cloned());
    Ok(Instruction {
        program_id: *program_id,
        accounts: metas,
        data,
    })
}
