use borsh::BorshSerialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use super::encode_instruction_data;
use crate::errors::ClientError;
use crate::types::{AdditionalAccountIndices, SettingsData, VoteOption};

pub const CREATE_PROPOSAL_DISCRIMINATOR: [u8; 8] = [132, 116, 68, 174, 216, 160, 198, 22];
pub const CLOSE_PROPOSAL_DISCRIMINATOR: [u8; 8] = [213, 178, 139, 19, 50, 191, 82, 245];
pub const CANCEL_PROPOSAL_DISCRIMINATOR: [u8; 8] = [106, 74, 128, 146, 19, 65, 39, 23];

#[derive(BorshSerialize, Debug, Clone)]
pub struct CreateProposalArgs {
    pub options: Vec<VoteOption>,
    pub max_options_selectable: u8,
    /// Opaque payload blob, see [`crate::types::PostData`].
    pub data: Vec<u8>,
    pub proposal_id: u32,
    pub settings: Vec<SettingsData>,
    pub additional_account_offsets: Vec<AdditionalAccountIndices>,
    /// Unix seconds; zero for no fixed end.
    pub end_time: i64,
    /// Zero for no quorum rule.
    pub quorum_threshold: u32,
}

#[derive(Debug, Clone)]
pub struct CreateProposalAccounts {
    pub proposal: Pubkey,
    pub votebank: Pubkey,
    pub poster: Pubkey,
    pub treasury: Pubkey,
    /// Extra token/NFT accounts demanded by the votebank's restriction,
    /// appended after the fixed list in caller order.
    pub remaining_accounts: Vec<AccountMeta>,
}

/// Open a new proposal under a votebank.
pub fn create_proposal(
    accounts: &CreateProposalAccounts,
    args: &CreateProposalArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(CREATE_PROPOSAL_DISCRIMINATOR, args)?;
    let mut metas = vec![
        AccountMeta::new(accounts.proposal, false),
        AccountMeta::new(accounts.votebank, false),
        AccountMeta::new(accounts.poster, true),
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

#[derive(BorshSerialize, Debug, Clone, Copy)]
pub struct ProposalIdArgs {
    pub proposal_id: u32,
}

#[derive(Debug, Clone)]
pub struct CloseProposalAccounts {
    pub proposal: Pubkey,
    pub votebank: Pubkey,
    pub proposal_owner: Pubkey,
}

/// Close a proposal for voting; it moves to the votebank's closed list.
pub fn close_proposal(
    accounts: &CloseProposalAccounts,
    args: &ProposalIdArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(CLOSE_PROPOSAL_DISCRIMINATOR, args)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(accounts.proposal, false),
            AccountMeta::new(accounts.votebank, false),
            AccountMeta::new_readonly(accounts.proposal_owner, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}

/// Cancel a proposal. Only the original poster may do this; unlike close,
/// the owner account is debited for the reclaimed rent.
pub fn cancel_proposal(
    accounts: &CloseProposalAccounts,
    args: &ProposalIdArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(CANCEL_PROPOSAL_DISCRIMINATOR, args)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(accounts.proposal, false),
            AccountMeta::new(accounts.votebank, false),
            AccountMeta::new(accounts.proposal_owner, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}
