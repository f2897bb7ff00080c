use borsh::BorshSerialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use super::encode_instruction_data;
use crate::errors::ClientError;
use crate::types::SettingsData;

pub const INITIALIZE_DISCRIMINATOR: [u8; 8] = [175, 175, 109, 31, 13, 152, 155, 237];

/// SPL token program, referenced by the votebank initializer.
pub const TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

#[derive(BorshSerialize, Debug, Clone)]
pub struct InitializeArgs {
    pub title: String,
    pub owners: Vec<Pubkey>,
    pub desc: Option<SettingsData>,
    pub restrictions: Option<SettingsData>,
}

#[derive(Debug, Clone)]
pub struct InitializeAccounts {
    pub votebank: Pubkey,
    pub signer: Pubkey,
    pub treasury: Pubkey,
}

/// Create a new votebank.
pub fn initialize(
    accounts: &InitializeAccounts,
    args: &InitializeArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(INITIALIZE_DISCRIMINATOR, args)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(accounts.votebank, false),
            AccountMeta::new(accounts.signer, true),
            AccountMeta::new(accounts.treasury, false),
            AccountMeta::new_readonly(system_program::ID, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(solana_sdk::sysvar::rent::ID, false),
        ],
        data,
    })
}
