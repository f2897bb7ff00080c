use borsh::BorshSerialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use super::encode_instruction_data;
use crate::errors::ClientError;

pub const INITIALIZE_FEE_PAYER_DISCRIMINATOR: [u8; 8] = [84, 243, 98, 42, 236, 238, 134, 30];
pub const WITHDRAW_LAMPORTS_DISCRIMINATOR: [u8; 8] = [251, 144, 115, 229, 113, 247, 206, 64];

#[derive(BorshSerialize, Debug, Clone, Copy)]
pub struct InitializeFeePayerArgs {
    pub lamports: u64,
}

#[derive(Debug, Clone)]
pub struct InitializeFeePayerAccounts {
    pub fee_payer: Pubkey,
    pub signer: Pubkey,
    pub votebank: Pubkey,
}

/// Fund the votebank's fee sponsor account.
pub fn initialize_fee_payer(
    accounts: &InitializeFeePayerAccounts,
    args: &InitializeFeePayerArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(INITIALIZE_FEE_PAYER_DISCRIMINATOR, args)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(accounts.fee_payer, false),
            AccountMeta::new(accounts.signer, true),
            AccountMeta::new_readonly(accounts.votebank, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}

#[derive(BorshSerialize, Debug, Clone, Copy)]
pub struct WithdrawLamportsArgs {
    pub return_lamports: u64,
}

#[derive(Debug, Clone)]
pub struct WithdrawLamportsAccounts {
    pub treasury: Pubkey,
    pub fee_payer: Pubkey,
    pub votebank: Pubkey,
}

/// Drain sponsored lamports from the fee payer back to the treasury.
pub fn withdraw_lamports(
    accounts: &WithdrawLamportsAccounts,
    args: &WithdrawLamportsArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(WITHDRAW_LAMPORTS_DISCRIMINATOR, args)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(accounts.treasury, false),
            AccountMeta::new(accounts.fee_payer, false),
            AccountMeta::new_readonly(accounts.votebank, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}
