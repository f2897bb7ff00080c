//! Instruction builders for every on-chain operation.
//!
//! Pure data construction: each builder encodes an 8-byte instruction
//! discriminator (`sha256("global:<name>")[..8]`) followed by the Borsh
//! argument encoding, and lays out the account list in the exact order and
//! with the exact writable/signer flags the program declares. Remaining
//! accounts supplied by the caller are appended after the fixed list,
//! preserving order. Nothing here signs or submits.

mod delegate;
mod fee_payer;
mod initialize;
mod owners;
mod proposal;
mod vote;

pub use delegate::*;
pub use fee_payer::*;
pub use initialize::*;
pub use owners::*;
pub use proposal::*;
pub use vote::*;

use borsh::BorshSerialize;
use solana_sdk::instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

use crate::errors::ClientError;

pub(crate) fn encode_instruction_data<T: BorshSerialize>(
    discriminator: [u8; 8],
    args: &T,
) -> Result<Vec<u8>, ClientError> {
    let mut data = discriminator.to_vec();
    args.serialize(&mut data)
        .map_err(|e| ClientError::malformed("instruction args", e))?;
    Ok(data)
}

/// Anchor optional-account convention: absent optional accounts in the
/// middle of the list are stood in for by the program id so later indices
/// stay put.
pub(crate) fn optional_account(
    account: Option<Pubkey>,
    writable: bool,
    program_id: &Pubkey,
) -> AccountMeta {
    match account {
        Some(pubkey) if writable => AccountMeta::new(pubkey, false),
        Some(pubkey) => AccountMeta::new_readonly(pubkey, false),
        None => AccountMeta::new_readonly(*program_id, false),
    }
}
