use borsh::BorshSerialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;

use super::encode_instruction_data;
use crate::errors::ClientError;

pub const ADD_OWNER_DISCRIMINATOR: [u8; 8] = [211, 140, 15, 161, 64, 48, 232, 184];
pub const REMOVE_OWNER_DISCRIMINATOR: [u8; 8] = [153, 251, 84, 208, 33, 62, 15, 247];

#[derive(BorshSerialize, Debug, Clone, Copy)]
pub struct OwnerArgs {
    pub owner: Pubkey,
}

#[derive(Debug, Clone)]
pub struct OwnerAccounts {
    pub votebank: Pubkey,
    pub signer: Pubkey,
}

fn owner_instruction(
    discriminator: [u8; 8],
    accounts: &OwnerAccounts,
    args: &OwnerArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(discriminator, args)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(accounts.votebank, false),
            AccountMeta::new(accounts.signer, true),
        ],
        data,
    })
}

/// Add an owner to the votebank's owner list.
pub fn add_owner(
    accounts: &OwnerAccounts,
    args: &OwnerArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    owner_instruction(ADD_OWNER_DISCRIMINATOR, accounts, args, program_id)
}

/// Remove an owner; the program refuses to remove the last one.
pub fn remove_owner(
    accounts: &OwnerAccounts,
    args: &OwnerArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    owner_instruction(REMOVE_OWNER_DISCRIMINATOR, accounts, args, program_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PROGRAM_ADDRESS;

    #[test]
    fn test_owner_instructions_share_layout() {
        let accounts = OwnerAccounts {
            votebank: Pubkey::new_unique(),
            signer: Pubkey::new_unique(),
        };
        let args = OwnerArgs {
            owner: Pubkey::new_unique(),
        };

        let add = add_owner(&accounts, &args, &PROGRAM_ADDRESS).unwrap();
        let remove = remove_owner(&accounts, &args, &PROGRAM_ADDRESS).unwrap();

        for ix in [&add, &remove] {
            assert_eq!(ix.accounts.len(), 2);
            assert!(ix.accounts[0].is_writable);
            assert!(ix.accounts[1].is_signer);
            assert_eq!(&ix.data[8..], args.owner.as_ref());
        }
        assert_eq!(&add.data[..8], &ADD_OWNER_DISCRIMINATOR);
        assert_eq!(&remove.data[..8], &REMOVE_OWNER_DISCRIMINATOR);
    }
}
