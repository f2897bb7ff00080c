use borsh::BorshSerialize;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;

use super::encode_instruction_data;
use crate::errors::ClientError;
use crate::types::DelegateAddress;

pub const CREATE_DELEGATE_DISCRIMINATOR: [u8; 8] = [27, 99, 122, 21, 236, 229, 58, 10];
pub const SIGN_DELEGATE_ADDRESS_DISCRIMINATOR: [u8; 8] = [137, 86, 111, 154, 83, 100, 241, 192];
pub const ADD_DELEGATE_ADDRESS_DISCRIMINATOR: [u8; 8] = [21, 143, 207, 169, 27, 95, 219, 198];
pub const REMOVE_DELEGATE_ADDRESS_DISCRIMINATOR: [u8; 8] = [132, 44, 151, 203, 142, 113, 136, 40];
pub const REVOKE_DELEGATE_ADDRESS_DISCRIMINATOR: [u8; 8] = [95, 85, 202, 100, 67, 59, 63, 123];

#[derive(BorshSerialize, Debug, Clone)]
pub struct CreateDelegateArgs {
    pub delegate_addresses: Vec<DelegateAddress>,
}

#[derive(Debug, Clone)]
pub struct CreateDelegateAccounts {
    pub delegate: Pubkey,
    pub delegator: Pubkey,
    pub treasury: Pubkey,
}

/// Create the delegator's delegate account with an initial address list.
/// Validate the list with
/// [`crate::restriction::validate_delegate_addresses`] first.
pub fn create_delegate(
    accounts: &CreateDelegateAccounts,
    args: &CreateDelegateArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(CREATE_DELEGATE_DISCRIMINATOR, args)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(accounts.delegate, false),
            AccountMeta::new(accounts.delegator, true),
            AccountMeta::new(accounts.treasury, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}

#[derive(Debug, Clone)]
pub struct DelegateSignerAccounts {
    pub delegate_account: Pubkey,
    pub signer: Pubkey,
}

fn delegate_signer_instruction<T: BorshSerialize>(
    discriminator: [u8; 8],
    accounts: &DelegateSignerAccounts,
    args: &T,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(discriminator, args)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(accounts.delegate_account, false),
            AccountMeta::new(accounts.signer, true),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}

/// A delegate address confirms its own entry; the signer must be listed on
/// the account.
pub fn sign_delegate_address(
    accounts: &DelegateSignerAccounts,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    delegate_signer_instruction(SIGN_DELEGATE_ADDRESS_DISCRIMINATOR, accounts, &(), program_id)
}

/// A delegate address removes itself from the owner's list.
pub fn revoke_delegate_address(
    accounts: &DelegateSignerAccounts,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    delegate_signer_instruction(
        REVOKE_DELEGATE_ADDRESS_DISCRIMINATOR,
        accounts,
        &(),
        program_id,
    )
}

#[derive(BorshSerialize, Debug, Clone, Copy)]
pub struct DelegateAddressArgs {
    pub address: Pubkey,
}

/// The owner removes a delegate address from their account.
pub fn remove_delegate_address(
    accounts: &DelegateSignerAccounts,
    args: &DelegateAddressArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    delegate_signer_instruction(
        REMOVE_DELEGATE_ADDRESS_DISCRIMINATOR,
        accounts,
        args,
        program_id,
    )
}

#[derive(Debug, Clone)]
pub struct AddDelegateAddressAccounts {
    pub delegate_account: Pubkey,
    pub signer: Pubkey,
    pub treasury: Pubkey,
}

/// The owner appends a delegate address; the program caps the list at five
/// and charges the delegate fee.
pub fn add_delegate_address(
    accounts: &AddDelegateAddressAccounts,
    args: &DelegateAddressArgs,
    program_id: &Pubkey,
) -> Result<Instruction, ClientError> {
    let data = encode_instruction_data(ADD_DELEGATE_ADDRESS_DISCRIMINATOR, args)?;
    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(accounts.delegate_account, false),
            AccountMeta::new(accounts.signer, true),
            AccountMeta::new(accounts.treasury, false),
            AccountMeta::new_readonly(system_program::ID, false),
        ],
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PROGRAM_ADDRESS;

    #[test]
    fn test_create_delegate_encoding() {
        let accounts = CreateDelegateAccounts {
            delegate: Pubkey::new_unique(),
            delegator: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
        };
        let entry = DelegateAddress {
            address: Pubkey::new_unique(),
            signed: false,
        };
        let ix = create_delegate(
            &accounts,
            &CreateDelegateArgs {
                delegate_addresses: vec![entry],
            },
            &PROGRAM_ADDRESS,
        )
        .unwrap();

        assert_eq!(ix.accounts.len(), 4);
        assert!(ix.accounts[1].is_signer);
        let mut expected = CREATE_DELEGATE_DISCRIMINATOR.to_vec();
        expected.extend_from_slice(&1u32.to_le_bytes());
        expected.extend_from_slice(entry.address.as_ref());
        expected.push(0); // signed = false
        assert_eq!(ix.data, expected);
    }

    #[test]
    fn test_sign_and_revoke_are_argless() {
        let accounts = DelegateSignerAccounts {
            delegate_account: Pubkey::new_unique(),
            signer: Pubkey::new_unique(),
        };
        let sign = sign_delegate_address(&accounts, &PROGRAM_ADDRESS).unwrap();
        let revoke = revoke_delegate_address(&accounts, &PROGRAM_ADDRESS).unwrap();

        assert_eq!(sign.data, SIGN_DELEGATE_ADDRESS_DISCRIMINATOR.to_vec());
        assert_eq!(revoke.data, REVOKE_DELEGATE_ADDRESS_DISCRIMINATOR.to_vec());
        assert_eq!(sign.accounts.len(), 3);
        assert!(sign.accounts[0].is_writable);
    }

    #[test]
    fn test_add_delegate_address_includes_treasury() {
        let accounts = AddDelegateAddressAccounts {
            delegate_account: Pubkey::new_unique(),
            signer: Pubkey::new_unique(),
            treasury: Pubkey::new_unique(),
        };
        let address = Pubkey::new_unique();
        let ix = add_delegate_address(
            &accounts,
            &DelegateAddressArgs { address },
            &PROGRAM_ADDRESS,
        )
        .unwrap();

        assert_eq!(ix.accounts.len(), 4);
        assert_eq!(ix.accounts[2].pubkey, accounts.treasury);
        assert!(ix.accounts[2].is_writable);
        assert_eq!(&ix.data[8..], address.as_ref());
    }

    #[test]
    fn test_remove_delegate_address_encoding() {
        let accounts = DelegateSignerAccounts {
            delegate_account: Pubkey::new_unique(),
            signer: Pubkey::new_unique(),
        };
        let address = Pubkey::new_unique();
        let ix = remove_delegate_address(
            &accounts,
            &DelegateAddressArgs { address },
            &PROGRAM_ADDRESS,
        )
        .unwrap();
        assert_eq!(&ix.data[..8], &REMOVE_DELEGATE_ADDRESS_DISCRIMINATOR);
        assert_eq!(&ix.data[8..], address.as_ref());
    }
}
