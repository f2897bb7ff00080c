//! Program-derived address derivation.
//!
//! Seed order matches the on-chain program's constants exactly; a single
//! wrong byte silently derives an address no account will ever live at.

use solana_sdk::pubkey::Pubkey;

use crate::errors::ClientError;

pub const CREATOR_SEED: &[u8] = b"monkedevs";
pub const VOTEBANK_SEED: &[u8] = b"votebank";
pub const PROPOSAL_SEED: &[u8] = b"proposal";
pub const VOTE_SEED: &[u8] = b"votes";
pub const DELEGATE_SEED: &[u8] = b"delegate";

/// Derive a program address and its bump for an ordered seed list.
///
/// Deterministic: identical inputs always yield the identical pair. The
/// result is guaranteed off-curve, so it can never collide with a
/// wallet-controlled key.
pub fn find_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ClientError> {
    Pubkey::try_find_program_address(seeds, program_id).ok_or(ClientError::NoValidBumpFound)
}

/// Votebank account: `["monkedevs", "votebank", title]`.
pub fn votebank_address(
    title: &str,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ClientError> {
    find_address(
        &[CREATOR_SEED, VOTEBANK_SEED, title.as_bytes()],
        program_id,
    )
}

/// Proposal account: `["monkedevs", "proposal", votebank, proposal_id_le]`.
pub fn proposal_address(
    votebank: &Pubkey,
    proposal_id: u32,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ClientError> {
    find_address(
        &[
            CREATOR_SEED,
            PROPOSAL_SEED,
            votebank.as_ref(),
            &proposal_id.to_le_bytes(),
        ],
        program_id,
    )
}

/// Vote ledger account: `["votes", votebank, mint, proposal_id_le]`.
///
/// The mint is the voting identity: the NFT's own mint under an NFT
/// restriction, the required token mint under a token restriction, the
/// default pubkey when unrestricted. Existence of this account is the
/// "already voted" guard.
pub fn vote_address(
    votebank: &Pubkey,
    mint: &Pubkey,
    proposal_id: u32,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ClientError> {
    find_address(
        &[
            VOTE_SEED,
            votebank.as_ref(),
            mint.as_ref(),
            &proposal_id.to_le_bytes(),
        ],
        program_id,
    )
}

/// Delegate account: `["delegate", owner_wallet]`.
pub fn delegate_address(
    owner: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ClientError> {
    find_address(&[DELEGATE_SEED, owner.as_ref()], program_id)
}

/// Fee-payer account: `[fee_payer_seed, votebank]`. The seed literal is
/// configuration, see [`crate::config::DEFAULT_FEE_PAYER_SEED`].
pub fn fee_payer_address(
    votebank: &Pubkey,
    fee_payer_seed: &[u8],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), ClientError> {
    find_address(&[fee_payer_seed, votebank.as_ref()], program_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_FEE_PAYER_SEED, PROGRAM_ADDRESS};

    #[test]
    fn test_derivation_is_deterministic() {
        let (first, first_bump) = votebank_address("omc", &PROGRAM_ADDRESS).unwrap();
        let (second, second_bump) = votebank_address("omc", &PROGRAM_ADDRESS).unwrap();
        assert_eq!(first, second);
        assert_eq!(first_bump, second_bump);
    }

    #[test]
    fn test_derived_address_is_off_curve() {
        let (votebank, _) = votebank_address("omc", &PROGRAM_ADDRESS).unwrap();
        assert!(!votebank.is_on_curve());

        let (proposal, _) = proposal_address(&votebank, 7, &PROGRAM_ADDRESS).unwrap();
        assert!(!proposal.is_on_curve());

        let (vote, _) =
            vote_address(&votebank, &Pubkey::new_unique(), 7, &PROGRAM_ADDRESS).unwrap();
        assert!(!vote.is_on_curve());

        let (delegate, _) =
            delegate_address(&Pubkey::new_unique(), &PROGRAM_ADDRESS).unwrap();
        assert!(!delegate.is_on_curve());

        let (fee_payer, _) =
            fee_payer_address(&votebank, DEFAULT_FEE_PAYER_SEED, &PROGRAM_ADDRESS).unwrap();
        assert!(!fee_payer.is_on_curve());
    }

    #[test]
    fn test_single_seed_byte_changes_address() {
        let (a, _) = votebank_address("omc", &PROGRAM_ADDRESS).unwrap();
        let (b, _) = votebank_address("omd", &PROGRAM_ADDRESS).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_proposal_id_is_little_endian_seed() {
        let votebank = Pubkey::new_unique();
        let expected = Pubkey::find_program_address(
            &[
                CREATOR_SEED,
                PROPOSAL_SEED,
                votebank.as_ref(),
                &[1, 1, 0, 0], // 257 in little-endian
            ],
            &PROGRAM_ADDRESS,
        );
        let derived = proposal_address(&votebank, 257, &PROGRAM_ADDRESS).unwrap();
        assert_eq!(derived, expected);
    }

    #[test]
    fn test_different_program_ids_diverge() {
        let other = Pubkey::new_unique();
        let (a, _) = votebank_address("omc", &PROGRAM_ADDRESS).unwrap();
        let (b, _) = votebank_address("omc", &other).unwrap();
        assert_ne!(a, b);
    }
}
