//! Wire types shared by accounts and instructions.
//!
//! Every type here is Borsh-encoded exactly as the on-chain program declares
//! it: little-endian fixed-width integers, u32-length-prefixed strings and
//! vectors, a single presence byte for options and a single ordinal byte for
//! enum discriminants. Field and variant order is significant and must not be
//! rearranged.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::errors::ClientError;

/// One selectable option on a proposal. `id` values are unique within a
/// proposal; `vote_count` must be zero at creation time.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct VoteOption {
    pub id: u8,
    pub title: String,
    pub vote_count: u32,
}

/// A single selection in a vote submission.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteEntry {
    pub proposal_id: u32,
    pub voted_for: u8,
}

/// One authorized secondary wallet on a delegate account. `signed` starts
/// false and is only flipped by that wallet's own sign instruction.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegateAddress {
    pub address: Pubkey,
    pub signed: bool,
}

/// A mint paired with the minimum balance required of it.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantifiedMint {
    pub mint: Pubkey,
    pub amount: u64,
}

/// Votebank- or proposal-level settings entry. At most one of each variant is
/// meaningful; consumers take the first match in list order.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub enum SettingsData {
    Description { title: String, desc: String },
    OwnerInfo { owners: Vec<Pubkey> },
    VoteRestriction { vote_restriction: VoteRestrictionRule },
}

/// The vote-gating policy attached to a votebank or proposal.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub enum VoteRestrictionRule {
    /// Voter must hold at least `amount` of `mint`.
    TokenOwnership { mint: Pubkey, amount: u64 },
    /// Voter must hold an NFT verified under `collection_id`.
    NftOwnership { collection_id: Pubkey },
    /// Unrestricted.
    Null,
    /// Voter must hold an NFT from any of the listed collections.
    NftListAnyOwnership { collection_ids: Vec<Pubkey> },
    /// Voter must satisfy any listed token rule or hold an NFT from any
    /// listed collection.
    TokenOrNftAnyOwnership {
        mints: Vec<QuantifiedMint>,
        collection_ids: Vec<Pubkey>,
    },
}

/// Tells the program which appended remaining accounts play which role.
///
/// The slot convention is fixed: NFT restrictions carry token account,
/// metadata account and collection account in that exact order.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdditionalAccountIndices {
    TokenOwnership {
        token_idx: u8,
    },
    NftOwnership {
        token_idx: u8,
        meta_idx: u8,
        collection_idx: u8,
    },
    Null,
}

/// The JSON payload conventionally stored in a proposal's opaque `data`
/// blob. The on-chain program never inspects it; this shape is a client
/// convention only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostData {
    pub title: String,
    pub summary: String,
    pub url: String,
    /// Unix seconds at creation time.
    pub time: i64,
}

impl PostData {
    pub fn to_bytes(&self) -> Result<Vec<u8>, ClientError> {
        serde_json::to_vec(self).map_err(|e| ClientError::malformed("PostData", e))
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, ClientError> {
        serde_json::from_slice(data).map_err(|e| ClientError::malformed("PostData", e))
    }
}

/// Encode a value to its exact on-chain byte representation.
pub fn to_bytes<T: BorshSerialize>(value: &T) -> Result<Vec<u8>, ClientError> {
    let mut buf = Vec::new();
    value
        .serialize(&mut buf)
        .map_err(|e| ClientError::malformed("encoded value", e))?;
    Ok(buf)
}

/// Decode a value from a buffer, tolerating trailing bytes. Accounts are
/// allocated larger than their content, so unread padding is expected; a
/// short buffer is always an error.
pub fn from_bytes<T: BorshDeserialize>(
    kind: &'static str,
    data: &[u8],
) -> Result<T, ClientError> {
    let mut slice = data;
    T::deserialize(&mut slice).map_err(|e| ClientError::malformed(kind, e))
}
