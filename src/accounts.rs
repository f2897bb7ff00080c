//! The five on-chain account shapes and their codecs.
//!
//! Storage prepends an 8-byte account discriminator
//! (`sha256("account:<Name>")[..8]`) to every account; `decode` verifies it
//! before applying the Borsh field layout. Accounts are rent-allocated with
//! growth headroom, so trailing padding after the encoded fields is normal
//! and ignored.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::errors::ClientError;
use crate::reader::AccountReader;
use crate::types::{from_bytes, DelegateAddress, PostData, SettingsData, VoteEntry, VoteOption};

const DISCRIMINATOR_LEN: usize = 8;

/// Decode and fetch plumbing shared by every account shape.
pub trait ProgramAccount: BorshDeserialize + Sized {
    const DISCRIMINATOR: [u8; 8];
    const NAME: &'static str;

    /// Decode an account from its raw stored bytes.
    fn decode(data: &[u8]) -> Result<Self, ClientError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(ClientError::malformed(
                Self::NAME,
                "buffer shorter than the account discriminator",
            ));
        }
        if data[..DISCRIMINATOR_LEN] != Self::DISCRIMINATOR {
            return Err(ClientError::malformed(
                Self::NAME,
                "account discriminator mismatch",
            ));
        }
        from_bytes(Self::NAME, &data[DISCRIMINATOR_LEN..])
    }

    /// Fetch and decode the account at `address` through the injected
    /// reader.
    fn fetch(reader: &impl AccountReader, address: &Pubkey) -> Result<Self, ClientError> {
        let data = reader
            .read(address)?
            .ok_or(ClientError::AccountNotFound(*address))?;
        Self::decode(&data)
    }
}

/// Per-votebank fee sponsor flag. Once initialized the account's lamports
/// cover voters' transaction fees.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeePayer {
    pub is_initialized: bool,
}

impl ProgramAccount for FeePayer {
    const DISCRIMINATOR: [u8; 8] = [3, 252, 50, 162, 76, 46, 144, 213];
    const NAME: &'static str = "FeePayer";
}

/// Per-(identity, proposal) vote ledger. Created at most once; its existence
/// is the "already voted" guard.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct VoteAccount {
    pub votes: Vec<VoteEntry>,
}

impl ProgramAccount for VoteAccount {
    const DISCRIMINATOR: [u8; 8] = [203, 238, 154, 106, 200, 131, 0, 41];
    const NAME: &'static str = "VoteAccount";
}

/// Root governance object for one voting space.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Votebank {
    /// Next proposal id to allocate; strictly greater than every id ever
    /// issued.
    pub max_child_id: u32,
    /// Legacy moderator-gating mint; the settings list supersedes it.
    pub moderator_mint: Pubkey,
    pub settings: Vec<SettingsData>,
    pub open_proposals: Vec<u32>,
    pub closed_proposals: Vec<u32>,
}

impl ProgramAccount for Votebank {
    const DISCRIMINATOR: [u8; 8] = [246, 0, 127, 171, 195, 58, 226, 102];
    const NAME: &'static str = "Votebank";
}

/// Authorizes up to five secondary wallets to vote for a primary wallet.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq)]
pub struct DelegateAccount {
    pub delegate_owner: Pubkey,
    pub accounts: Vec<DelegateAddress>,
}

impl ProgramAccount for DelegateAccount {
    const DISCRIMINATOR: [u8; 8] = [218, 249, 88, 50, 225, 236, 46, 241];
    const NAME: &'static str = "DelegateAccount";
}

/// One vote, scoped to a votebank. Transitions open -> closed exactly once,
/// then is immutable.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq)]
pub struct Proposal {
    /// Only this key may cancel the proposal.
    pub poster: Pubkey,
    /// Opaque payload; UTF-8 JSON by client convention, see
    /// [`Proposal::post_data`].
    pub data: Vec<u8>,
    pub options: Vec<VoteOption>,
    pub max_options_selectable: u8,
    /// Proposal-scoped override of the votebank's restriction settings.
    pub settings: Vec<SettingsData>,
    pub voter_count: u32,
    pub vote_open: bool,
    pub proposal_id: u32,
    /// Unix seconds; zero means no fixed end.
    pub end_time: i64,
    pub collection_size: u32,
    /// Zero means no quorum rule.
    pub quorum_threshold: u32,
    /// Set at most once, never reset.
    pub quorum_met_time: i64,
}

impl ProgramAccount for Proposal {
    const DISCRIMINATOR: [u8; 8] = [26, 94, 189, 187, 116, 136, 53, 33];
    const NAME: &'static str = "Proposal";
}

impl Proposal {
    /// Interpret the opaque data blob as the conventional JSON post payload.
    pub fn post_data(&self) -> Result<PostData, ClientError> {
        PostData::from_bytes(&self.data)
    }

    /// End time in unix seconds. Some historical proposals stored
    /// milliseconds by accident; anything past the year 2286 is treated as
    /// milliseconds and scaled down.
    pub fn end_time_seconds(&self) -> i64 {
        normalize_unix_seconds(self.end_time)
    }
}

/// Millisecond-vs-second disambiguation for historical timestamps.
pub fn normalize_unix_seconds(timestamp: i64) -> i64 {
    if timestamp > 9_999_999_999 {
        timestamp / 1000
    } else {
        timestamp
    }
}

/// Sort proposals the way listings display them: most voters first, then
/// oldest proposal id.
pub fn sort_by_activity(proposals: &mut [Proposal]) {
    proposals.sort_by(|a, b| {
        b.voter_count
            .cmp(&a.voter_count)
            .then(a.proposal_id.cmp(&b.proposal_id))
    });
}
