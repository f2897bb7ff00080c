//! Vote-eligibility evaluation and pre-submission validation.
//!
//! Everything here is a pure function of already-fetched data; the only I/O
//! is the injected reader used by the vote-exists guard. The chain remains
//! the authority on every rule re-checked here.

use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;

use crate::accounts::Proposal;
use crate::config::ProgramConfig;
use crate::errors::ClientError;
use crate::instructions::{self, VoteAccounts, VoteArgs, VoteDelegationAccounts};
use crate::pda;
use crate::reader::AccountReader;
use crate::types::{
    AdditionalAccountIndices, DelegateAddress, SettingsData, VoteEntry, VoteOption,
    VoteRestrictionRule,
};

/// Hard cap on delegate addresses per account, mirrored from the program.
pub const MAX_DELEGATE_ADDRESSES: usize = 5;

/// Which restriction policy is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestrictionKind {
    Null,
    TokenOwnership,
    NftOwnership,
    NftListAnyOwnership,
    TokenOrNftAnyOwnership,
}

impl RestrictionKind {
    pub fn name(&self) -> &'static str {
        match self {
            RestrictionKind::Null => "Null",
            RestrictionKind::TokenOwnership => "TokenOwnership",
            RestrictionKind::NftOwnership => "NftOwnership",
            RestrictionKind::NftListAnyOwnership => "NftListAnyOwnership",
            RestrictionKind::TokenOrNftAnyOwnership => "TokenOrNftAnyOwnership",
        }
    }
}

/// Flattened view of the active restriction rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionData {
    pub rule_kind: RestrictionKind,
    /// Required token mint, or the collection id under an NFT rule. The
    /// default pubkey when no single target applies.
    pub required_mint: Pubkey,
    pub is_nft_restricted: bool,
    pub has_restriction: bool,
    pub required_amount: u64,
}

impl RestrictionData {
    fn unrestricted() -> Self {
        Self {
            rule_kind: RestrictionKind::Null,
            required_mint: Pubkey::default(),
            is_nft_restricted: false,
            has_restriction: false,
            required_amount: 0,
        }
    }
}

fn find_restriction_rule(settings: &[SettingsData]) -> Option<&VoteRestrictionRule> {
    settings.iter().find_map(|setting| match setting {
        SettingsData::VoteRestriction { vote_restriction } => Some(vote_restriction),
        _ => None,
    })
}

/// Flatten a settings list into the active restriction. The first
/// `VoteRestriction` entry wins; that is a defined tie-break, not an error.
///
/// The two list-any kinds report their kind with `has_restriction` set: they
/// are never silently downgraded to unrestricted, and
/// [`select_voting_identity`] refuses them outright.
pub fn extract_restriction(settings: &[SettingsData]) -> RestrictionData {
    match find_restriction_rule(settings) {
        None | Some(VoteRestrictionRule::Null) => RestrictionData::unrestricted(),
        Some(VoteRestrictionRule::TokenOwnership { mint, amount }) => RestrictionData {
            rule_kind: RestrictionKind::TokenOwnership,
            required_mint: *mint,
            is_nft_restricted: false,
            has_restriction: true,
            required_amount: *amount,
        },
        Some(VoteRestrictionRule::NftOwnership { collection_id }) => RestrictionData {
            rule_kind: RestrictionKind::NftOwnership,
            required_mint: *collection_id,
            is_nft_restricted: true,
            has_restriction: true,
            required_amount: 1,
        },
        Some(VoteRestrictionRule::NftListAnyOwnership { .. }) => RestrictionData {
            rule_kind: RestrictionKind::NftListAnyOwnership,
            required_mint: Pubkey::default(),
            is_nft_restricted: true,
            has_restriction: true,
            required_amount: 0,
        },
        Some(VoteRestrictionRule::TokenOrNftAnyOwnership { .. }) => RestrictionData {
            rule_kind: RestrictionKind::TokenOrNftAnyOwnership,
            required_mint: Pubkey::default(),
            is_nft_restricted: false,
            has_restriction: true,
            required_amount: 0,
        },
    }
}

/// The effective restriction for a proposal: a proposal-level
/// `VoteRestriction` entry overrides the votebank's, otherwise the votebank
/// settings apply.
pub fn effective_restriction(
    votebank_settings: &[SettingsData],
    proposal_settings: &[SettingsData],
) -> RestrictionData {
    if find_restriction_rule(proposal_settings).is_some() {
        extract_restriction(proposal_settings)
    } else {
        extract_restriction(votebank_settings)
    }
}

/// One token or NFT position reported by the external holdings provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Holding {
    /// Mint (or asset id) of the held token/NFT.
    pub mint: Pubkey,
    /// The NFT's metadata account.
    pub metadata: Pubkey,
    /// Verified collection, when the holding belongs to one.
    pub collection: Option<Pubkey>,
    /// Wallet that owns the holding.
    pub owner: Pubkey,
}

/// The identity a vote is recorded under, plus the extra accounts the
/// instruction must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VotingIdentity {
    /// Mint the vote PDA is derived from.
    pub mint: Pubkey,
    /// Holder's associated token account, when a restriction applies.
    pub token_account: Option<Pubkey>,
    /// The matched NFT's metadata account, under an NFT rule.
    pub metadata: Option<Pubkey>,
    pub hint: AdditionalAccountIndices,
}

/// Pick the identity a candidate votes under.
///
/// NFT rule: the first holding verified under the required collection; the
/// identity is that NFT's own mint and the extra accounts run token,
/// metadata, collection in fixed slots 0, 1, 2. Token rule: the required
/// mint itself with the holder's associated token account in slot 0. No
/// rule: the default pubkey and no extra accounts.
pub fn select_voting_identity(
    restriction: &RestrictionData,
    holdings: &[Holding],
    voter: &Pubkey,
) -> Result<VotingIdentity, ClientError> {
    match restriction.rule_kind {
        RestrictionKind::Null => Ok(VotingIdentity {
            mint: Pubkey::default(),
            token_account: None,
            metadata: None,
            hint: AdditionalAccountIndices::Null,
        }),
        RestrictionKind::TokenOwnership => Ok(VotingIdentity {
            mint: restriction.required_mint,
            token_account: Some(get_associated_token_address(
                voter,
                &restriction.required_mint,
            )),
            metadata: None,
            hint: AdditionalAccountIndices::TokenOwnership { token_idx: 0 },
        }),
        RestrictionKind::NftOwnership => {
            let matched = holdings
                .iter()
                .find(|holding| holding.collection == Some(restriction.required_mint))
                .ok_or_else(|| {
                    ClientError::IneligibleVoter(format!(
                        "no NFT from collection {} held",
                        restriction.required_mint
                    ))
                })?;
            Ok(VotingIdentity {
                mint: matched.mint,
                token_account: Some(get_associated_token_address(
                    &matched.owner,
                    &matched.mint,
                )),
                metadata: Some(matched.metadata),
                hint: AdditionalAccountIndices::NftOwnership {
                    token_idx: 0,
                    meta_idx: 1,
                    collection_idx: 2,
                },
            })
        }
        RestrictionKind::NftListAnyOwnership => {
            Err(ClientError::UnsupportedRestriction("NftListAnyOwnership"))
        }
        RestrictionKind::TokenOrNftAnyOwnership => Err(ClientError::UnsupportedRestriction(
            "TokenOrNftAnyOwnership",
        )),
    }
}

/// The remaining-accounts list matching an identity's hint, in the fixed
/// slot order the program's offsets describe.
pub fn remaining_accounts(
    identity: &VotingIdentity,
    restriction: &RestrictionData,
) -> Vec<AccountMeta> {
    match identity.hint {
        AdditionalAccountIndices::Null => vec![],
        AdditionalAccountIndices::TokenOwnership { .. } => identity
            .token_account
            .iter()
            .map(|account| AccountMeta::new_readonly(*account, false))
            .collect(),
        AdditionalAccountIndices::NftOwnership { .. } => {
            let mut metas = Vec::with_capacity(3);
            if let (Some(token), Some(metadata)) = (identity.token_account, identity.metadata) {
                metas.push(AccountMeta::new_readonly(token, false));
                metas.push(AccountMeta::new_readonly(metadata, false));
                metas.push(AccountMeta::new_readonly(restriction.required_mint, false));
            }
            metas
        }
    }
}

/// True when a vote account already exists for `(votebank, mint,
/// proposal_id)`, the "already voted" guard. A UX optimization only; the
/// chain re-validates.
pub fn vote_exists(
    reader: &impl AccountReader,
    votebank: &Pubkey,
    mint: &Pubkey,
    proposal_id: u32,
    program_id: &Pubkey,
) -> Result<bool, ClientError> {
    let (address, _) = pda::vote_address(votebank, mint, proposal_id, program_id)?;
    Ok(reader.read(&address)?.is_some())
}

/// Reject a vote-entry set the chain would refuse: empty sets, mixed or
/// mismatched proposal ids, duplicate selections, unknown option ids, more
/// selections than allowed, or a proposal closed for voting.
pub fn validate_vote_entries(
    entries: &[VoteEntry],
    proposal: &Proposal,
) -> Result<(), ClientError> {
    if entries.is_empty() {
        return Err(ClientError::InvalidUsage(
            "a vote must select at least one option".to_string(),
        ));
    }
    if !proposal.vote_open {
        return Err(ClientError::InvalidUsage(format!(
            "proposal {} is closed for voting",
            proposal.proposal_id
        )));
    }
    if entries.len() > proposal.max_options_selectable as usize {
        return Err(ClientError::InvalidUsage(format!(
            "{} entries selected but only {} allowed",
            entries.len(),
            proposal.max_options_selectable
        )));
    }
    for (index, entry) in entries.iter().enumerate() {
        if entry.proposal_id != proposal.proposal_id {
            return Err(ClientError::InvalidUsage(format!(
                "entry references proposal {} but voting on proposal {}",
                entry.proposal_id, proposal.proposal_id
            )));
        }
        if entries[..index].iter().any(|e| e.voted_for == entry.voted_for) {
            return Err(ClientError::InvalidUsage(format!(
                "option {} selected more than once",
                entry.voted_for
            )));
        }
        if !proposal.options.iter().any(|o| o.id == entry.voted_for) {
            return Err(ClientError::InvalidUsage(format!(
                "option {} does not exist on proposal {}",
                entry.voted_for, proposal.proposal_id
            )));
        }
    }
    Ok(())
}

/// Reject an option list the chain would refuse at proposal creation:
/// duplicate ids or pre-seeded vote counts.
pub fn validate_vote_options(options: &[VoteOption]) -> Result<(), ClientError> {
    for (index, option) in options.iter().enumerate() {
        if options[..index].iter().any(|o| o.id == option.id) {
            return Err(ClientError::InvalidUsage(format!(
                "duplicate vote option id {}",
                option.id
            )));
        }
        if option.vote_count != 0 {
            return Err(ClientError::InvalidUsage(format!(
                "option {} has a nonzero initial vote count",
                option.id
            )));
        }
    }
    Ok(())
}

/// Reject a delegate address list the chain would refuse at creation: more
/// than five entries, duplicates, self-delegation, or entries pre-marked
/// signed.
pub fn validate_delegate_addresses(
    owner: &Pubkey,
    addresses: &[DelegateAddress],
) -> Result<(), ClientError> {
    if addresses.len() > MAX_DELEGATE_ADDRESSES {
        return Err(ClientError::InvalidUsage(format!(
            "at most {MAX_DELEGATE_ADDRESSES} delegate addresses allowed"
        )));
    }
    for (index, entry) in addresses.iter().enumerate() {
        if entry.address == *owner {
            return Err(ClientError::InvalidUsage(
                "cannot add self as delegate".to_string(),
            ));
        }
        if entry.signed {
            return Err(ClientError::InvalidUsage(format!(
                "delegate address {} cannot be signed at creation",
                entry.address
            )));
        }
        if addresses[..index].iter().any(|e| e.address == entry.address) {
            return Err(ClientError::InvalidUsage(format!(
                "duplicate delegate address {}",
                entry.address
            )));
        }
    }
    Ok(())
}

/// Reject adding an address an existing delegate account cannot take.
pub fn validate_add_delegate(
    delegate_owner: &Pubkey,
    existing: &[DelegateAddress],
    new_address: &Pubkey,
) -> Result<(), ClientError> {
    if existing.len() >= MAX_DELEGATE_ADDRESSES {
        return Err(ClientError::InvalidUsage(format!(
            "delegate account already holds {MAX_DELEGATE_ADDRESSES} addresses"
        )));
    }
    if new_address == delegate_owner {
        return Err(ClientError::InvalidUsage(
            "cannot add self as delegate".to_string(),
        ));
    }
    if existing.iter().any(|e| e.address == *new_address) {
        return Err(ClientError::InvalidUsage(format!(
            "delegate address {new_address} already present"
        )));
    }
    Ok(())
}

/// Everything needed to assemble a restricted vote from already-fetched
/// state. Pure: callers fetch the votebank, proposal and holdings first.
#[derive(Debug, Clone)]
pub struct RestrictedVoteParams<'a> {
    pub voter: Pubkey,
    pub votebank: Pubkey,
    pub votebank_settings: &'a [SettingsData],
    pub proposal: &'a Proposal,
    pub holdings: &'a [Holding],
    pub vote_entries: Vec<VoteEntry>,
    /// Route through the voter's delegate account.
    pub delegation: bool,
    /// Pay fees from the votebank's sponsored fee-payer PDA.
    pub use_fee_payer: bool,
}

/// Validate, pick the voting identity, derive every involved address and
/// assemble the vote (or vote-with-delegation) instruction.
pub fn build_restricted_vote(
    params: &RestrictedVoteParams<'_>,
    config: &ProgramConfig,
) -> Result<Instruction, ClientError> {
    validate_vote_entries(&params.vote_entries, params.proposal)?;

    let restriction =
        effective_restriction(params.votebank_settings, &params.proposal.settings);
    let identity = select_voting_identity(&restriction, params.holdings, &params.voter)?;

    let proposal_id = params.proposal.proposal_id;
    let (proposal_address, _) =
        pda::proposal_address(&params.votebank, proposal_id, &config.program_id)?;
    let (votes_address, _) = pda::vote_address(
        &params.votebank,
        &identity.mint,
        proposal_id,
        &config.program_id,
    )?;
    let fee_payer = if params.use_fee_payer {
        let (address, _) = pda::fee_payer_address(
            &params.votebank,
            &config.fee_payer_seed,
            &config.program_id,
        )?;
        Some(address)
    } else {
        None
    };

    let args = VoteArgs {
        proposal_id,
        vote_entries: params.vote_entries.clone(),
        additional_account_offsets: vec![identity.hint],
    };
    let extra = remaining_accounts(&identity, &restriction);

    if params.delegation {
        let (delegate_account, _) =
            pda::delegate_address(&params.voter, &config.program_id)?;
        instructions::vote_delegation(
            &VoteDelegationAccounts {
                voter: params.voter,
                fee_payer,
                votebank: params.votebank,
                proposal: proposal_address,
                votes: votes_address,
                nft_vote_mint: identity.mint,
                delegate_account,
                treasury: config.treasury,
                remaining_accounts: extra,
            },
            &args,
            &config.program_id,
        )
    } else {
        instructions::vote(
            &VoteAccounts {
                voter: params.voter,
                fee_payer,
                votebank: params.votebank,
                proposal: proposal_address,
                votes: votes_address,
                nft_vote_mint: identity.mint,
                treasury: config.treasury,
                remaining_accounts: extra,
            },
            &args,
            &config.program_id,
        )
    }
}
