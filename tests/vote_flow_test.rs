// End-to-end offline scenario: an NFT-gated votebank with an open Yes/No
// proposal, a voter holding an NFT from the required collection, and the
// assembled vote instruction checked account by account and byte by byte.

use std::collections::HashMap;

use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address;

use omcvote_client::accounts::{Proposal, ProgramAccount, Votebank};
use omcvote_client::config::ProgramConfig;
use omcvote_client::instructions::{VOTE_DELEGATION_DISCRIMINATOR, VOTE_DISCRIMINATOR};
use omcvote_client::restriction::{
    build_restricted_vote, vote_exists, Holding, RestrictedVoteParams,
};
use omcvote_client::types::{
    to_bytes, PostData, SettingsData, VoteEntry, VoteOption, VoteRestrictionRule,
};
use omcvote_client::{pda, ClientError};

fn stored_account<T: borsh::BorshSerialize>(discriminator: [u8; 8], value: &T) -> Vec<u8> {
    let mut data = discriminator.to_vec();
    data.extend_from_slice(&to_bytes(value).unwrap());
    data
}

fn nft_gated_votebank(collection: Pubkey, owner: Pubkey) -> Votebank {
    Votebank {
        max_child_id: 8,
        moderator_mint: Pubkey::default(),
        settings: vec![
            SettingsData::Description {
                title: "omc".to_string(),
                desc: "Overgrown Monkes DAO".to_string(),
            },
            SettingsData::OwnerInfo {
                owners: vec![owner],
            },
            SettingsData::VoteRestriction {
                vote_restriction: VoteRestrictionRule::NftOwnership {
                    collection_id: collection,
                },
            },
        ],
        open_proposals: vec![7],
        closed_proposals: vec![],
    }
}

fn yes_no_proposal(poster: Pubkey) -> Proposal {
    let post = PostData {
        title: "Mint a second collection?".to_string(),
        summary: "Vote on expanding the collection".to_string(),
        url: String::new(),
        time: 1_700_000_000,
    };
    Proposal {
        poster,
        data: post.to_bytes().unwrap(),
        options: vec![
            VoteOption {
                id: 0,
                title: "Yes".to_string(),
                vote_count: 0,
            },
            VoteOption {
                id: 1,
                title: "No".to_string(),
                vote_count: 0,
            },
        ],
        max_options_selectable: 1,
        settings: vec![],
        voter_count: 0,
        vote_open: true,
        proposal_id: 7,
        end_time: 0,
        collection_size: 0,
        quorum_threshold: 0,
        quorum_met_time: 0,
    }
}

#[test]
fn test_nft_gated_vote_end_to_end() {
    let config = ProgramConfig::default();
    let collection = Pubkey::new_unique();
    let voter = Pubkey::new_unique();
    let nft_mint = Pubkey::new_unique();
    let metadata = Pubkey::new_unique();

    let (votebank_address, _) = pda::votebank_address("omc", &config.program_id).unwrap();
    let votebank = nft_gated_votebank(collection, voter);
    let proposal = yes_no_proposal(voter);

    // Stored bytes survive the decode path, rent padding included.
    let mut stored = stored_account(Votebank::DISCRIMINATOR, &votebank);
    stored.extend_from_slice(&[0u8; 64]);
    let decoded = Votebank::decode(&stored).unwrap();
    assert_eq!(decoded, votebank);

    let holdings = vec![
        Holding {
            mint: Pubkey::new_unique(),
            metadata: Pubkey::new_unique(),
            collection: Some(Pubkey::new_unique()),
            owner: voter,
        },
        Holding {
            mint: nft_mint,
            metadata,
            collection: Some(collection),
            owner: voter,
        },
    ];

    let params = RestrictedVoteParams {
        voter,
        votebank: votebank_address,
        votebank_settings: &votebank.settings,
        proposal: &proposal,
        holdings: &holdings,
        vote_entries: vec![VoteEntry {
            proposal_id: 7,
            voted_for: 0,
        }],
        delegation: false,
        use_fee_payer: false,
    };
    let ix = build_restricted_vote(&params, &config).unwrap();

    assert_eq!(ix.program_id, config.program_id);
    assert_eq!(&ix.data[..8], &VOTE_DISCRIMINATOR);

    // discriminator + proposal_id + one entry + one NftOwnership offsets hint
    let mut expected = VOTE_DISCRIMINATOR.to_vec();
    expected.extend_from_slice(&7u32.to_le_bytes());
    expected.extend_from_slice(&1u32.to_le_bytes());
    expected.extend_from_slice(&7u32.to_le_bytes());
    expected.push(0);
    expected.extend_from_slice(&1u32.to_le_bytes());
    expected.extend_from_slice(&[1, 0, 1, 2]);
    assert_eq!(ix.data, expected);

    // Fixed accounts: voter, fee payer slot, votebank, proposal, votes,
    // mint, treasury, system program. Then exactly the three restriction
    // accounts in token, metadata, collection order.
    assert_eq!(ix.accounts.len(), 11);
    assert_eq!(ix.accounts[0].pubkey, voter);
    assert!(ix.accounts[0].is_signer);
    // No sponsored fee: the optional slot holds the program id.
    assert_eq!(ix.accounts[1].pubkey, config.program_id);
    assert_eq!(ix.accounts[2].pubkey, votebank_address);
    let (proposal_address, _) =
        pda::proposal_address(&votebank_address, 7, &config.program_id).unwrap();
    assert_eq!(ix.accounts[3].pubkey, proposal_address);
    let (votes_address, _) =
        pda::vote_address(&votebank_address, &nft_mint, 7, &config.program_id).unwrap();
    assert_eq!(ix.accounts[4].pubkey, votes_address);
    assert_eq!(ix.accounts[5].pubkey, nft_mint);
    assert_eq!(ix.accounts[6].pubkey, config.treasury);
    assert_eq!(
        ix.accounts[8].pubkey,
        get_associated_token_address(&voter, &nft_mint)
    );
    assert_eq!(ix.accounts[9].pubkey, metadata);
    assert_eq!(ix.accounts[10].pubkey, collection);

    // The already-voted guard flips once the vote account exists.
    let mut chain: HashMap<Pubkey, Vec<u8>> = HashMap::new();
    assert!(!vote_exists(&chain, &votebank_address, &nft_mint, 7, &config.program_id).unwrap());
    chain.insert(votes_address, vec![0u8; 16]);
    assert!(vote_exists(&chain, &votebank_address, &nft_mint, 7, &config.program_id).unwrap());
}

#[test]
fn test_ineligible_holder_is_rejected_locally() {
    let config = ProgramConfig::default();
    let collection = Pubkey::new_unique();
    let voter = Pubkey::new_unique();
    let votebank = nft_gated_votebank(collection, voter);
    let proposal = yes_no_proposal(voter);

    // Holdings from the wrong collection only.
    let holdings = vec![Holding {
        mint: Pubkey::new_unique(),
        metadata: Pubkey::new_unique(),
        collection: Some(Pubkey::new_unique()),
        owner: voter,
    }];
    let params = RestrictedVoteParams {
        voter,
        votebank: Pubkey::new_unique(),
        votebank_settings: &votebank.settings,
        proposal: &proposal,
        holdings: &holdings,
        vote_entries: vec![VoteEntry {
            proposal_id: 7,
            voted_for: 1,
        }],
        delegation: false,
        use_fee_payer: false,
    };
    let err = build_restricted_vote(&params, &config).unwrap_err();
    assert!(matches!(err, ClientError::IneligibleVoter(_)));
}

#[test]
fn test_delegated_vote_carries_delegate_account() {
    let config = ProgramConfig::default();
    let mint = Pubkey::new_unique();
    let delegate_wallet = Pubkey::new_unique();
    let votebank_owner = Pubkey::new_unique();

    let votebank = Votebank {
        max_child_id: 8,
        moderator_mint: Pubkey::default(),
        settings: vec![
            SettingsData::OwnerInfo {
                owners: vec![votebank_owner],
            },
            SettingsData::VoteRestriction {
                vote_restriction: VoteRestrictionRule::TokenOwnership { mint, amount: 1 },
            },
        ],
        open_proposals: vec![7],
        closed_proposals: vec![],
    };
    let proposal = yes_no_proposal(votebank_owner);
    let (votebank_address, _) = pda::votebank_address("omc", &config.program_id).unwrap();

    let params = RestrictedVoteParams {
        voter: delegate_wallet,
        votebank: votebank_address,
        votebank_settings: &votebank.settings,
        proposal: &proposal,
        holdings: &[],
        vote_entries: vec![VoteEntry {
            proposal_id: 7,
            voted_for: 1,
        }],
        delegation: true,
        use_fee_payer: true,
    };
    let ix = build_restricted_vote(&params, &config).unwrap();

    assert_eq!(&ix.data[..8], &VOTE_DELEGATION_DISCRIMINATOR);
    // voter, fee payer, votebank, proposal, votes, mint, delegate account,
    // treasury, system program, plus the token account.
    assert_eq!(ix.accounts.len(), 10);

    let (fee_payer, _) = pda::fee_payer_address(
        &votebank_address,
        &config.fee_payer_seed,
        &config.program_id,
    )
    .unwrap();
    assert_eq!(ix.accounts[1].pubkey, fee_payer);
    assert!(ix.accounts[1].is_writable);

    // Token restriction: identity is the required mint itself.
    assert_eq!(ix.accounts[5].pubkey, mint);
    let (delegate_account, _) =
        pda::delegate_address(&delegate_wallet, &config.program_id).unwrap();
    assert_eq!(ix.accounts[6].pubkey, delegate_account);
    assert_eq!(
        ix.accounts[9].pubkey,
        get_associated_token_address(&delegate_wallet, &mint)
    );
}

#[test]
fn test_closed_proposal_vote_rejected() {
    let config = ProgramConfig::default();
    let voter = Pubkey::new_unique();
    let votebank = nft_gated_votebank(Pubkey::new_unique(), voter);
    let mut proposal = yes_no_proposal(voter);
    proposal.vote_open = false;

    let params = RestrictedVoteParams {
        voter,
        votebank: Pubkey::new_unique(),
        votebank_settings: &votebank.settings,
        proposal: &proposal,
        holdings: &[],
        vote_entries: vec![VoteEntry {
            proposal_id: 7,
            voted_for: 0,
        }],
        delegation: false,
        use_fee_payer: false,
    };
    let err = build_restricted_vote(&params, &config).unwrap_err();
    assert!(matches!(err, ClientError::InvalidUsage(_)));
}

#[test]
fn test_stored_proposal_roundtrips_through_fetch() {
    let config = ProgramConfig::default();
    let voter = Pubkey::new_unique();
    let (votebank_address, _) = pda::votebank_address("omc", &config.program_id).unwrap();
    let (proposal_address, _) =
        pda::proposal_address(&votebank_address, 7, &config.program_id).unwrap();

    let proposal = yes_no_proposal(voter);
    let mut chain: HashMap<Pubkey, Vec<u8>> = HashMap::new();
    chain.insert(
        proposal_address,
        stored_account(Proposal::DISCRIMINATOR, &proposal),
    );

    let fetched = Proposal::fetch(&chain, &proposal_address).unwrap();
    assert_eq!(fetched, proposal);
    assert_eq!(fetched.post_data().unwrap().title, "Mint a second collection?");

    let missing = Proposal::fetch(&chain, &Pubkey::new_unique());
    assert!(matches!(missing, Err(ClientError::AccountNotFound(_))));
}
