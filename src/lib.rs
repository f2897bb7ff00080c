//! Client library for the omcvote governance program.
//!
//! Covers the full client-side surface: Borsh codecs for the program's
//! account and argument types, PDA derivation, instruction builders for
//! every program operation, the vote-eligibility engine, and the registry
//! of on-chain error codes. All RPC access goes through the
//! [`reader::AccountReader`] seam so logic stays testable offline.

pub mod accounts;
pub mod config;
pub mod errors;
pub mod instructions;
pub mod pda;
pub mod program_errors;
pub mod reader;
pub mod restriction;
pub mod types;

pub use accounts::{DelegateAccount, FeePayer, Proposal, ProgramAccount, VoteAccount, Votebank};
pub use config::{ProgramConfig, PROGRAM_ADDRESS, TREASURY_ADDRESS};
pub use errors::ClientError;
pub use reader::AccountReader;
pub use restriction::{
    build_restricted_vote, extract_restriction, select_voting_identity, Holding,
    RestrictedVoteParams, RestrictionData, RestrictionKind, VotingIdentity,
};
pub use types::{
    DelegateAddress, PostData, SettingsData, VoteEntry, VoteOption, VoteRestrictionRule,
};
