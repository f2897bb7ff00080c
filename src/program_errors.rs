//! Registry of the on-chain program's custom error codes.
//!
//! When a simulation or submission fails with a custom code, this table
//! turns the bare number into the name and message the program's source
//! assigns it. Unknown codes translate to nothing rather than to a guess.

use solana_sdk::instruction::InstructionError;
use solana_sdk::transaction::TransactionError;

/// One entry of the program's error table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramError {
    pub code: u32,
    pub name: &'static str,
    pub message: &'static str,
}

impl std::fmt::Display for ProgramError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.name, self.code, self.message)
    }
}

/// The program's complete custom-error table, ascending by code. Codes are
/// grouped by origin: 6000s settings parsing, 6100s proposal ids, 6200s
/// everything else.
pub const PROGRAM_ERRORS: &[ProgramError] = &[
    ProgramError {
        code: 6000,
        name: "BadDescriptionSetting",
        message: "The description provided is not a description setting",
    },
    ProgramError {
        code: 6001,
        name: "BadVoteRestrictionSetting",
        message: "The vote restriction provided is not a vote restriction setting",
    },
    ProgramError {
        code: 6100,
        name: "ProposalIdTooLarge",
        message: "The provided proposal ID is too large an increase",
    },
    ProgramError {
        code: 6200,
        name: "NotTokenAccount",
        message: "The provided token account is not a token account",
    },
    ProgramError {
        code: 6201,
        name: "MissingTokenRestriction",
        message: "Missing the token required by the restriction",
    },
    ProgramError {
        code: 6202,
        name: "InvalidMetadataKey",
        message: "Account provided is not expected metadata key",
    },
    ProgramError {
        code: 6203,
        name: "MetadataAccountInvalid",
        message: "The provided account is not a metadata account",
    },
    ProgramError {
        code: 6204,
        name: "NoCollectionOnMetadata",
        message: "No collection set on the metadata",
    },
    ProgramError {
        code: 6205,
        name: "MissingCollectionNftRestriction",
        message: "Missing an NFT from the collection required by the restriction",
    },
    ProgramError {
        code: 6206,
        name: "MalformedSetting",
        message: "Cannot parse a setting",
    },
    ProgramError {
        code: 6207,
        name: "InvalidRestrictionExtraAccounts",
        message: "Extra account offsets invalid for this restriction type",
    },
    ProgramError {
        code: 6208,
        name: "MissingRequiredOffsets",
        message: "Must supply offsets when a proposal restriction applies",
    },
    ProgramError {
        code: 6209,
        name: "AlreadyVoted",
        message: "Already voted on this proposal",
    },
    ProgramError {
        code: 6210,
        name: "MissingCredentials",
        message: "Missing a required credential for proposal restriction",
    },
    ProgramError {
        code: 6211,
        name: "MultipleProposalIds",
        message: "Cannot vote on a proposal with different proposal ids",
    },
    ProgramError {
        code: 6212,
        name: "MultipleSameVotedFor",
        message: "Cannot vote on an option more than once",
    },
    ProgramError {
        code: 6213,
        name: "TooManyEntriesSelected",
        message: "Cannot vote for more than max allowed",
    },
    ProgramError {
        code: 6214,
        name: "MissingSigner",
        message: "There must be a signer present for this instruction",
    },
    ProgramError {
        code: 6215,
        name: "DuplicateVoteOptionIds",
        message: "Vote option IDs must be unique",
    },
    ProgramError {
        code: 6216,
        name: "ProposalClosed",
        message: "Proposal is closed for voting",
    },
    ProgramError {
        code: 6217,
        name: "ProposalCannotBeClosed",
        message: "Cannot close proposal for voting",
    },
    ProgramError {
        code: 6218,
        name: "NotProposalOwner",
        message: "Cannot cancel proposal that is not the original creator",
    },
    ProgramError {
        code: 6219,
        name: "NotVotebankOwner",
        message: "Not a votebank owner",
    },
    ProgramError {
        code: 6220,
        name: "OwnerAlreadyExists",
        message: "Already owner of the votebank",
    },
    ProgramError {
        code: 6221,
        name: "OwnerNotFound",
        message: "Owner on votebank does not exist",
    },
    ProgramError {
        code: 6222,
        name: "LastOwnerCannotBeRemoved",
        message: "There needs to be at least one owner",
    },
    ProgramError {
        code: 6223,
        name: "TooManyDelegateAddresses",
        message: "You can only delegate 5 addresses",
    },
    ProgramError {
        code: 6224,
        name: "DelegateAddressNotFound",
        message: "Signer not found in delegate addresses",
    },
    ProgramError {
        code: 6225,
        name: "DuplicateDelegateAddresses",
        message: "Duplicate delegate addresses found",
    },
    ProgramError {
        code: 6226,
        name: "DelegateAddressAlreadySigned",
        message: "Delegate address cannot be signed on creation",
    },
    ProgramError {
        code: 6227,
        name: "CannotAddSelfAsDelegate",
        message: "Cannot add self as delegate",
    },
    ProgramError {
        code: 6228,
        name: "VoteCountMustBeZero",
        message: "Vote count must be zero",
    },
    ProgramError {
        code: 6229,
        name: "FeePayerAlreadyInitialized",
        message: "Fee payer is already initialized",
    },
    ProgramError {
        code: 6230,
        name: "FeePayerNotInitialized",
        message: "Fee payer is not initialized",
    },
];

/// Look up a single custom error code.
pub fn from_code(code: u32) -> Option<&'static ProgramError> {
    PROGRAM_ERRORS.iter().find(|entry| entry.code == code)
}

/// Translate raw codes into table entries, preserving order and dropping
/// codes the table does not know.
pub fn translate_codes(codes: &[u32]) -> Vec<&'static ProgramError> {
    codes.iter().filter_map(|code| from_code(*code)).collect()
}

/// Pull the custom error codes out of a failed transaction, if any.
pub fn custom_codes(error: &TransactionError) -> Vec<u32> {
    match error {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => vec![*code],
        _ => vec![],
    }
}
