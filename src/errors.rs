use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Errors produced by the client core.
///
/// Codec and derivation failures propagate unchanged to the caller; the core
/// never retries. Retry policy, if any, belongs to whoever submits the
/// transaction.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Buffer too short, bad length prefix, invalid UTF-8 or an unknown
    /// tagged-union discriminant. The offending record should be rejected;
    /// nothing about the process state is corrupted.
    #[error("malformed {kind} data: {reason}")]
    MalformedData { kind: &'static str, reason: String },

    /// The reader reported no account at the given address. Often an
    /// expected state (e.g. no delegate account yet), not a user-facing
    /// failure.
    #[error("account not found: {0}")]
    AccountNotFound(Pubkey),

    /// All 256 bump values were exhausted during address derivation. Should
    /// never happen for the seed lengths this program uses.
    #[error("no valid bump found for the given seeds")]
    NoValidBumpFound,

    /// The candidate does not satisfy the active vote restriction, or a vote
    /// account already exists for this identity and proposal.
    #[error("voter is not eligible: {0}")]
    IneligibleVoter(String),

    /// A local pre-submission check failed; the transaction was never built.
    #[error("invalid usage: {0}")]
    InvalidUsage(String),

    /// The restriction rule kind is recognized but its multi-target matching
    /// semantics are not implemented. Never silently treated as
    /// unrestricted.
    #[error("vote restriction rule {0} is not supported yet")]
    UnsupportedRestriction(&'static str),

    #[error("Solana RPC error: {0}")]
    Rpc(String),
}

impl ClientError {
    pub(crate) fn malformed(kind: &'static str, err: impl std::fmt::Display) -> Self {
        ClientError::MalformedData {
            kind,
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_data_message() {
        let err = ClientError::malformed("Votebank", "unexpected end of input");
        assert_eq!(
            err.to_string(),
            "malformed Votebank data: unexpected end of input"
        );
    }

    #[test]
    fn test_account_not_found_includes_address() {
        let address = Pubkey::new_unique();
        let err = ClientError::AccountNotFound(address);
        assert!(err.to_string().contains(&address.to_string()));
    }

    #[test]
    fn test_unsupported_restriction_names_rule() {
        let err = ClientError::UnsupportedRestriction("NftListAnyOwnership");
        assert!(err.to_string().contains("NftListAnyOwnership"));
    }
}
