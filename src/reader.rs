//! The external byte-retrieval seam.
//!
//! Account models and the restriction engine never talk to the network
//! themselves; they take an [`AccountReader`] so the same code runs against a
//! live RPC endpoint or captured fixtures.

use std::collections::HashMap;

use solana_client::rpc_client::RpcClient;
use solana_sdk::pubkey::Pubkey;

use crate::errors::ClientError;

/// Reads the raw bytes stored at an address, or `None` when no account
/// exists there.
pub trait AccountReader {
    fn read(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, ClientError>;
}

impl AccountReader for RpcClient {
    fn read(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, ClientError> {
        let response = self
            .get_account_with_commitment(address, self.commitment())
            .map_err(|e| ClientError::Rpc(e.to_string()))?;
        Ok(response.value.map(|account| account.data))
    }
}

/// In-memory reader over captured account bytes. Used by tests and offline
/// fixtures.
impl AccountReader for HashMap<Pubkey, Vec<u8>> {
    fn read(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, ClientError> {
        Ok(self.get(address).cloned())
    }
}
