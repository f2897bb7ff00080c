use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::errors::ClientError;

/// The mainnet omcvote program.
pub const PROGRAM_ADDRESS: Pubkey =
    solana_sdk::pubkey!("mdVo394XANGMrVXZCVAaX3AMHYvtTxXwg1sQmDSY1W1");

/// Treasury that collects votebank, proposal, vote and delegate fees.
pub const TREASURY_ADDRESS: Pubkey =
    solana_sdk::pubkey!("MDevHRDjYZDR565BQCpwVxFc5DQhQ22dEjDsST9Ycqm");

/// Default fee-payer PDA seed. Kept configurable because the literal has not
/// been confirmed against the live program; override via [`ProgramConfig`]
/// if the deployment differs.
pub const DEFAULT_FEE_PAYER_SEED: &[u8] = b"fee_payer";

// Lamport fees declared as program constants, exposed for fee estimation.
pub const DELEGATE_FEE: u64 = 1_000;
pub const FEE_NEW_VOTEBANK: u64 = 100_000;
pub const FEE_PROPOSAL: u64 = 50_000;
pub const FEE_VOTE: u64 = 1_000;

/// A concrete deployment of the voting program. Derivation and instruction
/// building take this explicitly so tests and alternate deployments never
/// require recompilation.
#[derive(Debug, Clone)]
pub struct ProgramConfig {
    pub program_id: Pubkey,
    pub treasury: Pubkey,
    pub fee_payer_seed: Vec<u8>,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            program_id: PROGRAM_ADDRESS,
            treasury: TREASURY_ADDRESS,
            fee_payer_seed: DEFAULT_FEE_PAYER_SEED.to_vec(),
        }
    }
}

/// Persisted CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub cluster: String,
    pub rpc_url: String,
    /// Override the program deployment; defaults to mainnet omcvote.
    pub program_id: Option<String>,
    pub treasury: Option<String>,
    pub fee_payer_seed: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cluster: "mainnet-beta".to_string(),
            rpc_url: "https://api.mainnet-beta.solana.com".to_string(),
            program_id: None,
            treasury: None,
            fee_payer_seed: None,
        }
    }
}

impl Config {
    /// Get config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?;
        Ok(config_dir.join("omcvote").join("config.toml"))
    }

    /// Load config from file, creating the default on first run.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let contents =
            std::fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Config =
            toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        Ok(())
    }

    /// Update cluster configuration
    pub fn set_cluster(&mut self, cluster: &str) -> Result<()> {
        let rpc_url = match cluster {
            "devnet" => "https://api.devnet.solana.com",
            "mainnet-beta" => "https://api.mainnet-beta.solana.com",
            _ => {
                return Err(ClientError::InvalidUsage(format!(
                    "invalid cluster name: {cluster}. Valid options: devnet, mainnet-beta"
                ))
                .into())
            }
        };

        self.cluster = cluster.to_string();
        self.rpc_url = rpc_url.to_string();
        self.save()?;

        Ok(())
    }

    /// Resolve the effective program deployment from the overrides.
    pub fn program_config(&self) -> Result<ProgramConfig> {
        let mut config = ProgramConfig::default();
        if let Some(id) = &self.program_id {
            config.program_id =
                Pubkey::from_str(id).context("Invalid program_id in config")?;
        }
        if let Some(treasury) = &self.treasury {
            config.treasury =
                Pubkey::from_str(treasury).context("Invalid treasury in config")?;
        }
        if let Some(seed) = &self.fee_payer_seed {
            config.fee_payer_seed = seed.as_bytes().to_vec();
        }
        Ok(config)
    }
}
