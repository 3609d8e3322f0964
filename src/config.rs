use anyhow::{Context, Result};
use ethers::types::{Address, U256};
use std::env;

pub const DEFAULT_RPC_URL: &str = "https://mainnet.base.org";
pub const DEFAULT_PAY_TO: &str = "0x25C741BFEF028D49cE37595f466a8f3E80F474ca";
/// USDC token contract on Base
pub const DEFAULT_USDC_CONTRACT: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";
/// 2 USDC (6 decimals)
pub const DEFAULT_MIN_USDC_AMOUNT: u64 = 2_000_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub chain: ChainConfig,
    pub payment: PaymentConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub public_base_url: String,
}

#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub rpc_url: String,
    pub usdc_contract: Address,
}

#[derive(Debug, Clone)]
pub struct PaymentConfig {
    pub pay_to: Address,
    pub min_usdc_amount: U256,
    pub x402_network: String,
    pub x402_price: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// the Base mainnet defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let pay_to = var("PAY_TO", DEFAULT_PAY_TO);
        let usdc_contract = var("USDC_CONTRACT", DEFAULT_USDC_CONTRACT);
        let min_amount = var("MIN_USDC_AMOUNT", &DEFAULT_MIN_USDC_AMOUNT.to_string());

        Ok(Self {
            server: ServerConfig {
                port: var("PORT", "3000")
                    .parse()
                    .context("PORT must be a valid port number")?,
                host: var("HOST", "0.0.0.0"),
                public_base_url: var("PUBLIC_BASE_URL", "https://flaggi.vercel.app")
                    .trim_end_matches('/')
                    .to_string(),
            },
            chain: ChainConfig {
                rpc_url: var("RPC_URL", DEFAULT_RPC_URL),
                usdc_contract: usdc_contract
                    .parse()
                    .with_context(|| format!("USDC_CONTRACT is not an address: {}", usdc_contract))?,
            },
            payment: PaymentConfig {
                pay_to: pay_to
                    .parse()
                    .with_context(|| format!("PAY_TO is not an address: {}", pay_to))?,
                min_usdc_amount: U256::from_dec_str(&min_amount)
                    .with_context(|| format!("MIN_USDC_AMOUNT is not an integer: {}", min_amount))?,
                x402_network: var("X402_NETWORK", "base"),
                x402_price: var("X402_PRICE", "2.00"),
            },
        })
    }
}
