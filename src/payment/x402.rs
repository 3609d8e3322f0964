// x402 payment-required descriptors (Base/USDC)

use ethers::utils::to_checksum;
use serde::{Deserialize, Serialize};

use crate::config::Config;

pub const X402_VERSION: u32 = 1;

/// Body of a `402 Payment Required` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequired {
    pub x402_version: u32,
    pub payer: String,
    pub accepts: Vec<PaymentRequirements>,
}

/// One accepted way of paying for a resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequirements {
    pub resource: String,
    pub scheme: String,
    pub network: String,
    pub max_amount_required: String,
    pub description: String,
    pub mime_type: String,
    pub pay_to: String,
    pub asset: String,
    pub max_timeout_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_schema: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<serde_json::Value>,
}

impl PaymentRequirements {
    fn exact_usdc(config: &Config, resource: String, description: String, max_timeout_seconds: u64) -> Self {
        Self {
            resource,
            scheme: "exact".to_string(),
            network: config.payment.x402_network.clone(),
            max_amount_required: config.payment.x402_price.clone(),
            description,
            mime_type: "application/json".to_string(),
            pay_to: to_checksum(&config.payment.pay_to, None),
            asset: "USDC".to_string(),
            max_timeout_seconds,
            output_schema: None,
            extra: None,
        }
    }
}

impl PaymentRequired {
    /// Descriptor for the mint resource served at `path`.
    pub fn mint(config: &Config, path: &str) -> Self {
        let mut requirements = PaymentRequirements::exact_usdc(
            config,
            format!("{}{}", config.server.public_base_url, path),
            format!("Mint 1 FLAGGI NFT for ${}", config.payment.x402_price),
            15,
        );
        requirements.output_schema = Some(mint_output_schema());
        requirements.extra = Some(serde_json::json!({
            "provider": "FLAGGI",
            "category": "Minting"
        }));

        Self::with(config, requirements)
    }

    /// Short-form descriptor for the ownership check.
    pub fn verify_ownership(config: &Config) -> Self {
        let requirements = PaymentRequirements::exact_usdc(
            config,
            format!("{}/mint", config.server.public_base_url),
            "Verify USDC payment transaction".to_string(),
            10,
        );

        Self::with(config, requirements)
    }

    fn with(config: &Config, requirements: PaymentRequirements) -> Self {
        Self {
            x402_version: X402_VERSION,
            payer: to_checksum(&config.payment.pay_to, None),
            accepts: vec![requirements],
        }
    }
}

fn mint_output_schema() -> serde_json::Value {
    serde_json::json!({
        "input": {
            "type": "http",
            "method": "POST",
            "bodyType": "json",
            "bodyFields": {
                "wallet": {
                    "type": "string",
                    "required": ["wallet"],
                    "description": "Wallet address"
                },
                "txHash": {
                    "type": "string",
                    "required": ["txHash"],
                    "description": "Transaction hash"
                }
            }
        },
        "output": {
            "success": { "type": "boolean" },
            "message": { "type": "string" }
        }
    })
}
