use async_trait::async_trait;
use ethers::providers::{Http, Middleware, Provider};
use ethers::types::{TransactionReceipt, H256};
use tracing::debug;

use crate::types::{AppError, AppResult};

/// Source of transaction receipts. Returns `Ok(None)` when the chain has no
/// receipt for the hash (unknown or still pending).
#[async_trait]
pub trait ChainDataProvider: Send + Sync {
    async fn transaction_receipt(&self, hash: H256) -> AppResult<Option<TransactionReceipt>>;
}

/// JSON-RPC backed provider (`eth_getTransactionReceipt`)
pub struct RpcChainProvider {
    provider: Provider<Http>,
}

impl RpcChainProvider {
    pub fn new(rpc_url: &str) -> AppResult<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| AppError::Config(format!("Invalid RPC_URL: {}", e)))?;

        Ok(Self { provider })
    }
}

#[async_trait]
impl ChainDataProvider for RpcChainProvider {
    async fn transaction_receipt(&self, hash: H256) -> AppResult<Option<TransactionReceipt>> {
        debug!("Fetching receipt for {:?}", hash);
        Ok(self.provider.get_transaction_receipt(hash).await?)
    }
}
