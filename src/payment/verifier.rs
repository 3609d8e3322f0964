//! USDC transfer verification
//!
//! A payment is accepted when the transaction receipt contains at least one
//! ERC-20 `Transfer` log emitted by the configured token contract that moves
//! at least `min_amount` atomic units from the paying wallet to the recipient.
//! Logs are scanned in receipt order and the first qualifying log wins.
//!
//! Addresses and hashes are compared as parsed fixed-size values, so
//! comparisons are case-insensitive regardless of EIP-55 checksumming.

use std::sync::Arc;

use ethers::types::{Address, H256, U256};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::provider::ChainDataProvider;
use super::transfer::{decode_transfer, TransferEvent};
use crate::config::Config;
use crate::types::{AppError, AppResult};

pub const MISSING_INPUT: &str = "Missing wallet or txHash";
pub const INVALID_INPUT: &str = "Invalid wallet or txHash";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierConfig {
    pub token_contract: Address,
    pub recipient: Address,
    pub min_amount: U256,
}

impl VerifierConfig {
    pub fn from_config(config: &Config) -> Self {
        Self {
            token_contract: config.chain.usdc_contract,
            recipient: config.payment.pay_to,
            min_amount: config.payment.min_usdc_amount,
        }
    }

    /// Whether a decoded transfer pays the recipient enough from `wallet`.
    pub fn qualifies(&self, event: &TransferEvent, wallet: Address) -> bool {
        event.from == wallet && event.to == self.recipient && event.value >= self.min_amount
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub valid: bool,
}

pub struct TransferVerifier {
    provider: Arc<dyn ChainDataProvider>,
    config: VerifierConfig,
}

impl TransferVerifier {
    pub fn new(provider: Arc<dyn ChainDataProvider>, config: VerifierConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub async fn verify(&self, wallet: &str, tx_hash: &str) -> AppResult<VerificationResult> {
        if wallet.is_empty() || tx_hash.is_empty() {
            return Err(AppError::InvalidInput(MISSING_INPUT.to_string()));
        }

        let wallet: Address = wallet
            .parse()
            .map_err(|_| AppError::InvalidInput(INVALID_INPUT.to_string()))?;
        let hash: H256 = tx_hash
            .parse()
            .map_err(|_| AppError::InvalidInput(INVALID_INPUT.to_string()))?;

        let receipt = self
            .provider
            .transaction_receipt(hash)
            .await?
            .ok_or_else(|| AppError::TransactionNotFound(tx_hash.to_string()))?;

        debug!("Receipt for {:?} has {} logs", hash, receipt.logs.len());

        let valid = receipt
            .logs
            .iter()
            .filter(|log| log.address == self.config.token_contract)
            .filter_map(decode_transfer)
            .any(|event| self.config.qualifies(&event, wallet));

        info!(wallet = ?wallet, tx_hash = ?hash, valid, "Transfer verification finished");

        Ok(VerificationResult { valid })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::payment::provider::tests::StaticChainProvider;
    use crate::payment::transfer::tests::transfer_log;
    use ethers::types::{Log, TransactionReceipt};
    use std::sync::atomic::Ordering;

    pub(crate) const WALLET: &str = "0x00000000000000000000000000000000000000aA";
    pub(crate) const RECIPIENT: &str = "0x25C741BFEF028D49cE37595f466a8f3E80F474ca";
    pub(crate) const USDC: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";

    pub(crate) fn addr(s: &str) -> Address {
        s.parse().unwrap()
    }

    pub(crate) fn test_config() -> VerifierConfig {
        VerifierConfig {
            token_contract: addr(USDC),
            recipient: addr(RECIPIENT),
            min_amount: U256::from(2_000_000u64),
        }
    }

    pub(crate) fn receipt_with(logs: Vec<Log>) -> TransactionReceipt {
        TransactionReceipt {
            logs,
            ..Default::default()
        }
    }

    pub(crate) fn payment_log(value: u64) -> Log {
        transfer_log(addr(USDC), addr(WALLET), addr(RECIPIENT), U256::from(value))
    }

    fn hash() -> H256 {
        H256::repeat_byte(0x42)
    }

    fn hash_str() -> String {
        format!("{:#x}", hash())
    }

    fn verifier(provider: StaticChainProvider) -> TransferVerifier {
        TransferVerifier::new(Arc::new(provider), test_config())
    }

    #[tokio::test]
    async fn test_missing_input_is_rejected() {
        let verifier = verifier(StaticChainProvider::default());

        assert!(matches!(
            verifier.verify("", &hash_str()).await,
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            verifier.verify(WALLET, "").await,
            Err(AppError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_unparsable_input_is_rejected() {
        let verifier = verifier(StaticChainProvider::default());

        assert!(matches!(
            verifier.verify("not-a-wallet", &hash_str()).await,
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            verifier.verify(WALLET, "0x1234").await,
            Err(AppError::InvalidInput(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_transaction_is_not_found() {
        let verifier = verifier(StaticChainProvider::default());

        assert!(matches!(
            verifier.verify(WALLET, &hash_str()).await,
            Err(AppError::TransactionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_qualifying_transfer_is_valid() {
        let provider = StaticChainProvider::default()
            .with_receipt(hash(), receipt_with(vec![payment_log(2_000_000)]));

        let result = verifier(provider).verify(WALLET, &hash_str()).await.unwrap();
        assert!(result.valid);
    }

    #[tokio::test]
    async fn test_amount_below_minimum_is_invalid() {
        let provider = StaticChainProvider::default()
            .with_receipt(hash(), receipt_with(vec![payment_log(1_999_999)]));

        let result = verifier(provider).verify(WALLET, &hash_str()).await.unwrap();
        assert!(!result.valid);
    }

    #[tokio::test]
    async fn test_sender_and_recipient_must_match() {
        let other = Address::from_low_u64_be(0xdead);
        let wrong_sender = transfer_log(addr(USDC), other, addr(RECIPIENT), U256::from(5_000_000u64));
        let wrong_recipient = transfer_log(addr(USDC), addr(WALLET), other, U256::from(5_000_000u64));
        let provider = StaticChainProvider::default()
            .with_receipt(hash(), receipt_with(vec![wrong_sender, wrong_recipient]));

        let result = verifier(provider).verify(WALLET, &hash_str()).await.unwrap();
        assert!(!result.valid);
    }

    #[tokio::test]
    async fn test_transfers_from_other_tokens_are_ignored() {
        let fake_usdc = Address::from_low_u64_be(0xbad);
        let log = transfer_log(fake_usdc, addr(WALLET), addr(RECIPIENT), U256::from(5_000_000u64));
        let provider = StaticChainProvider::default().with_receipt(hash(), receipt_with(vec![log]));

        let result = verifier(provider).verify(WALLET, &hash_str()).await.unwrap();
        assert!(!result.valid);
    }

    #[tokio::test]
    async fn test_first_match_wins_after_undecodable_logs() {
        let mut garbage = payment_log(2_000_000);
        garbage.data = Default::default();
        let unrelated = transfer_log(
            Address::from_low_u64_be(1),
            addr(WALLET),
            addr(RECIPIENT),
            U256::from(9_000_000u64),
        );
        let provider = StaticChainProvider::default().with_receipt(
            hash(),
            receipt_with(vec![garbage, unrelated, payment_log(1), payment_log(3_000_000)]),
        );

        let result = verifier(provider).verify(WALLET, &hash_str()).await.unwrap();
        assert!(result.valid);
    }

    #[tokio::test]
    async fn test_addresses_are_case_insensitive() {
        let provider = StaticChainProvider::default()
            .with_receipt(hash(), receipt_with(vec![payment_log(2_000_000)]));
        let verifier = verifier(provider);

        let lower = verifier.verify(&WALLET.to_lowercase(), &hash_str()).await.unwrap();
        let upper = verifier
            .verify(&format!("0x{}", WALLET[2..].to_uppercase()), &hash_str().to_uppercase().replacen("0X", "0x", 1))
            .await
            .unwrap();

        assert!(lower.valid);
        assert!(upper.valid);
    }

    #[tokio::test]
    async fn test_repeated_verification_is_idempotent() {
        let provider = Arc::new(
            StaticChainProvider::default()
                .with_receipt(hash(), receipt_with(vec![payment_log(2_000_000)])),
        );
        let verifier = TransferVerifier::new(provider.clone(), test_config());

        let first = verifier.verify(WALLET, &hash_str()).await.unwrap();
        let second = verifier.verify(WALLET, &hash_str()).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let verifier = verifier(StaticChainProvider::failing("connection refused"));

        assert!(matches!(
            verifier.verify(WALLET, &hash_str()).await,
            Err(AppError::Provider(_))
        ));
    }
}
