// Payment verification (x402 over USDC on Base)

pub mod provider;
pub mod transfer;
pub mod verifier;
pub mod x402;

pub use provider::{ChainDataProvider, RpcChainProvider};
pub use transfer::{decode_transfer, TransferEvent};
pub use verifier::{TransferVerifier, VerificationResult, VerifierConfig};
pub use x402::{PaymentRequired, PaymentRequirements};
