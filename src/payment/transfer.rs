// ERC-20 Transfer event decoding

use ethers::abi::RawLog;
use ethers::contract::EthEvent;
use ethers::types::{Address, Log, U256};

/// `Transfer(address indexed from, address indexed to, uint256 value)`
#[derive(Debug, Clone, PartialEq, Eq, EthEvent)]
#[ethevent(name = "Transfer", abi = "Transfer(address,address,uint256)")]
pub struct TransferEvent {
    #[ethevent(indexed)]
    pub from: Address,
    #[ethevent(indexed)]
    pub to: Address,
    pub value: U256,
}

/// Decode a receipt log as an ERC-20 Transfer. Returns None if the log does not
/// carry the Transfer signature or its topics/data have the wrong shape.
///
/// ERC-721 also emits Transfer(address,address,uint256) but with the token id
/// indexed (4 topics, empty data), which fails to decode here.
pub fn decode_transfer(log: &Log) -> Option<TransferEvent> {
    let topic0 = log.topics.first()?;
    if *topic0 != TransferEvent::signature() {
        return None;
    }

    let raw = RawLog {
        topics: log.topics.clone(),
        data: log.data.to_vec(),
    };

    <TransferEvent as EthEvent>::decode_log(&raw).ok()
}
