use crate::evm::u256_from_str;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use web3::types::{Address, U256};

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("Environment variable `INDEXER_URL` not set")]
    Unconfigured,
    #[error("Invalid indexer request")]
    InvalidRequest,
    #[error("Too many requests to the indexer")]
    TooManyRequests,
    #[error("Got response with status code `{0}`")]
    Unknown(u16),
    #[error("{0}")]
    RequestFailed(#[from] reqwest::Error),
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TokenHolding {
    pub address: Address,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(deserialize_with = "u256_from_str")]
    pub amount: U256,
    pub decimals: u8,
}

#[derive(Deserialize, Debug)]
pub struct HoldingsResponse {
    pub tokens: Vec<TokenHolding>,
}
