pub mod evm;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

pub use evm::{
    codec::{AbiKind, AbiValue},
    general::RpcReader,
    indexer::types::{IndexerError, TokenHolding},
    Chain,
};
pub use web3::types::{Address, U256};

pub type Amount = f64;

#[derive(Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "camelCase")]
pub struct TokenAmount {
    pub value: U256,
    pub decimals: u8,
}

impl TokenAmount {
    pub fn scaled(&self) -> Amount {
        self.value.as_u128() as Amount / 10_u128.pow(self.decimals as u32) as Amount
    }
}

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("chain `{0}` is not configured")]
    NoSuchChain(String),
    #[error(transparent)]
    Rpc(#[from] web3::Error),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error(transparent)]
    Indexer(#[from] IndexerError),
}

impl From<web3::contract::Error> for ReaderError {
    fn from(e: web3::contract::Error) -> Self {
        match e {
            web3::contract::Error::Api(inner) => Self::Rpc(inner),
            other => Self::Decode(other.to_string()),
        }
    }
}

#[async_trait]
pub trait ChainReader: Send + Sync {
    async fn native_balance(
        &self,
        chain: Chain,
        owner: Address,
    ) -> Result<TokenAmount, ReaderError>;

    async fn token_balance(
        &self,
        chain: Chain,
        token: Address,
        owner: Address,
    ) -> Result<TokenAmount, ReaderError>;

    async fn view_call(
        &self,
        chain: Chain,
        contract: Address,
        function: &str,
        args: &[AbiValue],
        returns: &[AbiKind],
    ) -> Result<Vec<AbiValue>, ReaderError>;

    async fn wallet_holdings(
        &self,
        chain: Chain,
        owner: Address,
    ) -> Result<Vec<TokenHolding>, ReaderError>;
}

#[cfg(test)]
mod test {
    use super::{TokenAmount, U256};

    #[test]
    fn token_amount_scaling() {
        let one_coin = TokenAmount {
            value: U256::exp10(18),
            decimals: 18,
        };
        let half_usdc = TokenAmount {
            value: U256::from(500_000),
            decimals: 6,
        };

        assert_eq!(one_coin.scaled(), 1.0);
        assert_eq!(half_usdc.scaled(), 0.5);
    }
}
