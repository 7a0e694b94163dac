pub mod codec;
pub mod general;
pub mod indexer;

pub use general::{Provider, RpcReader};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use web3::types::U256;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Chain {
    Ethereum,
    Goerli,
    Polygon,
    Bsc,
    BscTestnet,
    Gnosis,
    Arbitrum,
    Optimism,
}

impl Chain {
    pub fn id(self) -> u64 {
        match self {
            Self::Ethereum => 1,
            Self::Goerli => 5,
            Self::Polygon => 137,
            Self::Bsc => 56,
            Self::BscTestnet => 97,
            Self::Gnosis => 100,
            Self::Arbitrum => 42161,
            Self::Optimism => 10,
        }
    }
}

pub fn u256_from_str<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    let s: &str = Deserialize::deserialize(deserializer)?;

    U256::from_dec_str(s).map_err(D::Error::custom)
}

#[macro_export]
macro_rules! address {
    ($addr:expr) => {{
        use std::str::FromStr;
        $crate::Address::from_str($addr).expect(&format!("Invalid address {}", $addr))
    }};
}
