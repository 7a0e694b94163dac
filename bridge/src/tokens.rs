use lazy_static::lazy_static;
use providers::{Address, Chain};
use serde::Serialize;

/// A token the demo API can resolve by symbol instead of raw address.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KnownToken {
    pub chain: Chain,
    pub symbol: &'static str,
    pub address: Address,
    pub decimals: u8,
}

macro_rules! token {
    ($chain: ident, $symbol: literal, $address: literal, $decimals: literal) => {
        KnownToken {
            chain: Chain::$chain,
            symbol: $symbol,
            address: crate::address!($address),
            decimals: $decimals,
        }
    };
}

lazy_static! {
    pub static ref KNOWN_TOKENS: Vec<KnownToken> = vec![
        token!(Ethereum, "USDC", "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48", 6),
        token!(Ethereum, "DAI", "0x6b175474e89094c44da98b954eedeac495271d0f", 18),
        token!(Ethereum, "WETH", "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2", 18),
        token!(Polygon, "USDC", "0x2791bca1f2de4661ed88a30c99a7a9449aa84174", 6),
        token!(Polygon, "WETH", "0x7ceb23fd6bc0add59e62ac25578270cff1b9f619", 18),
        token!(Bsc, "USDT", "0x55d398326f99059ff775485246999027b3197955", 18),
        token!(BscTestnet, "USDC", "0x64544969ed7ebf5f083679233325356ebe738930", 18),
        token!(Gnosis, "USDC", "0xddafbb505ad214d7b80b1f830fccc89b60fb7a83", 6),
        token!(Arbitrum, "USDC", "0xff970a61a04b1ca14834a43f5de4533ebddb5cc8", 6),
        token!(Optimism, "USDC", "0x7f5c764cbc14f9669b88837ca1490cca17c31607", 6),
    ];
}

pub fn find(chain: Chain, symbol: &str) -> Option<&'static KnownToken> {
    KNOWN_TOKENS
        .iter()
        .find(|token| token.chain == chain && token.symbol.eq_ignore_ascii_case(symbol))
}
