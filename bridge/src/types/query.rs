use crate::subscription::errors::QueryError;
use providers::{AbiKind, AbiValue, Address, Chain, TokenAmount, TokenHolding};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, PartialEq, Eq, Hash, Clone)]
#[serde(rename_all = "camelCase")]
pub struct QuerySpec {
    pub chain: Chain,
    pub target: QueryTarget,
}

#[derive(Deserialize, Debug, PartialEq, Eq, Hash, Clone)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryTarget {
    NativeBalance,
    TokenBalance {
        token: Address,
    },
    ViewCall {
        contract: Address,
        function: String,
        args: Vec<AbiValue>,
        returns: Vec<AbiKind>,
    },
    WalletInventory,
}

#[derive(Serialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryValue {
    Amount(TokenAmount),
    Returns(Vec<AbiValue>),
    Holdings(Vec<TokenHolding>),
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum QueryResult {
    Disabled,
    Loading,
    Ready(QueryValue),
    Error(QueryError),
}

impl QueryResult {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
