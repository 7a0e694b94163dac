use crate::subscription::errors::QueryError;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

pub mod policy;
pub mod query;
pub use policy::*;
pub use query::*;

pub use providers::{Address, Chain, U256};

pub type AccountRef = Option<Address>;

#[derive(Serialize, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryStatus {
    Disabled,
    Loading,
    Ready,
    Error,
}

#[skip_serializing_none]
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ResultResponse {
    pub status: QueryStatus,
    pub value: Option<QueryValue>,
    pub error: Option<String>,
}

impl From<QueryResult> for ResultResponse {
    fn from(result: QueryResult) -> Self {
        match result {
            QueryResult::Disabled => Self {
                status: QueryStatus::Disabled,
                value: None,
                error: None,
            },
            QueryResult::Loading => Self {
                status: QueryStatus::Loading,
                value: None,
                error: None,
            },
            QueryResult::Ready(value) => Self {
                status: QueryStatus::Ready,
                value: Some(value),
                error: None,
            },
            QueryResult::Error(e) => Self {
                status: QueryStatus::Error,
                value: None,
                error: Some(e.to_string()),
            },
        }
    }
}

impl From<Result<QueryValue, QueryError>> for ResultResponse {
    fn from(result: Result<QueryValue, QueryError>) -> Self {
        match result {
            Ok(value) => QueryResult::Ready(value).into(),
            // a missing account is a neutral state, not a failure
            Err(QueryError::ConnectionAbsent) => QueryResult::Disabled.into(),
            Err(e) => QueryResult::Error(e).into(),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    pub address: Address,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeRequest {
    pub chain: Chain,
    pub target: QueryTarget,
    #[serde(default)]
    pub policy: PolicyRequest,
}

#[derive(Serialize, Debug)]
pub struct SubscriptionCreated {
    pub id: u64,
}
