#![deny(clippy::dbg_macro)]

pub mod session;
pub mod subscription;
pub mod tokens;
pub mod types;

#[cfg(test)]
mod testing;

pub use providers::{address, Address, Chain, ChainReader, RpcReader, U256};
pub use session::AccountSession;
pub use subscription::{errors::QueryError, HostEvent, QueryBridge, Subscription};
pub use types::{
    AccountRef, CachePolicy, ConnectRequest, PolicyRequest, QueryResult, QuerySpec, QueryStatus,
    QueryTarget, QueryValue, ResultResponse, SubscribeRequest, SubscriptionCreated,
};
