pub mod types;

use crate::evm::{
    indexer::types::{HoldingsResponse, IndexerError, TokenHolding},
    Chain,
};
use reqwest::StatusCode;
use tokio::sync::RwLock;
use web3::types::Address;

const HOLDINGS: &str = "holdings?address=";
const CHAIN_ID: &str = "&chainId=";

lazy_static::lazy_static! {
    static ref CLIENT: RwLock<reqwest::Client> =
        RwLock::new(reqwest::Client::new());
}

fn base_url() -> Result<String, IndexerError> {
    std::env::var("INDEXER_URL").map_err(|_| IndexerError::Unconfigured)
}

pub async fn wallet_holdings(
    chain: Chain,
    owner: Address,
) -> Result<Vec<TokenHolding>, IndexerError> {
    let base_url = base_url()?;
    let id = chain.id();

    let res = CLIENT
        .read()
        .await
        .get(format!("{base_url}/{HOLDINGS}{:#x}{CHAIN_ID}{id}", owner))
        .send()
        .await?;

    let status = res.status();

    match status {
        StatusCode::OK => Ok(res.json::<HoldingsResponse>().await?.tokens),
        StatusCode::BAD_REQUEST => Err(IndexerError::InvalidRequest),
        StatusCode::TOO_MANY_REQUESTS => Err(IndexerError::TooManyRequests),
        _ => Err(IndexerError::Unknown(status.as_u16())),
    }
}
