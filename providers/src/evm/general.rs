use crate::{
    evm::{codec, indexer, Chain},
    AbiKind, AbiValue, ChainReader, ReaderError, TokenAmount, TokenHolding,
};
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use web3::{
    contract::{Contract, Options},
    transports::Http,
    types::{Address, Bytes, CallRequest, U256},
    Web3,
};

pub const ERC20_ABI: &[u8] = include_bytes!("../../abi/ERC20.json");

const NATIVE_DECIMALS: u8 = 18;

pub struct Provider {
    pub rpc: Web3<Http>,
}

impl Provider {
    pub fn new(rpc_url: String) -> Self {
        Self {
            rpc: match Http::new(&rpc_url) {
                Ok(transport) => Web3::new(transport),
                Err(e) => panic!("{e}"),
            },
        }
    }

    pub async fn native_balance(&self, owner: Address) -> Result<TokenAmount, ReaderError> {
        let value = self.rpc.eth().balance(owner, None).await?;

        Ok(TokenAmount {
            value,
            decimals: NATIVE_DECIMALS,
        })
    }

    pub async fn token_balance(
        &self,
        token: Address,
        owner: Address,
    ) -> Result<TokenAmount, ReaderError> {
        let contract = Contract::from_json(self.rpc.eth(), token, ERC20_ABI)
            .map_err(|e| ReaderError::Decode(e.to_string()))?;

        let decimals: u8 = contract
            .query("decimals", (), None, Options::default(), None)
            .await?;
        let value: U256 = contract
            .query("balanceOf", (owner,), None, Options::default(), None)
            .await?;

        Ok(TokenAmount { value, decimals })
    }

    pub async fn view_call(
        &self,
        contract: Address,
        function: &str,
        args: &[AbiValue],
        returns: &[AbiKind],
    ) -> Result<Vec<AbiValue>, ReaderError> {
        let call = CallRequest {
            to: Some(contract),
            data: Some(Bytes(codec::encode_call(function, args))),
            ..Default::default()
        };
        let raw = self.rpc.eth().call(call, None).await?;

        codec::decode_returns(returns, &raw.0).map_err(ReaderError::Decode)
    }
}

fn provider(chain: Chain) -> Result<&'static Provider, ReaderError> {
    PROVIDERS
        .get(&(chain as u8))
        .ok_or_else(|| ReaderError::NoSuchChain(format!("{chain:?}")))
}

/// Reads through the JSON-RPC providers configured in the environment.
pub struct RpcReader;

#[async_trait]
impl ChainReader for RpcReader {
    async fn native_balance(
        &self,
        chain: Chain,
        owner: Address,
    ) -> Result<TokenAmount, ReaderError> {
        provider(chain)?.native_balance(owner).await
    }

    async fn token_balance(
        &self,
        chain: Chain,
        token: Address,
        owner: Address,
    ) -> Result<TokenAmount, ReaderError> {
        provider(chain)?.token_balance(token, owner).await
    }

    async fn view_call(
        &self,
        chain: Chain,
        contract: Address,
        function: &str,
        args: &[AbiValue],
        returns: &[AbiKind],
    ) -> Result<Vec<AbiValue>, ReaderError> {
        provider(chain)?
            .view_call(contract, function, args, returns)
            .await
    }

    async fn wallet_holdings(
        &self,
        chain: Chain,
        owner: Address,
    ) -> Result<Vec<TokenHolding>, ReaderError> {
        Ok(indexer::wallet_holdings(chain, owner).await?)
    }
}

macro_rules! dotenv {
    ($var: expr) => {
        match std::env::var($var) {
            Ok(val) => val,
            Err(_) => panic!("Environment variable `{}` not found", $var),
        }
    };
}

lazy_static::lazy_static! {
    pub static ref PROVIDERS: Arc<HashMap<u8, Provider>> = Arc::new({
        let mut providers = HashMap::new();

        providers.insert(
            Chain::Ethereum as u8,
            Provider::new(dotenv!("ETHEREUM_RPC"))
        );
        providers.insert(
            Chain::Goerli as u8,
            Provider::new(dotenv!("GOERLI_RPC"))
        );
        providers.insert(
            Chain::Polygon as u8,
            Provider::new(dotenv!("POLYGON_RPC"))
        );
        providers.insert(
            Chain::Bsc as u8,
            Provider::new(dotenv!("BSC_RPC"))
        );
        providers.insert(
            Chain::BscTestnet as u8,
            Provider::new(dotenv!("BSC_TESTNET_RPC"))
        );
        providers.insert(
            Chain::Gnosis as u8,
            Provider::new(dotenv!("GNOSIS_RPC"))
        );
        providers.insert(
            Chain::Arbitrum as u8,
            Provider::new(dotenv!("ARBITRUM_RPC"))
        );
        providers.insert(
            Chain::Optimism as u8,
            Provider::new(dotenv!("OPTIMISM_RPC"))
        );

        providers
    });
}
