use crate::types::QueryResult;
use async_trait::async_trait;
use providers::{
    AbiKind, AbiValue, Address, Chain, ChainReader, ReaderError, TokenAmount, TokenHolding, U256,
};
use std::{
    sync::{
        atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};
use tokio::sync::watch;

/// Chain reader with scripted responses. Every call resolves to the current
/// `value` (or an error while `fail` is set) after an optional delay.
pub(crate) struct ScriptedReader {
    calls: AtomicUsize,
    delay: Duration,
    fail: AtomicBool,
    value: AtomicU64,
}

impl ScriptedReader {
    fn new(value: u64, delay: Duration, fail: bool) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            delay,
            fail: AtomicBool::new(fail),
            value: AtomicU64::new(value),
        })
    }

    pub fn returning(value: u64) -> Arc<Self> {
        Self::new(value, Duration::ZERO, false)
    }

    pub fn slow(value: u64, delay: Duration) -> Arc<Self> {
        Self::new(value, delay, false)
    }

    pub fn failing() -> Arc<Self> {
        Self::new(0, Duration::ZERO, true)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn set_value(&self, value: u64) {
        self.value.store(value, Ordering::SeqCst);
    }

    pub fn set_fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    async fn serve(&self) -> Result<TokenAmount, ReaderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(ReaderError::Rpc(web3::Error::Unreachable));
        }

        Ok(TokenAmount {
            value: U256::from(self.value.load(Ordering::SeqCst)),
            decimals: 0,
        })
    }
}

#[async_trait]
impl ChainReader for ScriptedReader {
    async fn native_balance(
        &self,
        _chain: Chain,
        _owner: Address,
    ) -> Result<TokenAmount, ReaderError> {
        self.serve().await
    }

    async fn token_balance(
        &self,
        _chain: Chain,
        _token: Address,
        _owner: Address,
    ) -> Result<TokenAmount, ReaderError> {
        self.serve().await
    }

    async fn view_call(
        &self,
        _chain: Chain,
        _contract: Address,
        _function: &str,
        _args: &[AbiValue],
        _returns: &[AbiKind],
    ) -> Result<Vec<AbiValue>, ReaderError> {
        let amount = self.serve().await?;

        Ok(vec![AbiValue::Uint(amount.value)])
    }

    async fn wallet_holdings(
        &self,
        _chain: Chain,
        _owner: Address,
    ) -> Result<Vec<TokenHolding>, ReaderError> {
        self.serve().await?;

        Ok(vec![])
    }
}

/// Follows a subscription's result channel until `accept` matches a state,
/// starting from the current one.
pub(crate) async fn wait_for(
    rx: &mut watch::Receiver<QueryResult>,
    mut accept: impl FnMut(&QueryResult) -> bool,
) -> QueryResult {
    tokio::time::timeout(Duration::from_secs(2), async {
        loop {
            {
                let current = rx.borrow_and_update();
                if accept(&current) {
                    return current.clone();
                }
            }
            if let Err(e) = rx.changed().await {
                panic!("result channel closed: {e}");
            }
        }
    })
    .await
    .expect("timed out waiting for a result transition")
}
