pub mod errors;

mod cache;
mod driver;

use crate::types::{AccountRef, CachePolicy, QueryResult, QuerySpec, QueryValue};
use cache::{CacheKey, ResultCache};
use errors::QueryError;
use providers::ChainReader;
use std::sync::Arc;
use tokio::{
    sync::{broadcast, mpsc, watch},
    task::JoinHandle,
};

const EVENT_BUS_CAPACITY: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Focus,
    Reconnect,
}

/// Shared engine behind every subscription: one chain reader, one result
/// cache and one host-event bus.
pub struct QueryBridge {
    reader: Arc<dyn ChainReader>,
    cache: Arc<ResultCache>,
    events: broadcast::Sender<HostEvent>,
}

impl QueryBridge {
    pub fn new(reader: Arc<dyn ChainReader>) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUS_CAPACITY);

        Self {
            reader,
            cache: Arc::new(ResultCache::new()),
            events,
        }
    }

    pub fn subscribe(
        &self,
        account_rx: watch::Receiver<AccountRef>,
        spec: QuerySpec,
        policy: CachePolicy,
    ) -> Subscription {
        let initial = match *account_rx.borrow() {
            Some(_) => QueryResult::Loading,
            None => QueryResult::Disabled,
        };
        let (result_tx, result_rx) = watch::channel(initial);
        // capacity 1 makes repeated refetch calls coalesce
        let (refetch_tx, refetch_rx) = mpsc::channel(1);

        let driver = tokio::spawn(driver::run(driver::DriverContext {
            reader: Arc::clone(&self.reader),
            cache: Arc::clone(&self.cache),
            spec,
            policy,
            account_rx,
            events: Some(self.events.subscribe()),
            refetch_rx,
            result_tx,
        }));

        Subscription {
            result_rx,
            refetch_tx,
            driver: Some(driver),
        }
    }

    /// One-shot imperative read outside any subscription. A successful fetch
    /// lands in the shared cache, so a subscription created right after can
    /// start from this value.
    pub async fn read_now(
        &self,
        account: AccountRef,
        spec: &QuerySpec,
    ) -> Result<QueryValue, QueryError> {
        let owner = account.ok_or(QueryError::ConnectionAbsent)?;
        let value = driver::fetch(self.reader.as_ref(), spec, owner).await?;

        self.cache
            .store(
                CacheKey {
                    account: owner,
                    spec: spec.clone(),
                },
                value.clone(),
            )
            .await;

        Ok(value)
    }

    pub fn notify_focus(&self) {
        let _ = self.events.send(HostEvent::Focus);
    }

    pub fn notify_reconnect(&self) {
        let _ = self.events.send(HostEvent::Reconnect);
    }
}

pub struct Subscription {
    result_rx: watch::Receiver<QueryResult>,
    refetch_tx: mpsc::Sender<()>,
    driver: Option<JoinHandle<()>>,
}

impl Subscription {
    pub fn current(&self) -> QueryResult {
        self.result_rx.borrow().clone()
    }

    pub fn watch(&self) -> watch::Receiver<QueryResult> {
        self.result_rx.clone()
    }

    /// Queues one refetch, bypassing the staleness window; calls made while
    /// a fetch is already pending coalesce into it.
    pub fn refetch(&self) {
        let _ = self.refetch_tx.try_send(());
    }

    pub fn unsubscribe(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.abort();
        }
    }

    pub fn is_active(&self) -> bool {
        self.driver.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
