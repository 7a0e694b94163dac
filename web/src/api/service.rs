use chainview::{
    tokens::{self, KnownToken},
    AccountSession, Address, QueryBridge, QueryError, QuerySpec, QueryValue, ResultResponse,
    RpcReader, SubscribeRequest, Subscription,
};
use lazy_static::lazy_static;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};
use tokio::sync::RwLock;

pub type SubscriptionId = u64;

lazy_static! {
    static ref SESSION: AccountSession = AccountSession::new();
    static ref BRIDGE: QueryBridge = QueryBridge::new(Arc::new(RpcReader));
    static ref SUBSCRIPTIONS: RwLock<HashMap<SubscriptionId, Subscription>> =
        RwLock::new(HashMap::new());
}

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

pub fn connect(address: Address) {
    SESSION.connect(address);
}

pub fn disconnect() {
    SESSION.disconnect();
}

pub async fn subscribe(request: SubscribeRequest) -> SubscriptionId {
    let spec = QuerySpec {
        chain: request.chain,
        target: request.target,
    };
    let subscription = BRIDGE.subscribe(SESSION.watch(), spec, request.policy.into());
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);

    SUBSCRIPTIONS.write().await.insert(id, subscription);

    id
}

pub async fn result(id: SubscriptionId) -> Option<ResultResponse> {
    SUBSCRIPTIONS
        .read()
        .await
        .get(&id)
        .map(|subscription| subscription.current().into())
}

pub async fn unsubscribe(id: SubscriptionId) -> bool {
    match SUBSCRIPTIONS.write().await.remove(&id) {
        Some(mut subscription) => {
            subscription.unsubscribe();
            true
        }
        None => false,
    }
}

pub async fn read(request: SubscribeRequest) -> Result<QueryValue, QueryError> {
    let spec = QuerySpec {
        chain: request.chain,
        target: request.target,
    };

    BRIDGE.read_now(SESSION.account(), &spec).await
}

pub fn refocus() {
    BRIDGE.notify_focus();
}

pub fn reconnected() {
    BRIDGE.notify_reconnect();
}

pub fn known_tokens() -> &'static [KnownToken] {
    &tokens::KNOWN_TOKENS
}
