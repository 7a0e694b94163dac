use crate::types::{QuerySpec, QueryValue};
use providers::Address;
use std::{collections::HashMap, time::Duration};
use tokio::{sync::RwLock, time::Instant};

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub(crate) struct CacheKey {
    pub account: Address,
    pub spec: QuerySpec,
}

struct CacheSlot {
    value: QueryValue,
    fetched_at: Instant,
}

const MAX_SLOTS: usize = 1024;

/// Completed results shared across subscriptions, keyed by account and query.
pub(crate) struct ResultCache {
    slots: RwLock<HashMap<CacheKey, CacheSlot>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    pub async fn fresh(&self, key: &CacheKey, stale_time: Duration) -> Option<QueryValue> {
        if stale_time.is_zero() {
            return None;
        }

        self.slots
            .read()
            .await
            .get(key)
            .filter(|slot| slot.fetched_at.elapsed() <= stale_time)
            .map(|slot| slot.value.clone())
    }

    pub async fn store(&self, key: CacheKey, value: QueryValue) {
        let mut slots = self.slots.write().await;

        // a novel key at capacity pushes out the oldest entry
        if slots.len() >= MAX_SLOTS && !slots.contains_key(&key) {
            let oldest = slots
                .iter()
                .min_by_key(|(_, slot)| slot.fetched_at)
                .map(|(key, _)| key.clone());
            if let Some(oldest) = oldest {
                slots.remove(&oldest);
            }
        }

        slots.insert(
            key,
            CacheSlot {
                value,
                fetched_at: Instant::now(),
            },
        );
    }
}
