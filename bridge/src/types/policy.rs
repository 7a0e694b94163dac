use serde::Deserialize;
use std::time::Duration;

/// Refresh behavior of one subscription. The default policy reuses nothing,
/// ignores host events and does not poll.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CachePolicy {
    pub stale_time: Duration,
    pub refetch_on_focus: bool,
    pub refetch_on_reconnect: bool,
    pub poll_interval: Option<Duration>,
}

/// Wire form of [`CachePolicy`], durations in milliseconds.
#[derive(Deserialize, Debug, Default, Clone, Copy)]
#[serde(rename_all = "camelCase", default)]
pub struct PolicyRequest {
    pub stale_time_ms: u64,
    pub refetch_on_focus: bool,
    pub refetch_on_reconnect: bool,
    pub poll_interval_ms: Option<u64>,
}

impl From<PolicyRequest> for CachePolicy {
    fn from(req: PolicyRequest) -> Self {
        Self {
            stale_time: Duration::from_millis(req.stale_time_ms),
            refetch_on_focus: req.refetch_on_focus,
            refetch_on_reconnect: req.refetch_on_reconnect,
            poll_interval: req.poll_interval_ms.map(Duration::from_millis),
        }
    }
}
