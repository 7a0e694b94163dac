use crate::{
    subscription::{
        cache::{CacheKey, ResultCache},
        errors::QueryError,
        HostEvent,
    },
    types::{AccountRef, CachePolicy, QueryResult, QuerySpec, QueryTarget, QueryValue},
};
use providers::{Address, ChainReader};
use std::sync::Arc;
use tokio::{
    sync::{broadcast, mpsc, watch},
    time::{interval_at, Instant, Interval, MissedTickBehavior},
};

pub(crate) struct DriverContext {
    pub reader: Arc<dyn ChainReader>,
    pub cache: Arc<ResultCache>,
    pub spec: QuerySpec,
    pub policy: CachePolicy,
    pub account_rx: watch::Receiver<AccountRef>,
    pub events: Option<broadcast::Receiver<HostEvent>>,
    pub refetch_rx: mpsc::Receiver<()>,
    pub result_tx: watch::Sender<QueryResult>,
}

enum Wakeup {
    AccountChanged,
    /// Poll tick or manual refetch; ignores the staleness window.
    Forced,
    /// Focus/reconnect with the matching policy flag enabled.
    HostEvent,
    Closed,
}

/// One task per subscription. Fetches are awaited in place, so a subscription
/// never has more than one request in flight; triggers that arrive while a
/// fetch is outstanding are drained once it completes.
pub(crate) async fn run(mut ctx: DriverContext) {
    let mut poll: Option<Interval> = None;
    let mut force = false;

    loop {
        let account = *ctx.account_rx.borrow_and_update();

        let Some(owner) = account else {
            poll = None;
            publish(&ctx.result_tx, QueryResult::Disabled);

            match wakeup(&mut ctx, &mut poll).await {
                Wakeup::AccountChanged => {
                    force = false;
                    continue;
                }
                Wakeup::Closed => return,
                // neither a manual refetch nor a host event can enable
                // a subscription without an account
                Wakeup::Forced | Wakeup::HostEvent => continue,
            }
        };

        if poll.is_none() {
            poll = make_poll(&ctx.policy);
        }

        let key = CacheKey {
            account: owner,
            spec: ctx.spec.clone(),
        };

        if !force {
            if let Some(value) = ctx.cache.fresh(&key, ctx.policy.stale_time).await {
                publish(&ctx.result_tx, QueryResult::Ready(value));

                match wakeup(&mut ctx, &mut poll).await {
                    Wakeup::AccountChanged | Wakeup::HostEvent => force = false,
                    Wakeup::Forced => force = true,
                    Wakeup::Closed => return,
                }
                continue;
            }
        }

        publish(&ctx.result_tx, QueryResult::Loading);

        let outcome = tokio::select! {
            changed = ctx.account_rx.changed() => match changed {
                Ok(()) => None,
                Err(_) => return,
            },
            fetched = fetch(ctx.reader.as_ref(), &ctx.spec, owner) => Some(fetched),
        };

        let Some(outcome) = outcome else {
            // superseded by an account change; the in-flight fetch was
            // dropped and its result never reaches the channel or the cache
            force = false;
            continue;
        };

        // triggers that queued up behind the finished fetch are satisfied by it
        drain_pending(&mut ctx);

        match outcome {
            Ok(value) => {
                ctx.cache.store(key, value.clone()).await;
                publish(&ctx.result_tx, QueryResult::Ready(value));
            }
            Err(e) => {
                log::debug!("fetch for {:?} failed: {e}", ctx.spec);
                publish(&ctx.result_tx, QueryResult::Error(e));
            }
        }

        match wakeup(&mut ctx, &mut poll).await {
            Wakeup::AccountChanged | Wakeup::HostEvent => force = false,
            Wakeup::Forced => force = true,
            Wakeup::Closed => return,
        }
    }
}

pub(crate) async fn fetch(
    reader: &dyn ChainReader,
    spec: &QuerySpec,
    owner: Address,
) -> Result<QueryValue, QueryError> {
    let value = match &spec.target {
        QueryTarget::NativeBalance => {
            QueryValue::Amount(reader.native_balance(spec.chain, owner).await?)
        }
        QueryTarget::TokenBalance { token } => {
            QueryValue::Amount(reader.token_balance(spec.chain, *token, owner).await?)
        }
        QueryTarget::ViewCall {
            contract,
            function,
            args,
            returns,
        } => QueryValue::Returns(
            reader
                .view_call(spec.chain, *contract, function, args, returns)
                .await?,
        ),
        QueryTarget::WalletInventory => {
            QueryValue::Holdings(reader.wallet_holdings(spec.chain, owner).await?)
        }
    };

    Ok(value)
}

fn publish(tx: &watch::Sender<QueryResult>, next: QueryResult) {
    tx.send_if_modified(|current| {
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}

fn make_poll(policy: &CachePolicy) -> Option<Interval> {
    policy.poll_interval.map(|period| {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        interval
    })
}

fn wants(policy: &CachePolicy, event: HostEvent) -> bool {
    match event {
        HostEvent::Focus => policy.refetch_on_focus,
        HostEvent::Reconnect => policy.refetch_on_reconnect,
    }
}

fn drain_pending(ctx: &mut DriverContext) {
    while ctx.refetch_rx.try_recv().is_ok() {}

    if let Some(events) = &mut ctx.events {
        while events.try_recv().is_ok() {}
    }
}

async fn wakeup(ctx: &mut DriverContext, poll: &mut Option<Interval>) -> Wakeup {
    loop {
        tokio::select! {
            changed = ctx.account_rx.changed() => {
                return match changed {
                    Ok(()) => Wakeup::AccountChanged,
                    Err(_) => Wakeup::Closed,
                };
            }
            _ = tick(poll) => return Wakeup::Forced,
            received = ctx.refetch_rx.recv() => {
                return match received {
                    Some(()) => Wakeup::Forced,
                    None => Wakeup::Closed,
                };
            }
            event = next_event(&mut ctx.events) => {
                match event {
                    Some(event) if wants(&ctx.policy, event) => return Wakeup::HostEvent,
                    Some(_) => {}
                    // the event bus is gone; stop listening for host signals
                    None => ctx.events = None,
                }
            }
        }
    }
}

async fn tick(poll: &mut Option<Interval>) {
    match poll {
        Some(interval) => {
            interval.tick().await;
        }
        None => futures::future::pending().await,
    }
}

async fn next_event(events: &mut Option<broadcast::Receiver<HostEvent>>) -> Option<HostEvent> {
    match events {
        Some(rx) => loop {
            match rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(_)) => {}
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        },
        None => futures::future::pending().await,
    }
}
