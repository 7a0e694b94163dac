use crate::types::AccountRef;
use providers::Address;
use tokio::sync::watch;

/// Wallet-session stand-in. The host pushes the connected account here and
/// every subscription follows the changes.
pub struct AccountSession {
    tx: watch::Sender<AccountRef>,
}

impl AccountSession {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);

        Self { tx }
    }

    pub fn connect(&self, address: Address) {
        self.tx.send_replace(Some(address));
    }

    pub fn disconnect(&self) {
        self.tx.send_replace(None);
    }

    pub fn account(&self) -> AccountRef {
        *self.tx.borrow()
    }

    pub fn is_connected(&self) -> bool {
        self.account().is_some()
    }

    pub fn watch(&self) -> watch::Receiver<AccountRef> {
        self.tx.subscribe()
    }
}

impl Default for AccountSession {
    fn default() -> Self {
        Self::new()
    }
}
