//! Wallet session store
//!
//! `WalletSession` owns the one wallet session of the client. It is an
//! explicit context object: build it once from a connector and a session
//! repository and hand it (usually behind an `Arc`) to whatever needs
//! wallet access. Observers follow state changes through `subscribe()`.
//!
//! ## State machine
//!
//! ```text
//! Disconnected --connect()--------------> Connecting (modal open)
//! Connecting   --connect_wallet() ok----> Connected
//! Connecting   --connect_wallet() err---> Disconnected (error set)
//! Connected    --disconnect()-----------> Disconnected
//! Connected    --update_balance()-------> Connected (balance only)
//! ```
//!
//! ## Ordering
//!
//! Every connect attempt and every disconnect takes a new generation number.
//! A completion whose generation is no longer current is dropped instead of
//! overwriting newer state, so a slow handshake can never resurrect a
//! session the user already disconnected.

use parking_lot::Mutex;
use polygrand_core::{SessionPhase, WalletAccount, WalletSessionState};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

use crate::config::WalletConfig;
use crate::connector::{MockWalletConnector, WalletConnector};
use crate::repository::{SessionRepository, SqliteSessionRepository};
use crate::types::{Result, WalletError};

/// Cancellation signal for a session operation.
///
/// The operation is cancelled once `true` is sent or the sending half is
/// dropped (e.g. the view that started it went away).
pub type CancelSignal = watch::Receiver<bool>;

/// Create a cancellation handle and the signal to pass to an operation
pub fn cancellation() -> (watch::Sender<bool>, CancelSignal) {
    watch::channel(false)
}

async fn wait_cancelled(signal: Option<CancelSignal>) {
    let Some(mut signal) = signal else {
        return std::future::pending().await;
    };

    loop {
        if *signal.borrow_and_update() {
            return;
        }
        if signal.changed().await.is_err() {
            return;
        }
    }
}

/// The client-wide wallet session
pub struct WalletSession {
    state: watch::Sender<WalletSessionState>,
    generation: Mutex<u64>,
    connector: Arc<dyn WalletConnector>,
    repository: Arc<dyn SessionRepository>,
    initialized: AtomicBool,
}

impl WalletSession {
    /// Create the session, rehydrating whatever the repository holds.
    ///
    /// An unreadable stored session is logged and ignored.
    pub fn new(connector: Arc<dyn WalletConnector>, repository: Arc<dyn SessionRepository>) -> Self {
        let initial = match repository.load() {
            Ok(Some(persisted)) => {
                let state = WalletSessionState::from_persisted(persisted);
                if let Some(account) = &state.account {
                    info!("Restored wallet session for {}", account.address);
                }
                state
            }
            Ok(None) => WalletSessionState::default(),
            Err(e) => {
                warn!("Ignoring unreadable wallet session: {}", e);
                WalletSessionState::default()
            }
        };

        let (state, _) = watch::channel(initial);

        Self {
            state,
            generation: Mutex::new(0),
            connector,
            repository,
            initialized: AtomicBool::new(false),
        }
    }

    /// Mock connector plus SQLite persistence, as configured
    pub fn from_config(config: &WalletConfig) -> Result<Self> {
        let connector = Arc::new(MockWalletConnector::from_config(config));
        let repository = Arc::new(SqliteSessionRepository::open(&config.db_path)?);
        Ok(Self::new(connector, repository))
    }

    // ========================================================================
    // Observation
    // ========================================================================

    /// Snapshot of the current state
    pub fn state(&self) -> WalletSessionState {
        self.state.borrow().clone()
    }

    /// Receiver that is notified on every state change
    pub fn subscribe(&self) -> watch::Receiver<WalletSessionState> {
        self.state.subscribe()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.borrow().phase()
    }

    pub fn account(&self) -> Option<WalletAccount> {
        self.state.borrow().account.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.state.borrow().is_connected
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Hook for wallet SDK setup. The mock needs none; safe to call repeatedly.
    pub fn initialize_wallet(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            debug!("Wallet already initialized");
        } else {
            info!("Wallet initialized ({} connector)", self.connector.name());
        }
    }

    /// Open the wallet selection surface and mark the handshake as started.
    ///
    /// Does not produce an account; `connect_wallet` completes the handshake.
    /// While connected this does nothing.
    pub fn connect(&self) {
        let mut opened = false;
        self.update(|s| {
            if s.is_connected {
                return;
            }
            s.is_connecting = true;
            s.error = None;
            s.modal_visible = true;
            opened = true;
        });

        if opened {
            info!("Opening wallet selection");
        } else {
            debug!("Wallet already connected, ignoring connect");
        }
    }

    /// Complete the connect handshake
    pub async fn connect_wallet(&self) -> Result<WalletAccount> {
        self.run_connect(None).await
    }

    /// Complete the connect handshake unless `cancel` fires first
    pub async fn connect_wallet_with_cancel(&self, cancel: CancelSignal) -> Result<WalletAccount> {
        self.run_connect(Some(cancel)).await
    }

    async fn run_connect(&self, cancel: Option<CancelSignal>) -> Result<WalletAccount> {
        if let Some(account) = self.account() {
            debug!("Wallet already connected as {}", account.address);
            return Ok(account);
        }

        let generation = self.begin(|s| {
            s.is_connecting = true;
            s.error = None;
            s.modal_visible = true;
        });
        info!(generation, "Connecting wallet via {} connector", self.connector.name());

        let outcome = tokio::select! {
            biased;
            _ = wait_cancelled(cancel) => None,
            result = self.connector.connect() => Some(result),
        };

        match outcome {
            None => {
                let current = self.commit_if_current(generation, |s| {
                    s.is_connecting = false;
                    s.modal_visible = false;
                });
                if !current {
                    return Err(WalletError::Superseded);
                }
                info!(generation, "Wallet connect cancelled");
                Err(WalletError::Cancelled)
            }
            Some(Ok(account)) => {
                let connected = account.clone();
                let current = self.commit_if_current(generation, move |s| {
                    s.account = Some(connected);
                    s.is_connected = true;
                    s.is_connecting = false;
                    s.error = None;
                    s.modal_visible = false;
                });
                if !current {
                    debug!(generation, "Discarding stale connect result");
                    return Err(WalletError::Superseded);
                }
                info!(
                    "Connected to {} ({}), balance {:.2} ALGO",
                    account.name, account.address, account.balance
                );
                Ok(account)
            }
            Some(Err(e)) => {
                let message = e.to_string();
                let current = self.commit_if_current(generation, move |s| {
                    s.is_connecting = false;
                    s.error = Some(message);
                    s.account = None;
                    s.is_connected = false;
                    s.modal_visible = false;
                });
                if !current {
                    debug!(generation, "Discarding stale connect failure: {}", e);
                    return Err(WalletError::Superseded);
                }
                error!("Failed to connect wallet: {}", e);
                Err(e)
            }
        }
    }

    /// Tear down the session. The state is cleared even if teardown fails.
    pub async fn disconnect(&self) {
        self.run_disconnect(None).await
    }

    /// Tear down the session; a cancelled teardown still clears the state
    pub async fn disconnect_with_cancel(&self, cancel: CancelSignal) {
        self.run_disconnect(Some(cancel)).await
    }

    async fn run_disconnect(&self, cancel: Option<CancelSignal>) {
        let account = self.account();
        self.begin(|_| {});

        if let Some(account) = &account {
            tokio::select! {
                biased;
                _ = wait_cancelled(cancel) => {
                    debug!("Disconnect teardown cancelled, clearing session");
                }
                result = self.connector.disconnect(account) => {
                    if let Err(e) = result {
                        warn!("Error disconnecting wallet, clearing session anyway: {}", e);
                    }
                }
            }
        }

        // A fresh generation so nothing started before or during the
        // teardown can land afterwards.
        self.begin(|s| {
            s.account = None;
            s.is_connected = false;
            s.is_connecting = false;
            s.error = None;
            s.modal_visible = false;
        });
        info!("Wallet disconnected");
    }

    /// Confirm a session restored from storage.
    ///
    /// Makes no connector calls; returns the restored account if there is one.
    pub fn reconnect_session(&self) -> Option<WalletAccount> {
        let state = self.state();
        match state.account {
            Some(account) if state.is_connected => {
                info!("Reconnected to saved session: {}", account.address);
                Some(account)
            }
            _ => {
                info!("No existing session to reconnect");
                None
            }
        }
    }

    /// Refresh the balance of the connected account.
    ///
    /// Returns the committed balance; `None` when not connected, when the
    /// refresh failed (the error is recorded in the state) or when the
    /// session changed meanwhile.
    pub async fn update_balance(&self) -> Option<Decimal> {
        self.run_update_balance(None).await
    }

    /// Refresh the balance unless `cancel` fires first
    pub async fn update_balance_with_cancel(&self, cancel: CancelSignal) -> Option<Decimal> {
        self.run_update_balance(Some(cancel)).await
    }

    async fn run_update_balance(&self, cancel: Option<CancelSignal>) -> Option<Decimal> {
        let account = self.account()?;
        let generation = *self.generation.lock();

        let outcome = tokio::select! {
            biased;
            _ = wait_cancelled(cancel) => None,
            result = self.connector.fetch_balance(&account) => Some(result),
        };

        match outcome? {
            Ok(balance) => {
                let balance = balance.max(Decimal::ZERO);
                let mut applied = false;
                self.commit_if_current(generation, |s| {
                    if let Some(current) = s.account.as_mut() {
                        if current.address == account.address {
                            current.balance = balance;
                            s.error = None;
                            applied = true;
                        }
                    }
                });

                if applied {
                    info!("Balance updated: {:.2} ALGO", balance);
                    Some(balance)
                } else {
                    debug!("Session changed during balance refresh, dropping result");
                    None
                }
            }
            Err(e) => {
                error!("Failed to update balance: {}", e);
                let message = e.to_string();
                self.commit_if_current(generation, move |s| s.error = Some(message));
                None
            }
        }
    }

    /// Show or hide the wallet selection surface
    pub fn set_show_modal(&self, visible: bool) {
        self.update(|s| s.modal_visible = visible);
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Start a new generation and apply `modify` under the same lock
    fn begin(&self, modify: impl FnOnce(&mut WalletSessionState)) -> u64 {
        let mut generation = self.generation.lock();
        *generation += 1;
        self.update(modify);
        *generation
    }

    /// Apply `modify` only if `generation` is still the newest one
    fn commit_if_current(
        &self,
        generation: u64,
        modify: impl FnOnce(&mut WalletSessionState),
    ) -> bool {
        let current = self.generation.lock();
        if *current != generation {
            return false;
        }
        self.update(modify);
        true
    }

    /// Replace the state, notify observers and persist if the durable part changed
    fn update(&self, modify: impl FnOnce(&mut WalletSessionState)) {
        let mut persisted_changed = false;
        self.state.send_if_modified(|state| {
            let before = state.clone();
            modify(state);
            persisted_changed = before.persisted() != state.persisted();
            before != *state
        });

        if persisted_changed {
            self.persist();
        }
    }

    fn persist(&self) {
        let snapshot = self.state.borrow().persisted();
        if let Err(e) = self.repository.save(&snapshot) {
            warn!("Failed to persist wallet session: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockDelays;
    use crate::repository::MemorySessionRepository;
    use async_trait::async_trait;
    use polygrand_core::PersistedSession;
    use rust_decimal_macros::dec;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn mock_session(delays: MockDelays) -> (WalletSession, Arc<MemorySessionRepository>) {
        let repo = Arc::new(MemorySessionRepository::new());
        let session = WalletSession::new(
            Arc::new(MockWalletConnector::seeded(17, delays)),
            repo.clone(),
        );
        (session, repo)
    }

    /// Connector whose every operation fails
    struct BrokenConnector;

    #[async_trait]
    impl WalletConnector for BrokenConnector {
        fn name(&self) -> &str {
            "broken"
        }

        async fn connect(&self) -> Result<WalletAccount> {
            Err(WalletError::Connect("user rejected the request".to_string()))
        }

        async fn disconnect(&self, _account: &WalletAccount) -> Result<()> {
            Err(WalletError::Disconnect("bridge closed".to_string()))
        }

        async fn fetch_balance(&self, _account: &WalletAccount) -> Result<Decimal> {
            Err(WalletError::Balance("node unavailable".to_string()))
        }
    }

    /// Mock connector that counts handshakes
    struct CountingConnector {
        inner: MockWalletConnector,
        connects: AtomicUsize,
    }

    #[async_trait]
    impl WalletConnector for CountingConnector {
        fn name(&self) -> &str {
            "counting"
        }

        async fn connect(&self) -> Result<WalletAccount> {
            self.connects.fetch_add(1, Ordering::SeqCst);
            self.inner.connect().await
        }

        async fn disconnect(&self, account: &WalletAccount) -> Result<()> {
            self.inner.disconnect(account).await
        }

        async fn fetch_balance(&self, account: &WalletAccount) -> Result<Decimal> {
            self.inner.fetch_balance(account).await
        }
    }

    fn stored_account() -> WalletAccount {
        WalletAccount {
            address: "C".repeat(58),
            balance: dec!(2.5),
            name: "Test Account".to_string(),
        }
    }

    #[test]
    fn test_connect_opens_modal() {
        let (session, _) = mock_session(MockDelays::instant());
        session.connect();

        let state = session.state();
        assert_eq!(state.phase(), SessionPhase::Connecting);
        assert!(state.modal_visible);
        assert!(state.is_connecting);
        assert_eq!(state.error, None);
        assert!(state.account.is_none());

        // Repeated calls just keep the modal open
        session.connect();
        assert_eq!(session.state(), state);
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_then_connect_wallet() {
        let (session, repo) = mock_session(MockDelays::default());
        session.connect();

        let account = session.connect_wallet().await.unwrap();

        let state = session.state();
        assert!(state.is_connected);
        assert!(!state.is_connecting);
        assert!(!state.modal_visible);
        assert_eq!(state.account.as_ref(), Some(&account));
        assert_eq!(account.address.len(), 58);
        assert!(account.has_valid_address());
        assert!(account.balance >= dec!(10) && account.balance < dec!(1000));
        assert!(state.is_consistent());

        let persisted = repo.load().unwrap().unwrap();
        assert_eq!(persisted.account, Some(account));
        assert!(persisted.is_connected);
    }

    #[tokio::test]
    async fn test_connect_failure_resets_session() {
        let repo = Arc::new(MemorySessionRepository::new());
        let session = WalletSession::new(Arc::new(BrokenConnector), repo);
        session.connect();

        let err = session.connect_wallet().await.unwrap_err();
        assert!(matches!(err, WalletError::Connect(_)));

        let state = session.state();
        assert_eq!(state.phase(), SessionPhase::Disconnected);
        assert!(!state.modal_visible);
        assert!(state.account.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to connect wallet: user rejected the request")
        );
    }

    #[tokio::test]
    async fn test_connect_while_connected_keeps_account() {
        let (session, _) = mock_session(MockDelays::instant());
        let first = session.connect_wallet().await.unwrap();

        session.connect();
        assert!(!session.state().is_connecting);
        assert!(!session.state().modal_visible);

        let second = session.connect_wallet().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_disconnect_clears_session() {
        let (session, repo) = mock_session(MockDelays::instant());
        session.connect_wallet().await.unwrap();

        session.disconnect().await;

        let state = session.state();
        assert!(state.account.is_none());
        assert!(!state.is_connected);
        assert_eq!(state.error, None);
        assert_eq!(repo.load().unwrap(), Some(PersistedSession::default()));
    }

    #[tokio::test]
    async fn test_disconnect_from_any_state() {
        let (session, _) = mock_session(MockDelays::instant());
        session.disconnect().await;
        assert!(!session.is_connected());

        session.connect();
        session.disconnect().await;
        let state = session.state();
        assert!(state.account.is_none());
        assert!(!state.is_connected);
        assert!(!state.is_connecting);
    }

    #[tokio::test]
    async fn test_disconnect_clears_even_when_teardown_fails() {
        let repo = Arc::new(
            MemorySessionRepository::with_session(PersistedSession {
                account: Some(stored_account()),
                is_connected: true,
            })
            .unwrap(),
        );
        let session = WalletSession::new(Arc::new(BrokenConnector), repo);
        assert!(session.is_connected());

        session.disconnect().await;

        assert!(session.account().is_none());
        assert!(!session.is_connected());
        assert_eq!(session.state().error, None);
    }

    #[tokio::test]
    async fn test_reconnect_session_restores_without_handshake() {
        let repo = Arc::new(
            MemorySessionRepository::with_session(PersistedSession {
                account: Some(stored_account()),
                is_connected: true,
            })
            .unwrap(),
        );
        let connector = Arc::new(CountingConnector {
            inner: MockWalletConnector::seeded(1, MockDelays::instant()),
            connects: AtomicUsize::new(0),
        });
        let session = WalletSession::new(connector.clone(), repo);

        assert_eq!(session.reconnect_session(), Some(stored_account()));
        assert_eq!(connector.connects.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_reconnect_session_without_saved_session() {
        let (session, _) = mock_session(MockDelays::instant());
        assert_eq!(session.reconnect_session(), None);
        assert_eq!(session.phase(), SessionPhase::Disconnected);
    }

    #[tokio::test]
    async fn test_update_balance_without_account() {
        let (session, _) = mock_session(MockDelays::instant());
        assert_eq!(session.update_balance().await, None);
        assert_eq!(session.state(), WalletSessionState::default());
    }

    #[tokio::test]
    async fn test_update_balance_bounded() {
        let (session, _) = mock_session(MockDelays::instant());
        session.connect_wallet().await.unwrap();

        for _ in 0..200 {
            let before = session.account().unwrap().balance;
            let after = session.update_balance().await.unwrap();
            assert!(after >= Decimal::ZERO);
            assert!((after - before).abs() <= dec!(5));
            assert_eq!(session.account().unwrap().balance, after);
        }
    }

    #[tokio::test]
    async fn test_update_balance_never_negative() {
        let repo = Arc::new(
            MemorySessionRepository::with_session(PersistedSession {
                account: Some(stored_account()),
                is_connected: true,
            })
            .unwrap(),
        );
        let session = WalletSession::new(
            Arc::new(MockWalletConnector::seeded(4, MockDelays::instant())),
            repo,
        );

        for _ in 0..200 {
            assert!(session.update_balance().await.unwrap() >= Decimal::ZERO);
        }
    }

    #[tokio::test]
    async fn test_update_balance_failure_is_recorded() {
        let repo = Arc::new(
            MemorySessionRepository::with_session(PersistedSession {
                account: Some(stored_account()),
                is_connected: true,
            })
            .unwrap(),
        );
        let session = WalletSession::new(Arc::new(BrokenConnector), repo);

        assert_eq!(session.update_balance().await, None);

        let state = session.state();
        assert_eq!(state.account, Some(stored_account()));
        assert!(state.is_connected);
        assert_eq!(
            state.error.as_deref(),
            Some("Failed to update balance: node unavailable")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_disconnect_during_connect_discards_late_result() {
        let (session, _) = mock_session(MockDelays::default());
        session.connect();

        let (connected, ()) = tokio::join!(session.connect_wallet(), async {
            tokio::time::sleep(Duration::from_millis(500)).await;
            session.disconnect().await;
        });

        assert!(matches!(connected, Err(WalletError::Superseded)));
        let state = session.state();
        assert!(state.account.is_none());
        assert!(!state.is_connected);
        assert!(!state.is_connecting);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_connects_yield_one_account() {
        let (session, _) = mock_session(MockDelays::default());
        session.connect();

        let (first, second) = tokio::join!(session.connect_wallet(), async {
            tokio::time::sleep(Duration::from_millis(200)).await;
            session.connect_wallet().await
        });

        assert!(matches!(first, Err(WalletError::Superseded)));
        let second = second.unwrap();
        assert_eq!(session.account(), Some(second));
        assert!(session.state().is_consistent());
    }

    #[tokio::test(start_paused = true)]
    async fn test_balance_refresh_dropped_after_disconnect() {
        let (session, _) = mock_session(MockDelays::default());
        session.connect_wallet().await.unwrap();

        let (balance, ()) = tokio::join!(session.update_balance(), async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            session.disconnect().await;
        });

        assert_eq!(balance, None);
        assert!(session.account().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_connect() {
        let (session, _) = mock_session(MockDelays::default());
        session.connect();
        let (cancel, signal) = cancellation();

        let (result, _) = tokio::join!(session.connect_wallet_with_cancel(signal), async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            cancel.send(true)
        });

        assert!(matches!(result, Err(WalletError::Cancelled)));
        let state = session.state();
        assert_eq!(state.phase(), SessionPhase::Disconnected);
        assert!(!state.modal_visible);
        assert_eq!(state.error, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_handle_cancels_connect() {
        let (session, _) = mock_session(MockDelays::default());
        let (cancel, signal) = cancellation();
        drop(cancel);

        let result = session.connect_wallet_with_cancel(signal).await;
        assert!(matches!(result, Err(WalletError::Cancelled)));
        assert!(!session.is_connected());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_disconnect_still_clears() {
        let (session, _) = mock_session(MockDelays::default());
        session.connect_wallet().await.unwrap();
        let (cancel, signal) = cancellation();
        cancel.send(true).unwrap();

        session.disconnect_with_cancel(signal).await;
        assert!(session.account().is_none());
    }

    #[tokio::test]
    async fn test_cancelled_balance_refresh_leaves_state() {
        let (session, _) = mock_session(MockDelays::instant());
        session.connect_wallet().await.unwrap();
        let before = session.state();
        let (cancel, signal) = cancellation();
        cancel.send(true).unwrap();

        assert_eq!(session.update_balance_with_cancel(signal).await, None);
        assert_eq!(session.state(), before);
    }

    #[test]
    fn test_set_show_modal() {
        let (session, repo) = mock_session(MockDelays::instant());
        session.set_show_modal(true);
        assert!(session.state().modal_visible);
        session.set_show_modal(false);
        assert!(!session.state().modal_visible);

        // Modal visibility is never persisted
        assert_eq!(repo.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_observers_see_changes() {
        let (session, _) = mock_session(MockDelays::instant());
        let mut rx = session.subscribe();

        session.connect();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().phase(), SessionPhase::Connecting);

        session.connect_wallet().await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().phase(), SessionPhase::Connected);
    }

    #[test]
    fn test_initialize_wallet_is_idempotent() {
        let (session, _) = mock_session(MockDelays::instant());
        session.initialize_wallet();
        session.initialize_wallet();
        assert_eq!(session.state(), WalletSessionState::default());
    }

    #[test]
    fn test_unreadable_storage_starts_empty() {
        struct CorruptRepository;

        impl SessionRepository for CorruptRepository {
            fn load(&self) -> Result<Option<PersistedSession>> {
                Err(WalletError::Json(
                    serde_json::from_str::<PersistedSession>("{").unwrap_err(),
                ))
            }
            fn save(&self, _session: &PersistedSession) -> Result<()> {
                Ok(())
            }
            fn clear(&self) -> Result<()> {
                Ok(())
            }
        }

        let session = WalletSession::new(
            Arc::new(MockWalletConnector::seeded(1, MockDelays::instant())),
            Arc::new(CorruptRepository),
        );
        assert_eq!(session.state(), WalletSessionState::default());
    }
}
