use crate::error::Result;
use crate::lookup::LookupClient;
use crate::session::{LookupState, ScanSession};
use std::time::Instant;

/// Ties the scan session to the lookup client: one decoded camera frame in,
/// one view state out.
///
/// Hosts that schedule their own fetches (or their own unlock timer) can
/// drive [`ScanSession`] and [`LookupClient`] directly instead.
pub struct ScanController {
    session: ScanSession,
    client: LookupClient,
}

impl ScanController {
    pub fn new(client: LookupClient) -> Self {
        Self {
            session: ScanSession::new(),
            client,
        }
    }

    /// Build a controller whose lookup client reads the `API_URL`
    /// environment variable.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(LookupClient::from_env()?))
    }

    /// Handle one decoded camera frame end to end: gate it, parse it, run
    /// the lookup and fold the answer back into the view state.
    pub async fn handle_frame(&mut self, raw: &str) -> &LookupState {
        if let Some(pending) = self.session.on_scan(raw, Instant::now()) {
            let outcome = self.client.look_up(pending.member().document_number()).await;
            self.session.resolve(&pending, outcome);
        }

        self.session.state()
    }

    pub fn on_unlock_timeout(&mut self) {
        self.session.on_unlock_timeout();
    }

    pub fn on_foreground(&mut self) {
        self.session.on_foreground();
    }

    pub fn scan_again(&mut self) {
        self.session.scan_again();
    }

    pub fn state(&self) -> &LookupState {
        self.session.state()
    }
}
