use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::alerts::AlertBook;
use crate::data::{MarketDataProvider, MockMarketData};
use crate::market::MarketState;
use crate::session::SessionState;
use crate::store::{ProfileStore, StoreError};

/// Every container the app owns, built once at startup and handed to the
/// handlers by reference through axum `State`. No hidden globals.
#[derive(Clone)]
pub struct AppState {
    pub market: Arc<Mutex<MarketState>>,
    pub session: Arc<Mutex<SessionState>>,
    pub alerts: Arc<Mutex<AlertBook>>,
    pub data: Arc<dyn MarketDataProvider>,
}

impl AppState {
    /// Seeded demo state over the mock data provider.
    pub fn new(profile_path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::with_provider(profile_path, Arc::new(MockMarketData::new()))
    }

    pub fn with_provider(
        profile_path: impl Into<PathBuf>,
        data: Arc<dyn MarketDataProvider>,
    ) -> Result<Self, StoreError> {
        let store = ProfileStore::new(profile_path);
        let session = SessionState::new(store)?;
        Ok(AppState {
            market: Arc::new(Mutex::new(MarketState::seeded())),
            session: Arc::new(Mutex::new(session)),
            alerts: Arc::new(Mutex::new(AlertBook::seeded())),
            data,
        })
    }
}
