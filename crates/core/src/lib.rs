pub mod entropy;
pub mod errors;
pub mod models;
pub mod notify;
pub mod sample_data;
pub mod scheduler;
pub mod services;
pub mod stores;

use models::settings::Settings;
use stores::{ChartStore, LedgerStore, WalletStore};

use errors::CoreError;

/// Main entry point for the crypto tracker core library.
///
/// Bundles the three stores, each built from the same settings and loaded
/// with sample data. The stores share no data; this type only saves a UI
/// from wiring them up one by one.
#[must_use]
pub struct CryptoTracker {
    settings: Settings,
    ledger: LedgerStore,
    wallets: WalletStore,
    chart: ChartStore,
}

impl std::fmt::Debug for CryptoTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CryptoTracker")
            .field("settings", &self.settings)
            .field("ledger", &self.ledger)
            .field("wallets", &self.wallets)
            .field("chart", &self.chart)
            .finish()
    }
}

impl CryptoTracker {
    /// Tracker with default settings and sample data.
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let ledger = LedgerStore::new(&settings);
        let wallets = WalletStore::new(&settings);
        let chart = ChartStore::new();
        Self {
            settings,
            ledger,
            wallets,
            chart,
        }
    }

    /// Tracker configured from a JSON settings document.
    pub fn from_settings_json(json: &str) -> Result<Self, CoreError> {
        Ok(Self::with_settings(Settings::from_json(json)?))
    }

    /// Tracker with reproducible randomness (performance series, chart
    /// values, generated addresses).
    pub fn with_seed(settings: Settings, seed: u64) -> Self {
        let ledger = LedgerStore::new(&settings);
        let wallets = WalletStore::with_seed(&settings, seed);
        let chart = ChartStore::with_seed(seed.wrapping_add(1));
        Self {
            settings,
            ledger,
            wallets,
            chart,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ── Stores ──────────────────────────────────────────────────────

    #[must_use]
    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut LedgerStore {
        &mut self.ledger
    }

    #[must_use]
    pub fn wallets(&self) -> &WalletStore {
        &self.wallets
    }

    pub fn wallets_mut(&mut self) -> &mut WalletStore {
        &mut self.wallets
    }

    #[must_use]
    pub fn chart(&self) -> &ChartStore {
        &self.chart
    }

    pub fn chart_mut(&mut self) -> &mut ChartStore {
        &mut self.chart
    }
}

impl Default for CryptoTracker {
    fn default() -> Self {
        Self::new()
    }
}
