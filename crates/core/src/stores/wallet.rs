use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

use crate::entropy;
use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::change::WalletChange;
use crate::models::chart::ChartPoint;
use crate::models::settings::Settings;
use crate::models::time_range::TimeRange;
use crate::models::wallet::{Balance, Wallet, WalletType};
use crate::notify::ChangeNotifier;
use crate::sample_data;
use crate::services::performance_service::PerformanceService;
use crate::services::wallet_service::WalletService;

/// Wallets, portfolio assets, the selected wallet and the performance
/// series for the selected time range.
pub struct WalletStore {
    wallets: Vec<Wallet>,
    assets: Vec<Asset>,
    selected_wallet: Option<Uuid>,
    selected_time_range: TimeRange,
    performance_data: Vec<ChartPoint>,
    new_wallet_name: String,
    new_wallet_type: WalletType,
    show_add_wallet: bool,
    settings: Settings,
    rng: StdRng,
    notifier: ChangeNotifier<WalletChange>,
    wallet_service: WalletService,
    performance_service: PerformanceService,
}

impl std::fmt::Debug for WalletStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletStore")
            .field("wallets", &self.wallets.len())
            .field("assets", &self.assets.len())
            .field("selected_wallet", &self.selected_wallet)
            .field("selected_time_range", &self.selected_time_range)
            .field("performance_points", &self.performance_data.len())
            .finish()
    }
}

impl WalletStore {
    /// Store loaded with the sample wallets and assets, randomness seeded
    /// from the OS.
    pub fn new(settings: &Settings) -> Self {
        Self::build(settings, entropy::os_rng(), true)
    }

    /// Sample-data store with a fixed seed, for reproducible series and
    /// addresses.
    pub fn with_seed(settings: &Settings, seed: u64) -> Self {
        Self::build(settings, StdRng::seed_from_u64(seed), true)
    }

    /// Store with no wallets and no assets.
    pub fn empty(settings: &Settings) -> Self {
        Self::build(settings, entropy::os_rng(), false)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<WalletChange> {
        self.notifier.subscribe()
    }

    // ── Wallets ─────────────────────────────────────────────────────

    /// Create an empty, inactive wallet with a generated address and append
    /// it. Returns `None` (and changes nothing) when `name` is blank.
    ///
    /// Cold wallets get a `bc1q` address, all others a `3` address.
    pub fn add_wallet(&mut self, name: &str, wallet_type: WalletType) -> Option<Uuid> {
        let Some(wallet) = self.wallet_service.build_wallet(
            name,
            wallet_type,
            self.settings.address_suffix_len,
            &mut self.rng,
        ) else {
            debug!("discarding wallet with empty name");
            return None;
        };

        let id = wallet.id;
        info!(%id, name = %wallet.name, wallet_type = %wallet.wallet_type, "wallet added");
        self.wallets.push(wallet);
        self.new_wallet_name.clear();
        self.show_add_wallet = false;
        self.notifier.publish(WalletChange::WalletAdded(id));
        Some(id)
    }

    /// Remove a wallet. If it was selected, the first remaining wallet (or
    /// nothing) becomes selected.
    pub fn delete_wallet(&mut self, id: Uuid) -> Result<Wallet, CoreError> {
        let removed = self.wallet_service.remove_wallet(&mut self.wallets, id)?;
        info!(%id, name = %removed.name, "wallet deleted");
        self.notifier.publish(WalletChange::WalletRemoved(id));

        if self.selected_wallet == Some(id) {
            self.selected_wallet = self.wallets.first().map(|w| w.id);
            self.notifier
                .publish(WalletChange::SelectionChanged(self.selected_wallet));
        }
        Ok(removed)
    }

    /// Flip the active flag of one wallet. Returns the new flag.
    pub fn toggle_active(&mut self, id: Uuid) -> Result<bool, CoreError> {
        let is_active = self.wallet_service.toggle_active(&mut self.wallets, id)?;
        debug!(%id, is_active, "wallet toggled");
        self.notifier
            .publish(WalletChange::WalletToggled { id, is_active });
        Ok(is_active)
    }

    pub fn select_wallet(&mut self, id: Uuid) -> Result<(), CoreError> {
        if !self.wallets.iter().any(|w| w.id == id) {
            return Err(CoreError::WalletNotFound(id.to_string()));
        }
        self.selected_wallet = Some(id);
        self.notifier.publish(WalletChange::SelectionChanged(Some(id)));
        Ok(())
    }

    #[must_use]
    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    #[must_use]
    pub fn get_wallet(&self, id: Uuid) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.id == id)
    }

    #[must_use]
    pub fn selected_wallet(&self) -> Option<&Wallet> {
        self.selected_wallet.and_then(|id| self.get_wallet(id))
    }

    #[must_use]
    pub fn active_wallets(&self) -> Vec<&Wallet> {
        self.wallets.iter().filter(|w| w.is_active).collect()
    }

    /// Portfolio-wide holdings.
    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Rebuild wallets and assets from the sample data and select the first
    /// wallet. Wallets added since are lost.
    pub fn reload_sample_data(&mut self) {
        self.wallets = sample_data::wallets();
        self.assets = sample_data::portfolio_assets();
        self.selected_wallet = self.wallets.first().map(|w| w.id);
        self.notifier.publish(WalletChange::SampleDataReloaded);
    }

    // ── New-wallet form ─────────────────────────────────────────────

    pub fn open_add_wallet(&mut self) {
        self.show_add_wallet = true;
    }

    #[must_use]
    pub fn is_add_wallet_open(&self) -> bool {
        self.show_add_wallet
    }

    pub fn set_new_wallet_name(&mut self, name: impl Into<String>) {
        self.new_wallet_name = name.into();
    }

    pub fn set_new_wallet_type(&mut self, wallet_type: WalletType) {
        self.new_wallet_type = wallet_type;
    }

    #[must_use]
    pub fn new_wallet_name(&self) -> &str {
        &self.new_wallet_name
    }

    #[must_use]
    pub fn new_wallet_type(&self) -> WalletType {
        self.new_wallet_type
    }

    /// Create a wallet from the form fields.
    pub fn submit_new_wallet(&mut self) -> Option<Uuid> {
        let name = self.new_wallet_name.clone();
        self.add_wallet(&name, self.new_wallet_type)
    }

    // ── Performance series ──────────────────────────────────────────

    /// Switch the time range and replace the performance series.
    pub fn select_time_range(&mut self, range: TimeRange) {
        self.selected_time_range = range;
        self.performance_data = self.generate_performance_series(range);
        self.notifier.publish(WalletChange::TimeRangeChanged(range));
    }

    /// A fresh random series for `range`, around the configured baseline.
    pub fn generate_performance_series(&mut self, range: TimeRange) -> Vec<ChartPoint> {
        self.performance_service
            .generate_series(range, self.settings.performance_baseline, &mut self.rng)
    }

    #[must_use]
    pub fn selected_time_range(&self) -> TimeRange {
        self.selected_time_range
    }

    #[must_use]
    pub fn performance_data(&self) -> &[ChartPoint] {
        &self.performance_data
    }

    // ── Aggregates ──────────────────────────────────────────────────

    /// Sum of every wallet's balance.
    #[must_use]
    pub fn total_balance(&self) -> Balance {
        self.wallet_service.total_balance(&self.wallets)
    }

    /// Fiat-weighted 24h change across wallets, in percent.
    #[must_use]
    pub fn change_24h(&self) -> f64 {
        self.wallet_service.weighted_change_24h(&self.wallets)
    }

    /// Growth across the current performance series, in percent.
    #[must_use]
    pub fn portfolio_growth(&self) -> f64 {
        self.wallet_service.portfolio_growth(&self.performance_data)
    }

    #[must_use]
    pub fn formatted_total_value(&self) -> String {
        self.wallet_service
            .format_fiat(&self.settings.fiat_symbol, self.total_balance().fiat)
    }

    #[must_use]
    pub fn formatted_crypto_value(&self) -> String {
        self.wallet_service
            .format_crypto(&self.settings.crypto_currency, self.total_balance().crypto)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: &Settings, rng: StdRng, with_samples: bool) -> Self {
        let (wallets, assets) = if with_samples {
            (sample_data::wallets(), sample_data::portfolio_assets())
        } else {
            (Vec::new(), Vec::new())
        };
        let selected_wallet = wallets.first().map(|w| w.id);

        let mut store = Self {
            wallets,
            assets,
            selected_wallet,
            selected_time_range: TimeRange::default(),
            performance_data: Vec::new(),
            new_wallet_name: String::new(),
            new_wallet_type: WalletType::default(),
            show_add_wallet: false,
            settings: settings.clone(),
            rng,
            notifier: ChangeNotifier::new(),
            wallet_service: WalletService::new(),
            performance_service: PerformanceService::new(),
        };
        store.performance_data = store.generate_performance_series(store.selected_time_range);
        store
    }
}
