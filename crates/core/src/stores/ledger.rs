use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::change::LedgerChange;
use crate::models::record::{
    CategoryStat, CurrencyBalance, PaymentMethod, RecordDraft, TransactionCategory,
    TransactionRecord,
};
use crate::models::settings::Settings;
use crate::notify::ChangeNotifier;
use crate::sample_data;
use crate::scheduler::DismissTimer;
use crate::services::ledger_service::LedgerService;

/// Transaction ledger: records (newest first), the entry form, derived
/// category statistics, and the "record saved" banner.
///
/// Records live in memory only.
pub struct LedgerStore {
    records: Vec<TransactionRecord>,
    category_stats: Vec<CategoryStat>,
    form: RecordDraft,
    crypto_currency: String,
    /// Generation of the save whose banner is showing, 0 when hidden.
    banner_shown: Arc<AtomicU64>,
    banner_generation: u64,
    banner_timer: DismissTimer,
    notifier: ChangeNotifier<LedgerChange>,
    service: LedgerService,
}

impl std::fmt::Debug for LedgerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerStore")
            .field("records", &self.records.len())
            .field("categories", &self.category_stats.len())
            .field("banner_visible", &self.is_banner_visible())
            .field("subscribers", &self.notifier.subscriber_count())
            .finish()
    }
}

impl LedgerStore {
    /// Ledger pre-filled with the sample records.
    pub fn new(settings: &Settings) -> Self {
        Self::with_records(settings, sample_data::records())
    }

    /// Ledger with no records.
    pub fn empty(settings: &Settings) -> Self {
        Self::with_records(settings, Vec::new())
    }

    /// Ledger over `records`, which must already be newest-first.
    pub fn with_records(settings: &Settings, records: Vec<TransactionRecord>) -> Self {
        let mut store = Self {
            records,
            category_stats: Vec::new(),
            form: Self::blank_form(&settings.crypto_currency),
            crypto_currency: settings.crypto_currency.clone(),
            banner_shown: Arc::new(AtomicU64::new(0)),
            banner_generation: 0,
            banner_timer: DismissTimer::new(settings.success_banner_delay()),
            notifier: ChangeNotifier::new(),
            service: LedgerService::new(),
        };
        store.category_stats = store.service.category_stats(&store.records);
        store
    }

    pub fn subscribe(&self) -> broadcast::Receiver<LedgerChange> {
        self.notifier.subscribe()
    }

    // ── Records ─────────────────────────────────────────────────────

    /// Record a transaction.
    ///
    /// Returns `Ok(None)` and leaves the ledger untouched when the amount is
    /// blank or not a number. On success the record goes to the front of the
    /// list, statistics are recomputed and the success banner is shown until
    /// the configured delay elapses. A later save restarts that delay.
    ///
    /// Must be called from within a tokio runtime; otherwise
    /// `CoreError::Scheduler` is returned and nothing changes.
    pub fn add_record(&mut self, draft: RecordDraft) -> Result<Option<Uuid>, CoreError> {
        let Some(record) = self.service.build_record(&draft) else {
            debug!(amount = %draft.amount, "discarding record with empty or invalid amount");
            return Ok(None);
        };
        let handle = DismissTimer::runtime()?;

        let id = record.id;
        info!(
            %id,
            category = %record.category,
            amount = %record.amount,
            currency = %record.currency,
            "record saved"
        );
        self.records.insert(0, record);
        self.notifier.publish(LedgerChange::RecordAdded(id));
        self.recompute_category_stats();
        self.show_banner(&handle);
        Ok(Some(id))
    }

    /// All records, newest first.
    #[must_use]
    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    #[must_use]
    pub fn get_record(&self, id: Uuid) -> Option<&TransactionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records of one category, newest first.
    #[must_use]
    pub fn records_for_category(&self, category: TransactionCategory) -> Vec<&TransactionRecord> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ── Statistics ──────────────────────────────────────────────────

    /// Rebuild category statistics from the current records.
    pub fn recompute_category_stats(&mut self) -> &[CategoryStat] {
        self.category_stats = self.service.category_stats(&self.records);
        debug!(categories = self.category_stats.len(), "category stats recomputed");
        self.notifier.publish(LedgerChange::StatsRecomputed);
        &self.category_stats
    }

    /// Statistics as of the last change, largest total first.
    #[must_use]
    pub fn category_stats(&self) -> &[CategoryStat] {
        &self.category_stats
    }

    /// Net amount per currency (expenses subtract).
    #[must_use]
    pub fn total_balance(&self) -> Vec<CurrencyBalance> {
        self.service.total_balance(&self.records)
    }

    /// Net amount for a single currency, 0 if it never appears.
    #[must_use]
    pub fn balance_for(&self, currency: &str) -> f64 {
        self.total_balance()
            .into_iter()
            .find(|b| b.currency.eq_ignore_ascii_case(currency))
            .map_or(0.0, |b| b.total)
    }

    // ── Entry form ──────────────────────────────────────────────────

    #[must_use]
    pub fn form(&self) -> &RecordDraft {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RecordDraft {
        &mut self.form
    }

    /// Submit the entry form. On success the form is reset; a rejected
    /// submission keeps what the user typed.
    pub fn save_form(&mut self) -> Result<Option<Uuid>, CoreError> {
        let saved = self.add_record(self.form.clone())?;
        if saved.is_some() {
            self.reset_form();
        }
        Ok(saved)
    }

    /// Clear amount, description, date, category and payment method.
    /// The selected currency is kept.
    pub fn reset_form(&mut self) {
        let currency = std::mem::take(&mut self.form.currency);
        self.form = Self::blank_form(&currency);
        self.notifier.publish(LedgerChange::FormReset);
    }

    /// Preset amounts for the form's current currency.
    #[must_use]
    pub fn quick_amounts(&self) -> &'static [&'static str] {
        self.service
            .quick_amounts(&self.form.currency, &self.crypto_currency)
    }

    #[must_use]
    pub fn format_record_date(&self, date: &DateTime<Utc>) -> String {
        self.service.format_date(date)
    }

    // ── Success banner ──────────────────────────────────────────────

    #[must_use]
    pub fn is_banner_visible(&self) -> bool {
        self.banner_shown.load(Ordering::SeqCst) != 0
    }

    /// Hide the banner now and drop the pending auto-dismissal.
    pub fn dismiss_banner(&mut self) {
        self.banner_timer.cancel();
        if self.banner_shown.swap(0, Ordering::SeqCst) != 0 {
            self.notifier.publish(LedgerChange::BannerHidden);
        }
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all records as a JSON string.
    pub fn export_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.records)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize records to JSON: {e}")))
    }

    /// Export all records as a CSV string.
    #[must_use]
    pub fn export_csv(&self) -> String {
        self.service.to_csv(&self.records)
    }

    /// Import records from a JSON array. Records are kept verbatim (amounts
    /// that do not parse still count as zero) and placed in front of the
    /// existing ones, newest first. No banner is shown.
    ///
    /// Records whose id is already in the ledger (or repeated within the
    /// document) are skipped, so re-importing an export is a no-op.
    /// Returns the number of records actually added.
    pub fn import_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let parsed: Vec<TransactionRecord> = serde_json::from_str(json)?;
        let total = parsed.len();

        let mut seen: HashSet<Uuid> = self.records.iter().map(|r| r.id).collect();
        let mut imported: Vec<TransactionRecord> =
            parsed.into_iter().filter(|r| seen.insert(r.id)).collect();
        let count = imported.len();
        if count < total {
            debug!(skipped = total - count, "skipping records with known ids");
        }
        if count == 0 {
            return Ok(0);
        }

        imported.sort_by(|a, b| b.date.cmp(&a.date));
        imported.append(&mut self.records);
        self.records = imported;
        info!(count, "records imported");
        self.notifier.publish(LedgerChange::RecordsImported(count));
        self.recompute_category_stats();
        Ok(count)
    }

    // ── Internal ────────────────────────────────────────────────────

    fn blank_form(currency: &str) -> RecordDraft {
        RecordDraft::new(TransactionCategory::Income, String::new(), currency)
            .with_payment_method(PaymentMethod::Crypto)
    }

    fn show_banner(&mut self, handle: &Handle) {
        self.banner_generation += 1;
        let generation = self.banner_generation;
        self.banner_shown.store(generation, Ordering::SeqCst);
        self.notifier.publish(LedgerChange::BannerShown);

        let shown = Arc::clone(&self.banner_shown);
        let notifier = self.notifier.clone();
        self.banner_timer.schedule(handle, move || {
            // A later save owns the banner now; leave it up.
            if shown
                .compare_exchange(generation, 0, Ordering::SeqCst, Ordering::SeqCst)
                .is_ok()
            {
                notifier.publish(LedgerChange::BannerHidden);
            }
        });
    }
}
