// ═══════════════════════════════════════════════════════════════════
// Store Tests: LedgerStore, WalletStore, ChartStore, CryptoTracker
// ═══════════════════════════════════════════════════════════════════

use std::time::Duration;

use chrono::{TimeZone, Utc};
use tokio::sync::broadcast::error::TryRecvError;
use uuid::Uuid;

use crypto_tracker_core::errors::CoreError;
use crypto_tracker_core::models::change::{ChartChange, LedgerChange, WalletChange};
use crypto_tracker_core::models::chart::{BarLayout, ChartPoint};
use crypto_tracker_core::models::record::{
    PaymentMethod, RecordDraft, TransactionCategory, TransactionRecord,
};
use crypto_tracker_core::models::settings::Settings;
use crypto_tracker_core::models::time_range::TimeRange;
use crypto_tracker_core::models::wallet::WalletType;
use crypto_tracker_core::scheduler::DismissTimer;
use crypto_tracker_core::stores::{ChartStore, LedgerStore, WalletStore};
use crypto_tracker_core::CryptoTracker;

fn draft(category: TransactionCategory, amount: &str, currency: &str) -> RecordDraft {
    RecordDraft::new(category, amount, currency)
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

// ═══════════════════════════════════════════════════════════════════
//  LedgerStore: records and statistics
// ═══════════════════════════════════════════════════════════════════

mod ledger {
    use super::*;

    #[test]
    fn starts_with_sample_records() {
        let ledger = LedgerStore::new(&Settings::default());
        assert_eq!(ledger.len(), 5);
        assert_eq!(ledger.records()[0].description, "Client Payment");
        assert_eq!(ledger.category_stats().len(), 5);
        assert!(!ledger.is_banner_visible());
    }

    #[test]
    fn sample_balances() {
        let ledger = LedgerStore::new(&Settings::default());
        assert!((ledger.balance_for("BTC") - 0.0155).abs() < 1e-12);
        assert_eq!(ledger.balance_for("INR"), -15000.0);
        assert_eq!(ledger.balance_for("ETH"), 0.0);
    }

    #[tokio::test]
    async fn empty_amount_is_discarded() {
        let mut ledger = LedgerStore::new(&Settings::default());
        let before = ledger.records().to_vec();
        let result = ledger.add_record(draft(TransactionCategory::Income, "", "BTC")).unwrap();
        assert!(result.is_none());
        assert_eq!(ledger.records(), before.as_slice());
        assert!(!ledger.is_banner_visible());
    }

    #[tokio::test]
    async fn valid_record_goes_first() {
        let mut ledger = LedgerStore::new(&Settings::default());
        let before = ledger.len();
        let id = ledger
            .add_record(draft(TransactionCategory::Transfer, "0.5", "BTC"))
            .unwrap()
            .unwrap();
        assert_eq!(ledger.len(), before + 1);
        assert_eq!(ledger.records()[0].id, id);
        assert_eq!(ledger.get_record(id).unwrap().amount, "0.5");
        assert!(ledger.is_banner_visible());
    }

    #[tokio::test]
    async fn stats_follow_new_records() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        assert!(ledger.category_stats().is_empty());

        ledger.add_record(draft(TransactionCategory::Mining, "2", "BTC")).unwrap();
        ledger.add_record(draft(TransactionCategory::Income, "1", "BTC")).unwrap();
        ledger.add_record(draft(TransactionCategory::Mining, "3", "BTC")).unwrap();

        let stats = ledger.category_stats();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].category, TransactionCategory::Mining);
        assert_eq!(stats[0].total, 5.0);
        assert_eq!(stats[0].count, 2);
        let sum: f64 = stats.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn income_ten_expense_three() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        ledger.add_record(draft(TransactionCategory::Income, "10", "BTC")).unwrap();
        ledger.add_record(draft(TransactionCategory::Expense, "3", "BTC")).unwrap();
        let balances = ledger.total_balance();
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].currency, "BTC");
        assert_eq!(balances[0].total, 7.0);
    }

    #[test]
    fn records_for_category() {
        let ledger = LedgerStore::new(&Settings::default());
        let mining = ledger.records_for_category(TransactionCategory::Mining);
        assert_eq!(mining.len(), 1);
        assert_eq!(mining[0].description, "Mining Rewards");
        assert!(ledger.records_for_category(TransactionCategory::Transfer).is_empty());
    }

    #[test]
    fn add_without_runtime_is_scheduler_error() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        let result = ledger.add_record(draft(TransactionCategory::Income, "1", "BTC"));
        assert!(matches!(result, Err(CoreError::Scheduler(_))));
        assert!(ledger.is_empty());
        assert!(!ledger.is_banner_visible());
    }

    #[test]
    fn empty_amount_without_runtime_is_still_silent() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        let result = ledger.add_record(draft(TransactionCategory::Income, "", "BTC"));
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn record_date_format() {
        let ledger = LedgerStore::empty(&Settings::default());
        let date = Utc.with_ymd_and_hms(2025, 8, 6, 10, 0, 0).unwrap();
        assert_eq!(ledger.format_record_date(&date), "Aug 6, 2025");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  LedgerStore: entry form
// ═══════════════════════════════════════════════════════════════════

mod ledger_form {
    use super::*;

    #[test]
    fn blank_form_defaults() {
        let ledger = LedgerStore::empty(&Settings::default());
        let form = ledger.form();
        assert_eq!(form.category, TransactionCategory::Income);
        assert!(form.amount.is_empty());
        assert_eq!(form.currency, "BTC");
        assert_eq!(form.payment_method, PaymentMethod::Crypto);
    }

    #[tokio::test]
    async fn save_form_resets_but_keeps_currency() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        {
            let form = ledger.form_mut();
            form.category = TransactionCategory::Expense;
            form.amount = "5000".to_string();
            form.currency = "INR".to_string();
            form.payment_method = PaymentMethod::Card;
        }

        let id = ledger.save_form().unwrap().unwrap();
        let saved = ledger.get_record(id).unwrap();
        assert_eq!(saved.category, TransactionCategory::Expense);
        assert_eq!(saved.description, "Expense");
        assert_eq!(saved.payment_method, PaymentMethod::Card);

        let form = ledger.form();
        assert!(form.amount.is_empty());
        assert!(form.description.is_empty());
        assert_eq!(form.category, TransactionCategory::Income);
        assert_eq!(form.payment_method, PaymentMethod::Crypto);
        assert_eq!(form.currency, "INR");
    }

    #[tokio::test]
    async fn rejected_form_is_kept() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        ledger.form_mut().description = "Lunch".to_string();
        assert!(ledger.save_form().unwrap().is_none());
        assert_eq!(ledger.form().description, "Lunch");
        assert!(ledger.is_empty());
    }

    #[test]
    fn quick_amounts_follow_form_currency() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        assert_eq!(ledger.quick_amounts()[0], "0.001");
        ledger.form_mut().currency = "INR".to_string();
        assert_eq!(ledger.quick_amounts()[0], "1000");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  LedgerStore: success banner timing
// ═══════════════════════════════════════════════════════════════════

mod banner {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn hides_after_delay() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        ledger.add_record(draft(TransactionCategory::Income, "1", "BTC")).unwrap();
        assert!(ledger.is_banner_visible());

        tokio::time::sleep(ms(1999)).await;
        assert!(ledger.is_banner_visible());

        tokio::time::sleep(ms(2)).await;
        assert!(!ledger.is_banner_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn second_save_restarts_delay() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        ledger.add_record(draft(TransactionCategory::Income, "1", "BTC")).unwrap();

        tokio::time::sleep(ms(1500)).await;
        ledger.add_record(draft(TransactionCategory::Income, "2", "BTC")).unwrap();

        // 2.5s after the first save, 1s after the second
        tokio::time::sleep(ms(1000)).await;
        assert!(ledger.is_banner_visible());

        tokio::time::sleep(ms(1100)).await;
        assert!(!ledger.is_banner_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn save_at_deadline_keeps_new_banner() {
        for _ in 0..50 {
            let mut ledger = LedgerStore::empty(&Settings::default());
            ledger.add_record(draft(TransactionCategory::Income, "1", "BTC")).unwrap();

            // The first dismissal is due right now but may not have run yet.
            tokio::time::sleep(ms(2000)).await;
            ledger.add_record(draft(TransactionCategory::Income, "2", "BTC")).unwrap();
            for _ in 0..5 {
                tokio::task::yield_now().await;
            }
            assert!(ledger.is_banner_visible());

            tokio::time::sleep(ms(2001)).await;
            assert!(!ledger.is_banner_visible());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn custom_delay() {
        let settings = Settings {
            success_banner_delay_ms: 500,
            ..Settings::default()
        };
        let mut ledger = LedgerStore::empty(&settings);
        ledger.add_record(draft(TransactionCategory::Income, "1", "BTC")).unwrap();
        tokio::time::sleep(ms(501)).await;
        assert!(!ledger.is_banner_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn manual_dismiss_cancels_timer() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        let mut rx = ledger.subscribe();
        ledger.add_record(draft(TransactionCategory::Income, "1", "BTC")).unwrap();
        ledger.dismiss_banner();
        assert!(!ledger.is_banner_visible());

        tokio::time::sleep(ms(3000)).await;
        let hidden = std::iter::from_fn(|| rx.try_recv().ok())
            .filter(|c| *c == LedgerChange::BannerHidden)
            .count();
        assert_eq!(hidden, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_when_hidden_is_noop() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        let mut rx = ledger.subscribe();
        ledger.dismiss_banner();
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[tokio::test(start_paused = true)]
    async fn timer_pending_state() {
        let mut timer = DismissTimer::new(ms(100));
        assert!(!timer.is_pending());

        let handle = DismissTimer::runtime().unwrap();
        timer.schedule(&handle, || {});
        assert!(timer.is_pending());

        tokio::time::sleep(ms(150)).await;
        assert!(!timer.is_pending());

        timer.schedule(&handle, || {});
        assert!(timer.cancel());
        assert!(!timer.is_pending());
        assert!(!timer.cancel());
    }
}

// ═══════════════════════════════════════════════════════════════════
//  LedgerStore: notifications, export / import
// ═══════════════════════════════════════════════════════════════════

mod ledger_feed {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn save_publishes_in_order() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        let mut rx = ledger.subscribe();
        let id = ledger
            .add_record(draft(TransactionCategory::Income, "1", "BTC"))
            .unwrap()
            .unwrap();

        assert_eq!(rx.try_recv().unwrap(), LedgerChange::RecordAdded(id));
        assert_eq!(rx.try_recv().unwrap(), LedgerChange::StatsRecomputed);
        assert_eq!(rx.try_recv().unwrap(), LedgerChange::BannerShown);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));

        tokio::time::sleep(ms(2100)).await;
        assert_eq!(rx.try_recv().unwrap(), LedgerChange::BannerHidden);
    }

    #[tokio::test]
    async fn discarded_save_publishes_nothing() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        let mut rx = ledger.subscribe();
        ledger.add_record(draft(TransactionCategory::Income, " ", "BTC")).unwrap();
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn json_roundtrip() {
        let source = LedgerStore::new(&Settings::default());
        let json = source.export_json().unwrap();

        let mut target = LedgerStore::empty(&Settings::default());
        let mut rx = target.subscribe();
        assert_eq!(target.import_json(&json).unwrap(), 5);
        assert_eq!(target.records(), source.records());
        assert_eq!(target.category_stats(), source.category_stats());
        assert!(!target.is_banner_visible());
        assert_eq!(rx.try_recv().unwrap(), LedgerChange::RecordsImported(5));
    }

    #[test]
    fn reimporting_own_export_adds_nothing() {
        let mut ledger = LedgerStore::new(&Settings::default());
        let json = ledger.export_json().unwrap();
        let mut rx = ledger.subscribe();

        assert_eq!(ledger.import_json(&json).unwrap(), 0);
        assert_eq!(ledger.len(), 5);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn import_skips_known_and_repeated_ids() {
        let mut ledger = LedgerStore::new(&Settings::default());
        let known = ledger.records()[0].clone();
        let fresh = TransactionRecord::new(
            TransactionCategory::Mining,
            "0.5",
            "BTC",
            "Pool payout",
            Utc.with_ymd_and_hms(2025, 3, 7, 9, 30, 0).unwrap(),
            PaymentMethod::Crypto,
        );
        let json = serde_json::to_string(&vec![known, fresh.clone(), fresh.clone()]).unwrap();

        assert_eq!(ledger.import_json(&json).unwrap(), 1);
        assert_eq!(ledger.len(), 6);
        let copies = ledger.records().iter().filter(|r| r.id == fresh.id).count();
        assert_eq!(copies, 1);
        assert_eq!(ledger.get_record(fresh.id).unwrap().description, "Pool payout");
    }

    #[test]
    fn import_keeps_malformed_amounts() {
        let mut ledger = LedgerStore::empty(&Settings::default());
        let json = r#"[{
            "id": "6f1c3a52-2b6e-4a55-9d8e-0f4d3c2b1a00",
            "category": "Income",
            "amount": "lots",
            "currency": "BTC",
            "description": "Gift",
            "date": "2025-03-07T09:30:00Z",
            "payment_method": "Cash"
        }]"#;
        assert_eq!(ledger.import_json(json).unwrap(), 1);
        assert_eq!(ledger.records()[0].amount, "lots");
        assert_eq!(ledger.balance_for("BTC"), 0.0);
        assert_eq!(ledger.category_stats()[0].count, 1);
    }

    #[test]
    fn import_rejects_bad_json() {
        let mut ledger = LedgerStore::new(&Settings::default());
        assert!(matches!(
            ledger.import_json("{ nope"),
            Err(CoreError::Deserialization(_))
        ));
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn import_empty_array() {
        let mut ledger = LedgerStore::new(&Settings::default());
        assert_eq!(ledger.import_json("[]").unwrap(), 0);
        assert_eq!(ledger.len(), 5);
    }

    #[test]
    fn csv_has_row_per_record() {
        let ledger = LedgerStore::new(&Settings::default());
        let csv = ledger.export_csv();
        assert_eq!(csv.lines().count(), 6);
        assert!(csv.lines().nth(1).unwrap().contains("Client Payment"));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  WalletStore
// ═══════════════════════════════════════════════════════════════════

mod wallets {
    use super::*;

    fn store() -> WalletStore {
        WalletStore::with_seed(&Settings::default(), 7)
    }

    #[test]
    fn starts_with_sample_wallets() {
        let store = store();
        let names: Vec<&str> = store.wallets().iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["Main Wallet", "Cold Storage", "Trading Wallet"]);
        assert_eq!(store.selected_wallet().unwrap().name, "Main Wallet");
        assert_eq!(store.assets().len(), 5);
        assert_eq!(store.active_wallets().len(), 1);
        assert_eq!(store.selected_time_range(), TimeRange::Day);
        assert_eq!(store.performance_data().len(), 24);
    }

    #[test]
    fn aggregate_balance() {
        let store = store();
        assert_eq!(store.formatted_total_value(), "₹157342.05");
        assert_eq!(store.formatted_crypto_value(), "0.002126 BTC");
        let change = store.change_24h();
        assert!(change > 2.3 && change < 4.6, "{change}");
    }

    #[test]
    fn growth_follows_performance_series() {
        let mut store = store();
        let expected = |points: &[ChartPoint]| {
            let first = points[0].value;
            (points[points.len() - 1].value - first) / first * 100.0
        };
        assert!((store.portfolio_growth() - expected(store.performance_data())).abs() < 1e-9);

        store.select_time_range(TimeRange::Year);
        assert_eq!(store.performance_data().len(), 12);
        assert!((store.portfolio_growth() - expected(store.performance_data())).abs() < 1e-9);
    }

    #[test]
    fn add_wallet_appends_inactive_empty_wallet() {
        let mut store = store();
        let id = store.add_wallet("DeFi Vault", WalletType::Defi).unwrap();
        let wallet = store.wallets().last().unwrap();
        assert_eq!(wallet.id, id);
        assert_eq!(wallet.name, "DeFi Vault");
        assert!(wallet.address.starts_with('3'));
        assert_eq!(wallet.address.len(), 31);
        assert!(wallet.balance.is_zero());
        assert!(!wallet.is_active);
        assert_eq!(store.wallets().len(), 4);
    }

    #[test]
    fn cold_wallet_gets_bech32_prefix() {
        let mut store = store();
        let id = store.add_wallet("Vault", WalletType::Cold).unwrap();
        assert!(store.get_wallet(id).unwrap().address.starts_with("bc1q"));
    }

    #[test]
    fn empty_name_is_discarded() {
        let mut store = store();
        let mut rx = store.subscribe();
        assert!(store.add_wallet("", WalletType::Hot).is_none());
        assert!(store.add_wallet("   ", WalletType::Hot).is_none());
        assert_eq!(store.wallets().len(), 3);
        assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    }

    #[test]
    fn form_submit_clears_name_and_closes_sheet() {
        let mut store = store();
        store.open_add_wallet();
        store.set_new_wallet_name("Travel");
        store.set_new_wallet_type(WalletType::Exchange);
        assert!(store.is_add_wallet_open());

        let id = store.submit_new_wallet().unwrap();
        assert_eq!(store.get_wallet(id).unwrap().wallet_type, WalletType::Exchange);
        assert!(store.new_wallet_name().is_empty());
        assert_eq!(store.new_wallet_type(), WalletType::Exchange);
        assert!(!store.is_add_wallet_open());
    }

    #[test]
    fn rejected_form_stays_open() {
        let mut store = store();
        store.open_add_wallet();
        assert!(store.submit_new_wallet().is_none());
        assert!(store.is_add_wallet_open());
    }

    #[test]
    fn deleting_selected_falls_back_to_first() {
        let mut store = store();
        let first = store.wallets()[0].id;
        let second = store.wallets()[1].id;

        store.delete_wallet(first).unwrap();
        assert_eq!(store.selected_wallet().unwrap().id, second);
        assert!(store.get_wallet(first).is_none());
    }

    #[test]
    fn deleting_unselected_keeps_selection() {
        let mut store = store();
        let first = store.wallets()[0].id;
        let third = store.wallets()[2].id;
        store.delete_wallet(third).unwrap();
        assert_eq!(store.selected_wallet().unwrap().id, first);
    }

    #[test]
    fn deleting_everything_clears_selection() {
        let mut store = store();
        let ids: Vec<Uuid> = store.wallets().iter().map(|w| w.id).collect();
        for id in ids {
            store.delete_wallet(id).unwrap();
            if let Some(selected) = store.selected_wallet() {
                assert_ne!(selected.id, id);
            }
        }
        assert!(store.wallets().is_empty());
        assert!(store.selected_wallet().is_none());
    }

    #[test]
    fn delete_unknown_is_error() {
        let mut store = store();
        assert!(matches!(
            store.delete_wallet(Uuid::new_v4()),
            Err(CoreError::WalletNotFound(_))
        ));
        assert_eq!(store.wallets().len(), 3);
    }

    #[test]
    fn toggle_flips_only_target() {
        let mut store = store();
        let before = store.wallets().to_vec();
        let target = before[1].id;

        assert!(store.toggle_active(target).unwrap());
        for (old, new) in before.iter().zip(store.wallets()) {
            if old.id == target {
                assert_eq!(new.is_active, !old.is_active);
                assert_eq!(new.name, old.name);
                assert_eq!(new.address, old.address);
                assert_eq!(new.balance, old.balance);
                assert_eq!(new.assets, old.assets);
                assert_eq!(new.last_transaction, old.last_transaction);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn select_wallet() {
        let mut store = store();
        let third = store.wallets()[2].id;
        store.select_wallet(third).unwrap();
        assert_eq!(store.selected_wallet().unwrap().name, "Trading Wallet");
        assert!(store.select_wallet(Uuid::new_v4()).is_err());
        assert_eq!(store.selected_wallet().unwrap().id, third);
    }

    #[test]
    fn week_range_is_mon_to_sun() {
        let mut store = store();
        store.select_time_range(TimeRange::Week);
        let labels: Vec<&str> = store
            .performance_data()
            .iter()
            .map(|p| p.label.as_str())
            .collect();
        assert_eq!(labels, ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(store.selected_time_range(), TimeRange::Week);
    }

    #[test]
    fn range_switch_replaces_series() {
        let mut store = store();
        store.select_time_range(TimeRange::Year);
        assert_eq!(store.performance_data().len(), 12);
        store.select_time_range(TimeRange::Month);
        assert_eq!(store.performance_data().len(), 30);
    }

    #[test]
    fn seeded_stores_are_reproducible() {
        let mut a = WalletStore::with_seed(&Settings::default(), 99);
        let mut b = WalletStore::with_seed(&Settings::default(), 99);
        assert_eq!(a.performance_data(), b.performance_data());

        let wa = a.add_wallet("X", WalletType::Hot).unwrap();
        let wb = b.add_wallet("X", WalletType::Hot).unwrap();
        assert_eq!(a.get_wallet(wa).unwrap().address, b.get_wallet(wb).unwrap().address);
    }

    #[test]
    fn empty_store() {
        let store = WalletStore::empty(&Settings::default());
        assert!(store.wallets().is_empty());
        assert!(store.selected_wallet().is_none());
        assert_eq!(store.formatted_total_value(), "₹0.00");
        assert_eq!(store.change_24h(), 0.0);
    }

    #[test]
    fn reload_sample_data() {
        let mut store = store();
        store.add_wallet("Extra", WalletType::Hot).unwrap();
        store.reload_sample_data();
        assert_eq!(store.wallets().len(), 3);
        assert_eq!(store.selected_wallet().unwrap().name, "Main Wallet");
    }

    #[test]
    fn publishes_changes() {
        let mut store = store();
        let mut rx = store.subscribe();
        let first = store.wallets()[0].id;

        let added = store.add_wallet("New", WalletType::Hot).unwrap();
        assert_eq!(rx.try_recv().unwrap(), WalletChange::WalletAdded(added));

        store.toggle_active(added).unwrap();
        assert_eq!(
            rx.try_recv().unwrap(),
            WalletChange::WalletToggled { id: added, is_active: true }
        );

        store.delete_wallet(first).unwrap();
        assert_eq!(rx.try_recv().unwrap(), WalletChange::WalletRemoved(first));
        let new_first = store.wallets()[0].id;
        assert_eq!(
            rx.try_recv().unwrap(),
            WalletChange::SelectionChanged(Some(new_first))
        );

        store.select_time_range(TimeRange::Week);
        assert_eq!(rx.try_recv().unwrap(), WalletChange::TimeRangeChanged(TimeRange::Week));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ChartStore
// ═══════════════════════════════════════════════════════════════════

mod chart {
    use super::*;

    fn fixed() -> ChartStore {
        ChartStore::from_points(vec![
            ChartPoint::new("a", 50.0),
            ChartPoint::new("b", 100.0),
            ChartPoint::new("c", 1_234_567.0),
        ])
    }

    #[test]
    fn sample_chart() {
        let chart = ChartStore::with_seed(3);
        let labels: Vec<&str> = chart.points().iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            ["20 Mar", "21 Mar", "22 Mar", "23 Mar", "24 Mar", "25 Mar", "26 Mar"]
        );
        assert_eq!(chart.selected_index(), 4);
        assert_eq!(chart.selected_label(), Some("24 Mar"));
    }

    #[test]
    fn selection_clamped_for_short_series() {
        assert_eq!(fixed().selected_index(), 2);
        assert_eq!(ChartStore::from_points(Vec::new()).selected_index(), 0);
    }

    #[test]
    fn geometry() {
        let chart = fixed();
        let layout = BarLayout::new(10.0, 10.0);
        assert_eq!(chart.max_value(), 1_234_567.0);
        assert_eq!(chart.bar_height(1_234_567.0, 300.0), 300.0);
        assert_eq!(chart.x_position(2, &layout), 45.0);
        assert_eq!(chart.find_closest_index(15.0, &layout), 0);
        assert_eq!(chart.find_closest_index(40.0, &layout), 2);
    }

    #[test]
    fn select_and_format() {
        let mut chart = fixed();
        chart.select_data_point(2).unwrap();
        assert_eq!(chart.selected_value(), Some(1_234_567.0));
        assert_eq!(chart.formatted_selected_value().as_deref(), Some("1,234,567"));
    }

    #[test]
    fn select_out_of_range() {
        let mut chart = fixed();
        chart.select_data_point(0).unwrap();
        assert!(matches!(
            chart.select_data_point(3),
            Err(CoreError::IndexOutOfRange { index: 3, len: 3 })
        ));
        assert_eq!(chart.selected_index(), 0);
    }

    #[test]
    fn select_closest() {
        let mut chart = fixed();
        let mut rx = chart.subscribe();
        let layout = BarLayout::new(10.0, 10.0);
        assert_eq!(chart.select_closest(26.0, &layout), Some(1));
        assert_eq!(chart.selected_label(), Some("b"));
        assert_eq!(rx.try_recv().unwrap(), ChartChange::SelectionChanged(1));
    }

    #[test]
    fn empty_chart_is_safe() {
        let mut chart = ChartStore::from_points(Vec::new());
        let layout = BarLayout::new(10.0, 10.0);
        assert_eq!(chart.max_value(), 1.0);
        assert_eq!(chart.find_closest_index(12.0, &layout), 0);
        assert_eq!(chart.select_closest(12.0, &layout), None);
        assert!(chart.selected_point().is_none());
        assert!(chart.formatted_selected_value().is_none());
        chart.update_range(TimeRange::Year);
        assert_eq!(chart.range(), TimeRange::Year);
    }

    #[test]
    fn update_range_redraws_values() {
        let mut chart = ChartStore::with_seed(11);
        let mut rx = chart.subscribe();
        let before: Vec<String> = chart.points().iter().map(|p| p.label.clone()).collect();

        chart.update_range(TimeRange::Week);
        let after: Vec<String> = chart.points().iter().map(|p| p.label.clone()).collect();
        assert_eq!(before, after);
        assert_eq!(chart.range(), TimeRange::Week);
        assert!(chart.selected_index() < 7);
        assert!(chart
            .points()
            .iter()
            .all(|p| (85_000.0..=145_000.0).contains(&p.value)));

        assert_eq!(rx.try_recv().unwrap(), ChartChange::RangeChanged(TimeRange::Week));
        assert!(matches!(rx.try_recv().unwrap(), ChartChange::SelectionChanged(_)));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  CryptoTracker facade
// ═══════════════════════════════════════════════════════════════════

mod tracker {
    use super::*;

    #[test]
    fn builds_all_stores() {
        let tracker = CryptoTracker::new();
        assert_eq!(tracker.ledger().len(), 5);
        assert_eq!(tracker.wallets().wallets().len(), 3);
        assert_eq!(tracker.chart().points().len(), 7);
        assert_eq!(tracker.settings(), &Settings::default());
    }

    #[test]
    fn from_settings_json() {
        let tracker =
            CryptoTracker::from_settings_json(r#"{ "fiat_symbol": "$", "crypto_currency": "ETH" }"#)
                .unwrap();
        assert_eq!(tracker.wallets().formatted_total_value(), "$157342.05");
        assert_eq!(tracker.wallets().formatted_crypto_value(), "0.002126 ETH");
        assert_eq!(tracker.ledger().form().currency, "ETH");
    }

    #[test]
    fn bad_settings_json() {
        assert!(matches!(
            CryptoTracker::from_settings_json("[1, 2"),
            Err(CoreError::Deserialization(_))
        ));
    }

    #[test]
    fn seeded_tracker_is_reproducible() {
        let a = CryptoTracker::with_seed(Settings::default(), 5);
        let b = CryptoTracker::with_seed(Settings::default(), 5);
        assert_eq!(a.chart().points(), b.chart().points());
        assert_eq!(a.wallets().performance_data(), b.wallets().performance_data());
    }

    #[tokio::test]
    async fn stores_are_independent() {
        let mut tracker = CryptoTracker::new();
        let wallets_before = tracker.wallets().wallets().len();
        tracker
            .ledger_mut()
            .add_record(draft(TransactionCategory::Income, "1", "BTC"))
            .unwrap();
        tracker.chart_mut().update_range(TimeRange::Month);
        assert_eq!(tracker.wallets().wallets().len(), wallets_before);
        assert_eq!(tracker.wallets_mut().selected_time_range(), TimeRange::Day);
    }
}
