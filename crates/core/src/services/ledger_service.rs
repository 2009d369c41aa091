use chrono::{DateTime, Utc};

use crate::models::record::{
    CategoryStat, CurrencyBalance, RecordDraft, TransactionCategory, TransactionRecord,
};

const CRYPTO_QUICK_AMOUNTS: [&str; 5] = ["0.001", "0.005", "0.01", "0.05", "0.1"];
const FIAT_QUICK_AMOUNTS: [&str; 5] = ["1000", "5000", "10000", "50000", "100000"];

/// Derives statistics and balances from a list of transaction records.
///
/// Pure business logic: no I/O, no timers. Amounts are parsed permissively:
/// anything that is not a finite number counts as zero.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    /// Turn a draft into a record, or `None` when the amount is empty or
    /// not a number.
    ///
    /// An empty description falls back to the category name.
    pub fn build_record(&self, draft: &RecordDraft) -> Option<TransactionRecord> {
        let amount = draft.amount.trim();
        if amount.is_empty() || !amount.parse::<f64>().is_ok_and(f64::is_finite) {
            return None;
        }

        let description = if draft.description.trim().is_empty() {
            draft.category.display_name().to_string()
        } else {
            draft.description.clone()
        };

        Some(TransactionRecord::new(
            draft.category,
            amount,
            draft.currency.clone(),
            description,
            draft.date,
            draft.payment_method,
        ))
    }

    /// Group records by category.
    ///
    /// Each stat carries the summed amount, the record count and the share of
    /// the total record count. Sorted by descending sum; equal sums keep the
    /// order in which the category first appears in `records`.
    pub fn category_stats(&self, records: &[TransactionRecord]) -> Vec<CategoryStat> {
        if records.is_empty() {
            return Vec::new();
        }

        // (category, count, total), in first-appearance order
        let mut groups: Vec<(TransactionCategory, usize, f64)> = Vec::new();
        for record in records {
            let amount = record.parsed_amount();
            match groups.iter_mut().find(|(c, _, _)| *c == record.category) {
                Some((_, count, total)) => {
                    *count += 1;
                    *total += amount;
                }
                None => groups.push((record.category, 1, amount)),
            }
        }

        let record_count = records.len() as f64;
        let mut stats: Vec<CategoryStat> = groups
            .into_iter()
            .map(|(category, count, total)| CategoryStat {
                category,
                total,
                count,
                percentage: (count as f64 / record_count) * 100.0,
            })
            .collect();

        // sort_by is stable
        stats.sort_by(|a, b| {
            b.total
                .partial_cmp(&a.total)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        stats
    }

    /// Net amount per currency. Expenses subtract, every other category adds.
    /// Currencies appear in the order they are first met.
    pub fn total_balance(&self, records: &[TransactionRecord]) -> Vec<CurrencyBalance> {
        let mut balances: Vec<CurrencyBalance> = Vec::new();
        for record in records {
            let signed = record.signed_amount();
            match balances.iter_mut().find(|b| b.currency == record.currency) {
                Some(balance) => balance.total += signed,
                None => balances.push(CurrencyBalance {
                    currency: record.currency.clone(),
                    total: signed,
                }),
            }
        }
        balances
    }

    /// Preset amounts offered by the entry form for `currency`.
    pub fn quick_amounts(&self, currency: &str, crypto_currency: &str) -> &'static [&'static str] {
        if currency.eq_ignore_ascii_case(crypto_currency) {
            &CRYPTO_QUICK_AMOUNTS
        } else {
            &FIAT_QUICK_AMOUNTS
        }
    }

    /// `Mar 7, 2025` style date used in record lists.
    pub fn format_date(&self, date: &DateTime<Utc>) -> String {
        date.format("%b %-d, %Y").to_string()
    }

    /// Export records as CSV.
    /// Columns: id, category, amount, currency, description, date, payment_method
    pub fn to_csv(&self, records: &[TransactionRecord]) -> String {
        let mut csv = String::from("id,category,amount,currency,description,date,payment_method\n");
        for record in records {
            csv.push_str(&format!(
                "{},{},{},{},{},{},{}\n",
                record.id,
                record.category,
                escape_csv(&record.amount),
                escape_csv(&record.currency),
                escape_csv(&record.description),
                record.date.to_rfc3339(),
                record.payment_method,
            ));
        }
        csv
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}

/// Quote fields containing commas, quotes, or newlines.
fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
