use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::appearance::Rgb;

/// Category of a ledger record.
///
/// Only `Expense` reduces a balance; every other category adds to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionCategory {
    #[default]
    Income,
    Expense,
    Transfer,
    Exchange,
    Mining,
    Staking,
}

impl TransactionCategory {
    pub const ALL: [TransactionCategory; 6] = [
        TransactionCategory::Income,
        TransactionCategory::Expense,
        TransactionCategory::Transfer,
        TransactionCategory::Exchange,
        TransactionCategory::Mining,
        TransactionCategory::Staking,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TransactionCategory::Income => "Income",
            TransactionCategory::Expense => "Expense",
            TransactionCategory::Transfer => "Transfer",
            TransactionCategory::Exchange => "Exchange",
            TransactionCategory::Mining => "Mining",
            TransactionCategory::Staking => "Staking",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TransactionCategory::Income => "arrow.down.circle.fill",
            TransactionCategory::Expense => "arrow.up.circle.fill",
            TransactionCategory::Transfer => "arrow.left.arrow.right.circle.fill",
            TransactionCategory::Exchange => "arrow.triangle.2.circlepath.circle.fill",
            TransactionCategory::Mining => "hammer.circle.fill",
            TransactionCategory::Staking => "chart.line.uptrend.xyaxis.circle.fill",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            TransactionCategory::Income => Rgb::ROYAL_BLUE,
            TransactionCategory::Expense => Rgb::RED,
            TransactionCategory::Transfer => Rgb::NAVY,
            TransactionCategory::Exchange => Rgb::PURPLE,
            TransactionCategory::Mining => Rgb::ORANGE,
            TransactionCategory::Staking => Rgb::PERIWINKLE,
        }
    }

    /// Sign applied to amounts of this category when balances are summed.
    pub fn sign(&self) -> f64 {
        match self {
            TransactionCategory::Expense => -1.0,
            _ => 1.0,
        }
    }
}

impl std::fmt::Display for TransactionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// How a recorded transaction was paid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Crypto,
    Bank,
    Card,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Crypto,
        PaymentMethod::Bank,
        PaymentMethod::Card,
        PaymentMethod::Cash,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Crypto => "Crypto",
            PaymentMethod::Bank => "Bank",
            PaymentMethod::Card => "Card",
            PaymentMethod::Cash => "Cash",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            PaymentMethod::Crypto => "bitcoinsign.circle",
            PaymentMethod::Bank => "building.columns",
            PaymentMethod::Card => "creditcard",
            PaymentMethod::Cash => "indianrupeesign.circle",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parse a user-typed amount. Anything that is not a finite number counts
/// as zero.
pub fn parse_amount(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// A logged income/expense/transfer/... event.
///
/// **Important**: the amount is kept exactly as typed. It is only parsed
/// when statistics or balances are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Unique identifier
    pub id: Uuid,

    pub category: TransactionCategory,

    /// String-encoded decimal, as entered
    pub amount: String,

    /// Currency code (e.g., "BTC", "INR")
    pub currency: String,

    pub description: String,

    pub date: DateTime<Utc>,

    pub payment_method: PaymentMethod,
}

impl TransactionRecord {
    pub fn new(
        category: TransactionCategory,
        amount: impl Into<String>,
        currency: impl Into<String>,
        description: impl Into<String>,
        date: DateTime<Utc>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            amount: amount.into(),
            currency: currency.into(),
            description: description.into(),
            date,
            payment_method,
        }
    }

    /// Amount as a number (malformed → 0).
    #[must_use]
    pub fn parsed_amount(&self) -> f64 {
        parse_amount(&self.amount)
    }

    /// Amount with the category sign applied.
    #[must_use]
    pub fn signed_amount(&self) -> f64 {
        self.category.sign() * self.parsed_amount()
    }
}

/// Everything needed to create a record. Also used as the editable form
/// state held by the ledger store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub category: TransactionCategory,
    pub amount: String,
    pub currency: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
}

impl RecordDraft {
    pub fn new(category: TransactionCategory, amount: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            category,
            amount: amount.into(),
            currency: currency.into(),
            description: String::new(),
            date: Utc::now(),
            payment_method: PaymentMethod::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn with_payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }
}

/// Aggregate of all records in one category. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    pub category: TransactionCategory,

    /// Sum of parsed amounts (currencies are not separated)
    pub total: f64,

    /// Number of records in this category
    pub count: usize,

    /// `count / total records × 100`
    pub percentage: f64,
}

/// Net amount for one currency across the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyBalance {
    pub currency: String,
    pub total: f64,
}
