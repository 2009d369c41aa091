//! Fixed mock data the stores start from.
//!
//! Dates are relative to the moment the data is built.

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::models::appearance::Rgb;
use crate::models::asset::Asset;
use crate::models::record::{PaymentMethod, TransactionCategory, TransactionRecord};
use crate::models::wallet::{Balance, Wallet, WalletType};

fn bitcoin(quantity: f64, value: f64, allocation: f64) -> Asset {
    Asset::new("BTC", "Bitcoin", quantity, value, 4.6)
        .with_appearance("bitcoinsign.circle.fill", Rgb::ORANGE)
        .with_allocation(allocation)
}

fn ethereum(allocation: f64) -> Asset {
    Asset::new("ETH", "Ethereum", 0.05, 25_000.0, 3.2)
        .with_appearance("e.circle.fill", Rgb::PURPLE)
        .with_allocation(allocation)
}

fn solana(allocation: f64) -> Asset {
    Asset::new("SOL", "Solana", 2.5, 20_000.0, 8.9)
        .with_appearance("s.circle.fill", Rgb::PERIWINKLE)
        .with_allocation(allocation)
}

/// Holdings of the default hot wallet.
pub fn main_wallet_assets() -> Vec<Asset> {
    vec![bitcoin(0.001526, 112_342.05, 70.0), ethereum(20.0), solana(10.0)]
}

/// Holdings of the default cold wallet.
pub fn cold_wallet_assets() -> Vec<Asset> {
    vec![bitcoin(0.000600, 45_000.0, 100.0)]
}

/// Portfolio-wide holdings across every wallet.
pub fn portfolio_assets() -> Vec<Asset> {
    vec![
        bitcoin(0.002126, 157_342.05, 60.0),
        ethereum(15.0),
        solana(10.0),
        Asset::new("ADA", "Cardano", 500.0, 15_000.0, -2.1)
            .with_appearance("a.circle.fill", Rgb::INDIGO)
            .with_allocation(8.0),
        Asset::new("DOT", "Polkadot", 10.0, 10_000.0, 5.7)
            .with_appearance("d.circle.fill", Rgb::PINK)
            .with_allocation(7.0),
    ]
}

/// The three wallets every fresh store starts with. The first one is active.
pub fn wallets() -> Vec<Wallet> {
    let now = Utc::now();
    vec![
        Wallet {
            id: Uuid::new_v4(),
            name: "Main Wallet".to_string(),
            wallet_type: WalletType::Hot,
            address: "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh".to_string(),
            balance: Balance::new(0.001526, 112_342.05),
            change_24h: 4.6,
            assets: main_wallet_assets(),
            is_active: true,
            last_transaction: now - Duration::hours(1),
        },
        Wallet {
            id: Uuid::new_v4(),
            name: "Cold Storage".to_string(),
            wallet_type: WalletType::Cold,
            address: "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq".to_string(),
            balance: Balance::new(0.000600, 45_000.0),
            change_24h: 2.3,
            assets: cold_wallet_assets(),
            is_active: false,
            last_transaction: now - Duration::days(7),
        },
        Wallet {
            id: Uuid::new_v4(),
            name: "Trading Wallet".to_string(),
            wallet_type: WalletType::Exchange,
            address: "3FZbgi29cpjq2GjdwV8eyHuJJnkLtktZc5".to_string(),
            balance: Balance::default(),
            change_24h: 0.0,
            assets: Vec::new(),
            is_active: false,
            last_transaction: now - Duration::days(30),
        },
    ]
}

/// Recent ledger entries, newest first.
pub fn records() -> Vec<TransactionRecord> {
    let now = Utc::now();
    let entry = |category, amount: &str, currency: &str, description: &str, days_ago, method| {
        TransactionRecord::new(
            category,
            amount,
            currency,
            description,
            now - Duration::days(days_ago),
            method,
        )
    };
    vec![
        entry(TransactionCategory::Income, "0.0050", "BTC", "Client Payment", 1, PaymentMethod::Crypto),
        entry(TransactionCategory::Expense, "15000", "INR", "Trading Fee", 2, PaymentMethod::Bank),
        entry(TransactionCategory::Mining, "0.0002", "BTC", "Mining Rewards", 3, PaymentMethod::Crypto),
        entry(TransactionCategory::Exchange, "0.0100", "BTC", "BTC to ETH", 4, PaymentMethod::Crypto),
        entry(TransactionCategory::Staking, "0.0003", "BTC", "Staking Rewards", 5, PaymentMethod::Crypto),
    ]
}
