use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::appearance::Rgb;
use super::asset::Asset;

/// Kind of wallet. Decides the address prefix of generated wallets and the
/// badge shown next to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WalletType {
    /// Always-online software wallet
    #[default]
    Hot,
    /// Offline storage
    Cold,
    /// Custodial exchange account
    Exchange,
    /// Smart-contract / DeFi wallet
    Defi,
}

impl WalletType {
    pub const ALL: [WalletType; 4] = [
        WalletType::Hot,
        WalletType::Cold,
        WalletType::Exchange,
        WalletType::Defi,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            WalletType::Hot => "Hot Wallet",
            WalletType::Cold => "Cold Wallet",
            WalletType::Exchange => "Exchange",
            WalletType::Defi => "DeFi",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WalletType::Hot => "flame.fill",
            WalletType::Cold => "snowflake",
            WalletType::Exchange => "arrow.triangle.2.circlepath",
            WalletType::Defi => "cube.fill",
        }
    }

    pub fn color(&self) -> Rgb {
        match self {
            WalletType::Hot => Rgb::ORANGE,
            WalletType::Cold => Rgb::NAVY,
            WalletType::Exchange => Rgb::PURPLE,
            WalletType::Defi => Rgb::ROYAL_BLUE,
        }
    }
}

impl std::fmt::Display for WalletType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A balance expressed twice: in the crypto unit and in the fiat display
/// currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub crypto: f64,
    pub fiat: f64,
}

impl Balance {
    pub fn new(crypto: f64, fiat: f64) -> Self {
        Self { crypto, fiat }
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.crypto == 0.0 && self.fiat == 0.0
    }
}

impl std::ops::Add for Balance {
    type Output = Balance;

    fn add(self, rhs: Balance) -> Balance {
        Balance {
            crypto: self.crypto + rhs.crypto,
            fiat: self.fiat + rhs.fiat,
        }
    }
}

impl std::iter::Sum for Balance {
    fn sum<I: Iterator<Item = Balance>>(iter: I) -> Self {
        iter.fold(Balance::default(), |acc, b| acc + b)
    }
}

/// A named container of crypto holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    /// Unique identifier
    pub id: Uuid,

    pub name: String,

    pub wallet_type: WalletType,

    /// On-chain address (mock)
    pub address: String,

    pub balance: Balance,

    /// 24-hour change in percent
    pub change_24h: f64,

    pub assets: Vec<Asset>,

    pub is_active: bool,

    pub last_transaction: DateTime<Utc>,
}

impl Wallet {
    /// A freshly created wallet: empty, inactive, last touched now.
    pub fn new(name: impl Into<String>, wallet_type: WalletType, address: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            wallet_type,
            address: address.into(),
            balance: Balance::default(),
            change_24h: 0.0,
            assets: Vec::new(),
            is_active: false,
            last_transaction: Utc::now(),
        }
    }
}
