use rand::distributions::{Alphanumeric, DistString};
use rand::Rng;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::chart::ChartPoint;
use crate::models::wallet::{Balance, Wallet, WalletType};

/// Address prefix of generated cold wallets (bech32 style).
pub const COLD_ADDRESS_PREFIX: &str = "bc1q";
/// Address prefix of every other generated wallet (P2SH style).
pub const DEFAULT_ADDRESS_PREFIX: &str = "3";

/// Wallet list operations and portfolio aggregates.
///
/// Pure business logic, no I/O. Randomness is injected by the caller.
pub struct WalletService;

impl WalletService {
    pub fn new() -> Self {
        Self
    }

    /// Mock address: type-dependent prefix followed by `suffix_len` random
    /// characters from `[a-zA-Z0-9]`.
    pub fn generate_address<R: Rng + ?Sized>(
        &self,
        wallet_type: WalletType,
        suffix_len: usize,
        rng: &mut R,
    ) -> String {
        let prefix = match wallet_type {
            WalletType::Cold => COLD_ADDRESS_PREFIX,
            _ => DEFAULT_ADDRESS_PREFIX,
        };
        let mut address = String::with_capacity(prefix.len() + suffix_len);
        address.push_str(prefix);
        Alphanumeric.append_string(rng, &mut address, suffix_len);
        address
    }

    /// Build a new empty, inactive wallet. `None` when `name` is blank.
    pub fn build_wallet<R: Rng + ?Sized>(
        &self,
        name: &str,
        wallet_type: WalletType,
        suffix_len: usize,
        rng: &mut R,
    ) -> Option<Wallet> {
        if name.trim().is_empty() {
            return None;
        }
        let address = self.generate_address(wallet_type, suffix_len, rng);
        Some(Wallet::new(name, wallet_type, address))
    }

    /// Remove a wallet by id and return it.
    pub fn remove_wallet(&self, wallets: &mut Vec<Wallet>, id: Uuid) -> Result<Wallet, CoreError> {
        let idx = wallets
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| CoreError::WalletNotFound(id.to_string()))?;
        Ok(wallets.remove(idx))
    }

    /// Flip `is_active` on the wallet with `id`. Returns the new flag.
    pub fn toggle_active(&self, wallets: &mut [Wallet], id: Uuid) -> Result<bool, CoreError> {
        let wallet = wallets
            .iter_mut()
            .find(|w| w.id == id)
            .ok_or_else(|| CoreError::WalletNotFound(id.to_string()))?;
        wallet.is_active = !wallet.is_active;
        Ok(wallet.is_active)
    }

    /// Sum of every wallet's balance.
    pub fn total_balance(&self, wallets: &[Wallet]) -> Balance {
        wallets.iter().map(|w| w.balance).sum()
    }

    /// 24h change of the whole portfolio, weighted by each wallet's fiat
    /// balance. Zero when nothing is held.
    pub fn weighted_change_24h(&self, wallets: &[Wallet]) -> f64 {
        let total_fiat: f64 = wallets.iter().map(|w| w.balance.fiat).sum();
        if total_fiat <= 0.0 {
            return 0.0;
        }
        wallets
            .iter()
            .map(|w| w.change_24h * w.balance.fiat)
            .sum::<f64>()
            / total_fiat
    }

    /// Growth over a performance series in percent: last value against the
    /// first. Zero for fewer than two points or a non-positive start.
    pub fn portfolio_growth(&self, series: &[ChartPoint]) -> f64 {
        match (series.first(), series.last()) {
            (Some(first), Some(last)) if series.len() > 1 && first.value > 0.0 => {
                (last.value - first.value) / first.value * 100.0
            }
            _ => 0.0,
        }
    }

    /// `₹157342.05` style fiat amount.
    pub fn format_fiat(&self, symbol: &str, amount: f64) -> String {
        format!("{symbol}{amount:.2}")
    }

    /// `0.002126 BTC` style crypto amount.
    pub fn format_crypto(&self, code: &str, amount: f64) -> String {
        format!("{amount:.6} {code}")
    }
}

impl Default for WalletService {
    fn default() -> Self {
        Self::new()
    }
}
