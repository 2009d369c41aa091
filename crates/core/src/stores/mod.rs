pub mod chart;
pub mod ledger;
pub mod wallet;

pub use chart::ChartStore;
pub use ledger::LedgerStore;
pub use wallet::WalletStore;
