pub mod chart_service;
pub mod ledger_service;
pub mod performance_service;
pub mod wallet_service;
