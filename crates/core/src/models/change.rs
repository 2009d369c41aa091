//! Change notifications published by the stores.
//!
//! Each store owns a broadcast channel; a UI layer subscribes and re-reads
//! whatever state it displays when a change arrives.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::time_range::TimeRange;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LedgerChange {
    RecordAdded(Uuid),
    RecordsImported(usize),
    StatsRecomputed,
    FormReset,
    BannerShown,
    BannerHidden,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WalletChange {
    WalletAdded(Uuid),
    WalletRemoved(Uuid),
    WalletToggled { id: Uuid, is_active: bool },
    SelectionChanged(Option<Uuid>),
    TimeRangeChanged(TimeRange),
    SampleDataReloaded,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartChange {
    SelectionChanged(usize),
    RangeChanged(TimeRange),
}
