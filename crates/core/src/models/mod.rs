pub mod appearance;
pub mod asset;
pub mod change;
pub mod chart;
pub mod record;
pub mod settings;
pub mod time_range;
pub mod wallet;
