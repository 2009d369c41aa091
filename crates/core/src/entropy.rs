use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

use crate::errors::CoreError;

/// Seed a generator from the OS entropy source.
pub fn try_os_rng() -> Result<StdRng, CoreError> {
    let mut seed = [0u8; 32];
    getrandom::getrandom(&mut seed)?;
    Ok(StdRng::from_seed(seed))
}

/// Like [`try_os_rng`], but falls back to a clock-derived seed when the OS
/// source is unavailable. Mock data does not need strong randomness.
pub fn os_rng() -> StdRng {
    match try_os_rng() {
        Ok(rng) => rng,
        Err(e) => {
            warn!(error = %e, "OS entropy unavailable, seeding mock data from the clock");
            let nanos = chrono::Utc::now()
                .timestamp_nanos_opt()
                .unwrap_or_default();
            StdRng::seed_from_u64(nanos as u64)
        }
    }
}
