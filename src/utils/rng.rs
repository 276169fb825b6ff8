use rand::{rngs::StdRng, SeedableRng};

const DEBUG_SEED: u64 = 63;

/// Fixed seed in debug builds so random games replay identically
#[cfg(debug_assertions)]
pub fn make_rng() -> StdRng {
    StdRng::seed_from_u64(DEBUG_SEED)
}

#[cfg(not(debug_assertions))]
pub fn make_rng() -> StdRng {
    use rand::{rngs::SysRng, TryRng};
    let seed = SysRng.try_next_u64().unwrap_or(DEBUG_SEED);

    StdRng::seed_from_u64(seed)
}
