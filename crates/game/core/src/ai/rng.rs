use rand::{SeedableRng, rngs::StdRng};

/// Seed for the policy driving participant `owner`.
///
/// Mixes the battle seed and the participant index with SplitMix64/FxHash
/// multipliers followed by a murmur-style avalanche, so neighbouring
/// participants get unrelated streams.
pub fn derive_seed(battle_seed: u64, owner: usize) -> u64 {
    let mut hash = battle_seed;
    hash ^= (owner as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51_afd7_ed55_8ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    hash ^= hash >> 33;
    hash
}

/// Reproducible generator when the battle is seeded, OS entropy otherwise.
pub fn policy_rng(battle_seed: Option<u64>, owner: usize) -> StdRng {
    match battle_seed {
        Some(seed) => StdRng::seed_from_u64(derive_seed(seed, owner)),
        None => StdRng::from_entropy(),
    }
}
