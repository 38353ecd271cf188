//! Input-array construction for hosts.
//!
//! The executor never fabricates its own data; hosts build snapshots here
//! (or from literals) and hand them over with `set_array`.

use rand::Rng;

use crate::config::Config;
use crate::snapshot::ArraySnapshot;

/// Random snapshot of `len` values drawn uniformly from `min..=max`.
///
/// A `len` of zero yields an empty snapshot. Panics when `min > max`.
pub fn random_snapshot(len: usize, min: i32, max: i32, rng: &mut impl Rng) -> ArraySnapshot {
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        values.push(rng.gen_range(min..=max));
    }
    ArraySnapshot::new(values)
}

/// Random snapshot using the configured defaults: `default_array_len` values
/// (capped at `max_array_len`) drawn from `min_value..=max_value`.
pub fn random_from_config(config: &Config, rng: &mut impl Rng) -> ArraySnapshot {
    let len = config.default_array_len.min(config.max_array_len);
    random_snapshot(len, config.min_value, config.max_value, rng)
}
